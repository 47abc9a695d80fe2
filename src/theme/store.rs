//! The single persisted preference slot.

use std::fmt;
use std::fs;
use std::io;
use std::path::PathBuf;

use super::types::ThemePreference;

/// One named slot holding the literal `light` or `dark`.
///
/// Absence is meaningful: it means "follow the ambient preference".
pub trait PreferenceStore: fmt::Debug {
    /// Read the stored preference, if any.
    fn load(&self) -> Option<ThemePreference>;

    /// What: Persist an explicit preference.
    ///
    /// # Errors
    /// - Returns the underlying I/O error when the slot cannot be written.
    fn save(&mut self, pref: ThemePreference) -> io::Result<()>;
}

impl<S: PreferenceStore + ?Sized> PreferenceStore for Box<S> {
    fn load(&self) -> Option<ThemePreference> {
        (**self).load()
    }

    fn save(&mut self, pref: ThemePreference) -> io::Result<()> {
        (**self).save(pref)
    }
}

/// Preference slot backed by a small file in the config directory.
#[derive(Clone, Debug)]
pub struct FilePreferenceStore {
    /// File holding the literal.
    path: PathBuf,
}

impl FilePreferenceStore {
    /// Store at an explicit path.
    #[must_use]
    pub const fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// Store at the default location (`<config_dir>/theme`).
    #[must_use]
    pub fn at_default_location() -> Self {
        Self::new(super::paths::preference_path())
    }

    /// Path of the slot file.
    #[must_use]
    pub const fn path(&self) -> &PathBuf {
        &self.path
    }
}

impl PreferenceStore for FilePreferenceStore {
    /// What: Read the slot file.
    ///
    /// Details:
    /// - A missing file means no preference.
    /// - Unreadable files and unknown content are logged and treated as no preference.
    fn load(&self) -> Option<ThemePreference> {
        match fs::read_to_string(&self.path) {
            Ok(content) => {
                let pref = ThemePreference::from_str_opt(&content);
                if pref.is_none() && !content.trim().is_empty() {
                    tracing::warn!(
                        path = %self.path.display(),
                        value = %content.trim(),
                        "ignoring unknown theme preference"
                    );
                }
                pref
            }
            Err(e) if e.kind() == io::ErrorKind::NotFound => None,
            Err(e) => {
                tracing::warn!(path = %self.path.display(), error = %e, "failed to read theme preference");
                None
            }
        }
    }

    fn save(&mut self, pref: ThemePreference) -> io::Result<()> {
        if let Some(dir) = self.path.parent() {
            fs::create_dir_all(dir)?;
        }
        fs::write(&self.path, pref.as_str())
    }
}

/// In-memory slot for tests and headless runs.
#[derive(Clone, Copy, Debug, Default)]
pub struct MemoryPreferenceStore {
    /// Stored value.
    value: Option<ThemePreference>,
}

impl MemoryPreferenceStore {
    /// Slot pre-filled with `value`.
    #[must_use]
    pub const fn new(value: Option<ThemePreference>) -> Self {
        Self { value }
    }
}

impl PreferenceStore for MemoryPreferenceStore {
    fn load(&self) -> Option<ThemePreference> {
        self.value
    }

    fn save(&mut self, pref: ThemePreference) -> io::Result<()> {
        self.value = Some(pref);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    /// What: File store round-trips the literal and treats junk as absent
    ///
    /// - Input: Missing file, saved "dark", then hand-written junk
    /// - Output: None, Some(Dark), None
    fn file_store_roundtrip_and_junk() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("nested").join("theme");
        let mut store = FilePreferenceStore::new(path.clone());
        assert_eq!(store.load(), None);
        store.save(ThemePreference::Dark).expect("save");
        assert_eq!(fs::read_to_string(&path).expect("read"), "dark");
        assert_eq!(store.load(), Some(ThemePreference::Dark));
        fs::write(&path, "solarized").expect("write");
        assert_eq!(store.load(), None);
    }

    #[test]
    /// What: Boxed stores delegate to the inner store
    fn boxed_store_delegates() {
        let mut boxed: Box<dyn PreferenceStore + Send> =
            Box::new(MemoryPreferenceStore::default());
        assert_eq!(boxed.load(), None);
        boxed.save(ThemePreference::Light).expect("save");
        assert_eq!(boxed.load(), Some(ThemePreference::Light));
    }
}
