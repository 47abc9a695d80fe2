use super::palette;
use super::store::PreferenceStore;
use super::types::{Theme, ThemePreference};

/// Owns the current theme, the persisted slot and the applied palette.
///
/// Resolution order on construction: stored preference, then the ambient
/// preference, then light. Until an explicit choice exists, ambient changes
/// are followed.
#[derive(Debug)]
pub struct ThemeController<S> {
    /// Persisted slot.
    store: S,
    /// Theme currently in effect.
    current: ThemePreference,
    /// Palette applied for `current`; the only presentation side effect.
    applied: Theme,
    /// Set once `toggle` ran in this session, even if persisting failed.
    explicit: bool,
}

impl<S: PreferenceStore> ThemeController<S> {
    /// What: Resolve and apply the initial theme.
    ///
    /// Inputs:
    /// - `store`: Preference slot
    /// - `ambient`: Ambient preference at startup, when one could be determined
    ///
    /// Output:
    /// - Controller with the resolved theme applied.
    pub fn new(store: S, ambient: Option<ThemePreference>) -> Self {
        let stored = store.load();
        let current = stored.or(ambient).unwrap_or(ThemePreference::Light);
        tracing::info!(
            theme = %current,
            stored = stored.map(ThemePreference::as_str),
            ambient = ambient.map(ThemePreference::as_str),
            "theme resolved"
        );
        Self {
            store,
            current,
            applied: palette::for_preference(current),
            explicit: false,
        }
    }

    /// Theme currently in effect.
    #[must_use]
    pub const fn current_theme(&self) -> ThemePreference {
        self.current
    }

    /// Palette to render with.
    #[must_use]
    pub const fn palette(&self) -> &Theme {
        &self.applied
    }

    /// Whether an explicit choice overrides the ambient preference.
    #[must_use]
    pub fn has_explicit_preference(&self) -> bool {
        self.explicit || self.store.load().is_some()
    }

    /// What: Flip the theme, apply it and persist it as the explicit choice.
    ///
    /// Output:
    /// - The new theme.
    ///
    /// Details:
    /// - A failed write is logged; the theme still flips for this session and
    ///   ambient changes stop being followed.
    pub fn toggle(&mut self) -> ThemePreference {
        let next = self.current.flipped();
        self.apply(next);
        self.explicit = true;
        if let Err(e) = self.store.save(next) {
            tracing::warn!(error = %e, theme = %next, "failed to persist theme preference");
        } else {
            tracing::info!(theme = %next, "theme preference saved");
        }
        next
    }

    /// What: React to a change of the ambient preference.
    ///
    /// Inputs:
    /// - `ambient`: New ambient preference
    ///
    /// Output:
    /// - `true` when the change was applied; `false` when an explicit choice wins.
    pub fn on_ambient_change(&mut self, ambient: ThemePreference) -> bool {
        if self.has_explicit_preference() {
            tracing::debug!(ambient = %ambient, "ambient change ignored: explicit preference");
            return false;
        }
        self.apply(ambient);
        tracing::info!(theme = %ambient, "theme follows ambient preference");
        true
    }

    /// Set the theme and its palette.
    fn apply(&mut self, pref: ThemePreference) {
        self.current = pref;
        self.applied = palette::for_preference(pref);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::theme::store::MemoryPreferenceStore;

    const ALL: [Option<ThemePreference>; 3] =
        [None, Some(ThemePreference::Light), Some(ThemePreference::Dark)];

    #[test]
    /// What: A stored preference wins over any ambient preference
    fn stored_preference_wins() {
        for stored in [ThemePreference::Light, ThemePreference::Dark] {
            for ambient in ALL {
                let c = ThemeController::new(MemoryPreferenceStore::new(Some(stored)), ambient);
                assert_eq!(c.current_theme(), stored);
            }
        }
    }

    #[test]
    /// What: Without a stored preference the ambient one (or light) is used and tracked
    fn ambient_is_followed_until_toggle() {
        let mut c = ThemeController::new(MemoryPreferenceStore::default(), Some(ThemePreference::Dark));
        assert_eq!(c.current_theme(), ThemePreference::Dark);
        assert_eq!(*c.palette(), palette::dark());

        assert!(c.on_ambient_change(ThemePreference::Light));
        assert_eq!(c.current_theme(), ThemePreference::Light);

        assert_eq!(c.toggle(), ThemePreference::Dark);
        assert!(c.has_explicit_preference());
        assert!(!c.on_ambient_change(ThemePreference::Light));
        assert_eq!(c.current_theme(), ThemePreference::Dark);

        let fallback = ThemeController::new(MemoryPreferenceStore::default(), None);
        assert_eq!(fallback.current_theme(), ThemePreference::Light);
    }

    #[test]
    /// What: Toggle persists the new value into the slot
    fn toggle_persists() {
        let mut c = ThemeController::new(MemoryPreferenceStore::default(), None);
        c.toggle();
        assert_eq!(c.store.load(), Some(ThemePreference::Dark));
        c.toggle();
        assert_eq!(c.store.load(), Some(ThemePreference::Light));
        assert_eq!(*c.palette(), palette::light());
    }

    /// Store whose writes always fail.
    #[derive(Debug)]
    struct ReadOnlyStore;

    impl PreferenceStore for ReadOnlyStore {
        fn load(&self) -> Option<ThemePreference> {
            None
        }

        fn save(&mut self, _pref: ThemePreference) -> std::io::Result<()> {
            Err(std::io::Error::other("read-only"))
        }
    }

    #[test]
    /// What: A failed write still flips the theme and stops ambient tracking
    fn failed_persist_still_toggles() {
        let mut c = ThemeController::new(ReadOnlyStore, Some(ThemePreference::Light));
        assert_eq!(c.toggle(), ThemePreference::Dark);
        assert!(!c.on_ambient_change(ThemePreference::Light));
        assert_eq!(c.current_theme(), ThemePreference::Dark);
    }
}
