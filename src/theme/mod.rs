//! Theme system: preference resolution, persistence, ambient detection and
//! the palettes rendering code draws with. Also owns config paths and
//! `settings.conf` loading.

/// Ambient light/dark probes.
mod ambient;
/// Theme preference state machine.
mod controller;
/// Built-in palettes.
mod palette;
/// Config value parsing helpers.
mod parsing;
/// Path resolution for config directories.
mod paths;
/// `settings.conf` loading.
mod settings;
/// Persisted preference slot.
mod store;
/// Terminal background query.
mod terminal_query;
/// Theme type definitions.
mod types;

pub use ambient::{AmbientProbe, FixedAmbient, SystemAmbient};
pub use controller::ThemeController;
pub use palette::{dark, for_preference, light};
pub use paths::{config_dir, logs_dir, preference_path, settings_path};
pub use settings::{
    DEFAULT_AMBIENT_POLL_SECS, DEFAULT_SEARCH_DEBOUNCE_MS, DEFAULT_SEARCH_INDEX_PATH,
    DEFAULT_SNAPSHOT_DIR, Settings, load_settings, parse_settings,
};
pub use store::{FilePreferenceStore, MemoryPreferenceStore, PreferenceStore};
pub use types::{Theme, ThemePreference};

#[cfg(test)]
static TEST_MUTEX: std::sync::OnceLock<std::sync::Mutex<()>> = std::sync::OnceLock::new();

#[cfg(test)]
/// What: Provide a process-wide mutex to serialize environment-mutating tests.
///
/// Output:
/// - Shared reference to a lazily-initialized `Mutex<()>`.
pub(crate) fn test_mutex() -> &'static std::sync::Mutex<()> {
    TEST_MUTEX.get_or_init(|| std::sync::Mutex::new(()))
}
