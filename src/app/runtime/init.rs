use std::path::{Path, PathBuf};

use crate::sources::{self, SearchIndex, Snapshot, SourceError};
use crate::state::{AppState, AppTheme};
use crate::theme::{
    FilePreferenceStore, MemoryPreferenceStore, PreferenceStore, Settings, SystemAmbient,
    ThemeController, ThemePreference,
};

/// What: Decide which snapshot file to show.
///
/// Inputs:
/// - `settings`: Effective settings (CLI flags already applied)
///
/// Output:
/// - `Ok(Some(path))` for an explicit or discovered file, `Ok(None)` when the
///   snapshot directory holds no snapshot.
///
/// Details:
/// - An explicit `snapshot_path` wins over discovery in `snapshot_dir`.
pub fn resolve_snapshot_path(settings: &Settings) -> Result<Option<PathBuf>, SourceError> {
    if let Some(path) = &settings.snapshot_path {
        return Ok(Some(path.clone()));
    }
    sources::latest_snapshot(&settings.snapshot_dir)
}

/// What: Load the snapshot, degrading to an empty table with a status message.
///
/// Output:
/// - The snapshot and an optional status message for the footer.
fn load_rows(settings: &Settings) -> (Snapshot, Option<String>) {
    let path = match resolve_snapshot_path(settings) {
        Ok(Some(path)) => path,
        Ok(None) => {
            tracing::warn!(dir = %settings.snapshot_dir.display(), "no snapshot found");
            return (
                Snapshot::default(),
                Some(format!(
                    "Geen snapshot gevonden in {}",
                    settings.snapshot_dir.display()
                )),
            );
        }
        Err(e) => {
            tracing::warn!(error = %e, "snapshot directory unreadable");
            return (Snapshot::default(), Some(format!("Snapshot niet geladen: {e}")));
        }
    };
    match sources::load_snapshot(&path) {
        Ok(snapshot) => {
            let msg = format!("{} aandelen geladen", snapshot.rows.len());
            (snapshot, Some(msg))
        }
        Err(e) => {
            tracing::warn!(path = %path.display(), error = %e, "failed to load snapshot");
            (Snapshot::default(), Some(format!("Snapshot niet geladen: {e}")))
        }
    }
}

/// What: Build the theme controller.
///
/// Inputs:
/// - `headless`: Use an in-memory store so test runs never touch the user's config
/// - `ambient`: Preference detected at startup
fn build_theme(headless: bool, ambient: Option<ThemePreference>) -> AppTheme {
    let store: Box<dyn PreferenceStore + Send> = if headless {
        Box::new(MemoryPreferenceStore::default())
    } else {
        Box::new(FilePreferenceStore::at_default_location())
    };
    ThemeController::new(store, ambient)
}

/// What: Detect the ambient preference at startup.
///
/// Details:
/// - Headless runs skip detection; the terminal query would block on a missing TTY.
pub fn startup_ambient(settings: &Settings, headless: bool) -> Option<ThemePreference> {
    if headless {
        return None;
    }
    let ambient = SystemAmbient.startup(settings.query_terminal_background);
    tracing::debug!(ambient = ?ambient, "startup ambient preference");
    ambient
}

/// What: Build the initial application state.
///
/// Inputs:
/// - `settings`: Effective settings
/// - `ambient`: Preference detected at startup
/// - `headless`: Whether the run has no terminal
///
/// Output:
/// - Ready state; a missing or broken snapshot yields an empty table and a status message.
pub fn initialize_app_state(
    settings: &Settings,
    ambient: Option<ThemePreference>,
    headless: bool,
) -> AppState {
    let (snapshot, status) = load_rows(settings);
    let search_index = load_search_index(&settings.search_index_path);
    let theme = build_theme(headless, ambient);
    let mut app = AppState::new(snapshot, sources::column_headers(), theme, search_index);
    if let Some(msg) = status {
        app.set_status(msg);
    }
    app
}

/// Search index, empty when missing or malformed.
fn load_search_index(path: &Path) -> SearchIndex {
    let index = SearchIndex::load_or_empty(path);
    tracing::debug!(path = %path.display(), entries = index.len(), "search index");
    index
}
