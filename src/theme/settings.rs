use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use tracing::{debug, warn};

use super::parsing::{normalize_key, parse_bool, strip_inline_comment};

/// Default directory scanned for `snap_*.json` files.
pub const DEFAULT_SNAPSHOT_DIR: &str = "data_snapshots";
/// Default location of the search index.
pub const DEFAULT_SEARCH_INDEX_PATH: &str = "docs/search-index.json";
/// Default quiet period before a typed query is applied.
pub const DEFAULT_SEARCH_DEBOUNCE_MS: u64 = 120;
/// Default ambient polling interval; 0 disables the watcher.
pub const DEFAULT_AMBIENT_POLL_SECS: u64 = 5;

/// User settings read from `settings.conf`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Settings {
    /// Explicit snapshot file; wins over `snapshot_dir` when set.
    pub snapshot_path: Option<PathBuf>,
    /// Directory scanned for the latest snapshot.
    pub snapshot_dir: PathBuf,
    /// Search index file.
    pub search_index_path: PathBuf,
    /// Debounce window for search input in milliseconds.
    pub search_debounce_ms: u64,
    /// Ambient preference polling interval in seconds (0 = off).
    pub ambient_poll_secs: u64,
    /// Whether to ask the terminal for its background color at startup.
    pub query_terminal_background: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            snapshot_path: None,
            snapshot_dir: PathBuf::from(DEFAULT_SNAPSHOT_DIR),
            search_index_path: PathBuf::from(DEFAULT_SEARCH_INDEX_PATH),
            search_debounce_ms: DEFAULT_SEARCH_DEBOUNCE_MS,
            ambient_poll_secs: DEFAULT_AMBIENT_POLL_SECS,
            query_terminal_background: true,
        }
    }
}

impl Settings {
    /// Search debounce window.
    #[must_use]
    pub const fn search_debounce(&self) -> Duration {
        Duration::from_millis(self.search_debounce_ms)
    }

    /// Ambient polling interval, `None` when the watcher is disabled.
    #[must_use]
    pub const fn ambient_poll_interval(&self) -> Option<Duration> {
        if self.ambient_poll_secs == 0 {
            None
        } else {
            Some(Duration::from_secs(self.ambient_poll_secs))
        }
    }
}

/// What: Load settings from `settings.conf`.
///
/// Inputs:
/// - `path`: Settings file location
///
/// Output:
/// - Parsed settings; defaults when the file is missing or unreadable.
#[must_use]
pub fn load_settings(path: &Path) -> Settings {
    match fs::read_to_string(path) {
        Ok(content) => {
            debug!(path = %path.display(), "loading settings");
            parse_settings(&content)
        }
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Settings::default(),
        Err(e) => {
            warn!(path = %path.display(), error = %e, "failed to read settings, using defaults");
            Settings::default()
        }
    }
}

/// What: Parse `key = value` lines into [`Settings`].
///
/// Inputs:
/// - `content`: File content
///
/// Output:
/// - Settings with recognized keys applied over the defaults.
///
/// Details:
/// - Blank lines, `#` and `//` comment lines and lines without `=` are skipped.
/// - Unknown keys and unparsable values are logged and ignored.
#[must_use]
pub fn parse_settings(content: &str) -> Settings {
    let mut settings = Settings::default();
    for line in content.lines() {
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') || trimmed.starts_with("//") {
            continue;
        }
        let Some((raw_key, val_raw)) = trimmed.split_once('=') else {
            continue;
        };
        let key = normalize_key(raw_key);
        let val = strip_inline_comment(val_raw.trim());
        match key.as_str() {
            "snapshot_path" | "snapshot" => {
                settings.snapshot_path = (!val.is_empty()).then(|| PathBuf::from(val));
            }
            "snapshot_dir" | "data_dir" => {
                if !val.is_empty() {
                    settings.snapshot_dir = PathBuf::from(val);
                }
            }
            "search_index_path" | "search_index" => {
                if !val.is_empty() {
                    settings.search_index_path = PathBuf::from(val);
                }
            }
            "search_debounce_ms" => match val.parse::<u64>() {
                Ok(v) => settings.search_debounce_ms = v,
                Err(_) => warn!(key = %key, value = %val, "invalid number in settings"),
            },
            "ambient_poll_secs" => match val.parse::<u64>() {
                Ok(v) => settings.ambient_poll_secs = v,
                Err(_) => warn!(key = %key, value = %val, "invalid number in settings"),
            },
            "query_terminal_background" => match parse_bool(val) {
                Some(v) => settings.query_terminal_background = v,
                None => warn!(key = %key, value = %val, "invalid boolean in settings"),
            },
            _ => debug!(key = %key, "ignoring unknown settings key"),
        }
    }
    settings
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    /// What: Recognized keys override defaults; junk is ignored
    ///
    /// - Input: Mixed-case keys, comments, a bad number and an unknown key
    /// - Output: Only the valid values applied
    fn parses_known_keys() {
        let content = "\
# beurs-cowboy settings
Snapshot-Dir = /var/snaps   # nightly
search.debounce.ms = 80
ambient_poll_secs = soon
query terminal background = off
colour = purple
no equals sign here
";
        let s = parse_settings(content);
        assert_eq!(s.snapshot_dir, PathBuf::from("/var/snaps"));
        assert_eq!(s.search_debounce_ms, 80);
        assert_eq!(s.ambient_poll_secs, DEFAULT_AMBIENT_POLL_SECS);
        assert!(!s.query_terminal_background);
        assert_eq!(s.snapshot_path, None);
        assert_eq!(s.search_index_path, PathBuf::from(DEFAULT_SEARCH_INDEX_PATH));
    }

    #[test]
    /// What: Zero poll interval disables the watcher; missing file gives defaults
    fn poll_interval_and_missing_file() {
        let s = parse_settings("ambient_poll_secs = 0\nsnapshot_path = snap.json");
        assert_eq!(s.ambient_poll_interval(), None);
        assert_eq!(s.snapshot_path, Some(PathBuf::from("snap.json")));

        let dir = tempfile::tempdir().expect("tempdir");
        let loaded = load_settings(&dir.path().join("settings.conf"));
        assert_eq!(loaded, Settings::default());
        assert_eq!(loaded.ambient_poll_interval(), Some(Duration::from_secs(5)));
        assert_eq!(loaded.search_debounce(), Duration::from_millis(120));
    }
}
