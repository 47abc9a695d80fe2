//! Ambient light/dark preference of the surrounding desktop or terminal.

use std::process::Command;
use std::sync::{Arc, Mutex, PoisonError};

use super::types::ThemePreference;

/// Source of the ambient preference.
///
/// Implementations must be cheap enough to be polled every few seconds.
pub trait AmbientProbe {
    /// Current ambient preference, or `None` when it cannot be determined.
    fn probe(&self) -> Option<ThemePreference>;
}

/// Probe backed by the desktop color-scheme setting and `COLORFGBG`.
#[derive(Clone, Copy, Debug, Default)]
pub struct SystemAmbient;

impl SystemAmbient {
    /// What: Ambient preference at startup.
    ///
    /// Inputs:
    /// - `query_terminal`: Whether the terminal may be asked for its background color
    ///
    /// Output:
    /// - First answer from desktop setting, terminal background, then `COLORFGBG`.
    ///
    /// Details:
    /// - The terminal query touches stdin and must run before the event thread starts.
    #[must_use]
    pub fn startup(self, query_terminal: bool) -> Option<ThemePreference> {
        desktop_preference()
            .or_else(|| {
                if query_terminal {
                    super::terminal_query::query_background_preference()
                } else {
                    None
                }
            })
            .or_else(colorfgbg_preference)
    }
}

impl AmbientProbe for SystemAmbient {
    fn probe(&self) -> Option<ThemePreference> {
        desktop_preference().or_else(colorfgbg_preference)
    }
}

/// Probe returning a value set by the caller; used in tests and headless runs.
#[derive(Clone, Debug, Default)]
pub struct FixedAmbient {
    /// Shared so a test can change it while a watcher polls.
    value: Arc<Mutex<Option<ThemePreference>>>,
}

impl FixedAmbient {
    /// Probe answering `value`.
    #[must_use]
    pub fn new(value: Option<ThemePreference>) -> Self {
        Self {
            value: Arc::new(Mutex::new(value)),
        }
    }

    /// Change the answer for every clone of this probe.
    pub fn set(&self, value: Option<ThemePreference>) {
        *self.value.lock().unwrap_or_else(PoisonError::into_inner) = value;
    }
}

impl AmbientProbe for FixedAmbient {
    fn probe(&self) -> Option<ThemePreference> {
        *self.value.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

/// Desktop-level color-scheme preference.
#[cfg(not(target_os = "macos"))]
fn desktop_preference() -> Option<ThemePreference> {
    let gsettings = which::which("gsettings").ok()?;
    let output = Command::new(gsettings)
        .args(["get", "org.gnome.desktop.interface", "color-scheme"])
        .output()
        .ok()?;
    if !output.status.success() {
        return None;
    }
    parse_gnome_color_scheme(&String::from_utf8_lossy(&output.stdout))
}

/// Desktop-level color-scheme preference.
#[cfg(target_os = "macos")]
fn desktop_preference() -> Option<ThemePreference> {
    let defaults = which::which("defaults").ok()?;
    let output = Command::new(defaults)
        .args(["read", "-g", "AppleInterfaceStyle"])
        .output()
        .ok()?;
    // The key is absent in light mode, which makes `defaults` exit non-zero.
    if output.status.success() && String::from_utf8_lossy(&output.stdout).trim() == "Dark" {
        Some(ThemePreference::Dark)
    } else {
        Some(ThemePreference::Light)
    }
}

/// `COLORFGBG` as exported by rxvt, Konsole and friends.
fn colorfgbg_preference() -> Option<ThemePreference> {
    std::env::var("COLORFGBG")
        .ok()
        .and_then(|v| parse_colorfgbg(&v))
}

/// What: Interpret the output of `gsettings get org.gnome.desktop.interface color-scheme`.
///
/// Inputs:
/// - `raw`: Output such as `'prefer-dark'\n`
///
/// Output:
/// - `Dark` for `prefer-dark`, `Light` for `prefer-light` and `default`, otherwise `None`.
#[cfg_attr(target_os = "macos", allow(dead_code))]
fn parse_gnome_color_scheme(raw: &str) -> Option<ThemePreference> {
    match raw.trim().trim_matches('\'') {
        "prefer-dark" => Some(ThemePreference::Dark),
        "prefer-light" | "default" => Some(ThemePreference::Light),
        _ => None,
    }
}

/// What: Interpret `COLORFGBG` (`fg;bg` or `fg;default;bg`).
///
/// Output:
/// - `Dark` when the background index is 0-6 or 8, `Light` for other indices,
///   `None` when the last field is not a number.
fn parse_colorfgbg(raw: &str) -> Option<ThemePreference> {
    let bg: u8 = raw.rsplit(';').next()?.trim().parse().ok()?;
    if bg <= 6 || bg == 8 {
        Some(ThemePreference::Dark)
    } else {
        Some(ThemePreference::Light)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    /// What: gsettings output variants map onto preferences
    fn gnome_color_scheme_values() {
        assert_eq!(parse_gnome_color_scheme("'prefer-dark'\n"), Some(ThemePreference::Dark));
        assert_eq!(parse_gnome_color_scheme("'prefer-light'"), Some(ThemePreference::Light));
        assert_eq!(parse_gnome_color_scheme("'default'"), Some(ThemePreference::Light));
        assert_eq!(parse_gnome_color_scheme("No such key"), None);
    }

    #[test]
    /// What: COLORFGBG background index decides light or dark
    fn colorfgbg_values() {
        assert_eq!(parse_colorfgbg("15;0"), Some(ThemePreference::Dark));
        assert_eq!(parse_colorfgbg("15;default;8"), Some(ThemePreference::Dark));
        assert_eq!(parse_colorfgbg("0;15"), Some(ThemePreference::Light));
        assert_eq!(parse_colorfgbg("0;7"), Some(ThemePreference::Light));
        assert_eq!(parse_colorfgbg("garbage"), None);
    }

    #[test]
    /// What: Clones of a fixed probe share the answer
    fn fixed_probe_is_shared() {
        let probe = FixedAmbient::new(None);
        let other = probe.clone();
        assert_eq!(other.probe(), None);
        probe.set(Some(ThemePreference::Dark));
        assert_eq!(other.probe(), Some(ThemePreference::Dark));
    }
}
