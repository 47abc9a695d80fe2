//! Terminal background query (OSC 11).
//!
//! Asks the terminal for its background color and classifies it as light or
//! dark by relative luminance. Only used once at startup, before the TUI takes
//! over stdin.

use std::io::{IsTerminal, Read, Write};
use std::time::Duration;

use super::types::ThemePreference;

/// How long to wait for the terminal to answer.
const OSC_QUERY_TIMEOUT_MS: u64 = 250;

/// Backgrounds darker than this relative luminance count as dark.
const DARK_LUMINANCE_THRESHOLD: f32 = 0.5;

/// What: Ask the terminal whether its background is light or dark.
///
/// Output:
/// - `Some(pref)` when the terminal answered with a parsable color.
/// - `None` when stdin/stdout are not a terminal, the query timed out or the
///   answer could not be parsed.
///
/// Details:
/// - Enables raw mode for the duration of the query when it is not already on.
#[must_use]
pub fn query_background_preference() -> Option<ThemePreference> {
    if !std::io::stdout().is_terminal() || !std::io::stdin().is_terminal() {
        tracing::debug!("not a terminal, skipping OSC 11 query");
        return None;
    }
    let response = query_with_raw_mode()?;
    let (r, g, b) = parse_osc_background(&response)?;
    let pref = preference_for_background(r, g, b);
    tracing::debug!(r, g, b, theme = %pref, "terminal background detected");
    Some(pref)
}

/// Send the OSC 11 query with the terminal in raw mode and collect the reply.
fn query_with_raw_mode() -> Option<String> {
    use crossterm::terminal::{disable_raw_mode, enable_raw_mode, is_raw_mode_enabled};

    let was_raw_mode = is_raw_mode_enabled().unwrap_or(false);
    if !was_raw_mode && enable_raw_mode().is_err() {
        tracing::debug!("failed to enable raw mode for OSC query");
        return None;
    }

    let result = (|| {
        let mut stdout = std::io::stdout();
        write!(stdout, "\x1b]11;?\x07").ok()?;
        stdout.flush().ok()?;
        read_with_timeout(Duration::from_millis(OSC_QUERY_TIMEOUT_MS))
    })();

    if !was_raw_mode {
        let _ = disable_raw_mode();
    }
    result
}

/// Read one chunk from stdin on a helper thread, giving up after `timeout`.
///
/// On timeout the reader thread is left detached; it only reads.
fn read_with_timeout(timeout: Duration) -> Option<String> {
    let (tx, rx) = std::sync::mpsc::channel();
    std::thread::spawn(move || {
        let mut buffer = [0u8; 128];
        if let Ok(n) = std::io::stdin().read(&mut buffer) {
            let _ = tx.send(String::from_utf8_lossy(&buffer[..n]).to_string());
        }
    });
    rx.recv_timeout(timeout).ok()
}

/// What: Extract the background color from an OSC 11 reply.
///
/// Inputs:
/// - `response`: Raw reply, e.g. `ESC ] 11 ; rgb:1e1e/1e1e/2e2e BEL`
///
/// Output:
/// - `(r, g, b)` as 8-bit components, or `None` when the reply is not understood.
///
/// Details:
/// - Accepts `rgb:` and `rgba:` (alpha ignored), 2- or 4-digit components,
///   and both BEL and `ESC \` terminators.
fn parse_osc_background(response: &str) -> Option<(u8, u8, u8)> {
    let start = response.find("]11;")?;
    let after_code = &response[start + 4..];
    let color_part = after_code
        .strip_prefix("rgb:")
        .or_else(|| after_code.strip_prefix("rgba:"))?;
    let end = color_part
        .find(['\x07', '\x1b'])
        .unwrap_or(color_part.len());
    parse_rgb_components(&color_part[..end])
}

/// Parse `RRRR/GGGG/BBBB` or `RR/GG/BB` into 8-bit components.
fn parse_rgb_components(s: &str) -> Option<(u8, u8, u8)> {
    let mut parts = s.split('/');
    let r = parse_color_component(parts.next()?)?;
    let g = parse_color_component(parts.next()?)?;
    let b = parse_color_component(parts.next()?)?;
    Some((r, g, b))
}

/// Single hex component; 4-digit values keep their high byte.
fn parse_color_component(s: &str) -> Option<u8> {
    let hex = if s.len() == 4 { s.get(0..2)? } else { s };
    u8::from_str_radix(hex, 16).ok()
}

/// Light or dark, by relative luminance of the background.
fn preference_for_background(r: u8, g: u8, b: u8) -> ThemePreference {
    if luminance(r, g, b) < DARK_LUMINANCE_THRESHOLD {
        ThemePreference::Dark
    } else {
        ThemePreference::Light
    }
}

/// Relative luminance (0.0 = black, 1.0 = white).
fn luminance(r: u8, g: u8, b: u8) -> f32 {
    let r_lin = srgb_to_linear(r);
    let g_lin = srgb_to_linear(g);
    let b_lin = srgb_to_linear(b);
    0.2126f32.mul_add(r_lin, 0.7152f32.mul_add(g_lin, 0.0722 * b_lin))
}

/// sRGB component to linear light.
fn srgb_to_linear(c: u8) -> f32 {
    let c = f32::from(c) / 255.0;
    if c <= 0.04045 {
        c / 12.92
    } else {
        ((c + 0.055) / 1.055).powf(2.4)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    /// What: Both terminator styles and both component widths parse
    fn parses_osc_background_reply() {
        assert_eq!(
            parse_osc_background("\x1b]11;rgb:1e1e/1e1e/2e2e\x07"),
            Some((0x1e, 0x1e, 0x2e))
        );
        assert_eq!(
            parse_osc_background("\x1b]11;rgba:ef/f1/f5/ff\x1b\\"),
            Some((0xef, 0xf1, 0xf5))
        );
        assert_eq!(parse_osc_background("\x1b]10;rgb:ffff/ffff/ffff\x07"), None);
        assert_eq!(parse_osc_background("\x1b]11;rgb:zz/00/00\x07"), None);
    }

    #[test]
    /// What: Luminance classifies typical dark and light backgrounds
    fn classifies_backgrounds() {
        assert!((luminance(0, 0, 0) - 0.0).abs() < 0.01);
        assert!((luminance(255, 255, 255) - 1.0).abs() < 0.01);
        assert_eq!(preference_for_background(0x1e, 0x1e, 0x2e), ThemePreference::Dark);
        assert_eq!(preference_for_background(0xef, 0xf1, 0xf5), ThemePreference::Light);
    }
}
