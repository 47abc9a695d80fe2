use std::fmt;

use ratatui::style::Color;

/// Light or dark presentation, the only value ever persisted.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ThemePreference {
    /// Light palette.
    Light,
    /// Dark palette.
    Dark,
}

impl ThemePreference {
    /// Literal stored in the preference slot.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    /// What: Parse the stored literal.
    ///
    /// Inputs:
    /// - `s`: Slot content; surrounding whitespace is ignored, case is not
    ///
    /// Output:
    /// - `Some` for exactly `light` or `dark`; `None` for anything else.
    #[must_use]
    pub fn from_str_opt(s: &str) -> Option<Self> {
        match s.trim() {
            "light" => Some(Self::Light),
            "dark" => Some(Self::Dark),
            _ => None,
        }
    }

    /// The other preference.
    #[must_use]
    pub const fn flipped(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }
}

impl fmt::Display for ThemePreference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Application theme palette used by rendering code.
///
/// All colors are provided as [`ratatui::style::Color`] and are suitable for
/// direct use with widgets and styles.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Theme {
    /// Primary background color for the canvas.
    pub base: Color,
    /// Slightly different background layer used behind panels.
    pub mantle: Color,
    /// Deepest background shade, used for the header bar.
    pub crust: Color,
    /// Surface color for selected rows and active buttons (level 1).
    pub surface1: Color,
    /// Surface color for hover-like emphasis (level 2).
    pub surface2: Color,
    /// Muted border color.
    pub overlay1: Color,
    /// Primary foreground text color.
    pub text: Color,
    /// Secondary text for less prominent content.
    pub subtext0: Color,
    /// Accent color for interactive highlights.
    pub sapphire: Color,
    /// Accent color for headings.
    pub mauve: Color,
    /// Buy signals and positive changes.
    pub green: Color,
    /// Neutral signals and warnings.
    pub yellow: Color,
    /// Sell signals and negative changes.
    pub red: Color,
}
