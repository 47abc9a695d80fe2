//! Built-in light (Catppuccin Latte) and dark (Catppuccin Mocha) palettes.

use ratatui::style::Color;

use super::types::{Theme, ThemePreference};

/// Construct a [`Color::Rgb`] from an 8-bit RGB triplet.
const fn hex(rgb: (u8, u8, u8)) -> Color {
    Color::Rgb(rgb.0, rgb.1, rgb.2)
}

/// Dark palette.
#[must_use]
pub const fn dark() -> Theme {
    Theme {
        base: hex((0x1e, 0x1e, 0x2e)),
        mantle: hex((0x18, 0x18, 0x25)),
        crust: hex((0x11, 0x11, 0x1b)),
        surface1: hex((0x45, 0x47, 0x5a)),
        surface2: hex((0x58, 0x5b, 0x70)),
        overlay1: hex((0x7f, 0x84, 0x9c)),
        text: hex((0xcd, 0xd6, 0xf4)),
        subtext0: hex((0xa6, 0xad, 0xc8)),
        sapphire: hex((0x74, 0xc7, 0xec)),
        mauve: hex((0xcb, 0xa6, 0xf7)),
        green: hex((0xa6, 0xe3, 0xa1)),
        yellow: hex((0xf9, 0xe2, 0xaf)),
        red: hex((0xf3, 0x8b, 0xa8)),
    }
}

/// Light palette.
#[must_use]
pub const fn light() -> Theme {
    Theme {
        base: hex((0xef, 0xf1, 0xf5)),
        mantle: hex((0xe6, 0xe9, 0xef)),
        crust: hex((0xdc, 0xe0, 0xe8)),
        surface1: hex((0xbc, 0xc0, 0xcc)),
        surface2: hex((0xac, 0xb0, 0xbe)),
        overlay1: hex((0x8c, 0x8f, 0xa1)),
        text: hex((0x4c, 0x4f, 0x69)),
        subtext0: hex((0x6c, 0x6f, 0x85)),
        sapphire: hex((0x20, 0x9f, 0xb5)),
        mauve: hex((0x88, 0x39, 0xef)),
        green: hex((0x40, 0xa0, 0x2b)),
        yellow: hex((0xdf, 0x8e, 0x1d)),
        red: hex((0xd2, 0x0f, 0x39)),
    }
}

/// Palette for a preference.
#[must_use]
pub const fn for_preference(pref: ThemePreference) -> Theme {
    match pref {
        ThemePreference::Light => light(),
        ThemePreference::Dark => dark(),
    }
}
