/// Entries of the navigation panel.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NavLink {
    /// Jump to the top of the market table.
    Market,
    /// Open the search bar.
    Search,
    /// Switch between light and dark.
    Theme,
    /// Show the keyboard help overlay.
    Help,
    /// Leave the application.
    Quit,
}

impl NavLink {
    /// Links in panel order.
    pub const ALL: [Self; 5] = [
        Self::Market,
        Self::Search,
        Self::Theme,
        Self::Help,
        Self::Quit,
    ];

    /// Caption shown in the panel.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Market => "Markt",
            Self::Search => "Zoeken",
            Self::Theme => "Thema",
            Self::Help => "Help",
            Self::Quit => "Afsluiten",
        }
    }
}

/// Where a pointer press landed relative to the menu.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PointerTarget {
    /// The button that opens and closes the panel.
    Trigger,
    /// Inside the navigation panel.
    Panel,
    /// Anywhere else on screen.
    Outside,
}

/// Open/closed state of the navigation panel.
///
/// While open the panel holds the scroll lock: the table does not scroll.
#[derive(Clone, Copy, Debug, Default)]
pub struct NavMenuController {
    /// Whether the panel (and the trigger's active marker) is shown.
    open: bool,
}

impl NavMenuController {
    /// Closed menu.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Flip the open state; returns the new state.
    pub fn toggle(&mut self) -> bool {
        self.open = !self.open;
        tracing::debug!(open = self.open, "nav menu toggled");
        self.open
    }

    /// Close the panel; calling it on a closed panel changes nothing.
    pub fn close(&mut self) {
        self.open = false;
    }

    /// What: A link inside the panel was activated.
    ///
    /// Output:
    /// - The link, so the caller can perform its action after the panel closed.
    pub fn on_link_activated(&mut self, link: NavLink) -> NavLink {
        self.close();
        link
    }

    /// What: React to a pointer press anywhere on screen.
    ///
    /// Inputs:
    /// - `target`: Hit-test result for the press
    ///
    /// Details:
    /// - Presses outside both the trigger and the panel close the menu.
    /// - Presses on the trigger or the panel are left to their own handlers.
    pub fn on_pointer(&mut self, target: PointerTarget) {
        if target == PointerTarget::Outside {
            self.close();
        }
    }

    /// Whether the panel is shown.
    #[must_use]
    pub const fn is_open(&self) -> bool {
        self.open
    }

    /// Whether table scrolling is currently disabled.
    #[must_use]
    pub const fn scroll_locked(&self) -> bool {
        self.open
    }
}
