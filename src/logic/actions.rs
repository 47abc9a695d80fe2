//! User-level actions shared by keyboard and mouse handling.
//!
//! Each action drives one controller and then brings the selection and the
//! status line in line with the result.

use crate::logic::menu::NavLink;
use crate::logic::selection::{jump_to_top, reconcile_selection};
use crate::state::{AppState, FilterCategory};
use crate::theme::ThemePreference;

/// Flip the theme and report it in the status line.
pub fn toggle_theme(app: &mut AppState) {
    let next = app.theme.toggle();
    app.set_status(match next {
        ThemePreference::Light => "Licht thema",
        ThemePreference::Dark => "Donker thema",
    });
}

/// What: Apply an ambient preference change delivered by the watcher.
///
/// Output:
/// - `true` when the theme changed.
pub fn ambient_changed(app: &mut AppState, pref: ThemePreference) -> bool {
    let before = app.theme.current_theme();
    app.theme.on_ambient_change(pref) && app.theme.current_theme() != before
}

/// Activate one filter button.
pub fn activate_filter(app: &mut AppState, category: FilterCategory) {
    app.filter.activate(category, &mut app.rows);
    reconcile_selection(app);
    report_visible(app);
}

/// Activate the next filter button.
pub fn cycle_filter(app: &mut AppState) {
    app.filter.cycle(&mut app.rows);
    reconcile_selection(app);
    report_visible(app);
}

/// What: Sort by a column header.
///
/// Output:
/// - `true` when the rows were reordered.
pub fn sort_column(app: &mut AppState, column: usize) -> bool {
    if !app.sorter.activate(column, &mut app.rows) {
        return false;
    }
    app.header_cursor = column;
    reconcile_selection(app);
    true
}

/// Toggle the search bar; hiding it keeps the current query applied.
pub fn toggle_search(app: &mut AppState) {
    app.search.toggle();
}

/// Close the search bar and drop the search from the rows.
pub fn close_search(app: &mut AppState) {
    app.search.close(&mut app.rows);
    reconcile_selection(app);
}

/// What: Apply a debounced query.
///
/// Inputs:
/// - `query`: Input value captured when the quiet period started
///
/// Output:
/// - `false` when the query is stale (input changed since), which is ignored.
///
/// Details:
/// - A bar hidden with the toggle still holds its text, so the value applies.
///   Closing clears the input, which makes any pending value stale.
pub fn apply_search(app: &mut AppState, query: &str) -> bool {
    if app.search.value() != query {
        tracing::trace!(query = %query, "stale search ignored");
        return false;
    }
    app.search.on_input(query, &mut app.rows);
    reconcile_selection(app);
    report_visible(app);
    true
}

/// What: Perform a navigation link after the menu closed.
///
/// Output:
/// - `true` when the application should exit.
pub fn activate_link(app: &mut AppState, link: NavLink) -> bool {
    match app.menu.on_link_activated(link) {
        NavLink::Market => {
            jump_to_top(app);
            false
        }
        NavLink::Search => {
            app.search.open();
            false
        }
        NavLink::Theme => {
            toggle_theme(app);
            false
        }
        NavLink::Help => {
            app.help_visible = true;
            false
        }
        NavLink::Quit => true,
    }
}

/// Status line with the number of visible rows.
fn report_visible(app: &mut AppState) {
    let shown = app.rows.visible_count();
    let total = app.rows.len();
    app.set_status(format!("{shown} van {total} aandelen"));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sources::{SearchIndex, Snapshot};
    use crate::state::{ColumnHeader, Signal, StockRow};
    use crate::theme::{MemoryPreferenceStore, PreferenceStore, ThemeController};

    fn app() -> AppState {
        let mk = |t: &str, sector: &str, s: Signal, price: &str| {
            StockRow::new(t, "", sector, s, vec![t.to_string(), price.to_string()])
        };
        let snapshot = Snapshot {
            date: None,
            rows: vec![
                mk("ASML", "Tech", Signal::Buy, "€600.00"),
                mk("SHELL", "Energie", Signal::Sell, "€30.00"),
                mk("BESI", "Tech", Signal::Neutral, "€120.00"),
            ],
            records: vec![],
        };
        let theme = ThemeController::new(
            Box::new(MemoryPreferenceStore::default()) as Box<dyn PreferenceStore + Send>,
            None,
        );
        AppState::new(
            snapshot,
            vec![ColumnHeader::sortable("Aandeel"), ColumnHeader::sortable("Prijs")],
            theme,
            SearchIndex::default(),
        )
    }

    #[test]
    /// What: A stale debounced query is ignored, a current one is applied
    fn debounced_query_staleness() {
        let mut app = app();
        assert!(!apply_search(&mut app, "tech"));
        app.search.open();
        app.search.push_char('t');
        assert!(!apply_search(&mut app, "te"));
        app.search.push_char('e');
        assert!(apply_search(&mut app, "te"));
        assert_eq!(app.rows.visible_count(), 2);
        close_search(&mut app);
        assert_eq!(app.rows.visible_count(), 3);
        assert!(!apply_search(&mut app, "te"));
        assert_eq!(app.rows.visible_count(), 3);
    }

    #[test]
    /// What: Hiding the bar before the quiet period ends still filters the rows
    ///
    /// - Input: Type "ener", hide with the toggle, debounced "ener" arrives, reopen
    /// - Output: The value applies; the reopened bar and the table agree
    fn hidden_bar_applies_pending_query() {
        let mut app = app();
        toggle_search(&mut app);
        for c in "ener".chars() {
            app.search.push_char(c);
        }
        toggle_search(&mut app);
        assert!(!app.search.is_open());
        assert!(apply_search(&mut app, "ener"));
        toggle_search(&mut app);
        assert_eq!(app.search.value(), "ener");
        assert_eq!(app.rows.query(), Some("ener"));
        assert_eq!(app.rows.visible_indices(), vec![1]);
    }

    #[test]
    /// What: Filter and search combine; selection stays on a visible row
    fn filter_and_search_combine() {
        let mut app = app();
        app.search.open();
        app.search.push_char('t');
        apply_search(&mut app, "t");
        activate_filter(&mut app, FilterCategory::Neutral);
        assert_eq!(app.rows.visible_indices(), vec![2]);
        assert_eq!(app.selected.as_deref(), Some("BESI"));
        assert_eq!(app.status.as_deref(), Some("1 van 3 aandelen"));
    }

    #[test]
    /// What: Sorting keeps the selected ticker and moves the header cursor
    fn sort_keeps_selection() {
        let mut app = app();
        assert!(sort_column(&mut app, 1));
        assert_eq!(app.header_cursor, 1);
        assert_eq!(app.selected.as_deref(), Some("ASML"));
        assert_eq!(app.table_state.selected(), Some(2));
        assert!(!sort_column(&mut app, 9));
    }

    #[test]
    /// What: Links close the menu and perform their action
    fn links_close_menu() {
        let mut app = app();
        app.menu.toggle();
        assert!(!activate_link(&mut app, NavLink::Theme));
        assert!(!app.menu.is_open());
        assert_eq!(app.theme.current_theme(), ThemePreference::Dark);
        assert!(!ambient_changed(&mut app, ThemePreference::Light));
        app.menu.toggle();
        assert!(activate_link(&mut app, NavLink::Quit));
        assert!(!app.menu.is_open());
    }
}
