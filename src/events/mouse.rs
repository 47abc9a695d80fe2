use crossterm::event::{MouseButton, MouseEvent, MouseEventKind};

use crate::logic::actions;
use crate::logic::menu::PointerTarget;
use crate::logic::selection::{move_sel, select_at};
use crate::state::AppState;

/// What: Handle a single mouse event using the rectangles of the last render.
///
/// Inputs:
/// - `m`: Mouse event
/// - `app`: Application state
///
/// Output:
/// - `true` when a click on the quit link requests exit.
///
/// Details:
/// - Any press first goes through the menu's pointer rule: outside both the
///   trigger and the panel closes the menu, and the click still reaches its target.
/// - Wheel scrolling moves the selection unless the menu holds the scroll lock.
pub fn handle_mouse_event(m: MouseEvent, app: &mut AppState) -> bool {
    let (mx, my) = (m.column, m.row);
    match m.kind {
        MouseEventKind::ScrollUp => {
            move_sel(app, -1);
            false
        }
        MouseEventKind::ScrollDown => {
            move_sel(app, 1);
            false
        }
        MouseEventKind::Down(MouseButton::Left) => handle_left_click(app, mx, my),
        _ => false,
    }
}

/// Where a press landed relative to the menu.
fn pointer_target(app: &AppState, mx: u16, my: u16) -> PointerTarget {
    if AppState::hit(app.menu_button_rect, mx, my) {
        PointerTarget::Trigger
    } else if app.menu.is_open() && AppState::hit(app.menu_panel_rect, mx, my) {
        PointerTarget::Panel
    } else {
        PointerTarget::Outside
    }
}

/// Left button press at `(mx, my)`.
fn handle_left_click(app: &mut AppState, mx: u16, my: u16) -> bool {
    if app.help_visible {
        app.help_visible = false;
        return false;
    }

    let target = pointer_target(app, mx, my);
    app.menu.on_pointer(target);
    match target {
        PointerTarget::Trigger => {
            app.menu_cursor = 0;
            app.menu.toggle();
            return false;
        }
        PointerTarget::Panel => {
            let link = app
                .menu_link_rects
                .iter()
                .find(|(_, r)| AppState::hit(Some(*r), mx, my))
                .map(|(link, _)| *link);
            return link.is_some_and(|l| actions::activate_link(app, l));
        }
        PointerTarget::Outside => {}
    }

    if AppState::hit(app.theme_button_rect, mx, my) {
        actions::toggle_theme(app);
        return false;
    }
    if AppState::hit(app.search_button_rect, mx, my) {
        actions::toggle_search(app);
        return false;
    }
    if let Some(&(category, _)) = app
        .filter_rects
        .iter()
        .find(|(_, r)| AppState::hit(Some(*r), mx, my))
    {
        actions::activate_filter(app, category);
        return false;
    }
    if let Some(&(column, _)) = app
        .header_rects
        .iter()
        .find(|(_, r)| AppState::hit(Some(*r), mx, my))
    {
        actions::sort_column(app, column);
        return false;
    }
    if let Some((_, by, _, _)) = app.table_body_rect
        && AppState::hit(app.table_body_rect, mx, my)
    {
        let pos = app.table_state.offset() + usize::from(my - by);
        select_at(app, pos);
        app.search.blur();
    }
    false
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::events::test_support::app;
    use crate::logic::menu::NavLink;
    use crate::state::FilterCategory;
    use crossterm::event::KeyModifiers;

    fn click(x: u16, y: u16) -> MouseEvent {
        MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column: x,
            row: y,
            modifiers: KeyModifiers::empty(),
        }
    }

    fn scroll_down() -> MouseEvent {
        MouseEvent {
            kind: MouseEventKind::ScrollDown,
            column: 0,
            row: 0,
            modifiers: KeyModifiers::empty(),
        }
    }

    #[test]
    /// What: Trigger toggles, outside click closes, panel click keeps the menu
    fn menu_pointer_rules() {
        let mut app = app();
        app.menu_button_rect = Some((0, 0, 4, 1));
        app.menu_panel_rect = Some((0, 1, 12, 5));
        app.menu_link_rects = vec![(NavLink::Help, (1, 4, 10, 1))];

        handle_mouse_event(click(1, 0), &mut app);
        assert!(app.menu.is_open());
        handle_mouse_event(click(5, 2), &mut app);
        assert!(app.menu.is_open());
        handle_mouse_event(click(40, 20), &mut app);
        assert!(!app.menu.is_open());

        handle_mouse_event(click(1, 0), &mut app);
        handle_mouse_event(click(2, 4), &mut app);
        assert!(!app.menu.is_open());
        assert!(app.help_visible);
    }

    #[test]
    /// What: Wheel scrolling is ignored while the menu is open
    fn wheel_respects_scroll_lock() {
        let mut app = app();
        app.menu.toggle();
        handle_mouse_event(scroll_down(), &mut app);
        assert_eq!(app.selected.as_deref(), Some("ASML.AS"));
        app.menu.close();
        handle_mouse_event(scroll_down(), &mut app);
        assert_eq!(app.selected.as_deref(), Some("SHELL.AS"));
    }

    #[test]
    /// What: Filter chips, headers and table rows respond to clicks
    fn clicks_reach_controls() {
        let mut app = app();
        app.filter_rects = vec![(FilterCategory::Sell, (10, 2, 8, 1))];
        app.header_rects = vec![(2, (20, 4, 10, 1))];
        app.table_body_rect = Some((0, 5, 80, 10));

        handle_mouse_event(click(12, 2), &mut app);
        assert_eq!(app.filter.active(), FilterCategory::Sell);
        assert_eq!(app.rows.visible_count(), 1);

        handle_mouse_event(click(21, 4), &mut app);
        assert_eq!(app.sorter.active_column(), Some(2));

        app.filter.activate(FilterCategory::All, &mut app.rows);
        handle_mouse_event(click(3, 6), &mut app);
        assert_eq!(app.table_state.selected(), Some(1));
    }
}
