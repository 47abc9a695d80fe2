use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use tokio::sync::mpsc;

use crate::logic::actions;
use crate::logic::menu::NavLink;
use crate::logic::selection::{jump_to_top, move_sel};
use crate::state::{AppState, FilterCategory};

/// Rows moved by PageUp/PageDown.
const PAGE_STEP: isize = 10;

/// What: Handle one key press.
///
/// Inputs:
/// - `ke`: Key event
/// - `app`: Application state
/// - `query_tx`: Receives the search input after each edit
///
/// Output:
/// - `true` when the application should exit.
///
/// Details:
/// - Layers, first match wins: Ctrl+C, help overlay, Escape, focused search
///   input, open menu panel, global shortcuts.
pub fn handle_key_event(
    ke: KeyEvent,
    app: &mut AppState,
    query_tx: &mpsc::UnboundedSender<String>,
) -> bool {
    if ke.kind != KeyEventKind::Press {
        return false;
    }
    if ke.modifiers.contains(KeyModifiers::CONTROL) && matches!(ke.code, KeyCode::Char('c')) {
        return true;
    }

    if app.help_visible {
        if matches!(ke.code, KeyCode::Esc | KeyCode::Enter | KeyCode::Char('?' | 'q')) {
            app.help_visible = false;
        }
        return false;
    }

    if ke.code == KeyCode::Esc {
        // Escape closes search from anywhere, and the menu with it.
        if app.search.is_open() {
            actions::close_search(app);
        }
        app.menu.close();
        return false;
    }

    if app.search.is_focused() {
        handle_search_input(ke, app, query_tx);
        return false;
    }

    if app.menu.is_open() {
        return handle_menu_keys(ke, app);
    }

    handle_global_keys(ke, app)
}

/// Editing keys while the search input has focus.
fn handle_search_input(
    ke: KeyEvent,
    app: &mut AppState,
    query_tx: &mpsc::UnboundedSender<String>,
) {
    match ke.code {
        KeyCode::Char(ch) if !ke.modifiers.contains(KeyModifiers::CONTROL) => {
            app.search.push_char(ch);
            send_query(app, query_tx);
        }
        KeyCode::Backspace => {
            app.search.pop_char();
            send_query(app, query_tx);
        }
        KeyCode::Enter | KeyCode::Tab | KeyCode::Down => app.search.blur(),
        _ => {}
    }
}

/// Hand the current input to the debouncer.
fn send_query(app: &AppState, query_tx: &mpsc::UnboundedSender<String>) {
    if query_tx.send(app.search.value().to_string()).is_err() {
        tracing::debug!("search channel closed");
    }
}

/// Keys while the navigation panel is open; the table stays scroll-locked.
fn handle_menu_keys(ke: KeyEvent, app: &mut AppState) -> bool {
    let links = NavLink::ALL;
    match ke.code {
        KeyCode::Up | KeyCode::Char('k') => {
            app.menu_cursor = app.menu_cursor.saturating_sub(1);
        }
        KeyCode::Down | KeyCode::Char('j') => {
            app.menu_cursor = (app.menu_cursor + 1).min(links.len() - 1);
        }
        KeyCode::Enter | KeyCode::Char(' ') => {
            if let Some(&link) = links.get(app.menu_cursor) {
                return actions::activate_link(app, link);
            }
        }
        KeyCode::Char('m') => {
            app.menu.toggle();
        }
        KeyCode::Char('q') => return true,
        _ => {}
    }
    false
}

/// Shortcuts when neither the search input nor the menu has the keyboard.
fn handle_global_keys(ke: KeyEvent, app: &mut AppState) -> bool {
    let columns = app.sorter.headers().len();
    match ke.code {
        KeyCode::Char('q') => return true,
        KeyCode::Char('/') => actions::toggle_search(app),
        KeyCode::Char('i') | KeyCode::Tab => app.search.focus(),
        KeyCode::Char('t') => actions::toggle_theme(app),
        KeyCode::Char('m') => {
            app.menu_cursor = 0;
            app.menu.toggle();
        }
        KeyCode::Char('f') => actions::cycle_filter(app),
        KeyCode::Char(c @ '1'..='4') => {
            let idx = (c as usize) - ('1' as usize);
            if let Some(&category) = FilterCategory::BUTTONS.get(idx) {
                actions::activate_filter(app, category);
            }
        }
        KeyCode::Char('?') => app.help_visible = true,
        KeyCode::Left | KeyCode::Char('h') => {
            app.header_cursor = app.header_cursor.saturating_sub(1);
        }
        KeyCode::Right | KeyCode::Char('l') => {
            if columns > 0 {
                app.header_cursor = (app.header_cursor + 1).min(columns - 1);
            }
        }
        KeyCode::Enter | KeyCode::Char('s' | ' ') => {
            actions::sort_column(app, app.header_cursor);
        }
        KeyCode::Up | KeyCode::Char('k') => move_sel(app, -1),
        KeyCode::Down | KeyCode::Char('j') => move_sel(app, 1),
        KeyCode::PageUp => move_sel(app, -PAGE_STEP),
        KeyCode::PageDown => move_sel(app, PAGE_STEP),
        KeyCode::Home | KeyCode::Char('g') => jump_to_top(app),
        KeyCode::End | KeyCode::Char('G') => move_sel(app, isize::MAX),
        _ => {}
    }
    false
}
