//! Terminal rendering for the signal board.
//!
//! Every render also records the hit-test rectangles that the mouse handler
//! uses, so the layout and the click targets never drift apart.

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout},
    style::Style,
    widgets::Block,
};
use unicode_width::UnicodeWidthStr;

use crate::state::AppState;

mod footer;
mod header;
mod overlays;
mod search;
mod table;

/// Display width of `s` in terminal cells, saturating at `u16::MAX`.
pub(crate) fn text_width(s: &str) -> u16 {
    u16::try_from(UnicodeWidthStr::width(s)).unwrap_or(u16::MAX)
}

/// What: Render one full frame.
///
/// Inputs:
/// - `f`: Frame to draw into
/// - `app`: Application state; hit-test rectangles are rewritten
///
/// Details:
/// - Vertical layout: header bar, filter buttons, search bar (only while
///   open), table, details, status line.
/// - The menu panel and help overlay are drawn last, on top of everything.
pub fn ui(f: &mut Frame, app: &mut AppState) {
    let th = *app.theme.palette();
    let area = f.area();

    let bg = Block::default().style(Style::default().bg(th.base));
    f.render_widget(bg, area);

    let search_h: u16 = if app.search.is_open() { 3 } else { 0 };
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(search_h),
            Constraint::Min(3),
            Constraint::Length(4),
            Constraint::Length(1),
        ])
        .split(area);

    header::render_header(f, app, chunks[0]);
    header::render_filters(f, app, chunks[1]);
    if app.search.is_open() {
        search::render_search(f, app, chunks[2]);
    }
    table::render_table(f, app, chunks[3]);
    footer::render_details(f, app, chunks[4]);
    footer::render_status(f, app, chunks[5]);

    overlays::render_menu(f, app, area);
    overlays::render_help(f, app, area);
}
