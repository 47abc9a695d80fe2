use ratatui::{
    Frame,
    prelude::{Position, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
};

use super::text_width;
use crate::state::AppState;

/// What: Render the search input while the search bar is open.
///
/// Inputs:
/// - `f`: Frame to render into
/// - `app`: Application state
/// - `area`: Three-line area between the filters and the table
///
/// Details:
/// - Shows the raw input; the table follows after the debounce delay.
/// - Places the terminal cursor at the end of the input while focused.
pub fn render_search(f: &mut Frame, app: &AppState, area: Rect) {
    let th = *app.theme.palette();
    let focused = app.search.is_focused();

    let input_line = Line::from(vec![
        Span::styled(
            "> ",
            Style::default().fg(if focused { th.sapphire } else { th.overlay1 }),
        ),
        Span::styled(
            app.search.value().to_string(),
            Style::default().fg(if focused { th.text } else { th.subtext0 }),
        ),
    ]);
    let title = if focused {
        " Zoeken (Esc sluit) "
    } else {
        " Zoeken "
    };
    let block = Block::default()
        .title(Span::styled(
            title,
            Style::default().fg(if focused { th.mauve } else { th.overlay1 }),
        ))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(if focused { th.mauve } else { th.surface1 }));
    let inner = block.inner(area);
    let input = Paragraph::new(input_line)
        .style(Style::default().bg(th.base))
        .block(block);
    f.render_widget(input, area);

    if focused && inner.height > 0 {
        let x = inner
            .x
            .saturating_add(2)
            .saturating_add(text_width(app.search.value()))
            .min(inner.x.saturating_add(inner.width.saturating_sub(1)));
        f.set_cursor_position(Position::new(x, inner.y));
    }
}
