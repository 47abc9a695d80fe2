use ratatui::{
    Frame,
    layout::{Constraint, Flex, Layout},
    prelude::Rect,
    style::{Color, Modifier, Style},
    text::Span,
    widgets::{Block, BorderType, Borders, Cell, HighlightSpacing, Paragraph, Row, Table},
};

use super::text_width;
use crate::sources::SIGNAL_COLUMN;
use crate::state::{AppState, Signal, StockRow};
use crate::theme::Theme;

/// Marker in front of the selected row.
const HIGHLIGHT_SYMBOL: &str = "▶ ";
/// Gap between columns.
const COLUMN_SPACING: u16 = 1;
/// Widest a column may grow before text is cut.
const MAX_COLUMN_WIDTH: u16 = 28;

/// Foreground color for a signal.
pub(crate) const fn signal_color(th: &Theme, signal: Signal) -> Color {
    match signal {
        Signal::Buy | Signal::BuyStrong => th.green,
        Signal::Sell | Signal::SellStrong => th.red,
        Signal::Neutral => th.yellow,
    }
}

/// Style for one cell: the signal column takes the signal color whatever the
/// label says, signed percentages are green or red, everything else is plain text.
fn cell_style(th: &Theme, row: &StockRow, column: usize, text: &str) -> Style {
    if column == SIGNAL_COLUMN {
        let style = Style::default().fg(signal_color(th, row.signal()));
        if matches!(row.signal(), Signal::BuyStrong | Signal::SellStrong) {
            return style.add_modifier(Modifier::BOLD);
        }
        return style;
    }
    if text.ends_with('%') {
        if text.starts_with('-') {
            return Style::default().fg(th.red);
        }
        if text.starts_with('+') {
            return Style::default().fg(th.green);
        }
    }
    Style::default().fg(th.text)
}

/// Width per column: the widest of header and visible cells, capped.
fn column_widths(app: &AppState, visible: &[&StockRow]) -> Vec<u16> {
    (0..app.sorter.headers().len())
        .map(|col| {
            let header = text_width(&app.sorter.header_label(col)).saturating_add(2);
            visible
                .iter()
                .map(|r| text_width(r.cell_text(col)))
                .fold(header, u16::max)
                .min(MAX_COLUMN_WIDTH)
        })
        .collect()
}

/// What: Render the stock table and record the header and body rectangles.
///
/// Inputs:
/// - `f`: Frame to render into
/// - `app`: Application state (uses `table_state`; records `header_rects` and `table_body_rect`)
/// - `area`: Area for the bordered table block
///
/// Details:
/// - Only visible rows are drawn, in the current row order.
/// - Header rects are computed with the same horizontal layout the table uses,
///   so a click lands on the column it visually hits.
/// - The header under the keyboard cursor is underlined.
/// - The header stays drawn and clickable when no row is visible; the body
///   then shows why it is empty.
pub fn render_table(f: &mut Frame, app: &mut AppState, area: Rect) {
    let th = *app.theme.palette();
    app.header_rects.clear();
    app.table_body_rect = None;

    let title = if app.menu.scroll_locked() {
        " Markt (menu open) "
    } else {
        " Markt "
    };
    let block = Block::default()
        .title(Span::styled(title, Style::default().fg(th.overlay1)))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(th.surface2));
    let inner = block.inner(area);

    let visible: Vec<&StockRow> = app
        .rows
        .rows()
        .iter()
        .filter(|r| !r.hidden)
        .map(|r| &r.row)
        .collect();

    let widths = column_widths(app, &visible);
    let constraints: Vec<Constraint> = widths.iter().map(|w| Constraint::Length(*w)).collect();

    let header_cells: Vec<Cell> = (0..widths.len())
        .map(|col| {
            let mut style = Style::default().fg(th.mauve).add_modifier(Modifier::BOLD);
            if col == app.header_cursor {
                style = style.add_modifier(Modifier::UNDERLINED).fg(th.sapphire);
            }
            Cell::from(Span::styled(app.sorter.header_label(col), style))
        })
        .collect();

    let rows: Vec<Row> = visible
        .iter()
        .map(|r| {
            let cells: Vec<Cell> = r
                .cells()
                .iter()
                .enumerate()
                .map(|(col, c)| {
                    let text = c.trim();
                    Cell::from(Span::styled(text.to_string(), cell_style(&th, r, col, text)))
                })
                .collect();
            Row::new(cells)
        })
        .collect();

    let table = Table::new(rows, constraints.clone())
        .header(Row::new(header_cells))
        .column_spacing(COLUMN_SPACING)
        .flex(Flex::Start)
        .style(Style::default().fg(th.text).bg(th.base))
        .row_highlight_style(Style::default().bg(th.surface1).add_modifier(Modifier::BOLD))
        .highlight_symbol(HIGHLIGHT_SYMBOL)
        .highlight_spacing(HighlightSpacing::Always)
        .block(block);

    if visible.is_empty() {
        f.render_widget(table, area);
        let msg = if app.rows.is_empty() {
            "Geen gegevens geladen"
        } else {
            "Geen aandelen gevonden"
        };
        if inner.height > 1 {
            let body = Rect::new(inner.x, inner.y + 1, inner.width, inner.height - 1);
            f.render_widget(
                Paragraph::new(Span::styled(msg, Style::default().fg(th.subtext0))),
                body,
            );
        }
    } else {
        f.render_stateful_widget(table, area, &mut app.table_state);
    }

    record_rects(app, inner, &constraints);
}

/// Header rectangles per column plus the body rectangle below the header.
fn record_rects(app: &mut AppState, inner: Rect, constraints: &[Constraint]) {
    if inner.height == 0 {
        return;
    }
    let [_, columns_area] = Layout::horizontal([
        Constraint::Length(text_width(HIGHLIGHT_SYMBOL)),
        Constraint::Fill(0),
    ])
    .areas(inner);
    let columns = Layout::horizontal(constraints.iter().copied())
        .flex(Flex::Start)
        .spacing(COLUMN_SPACING)
        .split(columns_area);
    for (col, rect) in columns.iter().enumerate() {
        if rect.width > 0 && app.sorter.is_sortable(col) {
            app.header_rects.push((col, (rect.x, inner.y, rect.width, 1)));
        }
    }
    if inner.height > 1 {
        app.table_body_rect = Some((inner.x, inner.y + 1, inner.width, inner.height - 1));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::theme::light;

    #[test]
    /// What: The signal column is colored from the row's signal, not its wording
    ///
    /// - Input: Buy row whose analyzer label differs from the built-in one
    /// - Output: Green in the signal column; the same text elsewhere stays plain
    fn signal_color_follows_column() {
        let th = light();
        let row = StockRow::new("ASML.AS", "", "Tech", Signal::Buy, vec![String::new(); 8]);
        let style = cell_style(&th, &row, SIGNAL_COLUMN, "Kopen!");
        assert_eq!(style.fg, Some(th.green));
        let strong = StockRow::new("INGA.AS", "", "Tech", Signal::SellStrong, vec![]);
        let style = cell_style(&th, &strong, SIGNAL_COLUMN, "Weg ermee");
        assert_eq!(style.fg, Some(th.red));
        assert!(style.add_modifier.contains(Modifier::BOLD));
        assert_eq!(cell_style(&th, &row, 1, "Koop").fg, Some(th.text));
    }
}
