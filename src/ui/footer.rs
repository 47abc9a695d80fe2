use ratatui::{
    Frame,
    prelude::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
};

use super::table::signal_color;
use crate::state::AppState;
use crate::theme::{Theme, ThemePreference};
use crate::util::format::{format_currency, format_number, format_percent};

/// Key hints shown when there is no status message.
const KEY_HINTS: &str = "/ zoeken  1-4 filter  ←→ kolom  Enter sorteer  t thema  m menu  ? help  q stop";

/// Label/value pair for the details block.
fn field<'a>(th: &Theme, label: &'a str, value: String) -> [Span<'a>; 2] {
    [
        Span::styled(format!("{label} "), Style::default().fg(th.overlay1)),
        Span::styled(format!("{value}   "), Style::default().fg(th.text)),
    ]
}

/// What: Build the two detail lines for the selected ticker.
///
/// Inputs:
/// - `app`: Application state
/// - `th`: Active palette
///
/// Output:
/// - Lines describing the selection, or a single hint line when nothing is selected.
///
/// Details:
/// - The name falls back from the row, to the search index, to the ticker itself.
/// - Numbers use the Dutch formatting helpers; non-finite values are skipped.
fn detail_lines<'a>(app: &'a AppState, th: &Theme) -> Vec<Line<'a>> {
    let Some(ticker) = app.selected.as_deref() else {
        return vec![Line::from(Span::styled(
            "Geen selectie",
            Style::default().fg(th.subtext0),
        ))];
    };
    let row = app
        .rows
        .rows()
        .iter()
        .find(|r| r.row.ticker() == ticker)
        .map(|r| &r.row);
    let entry = app.search_index.lookup(ticker);
    let name = row
        .map(|r| r.name())
        .filter(|n| !n.is_empty())
        .or_else(|| entry.map(|e| e.name.as_str()).filter(|n| !n.is_empty()))
        .unwrap_or(ticker);

    let mut first = vec![
        Span::styled(
            format!("{ticker} "),
            Style::default().fg(th.mauve).add_modifier(Modifier::BOLD),
        ),
        Span::styled(format!("{name}   "), Style::default().fg(th.text)),
    ];
    if let Some(r) = row {
        first.push(Span::styled(
            format!("{}   ", r.signal().label()),
            Style::default().fg(signal_color(th, r.signal())),
        ));
        first.push(Span::styled(
            r.sector().to_string(),
            Style::default().fg(th.subtext0),
        ));
    }

    let mut second = Vec::new();
    if let Some(rec) = app.snapshot.record(ticker) {
        let measures = [
            ("Prijs", rec.price, format_currency as fn(f64) -> String),
            ("Dag", rec.change_pct, format_percent),
            ("RSI", rec.rsi, format_number),
        ];
        // Values the analyzer could not compute are left out.
        for (label, value, render) in measures {
            if value.is_finite() {
                second.extend(field(th, label, render(value)));
            }
        }
        if let Some(high) = rec.high_52w {
            second.extend(field(th, "52w hoog", format_currency(high)));
        }
        if let Some(low) = rec.low_52w {
            second.extend(field(th, "52w laag", format_currency(low)));
        }
        if let Some(setup) = rec.setup_type.as_deref().filter(|s| !s.is_empty()) {
            second.extend(field(th, "Setup", setup.to_string()));
        }
    } else if let Some(date) = app.search_index.date.as_deref() {
        second.extend(field(th, "Index", date.to_string()));
    }

    vec![Line::from(first), Line::from(second)]
}

/// What: Render the details block for the selected row.
///
/// Inputs:
/// - `f`: Frame to render into
/// - `app`: Application state
/// - `area`: Area below the table
pub fn render_details(f: &mut Frame, app: &AppState, area: Rect) {
    let th = *app.theme.palette();
    let lines = detail_lines(app, &th);
    let details = Paragraph::new(lines)
        .style(Style::default().fg(th.text).bg(th.base))
        .block(
            Block::default()
                .title(Span::styled(" Details ", Style::default().fg(th.overlay1)))
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(th.surface1)),
        );
    f.render_widget(details, area);
}

/// What: Render the bottom status line.
///
/// Details:
/// - Left: the last status message, or key hints when there is none.
/// - Right: the applied theme and whether it follows the system.
pub fn render_status(f: &mut Frame, app: &AppState, area: Rect) {
    let th = *app.theme.palette();
    let left = app.status.as_deref().unwrap_or(KEY_HINTS);
    let theme_name = match app.theme.current_theme() {
        ThemePreference::Light => "licht",
        ThemePreference::Dark => "donker",
    };
    let source = if app.theme.has_explicit_preference() {
        "eigen keuze"
    } else {
        "systeem"
    };
    let right = format!("thema: {theme_name} ({source}) ");
    let right_w = super::text_width(&right);
    let line = Line::from(Span::styled(
        format!(" {left}"),
        Style::default().fg(th.subtext0),
    ));
    f.render_widget(
        Paragraph::new(line).style(Style::default().bg(th.mantle)),
        area,
    );
    if right_w < area.width {
        let rect = Rect::new(
            area.x + area.width - right_w,
            area.y,
            right_w,
            1,
        );
        f.render_widget(
            Paragraph::new(Span::styled(right, Style::default().fg(th.overlay1)))
                .style(Style::default().bg(th.mantle)),
            rect,
        );
    }
}
