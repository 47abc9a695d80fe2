use ratatui::{
    Frame,
    prelude::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph, Wrap},
};

use super::text_width;
use crate::logic::menu::NavLink;
use crate::state::AppState;

/// What: Render the navigation panel below the menu button while it is open.
///
/// Inputs:
/// - `f`: Frame to render into
/// - `app`: Application state (records `menu_panel_rect` and `menu_link_rects`)
/// - `area`: Full frame area used for clamping
///
/// Details:
/// - The panel is right-aligned with the trigger and clamped to the frame.
/// - The panel rect includes the border so clicks on the frame do not count as outside.
pub fn render_menu(f: &mut Frame, app: &mut AppState, area: Rect) {
    let th = *app.theme.palette();
    app.menu_panel_rect = None;
    app.menu_link_rects.clear();
    if !app.menu.is_open() {
        return;
    }

    let widest = NavLink::ALL
        .iter()
        .map(|l| text_width(l.label()))
        .max()
        .unwrap_or(0);
    let w = widest.saturating_add(6).min(area.width);
    let h = u16::try_from(NavLink::ALL.len())
        .unwrap_or(u16::MAX)
        .saturating_add(2)
        .min(area.height);
    let (anchor_right, anchor_y) = app.menu_button_rect.map_or(
        (area.x.saturating_add(area.width), area.y),
        |(bx, by, bw, bh)| (bx.saturating_add(bw), by.saturating_add(bh)),
    );
    let x = anchor_right.saturating_sub(w).max(area.x);
    let y = anchor_y.min(area.y.saturating_add(area.height).saturating_sub(h));
    let rect = Rect::new(x, y, w, h);
    app.menu_panel_rect = Some((rect.x, rect.y, rect.width, rect.height));

    let mut lines: Vec<Line> = Vec::new();
    for (i, link) in NavLink::ALL.iter().enumerate() {
        let selected = i == app.menu_cursor;
        let mark = if selected { "▶ " } else { "  " };
        let style = if selected {
            Style::default()
                .fg(th.crust)
                .bg(th.sapphire)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(th.text)
        };
        lines.push(Line::from(vec![
            Span::styled(mark, Style::default().fg(th.overlay1)),
            Span::styled(link.label(), style),
        ]));
        let row_y = rect.y.saturating_add(1).saturating_add(u16::try_from(i).unwrap_or(u16::MAX));
        if row_y < rect.y.saturating_add(rect.height).saturating_sub(1) {
            app.menu_link_rects
                .push((*link, (rect.x + 1, row_y, w.saturating_sub(2), 1)));
        }
    }

    let menu = Paragraph::new(lines)
        .style(Style::default().fg(th.text).bg(th.mantle))
        .block(
            Block::default()
                .title(Span::styled(" Menu ", Style::default().fg(th.overlay1)))
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(th.sapphire)),
        );
    f.render_widget(Clear, rect);
    f.render_widget(menu, rect);
}

/// Key bindings listed in the help overlay.
const HELP_ROWS: &[(&str, &str)] = &[
    ("↑/↓ j/k", "Selectie verplaatsen"),
    ("PgUp/PgDn", "Tien rijen verder"),
    ("g / G", "Eerste / laatste rij"),
    ("←/→ h/l", "Kolom kiezen"),
    ("Enter s", "Sorteer op kolom (richting wisselt)"),
    ("1-4 / f", "Filter: alle, koop, neutraal, verkoop"),
    ("/", "Zoekbalk openen of sluiten"),
    ("i / Tab", "Zoekveld activeren"),
    ("Esc", "Zoeken en menu sluiten"),
    ("t", "Licht of donker thema"),
    ("m", "Navigatiemenu"),
    ("q / Ctrl+C", "Afsluiten"),
];

/// What: Render the keyboard help overlay, centered on the frame.
///
/// Details:
/// - Closed by Esc, Enter, `?`, `q` or any click.
pub fn render_help(f: &mut Frame, app: &AppState, area: Rect) {
    if !app.help_visible {
        return;
    }
    let th = *app.theme.palette();
    let key_w = HELP_ROWS
        .iter()
        .map(|(k, _)| text_width(k))
        .max()
        .unwrap_or(0);

    let mut lines: Vec<Line> = Vec::new();
    for (key, what) in HELP_ROWS {
        let pad = usize::from(key_w.saturating_sub(text_width(key)));
        lines.push(Line::from(vec![
            Span::styled(
                format!("{key}{}  ", " ".repeat(pad)),
                Style::default().fg(th.sapphire).add_modifier(Modifier::BOLD),
            ),
            Span::styled(*what, Style::default().fg(th.text)),
        ]));
    }
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "Esc of ? om te sluiten",
        Style::default().fg(th.overlay1),
    )));

    let w = 60.min(area.width);
    let h = u16::try_from(lines.len())
        .unwrap_or(u16::MAX)
        .saturating_add(2)
        .min(area.height);
    let rect = Rect::new(
        area.x + (area.width - w) / 2,
        area.y + (area.height - h) / 2,
        w,
        h,
    );
    let help = Paragraph::new(lines)
        .style(Style::default().fg(th.text).bg(th.mantle))
        .wrap(Wrap { trim: false })
        .block(
            Block::default()
                .title(Span::styled(" Help ", Style::default().fg(th.mauve)))
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(th.mauve)),
        );
    f.render_widget(Clear, rect);
    f.render_widget(help, rect);
}
