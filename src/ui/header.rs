use ratatui::{
    Frame,
    prelude::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

use super::text_width;
use crate::state::{AppState, CellRect};
use crate::theme::{Theme, ThemePreference};

/// Style for a clickable button in the header bar.
fn button_style(th: &Theme, active: bool) -> Style {
    if active {
        Style::default()
            .fg(th.crust)
            .bg(th.sapphire)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(th.text).bg(th.surface1)
    }
}

/// Draw `label` as a one-line button at `(x, y)` and return its rectangle.
fn draw_button(f: &mut Frame, label: &str, x: u16, y: u16, style: Style) -> CellRect {
    let w = text_width(label);
    f.render_widget(
        Paragraph::new(Span::styled(label.to_string(), style)),
        Rect::new(x, y, w, 1),
    );
    (x, y, w, 1)
}

/// What: Render the header bar: title, snapshot date and the three buttons.
///
/// Inputs:
/// - `f`: Frame to render into
/// - `app`: Application state (records menu, theme and search button rects)
/// - `area`: One-line area at the top of the screen
///
/// Details:
/// - Buttons are placed right to left (menu, theme, search) and skipped when
///   they no longer fit, in which case their rect is cleared.
/// - The theme button names the theme a click switches to.
pub fn render_header(f: &mut Frame, app: &mut AppState, area: Rect) {
    let th = *app.theme.palette();

    let title = Line::from(vec![
        Span::styled(
            " Beurs Cowboy ",
            Style::default().fg(th.mauve).add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            format!("· {} ", app.data_label),
            Style::default().fg(th.subtext0),
        ),
        Span::styled(
            format!(
                "· {} van {} aandelen",
                app.rows.visible_count(),
                app.rows.len()
            ),
            Style::default().fg(th.overlay1),
        ),
    ]);
    f.render_widget(
        Paragraph::new(title).style(Style::default().bg(th.crust)),
        area,
    );

    let menu_label = if app.menu.is_open() {
        " ✕ Menu "
    } else {
        " ≡ Menu "
    };
    let theme_label = match app.theme.current_theme() {
        ThemePreference::Light => " ☾ Donker ",
        ThemePreference::Dark => " ☀ Licht ",
    };
    let search_label = " / Zoeken ";

    let right = area.x.saturating_add(area.width);
    let mut x = right;
    let mut next_slot = |label: &str| -> Option<u16> {
        let w = text_width(label);
        let start = x.checked_sub(w).filter(|s| *s >= area.x)?;
        x = start.saturating_sub(1);
        Some(start)
    };

    app.menu_button_rect = next_slot(menu_label).map(|bx| {
        draw_button(
            f,
            menu_label,
            bx,
            area.y,
            button_style(&th, app.menu.is_open()),
        )
    });
    app.theme_button_rect = next_slot(theme_label)
        .map(|bx| draw_button(f, theme_label, bx, area.y, button_style(&th, false)));
    app.search_button_rect = next_slot(search_label).map(|bx| {
        draw_button(
            f,
            search_label,
            bx,
            area.y,
            button_style(&th, app.search.is_open()),
        )
    });
}

/// What: Render the filter buttons and the active query.
///
/// Inputs:
/// - `f`: Frame to render into
/// - `app`: Application state (records `filter_rects`)
/// - `area`: One-line area below the header
///
/// Details:
/// - Buttons carry their number key (`1`..`4`); exactly one is highlighted.
/// - An applied search query is shown after the buttons so a narrowed table
///   is never a surprise.
pub fn render_filters(f: &mut Frame, app: &mut AppState, area: Rect) {
    let th = *app.theme.palette();
    app.filter_rects.clear();

    let mut x = area.x.saturating_add(1);
    let right = area.x.saturating_add(area.width);
    for (i, category) in app.filter.buttons().into_iter().enumerate() {
        let label = format!(" {} {} ", i + 1, category.label());
        let w = text_width(&label);
        if x.saturating_add(w) > right {
            break;
        }
        let style = if app.filter.is_active(category) {
            Style::default()
                .fg(th.crust)
                .bg(th.green)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(th.subtext0).bg(th.mantle)
        };
        let rect = draw_button(f, &label, x, area.y, style);
        app.filter_rects.push((category, rect));
        x = x.saturating_add(w).saturating_add(1);
    }

    if let Some(query) = app.rows.query()
        && x < right
    {
        let text = format!(" zoekterm: \"{query}\"");
        let w = text_width(&text).min(right - x);
        f.render_widget(
            Paragraph::new(Span::styled(text, Style::default().fg(th.overlay1))),
            Rect::new(x, area.y, w, 1),
        );
    }
}
