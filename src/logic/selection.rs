use crate::state::AppState;

/// Position of the selected row within the visible rows.
#[must_use]
pub fn visible_position(app: &AppState) -> Option<usize> {
    let ticker = app.selected.as_deref()?;
    app.rows
        .rows()
        .iter()
        .filter(|r| !r.hidden)
        .position(|r| r.row.ticker() == ticker)
}

/// What: Move the selection by `delta` among visible rows.
///
/// Inputs:
/// - `app`: Application state
/// - `delta`: Signed step; clamped to the first/last visible row
///
/// Details:
/// - Ignored while the navigation menu holds the scroll lock.
/// - Without a current selection the move starts from the top.
pub fn move_sel(app: &mut AppState, delta: isize) {
    if app.menu.scroll_locked() {
        tracing::trace!("selection move ignored: scroll locked");
        return;
    }
    let visible = app.rows.visible_indices();
    if visible.is_empty() {
        app.selected = None;
        app.table_state.select(None);
        return;
    }
    let current = visible_position(app).unwrap_or(0);
    let idx = if delta.is_negative() {
        current.saturating_sub(delta.unsigned_abs())
    } else {
        current.saturating_add(delta.unsigned_abs())
    }
    .min(visible.len() - 1);
    select_visible(app, idx, &visible);
}

/// Select the first visible row (smooth-scroll target of the menu links).
pub fn jump_to_top(app: &mut AppState) {
    let visible = app.rows.visible_indices();
    if visible.is_empty() {
        app.selected = None;
        app.table_state.select(None);
    } else {
        select_visible(app, 0, &visible);
    }
}

/// What: Select the row at a position among the visible rows (mouse click).
///
/// Output:
/// - `true` when `pos` named a visible row.
pub fn select_at(app: &mut AppState, pos: usize) -> bool {
    let visible = app.rows.visible_indices();
    if pos >= visible.len() {
        return false;
    }
    select_visible(app, pos, &visible);
    true
}

/// What: Keep the selection valid after visibility or order changed.
///
/// Details:
/// - A selection that is still visible is kept (its position may change after sorting).
/// - Otherwise the first visible row is selected, or nothing when all rows are hidden.
pub fn reconcile_selection(app: &mut AppState) {
    match visible_position(app) {
        Some(pos) => app.table_state.select(Some(pos)),
        None => jump_to_top(app),
    }
}

/// Select the `idx`-th visible row.
fn select_visible(app: &mut AppState, idx: usize, visible: &[usize]) {
    let ticker = visible
        .get(idx)
        .and_then(|&i| app.rows.rows().get(i))
        .map(|r| r.row.ticker().to_string());
    app.table_state.select(ticker.as_ref().map(|_| idx));
    app.selected = ticker;
}
