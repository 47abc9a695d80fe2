use crate::state::rows::RowSet;
use crate::state::types::StockRow;

/// What: Case-insensitive substring match of `query` against a row.
///
/// Inputs:
/// - `row`: Row whose ticker, sector and signal class are inspected
/// - `query`: Raw query text
///
/// Output:
/// - `true` when the lowercased query occurs in any of the three fields.
///
/// Details:
/// - Plain containment; no tokenizing or fuzzy scoring.
/// - The query is not trimmed, matching what the user typed.
#[must_use]
pub fn row_matches(row: &StockRow, query: &str) -> bool {
    let q = query.to_lowercase();
    row.ticker().to_lowercase().contains(&q)
        || row.sector().to_lowercase().contains(&q)
        || row.signal().as_class().contains(&q)
}

/// Search bar state: visibility, focus and the text typed so far.
#[derive(Clone, Debug, Default)]
pub struct SearchController {
    /// Whether the search bar is shown.
    open: bool,
    /// Whether keystrokes go to the search input.
    focused: bool,
    /// Current input text.
    value: String,
}

impl SearchController {
    /// Fresh, closed search bar.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Show the search bar and focus its input.
    pub fn open(&mut self) {
        self.open = true;
        self.focused = true;
        tracing::debug!("search opened");
    }

    /// What: Toggle the search bar the way its trigger button does.
    ///
    /// Output:
    /// - `true` when the bar is open after the call.
    ///
    /// Details:
    /// - Hiding via toggle keeps the typed text and row state; only `close` resets.
    pub fn toggle(&mut self) -> bool {
        if self.open {
            self.open = false;
            self.focused = false;
        } else {
            self.open();
        }
        self.open
    }

    /// What: Hide the search bar, clear its input and drop the search from the rows.
    ///
    /// Inputs:
    /// - `rows`: Row set whose search query is cleared
    ///
    /// Details:
    /// - Idempotent; a second call leaves the same state.
    /// - The active filter keeps applying to the rows.
    pub fn close(&mut self, rows: &mut RowSet) {
        self.open = false;
        self.focused = false;
        self.value.clear();
        rows.clear_query();
    }

    /// What: Apply a query to the rows.
    ///
    /// Inputs:
    /// - `query`: New query text
    /// - `rows`: Row set to update
    ///
    /// Details:
    /// - Empty or whitespace-only queries show every row that passes the filter.
    pub fn on_input(&mut self, query: &str, rows: &mut RowSet) {
        if self.value != query {
            self.value = query.to_string();
        }
        rows.set_query(query);
        tracing::debug!(query = %query, visible = rows.visible_count(), "search applied");
    }

    /// Escape pressed in the input or anywhere while search is open.
    pub fn on_escape(&mut self, rows: &mut RowSet) {
        self.close(rows);
    }

    /// Append a typed character to the input without applying it.
    pub fn push_char(&mut self, ch: char) {
        self.value.push(ch);
    }

    /// Remove the last character from the input without applying it.
    pub fn pop_char(&mut self) {
        self.value.pop();
    }

    /// Keep the bar open but stop routing keystrokes to it.
    pub fn blur(&mut self) {
        self.focused = false;
    }

    /// Give keyboard focus back to an open bar.
    pub fn focus(&mut self) {
        if self.open {
            self.focused = true;
        }
    }

    /// Whether the search bar is shown.
    #[must_use]
    pub const fn is_open(&self) -> bool {
        self.open
    }

    /// Whether keystrokes go to the input.
    #[must_use]
    pub const fn is_focused(&self) -> bool {
        self.focused
    }

    /// Current input text.
    #[must_use]
    pub fn value(&self) -> &str {
        &self.value
    }
}
