//! Ordered row collection shared by the search, filter and sort controllers.

use crate::state::types::{FilterCategory, SortDirection, StockRow};

/// A row plus its presentation state.
#[derive(Clone, Debug, PartialEq)]
pub struct TableRow {
    /// Underlying record; never mutated by the controllers.
    pub row: StockRow,
    /// `true` when the row is currently hidden from the table.
    pub hidden: bool,
}

/// Ordered collection of table rows.
///
/// Row visibility is derived from two inputs held here: the active filter
/// category and the active search query. Every change to either input
/// recomputes all rows from scratch, so a row is shown only when it passes
/// both the filter and the search.
#[derive(Clone, Debug, Default)]
pub struct RowSet {
    /// Rows in their current display order.
    rows: Vec<TableRow>,
    /// Category selected through the filter buttons.
    filter: FilterCategory,
    /// Active search query; `None` when the search box is blank.
    query: Option<String>,
}

impl RowSet {
    /// What: Build a row set where every row starts visible.
    ///
    /// Inputs:
    /// - `rows`: Records in their initial display order
    ///
    /// Output:
    /// - A `RowSet` with filter `All` and no query.
    #[must_use]
    pub fn new(rows: Vec<StockRow>) -> Self {
        Self {
            rows: rows
                .into_iter()
                .map(|row| TableRow { row, hidden: false })
                .collect(),
            filter: FilterCategory::All,
            query: None,
        }
    }

    /// Rows in display order, hidden ones included.
    #[must_use]
    pub fn rows(&self) -> &[TableRow] {
        &self.rows
    }

    /// Number of rows, hidden ones included.
    #[must_use]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// `true` when the set holds no rows at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Positions (in display order) of the rows currently shown.
    #[must_use]
    pub fn visible_indices(&self) -> Vec<usize> {
        self.rows
            .iter()
            .enumerate()
            .filter(|(_, r)| !r.hidden)
            .map(|(i, _)| i)
            .collect()
    }

    /// Number of rows currently shown.
    #[must_use]
    pub fn visible_count(&self) -> usize {
        self.rows.iter().filter(|r| !r.hidden).count()
    }

    /// Active filter category.
    #[must_use]
    pub const fn filter(&self) -> FilterCategory {
        self.filter
    }

    /// Active search query, if any.
    #[must_use]
    pub fn query(&self) -> Option<&str> {
        self.query.as_deref()
    }

    /// Replace the filter category and recompute visibility.
    pub fn set_filter(&mut self, filter: FilterCategory) {
        self.filter = filter;
        self.refresh_visibility();
    }

    /// What: Replace the search query and recompute visibility.
    ///
    /// Inputs:
    /// - `query`: Raw query text; empty or whitespace-only clears the search
    ///
    /// Details:
    /// - The query is stored as typed; matching lowercases it at compare time.
    pub fn set_query(&mut self, query: &str) {
        self.query = if query.trim().is_empty() {
            None
        } else {
            Some(query.to_string())
        };
        self.refresh_visibility();
    }

    /// Drop the search query; the filter still applies.
    pub fn clear_query(&mut self) {
        self.query = None;
        self.refresh_visibility();
    }

    /// Recompute every row's hidden flag from the current filter and query.
    fn refresh_visibility(&mut self) {
        let filter = self.filter;
        let query = self.query.as_deref();
        for r in &mut self.rows {
            let by_filter = filter.matches(r.row.signal());
            let by_query = query.is_none_or(|q| crate::logic::search::row_matches(&r.row, q));
            r.hidden = !(by_filter && by_query);
        }
    }

    /// What: Reorder all rows by the text of one column.
    ///
    /// Inputs:
    /// - `column`: Column index whose trimmed cell text is compared
    /// - `direction`: Ascending or descending
    ///
    /// Details:
    /// - Uses a stable sort; rows that compare equal keep their relative order.
    /// - Hidden rows are reordered too; only their position changes.
    pub fn sort_by_column(&mut self, column: usize, direction: SortDirection) {
        crate::logic::sort::stable_sort_by(&mut self.rows, |a, b| {
            let ord = crate::logic::sort::compare_cells(
                a.row.cell_text(column),
                b.row.cell_text(column),
            );
            match direction {
                SortDirection::Ascending => ord,
                SortDirection::Descending => ord.reverse(),
            }
        });
    }
}
