use std::cmp::Ordering;

use crate::state::rows::RowSet;
use crate::state::types::{ColumnHeader, SortDirection};

/// Characters removed before a cell is parsed as a number.
const NUMERIC_NOISE: [char; 4] = ['€', '$', '%', ','];

/// What: Parse cell text as a number the way the table compares it.
///
/// Inputs:
/// - `text`: Trimmed cell text such as `€1,234.50`, `+3.2%` or `AAPL`
///
/// Output:
/// - `Some(value)` when the text (after stripping currency symbols, percent signs
///   and thousands separators) starts with a decimal number; `None` otherwise.
///
/// Details:
/// - Only the leading number is read: `12abc` parses as `12`.
/// - Accepts an optional sign, digits with an optional fraction, an optional
///   exponent, and the literal `Infinity`.
#[must_use]
pub fn parse_numeric(text: &str) -> Option<f64> {
    let cleaned: String = text.chars().filter(|c| !NUMERIC_NOISE.contains(c)).collect();
    let s = cleaned.trim_start();
    let bytes = s.as_bytes();
    let mut end = 0;
    if matches!(bytes.first(), Some(b'+' | b'-')) {
        end = 1;
    }
    if s[end..].starts_with("Infinity") {
        return s[..end + "Infinity".len()].parse::<f64>().ok();
    }
    let int_start = end;
    while end < bytes.len() && bytes[end].is_ascii_digit() {
        end += 1;
    }
    let mut digits = end - int_start;
    if end < bytes.len() && bytes[end] == b'.' {
        let frac_start = end + 1;
        let mut frac_end = frac_start;
        while frac_end < bytes.len() && bytes[frac_end].is_ascii_digit() {
            frac_end += 1;
        }
        digits += frac_end - frac_start;
        end = frac_end;
    }
    if digits == 0 {
        return None;
    }
    if end < bytes.len() && matches!(bytes[end], b'e' | b'E') {
        let mut exp_end = end + 1;
        if exp_end < bytes.len() && matches!(bytes[exp_end], b'+' | b'-') {
            exp_end += 1;
        }
        let exp_digits_start = exp_end;
        while exp_end < bytes.len() && bytes[exp_end].is_ascii_digit() {
            exp_end += 1;
        }
        if exp_end > exp_digits_start {
            end = exp_end;
        }
    }
    s[..end].parse::<f64>().ok()
}

/// What: Order two strings roughly the way a locale collator does.
///
/// Details:
/// - Primary comparison ignores case.
/// - On a case-only difference, lowercase sorts before uppercase at the first
///   differing character.
#[must_use]
pub fn locale_compare(a: &str, b: &str) -> Ordering {
    let primary = a.to_lowercase().cmp(&b.to_lowercase());
    if primary != Ordering::Equal {
        return primary;
    }
    for (ca, cb) in a.chars().zip(b.chars()) {
        if ca != cb {
            return match (ca.is_lowercase(), cb.is_lowercase()) {
                (true, false) => Ordering::Less,
                (false, true) => Ordering::Greater,
                _ => ca.cmp(&cb),
            };
        }
    }
    a.len().cmp(&b.len())
}

/// What: Compare two cell texts in ascending order.
///
/// Inputs:
/// - `a`, `b`: Trimmed cell texts
///
/// Output:
/// - Numeric ordering when both parse as numbers; locale-like string ordering otherwise.
#[must_use]
pub fn compare_cells(a: &str, b: &str) -> Ordering {
    match (parse_numeric(a), parse_numeric(b)) {
        (Some(x), Some(y)) => x.partial_cmp(&y).unwrap_or(Ordering::Equal),
        _ => locale_compare(a, b),
    }
}

/// What: Stable merge sort that tolerates comparators without a total order.
///
/// Inputs:
/// - `items`: Values to reorder in place
/// - `cmp`: Comparator
///
/// Details:
/// - Mixed numeric and text cells make the cell comparator non-transitive, which
///   the standard library sorts are allowed to reject with a panic.
/// - Equal elements keep their relative order.
pub fn stable_sort_by<T, F>(items: &mut Vec<T>, mut cmp: F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    let mut order: Vec<usize> = (0..items.len()).collect();
    merge_sort_indices(&mut order, &mut |i, j| cmp(&items[i], &items[j]));
    let mut slots: Vec<Option<T>> = std::mem::take(items).into_iter().map(Some).collect();
    items.extend(order.into_iter().filter_map(|i| slots[i].take()));
}

/// Top-down merge sort over indices; takes from the left run unless the right is strictly less.
fn merge_sort_indices<F>(idx: &mut Vec<usize>, cmp: &mut F)
where
    F: FnMut(usize, usize) -> Ordering,
{
    if idx.len() <= 1 {
        return;
    }
    let mid = idx.len() / 2;
    let mut right = idx.split_off(mid);
    merge_sort_indices(idx, cmp);
    merge_sort_indices(&mut right, cmp);
    let left = std::mem::take(idx);
    idx.reserve(left.len() + right.len());
    let (mut i, mut j) = (0, 0);
    while i < left.len() && j < right.len() {
        if cmp(right[j], left[i]) == Ordering::Less {
            idx.push(right[j]);
            j += 1;
        } else {
            idx.push(left[i]);
            i += 1;
        }
    }
    idx.extend_from_slice(&left[i..]);
    idx.extend_from_slice(&right[j..]);
}

/// Column-header sorting for one table.
///
/// The direction flag belongs to the table, not to a column: every activation
/// of any sortable header flips it, and the first activation sorts ascending.
#[derive(Clone, Debug)]
pub struct TableSortController {
    /// Headers in column order.
    headers: Vec<ColumnHeader>,
    /// Direction used by the previous activation; `None` before the first one.
    last_ascending: Option<bool>,
    /// Column sorted by the previous activation.
    active: Option<usize>,
}

impl TableSortController {
    /// Controller for a table with the given headers; nothing sorted yet.
    #[must_use]
    pub const fn new(headers: Vec<ColumnHeader>) -> Self {
        Self {
            headers,
            last_ascending: None,
            active: None,
        }
    }

    /// Headers in column order.
    #[must_use]
    pub fn headers(&self) -> &[ColumnHeader] {
        &self.headers
    }

    /// Whether `column` exists and accepts activation.
    #[must_use]
    pub fn is_sortable(&self, column: usize) -> bool {
        self.headers.get(column).is_some_and(|h| h.sortable)
    }

    /// What: Handle a click or keyboard activation on a header.
    ///
    /// Inputs:
    /// - `column`: Header index
    /// - `rows`: Row set to reorder
    ///
    /// Output:
    /// - `true` when the rows were sorted; `false` for opted-out or unknown columns,
    ///   which leave all state untouched.
    pub fn activate(&mut self, column: usize, rows: &mut RowSet) -> bool {
        if !self.is_sortable(column) {
            return false;
        }
        let ascending = !self.last_ascending.unwrap_or(false);
        self.last_ascending = Some(ascending);
        self.active = Some(column);
        let direction = if ascending {
            SortDirection::Ascending
        } else {
            SortDirection::Descending
        };
        rows.sort_by_column(column, direction);
        tracing::debug!(column, ?direction, "table sorted");
        true
    }

    /// Direction of the current sort, if any column has been activated.
    #[must_use]
    pub fn direction(&self) -> Option<SortDirection> {
        self.last_ascending.map(|asc| {
            if asc {
                SortDirection::Ascending
            } else {
                SortDirection::Descending
            }
        })
    }

    /// Column sorted last.
    #[must_use]
    pub const fn active_column(&self) -> Option<usize> {
        self.active
    }

    /// What: Caption for a header, with the direction indicator on the active column only.
    ///
    /// Output:
    /// - Empty string for unknown columns.
    #[must_use]
    pub fn header_label(&self, column: usize) -> String {
        let Some(h) = self.headers.get(column) else {
            return String::new();
        };
        match (self.active, self.direction()) {
            (Some(active), Some(dir)) if active == column && h.sortable => {
                format!("{}{}", h.label, dir.indicator())
            }
            _ => h.label.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::types::{Signal, StockRow};

    fn table(values: &[&str]) -> RowSet {
        RowSet::new(
            values
                .iter()
                .enumerate()
                .map(|(i, v)| {
                    StockRow::new(format!("R{i}"), "", "", Signal::Neutral, vec![(*v).to_string()])
                })
                .collect(),
        )
    }

    fn column(set: &RowSet) -> Vec<String> {
        set.rows()
            .iter()
            .map(|r| r.row.cell_text(0).to_string())
            .collect()
    }

    #[test]
    /// What: Numeric parsing strips currency, percent and thousands separators
    fn parse_numeric_variants() {
        assert_eq!(parse_numeric("€20"), Some(20.0));
        assert_eq!(parse_numeric("5%"), Some(5.0));
        assert_eq!(parse_numeric("$1,234.50"), Some(1234.5));
        assert_eq!(parse_numeric("+3.25%"), Some(3.25));
        assert_eq!(parse_numeric("-0.5"), Some(-0.5));
        assert_eq!(parse_numeric(".5"), Some(0.5));
        assert_eq!(parse_numeric("12abc"), Some(12.0));
        assert_eq!(parse_numeric("1e3"), Some(1000.0));
        assert_eq!(parse_numeric("abc"), None);
        assert_eq!(parse_numeric(""), None);
        assert_eq!(parse_numeric("-"), None);
        assert_eq!(parse_numeric("Infinity"), Some(f64::INFINITY));
    }

    #[test]
    /// What: Numeric cells sort by value, not by text
    ///
    /// - Input: 100, €20, 5%
    /// - Output: 5%, €20, 100 ascending
    fn numeric_cells_sort_by_value() {
        let mut set = table(&["100", "€20", "5%"]);
        let mut s = TableSortController::new(vec![ColumnHeader::sortable("Prijs")]);
        assert!(s.activate(0, &mut set));
        assert_eq!(column(&set), vec!["5%", "€20", "100"]);
    }

    #[test]
    /// What: Text cells fall back to locale-like ordering
    fn text_cells_sort_lexicographically() {
        let mut set = table(&["Technology", "energy", "Finance", "Energy"]);
        let mut s = TableSortController::new(vec![ColumnHeader::sortable("Sector")]);
        s.activate(0, &mut set);
        assert_eq!(column(&set), vec!["energy", "Energy", "Finance", "Technology"]);
    }

    #[test]
    /// What: A second activation of the same header reverses the first result
    fn same_header_twice_reverses() {
        let mut set = table(&["3", "10", "1", "7"]);
        let mut s = TableSortController::new(vec![ColumnHeader::sortable("RSI")]);
        s.activate(0, &mut set);
        let first = column(&set);
        s.activate(0, &mut set);
        let mut reversed = first;
        reversed.reverse();
        assert_eq!(column(&set), reversed);
        assert_eq!(s.direction(), Some(SortDirection::Descending));
    }

    #[test]
    /// What: The direction flag is table-global and flips across columns
    ///
    /// - Input: Activate column 0, then column 1
    /// - Output: Column 0 ascending, then column 1 descending; indicator moves to column 1
    fn direction_flag_is_table_global() {
        let mut set = RowSet::new(vec![
            StockRow::new("A", "", "", Signal::Buy, vec!["b".into(), "1".into()]),
            StockRow::new("B", "", "", Signal::Buy, vec!["a".into(), "2".into()]),
        ]);
        let mut s = TableSortController::new(vec![
            ColumnHeader::sortable("Aandeel"),
            ColumnHeader::sortable("Volume"),
        ]);
        s.activate(0, &mut set);
        assert_eq!(s.header_label(0), "Aandeel ▲");
        s.activate(1, &mut set);
        assert_eq!(s.direction(), Some(SortDirection::Descending));
        assert_eq!(s.header_label(0), "Aandeel");
        assert_eq!(s.header_label(1), "Volume ▼");
        let tickers: Vec<&str> = set.rows().iter().map(|r| r.row.ticker()).collect();
        assert_eq!(tickers, vec!["B", "A"]);
    }

    #[test]
    /// What: Opted-out and unknown columns ignore activation entirely
    fn opted_out_column_is_inert() {
        let mut set = table(&["b", "a"]);
        let mut s = TableSortController::new(vec![ColumnHeader::fixed("Notes")]);
        assert!(!s.activate(0, &mut set));
        assert!(!s.activate(9, &mut set));
        assert_eq!(s.direction(), None);
        assert_eq!(s.header_label(0), "Notes");
        assert_eq!(column(&set), vec!["b", "a"]);
    }

    #[test]
    /// What: Ties keep their original order in both directions
    fn ties_are_stable() {
        let mut set = RowSet::new(vec![
            StockRow::new("X", "", "", Signal::Buy, vec!["5".into()]),
            StockRow::new("Y", "", "", Signal::Buy, vec!["5.0".into()]),
            StockRow::new("Z", "", "", Signal::Buy, vec!["1".into()]),
        ]);
        let mut s = TableSortController::new(vec![ColumnHeader::sortable("RSI")]);
        s.activate(0, &mut set);
        let asc: Vec<&str> = set.rows().iter().map(|r| r.row.ticker()).collect();
        assert_eq!(asc, vec!["Z", "X", "Y"]);
        s.activate(0, &mut set);
        let desc: Vec<&str> = set.rows().iter().map(|r| r.row.ticker()).collect();
        assert_eq!(desc, vec!["X", "Y", "Z"]);
    }

    #[test]
    /// What: Mixed numeric and text cells sort without panicking
    fn mixed_cells_do_not_panic() {
        let mut set = table(&["10", "abc", "2", "€5", "Zed", "1,000", "n/a", "7%"]);
        let mut s = TableSortController::new(vec![ColumnHeader::sortable("Mixed")]);
        s.activate(0, &mut set);
        s.activate(0, &mut set);
        assert_eq!(set.len(), 8);
    }
}
