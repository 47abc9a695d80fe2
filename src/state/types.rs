//! Core value types used by the signal board state.

use std::fmt;

/// Trading signal classification attached to every stock row.
///
/// The lowercase class strings (`buy`, `buy-strong`, ...) are the values the
/// analyzer writes into its snapshots and search index.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Signal {
    /// Plain buy signal ("Koop").
    Buy,
    /// Strong buy signal ("Sterk Koop").
    BuyStrong,
    /// Cautious sell signal ("Voorzichtig").
    Sell,
    /// Strong sell signal ("Verkoop").
    SellStrong,
    /// No clear direction ("Neutraal").
    Neutral,
}

impl Signal {
    /// All signals in analyzer order, strongest buy first.
    pub const ALL: [Self; 5] = [
        Self::BuyStrong,
        Self::Buy,
        Self::Neutral,
        Self::Sell,
        Self::SellStrong,
    ];

    /// What: Parse a signal class string such as `buy-strong`.
    ///
    /// Inputs:
    /// - `class`: Class string from snapshot data; surrounding whitespace and case are ignored
    ///
    /// Output:
    /// - `Some(Signal)` for the five known classes, `None` otherwise.
    #[must_use]
    pub fn from_class(class: &str) -> Option<Self> {
        match class.trim().to_ascii_lowercase().as_str() {
            "buy" => Some(Self::Buy),
            "buy-strong" => Some(Self::BuyStrong),
            "sell" => Some(Self::Sell),
            "sell-strong" => Some(Self::SellStrong),
            "neutral" => Some(Self::Neutral),
            _ => None,
        }
    }

    /// Lowercase class string, the inverse of [`Signal::from_class`].
    #[must_use]
    pub const fn as_class(self) -> &'static str {
        match self {
            Self::Buy => "buy",
            Self::BuyStrong => "buy-strong",
            Self::Sell => "sell",
            Self::SellStrong => "sell-strong",
            Self::Neutral => "neutral",
        }
    }

    /// Dutch display label used by the analyzer output.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Buy => "Koop",
            Self::BuyStrong => "Sterk Koop",
            Self::Sell => "Voorzichtig",
            Self::SellStrong => "Verkoop",
            Self::Neutral => "Neutraal",
        }
    }
}

impl fmt::Display for Signal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_class())
    }
}

/// Category selectable through the filter buttons.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum FilterCategory {
    /// Show every row.
    #[default]
    All,
    /// Rows whose signal is `buy` or `buy-strong`.
    Buy,
    /// Rows whose signal is exactly `neutral`.
    Neutral,
    /// Rows whose signal is `sell` or `sell-strong`.
    Sell,
}

impl FilterCategory {
    /// Buttons in the order they are shown on screen.
    pub const BUTTONS: [Self; 4] = [Self::All, Self::Buy, Self::Neutral, Self::Sell];

    /// What: Decide whether a row with `signal` passes this category.
    ///
    /// Inputs:
    /// - `signal`: Row signal classification
    ///
    /// Output:
    /// - `true` when the row belongs to the category.
    #[must_use]
    pub const fn matches(self, signal: Signal) -> bool {
        match self {
            Self::All => true,
            Self::Buy => matches!(signal, Signal::Buy | Signal::BuyStrong),
            Self::Sell => matches!(signal, Signal::Sell | Signal::SellStrong),
            Self::Neutral => matches!(signal, Signal::Neutral),
        }
    }

    /// Button caption.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::All => "Alle",
            Self::Buy => "Koop",
            Self::Neutral => "Neutraal",
            Self::Sell => "Verkoop",
        }
    }

    /// Parse a `data-filter` style key (`all`, `buy`, `sell`, `neutral`).
    #[must_use]
    pub fn from_key(key: &str) -> Option<Self> {
        match key.trim().to_ascii_lowercase().as_str() {
            "all" => Some(Self::All),
            "buy" => Some(Self::Buy),
            "sell" => Some(Self::Sell),
            "neutral" => Some(Self::Neutral),
            _ => None,
        }
    }
}

/// One column header of the stock table.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ColumnHeader {
    /// Header caption without any sort indicator.
    pub label: String,
    /// `false` opts the column out of sorting (no activation, no indicator).
    pub sortable: bool,
}

impl ColumnHeader {
    /// Sortable header with the given caption.
    #[must_use]
    pub fn sortable(label: &str) -> Self {
        Self {
            label: label.to_string(),
            sortable: true,
        }
    }

    /// Header that never sorts.
    #[must_use]
    pub fn fixed(label: &str) -> Self {
        Self {
            label: label.to_string(),
            sortable: false,
        }
    }
}

/// Sort direction shown next to the active header.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SortDirection {
    /// Smallest value first.
    Ascending,
    /// Largest value first.
    Descending,
}

impl SortDirection {
    /// Indicator appended to the active header caption.
    #[must_use]
    pub const fn indicator(self) -> &'static str {
        match self {
            Self::Ascending => " ▲",
            Self::Descending => " ▼",
        }
    }
}

/// A displayable stock record.
///
/// The classification fields and rendered cells are fixed at construction;
/// controllers only ever change presentation state held next to the row.
#[derive(Clone, Debug, PartialEq)]
pub struct StockRow {
    /// Ticker symbol.
    ticker: String,
    /// Company name; may be empty.
    name: String,
    /// Sector label.
    sector: String,
    /// Signal classification.
    signal: Signal,
    /// Rendered cell text, one entry per table column.
    cells: Vec<String>,
}

impl StockRow {
    /// What: Construct a row from its classification fields and rendered cells.
    ///
    /// Inputs:
    /// - `ticker`, `name`, `sector`: Descriptive fields
    /// - `signal`: Signal classification
    /// - `cells`: Text for each column, in header order
    ///
    /// Output:
    /// - An immutable `StockRow`.
    #[must_use]
    pub fn new(
        ticker: impl Into<String>,
        name: impl Into<String>,
        sector: impl Into<String>,
        signal: Signal,
        cells: Vec<String>,
    ) -> Self {
        Self {
            ticker: ticker.into(),
            name: name.into(),
            sector: sector.into(),
            signal,
            cells,
        }
    }

    /// Ticker symbol.
    #[must_use]
    pub fn ticker(&self) -> &str {
        &self.ticker
    }

    /// Company name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Sector label.
    #[must_use]
    pub fn sector(&self) -> &str {
        &self.sector
    }

    /// Signal classification.
    #[must_use]
    pub const fn signal(&self) -> Signal {
        self.signal
    }

    /// All rendered cells.
    #[must_use]
    pub fn cells(&self) -> &[String] {
        &self.cells
    }

    /// Trimmed text of one cell; empty when the column does not exist.
    #[must_use]
    pub fn cell_text(&self, column: usize) -> &str {
        self.cells.get(column).map_or("", |c| c.trim())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    /// What: Signal classes round-trip through parse and render, ignoring case and whitespace
    ///
    /// - Input: Known classes with odd casing, plus an unknown class
    /// - Output: Known classes parse; unknown yields None
    fn signal_class_parsing() {
        assert_eq!(Signal::from_class(" Buy-Strong "), Some(Signal::BuyStrong));
        assert_eq!(Signal::from_class("NEUTRAL"), Some(Signal::Neutral));
        assert_eq!(Signal::from_class("hold"), None);
        for s in Signal::ALL {
            assert_eq!(Signal::from_class(s.as_class()), Some(s));
        }
    }

    #[test]
    /// What: Filter categories group signals the way the buttons promise
    ///
    /// - Input: Every category against every signal
    /// - Output: buy covers buy/buy-strong, sell covers sell/sell-strong, neutral is exact
    fn filter_category_predicates() {
        for s in Signal::ALL {
            assert!(FilterCategory::All.matches(s));
        }
        assert!(FilterCategory::Buy.matches(Signal::Buy));
        assert!(FilterCategory::Buy.matches(Signal::BuyStrong));
        assert!(!FilterCategory::Buy.matches(Signal::Neutral));
        assert!(FilterCategory::Sell.matches(Signal::SellStrong));
        assert!(!FilterCategory::Sell.matches(Signal::Buy));
        assert!(FilterCategory::Neutral.matches(Signal::Neutral));
        assert!(!FilterCategory::Neutral.matches(Signal::Sell));
    }

    #[test]
    /// What: Cell text is trimmed and missing columns read as empty
    fn cell_text_trims_and_defaults() {
        let row = StockRow::new(
            "AAPL",
            "Apple",
            "Tech",
            Signal::Buy,
            vec!["  AAPL ".into()],
        );
        assert_eq!(row.cell_text(0), "AAPL");
        assert_eq!(row.cell_text(5), "");
    }
}
