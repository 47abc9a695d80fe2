//! Integration tests for the table controllers working together on one row set.

use beurs_cowboy::logic::{FilterController, SearchController, TableSortController};
use beurs_cowboy::sources::column_headers;
use beurs_cowboy::state::{ColumnHeader, FilterCategory, RowSet, Signal, StockRow};

fn row(ticker: &str, sector: &str, signal: Signal, price: &str) -> StockRow {
    StockRow::new(
        ticker,
        "",
        sector,
        signal,
        vec![ticker.to_string(), sector.to_string(), price.to_string()],
    )
}

fn market() -> RowSet {
    RowSet::new(vec![
        row("ASML.AS", "Tech", Signal::Buy, "€600.00"),
        row("SHELL.AS", "Energie", Signal::Sell, "€30.00"),
        row("BESI.AS", "Tech", Signal::Neutral, "€120.00"),
        row("INGA.AS", "Financials", Signal::BuyStrong, "€15.00"),
    ])
}

fn visible(rows: &RowSet) -> Vec<&str> {
    rows.rows()
        .iter()
        .filter(|r| !r.hidden)
        .map(|r| r.row.ticker())
        .collect()
}

fn order(rows: &RowSet) -> Vec<&str> {
    rows.rows().iter().map(|r| r.row.ticker()).collect()
}

#[test]
/// What: The buy filter shows exactly the buy and buy-strong rows
///
/// - Input: Signals [buy, sell, neutral, buy-strong]
/// - Output: Rows 0 and 3 visible
fn buy_filter_scenario() {
    let mut rows = market();
    let mut filter = FilterController::new();
    filter.activate(FilterCategory::Buy, &mut rows);
    assert_eq!(rows.visible_indices(), vec![0, 3]);
    assert!(filter.is_active(FilterCategory::Buy));
    assert!(!filter.is_active(FilterCategory::All));
}

#[test]
/// What: Filter and search combine as AND, in either order
///
/// - Input: Search "tech", then filter buy; then filter all
/// - Output: Only ASML.AS while both apply; both tech rows once the filter is lifted
fn filter_and_search_combine() {
    let mut rows = market();
    let mut search = SearchController::new();
    let mut filter = FilterController::new();

    search.open();
    search.on_input("tech", &mut rows);
    assert_eq!(visible(&rows), ["ASML.AS", "BESI.AS"]);

    filter.activate(FilterCategory::Buy, &mut rows);
    assert_eq!(visible(&rows), ["ASML.AS"]);

    filter.activate(FilterCategory::All, &mut rows);
    assert_eq!(visible(&rows), ["ASML.AS", "BESI.AS"]);

    search.close(&mut rows);
    search.close(&mut rows);
    assert_eq!(rows.visible_count(), 4);
}

#[test]
/// What: Search matches ticker, sector and signal class without case
fn search_fields() {
    let mut rows = market();
    let mut search = SearchController::new();
    search.open();
    search.on_input("STRONG", &mut rows);
    assert_eq!(visible(&rows), ["INGA.AS"]);
    search.on_input("energie", &mut rows);
    assert_eq!(visible(&rows), ["SHELL.AS"]);
    search.on_input("   ", &mut rows);
    assert_eq!(rows.visible_count(), 4);
}

#[test]
/// What: Prices sort numerically and the global direction flag flips per activation
///
/// - Input: Activate price column, then price again, then the ticker column
/// - Output: Ascending, descending, then ascending again on the ticker column
fn sort_direction_is_table_global() {
    let mut rows = market();
    let mut sorter = TableSortController::new(column_headers());

    assert!(sorter.activate(2, &mut rows));
    assert_eq!(order(&rows), ["INGA.AS", "SHELL.AS", "BESI.AS", "ASML.AS"]);
    assert_eq!(sorter.header_label(2), "Prijs ▲");

    assert!(sorter.activate(2, &mut rows));
    assert_eq!(order(&rows), ["ASML.AS", "BESI.AS", "SHELL.AS", "INGA.AS"]);
    assert_eq!(sorter.header_label(2), "Prijs ▼");

    assert!(sorter.activate(0, &mut rows));
    assert_eq!(order(&rows), ["ASML.AS", "BESI.AS", "INGA.AS", "SHELL.AS"]);
    assert_eq!(sorter.header_label(2), "Prijs");
    assert_eq!(sorter.header_label(0), "Aandeel ▲");
}

#[test]
/// What: Sorting keeps hidden rows hidden and opted-out columns do nothing
fn sort_respects_visibility_and_opt_out() {
    let mut rows = market();
    let mut filter = FilterController::new();
    filter.activate(FilterCategory::Sell, &mut rows);

    let headers = vec![
        ColumnHeader::sortable("Aandeel"),
        ColumnHeader::fixed("Sector"),
        ColumnHeader::sortable("Prijs"),
    ];
    let mut sorter = TableSortController::new(headers);
    assert!(!sorter.activate(1, &mut rows));
    assert_eq!(sorter.direction(), None);
    assert_eq!(sorter.header_label(1), "Sector");

    assert!(sorter.activate(2, &mut rows));
    assert_eq!(visible(&rows), ["SHELL.AS"]);
    assert_eq!(rows.visible_count(), 1);
}
