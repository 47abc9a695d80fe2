//! Application state: value types, the row set and the central `AppState`.

pub mod app_state;
pub mod rows;
pub mod types;

pub use app_state::{AppState, AppTheme, CellRect};
pub use rows::{RowSet, TableRow};
pub use types::{ColumnHeader, FilterCategory, Signal, SortDirection, StockRow};
