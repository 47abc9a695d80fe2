//! Controllers for the table and page chrome, plus the actions that wire them
//! to the application state.

pub mod actions;
pub mod filter;
pub mod menu;
pub mod search;
pub mod selection;
pub mod sort;

pub use filter::FilterController;
pub use menu::{NavLink, NavMenuController, PointerTarget};
pub use search::{SearchController, row_matches};
pub use selection::{move_sel, reconcile_selection};
pub use sort::{TableSortController, compare_cells, parse_numeric};
