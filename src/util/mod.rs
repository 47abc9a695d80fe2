//! Small helpers shared by the table, the search box and the data loaders:
//! Dutch number formatting and a trailing-edge debouncer.

pub mod debounce;
pub mod format;

pub use debounce::Debouncer;
pub use format::{format_currency, format_number, format_percent, group_digits};
