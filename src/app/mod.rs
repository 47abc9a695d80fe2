//! Terminal application: runtime loop, background workers and terminal setup.

/// Runtime event loop and background workers.
mod runtime;
/// Terminal setup and restoration utilities.
mod terminal;

pub use runtime::run;
