//! Loading of the analyzer's output: daily snapshots and the search index.

use std::path::PathBuf;

use thiserror::Error;

mod search_index;
mod snapshot;

pub use search_index::{IndexEntry, SearchIndex};
pub use snapshot::{
    SIGNAL_COLUMN, Snapshot, SnapshotRecord, column_headers, latest_snapshot, load_snapshot, row_from_record,
};

/// Failure to read one of the data files.
#[derive(Debug, Error)]
pub enum SourceError {
    /// File or directory could not be read.
    #[error("failed to read {}: {source}", path.display())]
    Io {
        /// Offending path.
        path: PathBuf,
        /// Underlying error.
        #[source]
        source: std::io::Error,
    },
    /// File content is not the expected JSON.
    #[error("invalid JSON in {}: {source}", path.display())]
    Json {
        /// Offending path.
        path: PathBuf,
        /// Underlying error.
        #[source]
        source: serde_json::Error,
    },
}
