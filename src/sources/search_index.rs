use std::fs;
use std::path::Path;

use serde::Deserialize;

use super::SourceError;

/// One entry of `search-index.json`.
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Eq)]
pub struct IndexEntry {
    /// Exchange ticker.
    pub ticker: String,
    /// Company name.
    #[serde(default)]
    pub name: String,
    /// Sector name.
    #[serde(default)]
    pub sector: String,
    /// Display label of the signal.
    #[serde(default)]
    pub signal: String,
    /// Class string of the signal.
    #[serde(default)]
    pub signal_class: String,
}

/// Optional precomputed search data published next to the page.
///
/// Purely informational: the table never depends on it.
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Eq)]
pub struct SearchIndex {
    /// Analysis date.
    #[serde(default)]
    pub date: Option<String>,
    /// Indexed stocks.
    #[serde(default)]
    pub stocks: Vec<IndexEntry>,
}

impl SearchIndex {
    /// What: Read an index file, treating every problem as "no index".
    ///
    /// Inputs:
    /// - `path`: Location of `search-index.json`
    ///
    /// Output:
    /// - Parsed index; empty when the file is missing, unreadable or malformed.
    ///
    /// Details:
    /// - A missing file is silent; other failures are logged at warn.
    #[must_use]
    pub fn load_or_empty(path: &Path) -> Self {
        match Self::load(path) {
            Ok(index) => index,
            Err(SourceError::Io { source, .. }) if source.kind() == std::io::ErrorKind::NotFound => {
                tracing::debug!(path = %path.display(), "no search index");
                Self::default()
            }
            Err(e) => {
                tracing::warn!(error = %e, "ignoring search index");
                Self::default()
            }
        }
    }

    /// What: Read and parse an index file.
    ///
    /// # Errors
    /// - `SourceError::Io` when the file cannot be read.
    /// - `SourceError::Json` when the content does not match the index shape.
    pub fn load(path: &Path) -> Result<Self, SourceError> {
        let content = fs::read_to_string(path).map_err(|source| SourceError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let index: Self = serde_json::from_str(&content).map_err(|source| SourceError::Json {
            path: path.to_path_buf(),
            source,
        })?;
        tracing::info!(path = %path.display(), stocks = index.stocks.len(), "search index loaded");
        Ok(index)
    }

    /// Entry for `ticker`, if indexed.
    #[must_use]
    pub fn lookup(&self, ticker: &str) -> Option<&IndexEntry> {
        self.stocks.iter().find(|s| s.ticker == ticker)
    }

    /// Number of indexed stocks.
    #[must_use]
    pub fn len(&self) -> usize {
        self.stocks.len()
    }

    /// Whether nothing is indexed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.stocks.is_empty()
    }
}
