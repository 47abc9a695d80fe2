use std::borrow::Cow;
use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Deserializer};
use serde_json::{Map, Value};

use super::SourceError;
use crate::state::{ColumnHeader, Signal, StockRow};
use crate::util::group_digits;

/// Column labels of the market table, in display order.
const COLUMNS: [&str; 8] = [
    "Aandeel",
    "Sector",
    "Prijs",
    "Verandering",
    "Volume",
    "RSI",
    "Signal",
    "Potentieel",
];

/// Index of the signal label in [`COLUMNS`].
pub const SIGNAL_COLUMN: usize = 6;

/// Cell text for a value the analyzer could not compute.
const MISSING_CELL: &str = "-";

/// Non-finite literals Python's `json.dump` writes; `-Infinity` first so the
/// sign is consumed with it.
const NON_FINITE_TOKENS: [&str; 3] = ["-Infinity", "Infinity", "NaN"];

/// One ticker entry of a snapshot file.
///
/// Only the fields the table shows are required; the analyzer writes many
/// more, which are ignored apart from a few shown in the details line.
#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct SnapshotRecord {
    /// Exchange ticker, e.g. `ASML.AS`.
    pub ticker: String,
    /// Company name.
    #[serde(default)]
    pub name: String,
    /// Sector name.
    #[serde(default)]
    pub sector: String,
    /// Last close in euros.
    #[serde(deserialize_with = "nan_when_null")]
    pub price: f64,
    /// Day-over-day change in percent.
    #[serde(deserialize_with = "nan_when_null")]
    pub change_pct: f64,
    /// Traded volume of the last session.
    pub volume: u64,
    /// Relative strength index.
    #[serde(deserialize_with = "nan_when_null")]
    pub rsi: f64,
    /// Display label written by the analyzer (e.g. `Sterk Koop`).
    #[serde(default)]
    pub signal: String,
    /// Class string (e.g. `buy-strong`).
    pub signal_class: String,
    /// Estimated upside in percent.
    #[serde(deserialize_with = "nan_when_null")]
    pub potential_upside: f64,
    /// 52-week high.
    #[serde(default)]
    pub high_52w: Option<f64>,
    /// 52-week low.
    #[serde(default)]
    pub low_52w: Option<f64>,
    /// Trade setup description.
    #[serde(default)]
    pub setup_type: Option<String>,
}

/// Rows of one snapshot plus where they came from.
#[derive(Clone, Debug, Default)]
pub struct Snapshot {
    /// Date part of `snap_<date>.json`, when the file name has one.
    pub date: Option<String>,
    /// Rows in file order.
    pub rows: Vec<StockRow>,
    /// Raw records, parallel to `rows`.
    pub records: Vec<SnapshotRecord>,
}

impl Snapshot {
    /// Record for `ticker`, if present.
    #[must_use]
    pub fn record(&self, ticker: &str) -> Option<&SnapshotRecord> {
        self.records.iter().find(|r| r.ticker == ticker)
    }
}

/// `null` (or a non-finite literal rewritten to it) reads as NaN; the key is still required.
fn nan_when_null<'de, D: Deserializer<'de>>(deserializer: D) -> Result<f64, D::Error> {
    Ok(Option::<f64>::deserialize(deserializer)?.unwrap_or(f64::NAN))
}

/// What: Rewrite bare `NaN`/`Infinity`/`-Infinity` literals to `null`.
///
/// Inputs:
/// - `content`: Raw snapshot text
///
/// Output:
/// - Strict JSON; borrowed unchanged when no such literal can occur.
///
/// Details:
/// - Text inside string literals is left alone, escapes included.
fn non_finite_to_null(content: &str) -> Cow<'_, str> {
    if !NON_FINITE_TOKENS.iter().any(|t| content.contains(t)) {
        return Cow::Borrowed(content);
    }
    let mut out = String::with_capacity(content.len());
    let mut in_string = false;
    let mut escaped = false;
    let mut rest = content;
    while let Some(ch) = rest.chars().next() {
        if in_string {
            if escaped {
                escaped = false;
            } else if ch == '\\' {
                escaped = true;
            } else if ch == '"' {
                in_string = false;
            }
        } else if ch == '"' {
            in_string = true;
        } else if let Some(token) = NON_FINITE_TOKENS.iter().find(|t| rest.starts_with(**t)) {
            out.push_str("null");
            rest = &rest[token.len()..];
            continue;
        }
        out.push(ch);
        rest = &rest[ch.len_utf8()..];
    }
    Cow::Owned(out)
}

/// `render(value)` for finite values, the missing marker otherwise.
fn finite_cell(value: f64, render: impl FnOnce(f64) -> String) -> String {
    if value.is_finite() {
        render(value)
    } else {
        MISSING_CELL.to_string()
    }
}

/// Table headers; every column is sortable.
#[must_use]
pub fn column_headers() -> Vec<ColumnHeader> {
    COLUMNS.iter().map(|l| ColumnHeader::sortable(l)).collect()
}

/// What: Render a record into a table row.
///
/// Inputs:
/// - `record`: Parsed snapshot entry
///
/// Output:
/// - `Some(row)`; `None` when `signal_class` is not a known class.
#[must_use]
pub fn row_from_record(record: &SnapshotRecord) -> Option<StockRow> {
    let signal = Signal::from_class(&record.signal_class)?;
    let label = if record.signal.trim().is_empty() {
        signal.label().to_string()
    } else {
        record.signal.trim().to_string()
    };
    let cells = vec![
        record.ticker.clone(),
        record.sector.clone(),
        finite_cell(record.price, |v| format!("€{v:.2}")),
        finite_cell(record.change_pct, |v| {
            let sign = if v >= 0.0 { "+" } else { "" };
            format!("{sign}{v:.2}%")
        }),
        group_digits(&record.volume.to_string(), ','),
        finite_cell(record.rsi, |v| format!("{v:.1}")),
        label,
        finite_cell(record.potential_upside, |v| format!("+{v:.1}%")),
    ];
    Some(StockRow::new(
        record.ticker.clone(),
        record.name.clone(),
        record.sector.clone(),
        signal,
        cells,
    ))
}

/// What: Load a snapshot file.
///
/// Inputs:
/// - `path`: `snap_<date>.json`, an object keyed by ticker
///
/// Output:
/// - Snapshot with rows in key order.
///
/// # Errors
/// - `SourceError::Io` when the file cannot be read.
/// - `SourceError::Json` when the file is not a JSON object.
///
/// Details:
/// - `NaN` and infinities written for short price histories load as missing
///   values instead of failing the whole file.
/// - Entries that do not match [`SnapshotRecord`] or carry an unknown signal
///   class are skipped with a warning.
pub fn load_snapshot(path: &Path) -> Result<Snapshot, SourceError> {
    let content = fs::read_to_string(path).map_err(|source| SourceError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let entries: Map<String, Value> =
        serde_json::from_str(&non_finite_to_null(&content)).map_err(|source| SourceError::Json {
            path: path.to_path_buf(),
            source,
        })?;

    let mut snapshot = Snapshot {
        date: snapshot_date(path),
        ..Snapshot::default()
    };
    for (key, value) in entries {
        let record: SnapshotRecord = match serde_json::from_value(value) {
            Ok(r) => r,
            Err(e) => {
                tracing::warn!(ticker = %key, error = %e, "skipping malformed snapshot entry");
                continue;
            }
        };
        let Some(row) = row_from_record(&record) else {
            tracing::warn!(
                ticker = %record.ticker,
                signal_class = %record.signal_class,
                "skipping row with unknown signal class"
            );
            continue;
        };
        snapshot.rows.push(row);
        snapshot.records.push(record);
    }
    tracing::info!(
        path = %path.display(),
        rows = snapshot.rows.len(),
        "snapshot loaded"
    );
    Ok(snapshot)
}

/// What: Find the newest snapshot in a directory.
///
/// Inputs:
/// - `dir`: Directory holding `snap_*.json` files
///
/// Output:
/// - Path with the lexicographically greatest name, `None` when there is none.
///
/// # Errors
/// - `SourceError::Io` when the directory cannot be listed.
pub fn latest_snapshot(dir: &Path) -> Result<Option<PathBuf>, SourceError> {
    let entries = fs::read_dir(dir).map_err(|source| SourceError::Io {
        path: dir.to_path_buf(),
        source,
    })?;
    let latest = entries
        .filter_map(Result::ok)
        .map(|e| e.path())
        .filter(|p| {
            p.is_file()
                && p.file_name()
                    .and_then(|n| n.to_str())
                    .is_some_and(|n| n.starts_with("snap_") && n.ends_with(".json"))
        })
        .max_by(|a, b| a.file_name().cmp(&b.file_name()));
    Ok(latest)
}

/// `2025-01-31` from `snap_2025-01-31.json`.
fn snapshot_date(path: &Path) -> Option<String> {
    let stem = path.file_stem()?.to_str()?;
    stem.strip_prefix("snap_")
        .filter(|d| !d.is_empty())
        .map(str::to_string)
}
