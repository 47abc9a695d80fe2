//! Command-line argument definition.

use std::path::PathBuf;

use clap::Parser;

use crate::theme::Settings;

/// Beurs Cowboy - terminal signal board for stock snapshots
#[derive(Parser, Debug, Default)]
#[command(name = "beurs-cowboy")]
#[command(version)]
#[command(about = "Terminal signal board for Beurs Cowboy stock snapshots", long_about = None)]
pub struct Args {
    /// Snapshot file to show (default: newest snap_*.json in the snapshot directory)
    #[arg(long)]
    pub snapshot: Option<PathBuf>,

    /// Directory searched for snap_*.json files
    #[arg(long)]
    pub snapshot_dir: Option<PathBuf>,

    /// Search index used for company names in the details line
    #[arg(long)]
    pub search_index: Option<PathBuf>,

    /// Set the logging level (trace, debug, info, warn, error)
    #[arg(long, default_value = "info")]
    pub log_level: String,

    /// Enable verbose output (equivalent to --log-level debug)
    #[arg(short, long)]
    pub verbose: bool,

    /// Do not follow system theme changes while running
    #[arg(long)]
    pub no_ambient_watch: bool,
}

impl Args {
    /// What: Log filter directive derived from `--log-level` and `--verbose`.
    ///
    /// Output:
    /// - `debug` when verbose, otherwise the given level (`info` when empty).
    #[must_use]
    pub fn log_filter(&self) -> &str {
        if self.verbose {
            "debug"
        } else if self.log_level.trim().is_empty() {
            "info"
        } else {
            self.log_level.trim()
        }
    }

    /// What: Override file settings with the flags given on the command line.
    ///
    /// Inputs:
    /// - `settings`: Settings loaded from `settings.conf`
    ///
    /// Details:
    /// - Only flags that were passed change anything.
    /// - `--no-ambient-watch` sets the poll interval to zero, which disables the watcher.
    pub fn apply_to(&self, settings: &mut Settings) {
        if let Some(path) = &self.snapshot {
            settings.snapshot_path = Some(path.clone());
        }
        if let Some(dir) = &self.snapshot_dir {
            settings.snapshot_dir.clone_from(dir);
        }
        if let Some(path) = &self.search_index {
            settings.search_index_path.clone_from(path);
        }
        if self.no_ambient_watch {
            settings.ambient_poll_secs = 0;
        }
    }
}
