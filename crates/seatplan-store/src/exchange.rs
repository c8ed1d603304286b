//! Chart export and import files.
//!
//! Exports are pretty-printed snapshots named after the day they were taken
//! (`seating-chart-2024-05-01.json`). Imports are checked against the same
//! rules as the stored chart before anything is replaced.

use std::fs;
use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use tracing::info;

use seatplan_core::{GridLimits, SeatingState, Snapshot};

use crate::config::SeatplanConfig;
use crate::error::{StoreError, StoreResult};

/// `<prefix>-YYYY-MM-DD.json`
pub fn default_export_name(prefix: &str, date: NaiveDate) -> String {
    format!("{}-{}.json", prefix, date.format("%Y-%m-%d"))
}

/// Where `seatplan export` writes when no path is given.
pub fn export_path(config: &SeatplanConfig, date: NaiveDate) -> PathBuf {
    config
        .export
        .directory
        .join(default_export_name(&config.export.file_prefix, date))
}

/// Writes the snapshot as two-space indented JSON.
pub fn export_chart(path: &Path, snapshot: &Snapshot) -> StoreResult<()> {
    let json = snapshot
        .to_json_pretty()
        .map_err(|source| StoreError::InvalidChart {
            path: path.to_path_buf(),
            source,
        })?;

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|e| StoreError::io(parent, e))?;
    }
    fs::write(path, json).map_err(|e| StoreError::io(path, e))?;

    info!(path = %path.display(), "Seating chart exported");
    Ok(())
}

/// Reads a chart file and checks it can be loaded under `limits`.
///
/// The returned snapshot is the file's content as written; the caller
/// applies it through the manager.
pub fn import_chart(path: &Path, limits: &GridLimits) -> StoreResult<Snapshot> {
    let json = fs::read_to_string(path).map_err(|e| StoreError::io(path, e))?;

    let invalid = |source| StoreError::InvalidChart {
        path: path.to_path_buf(),
        source,
    };
    let snapshot = Snapshot::from_json(&json).map_err(invalid)?;
    SeatingState::from_snapshot(&snapshot, limits).map_err(invalid)?;

    Ok(snapshot)
}
