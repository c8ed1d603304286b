//! # JSON File Store
//!
//! Key-value persistence for the working chart: one compact JSON file per
//! key under the data directory.
//!
//! ## Write Path
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                                                                         │
//! │  persist(snapshot)                                                     │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  <dir>/.<key>.json.tmp  ◄── write compact JSON                         │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  rename ──► <dir>/<key>.json   (readers never see a half-written file) │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! A stored chart that cannot be loaded is renamed to `<key>.json.bad` so
//! the next write starts a fresh file instead of destroying it.

use std::fs;
use std::io::ErrorKind;
use std::path::PathBuf;

use tracing::{debug, info, warn};

use seatplan_core::{PersistenceAdapter, Snapshot};

use crate::config::SeatplanConfig;
use crate::error::{StoreError, StoreResult};

/// Chart storage backed by a JSON file.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    dir: PathBuf,
    key: String,
}

impl JsonFileStore {
    /// Creates a store for `key` inside `dir`. The directory is created on
    /// first write.
    pub fn new(dir: impl Into<PathBuf>, key: impl Into<String>) -> Self {
        JsonFileStore {
            dir: dir.into(),
            key: key.into(),
        }
    }

    /// Creates the store described by the configuration.
    pub fn from_config(config: &SeatplanConfig) -> StoreResult<Self> {
        Ok(JsonFileStore::new(config.data_dir()?, config.storage.key.clone()))
    }

    /// Path of the stored chart.
    pub fn path(&self) -> PathBuf {
        self.dir.join(format!("{}.json", self.key))
    }

    /// Where an unloadable chart is moved aside.
    pub fn quarantine_path(&self) -> PathBuf {
        self.dir.join(format!("{}.json.bad", self.key))
    }

    fn temp_path(&self) -> PathBuf {
        self.dir.join(format!(".{}.json.tmp", self.key))
    }
}

impl PersistenceAdapter for JsonFileStore {
    type Error = StoreError;

    fn persist(&mut self, snapshot: &Snapshot) -> StoreResult<()> {
        let json = snapshot.to_json().map_err(|e| StoreError::Corrupt {
            path: self.path(),
            reason: e.to_string(),
        })?;

        fs::create_dir_all(&self.dir).map_err(|e| StoreError::io(&self.dir, e))?;

        let temp = self.temp_path();
        let path = self.path();
        fs::write(&temp, json).map_err(|e| StoreError::io(&temp, e))?;
        if let Err(e) = fs::rename(&temp, &path) {
            let _ = fs::remove_file(&temp);
            return Err(StoreError::io(&path, e));
        }

        debug!(path = %path.display(), "Seating chart persisted");
        Ok(())
    }

    fn restore(&self) -> StoreResult<Option<Snapshot>> {
        let path = self.path();
        let json = match fs::read_to_string(&path) {
            Ok(json) => json,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(StoreError::io(path, e)),
        };

        let snapshot = Snapshot::from_json(&json).map_err(|e| StoreError::Corrupt {
            path: path.clone(),
            reason: e.to_string(),
        })?;

        info!(path = %path.display(), "Stored seating chart found");
        Ok(Some(snapshot))
    }

    fn quarantine(&mut self) -> StoreResult<()> {
        let path = self.path();
        let bad = self.quarantine_path();
        match fs::rename(&path, &bad) {
            Ok(()) => {
                warn!(from = %path.display(), to = %bad.display(), "Stored seating chart set aside");
                Ok(())
            }
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(StoreError::io(path, e)),
        }
    }
}
