//! # Chart State
//!
//! The seating manager for this invocation plus the configuration it was
//! opened with.
//!
//! ## Store Selection
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                                                                         │
//! │  seatplan <cmd>               ──► ChartStore::File                      │
//! │                                   <data_dir>/<key>.json, restored       │
//! │                                                                         │
//! │  seatplan --ephemeral <cmd>   ──► ChartStore::Memory                    │
//! │                                   empty 5x5 chart, nothing written      │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use seatplan_core::{PersistenceAdapter, SeatingManager, Snapshot};
use seatplan_store::{JsonFileStore, MemoryStore, SeatplanConfig, StoreError, StoreResult};

/// Where this session's chart is kept.
#[derive(Debug)]
pub enum ChartStore {
    File(JsonFileStore),
    Memory(MemoryStore),
}

impl PersistenceAdapter for ChartStore {
    type Error = StoreError;

    fn persist(&mut self, snapshot: &Snapshot) -> StoreResult<()> {
        match self {
            ChartStore::File(store) => store.persist(snapshot),
            ChartStore::Memory(store) => store.persist(snapshot).map_err(|never| match never {}),
        }
    }

    fn restore(&self) -> StoreResult<Option<Snapshot>> {
        match self {
            ChartStore::File(store) => store.restore(),
            ChartStore::Memory(store) => store.restore().map_err(|never| match never {}),
        }
    }

    fn quarantine(&mut self) -> StoreResult<()> {
        match self {
            ChartStore::File(store) => store.quarantine(),
            ChartStore::Memory(store) => store.quarantine().map_err(|never| match never {}),
        }
    }
}

/// Owned state for one CLI invocation.
#[derive(Debug)]
pub struct ChartState {
    manager: SeatingManager<ChartStore>,
    config: SeatplanConfig,
}

impl ChartState {
    /// Opens the configured file store and restores the chart from it.
    pub fn open(config: SeatplanConfig) -> StoreResult<Self> {
        let store = ChartStore::File(JsonFileStore::from_config(&config)?);
        Ok(Self::with_store(config, store))
    }

    /// Starts an empty chart that is never written to disk.
    pub fn ephemeral(config: SeatplanConfig) -> Self {
        Self::with_store(config, ChartStore::Memory(MemoryStore::new()))
    }

    /// Restores from `store` under the configured grid limits.
    pub fn with_store(config: SeatplanConfig, store: ChartStore) -> Self {
        let manager = SeatingManager::restore(store, config.limits());
        ChartState { manager, config }
    }

    pub fn config(&self) -> &SeatplanConfig {
        &self.config
    }

    /// Executes a function with read access to the manager.
    pub fn with_chart<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&SeatingManager<ChartStore>) -> R,
    {
        f(&self.manager)
    }

    /// Executes a function with write access to the manager.
    ///
    /// ## Usage
    /// ```rust,ignore
    /// state.with_chart_mut(|chart| chart.add_person("Alice"))?;
    /// ```
    pub fn with_chart_mut<F, R>(&mut self, f: F) -> R
    where
        F: FnOnce(&mut SeatingManager<ChartStore>) -> R,
    {
        f(&mut self.manager)
    }
}
