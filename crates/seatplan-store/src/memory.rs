//! In-memory chart storage for ephemeral sessions and tests.

use std::convert::Infallible;

use seatplan_core::{PersistenceAdapter, Snapshot};

/// Keeps the last persisted snapshot in memory and counts writes.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    snapshot: Option<Snapshot>,
    writes: usize,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts with a chart already stored.
    pub fn with_snapshot(snapshot: Snapshot) -> Self {
        MemoryStore {
            snapshot: Some(snapshot),
            writes: 0,
        }
    }

    /// Number of successful `persist` calls.
    pub fn writes(&self) -> usize {
        self.writes
    }

    pub fn snapshot(&self) -> Option<&Snapshot> {
        self.snapshot.as_ref()
    }
}

impl PersistenceAdapter for MemoryStore {
    type Error = Infallible;

    fn persist(&mut self, snapshot: &Snapshot) -> Result<(), Infallible> {
        self.snapshot = Some(snapshot.clone());
        self.writes += 1;
        Ok(())
    }

    fn restore(&self) -> Result<Option<Snapshot>, Infallible> {
        Ok(self.snapshot.clone())
    }
}
