//! # Seating Manager
//!
//! Owns the chart and writes it through a persistence adapter after every
//! change.
//!
//! ## Data Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                                                                         │
//! │  Presentation ──► SeatingManager::op(..) ──► SeatingState transition   │
//! │       ▲                    │                          │                 │
//! │       │                    │              Changed? ───┤                 │
//! │       │                    │                  yes     │ no              │
//! │       │                    ▼                  │       ▼                 │
//! │       │         adapter.persist(snapshot) ◄───┘   (no write)           │
//! │       │            │                                                    │
//! │       │            └── Err ──► warn!() and carry on                     │
//! │       │                                                                 │
//! │       └────────── Ok(outcome) / Err(CoreError) ─────────────────────────│
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The adapter is a trait so the core never touches the file system itself.

use std::fmt::Display;

use tracing::{debug, info, warn};

use crate::error::CoreResult;
use crate::seating::SeatingState;
use crate::snapshot::Snapshot;
use crate::types::{
    ClearOutcome, Confirmation, DragSource, GridLimits, ResizeOutcome, SeatPosition,
    SeatedPerson, Transition,
};

// =============================================================================
// Persistence Adapter
// =============================================================================

/// Storage for the current chart.
///
/// `persist` is best-effort: the manager logs failures and keeps going.
pub trait PersistenceAdapter {
    type Error: Display;

    /// Writes the snapshot, replacing any previous one.
    fn persist(&mut self, snapshot: &Snapshot) -> Result<(), Self::Error>;

    /// Reads the last written snapshot, `None` if there is none yet.
    fn restore(&self) -> Result<Option<Snapshot>, Self::Error>;

    /// Sets an unusable stored chart aside so the next `persist` does not
    /// replace it. Stores with nothing worth keeping can rely on the default.
    fn quarantine(&mut self) -> Result<(), Self::Error> {
        Ok(())
    }
}

// =============================================================================
// Seating Manager
// =============================================================================

/// The seating chart plus its storage.
#[derive(Debug)]
pub struct SeatingManager<P> {
    state: SeatingState,
    adapter: P,
    limits: GridLimits,
}

impl<P: PersistenceAdapter> SeatingManager<P> {
    /// Starts with an empty 5x5 chart. Nothing is written until the first change.
    pub fn new(adapter: P, limits: GridLimits) -> Self {
        SeatingManager {
            state: SeatingState::default(),
            adapter,
            limits,
        }
    }

    /// Starts from whatever the adapter has stored.
    ///
    /// ## Fallback
    /// An unreadable or invalid stored chart is logged, quarantined through
    /// the adapter and replaced by the empty default.
    pub fn restore(mut adapter: P, limits: GridLimits) -> Self {
        let restored = match adapter.restore() {
            Ok(Some(snapshot)) => match SeatingState::from_snapshot(&snapshot, &limits) {
                Ok(state) => {
                    info!(
                        rows = state.rows(),
                        cols = state.cols(),
                        seated = state.seated_count(),
                        unassigned = state.unassigned().len(),
                        "Seating chart restored"
                    );
                    Some(state)
                }
                Err(e) => {
                    warn!(error = %e, "Stored seating chart is invalid, starting empty");
                    None
                }
            },
            Ok(None) => {
                debug!("No stored seating chart, starting empty");
                Some(SeatingState::default())
            }
            Err(e) => {
                warn!(error = %e, "Failed to read stored seating chart, starting empty");
                None
            }
        };

        let state = match restored {
            Some(state) => state,
            None => {
                if let Err(e) = adapter.quarantine() {
                    warn!(error = %e, "Failed to set aside the stored seating chart");
                }
                SeatingState::default()
            }
        };

        SeatingManager {
            state,
            adapter,
            limits,
        }
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    pub fn state(&self) -> &SeatingState {
        &self.state
    }

    pub fn limits(&self) -> GridLimits {
        self.limits
    }

    pub fn adapter(&self) -> &P {
        &self.adapter
    }

    /// Releases the adapter, e.g. to inspect what a test adapter recorded.
    pub fn into_adapter(self) -> P {
        self.adapter
    }

    // =========================================================================
    // Operations
    // =========================================================================

    /// Adds a person to the end of the unassigned list.
    pub fn add_person(&mut self, name: &str) -> CoreResult<String> {
        let name = self.state.add_person(name)?;
        debug!(name = %name, "Person added");
        self.persist();
        Ok(name)
    }

    /// Preview: who would be moved to the unassigned list by this resize.
    pub fn would_displace(&self, rows: u32, cols: u32) -> CoreResult<Vec<SeatedPerson>> {
        self.state.would_displace(rows, cols, &self.limits)
    }

    /// Resizes the grid; see [`SeatingState::resize`].
    pub fn resize_grid(
        &mut self,
        rows: u32,
        cols: u32,
        confirmation: Confirmation,
    ) -> CoreResult<ResizeOutcome> {
        let outcome = self.state.resize(rows, cols, confirmation, &self.limits)?;
        self.commit(outcome.transition());
        Ok(outcome)
    }

    /// Unseats everyone; see [`SeatingState::clear_all`].
    pub fn clear_all(&mut self, confirmation: Confirmation) -> ClearOutcome {
        let outcome = self.state.clear_all(confirmation);
        self.commit(outcome.transition());
        outcome
    }

    /// Drops a person onto a seat; see [`SeatingState::assign_to_seat`].
    pub fn assign_to_seat(
        &mut self,
        person: &str,
        target_row: u32,
        target_col: u32,
        source: DragSource,
    ) -> CoreResult<Transition> {
        let target = SeatPosition::new(target_row, target_col);
        let transition = self.state.assign_to_seat(person, target, source)?;
        debug!(person, %target, %source, ?transition, "assign_to_seat");
        self.commit(transition);
        Ok(transition)
    }

    /// Moves the occupant of a seat back to the unassigned list.
    pub fn unseat_person(&mut self, row: u32, col: u32) -> CoreResult<Transition> {
        let transition = self.state.unseat(SeatPosition::new(row, col))?;
        self.commit(transition);
        Ok(transition)
    }

    /// Returns the current chart as a snapshot.
    pub fn serialize(&self) -> Snapshot {
        self.state.to_snapshot()
    }

    /// Replaces the chart with a validated snapshot.
    ///
    /// On error the current chart is kept as is.
    pub fn deserialize(&mut self, snapshot: &Snapshot) -> CoreResult<Transition> {
        let state = SeatingState::from_snapshot(snapshot, &self.limits)?;

        let transition = if state == self.state {
            Transition::Unchanged
        } else {
            self.state = state;
            Transition::Changed
        };

        match transition {
            Transition::Changed => info!(
                rows = self.state.rows(),
                cols = self.state.cols(),
                "Seating chart loaded"
            ),
            Transition::Unchanged => debug!("Loaded seating chart matches the current one"),
        }
        self.commit(transition);
        Ok(transition)
    }

    /// Parses snapshot JSON and applies it.
    pub fn import_json(&mut self, json: &str) -> CoreResult<Transition> {
        let snapshot = Snapshot::from_json(json)?;
        self.deserialize(&snapshot)
    }

    // =========================================================================
    // Persistence
    // =========================================================================

    fn commit(&mut self, transition: Transition) {
        if transition.is_changed() {
            self.persist();
        }
    }

    fn persist(&mut self) {
        let snapshot = self.state.to_snapshot();
        if let Err(e) = self.adapter.persist(&snapshot) {
            warn!(error = %e, "Failed to persist seating chart");
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{CoreError, FormatError};

    /// Records every write; can be told to fail.
    #[derive(Debug, Default)]
    struct RecordingAdapter {
        stored: Option<Snapshot>,
        writes: usize,
        quarantined: usize,
        fail_writes: bool,
        fail_reads: bool,
    }

    impl PersistenceAdapter for RecordingAdapter {
        type Error = String;

        fn persist(&mut self, snapshot: &Snapshot) -> Result<(), String> {
            if self.fail_writes {
                return Err("disk full".to_string());
            }
            self.writes += 1;
            self.stored = Some(snapshot.clone());
            Ok(())
        }

        fn restore(&self) -> Result<Option<Snapshot>, String> {
            if self.fail_reads {
                return Err("unreadable".to_string());
            }
            Ok(self.stored.clone())
        }

        fn quarantine(&mut self) -> Result<(), String> {
            self.quarantined += 1;
            self.stored = None;
            Ok(())
        }
    }

    fn manager() -> SeatingManager<RecordingAdapter> {
        SeatingManager::new(RecordingAdapter::default(), GridLimits::default())
    }

    #[test]
    fn test_every_change_is_persisted() {
        let mut m = manager();
        m.add_person("Alice").unwrap();
        m.assign_to_seat("Alice", 0, 0, DragSource::Unassigned).unwrap();

        assert_eq!(m.adapter().writes, 2);
        assert_eq!(m.adapter().stored.as_ref(), Some(&m.serialize()));
    }

    #[test]
    fn test_no_ops_and_failures_do_not_write() {
        let mut m = manager();
        m.add_person("Alice").unwrap();
        assert!(m.add_person("Alice").is_err());
        assert!(m.add_person("  ").is_err());
        m.unseat_person(3, 3).unwrap();
        m.resize_grid(5, 5, Confirmation::Granted).unwrap();
        m.clear_all(Confirmation::Pending);
        m.clear_all(Confirmation::Granted);

        assert_eq!(m.adapter().writes, 1);
    }

    #[test]
    fn test_persist_failure_is_swallowed() {
        let adapter = RecordingAdapter {
            fail_writes: true,
            ..Default::default()
        };
        let mut m = SeatingManager::new(adapter, GridLimits::default());

        assert!(m.add_person("Alice").is_ok());
        assert_eq!(m.state().unassigned(), ["Alice"]);
    }

    #[test]
    fn test_restore_round_trip() {
        let mut m = manager();
        m.add_person("Alice").unwrap();
        m.add_person("Bob").unwrap();
        m.assign_to_seat("Bob", 2, 1, DragSource::Unassigned).unwrap();
        let expected = m.state().clone();

        let restored = SeatingManager::restore(m.into_adapter(), GridLimits::default());
        assert_eq!(restored.state(), &expected);
        assert_eq!(restored.adapter().quarantined, 0);
    }

    #[test]
    fn test_restore_falls_back_to_empty() {
        let bad = RecordingAdapter {
            stored: Some(Snapshot {
                rows: 0,
                cols: 5,
                seats: Default::default(),
                unassigned: vec![],
            }),
            ..Default::default()
        };
        let m = SeatingManager::restore(bad, GridLimits::default());
        assert_eq!(m.state(), &SeatingState::default());
        assert_eq!(m.adapter().quarantined, 1);

        let unreadable = RecordingAdapter {
            fail_reads: true,
            ..Default::default()
        };
        let m = SeatingManager::restore(unreadable, GridLimits::default());
        assert_eq!(m.state(), &SeatingState::default());
        assert_eq!(m.adapter().quarantined, 1);

        let m = SeatingManager::restore(RecordingAdapter::default(), GridLimits::default());
        assert_eq!(m.adapter().quarantined, 0);
    }

    #[test]
    fn test_chart_over_lowered_limit_is_quarantined() {
        let mut m = SeatingManager::new(RecordingAdapter::default(), GridLimits::new(20));
        m.resize_grid(12, 5, Confirmation::Pending).unwrap();
        m.add_person("Alice").unwrap();

        let mut m = SeatingManager::restore(m.into_adapter(), GridLimits::new(10));
        assert_eq!(m.state(), &SeatingState::default());
        assert_eq!(m.adapter().quarantined, 1);

        m.add_person("Bob").unwrap();
        assert_eq!(m.adapter().stored.as_ref().map(|s| s.rows), Some(5));
    }

    #[test]
    fn test_deserialize_invalid_keeps_state() {
        let mut m = manager();
        m.add_person("Alice").unwrap();
        let before = m.state().clone();

        let err = m
            .import_json(r#"{"rows":5,"cols":5,"seats":{"0-0":"Bo"},"unassigned":["Bo"]}"#)
            .unwrap_err();
        assert_eq!(
            err,
            CoreError::Format(FormatError::DuplicateName("Bo".to_string()))
        );
        assert_eq!(m.state(), &before);
        assert_eq!(m.adapter().writes, 1);
    }

    #[test]
    fn test_deserialize_identical_snapshot_is_unchanged() {
        let mut m = manager();
        m.add_person("Alice").unwrap();
        let snapshot = m.serialize();

        assert_eq!(m.deserialize(&snapshot).unwrap(), Transition::Unchanged);
        assert_eq!(m.adapter().writes, 1);
    }
}
