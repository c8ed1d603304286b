//! # Seating State
//!
//! The seating model and every transition on it.
//!
//! ## Where People Can Be
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                                                                         │
//! │   add_person ──► ┌──────────────┐  assign (Unassigned) ┌────────────┐  │
//! │                  │  unassigned  │ ───────────────────► │   seats    │  │
//! │                  │  (ordered)   │ ◄─────────────────── │  (sparse)  │  │
//! │                  └──────────────┘  unseat / clear /    └────────────┘  │
//! │                                    resize (displaced)    │    ▲        │
//! │                                                          └────┘        │
//! │                                             assign (Seat): move / swap │
//! │                                                                         │
//! │  Every name is in exactly one of the two boxes, exactly once.          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Each method validates everything it needs before the first write, so an
//! `Err` always means the state is exactly what it was before the call.

use std::collections::{BTreeMap, HashSet};

use tracing::debug;

use crate::error::{CoreError, CoreResult, ValidationError};
use crate::types::{
    ClearOutcome, Confirmation, DragSource, GridLimits, ResizeOutcome, SeatPosition,
    SeatedPerson, Transition,
};
use crate::validation::{validate_grid_size, validate_person_name, validate_seat};
use crate::{DEFAULT_COLS, DEFAULT_ROWS};

/// Where a person currently is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Location {
    /// Index into the unassigned list.
    Unassigned(usize),
    Seat(SeatPosition),
}

/// The seating chart.
///
/// ## Invariants
/// - A name is either in `unassigned` once or the value of one `seats` entry
/// - Every seat key lies inside `rows` x `cols`
/// - Names are stored trimmed and non-empty
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeatingState {
    rows: u32,
    cols: u32,
    seats: BTreeMap<SeatPosition, String>,
    unassigned: Vec<String>,
}

impl Default for SeatingState {
    /// An empty 5x5 chart.
    fn default() -> Self {
        SeatingState {
            rows: DEFAULT_ROWS,
            cols: DEFAULT_COLS,
            seats: BTreeMap::new(),
            unassigned: Vec::new(),
        }
    }
}

impl SeatingState {
    /// Creates an empty chart of the given size.
    pub fn new(rows: u32, cols: u32, limits: &GridLimits) -> CoreResult<Self> {
        validate_grid_size(rows, cols, limits)?;
        Ok(SeatingState {
            rows,
            cols,
            ..SeatingState::default()
        })
    }

    /// Builds a state from parts that were already validated.
    pub(crate) fn from_parts(
        rows: u32,
        cols: u32,
        seats: BTreeMap<SeatPosition, String>,
        unassigned: Vec<String>,
    ) -> Self {
        SeatingState {
            rows,
            cols,
            seats,
            unassigned,
        }
    }

    // =========================================================================
    // Queries
    // =========================================================================

    pub fn rows(&self) -> u32 {
        self.rows
    }

    pub fn cols(&self) -> u32 {
        self.cols
    }

    /// Occupied seats in row-then-column order.
    pub fn seats(&self) -> &BTreeMap<SeatPosition, String> {
        &self.seats
    }

    /// The unassigned list in display order.
    pub fn unassigned(&self) -> &[String] {
        &self.unassigned
    }

    /// Returns who sits at `position`, if anyone.
    pub fn occupant(&self, position: SeatPosition) -> Option<&str> {
        self.seats.get(&position).map(String::as_str)
    }

    /// Total number of seats in the grid.
    pub fn capacity(&self) -> u64 {
        u64::from(self.rows) * u64::from(self.cols)
    }

    /// Number of occupied seats.
    pub fn seated_count(&self) -> usize {
        self.seats.len()
    }

    /// Finds a person by (trimmed) name.
    pub fn locate(&self, name: &str) -> Option<Location> {
        let name = name.trim();
        if let Some(index) = self.unassigned.iter().position(|p| p == name) {
            return Some(Location::Unassigned(index));
        }
        self.seats
            .iter()
            .find(|(_, p)| p.as_str() == name)
            .map(|(position, _)| Location::Seat(*position))
    }

    /// Checks whether the name is anywhere on the chart.
    pub fn contains_person(&self, name: &str) -> bool {
        self.locate(name).is_some()
    }

    /// Occupied seats that fall outside a `rows` x `cols` grid.
    fn displaced_by(&self, rows: u32, cols: u32) -> Vec<SeatedPerson> {
        self.seats
            .iter()
            .filter(|(position, _)| !position.is_within(rows, cols))
            .map(|(position, name)| SeatedPerson {
                position: *position,
                name: name.clone(),
            })
            .collect()
    }

    /// Everyone currently seated, row-then-column.
    pub fn seated(&self) -> Vec<SeatedPerson> {
        self.seats
            .iter()
            .map(|(position, name)| SeatedPerson {
                position: *position,
                name: name.clone(),
            })
            .collect()
    }

    // =========================================================================
    // Transitions
    // =========================================================================

    /// Appends a new person to the end of the unassigned list.
    ///
    /// Returns the stored (trimmed) name.
    pub fn add_person(&mut self, name: &str) -> CoreResult<String> {
        let name = validate_person_name(name)?;

        if self.contains_person(&name) {
            return Err(CoreError::duplicate(name));
        }

        self.unassigned.push(name.clone());
        Ok(name)
    }

    /// Lists who would lose their seat if the grid became `rows` x `cols`.
    pub fn would_displace(
        &self,
        rows: u32,
        cols: u32,
        limits: &GridLimits,
    ) -> CoreResult<Vec<SeatedPerson>> {
        validate_grid_size(rows, cols, limits)?;
        Ok(self.displaced_by(rows, cols))
    }

    /// Resizes the grid, migrating displaced people once confirmed.
    ///
    /// ## Flow
    /// ```text
    /// resize(3, 3, Pending)
    ///      │
    ///      ├── nobody displaced ──► apply now ──► Resized { [] }
    ///      │
    ///      └── someone at (4,4) ──► NeedsConfirmation { [(4,4) Dana] }
    ///
    /// resize(3, 3, Granted) ──► Dana appended to unassigned ──► Resized
    /// ```
    pub fn resize(
        &mut self,
        rows: u32,
        cols: u32,
        confirmation: Confirmation,
        limits: &GridLimits,
    ) -> CoreResult<ResizeOutcome> {
        let displaced = self.would_displace(rows, cols, limits)?;

        if rows == self.rows && cols == self.cols {
            return Ok(ResizeOutcome::Unchanged);
        }

        if !displaced.is_empty() && !confirmation.is_granted() {
            return Ok(ResizeOutcome::NeedsConfirmation { displaced });
        }

        for person in &displaced {
            self.seats.remove(&person.position);
            self.unassigned.push(person.name.clone());
        }
        self.rows = rows;
        self.cols = cols;

        debug!(rows, cols, displaced = displaced.len(), "Grid resized");
        Ok(ResizeOutcome::Resized { displaced })
    }

    /// Moves every seated person back to the unassigned list once confirmed.
    pub fn clear_all(&mut self, confirmation: Confirmation) -> ClearOutcome {
        let seated = self.seated();

        if !confirmation.is_granted() {
            return ClearOutcome::NeedsConfirmation { seated };
        }
        if seated.is_empty() {
            return ClearOutcome::Unchanged;
        }

        self.seats.clear();
        self.unassigned
            .extend(seated.iter().map(|person| person.name.clone()));

        ClearOutcome::Cleared { moved: seated }
    }

    /// Drops `person` onto `target`.
    ///
    /// ## Rules
    /// | source            | target empty           | target holds `q`        |
    /// |-------------------|------------------------|-------------------------|
    /// | `Unassigned`      | seat, leave the pool   | no-op                   |
    /// | `Seat(origin)`    | move, vacate origin    | swap `q` into origin    |
    /// | `Seat(target)`    | -                      | no-op                   |
    pub fn assign_to_seat(
        &mut self,
        person: &str,
        target: SeatPosition,
        source: DragSource,
    ) -> CoreResult<Transition> {
        let person = validate_person_name(person)?;
        validate_seat(target, self.rows, self.cols)?;

        match source {
            DragSource::Unassigned => {
                if self.seats.contains_key(&target) {
                    debug!(%target, "Drop from pool onto occupied seat ignored");
                    return Ok(Transition::Unchanged);
                }

                let index = self
                    .unassigned
                    .iter()
                    .position(|p| *p == person)
                    .ok_or_else(|| ValidationError::NotUnassigned {
                        name: person.clone(),
                    })?;

                self.unassigned.remove(index);
                self.seats.insert(target, person);
                Ok(Transition::Changed)
            }
            DragSource::Seat(origin) => {
                validate_seat(origin, self.rows, self.cols)?;

                if origin == target {
                    return Ok(Transition::Unchanged);
                }
                if self.occupant(origin) != Some(person.as_str()) {
                    return Err(ValidationError::SourceMismatch {
                        name: person,
                        origin,
                    }
                    .into());
                }

                match self.seats.remove(&target) {
                    Some(occupant) => {
                        debug!(%origin, %target, "Swapping seats");
                        self.seats.insert(origin, occupant);
                    }
                    None => {
                        self.seats.remove(&origin);
                    }
                }
                self.seats.insert(target, person);
                Ok(Transition::Changed)
            }
        }
    }

    /// Sends the occupant of `position` to the end of the unassigned list.
    ///
    /// An empty seat is a no-op.
    pub fn unseat(&mut self, position: SeatPosition) -> CoreResult<Transition> {
        validate_seat(position, self.rows, self.cols)?;

        match self.seats.remove(&position) {
            Some(name) => {
                self.unassigned.push(name);
                Ok(Transition::Changed)
            }
            None => Ok(Transition::Unchanged),
        }
    }

    // =========================================================================
    // Invariant Checks
    // =========================================================================

    /// Verifies the uniqueness and bounds invariants.
    ///
    /// Returns the first offending name or seat.
    pub fn check_invariants(&self) -> Result<(), String> {
        let mut seen = HashSet::new();

        for (position, name) in &self.seats {
            if !position.is_within(self.rows, self.cols) {
                return Err(format!("seat {} outside {}x{}", position, self.rows, self.cols));
            }
            if !seen.insert(name.as_str()) {
                return Err(format!("{} seated twice", name));
            }
        }
        for name in &self.unassigned {
            if !seen.insert(name.as_str()) {
                return Err(format!("{} listed twice", name));
            }
        }
        if seen.iter().any(|name| name.trim().is_empty() || name.trim() != *name) {
            return Err("untrimmed or empty name".to_string());
        }

        Ok(())
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
