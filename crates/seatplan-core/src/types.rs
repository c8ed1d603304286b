//! # Domain Types
//!
//! Value types shared by the seating model, the manager and its callers.
//!
//! ## Type Overview
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │  SeatPosition   │   │   DragSource    │   │  Confirmation   │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  row (0-based)  │   │  Unassigned     │   │  Pending        │       │
//! │  │  col (0-based)  │   │  Seat(position) │   │  Granted        │       │
//! │  │  key "row-col"  │   └─────────────────┘   └─────────────────┘       │
//! │  └─────────────────┘                                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │  Transition     │   │  ResizeOutcome  │   │  ClearOutcome   │       │
//! │  │  Changed        │   │  Resized        │   │  Cleared        │       │
//! │  │  Unchanged      │   │  NeedsConfirm.  │   │  NeedsConfirm.  │       │
//! │  └─────────────────┘   │  Unchanged      │   │  Unchanged      │       │
//! │                        └─────────────────┘   └─────────────────┘       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::FormatError;
use crate::MAX_GRID_DIMENSION;

// =============================================================================
// Seat Position
// =============================================================================

/// A zero-based grid cell address.
///
/// Ordering is row first, then column, which is the order displaced people
/// migrate to the unassigned list.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS,
)]
#[ts(export)]
pub struct SeatPosition {
    pub row: u32,
    pub col: u32,
}

impl SeatPosition {
    /// Creates a position from zero-based coordinates.
    #[inline]
    pub const fn new(row: u32, col: u32) -> Self {
        SeatPosition { row, col }
    }

    /// Returns the snapshot key, e.g. `"2-3"`.
    pub fn key(&self) -> String {
        self.to_string()
    }

    /// Checks whether the position lies inside a `rows` x `cols` grid.
    #[inline]
    pub const fn is_within(&self, rows: u32, cols: u32) -> bool {
        self.row < rows && self.col < cols
    }

    /// Human-facing label, one-based (`R1 C1` for the top-left seat).
    pub fn label(&self) -> String {
        format!("R{} C{}", self.row + 1, self.col + 1)
    }
}

impl fmt::Display for SeatPosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.row, self.col)
    }
}

/// Parses a seats key: decimal digits, no sign, no leading zeros.
impl FromStr for SeatPosition {
    type Err = FormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || FormatError::InvalidSeatKey(s.to_string());

        let (row, col) = s.split_once('-').ok_or_else(invalid)?;
        let row = parse_index(row).ok_or_else(invalid)?;
        let col = parse_index(col).ok_or_else(invalid)?;

        Ok(SeatPosition { row, col })
    }
}

fn parse_index(part: &str) -> Option<u32> {
    if part.is_empty() || !part.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    if part.len() > 1 && part.starts_with('0') {
        return None;
    }
    part.parse().ok()
}

// =============================================================================
// Drag Source
// =============================================================================

/// Where a person is being dragged from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum DragSource {
    /// From the unassigned list.
    Unassigned,
    /// From an occupied seat.
    Seat(SeatPosition),
}

impl fmt::Display for DragSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DragSource::Unassigned => write!(f, "unassigned"),
            DragSource::Seat(position) => write!(f, "{}", position),
        }
    }
}

/// Accepts `unassigned` (or `pool`) and seat keys such as `1-2`.
impl FromStr for DragSource {
    type Err = FormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "unassigned" | "pool" => Ok(DragSource::Unassigned),
            key => key.parse().map(DragSource::Seat),
        }
    }
}

// =============================================================================
// Grid Limits
// =============================================================================

/// Upper bound on grid dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GridLimits {
    pub max_dimension: u32,
}

impl GridLimits {
    /// Creates limits with the given maximum rows/cols.
    #[inline]
    pub const fn new(max_dimension: u32) -> Self {
        GridLimits { max_dimension }
    }

    /// Checks whether a dimension is in `[1, max_dimension]`.
    #[inline]
    pub const fn allows(&self, value: u32) -> bool {
        value >= 1 && value <= self.max_dimension
    }
}

impl Default for GridLimits {
    fn default() -> Self {
        GridLimits::new(MAX_GRID_DIMENSION)
    }
}

// =============================================================================
// Operation Outcomes
// =============================================================================

/// Two-phase commit flag for destructive operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Confirmation {
    /// Caller only wants to know what would happen.
    #[default]
    Pending,
    /// Caller has confirmed; apply the change.
    Granted,
}

impl Confirmation {
    #[inline]
    pub const fn is_granted(&self) -> bool {
        matches!(self, Confirmation::Granted)
    }
}

impl From<bool> for Confirmation {
    fn from(granted: bool) -> Self {
        if granted {
            Confirmation::Granted
        } else {
            Confirmation::Pending
        }
    }
}

/// Whether an operation changed the model.
///
/// Only `Changed` triggers a persistence write.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    Changed,
    Unchanged,
}

impl Transition {
    #[inline]
    pub const fn is_changed(&self) -> bool {
        matches!(self, Transition::Changed)
    }
}

/// A person sitting in a specific seat.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct SeatedPerson {
    pub position: SeatPosition,
    pub name: String,
}

/// Result of a resize request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResizeOutcome {
    /// Dimensions updated; `displaced` people moved to the unassigned list.
    Resized { displaced: Vec<SeatedPerson> },
    /// Seats would be lost; nothing changed until the caller confirms.
    NeedsConfirmation { displaced: Vec<SeatedPerson> },
    /// The grid already has the requested dimensions.
    Unchanged,
}

impl ResizeOutcome {
    pub fn transition(&self) -> Transition {
        match self {
            ResizeOutcome::Resized { .. } => Transition::Changed,
            _ => Transition::Unchanged,
        }
    }
}

/// Result of a clear-all request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClearOutcome {
    /// Everyone listed in `moved` went back to the unassigned list.
    Cleared { moved: Vec<SeatedPerson> },
    /// Nothing changed; `seated` is who would be moved.
    NeedsConfirmation { seated: Vec<SeatedPerson> },
    /// Confirmed, but nobody was seated.
    Unchanged,
}

impl ClearOutcome {
    pub fn transition(&self) -> Transition {
        match self {
            ClearOutcome::Cleared { .. } => Transition::Changed,
            _ => Transition::Unchanged,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seat_key_round_trip() {
        let pos = SeatPosition::new(12, 3);
        assert_eq!(pos.key(), "12-3");
        assert_eq!("12-3".parse::<SeatPosition>().unwrap(), pos);
        assert_eq!("0-0".parse::<SeatPosition>().unwrap(), SeatPosition::new(0, 0));
    }

    #[test]
    fn test_seat_key_rejects_malformed() {
        for key in ["", "1", "1-", "-1", "01-2", "1-02", "+1-2", "1--2", "a-b", "1-2-3", " 1-2"] {
            assert!(key.parse::<SeatPosition>().is_err(), "accepted {:?}", key);
        }
    }

    #[test]
    fn test_seat_ordering_is_row_major() {
        let mut positions = vec![
            SeatPosition::new(1, 0),
            SeatPosition::new(0, 4),
            SeatPosition::new(0, 1),
        ];
        positions.sort();
        assert_eq!(
            positions,
            vec![
                SeatPosition::new(0, 1),
                SeatPosition::new(0, 4),
                SeatPosition::new(1, 0),
            ]
        );
    }

    #[test]
    fn test_seat_label() {
        assert_eq!(SeatPosition::new(0, 0).label(), "R1 C1");
        assert_eq!(SeatPosition::new(2, 4).label(), "R3 C5");
    }

    #[test]
    fn test_drag_source_parsing() {
        assert_eq!("unassigned".parse::<DragSource>().unwrap(), DragSource::Unassigned);
        assert_eq!("Pool".parse::<DragSource>().unwrap(), DragSource::Unassigned);
        assert_eq!(
            "1-2".parse::<DragSource>().unwrap(),
            DragSource::Seat(SeatPosition::new(1, 2))
        );
        assert!("seat".parse::<DragSource>().is_err());
    }

    #[test]
    fn test_grid_limits() {
        let limits = GridLimits::default();
        assert!(limits.allows(1));
        assert!(limits.allows(20));
        assert!(!limits.allows(0));
        assert!(!limits.allows(21));
    }

    #[test]
    fn test_confirmation_from_bool() {
        assert!(Confirmation::from(true).is_granted());
        assert!(!Confirmation::from(false).is_granted());
        assert_eq!(Confirmation::default(), Confirmation::Pending);
    }
}
