//! # Snapshot Format
//!
//! The serialized chart used for persistence and file exchange.
//!
//! ## Wire Format
//! ```json
//! {
//!   "rows": 5,
//!   "cols": 5,
//!   "seats": { "0-0": "Alice", "1-1": "Bob" },
//!   "unassigned": ["Cara"]
//! }
//! ```
//!
//! ## Load Checks
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  JSON text ──► Snapshot (serde)          missing/negative rows → Json  │
//! │                   │                                                     │
//! │                   ▼                                                     │
//! │  SeatingState::from_snapshot                                           │
//! │  ├── rows/cols in [1, max]              → InvalidDimension             │
//! │  ├── every key parses as row-col        → InvalidSeatKey               │
//! │  ├── every key inside the grid          → SeatOutOfBounds              │
//! │  ├── names non-empty after trim         → EmptyName                    │
//! │  └── names unique across both places    → DuplicateName                │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::collections::{BTreeMap, HashSet};

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::{FormatError, FormatResult};
use crate::seating::SeatingState;
use crate::types::{GridLimits, SeatPosition};

/// Complete serialized seating state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Snapshot {
    pub rows: u32,
    pub cols: u32,
    /// Seat key (`"row-col"`) to person name.
    #[serde(default)]
    pub seats: BTreeMap<String, String>,
    #[serde(default)]
    pub unassigned: Vec<String>,
}

impl Snapshot {
    /// Parses snapshot JSON. Structural checks only; see
    /// [`SeatingState::from_snapshot`] for invariant checks.
    pub fn from_json(json: &str) -> FormatResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Compact JSON, as written to the key-value store.
    pub fn to_json(&self) -> FormatResult<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// Two-space indented JSON, as written to exported chart files.
    pub fn to_json_pretty(&self) -> FormatResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

impl SeatingState {
    /// Serializes the chart.
    pub fn to_snapshot(&self) -> Snapshot {
        Snapshot {
            rows: self.rows(),
            cols: self.cols(),
            seats: self
                .seats()
                .iter()
                .map(|(position, name)| (position.key(), name.clone()))
                .collect(),
            unassigned: self.unassigned().to_vec(),
        }
    }

    /// Validates a snapshot and builds a chart from it.
    ///
    /// Names are trimmed on the way in.
    pub fn from_snapshot(snapshot: &Snapshot, limits: &GridLimits) -> FormatResult<Self> {
        check_dimension("rows", snapshot.rows, limits)?;
        check_dimension("cols", snapshot.cols, limits)?;

        let mut seen = HashSet::new();
        let mut claim = |name: &str| -> FormatResult<String> {
            let name = name.trim();
            if name.is_empty() {
                return Err(FormatError::EmptyName);
            }
            if !seen.insert(name.to_string()) {
                return Err(FormatError::DuplicateName(name.to_string()));
            }
            Ok(name.to_string())
        };

        let mut seats = BTreeMap::new();
        for (key, name) in &snapshot.seats {
            let position: SeatPosition = key.parse()?;
            if !position.is_within(snapshot.rows, snapshot.cols) {
                return Err(FormatError::SeatOutOfBounds {
                    key: key.clone(),
                    rows: snapshot.rows,
                    cols: snapshot.cols,
                });
            }
            seats.insert(position, claim(name)?);
        }

        let unassigned = snapshot
            .unassigned
            .iter()
            .map(|name| claim(name))
            .collect::<FormatResult<Vec<_>>>()?;

        Ok(SeatingState::from_parts(
            snapshot.rows,
            snapshot.cols,
            seats,
            unassigned,
        ))
    }
}

fn check_dimension(field: &str, value: u32, limits: &GridLimits) -> FormatResult<()> {
    if !limits.allows(value) {
        return Err(FormatError::InvalidDimension {
            field: field.to_string(),
            value,
            max: limits.max_dimension,
        });
    }
    Ok(())
}
