//! # Commands Module
//!
//! One function per subcommand. Each takes the owned [`ChartState`] and
//! returns the chart as it stands afterwards.
//!
//! ## Command Organization
//! ```text
//! commands/
//! ├── mod.rs       ◄─── You are here (ChartResponse)
//! ├── person.rs    ◄─── show, add
//! ├── seat.rs      ◄─── assign (drag and drop), unseat
//! ├── grid.rs      ◄─── resize, clear (two-phase, confirmation)
//! └── exchange.rs  ◄─── export, import
//! ```
//!
//! ## How Commands Work
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                                                                         │
//! │  seatplan assign Alice 0 1                                             │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  seat::assign_seat(&mut state, "Alice", 0, 1, None)                    │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  SeatingManager::assign_to_seat ──► persist on change                  │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  Result<ChartResponse, ApiError> ──► render as text or --json          │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! [`ChartState`]: crate::state::ChartState

pub mod exchange;
pub mod grid;
pub mod person;
pub mod seat;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use seatplan_core::{SeatedPerson, SeatingState};

/// The chart as returned by every command.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct ChartResponse {
    pub rows: u32,
    pub cols: u32,

    /// Occupied seats, row by row.
    pub seats: Vec<SeatedPerson>,

    pub unassigned: Vec<String>,

    /// Number of occupied seats.
    pub occupied: usize,

    /// rows x cols
    #[ts(type = "number")]
    pub capacity: u64,

    /// What the command did, when that is not obvious from the chart.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[ts(optional)]
    pub notice: Option<String>,
}

impl ChartResponse {
    pub fn with_notice(mut self, notice: impl Into<String>) -> Self {
        self.notice = Some(notice.into());
        self
    }
}

impl From<&SeatingState> for ChartResponse {
    fn from(state: &SeatingState) -> Self {
        ChartResponse {
            rows: state.rows(),
            cols: state.cols(),
            seats: state.seated(),
            unassigned: state.unassigned().to_vec(),
            occupied: state.seated_count(),
            capacity: state.capacity(),
            notice: None,
        }
    }
}

/// Comma-separated "Name (R1 C2)" list for previews and notices.
pub(crate) fn describe_people(people: &[SeatedPerson]) -> String {
    people
        .iter()
        .map(|p| format!("{} ({})", p.name, p.position.label()))
        .collect::<Vec<_>>()
        .join(", ")
}
