//! # Seat Commands
//!
//! Drag-and-drop from the command line.
//!
//! ## Drop Outcomes
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  from            target            result                               │
//! │  ──────────────  ────────────────  ──────────────────────────────────   │
//! │  unassigned      empty seat        seated, removed from the list        │
//! │  unassigned      occupied seat     nothing changes                      │
//! │  seat A          empty seat B      moved, A becomes empty               │
//! │  seat A          occupied seat B   the two people swap                  │
//! │  seat A          seat A            nothing changes                      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use tracing::debug;

use seatplan_core::{DragSource, Location, SeatPosition, Transition};

use crate::commands::ChartResponse;
use crate::error::ApiError;
use crate::state::ChartState;

/// Drops `name` onto seat (`row`, `col`).
///
/// ## Arguments
/// * `from` - Where the person is dragged from. `None` uses wherever the
///   person currently is.
pub fn assign_seat(
    state: &mut ChartState,
    name: &str,
    row: u32,
    col: u32,
    from: Option<DragSource>,
) -> Result<ChartResponse, ApiError> {
    debug!(name = %name, row, col, ?from, "assign command");

    state.with_chart_mut(|c| {
        let source = from.unwrap_or_else(|| match c.state().locate(name.trim()) {
            Some(Location::Seat(position)) => DragSource::Seat(position),
            _ => DragSource::Unassigned,
        });

        let target = SeatPosition::new(row, col);
        let transition = c.assign_to_seat(name, row, col, source)?;
        let response = ChartResponse::from(c.state());

        Ok(match transition {
            Transition::Changed => response,
            Transition::Unchanged => {
                response.with_notice(format!("{} unchanged; nothing to do", target.label()))
            }
        })
    })
}

/// Moves whoever sits at (`row`, `col`) back to the unassigned list.
///
/// An empty seat is not an error.
pub fn unseat(state: &mut ChartState, row: u32, col: u32) -> Result<ChartResponse, ApiError> {
    debug!(row, col, "unseat command");

    state.with_chart_mut(|c| {
        let transition = c.unseat_person(row, col)?;
        let response = ChartResponse::from(c.state());

        Ok(match transition {
            Transition::Changed => response,
            Transition::Unchanged => response.with_notice(format!(
                "{} is already empty",
                SeatPosition::new(row, col).label()
            )),
        })
    })
}
