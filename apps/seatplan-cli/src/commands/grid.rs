//! # Grid Commands
//!
//! Resize and clear-all. Both can unseat people, so both run in two phases.
//!
//! ## Two-Phase Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                                                                         │
//! │  resize 3 3                                                            │
//! │      │                                                                  │
//! │      ▼                                                                  │
//! │  manager.resize_grid(.., Pending)                                      │
//! │      │                                                                  │
//! │      ├── Resized / Unchanged ──────────────────────────► response      │
//! │      │                                                                  │
//! │      └── NeedsConfirmation { displaced }                               │
//! │              │                                                          │
//! │              ▼                                                          │
//! │          confirm("Resizing to 3x3 will unseat: Eve (R5 C5)")           │
//! │              │                                                          │
//! │              ├── yes ──► manager.resize_grid(.., Granted) ─► response  │
//! │              └── no  ──► CANCELLED, chart untouched                    │
//! │                                                                         │
//! │  --yes skips the prompt and goes straight to Granted.                  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use tracing::{debug, info};

use seatplan_core::{ClearOutcome, Confirmation, ResizeOutcome};

use crate::commands::{describe_people, ChartResponse};
use crate::error::ApiError;
use crate::state::ChartState;

/// Resizes the grid to `rows` x `cols`.
///
/// ## Arguments
/// * `yes` - Apply without asking, even if people would be unseated
/// * `confirm` - Asked with a preview when people would be unseated
pub fn resize_grid<F>(
    state: &mut ChartState,
    rows: u32,
    cols: u32,
    yes: bool,
    confirm: F,
) -> Result<ChartResponse, ApiError>
where
    F: FnOnce(&str) -> bool,
{
    debug!(rows, cols, yes, "resize command");

    state.with_chart_mut(|c| {
        let mut outcome = c.resize_grid(rows, cols, Confirmation::from(yes))?;

        if let ResizeOutcome::NeedsConfirmation { displaced } = &outcome {
            let preview = format!(
                "Resizing to {}x{} will unseat: {}",
                rows,
                cols,
                describe_people(displaced)
            );
            if !confirm(&preview) {
                return Err(ApiError::cancelled("Resize cancelled; chart unchanged"));
            }
            outcome = c.resize_grid(rows, cols, Confirmation::Granted)?;
        }

        let response = ChartResponse::from(c.state());
        Ok(match outcome {
            ResizeOutcome::Resized { displaced } if displaced.is_empty() => {
                response.with_notice(format!("Resized to {}x{}", rows, cols))
            }
            ResizeOutcome::Resized { displaced } => {
                info!(count = displaced.len(), "People unseated by resize");
                response.with_notice(format!(
                    "Resized to {}x{}; moved to unassigned: {}",
                    rows,
                    cols,
                    describe_people(&displaced)
                ))
            }
            ResizeOutcome::Unchanged => {
                response.with_notice(format!("Grid is already {}x{}", rows, cols))
            }
            ResizeOutcome::NeedsConfirmation { .. } => {
                return Err(ApiError::internal("Resize still awaiting confirmation"))
            }
        })
    })
}

/// Moves every seated person back to the unassigned list.
pub fn clear_chart<F>(state: &mut ChartState, yes: bool, confirm: F) -> Result<ChartResponse, ApiError>
where
    F: FnOnce(&str) -> bool,
{
    debug!(yes, "clear command");

    state.with_chart_mut(|c| {
        let mut outcome = c.clear_all(Confirmation::from(yes));

        if let ClearOutcome::NeedsConfirmation { seated } = &outcome {
            if seated.is_empty() {
                return Ok(ChartResponse::from(c.state()).with_notice("Nobody is seated"));
            }
            let preview = format!("Clearing will unseat: {}", describe_people(seated));
            if !confirm(&preview) {
                return Err(ApiError::cancelled("Clear cancelled; chart unchanged"));
            }
            outcome = c.clear_all(Confirmation::Granted);
        }

        let response = ChartResponse::from(c.state());
        Ok(match outcome {
            ClearOutcome::Cleared { moved } => {
                response.with_notice(format!("Moved {} people to unassigned", moved.len()))
            }
            ClearOutcome::Unchanged => response.with_notice("Nobody is seated"),
            ClearOutcome::NeedsConfirmation { .. } => {
                return Err(ApiError::internal("Clear still awaiting confirmation"))
            }
        })
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::person::add_person;
    use crate::commands::seat::assign_seat;
    use crate::error::ErrorCode;
    use seatplan_store::SeatplanConfig;

    fn seated_state() -> ChartState {
        let mut state = ChartState::ephemeral(SeatplanConfig::default());
        for (name, row, col) in [("Ann", 0, 0), ("Eve", 4, 4), ("Dan", 3, 1)] {
            add_person(&mut state, name).unwrap();
            assign_seat(&mut state, name, row, col, None).unwrap();
        }
        state
    }

    #[test]
    fn test_shrink_declined_leaves_chart() {
        let mut state = seated_state();
        let mut asked = None;

        let err = resize_grid(&mut state, 3, 3, false, |preview| {
            asked = Some(preview.to_string());
            false
        })
        .unwrap_err();

        assert_eq!(err.code, ErrorCode::Cancelled);
        assert_eq!(
            asked.as_deref(),
            Some("Resizing to 3x3 will unseat: Dan (R4 C2), Eve (R5 C5)")
        );
        state.with_chart(|c| {
            assert_eq!(c.state().rows(), 5);
            assert_eq!(c.state().seated_count(), 3);
        });
    }

    #[test]
    fn test_shrink_confirmed_migrates_in_order() {
        let mut state = seated_state();
        add_person(&mut state, "Zed").unwrap();

        let response = resize_grid(&mut state, 3, 3, false, |_| true).unwrap();
        assert_eq!((response.rows, response.cols), (3, 3));
        assert_eq!(response.unassigned, vec!["Zed", "Dan", "Eve"]);
    }

    #[test]
    fn test_grow_never_asks() {
        let mut state = seated_state();
        let response = resize_grid(&mut state, 8, 6, false, |_| panic!("asked")).unwrap();

        assert_eq!(response.capacity, 48);
        assert_eq!(response.notice.as_deref(), Some("Resized to 8x6"));
    }

    #[test]
    fn test_resize_with_yes_skips_prompt() {
        let mut state = seated_state();
        let response = resize_grid(&mut state, 1, 1, true, |_| panic!("asked")).unwrap();
        assert_eq!(response.occupied, 1);
        assert_eq!(response.unassigned, vec!["Dan", "Eve"]);
    }

    #[test]
    fn test_resize_out_of_range() {
        let mut state = seated_state();
        let err = resize_grid(&mut state, 0, 4, true, |_| true).unwrap_err();
        assert_eq!(err.code, ErrorCode::ValidationError);
    }

    #[test]
    fn test_clear() {
        let mut state = seated_state();

        let err = clear_chart(&mut state, false, |_| false).unwrap_err();
        assert_eq!(err.code, ErrorCode::Cancelled);

        let response = clear_chart(&mut state, false, |_| true).unwrap();
        assert_eq!(response.occupied, 0);
        assert_eq!(response.unassigned, vec!["Ann", "Dan", "Eve"]);

        let response = clear_chart(&mut state, false, |_| panic!("asked")).unwrap();
        assert_eq!(response.notice.as_deref(), Some("Nobody is seated"));
    }
}
