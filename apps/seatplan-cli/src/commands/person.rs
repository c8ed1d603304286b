//! # Person Commands
//!
//! Showing the chart and adding people to the unassigned list.

use tracing::debug;

use crate::commands::ChartResponse;
use crate::error::ApiError;
use crate::state::ChartState;

/// Returns the current chart.
pub fn show_chart(state: &ChartState) -> ChartResponse {
    debug!("show command");
    state.with_chart(|c| ChartResponse::from(c.state()))
}

/// Adds a person to the end of the unassigned list.
///
/// ## Behavior
/// - Name is trimmed before storing
/// - Empty name: `VALIDATION_ERROR`
/// - Name already seated or unassigned: `DUPLICATE`
pub fn add_person(state: &mut ChartState, name: &str) -> Result<ChartResponse, ApiError> {
    debug!(name = %name, "add command");

    state.with_chart_mut(|c| {
        let added = c.add_person(name)?;
        Ok(ChartResponse::from(c.state()).with_notice(format!("Added {}", added)))
    })
}
