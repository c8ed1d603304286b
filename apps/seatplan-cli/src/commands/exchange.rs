//! # Exchange Commands
//!
//! Export the chart to a dated JSON file and import one back.

use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use tracing::debug;

use seatplan_core::Transition;
use seatplan_store::exchange;

use crate::commands::ChartResponse;
use crate::error::ApiError;
use crate::state::ChartState;

/// Writes the chart to `out`, or to `<export dir>/<prefix>-<today>.json`.
pub fn export_chart(
    state: &ChartState,
    out: Option<PathBuf>,
    today: NaiveDate,
) -> Result<ChartResponse, ApiError> {
    let path = out.unwrap_or_else(|| exchange::export_path(state.config(), today));
    debug!(path = %path.display(), "export command");

    state.with_chart(|c| {
        exchange::export_chart(&path, &c.serialize())?;
        Ok(ChartResponse::from(c.state()).with_notice(format!("Exported to {}", path.display())))
    })
}

/// Replaces the chart with the contents of `path`.
///
/// A file that fails validation leaves the current chart as it was.
pub fn import_chart(state: &mut ChartState, path: &Path) -> Result<ChartResponse, ApiError> {
    debug!(path = %path.display(), "import command");

    state.with_chart_mut(|c| {
        let snapshot = exchange::import_chart(path, &c.limits())?;
        let transition = c.deserialize(&snapshot)?;
        let response = ChartResponse::from(c.state());

        Ok(match transition {
            Transition::Changed => {
                response.with_notice(format!("Imported {}", path.display()))
            }
            Transition::Unchanged => response.with_notice("Chart already matches the file"),
        })
    })
}
