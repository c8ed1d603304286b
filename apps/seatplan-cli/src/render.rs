//! Text rendering of a [`ChartResponse`].
//!
//! ```text
//! Seating chart 2x3 (1/6 seated)
//!
//! +-------+-------+-------+
//! | R1 C1 | Alice | R1 C3 |
//! +-------+-------+-------+
//! | R2 C1 | R2 C2 | R2 C3 |
//! +-------+-------+-------+
//!
//! Unassigned (1):
//!   Bob
//! ```

use std::collections::HashMap;
use std::fmt::Write;

use seatplan_core::SeatPosition;

use crate::commands::ChartResponse;

/// Renders the grid and the unassigned list.
pub fn render_chart(chart: &ChartResponse) -> String {
    let occupants: HashMap<SeatPosition, &str> = chart
        .seats
        .iter()
        .map(|s| (s.position, s.name.as_str()))
        .collect();

    let cells: Vec<Vec<String>> = (0..chart.rows)
        .map(|row| {
            (0..chart.cols)
                .map(|col| {
                    let position = SeatPosition::new(row, col);
                    match occupants.get(&position) {
                        Some(name) => (*name).to_string(),
                        None => position.label(),
                    }
                })
                .collect()
        })
        .collect();

    let width = cells
        .iter()
        .flatten()
        .map(|c| c.chars().count())
        .max()
        .unwrap_or(0);
    let border = format!("+{}", format!("{}+", "-".repeat(width + 2)).repeat(chart.cols as usize));

    let mut out = String::new();
    let _ = writeln!(
        out,
        "Seating chart {}x{} ({}/{} seated)",
        chart.rows, chart.cols, chart.occupied, chart.capacity
    );
    out.push('\n');
    out.push_str(&border);
    out.push('\n');
    for row in &cells {
        out.push('|');
        for cell in row {
            let pad = width - cell.chars().count();
            let _ = write!(out, " {}{} |", cell, " ".repeat(pad));
        }
        out.push('\n');
        out.push_str(&border);
        out.push('\n');
    }

    out.push('\n');
    if chart.unassigned.is_empty() {
        out.push_str("No unassigned people\n");
    } else {
        let _ = writeln!(out, "Unassigned ({}):", chart.unassigned.len());
        for name in &chart.unassigned {
            let _ = writeln!(out, "  {}", name);
        }
    }

    if let Some(notice) = &chart.notice {
        out.push('\n');
        out.push_str(notice);
        out.push('\n');
    }

    out
}
