use std::path::PathBuf;

use clap::{Parser, Subcommand};

use seatplan_core::DragSource;

#[derive(Debug, Parser)]
#[command(
    name = "seatplan",
    about = "Assign people to seats on a grid and keep the chart between sessions",
    version
)]
pub struct Cli {
    /// Print the resulting chart (or error) as JSON.
    #[arg(long, global = true)]
    pub json: bool,

    /// Config file to use instead of the platform default.
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Work on an empty in-memory chart; nothing is read or written.
    #[arg(long, global = true)]
    pub ephemeral: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Print the chart.
    Show,

    /// Add a person to the unassigned list.
    Add { name: String },

    /// Drop a person onto a seat (zero-based row and column).
    Assign {
        name: String,
        row: u32,
        col: u32,

        /// Where the person is dragged from: `unassigned` or a seat key
        /// such as `0-2`. Defaults to wherever the person is now.
        #[arg(long, value_name = "SOURCE")]
        from: Option<DragSource>,
    },

    /// Move the occupant of a seat back to the unassigned list.
    Unseat { row: u32, col: u32 },

    /// Change the grid size. Asks before unseating anyone.
    Resize {
        rows: u32,
        cols: u32,

        /// Do not ask for confirmation.
        #[arg(long, short = 'y')]
        yes: bool,
    },

    /// Move everyone back to the unassigned list.
    Clear {
        /// Do not ask for confirmation.
        #[arg(long, short = 'y')]
        yes: bool,
    },

    /// Write the chart to a JSON file.
    Export {
        /// Output file. Defaults to `<export dir>/seating-chart-YYYY-MM-DD.json`.
        #[arg(long, value_name = "PATH")]
        out: Option<PathBuf>,
    },

    /// Replace the chart with one read from a JSON file.
    Import { path: PathBuf },
}
