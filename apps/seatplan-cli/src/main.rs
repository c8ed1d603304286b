//! # Seatplan Entry Point
//!
//! The actual setup lives in `lib.rs` so it can be tested.

use std::process::ExitCode;

fn main() -> ExitCode {
    seatplan_cli::run_from_env()
}
