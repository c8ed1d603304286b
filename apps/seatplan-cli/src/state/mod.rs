//! # State Module
//!
//! Everything a command needs to run: the seating manager wired to its
//! store, and the loaded configuration.

mod chart;

pub use chart::{ChartState, ChartStore};
