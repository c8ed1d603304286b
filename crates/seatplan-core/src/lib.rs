//! # seatplan-core: Seat Assignment State Machine
//!
//! The seating chart model and every rule for moving people between the
//! unassigned list and grid seats. No I/O happens here; storage is reached
//! through the [`PersistenceAdapter`] trait.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Seatplan Architecture                            │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    seatplan CLI                                 │   │
//! │  │    show ──► add ──► assign ──► resize ──► export / import       │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ seatplan-core (THIS CRATE) ★                    │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │  seating  │  │  manager  │  │ snapshot  │  │ validation│  │   │
//! │  │   │  model +  │  │  persist  │  │  JSON +   │  │   names   │  │   │
//! │  │   │  rules    │  │  on change│  │  checks   │  │   bounds  │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ PersistenceAdapter                     │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                    seatplan-store                               │   │
//! │  │         JSON file store, config, chart export/import            │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Example Usage
//!
//! ```rust
//! use seatplan_core::{DragSource, GridLimits, SeatingManager, Snapshot, PersistenceAdapter};
//!
//! struct Discard;
//! impl PersistenceAdapter for Discard {
//!     type Error = String;
//!     fn persist(&mut self, _: &Snapshot) -> Result<(), String> { Ok(()) }
//!     fn restore(&self) -> Result<Option<Snapshot>, String> { Ok(None) }
//! }
//!
//! let mut chart = SeatingManager::new(Discard, GridLimits::default());
//! chart.add_person("Alice").unwrap();
//! chart.assign_to_seat("Alice", 0, 0, DragSource::Unassigned).unwrap();
//!
//! assert_eq!(chart.serialize().seats["0-0"], "Alice");
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod manager;
pub mod seating;
pub mod snapshot;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use error::{CoreError, CoreResult, FormatError, ValidationError};
pub use manager::{PersistenceAdapter, SeatingManager};
pub use seating::{Location, SeatingState};
pub use snapshot::Snapshot;
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Largest allowed row or column count unless configured otherwise.
pub const MAX_GRID_DIMENSION: u32 = 20;

/// Rows of a fresh chart.
pub const DEFAULT_ROWS: u32 = 5;

/// Columns of a fresh chart.
pub const DEFAULT_COLS: u32 = 5;
