//! # seatplan-store: Persistence for Seatplan
//!
//! Keeps the working chart between sessions and moves charts in and out of
//! exported files.
//!
//! ## Layout
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                                                                         │
//! │  seatplan.toml ──► SeatplanConfig ──┬──► JsonFileStore (working chart) │
//! │  SEATPLAN_* env ──┘                 │      <data_dir>/<key>.json        │
//! │                                     │                                   │
//! │                                     └──► exchange (export / import)     │
//! │                                            seating-chart-YYYY-MM-DD.json│
//! │                                                                         │
//! │  MemoryStore: same contract, nothing on disk (--ephemeral, tests)      │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Both stores implement [`seatplan_core::PersistenceAdapter`], so the
//! seating manager never knows which one it is talking to.

pub mod config;
pub mod error;
pub mod exchange;
pub mod file_store;
pub mod memory;

pub use config::{ExportSettings, GridSettings, SeatplanConfig, StorageSettings};
pub use error::{StoreError, StoreResult};
pub use exchange::{default_export_name, export_chart, export_path, import_chart};
pub use file_store::JsonFileStore;
pub use memory::MemoryStore;
