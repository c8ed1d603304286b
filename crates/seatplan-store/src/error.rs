//! # Store Error Types
//!
//! Error types for storage, configuration and chart exchange.
//!
//! ## Error Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Propagation                                    │
//! │                                                                         │
//! │  std::io::Error / toml / FormatError                                   │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  StoreError (this module) ← Adds path and categorization               │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ApiError (in CLI) ← code + message for the user                       │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::path::PathBuf;

use seatplan_core::FormatError;
use thiserror::Error;

/// Storage errors.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Reading or writing a file failed.
    #[error("I/O error on {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The stored chart exists but is not valid snapshot JSON.
    ///
    /// ## When This Occurs
    /// - File edited by hand
    /// - File written by something other than seatplan
    #[error("Stored chart at {} is corrupt: {reason}", .path.display())]
    Corrupt { path: PathBuf, reason: String },

    /// An imported chart failed validation.
    #[error("Chart file {} is invalid: {source}", .path.display())]
    InvalidChart {
        path: PathBuf,
        #[source]
        source: FormatError,
    },

    /// Invalid configuration value.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// Failed to parse the config file.
    #[error("Failed to load config: {0}")]
    ConfigLoadFailed(String),

    /// No platform directory could be determined and none was configured.
    #[error("Could not determine a data directory; set SEATPLAN_DATA_DIR")]
    NoDataDir,
}

impl StoreError {
    /// Wraps an I/O error with the path it happened on.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        StoreError::Io {
            path: path.into(),
            source,
        }
    }
}

impl From<toml::de::Error> for StoreError {
    fn from(err: toml::de::Error) -> Self {
        StoreError::ConfigLoadFailed(err.to_string())
    }
}

/// Result type for store operations.
pub type StoreResult<T> = Result<T, StoreError>;
