//! # API Error Type
//!
//! Unified error type for seatplan commands.
//!
//! ## Error Handling Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Flow in Seatplan                               │
//! │                                                                         │
//! │  seatplan assign Alice 9 9                                             │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  ┌──────────────────────────────────────────────────────────────────┐  │
//! │  │  Command Function                                                │  │
//! │  │  Result<ChartResponse, ApiError>                                 │  │
//! │  │         │                                                        │  │
//! │  │         ▼                                                        │  │
//! │  │  Store Error? ──── StoreError::Io { .. } ────────────┐           │  │
//! │  │         │                                            │           │  │
//! │  │         ▼                                            ▼           │  │
//! │  │  Rule Error? ───── CoreError::Validation(..) ──── ApiError ─────►│  │
//! │  │         │                                                        │  │
//! │  │         ▼                                                        │  │
//! │  │  Success ──────────────────────────────────────────────────────►│  │
//! │  └──────────────────────────────────────────────────────────────────┘  │
//! │                                                                         │
//! │  stderr (text):  error: Seat 9-9 is outside the 5x5 grid               │
//! │  stderr (--json): {"code":"VALIDATION_ERROR","message":"Seat 9-9 ..."} │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::Serialize;
use seatplan_core::CoreError;
use seatplan_store::StoreError;
use ts_rs::TS;

/// Error returned from seatplan commands.
///
/// ## Serialization
/// This is what `--json` prints when a command fails:
/// ```json
/// {
///   "code": "DUPLICATE",
///   "message": "Alice is already on the chart"
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct ApiError {
    /// Machine-readable error code for programmatic handling
    pub code: ErrorCode,

    /// Human-readable error message for display
    pub message: String,
}

/// Error codes for command responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, TS)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[ts(export)]
pub enum ErrorCode {
    /// Bad name, dimension or seat
    ValidationError,

    /// Person already on the chart
    Duplicate,

    /// Chart file or snapshot is malformed
    FormatError,

    /// Reading or writing the store failed
    StorageError,

    /// Configuration file or environment is invalid
    ConfigError,

    /// A two-phase command was declined
    Cancelled,

    /// Anything else
    Internal,
}

impl ApiError {
    /// Creates a new API error.
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        ApiError {
            code,
            message: message.into(),
        }
    }

    /// Creates a validation error.
    pub fn validation(message: impl Into<String>) -> Self {
        ApiError::new(ErrorCode::ValidationError, message)
    }

    /// Creates a cancellation error.
    pub fn cancelled(message: impl Into<String>) -> Self {
        ApiError::new(ErrorCode::Cancelled, message)
    }

    /// Creates an internal error.
    pub fn internal(message: impl Into<String>) -> Self {
        ApiError::new(ErrorCode::Internal, message)
    }
}

/// Converts seating rule errors to API errors.
impl From<CoreError> for ApiError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::Validation(e) => ApiError::validation(e.to_string()),
            CoreError::Duplicate { .. } => ApiError::new(ErrorCode::Duplicate, err.to_string()),
            CoreError::Format(_) => ApiError::new(ErrorCode::FormatError, err.to_string()),
        }
    }
}

/// Converts store errors to API errors.
impl From<StoreError> for ApiError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::InvalidChart { .. } | StoreError::Corrupt { .. } => {
                ApiError::new(ErrorCode::FormatError, err.to_string())
            }
            StoreError::Io { .. } => {
                tracing::error!(error = %err, "Storage operation failed");
                ApiError::new(ErrorCode::StorageError, err.to_string())
            }
            StoreError::InvalidConfig(_)
            | StoreError::ConfigLoadFailed(_)
            | StoreError::NoDataDir => ApiError::new(ErrorCode::ConfigError, err.to_string()),
        }
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for ApiError {}
