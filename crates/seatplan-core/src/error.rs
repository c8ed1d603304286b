//! # Error Types
//!
//! Domain-specific error types for seatplan-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  seatplan-core errors (this file)                                      │
//! │  ├── CoreError        - What every manager operation returns           │
//! │  ├── ValidationError  - Bad names, dimensions, coordinates             │
//! │  └── FormatError      - Snapshot fails structural/invariant checks     │
//! │                                                                         │
//! │  seatplan-store errors (separate crate)                                │
//! │  └── StoreError       - File, config and export failures               │
//! │                                                                         │
//! │  CLI errors (in app)                                                   │
//! │  └── ApiError         - What the user sees (code + message)            │
//! │                                                                         │
//! │  Flow: ValidationError → CoreError → StoreError → ApiError → Terminal  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! No operation leaves the model half-mutated when it returns one of these.

use thiserror::Error;

use crate::types::SeatPosition;

// =============================================================================
// Core Error
// =============================================================================

/// Errors returned by seating operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoreError {
    /// Input was malformed or out of range.
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    /// The name is already on the chart, seated or unassigned.
    ///
    /// ## User Workflow
    /// ```text
    /// add "Alice"  → unassigned = ["Alice"]
    /// add " Alice" → trimmed to "Alice"
    ///      │
    ///      ▼
    /// Duplicate { name: "Alice" }, state unchanged
    /// ```
    #[error("{name} is already on the chart")]
    Duplicate { name: String },

    /// A snapshot could not be applied.
    #[error("Invalid seating chart: {0}")]
    Format(#[from] FormatError),
}

impl CoreError {
    /// Creates a Duplicate error for the given name.
    pub fn duplicate(name: impl Into<String>) -> Self {
        CoreError::Duplicate { name: name.into() }
    }
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
///
/// These occur before any mutation happens, so the model is untouched.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Numeric value is out of range.
    #[error("{field} must be between {min} and {max}")]
    OutOfRange { field: String, min: i64, max: i64 },

    /// Coordinates fall outside the current grid.
    #[error("Seat {row}-{col} is outside the {rows}x{cols} grid")]
    SeatOutOfBounds {
        row: u32,
        col: u32,
        rows: u32,
        cols: u32,
    },

    /// A drop from the pool named someone who is not in the pool.
    #[error("{name} is not in the unassigned list")]
    NotUnassigned { name: String },

    /// A drop from a seat named someone who is not sitting there.
    #[error("{name} is not seated at {origin}")]
    SourceMismatch { name: String, origin: SeatPosition },
}

// =============================================================================
// Format Error
// =============================================================================

/// Snapshot validation errors.
///
/// Raised while loading a stored or imported chart. The chart currently in
/// memory stays as it was.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormatError {
    /// The payload is not valid snapshot JSON (syntax, missing field, wrong type).
    #[error("Malformed snapshot: {0}")]
    Json(String),

    /// `rows` or `cols` is zero or above the configured maximum.
    #[error("{field} must be between 1 and {max}, got {value}")]
    InvalidDimension { field: String, value: u32, max: u32 },

    /// A seats key is not of the form `row-col`.
    #[error("Seat key '{0}' is not of the form row-col")]
    InvalidSeatKey(String),

    /// A seats key addresses a cell outside the grid.
    #[error("Seat {key} is outside the {rows}x{cols} grid")]
    SeatOutOfBounds { key: String, rows: u32, cols: u32 },

    /// A person name is empty after trimming.
    #[error("Person names cannot be empty")]
    EmptyName,

    /// A person name appears more than once across seats and unassigned.
    #[error("{0} appears more than once")]
    DuplicateName(String),
}

impl From<serde_json::Error> for FormatError {
    fn from(err: serde_json::Error) -> Self {
        FormatError::Json(err.to_string())
    }
}

// =============================================================================
// Result Type Aliases
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

/// Result type for snapshot parsing and validation.
pub type FormatResult<T> = Result<T, FormatError>;

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = CoreError::duplicate("Alice");
        assert_eq!(err.to_string(), "Alice is already on the chart");

        let err = ValidationError::SeatOutOfBounds {
            row: 5,
            col: 0,
            rows: 5,
            cols: 5,
        };
        assert_eq!(err.to_string(), "Seat 5-0 is outside the 5x5 grid");
    }

    #[test]
    fn test_format_error_messages() {
        let err = FormatError::InvalidDimension {
            field: "rows".to_string(),
            value: 0,
            max: 20,
        };
        assert_eq!(err.to_string(), "rows must be between 1 and 20, got 0");

        let err = FormatError::InvalidSeatKey("a-b".to_string());
        assert_eq!(err.to_string(), "Seat key 'a-b' is not of the form row-col");
    }

    #[test]
    fn test_validation_converts_to_core_error() {
        let validation_err = ValidationError::Required {
            field: "name".to_string(),
        };
        let core_err: CoreError = validation_err.into();
        assert!(matches!(core_err, CoreError::Validation(_)));

        let core_err: CoreError = FormatError::EmptyName.into();
        assert!(matches!(core_err, CoreError::Format(FormatError::EmptyName)));
    }
}
