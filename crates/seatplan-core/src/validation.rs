//! # Validation Module
//!
//! Input checks that run before the seating model is touched.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: CLI (clap)                                                   │
//! │  └── Type validation (numbers are numbers, seat keys parse)            │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: THIS MODULE                                                  │
//! │  ├── Names non-empty after trimming                                    │
//! │  ├── Dimensions within [1, max]                                        │
//! │  └── Coordinates inside the current grid                               │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 3: SeatingState                                                 │
//! │  └── Uniqueness and drag-source consistency                            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use seatplan_core::validation::{validate_person_name, validate_grid_size};
//! use seatplan_core::GridLimits;
//!
//! assert_eq!(validate_person_name("  Alice ").unwrap(), "Alice");
//! assert!(validate_grid_size(3, 3, &GridLimits::default()).is_ok());
//! ```

use crate::error::ValidationError;
use crate::types::{GridLimits, SeatPosition};

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// Names
// =============================================================================

/// Validates a person name and returns its trimmed form.
///
/// ## Example
/// ```rust
/// use seatplan_core::validation::validate_person_name;
///
/// assert!(validate_person_name("Bob").is_ok());
/// assert!(validate_person_name("   ").is_err());
/// ```
pub fn validate_person_name(name: &str) -> ValidationResult<String> {
    let name = name.trim();

    if name.is_empty() {
        return Err(ValidationError::Required {
            field: "name".to_string(),
        });
    }

    Ok(name.to_string())
}

// =============================================================================
// Dimensions
// =============================================================================

/// Validates one grid dimension against the configured maximum.
pub fn validate_dimension(field: &str, value: u32, limits: &GridLimits) -> ValidationResult<()> {
    if !limits.allows(value) {
        return Err(ValidationError::OutOfRange {
            field: field.to_string(),
            min: 1,
            max: i64::from(limits.max_dimension),
        });
    }

    Ok(())
}

/// Validates a requested grid size.
pub fn validate_grid_size(rows: u32, cols: u32, limits: &GridLimits) -> ValidationResult<()> {
    validate_dimension("rows", rows, limits)?;
    validate_dimension("cols", cols, limits)
}

// =============================================================================
// Coordinates
// =============================================================================

/// Validates that a seat lies inside a `rows` x `cols` grid.
pub fn validate_seat(position: SeatPosition, rows: u32, cols: u32) -> ValidationResult<()> {
    if !position.is_within(rows, cols) {
        return Err(ValidationError::SeatOutOfBounds {
            row: position.row,
            col: position.col,
            rows,
            cols,
        });
    }

    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================
