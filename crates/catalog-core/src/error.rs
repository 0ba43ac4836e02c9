//! # Error Types
//!
//! Domain-specific error types for catalog-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  catalog-core errors (this file)                                       │
//! │  ├── CoreError        - Parse failures for the fixed name sets         │
//! │  └── ValidationError  - Per-field validation failures                  │
//! │                                                                         │
//! │  catalog-store errors (separate crate)                                 │
//! │  ├── StoreError       - Mutation failures (NotFound, Storage, ...)     │
//! │  └── StorageError     - Durable-store read/write failures              │
//! │                                                                         │
//! │  Flow: ValidationError → ErrorMap → StoreError → caller                │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Include context in error messages (field name, limits)
//! 3. Errors are enum variants, never String
//! 4. Each error variant maps to a user-facing message

use thiserror::Error;

// =============================================================================
// Core Error
// =============================================================================

/// Parse failures for the domain's fixed name sets.
///
/// Raised by the `FromStr` impls on [`Category`](crate::types::Category)
/// and [`StockStatus`](crate::types::StockStatus) when a display name is
/// not one of the known values.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Category name is not one of the fixed set.
    #[error("Unknown category: {0}")]
    UnknownCategory(String),

    /// Stock-status name is not one of the fixed set.
    #[error("Unknown stock status: {0}")]
    UnknownStockStatus(String),
}

// =============================================================================
// Validation Error
// =============================================================================

/// Per-field validation errors.
///
/// These errors occur when form input doesn't meet the catalog's business
/// rules. They are aggregated into an [`ErrorMap`](crate::validation::ErrorMap)
/// and returned as data, never thrown across the mutation boundary.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: &'static str },

    /// Field value is too short.
    #[error("{field} must be at least {min} characters")]
    TooShort { field: &'static str, min: usize },

    /// Field value is too long.
    #[error("{field} must be at most {max} characters")]
    TooLong { field: &'static str, max: usize },

    /// Value must be strictly positive.
    #[error("{field} must be a positive number")]
    MustBePositive { field: &'static str },

    /// Value must not be negative.
    #[error("{field} cannot be negative")]
    Negative { field: &'static str },

    /// Invalid format (e.g., too many decimal places, malformed URL).
    #[error("{field} has invalid format: {reason}")]
    InvalidFormat {
        field: &'static str,
        reason: &'static str,
    },
}

impl ValidationError {
    /// The name of the field this error applies to.
    pub const fn field(&self) -> &'static str {
        match self {
            ValidationError::Required { field }
            | ValidationError::TooShort { field, .. }
            | ValidationError::TooLong { field, .. }
            | ValidationError::MustBePositive { field }
            | ValidationError::Negative { field }
            | ValidationError::InvalidFormat { field, .. } => field,
        }
    }
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Result type for single-field validation checks.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = CoreError::UnknownCategory("Groceries".to_string());
        assert_eq!(err.to_string(), "Unknown category: Groceries");

        let err = CoreError::UnknownStockStatus("Backordered".to_string());
        assert_eq!(err.to_string(), "Unknown stock status: Backordered");
    }

    #[test]
    fn test_validation_error_messages() {
        let err = ValidationError::Required { field: "name" };
        assert_eq!(err.to_string(), "name is required");

        let err = ValidationError::TooShort {
            field: "name",
            min: 3,
        };
        assert_eq!(err.to_string(), "name must be at least 3 characters");

        let err = ValidationError::Negative {
            field: "stockQuantity",
        };
        assert_eq!(err.to_string(), "stockQuantity cannot be negative");
    }

    #[test]
    fn test_validation_error_field() {
        let err = ValidationError::MustBePositive { field: "price" };
        assert_eq!(err.field(), "price");
    }
}
