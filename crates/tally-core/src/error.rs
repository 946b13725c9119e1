//! # Error Types
//!
//! Domain-specific error types for tally-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                          Error Types                                │
//! │                                                                     │
//! │  tally-core errors (this file)                                      │
//! │  ├── CoreError        - Ledger contract violations                  │
//! │  └── ValidationError  - Manual entry rejections                     │
//! │                                                                     │
//! │  tally-session errors (separate crate)                              │
//! │  ├── ExportFailure    - Storage collaborator failures               │
//! │  └── SessionError     - What the shell sees (serialized)            │
//! │                                                                     │
//! │  Flow: ValidationError → CoreError → SessionError → Shell           │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Include context in error messages (field, index, length)
//! 3. Errors are enum variants, never String
//! 4. Each error variant maps to a user-facing message

use thiserror::Error;

use crate::money::Money;

// =============================================================================
// Core Error
// =============================================================================

/// Core ledger contract errors.
///
/// These represent caller contract violations, not user input mistakes.
/// User input mistakes are [`ValidationError`].
#[derive(Debug, Error)]
pub enum CoreError {
    /// Removal index outside the current ledger bounds.
    ///
    /// ## When This Occurs
    /// - A stale index captured before a prior removal shifted the sequence
    /// - A plain caller bug
    ///
    /// The ledger is left unchanged; silently splicing at a bad index could
    /// remove the wrong item.
    #[error("index {index} out of range for ledger of length {len}")]
    IndexOutOfRange { index: usize, len: usize },

    /// Validation error (wraps ValidationError).
    #[error("validation error: {0}")]
    Validation(#[from] ValidationError),
}

// =============================================================================
// Validation Error
// =============================================================================

/// Manual entry validation errors.
///
/// These occur when raw form text doesn't meet requirements. They are
/// recovered locally: the form is left intact and nothing reaches the ledger.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    /// A required field is missing or empty after trimming.
    #[error("{field} is required")]
    Required { field: &'static str },

    /// Field value is too long.
    #[error("{field} must be at most {max} characters")]
    TooLong { field: &'static str, max: usize },

    /// Quantity did not parse as a non-negative integer.
    #[error("quantity '{value}' must be a non-negative whole number")]
    InvalidQuantity { value: String },

    /// Quantity exceeds the maximum allowed for one entry.
    #[error("quantity {requested} exceeds maximum allowed ({max})")]
    QuantityTooLarge { requested: i64, max: i64 },

    /// Price did not parse as a non-negative decimal amount.
    #[error("price '{value}' must be a non-negative amount like 5.00")]
    InvalidPrice { value: String },

    /// Price exceeds the maximum allowed for one entry.
    #[error("price {requested} exceeds maximum allowed ({max})")]
    PriceTooLarge { requested: Money, max: Money },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = CoreError::IndexOutOfRange { index: 7, len: 3 };
        assert_eq!(
            err.to_string(),
            "index 7 out of range for ledger of length 3"
        );
    }

    #[test]
    fn test_validation_error_messages() {
        let err = ValidationError::Required { field: "name" };
        assert_eq!(err.to_string(), "name is required");

        let err = ValidationError::InvalidQuantity {
            value: "abc".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "quantity 'abc' must be a non-negative whole number"
        );
    }

    #[test]
    fn test_validation_converts_to_core_error() {
        let validation_err = ValidationError::Required { field: "name" };
        let core_err: CoreError = validation_err.into();
        assert!(matches!(core_err, CoreError::Validation(_)));
    }
}
