//! # Error Types
//!
//! Domain-specific error types for vela-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                          Error Types                                │
//! │                                                                     │
//! │  vela-core errors (this file)                                       │
//! │  ├── CoreError        - General domain errors                       │
//! │  ├── ValidationError  - Input validation failures                   │
//! │  └── SaleError        - Finalization preconditions                  │
//! │                                                                     │
//! │  vela-client errors (separate crate)                                │
//! │  └── ClientError      - Network / remote / offline failures         │
//! │                                                                     │
//! │  Flow: SaleError ──► ClientError ──► message string ──► UI          │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impls)
//! 2. Include context in messages (product id, amounts in cents)
//! 3. Errors are enum variants, never bare Strings

use thiserror::Error;

// =============================================================================
// Core Error
// =============================================================================

/// Core business logic errors.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Cart has reached the maximum number of distinct line items.
    #[error("Cart cannot have more than {max} items")]
    CartTooLarge { max: usize },

    /// Validation error (wraps ValidationError).
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
///
/// These occur when caller input does not meet requirements and are raised
/// before any business logic runs.
#[derive(Debug, Error)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Field value is too long.
    #[error("{field} must be at most {max} characters")]
    TooLong { field: String, max: usize },

    /// Numeric value is out of range.
    #[error("{field} must be between {min} and {max}")]
    OutOfRange { field: String, min: i64, max: i64 },

    /// Value must be positive.
    #[error("{field} must be positive")]
    MustBePositive { field: String },
}

// =============================================================================
// Sale Error
// =============================================================================

/// Finalization precondition failures.
///
/// Raised by [`crate::sale::finalize`] before any submission is attempted;
/// the cart is left untouched so the cashier can correct and retry.
#[derive(Debug, Error)]
pub enum SaleError {
    /// Finalizing an empty cart is rejected here, not by the cart itself.
    #[error("Cannot finalize an empty cart")]
    EmptyCart,

    /// Cash tendered does not cover the total.
    ///
    /// ## User Workflow
    /// ```text
    /// Total: $50.00, cash tendered: $40.00
    ///      │
    ///      ▼
    /// InsufficientPayment { total_cents: 5000, tendered_cents: 4000 }
    ///      │
    ///      ▼
    /// UI shows: "Insufficient payment: $40.00 tendered for a $50.00 total"
    /// ```
    #[error("Insufficient payment: {tendered_cents} cents tendered for a {total_cents} cent total")]
    InsufficientPayment { total_cents: i64, tendered_cents: i64 },

    /// Invoice number was provided but unusable (blank or overlong).
    /// (Absent invoice numbers are auto-generated instead.)
    #[error("Invalid invoice number: {0}")]
    InvalidInvoiceNumber(#[from] ValidationError),
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = SaleError::InsufficientPayment {
            total_cents: 5000,
            tendered_cents: 4000,
        };
        assert_eq!(
            err.to_string(),
            "Insufficient payment: 4000 cents tendered for a 5000 cent total"
        );
    }

    #[test]
    fn test_validation_error_messages() {
        let err = ValidationError::Required {
            field: "invoice_number".to_string(),
        };
        assert_eq!(err.to_string(), "invoice_number is required");
    }

    #[test]
    fn test_validation_converts_to_core_error() {
        let validation_err = ValidationError::MustBePositive {
            field: "quantity".to_string(),
        };
        let core_err: CoreError = validation_err.into();
        assert!(matches!(core_err, CoreError::Validation(_)));
    }
}
