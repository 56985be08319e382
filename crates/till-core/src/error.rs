//! # Error Types
//!
//! Domain-specific error types for till-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  CoreError        - Precondition violations, computation aborted        │
//! │  ├── InsufficientCash     (customer tendered less than the price)       │
//! │  ├── InvalidDenomination  (name not in the denomination table)          │
//! │  └── Validation(ValidationError)                                        │
//! │                                                                         │
//! │  NOT an error:                                                          │
//! │  └── ChangeStatus::InsufficientFunds (till can't cover the change)      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Include context in error messages (amounts, names)
//! 3. Errors are enum variants, never String
//! 4. A till that cannot make change is a result, not an error

use thiserror::Error;

use crate::money::Money;

// =============================================================================
// Core Error
// =============================================================================

/// Core business logic errors.
///
/// Any of these aborts the computation; no partial change is returned.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoreError {
    /// The customer tendered less cash than the price.
    ///
    /// ## When This Occurs
    /// ```text
    /// Price: $20.00, Cash: $19.50
    ///      │
    ///      ▼
    /// InsufficientCash { price: $20.00, cash: $19.50 }
    ///      │
    ///      ▼
    /// UI shows: "Cash $19.50 does not cover price $20.00"
    /// ```
    ///
    /// Distinct from `ChangeStatus::InsufficientFunds`, which means the
    /// customer paid enough but the till lacks the right denominations.
    #[error("Cash {cash} does not cover price {price}")]
    InsufficientCash { price: Money, cash: Money },

    /// A denomination name is not in the table.
    ///
    /// Carries the normalized form of the offending name.
    #[error("Invalid denomination '{0}': must be one of PENNY, NICKEL, DIME, QUARTER, ONE, FIVE, TEN, TWENTY, ONE HUNDRED")]
    InvalidDenomination(String),

    /// Validation error (wraps ValidationError).
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
///
/// Raised before the greedy pass runs, so a bad till entry is reported even
/// when the till could never have covered the change.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Numeric value is out of range.
    #[error("{field} must be between {min} and {max}")]
    OutOfRange { field: String, min: i64, max: i64 },

    /// Value must be zero or greater.
    #[error("{field} must not be negative")]
    MustBeNonNegative { field: String },

    /// Invalid format (non-finite number, amount not a multiple of its unit).
    #[error("{field} has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================
