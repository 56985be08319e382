//! # Validation Module
//!
//! Input validation for the change calculator.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Order                                   │
//! │                                                                         │
//! │  1. Number boundary                                                     │
//! │     ├── finite? (NaN / ∞ rejected)                                      │
//! │     └── rounded to the cent                                             │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  2. Till entries (ALL of them, before any change is computed)          │
//! │     ├── name present and in the denomination table                     │
//! │     ├── 0 <= amount <= MAX_AMOUNT_CENTS (also after merging slots)     │
//! │     └── amount is a whole number of units                              │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  3. Price / cash                                                        │
//! │     ├── both within 0..=MAX_AMOUNT_CENTS                                │
//! │     └── cash >= price  (else CoreError::InsufficientCash)              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use till_core::validation::{parse_dollars, validate_amount};
//!
//! let price = parse_dollars("price", 19.5).unwrap();
//! validate_amount("price", price).unwrap();
//! assert!(parse_dollars("cash", f64::NAN).is_err());
//! ```

use crate::denomination::Denomination;
use crate::error::ValidationError;
use crate::money::Money;
use crate::{MAX_AMOUNT_CENTS, MAX_TILL_ENTRIES};

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// Number Boundary
// =============================================================================

/// Converts a floating-point dollar amount into `Money`.
///
/// ## Example
/// ```rust
/// use till_core::validation::parse_dollars;
///
/// assert_eq!(parse_dollars("cash", 20.0).unwrap().cents(), 2000);
/// assert!(parse_dollars("cash", f64::INFINITY).is_err());
/// ```
pub fn parse_dollars(field: &str, dollars: f64) -> ValidationResult<Money> {
    Money::from_dollars(dollars).ok_or_else(|| ValidationError::InvalidFormat {
        field: field.to_string(),
        reason: format!("{dollars} is not a representable dollar amount"),
    })
}

// =============================================================================
// Amount Validators
// =============================================================================

/// Validates a price or cash amount.
///
/// ## Rules
/// - Must be non-negative (>= 0)
/// - Zero is allowed (free item, or nothing tendered for a free item)
/// - Must not exceed MAX_AMOUNT_CENTS
pub fn validate_amount(field: &str, amount: Money) -> ValidationResult<()> {
    if amount.is_negative() {
        return Err(ValidationError::MustBeNonNegative {
            field: field.to_string(),
        });
    }

    validate_amount_limit(field, amount)
}

/// Validates that an amount does not exceed MAX_AMOUNT_CENTS.
pub fn validate_amount_limit(field: &str, amount: Money) -> ValidationResult<()> {
    if amount.cents() > MAX_AMOUNT_CENTS {
        return Err(ValidationError::OutOfRange {
            field: field.to_string(),
            min: 0,
            max: MAX_AMOUNT_CENTS,
        });
    }

    Ok(())
}

/// Validates the amount held for one denomination.
///
/// ## Rules
/// - Must be non-negative
/// - Must be a whole number of units (no $0.30 of quarters)
/// - Must not exceed MAX_AMOUNT_CENTS
///
/// ## Example
/// ```rust
/// use till_core::denomination::Denomination;
/// use till_core::money::Money;
/// use till_core::validation::validate_till_amount;
///
/// assert!(validate_till_amount(Denomination::Quarter, Money::from_cents(425)).is_ok());
/// assert!(validate_till_amount(Denomination::Quarter, Money::from_cents(30)).is_err());
/// ```
pub fn validate_till_amount(denomination: Denomination, amount: Money) -> ValidationResult<()> {
    let field = format!("{denomination} amount");

    if amount.is_negative() {
        return Err(ValidationError::MustBeNonNegative { field });
    }

    validate_amount_limit(&field, amount)?;

    if !amount.is_multiple_of(denomination.value()) {
        return Err(ValidationError::InvalidFormat {
            field,
            reason: format!(
                "{amount} is not a whole number of {} units",
                denomination.value()
            ),
        });
    }

    Ok(())
}

/// Validates that a denomination name is present.
///
/// Table membership is checked by `Denomination::from_str`; this only
/// catches blank input so it gets a clearer message.
pub fn validate_denomination_name(name: &str) -> ValidationResult<()> {
    if name.trim().is_empty() {
        return Err(ValidationError::Required {
            field: "denomination".to_string(),
        });
    }

    Ok(())
}

// =============================================================================
// Collection Validators
// =============================================================================

/// Validates the number of entries supplied for a till.
///
/// ## Rules
/// - Must not exceed MAX_TILL_ENTRIES
pub fn validate_till_size(entries: usize) -> ValidationResult<()> {
    if entries > MAX_TILL_ENTRIES {
        return Err(ValidationError::OutOfRange {
            field: "till entries".to_string(),
            min: 0,
            max: MAX_TILL_ENTRIES as i64,
        });
    }

    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================
