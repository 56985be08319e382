//! # till-core: Change-Making for a Cash Register
//!
//! Given an item price, the cash tendered and the contents of the till,
//! decide whether change can be made and which denominations to hand back.
//! Everything here is a pure function with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Register Architecture                            │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │               Register front-end (not in this crate)            │   │
//! │  │      Tender UI ──► check_cash_register ──► Change drawer UI     │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ till-core (THIS CRATE) ★                        │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌──────────────┐  ┌────────┐  ┌────────────┐  │   │
//! │  │   │   money   │  │ denomination │  │  till  │  │   change   │  │   │
//! │  │   │   Money   │─►│ Denomination │─►│  Till  │─►│ ChangeRes. │  │   │
//! │  │   └───────────┘  └──────────────┘  └────────┘  └────────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO PERSISTENCE • PURE FUNCTIONS                     │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`money`] - Money type with integer arithmetic (no floating point!)
//! - [`denomination`] - The nine US currency units and name normalization
//! - [`till`] - Till snapshot (cash drawer contents)
//! - [`change`] - Greedy change calculator
//! - [`register`] - Number/string boundary for register front-ends
//! - [`error`] - Domain error types
//! - [`validation`] - Input validation
//!
//! ## Design Principles
//!
//! 1. **Pure Functions**: same till + same amounts = same change
//! 2. **Integer Money**: all values are cents (i64), floats only at the boundary
//! 3. **Caller owns the till**: it is read, never modified, unless the caller
//!    asks via [`Till::dispense`]
//! 4. **Explicit Errors**: underpayment is an error, an empty drawer is a status
//!
//! ## Example Usage
//!
//! ```rust
//! use till_core::{compute_change, ChangeStatus, Money, Till};
//!
//! let till = Till::from_pairs(&[("PENNY", 0.5), ("QUARTER", 0.0)]).unwrap();
//! let result = compute_change(Money::from_cents(1950), Money::from_cents(2000), &till).unwrap();
//!
//! assert_eq!(result.status(), ChangeStatus::Closed);
//! assert_eq!(result.total().cents(), 50);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod change;
pub mod denomination;
pub mod error;
pub mod money;
pub mod register;
pub mod till;
pub mod validation;

#[cfg(test)]
mod props;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use change::{compute_change, ChangeLine, ChangeResult, ChangeStatus};
pub use denomination::Denomination;
pub use error::{CoreError, CoreResult, ValidationError};
pub use money::Money;
pub use register::{check_cash_register, RegisterReport};
pub use till::{Till, TillEntry};

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Cents in one dollar.
pub const CENTS_PER_DOLLAR: i64 = 100;

/// Maximum `(name, amount)` pairs accepted for one till.
///
/// ## Business Reason
/// There are only nine denominations; anything far beyond that is a
/// malformed request rather than a real drawer.
pub const MAX_TILL_ENTRIES: usize = 32;

/// Largest amount, in cents, accepted for a price, a cash tender or one
/// till slot ($10,000,000,000.00).
///
/// ## Business Reason
/// Keeps every sum the calculator forms (a whole till, cash - price) far
/// inside `i64`, so money arithmetic never overflows.
pub const MAX_AMOUNT_CENTS: i64 = 1_000_000_000_000;

#[cfg(test)]
mod tests {
    use super::*;

    /// Installs a subscriber so `RUST_LOG=till_core=trace cargo test` shows
    /// the greedy pass.
    fn init_tracing() {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_test_writer()
            .try_init();
    }

    #[test]
    fn test_end_to_end_sale_then_dispense() {
        init_tracing();

        let mut till = Till::from_pairs(&[
            ("PENNY", 1.01),
            ("NICKEL", 2.05),
            ("DIME", 3.1),
            ("QUARTER", 4.25),
            ("ONE", 90.0),
            ("FIVE", 55.0),
            ("TEN", 20.0),
            ("TWENTY", 60.0),
            ("ONE HUNDRED", 100.0),
        ])
        .unwrap();
        let before = till.total();

        let result = compute_change(Money::from_cents(326), Money::from_cents(10_000), &till).unwrap();
        assert_eq!(result.status(), ChangeStatus::Open);

        till.dispense(&result).unwrap();
        assert_eq!(till.total(), before - Money::from_cents(9674));
        assert_eq!(till.amount_of(Denomination::Nickel), Money::from_cents(205));

        // Same sale again: the twenties and tens are gone now.
        let again = compute_change(Money::from_cents(326), Money::from_cents(10_000), &till).unwrap();
        assert_eq!(again.status(), ChangeStatus::Open);
        assert_eq!(again.change()[0].denomination, Denomination::Five);
    }
}
