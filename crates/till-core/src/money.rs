//! # Money Module
//!
//! Provides the `Money` type for handling monetary values safely.
//!
//! ## Why Integer Money?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  THE FLOATING POINT PROBLEM                                             │
//! │                                                                         │
//! │  Making change from a till with floats:                                 │
//! │    0.50 - 0.25 - 0.25           = 0                       ✅ lucky     │
//! │    96.74 - 20 - 20 - 20 - 10 ... = 0.00999999999999...    ❌ WRONG!    │
//! │                                                                         │
//! │  A greedy loop that compares `remaining >= 0.01` drifts by a penny.    │
//! │                                                                         │
//! │  OUR SOLUTION: Integer Cents                                            │
//! │    9674 - 2000 - 2000 - 2000 - 1000 ... = 0                            │
//! │    Every intermediate value is already rounded to the cent             │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use till_core::money::Money;
//!
//! // Create from cents (preferred)
//! let price = Money::from_cents(1950); // $19.50
//!
//! // Arithmetic operations
//! let change = Money::from_cents(2000) - price; // $0.50
//! assert_eq!(change.cents(), 50);
//!
//! // Floats only at the boundary, rounded to the nearest cent
//! let cash = Money::from_dollars(3.26).unwrap();
//! assert_eq!(cash.cents(), 326);
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign, Mul, Sub, SubAssign};
use ts_rs::TS;

use crate::CENTS_PER_DOLLAR;

// =============================================================================
// Money Type
// =============================================================================

/// Represents a monetary value in the smallest currency unit (cents for USD).
///
/// ## Design Decisions
/// - **i64 (signed)**: Intermediate differences (cash - price) may be negative
/// - **Single field tuple struct**: Zero-cost abstraction over i64
/// - **Derives**: Full serde support for JSON serialization
///
/// ## Where Money is Used
/// ```text
/// ┌─────────────────────────────────────────────────────────────────────────┐
/// │  price, cash ──► change owed ──► greedy withdrawal ──► change lines     │
/// │                                        ▲                                │
/// │  TillEntry.amount ─────────────────────┘                                │
/// │                                                                         │
/// │  EVERY monetary value in the calculator flows through this type        │
/// └─────────────────────────────────────────────────────────────────────────┘
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Money(i64);

impl Money {
    /// Creates a Money value from cents (the smallest currency unit).
    ///
    /// ## Example
    /// ```rust
    /// use till_core::money::Money;
    ///
    /// let price = Money::from_cents(1099); // Represents $10.99
    /// assert_eq!(price.cents(), 1099);
    /// ```
    #[inline]
    pub const fn from_cents(cents: i64) -> Self {
        Money(cents)
    }

    /// Creates a Money value from a floating-point dollar amount.
    ///
    /// The amount is rounded to the nearest cent, so `0.1 + 0.2` arriving
    /// from a caller as `0.30000000000000004` becomes exactly 30 cents.
    /// Returns `None` for NaN, infinities, and values outside the `i64`
    /// cent range.
    ///
    /// ## Example
    /// ```rust
    /// use till_core::money::Money;
    ///
    /// assert_eq!(Money::from_dollars(0.1 + 0.2), Some(Money::from_cents(30)));
    /// assert_eq!(Money::from_dollars(f64::NAN), None);
    /// ```
    pub fn from_dollars(dollars: f64) -> Option<Self> {
        if !dollars.is_finite() {
            return None;
        }

        let cents = (dollars * CENTS_PER_DOLLAR as f64).round();
        // `i64::MAX as f64` rounds up to 2^63, which is itself out of range.
        if cents < i64::MIN as f64 || cents >= i64::MAX as f64 {
            return None;
        }

        Some(Money(cents as i64))
    }

    /// Returns the value in cents (smallest currency unit).
    #[inline]
    pub const fn cents(&self) -> i64 {
        self.0
    }

    /// Returns the value as floating-point dollars (for the number boundary).
    ///
    /// ## Example
    /// ```rust
    /// use till_core::money::Money;
    ///
    /// assert_eq!(Money::from_cents(4).to_dollars(), 0.04);
    /// assert_eq!(Money::from_cents(6000).to_dollars(), 60.0);
    /// ```
    #[inline]
    pub fn to_dollars(&self) -> f64 {
        self.0 as f64 / CENTS_PER_DOLLAR as f64
    }

    /// Returns the major unit (dollars) portion.
    #[inline]
    pub const fn dollars(&self) -> i64 {
        self.0 / CENTS_PER_DOLLAR
    }

    /// Returns the minor unit (cents) portion (always 0-99).
    #[inline]
    pub const fn cents_part(&self) -> i64 {
        (self.0 % CENTS_PER_DOLLAR).abs()
    }

    /// Returns zero money value.
    #[inline]
    pub const fn zero() -> Self {
        Money(0)
    }

    /// Checks if the value is zero.
    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Checks if the value is positive (greater than zero).
    #[inline]
    pub const fn is_positive(&self) -> bool {
        self.0 > 0
    }

    /// Checks if the value is negative (less than zero).
    #[inline]
    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// Adds two values, returning `None` on `i64` overflow.
    ///
    /// ## Example
    /// ```rust
    /// use till_core::money::Money;
    ///
    /// assert_eq!(Money::from_cents(5).checked_add(Money::from_cents(10)), Some(Money::from_cents(15)));
    /// assert_eq!(Money::from_cents(i64::MAX).checked_add(Money::from_cents(1)), None);
    /// ```
    #[inline]
    pub const fn checked_add(&self, other: Money) -> Option<Money> {
        match self.0.checked_add(other.0) {
            Some(cents) => Some(Money(cents)),
            None => None,
        }
    }

    /// Checks whether this amount is a whole number of `unit`s.
    ///
    /// A till holding $0.30 of quarters is not a real till: there is no
    /// whole count of 25-cent coins that adds up to it.
    ///
    /// ## Example
    /// ```rust
    /// use till_core::money::Money;
    ///
    /// let quarter = Money::from_cents(25);
    /// assert!(Money::from_cents(425).is_multiple_of(quarter));
    /// assert!(!Money::from_cents(30).is_multiple_of(quarter));
    /// ```
    #[inline]
    pub const fn is_multiple_of(&self, unit: Money) -> bool {
        unit.0 != 0 && self.0 % unit.0 == 0
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Display implementation shows money in a human-readable format.
///
/// ## Note
/// This is for logs and error messages. Receipt formatting belongs to the
/// frontend.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        write!(
            f,
            "{}${}.{:02}",
            sign,
            self.dollars().abs(),
            self.cents_part()
        )
    }
}

/// Default money is zero.
impl Default for Money {
    fn default() -> Self {
        Money::zero()
    }
}

impl Add for Money {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        Money(self.0 + other.0)
    }
}

impl AddAssign for Money {
    #[inline]
    fn add_assign(&mut self, other: Self) {
        self.0 += other.0;
    }
}

impl Sub for Money {
    type Output = Self;

    #[inline]
    fn sub(self, other: Self) -> Self {
        Money(self.0 - other.0)
    }
}

impl SubAssign for Money {
    #[inline]
    fn sub_assign(&mut self, other: Self) {
        self.0 -= other.0;
    }
}

/// Multiplication by a unit count (`unit value * coins`).
impl Mul<i64> for Money {
    type Output = Self;

    #[inline]
    fn mul(self, qty: i64) -> Self {
        Money(self.0 * qty)
    }
}

/// Summing a till or a list of change lines.
impl Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Self {
        iter.fold(Money::zero(), Add::add)
    }
}

impl<'a> Sum<&'a Money> for Money {
    fn sum<I: Iterator<Item = &'a Money>>(iter: I) -> Self {
        iter.copied().sum()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
