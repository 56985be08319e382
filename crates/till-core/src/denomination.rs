//! # Denomination Module
//!
//! The closed table of US currency units a till can hold.
//!
//! ## Denomination Table
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Name          Value     Cents    Aliases                               │
//! │  ───────────   ───────   ──────   ──────────────────────────            │
//! │  PENNY          $0.01         1                                         │
//! │  NICKEL         $0.05         5                                         │
//! │  DIME           $0.10        10                                         │
//! │  QUARTER        $0.25        25                                         │
//! │  ONE            $1.00       100   DOLLAR                                │
//! │  FIVE           $5.00       500                                         │
//! │  TEN           $10.00      1000                                         │
//! │  TWENTY        $20.00      2000                                         │
//! │  ONE HUNDRED  $100.00     10000   ONE_HUNDRED, one  hundred, ...        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Name Normalization
//! Names are compared only after [`normalize_name`]: trimmed, upper-cased,
//! underscores read as spaces, whitespace runs collapsed to one space.
//! The canonical form therefore uses single spaces (`"ONE HUNDRED"`).
//!
//! ## Usage
//! ```rust
//! use till_core::denomination::{self, Denomination};
//! use till_core::money::Money;
//!
//! assert_eq!(denomination::normalize_name("  one   hundred "), "ONE HUNDRED");
//! assert!(denomination::is_valid("quarter"));
//! assert_eq!(denomination::value_of("Dime").unwrap(), Money::from_cents(10));
//!
//! let owed = denomination::subtract(Money::from_cents(50), "QUARTER").unwrap();
//! assert_eq!(owed, Money::from_cents(25));
//! assert_eq!("one_hundred".parse::<Denomination>().unwrap(), Denomination::OneHundred);
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use ts_rs::TS;

use crate::error::{CoreError, CoreResult};
use crate::money::Money;

// =============================================================================
// Denomination
// =============================================================================

/// A currency unit with a fixed value.
///
/// Variants are declared in ascending value order, so the derived `Ord`
/// compares denominations by value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum Denomination {
    #[serde(rename = "PENNY")]
    Penny,
    #[serde(rename = "NICKEL")]
    Nickel,
    #[serde(rename = "DIME")]
    Dime,
    #[serde(rename = "QUARTER")]
    Quarter,
    #[serde(rename = "ONE", alias = "DOLLAR")]
    One,
    #[serde(rename = "FIVE")]
    Five,
    #[serde(rename = "TEN")]
    Ten,
    #[serde(rename = "TWENTY")]
    Twenty,
    #[serde(rename = "ONE HUNDRED", alias = "ONE_HUNDRED")]
    OneHundred,
}

impl Denomination {
    /// Every denomination, smallest value first.
    pub const ALL: [Denomination; 9] = [
        Denomination::Penny,
        Denomination::Nickel,
        Denomination::Dime,
        Denomination::Quarter,
        Denomination::One,
        Denomination::Five,
        Denomination::Ten,
        Denomination::Twenty,
        Denomination::OneHundred,
    ];

    /// Returns the fixed value of one unit.
    pub const fn value(&self) -> Money {
        let cents = match self {
            Denomination::Penny => 1,
            Denomination::Nickel => 5,
            Denomination::Dime => 10,
            Denomination::Quarter => 25,
            Denomination::One => 100,
            Denomination::Five => 500,
            Denomination::Ten => 1_000,
            Denomination::Twenty => 2_000,
            Denomination::OneHundred => 10_000,
        };
        Money::from_cents(cents)
    }

    /// Returns the canonical (normalized) name.
    pub const fn name(&self) -> &'static str {
        match self {
            Denomination::Penny => "PENNY",
            Denomination::Nickel => "NICKEL",
            Denomination::Dime => "DIME",
            Denomination::Quarter => "QUARTER",
            Denomination::One => "ONE",
            Denomination::Five => "FIVE",
            Denomination::Ten => "TEN",
            Denomination::Twenty => "TWENTY",
            Denomination::OneHundred => "ONE HUNDRED",
        }
    }

    /// Returns `value` plus one unit of this denomination, exact to the cent.
    #[inline]
    pub fn add_to(&self, value: Money) -> Money {
        value + self.value()
    }

    /// Returns `value` minus one unit of this denomination, exact to the cent.
    #[inline]
    pub fn subtract_from(&self, value: Money) -> Money {
        value - self.value()
    }

    /// Looks up an already-normalized name.
    fn from_normalized(name: &str) -> Option<Self> {
        if name == "DOLLAR" {
            return Some(Denomination::One);
        }
        Denomination::ALL.into_iter().find(|d| d.name() == name)
    }
}

impl fmt::Display for Denomination {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Denomination {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = normalize_name(s);
        Denomination::from_normalized(&normalized)
            .ok_or(CoreError::InvalidDenomination(normalized))
    }
}

// =============================================================================
// Name-Based Helpers
// =============================================================================

/// Normalizes a denomination name for comparison.
///
/// ## Rules
/// - Leading/trailing whitespace removed
/// - Upper-cased
/// - `_` treated as whitespace
/// - Internal whitespace runs collapse to a single space
///
/// Applying it twice gives the same result as applying it once.
pub fn normalize_name(name: &str) -> String {
    name.split(|c: char| c.is_whitespace() || c == '_')
        .filter(|word| !word.is_empty())
        .map(str::to_uppercase)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Checks whether `name` names one of the nine denominations.
pub fn is_valid(name: &str) -> bool {
    Denomination::from_normalized(&normalize_name(name)).is_some()
}

/// Returns the value of the named denomination.
///
/// ## Errors
/// `CoreError::InvalidDenomination` if the name is not in the table.
pub fn value_of(name: &str) -> CoreResult<Money> {
    Ok(name.parse::<Denomination>()?.value())
}

/// `value + value_of(name)`, rounded to the cent.
pub fn add(value: Money, name: &str) -> CoreResult<Money> {
    Ok(name.parse::<Denomination>()?.add_to(value))
}

/// `value - value_of(name)`, rounded to the cent.
pub fn subtract(value: Money, name: &str) -> CoreResult<Money> {
    Ok(name.parse::<Denomination>()?.subtract_from(value))
}

// =============================================================================
// Unit Tests
// =============================================================================
