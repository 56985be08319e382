//! # Till Module
//!
//! The cash drawer: how much of each denomination is available.
//!
//! ## Till Snapshot
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Caller input                       Till                                │
//! │  ─────────────────────────          ───────────────────────────         │
//! │  ["PENNY", 1.01]            ──►     TillEntry(Penny,   $1.01)           │
//! │  ["quarter", 4.25]          ──►     TillEntry(Quarter, $4.25)           │
//! │  ["one  hundred", 100]      ──►     TillEntry(OneHundred, $100.00)      │
//! │  ["penny", 0.02]            ──►     (merged) Penny = $1.03              │
//! │                                                                         │
//! │  • Caller order is kept (first occurrence wins the slot)               │
//! │  • Every name and amount is validated before the till exists           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Amounts are money held, not coin counts: `$4.25` of quarters is 17 coins.
//!
//! ## Usage
//! ```rust
//! use till_core::denomination::Denomination;
//! use till_core::till::Till;
//!
//! let mut till = Till::from_pairs(&[("PENNY", 1.01), ("ONE", 90.0)]).unwrap();
//! assert_eq!(till.total().cents(), 9101);
//!
//! assert_eq!(till.take_unit(Denomination::One), Some(Denomination::One));
//! assert_eq!(till.amount_of(Denomination::One).cents(), 8900);
//! ```

use serde::{de, Deserialize, Deserializer, Serialize};
use tracing::{debug, trace};
use ts_rs::TS;

use crate::change::{ChangeLine, ChangeResult};
use crate::denomination::Denomination;
use crate::error::{CoreError, CoreResult, ValidationError};
use crate::money::Money;
use crate::MAX_AMOUNT_CENTS;
use crate::validation::{
    parse_dollars, validate_amount_limit, validate_denomination_name, validate_till_amount,
    validate_till_size,
};

// =============================================================================
// Till Entry
// =============================================================================

/// The amount of money held in one denomination.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct TillEntry {
    pub denomination: Denomination,
    /// Money held in this denomination (not a coin count).
    pub amount: Money,
}

impl TillEntry {
    /// Creates a validated entry.
    ///
    /// ## Errors
    /// `ValidationError` if the amount is negative or not a whole number of
    /// units.
    pub fn new(denomination: Denomination, amount: Money) -> CoreResult<Self> {
        validate_till_amount(denomination, amount)?;
        Ok(TillEntry {
            denomination,
            amount,
        })
    }

    /// Number of coins or notes this entry represents.
    #[inline]
    pub fn units(&self) -> i64 {
        self.amount.cents() / self.denomination.value().cents()
    }

    /// Checks whether at least one unit is left.
    #[inline]
    pub fn is_empty(&self) -> bool {
        !self.amount.is_positive()
    }
}

// =============================================================================
// Till
// =============================================================================

/// A snapshot of the cash drawer.
///
/// ## Invariants
/// - At most one entry per denomination
/// - Entries keep the order in which denominations were first supplied
/// - Every amount is a non-negative whole number of units, at most
///   `MAX_AMOUNT_CENTS`
///
/// Deserialization goes through [`Till::from_entries`], so a till read from
/// JSON holds the same invariants as one built in code.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, TS)]
#[ts(export)]
pub struct Till {
    entries: Vec<TillEntry>,
}

/// Unvalidated wire form of a [`Till`].
#[derive(Deserialize)]
struct TillRecord {
    entries: Vec<TillEntry>,
}

impl<'de> Deserialize<'de> for Till {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let record = TillRecord::deserialize(deserializer)?;
        Till::from_entries(record.entries).map_err(de::Error::custom)
    }
}

impl Till {
    /// Creates an empty till with no denominations.
    pub fn new() -> Self {
        Till::default()
    }

    /// Creates a till holding zero of every denomination, smallest first.
    ///
    /// Mirrors a freshly opened register where every slot exists but is empty.
    pub fn with_all_denominations() -> Self {
        Till {
            entries: Denomination::ALL
                .into_iter()
                .map(|denomination| TillEntry {
                    denomination,
                    amount: Money::zero(),
                })
                .collect(),
        }
    }

    /// Builds a till from validated entries.
    ///
    /// Repeated denominations are merged into the first occurrence; the
    /// merged slot must still be within `MAX_AMOUNT_CENTS`.
    pub fn from_entries<I>(entries: I) -> CoreResult<Self>
    where
        I: IntoIterator<Item = TillEntry>,
    {
        let mut till = Till::new();
        for entry in entries {
            validate_till_amount(entry.denomination, entry.amount)?;
            till.deposit(entry.denomination, entry.amount)?;
        }
        validate_till_size(till.entries.len())?;
        Ok(till)
    }

    /// Builds a till from raw `(name, dollars)` pairs.
    ///
    /// Every pair is validated before the till is returned, so an invalid
    /// name anywhere in the input fails the whole call.
    ///
    /// ## Errors
    /// - `ValidationError::OutOfRange` if more than `MAX_TILL_ENTRIES` pairs
    /// - `ValidationError::Required` for a blank name
    /// - `CoreError::InvalidDenomination` for an unknown name
    /// - `ValidationError` for a non-finite, negative or fractional-unit amount
    ///
    /// ## Example
    /// ```rust
    /// use till_core::till::Till;
    ///
    /// assert!(Till::from_pairs(&[("QUARTER", 4.25)]).is_ok());
    /// assert!(Till::from_pairs(&[("QUARTER", 4.25), ("EURO", 1.0)]).is_err());
    /// ```
    pub fn from_pairs<S>(pairs: &[(S, f64)]) -> CoreResult<Self>
    where
        S: AsRef<str>,
    {
        validate_till_size(pairs.len())?;

        let entries = pairs
            .iter()
            .map(|(name, dollars)| {
                let name = name.as_ref();
                validate_denomination_name(name)?;
                let denomination: Denomination = name.parse()?;
                let amount = parse_dollars(&format!("{denomination} amount"), *dollars)?;
                TillEntry::new(denomination, amount)
            })
            .collect::<CoreResult<Vec<_>>>()?;

        Till::from_entries(entries)
    }

    /// Entries in caller order.
    pub fn entries(&self) -> &[TillEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Money held in one denomination (zero if the till has no slot for it).
    pub fn amount_of(&self, denomination: Denomination) -> Money {
        self.entry(denomination)
            .map_or(Money::zero(), |entry| entry.amount)
    }

    /// Total cash in the till.
    pub fn total(&self) -> Money {
        self.entries.iter().map(|entry| entry.amount).sum()
    }

    /// Puts one coin or note into the till.
    ///
    /// ## Errors
    /// `ValidationError::OutOfRange` if the slot would exceed
    /// `MAX_AMOUNT_CENTS`.
    pub fn add_unit(&mut self, denomination: Denomination) -> CoreResult<()> {
        self.deposit(denomination, denomination.value())
    }

    /// Takes one coin or note out of the till.
    ///
    /// Returns `None` if that denomination is empty or has no slot.
    pub fn take_unit(&mut self, denomination: Denomination) -> Option<Denomination> {
        let entry = self.entry_mut(denomination)?;
        if entry.is_empty() {
            return None;
        }
        entry.amount = denomination.subtract_from(entry.amount);
        trace!(denomination = %denomination, remaining = %entry.amount, "Took unit from till");
        Some(denomination)
    }

    /// Removes the change in `result` from the till.
    ///
    /// `compute_change` never touches the caller's till; this is the explicit
    /// step for callers who want the drawer to reflect the cash handed out.
    /// Nothing is removed unless every line can be covered.
    ///
    /// ## Errors
    /// `ValidationError::OutOfRange` if a line asks for more than the till
    /// holds in that denomination.
    pub fn dispense(&mut self, result: &ChangeResult) -> CoreResult<()> {
        for line in result.change() {
            self.check_covers(line)?;
        }

        for line in result.change() {
            if let Some(entry) = self.entry_mut(line.denomination) {
                entry.amount -= line.amount;
            }
        }

        debug!(
            status = ?result.status(),
            dispensed = %result.total(),
            remaining = %self.total(),
            "Dispensed change from till"
        );
        Ok(())
    }

    fn check_covers(&self, line: &ChangeLine) -> CoreResult<()> {
        let held = self.amount_of(line.denomination);
        if line.amount > held {
            return Err(CoreError::Validation(ValidationError::OutOfRange {
                field: format!("{} change", line.denomination),
                min: 0,
                max: held.cents(),
            }));
        }
        Ok(())
    }

    fn deposit(&mut self, denomination: Denomination, amount: Money) -> CoreResult<()> {
        let held = self.amount_of(denomination);
        let field = format!("{denomination} amount");
        let merged = held
            .checked_add(amount)
            .ok_or_else(|| ValidationError::OutOfRange {
                field: field.clone(),
                min: 0,
                max: MAX_AMOUNT_CENTS,
            })?;
        validate_amount_limit(&field, merged)?;

        match self.entry_mut(denomination) {
            Some(entry) => entry.amount = merged,
            None => self.entries.push(TillEntry {
                denomination,
                amount: merged,
            }),
        }
        Ok(())
    }

    fn entry(&self, denomination: Denomination) -> Option<&TillEntry> {
        self.entries
            .iter()
            .find(|entry| entry.denomination == denomination)
    }

    fn entry_mut(&mut self, denomination: Denomination) -> Option<&mut TillEntry> {
        self.entries
            .iter_mut()
            .find(|entry| entry.denomination == denomination)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
