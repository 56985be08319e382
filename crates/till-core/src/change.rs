//! # Change Module
//!
//! Greedy change-making over a till snapshot.
//!
//! ## Flow of One Call
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  compute_change(price, cash, &till)                                     │
//! │       │                                                                 │
//! │       ├── price < 0 or cash < 0 ──────────► Err(Validation)             │
//! │       ├── cash < price ───────────────────► Err(InsufficientCash)       │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  GREEDY WITHDRAW (largest denomination first, private copy of till)    │
//! │       │                                                                 │
//! │       ├── change still owed ──────────────► INSUFFICIENT_FUNDS, []      │
//! │       ├── till still holds cash ──────────► OPEN,   non-zero, desc      │
//! │       └── till fully drained ─────────────► CLOSED, every slot, asc     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! This is not an optimal coin-count solver. With only odd leftovers in the
//! drawer it can hand out more coins than necessary, or report
//! `INSUFFICIENT_FUNDS` where a smarter search would succeed
//! ($0.30 owed from one quarter and three dimes).
//!
//! ## Usage
//! ```rust
//! use till_core::change::{compute_change, ChangeStatus};
//! use till_core::denomination::Denomination;
//! use till_core::money::Money;
//! use till_core::till::Till;
//!
//! let till = Till::from_pairs(&[("QUARTER", 4.25), ("ONE", 90.0)]).unwrap();
//! let result = compute_change(Money::from_cents(1950), Money::from_cents(2000), &till).unwrap();
//!
//! assert_eq!(result.status(), ChangeStatus::Open);
//! assert_eq!(result.change()[0].denomination, Denomination::Quarter);
//! assert_eq!(result.change()[0].amount, Money::from_cents(50));
//! ```

use serde::{Deserialize, Serialize};
use tracing::{debug, trace};
use ts_rs::TS;

use crate::denomination::Denomination;
use crate::error::{CoreError, CoreResult};
use crate::money::Money;
use crate::till::{Till, TillEntry};
use crate::validation::validate_amount;

// =============================================================================
// Change Status
// =============================================================================

/// Outcome of a change computation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ChangeStatus {
    /// Change was made and the till still holds cash.
    Open,
    /// The till cannot cover the change with the denominations it holds.
    InsufficientFunds,
    /// Change was made and it emptied the till.
    Closed,
}

impl ChangeStatus {
    /// Wire name (`OPEN`, `INSUFFICIENT_FUNDS`, `CLOSED`).
    pub const fn as_str(&self) -> &'static str {
        match self {
            ChangeStatus::Open => "OPEN",
            ChangeStatus::InsufficientFunds => "INSUFFICIENT_FUNDS",
            ChangeStatus::Closed => "CLOSED",
        }
    }
}

// =============================================================================
// Change Line
// =============================================================================

/// Money handed back in one denomination.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ChangeLine {
    pub denomination: Denomination,
    pub amount: Money,
}

// =============================================================================
// Change Result
// =============================================================================

/// Status plus the ordered change lines.
///
/// ## Ordering Contract
/// - `Open`: only non-zero lines, largest denomination first
/// - `Closed`: one line per denomination in the input till (zeros
///   included), smallest denomination first
/// - `InsufficientFunds`: no lines
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ChangeResult {
    status: ChangeStatus,
    change: Vec<ChangeLine>,
}

impl ChangeResult {
    fn insufficient_funds() -> Self {
        ChangeResult {
            status: ChangeStatus::InsufficientFunds,
            change: Vec::new(),
        }
    }

    pub fn status(&self) -> ChangeStatus {
        self.status
    }

    pub fn change(&self) -> &[ChangeLine] {
        &self.change
    }

    /// Sum of all change lines.
    pub fn total(&self) -> Money {
        self.change.iter().map(|line| line.amount).sum()
    }

    pub fn into_parts(self) -> (ChangeStatus, Vec<ChangeLine>) {
        (self.status, self.change)
    }
}

// =============================================================================
// Greedy Algorithm
// =============================================================================

/// Computes the change for a cash sale.
///
/// The caller's till is read, never modified. Use [`Till::dispense`] to
/// apply the result to the drawer.
///
/// ## Errors
/// - `ValidationError::MustBeNonNegative` if price or cash is negative
/// - `ValidationError::OutOfRange` if price or cash exceeds `MAX_AMOUNT_CENTS`
/// - `CoreError::InsufficientCash` if `cash < price`
///
/// ## Example
/// ```rust
/// use till_core::change::{compute_change, ChangeStatus};
/// use till_core::money::Money;
/// use till_core::till::Till;
///
/// let till = Till::from_pairs(&[("PENNY", 0.5), ("NICKEL", 0.0)]).unwrap();
/// let result = compute_change(Money::from_cents(1950), Money::from_cents(2000), &till).unwrap();
///
/// // The till held exactly the change owed.
/// assert_eq!(result.status(), ChangeStatus::Closed);
/// assert_eq!(result.change().len(), 2);
/// ```
pub fn compute_change(price: Money, cash: Money, till: &Till) -> CoreResult<ChangeResult> {
    validate_amount("price", price)?;
    validate_amount("cash", cash)?;

    if cash < price {
        return Err(CoreError::InsufficientCash { price, cash });
    }

    let owed = cash - price;
    debug!(price = %price, cash = %cash, owed = %owed, entries = till.len(), "Computing change");

    // Working copy, largest denomination first.
    let mut drawer: Vec<TillEntry> = till.entries().to_vec();
    drawer.sort_by(|a, b| b.denomination.cmp(&a.denomination));

    let mut remaining = owed;
    let mut drawn: Vec<ChangeLine> = Vec::with_capacity(drawer.len());

    for entry in &mut drawer {
        let unit = entry.denomination.value();
        let mut line = ChangeLine {
            denomination: entry.denomination,
            amount: Money::zero(),
        };

        // Same outcome as drawing one unit at a time while
        // `remaining >= unit && entry.amount > 0`, in one step: slot amounts
        // are whole multiples of the unit.
        if remaining.is_positive() {
            let take = (remaining.cents() / unit.cents()).min(entry.units());
            let drawn_here = unit * take;
            remaining -= drawn_here;
            entry.amount -= drawn_here;
            line.amount += drawn_here;
        }

        if line.amount.is_positive() {
            trace!(denomination = %line.denomination, amount = %line.amount, "Drew from till");
        }
        drawn.push(line);
    }

    if remaining.is_positive() {
        debug!(owed = %owed, short = %remaining, "Till cannot cover change");
        return Ok(ChangeResult::insufficient_funds());
    }

    let left_in_till: Money = drawer.iter().map(|entry| entry.amount).sum();

    let result = if !left_in_till.is_zero() {
        // `drawn` is already in descending order.
        drawn.retain(|line| line.amount.is_positive());
        ChangeResult {
            status: ChangeStatus::Open,
            change: drawn,
        }
    } else {
        drawn.reverse();
        ChangeResult {
            status: ChangeStatus::Closed,
            change: drawn,
        }
    };

    debug!(
        status = result.status.as_str(),
        lines = result.change.len(),
        left_in_till = %left_in_till,
        "Change computed"
    );
    Ok(result)
}

// =============================================================================
// Unit Tests
// =============================================================================
