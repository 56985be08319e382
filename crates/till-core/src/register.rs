//! # Register Module
//!
//! The number/string entry point used by register front-ends.
//!
//! ## Wire Shape
//! ```text
//! check_cash_register(19.5, 20.0, [["PENNY", 1.01], ..., ["ONE HUNDRED", 100]])
//!      │
//!      ▼
//! { "status": "OPEN", "change": [["QUARTER", 0.5]] }
//! ```
//!
//! Dollars cross this boundary as `f64` and are rounded to the cent on the
//! way in. Everything behind it works in [`Money`].

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::change::{compute_change, ChangeResult, ChangeStatus};
use crate::error::CoreResult;
use crate::money::Money;
use crate::till::Till;
use crate::validation::parse_dollars;

/// Result of [`check_cash_register`], shaped for JSON.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct RegisterReport {
    pub status: ChangeStatus,
    /// `(canonical denomination name, dollars)` pairs.
    pub change: Vec<(String, f64)>,
}

impl From<ChangeResult> for RegisterReport {
    fn from(result: ChangeResult) -> Self {
        let (status, lines) = result.into_parts();
        RegisterReport {
            status,
            change: lines
                .into_iter()
                .map(|line| (line.denomination.name().to_string(), line.amount.to_dollars()))
                .collect(),
        }
    }
}

/// Computes change from dollar amounts and a `(name, dollars)` till.
///
/// All till names and amounts are validated before any change is computed.
///
/// ## Errors
/// - `CoreError::InvalidDenomination` for an unknown name anywhere in `till`
/// - `CoreError::InsufficientCash` if `cash < price`
/// - `CoreError::Validation` for non-finite or negative numbers
///
/// ## Example
/// ```rust
/// use till_core::change::ChangeStatus;
/// use till_core::register::check_cash_register;
///
/// let report = check_cash_register(
///     19.5,
///     20.0,
///     &[
///         ("PENNY", 1.01),
///         ("NICKEL", 2.05),
///         ("DIME", 3.1),
///         ("QUARTER", 4.25),
///         ("ONE", 90.0),
///         ("FIVE", 55.0),
///         ("TEN", 20.0),
///         ("TWENTY", 60.0),
///         ("ONE HUNDRED", 100.0),
///     ],
/// )
/// .unwrap();
///
/// assert_eq!(report.status, ChangeStatus::Open);
/// assert_eq!(report.change, vec![("QUARTER".to_string(), 0.5)]);
/// ```
pub fn check_cash_register<S>(price: f64, cash: f64, till: &[(S, f64)]) -> CoreResult<RegisterReport>
where
    S: AsRef<str>,
{
    let till = Till::from_pairs(till)?;
    let price: Money = parse_dollars("price", price)?;
    let cash: Money = parse_dollars("cash", cash)?;

    compute_change(price, cash, &till).map(RegisterReport::from)
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{CoreError, ValidationError};

    fn zeroed_till_with_pennies(pennies: f64) -> Vec<(&'static str, f64)> {
        vec![
            ("PENNY", pennies),
            ("NICKEL", 0.0),
            ("DIME", 0.0),
            ("QUARTER", 0.0),
            ("ONE", 0.0),
            ("FIVE", 0.0),
            ("TEN", 0.0),
            ("TWENTY", 0.0),
            ("ONE HUNDRED", 0.0),
        ]
    }

    fn change(pairs: &[(&str, f64)]) -> Vec<(String, f64)> {
        pairs.iter().map(|(n, a)| (n.to_string(), *a)).collect()
    }

    #[test]
    fn test_open_report() {
        let report = check_cash_register(
            3.26,
            100.0,
            &[
                ("PENNY", 1.01),
                ("NICKEL", 2.05),
                ("DIME", 3.1),
                ("QUARTER", 4.25),
                ("ONE", 90.0),
                ("FIVE", 55.0),
                ("TEN", 20.0),
                ("TWENTY", 60.0),
                ("ONE HUNDRED", 100.0),
            ],
        )
        .unwrap();

        assert_eq!(report.status, ChangeStatus::Open);
        assert_eq!(
            report.change,
            change(&[
                ("TWENTY", 60.0),
                ("TEN", 20.0),
                ("FIVE", 15.0),
                ("ONE", 1.0),
                ("QUARTER", 0.5),
                ("DIME", 0.2),
                ("PENNY", 0.04),
            ])
        );
    }

    #[test]
    fn test_insufficient_funds_report() {
        let report = check_cash_register(19.5, 20.0, &zeroed_till_with_pennies(0.01)).unwrap();
        assert_eq!(report.status, ChangeStatus::InsufficientFunds);
        assert!(report.change.is_empty());
    }

    #[test]
    fn test_closed_report() {
        let report = check_cash_register(19.5, 20.0, &zeroed_till_with_pennies(0.5)).unwrap();
        assert_eq!(report.status, ChangeStatus::Closed);
        assert_eq!(report.change, change(&zeroed_till_with_pennies(0.5)));
    }

    #[test]
    fn test_insufficient_cash() {
        let err = check_cash_register(20.0, 19.5, &zeroed_till_with_pennies(0.5)).unwrap_err();
        assert!(matches!(err, CoreError::InsufficientCash { .. }));
    }

    #[test]
    fn test_flexible_names_and_canonical_output() {
        let report = check_cash_register(
            0.0,
            200.0,
            &[("one  hundred", 300.0), ("  twenty", 0.0)],
        )
        .unwrap();
        assert_eq!(report.status, ChangeStatus::Open);
        assert_eq!(report.change, change(&[("ONE HUNDRED", 200.0)]));
    }

    #[test]
    fn test_invalid_name_reported_before_greedy_pass() {
        // The till could never cover this, but the bad name wins.
        let err = check_cash_register(19.5, 20.0, &[("PENNY", 0.01), ("GUINEA", 0.0)]).unwrap_err();
        assert_eq!(err, CoreError::InvalidDenomination("GUINEA".to_string()));
    }

    #[test]
    fn test_oversized_slots_rejected() {
        let err = check_cash_register(0.0, 0.0, &[("ONE HUNDRED", 6.0e16), ("TWENTY", 6.0e16)])
            .unwrap_err();
        assert!(matches!(
            err,
            CoreError::Validation(ValidationError::OutOfRange { .. })
        ));
    }

    #[test]
    fn test_hundred_million_dollars_in_pennies() {
        let report = check_cash_register(0.0, 1.0e8, &[("PENNY", 1.0e8)]).unwrap();
        assert_eq!(report.status, ChangeStatus::Closed);
        assert_eq!(report.change, change(&[("PENNY", 1.0e8)]));
    }

    #[test]
    fn test_float_inputs_rounded_to_cents() {
        let report = check_cash_register(0.1 + 0.2, 0.55, &[("QUARTER", 1.0)]).unwrap();
        assert_eq!(report.change, change(&[("QUARTER", 0.25)]));
    }

    #[test]
    fn test_report_json_shape() {
        let report = check_cash_register(19.5, 20.0, &[("QUARTER", 4.25)]).unwrap();
        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(
            json,
            serde_json::json!({ "status": "OPEN", "change": [["QUARTER", 0.5]] })
        );
    }
}
