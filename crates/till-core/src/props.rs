//! Property-based tests for the change calculator.
//!
//! - Change balances the sale: price + change == cash
//! - Status-specific ordering and filtering of change lines
//! - Name normalization is idempotent

use proptest::prelude::*;

use crate::change::{compute_change, ChangeStatus};
use crate::denomination::{normalize_name, Denomination};
use crate::money::Money;
use crate::till::{Till, TillEntry};

/// Strategy to generate a till: for each denomination, maybe a slot holding
/// 0 to 20 units, in shuffled order.
fn arb_till() -> impl Strategy<Value = Till> {
    prop::collection::vec((any::<bool>(), 0i64..=20), Denomination::ALL.len())
        .prop_map(|slots| {
            Denomination::ALL
                .into_iter()
                .zip(slots)
                .filter(|(_, (present, _))| *present)
                .map(|(denomination, (_, units))| TillEntry {
                    denomination,
                    amount: Money::from_cents(denomination.value().cents() * units),
                })
                .collect::<Vec<_>>()
        })
        .prop_shuffle()
        .prop_map(|entries| Till::from_entries(entries).unwrap_or_default())
}

/// Strategy to generate (price, cash) with cash >= price, up to $500.00.
fn arb_sale() -> impl Strategy<Value = (Money, Money)> {
    (0i64..50_000, 0i64..50_000)
        .prop_map(|(price, extra)| (Money::from_cents(price), Money::from_cents(price + extra)))
}

/// Strategy to generate denomination-ish names with messy spacing and case.
fn messy_name() -> impl Strategy<Value = String> {
    "[ \t_]{0,3}[a-zA-Z]{1,8}([ \t_]{1,3}[a-zA-Z]{1,8})?[ \t_]{0,3}"
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// When change is made, price plus change equals cash, to the cent.
    #[test]
    fn prop_change_balances_sale(till in arb_till(), (price, cash) in arb_sale()) {
        let result = compute_change(price, cash, &till).unwrap();
        if result.status() != ChangeStatus::InsufficientFunds {
            prop_assert_eq!(price + result.total(), cash);
        }
    }

    /// INSUFFICIENT_FUNDS never carries change lines.
    #[test]
    fn prop_insufficient_funds_is_empty(till in arb_till(), (price, cash) in arb_sale()) {
        let result = compute_change(price, cash, &till).unwrap();
        if result.status() == ChangeStatus::InsufficientFunds {
            prop_assert!(result.change().is_empty());
        }
    }

    /// OPEN: non-zero lines, strictly descending. CLOSED: every input
    /// denomination, strictly ascending.
    #[test]
    fn prop_line_order_and_filtering(till in arb_till(), (price, cash) in arb_sale()) {
        let result = compute_change(price, cash, &till).unwrap();
        let denominations: Vec<Denomination> =
            result.change().iter().map(|line| line.denomination).collect();

        match result.status() {
            ChangeStatus::Open => {
                prop_assert!(result.change().iter().all(|line| line.amount.is_positive()));
                prop_assert!(denominations.windows(2).all(|w| w[0] > w[1]));
            }
            ChangeStatus::Closed => {
                prop_assert_eq!(denominations.len(), till.len());
                prop_assert!(till.entries().iter().all(|e| denominations.contains(&e.denomination)));
                prop_assert!(denominations.windows(2).all(|w| w[0] < w[1]));
            }
            ChangeStatus::InsufficientFunds => {}
        }
    }

    /// No line ever hands out more than the till held.
    #[test]
    fn prop_change_never_exceeds_till(till in arb_till(), (price, cash) in arb_sale()) {
        let result = compute_change(price, cash, &till).unwrap();
        for line in result.change() {
            prop_assert!(line.amount <= till.amount_of(line.denomination));
        }
    }

    /// normalize(normalize(x)) == normalize(x)
    #[test]
    fn prop_normalize_is_idempotent(name in messy_name()) {
        let once = normalize_name(&name);
        prop_assert_eq!(normalize_name(&once), once);
    }

    /// Any spacing/case of a canonical name resolves to the same denomination.
    #[test]
    fn prop_messy_canonical_names_resolve(index in 0usize..9, upper in any::<bool>(), pad in 1usize..4) {
        let denomination = Denomination::ALL[index];
        let spaced = denomination.name().replace(' ', &" ".repeat(pad));
        let name = if upper { spaced } else { spaced.to_lowercase() };
        prop_assert_eq!(format!("  {name} ").parse::<Denomination>().unwrap(), denomination);
    }
}
