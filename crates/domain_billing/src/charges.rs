//! Charge aggregation
//!
//! The charge sheet computes one derived total from a base rate, a
//! quantity, and the subset of surcharges whose inclusion toggle is set.
//!
//! # Invariants
//!
//! - `total = rate * max(quantity, 1) + sum(included surcharge amounts)`
//! - Inclusion toggles are independent booleans; an included amount is
//!   directly additive, including zero.
//! - The sheet never caches a total; callers recompute synchronously on
//!   every mutation so a stale total can never be displayed.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

/// The closed set of optional surcharges on a service bill
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "camelCase")]
pub enum SurchargeKind {
    Vat,
    SdCharge,
    AdditionalCharge,
    ServiceCharge,
}

impl SurchargeKind {
    /// Every surcharge kind, in display order
    pub const ALL: [SurchargeKind; 4] = [
        SurchargeKind::Vat,
        SurchargeKind::SdCharge,
        SurchargeKind::AdditionalCharge,
        SurchargeKind::ServiceCharge,
    ];

    /// Returns the display label
    pub fn label(&self) -> &'static str {
        match self {
            SurchargeKind::Vat => "VAT",
            SurchargeKind::SdCharge => "SD Charge",
            SurchargeKind::AdditionalCharge => "Additional Charge",
            SurchargeKind::ServiceCharge => "Service Charge",
        }
    }
}

/// Amounts and inclusion toggles for the optional surcharges
///
/// Entering a positive amount includes the surcharge automatically, and
/// entering zero (or clearing) excludes it; the toggle can still be
/// flipped independently afterwards. Toggling an inclusion off and back
/// on without changing the amount restores the same total.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChargeSheet {
    amounts: BTreeMap<SurchargeKind, Decimal>,
    included: BTreeSet<SurchargeKind>,
}

impl ChargeSheet {
    /// Creates a sheet with no surcharges entered
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder: sets an amount and an explicit inclusion state
    pub fn with(mut self, kind: SurchargeKind, amount: Decimal, included: bool) -> Self {
        self.amounts.insert(kind, amount);
        if included {
            self.included.insert(kind);
        } else {
            self.included.remove(&kind);
        }
        self
    }

    /// Sets a surcharge amount
    ///
    /// A positive amount includes the surcharge; zero or negative
    /// excludes it.
    pub fn set_amount(&mut self, kind: SurchargeKind, amount: Decimal) {
        self.amounts.insert(kind, amount);
        if amount > Decimal::ZERO {
            self.included.insert(kind);
        } else {
            self.included.remove(&kind);
        }
    }

    /// Toggles a surcharge's inclusion independently of its amount
    pub fn set_included(&mut self, kind: SurchargeKind, included: bool) {
        if included {
            self.included.insert(kind);
        } else {
            self.included.remove(&kind);
        }
    }

    /// Clears one surcharge entirely
    pub fn clear(&mut self, kind: SurchargeKind) {
        self.amounts.remove(&kind);
        self.included.remove(&kind);
    }

    /// Returns the entered amount for a surcharge (zero when absent)
    pub fn amount(&self, kind: SurchargeKind) -> Decimal {
        self.amounts.get(&kind).copied().unwrap_or(Decimal::ZERO)
    }

    /// Returns true when the surcharge currently contributes to totals
    pub fn is_included(&self, kind: SurchargeKind) -> bool {
        self.included.contains(&kind)
    }

    /// Sum of the amounts whose inclusion toggle is set
    pub fn included_sum(&self) -> Decimal {
        self.included
            .iter()
            .map(|kind| self.amount(*kind))
            .sum()
    }

    /// Computes the derived total for a rate and quantity
    ///
    /// Quantity is clamped to a minimum of 1.
    pub fn total(&self, rate: Decimal, quantity: u32) -> Decimal {
        rate * Decimal::from(quantity.max(1)) + self.included_sum()
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    fn amount_strategy() -> impl Strategy<Value = Decimal> {
        (0i64..100_000).prop_map(|n| Decimal::new(n, 2))
    }

    proptest! {
        #[test]
        fn total_law_holds_for_any_subset(
            rate in amount_strategy(),
            quantity in 1u32..100,
            amounts in proptest::collection::vec(amount_strategy(), 4),
            flags in proptest::collection::vec(any::<bool>(), 4)
        ) {
            let mut charges = ChargeSheet::new();
            let mut expected = rate * Decimal::from(quantity);
            for ((kind, amount), include) in
                SurchargeKind::ALL.iter().zip(&amounts).zip(&flags)
            {
                charges.set_amount(*kind, *amount);
                charges.set_included(*kind, *include);
                if *include {
                    expected += *amount;
                }
            }

            prop_assert_eq!(charges.total(rate, quantity), expected);
        }

        #[test]
        fn total_is_independent_of_edit_order(
            rate in amount_strategy(),
            quantity in 1u32..100,
            amounts in proptest::collection::vec(amount_strategy(), 4)
        ) {
            // Forward entry order
            let mut forward = ChargeSheet::new();
            for (kind, amount) in SurchargeKind::ALL.iter().zip(&amounts) {
                forward.set_amount(*kind, *amount);
            }

            // Reverse entry order
            let mut reverse = ChargeSheet::new();
            for (kind, amount) in SurchargeKind::ALL.iter().zip(&amounts).rev() {
                reverse.set_amount(*kind, *amount);
            }

            prop_assert_eq!(
                forward.total(rate, quantity),
                reverse.total(rate, quantity)
            );
        }
    }
}
