//! Property-Based Test Generators
//!
//! Proptest strategies that generate domain values while keeping their
//! invariants intact.

use proptest::prelude::*;
use rust_decimal::Decimal;

use core_kernel::Currency;
use domain_billing::{ChargeSheet, GuestType, ServiceName, SurchargeKind};

/// Strategy for generating valid Currency values
pub fn currency_strategy() -> impl Strategy<Value = Currency> {
    prop_oneof![
        Just(Currency::USD),
        Just(Currency::BDT),
        Just(Currency::EUR),
    ]
}

/// Strategy for generating non-negative rates with two decimal places
pub fn rate_strategy() -> impl Strategy<Value = Decimal> {
    (0i64..100_000).prop_map(|cents| Decimal::new(cents, 2))
}

/// Strategy for generating quantities the form accepts
pub fn quantity_strategy() -> impl Strategy<Value = u32> {
    1u32..50
}

/// Strategy for generating surcharge kinds
pub fn surcharge_kind_strategy() -> impl Strategy<Value = SurchargeKind> {
    prop_oneof![
        Just(SurchargeKind::Vat),
        Just(SurchargeKind::SdCharge),
        Just(SurchargeKind::AdditionalCharge),
        Just(SurchargeKind::ServiceCharge),
    ]
}

/// Strategy for generating charge sheets with arbitrary inclusion states
pub fn charge_sheet_strategy() -> impl Strategy<Value = ChargeSheet> {
    proptest::collection::vec(
        (surcharge_kind_strategy(), rate_strategy(), any::<bool>()),
        0..=4,
    )
    .prop_map(|entries| {
        let mut sheet = ChargeSheet::new();
        for (kind, amount, included) in entries {
            sheet = sheet.with(kind, amount, included);
        }
        sheet
    })
}

/// Strategy for generating guest types
pub fn guest_type_strategy() -> impl Strategy<Value = GuestType> {
    prop_oneof![
        Just(GuestType::Vip),
        Just(GuestType::Regular),
        Just(GuestType::WalkIn),
    ]
}

/// Strategy for generating service names
pub fn service_name_strategy() -> impl Strategy<Value = ServiceName> {
    prop_oneof![
        Just(ServiceName::RoomCleaning),
        Just(ServiceName::LaundryService),
        Just(ServiceName::FoodDelivery),
        Just(ServiceName::SpaTreatment),
        Just(ServiceName::AirportPickup),
        Just(ServiceName::Minibar),
        Just(ServiceName::ExtraBed),
    ]
}
