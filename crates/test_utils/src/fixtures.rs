//! Pre-built Test Fixtures
//!
//! Ready-to-use test data for the front office domain, consistent and
//! predictable across the suite.

use chrono::NaiveDate;
use rust_decimal_macros::dec;

use core_kernel::{Currency, Money};
use domain_billing::{ChargeSheet, SurchargeKind};
use domain_guest::GuestLookupResult;

/// Fixture for Money test data
pub struct MoneyFixtures;

impl MoneyFixtures {
    /// A standard USD amount
    pub fn usd_100() -> Money {
        Money::new(dec!(100.00), Currency::USD)
    }

    /// A zero amount
    pub fn usd_zero() -> Money {
        Money::zero(Currency::USD)
    }

    /// A BDT amount for currency mismatch tests
    pub fn bdt_100() -> Money {
        Money::new(dec!(100.00), Currency::BDT)
    }
}

/// Fixture for temporal test data
pub struct DateFixtures;

impl DateFixtures {
    /// The standard audit date (Jan 30, 2025)
    pub fn audit_date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 1, 30).unwrap()
    }

    /// A payment date inside the audit period
    pub fn payment_date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 1, 10).unwrap()
    }
}

/// Fixture for charge sheets
pub struct ChargeFixtures;

impl ChargeFixtures {
    /// VAT 1.5 and SD 0.5, both included
    pub fn laundry_charges() -> ChargeSheet {
        ChargeSheet::new()
            .with(SurchargeKind::Vat, dec!(1.5), true)
            .with(SurchargeKind::SdCharge, dec!(0.5), true)
    }

    /// VAT included, SD entered but excluded
    pub fn mixed_inclusion() -> ChargeSheet {
        ChargeSheet::new()
            .with(SurchargeKind::Vat, dec!(5), true)
            .with(SurchargeKind::SdCharge, dec!(3), false)
    }
}

/// Fixture for guest directory records
pub struct GuestFixtures;

impl GuestFixtures {
    /// The registered guest for room 101
    pub fn jane_smith() -> GuestLookupResult {
        GuestLookupResult {
            guest_type: domain_billing::GuestType::Regular,
            registration_number: "REG-002".to_string(),
            full_name: "Jane Smith".to_string(),
            guest_email: "jane.smith@example.com".to_string(),
            room_number: "101".to_string(),
            service: domain_billing::ServiceName::LaundryService,
            rate: dec!(15),
            quantity: 2,
            vat: dec!(1.5),
            sd_charge: dec!(0.5),
            complimentary: false,
            remarks: "Wash & fold only".to_string(),
        }
    }
}
