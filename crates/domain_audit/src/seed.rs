//! Seeded audit working set
//!
//! Deterministic unposted charges across all four categories, used until
//! a posting backend feeds the audit.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use core_kernel::{Currency, Money, RowLedger};

use crate::row::{AuditCategory, AuditRow};

/// Builds the seeded working set, two rows per category
pub fn seed_audit_rows(currency: Currency) -> RowLedger<AuditRow> {
    let mut ledger = RowLedger::new();
    for (category, room, guest, service, tariff, charge, vat, remarks) in SEED_ROWS {
        ledger.insert(|id| AuditRow {
            id,
            category: *category,
            room_number: (*room).to_string(),
            guest_name: (*guest).to_string(),
            service: (*service).to_string(),
            room_tariff: Money::new(*tariff, currency),
            service_charge: Money::new(*charge, currency),
            vat_amount: Money::new(*vat, currency),
            remarks: (*remarks).to_string(),
        });
    }
    ledger
}

type SeedRow = (
    AuditCategory,
    &'static str,
    &'static str,
    &'static str,
    Decimal,
    Decimal,
    Decimal,
    &'static str,
);

const SEED_ROWS: &[SeedRow] = &[
    (
        AuditCategory::Room,
        "101",
        "John Doe",
        "Overnight Stay",
        dec!(120),
        dec!(12),
        dec!(6),
        "",
    ),
    (
        AuditCategory::Room,
        "102",
        "Jane Smith",
        "Overnight Stay",
        dec!(150),
        dec!(15),
        dec!(7.5),
        "Late checkout",
    ),
    (
        AuditCategory::Service,
        "103",
        "Michael Brown",
        "Laundry Service",
        dec!(0),
        dec!(18),
        dec!(1.8),
        "",
    ),
    (
        AuditCategory::Service,
        "104",
        "Emily Davis",
        "Spa Treatment",
        dec!(0),
        dec!(60),
        dec!(6),
        "Couples package",
    ),
    (
        AuditCategory::Restaurant,
        "102",
        "Jane Smith",
        "Dinner Buffet",
        dec!(0),
        dec!(40),
        dec!(4),
        "",
    ),
    (
        AuditCategory::Restaurant,
        "105",
        "William Johnson",
        "Room Service Breakfast",
        dec!(0),
        dec!(22),
        dec!(2.2),
        "Charged to room",
    ),
    (
        AuditCategory::Banquet,
        "201",
        "Acme Events",
        "Conference Hall Half Day",
        dec!(300),
        dec!(30),
        dec!(15),
        "Projector included",
    ),
    (
        AuditCategory::Banquet,
        "202",
        "Riverside Wedding",
        "Banquet Dinner",
        dec!(500),
        dec!(50),
        dec!(25),
        "",
    ),
];
