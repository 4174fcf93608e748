//! Seeded payment register
//!
//! Deterministic starting rows for the payment screen until a billing
//! backend feeds the register.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use core_kernel::{Currency, Money, RowLedger};

use crate::payment::{PaymentMode, PaymentRecord, PaymentType};

/// Builds the seeded register in invoice order
pub fn seed_payments(currency: Currency) -> RowLedger<PaymentRecord> {
    let mut ledger = RowLedger::new();
    for (invoice, day, name, room, registration, amount, kind, mode, remarks) in SEED_ROWS {
        let record_date = NaiveDate::from_ymd_opt(2025, 1, *day);
        ledger.insert(|id| PaymentRecord {
            id,
            invoice_number: (*invoice).to_string(),
            // the seed table only holds valid days
            payment_date: record_date.unwrap_or_default(),
            guest_name: (*name).to_string(),
            room_number: (*room).to_string(),
            registration_number: (*registration).to_string(),
            amount: Money::new(*amount, currency),
            payment_type: *kind,
            payment_mode: *mode,
            remarks: (*remarks).to_string(),
        });
    }
    ledger
}

type SeedRow = (
    &'static str,
    u32,
    &'static str,
    &'static str,
    &'static str,
    Decimal,
    PaymentType,
    PaymentMode,
    &'static str,
);

const SEED_ROWS: &[SeedRow] = &[
    (
        "INV-1001",
        10,
        "John Doe",
        "101",
        "REG001",
        dec!(250),
        PaymentType::Service,
        PaymentMode::Cash,
        "No remarks",
    ),
    (
        "INV-1002",
        12,
        "Jane Smith",
        "102",
        "REG002",
        dec!(500),
        PaymentType::Deposit,
        PaymentMode::Card,
        "Late payment",
    ),
    (
        "INV-1003",
        15,
        "Michael Brown",
        "103",
        "REG003",
        dec!(350),
        PaymentType::Service,
        PaymentMode::Online,
        "",
    ),
    (
        "INV-1004",
        18,
        "Emily Davis",
        "104",
        "REG004",
        dec!(450),
        PaymentType::Deposit,
        PaymentMode::Cash,
        "Advance paid",
    ),
    (
        "INV-1005",
        21,
        "William Johnson",
        "105",
        "REG005",
        dec!(600),
        PaymentType::Other,
        PaymentMode::Card,
        "",
    ),
];

#[cfg(test)]
mod tests {
    use super::*;
    use core_kernel::{LedgerRow, SequentialId};

    #[test]
    fn test_seed_has_five_rows_in_invoice_order() {
        let ledger = seed_payments(Currency::USD);
        assert_eq!(ledger.len(), 5);
        let invoices: Vec<_> = ledger.iter().map(|p| p.invoice_number.clone()).collect();
        assert_eq!(
            invoices,
            vec!["INV-1001", "INV-1002", "INV-1003", "INV-1004", "INV-1005"]
        );
    }

    #[test]
    fn test_seed_ids_start_at_one() {
        let ledger = seed_payments(Currency::USD);
        let first = ledger.iter().next().unwrap();
        assert_eq!(first.id().sequence(), 1);
        assert_eq!(ledger.next_sequence(), 6);
    }

    #[test]
    fn test_seed_amounts_carry_the_requested_currency() {
        let ledger = seed_payments(Currency::BDT);
        assert!(ledger.iter().all(|p| p.amount.currency() == Currency::BDT));
    }
}
