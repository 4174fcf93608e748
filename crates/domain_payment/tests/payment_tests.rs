//! Payment domain integration tests

use rust_decimal_macros::dec;

use core_kernel::{project, Currency, EditableRow, Money, PageRequest};
use domain_payment::{seed_payments, PaymentMode};

#[test]
fn test_filter_matches_invoice_and_guest_name() {
    let ledger = seed_payments(Currency::USD);

    let by_invoice = project(ledger.rows(), &PageRequest::new(10).with_filter("inv-1003"));
    assert_eq!(by_invoice.filtered_len, 1);
    assert_eq!(by_invoice.rows[0].guest_name, "Michael Brown");

    let by_name = project(ledger.rows(), &PageRequest::new(10).with_filter("smith"));
    assert_eq!(by_name.filtered_len, 1);
    assert_eq!(by_name.rows[0].invoice_number, "INV-1002");
}

#[test]
fn test_filter_matches_mode_label() {
    let ledger = seed_payments(Currency::USD);
    let view = project(ledger.rows(), &PageRequest::new(10).with_filter("card"));
    assert_eq!(view.filtered_len, 2);
}

#[test]
fn test_edit_then_delete_round() {
    let mut ledger = seed_payments(Currency::USD);
    let id = ledger.iter().next().unwrap().id;

    let edited = ledger.update(id, |payment| {
        payment.apply("amount", dec!(275).into()).unwrap();
        payment.apply("payment_mode", "Online".into()).unwrap();
    });
    assert!(edited);

    let payment = ledger.get(id).unwrap();
    assert_eq!(payment.amount, Money::new(dec!(275), Currency::USD));
    assert_eq!(payment.payment_mode, PaymentMode::Online);

    let removed = ledger.remove(id).unwrap();
    assert_eq!(removed.invoice_number, "INV-1001");
    assert_eq!(ledger.len(), 4);
    // the freed sequence is never handed out again
    assert_eq!(ledger.next_sequence(), 6);
}

#[test]
fn test_removing_missing_payment_is_a_silent_no_op() {
    let mut ledger = seed_payments(Currency::USD);
    let id = ledger.iter().next().unwrap().id;
    assert!(ledger.remove(id).is_some());
    assert!(ledger.remove(id).is_none());
    assert_eq!(ledger.len(), 4);
}

#[test]
fn test_projection_keeps_insertion_order() {
    let ledger = seed_payments(Currency::USD);
    let view = project(ledger.rows(), &PageRequest::new(3));
    let invoices: Vec<_> = view.rows.iter().map(|p| p.invoice_number.as_str()).collect();
    assert_eq!(invoices, vec!["INV-1001", "INV-1002", "INV-1003"]);
    assert_eq!(view.page_count, 2);
}
