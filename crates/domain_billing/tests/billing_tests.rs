//! Billing domain integration tests
//!
//! Exercises the full entry flow: fill the form, submit into the ledger,
//! edit lines in place, and project the table.

use rust_decimal_macros::dec;

use core_kernel::{
    project, Currency, EditableRow, LineId, Money, PageRequest, RowLedger, SequentialId,
};
use domain_billing::{
    BillingLine, ChargeSheet, GuestType, ServiceBillForm, ServiceName, SurchargeKind,
};

fn filled_form(service: ServiceName, rate: rust_decimal::Decimal) -> ServiceBillForm {
    let mut form = ServiceBillForm::new(Currency::USD);
    form.guest_type = Some(GuestType::Regular);
    form.registration_number = "REG-001".to_string();
    form.full_name = "John Doe".to_string();
    form.guest_email = "john.doe@example.com".to_string();
    form.room_number = "101".to_string();
    form.service = Some(service);
    form.rate = rate;
    form.quantity = 1;
    form.complimentary = Some(false);
    form
}

#[test]
fn test_submit_inserts_line_with_ledger_id() {
    let mut ledger: RowLedger<BillingLine> = RowLedger::new();
    let form = filled_form(ServiceName::RoomCleaning, dec!(20));

    let id = ledger.insert(|id| form.build_line(id).unwrap());

    assert_eq!(id, LineId::new(1));
    let line = ledger.get(id).unwrap();
    assert_eq!(line.service, ServiceName::RoomCleaning);
    assert_eq!(line.total, Money::new(dec!(20), Currency::USD));
}

#[test]
fn test_ids_stay_monotonic_across_removal() {
    let mut ledger: RowLedger<BillingLine> = RowLedger::new();
    let form = filled_form(ServiceName::Minibar, dec!(10));

    let first = ledger.insert(|id| form.build_line(id).unwrap());
    let second = ledger.insert(|id| form.build_line(id).unwrap());
    assert!(ledger.remove(first).is_some());

    let third = ledger.insert(|id| form.build_line(id).unwrap());
    assert_eq!(second, LineId::new(2));
    assert_eq!(third, LineId::new(3));
}

#[test]
fn test_in_place_edit_recomputes_total() {
    let mut ledger: RowLedger<BillingLine> = RowLedger::new();
    let mut form = filled_form(ServiceName::LaundryService, dec!(15));
    form.quantity = 2;
    form.set_surcharge(SurchargeKind::Vat, dec!(1.5));
    form.set_surcharge(SurchargeKind::SdCharge, dec!(0.5));

    let id = ledger.insert(|id| form.build_line(id).unwrap());
    let edited = ledger.update(id, |line| {
        line.apply("rate", dec!(20).into()).unwrap();
    });

    assert!(edited);
    assert_eq!(
        ledger.get(id).unwrap().total,
        Money::new(dec!(42), Currency::USD)
    );
}

#[test]
fn test_invalid_form_leaves_ledger_untouched() {
    let mut ledger: RowLedger<BillingLine> = RowLedger::new();
    let form = ServiceBillForm::new(Currency::USD);

    assert!(form.build_line(LineId::new(1)).is_err());
    assert!(ledger.is_empty());
    assert_eq!(ledger.next_sequence(), 1);
}

#[test]
fn test_projection_filters_on_service_label() {
    let mut ledger: RowLedger<BillingLine> = RowLedger::new();
    for service in [
        ServiceName::RoomCleaning,
        ServiceName::LaundryService,
        ServiceName::FoodDelivery,
    ] {
        let form = filled_form(service, dec!(10));
        ledger.insert(|id| form.build_line(id).unwrap());
    }

    let request = PageRequest::new(5).with_filter("laundry");
    let view = project(ledger.rows(), &request);

    assert_eq!(view.filtered_len, 1);
    assert_eq!(view.rows[0].service, ServiceName::LaundryService);
}

#[test]
fn test_projection_pages_clamp_after_bulk_removal() {
    let mut ledger: RowLedger<BillingLine> = RowLedger::new();
    for _ in 0..7 {
        let form = filled_form(ServiceName::ExtraBed, dec!(5));
        ledger.insert(|id| form.build_line(id).unwrap());
    }

    let mut request = PageRequest::new(5);
    request.page = 2;
    assert_eq!(project(ledger.rows(), &request).page_count, 2);

    ledger.remove_where(|line| line.id.sequence() > 2);
    let view = project(ledger.rows(), &request);
    assert_eq!(view.page_count, 1);
    assert_eq!(view.page, 1);
    assert_eq!(view.rows.len(), 2);
}

#[test]
fn test_serde_round_trip_preserves_derived_total() {
    let mut form = filled_form(ServiceName::SpaTreatment, dec!(50));
    form.set_surcharge(SurchargeKind::ServiceCharge, dec!(5));
    let line = form.build_line(LineId::new(9)).unwrap();

    let json = serde_json::to_string(&line).unwrap();
    let back: BillingLine = serde_json::from_str(&json).unwrap();
    assert_eq!(back, line);
    assert_eq!(back.total, Money::new(dec!(55), Currency::USD));
}

#[test]
fn test_charge_sheet_matches_form_grand_total() {
    let mut form = filled_form(ServiceName::AirportPickup, dec!(30));
    form.quantity = 3;
    form.set_surcharge(SurchargeKind::AdditionalCharge, dec!(7));

    let sheet = ChargeSheet::new().with(SurchargeKind::AdditionalCharge, dec!(7), true);
    assert_eq!(form.grand_total(), sheet.total(dec!(30), 3));
}
