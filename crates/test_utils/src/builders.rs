//! Test Data Builders
//!
//! Builder patterns for constructing test data with sensible defaults,
//! so tests specify only the fields they care about. Name and email
//! defaults come from `fake` so accidental value coupling between tests
//! shows up quickly.

use fake::faker::internet::en::SafeEmail;
use fake::faker::name::en::Name;
use fake::Fake;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use core_kernel::{Currency, Money, RowLedger};
use domain_audit::{AuditCategory, AuditRow};
use domain_billing::{GuestType, ServiceBillForm, ServiceName, SurchargeKind};

/// Builder for a valid service bill form
pub struct ServiceBillFormBuilder {
    guest_type: GuestType,
    registration_number: String,
    full_name: String,
    guest_email: String,
    room_number: String,
    service: ServiceName,
    rate: Decimal,
    quantity: u32,
    surcharges: Vec<(SurchargeKind, Decimal)>,
    complimentary: bool,
    currency: Currency,
}

impl Default for ServiceBillFormBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl ServiceBillFormBuilder {
    /// Creates a builder producing a form that passes validation
    pub fn new() -> Self {
        Self {
            guest_type: GuestType::Regular,
            registration_number: "REG-100".to_string(),
            full_name: Name().fake(),
            guest_email: SafeEmail().fake(),
            room_number: "101".to_string(),
            service: ServiceName::RoomCleaning,
            rate: dec!(20),
            quantity: 1,
            surcharges: Vec::new(),
            complimentary: false,
            currency: Currency::USD,
        }
    }

    pub fn with_guest_type(mut self, guest_type: GuestType) -> Self {
        self.guest_type = guest_type;
        self
    }

    pub fn with_full_name(mut self, name: impl Into<String>) -> Self {
        self.full_name = name.into();
        self
    }

    pub fn with_room(mut self, room: impl Into<String>) -> Self {
        self.room_number = room.into();
        self
    }

    pub fn with_service(mut self, service: ServiceName) -> Self {
        self.service = service;
        self
    }

    pub fn with_rate(mut self, rate: Decimal) -> Self {
        self.rate = rate;
        self
    }

    pub fn with_quantity(mut self, quantity: u32) -> Self {
        self.quantity = quantity;
        self
    }

    pub fn with_surcharge(mut self, kind: SurchargeKind, amount: Decimal) -> Self {
        self.surcharges.push((kind, amount));
        self
    }

    pub fn with_currency(mut self, currency: Currency) -> Self {
        self.currency = currency;
        self
    }

    /// Builds the form
    pub fn build(self) -> ServiceBillForm {
        let mut form = ServiceBillForm::new(self.currency);
        form.guest_type = Some(self.guest_type);
        form.registration_number = self.registration_number;
        form.full_name = self.full_name;
        form.guest_email = self.guest_email;
        form.room_number = self.room_number;
        form.service = Some(self.service);
        form.rate = self.rate;
        form.quantity = self.quantity;
        for (kind, amount) in self.surcharges {
            form.set_surcharge(kind, amount);
        }
        form.complimentary = Some(self.complimentary);
        form
    }
}

/// Builder for an audit working set
pub struct AuditLedgerBuilder {
    rows: Vec<(AuditCategory, String, Decimal)>,
    currency: Currency,
}

impl Default for AuditLedgerBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl AuditLedgerBuilder {
    pub fn new() -> Self {
        Self {
            rows: Vec::new(),
            currency: Currency::USD,
        }
    }

    /// Adds a row in the given category and room with the given tariff
    pub fn with_row(
        mut self,
        category: AuditCategory,
        room: impl Into<String>,
        tariff: Decimal,
    ) -> Self {
        self.rows.push((category, room.into(), tariff));
        self
    }

    /// Builds the ledger, allocating ids in insertion order
    pub fn build(self) -> RowLedger<AuditRow> {
        let currency = self.currency;
        let mut ledger = RowLedger::new();
        for (category, room, tariff) in self.rows {
            let guest: String = Name().fake();
            ledger.insert(|id| AuditRow {
                id,
                category,
                room_number: room.clone(),
                guest_name: guest.clone(),
                service: "Overnight Stay".to_string(),
                room_tariff: Money::new(tariff, currency),
                service_charge: Money::new(tariff * dec!(0.1), currency),
                vat_amount: Money::new(tariff * dec!(0.05), currency),
                remarks: String::new(),
            });
        }
        ledger
    }
}
