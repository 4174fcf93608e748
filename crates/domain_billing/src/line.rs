//! Billing lines
//!
//! One service charge entry for a guest. The line's total is derived and
//! recomputed inside every total-affecting edit.

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use core_kernel::{
    check_editable, check_option, EditError, EditableRow, FieldDescriptor, FieldValue, LedgerRow,
    LineId, Money, Searchable,
};

use crate::charges::{ChargeSheet, SurchargeKind};

/// Guest classification offered by the entry form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GuestType {
    Vip,
    Regular,
    WalkIn,
}

impl GuestType {
    /// The select options, in display order
    pub const OPTIONS: &'static [&'static str] = &["VIP", "Regular", "Walk-in"];

    pub fn label(&self) -> &'static str {
        match self {
            GuestType::Vip => "VIP",
            GuestType::Regular => "Regular",
            GuestType::WalkIn => "Walk-in",
        }
    }

    pub fn parse(label: &str) -> Option<GuestType> {
        match label {
            "VIP" => Some(GuestType::Vip),
            "Regular" => Some(GuestType::Regular),
            "Walk-in" => Some(GuestType::WalkIn),
            _ => None,
        }
    }
}

/// The services the front office can bill for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ServiceName {
    RoomCleaning,
    LaundryService,
    FoodDelivery,
    SpaTreatment,
    AirportPickup,
    Minibar,
    ExtraBed,
}

impl ServiceName {
    /// The select options, in display order
    pub const OPTIONS: &'static [&'static str] = &[
        "Room Cleaning",
        "Laundry Service",
        "Food Delivery",
        "Spa Treatment",
        "Airport Pickup",
        "Minibar",
        "Extra Bed",
    ];

    pub fn label(&self) -> &'static str {
        match self {
            ServiceName::RoomCleaning => "Room Cleaning",
            ServiceName::LaundryService => "Laundry Service",
            ServiceName::FoodDelivery => "Food Delivery",
            ServiceName::SpaTreatment => "Spa Treatment",
            ServiceName::AirportPickup => "Airport Pickup",
            ServiceName::Minibar => "Minibar",
            ServiceName::ExtraBed => "Extra Bed",
        }
    }

    pub fn parse(label: &str) -> Option<ServiceName> {
        match label {
            "Room Cleaning" => Some(ServiceName::RoomCleaning),
            "Laundry Service" => Some(ServiceName::LaundryService),
            "Food Delivery" => Some(ServiceName::FoodDelivery),
            "Spa Treatment" => Some(ServiceName::SpaTreatment),
            "Airport Pickup" => Some(ServiceName::AirportPickup),
            "Minibar" => Some(ServiceName::Minibar),
            "Extra Bed" => Some(ServiceName::ExtraBed),
            _ => None,
        }
    }
}

const COMPLIMENTARY_OPTIONS: &[&str] = &["No", "Yes"];

/// One service charge entry for a guest
///
/// # Invariants
///
/// - `total` equals `charges.total(rate, quantity)` at all times; every
///   mutating path ends in [`BillingLine::recompute`].
/// - `quantity` is at least 1.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BillingLine {
    /// Ledger identifier
    pub id: LineId,
    pub guest_type: GuestType,
    pub registration_number: String,
    pub full_name: String,
    pub guest_email: String,
    pub room_number: String,
    pub service: ServiceName,
    /// Per-unit service rate
    pub rate: Money,
    pub quantity: u32,
    pub charges: ChargeSheet,
    pub complimentary: bool,
    pub remarks: String,
    /// Derived total; never an independent source of truth
    pub total: Money,
}

impl BillingLine {
    /// Creates a line and computes its initial total
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        id: LineId,
        guest_type: GuestType,
        registration_number: impl Into<String>,
        full_name: impl Into<String>,
        guest_email: impl Into<String>,
        room_number: impl Into<String>,
        service: ServiceName,
        rate: Money,
        quantity: u32,
        charges: ChargeSheet,
        complimentary: bool,
        remarks: impl Into<String>,
    ) -> Self {
        let mut line = Self {
            id,
            guest_type,
            registration_number: registration_number.into(),
            full_name: full_name.into(),
            guest_email: guest_email.into(),
            room_number: room_number.into(),
            service,
            rate,
            quantity: quantity.max(1),
            charges,
            complimentary,
            remarks: remarks.into(),
            total: Money::zero(rate.currency()),
        };
        line.recompute();
        line
    }

    /// Recomputes the derived total from rate, quantity, and charges
    pub fn recompute(&mut self) {
        let total = self.charges.total(self.rate.amount(), self.quantity);
        self.total = Money::new(total, self.rate.currency());
    }

    /// Sets the quantity, clamped to a minimum of 1, and recomputes
    pub fn set_quantity(&mut self, quantity: u32) {
        self.quantity = quantity.max(1);
        self.recompute();
    }

    /// Sets the per-unit rate and recomputes
    pub fn set_rate(&mut self, rate: Decimal) {
        self.rate = Money::new(rate, self.rate.currency());
        self.recompute();
    }

    fn set_surcharge(&mut self, kind: SurchargeKind, amount: Decimal) {
        self.charges.set_amount(kind, amount);
        self.recompute();
    }
}

impl LedgerRow for BillingLine {
    type Id = LineId;

    fn id(&self) -> LineId {
        self.id
    }
}

impl Searchable for BillingLine {
    fn display_columns(&self) -> Vec<String> {
        // trailing zeros from surcharge arithmetic would defeat the
        // substring match, so amounts are normalized before display
        vec![
            self.service.label().to_string(),
            self.room_number.clone(),
            self.rate.amount().normalize().to_string(),
            self.quantity.to_string(),
            self.total.amount().normalize().to_string(),
        ]
    }
}

impl EditableRow for BillingLine {
    fn descriptors() -> &'static [FieldDescriptor] {
        const FIELDS: &[FieldDescriptor] = &[
            FieldDescriptor::select("guest_type", GuestType::OPTIONS),
            FieldDescriptor::text("registration_number"),
            FieldDescriptor::text("full_name"),
            FieldDescriptor::text("guest_email"),
            FieldDescriptor::text("room_number"),
            FieldDescriptor::select("service", ServiceName::OPTIONS),
            FieldDescriptor::numeric("rate"),
            FieldDescriptor::numeric("quantity"),
            FieldDescriptor::numeric("vat"),
            FieldDescriptor::numeric("sd_charge"),
            FieldDescriptor::numeric("additional_charge"),
            FieldDescriptor::numeric("service_charge"),
            FieldDescriptor::select("complimentary", COMPLIMENTARY_OPTIONS),
            FieldDescriptor::text("remarks"),
        ];
        FIELDS
    }

    fn apply(&mut self, field: &str, value: FieldValue) -> Result<(), EditError> {
        let descriptor = check_editable::<Self>(field)?;
        match field {
            "guest_type" => {
                let label = value.as_text(field)?;
                self.guest_type = GuestType::parse(label).ok_or_else(|| {
                    EditError::InvalidOption {
                        field: field.to_string(),
                        value: label.to_string(),
                    }
                })?;
            }
            "registration_number" => {
                self.registration_number = value.as_text(field)?.to_string();
            }
            "full_name" => self.full_name = value.as_text(field)?.to_string(),
            "guest_email" => self.guest_email = value.as_text(field)?.to_string(),
            "room_number" => self.room_number = value.as_text(field)?.to_string(),
            "service" => {
                let label = value.as_text(field)?;
                self.service = ServiceName::parse(label).ok_or_else(|| {
                    EditError::InvalidOption {
                        field: field.to_string(),
                        value: label.to_string(),
                    }
                })?;
            }
            "rate" => self.set_rate(value.as_number(field)?),
            "quantity" => {
                let quantity = value.as_number(field)?.trunc().to_u32().unwrap_or(1);
                self.set_quantity(quantity);
            }
            "vat" => self.set_surcharge(SurchargeKind::Vat, value.as_number(field)?),
            "sd_charge" => self.set_surcharge(SurchargeKind::SdCharge, value.as_number(field)?),
            "additional_charge" => {
                self.set_surcharge(SurchargeKind::AdditionalCharge, value.as_number(field)?)
            }
            "service_charge" => {
                self.set_surcharge(SurchargeKind::ServiceCharge, value.as_number(field)?)
            }
            "complimentary" => {
                let label = value.as_text(field)?;
                check_option(descriptor, label)?;
                self.complimentary = label == "Yes";
            }
            "remarks" => self.remarks = value.as_text(field)?.to_string(),
            _ => unreachable!("descriptor table is the closed set"),
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core_kernel::Currency;
    use rust_decimal_macros::dec;

    fn sample_line() -> BillingLine {
        BillingLine::new(
            LineId::new(1),
            GuestType::Regular,
            "REG-002",
            "Jane Smith",
            "jane.smith@example.com",
            "101",
            ServiceName::LaundryService,
            Money::new(dec!(15), Currency::USD),
            2,
            ChargeSheet::new()
                .with(SurchargeKind::Vat, dec!(1.5), true)
                .with(SurchargeKind::SdCharge, dec!(0.5), true),
            false,
            "Wash & fold only",
        )
    }

    #[test]
    fn test_initial_total_is_derived() {
        let line = sample_line();
        assert_eq!(line.total.amount(), dec!(32));
    }

    #[test]
    fn test_rate_edit_recomputes_total() {
        let mut line = sample_line();
        line.apply("rate", dec!(20).into()).unwrap();
        assert_eq!(line.total.amount(), dec!(42));
    }

    #[test]
    fn test_quantity_edit_clamps_to_one() {
        let mut line = sample_line();
        line.apply("quantity", dec!(0).into()).unwrap();
        assert_eq!(line.quantity, 1);
        assert_eq!(line.total.amount(), dec!(17));
    }

    #[test]
    fn test_zero_surcharge_edit_excludes_it() {
        let mut line = sample_line();
        line.apply("vat", dec!(0).into()).unwrap();
        assert!(!line.charges.is_included(SurchargeKind::Vat));
        assert_eq!(line.total.amount(), dec!(30.5));
    }

    #[test]
    fn test_select_edit_rejects_unknown_option() {
        let mut line = sample_line();
        let err = line.apply("service", "Helicopter Tour".into()).unwrap_err();
        assert!(matches!(err, EditError::InvalidOption { .. }));
    }

    #[test]
    fn test_text_edit_leaves_total_untouched() {
        let mut line = sample_line();
        line.apply("remarks", "Updated".into()).unwrap();
        assert_eq!(line.total.amount(), dec!(32));
    }

    #[test]
    fn test_display_columns_cover_the_table() {
        let line = sample_line();
        let cols = line.display_columns();
        assert!(cols.contains(&"Laundry Service".to_string()));
        assert!(cols.contains(&"101".to_string()));
        assert!(cols.contains(&"32".to_string()));
    }
}
