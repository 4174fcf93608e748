//! Audit rows

use serde::{Deserialize, Serialize};

use core_kernel::{
    check_editable, AuditRowId, EditError, EditableRow, FieldDescriptor, FieldValue, LedgerRow,
    Money, Searchable,
};

/// The audit categories, one tab each on the review screen
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum AuditCategory {
    Room,
    Service,
    Restaurant,
    Banquet,
}

impl AuditCategory {
    /// Every category, in tab order
    pub const ALL: [AuditCategory; 4] = [
        AuditCategory::Room,
        AuditCategory::Service,
        AuditCategory::Restaurant,
        AuditCategory::Banquet,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            AuditCategory::Room => "Room Audit",
            AuditCategory::Service => "Service Audit",
            AuditCategory::Restaurant => "Restaurant Audit",
            AuditCategory::Banquet => "Banquet Audit",
        }
    }
}

/// One charge awaiting the night auditor's review
///
/// The row total is always derived as tariff + service charge + VAT and
/// is never stored, so an inline correction can not leave a stale sum.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuditRow {
    pub id: AuditRowId,
    pub category: AuditCategory,
    pub room_number: String,
    pub guest_name: String,
    pub service: String,
    pub room_tariff: Money,
    pub service_charge: Money,
    pub vat_amount: Money,
    pub remarks: String,
}

impl AuditRow {
    /// The derived row total
    pub fn total(&self) -> Money {
        self.room_tariff + self.service_charge + self.vat_amount
    }
}

impl LedgerRow for AuditRow {
    type Id = AuditRowId;

    fn id(&self) -> AuditRowId {
        self.id
    }
}

impl Searchable for AuditRow {
    fn display_columns(&self) -> Vec<String> {
        vec![
            self.room_number.clone(),
            self.guest_name.clone(),
            self.service.clone(),
            self.room_tariff.amount().normalize().to_string(),
            self.service_charge.amount().normalize().to_string(),
            self.vat_amount.amount().normalize().to_string(),
            self.total().amount().normalize().to_string(),
            self.remarks.clone(),
        ]
    }
}

impl EditableRow for AuditRow {
    fn descriptors() -> &'static [FieldDescriptor] {
        const FIELDS: &[FieldDescriptor] = &[
            FieldDescriptor::read_only("category"),
            FieldDescriptor::text("room_number"),
            FieldDescriptor::text("guest_name"),
            FieldDescriptor::text("service"),
            FieldDescriptor::numeric("room_tariff"),
            FieldDescriptor::numeric("service_charge"),
            FieldDescriptor::numeric("vat_amount"),
            FieldDescriptor::text("remarks"),
        ];
        FIELDS
    }

    fn apply(&mut self, field: &str, value: FieldValue) -> Result<(), EditError> {
        check_editable::<Self>(field)?;
        match field {
            "room_number" => self.room_number = value.as_text(field)?.to_string(),
            "guest_name" => self.guest_name = value.as_text(field)?.to_string(),
            "service" => self.service = value.as_text(field)?.to_string(),
            "room_tariff" => {
                self.room_tariff = Money::new(value.as_number(field)?, self.room_tariff.currency());
            }
            "service_charge" => {
                self.service_charge =
                    Money::new(value.as_number(field)?, self.service_charge.currency());
            }
            "vat_amount" => {
                self.vat_amount = Money::new(value.as_number(field)?, self.vat_amount.currency());
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

    fn sample() -> AuditRow {
        AuditRow {
            id: AuditRowId::new(1),
            category: AuditCategory::Room,
            room_number: "101".to_string(),
            guest_name: "John Doe".to_string(),
            service: "Overnight Stay".to_string(),
            room_tariff: Money::new(dec!(120), Currency::USD),
            service_charge: Money::new(dec!(12), Currency::USD),
            vat_amount: Money::new(dec!(6), Currency::USD),
            remarks: String::new(),
        }
    }

    #[test]
    fn test_total_is_derived_from_components() {
        let row = sample();
        assert_eq!(row.total(), Money::new(dec!(138), Currency::USD));
    }

    #[test]
    fn test_tariff_edit_moves_the_total() {
        let mut row = sample();
        row.apply("room_tariff", dec!(150).into()).unwrap();
        assert_eq!(row.total(), Money::new(dec!(168), Currency::USD));
    }

    #[test]
    fn test_category_is_read_only() {
        let mut row = sample();
        let err = row.apply("category", "Service Audit".into()).unwrap_err();
        assert!(matches!(err, EditError::ReadOnly(_)));
    }

    #[test]
    fn test_display_columns_include_derived_total() {
        let row = sample();
        assert!(row.display_columns().contains(&"138".to_string()));
    }

    #[test]
    fn test_display_columns_drop_trailing_zeros() {
        let mut row = sample();
        row.room_tariff = Money::new(dec!(120.50), Currency::USD);
        row.vat_amount = Money::new(dec!(5.50), Currency::USD);

        let cols = row.display_columns();
        assert!(cols.contains(&"120.5".to_string()));
        // 120.50 + 12 + 5.50 carries scale 2; the column must not
        assert!(cols.contains(&"138".to_string()));
    }
}
