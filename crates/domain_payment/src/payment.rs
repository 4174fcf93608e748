//! Payment records

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use core_kernel::{
    check_editable, check_option, EditError, EditableRow, FieldDescriptor, FieldValue, LedgerRow,
    Money, PaymentId, Searchable,
};

/// What a payment was received for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PaymentType {
    Service,
    Deposit,
    Other,
}

impl PaymentType {
    pub const OPTIONS: &'static [&'static str] = &["Service", "Deposit", "Other"];

    pub fn label(&self) -> &'static str {
        match self {
            PaymentType::Service => "Service",
            PaymentType::Deposit => "Deposit",
            PaymentType::Other => "Other",
        }
    }

    pub fn parse(label: &str) -> Option<PaymentType> {
        match label {
            "Service" => Some(PaymentType::Service),
            "Deposit" => Some(PaymentType::Deposit),
            "Other" => Some(PaymentType::Other),
            _ => None,
        }
    }
}

/// How a payment was received
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PaymentMode {
    Cash,
    Card,
    Online,
}

impl PaymentMode {
    pub const OPTIONS: &'static [&'static str] = &["Cash", "Card", "Online"];

    pub fn label(&self) -> &'static str {
        match self {
            PaymentMode::Cash => "Cash",
            PaymentMode::Card => "Card",
            PaymentMode::Online => "Online",
        }
    }

    pub fn parse(label: &str) -> Option<PaymentMode> {
        match label {
            "Cash" => Some(PaymentMode::Cash),
            "Card" => Some(PaymentMode::Card),
            "Online" => Some(PaymentMode::Online),
            _ => None,
        }
    }
}

/// One guest bill payment in the register
///
/// The invoice number and payment date identify the transaction and are
/// display-only once a record exists; edits can touch everything else.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaymentRecord {
    pub id: PaymentId,
    pub invoice_number: String,
    pub payment_date: NaiveDate,
    pub guest_name: String,
    pub room_number: String,
    pub registration_number: String,
    pub amount: Money,
    pub payment_type: PaymentType,
    pub payment_mode: PaymentMode,
    pub remarks: String,
}

impl LedgerRow for PaymentRecord {
    type Id = PaymentId;

    fn id(&self) -> PaymentId {
        self.id
    }
}

impl Searchable for PaymentRecord {
    fn display_columns(&self) -> Vec<String> {
        vec![
            self.invoice_number.clone(),
            self.guest_name.clone(),
            self.room_number.clone(),
            self.registration_number.clone(),
            self.amount.amount().to_string(),
            self.payment_type.label().to_string(),
            self.payment_mode.label().to_string(),
            self.remarks.clone(),
        ]
    }
}

impl EditableRow for PaymentRecord {
    fn descriptors() -> &'static [FieldDescriptor] {
        const FIELDS: &[FieldDescriptor] = &[
            FieldDescriptor::read_only("invoice_number"),
            FieldDescriptor::read_only("payment_date"),
            FieldDescriptor::text("guest_name"),
            FieldDescriptor::text("room_number"),
            FieldDescriptor::text("registration_number"),
            FieldDescriptor::numeric("amount"),
            FieldDescriptor::select("payment_type", PaymentType::OPTIONS),
            FieldDescriptor::select("payment_mode", PaymentMode::OPTIONS),
            FieldDescriptor::text("remarks"),
        ];
        FIELDS
    }

    fn apply(&mut self, field: &str, value: FieldValue) -> Result<(), EditError> {
        let descriptor = check_editable::<Self>(field)?;
        match field {
            "guest_name" => self.guest_name = value.as_text(field)?.to_string(),
            "room_number" => self.room_number = value.as_text(field)?.to_string(),
            "registration_number" => {
                self.registration_number = value.as_text(field)?.to_string();
            }
            "amount" => {
                self.amount = Money::new(value.as_number(field)?, self.amount.currency());
            }
            "payment_type" => {
                let label = value.as_text(field)?;
                check_option(descriptor, label)?;
                self.payment_type = PaymentType::parse(label).ok_or_else(|| {
                    EditError::InvalidOption {
                        field: field.to_string(),
                        value: label.to_string(),
                    }
                })?;
            }
            "payment_mode" => {
                let label = value.as_text(field)?;
                check_option(descriptor, label)?;
                self.payment_mode = PaymentMode::parse(label).ok_or_else(|| {
                    EditError::InvalidOption {
                        field: field.to_string(),
                        value: label.to_string(),
                    }
                })?;
            }
            "remarks" => self.remarks = value.as_text(field)?.to_string(),
            _ => unreachable!("descriptor table is the closed set"),
        }
        Ok(())
    }
}
