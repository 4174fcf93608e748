//! Payment entry form
//!
//! Holds the in-progress state for a new payment submission. The room is
//! a closed selection, the amount arrives as raw operator input and is
//! parsed on validation, and the invoice number is assigned from the
//! ledger's sequence at build time.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use core_kernel::{Currency, Money, PaymentId, SequentialId};

use crate::error::PaymentError;
use crate::payment::{PaymentMode, PaymentRecord, PaymentType};

/// Rooms the payment screen can settle against
pub const ROOM_OPTIONS: &[&str] = &["Room 101", "Room 102", "Room 103"];

/// Invoice numbers continue from the seeded register
const INVOICE_BASE: u64 = 1000;

/// In-progress state of the payment entry form
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaymentForm {
    pub payment_date: NaiveDate,
    pub guest_name: String,
    /// Unset until the operator picks a room from [`ROOM_OPTIONS`]
    pub room: Option<String>,
    pub registration_number: String,
    /// Raw operator input, parsed on validation
    pub amount: String,
    pub payment_type: Option<PaymentType>,
    pub payment_mode: Option<PaymentMode>,
    pub remarks: String,
    currency: Currency,
}

impl PaymentForm {
    pub fn new(currency: Currency, payment_date: NaiveDate) -> Self {
        Self {
            payment_date,
            guest_name: String::new(),
            room: None,
            registration_number: String::new(),
            amount: String::new(),
            payment_type: None,
            payment_mode: None,
            remarks: String::new(),
            currency,
        }
    }

    pub fn currency(&self) -> Currency {
        self.currency
    }

    /// Picks a room, rejecting anything outside the closed option set
    pub fn select_room(&mut self, label: &str) -> bool {
        if ROOM_OPTIONS.contains(&label) {
            self.room = Some(label.to_string());
            true
        } else {
            false
        }
    }

    fn parsed_amount(&self) -> Option<Decimal> {
        self.amount.trim().parse().ok()
    }

    /// Checks every rule, accumulating all violations
    pub fn validate(&self) -> Result<(), PaymentError> {
        let mut violations = Vec::new();

        if self.guest_name.trim().is_empty() {
            violations.push("Guest name is required".to_string());
        }
        if self.room.is_none() {
            violations.push("Room selection is required".to_string());
        }
        if self.registration_number.trim().is_empty() {
            violations.push("Registration number is required".to_string());
        }
        if self.amount.trim().is_empty() {
            violations.push("Amount is required".to_string());
        } else {
            match self.parsed_amount() {
                Some(amount) if amount > Decimal::ZERO => {}
                Some(_) => violations.push("Amount must be greater than zero".to_string()),
                None => violations.push("Amount must be a number".to_string()),
            }
        }
        if self.payment_type.is_none() {
            violations.push("Payment type is required".to_string());
        }
        if self.payment_mode.is_none() {
            violations.push("Payment mode is required".to_string());
        }

        if violations.is_empty() {
            Ok(())
        } else {
            Err(PaymentError::Validation(violations))
        }
    }

    /// Validates the form and builds the payment it describes
    ///
    /// The caller supplies the id, which must come from the ledger's
    /// allocator so the invoice sequence stays monotonic.
    pub fn build_record(&self, id: PaymentId) -> Result<PaymentRecord, PaymentError> {
        self.validate()?;
        // validate() guarantees every Option is set and the amount parses
        let room = self
            .room
            .as_deref()
            .ok_or_else(|| PaymentError::Validation(vec!["Room selection is required".to_string()]))?;
        let payment_type = self
            .payment_type
            .ok_or_else(|| PaymentError::Validation(vec!["Payment type is required".to_string()]))?;
        let payment_mode = self
            .payment_mode
            .ok_or_else(|| PaymentError::Validation(vec!["Payment mode is required".to_string()]))?;
        let amount = self
            .parsed_amount()
            .ok_or_else(|| PaymentError::Validation(vec!["Amount must be a number".to_string()]))?;

        Ok(PaymentRecord {
            id,
            invoice_number: format!("INV-{}", INVOICE_BASE + id.sequence()),
            payment_date: self.payment_date,
            guest_name: self.guest_name.trim().to_string(),
            room_number: room.strip_prefix("Room ").unwrap_or(room).to_string(),
            registration_number: self.registration_number.trim().to_string(),
            amount: Money::new(amount, self.currency),
            payment_type,
            payment_mode,
            remarks: self.remarks.trim().to_string(),
        })
    }

    /// Clears every field back to the blank entry state
    pub fn reset(&mut self) {
        *self = Self::new(self.currency, self.payment_date);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn entry_date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 1, 30).unwrap()
    }

    fn filled_form() -> PaymentForm {
        let mut form = PaymentForm::new(Currency::USD, entry_date());
        form.guest_name = "Jane Smith".to_string();
        assert!(form.select_room("Room 102"));
        form.registration_number = "REG002".to_string();
        form.amount = "275.50".to_string();
        form.payment_type = Some(PaymentType::Service);
        form.payment_mode = Some(PaymentMode::Card);
        form.remarks = "Settled at checkout".to_string();
        form
    }

    #[test]
    fn test_filled_form_validates() {
        assert!(filled_form().validate().is_ok());
    }

    #[test]
    fn test_blank_form_accumulates_every_violation() {
        let form = PaymentForm::new(Currency::USD, entry_date());
        let err = form.validate().unwrap_err();
        match err {
            PaymentError::Validation(violations) => {
                assert!(violations.iter().any(|v| v.contains("Guest name")));
                assert!(violations.iter().any(|v| v.contains("Room selection")));
                assert!(violations.iter().any(|v| v.contains("Payment mode")));
                assert_eq!(violations.len(), 6);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_room_outside_the_option_set_is_rejected() {
        let mut form = filled_form();
        assert!(!form.select_room("Room 999"));
        assert_eq!(form.room.as_deref(), Some("Room 102"));
    }

    #[test]
    fn test_non_numeric_amount_is_rejected() {
        let mut form = filled_form();
        form.amount = "twenty".to_string();
        let err = form.validate().unwrap_err();
        assert!(err.to_string().contains("must be a number"));
    }

    #[test]
    fn test_zero_amount_is_rejected() {
        let mut form = filled_form();
        form.amount = "0".to_string();
        let err = form.validate().unwrap_err();
        assert!(err.to_string().contains("greater than zero"));
    }

    #[test]
    fn test_build_record_continues_the_invoice_sequence() {
        let form = filled_form();
        let record = form.build_record(PaymentId::new(6)).unwrap();
        assert_eq!(record.invoice_number, "INV-1006");
        assert_eq!(record.room_number, "102");
        assert_eq!(record.amount, Money::new(dec!(275.50), Currency::USD));
    }

    #[test]
    fn test_build_record_fails_on_invalid_form() {
        let form = PaymentForm::new(Currency::USD, entry_date());
        assert!(form.build_record(PaymentId::new(6)).is_err());
    }

    #[test]
    fn test_reset_keeps_currency_and_date() {
        let mut form = filled_form();
        form.reset();
        assert_eq!(form, PaymentForm::new(Currency::USD, entry_date()));
    }
}
