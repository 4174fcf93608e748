//! Service bill entry form
//!
//! Holds the in-progress entry state for a new billing line. Validation is
//! strict: submission either yields a fully formed [`BillingLine`] or a
//! list of every rule the form currently violates.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use validator::ValidateEmail;

use core_kernel::{Currency, LineId, Money};

use crate::charges::{ChargeSheet, SurchargeKind};
use crate::error::BillingError;
use crate::line::{BillingLine, GuestType, ServiceName};

/// In-progress state of the service bill entry form
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServiceBillForm {
    pub guest_type: Option<GuestType>,
    pub registration_number: String,
    pub full_name: String,
    pub guest_email: String,
    pub room_number: String,
    pub service: Option<ServiceName>,
    pub rate: Decimal,
    pub quantity: u32,
    pub charges: ChargeSheet,
    /// Unset until the operator picks Yes or No
    pub complimentary: Option<bool>,
    pub remarks: String,
    currency: Currency,
}

impl ServiceBillForm {
    pub fn new(currency: Currency) -> Self {
        Self {
            guest_type: None,
            registration_number: String::new(),
            full_name: String::new(),
            guest_email: String::new(),
            room_number: String::new(),
            service: None,
            rate: Decimal::ZERO,
            quantity: 1,
            charges: ChargeSheet::new(),
            complimentary: None,
            remarks: String::new(),
            currency,
        }
    }

    pub fn currency(&self) -> Currency {
        self.currency
    }

    /// Sets a surcharge amount, toggling its inclusion with the amount
    pub fn set_surcharge(&mut self, kind: SurchargeKind, amount: Decimal) {
        self.charges.set_amount(kind, amount);
    }

    /// The total the form currently describes
    pub fn grand_total(&self) -> Decimal {
        self.charges.total(self.rate, self.quantity)
    }

    /// Checks every rule, accumulating all violations
    pub fn validate(&self) -> Result<(), BillingError> {
        let mut violations = Vec::new();

        if self.guest_type.is_none() {
            violations.push("Guest type is required".to_string());
        }
        if self.registration_number.trim().is_empty() {
            violations.push("Registration number is required".to_string());
        }
        if self.full_name.trim().is_empty() {
            violations.push("Full name is required".to_string());
        }
        if self.guest_email.trim().is_empty() {
            violations.push("Guest email is required".to_string());
        } else if !self.guest_email.validate_email() {
            violations.push("Guest email is not a valid email address".to_string());
        }
        if self.room_number.trim().is_empty() {
            violations.push("Room number is required".to_string());
        }
        if self.service.is_none() {
            violations.push("Service name is required".to_string());
        }
        if self.rate < Decimal::ZERO {
            violations.push("Rate must not be negative".to_string());
        }
        if self.quantity < 1 {
            violations.push("Quantity must be at least 1".to_string());
        }
        for kind in SurchargeKind::ALL {
            if self.charges.amount(kind) < Decimal::ZERO {
                violations.push(format!("{} must not be negative", kind.label()));
            }
        }
        if self.complimentary.is_none() {
            violations.push("Complimentary selection is required".to_string());
        }

        if violations.is_empty() {
            Ok(())
        } else {
            Err(BillingError::Validation(violations))
        }
    }

    /// Validates the form and builds the billing line it describes
    ///
    /// The caller supplies the id, which must come from the ledger's
    /// allocator so ids stay monotonic.
    pub fn build_line(&self, id: LineId) -> Result<BillingLine, BillingError> {
        self.validate()?;
        // validate() guarantees every Option is set
        let guest_type = self.guest_type.ok_or_else(|| {
            BillingError::Validation(vec!["Guest type is required".to_string()])
        })?;
        let service = self.service.ok_or_else(|| {
            BillingError::Validation(vec!["Service name is required".to_string()])
        })?;
        let complimentary = self.complimentary.ok_or_else(|| {
            BillingError::Validation(vec!["Complimentary selection is required".to_string()])
        })?;

        Ok(BillingLine::new(
            id,
            guest_type,
            self.registration_number.trim(),
            self.full_name.trim(),
            self.guest_email.trim(),
            self.room_number.trim(),
            service,
            Money::new(self.rate, self.currency),
            self.quantity,
            self.charges.clone(),
            complimentary,
            self.remarks.trim(),
        ))
    }

    /// Clears every field back to the blank entry state
    pub fn reset(&mut self) {
        *self = Self::new(self.currency);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn filled_form() -> ServiceBillForm {
        let mut form = ServiceBillForm::new(Currency::USD);
        form.guest_type = Some(GuestType::Regular);
        form.registration_number = "REG-002".to_string();
        form.full_name = "Jane Smith".to_string();
        form.guest_email = "jane.smith@example.com".to_string();
        form.room_number = "101".to_string();
        form.service = Some(ServiceName::LaundryService);
        form.rate = dec!(15);
        form.quantity = 2;
        form.set_surcharge(SurchargeKind::Vat, dec!(1.5));
        form.set_surcharge(SurchargeKind::SdCharge, dec!(0.5));
        form.complimentary = Some(false);
        form.remarks = "Wash & fold only".to_string();
        form
    }

    #[test]
    fn test_filled_form_validates() {
        assert!(filled_form().validate().is_ok());
    }

    #[test]
    fn test_blank_form_accumulates_every_violation() {
        let form = ServiceBillForm::new(Currency::USD);
        let err = form.validate().unwrap_err();
        match err {
            BillingError::Validation(violations) => {
                assert!(violations.iter().any(|v| v.contains("Guest type")));
                assert!(violations.iter().any(|v| v.contains("Guest email")));
                assert!(violations.iter().any(|v| v.contains("Complimentary")));
                assert!(violations.len() >= 7);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_malformed_email_is_rejected() {
        let mut form = filled_form();
        form.guest_email = "not-an-email".to_string();
        let err = form.validate().unwrap_err();
        assert!(err.to_string().contains("valid email"));
    }

    #[test]
    fn test_negative_rate_is_rejected() {
        let mut form = filled_form();
        form.rate = dec!(-1);
        assert!(form.validate().is_err());
    }

    #[test]
    fn test_negative_surcharge_is_rejected() {
        let mut form = filled_form();
        form.charges.set_amount(SurchargeKind::Vat, dec!(-0.5));
        let err = form.validate().unwrap_err();
        assert!(err.to_string().contains("VAT"));
    }

    #[test]
    fn test_grand_total_tracks_edits() {
        let mut form = filled_form();
        assert_eq!(form.grand_total(), dec!(32));
        form.set_surcharge(SurchargeKind::Vat, dec!(0));
        assert_eq!(form.grand_total(), dec!(30.5));
    }

    #[test]
    fn test_build_line_carries_the_form_total() {
        let form = filled_form();
        let line = form.build_line(LineId::new(1)).unwrap();
        assert_eq!(line.total, Money::new(dec!(32), Currency::USD));
        assert_eq!(line.full_name, "Jane Smith");
    }

    #[test]
    fn test_build_line_fails_on_invalid_form() {
        let form = ServiceBillForm::new(Currency::USD);
        assert!(form.build_line(LineId::new(1)).is_err());
    }

    #[test]
    fn test_reset_returns_to_blank_state() {
        let mut form = filled_form();
        form.reset();
        assert_eq!(form, ServiceBillForm::new(Currency::USD));
    }
}
