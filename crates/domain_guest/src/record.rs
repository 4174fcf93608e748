//! Guest lookup records

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use domain_billing::{ChargeSheet, GuestType, ServiceBillForm, ServiceName, SurchargeKind};

/// Everything a room lookup returns about a registered guest
///
/// Carries both identity fields and the guest's standing service
/// preferences, so a successful lookup can prefill the whole entry form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GuestLookupResult {
    pub guest_type: GuestType,
    pub registration_number: String,
    pub full_name: String,
    pub guest_email: String,
    pub room_number: String,
    pub service: ServiceName,
    pub rate: Decimal,
    pub quantity: u32,
    pub vat: Decimal,
    pub sd_charge: Decimal,
    pub complimentary: bool,
    pub remarks: String,
}

impl GuestLookupResult {
    /// Writes this record into the entry form, replacing its field state
    ///
    /// The form's currency is preserved; everything else is overwritten.
    pub fn prefill(&self, form: &mut ServiceBillForm) {
        form.guest_type = Some(self.guest_type);
        form.registration_number = self.registration_number.clone();
        form.full_name = self.full_name.clone();
        form.guest_email = self.guest_email.clone();
        form.room_number = self.room_number.clone();
        form.service = Some(self.service);
        form.rate = self.rate;
        form.quantity = self.quantity.max(1);
        form.charges = ChargeSheet::new();
        form.set_surcharge(SurchargeKind::Vat, self.vat);
        form.set_surcharge(SurchargeKind::SdCharge, self.sd_charge);
        form.complimentary = Some(self.complimentary);
        form.remarks = self.remarks.clone();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core_kernel::Currency;
    use rust_decimal_macros::dec;

    #[test]
    fn test_prefill_overwrites_form_state() {
        let record = GuestLookupResult {
            guest_type: GuestType::Regular,
            registration_number: "REG-002".to_string(),
            full_name: "Jane Smith".to_string(),
            guest_email: "jane.smith@example.com".to_string(),
            room_number: "101".to_string(),
            service: ServiceName::LaundryService,
            rate: dec!(15),
            quantity: 2,
            vat: dec!(1.5),
            sd_charge: dec!(0.5),
            complimentary: false,
            remarks: "Wash & fold only".to_string(),
        };

        let mut form = ServiceBillForm::new(Currency::USD);
        form.full_name = "Stale Name".to_string();
        record.prefill(&mut form);

        assert_eq!(form.full_name, "Jane Smith");
        assert_eq!(form.grand_total(), dec!(32));
        assert!(form.validate().is_ok());
    }
}
