//! Guest bill payment screen
//!
//! The payment register opens pre-seeded and grows through the entry
//! form; records model a ledger, so nothing is ever deleted. Rows are
//! edited through a modal with a closed descriptor set where the
//! invoice number and date stay untouchable.

use chrono::NaiveDate;

use core_kernel::{
    project, Currency, EditError, EditableRow, FieldValue, NoticeLog, PageRequest, PageView,
    PaymentId, RowLedger,
};
use domain_payment::{seed_payments, PaymentForm, PaymentRecord};

use crate::error::FrontOfficeError;
use crate::screens::EditState;

/// State of the bill payment screen
pub struct PaymentScreen {
    pub form: PaymentForm,
    ledger: RowLedger<PaymentRecord>,
    pub page: PageRequest,
    notices: NoticeLog,
    edit: EditState<PaymentId>,
}

impl PaymentScreen {
    /// Opens the screen over the seeded register
    pub fn new(currency: Currency, page_size: usize, business_date: NaiveDate) -> Self {
        Self {
            form: PaymentForm::new(currency, business_date),
            ledger: seed_payments(currency),
            page: PageRequest::new(page_size),
            notices: NoticeLog::new(),
            edit: EditState::Viewing,
        }
    }

    /// Submits the form as a new payment record
    ///
    /// On success the form resets to blank and the record's invoice
    /// number continues the register's sequence; on validation failure
    /// the form keeps its state so the operator can correct it.
    pub fn submit_payment(&mut self) -> Option<PaymentId> {
        let form = self.form.clone();
        match self.ledger.try_insert(|id| form.build_record(id)) {
            Ok(id) => {
                // get() cannot miss a row the insert just appended
                let invoice = self
                    .ledger
                    .get(id)
                    .map(|payment| payment.invoice_number.clone())
                    .unwrap_or_default();
                self.notices.success(format!("Payment {invoice} recorded"));
                self.form.reset();
                Some(id)
            }
            Err(err) => {
                self.notices.error(err.to_string());
                None
            }
        }
    }

    /// Clears the entry form without touching the register
    pub fn clear(&mut self) {
        self.form.reset();
        self.notices.info("Payment form cleared");
    }

    /// Opens the edit modal for a payment
    pub fn begin_edit(&mut self, id: PaymentId) -> bool {
        if self.ledger.contains(id) {
            self.edit = EditState::Editing(id);
            true
        } else {
            false
        }
    }

    /// Applies one field edit inside the open modal
    pub fn edit_field(&mut self, field: &str, value: FieldValue) -> Result<(), FrontOfficeError> {
        let EditState::Editing(id) = self.edit else {
            return Err(FrontOfficeError::NoActiveEdit);
        };
        let mut outcome = Ok(());
        self.ledger.update(id, |payment| {
            outcome = payment.apply(field, value);
        });
        outcome.map_err(|err: EditError| FrontOfficeError::Payment(err.into()))
    }

    /// Saves and closes the modal
    pub fn finish_edit(&mut self) {
        if let EditState::Editing(id) = self.edit {
            if let Some(payment) = self.ledger.get(id) {
                self.notices
                    .success(format!("Payment {} updated", payment.invoice_number));
            }
        }
        self.edit = EditState::Viewing;
    }

    /// Discards the modal without a notice
    pub fn cancel_edit(&mut self) {
        self.edit = EditState::Viewing;
    }

    /// The register under the current filter and page
    pub fn view(&self) -> PageView<'_, PaymentRecord> {
        project(self.ledger.rows(), &self.page)
    }

    pub fn set_filter(&mut self, filter: impl Into<String>) {
        self.page.filter = filter.into();
        self.page.page = 1;
    }

    pub fn set_page(&mut self, page: usize) {
        self.page.page = page;
    }

    pub fn set_page_size(&mut self, page_size: usize) {
        self.page.set_page_size(page_size);
    }

    pub fn edit_state(&self) -> EditState<PaymentId> {
        self.edit
    }

    pub fn notices(&self) -> &NoticeLog {
        &self.notices
    }

    pub fn ledger(&self) -> &RowLedger<PaymentRecord> {
        &self.ledger
    }
}
