//! Service billing screen
//!
//! Hosts the entry form with its room lookup, and the billed-services
//! table with inline row edits. Both a form submission and a successful
//! room lookup append a billing line and clear the form; saving a line
//! posts it out of the table.

use std::sync::Arc;

use core_kernel::{
    project, Currency, EditError, EditableRow, FieldValue, LineId, NoticeLog, PageRequest,
    PageView, RowLedger,
};
use domain_billing::{BillingLine, ServiceBillForm};
use domain_guest::{GuestDirectoryPort, LookupOutcome, LookupSession};

use crate::error::FrontOfficeError;
use crate::screens::EditState;

/// State of the service billing screen
pub struct ServiceBillScreen {
    pub form: ServiceBillForm,
    ledger: RowLedger<BillingLine>,
    pub page: PageRequest,
    notices: NoticeLog,
    edit: EditState<LineId>,
    lookup: LookupSession,
}

impl ServiceBillScreen {
    pub fn new(
        currency: Currency,
        page_size: usize,
        directory: Arc<dyn GuestDirectoryPort>,
    ) -> Self {
        Self {
            form: ServiceBillForm::new(currency),
            ledger: RowLedger::new(),
            page: PageRequest::new(page_size),
            notices: NoticeLog::new(),
            edit: EditState::Viewing,
            lookup: LookupSession::new(directory),
        }
    }

    /// Looks up the form's room number and bills the guest on a hit
    ///
    /// A hit prefills the form from the directory record and submits it,
    /// appending a lookup-populated line. A superseded response is
    /// dropped without touching the form or the notice log; every other
    /// outcome emits one notice.
    pub async fn lookup_room(&mut self) -> Result<LookupOutcome, FrontOfficeError> {
        let room = self.form.room_number.clone();
        let outcome = self.lookup.lookup(&room).await.map_err(|err| {
            self.notices.error(err.to_string());
            FrontOfficeError::from(err)
        })?;

        match &outcome {
            LookupOutcome::Found(guest) => {
                guest.prefill(&mut self.form);
                let form = self.form.clone();
                match self.ledger.try_insert(|id| form.build_line(id)) {
                    Ok(id) => {
                        self.notices
                            .success(format!("Service bill {id} added for room {room}"));
                        self.form.reset();
                    }
                    Err(err) => self.notices.error(err.to_string()),
                }
            }
            LookupOutcome::NoMatch => {
                self.notices.error(format!("No guest found for room {room}"));
            }
            LookupOutcome::Superseded => {}
        }
        Ok(outcome)
    }

    /// Submits the form as a new billing line
    ///
    /// On success the form resets to blank; on validation failure the
    /// form keeps its state so the operator can correct it.
    pub fn add_service(&mut self) -> Option<LineId> {
        let form = self.form.clone();
        match self.ledger.try_insert(|id| form.build_line(id)) {
            Ok(id) => {
                self.notices.success(format!("Service bill {id} added"));
                self.form.reset();
                Some(id)
            }
            Err(err) => {
                self.notices.error(err.to_string());
                None
            }
        }
    }

    /// Clears the entry form without touching the table
    pub fn cancel(&mut self) {
        self.form.reset();
        self.notices.info("Entry form cleared");
    }

    /// Opens a row for inline editing
    pub fn begin_edit(&mut self, id: LineId) -> bool {
        if self.ledger.contains(id) {
            self.edit = EditState::Editing(id);
            true
        } else {
            false
        }
    }

    /// Applies one field edit to the row currently open
    pub fn edit_field(&mut self, field: &str, value: FieldValue) -> Result<(), FrontOfficeError> {
        let EditState::Editing(id) = self.edit else {
            return Err(FrontOfficeError::NoActiveEdit);
        };
        let mut outcome = Ok(());
        self.ledger.update(id, |line| {
            outcome = line.apply(field, value);
        });
        outcome.map_err(|err: EditError| FrontOfficeError::Billing(err.into()))
    }

    /// Closes the edit, keeping the applied changes
    pub fn finish_edit(&mut self) {
        if let EditState::Editing(id) = self.edit {
            self.notices.success(format!("Service bill {id} updated"));
        }
        self.edit = EditState::Viewing;
    }

    /// Settles one billing line, posting it out of the table
    ///
    /// Removal models submission to the billing backend; the line is
    /// gone from the session once saved.
    pub fn commit_row(&mut self, id: LineId) {
        match self.ledger.remove(id) {
            Some(_) => self.notices.success(format!("Service bill {id} saved")),
            None => self.notices.error(format!("Service bill {id} not found")),
        }
        if self.edit == EditState::Editing(id) {
            self.edit = EditState::Viewing;
        }
    }

    /// Deletes one billing line without posting it
    pub fn delete_row(&mut self, id: LineId) {
        match self.ledger.remove(id) {
            Some(_) => self.notices.success(format!("Service bill {id} removed")),
            None => self.notices.error(format!("Service bill {id} not found")),
        }
        if self.edit == EditState::Editing(id) {
            self.edit = EditState::Viewing;
        }
    }

    /// The billed-services table under the current filter and page
    pub fn view(&self) -> PageView<'_, BillingLine> {
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

    pub fn edit_state(&self) -> EditState<LineId> {
        self.edit
    }

    pub fn notices(&self) -> &NoticeLog {
        &self.notices
    }

    pub fn ledger(&self) -> &RowLedger<BillingLine> {
        &self.ledger
    }
}
