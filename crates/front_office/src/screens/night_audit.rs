//! Night audit screen
//!
//! A categorized review of the day's unposted charges. The auditor picks
//! a category tab, filters and pages the rows, corrects them inline, and
//! posts them out either one at a time (save) or in bulk (approve).
//! Posting removes rows from the working set; this models submission to
//! a posting backend.

use chrono::NaiveDate;

use core_kernel::{
    matches_filter, AuditRowId, Currency, EditError, EditableRow, FieldValue, NoticeLog,
    PageRequest, RowLedger,
};
use domain_audit::{
    seed_audit_rows, AuditCalendar, AuditCategory, AuditRow, PrintDocument, Selection,
};

use crate::error::FrontOfficeError;
use crate::screens::EditState;

/// One page of the audit table, scoped to the active category
#[derive(Debug, Clone, PartialEq)]
pub struct AuditView {
    pub rows: Vec<AuditRow>,
    pub page: usize,
    pub page_count: usize,
    pub filtered_len: usize,
    pub category_len: usize,
}

/// State of the night audit screen
pub struct NightAuditScreen {
    ledger: RowLedger<AuditRow>,
    selection: Selection,
    category: AuditCategory,
    pub page: PageRequest,
    notices: NoticeLog,
    edit: EditState<AuditRowId>,
    pub calendar: AuditCalendar,
}

impl NightAuditScreen {
    /// Opens the screen over the seeded working set
    pub fn new(currency: Currency, page_size: usize, audit_date: NaiveDate) -> Self {
        Self {
            ledger: seed_audit_rows(currency),
            selection: Selection::new(),
            category: AuditCategory::Room,
            page: PageRequest::new(page_size),
            notices: NoticeLog::new(),
            edit: EditState::Viewing,
            calendar: AuditCalendar::for_business_day(audit_date),
        }
    }

    /// Switches the category tab, dropping selection and edit state
    pub fn set_category(&mut self, category: AuditCategory) {
        if self.category != category {
            self.category = category;
            self.selection.clear();
            self.edit = EditState::Viewing;
            self.page.page = 1;
        }
    }

    pub fn category(&self) -> AuditCategory {
        self.category
    }

    /// Ids of every row in the active category passing the text filter
    ///
    /// This is the scope of select-all and approve-all: the whole
    /// filtered set, not just the visible page.
    pub fn filtered_ids(&self) -> Vec<AuditRowId> {
        self.ledger
            .iter()
            .filter(|row| row.category == self.category)
            .filter(|row| matches_filter(*row, &self.page.filter))
            .map(|row| row.id)
            .collect()
    }

    /// The audit table under the active category, filter, and page
    pub fn view(&self) -> AuditView {
        let category_rows: Vec<AuditRow> = self
            .ledger
            .iter()
            .filter(|row| row.category == self.category)
            .cloned()
            .collect();
        let projected = core_kernel::project(&category_rows, &self.page);

        AuditView {
            page: projected.page,
            page_count: projected.page_count,
            filtered_len: projected.filtered_len,
            category_len: category_rows.len(),
            rows: projected.rows.into_iter().cloned().collect(),
        }
    }

    /// Flips one row's checkbox
    pub fn toggle_row(&mut self, id: AuditRowId) -> bool {
        self.selection.toggle(id)
    }

    /// Checks every row in the filtered set
    pub fn select_all(&mut self) {
        self.selection.select_all(self.filtered_ids());
    }

    /// Unchecks everything
    pub fn clear_selection(&mut self) {
        self.selection.clear();
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    /// Opens a row for inline correction
    pub fn begin_edit(&mut self, id: AuditRowId) -> bool {
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
        self.ledger.update(id, |row| {
            outcome = row.apply(field, value);
        });
        outcome.map_err(|err: EditError| FrontOfficeError::Audit(err.into()))
    }

    /// Abandons the inline edit without posting
    pub fn cancel_edit(&mut self) {
        self.edit = EditState::Viewing;
    }

    pub fn edit_state(&self) -> EditState<AuditRowId> {
        self.edit
    }

    /// Posts the row currently open for edit out of the working set
    pub fn save_row(&mut self) -> Result<AuditRow, FrontOfficeError> {
        let EditState::Editing(id) = self.edit else {
            return Err(FrontOfficeError::NoActiveEdit);
        };
        self.edit = EditState::Viewing;
        match self.ledger.remove(id) {
            Some(row) => {
                self.selection.retain_existing(|id| self.ledger.contains(id));
                self.notices
                    .success(format!("Audit row for room {} posted", row.room_number));
                Ok(row)
            }
            None => {
                self.notices.error(format!("Audit row {id} not found"));
                Err(FrontOfficeError::Audit(
                    domain_audit::AuditError::NotFound(id.to_string()),
                ))
            }
        }
    }

    /// Posts every checked row out of the working set
    pub fn approve_selected(&mut self) -> usize {
        if self.selection.is_empty() {
            self.notices.error("No rows selected");
            return 0;
        }
        let removed = self
            .ledger
            .remove_where(|row| self.selection.is_checked(row.id));
        self.selection.clear();
        self.notices
            .success(format!("{} audit rows approved", removed.len()));
        removed.len()
    }

    /// Posts the whole filtered set out of the working set
    pub fn approve_all(&mut self) -> usize {
        let scope = self.filtered_ids();
        if scope.is_empty() {
            self.notices.error("Nothing to approve");
            return 0;
        }
        let removed = self.ledger.remove_where(|row| scope.contains(&row.id));
        self.selection.retain_existing(|id| self.ledger.contains(id));
        self.notices
            .success(format!("{} audit rows approved", removed.len()));
        removed.len()
    }

    /// Snapshots the checked rows for printing, in ledger order
    ///
    /// With nothing checked there is nothing to hand to the renderer, so
    /// the action degrades to an error notice.
    pub fn print_selected(&mut self) -> Option<PrintDocument> {
        if self.selection.is_empty() {
            self.notices.error("No rows selected to print");
            return None;
        }
        let rows: Vec<AuditRow> = self
            .ledger
            .iter()
            .filter(|row| self.selection.is_checked(row.id))
            .cloned()
            .collect();
        Some(PrintDocument::capture(
            self.category,
            self.calendar.audit_date,
            rows.iter(),
        ))
    }

    /// Runs the calendar's room search, scoping the table to one room
    pub fn search_room(&mut self, input: &str) -> Result<(), FrontOfficeError> {
        let room = AuditCalendar::validate_room_search(input).map_err(|err| {
            self.notices.error(err.to_string());
            FrontOfficeError::from(err)
        })?;
        self.page.filter = room.to_string();
        self.page.page = 1;
        Ok(())
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

    pub fn notices(&self) -> &NoticeLog {
        &self.notices
    }

    pub fn ledger(&self) -> &RowLedger<AuditRow> {
        &self.ledger
    }
}
