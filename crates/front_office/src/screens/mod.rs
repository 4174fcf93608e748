//! Operator screens
//!
//! Each screen is a self-contained state machine: a ledger, a page
//! request, a notice log, and an edit lifecycle. The screens never share
//! mutable state with each other.

pub mod bill_payment;
pub mod night_audit;
pub mod service_bill;

/// Row edit lifecycle shared by every table
///
/// At most one row is in edit at a time; starting an edit on another row
/// implicitly abandons the current one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditState<Id> {
    /// No row is being edited
    Viewing,
    /// The identified row is open for field edits
    Editing(Id),
}

impl<Id> EditState<Id> {
    pub fn is_editing(&self) -> bool {
        matches!(self, EditState::Editing(_))
    }
}

impl<Id> Default for EditState<Id> {
    fn default() -> Self {
        EditState::Viewing
    }
}
