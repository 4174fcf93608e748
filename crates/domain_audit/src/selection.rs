//! Checked-row selection
//!
//! Backs the per-row checkboxes and the header select-all on the audit
//! table. Selection state lives outside the ledger so removing a row can
//! never leave a phantom check, as long as callers prune after removal.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use core_kernel::AuditRowId;

/// The set of currently checked audit rows
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Selection {
    checked: BTreeSet<AuditRowId>,
}

impl Selection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Flips one row's checkbox, returning the new state
    pub fn toggle(&mut self, id: AuditRowId) -> bool {
        if self.checked.remove(&id) {
            false
        } else {
            self.checked.insert(id);
            true
        }
    }

    pub fn is_checked(&self, id: AuditRowId) -> bool {
        self.checked.contains(&id)
    }

    /// Checks every id in the given scope (the currently visible set)
    pub fn select_all(&mut self, ids: impl IntoIterator<Item = AuditRowId>) {
        self.checked.extend(ids);
    }

    /// Unchecks everything
    pub fn clear(&mut self) {
        self.checked.clear();
    }

    /// Drops ids that no longer exist
    pub fn retain_existing(&mut self, exists: impl Fn(AuditRowId) -> bool) {
        self.checked.retain(|id| exists(*id));
    }

    /// The checked ids in id order
    pub fn ids(&self) -> Vec<AuditRowId> {
        self.checked.iter().copied().collect()
    }

    pub fn len(&self) -> usize {
        self.checked.len()
    }

    pub fn is_empty(&self) -> bool {
        self.checked.is_empty()
    }
}
