//! Generic in-memory row ledger
//!
//! This module provides the ordered row collection shared by the service
//! bill, guest bill payment, and night audit screens.
//!
//! # Invariants
//!
//! - Row order for rows that are neither removed nor filtered is
//!   insertion order; editing a row never changes its position.
//! - Identifiers are allocated monotonically starting at 1 and are never
//!   reused within a session, even after removal.
//! - Bulk removal is applied in a single pass; callers never observe a
//!   partially-applied removal.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::identifiers::SequentialId;

/// A row that can live in a [`RowLedger`].
pub trait LedgerRow {
    /// The row's identifier type
    type Id: SequentialId;

    /// Returns the row's identifier
    fn id(&self) -> Self::Id;
}

/// The in-memory ordered row collection for one screen session
///
/// The ledger owns its rows and the id sequence. "Save" and "approve"
/// remove rows entirely; they model submission to a backend that does not
/// exist in this system.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RowLedger<R: LedgerRow> {
    rows: Vec<R>,
    next_sequence: u64,
}

impl<R: LedgerRow> Default for RowLedger<R> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: LedgerRow> RowLedger<R> {
    /// Creates an empty ledger with the id sequence at 1
    pub fn new() -> Self {
        Self {
            rows: Vec::new(),
            next_sequence: 1,
        }
    }

    /// Appends a row built around a freshly allocated identifier
    ///
    /// The builder receives the new id so the row can carry it from
    /// construction; the id is returned for selection and edit tracking.
    pub fn insert(&mut self, build: impl FnOnce(R::Id) -> R) -> R::Id {
        let id = R::Id::from_sequence(self.next_sequence);
        self.next_sequence += 1;
        self.rows.push(build(id));
        debug!(sequence = id.sequence(), "ledger row inserted");
        id
    }

    /// Fallible variant of [`RowLedger::insert`]
    ///
    /// The sequence advances only when the builder succeeds, so a failed
    /// submission leaves no gap in the issued ids.
    pub fn try_insert<E>(
        &mut self,
        build: impl FnOnce(R::Id) -> Result<R, E>,
    ) -> Result<R::Id, E> {
        let id = R::Id::from_sequence(self.next_sequence);
        let row = build(id)?;
        self.next_sequence += 1;
        self.rows.push(row);
        debug!(sequence = id.sequence(), "ledger row inserted");
        Ok(id)
    }

    /// Applies an in-place edit to the matching row
    ///
    /// Returns false when the id is absent. The row keeps its position;
    /// derived fields are recomputed by the closure (domain rows do this
    /// through their field dispatch).
    pub fn update(&mut self, id: R::Id, edit: impl FnOnce(&mut R)) -> bool {
        match self.rows.iter_mut().find(|r| r.id() == id) {
            Some(row) => {
                edit(row);
                true
            }
            None => false,
        }
    }

    /// Removes exactly one row; an absent id is a silent no-op
    pub fn remove(&mut self, id: R::Id) -> Option<R> {
        let index = self.rows.iter().position(|r| r.id() == id)?;
        Some(self.rows.remove(index))
    }

    /// Removes every row matching the predicate in a single pass
    ///
    /// Returns the removed rows in their original order.
    pub fn remove_where(&mut self, mut pred: impl FnMut(&R) -> bool) -> Vec<R> {
        let mut removed = Vec::new();
        let mut kept = Vec::with_capacity(self.rows.len());
        for row in self.rows.drain(..) {
            if pred(&row) {
                removed.push(row);
            } else {
                kept.push(row);
            }
        }
        self.rows = kept;
        if !removed.is_empty() {
            debug!(count = removed.len(), "ledger rows removed in bulk");
        }
        removed
    }

    /// Returns the row with the given id
    pub fn get(&self, id: R::Id) -> Option<&R> {
        self.rows.iter().find(|r| r.id() == id)
    }

    /// Returns true if a row with the given id exists
    pub fn contains(&self, id: R::Id) -> bool {
        self.get(id).is_some()
    }

    /// Returns all rows in insertion order
    pub fn rows(&self) -> &[R] {
        &self.rows
    }

    /// Iterates rows in insertion order
    pub fn iter(&self) -> std::slice::Iter<'_, R> {
        self.rows.iter()
    }

    /// Returns the number of rows
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Returns true when the ledger holds no rows
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Returns the next sequence number that will be allocated
    pub fn next_sequence(&self) -> u64 {
        self.next_sequence
    }
}
