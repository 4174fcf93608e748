//! Stale-result suppression for room lookups
//!
//! The entry form triggers a lookup every time the room number changes,
//! and the directory answers with real latency. Responses can therefore
//! arrive out of order. Each lookup takes a ticket from a monotonic
//! counter; a response is applied only while its ticket is still the
//! latest, so only the most recent query can ever touch the form.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use crate::error::GuestError;
use crate::ports::GuestDirectoryPort;
use crate::record::GuestLookupResult;

/// Outcome of one room lookup
#[derive(Debug, Clone, PartialEq)]
pub enum LookupOutcome {
    /// A guest is registered for the room
    Found(GuestLookupResult),
    /// No guest is registered for the room
    NoMatch,
    /// A newer lookup started before this one finished; discard it
    Superseded,
}

/// Serializes lookup relevance across overlapping requests
pub struct LookupSession {
    directory: Arc<dyn GuestDirectoryPort>,
    latest_ticket: AtomicU64,
}

impl LookupSession {
    pub fn new(directory: Arc<dyn GuestDirectoryPort>) -> Self {
        Self {
            directory,
            latest_ticket: AtomicU64::new(0),
        }
    }

    /// Looks up a room, reporting `Superseded` if a newer lookup started
    /// while this one was awaiting the directory
    pub async fn lookup(&self, room_number: &str) -> Result<LookupOutcome, GuestError> {
        let ticket = self.latest_ticket.fetch_add(1, Ordering::SeqCst) + 1;
        let result = self.directory.find_by_room(room_number).await;

        if self.latest_ticket.load(Ordering::SeqCst) != ticket {
            tracing::debug!(room = room_number, ticket, "lookup superseded");
            return Ok(LookupOutcome::Superseded);
        }

        Ok(match result? {
            Some(guest) => LookupOutcome::Found(guest),
            None => LookupOutcome::NoMatch,
        })
    }

    /// The ticket of the most recently started lookup
    pub fn latest_ticket(&self) -> u64 {
        self.latest_ticket.load(Ordering::SeqCst)
    }
}
