//! Guest Directory Domain - Room Lookup
//!
//! The service billing screen prefills its entry form from a guest
//! lookup keyed by room number. This crate provides:
//!
//! - [`GuestDirectoryPort`], the async lookup boundary.
//! - [`StaticGuestDirectory`], an in-memory adapter with a fixed guest
//!   table and a configurable artificial delay standing in for a real
//!   property-management backend.
//! - [`LookupSession`], which tags every lookup with a monotonically
//!   increasing ticket and discards responses that arrive after a newer
//!   lookup has started, so a slow response can never overwrite fresher
//!   form state.

pub mod error;
pub mod lookup;
pub mod ports;
pub mod record;

pub use error::GuestError;
pub use lookup::{LookupOutcome, LookupSession};
pub use ports::{GuestDirectoryPort, StaticGuestDirectory};
pub use record::GuestLookupResult;
