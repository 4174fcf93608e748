//! Guest Bill Payment Domain
//!
//! The payment screen shows the register of guest bill payments and lets
//! the operator edit or settle individual records. This crate provides:
//!
//! - [`PaymentRecord`], one payment row with a closed editable-field set.
//!   Invoice number and payment date are display-only; the rest is
//!   editable through typed dispatch.
//! - [`PaymentForm`], the validated submission path that appends to the
//!   register and continues its invoice sequence.
//! - [`PaymentType`] and [`PaymentMode`] as closed enums rather than
//!   free-form strings.
//! - [`seed_payments`], the deterministic starting register.

pub mod error;
pub mod form;
pub mod payment;
pub mod seed;

pub use error::PaymentError;
pub use form::{PaymentForm, ROOM_OPTIONS};
pub use payment::{PaymentMode, PaymentRecord, PaymentType};
pub use seed::seed_payments;
