//! Service Billing Domain - Charge Aggregation and Billing Lines
//!
//! This crate implements the guest service billing screen's domain logic:
//!
//! - [`ChargeSheet`] aggregates a base rate, quantity, and a closed set of
//!   optional surcharges (VAT, SD charge, additional charge, service
//!   charge), each gated by an independent inclusion toggle.
//! - [`BillingLine`] is one service charge entry for a guest. Its total is
//!   always derivable from the other fields and is recomputed on every
//!   total-affecting edit; it is never an independent source of truth.
//! - [`ServiceBillForm`] carries the entry form state and the strict
//!   validation rules (required fields, email format, numeric bounds).
//!
//! # Example
//!
//! ```rust,ignore
//! use domain_billing::{ChargeSheet, SurchargeKind};
//! use rust_decimal_macros::dec;
//!
//! let mut charges = ChargeSheet::new();
//! charges.set_amount(SurchargeKind::Vat, dec!(5));
//! assert_eq!(charges.total(dec!(20), 2), dec!(45));
//! ```

pub mod charges;
pub mod error;
pub mod form;
pub mod line;

pub use charges::{ChargeSheet, SurchargeKind};
pub use error::BillingError;
pub use form::ServiceBillForm;
pub use line::{BillingLine, GuestType, ServiceName};
