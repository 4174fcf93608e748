//! Front Office Application
//!
//! Wires the domain crates into the three operator screens:
//!
//! - [`ServiceBillScreen`]: the service billing entry form, room lookup,
//!   and billed-services table.
//! - [`PaymentScreen`]: the guest bill payment register.
//! - [`NightAuditScreen`]: the categorized audit review with selection,
//!   approval, and printing.
//!
//! Each screen owns its ledger, pagination state, edit lifecycle, and
//! notice log. Every mutating action emits exactly one notice; pure view
//! changes (paging, filtering, tab switches) emit none.

pub mod config;
pub mod error;
pub mod screens;
pub mod telemetry;

pub use config::FrontOfficeConfig;
pub use error::FrontOfficeError;
pub use screens::bill_payment::PaymentScreen;
pub use screens::night_audit::NightAuditScreen;
pub use screens::service_bill::ServiceBillScreen;
pub use screens::EditState;
pub use telemetry::init_tracing;
