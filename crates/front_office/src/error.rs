//! Application-level errors

use thiserror::Error;

use domain_audit::AuditError;
use domain_billing::BillingError;
use domain_guest::GuestError;
use domain_payment::PaymentError;

/// Errors surfaced by the front office screens
#[derive(Debug, Error)]
pub enum FrontOfficeError {
    #[error(transparent)]
    Billing(#[from] BillingError),

    #[error(transparent)]
    Payment(#[from] PaymentError),

    #[error(transparent)]
    Audit(#[from] AuditError),

    #[error(transparent)]
    Guest(#[from] GuestError),

    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    /// A field edit arrived while no row was open
    #[error("No row is open for edit")]
    NoActiveEdit,
}
