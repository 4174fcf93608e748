//! Payment domain errors

use core_kernel::{EditError, MoneyError};
use thiserror::Error;

/// Errors that can occur in the bill payment domain
#[derive(Debug, Error)]
pub enum PaymentError {
    /// The form failed validation; submission is blocked
    #[error("Validation failed: {}", .0.join("; "))]
    Validation(Vec<String>),

    /// A field edit was rejected
    #[error("Edit error: {0}")]
    Edit(#[from] EditError),

    /// Monetary arithmetic failed
    #[error("Money error: {0}")]
    Money(#[from] MoneyError),
}
