//! Audit domain errors

use core_kernel::EditError;
use thiserror::Error;

/// Errors that can occur in the night audit domain
#[derive(Debug, Error)]
pub enum AuditError {
    /// A field edit was rejected
    #[error("Edit error: {0}")]
    Edit(#[from] EditError),

    /// The requested audit row does not exist
    #[error("Audit row not found: {0}")]
    NotFound(String),

    /// The calendar room search was submitted blank
    #[error("Room number is required")]
    RoomNumberRequired,
}
