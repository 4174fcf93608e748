//! Guest directory errors

use thiserror::Error;

/// Errors raised by guest directory lookups
#[derive(Debug, Error)]
pub enum GuestError {
    /// The directory backend failed to answer
    #[error("Directory unavailable: {0}")]
    DirectoryUnavailable(String),

    /// The lookup key was unusable
    #[error("Invalid room number: {0}")]
    InvalidRoomNumber(String),
}
