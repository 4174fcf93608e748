//! Strongly-typed identifiers for ledger rows and events
//!
//! Row identifiers are newtype wrappers around a u64 sequence number.
//! Ledgers allocate them monotonically starting at 1 and never reuse a
//! value within a session, so an id uniquely names a row even after the
//! row has been committed and removed.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// A row identifier that can be produced from a ledger sequence number.
pub trait SequentialId: Copy + Eq + Ord + fmt::Debug {
    /// Creates the identifier for the given sequence number (1-based)
    fn from_sequence(sequence: u64) -> Self;

    /// Returns the underlying sequence number
    fn sequence(&self) -> u64;
}

macro_rules! define_row_id {
    ($name:ident, $prefix:literal) => {
        #[derive(
            Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
        )]
        #[serde(transparent)]
        pub struct $name(u64);

        impl $name {
            /// Creates an identifier from a raw sequence number
            pub fn new(sequence: u64) -> Self {
                Self(sequence)
            }

            /// Returns the identifier prefix for display
            pub fn prefix() -> &'static str {
                $prefix
            }
        }

        impl SequentialId for $name {
            fn from_sequence(sequence: u64) -> Self {
                Self(sequence)
            }

            fn sequence(&self) -> u64 {
                self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}-{}", $prefix, self.0)
            }
        }

        impl FromStr for $name {
            type Err = std::num::ParseIntError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                // Strip prefix if present
                let raw = s.strip_prefix(concat!($prefix, "-")).unwrap_or(s);
                Ok(Self(raw.parse()?))
            }
        }

        impl From<$name> for u64 {
            fn from(id: $name) -> u64 {
                id.0
            }
        }
    };
}

// Service billing rows
define_row_id!(LineId, "SVC");

// Guest bill payment rows
define_row_id!(PaymentId, "PAY");

// Night audit rows
define_row_id!(AuditRowId, "AUD");

/// Identifier for an outcome notice event
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NoticeId(Uuid);

impl NoticeId {
    /// Creates a new random identifier
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Returns the underlying UUID
    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl Default for NoticeId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for NoticeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "NTC-{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_line_id_display() {
        let id = LineId::new(7);
        assert_eq!(id.to_string(), "SVC-7");
    }

    #[test]
    fn test_id_parsing_with_and_without_prefix() {
        let parsed: PaymentId = "PAY-12".parse().unwrap();
        assert_eq!(parsed, PaymentId::new(12));

        let bare: PaymentId = "12".parse().unwrap();
        assert_eq!(bare, parsed);
    }

    #[test]
    fn test_sequence_round_trip() {
        let id = AuditRowId::from_sequence(42);
        assert_eq!(id.sequence(), 42);
        assert_eq!(u64::from(id), 42);
    }

    #[test]
    fn test_ids_order_by_sequence() {
        assert!(LineId::new(1) < LineId::new(2));
    }

    #[test]
    fn test_ids_serialize_transparently() {
        let json = serde_json::to_string(&LineId::new(7)).unwrap();
        assert_eq!(json, "7");
        let back: LineId = serde_json::from_str(&json).unwrap();
        assert_eq!(back, LineId::new(7));
    }
}
