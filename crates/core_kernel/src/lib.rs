//! Core Kernel - Foundational types for the front-office billing system
//!
//! This crate provides the building blocks shared by every screen domain:
//! - Money types with precise decimal arithmetic
//! - Sequential, strongly-typed row identifiers
//! - The generic in-memory row ledger
//! - View projection (filtering and pagination)
//! - Closed editable-field descriptors
//! - Outcome notices for user-visible action results

pub mod fields;
pub mod identifiers;
pub mod ledger;
pub mod money;
pub mod notice;
pub mod projection;

pub use fields::{
    check_editable, check_option, EditError, EditableRow, FieldDescriptor, FieldKind, FieldValue,
};
pub use identifiers::{AuditRowId, LineId, NoticeId, PaymentId, SequentialId};
pub use ledger::{LedgerRow, RowLedger};
pub use money::{Currency, Money, MoneyError};
pub use notice::{Notice, NoticeLog, Severity};
pub use projection::{matches_filter, project, PageRequest, PageView, Searchable};
