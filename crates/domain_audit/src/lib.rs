//! Night Audit Domain
//!
//! The night audit screen reviews the day's unposted charges by
//! category, lets the auditor correct rows inline, and posts approved
//! rows out of the working set. This crate provides:
//!
//! - [`AuditRow`] and [`AuditCategory`]: one reviewable charge with a
//!   derived total (tariff + service charge + VAT).
//! - [`Selection`]: the checked-row set driving bulk approval.
//! - [`PrintDocument`]: a render-ready snapshot of the audited table.
//! - [`AuditCalendar`]: the audit-date panel with its room search.
//! - [`seed_audit_rows`]: the deterministic working set.

pub mod calendar;
pub mod error;
pub mod print;
pub mod row;
pub mod seed;
pub mod selection;

pub use calendar::AuditCalendar;
pub use error::AuditError;
pub use print::PrintDocument;
pub use row::{AuditCategory, AuditRow};
pub use seed::seed_audit_rows;
pub use selection::Selection;
