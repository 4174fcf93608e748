//! Outcome notices for user-visible action results
//!
//! Every mutating screen action emits exactly one notice. Notices are
//! fire-and-forget from the screen's perspective; the log keeps them in
//! emission order so tests (and a view layer) can inspect outcomes.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::identifiers::NoticeId;

/// Outcome severity of a user-facing notice
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Success,
    Error,
    Info,
}

/// A single user-visible outcome event
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Notice {
    pub id: NoticeId,
    pub severity: Severity,
    pub message: String,
    pub emitted_at: DateTime<Utc>,
}

impl Notice {
    fn new(severity: Severity, message: impl Into<String>) -> Self {
        Self {
            id: NoticeId::new(),
            severity,
            message: message.into(),
            emitted_at: Utc::now(),
        }
    }
}

/// Ordered log of notices for one screen session
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NoticeLog {
    entries: Vec<Notice>,
}

impl NoticeLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Emits a success notice
    pub fn success(&mut self, message: impl Into<String>) {
        let notice = Notice::new(Severity::Success, message);
        info!(notice_id = %notice.id, "{}", notice.message);
        self.entries.push(notice);
    }

    /// Emits an error notice
    pub fn error(&mut self, message: impl Into<String>) {
        let notice = Notice::new(Severity::Error, message);
        warn!(notice_id = %notice.id, "{}", notice.message);
        self.entries.push(notice);
    }

    /// Emits an info notice
    pub fn info(&mut self, message: impl Into<String>) {
        let notice = Notice::new(Severity::Info, message);
        info!(notice_id = %notice.id, "{}", notice.message);
        self.entries.push(notice);
    }

    /// Returns all notices in emission order
    pub fn entries(&self) -> &[Notice] {
        &self.entries
    }

    /// Returns the most recent notice
    pub fn last(&self) -> Option<&Notice> {
        self.entries.last()
    }

    /// Number of notices emitted so far
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true when nothing has been emitted
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
