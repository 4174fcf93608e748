//! Audit calendar panel
//!
//! Shows the audit date alongside the current business dates and hosts
//! the room search. Dates render as dd/MM/yyyy everywhere on the panel.

use chrono::{Duration, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::error::AuditError;

/// Formats a date the way the audit panel displays it
pub fn format_audit_date(date: NaiveDate) -> String {
    date.format("%d/%m/%Y").to_string()
}

/// The audit-date panel state
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditCalendar {
    /// The date the audit run posts against
    pub audit_date: NaiveDate,
    /// The open business dates shown beside it
    pub current_dates: Vec<NaiveDate>,
}

impl AuditCalendar {
    /// Number of business dates shown on the panel
    pub const CURRENT_DATE_COUNT: usize = 4;

    /// Builds the panel for a business day
    ///
    /// The audit date is the day being closed; the panel also shows it
    /// and the following open dates.
    pub fn for_business_day(audit_date: NaiveDate) -> Self {
        let current_dates = (0..Self::CURRENT_DATE_COUNT as i64)
            .map(|offset| audit_date + Duration::days(offset))
            .collect();
        Self {
            audit_date,
            current_dates,
        }
    }

    /// The audit date as displayed
    pub fn audit_date_label(&self) -> String {
        format_audit_date(self.audit_date)
    }

    /// The current dates as displayed
    pub fn current_date_labels(&self) -> Vec<String> {
        self.current_dates.iter().copied().map(format_audit_date).collect()
    }

    /// Validates the panel's room search input
    ///
    /// Returns the trimmed room number; a blank search is an error, the
    /// panel never runs an unscoped search.
    pub fn validate_room_search(input: &str) -> Result<&str, AuditError> {
        let room = input.trim();
        if room.is_empty() {
            return Err(AuditError::RoomNumberRequired);
        }
        Ok(room)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_panel_shows_four_consecutive_dates() {
        let audit_date = NaiveDate::from_ymd_opt(2025, 1, 30).unwrap();
        let calendar = AuditCalendar::for_business_day(audit_date);

        assert_eq!(calendar.audit_date_label(), "30/01/2025");
        assert_eq!(
            calendar.current_date_labels(),
            vec!["30/01/2025", "31/01/2025", "01/02/2025", "02/02/2025"]
        );
    }

    #[test]
    fn test_room_search_requires_a_room() {
        assert!(matches!(
            AuditCalendar::validate_room_search("   "),
            Err(AuditError::RoomNumberRequired)
        ));
        assert_eq!(AuditCalendar::validate_room_search(" 101 ").unwrap(), "101");
    }
}
