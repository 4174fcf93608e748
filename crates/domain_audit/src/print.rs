//! Printable audit snapshot
//!
//! Capturing a snapshot decouples the print surface from the live
//! ledger: the document carries plain cells, so later edits or removals
//! cannot change what was printed.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::calendar::format_audit_date;
use crate::row::{AuditCategory, AuditRow};

/// Column headers of the audit table, in display order
pub const COLUMNS: &[&str] = &[
    "Room No",
    "Guest Name",
    "Service",
    "Room Tariff",
    "S. Charge",
    "VAT Amount",
    "Total",
    "Remarks",
];

/// A render-ready snapshot of one audit category's table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PrintDocument {
    pub title: String,
    pub audit_date: NaiveDate,
    pub rows: Vec<Vec<String>>,
}

impl PrintDocument {
    /// Snapshots the given rows under a category heading
    pub fn capture<'a>(
        category: AuditCategory,
        audit_date: NaiveDate,
        rows: impl IntoIterator<Item = &'a AuditRow>,
    ) -> Self {
        let rows = rows
            .into_iter()
            .map(|row| {
                vec![
                    row.room_number.clone(),
                    row.guest_name.clone(),
                    row.service.clone(),
                    row.room_tariff.to_string(),
                    row.service_charge.to_string(),
                    row.vat_amount.to_string(),
                    row.total().to_string(),
                    row.remarks.clone(),
                ]
            })
            .collect();

        Self {
            title: category.label().to_string(),
            audit_date,
            rows,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Renders the snapshot as a standalone HTML page
    pub fn to_html(&self) -> String {
        let mut html = String::new();
        html.push_str("<!DOCTYPE html><html><head><title>");
        html.push_str(&escape(&self.title));
        html.push_str("</title></head><body>");
        html.push_str(&format!(
            "<h2>{}</h2><p>Audit Date: {}</p>",
            escape(&self.title),
            format_audit_date(self.audit_date)
        ));
        html.push_str("<table border=\"1\"><thead><tr>");
        for column in COLUMNS {
            html.push_str(&format!("<th>{column}</th>"));
        }
        html.push_str("</tr></thead><tbody>");
        for row in &self.rows {
            html.push_str("<tr>");
            for cell in row {
                html.push_str(&format!("<td>{}</td>", escape(cell)));
            }
            html.push_str("</tr>");
        }
        html.push_str("</tbody></table></body></html>");
        html
    }
}

fn escape(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

#[cfg(test)]
mod tests {
    use super::*;
    use core_kernel::{AuditRowId, Currency, Money};
    use rust_decimal_macros::dec;

    fn sample_row() -> AuditRow {
        AuditRow {
            id: AuditRowId::new(1),
            category: AuditCategory::Restaurant,
            room_number: "102".to_string(),
            guest_name: "Jane Smith".to_string(),
            service: "Dinner <buffet>".to_string(),
            room_tariff: Money::new(dec!(0), Currency::USD),
            service_charge: Money::new(dec!(4), Currency::USD),
            vat_amount: Money::new(dec!(2), Currency::USD),
            remarks: String::new(),
        }
    }

    #[test]
    fn test_capture_freezes_the_rows() {
        let mut row = sample_row();
        let date = NaiveDate::from_ymd_opt(2025, 1, 10).unwrap();
        let document = PrintDocument::capture(AuditCategory::Restaurant, date, [&row]);

        row.guest_name = "Changed".to_string();
        assert_eq!(document.rows[0][1], "Jane Smith");
        assert_eq!(document.title, "Restaurant Audit");
    }

    #[test]
    fn test_html_escapes_cell_content() {
        let row = sample_row();
        let date = NaiveDate::from_ymd_opt(2025, 1, 10).unwrap();
        let html = PrintDocument::capture(AuditCategory::Restaurant, date, [&row]).to_html();

        assert!(html.contains("Dinner &lt;buffet&gt;"));
        assert!(html.contains("<th>Room Tariff</th>"));
        assert!(html.contains("10/01/2025"));
    }
}
