//! View projection over a row ledger
//!
//! Filtering and pagination are pure functions over row snapshots: the
//! same parameters applied to an unchanged ledger always yield the same
//! visible rows.

use serde::{Deserialize, Serialize};

/// A row that can be matched against the global filter.
pub trait Searchable {
    /// The stringified values of every displayed column
    ///
    /// A row matches a filter when any of these values contains the
    /// filter text, case-insensitively.
    fn display_columns(&self) -> Vec<String>;
}

/// Filter and pagination parameters for one table view
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageRequest {
    /// Substring filter; empty matches every row
    pub filter: String,
    /// 1-based page index
    pub page: usize,
    /// Rows per page
    pub page_size: usize,
}

impl PageRequest {
    /// Creates a request showing the first page with no filter
    pub fn new(page_size: usize) -> Self {
        Self {
            filter: String::new(),
            page: 1,
            page_size: page_size.max(1),
        }
    }

    /// Replaces the filter text, keeping the current page
    pub fn with_filter(mut self, filter: impl Into<String>) -> Self {
        self.filter = filter.into();
        self
    }

    /// Changes the page size and resets to the first page
    ///
    /// Resetting keeps the page index within bounds for any filtered row
    /// count.
    pub fn set_page_size(&mut self, page_size: usize) {
        self.page_size = page_size.max(1);
        self.page = 1;
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self::new(5)
    }
}

/// One page of projected rows
#[derive(Debug, Clone)]
pub struct PageView<'a, R> {
    /// Rows visible on the clamped page, in ledger order
    pub rows: Vec<&'a R>,
    /// The clamped 1-based page that was actually shown
    pub page: usize,
    /// Total pages for the filtered set, never less than 1
    pub page_count: usize,
    /// Number of rows matching the filter
    pub filtered_len: usize,
    /// Number of rows in the unfiltered ledger
    pub total_len: usize,
}

impl<R> PageView<'_, R> {
    /// Returns true when the filtered set is empty
    pub fn is_empty(&self) -> bool {
        self.filtered_len == 0
    }
}

/// Returns true when the row matches the filter text
pub fn matches_filter<R: Searchable>(row: &R, filter: &str) -> bool {
    if filter.is_empty() {
        return true;
    }
    let needle = filter.to_lowercase();
    row.display_columns()
        .iter()
        .any(|col| col.to_lowercase().contains(&needle))
}

/// Projects a filtered, paginated view over the rows
///
/// `page_count = max(1, ceil(filtered / page_size))`; an out-of-range
/// page index is clamped into `[1, page_count]` rather than rejected.
pub fn project<'a, R: Searchable>(rows: &'a [R], request: &PageRequest) -> PageView<'a, R> {
    let filtered: Vec<&R> = rows
        .iter()
        .filter(|row| matches_filter(*row, &request.filter))
        .collect();

    let page_size = request.page_size.max(1);
    let page_count = filtered.len().div_ceil(page_size).max(1);
    let page = request.page.clamp(1, page_count);

    let start = (page - 1) * page_size;
    let visible = filtered
        .iter()
        .skip(start)
        .take(page_size)
        .copied()
        .collect();

    PageView {
        rows: visible,
        page,
        page_count,
        filtered_len: filtered.len(),
        total_len: rows.len(),
    }
}
