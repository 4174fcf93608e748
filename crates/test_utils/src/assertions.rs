//! Custom Test Assertions
//!
//! Assertion helpers for domain types with error messages that name the
//! offending values.

use rust_decimal::Decimal;

use core_kernel::{Money, NoticeLog, Severity};

/// Asserts that two Money values are equal within a tolerance
pub fn assert_money_approx_eq(actual: &Money, expected: &Money, tolerance: Decimal) {
    assert_eq!(
        actual.currency(),
        expected.currency(),
        "Currency mismatch: actual={}, expected={}",
        actual.currency(),
        expected.currency()
    );

    let diff = (actual.amount() - expected.amount()).abs();
    assert!(
        diff <= tolerance,
        "Money amounts differ beyond tolerance: actual={}, expected={}, diff={}, tolerance={}",
        actual.amount(),
        expected.amount(),
        diff,
        tolerance
    );
}

/// Asserts that the log's most recent notice has the given severity
pub fn assert_last_notice(log: &NoticeLog, severity: Severity, fragment: &str) {
    let last = log
        .last()
        .unwrap_or_else(|| panic!("expected a notice containing {fragment:?}, log is empty"));
    assert_eq!(
        last.severity, severity,
        "notice severity mismatch: message={:?}",
        last.message
    );
    assert!(
        last.message.contains(fragment),
        "notice {:?} does not contain {fragment:?}",
        last.message
    );
}

/// Asserts that exactly `count` notices have been emitted
pub fn assert_notice_count(log: &NoticeLog, count: usize) {
    assert_eq!(
        log.len(),
        count,
        "notice count mismatch: log={:?}",
        log.entries()
            .iter()
            .map(|n| n.message.as_str())
            .collect::<Vec<_>>()
    );
}
