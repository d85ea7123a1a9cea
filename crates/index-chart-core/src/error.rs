// File: crates/index-chart-core/src/error.rs
// Summary: Errors raised while turning feed rows into a Series.

use chrono::NaiveDate;

/// `row` is the 1-based data-row number (the header row is not counted).
#[derive(Debug, thiserror::Error)]
pub enum SeriesError {
    #[error("row {row}: invalid date {text:?} (expected MM/YYYY)")]
    InvalidDate { row: usize, text: String },
    #[error("row {row}: invalid value {text:?}")]
    InvalidValue { row: usize, text: String },
    #[error("row {row}: date {date} is earlier than the previous row")]
    OutOfOrder { row: usize, date: NaiveDate },
}
