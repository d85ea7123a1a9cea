// File: crates/index-chart-core/src/cagr.rs
// Summary: Compound annual growth over a point range, plus the day-count annualization used by hover.
// Notes:
// - `cagr` counts years by calendar month; `annualized_return` (hover) counts
//   days over a 365.25-day year. The two are intentionally kept apart since
//   they give slightly different figures for the same span.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::series::DataPoint;

/// Days per year used by the hover annualization.
pub const DAYS_PER_YEAR: f64 = 365.25;

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct CagrResult {
    /// Annualized growth in percent.
    pub cagr: f64,
    /// `end / start - 1` in percent.
    pub total_return: f64,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub start_value: f64,
    pub end_value: f64,
    pub years: f64,
}

/// `(end_year - start_year) + (end_month - start_month) / 12`.
pub fn month_years(start: NaiveDate, end: NaiveDate) -> f64 {
    let years = (end.year() - start.year()) as f64;
    let months = end.month() as f64 - start.month() as f64;
    years + months / 12.0
}

/// Elapsed days over a 365.25-day year.
pub fn day_count_years(start: NaiveDate, end: NaiveDate) -> f64 {
    (end - start).num_days() as f64 / DAYS_PER_YEAR
}

/// `(end / start)^(1 / years) - 1` as a fraction. `None` when the result
/// would be undefined: zero years, non-positive start, or a non-finite rate.
pub fn annualized_return(start_value: f64, end_value: f64, years: f64) -> Option<f64> {
    if years == 0.0 || start_value <= 0.0 {
        return None;
    }
    let rate = (end_value / start_value).powf(1.0 / years) - 1.0;
    rate.is_finite().then_some(rate)
}

/// CAGR between the first and last point of `points`.
/// `None` for fewer than two points or a zero month span.
pub fn cagr(points: &[DataPoint]) -> Option<CagrResult> {
    if points.len() < 2 {
        return None;
    }
    let first = points.first()?;
    let last = points.last()?;
    let years = month_years(first.date, last.date);
    let rate = annualized_return(first.value, last.value, years)?;
    Some(CagrResult {
        cagr: rate * 100.0,
        total_return: (last.value / first.value - 1.0) * 100.0,
        start_date: first.date,
        end_date: last.date,
        start_value: first.value,
        end_value: last.value,
        years,
    })
}
