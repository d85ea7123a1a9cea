// File: crates/index-chart-core/src/series.rs
// Summary: Monthly index series model: points, `MM/YYYY` parsing and range slicing.
// Notes:
// - A Series is immutable once built; reloads replace it wholesale.
// - Dates are stored as the first day of their month, matching the feed's
//   month granularity and the event catalogue.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::error::SeriesError;

/// Header of the date column in the feed.
pub const DATE_COLUMN: &str = "Date";
/// Header of the index value column in the feed.
pub const VALUE_COLUMN: &str = "MSCI World";

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct DataPoint {
    pub date: NaiveDate,
    /// May be zero or negative; downstream math clamps or degrades instead of failing.
    pub value: f64,
}

impl DataPoint {
    pub const fn new(date: NaiveDate, value: f64) -> Self {
        Self { date, value }
    }
}

/// Ordered points, non-decreasing by date.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Series {
    points: Vec<DataPoint>,
}

/// Output of the smoother: same length and dates as its source.
pub type SmoothedSeries = Series;

impl Series {
    pub fn new() -> Self {
        Self { points: Vec::new() }
    }

    /// Build a series, rejecting points whose date goes backwards.
    pub fn try_new(points: Vec<DataPoint>) -> Result<Self, SeriesError> {
        if let Some(row) = points.windows(2).position(|w| w[1].date < w[0].date) {
            return Err(SeriesError::OutOfOrder { row: row + 2, date: points[row + 1].date });
        }
        Ok(Self { points })
    }

    /// Build from already-ordered points. Callers guarantee the ordering
    /// (derived series reuse their source's dates).
    pub(crate) fn from_sorted(points: Vec<DataPoint>) -> Self {
        Self { points }
    }

    /// Parse raw feed rows of (`MM/YYYY`, numeric string). Errors carry the
    /// 1-based data-row number, header excluded.
    pub fn from_rows<'a, I>(rows: I) -> Result<Self, SeriesError>
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        let mut points = Vec::new();
        for (i, (date, value)) in rows.into_iter().enumerate() {
            let row = i + 1;
            let date = parse_month_year(date)
                .ok_or_else(|| SeriesError::InvalidDate { row, text: date.to_string() })?;
            let value = value
                .trim()
                .parse::<f64>()
                .map_err(|_| SeriesError::InvalidValue { row, text: value.to_string() })?;
            points.push(DataPoint { date, value });
        }
        Self::try_new(points)
    }

    pub fn points(&self) -> &[DataPoint] { &self.points }
    pub fn len(&self) -> usize { self.points.len() }
    pub fn is_empty(&self) -> bool { self.points.is_empty() }
    pub fn first(&self) -> Option<&DataPoint> { self.points.first() }
    pub fn last(&self) -> Option<&DataPoint> { self.points.last() }

    pub fn values(&self) -> impl Iterator<Item = f64> + '_ {
        self.points.iter().map(|p| p.value)
    }

    /// First and last date, or `None` for an empty series.
    pub fn date_extent(&self) -> Option<(NaiveDate, NaiveDate)> {
        Some((self.first()?.date, self.last()?.date))
    }

    /// Points with `start <= date <= end`. Bounds may be given in either order.
    pub fn range(&self, start: NaiveDate, end: NaiveDate) -> &[DataPoint] {
        let (lo, hi) = if start <= end { (start, end) } else { (end, start) };
        let i0 = self.points.partition_point(|p| p.date < lo);
        let i1 = self.points.partition_point(|p| p.date <= hi);
        &self.points[i0..i1.max(i0)]
    }

    /// Like [`Series::range`] but widened by one point on each side, so a
    /// clipped path reaches the plot edges instead of stopping at the last
    /// whole month inside the window.
    pub fn range_with_neighbors(&self, start: NaiveDate, end: NaiveDate) -> &[DataPoint] {
        let (lo, hi) = if start <= end { (start, end) } else { (end, start) };
        let i0 = self.points.partition_point(|p| p.date < lo).saturating_sub(1);
        let i1 = (self.points.partition_point(|p| p.date <= hi) + 1).min(self.points.len());
        &self.points[i0..i1.max(i0)]
    }
}

/// Parse `MM/YYYY` (month 1-12) into the first day of that month.
pub fn parse_month_year(s: &str) -> Option<NaiveDate> {
    let (month, year) = s.trim().split_once('/')?;
    let month: u32 = month.trim().parse().ok()?;
    let year: i32 = year.trim().parse().ok()?;
    NaiveDate::from_ymd_opt(year, month, 1)
}

/// Inverse of [`parse_month_year`].
pub fn format_month_year(date: NaiveDate) -> String {
    format!("{:02}/{:04}", date.month(), date.year())
}
