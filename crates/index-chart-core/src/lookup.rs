// File: crates/index-chart-core/src/lookup.rs
// Summary: Pointer-driven nearest-point lookup and the return statistics shown in the tooltip.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::cagr::{annualized_return, day_count_years};
use crate::series::DataPoint;

/// Index of the point closest in time to `query`.
///
/// Bisects to the first point dated `>= query`, then compares it with its
/// predecessor; on equal distance the earlier point wins.
pub fn nearest_index(points: &[DataPoint], query: NaiveDate) -> Option<usize> {
    if points.is_empty() {
        return None;
    }
    let i = points.partition_point(|p| p.date < query);
    if i == 0 {
        return Some(0);
    }
    if i >= points.len() {
        return Some(points.len() - 1);
    }
    let before = (query - points[i - 1].date).num_days();
    let after = (points[i].date - query).num_days();
    Some(if before > after { i } else { i - 1 })
}

pub fn nearest(points: &[DataPoint], query: NaiveDate) -> Option<DataPoint> {
    nearest_index(points, query).map(|i| points[i])
}

/// Data behind the hover tooltip. Returns are fractions (0.1 = 10%).
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct TooltipModel {
    pub index: usize,
    pub point: DataPoint,
    /// `(v - v0) / v0`
    pub return_from_start: Option<f64>,
    /// `(v_last - v) / v`
    pub return_to_present: Option<f64>,
    /// Annualized growth from the hovered point to the last point (365.25-day years).
    pub annualized_to_present: Option<f64>,
}

impl TooltipModel {
    /// Text lines in display order.
    pub fn lines(&self) -> Vec<String> {
        let pct = |r: Option<f64>| match r {
            Some(r) => format!("{:+.2}%", r * 100.0),
            None => "n/a".to_string(),
        };
        vec![
            self.point.date.format("%b %Y").to_string(),
            format!("Value: {:.2}", self.point.value),
            format!("Since start: {}", pct(self.return_from_start)),
            format!("To present: {}", pct(self.return_to_present)),
            format!("Annualized to present: {}", pct(self.annualized_to_present)),
        ]
    }
}

fn relative_change(from: f64, to: f64) -> Option<f64> {
    if from == 0.0 {
        return None;
    }
    let r = (to - from) / from;
    r.is_finite().then_some(r)
}

/// Tooltip for the point nearest `query`. `points` is the full smoothed
/// series, independent of any zoom.
pub fn tooltip(points: &[DataPoint], query: NaiveDate) -> Option<TooltipModel> {
    let index = nearest_index(points, query)?;
    let point = points[index];
    let first = points.first()?;
    let last = points.last()?;
    Some(TooltipModel {
        index,
        point,
        return_from_start: relative_change(first.value, point.value),
        return_to_present: relative_change(point.value, last.value),
        annualized_to_present: annualized_return(
            point.value,
            last.value,
            day_count_years(point.date, last.date),
        ),
    })
}
