// File: crates/index-chart-core/src/scale.rs
// Summary: Time (X) and value (Y) scale transforms plus the domain rules for both panes.

use chrono::{Duration, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::series::DataPoint;

/// Fraction of the value span added below the minimum and above the maximum in linear mode.
pub const PADDING_RATIO: f64 = 0.05;
/// A zoomed window keeps the symlog scale only when `max / min` reaches this ratio.
pub const SYMLOG_MIN_RATIO: f64 = 1.3;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ScaleKind {
    Linear,
    SymLog,
}

/// Symmetric log with unit constant: `sign(v) * ln(1 + |v|)`.
#[inline]
pub fn symlog(v: f64) -> f64 {
    v.signum() * v.abs().ln_1p()
}

#[inline]
pub fn symlog_inv(t: f64) -> f64 {
    t.signum() * t.abs().exp_m1()
}

/// Value actually plotted for `v` under `kind`: non-positive values become 1 under symlog.
#[inline]
pub fn plotted_value(v: f64, kind: ScaleKind) -> f64 {
    match kind {
        ScaleKind::SymLog if v <= 0.0 => 1.0,
        _ => v,
    }
}

/// Closed value interval `[min, max]`.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct ValueDomain {
    pub min: f64,
    pub max: f64,
}

impl ValueDomain {
    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }
    pub fn span(&self) -> f64 { self.max - self.min }

    /// Widen by `ratio * span` on both ends.
    pub fn padded(&self, ratio: f64) -> Self {
        let pad = self.span() * ratio;
        Self { min: self.min - pad, max: self.max + pad }
    }
}

/// Min/max of finite values, `None` when there are none.
pub fn extent<I: IntoIterator<Item = f64>>(values: I) -> Option<ValueDomain> {
    let mut min = f64::INFINITY;
    let mut max = f64::NEG_INFINITY;
    for v in values.into_iter().filter(|v| v.is_finite()) {
        min = min.min(v);
        max = max.max(v);
    }
    if min.is_finite() && max.is_finite() { Some(ValueDomain { min, max }) } else { None }
}

/// Horizontal calendar scale: linear in days between `start` and `end`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TimeScale {
    pub left_px: f32,
    pub right_px: f32,
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl TimeScale {
    pub fn new(left_px: f32, right_px: f32, start: NaiveDate, end: NaiveDate) -> Self {
        let (start, end) = if start <= end { (start, end) } else { (end, start) };
        Self { left_px, right_px, start, end }
    }

    fn span_days(&self) -> f64 {
        ((self.end - self.start).num_days() as f64).max(1e-9)
    }

    #[inline]
    pub fn to_px(&self, date: NaiveDate) -> f32 {
        let days = (date - self.start).num_days() as f64;
        self.left_px + (days / self.span_days()) as f32 * (self.right_px - self.left_px)
    }

    /// Invert a pixel position to the nearest whole day.
    pub fn from_px(&self, px: f32) -> NaiveDate {
        let width = (self.right_px - self.left_px).max(1e-6);
        let frac = ((px - self.left_px) / width) as f64;
        let days = (frac * self.span_days()).round() as i64;
        self.start + Duration::days(days)
    }
}

/// Vertical value scale mapping a domain to `[top, bottom]` pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ValueScale {
    pub top_px: f32,
    pub bottom_px: f32,
    pub domain: ValueDomain,
    pub kind: ScaleKind,
    // domain endpoints after the transform
    t_min: f64,
    t_max: f64,
}

impl ValueScale {
    pub fn new(kind: ScaleKind, domain: ValueDomain, top_px: f32, bottom_px: f32) -> Self {
        let mut domain = domain;
        if domain.span().abs() < 1e-12 {
            domain.max = domain.min + 1.0;
        }
        let (t_min, t_max) = match kind {
            ScaleKind::Linear => (domain.min, domain.max),
            ScaleKind::SymLog => (symlog(domain.min), symlog(domain.max)),
        };
        Self { top_px, bottom_px, domain, kind, t_min, t_max }
    }

    fn transform(&self, v: f64) -> f64 {
        match self.kind {
            ScaleKind::Linear => v,
            ScaleKind::SymLog => symlog(plotted_value(v, ScaleKind::SymLog)),
        }
    }

    #[inline]
    pub fn to_px(&self, v: f64) -> f32 {
        let span = (self.t_max - self.t_min).max(1e-12);
        let frac = (self.transform(v) - self.t_min) / span;
        self.bottom_px - frac as f32 * (self.bottom_px - self.top_px)
    }

    #[inline]
    pub fn from_px(&self, py: f32) -> f64 {
        let span = (self.t_max - self.t_min).max(1e-12);
        let frac = ((self.bottom_px - py) / (self.bottom_px - self.top_px).max(1e-6)) as f64;
        let t = self.t_min + frac * span;
        match self.kind {
            ScaleKind::Linear => t,
            ScaleKind::SymLog => symlog_inv(t),
        }
    }
}

/// Builds value domains for a (sub-)series under the current scale mode.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ScaleManager {
    pub log_scale: bool,
}

impl ScaleManager {
    pub const fn new(log_scale: bool) -> Self {
        Self { log_scale }
    }

    /// Scale kind of the global (unzoomed) view.
    pub fn kind(&self) -> ScaleKind {
        if self.log_scale { ScaleKind::SymLog } else { ScaleKind::Linear }
    }

    /// Domain for `points` under `kind`: padded extent in linear mode,
    /// plain extent of the clamped values in symlog mode.
    pub fn domain_for(kind: ScaleKind, points: &[DataPoint]) -> Option<ValueDomain> {
        match kind {
            ScaleKind::Linear => extent(points.iter().map(|p| p.value)).map(|d| d.padded(PADDING_RATIO)),
            ScaleKind::SymLog => extent(points.iter().map(|p| plotted_value(p.value, kind))),
        }
    }

    /// Global domain, used by the overview pane and the unzoomed detail pane.
    pub fn domain(&self, points: &[DataPoint]) -> Option<(ScaleKind, ValueDomain)> {
        let kind = self.kind();
        Self::domain_for(kind, points).map(|d| (kind, d))
    }

    /// Domain for a brushed window. In log mode a low-volatility window
    /// (`max / min < SYMLOG_MIN_RATIO`) falls back to linear.
    pub fn rescale(&self, points: &[DataPoint]) -> Option<(ScaleKind, ValueDomain)> {
        if !self.log_scale {
            return self.domain(points);
        }
        let clamped = extent(points.iter().map(|p| plotted_value(p.value, ScaleKind::SymLog)))?;
        if clamped.max / clamped.min >= SYMLOG_MIN_RATIO {
            Some((ScaleKind::SymLog, clamped))
        } else {
            Self::domain_for(ScaleKind::Linear, points).map(|d| (ScaleKind::Linear, d))
        }
    }
}
