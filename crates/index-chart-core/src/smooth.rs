// File: crates/index-chart-core/src/smooth.rs
// Summary: Trailing moving-average smoother over a Series.

use crate::series::{DataPoint, Series, SmoothedSeries};

/// Upper bound of the smoothing control exposed by hosts, in months.
pub const SMOOTHING_SLIDER_MAX: usize = 24;

/// Clamp a requested window into `[1, len]`. An empty series keeps 1.
pub fn clamp_window(window: usize, len: usize) -> usize {
    window.clamp(1, len.max(1))
}

/// Causal moving average: point `i` averages `[max(0, i - window + 1), i]`,
/// so the first `window - 1` points average over fewer samples.
///
/// `window <= 1` returns the source values untouched.
pub fn smooth(series: &Series, window: usize) -> SmoothedSeries {
    let window = clamp_window(window, series.len());
    if window == 1 {
        return series.clone();
    }
    let data = series.points();
    let mut out = Vec::with_capacity(data.len());
    for (i, p) in data.iter().enumerate() {
        let start = (i + 1).saturating_sub(window);
        let slice = &data[start..=i];
        let avg = slice.iter().map(|d| d.value).sum::<f64>() / slice.len() as f64;
        out.push(DataPoint { date: p.date, value: avg });
    }
    Series::from_sorted(out)
}

/// Slider caption, e.g. "Smoothing Window: 3 months".
pub fn window_label(window: usize) -> String {
    let unit = if window > 1 { "months" } else { "month" };
    format!("Smoothing Window: {window} {unit}")
}
