// File: crates/index-chart-core/src/regression.rs
// Summary: Ordinary-least-squares trend line over (index, value) pairs.

use crate::series::DataPoint;

/// Fitted line `y = slope * i + intercept` over point indices.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LineFit {
    pub slope: f64,
    pub intercept: f64,
}

impl LineFit {
    #[inline]
    pub fn at(&self, i: usize) -> f64 {
        self.slope * i as f64 + self.intercept
    }
}

/// Closed-form OLS over `(i, ys[i])`. `None` with fewer than two samples.
pub fn least_squares(ys: &[f64]) -> Option<LineFit> {
    let n = ys.len();
    if n < 2 {
        return None;
    }
    let nf = n as f64;
    let x_mean = (nf - 1.0) / 2.0;
    let y_mean = ys.iter().sum::<f64>() / nf;
    let mut num = 0.0;
    let mut den = 0.0;
    for (i, &y) in ys.iter().enumerate() {
        let dx = i as f64 - x_mean;
        num += dx * (y - y_mean);
        den += dx * dx;
    }
    if den.abs() < 1e-12 {
        return None;
    }
    let slope = num / den;
    Some(LineFit { slope, intercept: y_mean - slope * x_mean })
}

/// Trend line with the same dates as `points`.
///
/// Log mode regresses `ln(max(value, 1))` and exponentiates the fit back;
/// linear mode regresses raw values. The chart only requests the log form.
pub fn fit(points: &[DataPoint], log_scale: bool) -> Option<Vec<DataPoint>> {
    let ys: Vec<f64> = if log_scale {
        points.iter().map(|p| p.value.max(1.0).ln()).collect()
    } else {
        points.iter().map(|p| p.value).collect()
    };
    let line = least_squares(&ys)?;
    let out = points
        .iter()
        .enumerate()
        .map(|(i, p)| {
            let y = line.at(i);
            DataPoint { date: p.date, value: if log_scale { y.exp() } else { y } }
        })
        .collect();
    Some(out)
}
