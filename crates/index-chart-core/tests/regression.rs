// File: crates/index-chart-core/tests/regression.rs
// Purpose: Least-squares trend line in log and linear space.

use chrono::NaiveDate;
use index_chart_core::regression::{fit, least_squares};
use index_chart_core::DataPoint;

fn points<F: Fn(usize) -> f64>(n: usize, f: F) -> Vec<DataPoint> {
    (0..n)
        .map(|i| DataPoint::new(NaiveDate::from_ymd_opt(1990 + (i / 12) as i32, (i % 12) as u32 + 1, 1).unwrap(), f(i)))
        .collect()
}

#[test]
fn closed_form_slope_and_intercept() {
    let line = least_squares(&[1.0, 3.0, 5.0, 7.0]).unwrap();
    assert!((line.slope - 2.0).abs() < 1e-12);
    assert!((line.intercept - 1.0).abs() < 1e-12);
    assert!(least_squares(&[4.0]).is_none());
    assert!(least_squares(&[]).is_none());
}

#[test]
fn log_fit_recovers_exponential_growth() {
    let pts = points(120, |i| 100.0 * 1.01f64.powi(i as i32));
    let trend = fit(&pts, true).unwrap();
    assert_eq!(trend.len(), pts.len());
    for (t, p) in trend.iter().zip(&pts) {
        assert_eq!(t.date, p.date);
        assert!((t.value / p.value - 1.0).abs() < 1e-9);
    }
}

#[test]
fn log_fit_clamps_values_below_one() {
    let pts = points(5, |i| if i % 2 == 0 { 0.0 } else { -3.0 });
    let trend = fit(&pts, true).unwrap();
    assert!(trend.iter().all(|p| (p.value - 1.0).abs() < 1e-12));
}

#[test]
fn linear_fit_is_not_exponentiated() {
    let pts = points(10, |i| 5.0 + 2.0 * i as f64);
    let trend = fit(&pts, false).unwrap();
    assert!((trend[9].value - 23.0).abs() < 1e-9);
}

#[test]
fn too_few_points_yield_no_trend() {
    assert!(fit(&points(1, |_| 10.0), true).is_none());
    assert!(fit(&[], true).is_none());
}
