// File: crates/index-chart-core/tests/scale.rs
// Purpose: Value domains (padding, symlog clamping, zoomed fallback) and pixel mappings.

use chrono::NaiveDate;
use index_chart_core::scale::{extent, plotted_value, PADDING_RATIO, SYMLOG_MIN_RATIO};
use index_chart_core::{DataPoint, ScaleKind, ScaleManager, TimeScale, ValueDomain, ValueScale};

fn points(values: &[f64]) -> Vec<DataPoint> {
    values
        .iter()
        .enumerate()
        .map(|(i, &v)| DataPoint::new(NaiveDate::from_ymd_opt(2001, i as u32 % 12 + 1, 1).unwrap(), v))
        .collect()
}

#[test]
fn extent_bounds_every_value() {
    let values = [5.0, -3.0, 12.5, 7.0, 0.0];
    let d = extent(values).unwrap();
    assert_eq!(d, ValueDomain::new(-3.0, 12.5));
    assert!(values.iter().all(|&v| d.min <= v && v <= d.max));
    assert!(extent(std::iter::empty()).is_none());
    assert!(extent([f64::NAN]).is_none());
}

#[test]
fn linear_domain_is_padded_five_percent() {
    let pts = points(&[100.0, 150.0, 200.0]);
    let (kind, d) = ScaleManager::new(false).domain(&pts).unwrap();
    assert_eq!(kind, ScaleKind::Linear);
    assert!((PADDING_RATIO - 0.05).abs() < 1e-12);
    assert!((d.min - 95.0).abs() < 1e-9);
    assert!((d.max - 205.0).abs() < 1e-9);
}

#[test]
fn symlog_substitutes_non_positive_values_with_one() {
    let pts = points(&[-5.0, 0.0, 10.0, 100.0]);
    let (kind, d) = ScaleManager::new(true).domain(&pts).unwrap();
    assert_eq!(kind, ScaleKind::SymLog);
    assert_eq!(d, ValueDomain::new(1.0, 100.0));
    assert_eq!(plotted_value(-5.0, ScaleKind::SymLog), 1.0);
    assert_eq!(plotted_value(-5.0, ScaleKind::Linear), -5.0);
}

#[test]
fn zoomed_low_volatility_window_falls_back_to_linear() {
    let manager = ScaleManager::new(true);
    let flat = points(&[100.0, 110.0, 120.0]);
    assert!(120.0 / 100.0 < SYMLOG_MIN_RATIO);
    let (kind, d) = manager.rescale(&flat).unwrap();
    assert_eq!(kind, ScaleKind::Linear);
    assert!((d.min - 99.0).abs() < 1e-9);
    assert!((d.max - 121.0).abs() < 1e-9);

    let steep = points(&[100.0, 130.0]);
    let (kind, d) = manager.rescale(&steep).unwrap();
    assert_eq!(kind, ScaleKind::SymLog);
    assert_eq!(d, ValueDomain::new(100.0, 130.0));
}

#[test]
fn linear_mode_never_switches_on_rescale() {
    let manager = ScaleManager::new(false);
    let (kind, _) = manager.rescale(&points(&[1.0, 1000.0])).unwrap();
    assert_eq!(kind, ScaleKind::Linear);
    assert!(manager.rescale(&[]).is_none());
}

#[test]
fn value_scale_maps_domain_to_pixel_range() {
    for kind in [ScaleKind::Linear, ScaleKind::SymLog] {
        let s = ValueScale::new(kind, ValueDomain::new(10.0, 1000.0), 20.0, 390.0);
        assert!((s.to_px(10.0) - 390.0).abs() < 1e-3);
        assert!((s.to_px(1000.0) - 20.0).abs() < 1e-3);
        let mid = s.from_px(200.0);
        assert!((s.to_px(mid) - 200.0).abs() < 1e-2);
    }
    // symlog lifts the low end: 100 sits near the middle instead of near the bottom
    let log = ValueScale::new(ScaleKind::SymLog, ValueDomain::new(10.0, 1000.0), 0.0, 100.0);
    let lin = ValueScale::new(ScaleKind::Linear, ValueDomain::new(10.0, 1000.0), 0.0, 100.0);
    assert!(log.to_px(100.0) < 60.0);
    assert!(lin.to_px(100.0) > 85.0);
}

#[test]
fn flat_domain_does_not_divide_by_zero() {
    let s = ValueScale::new(ScaleKind::Linear, ValueDomain::new(5.0, 5.0), 0.0, 100.0);
    assert!(s.to_px(5.0).is_finite());
}

#[test]
fn time_scale_round_trips_dates() {
    let start = NaiveDate::from_ymd_opt(1990, 1, 1).unwrap();
    let end = NaiveDate::from_ymd_opt(2020, 1, 1).unwrap();
    let ts = TimeScale::new(50.0, 980.0, start, end);
    assert_eq!(ts.to_px(start), 50.0);
    assert_eq!(ts.to_px(end), 980.0);
    let d = NaiveDate::from_ymd_opt(2008, 9, 1).unwrap();
    assert_eq!(ts.from_px(ts.to_px(d)), d);
}
