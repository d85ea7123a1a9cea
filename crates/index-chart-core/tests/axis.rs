// File: crates/index-chart-core/tests/axis.rs
// Purpose: Tick steps, tick-label formatting and tick placement for both axes.

use chrono::NaiveDate;
use index_chart_core::axis::{format_grouped, format_si, nice_step, time_ticks, value_ticks};
use index_chart_core::{ScaleKind, TimeScale, ValueDomain, ValueScale};

fn month(y: i32, m: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, 1).unwrap()
}

fn labels(ticks: &[index_chart_core::axis::Tick]) -> Vec<&str> {
    ticks.iter().map(|t| t.label.as_str()).collect()
}

#[test]
fn nice_steps_follow_one_two_five() {
    assert!((nice_step(100.0, 10) - 10.0).abs() < 1e-12);
    assert!((nice_step(95.0, 10) - 10.0).abs() < 1e-12);
    assert!((nice_step(100.0, 5) - 20.0).abs() < 1e-12);
    assert!((nice_step(2.3, 10) - 0.2).abs() < 1e-12);
    assert_eq!(nice_step(0.0, 5), 1.0);
}

#[test]
fn grouped_labels() {
    assert_eq!(format_grouped(1_234_567.0, 0), "1,234,567");
    assert_eq!(format_grouped(12_345.5, 1), "12,345.5");
    assert_eq!(format_grouped(999.0, 0), "999");
    assert_eq!(format_grouped(-1_234.0, 0), "-1,234");
    // no negative zero
    assert_eq!(format_grouped(-0.0001, 2), "0.00");
}

#[test]
fn si_labels() {
    assert_eq!(format_si(500.0), "500");
    assert_eq!(format_si(1_000.0), "1k");
    assert_eq!(format_si(20_000.0), "20k");
    assert_eq!(format_si(3_000_000.0), "3M");
    assert_eq!(format_si(0.5), "0.5");
}

#[test]
fn linear_value_ticks_cover_the_domain() {
    let scale = ValueScale::new(ScaleKind::Linear, ValueDomain::new(0.0, 100.0), 0.0, 400.0);
    let ticks = value_ticks(&scale, 5);
    assert_eq!(labels(&ticks), vec!["0", "20", "40", "60", "80", "100"]);
    assert!((ticks[0].px - 400.0).abs() < 1e-3);
    assert!(ticks.last().unwrap().px.abs() < 1e-3);
}

#[test]
fn symlog_value_ticks_use_si_labels() {
    let scale = ValueScale::new(ScaleKind::SymLog, ValueDomain::new(100.0, 10_000.0), 0.0, 400.0);
    let ticks = value_ticks(&scale, 10);
    assert_eq!(labels(&ticks), vec!["100", "200", "500", "1k", "2k", "5k", "10k"]);
    // larger values sit higher on the surface
    assert!(ticks.windows(2).all(|w| w[1].px < w[0].px));
}

#[test]
fn long_windows_tick_whole_years() {
    let scale = TimeScale::new(50.0, 980.0, month(2000, 1), month(2020, 1));
    let ticks = time_ticks(&scale, 10);
    assert_eq!(ticks.len(), 11);
    assert_eq!(ticks[0].label, "2000");
    assert_eq!(ticks[1].label, "2002");
    assert_eq!(ticks.last().unwrap().label, "2020");
    assert!((ticks[0].px - 50.0).abs() < 1e-3);
}

#[test]
fn short_windows_tick_months() {
    let scale = TimeScale::new(0.0, 1100.0, month(2020, 1), month(2020, 12));
    let ticks = time_ticks(&scale, 12);
    assert_eq!(ticks.len(), 12);
    assert_eq!(ticks[0].label, "2020");
    assert_eq!(ticks[1].label, "Feb");
    assert_eq!(ticks[11].label, "Dec");
}
