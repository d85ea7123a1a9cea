// File: crates/index-chart-core/tests/view.rs
// Purpose: ViewState snapshots as hosts exchange them (JSON), with defaults for missing fields.

use chrono::NaiveDate;
use index_chart_core::{EventId, ViewState};

#[test]
fn partial_json_falls_back_to_defaults() {
    let v: ViewState = serde_json::from_str(r#"{ "log_scale": true, "event_filters": ["covid-crash"] }"#).unwrap();
    assert!(v.log_scale);
    assert_eq!(v.smoothing_window, 1);
    assert!(v.show_events);
    assert!(v.event_filters.contains(&EventId::CovidCrash));
    assert!(v.selected_domain.is_none());
}

#[test]
fn snapshot_survives_json() {
    let start = NaiveDate::from_ymd_opt(2000, 1, 1).unwrap();
    let end = NaiveDate::from_ymd_opt(2010, 6, 1).unwrap();
    let mut v = ViewState { smoothing_window: 6, show_trendline: true, ..ViewState::default() }.with_selection(end, start);
    v.toggle_filter(EventId::RateHikes);

    let json = serde_json::to_string(&v).unwrap();
    let back: ViewState = serde_json::from_str(&json).unwrap();
    assert_eq!(back, v);
    assert_eq!(back.normalized_domain(), Some((start, end)));
}
