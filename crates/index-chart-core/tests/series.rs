// File: crates/index-chart-core/tests/series.rs
// Purpose: Feed row parsing, ordering checks and inclusive range slicing.

use chrono::NaiveDate;
use index_chart_core::series::{format_month_year, parse_month_year};
use index_chart_core::{DataPoint, Series, SeriesError};

fn month(y: i32, m: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, 1).unwrap()
}

#[test]
fn parses_month_year_dates() {
    assert_eq!(parse_month_year("03/1980"), Some(month(1980, 3)));
    assert_eq!(parse_month_year(" 12/2024 "), Some(month(2024, 12)));
    assert_eq!(parse_month_year("13/2000"), None);
    assert_eq!(parse_month_year("2000-01"), None);
    assert_eq!(format_month_year(month(1987, 10)), "10/1987");
}

#[test]
fn builds_series_from_rows() {
    let s = Series::from_rows([("01/1990", "100"), ("02/1990", " 110.5"), ("03/1990", "-2")]).unwrap();
    assert_eq!(s.len(), 3);
    assert_eq!(s.points()[1], DataPoint::new(month(1990, 2), 110.5));
    assert_eq!(s.last().unwrap().value, -2.0);
}

#[test]
fn reports_bad_rows() {
    let err = Series::from_rows([("01/1990", "100"), ("1990", "1")]).unwrap_err();
    assert!(matches!(err, SeriesError::InvalidDate { row: 2, .. }));

    let err = Series::from_rows([("01/1990", "abc")]).unwrap_err();
    assert!(matches!(err, SeriesError::InvalidValue { row: 1, .. }));
    assert!(err.to_string().contains("abc"));
    assert!(err.to_string().starts_with("row 1:"));

    let err = Series::from_rows([("02/1990", "1"), ("01/1990", "2")]).unwrap_err();
    assert!(matches!(err, SeriesError::OutOfOrder { row: 2, .. }));
}

#[test]
fn range_is_inclusive_and_order_insensitive() {
    let s = Series::from_rows([("01/1990", "1"), ("02/1990", "2"), ("03/1990", "3"), ("04/1990", "4")]).unwrap();
    let r: Vec<f64> = s.range(month(1990, 2), month(1990, 3)).iter().map(|p| p.value).collect();
    assert_eq!(r, vec![2.0, 3.0]);
    assert_eq!(s.range(month(1990, 3), month(1990, 2)).len(), 2);
    assert!(s.range(month(1991, 1), month(1992, 1)).is_empty());

    let wide: Vec<f64> = s.range_with_neighbors(month(1990, 2), month(1990, 3)).iter().map(|p| p.value).collect();
    assert_eq!(wide, vec![1.0, 2.0, 3.0, 4.0]);
}
