use chrono::NaiveDate;
use criterion::{black_box, criterion_group, criterion_main, Criterion};
use index_chart_core::{compute_frame, DataPoint, RenderConfig, Series, ViewState};

fn gen_monthly(n: usize) -> Series {
    let pts = (0..n)
        .map(|i| {
            let date = NaiveDate::from_ymd_opt(1900 + (i / 12) as i32, (i % 12) as u32 + 1, 1).unwrap();
            DataPoint::new(date, 100.0 * (0.004 * i as f64).exp())
        })
        .collect();
    Series::try_new(pts).unwrap()
}

fn bench_frame(c: &mut Criterion) {
    let series = gen_monthly(1_500);
    let config = RenderConfig::default();
    let full = ViewState { log_scale: true, show_trendline: true, smoothing_window: 12, ..ViewState::default() };
    let brushed = full.clone().with_selection(
        NaiveDate::from_ymd_opt(1980, 1, 1).unwrap(),
        NaiveDate::from_ymd_opt(2010, 1, 1).unwrap(),
    );

    c.bench_function("frame_full", |b| b.iter(|| black_box(compute_frame(&series, &full, &config))));
    c.bench_function("frame_brushed", |b| b.iter(|| black_box(compute_frame(&series, &brushed, &config))));
}

criterion_group!(benches, bench_frame);
criterion_main!(benches);
