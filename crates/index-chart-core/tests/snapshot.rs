// File: crates/index-chart-core/tests/snapshot.rs
// Purpose: Golden snapshot harness with bless flow.
// Behavior:
// - Renders a deterministic focus/context frame to PNG bytes (labels off).
// - If env UPDATE_SNAPSHOTS=1, (re)writes the snapshot file.
// - Else, if snapshot exists, compares decoded pixels for exact match.
// - Else, logs a note and returns (skips) without failing to ease first run.

use chrono::NaiveDate;
use index_chart_core::{compute_frame, DataPoint, RenderConfig, Series, ViewState};

fn render_bytes() -> Vec<u8> {
    let pts = (0..20 * 12)
        .map(|i| {
            let v = 100.0 + i as f64 * 1.5 + 25.0 * (i as f64 / 11.0).sin();
            DataPoint::new(NaiveDate::from_ymd_opt(2000 + i / 12, (i % 12) as u32 + 1, 1).unwrap(), v)
        })
        .collect();
    let series = Series::try_new(pts).expect("ordered series");

    let view = ViewState { smoothing_window: 3, ..ViewState::default() }.with_selection(
        NaiveDate::from_ymd_opt(2006, 1, 1).unwrap(),
        NaiveDate::from_ymd_opt(2014, 1, 1).unwrap(),
    );
    let config = RenderConfig { draw_labels: false, ..RenderConfig::default() };
    compute_frame(&series, &view, &config).render_to_png_bytes().expect("render bytes")
}

#[test]
fn golden_focus_context_chart() {
    let bytes = render_bytes();
    let snap_dir = std::path::PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/__snapshots__");
    let snap_path = snap_dir.join("focus_context.png");

    let update = std::env::var("UPDATE_SNAPSHOTS").ok().map(|v| v == "1" || v.eq_ignore_ascii_case("true"))
        .unwrap_or(false);

    if update {
        std::fs::create_dir_all(&snap_dir).expect("create snapshots dir");
        std::fs::write(&snap_path, &bytes).expect("write snapshot");
        eprintln!("[snapshot] Updated {} ({} bytes)", snap_path.display(), bytes.len());
        return;
    }

    if snap_path.exists() {
        let want = std::fs::read(&snap_path).expect("read snapshot");
        // Compare decoded pixel buffers to avoid PNG encoder variance
        let got_img = image::load_from_memory(&bytes).expect("decode got").to_rgba8();
        let want_img = image::load_from_memory(&want).expect("decode want").to_rgba8();
        assert_eq!(got_img.as_raw(), want_img.as_raw(), "rendered pixels differ from golden snapshot: {}", snap_path.display());
    } else {
        eprintln!("[snapshot] Missing snapshot {}; set UPDATE_SNAPSHOTS=1 to bless.", snap_path.display());
    }
}
