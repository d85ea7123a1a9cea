// File: crates/demo/src/main.rs
// Summary: Demo loads the monthly index CSV and renders focus/context frames (full and brushed) to PNG.

use std::path::{Path, PathBuf};
use std::str::FromStr;

use anyhow::{Context, Result};
use index_chart_core::series::{parse_month_year, DATE_COLUMN, VALUE_COLUMN};
use index_chart_core::smooth::{window_label, SMOOTHING_SLIDER_MAX};
use index_chart_core::{CagrResult, Chart, EventId, RenderConfig, Series, Theme, ViewState};

const LOG_ENV: &str = "INDEX_CHART_LOG";

struct Args {
    input: PathBuf,
    view_file: Option<PathBuf>,
    dark: bool,
    hover: Option<String>,
    overrides: Vec<Override>,
}

enum Override {
    Log,
    Window(usize),
    Trend,
    NoEvents,
    Highlight(EventId),
    From(String),
    To(String),
}

fn main() -> Result<()> {
    init_logger()?;
    let args = parse_args(std::env::args().skip(1))?;

    let mut view = match &args.view_file {
        Some(path) => load_view(path)?,
        None => ViewState::default(),
    };
    apply_overrides(&mut view, &args.overrides)?;
    log::info!("{}", window_label(view.smoothing_window));
    for id in &view.event_filters {
        log::info!("Highlighting {}", id.name());
    }

    let series = load_series_csv(&args.input)
        .with_context(|| format!("failed to load CSV '{}'", args.input.display()))?;
    if series.is_empty() {
        anyhow::bail!("no rows loaded from {}", args.input.display());
    }
    log::info!("Loaded {} monthly points from {}", series.len(), args.input.display());

    let config = RenderConfig { theme: Theme::for_mode(args.dark), ..RenderConfig::default() };
    log::debug!("theme: {}", config.theme.name);
    let mut chart = Chart::new(series, config);

    // 1) Whole series, the view as configured minus any brush.
    let full_view = ViewState { selected_domain: None, ..view.clone() };
    let full = chart.frame(&full_view);
    report_cagr("full range", full.cagr.as_ref());
    let out_full = out_name(&args.input, "full");
    full.render_to_png(&out_full)?;
    println!("Wrote {}", out_full.display());

    // 2) Brushed window, if any.
    let mut frame = if view.selected_domain.is_some() {
        let brushed = chart.frame(&view);
        report_cagr("selection", brushed.cagr.as_ref());
        brushed
    } else {
        full
    };

    // 3) Optional hover overlay on the last frame.
    if let Some(raw) = &args.hover {
        let date = parse_month_year(raw).with_context(|| format!("--hover expects MM/YYYY, got {raw:?}"))?;
        match frame.set_hover(chart.smoothed(), date) {
            Some(tip) => {
                for line in tip.lines() {
                    println!("  {line}");
                }
            }
            None => log::warn!("no point to hover at {raw}"),
        }
    }

    if view.selected_domain.is_some() || frame.hover.is_some() {
        let out = out_name(&args.input, "focus");
        frame.render_to_png(&out)?;
        println!("Wrote {}", out.display());
    }
    Ok(())
}

fn init_logger() -> Result<()> {
    let level = match std::env::var(LOG_ENV) {
        Ok(raw) => log::LevelFilter::from_str(&raw).with_context(|| format!("invalid {LOG_ENV} level {raw:?}"))?,
        Err(_) => log::LevelFilter::Info,
    };
    fern::Dispatch::new()
        .format(|out, message, record| {
            out.finish(format_args!("[{}] {}: {}", record.level(), record.target(), message))
        })
        .level(level)
        .chain(std::io::stderr())
        .apply()?;
    Ok(())
}

fn parse_args(mut it: impl Iterator<Item = String>) -> Result<Args> {
    let mut args = Args {
        input: PathBuf::from("chart.csv"),
        view_file: None,
        dark: false,
        hover: None,
        overrides: Vec::new(),
    };
    while let Some(arg) = it.next() {
        match arg.as_str() {
            "--view" => args.view_file = Some(PathBuf::from(next_value(&mut it, "--view")?)),
            "--dark" => args.dark = true,
            "--hover" => args.hover = Some(next_value(&mut it, "--hover")?),
            "--log" => args.overrides.push(Override::Log),
            "--trend" => args.overrides.push(Override::Trend),
            "--no-events" => args.overrides.push(Override::NoEvents),
            "--window" => {
                let raw = next_value(&mut it, "--window")?;
                let n = raw.parse::<usize>().with_context(|| format!("--window expects a number, got {raw:?}"))?;
                args.overrides.push(Override::Window(n));
            }
            "--highlight" => {
                let raw = next_value(&mut it, "--highlight")?;
                let id = EventId::from_slug(&raw).with_context(|| {
                    let known: Vec<_> = EventId::ALL.iter().map(|id| format!("{} ({})", id.slug(), id.name())).collect();
                    format!("unknown event {raw:?}; expected one of {}", known.join(", "))
                })?;
                args.overrides.push(Override::Highlight(id));
            }
            "--from" => args.overrides.push(Override::From(next_value(&mut it, "--from")?)),
            "--to" => args.overrides.push(Override::To(next_value(&mut it, "--to")?)),
            flag if flag.starts_with("--") => anyhow::bail!("unknown flag {flag}"),
            path => args.input = PathBuf::from(path),
        }
    }
    Ok(args)
}

fn next_value(it: &mut impl Iterator<Item = String>, flag: &str) -> Result<String> {
    it.next().with_context(|| format!("{flag} needs a value"))
}

fn apply_overrides(view: &mut ViewState, overrides: &[Override]) -> Result<()> {
    let mut from = None;
    let mut to = None;
    for o in overrides {
        match o {
            Override::Log => view.log_scale = true,
            Override::Trend => view.show_trendline = true,
            Override::NoEvents => view.show_events = false,
            Override::Window(n) => {
                if *n > SMOOTHING_SLIDER_MAX {
                    log::warn!("smoothing window {n} is above the slider range (1-{SMOOTHING_SLIDER_MAX})");
                }
                view.smoothing_window = *n;
            }
            Override::Highlight(id) => {
                view.event_filters.insert(*id);
            }
            Override::From(raw) => from = Some(parse_bound(raw, "--from")?),
            Override::To(raw) => to = Some(parse_bound(raw, "--to")?),
        }
    }
    if from.is_some() || to.is_some() {
        let (start, end) = view.selected_domain.unzip();
        match (from.or(start), to.or(end)) {
            (Some(s), Some(e)) => view.selected_domain = Some((s, e)),
            _ => anyhow::bail!("a selection needs both --from and --to"),
        }
    }
    Ok(())
}

fn parse_bound(raw: &str, flag: &str) -> Result<chrono::NaiveDate> {
    parse_month_year(raw).with_context(|| format!("{flag} expects MM/YYYY, got {raw:?}"))
}

fn load_view(path: &Path) -> Result<ViewState> {
    let text = std::fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
    serde_json::from_str(&text).with_context(|| format!("parsing view state {}", path.display()))
}

/// Load the `Date` / `MSCI World` columns into a Series.
fn load_series_csv(path: &Path) -> Result<Series> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_path(path)
        .with_context(|| format!("opening {}", path.display()))?;

    let headers = rdr.headers()?.clone();
    log::debug!("Headers: {:?}", headers);
    let column = |name: &str| headers.iter().position(|h| h.eq_ignore_ascii_case(name));
    let i_date = column(DATE_COLUMN).with_context(|| format!("missing column {DATE_COLUMN:?}"))?;
    let i_value = column(VALUE_COLUMN).with_context(|| format!("missing column {VALUE_COLUMN:?}"))?;

    let mut rows = Vec::new();
    for rec in rdr.records() {
        let rec = rec?;
        match (rec.get(i_date), rec.get(i_value)) {
            (Some(d), Some(v)) if !d.is_empty() && !v.is_empty() => rows.push((d.to_string(), v.to_string())),
            _ => log::warn!("skipping incomplete row {:?}", rec.position().map(|p| p.line())),
        }
    }
    Ok(Series::from_rows(rows.iter().map(|(d, v)| (d.as_str(), v.as_str())))?)
}

/// Produce output file name like target/out/index_<stem>_<suffix>.png
fn out_name(input: &Path, suffix: &str) -> PathBuf {
    let stem = input.file_stem().and_then(|s| s.to_str()).unwrap_or("chart");
    let mut out = PathBuf::from("target/out");
    out.push(format!("index_{stem}_{suffix}.png"));
    out
}

fn report_cagr(what: &str, cagr: Option<&CagrResult>) {
    match cagr {
        Some(c) => println!(
            "CAGR ({what}): {:+.2}% p.a. over {:.2} years ({} {:.2} -> {} {:.2}), total {:+.1}%",
            c.cagr,
            c.years,
            c.start_date.format("%m/%Y"),
            c.start_value,
            c.end_date.format("%m/%Y"),
            c.end_value,
            c.total_return
        ),
        None => println!("CAGR ({what}): undefined for this range"),
    }
}
