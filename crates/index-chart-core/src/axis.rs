// File: crates/index-chart-core/src/axis.rs
// Summary: Tick placement and labels for the calendar axis and both value-scale kinds.

use chrono::{Datelike, NaiveDate};

use crate::scale::{ScaleKind, TimeScale, ValueScale};

#[derive(Clone, Debug, PartialEq)]
pub struct Tick {
    /// Position along the axis in surface pixels.
    pub px: f32,
    pub label: String,
}

/// Round step of the 1/2/5 family for splitting `span` into about `count` parts.
pub fn nice_step(span: f64, count: usize) -> f64 {
    let raw = span.abs() / count.max(1) as f64;
    if !raw.is_finite() || raw <= 0.0 {
        return 1.0;
    }
    let power = 10f64.powf(raw.log10().floor());
    let err = raw / power;
    let factor = if err >= 7.07 {
        10.0
    } else if err >= 3.16 {
        5.0
    } else if err >= 1.41 {
        2.0
    } else {
        1.0
    };
    factor * power
}

/// Group thousands with commas: 12345.5 -> "12,345.5".
pub fn format_grouped(v: f64, decimals: usize) -> String {
    let s = format!("{:.*}", decimals, v.abs());
    let (int, frac) = match s.split_once('.') {
        Some((i, f)) => (i, Some(f)),
        None => (s.as_str(), None),
    };
    let mut grouped = String::with_capacity(int.len() + int.len() / 3);
    for (i, ch) in int.chars().enumerate() {
        if i > 0 && (int.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    let sign = if v < 0.0 && s.chars().any(|c| c.is_ascii_digit() && c != '0') { "-" } else { "" };
    match frac {
        Some(f) => format!("{sign}{grouped}.{f}"),
        None => format!("{sign}{grouped}"),
    }
}

/// One significant digit with an SI suffix: 500, 1k, 20k, 3M.
pub fn format_si(v: f64) -> String {
    const UNITS: [(f64, &str); 4] = [(1e12, "T"), (1e9, "G"), (1e6, "M"), (1e3, "k")];
    let a = v.abs();
    for (scale, unit) in UNITS {
        if a >= scale {
            return format!("{:.0}{unit}", v / scale);
        }
    }
    if a >= 1.0 || a == 0.0 {
        format!("{v:.0}")
    } else {
        format!("{v:.1}")
    }
}

fn linear_ticks(scale: &ValueScale, count: usize) -> Vec<Tick> {
    let d = scale.domain;
    let step = nice_step(d.span(), count);
    let decimals = if step >= 1.0 { 0 } else { (-step.log10().floor()) as usize };
    let first = (d.min / step).ceil() as i64;
    let last = (d.max / step).floor() as i64;
    (first..=last)
        .map(|k| {
            let v = k as f64 * step;
            Tick { px: scale.to_px(v), label: format_grouped(v, decimals) }
        })
        .collect()
}

fn symlog_ticks(scale: &ValueScale, count: usize) -> Vec<Tick> {
    let d = scale.domain;
    let lo = d.min.max(1.0);
    let hi = d.max.max(lo);
    let mut values = Vec::new();
    let mut power = 10f64.powf(lo.log10().floor());
    while power <= hi {
        for m in [1.0, 2.0, 5.0] {
            let v = m * power;
            if v >= lo && v <= hi {
                values.push(v);
            }
        }
        power *= 10.0;
    }
    // Too dense over a narrow window: thin out to the powers of ten, or fall
    // back to the linear picker when even those are scarce.
    if values.len() > count * 2 {
        values.retain(|v| (v.log10().fract()).abs() < 1e-9);
    }
    if values.len() < 2 {
        return linear_ticks(scale, count);
    }
    values
        .into_iter()
        .map(|v| Tick { px: scale.to_px(v), label: format_si(v) })
        .collect()
}

/// Ticks inside the scale's domain, about `count` of them.
pub fn value_ticks(scale: &ValueScale, count: usize) -> Vec<Tick> {
    match scale.kind {
        ScaleKind::Linear => linear_ticks(scale, count),
        ScaleKind::SymLog => symlog_ticks(scale, count),
    }
}

/// Calendar ticks: whole years at a 1/2/5/10/20-year step, or months when
/// the window is shorter than two years.
pub fn time_ticks(scale: &TimeScale, count: usize) -> Vec<Tick> {
    let months_span = (scale.end.year() - scale.start.year()) * 12
        + scale.end.month() as i32
        - scale.start.month() as i32;
    let count = count.max(1) as i32;
    let mut out = Vec::new();
    if months_span >= 24 {
        let years = months_span / 12;
        let step = [1, 2, 5, 10, 20, 50]
            .into_iter()
            .find(|s| years / s <= count)
            .unwrap_or(100);
        let mut y = scale.start.year() + (step - scale.start.year().rem_euclid(step)) % step;
        while let Some(date) = NaiveDate::from_ymd_opt(y, 1, 1) {
            if date > scale.end {
                break;
            }
            if date >= scale.start {
                out.push(Tick { px: scale.to_px(date), label: y.to_string() });
            }
            y += step;
        }
    } else {
        let step = [1, 2, 3, 6, 12]
            .into_iter()
            .find(|s| months_span.max(1) / s <= count)
            .unwrap_or(12);
        let mut m = scale.start.year() * 12 + scale.start.month0() as i32;
        if scale.start.day() != 1 {
            m += 1;
        }
        m += (step - m.rem_euclid(step)) % step;
        while let Some(date) = NaiveDate::from_ymd_opt(m.div_euclid(12), m.rem_euclid(12) as u32 + 1, 1) {
            if date > scale.end {
                break;
            }
            let label = if date.month() == 1 { date.year().to_string() } else { date.format("%b").to_string() };
            out.push(Tick { px: scale.to_px(date), label });
            m += step;
        }
    }
    out
}
