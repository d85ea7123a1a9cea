// File: crates/index-chart-core/src/frame.rs
// Summary: Pure frame computation: Series x ViewState x RenderConfig -> FrameModel in surface pixels.
// Notes:
// - Nothing here touches a drawing surface; `Chart` renders the model.
// - A later call fully supersedes an earlier one; no state is carried between frames.

use chrono::NaiveDate;

use crate::axis::{time_ticks, value_ticks, Tick};
use crate::brush::{recompute, BrushController, PixelSpan};
use crate::cagr::CagrResult;
use crate::events::{catalogue, clip_to_domain, visible_events, EventMarker};
use crate::geometry::PlotRect;
use crate::lookup::{tooltip, TooltipModel};
use crate::scale::{ScaleKind, ScaleManager, TimeScale, ValueDomain, ValueScale};
use crate::series::{DataPoint, Series};
use crate::smooth::smooth;
use crate::theme::Theme;
use crate::types::{Insets, HEIGHT, WIDTH};
use crate::view::ViewState;

pub const DEFAULT_TITLE: &str = "MSCI World Index (USD) with Major Financial Events";

/// Surface layout and palette. The theme is explicit; nothing reads a global mode.
#[derive(Clone, Debug, PartialEq)]
pub struct RenderConfig {
    pub width: i32,
    pub height: i32,
    pub focus_insets: Insets,
    pub context_insets: Insets,
    pub theme: Theme,
    /// Approximate tick counts.
    pub time_ticks: usize,
    pub value_ticks: usize,
    pub title: String,
    pub draw_labels: bool,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            width: WIDTH,
            height: HEIGHT,
            focus_insets: Insets::focus(),
            context_insets: Insets::context(),
            theme: Theme::default(),
            time_ticks: 10,
            value_ticks: 10,
            title: DEFAULT_TITLE.to_string(),
            draw_labels: true,
        }
    }
}

impl RenderConfig {
    pub fn focus_rect(&self) -> PlotRect {
        PlotRect::from_insets(self.width, self.height, &self.focus_insets)
    }
    pub fn context_rect(&self) -> PlotRect {
        PlotRect::from_insets(self.width, self.height, &self.context_insets)
    }
}

/// One plot area with its line and axes.
#[derive(Clone, Debug, PartialEq)]
pub struct Pane {
    pub rect: PlotRect,
    /// Polyline in surface pixels; may extend past `rect` and is clipped when drawn.
    pub path: Vec<(f32, f32)>,
    pub x_ticks: Vec<Tick>,
    pub y_ticks: Vec<Tick>,
    pub value_kind: ScaleKind,
    pub value_domain: Option<ValueDomain>,
    pub time_domain: Option<(NaiveDate, NaiveDate)>,
}

impl Pane {
    fn empty(rect: PlotRect, kind: ScaleKind) -> Self {
        Self {
            rect,
            path: Vec::new(),
            x_ticks: Vec::new(),
            y_ticks: Vec::new(),
            value_kind: kind,
            value_domain: None,
            time_domain: None,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct EventMark {
    pub x: f32,
    pub marker: EventMarker,
}

/// Crosshair plus tooltip text, positioned in the detail pane.
#[derive(Clone, Debug, PartialEq)]
pub struct HoverOverlay {
    pub x: f32,
    pub y: f32,
    pub tooltip: TooltipModel,
}

#[derive(Clone, Debug, PartialEq)]
pub struct FrameModel {
    pub width: i32,
    pub height: i32,
    pub theme: Theme,
    pub title: String,
    pub draw_labels: bool,
    pub focus: Pane,
    pub context: Pane,
    pub events: Vec<EventMark>,
    pub trend: Option<Vec<(f32, f32)>>,
    /// Brush rectangle over the overview pane.
    pub brush: Option<PixelSpan>,
    pub cagr: Option<CagrResult>,
    pub hover: Option<HoverOverlay>,
    focus_x: Option<TimeScale>,
    focus_y: Option<ValueScale>,
}

impl FrameModel {
    /// Blank frame: axes frame only, nothing plotted.
    pub fn empty(config: &RenderConfig, kind: ScaleKind) -> Self {
        Self {
            width: config.width,
            height: config.height,
            theme: config.theme,
            title: config.title.clone(),
            draw_labels: config.draw_labels,
            focus: Pane::empty(config.focus_rect(), kind),
            context: Pane::empty(config.context_rect(), kind),
            events: Vec::new(),
            trend: None,
            brush: None,
            cagr: None,
            hover: None,
            focus_x: None,
            focus_y: None,
        }
    }

    /// Time scale of the detail pane, for turning pointer x into a date.
    pub fn focus_time_scale(&self) -> Option<&TimeScale> {
        self.focus_x.as_ref()
    }

    pub fn focus_value_scale(&self) -> Option<&ValueScale> {
        self.focus_y.as_ref()
    }

    /// Attach a tooltip for the smoothed point nearest `date`. The lookup runs
    /// over the whole smoothed series; the crosshair is placed with the
    /// current detail-pane scales. Returns the tooltip, if any.
    pub fn set_hover(&mut self, smoothed: &Series, date: NaiveDate) -> Option<TooltipModel> {
        let model = tooltip(smoothed.points(), date)?;
        self.hover = match (self.focus_x, self.focus_y) {
            (Some(x), Some(y)) => Some(HoverOverlay {
                x: x.to_px(model.point.date),
                y: y.to_px(model.point.value),
                tooltip: model,
            }),
            _ => None,
        };
        Some(model)
    }

    pub fn clear_hover(&mut self) {
        self.hover = None;
    }
}

fn project(points: &[DataPoint], x: &TimeScale, y: &ValueScale) -> Vec<(f32, f32)> {
    points.iter().map(|p| (x.to_px(p.date), y.to_px(p.value))).collect()
}

/// Compute a full frame from the source series and a view snapshot.
pub fn compute_frame(source: &Series, view: &ViewState, config: &RenderConfig) -> FrameModel {
    let smoothed = smooth(source, view.smoothing_window);
    compute_frame_smoothed(source, &smoothed, view, config)
}

/// As [`compute_frame`], reusing an already smoothed series.
pub fn compute_frame_smoothed(
    source: &Series,
    smoothed: &Series,
    view: &ViewState,
    config: &RenderConfig,
) -> FrameModel {
    let manager = ScaleManager::new(view.log_scale);
    let mut frame = FrameModel::empty(config, manager.kind());

    let Some((first, last)) = smoothed.date_extent() else {
        log::warn!("empty series; rendering a blank frame");
        return frame;
    };

    // Overview pane: whole series, global domain, fixed for every brush.
    let crect = config.context_rect();
    let context_x = TimeScale::new(crect.left, crect.right, first, last);
    if let Some((kind, domain)) = manager.domain(smoothed.points()) {
        let context_y = ValueScale::new(kind, domain, crect.top, crect.bottom);
        frame.context.path = project(smoothed.points(), &context_x, &context_y);
        frame.context.value_kind = kind;
        frame.context.value_domain = Some(domain);
    }
    frame.context.x_ticks = time_ticks(&context_x, config.time_ticks);
    frame.context.time_domain = Some((first, last));

    // Detail pane: brushed window or whole series.
    let (start, end, brushed) = match view.normalized_domain() {
        Some((s, e)) => (s.clamp(first, last), e.clamp(first, last), true),
        None => (first, last, false),
    };
    let outcome = recompute(source, smoothed, view, start, end, brushed);

    let brush = BrushController::new(context_x);
    frame.brush = Some(brush.domain_to_selection(start, end));
    frame.cagr = outcome.cagr;

    let frect = config.focus_rect();
    let focus_x = TimeScale::new(frect.left, frect.right, start, end);
    frame.focus.time_domain = Some((start, end));
    frame.focus.x_ticks = time_ticks(&focus_x, config.time_ticks);
    frame.focus.value_kind = outcome.value_kind;
    frame.focus_x = Some(focus_x);

    frame.events = clip_to_domain(visible_events(&catalogue(), &view.event_filters, view.show_events), start, end)
        .into_iter()
        .map(|marker| EventMark { x: focus_x.to_px(marker.date), marker })
        .collect();

    if outcome.visible_points < 2 {
        // Degenerate window: keep axes, drop everything value-dependent.
        return frame;
    }
    let Some(domain) = outcome.value_domain else {
        return frame;
    };

    let focus_y = ValueScale::new(outcome.value_kind, domain, frect.top, frect.bottom);
    frame.focus.value_domain = Some(domain);
    frame.focus.path = project(smoothed.range_with_neighbors(start, end), &focus_x, &focus_y);
    frame.focus.y_ticks = value_ticks(&focus_y, config.value_ticks);
    frame.trend = outcome.trend.as_deref().map(|t| project(t, &focus_x, &focus_y));
    frame.focus_y = Some(focus_y);

    log::debug!(
        "frame: {} points, window {start}..{end}, {:?} scale, {} events, trend {}",
        smoothed.len(),
        outcome.value_kind,
        frame.events.len(),
        frame.trend.is_some()
    );
    frame
}
