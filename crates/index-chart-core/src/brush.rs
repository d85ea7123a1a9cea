// File: crates/index-chart-core/src/brush.rs
// Summary: Maps a drag selection on the overview pane to a detail-pane window and recomputes what depends on it.

use chrono::NaiveDate;

use crate::cagr::{cagr, CagrResult};
use crate::regression;
use crate::scale::{ScaleKind, ScaleManager, TimeScale, ValueDomain};
use crate::series::{DataPoint, Series};
use crate::view::ViewState;

/// Horizontal pixel span of a brush over the overview pane.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PixelSpan {
    pub x0: f32,
    pub x1: f32,
}

impl PixelSpan {
    pub const fn new(x0: f32, x1: f32) -> Self {
        Self { x0, x1 }
    }
}

/// Everything that changes when the brushed window changes.
#[derive(Clone, Debug, PartialEq)]
pub struct BrushOutcome {
    pub domain: (NaiveDate, NaiveDate),
    /// Scale kind of the detail pane for this window.
    pub value_kind: ScaleKind,
    /// `None` when no point falls inside the window.
    pub value_domain: Option<ValueDomain>,
    /// CAGR over the raw series inside the window.
    pub cagr: Option<CagrResult>,
    /// Log-space trend over the smoothed window, when enabled.
    pub trend: Option<Vec<DataPoint>>,
    /// Number of smoothed points inside the window.
    pub visible_points: usize,
}

/// Recompute scale, CAGR and trend for the window `[start, end]` (inclusive).
///
/// `scale.rescale` applies only to a brushed window; the unbrushed view uses
/// the global domain so that the detail and overview panes agree.
pub fn recompute(
    source: &Series,
    smoothed: &Series,
    view: &ViewState,
    start: NaiveDate,
    end: NaiveDate,
    brushed: bool,
) -> BrushOutcome {
    let (start, end) = if start <= end { (start, end) } else { (end, start) };
    let manager = ScaleManager::new(view.log_scale);
    let visible = smoothed.range(start, end);

    let scaled = if brushed { manager.rescale(visible) } else { manager.domain(visible) };
    let (value_kind, value_domain) = match scaled {
        Some((kind, domain)) => (kind, Some(domain)),
        None => (manager.kind(), None),
    };

    let cagr = cagr(source.range(start, end));
    let trend = if view.log_scale && view.show_trendline {
        regression::fit(visible, true)
    } else {
        None
    };

    if visible.len() < 2 {
        log::warn!("brush window {start}..{end} holds {} point(s); frame left empty", visible.len());
    } else {
        log::debug!(
            "brush window {start}..{end}: {} points, {:?} scale, cagr {:?}",
            visible.len(),
            value_kind,
            cagr.map(|c| c.cagr)
        );
    }

    BrushOutcome {
        domain: (start, end),
        value_kind,
        value_domain,
        cagr,
        trend,
        visible_points: visible.len(),
    }
}

/// Turns overview-pane selections into time windows through the overview's
/// own time scale, which spans the whole series and never changes.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BrushController {
    context_x: TimeScale,
}

impl BrushController {
    pub const fn new(context_x: TimeScale) -> Self {
        Self { context_x }
    }

    /// Pixel span (clamped to the pane, either drag direction) to dates.
    pub fn selection_to_domain(&self, selection: PixelSpan) -> (NaiveDate, NaiveDate) {
        let lo = self.context_x.left_px.min(self.context_x.right_px);
        let hi = self.context_x.left_px.max(self.context_x.right_px);
        let a = selection.x0.clamp(lo, hi);
        let b = selection.x1.clamp(lo, hi);
        let (a, b) = if a <= b { (a, b) } else { (b, a) };
        (self.context_x.from_px(a), self.context_x.from_px(b))
    }

    /// Inverse of [`selection_to_domain`](Self::selection_to_domain), used to draw the brush.
    pub fn domain_to_selection(&self, start: NaiveDate, end: NaiveDate) -> PixelSpan {
        PixelSpan::new(self.context_x.to_px(start), self.context_x.to_px(end))
    }

    /// Handle a brush event; drag and drag-end both land here. A cleared
    /// selection returns `None` and the host keeps its previous window.
    pub fn on_brush(
        &self,
        source: &Series,
        smoothed: &Series,
        view: &ViewState,
        selection: Option<PixelSpan>,
    ) -> Option<BrushOutcome> {
        let selection = selection?;
        let (start, end) = self.selection_to_domain(selection);
        Some(recompute(source, smoothed, view, start, end, true))
    }
}
