// File: crates/index-chart-core/src/chart.rs
// Summary: Host-facing chart engine and the headless Skia renderer for FrameModel.

use anyhow::{Context, Result};
use chrono::NaiveDate;
use skia_safe as skia;

use crate::brush::{BrushController, BrushOutcome, PixelSpan};
use crate::frame::{compute_frame_smoothed, FrameModel, Pane, RenderConfig};
use crate::geometry::PlotRect;
use crate::lookup::{tooltip, TooltipModel};
use crate::scale::TimeScale;
use crate::series::Series;
use crate::smooth::{clamp_window, smooth};
use crate::view::ViewState;

/// Owns the loaded series and the smoothed copy for the current window.
/// Every call recomputes from scratch; only the smoothing result is cached.
pub struct Chart {
    source: Series,
    smoothed: Series,
    window: usize,
    pub config: RenderConfig,
}

impl Chart {
    pub fn new(source: Series, config: RenderConfig) -> Self {
        Self { smoothed: source.clone(), source, window: 1, config }
    }

    /// Replace the series wholesale (reload). The cached window is re-clamped
    /// to the new length so `smoothed` always matches `window`.
    pub fn set_series(&mut self, source: Series) {
        self.window = clamp_window(self.window, source.len());
        self.smoothed = smooth(&source, self.window);
        log::debug!("series reloaded: {} points, window {}", source.len(), self.window);
        self.source = source;
    }

    pub fn source(&self) -> &Series { &self.source }
    pub fn smoothed(&self) -> &Series { &self.smoothed }

    fn sync_window(&mut self, requested: usize) {
        let window = clamp_window(requested, self.source.len());
        if window != self.window {
            log::debug!("smoothing window {} -> {}", self.window, window);
            self.smoothed = smooth(&self.source, window);
            self.window = window;
        }
    }

    /// `computeFrame`: full frame for a view snapshot.
    pub fn frame(&mut self, view: &ViewState) -> FrameModel {
        self.sync_window(view.smoothing_window);
        compute_frame_smoothed(&self.source, &self.smoothed, view, &self.config)
    }

    /// Brush controller bound to the overview pane of the current series.
    pub fn brush_controller(&self) -> Option<BrushController> {
        let (first, last) = self.smoothed.date_extent()?;
        let rect = self.config.context_rect();
        Some(BrushController::new(TimeScale::new(rect.left, rect.right, first, last)))
    }

    /// `onBrush`: map a selection to a window and recompute scale, CAGR and trend.
    /// The host stores `outcome.domain` into `ViewState::selected_domain`.
    pub fn on_brush(&mut self, view: &ViewState, selection: Option<PixelSpan>) -> Option<BrushOutcome> {
        self.sync_window(view.smoothing_window);
        self.brush_controller()?.on_brush(&self.source, &self.smoothed, view, selection)
    }

    /// `onHover`: tooltip for the smoothed point nearest `date`, over the whole series.
    pub fn on_hover(&mut self, view: &ViewState, date: NaiveDate) -> Option<TooltipModel> {
        self.sync_window(view.smoothing_window);
        let model = tooltip(self.smoothed.points(), date);
        log::trace!("hover {date} -> {:?}", model.map(|m| m.point));
        model
    }

    /// Convenience: compute the frame for `view` and write it as PNG.
    pub fn render_to_png(&mut self, view: &ViewState, output_png_path: impl AsRef<std::path::Path>) -> Result<()> {
        self.frame(view).render_to_png(output_png_path)
    }
}

impl FrameModel {
    /// Render to a PNG file using a CPU raster surface.
    pub fn render_to_png(&self, output_png_path: impl AsRef<std::path::Path>) -> Result<()> {
        let bytes = self.render_to_png_bytes()?;
        let path = output_png_path.as_ref();
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, bytes).with_context(|| format!("writing {}", path.display()))?;
        Ok(())
    }

    /// Render to in-memory PNG bytes.
    pub fn render_to_png_bytes(&self) -> Result<Vec<u8>> {
        let mut surface = self.draw_surface()?;
        let image = surface.image_snapshot();
        #[allow(deprecated)]
        let data = image
            .encode_to_data(skia::EncodedImageFormat::PNG)
            .ok_or_else(|| anyhow::anyhow!("encode PNG failed"))?;
        Ok(data.as_bytes().to_vec())
    }

    /// Render to an unpremultiplied RGBA8 buffer: (pixels, width, height, stride).
    pub fn render_to_rgba8(&self) -> Result<(Vec<u8>, i32, i32, usize)> {
        let mut surface = self.draw_surface()?;
        let info = skia::ImageInfo::new(
            (self.width, self.height),
            skia::ColorType::RGBA8888,
            skia::AlphaType::Unpremul,
            None,
        );
        let stride = self.width.max(0) as usize * 4;
        let mut pixels = vec![0u8; stride * self.height.max(0) as usize];
        if !surface.read_pixels(&info, &mut pixels, stride, (0, 0)) {
            anyhow::bail!("reading surface pixels failed");
        }
        Ok((pixels, self.width, self.height, stride))
    }

    fn draw_surface(&self) -> Result<skia::Surface> {
        let mut surface = skia::surfaces::raster_n32_premul((self.width, self.height))
            .ok_or_else(|| anyhow::anyhow!("failed to create raster surface"))?;
        self.draw(surface.canvas());
        Ok(surface)
    }

    fn draw(&self, canvas: &skia::Canvas) {
        let theme = &self.theme;
        canvas.clear(theme.background);

        draw_grid(canvas, &self.focus, theme.grid);
        draw_clipped_path(canvas, &self.focus.rect, &self.focus.path, theme.line_stroke, 1.5);
        if let Some(trend) = &self.trend {
            draw_clipped_path(canvas, &self.focus.rect, trend, theme.trend_line, 1.5);
        }
        draw_axes(canvas, &self.focus, theme.axis_line, theme.axis_label, self.draw_labels, true);
        self.draw_events(canvas);

        draw_clipped_path(canvas, &self.context.rect, &self.context.path, theme.context_stroke, 1.0);
        draw_axes(canvas, &self.context, theme.axis_line, theme.axis_label, self.draw_labels, false);
        if let Some(brush) = self.brush {
            draw_brush(canvas, &self.context.rect, brush, theme.brush_fill, theme.brush_stroke);
        }

        if self.draw_labels {
            let mut font = skia::Font::default();
            font.set_size(13.0);
            let mut paint = skia::Paint::default();
            paint.set_anti_alias(true);
            paint.set_color(theme.title);
            canvas.draw_str(&self.title, (self.focus.rect.left, 14.0), &font, &paint);
            if let Some(c) = self.cagr {
                let text = format!(
                    "CAGR {:+.2}% p.a. ({} - {}, {:.1}y)",
                    c.cagr,
                    c.start_date.format("%b %Y"),
                    c.end_date.format("%b %Y"),
                    c.years
                );
                let (w, _) = font.measure_str(&text, Some(&paint));
                canvas.draw_str(&text, (self.focus.rect.right - w, 14.0), &font, &paint);
            }
        }

        self.draw_hover(canvas);
    }

    fn draw_events(&self, canvas: &skia::Canvas) {
        if self.events.is_empty() {
            return;
        }
        let rect = &self.focus.rect;
        let mut line = skia::Paint::default();
        line.set_anti_alias(true);
        line.set_style(skia::paint::Style::Stroke);
        line.set_stroke_width(1.0);
        line.set_color(self.theme.event_line);
        line.set_path_effect(skia::PathEffect::dash(&[4.0, 4.0], 0.0));

        let mut text = skia::Paint::default();
        text.set_anti_alias(true);
        text.set_color(self.theme.event_label);
        let mut font = skia::Font::default();
        font.set_size(12.0);

        for ev in &self.events {
            if !rect.contains_x(ev.x) {
                continue;
            }
            canvas.draw_line((ev.x, rect.top), (ev.x, rect.bottom), &line);
            if self.draw_labels {
                // Rotated -65 degrees around the anchor, text ending at the anchor.
                let anchor = skia::Point::new(ev.x, rect.top + 12.0);
                let (w, _) = font.measure_str(ev.marker.label, Some(&text));
                canvas.save();
                canvas.rotate(-65.0, Some(anchor));
                canvas.draw_str(ev.marker.label, (anchor.x - w, anchor.y), &font, &text);
                canvas.restore();
            }
        }
    }

    fn draw_hover(&self, canvas: &skia::Canvas) {
        let Some(hover) = &self.hover else { return };
        let rect = &self.focus.rect;
        if !rect.contains_x(hover.x) {
            return;
        }
        let mut paint = skia::Paint::default();
        paint.set_anti_alias(true);
        paint.set_color(self.theme.crosshair);
        paint.set_stroke_width(1.0);
        canvas.draw_line((hover.x, rect.top), (hover.x, rect.bottom), &paint);
        canvas.draw_circle((hover.x, hover.y), 3.5, &paint);

        if !self.draw_labels {
            return;
        }
        let lines = hover.tooltip.lines();
        let mut font = skia::Font::default();
        font.set_size(12.0);
        let mut text = skia::Paint::default();
        text.set_anti_alias(true);
        text.set_color(self.theme.tooltip_text);
        let width = lines
            .iter()
            .map(|l| font.measure_str(l, Some(&text)).0)
            .fold(0.0f32, f32::max)
            + 12.0;
        let height = lines.len() as f32 * 15.0 + 8.0;
        // Flip to the left of the crosshair near the right edge.
        let left = if hover.x + 10.0 + width > rect.right { hover.x - 10.0 - width } else { hover.x + 10.0 };
        let top = rect.top + 8.0;
        let mut bg = skia::Paint::default();
        bg.set_anti_alias(true);
        bg.set_color(self.theme.tooltip_background);
        canvas.draw_rect(skia::Rect::from_ltrb(left, top, left + width, top + height), &bg);
        for (i, l) in lines.iter().enumerate() {
            canvas.draw_str(l, (left + 6.0, top + 16.0 + i as f32 * 15.0), &font, &text);
        }
    }
}

// ---- helpers ----------------------------------------------------------------

fn sk_rect(r: &PlotRect) -> skia::Rect {
    skia::Rect::from_ltrb(r.left, r.top, r.right, r.bottom)
}

fn draw_grid(canvas: &skia::Canvas, pane: &Pane, color: skia::Color) {
    let mut paint = skia::Paint::default();
    paint.set_color(color);
    paint.set_anti_alias(true);
    paint.set_stroke_width(1.0);
    let r = &pane.rect;
    for t in &pane.x_ticks {
        canvas.draw_line((t.px, r.top), (t.px, r.bottom), &paint);
    }
    for t in &pane.y_ticks {
        canvas.draw_line((r.left, t.px), (r.right, t.px), &paint);
    }
}

fn draw_clipped_path(canvas: &skia::Canvas, rect: &PlotRect, points: &[(f32, f32)], color: skia::Color, width: f32) {
    if points.len() < 2 {
        return;
    }
    let mut builder = skia::PathBuilder::new();
    builder.move_to(points[0]);
    for &p in points.iter().skip(1) {
        builder.line_to(p);
    }
    let path = builder.detach();

    let mut stroke = skia::Paint::default();
    stroke.set_anti_alias(true);
    stroke.set_style(skia::paint::Style::Stroke);
    stroke.set_stroke_width(width);
    stroke.set_color(color);

    canvas.save();
    canvas.clip_rect(sk_rect(rect), skia::ClipOp::Intersect, true);
    canvas.draw_path(&path, &stroke);
    canvas.restore();
}

fn draw_axes(
    canvas: &skia::Canvas,
    pane: &Pane,
    line_color: skia::Color,
    label_color: skia::Color,
    draw_labels: bool,
    with_y_axis: bool,
) {
    let r = &pane.rect;
    let mut axis_paint = skia::Paint::default();
    axis_paint.set_color(line_color);
    axis_paint.set_anti_alias(true);
    axis_paint.set_stroke_width(1.0);

    canvas.draw_line((r.left, r.bottom), (r.right, r.bottom), &axis_paint);
    for t in &pane.x_ticks {
        canvas.draw_line((t.px, r.bottom), (t.px, r.bottom + 6.0), &axis_paint);
    }
    if with_y_axis {
        canvas.draw_line((r.left, r.top), (r.left, r.bottom), &axis_paint);
        for t in &pane.y_ticks {
            canvas.draw_line((r.left - 6.0, t.px), (r.left, t.px), &axis_paint);
        }
    }
    if !draw_labels {
        return;
    }

    let mut text = skia::Paint::default();
    text.set_anti_alias(true);
    text.set_color(label_color);
    let mut font = skia::Font::default();
    font.set_size(10.0);

    for t in &pane.x_ticks {
        let (w, _) = font.measure_str(&t.label, Some(&text));
        canvas.draw_str(&t.label, (t.px - w * 0.5, r.bottom + 18.0), &font, &text);
    }
    if with_y_axis {
        for t in &pane.y_ticks {
            let (w, _) = font.measure_str(&t.label, Some(&text));
            canvas.draw_str(&t.label, (r.left - 9.0 - w, t.px + 3.5), &font, &text);
        }
    }
}

fn draw_brush(canvas: &skia::Canvas, rect: &PlotRect, brush: PixelSpan, fill: skia::Color, stroke: skia::Color) {
    let x0 = rect.clamp_x(brush.x0.min(brush.x1));
    let x1 = rect.clamp_x(brush.x0.max(brush.x1));
    let area = skia::Rect::from_ltrb(x0, rect.top, x1.max(x0 + 1.0), rect.bottom);

    let mut paint = skia::Paint::default();
    paint.set_anti_alias(true);
    paint.set_color(fill);
    canvas.draw_rect(area, &paint);

    paint.set_style(skia::paint::Style::Stroke);
    paint.set_stroke_width(1.0);
    paint.set_color(stroke);
    canvas.draw_rect(area, &paint);
}
