// File: crates/index-chart-core/src/theme.rs
// Summary: Light/Dark palettes for the focus/context chart. Passed explicitly via RenderConfig.

use skia_safe as skia;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Theme {
    pub name: &'static str,
    pub background: skia::Color,
    pub grid: skia::Color,
    pub axis_line: skia::Color,
    pub axis_label: skia::Color,
    pub title: skia::Color,
    pub line_stroke: skia::Color,
    pub context_stroke: skia::Color,
    pub event_line: skia::Color,
    pub event_label: skia::Color,
    pub trend_line: skia::Color,
    pub brush_fill: skia::Color,
    pub brush_stroke: skia::Color,
    pub crosshair: skia::Color,
    pub tooltip_background: skia::Color,
    pub tooltip_text: skia::Color,
}

impl Theme {
    pub fn light() -> Self {
        Self {
            name: "light",
            background: skia::Color::from_argb(255, 255, 255, 255),
            grid: skia::Color::from_argb(255, 235, 235, 240),
            axis_line: skia::Color::from_argb(255, 60, 60, 70),
            axis_label: skia::Color::from_argb(255, 20, 20, 30),
            title: skia::Color::from_argb(255, 20, 20, 30),
            line_stroke: skia::Color::from_argb(255, 70, 130, 180), // steelblue
            context_stroke: skia::Color::from_argb(255, 70, 130, 180),
            event_line: skia::Color::from_argb(255, 220, 20, 20),
            event_label: skia::Color::from_argb(255, 220, 20, 20),
            trend_line: skia::Color::from_argb(255, 230, 140, 20),
            brush_fill: skia::Color::from_argb(60, 120, 120, 130),
            brush_stroke: skia::Color::from_argb(255, 255, 255, 255),
            crosshair: skia::Color::from_argb(255, 30, 120, 240),
            tooltip_background: skia::Color::from_argb(230, 250, 250, 252),
            tooltip_text: skia::Color::from_argb(255, 20, 20, 30),
        }
    }

    pub fn dark() -> Self {
        Self {
            name: "dark",
            background: skia::Color::from_argb(255, 18, 18, 20),
            grid: skia::Color::from_argb(255, 40, 40, 45),
            axis_line: skia::Color::from_argb(255, 180, 180, 190),
            axis_label: skia::Color::from_argb(255, 235, 235, 245),
            title: skia::Color::from_argb(255, 235, 235, 245),
            line_stroke: skia::Color::from_argb(255, 64, 160, 255),
            context_stroke: skia::Color::from_argb(255, 64, 160, 255),
            event_line: skia::Color::from_argb(255, 240, 90, 90),
            event_label: skia::Color::from_argb(255, 240, 110, 110),
            trend_line: skia::Color::from_argb(255, 255, 190, 60),
            brush_fill: skia::Color::from_argb(70, 200, 200, 210),
            brush_stroke: skia::Color::from_argb(255, 120, 120, 130),
            crosshair: skia::Color::from_argb(255, 255, 230, 70),
            tooltip_background: skia::Color::from_argb(230, 32, 32, 36),
            tooltip_text: skia::Color::from_argb(255, 235, 235, 245),
        }
    }

    /// Palette for the host's dark-mode switch.
    pub fn for_mode(dark: bool) -> Self {
        if dark { Self::dark() } else { Self::light() }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::light()
    }
}
