// File: crates/index-chart-core/src/geometry.rs
// Summary: Plot rectangles in surface pixels, derived from size and insets.

use crate::types::Insets;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PlotRect {
    pub left: f32,
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
}

impl PlotRect {
    /// Rectangle left over after removing `insets` from a `width` x `height` surface.
    /// Collapses to zero size rather than inverting when the insets exceed the surface.
    pub fn from_insets(width: i32, height: i32, insets: &Insets) -> Self {
        let left = insets.left as f32;
        let top = insets.top as f32;
        let right = (width as f32 - insets.right as f32).max(left);
        let bottom = (height as f32 - insets.bottom as f32).max(top);
        Self { left, top, right, bottom }
    }

    pub fn contains_x(&self, x: f32) -> bool { x >= self.left && x <= self.right }

    pub fn clamp_x(&self, x: f32) -> f32 { clamp(x, self.left, self.right) }
}

#[inline]
pub fn clamp<T: PartialOrd>(v: T, lo: T, hi: T) -> T {
    if v < lo { lo } else if v > hi { hi } else { v }
}
