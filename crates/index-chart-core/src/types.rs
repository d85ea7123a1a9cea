// File: crates/index-chart-core/src/types.rs
// Summary: Layout constants and pane insets shared by the frame model and renderer.

/// Default surface width in pixels.
pub const WIDTH: i32 = 1000;
/// Default surface height in pixels.
pub const HEIGHT: i32 = 500;

/// Screen margins around a pane, in pixels.
/// Contract: all fields are non-negative.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Insets {
    pub left: u32,
    pub right: u32,
    pub top: u32,
    pub bottom: u32,
}

impl Insets {
    /// Create new insets (non-negative by type).
    pub const fn new(left: u32, right: u32, top: u32, bottom: u32) -> Self {
        Self { left, right, top, bottom }
    }

    /// Margins of the detail pane: most of the surface, room for rotated
    /// event labels above and the overview pane below.
    pub const fn focus() -> Self { Self::new(50, 20, 20, 110) }

    /// Margins of the overview pane: a thin strip along the bottom edge.
    pub const fn context() -> Self { Self::new(50, 20, 430, 30) }
}

impl Default for Insets {
    fn default() -> Self {
        Self::focus()
    }
}
