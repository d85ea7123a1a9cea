// File: crates/index-chart-core/src/lib.rs
// Summary: Core library entry point; exports the analytics engine, frame model and renderer.

pub mod axis;
pub mod brush;
pub mod cagr;
pub mod chart;
pub mod error;
pub mod events;
pub mod frame;
pub mod geometry;
pub mod lookup;
pub mod regression;
pub mod scale;
pub mod series;
pub mod smooth;
pub mod theme;
pub mod types;
pub mod view;

pub use brush::{BrushController, BrushOutcome, PixelSpan};
pub use cagr::{cagr, CagrResult};
pub use chart::Chart;
pub use error::SeriesError;
pub use events::{catalogue, visible_events, EventId, EventMarker};
pub use frame::{compute_frame, FrameModel, RenderConfig};
pub use lookup::{nearest, tooltip, TooltipModel};
pub use scale::{ScaleKind, ScaleManager, TimeScale, ValueDomain, ValueScale};
pub use series::{DataPoint, Series, SmoothedSeries};
pub use smooth::smooth;
pub use theme::Theme;
pub use view::ViewState;
