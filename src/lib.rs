//! gpui_linechart draws a single smooth line chart with touch highlighting.
//!
//! Samples are normalized by their largest magnitude, threaded through a
//! quadratic Bézier curve, and hit-tested by horizontal position so a pointer
//! can be mapped back onto the curve and onto the sample under it. The core is
//! backend-agnostic; the `gpui` feature adds a GPUI view.

#![forbid(unsafe_code)]

pub mod chart;
pub mod config;
pub mod curve;
pub mod error;
pub mod geom;
pub mod interaction;
pub mod normalize;
pub mod render;
pub mod series;
pub mod style;
pub mod transform;
pub mod view;

#[cfg(feature = "gpui")]
pub mod gpui_backend;

pub use chart::{HighlightListener, LineChart, LineChartBuilder};
pub use config::ChartConfig;
pub use curve::{CurvePath, CurveSegment, DEFAULT_HIT_SAMPLES, build_path, control_point};
pub use error::{ChartError, ChartResult};
pub use geom::{Point, Step};
pub use interaction::{
    ChartValue, Highlight, HighlightEvent, LineInteraction, sample_index, touch_to_index,
    touch_to_path_point,
};
pub use normalize::{NormalizedSeries, is_negative_domain, normalize, range};
pub use render::{GradientDirection, RenderCommand, RenderList};
pub use series::{ChartData, Sample};
pub use style::{ChartStyle, Color, ColorGradient, LineJoin, LineStyle, rotate_gradient};
pub use transform::{PathScale, Transform};
pub use view::{Range, ViewSize};

#[cfg(feature = "gpui")]
pub use gpui_backend::{GpuiLineChartView, LineChartHandle};

#[cfg(doctest)]
#[doc = include_str!("../README.md")]
struct ReadmeDoctests;
