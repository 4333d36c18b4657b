//! Rendering primitives for line charts.
//!
//! These types are backend-agnostic and are used by render backends (such as
//! the GPUI backend) to describe how a chart should be drawn. All geometry is
//! in view pixels relative to the chart's top-left corner.

use kurbo::BezPath;

use crate::config::ChartConfig;
use crate::curve::CurvePath;
use crate::geom::Point;
use crate::style::{ChartStyle, Color, ColorGradient, LineStyle};
use crate::transform::Transform;

/// Direction a gradient runs across its shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GradientDirection {
    /// Start color on the left, end color on the right.
    LeadingToTrailing,
    /// Start color at the bottom, end color at the top.
    BottomToTop,
}

/// Render command list.
#[derive(Debug, Clone)]
pub enum RenderCommand {
    /// Fill a closed area.
    FillArea {
        /// Closed area outline.
        path: BezPath,
        /// Fill gradient.
        gradient: ColorGradient,
        /// Gradient direction.
        direction: GradientDirection,
    },
    /// Stroke the chart curve.
    StrokeCurve {
        /// Curve outline.
        path: BezPath,
        /// Stroke gradient.
        gradient: ColorGradient,
        /// Gradient direction.
        direction: GradientDirection,
        /// Stroke styling.
        style: LineStyle,
    },
    /// Draw the touch indicator.
    Indicator {
        /// Indicator center.
        center: Point,
        /// Outer radius.
        radius: f32,
        /// Ring width.
        ring_width: f32,
        /// Inner fill.
        fill: Color,
        /// Ring color.
        ring: Color,
    },
}

/// Aggregated render commands.
#[derive(Debug, Default, Clone)]
pub struct RenderList {
    commands: Vec<RenderCommand>,
}

impl RenderList {
    /// Create an empty render list.
    pub fn new() -> Self {
        Self::default()
    }

    /// Push a render command.
    pub fn push(&mut self, command: RenderCommand) {
        self.commands.push(command);
    }

    /// Access all render commands.
    pub fn commands(&self) -> &[RenderCommand] {
        &self.commands
    }

    /// Check if there is nothing to draw.
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }
}

/// Everything a frame needs besides the curve geometry.
#[derive(Debug, Clone, Copy)]
pub struct FrameStyle<'a> {
    /// Chart colors.
    pub chart: &'a ChartStyle,
    /// Stroke styling.
    pub line: LineStyle,
    /// Chart configuration.
    pub config: &'a ChartConfig,
}

/// Build the commands that draw one line chart.
///
/// `indicator` is the indicator position in view fraction space. Drawing
/// order is background, curve, indicator.
pub fn build_line_frame(
    path: &CurvePath,
    transform: &Transform,
    style: FrameStyle<'_>,
    indicator: Option<Point>,
    out: &mut RenderList,
) {
    if path.is_empty() {
        return;
    }
    let affine = transform.to_affine();

    if style.config.show_background {
        out.push(RenderCommand::FillArea {
            path: affine * path.area_path(0.0),
            gradient: style.chart.background,
            direction: GradientDirection::BottomToTop,
        });
    }

    let gradient = style.chart.foreground_gradient(0);
    out.push(RenderCommand::StrokeCurve {
        path: affine * path.to_bez_path(),
        gradient,
        direction: GradientDirection::LeadingToTrailing,
        style: style.line,
    });

    if style.config.show_indicator
        && let Some(fraction) = indicator
    {
        out.push(RenderCommand::Indicator {
            center: transform.fraction_to_view(fraction),
            radius: style.config.indicator_radius,
            ring_width: style.config.indicator_ring_width,
            fill: Color::WHITE,
            ring: gradient.end,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::curve::build_path;
    use crate::geom::Step;
    use crate::transform::PathScale;
    use crate::view::ViewSize;

    fn frame(config: &ChartConfig, indicator: Option<Point>) -> RenderList {
        let path = build_path(&[0.0, 1.0, 0.5], Step::UNIT);
        let scale = PathScale::new(3, 1.0, Step::UNIT).expect("valid scale");
        let transform =
            Transform::new(scale, ViewSize::new(200.0, 100.0)).expect("valid transform");
        let chart = ChartStyle::default();
        let style = FrameStyle {
            chart: &chart,
            line: LineStyle::default(),
            config,
        };
        let mut out = RenderList::new();
        build_line_frame(&path, &transform, style, indicator, &mut out);
        out
    }

    #[test]
    fn curve_is_flipped_into_view_space() {
        let list = frame(&ChartConfig::default(), None);
        assert_eq!(list.commands().len(), 1);
        let RenderCommand::StrokeCurve { path, .. } = &list.commands()[0] else {
            panic!("expected stroke");
        };
        let bounds = kurbo::Shape::bounding_box(path);
        assert!((bounds.x0 - 0.0).abs() < 1e-9);
        assert!((bounds.x1 - 200.0).abs() < 1e-9);
        assert!((bounds.y0 - 0.0).abs() < 1e-9);
        assert!((bounds.y1 - 100.0).abs() < 1e-9);
    }

    #[test]
    fn background_and_indicator_follow_config() {
        let config = ChartConfig {
            show_background: true,
            ..ChartConfig::default()
        };
        let list = frame(&config, Some(Point::new(0.5, 1.0)));
        assert_eq!(list.commands().len(), 3);
        assert!(matches!(
            list.commands()[0],
            RenderCommand::FillArea {
                direction: GradientDirection::BottomToTop,
                ..
            }
        ));
        let RenderCommand::Indicator { center, .. } = list.commands()[2] else {
            panic!("expected indicator");
        };
        assert_eq!(center, Point::new(100.0, 0.0));
    }

    #[test]
    fn empty_path_draws_nothing() {
        let scale = PathScale::new(2, 1.0, Step::UNIT).expect("valid scale");
        let transform =
            Transform::new(scale, ViewSize::new(10.0, 10.0)).expect("valid transform");
        let chart = ChartStyle::default();
        let config = ChartConfig::default();
        let style = FrameStyle {
            chart: &chart,
            line: LineStyle::default(),
            config: &config,
        };
        let mut out = RenderList::new();
        build_line_frame(&CurvePath::default(), &transform, style, None, &mut out);
        assert!(out.is_empty());
    }
}
