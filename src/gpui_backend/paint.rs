use gpui::{
    Background, BorderStyle, Bounds, Corners, Edges, PathBuilder, Pixels, Window,
    linear_color_stop, linear_gradient, point, px, quad,
};
use kurbo::{BezPath, PathEl};

use crate::geom::Point;
use crate::render::{GradientDirection, RenderCommand, RenderList};
use crate::style::{Color, ColorGradient};

/// Draw commands for one frame plus the canvas origin they are relative to.
pub(crate) struct ChartFrame {
    pub(crate) origin: Point,
    pub(crate) render: RenderList,
}

pub(crate) fn paint_frame(frame: &ChartFrame, window: &mut Window) {
    for command in frame.render.commands() {
        match command {
            RenderCommand::FillArea {
                path,
                gradient,
                direction,
            } => {
                let mut builder = PathBuilder::fill();
                append_path(&mut builder, path, frame.origin);
                if let Ok(path) = builder.build() {
                    window.paint_path(path, to_background(*gradient, *direction));
                }
            }
            RenderCommand::StrokeCurve {
                path,
                gradient,
                direction,
                style,
            } => {
                let width = style.width.max(0.5);
                let mut builder = PathBuilder::stroke(px(width));
                append_path(&mut builder, path, frame.origin);
                if let Ok(path) = builder.build() {
                    window.paint_path(path, to_background(*gradient, *direction));
                }
            }
            RenderCommand::Indicator {
                center,
                radius,
                ring_width,
                fill,
                ring,
            } => paint_indicator(
                window,
                to_pixels(*center, frame.origin),
                *radius,
                *ring_width,
                *fill,
                *ring,
            ),
        }
    }
}

fn append_path(builder: &mut PathBuilder, path: &BezPath, origin: Point) {
    for element in path.elements() {
        match *element {
            PathEl::MoveTo(p) => builder.move_to(to_pixels(p, origin)),
            PathEl::LineTo(p) => builder.line_to(to_pixels(p, origin)),
            PathEl::QuadTo(ctrl, p) => {
                builder.curve_to(to_pixels(p, origin), to_pixels(ctrl, origin))
            }
            PathEl::CurveTo(c1, c2, p) => builder.cubic_bezier_to(
                to_pixels(p, origin),
                to_pixels(c1, origin),
                to_pixels(c2, origin),
            ),
            PathEl::ClosePath => builder.close(),
        }
    }
}

fn paint_indicator(
    window: &mut Window,
    center: gpui::Point<Pixels>,
    radius: f32,
    ring_width: f32,
    fill: Color,
    ring: Color,
) {
    if radius <= 0.0 {
        return;
    }
    let bounds = Bounds::from_corners(
        point(center.x - px(radius), center.y - px(radius)),
        point(center.x + px(radius), center.y + px(radius)),
    );
    window.paint_quad(quad(
        bounds,
        Corners::all(px(radius)),
        to_rgba(fill),
        Edges::all(px(ring_width.min(radius))),
        to_rgba(ring),
        BorderStyle::default(),
    ));
}

fn to_background(gradient: ColorGradient, direction: GradientDirection) -> Background {
    if gradient.is_solid() {
        return to_hsla(gradient.start).into();
    }
    // CSS angles: 0 points up, 90 points right.
    let angle = match direction {
        GradientDirection::LeadingToTrailing => 90.0,
        GradientDirection::BottomToTop => 0.0,
    };
    linear_gradient(
        angle,
        linear_color_stop(to_hsla(gradient.start), 0.0),
        linear_color_stop(to_hsla(gradient.end), 1.0),
    )
}

fn to_pixels(p: Point, origin: Point) -> gpui::Point<Pixels> {
    point(px((origin.x + p.x) as f32), px((origin.y + p.y) as f32))
}

fn to_rgba(color: Color) -> gpui::Rgba {
    gpui::Rgba {
        r: color.r,
        g: color.g,
        b: color.b,
        a: color.a,
    }
}

fn to_hsla(color: Color) -> gpui::Hsla {
    gpui::Hsla::from(to_rgba(color))
}
