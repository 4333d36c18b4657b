//! Coordinate transforms between curve path space and view space.
//!
//! Path space has one unit per sample on X and normalized units above the
//! series minimum on Y. The view fraction space maps the whole curve onto
//! `0..=1` on both axes with Y growing upward. View space is pixels with Y
//! growing downward, so the transform flips vertically.

use kurbo::Affine;

use crate::geom::{Point, Step};
use crate::view::ViewSize;

/// Scale between path space and view fraction space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PathScale {
    x_units: f64,
    y_units: f64,
}

impl PathScale {
    /// Create a scale for a normalized series of `point_count` points with
    /// the given vertical `range`, laid out with `step`.
    ///
    /// Returns `None` for degenerate geometry: fewer than two points, a flat
    /// series, or a step that collapses an axis.
    pub fn new(point_count: usize, range: f64, step: Step) -> Option<Self> {
        if point_count < 2 {
            return None;
        }
        let x_units = (point_count - 1) as f64 * step.dx;
        let y_units = range * step.dy;
        if !x_units.is_finite() || !y_units.is_finite() || x_units <= 0.0 || y_units <= 0.0 {
            return None;
        }
        Some(Self { x_units, y_units })
    }

    /// Horizontal path extent covered by the scale.
    pub fn x_units(&self) -> f64 {
        self.x_units
    }

    /// Map a view fraction into path space.
    pub fn scale(&self, fraction: Point) -> Point {
        Point::new(fraction.x * self.x_units, fraction.y * self.y_units)
    }

    /// Map a path point into view fraction space. Exact inverse of
    /// [`PathScale::scale`].
    pub fn descale(&self, point: Point) -> Point {
        Point::new(point.x / self.x_units, point.y / self.y_units)
    }
}

/// Transform from path space into view pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transform {
    scale: PathScale,
    size: ViewSize,
}

impl Transform {
    /// Create a transform for the given scale and view size.
    pub fn new(scale: PathScale, size: ViewSize) -> Option<Self> {
        if !size.is_valid() {
            return None;
        }
        Some(Self { scale, size })
    }

    /// Map a view fraction into view pixels.
    pub fn fraction_to_view(&self, fraction: Point) -> Point {
        Point::new(
            fraction.x * self.size.width,
            self.size.height - fraction.y * self.size.height,
        )
    }

    /// Map a path point into view pixels.
    pub fn path_to_view(&self, point: Point) -> Point {
        self.fraction_to_view(self.scale.descale(point))
    }

    /// Map a view pixel back into path space.
    pub fn view_to_path(&self, point: Point) -> Point {
        let fraction = Point::new(
            point.x / self.size.width,
            (self.size.height - point.y) / self.size.height,
        );
        self.scale.scale(fraction)
    }

    /// The path-to-view mapping as an affine matrix, for transforming whole
    /// Bézier paths.
    pub fn to_affine(&self) -> Affine {
        let sx = self.size.width / self.scale.x_units;
        let sy = self.size.height / self.scale.y_units;
        Affine::new([sx, 0.0, 0.0, -sy, 0.0, self.size.height])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn linear_roundtrip() {
        let scale = PathScale::new(6, 0.837, Step::UNIT).expect("valid scale");
        let transform =
            Transform::new(scale, ViewSize::new(320.0, 180.0)).expect("valid transform");
        let point = Point::new(3.25, 0.4);
        let view = transform.path_to_view(point);
        let roundtrip = transform.view_to_path(view);
        assert!((roundtrip.x - point.x).abs() < 1e-9);
        assert!((roundtrip.y - point.y).abs() < 1e-9);
    }

    #[test]
    fn affine_matches_pointwise_mapping() {
        let scale = PathScale::new(4, 2.0, Step::UNIT).expect("valid scale");
        let transform =
            Transform::new(scale, ViewSize::new(300.0, 100.0)).expect("valid transform");
        let point = Point::new(1.5, 0.5);
        let by_affine = transform.to_affine() * point;
        let by_hand = transform.path_to_view(point);
        assert!((by_affine - by_hand).hypot() < 1e-9);
        assert_eq!(transform.path_to_view(Point::new(0.0, 0.0)), Point::new(0.0, 100.0));
        assert_eq!(transform.path_to_view(Point::new(3.0, 2.0)), Point::new(300.0, 0.0));
    }

    #[test]
    fn degenerate_geometry_has_no_scale() {
        assert!(PathScale::new(1, 1.0, Step::UNIT).is_none());
        assert!(PathScale::new(5, 0.0, Step::UNIT).is_none());
        let scale = PathScale::new(5, 1.0, Step::UNIT).expect("valid scale");
        assert!(Transform::new(scale, ViewSize::new(0.0, 100.0)).is_none());
    }
}
