//! Smooth curve construction and nearest-point queries.
//!
//! A series of `n` points becomes `2 * (n - 1)` quadratic Bézier segments:
//! each interval is split at the midpoint between its two samples and both
//! halves are bent with a corner control point. The curve passes through
//! every sample with a horizontal tangent there, the tangent is continuous at
//! every midpoint, and no segment leaves the bounding box of its endpoints,
//! so the curve never overshoots the local extremes of the data.

use kurbo::{BezPath, ParamCurve, ParamCurveArclen, QuadBez};

use crate::geom::{Point, Step};
use crate::view::Range;

/// Default number of arc-length samples used by [`CurvePath::nearest_point`].
pub const DEFAULT_HIT_SAMPLES: usize = 100;

const ARCLEN_ACCURACY: f64 = 1e-6;
const REFINE_ITERATIONS: usize = 52;

/// A single quadratic Bézier piece of a curve path.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CurveSegment {
    /// Segment start.
    pub start: Point,
    /// Quadratic control point.
    pub control: Point,
    /// Segment end.
    pub end: Point,
}

impl CurveSegment {
    /// Create a new segment.
    pub fn new(start: Point, control: Point, end: Point) -> Self {
        Self {
            start,
            control,
            end,
        }
    }

    /// View the segment as a kurbo quadratic Bézier.
    pub fn to_quad(&self) -> QuadBez {
        QuadBez::new(self.start, self.control, self.end)
    }

    /// Evaluate the segment at parameter `t` in `0..=1`.
    pub fn eval(&self, t: f64) -> Point {
        self.to_quad().eval(t)
    }

    /// Horizontal extent covered by the segment.
    pub fn x_range(&self) -> Range {
        Range::new(self.start.x, self.end.x)
    }

    /// Arc length of the segment.
    pub fn arclen(&self) -> f64 {
        self.to_quad().arclen(ARCLEN_ACCURACY)
    }

    // Requires x to be monotone over the segment, which holds whenever the
    // control x lies between the endpoint xs.
    fn t_at_x(&self, x: f64) -> f64 {
        let quad = self.to_quad();
        let ascending = self.end.x >= self.start.x;
        let (mut lo, mut hi) = (0.0_f64, 1.0_f64);
        for _ in 0..REFINE_ITERATIONS {
            let mid = 0.5 * (lo + hi);
            let below = quad.eval(mid).x < x;
            if below == ascending {
                lo = mid;
            } else {
                hi = mid;
            }
        }
        0.5 * (lo + hi)
    }
}

/// Control point for the quadratic leg from `a` toward `b`.
///
/// Returns `a` for a vertical leg. Otherwise the control sits halfway between
/// the two points horizontally and at `b`'s height, which bows the leg toward
/// the corner between them.
pub fn control_point(a: Point, b: Point) -> Point {
    if a.x == b.x {
        return a;
    }
    Point::new(a.midpoint(b).x, b.y)
}

/// An ordered sequence of quadratic segments forming one continuous curve.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CurvePath {
    segments: Vec<CurveSegment>,
}

/// Build a smooth curve through `points`.
///
/// Sample `i` is placed at `(i * step.dx, (points[i] - min) * step.dy)`.
/// Fewer than two points produce an empty path.
pub fn build_path(points: &[f64], step: Step) -> CurvePath {
    debug_assert!(
        points.iter().all(|point| point.is_finite()),
        "curve points must be finite"
    );
    if points.len() < 2 {
        return CurvePath::default();
    }

    let offset = points.iter().copied().fold(f64::INFINITY, f64::min);
    let vertex = |index: usize, value: f64| {
        Point::new(index as f64 * step.dx, (value - offset) * step.dy)
    };

    let mut segments = Vec::with_capacity(2 * (points.len() - 1));
    let mut previous = vertex(0, points[0]);
    for (index, &value) in points.iter().enumerate().skip(1) {
        let next = vertex(index, value);
        let mid = previous.midpoint(next);
        segments.push(CurveSegment::new(previous, control_point(mid, previous), mid));
        segments.push(CurveSegment::new(mid, control_point(mid, next), next));
        previous = next;
    }
    CurvePath { segments }
}

impl CurvePath {
    /// Access the segments in drawing order.
    pub fn segments(&self) -> &[CurveSegment] {
        &self.segments
    }

    /// Number of segments.
    pub fn len(&self) -> usize {
        self.segments.len()
    }

    /// Check if the path has no segments.
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// First point of the path.
    pub fn start(&self) -> Option<Point> {
        self.segments.first().map(|segment| segment.start)
    }

    /// Last point of the path.
    pub fn end(&self) -> Option<Point> {
        self.segments.last().map(|segment| segment.end)
    }

    /// Horizontal extent of the path.
    pub fn x_extent(&self) -> Option<Range> {
        Some(Range::new(self.start()?.x, self.end()?.x))
    }

    /// Total arc length.
    pub fn arclen(&self) -> f64 {
        self.segments.iter().map(CurveSegment::arclen).sum()
    }

    /// Point on the path at horizontal position `x`, if `x` is inside the
    /// path's extent.
    pub fn eval_at_x(&self, x: f64) -> Option<Point> {
        let segment = self
            .segments
            .iter()
            .find(|segment| segment.x_range().contains(x))?;
        Some(segment.eval(segment.t_at_x(x)))
    }

    /// Point on the path closest to `fractional_x` horizontally.
    ///
    /// Uses [`DEFAULT_HIT_SAMPLES`] arc-length samples.
    pub fn nearest_point(&self, fractional_x: f64) -> Point {
        self.nearest_point_with_resolution(fractional_x, DEFAULT_HIT_SAMPLES)
    }

    /// Point on the path closest to `fractional_x` horizontally.
    ///
    /// The path is sampled at `samples + 1` evenly spaced arc-length
    /// positions, the sample nearest by x is chosen, and the result is then
    /// refined inside the owning segment so it lies exactly on the curve at
    /// `fractional_x` clamped into the path's extent. An empty or zero-length
    /// path yields the origin.
    pub fn nearest_point_with_resolution(&self, fractional_x: f64, samples: usize) -> Point {
        debug_assert!(fractional_x.is_finite(), "query x must be finite");
        let Some(extent) = self.x_extent() else {
            return Point::ORIGIN;
        };
        let lengths: Vec<f64> = self.segments.iter().map(CurveSegment::arclen).collect();
        let total: f64 = lengths.iter().sum();
        if total <= 0.0 || !total.is_finite() {
            return Point::ORIGIN;
        }

        let samples = samples.max(1);
        let mut best: Option<(usize, Point, f64)> = None;
        for step in 0..=samples {
            let target = total * step as f64 / samples as f64;
            let (index, t) = locate(&self.segments, &lengths, target);
            let point = self.segments[index].eval(t);
            let distance = (point.x - fractional_x).abs();
            if best.is_none_or(|best| distance < best.2) {
                best = Some((index, point, distance));
            }
        }
        let Some((best_index, coarse, _)) = best else {
            return Point::ORIGIN;
        };

        let target_x = extent.clamp(fractional_x);
        let count = self.segments.len();
        let refined = (0..count)
            .flat_map(|offset| [best_index.checked_sub(offset), Some(best_index + offset)])
            .flatten()
            .filter(|index| *index < count)
            .find(|index| self.segments[*index].x_range().contains(target_x));
        match refined {
            Some(index) => {
                let segment = &self.segments[index];
                segment.eval(segment.t_at_x(target_x))
            }
            None => coarse,
        }
    }

    /// The path as a kurbo [`BezPath`] for renderers.
    pub fn to_bez_path(&self) -> BezPath {
        let mut path = BezPath::new();
        let Some(start) = self.start() else {
            return path;
        };
        path.move_to(start);
        for segment in &self.segments {
            path.quad_to(segment.control, segment.end);
        }
        path
    }

    /// Closed region between the curve and a horizontal baseline.
    pub fn area_path(&self, baseline_y: f64) -> BezPath {
        let mut path = self.to_bez_path();
        let (Some(start), Some(end)) = (self.start(), self.end()) else {
            return path;
        };
        path.line_to(Point::new(end.x, baseline_y));
        path.line_to(Point::new(start.x, baseline_y));
        path.close_path();
        path
    }
}

fn locate(segments: &[CurveSegment], lengths: &[f64], target: f64) -> (usize, f64) {
    let last = segments.len() - 1;
    let mut remaining = target;
    for (index, (segment, &length)) in segments.iter().zip(lengths).enumerate() {
        if remaining <= length || index == last {
            let t = if length > 0.0 {
                segment
                    .to_quad()
                    .inv_arclen(remaining.clamp(0.0, length), ARCLEN_ACCURACY)
            } else {
                0.0
            };
            return (index, t);
        }
        remaining -= length;
    }
    (last, 1.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    fn close(a: Point, b: Point, tol: f64) -> bool {
        (a.x - b.x).abs() <= tol && (a.y - b.y).abs() <= tol
    }

    #[test]
    fn fewer_than_two_points_is_empty() {
        assert!(build_path(&[], Step::UNIT).is_empty());
        assert!(build_path(&[0.4], Step::UNIT).is_empty());
        assert_eq!(build_path(&[0.4], Step::UNIT).to_bez_path().elements().len(), 0);
    }

    #[test]
    fn two_points_chain_through_midpoint() {
        let path = build_path(&[0.0, 1.0], Step::UNIT);
        let segments = path.segments();
        assert_eq!(segments.len(), 2);
        let mid = Point::new(0.5, 0.5);
        assert_eq!(segments[0].start, Point::new(0.0, 0.0));
        assert_eq!(segments[0].end, mid);
        assert_eq!(segments[1].start, mid);
        assert_eq!(segments[1].end, Point::new(1.0, 1.0));
        assert_eq!(segments[0].control, Point::new(0.25, 0.0));
        assert_eq!(segments[1].control, Point::new(0.75, 1.0));
    }

    #[test]
    fn vertices_sit_above_minimum_with_step() {
        let values = [0.5, -0.25, 1.0];
        let path = build_path(&values, Step::new(2.0, 3.0));
        assert_eq!(path.len(), 4);
        for (index, value) in values.iter().enumerate() {
            let x = index as f64 * 2.0;
            let expected = Point::new(x, (value + 0.25) * 3.0);
            let actual = path.eval_at_x(x).expect("inside extent");
            assert!(close(actual, expected, EPS), "{actual:?} != {expected:?}");
        }
    }

    #[test]
    fn tangent_is_continuous_at_midpoints() {
        let path = build_path(&[0.2, 0.9, 0.1, 0.6], Step::UNIT);
        for pair in path.segments().windows(2) {
            let incoming = pair[0].end - pair[0].control;
            let outgoing = pair[1].control - pair[1].start;
            let cross = incoming.x * outgoing.y - incoming.y * outgoing.x;
            assert!(cross.abs() < EPS, "tangent break at {:?}", pair[0].end);
            assert!(incoming.dot(outgoing) >= 0.0);
        }
    }

    #[test]
    fn controls_stay_inside_segment_bounds() {
        let path = build_path(&[0.0, 1.0, -1.0, 0.5, 0.5], Step::UNIT);
        for segment in path.segments() {
            let xs = segment.x_range();
            let ys = Range::new(segment.start.y, segment.end.y);
            assert!(xs.contains(segment.control.x));
            assert!(ys.contains(segment.control.y));
        }
    }

    #[test]
    fn vertical_leg_uses_start_as_control() {
        let a = Point::new(1.0, 0.0);
        let b = Point::new(1.0, 4.0);
        assert_eq!(control_point(a, b), a);
    }

    #[test]
    fn nearest_point_hits_vertices() {
        let values = [0.186, 0.535, 0.744, 0.163, 0.535, 1.0];
        let path = build_path(&values, Step::UNIT);
        let offset = 0.163;
        for (index, value) in values.iter().enumerate() {
            let point = path.nearest_point(index as f64);
            let expected = Point::new(index as f64, value - offset);
            assert!(close(point, expected, 1e-6), "{point:?} != {expected:?}");
        }
    }

    #[test]
    fn nearest_point_clamps_outside_extent() {
        let path = build_path(&[0.0, 0.5, 1.0], Step::UNIT);
        assert!(close(path.nearest_point(-3.0), Point::new(0.0, 0.0), 1e-6));
        assert!(close(path.nearest_point(7.0), Point::new(2.0, 1.0), 1e-6));
    }

    #[test]
    fn nearest_point_on_empty_path_is_origin() {
        assert_eq!(CurvePath::default().nearest_point(1.5), Point::ORIGIN);
        let flat = build_path(&[0.0, 0.0], Step::new(0.0, 1.0));
        assert_eq!(flat.nearest_point(0.0), Point::ORIGIN);
    }

    #[test]
    fn coarse_resolution_still_lands_on_curve() {
        let path = build_path(&[0.1, 0.8, 0.3, 0.9, 0.0, 0.4, 0.7], Step::UNIT);
        let point = path.nearest_point_with_resolution(3.3, 1);
        let exact = path.eval_at_x(3.3).expect("inside extent");
        assert!(close(point, exact, 1e-9));
    }

    #[test]
    fn area_path_closes_to_baseline() {
        let path = build_path(&[0.0, 1.0, 0.5], Step::UNIT);
        let area = path.area_path(0.0);
        // move + 4 quads + 2 lines + close
        assert_eq!(area.elements().len(), 8);
    }

    #[test]
    fn arclen_sits_between_chord_and_control_polygon() {
        let path = build_path(&[0.0, 1.0], Step::UNIT);
        let chord = 2.0_f64.sqrt();
        let polygon = 2.0 * (0.25 + (0.25_f64 * 0.25 + 0.5 * 0.5).sqrt());
        let length = path.arclen();
        assert!(length > chord && length < polygon);
        assert_eq!(CurvePath::default().arclen(), 0.0);
    }
}
