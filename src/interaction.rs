//! Touch interaction: mapping pointer positions onto samples and the curve.
//!
//! Only the horizontal touch position matters. It is turned into a sample
//! index for value readout and into a point on the curve for the indicator.

use tracing::trace;

use crate::curve::{CurvePath, DEFAULT_HIT_SAMPLES};
use crate::geom::{Point, Step};
use crate::normalize::NormalizedSeries;
use crate::series::ChartData;
use crate::transform::PathScale;
use crate::view::ViewSize;

/// Raw sample index under a touch.
///
/// Inside `[0, view_width]` this is `round(touch_x / view_width * (n - 1))`.
/// Outside that interval the formula is not applied, even for overshoots that
/// would round back into range: any touch left of the view yields `-1` and
/// any touch right of it yields `sample_count`. A non-positive width or an empty
/// series also yields `-1`. Use [`sample_index`] for a checked index.
pub fn touch_to_index(touch_x: f64, view_width: f64, sample_count: usize) -> isize {
    if sample_count == 0 || !(view_width > 0.0) || !touch_x.is_finite() || touch_x < 0.0 {
        return -1;
    }
    if touch_x > view_width {
        return sample_count as isize;
    }
    let last = (sample_count - 1) as f64;
    (touch_x / view_width * last).round() as isize
}

/// Checked sample index under a touch, `None` when out of range.
pub fn sample_index(touch_x: f64, view_width: f64, sample_count: usize) -> Option<usize> {
    let raw = touch_to_index(touch_x, view_width, sample_count);
    usize::try_from(raw)
        .ok()
        .filter(|index| *index < sample_count)
}

/// Curve point under a touch, in view fraction space (`0..=1`, Y up).
///
/// The touch is moved into path space, the nearest curve point is found, and
/// the result is descaled by `normalized_count - 1` and `range`. Returns
/// `None` when the geometry is degenerate (fewer than two points, a flat
/// series, or a non-positive width).
pub fn touch_to_path_point(
    touch_x: f64,
    view_width: f64,
    path: &CurvePath,
    normalized_count: usize,
    range: f64,
) -> Option<Point> {
    touch_to_path_point_with_resolution(
        touch_x,
        view_width,
        path,
        normalized_count,
        range,
        DEFAULT_HIT_SAMPLES,
    )
}

/// [`touch_to_path_point`] with an explicit hit-test resolution.
pub fn touch_to_path_point_with_resolution(
    touch_x: f64,
    view_width: f64,
    path: &CurvePath,
    normalized_count: usize,
    range: f64,
    samples: usize,
) -> Option<Point> {
    if !(view_width > 0.0) || !touch_x.is_finite() {
        return None;
    }
    let scale = PathScale::new(normalized_count, range, Step::UNIT)?;
    let fractional_x = touch_x / view_width * scale.x_units();
    let closest = path.nearest_point_with_resolution(fractional_x, samples);
    Some(scale.descale(closest))
}

/// The currently observed value, shared with readout consumers.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartValue<K> {
    current_key: Option<K>,
    current_value: f64,
    interaction_in_progress: bool,
}

impl<K> Default for ChartValue<K> {
    fn default() -> Self {
        Self {
            current_key: None,
            current_value: 0.0,
            interaction_in_progress: false,
        }
    }
}

impl<K> ChartValue<K> {
    /// Key of the last highlighted sample.
    pub fn current_key(&self) -> Option<&K> {
        self.current_key.as_ref()
    }

    /// Value of the last highlighted sample.
    pub fn current_value(&self) -> f64 {
        self.current_value
    }

    /// Whether a touch is currently active.
    pub fn interaction_in_progress(&self) -> bool {
        self.interaction_in_progress
    }
}

/// A sample picked out by a touch.
#[derive(Debug, Clone, PartialEq)]
pub struct Highlight<K> {
    /// Index of the sample in the series.
    pub index: usize,
    /// Sample key.
    pub key: K,
    /// Raw sample value.
    pub value: f64,
    /// Indicator position in view fraction space, when the curve is drawable.
    pub position: Option<Point>,
}

/// Events emitted to side-channel observers.
#[derive(Debug, Clone, PartialEq)]
pub enum HighlightEvent<K> {
    /// A touch landed on a sample.
    Observed(Highlight<K>),
    /// The touch ended.
    Released,
}

/// Drag state for one line: indicator placement and the observed value.
#[derive(Debug, Clone)]
pub struct LineInteraction<K> {
    value: ChartValue<K>,
    indicator: Option<Point>,
}

impl<K> Default for LineInteraction<K> {
    fn default() -> Self {
        Self {
            value: ChartValue::default(),
            indicator: None,
        }
    }
}

impl<K: Clone> LineInteraction<K> {
    /// Create an idle interaction.
    pub fn new() -> Self {
        Self::default()
    }

    /// The observed value.
    pub fn value(&self) -> &ChartValue<K> {
        &self.value
    }

    /// Indicator position in view fraction space while a touch is active.
    pub fn indicator(&self) -> Option<Point> {
        self.indicator
    }

    /// Handle a touch down or move at `touch` (view pixels).
    ///
    /// The indicator follows the curve regardless of where the touch is; the
    /// observed key and value only change when the touch maps onto a sample.
    pub fn drag(
        &mut self,
        touch: Point,
        size: ViewSize,
        data: &ChartData<K>,
        path: &CurvePath,
        normalized: &NormalizedSeries,
        hit_samples: usize,
    ) -> Option<Highlight<K>> {
        self.value.interaction_in_progress = true;
        self.indicator = touch_to_path_point_with_resolution(
            touch.x,
            size.width,
            path,
            normalized.len(),
            normalized.range(),
            hit_samples,
        );

        let index = sample_index(touch.x, size.width, data.len())?;
        let sample = data.sample(index)?;
        self.value.current_key = Some(sample.key.clone());
        self.value.current_value = sample.value;
        trace!(index, value = sample.value, "highlight sample");
        Some(Highlight {
            index,
            key: sample.key.clone(),
            value: sample.value,
            position: self.indicator,
        })
    }

    /// Handle the end of a touch.
    pub fn release(&mut self) {
        self.indicator = None;
        self.value.interaction_in_progress = false;
        trace!("highlight released");
    }
}
