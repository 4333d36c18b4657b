//! Geometric primitives used by the curve pipeline.
//!
//! Points are [`kurbo::Point`]s. Which space a point lives in (path space,
//! view fraction, or view pixels) is documented at each call site.

pub use kurbo::Point;

/// Per-sample increment used when laying samples out along a path.
///
/// `dx` is the horizontal distance between consecutive samples and `dy`
/// scales the vertical offset of each sample above the series minimum.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Step {
    /// Horizontal increment per sample.
    pub dx: f64,
    /// Vertical scale factor.
    pub dy: f64,
}

impl Step {
    /// One unit per sample on both axes.
    pub const UNIT: Self = Self::new(1.0, 1.0);

    /// Create a new step.
    pub const fn new(dx: f64, dy: f64) -> Self {
        Self { dx, dy }
    }
}

impl Default for Step {
    fn default() -> Self {
        Self::UNIT
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_step_is_unit() {
        assert_eq!(Step::default(), Step::new(1.0, 1.0));
    }
}
