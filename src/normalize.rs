//! Normalization of raw samples into a dimensionless space.
//!
//! Values are divided by the largest absolute value in the series so every
//! normalized point lies in `[-1, 1]`. Curve building and hit testing work in
//! this space; renderers rescale to their drawing region afterwards.

use crate::error::{ChartError, ChartResult};
use crate::view::Range;

/// A series scaled by its maximum absolute value.
#[derive(Debug, Clone, PartialEq)]
pub struct NormalizedSeries {
    points: Vec<f64>,
    max_abs: f64,
}

impl NormalizedSeries {
    /// Access the normalized points.
    pub fn points(&self) -> &[f64] {
        &self.points
    }

    /// The divisor used to normalize the series.
    ///
    /// `1.0` for an empty series and `0.0` when every input was zero.
    pub fn max_abs(&self) -> f64 {
        self.max_abs
    }

    /// Number of points.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Check if the series has no points.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Normalized vertical range, see [`range`].
    pub fn range(&self) -> f64 {
        range(&self.points)
    }

    /// Normalized bounds, or `None` when empty.
    pub fn bounds(&self) -> Option<Range> {
        Range::from_values(self.points.iter().copied())
    }

    /// Map a normalized value back into raw sample units.
    pub fn denormalize(&self, point: f64) -> f64 {
        point * self.max_abs
    }
}

/// Normalize raw values by their maximum absolute value.
///
/// Non-finite values are rejected with [`ChartError::NonFiniteValue`]. An
/// all-zero series is returned unscaled.
pub fn normalize(values: &[f64]) -> ChartResult<NormalizedSeries> {
    let mut max_abs: f64 = 0.0;
    for (index, &value) in values.iter().enumerate() {
        if !value.is_finite() {
            return Err(ChartError::NonFiniteValue { index, value });
        }
        max_abs = max_abs.max(value.abs());
    }

    if values.is_empty() {
        return Ok(NormalizedSeries {
            points: Vec::new(),
            max_abs: 1.0,
        });
    }

    let points = if max_abs > 0.0 {
        values.iter().map(|value| value / max_abs).collect()
    } else {
        values.to_vec()
    };
    Ok(NormalizedSeries { points, max_abs })
}

/// `max - min` over the points, `0.0` when empty.
pub fn range(points: &[f64]) -> f64 {
    Range::from_values(points.iter().copied())
        .map(|range| range.span())
        .unwrap_or(0.0)
}

/// True iff the minimum raw value is negative.
///
/// Renderers use this to decide whether the drawing origin needs flipping.
pub fn is_negative_domain(values: &[f64]) -> bool {
    values.iter().any(|value| *value < 0.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_values_normalize_to_unit() {
        assert_eq!(normalize(&[5.0]).unwrap().points(), &[1.0]);
        assert_eq!(normalize(&[-5.0]).unwrap().points(), &[-1.0]);
    }

    #[test]
    fn all_zero_series_is_identity() {
        let series = normalize(&[0.0, 0.0, 0.0]).unwrap();
        assert_eq!(series.points(), &[0.0, 0.0, 0.0]);
        assert_eq!(series.max_abs(), 0.0);
        assert_eq!(series.range(), 0.0);
    }

    #[test]
    fn empty_series_uses_unit_divisor() {
        let series = normalize(&[]).unwrap();
        assert!(series.is_empty());
        assert_eq!(series.max_abs(), 1.0);
        assert_eq!(series.range(), 0.0);
        assert!(series.bounds().is_none());
    }

    #[test]
    fn mixed_signs_scale_by_largest_magnitude() {
        let series = normalize(&[2.0, -8.0, 4.0]).unwrap();
        assert_eq!(series.points(), &[0.25, -1.0, 0.5]);
        assert_eq!(series.range(), 1.5);
        assert_eq!(series.denormalize(0.5), 4.0);
    }

    #[test]
    fn rejects_non_finite_values() {
        let err = normalize(&[1.0, f64::NAN]).unwrap_err();
        assert!(matches!(err, ChartError::NonFiniteValue { index: 1, .. }));
        let err = normalize(&[f64::INFINITY]).unwrap_err();
        assert!(matches!(err, ChartError::NonFiniteValue { index: 0, .. }));
    }

    #[test]
    fn negative_domain_follows_minimum() {
        assert!(is_negative_domain(&[3.0, -0.5, 2.0]));
        assert!(!is_negative_domain(&[0.0, 1.0]));
        assert!(!is_negative_domain(&[]));
    }
}
