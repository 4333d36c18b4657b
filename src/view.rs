//! View sizes and value ranges.

/// Numeric range with inclusive bounds.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Range {
    /// Minimum value.
    pub min: f64,
    /// Maximum value.
    pub max: f64,
}

impl Range {
    /// Create a new range, swapping bounds if needed.
    pub fn new(mut min: f64, mut max: f64) -> Self {
        if min > max {
            std::mem::swap(&mut min, &mut max);
        }
        Self { min, max }
    }

    /// Build the tightest range covering every value, if there is any.
    pub fn from_values(values: impl IntoIterator<Item = f64>) -> Option<Self> {
        let mut range: Option<Self> = None;
        for value in values {
            match range.as_mut() {
                None => range = Some(Self::new(value, value)),
                Some(existing) => existing.expand_to_include(value),
            }
        }
        range
    }

    /// Span of the range.
    pub fn span(&self) -> f64 {
        self.max - self.min
    }

    /// Expand the range to include a value.
    pub fn expand_to_include(&mut self, value: f64) {
        if !value.is_finite() {
            return;
        }
        if value < self.min {
            self.min = value;
        }
        if value > self.max {
            self.max = value;
        }
    }

    /// Check whether a value lies inside the range.
    pub fn contains(&self, value: f64) -> bool {
        value >= self.min && value <= self.max
    }

    /// Clamp a value into the range.
    pub fn clamp(&self, value: f64) -> f64 {
        value.max(self.min).min(self.max)
    }
}

/// Size of the drawing region in view units (logical pixels).
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ViewSize {
    /// Width of the region.
    pub width: f64,
    /// Height of the region.
    pub height: f64,
}

impl ViewSize {
    /// Create a new view size.
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Check whether the size has positive, finite area.
    pub fn is_valid(&self) -> bool {
        self.width.is_finite() && self.height.is_finite() && self.width > 0.0 && self.height > 0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn range_from_values_tracks_extremes() {
        let range = Range::from_values([3.0, -1.0, 7.5, 2.0]).expect("non-empty");
        assert_eq!(range, Range::new(-1.0, 7.5));
        assert_eq!(range.span(), 8.5);
        assert!(Range::from_values(std::iter::empty()).is_none());
    }

    #[test]
    fn range_new_swaps_bounds() {
        let range = Range::new(4.0, 1.0);
        assert_eq!(range.min, 1.0);
        assert_eq!(range.max, 4.0);
        assert_eq!(range.clamp(9.0), 4.0);
        assert!(range.contains(2.5));
    }

    #[test]
    fn zero_width_view_is_invalid() {
        assert!(!ViewSize::new(0.0, 10.0).is_valid());
        assert!(ViewSize::new(320.0, 200.0).is_valid());
    }
}
