//! Chart configuration.

use crate::curve::DEFAULT_HIT_SAMPLES;
use crate::error::{ChartError, ChartResult};

/// Configuration shared by the chart model and its render backends.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ChartConfig {
    /// Arc-length samples used when searching for the curve point nearest a
    /// touch.
    pub hit_samples: usize,
    /// Fill the area under the curve with the background gradient.
    pub show_background: bool,
    /// Draw the indicator while a touch is in progress.
    pub show_indicator: bool,
    /// Indicator radius in pixels.
    pub indicator_radius: f32,
    /// Indicator ring width in pixels.
    pub indicator_ring_width: f32,
}

impl ChartConfig {
    /// Check every field against its accepted domain.
    pub fn validate(&self) -> ChartResult<()> {
        if self.hit_samples == 0 {
            return Err(ChartError::InvalidConfig("hit_samples must be positive"));
        }
        if !self.indicator_radius.is_finite() || self.indicator_radius < 0.0 {
            return Err(ChartError::InvalidConfig(
                "indicator_radius must be finite and non-negative",
            ));
        }
        if !self.indicator_ring_width.is_finite() || self.indicator_ring_width < 0.0 {
            return Err(ChartError::InvalidConfig(
                "indicator_ring_width must be finite and non-negative",
            ));
        }
        Ok(())
    }
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            hit_samples: DEFAULT_HIT_SAMPLES,
            show_background: false,
            show_indicator: true,
            indicator_radius: 7.0,
            indicator_ring_width: 2.0,
        }
    }
}
