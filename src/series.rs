//! Chart data storage.
//!
//! [`ChartData`] owns the ordered samples of one line. Every mutation bumps a
//! generation counter, which is how downstream caches learn that the curve
//! must be rebuilt.

use tracing::{debug, trace};

use crate::error::ChartResult;
use crate::normalize::{NormalizedSeries, is_negative_domain, normalize};

/// One keyed sample. The key labels the sample; its position in the series
/// is its X coordinate.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Sample<K> {
    /// Label reported when the sample is highlighted.
    pub key: K,
    /// Sample value.
    pub value: f64,
}

impl<K> Sample<K> {
    /// Create a new sample.
    pub fn new(key: K, value: f64) -> Self {
        Self { key, value }
    }
}

/// Ordered samples with generation tracking.
#[derive(Debug, Clone)]
pub struct ChartData<K> {
    samples: Vec<Sample<K>>,
    generation: u64,
}

impl<K> Default for ChartData<K> {
    fn default() -> Self {
        Self {
            samples: Vec::new(),
            generation: 0,
        }
    }
}

impl<K> ChartData<K> {
    /// Create an empty data set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a data set from `(key, value)` pairs.
    pub fn from_samples<I>(iter: I) -> Self
    where
        I: IntoIterator<Item = (K, f64)>,
    {
        Self {
            samples: iter
                .into_iter()
                .map(|(key, value)| Sample::new(key, value))
                .collect(),
            generation: 0,
        }
    }

    /// Access all samples.
    pub fn samples(&self) -> &[Sample<K>] {
        &self.samples
    }

    /// Access a single sample by index.
    pub fn sample(&self, index: usize) -> Option<&Sample<K>> {
        self.samples.get(index)
    }

    /// Sample values in order.
    pub fn values(&self) -> Vec<f64> {
        self.samples.iter().map(|sample| sample.value).collect()
    }

    /// Sample keys in order.
    pub fn keys(&self) -> impl Iterator<Item = &K> {
        self.samples.iter().map(|sample| &sample.key)
    }

    /// Number of samples.
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    /// Check if there are no samples.
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Replace every sample.
    pub fn set_samples<I>(&mut self, iter: I)
    where
        I: IntoIterator<Item = (K, f64)>,
    {
        self.samples.clear();
        self.samples.extend(
            iter.into_iter()
                .map(|(key, value)| Sample::new(key, value)),
        );
        self.bump();
        debug!(count = self.samples.len(), "set chart samples");
    }

    /// Append a sample and return its index.
    pub fn push(&mut self, key: K, value: f64) -> usize {
        let index = self.samples.len();
        self.samples.push(Sample::new(key, value));
        self.bump();
        trace!(index, value, "append chart sample");
        index
    }

    /// Remove every sample.
    pub fn clear(&mut self) {
        self.samples.clear();
        self.bump();
    }

    /// Data generation; increments on every mutation.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Normalize the current values.
    pub fn normalized(&self) -> ChartResult<NormalizedSeries> {
        normalize(&self.values())
    }

    /// True iff the smallest value is negative.
    pub fn is_negative_domain(&self) -> bool {
        is_negative_domain(&self.values())
    }

    fn bump(&mut self) {
        self.generation = self.generation.wrapping_add(1);
    }
}

impl ChartData<usize> {
    /// Build a data set from bare values, keyed by sample index.
    pub fn from_values<I, T>(iter: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<f64>,
    {
        Self::from_samples(
            iter.into_iter()
                .enumerate()
                .map(|(index, value)| (index, value.into())),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mutations_bump_generation() {
        let mut data = ChartData::from_values([1.0, 2.0]);
        assert_eq!(data.generation(), 0);
        assert_eq!(data.push(2, 3.0), 2);
        assert_eq!(data.generation(), 1);
        data.set_samples([(0, 4.0)]);
        assert_eq!(data.generation(), 2);
        assert_eq!(data.values(), vec![4.0]);
        data.clear();
        assert_eq!(data.generation(), 3);
        assert!(data.is_empty());
    }

    #[test]
    fn keys_are_positional_not_sorted() {
        let data = ChartData::from_samples([("b", 1.0), ("a", 2.0), ("b", 3.0)]);
        let keys: Vec<_> = data.keys().copied().collect();
        assert_eq!(keys, vec!["b", "a", "b"]);
        assert_eq!(data.sample(1), Some(&Sample::new("a", 2.0)));
    }

    #[test]
    fn normalization_reports_bad_samples() {
        let data = ChartData::from_values([1.0, f64::NAN]);
        assert!(data.normalized().is_err());
        let data = ChartData::from_values([-2.0_f32, 4.0]);
        assert!(data.is_negative_domain());
        assert_eq!(data.normalized().unwrap().points(), &[-0.5, 1.0]);
    }
}
