//! Error types for chart input validation.
//!
//! Only malformed input is an error. Degenerate geometry (too few samples,
//! a flat series, a zero-width view) has defined defaults and never surfaces
//! here.

use thiserror::Error;

/// Convenience alias for results produced by this crate.
pub type ChartResult<T> = Result<T, ChartError>;

/// Errors raised when chart input cannot be turned into geometry.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum ChartError {
    /// A sample value was NaN or infinite.
    #[error("sample {index} has non-finite value {value}")]
    NonFiniteValue {
        /// Position of the offending sample in the series.
        index: usize,
        /// The rejected value.
        value: f64,
    },
    /// A configuration field is out of its accepted domain.
    #[error("invalid chart config: {0}")]
    InvalidConfig(&'static str),
}
