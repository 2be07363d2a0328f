//! Error types for fabsim.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    /// A physical input is outside the domain of the model.
    #[error("invalid parameter {name} = {value}: {reason}")]
    InvalidParameter {
        name: &'static str,
        value: f64,
        reason: &'static str,
    },

    #[error("length mismatch: expected {expected} samples, got {actual}")]
    DimensionMismatch { expected: usize, actual: usize },

    #[error("depth axis needs at least 2 samples, got {len}")]
    AxisTooShort { len: usize },

    #[error("depth axis is not strictly increasing at index {index}")]
    NonMonotonicAxis { index: usize },

    #[error("depth axis spacing is not uniform at index {index}")]
    NonUniformAxis { index: usize },
}

pub type Result<T> = std::result::Result<T, Error>;
