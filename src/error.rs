//! Error types for scanr

use crate::dtype::DType;
use thiserror::Error;

/// Result type alias using scanr's Error
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in scanr operations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Scan axis outside `[-ndim, ndim)`
    #[error("Expected scan axis in the range [-{ndim}, {ndim}), but got {axis}")]
    InvalidAxis {
        /// The axis as supplied by the caller (before normalization)
        axis: isize,
        /// Number of dimensions of the scanned array
        ndim: usize,
    },

    /// Axis argument was an array instead of a scalar
    #[error("axis must be a scalar, but got an array of shape {shape:?}")]
    InvalidAxisShape {
        /// Shape of the offending axis array
        shape: Vec<usize>,
    },

    /// Unsupported dtype for an operation
    #[error("Unsupported dtype {dtype:?} for operation '{op}'")]
    UnsupportedDType {
        /// The unsupported dtype
        dtype: DType,
        /// The operation name
        op: &'static str,
    },

    /// Typed access with a Rust type that does not match the array's dtype
    #[error("DType mismatch: expected {expected:?}, got {got:?}")]
    DTypeMismatch {
        /// The dtype requested by the caller
        expected: DType,
        /// The dtype stored in the array
        got: DType,
    },

    /// Data length does not match the shape
    #[error("Shape mismatch: expected {expected:?}, got {got:?}")]
    ShapeMismatch {
        /// Expected shape
        expected: Vec<usize>,
        /// Actual shape (or `[len]` for flat buffers)
        got: Vec<usize>,
    },
}

impl Error {
    /// Create an invalid axis error
    pub fn invalid_axis(axis: isize, ndim: usize) -> Self {
        Self::InvalidAxis { axis, ndim }
    }

    /// Create an unsupported dtype error
    pub fn unsupported_dtype(dtype: DType, op: &'static str) -> Self {
        Self::UnsupportedDType { dtype, op }
    }

    /// Create a shape mismatch error
    pub fn shape_mismatch(expected: &[usize], got: &[usize]) -> Self {
        Self::ShapeMismatch {
            expected: expected.to_vec(),
            got: got.to_vec(),
        }
    }
}
