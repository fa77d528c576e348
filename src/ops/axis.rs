//! Scan axis validation and resolution

use crate::dtype::DType;
use crate::error::{Error, Result};
use crate::tensor::DenseArray;

/// Normalize a possibly negative axis against an array rank.
///
/// Accepts `axis` in `[-ndim, ndim)`; negative values count from the end.
/// Anything outside that range, including every axis of a rank-0 array, is
/// an [`Error::InvalidAxis`]. Axes are never clamped or wrapped.
///
/// ```
/// use scanr::ops::normalize_axis;
///
/// assert_eq!(normalize_axis(-1, 3).unwrap(), 2);
/// assert!(normalize_axis(3, 3).is_err());
/// ```
#[inline]
pub fn normalize_axis(axis: isize, ndim: usize) -> Result<usize> {
    let rank = ndim as isize;
    if axis < -rank || axis >= rank {
        return Err(Error::invalid_axis(axis, ndim));
    }
    let normalized = if axis < 0 { axis + rank } else { axis };
    Ok(normalized as usize)
}

/// Axis argument as handed over by a caller
///
/// Graph runtimes pass the axis as a tensor operand rather than a Rust
/// integer. `AxisArg` accepts both forms and resolves them to a single
/// `isize`, rejecting anything that is not one integer scalar.
#[derive(Clone, Copy, Debug)]
pub enum AxisArg<'a> {
    /// A plain integer axis
    Scalar(isize),
    /// An axis supplied as an integer array; must be rank 0
    Array(&'a DenseArray),
    /// An axis supplied as a list of integers; never accepted
    List(&'a [isize]),
}

impl AxisArg<'_> {
    /// Resolve to a scalar axis (not yet normalized against any rank)
    pub fn resolve(&self) -> Result<isize> {
        match *self {
            AxisArg::Scalar(axis) => Ok(axis),
            AxisArg::List(values) => Err(Error::InvalidAxisShape {
                shape: vec![values.len()],
            }),
            AxisArg::Array(array) => {
                if array.ndim() != 0 {
                    return Err(Error::InvalidAxisShape {
                        shape: array.shape().to_vec(),
                    });
                }
                match array.dtype() {
                    DType::I32 => Ok(array.item::<i32>()? as isize),
                    DType::I64 => Ok(saturating_axis(array.item::<i64>()?)),
                    dtype => Err(Error::unsupported_dtype(dtype, "scan axis")),
                }
            }
        }
    }
}

impl From<isize> for AxisArg<'_> {
    fn from(axis: isize) -> Self {
        AxisArg::Scalar(axis)
    }
}

impl From<i32> for AxisArg<'_> {
    fn from(axis: i32) -> Self {
        AxisArg::Scalar(axis as isize)
    }
}

impl From<i64> for AxisArg<'_> {
    fn from(axis: i64) -> Self {
        AxisArg::Scalar(saturating_axis(axis))
    }
}

/// Convert an i64 axis to `isize`, saturating values that do not fit.
///
/// A saturated axis lies outside `[-ndim, ndim)` for every array, so it is
/// reported as [`Error::InvalidAxis`] by [`normalize_axis`] instead of
/// wrapping onto a valid axis.
fn saturating_axis(axis: i64) -> isize {
    isize::try_from(axis).unwrap_or(if axis < 0 { isize::MIN } else { isize::MAX })
}

impl<'a> From<&'a DenseArray> for AxisArg<'a> {
    fn from(array: &'a DenseArray) -> Self {
        AxisArg::Array(array)
    }
}

impl<'a> From<&'a [isize]> for AxisArg<'a> {
    fn from(values: &'a [isize]) -> Self {
        AxisArg::List(values)
    }
}

impl<'a, const N: usize> From<&'a [isize; N]> for AxisArg<'a> {
    fn from(values: &'a [isize; N]) -> Self {
        AxisArg::List(values.as_slice())
    }
}
