//! Cumulative (scan) operations trait.

use crate::error::Result;
use crate::ops::{AxisArg, ReductionKind, ScanOptions};
use crate::tensor::DenseArray;

/// Cumulative operations along one axis
///
/// Implementors provide [`scan`](Self::scan); the named operations are thin
/// wrappers over it. Every operation returns a newly allocated array with the
/// same shape and dtype as its input, and fails before computing anything
/// when the axis or dtype is invalid.
pub trait CumulativeOps {
    /// Running reduction of `input` along `axis`
    ///
    /// # Arguments
    ///
    /// * `input` - Array to scan; not modified
    /// * `axis` - Scan axis in `[-ndim, ndim)` (negative counts from the end)
    /// * `kind` - Which reduction to run
    /// * `options` - Exclusivity and direction
    ///
    /// # Errors
    ///
    /// - [`Error::InvalidAxis`](crate::error::Error::InvalidAxis) when `axis`
    ///   is out of range, including any axis on a rank-0 input
    /// - [`Error::UnsupportedDType`](crate::error::Error::UnsupportedDType)
    ///   for LogSumExp on integer input
    fn scan(
        &self,
        input: &DenseArray,
        axis: isize,
        kind: ReductionKind,
        options: ScanOptions,
    ) -> Result<DenseArray>;

    /// [`scan`](Self::scan) with the axis given as an integer or as an
    /// integer array operand
    ///
    /// A rank-0 I32/I64 array is accepted. An array of any other rank, or a
    /// list such as `&[0]`, is rejected with
    /// [`Error::InvalidAxisShape`](crate::error::Error::InvalidAxisShape).
    fn scan_with_axis<'a>(
        &self,
        input: &DenseArray,
        axis: impl Into<AxisArg<'a>>,
        kind: ReductionKind,
        options: ScanOptions,
    ) -> Result<DenseArray> {
        let axis = axis.into().resolve()?;
        self.scan(input, axis, kind, options)
    }

    /// Cumulative sum along an axis
    ///
    /// For input `[a, b, c, d]`:
    /// - inclusive: `[a, a+b, a+b+c, a+b+c+d]`
    /// - exclusive: `[0, a, a+b, a+b+c]`
    /// - reverse: `[a+b+c+d, b+c+d, c+d, d]`
    ///
    /// # Example
    ///
    /// ```
    /// use scanr::prelude::*;
    ///
    /// let engine = ScanEngine::new();
    /// let a = DenseArray::from_slice(&[1.0f32, 2.0, 3.0, 4.0], &[4]);
    /// let result = engine.cumsum(&a, 0, true, false)?;
    /// assert_eq!(result.to_vec::<f32>(), [0.0, 1.0, 3.0, 6.0]);
    /// # Ok::<(), scanr::error::Error>(())
    /// ```
    fn cumsum(
        &self,
        input: &DenseArray,
        axis: isize,
        exclusive: bool,
        reverse: bool,
    ) -> Result<DenseArray> {
        self.scan(
            input,
            axis,
            ReductionKind::Sum,
            ScanOptions::new(exclusive, reverse),
        )
    }

    /// Cumulative product along an axis
    ///
    /// For input `[a, b, c, d]`, the inclusive forward result is
    /// `[a, a*b, a*b*c, a*b*c*d]`; exclusive scans start from 1.
    ///
    /// ```
    /// use scanr::prelude::*;
    ///
    /// let engine = ScanEngine::new();
    /// let a = DenseArray::from_slice(&[1i32, 2, 3, 4], &[4]);
    /// let result = engine.cumprod(&a, -1, false, true)?;
    /// assert_eq!(result.to_vec::<i32>(), [24, 24, 12, 4]);
    /// # Ok::<(), scanr::error::Error>(())
    /// ```
    fn cumprod(
        &self,
        input: &DenseArray,
        axis: isize,
        exclusive: bool,
        reverse: bool,
    ) -> Result<DenseArray> {
        self.scan(
            input,
            axis,
            ReductionKind::Product,
            ScanOptions::new(exclusive, reverse),
        )
    }

    /// Cumulative log-sum-exp along an axis (floating-point only)
    ///
    /// Output `i` is `log(exp(x[0]) + ... + exp(x[i]))`, computed without
    /// overflow for large inputs. Exclusive scans start from `-inf`.
    fn cumulative_logsumexp(
        &self,
        input: &DenseArray,
        axis: isize,
        exclusive: bool,
        reverse: bool,
    ) -> Result<DenseArray> {
        self.scan(
            input,
            axis,
            ReductionKind::LogSumExp,
            ScanOptions::new(exclusive, reverse),
        )
    }
}
