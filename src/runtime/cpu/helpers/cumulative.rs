//! Cumulative operation helpers for CPU arrays

use super::super::kernels::{self, LaneLayout, LogAddExpOp, ProdOp, ScanOp, SumOp};
use crate::dtype::{AccumulationPrecision, DType, Widen};
use crate::error::{Error, Result};
use crate::ops::{ReductionKind, ScanOptions, normalize_axis};
use crate::runtime::ScanConfig;
use crate::tensor::{DenseArray, Shape, Storage};
use tracing::{debug, trace};

/// Scan `input` along `axis`
///
/// Validation (axis range, dtype support) happens before any allocation.
pub fn scan_impl(
    config: &ScanConfig,
    input: &DenseArray,
    axis: isize,
    kind: ReductionKind,
    options: ScanOptions,
) -> Result<DenseArray> {
    let dtype = input.dtype();
    let shape = Shape::from(input.shape());
    let axis_idx = normalize_axis(axis, shape.ndim())?;

    if !kind.supported_dtypes().contains(dtype) {
        return Err(Error::unsupported_dtype(dtype, kind.op_name()));
    }

    // Empty along any axis: nothing to combine
    if input.is_empty() {
        trace!(%kind, shape = ?shape, "empty input, skipping scan");
        return DenseArray::zeros(&shape, dtype);
    }

    let (outer, scan_size, inner) = shape.split_at_axis(axis_idx);
    let layout = LaneLayout {
        outer,
        scan_size,
        inner,
    };
    let parallel = config.use_parallel(input.numel());

    debug!(
        %kind,
        %dtype,
        shape = ?shape,
        axis = axis_idx,
        exclusive = options.exclusive,
        reverse = options.reverse,
        parallel,
        "scan"
    );
    trace!(outer, scan_size, inner, "lane layout");

    let run = ScanRun {
        input,
        layout,
        options,
        parallel,
        precision: config.accumulation,
    };
    let storage = match kind {
        ReductionKind::Sum => run.numeric::<SumOp>(kind)?,
        ReductionKind::Product => run.numeric::<ProdOp>(kind)?,
        ReductionKind::LogSumExp => run.float::<LogAddExpOp>(kind)?,
    };

    DenseArray::from_storage(storage, &shape)
}

/// Everything a typed kernel launch needs besides the types themselves
struct ScanRun<'a> {
    input: &'a DenseArray,
    layout: LaneLayout,
    options: ScanOptions,
    parallel: bool,
    precision: AccumulationPrecision,
}

impl ScanRun<'_> {
    /// Dispatch a kind defined for every accumulator (Sum, Product)
    fn numeric<Op>(&self, kind: ReductionKind) -> Result<Storage>
    where
        Op: ScanOp<f32> + ScanOp<f64> + ScanOp<i32> + ScanOp<i64>,
    {
        match self.input.dtype() {
            DType::I32 => self.launch::<i32, i32, Op>(),
            DType::I64 => self.launch::<i64, i64, Op>(),
            _ => self.float::<Op>(kind),
        }
    }

    /// Dispatch a kind defined for float accumulators, picking the
    /// accumulator from the element type and the configured precision
    fn float<Op>(&self, kind: ReductionKind) -> Result<Storage>
    where
        Op: ScanOp<f32> + ScanOp<f64>,
    {
        let wide = self.precision == AccumulationPrecision::FP64;
        match self.input.dtype() {
            DType::F64 => self.launch::<f64, f64, Op>(),
            DType::F32 if wide => self.launch::<f32, f64, Op>(),
            DType::F32 => self.launch::<f32, f32, Op>(),
            #[cfg(feature = "f16")]
            DType::F16 if wide => self.launch::<half::f16, f64, Op>(),
            #[cfg(feature = "f16")]
            DType::F16 => self.launch::<half::f16, f32, Op>(),
            #[cfg(feature = "f16")]
            DType::BF16 if wide => self.launch::<half::bf16, f64, Op>(),
            #[cfg(feature = "f16")]
            DType::BF16 => self.launch::<half::bf16, f32, Op>(),
            dtype => Err(Error::unsupported_dtype(dtype, kind.op_name())),
        }
    }

    fn launch<T, A, Op>(&self) -> Result<Storage>
    where
        T: Widen<A>,
        A: kernels::Accumulator,
        Op: ScanOp<A>,
    {
        let src = self.input.as_slice::<T>()?;
        let mut dst = vec![T::zero(); src.len()];
        kernels::scan_kernel::<T, A, Op>(src, &mut dst, self.layout, self.options, self.parallel);
        Ok(T::into_storage(dst))
    }
}
