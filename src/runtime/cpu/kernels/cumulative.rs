//! Cumulative scan kernels (cumsum, cumprod, cumulative logsumexp)
//!
//! A row-major array scanned along one axis decomposes into
//! `outer * inner` independent lanes of length `scan_size`; element
//! `[o, s, i]` sits at offset `o * scan_size * inner + s * inner + i`.
//! Each outer block (`scan_size * inner` contiguous elements) is processed
//! by one task. Within a lane the combine steps run strictly in scan order.

use super::combine::{Accumulator, ScanOp};
use crate::dtype::Widen;
use crate::ops::ScanOptions;

#[cfg(feature = "rayon")]
use rayon::prelude::*;

/// Lane decomposition of an array around its scan axis
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct LaneLayout {
    /// Product of dimensions before the scan axis
    pub outer: usize,
    /// Length of the scan axis
    pub scan_size: usize,
    /// Product of dimensions after the scan axis (stride along the axis)
    pub inner: usize,
}

impl LaneLayout {
    /// Elements in one outer block
    #[inline]
    pub fn block_len(&self) -> usize {
        self.scan_size * self.inner
    }

    /// Total element count covered by the layout
    #[inline]
    pub fn numel(&self) -> usize {
        self.outer * self.block_len()
    }
}

/// Scan every lane of `src` into `dst`.
///
/// `T` is the element type, `A` the accumulator, `Op` the reduction kind.
/// With `parallel` set (and the `rayon` feature enabled) outer blocks are
/// distributed over the rayon pool; lanes are never split across tasks.
///
/// # Panics
///
/// Panics if `src` or `dst` does not hold exactly `layout.numel()` elements.
pub fn scan_kernel<T, A, Op>(
    src: &[T],
    dst: &mut [T],
    layout: LaneLayout,
    options: ScanOptions,
    parallel: bool,
) where
    T: Widen<A>,
    A: Accumulator,
    Op: ScanOp<A>,
{
    assert_eq!(src.len(), layout.numel(), "scan_kernel: source length");
    assert_eq!(dst.len(), layout.numel(), "scan_kernel: destination length");

    let block = layout.block_len();
    if block == 0 {
        return;
    }

    #[cfg(feature = "rayon")]
    if parallel && layout.outer > 1 {
        dst.par_chunks_mut(block)
            .zip(src.par_chunks(block))
            .for_each(|(out, inp)| scan_block::<T, A, Op>(inp, out, layout, options));
        return;
    }
    #[cfg(not(feature = "rayon"))]
    let _ = parallel;

    for (out, inp) in dst.chunks_mut(block).zip(src.chunks(block)) {
        scan_block::<T, A, Op>(inp, out, layout, options);
    }
}

/// Scan the `inner` lanes of one outer block.
#[inline]
fn scan_block<T, A, Op>(src: &[T], dst: &mut [T], layout: LaneLayout, options: ScanOptions)
where
    T: Widen<A>,
    A: Accumulator,
    Op: ScanOp<A>,
{
    if layout.inner == 1 {
        scan_contiguous::<T, A, Op>(src, dst, options);
    } else {
        scan_strided::<T, A, Op>(src, dst, layout.scan_size, layout.inner, options);
    }
}

/// Fast path: the scan axis is the last axis, so each block is one lane.
#[inline]
fn scan_contiguous<T, A, Op>(src: &[T], dst: &mut [T], options: ScanOptions)
where
    T: Widen<A>,
    A: Accumulator,
    Op: ScanOp<A>,
{
    let mut acc = Op::identity();
    let mut step = |x: &T, y: &mut T| {
        if options.exclusive {
            *y = T::narrow(acc);
            acc = Op::combine(acc, x.widen());
        } else {
            acc = Op::combine(acc, x.widen());
            *y = T::narrow(acc);
        }
    };

    if options.reverse {
        for (x, y) in src.iter().zip(dst.iter_mut()).rev() {
            step(x, y);
        }
    } else {
        for (x, y) in src.iter().zip(dst.iter_mut()) {
            step(x, y);
        }
    }
}

/// General path: walk the block one row (`inner` elements) at a time,
/// carrying one accumulator per lane in a block-local scratch row.
fn scan_strided<T, A, Op>(
    src: &[T],
    dst: &mut [T],
    scan_size: usize,
    inner: usize,
    options: ScanOptions,
) where
    T: Widen<A>,
    A: Accumulator,
    Op: ScanOp<A>,
{
    let mut accs: Vec<A> = vec![Op::identity(); inner];

    for step in 0..scan_size {
        let s = if options.reverse {
            scan_size - 1 - step
        } else {
            step
        };
        let row = s * inner;
        let inp = &src[row..row + inner];
        let out = &mut dst[row..row + inner];

        for ((acc, x), y) in accs.iter_mut().zip(inp).zip(out) {
            if options.exclusive {
                *y = T::narrow(*acc);
                *acc = Op::combine(*acc, x.widen());
            } else {
                *acc = Op::combine(*acc, x.widen());
                *y = T::narrow(*acc);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::super::combine::{LogAddExpOp, ProdOp, SumOp};
    use super::*;

    fn layout(outer: usize, scan_size: usize, inner: usize) -> LaneLayout {
        LaneLayout {
            outer,
            scan_size,
            inner,
        }
    }

    fn run<Op: ScanOp<f32>>(src: &[f32], l: LaneLayout, options: ScanOptions) -> Vec<f32> {
        let mut out = vec![0.0f32; src.len()];
        scan_kernel::<f32, f32, Op>(src, &mut out, l, options, false);
        out
    }

    #[test]
    fn test_cumsum_basic() {
        let out = run::<SumOp>(&[1.0, 2.0, 3.0, 4.0], layout(1, 4, 1), ScanOptions::default());
        assert_eq!(out, [1.0, 3.0, 6.0, 10.0]);
    }

    #[test]
    fn test_cumsum_multiple_segments() {
        // Two segments of 3 elements each
        let a = [1.0f32, 2.0, 3.0, 10.0, 20.0, 30.0];
        let out = run::<SumOp>(&a, layout(2, 3, 1), ScanOptions::default());
        assert_eq!(out, [1.0, 3.0, 6.0, 10.0, 30.0, 60.0]);
    }

    #[test]
    fn test_cumsum_exclusive_reverse() {
        let a = [1.0f32, 2.0, 3.0, 4.0];
        let out = run::<SumOp>(&a, layout(1, 4, 1), ScanOptions::new(true, false));
        assert_eq!(out, [0.0, 1.0, 3.0, 6.0]);
        let out = run::<SumOp>(&a, layout(1, 4, 1), ScanOptions::new(false, true));
        assert_eq!(out, [10.0, 9.0, 7.0, 4.0]);
        let out = run::<SumOp>(&a, layout(1, 4, 1), ScanOptions::new(true, true));
        assert_eq!(out, [9.0, 7.0, 4.0, 0.0]);
    }

    #[test]
    fn test_cumsum_strided() {
        // Shape [3, 2] scanned along axis 0: columns are lanes
        let a = [1.0f32, 2.0, 3.0, 4.0, 5.0, 6.0];
        let out = run::<SumOp>(&a, layout(1, 3, 2), ScanOptions::default());
        assert_eq!(out, [1.0, 2.0, 4.0, 6.0, 9.0, 12.0]);
        let out = run::<SumOp>(&a, layout(1, 3, 2), ScanOptions::new(true, true));
        assert_eq!(out, [8.0, 10.0, 5.0, 6.0, 0.0, 0.0]);
    }

    #[test]
    fn test_cumprod_basic() {
        let a = [1.0f32, 2.0, 3.0, 2.0, 3.0, 4.0];
        let out = run::<ProdOp>(&a, layout(2, 3, 1), ScanOptions::default());
        assert_eq!(out, [1.0, 2.0, 6.0, 2.0, 6.0, 24.0]);
        let out = run::<ProdOp>(&a, layout(2, 3, 1), ScanOptions::new(true, false));
        assert_eq!(out, [1.0, 1.0, 2.0, 1.0, 2.0, 6.0]);
    }

    #[test]
    fn test_logsumexp_exclusive_head_is_neg_inf() {
        let a = [1.0f32, 2.0, 3.0];
        let out = run::<LogAddExpOp>(&a, layout(1, 3, 1), ScanOptions::new(true, false));
        assert_eq!(out[0], f32::NEG_INFINITY);
        assert_eq!(out[1], 1.0);
        let expected = (1.0f64.exp() + 2.0f64.exp()).ln();
        assert!((out[2] as f64 - expected).abs() < 1e-5);
    }

    #[test]
    fn test_integer_wraparound() {
        let a = [i32::MAX, 1, 1];
        let mut out = [0i32; 3];
        scan_kernel::<i32, i32, SumOp>(&a, &mut out, layout(1, 3, 1), ScanOptions::default(), false);
        assert_eq!(out, [i32::MAX, i32::MIN, i32::MIN + 1]);
    }

    #[test]
    fn test_widened_accumulator() {
        // 2^24 + 1 is not representable in f32; accumulating in f64 keeps the
        // lane exact until the final narrowing
        let a = [16_777_216.0f32, 1.0, 1.0];
        let mut out = [0.0f32; 3];
        scan_kernel::<f32, f64, SumOp>(&a, &mut out, layout(1, 3, 1), ScanOptions::default(), false);
        assert_eq!(out[2], 16_777_218.0);
    }

    #[test]
    fn test_zero_length_axis_is_noop() {
        let a: [f32; 0] = [];
        let out = run::<SumOp>(&a, layout(4, 0, 3), ScanOptions::default());
        assert!(out.is_empty());
    }

    #[cfg(feature = "rayon")]
    #[test]
    fn test_parallel_matches_serial() {
        let a: Vec<f32> = (0..4 * 5 * 3).map(|i| i as f32).collect();
        let l = layout(4, 5, 3);
        for options in ScanOptions::ALL {
            let mut serial = vec![0.0f32; a.len()];
            let mut parallel = vec![0.0f32; a.len()];
            scan_kernel::<f32, f32, SumOp>(&a, &mut serial, l, options, false);
            scan_kernel::<f32, f32, SumOp>(&a, &mut parallel, l, options, true);
            assert_eq!(serial, parallel);
        }
    }
}
