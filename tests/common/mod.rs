//! Common test utilities
#![allow(dead_code)]

use scanr::dtype::DType;
use scanr::ops::{ReductionKind, ScanOptions, normalize_axis};
use scanr::tensor::DenseArray;

/// Assert two f64 slices are close within tolerance
///
/// Uses the formula: |a - b| <= atol + rtol * |b|. Infinities must match
/// exactly; NaN never matches.
pub fn assert_allclose_f64(a: &[f64], b: &[f64], rtol: f64, atol: f64, msg: &str) {
    assert_eq!(a.len(), b.len(), "{}: length mismatch", msg);
    for (i, (x, y)) in a.iter().zip(b.iter()).enumerate() {
        if y.is_infinite() {
            assert_eq!(x, y, "{}: element {} differs: {} vs {}", msg, i, x, y);
            continue;
        }
        let diff = (x - y).abs();
        let tol = atol + rtol * y.abs();
        assert!(
            diff <= tol,
            "{}: element {} differs: {} vs {} (diff={}, tol={})",
            msg,
            i,
            x,
            y,
            diff,
            tol
        );
    }
}

/// Returns (rtol, atol) for comparing a scan result against the oracle
pub fn tolerance_for(kind: ReductionKind, dtype: DType) -> (f64, f64) {
    match (kind, dtype) {
        // One rounding of an f32 accumulator: 2^-9 for BF16, 2^-11 for F16
        (_, DType::F16 | DType::BF16) => (8e-3, 0.0),
        (ReductionKind::LogSumExp, _) => (4e-5, 1e-6),
        (_, DType::F64) => (1e-12, 1e-12),
        (_, DType::F32) => (1e-6, 1e-6),
        _ => (0.0, 0.0),
    }
}

/// Every dtype this build can hold
pub fn enabled_dtypes() -> Vec<DType> {
    let mut dtypes = vec![DType::F64, DType::F32, DType::I64, DType::I32];
    if cfg!(feature = "f16") {
        dtypes.push(DType::F16);
        dtypes.push(DType::BF16);
    }
    dtypes
}

/// Compare a scan result against the reference oracle for the same call
pub fn assert_scan_matches_reference(
    actual: &DenseArray,
    input: &DenseArray,
    axis: isize,
    kind: ReductionKind,
    options: ScanOptions,
) {
    let msg = format!(
        "{} dtype={} shape={:?} axis={} {:?}",
        kind,
        input.dtype(),
        input.shape(),
        axis,
        options
    );
    assert_eq!(actual.shape(), input.shape(), "{}: shape", msg);
    assert_eq!(actual.dtype(), input.dtype(), "{}: dtype", msg);

    let expected = reference_scan(input, axis, kind, options);
    let got = as_f64(actual);
    let (rtol, atol) = tolerance_for(kind, input.dtype());
    assert_allclose_f64(&got, &expected, rtol, atol, &msg);
}

/// Copy any array out as f64 values
pub fn as_f64(a: &DenseArray) -> Vec<f64> {
    a.cast(DType::F64).unwrap().to_vec::<f64>()
}

/// Reference scan computed in f64
///
/// Reverse scans physically reverse the input, scan forward, and reverse
/// the result back. Exclusive scans are the identity followed by the
/// inclusive scan of every element but the last. The log-sum-exp combine is
/// the naive `ln(exp(a) + exp(b))`, which is fine for the small magnitudes
/// used in tests.
pub fn reference_scan(
    input: &DenseArray,
    axis: isize,
    kind: ReductionKind,
    options: ScanOptions,
) -> Vec<f64> {
    let x = input.cast(DType::F64).unwrap();
    let x = if options.reverse {
        x.reverse_axis(axis).unwrap()
    } else {
        x
    };

    let ax = normalize_axis(axis, x.ndim()).unwrap();
    let shape = x.shape();
    let outer: usize = shape[..ax].iter().product();
    let len = shape[ax];
    let inner: usize = shape[ax + 1..].iter().product();

    let src = x.to_vec::<f64>();
    let mut out = vec![0.0f64; src.len()];
    for o in 0..outer {
        for i in 0..inner {
            let at = |s: usize| o * len * inner + s * inner + i;
            let mut acc = kind.identity();
            let mut inclusive = Vec::with_capacity(len);
            for s in 0..len {
                acc = combine(kind, acc, src[at(s)]);
                inclusive.push(acc);
            }
            for s in 0..len {
                out[at(s)] = if !options.exclusive {
                    inclusive[s]
                } else if s == 0 {
                    kind.identity()
                } else {
                    inclusive[s - 1]
                };
            }
        }
    }

    let out = DenseArray::from_vec(out, shape).unwrap();
    let out = if options.reverse {
        out.reverse_axis(axis).unwrap()
    } else {
        out
    };
    out.to_vec::<f64>()
}

fn combine(kind: ReductionKind, acc: f64, x: f64) -> f64 {
    match kind {
        ReductionKind::Sum => acc + x,
        ReductionKind::Product => acc * x,
        ReductionKind::LogSumExp => (acc.exp() + x.exp()).ln(),
    }
}
