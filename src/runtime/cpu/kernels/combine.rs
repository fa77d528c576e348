//! Accumulator types and per-kind combine steps
//!
//! A scan kind is an identity element plus a binary combine. Both are
//! expressed over an accumulator type `A`, which is the element type itself
//! for integers and F32/F64, and a wider float for reduced-precision input.

/// Trait for types a scan accumulates in (f32, f64, i32, i64).
///
/// Integer arithmetic wraps on overflow, matching the element type's native
/// two's-complement behavior in release builds. Overflow is never reported.
pub trait Accumulator: Copy + Send + Sync + PartialOrd + 'static {
    /// Additive identity
    const ZERO: Self;
    /// Multiplicative identity
    const ONE: Self;
    /// `self + other` (wrapping for integers)
    fn acc_add(self, other: Self) -> Self;
    /// `self * other` (wrapping for integers)
    fn acc_mul(self, other: Self) -> Self;
}

/// Floating-point accumulators, which additionally support log-sum-exp.
pub trait FloatAccumulator: Accumulator {
    /// Identity of log-sum-exp
    const NEG_INFINITY: Self;

    /// `log(exp(self) + exp(other))` without overflow or underflow.
    ///
    /// Evaluated as `m + ln_1p(exp(lo - m))` with `m = max(self, other)`.
    /// Combining `-inf` with `x` returns `x` exactly (so `-inf, -inf` gives
    /// `-inf`, never NaN), `+inf` dominates, and NaN propagates.
    fn log_add_exp(self, other: Self) -> Self;
}

macro_rules! impl_int_accumulator {
    ($t:ty) => {
        impl Accumulator for $t {
            const ZERO: Self = 0;
            const ONE: Self = 1;

            #[inline]
            fn acc_add(self, other: Self) -> Self {
                self.wrapping_add(other)
            }

            #[inline]
            fn acc_mul(self, other: Self) -> Self {
                self.wrapping_mul(other)
            }
        }
    };
}

macro_rules! impl_float_accumulator {
    ($t:ty) => {
        impl Accumulator for $t {
            const ZERO: Self = 0.0;
            const ONE: Self = 1.0;

            #[inline]
            fn acc_add(self, other: Self) -> Self {
                self + other
            }

            #[inline]
            fn acc_mul(self, other: Self) -> Self {
                self * other
            }
        }

        impl FloatAccumulator for $t {
            const NEG_INFINITY: Self = <$t>::NEG_INFINITY;

            #[inline]
            fn log_add_exp(self, other: Self) -> Self {
                if self.is_nan() || other.is_nan() {
                    return self + other;
                }
                let (hi, lo) = if self >= other {
                    (self, other)
                } else {
                    (other, self)
                };
                if lo == <$t>::NEG_INFINITY || hi == <$t>::INFINITY {
                    return hi;
                }
                hi + (lo - hi).exp().ln_1p()
            }
        }
    };
}

impl_int_accumulator!(i32);
impl_int_accumulator!(i64);
impl_float_accumulator!(f32);
impl_float_accumulator!(f64);

/// Identity and combine step of one reduction kind over accumulator `A`.
pub trait ScanOp<A>: Send + Sync {
    /// Neutral element: the head of every exclusive scan
    fn identity() -> A;

    /// Fold the next element into the running accumulator
    fn combine(acc: A, next: A) -> A;
}

/// Running sum
#[derive(Copy, Clone, Debug, Default)]
pub struct SumOp;

/// Running product
#[derive(Copy, Clone, Debug, Default)]
pub struct ProdOp;

/// Running log-sum-exp
#[derive(Copy, Clone, Debug, Default)]
pub struct LogAddExpOp;

impl<A: Accumulator> ScanOp<A> for SumOp {
    #[inline]
    fn identity() -> A {
        A::ZERO
    }

    #[inline]
    fn combine(acc: A, next: A) -> A {
        acc.acc_add(next)
    }
}

impl<A: Accumulator> ScanOp<A> for ProdOp {
    #[inline]
    fn identity() -> A {
        A::ONE
    }

    #[inline]
    fn combine(acc: A, next: A) -> A {
        acc.acc_mul(next)
    }
}

impl<A: FloatAccumulator> ScanOp<A> for LogAddExpOp {
    #[inline]
    fn identity() -> A {
        A::NEG_INFINITY
    }

    #[inline]
    fn combine(acc: A, next: A) -> A {
        acc.log_add_exp(next)
    }
}
