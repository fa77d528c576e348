//! Element trait for mapping Rust types to DType

use super::DType;
use crate::tensor::Storage;
use bytemuck::{Pod, Zeroable};
use std::fmt::Debug;

/// Trait for types that can be elements of a `DenseArray`
///
/// This trait connects Rust's type system to scanr's runtime dtype system
/// and to the typed buffers held by [`Storage`].
///
/// # Bounds
/// - `Copy + Send + Sync + 'static` - Lanes are scanned on worker threads
/// - `Pod + Zeroable` - Safe byte-level views for `as_bytes` / `from_bytes`
/// - `PartialOrd` - Comparison in tests and oracles
///
/// Arithmetic is deliberately absent: scans run in an accumulator type
/// reached through [`Widen`].
pub trait Element: Copy + Send + Sync + Pod + Zeroable + PartialOrd + Debug + 'static {
    /// The corresponding DType for this Rust type
    const DTYPE: DType;

    /// Convert to f64 for casts and reference computations
    fn to_f64(self) -> f64;

    /// Convert from f64 to this type (saturating for integers)
    fn from_f64(v: f64) -> Self;

    /// Zero value
    fn zero() -> Self;

    /// One value
    fn one() -> Self;

    /// Move a typed buffer into the matching storage variant
    fn into_storage(data: Vec<Self>) -> Storage;

    /// Borrow the typed buffer if `storage` holds this type
    fn slice_of(storage: &Storage) -> Option<&[Self]>;
}

/// Lossless (or rounding-once) conversion between an element and the type a
/// scan accumulates in.
///
/// `narrow` is applied exactly once per output element, so reduced-precision
/// inputs round once instead of once per combine step.
pub trait Widen<A>: Element {
    /// Element to accumulator
    fn widen(self) -> A;

    /// Accumulator back to element
    fn narrow(acc: A) -> Self;
}

macro_rules! impl_element {
    ($t:ty, $dtype:ident, $zero:expr, $one:expr) => {
        impl Element for $t {
            const DTYPE: DType = DType::$dtype;

            #[inline]
            fn to_f64(self) -> f64 {
                self as f64
            }

            #[inline]
            fn from_f64(v: f64) -> Self {
                v as $t
            }

            #[inline]
            fn zero() -> Self {
                $zero
            }

            #[inline]
            fn one() -> Self {
                $one
            }

            fn into_storage(data: Vec<Self>) -> Storage {
                Storage::$dtype(data)
            }

            fn slice_of(storage: &Storage) -> Option<&[Self]> {
                match storage {
                    Storage::$dtype(v) => Some(v.as_slice()),
                    _ => None,
                }
            }
        }
    };
}

impl_element!(f64, F64, 0.0, 1.0);
impl_element!(f32, F32, 0.0, 1.0);
impl_element!(i64, I64, 0, 1);
impl_element!(i32, I32, 0, 1);

impl Widen<f64> for f64 {
    #[inline]
    fn widen(self) -> f64 {
        self
    }

    #[inline]
    fn narrow(acc: f64) -> Self {
        acc
    }
}

impl Widen<f32> for f32 {
    #[inline]
    fn widen(self) -> f32 {
        self
    }

    #[inline]
    fn narrow(acc: f32) -> Self {
        acc
    }
}

impl Widen<f64> for f32 {
    #[inline]
    fn widen(self) -> f64 {
        self as f64
    }

    #[inline]
    fn narrow(acc: f64) -> Self {
        acc as f32
    }
}

impl Widen<i64> for i64 {
    #[inline]
    fn widen(self) -> i64 {
        self
    }

    #[inline]
    fn narrow(acc: i64) -> Self {
        acc
    }
}

impl Widen<i32> for i32 {
    #[inline]
    fn widen(self) -> i32 {
        self
    }

    #[inline]
    fn narrow(acc: i32) -> Self {
        acc
    }
}

// ============================================================================
// Half-precision floating point types (requires "f16" feature)
// ============================================================================

macro_rules! impl_half_element {
    ($t:ty, $dtype:ident) => {
        #[cfg(feature = "f16")]
        impl Element for $t {
            const DTYPE: DType = DType::$dtype;

            #[inline]
            fn to_f64(self) -> f64 {
                <$t>::to_f64(self)
            }

            #[inline]
            fn from_f64(v: f64) -> Self {
                <$t>::from_f64(v)
            }

            #[inline]
            fn zero() -> Self {
                <$t>::ZERO
            }

            #[inline]
            fn one() -> Self {
                <$t>::ONE
            }

            fn into_storage(data: Vec<Self>) -> Storage {
                Storage::$dtype(data)
            }

            fn slice_of(storage: &Storage) -> Option<&[Self]> {
                match storage {
                    Storage::$dtype(v) => Some(v.as_slice()),
                    _ => None,
                }
            }
        }

        #[cfg(feature = "f16")]
        impl Widen<f32> for $t {
            #[inline]
            fn widen(self) -> f32 {
                <$t>::to_f32(self)
            }

            #[inline]
            fn narrow(acc: f32) -> Self {
                <$t>::from_f32(acc)
            }
        }

        #[cfg(feature = "f16")]
        impl Widen<f64> for $t {
            #[inline]
            fn widen(self) -> f64 {
                <$t>::to_f64(self)
            }

            #[inline]
            fn narrow(acc: f64) -> Self {
                <$t>::from_f64(acc)
            }
        }
    };
}

impl_half_element!(half::f16, F16);
impl_half_element!(half::bf16, BF16);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dtype_constants() {
        assert_eq!(<f64 as Element>::DTYPE, DType::F64);
        assert_eq!(<f32 as Element>::DTYPE, DType::F32);
        assert_eq!(<i64 as Element>::DTYPE, DType::I64);
        assert_eq!(<i32 as Element>::DTYPE, DType::I32);
    }

    #[test]
    fn test_integer_from_f64_saturates() {
        assert_eq!(i32::from_f64(1e12), i32::MAX);
        assert_eq!(i32::from_f64(-3.7), -3);
    }

    #[test]
    fn test_storage_roundtrip_rejects_other_types() {
        let storage = f32::into_storage(vec![1.0, 2.0]);
        assert_eq!(f32::slice_of(&storage), Some(&[1.0f32, 2.0][..]));
        assert!(f64::slice_of(&storage).is_none());
        assert!(i32::slice_of(&storage).is_none());
    }

    #[test]
    fn test_widen_f32_to_f64_is_exact() {
        let x = 0.1f32;
        assert_eq!(<f32 as Widen<f64>>::widen(x), x as f64);
        assert_eq!(<f32 as Widen<f64>>::narrow(0.1f32 as f64), x);
    }

    #[cfg(feature = "f16")]
    #[test]
    fn test_half_widening() {
        let x = half::bf16::from_f32(3.0);
        assert_eq!(<half::bf16 as Widen<f32>>::widen(x), 3.0);
        assert_eq!(<half::bf16 as Widen<f32>>::narrow(6.0), half::bf16::from_f32(6.0));
        assert_eq!(<half::f16 as Element>::DTYPE, DType::F16);
    }
}
