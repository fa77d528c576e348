//! DType dispatch utilities
//!
//! This module provides the `dispatch_dtype!` macro for runtime type dispatch:
//! it converts a `DType` value into a concrete Rust type bound to an
//! identifier inside a code block.
//!
//! # Usage
//!
//! ```ignore
//! fn element_size(dtype: DType) -> Result<usize> {
//!     dispatch_dtype!(dtype, T => {
//!         Ok(std::mem::size_of::<T>())
//!     }, "element_size")
//! }
//! ```
//!
//! ## Supported Types
//!
//! - `F64` -> `f64`
//! - `F32` -> `f32`
//! - `F16` -> `half::f16` (requires "f16" feature)
//! - `BF16` -> `half::bf16` (requires "f16" feature)
//! - `I64` -> `i64`
//! - `I32` -> `i32`
//!
//! Without the "f16" feature, F16/BF16 return `Error::UnsupportedDType` from
//! the enclosing function.

/// Internal helper macro to dispatch types requiring the "f16" feature.
#[macro_export]
#[doc(hidden)]
macro_rules! dispatch_f16_type {
    ($T:ident, $body:block, $dtype:expr, $error_op:expr, $type:ty) => {{
        #[cfg(feature = "f16")]
        {
            type $T = $type;
            $body
        }
        #[cfg(not(feature = "f16"))]
        {
            return Err($crate::error::Error::UnsupportedDType {
                dtype: $dtype,
                op: $error_op,
            });
        }
    }};
}

/// Macro for runtime dtype dispatch to typed operations.
///
/// Takes a `DType` value and executes a code block with `$T` bound to the
/// corresponding Rust type. The enclosing function must return
/// `crate::error::Result<_>`.
#[macro_export]
macro_rules! dispatch_dtype {
    ($dtype:expr, $T:ident => $body:block, $error_op:expr) => {
        match $dtype {
            $crate::dtype::DType::F64 => {
                type $T = f64;
                $body
            }
            $crate::dtype::DType::F32 => {
                type $T = f32;
                $body
            }
            $crate::dtype::DType::F16 => {
                $crate::dispatch_f16_type!($T, $body, $dtype, $error_op, half::f16)
            }
            $crate::dtype::DType::BF16 => {
                $crate::dispatch_f16_type!($T, $body, $dtype, $error_op, half::bf16)
            }
            $crate::dtype::DType::I64 => {
                type $T = i64;
                $body
            }
            $crate::dtype::DType::I32 => {
                type $T = i32;
                $body
            }
        }
    };
}

#[cfg(test)]
mod tests {
    use crate::dtype::{DType, Element};
    use crate::error::Result;

    fn element_size(dtype: DType) -> Result<usize> {
        dispatch_dtype!(dtype, T => {
            Ok(std::mem::size_of::<T>())
        }, "element_size")
    }

    fn dtype_roundtrip(dtype: DType) -> Result<DType> {
        dispatch_dtype!(dtype, T => {
            Ok(<T as Element>::DTYPE)
        }, "dtype_roundtrip")
    }

    #[test]
    fn test_dispatch_binds_matching_type() {
        for dtype in [DType::F64, DType::F32, DType::I64, DType::I32] {
            assert_eq!(element_size(dtype).unwrap(), dtype.size_in_bytes());
            assert_eq!(dtype_roundtrip(dtype).unwrap(), dtype);
        }
    }

    #[cfg(feature = "f16")]
    #[test]
    fn test_dispatch_half_types() {
        assert_eq!(dtype_roundtrip(DType::F16).unwrap(), DType::F16);
        assert_eq!(dtype_roundtrip(DType::BF16).unwrap(), DType::BF16);
    }

    #[cfg(not(feature = "f16"))]
    #[test]
    fn test_dispatch_half_without_feature() {
        assert!(element_size(DType::BF16).is_err());
    }
}
