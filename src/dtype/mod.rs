//! Data type system for scanr arrays
//!
//! This module provides the `DType` enum representing the supported element
//! types, the `Element` trait connecting Rust types to it, and the
//! accumulation-precision setting used by the scan kernels.

mod element;

pub use element::{Element, Widen};

use std::fmt;

// ============================================================================
// Accumulation Precision
// ============================================================================

/// Accumulation precision for floating-point scans.
///
/// A scan carries one running accumulator per lane. Holding that accumulator
/// in a wider type than the element keeps rounding error from compounding
/// over long lanes.
///
/// | Precision  | F64 input | F32 input | F16 / BF16 input |
/// |------------|-----------|-----------|------------------|
/// | **Native** | f64       | f32       | f32              |
/// | **FP64**   | f64       | f64       | f64              |
///
/// Reduced-precision floats never accumulate in their own format: there is
/// no native half-precision arithmetic on the CPU, and rounding every step
/// to 8 (BF16) or 11 (F16) mantissa bits breaks cumulative sums within a few
/// dozen elements. The result is narrowed back to the input dtype once per
/// output element.
///
/// Integer dtypes ignore this setting and always accumulate in their own
/// type with wrapping arithmetic.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum AccumulationPrecision {
    /// Accumulate in the element type (F32 for reduced-precision floats)
    #[default]
    Native,
    /// Accumulate in F64
    FP64,
}

// ============================================================================
// DType Enum
// ============================================================================

/// Data types supported by scanr arrays
///
/// # Discriminant Values (Serialization Stability)
///
/// - Floats: 0-9 (F64=0, F32=1, F16=2, BF16=3)
/// - Signed ints: 10-19 (I64=10, I32=11)
///
/// Existing values are never changed.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[non_exhaustive]
#[repr(u8)]
pub enum DType {
    /// 64-bit floating point
    F64 = 0,
    /// 32-bit floating point
    F32 = 1,
    /// 16-bit floating point (IEEE 754), requires the `f16` feature
    F16 = 2,
    /// 16-bit brain floating point, requires the `f16` feature
    BF16 = 3,
    /// 64-bit signed integer
    I64 = 10,
    /// 32-bit signed integer
    I32 = 11,
}

impl DType {
    /// Size of one element in bytes
    #[inline]
    pub const fn size_in_bytes(self) -> usize {
        match self {
            Self::F64 | Self::I64 => 8,
            Self::F32 | Self::I32 => 4,
            Self::F16 | Self::BF16 => 2,
        }
    }

    /// Short name for display (e.g., "f32", "i64")
    pub const fn short_name(self) -> &'static str {
        match self {
            Self::F64 => "f64",
            Self::F32 => "f32",
            Self::F16 => "f16",
            Self::BF16 => "bf16",
            Self::I64 => "i64",
            Self::I32 => "i32",
        }
    }
}

impl fmt::Display for DType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.short_name())
    }
}

/// Set of dtypes for efficient membership testing
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct DTypeSet {
    bits: u64,
}

impl DTypeSet {
    /// All floating point types
    pub const FLOATS: Self = Self {
        bits: (1 << DType::F64 as u8)
            | (1 << DType::F32 as u8)
            | (1 << DType::F16 as u8)
            | (1 << DType::BF16 as u8),
    };

    /// All numeric types (floats + signed ints)
    pub const NUMERIC: Self = Self {
        bits: Self::FLOATS.bits | (1 << DType::I64 as u8) | (1 << DType::I32 as u8),
    };

    /// Check if the set contains a dtype
    #[inline]
    pub const fn contains(self, dtype: DType) -> bool {
        self.bits & (1 << dtype as u8) != 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dtype_size() {
        assert_eq!(DType::F64.size_in_bytes(), 8);
        assert_eq!(DType::F32.size_in_bytes(), 4);
        assert_eq!(DType::BF16.size_in_bytes(), 2);
        assert_eq!(DType::I32.size_in_bytes(), 4);
    }

    #[test]
    fn test_dtype_set() {
        assert!(DTypeSet::FLOATS.contains(DType::F16));
        assert!(!DTypeSet::FLOATS.contains(DType::I32));
        assert!(DTypeSet::NUMERIC.contains(DType::I64));
        assert!(DTypeSet::NUMERIC.contains(DType::BF16));
    }

    #[test]
    fn test_accumulation_precision_default() {
        assert_eq!(AccumulationPrecision::default(), AccumulationPrecision::Native);
    }

    #[test]
    fn test_short_names() {
        assert_eq!(DType::BF16.to_string(), "bf16");
        assert_eq!(DType::I64.to_string(), "i64");
    }
}
