//! Storage: typed, owned element buffers

use crate::dispatch_dtype;
use crate::dtype::{DType, Element};
use crate::error::{Error, Result};

/// Owned element buffer of a `DenseArray`
///
/// One variant per [`DType`]. The variant is the single source of truth for
/// an array's dtype, so a buffer can never be reinterpreted as another type.
#[derive(Clone, Debug, PartialEq)]
#[non_exhaustive]
pub enum Storage {
    /// 64-bit floats
    F64(Vec<f64>),
    /// 32-bit floats
    F32(Vec<f32>),
    /// IEEE half floats
    #[cfg(feature = "f16")]
    F16(Vec<half::f16>),
    /// Brain floats
    #[cfg(feature = "f16")]
    BF16(Vec<half::bf16>),
    /// 64-bit signed integers
    I64(Vec<i64>),
    /// 32-bit signed integers
    I32(Vec<i32>),
}

/// Apply `$body` to the inner `Vec` of any storage variant.
macro_rules! with_buffer {
    ($storage:expr, $v:ident => $body:expr) => {
        match $storage {
            Storage::F64($v) => $body,
            Storage::F32($v) => $body,
            #[cfg(feature = "f16")]
            Storage::F16($v) => $body,
            #[cfg(feature = "f16")]
            Storage::BF16($v) => $body,
            Storage::I64($v) => $body,
            Storage::I32($v) => $body,
        }
    };
}

impl Storage {
    /// Allocate `len` zero-valued elements of `dtype`
    pub fn zeros(dtype: DType, len: usize) -> Result<Self> {
        dispatch_dtype!(dtype, T => {
            Ok(T::into_storage(vec![T::zero(); len]))
        }, "zeros")
    }

    /// Copy a raw byte buffer into storage of `dtype`
    ///
    /// `bytes` may have any alignment; its length must be a multiple of the
    /// element size.
    pub fn from_bytes(dtype: DType, bytes: &[u8]) -> Result<Self> {
        let elem = dtype.size_in_bytes();
        if bytes.len() % elem != 0 {
            // Reported in bytes: the nearest whole-element length vs. what was given
            return Err(Error::shape_mismatch(
                &[bytes.len() - bytes.len() % elem],
                &[bytes.len()],
            ));
        }
        dispatch_dtype!(dtype, T => {
            Ok(T::into_storage(bytemuck::pod_collect_to_vec::<u8, T>(bytes)))
        }, "from_bytes")
    }

    /// Element type held by this buffer
    pub fn dtype(&self) -> DType {
        match self {
            Storage::F64(_) => DType::F64,
            Storage::F32(_) => DType::F32,
            #[cfg(feature = "f16")]
            Storage::F16(_) => DType::F16,
            #[cfg(feature = "f16")]
            Storage::BF16(_) => DType::BF16,
            Storage::I64(_) => DType::I64,
            Storage::I32(_) => DType::I32,
        }
    }

    /// Number of elements
    pub fn len(&self) -> usize {
        with_buffer!(self, v => v.len())
    }

    /// Whether the buffer holds no elements
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Native-endian byte view of the buffer
    pub fn as_bytes(&self) -> &[u8] {
        with_buffer!(self, v => bytemuck::cast_slice(v.as_slice()))
    }

    /// Borrow the buffer as `&[T]`
    pub fn typed<T: Element>(&self) -> Result<&[T]> {
        T::slice_of(self).ok_or(Error::DTypeMismatch {
            expected: T::DTYPE,
            got: self.dtype(),
        })
    }
}
