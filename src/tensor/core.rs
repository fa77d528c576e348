//! Core DenseArray type

use super::{Shape, Storage};
use crate::dispatch_dtype;
use crate::dtype::{DType, Element};
use crate::error::{Error, Result};
use crate::ops::normalize_axis;
use std::fmt;

/// Owned, dense, row-major n-dimensional array
///
/// `DenseArray` pairs a [`Shape`] with a typed [`Storage`] buffer. The
/// element type is picked at runtime and reported by [`dtype`](Self::dtype).
///
/// # Invariants
///
/// - `storage.len() == shape.numel()` at all times
/// - Elements are laid out in row-major (C) order: the last axis is
///   contiguous
/// - A zero-sized dimension makes the array empty; this is valid
/// - The empty shape `[]` is a rank-0 scalar holding one element
#[derive(Clone, PartialEq)]
pub struct DenseArray {
    shape: Shape,
    storage: Storage,
}

impl DenseArray {
    // ===== Constructors =====

    /// Create an array from a slice of data
    ///
    /// # Panics
    ///
    /// Panics if `data.len()` does not equal the product of `shape`. Use
    /// [`Self::try_from_slice`] for a fallible alternative.
    ///
    /// # Example
    ///
    /// ```
    /// use scanr::tensor::DenseArray;
    ///
    /// let a = DenseArray::from_slice(&[1.0f32, 2.0, 3.0, 4.0], &[2, 2]);
    /// assert_eq!(a.shape(), &[2, 2]);
    /// ```
    pub fn from_slice<T: Element>(data: &[T], shape: &[usize]) -> Self {
        Self::try_from_slice(data, shape).expect("DenseArray::from_slice failed")
    }

    /// Create an array from a slice of data (fallible version)
    pub fn try_from_slice<T: Element>(data: &[T], shape: &[usize]) -> Result<Self> {
        Self::from_vec(data.to_vec(), shape)
    }

    /// Create an array taking ownership of `data`
    pub fn from_vec<T: Element>(data: Vec<T>, shape: &[usize]) -> Result<Self> {
        Self::from_storage(T::into_storage(data), shape)
    }

    /// Create an array from an existing storage buffer
    pub fn from_storage(storage: Storage, shape: &[usize]) -> Result<Self> {
        let shape = Shape::from(shape);
        if storage.len() != shape.numel() {
            return Err(Error::ShapeMismatch {
                expected: shape.to_vec(),
                got: vec![storage.len()],
            });
        }
        Ok(Self { shape, storage })
    }

    /// Create a rank-0 array holding `value`
    pub fn scalar<T: Element>(value: T) -> Self {
        Self {
            shape: Shape::new(),
            storage: T::into_storage(vec![value]),
        }
    }

    /// Create a zero-filled array
    pub fn zeros(shape: &[usize], dtype: DType) -> Result<Self> {
        let shape = Shape::from(shape);
        let storage = Storage::zeros(dtype, shape.numel())?;
        Ok(Self { shape, storage })
    }

    /// Create an array filled with `start, start + 1, ...` in row-major order
    ///
    /// Values are converted to `dtype` the way [`Self::cast`] converts.
    ///
    /// ```
    /// use scanr::dtype::DType;
    /// use scanr::tensor::DenseArray;
    ///
    /// let a = DenseArray::arange(1, &[2, 3], DType::I32).unwrap();
    /// assert_eq!(a.to_vec::<i32>(), [1, 2, 3, 4, 5, 6]);
    /// ```
    pub fn arange(start: i64, shape: &[usize], dtype: DType) -> Result<Self> {
        let shape = Shape::from(shape);
        let numel = shape.numel();
        let storage = dispatch_dtype!(dtype, T => {
            let data: Vec<T> = (0..numel)
                .map(|i| T::from_f64((start + i as i64) as f64))
                .collect();
            T::into_storage(data)
        }, "arange");
        Ok(Self { shape, storage })
    }

    /// Create an array by copying a native-endian byte buffer
    ///
    /// This is the hand-off point for host buffers owned by an external
    /// runtime. `bytes` need not be aligned.
    pub fn from_bytes(bytes: &[u8], shape: &[usize], dtype: DType) -> Result<Self> {
        let storage = Storage::from_bytes(dtype, bytes)?;
        Self::from_storage(storage, shape)
    }

    // ===== Accessors =====

    /// Dimensions of the array
    #[inline]
    pub fn shape(&self) -> &[usize] {
        self.shape.as_slice()
    }

    /// Number of dimensions (0 for scalars)
    #[inline]
    pub fn ndim(&self) -> usize {
        self.shape.ndim()
    }

    /// Total number of elements
    #[inline]
    pub fn numel(&self) -> usize {
        self.storage.len()
    }

    /// Whether the array holds no elements
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.storage.is_empty()
    }

    /// Element type
    #[inline]
    pub fn dtype(&self) -> DType {
        self.storage.dtype()
    }

    /// Underlying storage buffer
    #[inline]
    pub fn storage(&self) -> &Storage {
        &self.storage
    }

    /// Native-endian byte view of the elements
    pub fn as_bytes(&self) -> &[u8] {
        self.storage.as_bytes()
    }

    /// Borrow the elements as `&[T]` in row-major order
    pub fn as_slice<T: Element>(&self) -> Result<&[T]> {
        self.storage.typed::<T>()
    }

    /// Copy the elements out as `Vec<T>`
    ///
    /// # Panics
    ///
    /// Panics if `T` does not match [`Self::dtype`].
    pub fn to_vec<T: Element>(&self) -> Vec<T> {
        self.try_to_vec().expect("DenseArray::to_vec dtype mismatch")
    }

    /// Copy the elements out as `Vec<T>` (fallible version)
    pub fn try_to_vec<T: Element>(&self) -> Result<Vec<T>> {
        self.as_slice::<T>().map(<[T]>::to_vec)
    }

    /// Read the single element of a rank-0 or one-element array
    pub fn item<T: Element>(&self) -> Result<T> {
        if self.numel() != 1 {
            return Err(Error::ShapeMismatch {
                expected: vec![],
                got: self.shape().to_vec(),
            });
        }
        Ok(self.as_slice::<T>()?[0])
    }

    // ===== Transformations =====

    /// Convert every element to `dtype` (round-to-nearest for floats,
    /// truncating and saturating for integers)
    pub fn cast(&self, dtype: DType) -> Result<Self> {
        if dtype == self.dtype() {
            return Ok(self.clone());
        }
        let values: Vec<f64> = dispatch_dtype!(self.dtype(), S => {
            self.as_slice::<S>()?.iter().map(|v| v.to_f64()).collect()
        }, "cast");
        let storage = dispatch_dtype!(dtype, T => {
            T::into_storage(values.into_iter().map(T::from_f64).collect())
        }, "cast");
        Ok(Self {
            shape: self.shape.clone(),
            storage,
        })
    }

    /// Physically reverse the order of elements along `axis`
    ///
    /// Negative axes count from the end. Reversing twice along the same axis
    /// returns the original array.
    pub fn reverse_axis(&self, axis: isize) -> Result<Self> {
        let axis = normalize_axis(axis, self.ndim())?;
        let (outer, len, inner) = self.shape.split_at_axis(axis);
        let storage = dispatch_dtype!(self.dtype(), T => {
            let src = self.as_slice::<T>()?;
            let mut dst = Vec::with_capacity(src.len());
            for o in 0..outer {
                let base = o * len * inner;
                for s in (0..len).rev() {
                    let row = base + s * inner;
                    dst.extend_from_slice(&src[row..row + inner]);
                }
            }
            T::into_storage(dst)
        }, "reverse_axis");
        Ok(Self {
            shape: self.shape.clone(),
            storage,
        })
    }
}

impl fmt::Debug for DenseArray {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DenseArray")
            .field("shape", &self.shape)
            .field("dtype", &self.dtype())
            .field("storage", &self.storage)
            .finish()
    }
}
