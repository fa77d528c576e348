//! Shape type: dimensions of an array

use smallvec::SmallVec;
use std::fmt;
use std::ops::Deref;

/// Stack allocation threshold for dimensions
/// Scans are exercised up to rank 6, so six dims stay on the stack
pub(crate) const STACK_DIMS: usize = 6;

/// Shape type: dimensions of an array
///
/// A shape containing a zero dimension denotes an empty array and is valid.
/// The empty shape `[]` denotes a rank-0 (scalar) array with one element.
#[derive(Clone, PartialEq, Eq, Hash, Default)]
pub struct Shape(SmallVec<[usize; STACK_DIMS]>);

impl Shape {
    /// Create an empty (rank-0) shape.
    pub fn new() -> Self {
        Self(SmallVec::new())
    }

    /// View shape as a slice.
    pub fn as_slice(&self) -> &[usize] {
        self.0.as_slice()
    }

    /// Number of dimensions in this shape.
    #[inline]
    pub fn ndim(&self) -> usize {
        self.0.len()
    }

    /// Total number of elements (product of dimensions, 1 for rank 0).
    #[inline]
    pub fn numel(&self) -> usize {
        self.0.iter().product()
    }

    /// Split the shape around `axis` into `(outer, axis_len, inner)`.
    ///
    /// Element `[o, s, i]` of the decomposition lives at flat offset
    /// `o * axis_len * inner + s * inner + i` in row-major order.
    ///
    /// # Panics
    ///
    /// Panics if `axis >= self.ndim()`.
    pub fn split_at_axis(&self, axis: usize) -> (usize, usize, usize) {
        let outer: usize = self.0[..axis].iter().product();
        let inner: usize = self.0[axis + 1..].iter().product();
        (outer, self.0[axis], inner)
    }
}

impl Deref for Shape {
    type Target = [usize];

    fn deref(&self) -> &Self::Target {
        self.0.as_slice()
    }
}

impl fmt::Debug for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl AsRef<[usize]> for Shape {
    fn as_ref(&self) -> &[usize] {
        self.0.as_slice()
    }
}

impl From<Vec<usize>> for Shape {
    fn from(value: Vec<usize>) -> Self {
        Self(value.into_iter().collect())
    }
}

impl From<&[usize]> for Shape {
    fn from(value: &[usize]) -> Self {
        Self(value.iter().copied().collect())
    }
}

impl<const N: usize> From<[usize; N]> for Shape {
    fn from(value: [usize; N]) -> Self {
        Self(value.into_iter().collect())
    }
}

impl FromIterator<usize> for Shape {
    fn from_iter<T: IntoIterator<Item = usize>>(iter: T) -> Self {
        Self(iter.into_iter().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_numel() {
        assert_eq!(Shape::from([2, 3, 4]).numel(), 24);
        assert_eq!(Shape::from([2, 0, 4]).numel(), 0);
        assert_eq!(Shape::new().numel(), 1);
    }

    #[test]
    fn test_split_at_axis() {
        let shape = Shape::from([2, 3, 4, 5]);
        assert_eq!(shape.split_at_axis(0), (1, 2, 60));
        assert_eq!(shape.split_at_axis(2), (6, 4, 5));
        assert_eq!(shape.split_at_axis(3), (24, 5, 1));
    }

    #[test]
    fn test_rank6_stays_inline() {
        let shape = Shape::from([2, 2, 3, 3, 2, 2]);
        assert!(!shape.0.spilled());
        assert_eq!(shape.numel(), 144);
    }
}
