//! Dense array types
//!
//! This module provides [`DenseArray`], an owned n-dimensional row-major
//! array whose element type is chosen at runtime, together with its
//! [`Shape`] and typed [`Storage`].

mod core;
mod shape;
mod storage;

pub use core::DenseArray;
pub use shape::Shape;
pub use storage::Storage;
