//! CPU kernel implementations
//!
//! Low-level scan kernels over typed slices. Kernels are generic over the
//! element type `T`, the accumulator `A` and the reduction kind `Op`, so one
//! control skeleton serves every kind and dtype.

pub mod combine;
pub mod cumulative;

pub use combine::{Accumulator, FloatAccumulator, LogAddExpOp, ProdOp, ScanOp, SumOp};
pub use cumulative::{LaneLayout, scan_kernel};
