//! # scanr
//!
//! **Cumulative reductions (scans) over dense n-dimensional arrays.**
//!
//! scanr computes running sums, running products and running log-sum-exp
//! along a single axis of a row-major array, with optional exclusive and
//! reverse variants. It is the CPU compute layer a tensor runtime calls into
//! once its host buffers are in hand.
//!
//! ## Features
//!
//! - **Scan kinds**: cumsum, cumprod, cumulative log-sum-exp
//! - **Variants**: inclusive/exclusive, forward/reverse, any axis (negative
//!   axes count from the end)
//! - **Multiple dtypes**: f64, f32, f16, bf16, i64, i32
//! - **Parallel lanes**: independent lanes are scanned on the rayon pool
//!   for large inputs
//!
//! ## Quick Start
//!
//! ```
//! use scanr::prelude::*;
//!
//! let engine = ScanEngine::new();
//! let a = DenseArray::from_slice(&[1.0f32, 2.0, 3.0, 4.0, 5.0, 6.0], &[2, 3]);
//!
//! let rows = engine.cumsum(&a, -1, false, false)?;
//! assert_eq!(rows.to_vec::<f32>(), [1.0, 3.0, 6.0, 4.0, 9.0, 15.0]);
//!
//! let cols = engine.cumprod(&a, 0, true, false)?;
//! assert_eq!(cols.to_vec::<f32>(), [1.0, 1.0, 1.0, 1.0, 2.0, 3.0]);
//! # Ok::<(), scanr::error::Error>(())
//! ```
//!
//! ## Feature Flags
//!
//! - `rayon` (default): Multi-threaded lane scanning
//! - `f16` (default): Half-precision floats (F16, BF16)

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod dtype;
pub mod error;
pub mod ops;
pub mod runtime;
pub mod tensor;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::dtype::{AccumulationPrecision, DType};
    pub use crate::error::{Error, Result};
    pub use crate::ops::{AxisArg, CumulativeOps, ReductionKind, ScanOptions};
    pub use crate::runtime::{ScanConfig, ScanEngine};
    pub use crate::tensor::DenseArray;
}
