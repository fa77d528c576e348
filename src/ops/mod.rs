//! Scan operations
//!
//! This module defines the scan call boundary and its parameter types.
//!
//! # Design
//!
//! Operations are defined as traits implemented by a backend engine:
//!
//! ```text
//! ScanEngine
//!   └── implements CumulativeOps
//!         ├── scan                    (any ReductionKind, any ScanOptions)
//!         ├── scan_with_axis          (axis as integer or integer array)
//!         └── cumsum, cumprod, cumulative_logsumexp
//! ```
//!
//! Every reduction kind shares one control skeleton: normalize the axis,
//! walk each lane forward or backward, emit the accumulator before
//! (exclusive) or after (inclusive) combining the current element. Kinds
//! differ only in their identity element and combine step, defined in
//! [`crate::runtime::cpu::kernels`].
//!
//! # Helpers
//!
//! - [`normalize_axis`] - Validate and normalize a possibly negative axis
//! - [`AxisArg`] - Resolve an axis operand that may arrive as an array

mod axis;
mod dispatch;
mod scan;
mod traits;

pub use axis::{AxisArg, normalize_axis};
pub use scan::{ReductionKind, ScanOptions};
pub use traits::CumulativeOps;
