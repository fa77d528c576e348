//! Operation traits.
//!
//! Implementations live in the backend modules (`runtime::cpu`).

mod cumulative;

pub use cumulative::CumulativeOps;
