//! CPU runtime implementation
//!
//! The CPU backend scans on the host: one sequential pass per lane, with
//! independent lanes optionally spread over the rayon thread pool.

mod client;
pub(crate) mod helpers;
pub mod kernels;
mod ops;

pub use client::ScanEngine;
