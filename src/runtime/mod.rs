//! Runtime backends for scan computation
//!
//! ```text
//! ScanEngine (stateless dispatcher, holds a ScanConfig)
//! ├── helpers   (axis checks, dtype dispatch, lane layout)
//! └── kernels   (accumulators, combine steps, lane loops)
//! ```

mod config;
pub mod cpu;

pub use config::ScanConfig;
pub use cpu::ScanEngine;
