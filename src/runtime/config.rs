//! Engine configuration

use crate::dtype::AccumulationPrecision;

/// Default element count at which lanes go to the rayon pool
pub const DEFAULT_PARALLEL_THRESHOLD: usize = 32 * 1024;

/// Configuration held by a [`ScanEngine`](super::ScanEngine)
///
/// ```
/// use scanr::dtype::AccumulationPrecision;
/// use scanr::runtime::ScanConfig;
///
/// let config = ScanConfig::default()
///     .with_accumulation(AccumulationPrecision::FP64)
///     .with_parallel_threshold(usize::MAX);
/// assert!(!config.use_parallel(1 << 20));
/// ```
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct ScanConfig {
    /// Accumulator width for floating-point scans
    pub accumulation: AccumulationPrecision,
    /// Minimum element count before lanes run on the rayon pool
    pub parallel_threshold: usize,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            accumulation: AccumulationPrecision::default(),
            parallel_threshold: DEFAULT_PARALLEL_THRESHOLD,
        }
    }
}

impl ScanConfig {
    /// Set the accumulation precision
    pub fn with_accumulation(mut self, accumulation: AccumulationPrecision) -> Self {
        self.accumulation = accumulation;
        self
    }

    /// Set the parallel threshold (`usize::MAX` disables parallel lanes)
    pub fn with_parallel_threshold(mut self, threshold: usize) -> Self {
        self.parallel_threshold = threshold;
        self
    }

    /// Whether an input of `numel` elements should be scanned in parallel
    #[inline]
    pub fn use_parallel(&self, numel: usize) -> bool {
        cfg!(feature = "rayon") && numel >= self.parallel_threshold
    }
}
