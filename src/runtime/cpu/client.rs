//! CPU scan engine

use crate::runtime::ScanConfig;

/// CPU engine for scan dispatch
///
/// The engine is stateless apart from its immutable [`ScanConfig`]: it owns
/// no buffers and can be shared freely across threads. Cloning is cheap.
#[derive(Clone, Debug, Default)]
pub struct ScanEngine {
    config: ScanConfig,
}

impl ScanEngine {
    /// Create an engine with the default configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an engine with an explicit configuration
    pub fn with_config(config: ScanConfig) -> Self {
        Self { config }
    }

    /// The engine's configuration
    pub fn config(&self) -> &ScanConfig {
        &self.config
    }
}
