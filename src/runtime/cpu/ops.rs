//! CumulativeOps implementation for the CPU engine

use super::ScanEngine;
use super::helpers::cumulative::scan_impl;
use crate::error::Result;
use crate::ops::{CumulativeOps, ReductionKind, ScanOptions};
use crate::tensor::DenseArray;

impl CumulativeOps for ScanEngine {
    fn scan(
        &self,
        input: &DenseArray,
        axis: isize,
        kind: ReductionKind,
        options: ScanOptions,
    ) -> Result<DenseArray> {
        scan_impl(self.config(), input, axis, kind, options)
    }
}
