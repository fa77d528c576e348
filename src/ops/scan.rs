//! Scan parameter types

use crate::dtype::DTypeSet;
use std::fmt;

/// Which running reduction a scan computes
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum ReductionKind {
    /// Running sum; identity 0
    Sum,
    /// Running product; identity 1
    Product,
    /// Running `log(sum(exp(x)))`; identity -inf. Floating-point only.
    LogSumExp,
}

impl ReductionKind {
    /// All reduction kinds
    pub const ALL: [ReductionKind; 3] = [
        ReductionKind::Sum,
        ReductionKind::Product,
        ReductionKind::LogSumExp,
    ];

    /// Operation name used in errors and logs
    pub const fn op_name(self) -> &'static str {
        match self {
            Self::Sum => "cumsum",
            Self::Product => "cumprod",
            Self::LogSumExp => "cumulative_logsumexp",
        }
    }

    /// Element types this kind accepts
    pub const fn supported_dtypes(self) -> DTypeSet {
        match self {
            Self::Sum | Self::Product => DTypeSet::NUMERIC,
            Self::LogSumExp => DTypeSet::FLOATS,
        }
    }

    /// Identity element, expressed as f64
    pub const fn identity(self) -> f64 {
        match self {
            Self::Sum => 0.0,
            Self::Product => 1.0,
            Self::LogSumExp => f64::NEG_INFINITY,
        }
    }
}

impl fmt::Display for ReductionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.op_name())
    }
}

/// Exclusivity and direction of a scan
///
/// The default is an inclusive forward scan.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct ScanOptions {
    /// Output at position `i` excludes input `i` (identity at the head)
    pub exclusive: bool,
    /// Accumulate from the last position towards the first
    pub reverse: bool,
}

impl ScanOptions {
    /// All four exclusive/reverse combinations
    pub const ALL: [ScanOptions; 4] = [
        ScanOptions::new(false, false),
        ScanOptions::new(true, false),
        ScanOptions::new(false, true),
        ScanOptions::new(true, true),
    ];

    /// Create options from explicit flags
    pub const fn new(exclusive: bool, reverse: bool) -> Self {
        Self { exclusive, reverse }
    }

    /// Set exclusivity
    pub const fn with_exclusive(mut self, exclusive: bool) -> Self {
        self.exclusive = exclusive;
        self
    }

    /// Set direction
    pub const fn with_reverse(mut self, reverse: bool) -> Self {
        self.reverse = reverse;
        self
    }
}
