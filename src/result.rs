//! Result of a complexity check.

use std::time::Duration;

use serde::Serialize;

use crate::adaptive::StopReason;
use crate::analysis::tangents;
use crate::types::{ComputeTimePoint, TimeComplexity, Tolerance};

/// Full outcome of [`ComplexityChecker::check`](crate::ComplexityChecker::check).
#[derive(Debug, Clone, Serialize)]
pub struct CheckResult {
    /// Complexity the caller expected.
    pub expected: TimeComplexity,

    /// Complexity the analyzer observed.
    pub observed: TimeComplexity,

    /// Tolerance used for the final classification.
    pub tolerance: Tolerance,

    /// All samples, in trial order.
    pub samples: Vec<ComputeTimePoint>,

    /// Why sampling stopped.
    pub stop_reason: Option<StopReason>,

    /// Wall-clock time of the whole run, including input generation.
    pub elapsed: Duration,

    /// Seed used for input generation; pass it to
    /// [`ComplexityChecker::seed`](crate::ComplexityChecker::seed) to replay
    /// the same inputs.
    pub seed: u64,
}

impl CheckResult {
    /// Whether the observed complexity matches the expectation.
    pub fn passed(&self) -> bool {
        self.observed == self.expected
    }

    /// Number of trials run.
    pub fn trials(&self) -> usize {
        self.samples.len()
    }

    /// Sample with the largest input size.
    pub fn largest_sample(&self) -> Option<&ComputeTimePoint> {
        self.samples.iter().max_by_key(|p| p.size())
    }

    /// `(size, tangent)` pairs sorted by size.
    pub fn tangents(&self) -> Vec<(usize, f64)> {
        tangents(&self.samples)
    }
}
