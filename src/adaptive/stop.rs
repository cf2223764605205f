//! Reasons the planner stops proposing input sizes.

use std::fmt;
use std::time::Duration;

use serde::Serialize;

/// Why the size sequence was exhausted.
///
/// Every reason is a normal end of sampling, not a failure: the checker
/// classifies whatever samples were collected.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum StopReason {
    /// The most recent trial took at least the trial time limit.
    TrialTooSlow {
        /// Input size of the slow trial.
        size: usize,
        /// Its compute time.
        elapsed: Duration,
        /// Configured limit.
        limit: Duration,
    },

    /// A linear or logarithmic hypothesis already has more samples than the cap.
    SampleCapReached {
        /// Samples collected.
        samples: usize,
        /// Configured cap.
        max_samples: usize,
    },

    /// The next size would exceed the configured maximum (or overflow `usize`).
    SizeLimitReached {
        /// Size of the most recent trial.
        last_size: usize,
        /// Configured maximum input size.
        max_size: usize,
    },
}

impl fmt::Display for StopReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StopReason::TrialTooSlow {
                size,
                elapsed,
                limit,
            } => write!(
                f,
                "trial at size {} took {:.2}s (limit {:.2}s)",
                size,
                elapsed.as_secs_f64(),
                limit.as_secs_f64()
            ),
            StopReason::SampleCapReached {
                samples,
                max_samples,
            } => write!(f, "collected {} samples (cap {})", samples, max_samples),
            StopReason::SizeLimitReached {
                last_size,
                max_size,
            } => write!(
                f,
                "next size after {} exceeds the maximum input size {}",
                last_size, max_size
            ),
        }
    }
}
