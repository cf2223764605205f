//! Configuration for complexity checks.

use std::time::Duration;

use crate::adaptive::PlannerConfig;
use crate::constants::{
    DEFAULT_MAX_SAMPLES, DEFAULT_MAX_SIZE, DEFAULT_SEED_SIZE, DEFAULT_TRIAL_TIME_LIMIT,
};
use crate::types::Tolerance;

/// Configuration options for [`ComplexityChecker`](crate::ComplexityChecker).
///
/// The defaults reproduce the classic behaviour: seed size 2, a 10 second
/// circuit breaker per trial, a 512-sample cap for cheap hypotheses and a
/// medium planning tolerance.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    // =========================================================================
    // Size planning
    // =========================================================================
    /// First input size tried. Default: 2.
    pub seed_size: usize,

    /// A trial at least this slow ends sampling. Default: 10 seconds.
    pub trial_time_limit: Duration,

    /// Sample cap while the working hypothesis is linear or logarithmic.
    ///
    /// Default: 512.
    pub max_samples: usize,

    /// Largest input size the planner may request.
    ///
    /// The linear growth rule squares the size, so without this bound the
    /// fourth or fifth trial would ask for billions of elements.
    /// Default: 2^24.
    pub max_size: usize,

    /// Tolerance used for the working hypothesis while planning.
    ///
    /// The final classification uses the tolerance passed to
    /// [`assert`](crate::ComplexityChecker::assert). Default: `Medium`.
    pub planner_tolerance: Tolerance,

    // =========================================================================
    // Measurement
    // =========================================================================
    /// How many invocations make up one trial.
    pub iterations_per_trial: IterationsPerTrial,

    /// Untimed invocations at the seed size before the first trial.
    ///
    /// Default: 0.
    pub warmup: usize,

    /// Seed for input generation.
    ///
    /// `None` draws a fresh seed for every run. Default: `None`.
    pub seed: Option<u64>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            seed_size: DEFAULT_SEED_SIZE,
            trial_time_limit: DEFAULT_TRIAL_TIME_LIMIT,
            max_samples: DEFAULT_MAX_SAMPLES,
            max_size: DEFAULT_MAX_SIZE,
            planner_tolerance: Tolerance::Medium,
            iterations_per_trial: IterationsPerTrial::Auto,
            warmup: 0,
            seed: None,
        }
    }
}

impl Config {
    /// Planner settings derived from this configuration.
    pub fn planner(&self) -> PlannerConfig {
        PlannerConfig {
            seed_size: self.seed_size,
            trial_time_limit: self.trial_time_limit,
            max_samples: self.max_samples,
            max_size: self.max_size,
            tolerance: self.planner_tolerance,
        }
    }
}

/// Invocations per trial.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum IterationsPerTrial {
    /// Run a pilot invocation, then record the median per-invocation time of
    /// several batches sized to last about 500 µs each. Invocations slower
    /// than that run one per batch. Every trial is measured this way, so small
    /// and large sizes are comparable.
    #[default]
    Auto,

    /// Time exactly this many invocations and record their mean.
    ///
    /// `Fixed(1)` times a single invocation per trial.
    Fixed(u64),
}
