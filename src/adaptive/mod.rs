//! Adaptive input-size planning.
//!
//! The planner ([`SizeState`]) picks the next input size from the samples
//! gathered so far:
//!
//! 1. **Seed**: with no samples, start at a small seed size (default 2).
//! 2. **Hypothesis**: classify all samples with a medium tolerance.
//! 3. **Growth**: cheap hypotheses (linear, logarithmic) grow aggressively
//!    (`size²` and `size × 2`); expensive ones (quadratic, polynomial) grow by
//!    `size × 2`.
//!
//! Stopping conditions keep detection from hanging the host:
//! - the last trial took at least the trial time limit (default 10 s);
//! - a linear/logarithmic hypothesis already holds more than `max_samples`
//!   samples (default 512);
//! - the next size would exceed `max_size` (default 2^24 elements).

mod state;
mod stop;

use std::time::Duration;

pub use state::SizeState;
pub use stop::StopReason;

use crate::constants::{
    DEFAULT_MAX_SAMPLES, DEFAULT_MAX_SIZE, DEFAULT_SEED_SIZE, DEFAULT_TRIAL_TIME_LIMIT,
};
use crate::types::Tolerance;

/// Configuration for the size planner.
#[derive(Debug, Clone, PartialEq)]
pub struct PlannerConfig {
    /// First size proposed when no samples exist.
    pub seed_size: usize,

    /// A trial at least this slow exhausts the planner.
    pub trial_time_limit: Duration,

    /// Sample cap for linear and logarithmic hypotheses.
    pub max_samples: usize,

    /// Largest size the planner will propose.
    pub max_size: usize,

    /// Tolerance used to form the working hypothesis.
    pub tolerance: Tolerance,
}

impl Default for PlannerConfig {
    fn default() -> Self {
        Self {
            seed_size: DEFAULT_SEED_SIZE,
            trial_time_limit: DEFAULT_TRIAL_TIME_LIMIT,
            max_samples: DEFAULT_MAX_SAMPLES,
            max_size: DEFAULT_MAX_SIZE,
            tolerance: Tolerance::Medium,
        }
    }
}
