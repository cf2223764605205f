//! Timed execution of one trial.
//!
//! A trial pairs the provider's target size with the wall-clock time of one
//! invocation of the algorithm. In `Auto` mode every trial is measured the
//! same way whatever its size. A pilot invocation warms caches and sizes the
//! batches and is not recorded; the median per-invocation time of several
//! batches is. Fast invocations are batched so each batch rises well above
//! timer resolution, slow ones run one per batch.

use std::time::Duration;

use crate::config::IterationsPerTrial;
use crate::constants::{
    BATCHES_PER_TRIAL, DEFAULT_TRIAL_TIME_LIMIT, MAX_ITERATIONS_PER_BATCH, TARGET_BATCH_DURATION,
};
use crate::operation::Operation;
use crate::types::ComputeTimePoint;

use super::input::InputProvider;

/// Runs trials and turns them into [`ComputeTimePoint`]s.
#[derive(Debug, Clone)]
pub struct Collector {
    /// Invocations per trial.
    iterations: IterationsPerTrial,
    /// Number of warmup invocations.
    warmup_iterations: usize,
    /// A pilot at least this slow is recorded as is.
    trial_time_limit: Duration,
}

impl Collector {
    /// Create a collector.
    pub fn new(iterations: IterationsPerTrial, warmup_iterations: usize) -> Self {
        Self {
            iterations,
            warmup_iterations,
            trial_time_limit: DEFAULT_TRIAL_TIME_LIMIT,
        }
    }

    /// Set the trial time limit.
    ///
    /// In `Auto` mode a pilot invocation reaching the limit is recorded
    /// without further batches; the planner stops on it anyway.
    pub fn with_trial_time_limit(mut self, limit: Duration) -> Self {
        self.trial_time_limit = limit;
        self
    }

    /// Iteration policy.
    pub fn iterations(&self) -> IterationsPerTrial {
        self.iterations
    }

    /// Run the untimed warmup invocations.
    ///
    /// Warms caches and the allocator before the first recorded trial.
    pub fn warmup<O: Operation>(&self, provider: &mut InputProvider<'_>, op: &mut O) {
        if self.warmup_iterations > 0 {
            let _ = op.run_batch(provider, self.warmup_iterations as u64);
        }
    }

    /// Run one trial at the provider's size.
    pub fn run_trial<O: Operation>(
        &self,
        provider: &mut InputProvider<'_>,
        op: &mut O,
    ) -> ComputeTimePoint {
        let size = provider.size();
        let (compute_time, iterations) = match self.iterations {
            IterationsPerTrial::Fixed(n) => {
                let n = n.max(1);
                (per_iteration(op.run_batch(provider, n), n), n)
            }
            IterationsPerTrial::Auto => {
                let pilot = op.run_batch(provider, 1);
                if pilot >= self.trial_time_limit {
                    (pilot, 1)
                } else {
                    let n = iterations_for(pilot);
                    let mut batches: Vec<Duration> = (0..BATCHES_PER_TRIAL)
                        .map(|_| per_iteration(op.run_batch(provider, n), n))
                        .collect();
                    (median(&mut batches), n)
                }
            }
        };

        tracing::debug!(
            size,
            iterations,
            compute_secs = compute_time.as_secs_f64(),
            "trial complete"
        );
        ComputeTimePoint::new(size, compute_time)
    }
}

impl Default for Collector {
    fn default() -> Self {
        Self::new(IterationsPerTrial::Auto, 0)
    }
}

/// Invocations needed for a batch to last about `TARGET_BATCH_DURATION`.
///
/// Pilots at or above the target give one invocation per batch.
pub fn iterations_for(pilot: Duration) -> u64 {
    let pilot_ns = pilot.as_nanos().max(1);
    let target_ns = TARGET_BATCH_DURATION.as_nanos();
    let n = target_ns.div_ceil(pilot_ns);
    (n.min(MAX_ITERATIONS_PER_BATCH as u128) as u64).max(1)
}

fn per_iteration(total: Duration, iterations: u64) -> Duration {
    Duration::from_secs_f64(total.as_secs_f64() / iterations as f64)
}

fn median(values: &mut [Duration]) -> Duration {
    values.sort_unstable();
    let mid = values.len() / 2;
    if values.len() % 2 == 0 {
        (values[mid - 1] + values[mid]) / 2
    } else {
        values[mid]
    }
}
