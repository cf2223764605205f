//! State of the size planner for one classification run.
//!
//! This module owns the collected samples and decides, step by step, which
//! input size to try next or that sampling is over.

use crate::adaptive::{PlannerConfig, StopReason};
use crate::analysis::classify;
use crate::constants::MIN_SEED_SIZE;
use crate::types::{ComputeTimePoint, TimeComplexity};

/// Planner state: the sample set plus the cursor derived from it.
///
/// States are *has-next-size* and *exhausted*; once exhausted, every further
/// call to [`next_size`](Self::next_size) returns `None`.
#[derive(Debug, Clone)]
pub struct SizeState {
    /// Samples in trial order.
    samples: Vec<ComputeTimePoint>,

    /// Planner settings.
    config: PlannerConfig,

    /// Set once the planner is exhausted.
    stop_reason: Option<StopReason>,
}

impl SizeState {
    /// Create an empty planner with default settings.
    pub fn new() -> Self {
        Self::with_config(PlannerConfig::default())
    }

    /// Create an empty planner with the given settings.
    ///
    /// # Panics
    ///
    /// Panics if `seed_size` is below 2, `max_size` is 0, or
    /// `seed_size > max_size`.
    pub fn with_config(config: PlannerConfig) -> Self {
        assert!(
            config.seed_size >= MIN_SEED_SIZE,
            "seed_size must be >= {} (got {})",
            MIN_SEED_SIZE,
            config.seed_size
        );
        assert!(config.max_size > 0, "max_size must be > 0");
        assert!(
            config.seed_size <= config.max_size,
            "seed_size ({}) must not exceed max_size ({})",
            config.seed_size,
            config.max_size
        );
        Self {
            samples: Vec::new(),
            config,
            stop_reason: None,
        }
    }

    /// Create a planner that continues from previously observed samples.
    pub fn from_points(points: impl IntoIterator<Item = ComputeTimePoint>) -> Self {
        let mut state = Self::new();
        state.samples.extend(points);
        state
    }

    /// Planner settings.
    pub fn config(&self) -> &PlannerConfig {
        &self.config
    }

    /// Samples collected so far, in trial order.
    pub fn samples(&self) -> &[ComputeTimePoint] {
        &self.samples
    }

    /// Consume the state and return its samples.
    pub fn into_samples(self) -> Vec<ComputeTimePoint> {
        self.samples
    }

    /// Number of samples collected.
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    /// Whether no sample has been recorded yet.
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// The most recently recorded sample.
    pub fn last(&self) -> Option<&ComputeTimePoint> {
        self.samples.last()
    }

    /// Current working hypothesis, using the planner tolerance.
    pub fn hypothesis(&self) -> TimeComplexity {
        classify(&self.samples, self.config.tolerance)
    }

    /// Whether the planner has stopped proposing sizes.
    pub fn is_exhausted(&self) -> bool {
        self.stop_reason.is_some()
    }

    /// Why the planner stopped, once exhausted.
    pub fn stop_reason(&self) -> Option<&StopReason> {
        self.stop_reason.as_ref()
    }

    /// Append one trial's observation.
    pub fn record(&mut self, point: ComputeTimePoint) {
        self.samples.push(point);
    }

    /// Decide the next input size, or `None` once sampling is over.
    pub fn next_size(&mut self) -> Option<usize> {
        if self.stop_reason.is_some() {
            return None;
        }

        let Some(last) = self.samples.last().copied() else {
            return Some(self.config.seed_size);
        };

        if last.compute_time() >= self.config.trial_time_limit {
            tracing::warn!(
                size = last.size(),
                elapsed_secs = last.compute_secs(),
                "trial exceeded the time limit, stopping"
            );
            return self.exhaust(StopReason::TrialTooSlow {
                size: last.size(),
                elapsed: last.compute_time(),
                limit: self.config.trial_time_limit,
            });
        }

        let hypothesis = self.hypothesis();
        let next = match hypothesis {
            TimeComplexity::Linear | TimeComplexity::Logarithmic
                if self.samples.len() > self.config.max_samples =>
            {
                return self.exhaust(StopReason::SampleCapReached {
                    samples: self.samples.len(),
                    max_samples: self.config.max_samples,
                });
            }
            TimeComplexity::Linear => last.size().checked_mul(last.size()),
            TimeComplexity::Logarithmic
            | TimeComplexity::Quadratic
            | TimeComplexity::Polynomial => last.size().checked_mul(2),
        };

        match next {
            Some(size) if size <= self.config.max_size => {
                tracing::debug!(
                    %hypothesis,
                    last_size = last.size(),
                    next_size = size,
                    "planned next input size"
                );
                Some(size)
            }
            _ => self.exhaust(StopReason::SizeLimitReached {
                last_size: last.size(),
                max_size: self.config.max_size,
            }),
        }
    }

    fn exhaust(&mut self, reason: StopReason) -> Option<usize> {
        tracing::info!(samples = self.samples.len(), %reason, "size planner exhausted");
        self.stop_reason = Some(reason);
        None
    }
}

impl Default for SizeState {
    fn default() -> Self {
        Self::new()
    }
}
