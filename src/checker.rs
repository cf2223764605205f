//! Main `ComplexityChecker` entry point and builder.
//!
//! The checker drives one sampling run per call:
//!
//! 1. **Plan**: ask the size planner for the next input size
//! 2. **Measure**: bind an input provider to that size and time the operation
//! 3. **Record**: hand the observation back to the planner, repeat until it
//!    is exhausted
//! 4. **Classify**: run the analyzer over all samples with the caller's
//!    tolerance and compare with the expected complexity

use std::env;
use std::time::{Duration, Instant};

use rand::{Rng, SeedableRng};

use crate::adaptive::SizeState;
use crate::analysis::classify;
use crate::config::{Config, IterationsPerTrial};
use crate::constants::MIN_SEED_SIZE;
use crate::measurement::{Collector, InputProvider, InputRng};
use crate::operation::Operation;
use crate::result::CheckResult;
use crate::types::{TimeComplexity, Tolerance};

/// Main entry point for empirical complexity checks.
///
/// # Example
///
/// ```ignore
/// use complexity_oracle::{operation, ComplexityChecker, TimeComplexity, Tolerance};
///
/// let sum = operation::with_input(
///     |p| p.sequence::<i64>(),
///     |v: &Vec<i64>| v.iter().sum::<i64>(),
/// );
///
/// assert!(ComplexityChecker::new().assert(sum, TimeComplexity::Linear, Tolerance::Low));
/// ```
#[derive(Debug, Clone, Default)]
pub struct ComplexityChecker {
    config: Config,
}

impl ComplexityChecker {
    /// Create with default configuration.
    pub fn new() -> Self {
        Self {
            config: Config::default(),
        }
    }

    /// Create with an explicit configuration.
    ///
    /// # Panics
    ///
    /// Panics if the configuration is invalid (see the individual setters).
    pub fn with_config(config: Config) -> Self {
        validate(&config);
        Self { config }
    }

    /// Get the current configuration.
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Set the first input size tried.
    ///
    /// Default: 2
    ///
    /// # Panics
    ///
    /// Panics if `n` is below 2 or larger than the maximum input size.
    pub fn seed_size(mut self, n: usize) -> Self {
        assert!(
            n >= MIN_SEED_SIZE,
            "seed_size must be >= {} (got {})",
            MIN_SEED_SIZE,
            n
        );
        assert!(
            n <= self.config.max_size,
            "seed_size must be <= max_size ({}), got {}",
            self.config.max_size,
            n
        );
        self.config.seed_size = n;
        self
    }

    /// Set the per-trial circuit breaker.
    ///
    /// A trial lasting at least this long ends sampling.
    ///
    /// Default: 10 seconds
    ///
    /// # Panics
    ///
    /// Panics if `limit` is zero.
    pub fn trial_time_limit(mut self, limit: Duration) -> Self {
        assert!(!limit.is_zero(), "trial_time_limit must be > 0");
        self.config.trial_time_limit = limit;
        self
    }

    /// Set the sample cap for linear and logarithmic hypotheses.
    ///
    /// Default: 512
    ///
    /// # Panics
    ///
    /// Panics if `n` is 0.
    pub fn max_samples(mut self, n: usize) -> Self {
        assert!(n > 0, "max_samples must be > 0 (got {})", n);
        self.config.max_samples = n;
        self
    }

    /// Set the largest input size the planner may request.
    ///
    /// Default: 2^24
    ///
    /// # Panics
    ///
    /// Panics if `n` is smaller than the seed size.
    pub fn max_size(mut self, n: usize) -> Self {
        assert!(
            n >= self.config.seed_size,
            "max_size must be >= seed_size ({}), got {}",
            self.config.seed_size,
            n
        );
        self.config.max_size = n;
        self
    }

    /// Set the tolerance used for the working hypothesis while planning.
    ///
    /// Default: `Tolerance::Medium`
    pub fn planner_tolerance(mut self, tolerance: Tolerance) -> Self {
        self.config.planner_tolerance = tolerance;
        self
    }

    /// Set how many invocations make up one trial.
    ///
    /// Default: `IterationsPerTrial::Auto`
    ///
    /// # Panics
    ///
    /// Panics on `IterationsPerTrial::Fixed(0)`.
    pub fn iterations_per_trial(mut self, iterations: IterationsPerTrial) -> Self {
        assert!(
            iterations != IterationsPerTrial::Fixed(0),
            "iterations_per_trial must be > 0"
        );
        self.config.iterations_per_trial = iterations;
        self
    }

    /// Set untimed warmup invocations.
    ///
    /// Default: 0
    pub fn warmup(mut self, n: usize) -> Self {
        self.config.warmup = n;
        self
    }

    /// Fix the seed for input generation, making inputs reproducible.
    pub fn seed(mut self, seed: u64) -> Self {
        self.config.seed = Some(seed);
        self
    }

    /// Apply overrides from environment variables.
    ///
    /// | Variable | Setting |
    /// |---|---|
    /// | `CO_SEED` | `seed` |
    /// | `CO_MAX_SAMPLES` | `max_samples` |
    /// | `CO_MAX_SIZE` | `max_size` |
    /// | `CO_TRIAL_TIME_LIMIT_SECS` | `trial_time_limit` |
    /// | `CO_PLANNER_TOLERANCE` | `planner_tolerance` |
    ///
    /// Values that fail to parse or are out of range are ignored.
    ///
    /// # Example
    ///
    /// ```ignore
    /// // In CI, set CO_TRIAL_TIME_LIMIT_SECS=2 to keep slow checks short
    /// let checker = ComplexityChecker::new().from_env();
    /// ```
    pub fn from_env(mut self) -> Self {
        if let Some(seed) = parse_u64_env("CO_SEED") {
            self.config.seed = Some(seed);
        }
        if let Some(n) = parse_usize_env("CO_MAX_SAMPLES") {
            if n > 0 {
                self.config.max_samples = n;
            }
        }
        if let Some(n) = parse_usize_env("CO_MAX_SIZE") {
            if n >= self.config.seed_size {
                self.config.max_size = n;
            }
        }
        if let Some(secs) = parse_f64_env("CO_TRIAL_TIME_LIMIT_SECS") {
            if secs.is_finite() && secs > 0.0 {
                self.config.trial_time_limit = Duration::from_secs_f64(secs);
            }
        }
        if let Ok(value) = env::var("CO_PLANNER_TOLERANCE") {
            match value.parse::<Tolerance>() {
                Ok(tolerance) => self.config.planner_tolerance = tolerance,
                Err(err) => tracing::debug!(%err, "ignoring CO_PLANNER_TOLERANCE"),
            }
        }
        self
    }

    /// Run the sampling loop and report whether the observed complexity is
    /// `expected` under `tolerance`.
    pub fn assert<O: Operation>(
        &self,
        operation: O,
        expected: TimeComplexity,
        tolerance: Tolerance,
    ) -> bool {
        self.check(operation, expected, tolerance).passed()
    }

    /// Run the sampling loop and return the full result.
    pub fn check<O: Operation>(
        &self,
        operation: O,
        expected: TimeComplexity,
        tolerance: Tolerance,
    ) -> CheckResult {
        let start = Instant::now();
        let (state, seed) = self.run(operation);
        let observed = classify(state.samples(), tolerance);

        tracing::info!(
            %expected,
            %observed,
            %tolerance,
            trials = state.len(),
            "complexity check complete"
        );

        CheckResult {
            expected,
            observed,
            tolerance,
            stop_reason: state.stop_reason().cloned(),
            samples: state.into_samples(),
            elapsed: start.elapsed(),
            seed,
        }
    }

    /// Run only the sampling loop and return the exhausted planner.
    ///
    /// Useful to classify one set of samples under several tolerances.
    pub fn measure<O: Operation>(&self, operation: O) -> SizeState {
        self.run(operation).0
    }

    fn run<O: Operation>(&self, mut operation: O) -> (SizeState, u64) {
        let seed = self.config.seed.unwrap_or_else(|| rand::rng().random());
        let mut rng = InputRng::seed_from_u64(seed);
        let collector = Collector::new(self.config.iterations_per_trial, self.config.warmup)
            .with_trial_time_limit(self.config.trial_time_limit);
        let mut state = SizeState::with_config(self.config.planner());

        tracing::debug!(seed, config = ?self.config, "starting sampling run");

        collector.warmup(
            &mut InputProvider::with_size(self.config.seed_size, &mut rng),
            &mut operation,
        );

        while let Some(mut provider) = InputProvider::new(&mut state, &mut rng) {
            let point = collector.run_trial(&mut provider, &mut operation);
            state.record(point);
        }

        (state, seed)
    }
}

fn validate(config: &Config) {
    assert!(
        config.seed_size >= MIN_SEED_SIZE,
        "seed_size must be >= {} (got {})",
        MIN_SEED_SIZE,
        config.seed_size
    );
    assert!(
        config.seed_size <= config.max_size,
        "seed_size must be <= max_size ({}), got {}",
        config.max_size,
        config.seed_size
    );
    assert!(
        !config.trial_time_limit.is_zero(),
        "trial_time_limit must be > 0"
    );
    assert!(
        config.max_samples > 0,
        "max_samples must be > 0 (got {})",
        config.max_samples
    );
    assert!(
        config.iterations_per_trial != IterationsPerTrial::Fixed(0),
        "iterations_per_trial must be > 0"
    );
}

// =============================================================================
// Environment variable parsing helpers
// =============================================================================

fn parse_usize_env(name: &str) -> Option<usize> {
    env::var(name).ok()?.parse().ok()
}

fn parse_u64_env(name: &str) -> Option<u64> {
    env::var(name).ok()?.parse().ok()
}

fn parse_f64_env(name: &str) -> Option<f64> {
    env::var(name).ok()?.parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adaptive::StopReason;
    use crate::operation::direct;

    #[test]
    fn test_builder_sets_fields() {
        let checker = ComplexityChecker::new()
            .seed_size(4)
            .max_samples(10)
            .max_size(1 << 10)
            .planner_tolerance(Tolerance::Low)
            .warmup(3)
            .seed(99);
        let config = checker.config();
        assert_eq!(config.seed_size, 4);
        assert_eq!(config.max_samples, 10);
        assert_eq!(config.max_size, 1024);
        assert_eq!(config.planner_tolerance, Tolerance::Low);
        assert_eq!(config.warmup, 3);
        assert_eq!(config.seed, Some(99));
    }

    #[test]
    fn test_run_stops_at_size_limit() {
        let checker = ComplexityChecker::new()
            .max_size(64)
            .iterations_per_trial(IterationsPerTrial::Fixed(1))
            .seed(1);
        let state = checker.measure(direct(|p| p.sequence::<u8>().len()));
        assert!(state.is_exhausted());
        assert!(matches!(
            state.stop_reason(),
            Some(StopReason::SizeLimitReached { max_size: 64, .. })
        ));
        assert!(state.samples().iter().all(|p| p.size() <= 64));
        assert_eq!(state.samples()[0].size(), 2);
    }

    #[test]
    fn test_run_stops_on_slow_trial() {
        let checker = ComplexityChecker::new()
            .trial_time_limit(Duration::from_millis(1))
            .seed(2);
        let state = checker.measure(direct(|_| std::thread::sleep(Duration::from_millis(2))));
        assert_eq!(state.len(), 1);
        assert!(matches!(
            state.stop_reason(),
            Some(StopReason::TrialTooSlow { size: 2, .. })
        ));
    }

    #[test]
    fn test_check_reports_seed() {
        let checker = ComplexityChecker::new()
            .max_size(32)
            .iterations_per_trial(IterationsPerTrial::Fixed(1))
            .seed(1234);
        let result = checker.check(
            direct(|p| p.sequence::<i32>().len()),
            TimeComplexity::Linear,
            Tolerance::Medium,
        );
        assert_eq!(result.seed, 1234);
        assert_eq!(result.trials(), result.samples.len());
        assert!(result.stop_reason.is_some());
    }
}
