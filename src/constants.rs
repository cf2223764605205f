//! Constants shared by the planner, the analyzer and the measurement loop.

use std::time::Duration;

/// Scaling factor applied to time/size ratios before they are compared.
///
/// Keeps tangents in a convenient numeric range whatever the time unit.
pub const TANGENT_AMPLIFIER: f64 = 1000.0;

/// Bound used by the built-in [`Randomizable`](crate::Randomizable) impls.
///
/// Signed integers and floats are drawn from `[-RANDOM_BOUND, RANDOM_BOUND)`,
/// unsigned integers from `[0, RANDOM_BOUND)`, so sums over large inputs
/// cannot overflow.
pub const RANDOM_BOUND: i64 = 1000;

/// Bound used for the 8-bit integer types, which cannot hold `RANDOM_BOUND`.
pub const RANDOM_BOUND_8BIT: i64 = 100;

// =============================================================================
// Default configuration constants
// =============================================================================

/// Smallest valid seed size.
///
/// Under the linear growth rule `1² = 1`, so a seed of 1 would never grow.
pub const MIN_SEED_SIZE: usize = 2;

/// First input size tried when no samples exist yet.
pub const DEFAULT_SEED_SIZE: usize = 2;

/// A trial at least this slow stops the planner.
pub const DEFAULT_TRIAL_TIME_LIMIT: Duration = Duration::from_secs(10);

/// Sample count above which linear and logarithmic hypotheses stop refining.
pub const DEFAULT_MAX_SAMPLES: usize = 512;

/// Largest input size the planner will request (2^24 elements).
pub const DEFAULT_MAX_SIZE: usize = 1 << 24;

/// Target wall-clock length of one measurement batch in `Auto` mode.
pub const TARGET_BATCH_DURATION: Duration = Duration::from_micros(500);

/// Number of batches whose median forms one `Auto` trial.
pub const BATCHES_PER_TRIAL: usize = 5;

/// Upper bound on invocations per batch in `Auto` mode.
pub const MAX_ITERATIONS_PER_BATCH: u64 = 100_000;
