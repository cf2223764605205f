//! Wall-clock timing of repeated invocations.

use std::time::{Duration, Instant};

pub use std::hint::black_box;

/// Monotonic wall-clock timer.
///
/// Trials in this crate span microseconds to seconds, so `Instant` is
/// precise enough; sub-microsecond operations are batched by the
/// [`Collector`](super::Collector) instead of relying on cycle counters.
#[derive(Debug, Clone, Copy, Default)]
pub struct Timer;

impl Timer {
    /// Create a new timer.
    pub fn new() -> Self {
        Self
    }

    /// Run `f` `iterations` times back to back and return the total elapsed time.
    ///
    /// Every result passes through [`black_box`] so the work cannot be
    /// optimized away.
    pub fn time<F, T>(&self, iterations: u64, mut f: F) -> Duration
    where
        F: FnMut() -> T,
    {
        let start = Instant::now();
        for _ in 0..iterations {
            black_box(f());
        }
        start.elapsed()
    }
}
