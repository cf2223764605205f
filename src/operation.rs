//! Wrapping an algorithm under test as a measurable operation.
//!
//! ## Common Pitfall: Input Generation Inside the Timed Region
//!
//! With [`direct`], the closure asks the provider for its input, so random
//! generation (and dropping the input) is timed together with the algorithm.
//! Generation is linear in the input size and can blur the signature of
//! cheaper or costlier algorithms. Prefer [`with_input`], which builds the
//! input before the clock starts and drops it after the clock stops:
//!
//! ```ignore
//! use complexity_oracle::{operation, ComplexityChecker, TimeComplexity, Tolerance};
//!
//! // Generation is timed too
//! let op = operation::direct(|p| p.sequence::<i64>().iter().sum::<i64>());
//!
//! // Only the summation is timed
//! let op = operation::with_input(
//!     |p| p.sequence::<i64>(),
//!     |v: &Vec<i64>| v.iter().sum::<i64>(),
//! );
//! assert!(ComplexityChecker::new().assert(op, TimeComplexity::Linear, Tolerance::Low));
//! ```

use std::marker::PhantomData;
use std::time::Duration;

use crate::measurement::{black_box, InputProvider, Timer};

/// An algorithm the collector can run and time.
pub trait Operation {
    /// Run the algorithm `iterations` times on input from `provider` and
    /// return the total elapsed wall-clock time.
    fn run_batch(&mut self, provider: &mut InputProvider<'_>, iterations: u64) -> Duration;
}

impl<O: Operation + ?Sized> Operation for &mut O {
    fn run_batch(&mut self, provider: &mut InputProvider<'_>, iterations: u64) -> Duration {
        (**self).run_batch(provider, iterations)
    }
}

/// Operation whose closure pulls its own input; see [`direct`].
pub struct Direct<F, T> {
    f: F,
    _output: PhantomData<fn() -> T>,
}

/// Wrap a closure that takes the provider and returns the algorithm's result.
///
/// The returned value is the algorithm's completion: the clock stops as soon
/// as the closure returns.
pub fn direct<F, T>(f: F) -> Direct<F, T>
where
    F: FnMut(&mut InputProvider<'_>) -> T,
{
    Direct {
        f,
        _output: PhantomData,
    }
}

impl<F, T> Operation for Direct<F, T>
where
    F: FnMut(&mut InputProvider<'_>) -> T,
{
    fn run_batch(&mut self, provider: &mut InputProvider<'_>, iterations: u64) -> Duration {
        let f = &mut self.f;
        Timer::new().time(iterations, || f(provider))
    }
}

/// Operation with untimed input generation; see [`with_input`].
pub struct WithInput<G, R, I, T> {
    generate: G,
    routine: R,
    _types: PhantomData<fn(I) -> T>,
}

/// Wrap an input generator and a routine; only the routine is timed.
///
/// Each batch generates one input and runs the routine on it `iterations`
/// times, so the routine must not depend on consuming its input.
pub fn with_input<G, R, I, T>(generate: G, routine: R) -> WithInput<G, R, I, T>
where
    G: FnMut(&mut InputProvider<'_>) -> I,
    R: FnMut(&I) -> T,
{
    WithInput {
        generate,
        routine,
        _types: PhantomData,
    }
}

impl<G, R, I, T> Operation for WithInput<G, R, I, T>
where
    G: FnMut(&mut InputProvider<'_>) -> I,
    R: FnMut(&I) -> T,
{
    fn run_batch(&mut self, provider: &mut InputProvider<'_>, iterations: u64) -> Duration {
        let input = (self.generate)(provider);
        let routine = &mut self.routine;
        let elapsed = Timer::new().time(iterations, || routine(black_box(&input)));
        drop(input);
        elapsed
    }
}
