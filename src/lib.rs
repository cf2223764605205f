//! # complexity-oracle
//!
//! Empirically check the time complexity of an algorithm.
//!
//! The checker runs the algorithm on random inputs of growing size, records
//! `(size, time)` samples and classifies the growth curve:
//! - Tangent of each sample: `time × 1000 / size`
//! - Linear when the two largest sizes have tangents within the tolerance band
//! - Polynomial otherwise
//!
//! Input sizes are planned adaptively: a linear hypothesis squares the size,
//! anything costlier doubles it, and a slow trial ends sampling.
//!
//! ## Quick Start
//!
//! ```ignore
//! use complexity_oracle::{operation, ComplexityChecker, TimeComplexity, Tolerance};
//!
//! let sum = operation::with_input(
//!     |p| p.sequence::<i64>(),
//!     |v: &Vec<i64>| v.iter().sum::<i64>(),
//! );
//!
//! let result = ComplexityChecker::new().check(sum, TimeComplexity::Linear, Tolerance::Low);
//! println!("{}", complexity_oracle::output::format_result(&result));
//! assert!(result.passed());
//! ```
//!
//! ## Common Pitfall: Timing the Input Generator
//!
//! Random generation is linear in the input size. With
//! [`operation::direct`] it is timed together with the algorithm; use
//! [`operation::with_input`] to keep it outside the clock.

#![warn(missing_docs)]
#![warn(clippy::all)]

// Core modules
mod checker;
mod config;
mod error;
mod result;
mod types;

// Functional modules
pub mod adaptive;
pub mod analysis;
pub mod constants;
pub mod measurement;
pub mod operation;
pub mod output;
pub mod random;

// Re-exports for public API
pub use adaptive::{PlannerConfig, SizeState, StopReason};
pub use checker::ComplexityChecker;
pub use config::{Config, IterationsPerTrial};
pub use error::{InvalidPointError, ParseComplexityError, ParseToleranceError};
pub use measurement::{black_box, InputProvider};
pub use operation::Operation;
pub use random::{RandomCollection, Randomizable};
pub use result::CheckResult;
pub use types::{ComputeTimePoint, TimeComplexity, Tolerance};

/// Assert that an operation has the expected complexity.
///
/// Panics with a formatted report on mismatch. Returns the [`CheckResult`]
/// otherwise.
///
/// # Example
/// ```ignore
/// use complexity_oracle::{assert_complexity, operation, ComplexityChecker, TimeComplexity, Tolerance};
///
/// #[test]
/// fn sum_is_linear() {
///     let op = operation::with_input(|p| p.sequence::<i64>(), |v: &Vec<i64>| v.iter().sum::<i64>());
///     assert_complexity!(op, TimeComplexity::Linear, Tolerance::Low);
///
///     // With a configured checker
///     let checker = ComplexityChecker::new().seed(7);
///     let op = operation::with_input(|p| p.sequence::<i64>(), |v: &Vec<i64>| v.iter().sum::<i64>());
///     assert_complexity!(checker, op, TimeComplexity::Linear, Tolerance::Low);
/// }
/// ```
#[macro_export]
macro_rules! assert_complexity {
    ($op:expr, $expected:expr, $tolerance:expr $(,)?) => {
        $crate::assert_complexity!($crate::ComplexityChecker::new(), $op, $expected, $tolerance)
    };
    ($checker:expr, $op:expr, $expected:expr, $tolerance:expr $(,)?) => {{
        let result = $checker.check($op, $expected, $tolerance);
        if !result.passed() {
            panic!(
                "complexity assertion failed\n{}",
                $crate::output::format_result(&result)
            );
        }
        result
    }};
}
