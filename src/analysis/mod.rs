//! Complexity classification of collected samples.
//!
//! The analyzer compares the tangent (scaled time/size ratio) of the
//! largest-size sample with that of the second largest. If the two agree
//! within the tolerance band the growth is linear; anything else is reported
//! as polynomial.
//!
//! Logarithmic and quadratic curves are not told apart from the general
//! polynomial case: a flat tangent is the only signature this heuristic
//! checks for.

mod tangent;

pub use tangent::{tangent, tangents};

use crate::types::{ComputeTimePoint, TimeComplexity, Tolerance};

/// Classify the growth pattern of `samples`.
///
/// With fewer than two samples there is nothing to compare and the result is
/// [`TimeComplexity::Linear`], the cheapest hypothesis.
pub fn classify(samples: &[ComputeTimePoint], tolerance: Tolerance) -> TimeComplexity {
    let sorted = tangents(samples);
    let [.., (_, second), (_, largest)] = sorted.as_slice() else {
        return TimeComplexity::Linear;
    };

    if tolerance.contains(*largest, *second) {
        TimeComplexity::Linear
    } else {
        TimeComplexity::Polynomial
    }
}
