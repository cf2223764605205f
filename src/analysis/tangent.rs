//! Time/size ratios ("tangents") of observed samples.

use crate::constants::TANGENT_AMPLIFIER;
use crate::types::ComputeTimePoint;

/// Scaled time-to-size ratio of one sample.
///
/// `tangent = compute_secs * TANGENT_AMPLIFIER / size`. For a linear
/// algorithm this value is flat across sizes.
pub fn tangent(point: &ComputeTimePoint) -> f64 {
    point.compute_secs() * TANGENT_AMPLIFIER / point.size() as f64
}

/// Tangents of all samples as `(size, tangent)` pairs, sorted by size.
///
/// The sort is stable, so samples sharing a size keep their trial order.
pub fn tangents(samples: &[ComputeTimePoint]) -> Vec<(usize, f64)> {
    let mut points: Vec<(usize, f64)> = samples.iter().map(|p| (p.size(), tangent(p))).collect();
    points.sort_by_key(|&(size, _)| size);
    points
}
