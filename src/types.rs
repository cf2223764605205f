//! Core value types: complexity classes, tolerance bands and observations.

use std::fmt;
use std::str::FromStr;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::{InvalidPointError, ParseComplexityError, ParseToleranceError};

/// Complexity class of an algorithm's running time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TimeComplexity {
    /// O(n): time per element stays flat as the input grows.
    Linear,
    /// O(log n).
    Logarithmic,
    /// O(n^2).
    Quadratic,
    /// Anything the analyzer cannot place more precisely.
    Polynomial,
}

impl TimeComplexity {
    /// All classes, cheapest first.
    pub const ALL: [TimeComplexity; 4] = [
        TimeComplexity::Logarithmic,
        TimeComplexity::Linear,
        TimeComplexity::Quadratic,
        TimeComplexity::Polynomial,
    ];

    /// Lowercase name, as accepted by [`FromStr`].
    pub fn name(self) -> &'static str {
        match self {
            TimeComplexity::Linear => "linear",
            TimeComplexity::Logarithmic => "logarithmic",
            TimeComplexity::Quadratic => "quadratic",
            TimeComplexity::Polynomial => "polynomial",
        }
    }

    /// Whether the planner may probe this class with aggressive size growth.
    pub fn is_cheap(self) -> bool {
        matches!(self, TimeComplexity::Linear | TimeComplexity::Logarithmic)
    }
}

impl fmt::Display for TimeComplexity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let notation = match self {
            TimeComplexity::Linear => "O(n)",
            TimeComplexity::Logarithmic => "O(log n)",
            TimeComplexity::Quadratic => "O(n^2)",
            TimeComplexity::Polynomial => "O(n^k)",
        };
        f.write_str(notation)
    }
}

impl FromStr for TimeComplexity {
    type Err = ParseComplexityError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "linear" => Ok(TimeComplexity::Linear),
            "logarithmic" | "log" => Ok(TimeComplexity::Logarithmic),
            "quadratic" => Ok(TimeComplexity::Quadratic),
            "polynomial" => Ok(TimeComplexity::Polynomial),
            _ => Err(ParseComplexityError {
                input: s.to_string(),
            }),
        }
    }
}

/// How close two tangents must be to count as equal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Tolerance {
    /// ±1%.
    None,
    /// ±10%.
    Low,
    /// ±25%.
    Medium,
}

impl Tolerance {
    /// Half-width of the band as a fraction of the reference value.
    pub fn fraction(self) -> f64 {
        match self {
            Tolerance::None => 0.01,
            Tolerance::Low => 0.10,
            Tolerance::Medium => 0.25,
        }
    }

    /// Inclusive `(lower, upper)` band around `reference`.
    pub fn range(self, reference: f64) -> (f64, f64) {
        let delta = reference.abs() * self.fraction();
        (reference - delta, reference + delta)
    }

    /// Check whether `value` falls inside the band around `reference`.
    pub fn contains(self, reference: f64, value: f64) -> bool {
        let (lower, upper) = self.range(reference);
        value >= lower && value <= upper
    }

    /// Lowercase name, as accepted by [`FromStr`].
    pub fn name(self) -> &'static str {
        match self {
            Tolerance::None => "none",
            Tolerance::Low => "low",
            Tolerance::Medium => "medium",
        }
    }
}

impl fmt::Display for Tolerance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (±{:.0}%)", self.name(), self.fraction() * 100.0)
    }
}

impl FromStr for Tolerance {
    type Err = ParseToleranceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "none" => Ok(Tolerance::None),
            "low" => Ok(Tolerance::Low),
            "medium" => Ok(Tolerance::Medium),
            _ => Err(ParseToleranceError {
                input: s.to_string(),
            }),
        }
    }
}

/// One observed (input size, elapsed time) pair.
///
/// Deserialization enforces the same `size > 0` rule as [`new`](Self::new).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawPoint")]
pub struct ComputeTimePoint {
    size: usize,
    compute_time: Duration,
}

#[derive(Deserialize)]
struct RawPoint {
    size: usize,
    compute_time: Duration,
}

impl TryFrom<RawPoint> for ComputeTimePoint {
    type Error = InvalidPointError;

    fn try_from(raw: RawPoint) -> Result<Self, Self::Error> {
        if raw.size == 0 {
            return Err(InvalidPointError);
        }
        Ok(Self {
            size: raw.size,
            compute_time: raw.compute_time,
        })
    }
}

impl ComputeTimePoint {
    /// Create a new observation.
    ///
    /// # Panics
    ///
    /// Panics if `size` is 0.
    pub fn new(size: usize, compute_time: Duration) -> Self {
        assert!(size > 0, "size must be > 0");
        Self { size, compute_time }
    }

    /// Convenience constructor taking seconds.
    ///
    /// # Panics
    ///
    /// Panics if `size` is 0 or `secs` is negative or not finite.
    pub fn from_secs(size: usize, secs: f64) -> Self {
        assert!(
            secs.is_finite() && secs >= 0.0,
            "compute time must be a non-negative number of seconds, got {}",
            secs
        );
        Self::new(size, Duration::from_secs_f64(secs))
    }

    /// Input size of the trial.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Elapsed time of the trial.
    pub fn compute_time(&self) -> Duration {
        self.compute_time
    }

    /// Elapsed time in seconds.
    pub fn compute_secs(&self) -> f64 {
        self.compute_time.as_secs_f64()
    }
}
