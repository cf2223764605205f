//! Error types for parsing user-facing settings.

/// A string did not name a known complexity class.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown time complexity '{input}' (expected linear, logarithmic, quadratic or polynomial)")]
pub struct ParseComplexityError {
    /// The rejected input.
    pub input: String,
}

/// A serialized observation had an input size of 0.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid compute time point: size must be > 0")]
pub struct InvalidPointError;

/// A string did not name a known tolerance band.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown tolerance '{input}' (expected none, low or medium)")]
pub struct ParseToleranceError {
    /// The rejected input.
    pub input: String,
}
