//! JSON serialization for complexity check results.

use crate::result::CheckResult;

/// Serialize a CheckResult to a compact JSON string.
///
/// # Errors
///
/// Returns an error if serialization fails (should not happen for CheckResult).
pub fn to_json(result: &CheckResult) -> Result<String, serde_json::Error> {
    serde_json::to_string(result)
}

/// Serialize a CheckResult to a pretty-printed JSON string.
///
/// # Errors
///
/// Returns an error if serialization fails (should not happen for CheckResult).
pub fn to_json_pretty(result: &CheckResult) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(result)
}
