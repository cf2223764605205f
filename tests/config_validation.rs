//! Tests for configuration validation.
//!
//! These tests verify that invalid configuration values are rejected
//! by the builder methods with appropriate panic messages.

use std::time::Duration;

use complexity_oracle::{ComplexityChecker, Config, IterationsPerTrial, Tolerance};

// =============================================================================
// SEED SIZE VALIDATION
// =============================================================================

#[test]
#[should_panic(expected = "seed_size must be >= 2")]
fn seed_size_zero_panics() {
    let _ = ComplexityChecker::new().seed_size(0);
}

#[test]
#[should_panic(expected = "seed_size must be <= max_size")]
fn seed_size_above_max_size_panics() {
    let _ = ComplexityChecker::new().max_size(16).seed_size(32);
}

#[test]
#[should_panic(expected = "seed_size must be >= 2 (got 1)")]
fn seed_size_one_panics() {
    // Squaring 1 never grows, so the planner would repeat size 1.
    let _ = ComplexityChecker::new().seed_size(1);
}

#[test]
#[should_panic(expected = "seed_size must be >= 2 (got 1)")]
fn with_config_rejects_seed_of_one() {
    let _ = ComplexityChecker::with_config(Config {
        seed_size: 1,
        ..Config::default()
    });
}

#[test]
fn seed_size_two_valid() {
    let checker = ComplexityChecker::new().seed_size(2);
    assert_eq!(checker.config().seed_size, 2);
}

// =============================================================================
// MAX SIZE VALIDATION
// =============================================================================

#[test]
#[should_panic(expected = "max_size must be >= seed_size")]
fn max_size_below_seed_panics() {
    let _ = ComplexityChecker::new().seed_size(8).max_size(4);
}

#[test]
fn max_size_equal_to_seed_valid() {
    let checker = ComplexityChecker::new().max_size(2);
    assert_eq!(checker.config().max_size, 2);
}

// =============================================================================
// SAMPLE CAP AND TIME LIMIT VALIDATION
// =============================================================================

#[test]
#[should_panic(expected = "max_samples must be > 0")]
fn max_samples_zero_panics() {
    let _ = ComplexityChecker::new().max_samples(0);
}

#[test]
fn max_samples_large_valid() {
    let checker = ComplexityChecker::new().max_samples(1_000_000);
    assert_eq!(checker.config().max_samples, 1_000_000);
}

#[test]
#[should_panic(expected = "trial_time_limit must be > 0")]
fn trial_time_limit_zero_panics() {
    let _ = ComplexityChecker::new().trial_time_limit(Duration::ZERO);
}

#[test]
fn trial_time_limit_sub_millisecond_valid() {
    let checker = ComplexityChecker::new().trial_time_limit(Duration::from_micros(1));
    assert_eq!(checker.config().trial_time_limit, Duration::from_micros(1));
}

// =============================================================================
// ITERATIONS VALIDATION
// =============================================================================

#[test]
#[should_panic(expected = "iterations_per_trial must be > 0")]
fn fixed_zero_iterations_panics() {
    let _ = ComplexityChecker::new().iterations_per_trial(IterationsPerTrial::Fixed(0));
}

#[test]
fn fixed_one_iteration_valid() {
    let checker = ComplexityChecker::new().iterations_per_trial(IterationsPerTrial::Fixed(1));
    assert_eq!(
        checker.config().iterations_per_trial,
        IterationsPerTrial::Fixed(1)
    );
}

// =============================================================================
// WHOLE CONFIG VALIDATION
// =============================================================================

#[test]
fn default_config_valid() {
    let checker = ComplexityChecker::with_config(Config::default());
    assert_eq!(checker.config(), &Config::default());
    assert_eq!(checker.config().seed_size, 2);
    assert_eq!(checker.config().max_samples, 512);
    assert_eq!(checker.config().trial_time_limit, Duration::from_secs(10));
    assert_eq!(checker.config().planner_tolerance, Tolerance::Medium);
}

#[test]
#[should_panic(expected = "seed_size must be <= max_size")]
fn with_config_rejects_inverted_sizes() {
    let _ = ComplexityChecker::with_config(Config {
        seed_size: 64,
        max_size: 8,
        ..Config::default()
    });
}

#[test]
#[should_panic(expected = "iterations_per_trial must be > 0")]
fn with_config_rejects_zero_iterations() {
    let _ = ComplexityChecker::with_config(Config {
        iterations_per_trial: IterationsPerTrial::Fixed(0),
        ..Config::default()
    });
}

// =============================================================================
// ENVIRONMENT OVERRIDES
// =============================================================================

/// Environment variables are process-global, so all overrides are exercised
/// in a single test.
#[test]
fn from_env_applies_valid_and_ignores_invalid() {
    std::env::set_var("CO_SEED", "31337");
    std::env::set_var("CO_MAX_SAMPLES", "64");
    std::env::set_var("CO_MAX_SIZE", "4096");
    std::env::set_var("CO_TRIAL_TIME_LIMIT_SECS", "2.5");
    std::env::set_var("CO_PLANNER_TOLERANCE", "low");

    let checker = ComplexityChecker::new().from_env();
    assert_eq!(checker.config().seed, Some(31337));
    assert_eq!(checker.config().max_samples, 64);
    assert_eq!(checker.config().max_size, 4096);
    assert_eq!(
        checker.config().trial_time_limit,
        Duration::from_millis(2500)
    );
    assert_eq!(checker.config().planner_tolerance, Tolerance::Low);

    std::env::set_var("CO_SEED", "not-a-number");
    std::env::set_var("CO_MAX_SAMPLES", "0");
    std::env::set_var("CO_MAX_SIZE", "1");
    std::env::set_var("CO_TRIAL_TIME_LIMIT_SECS", "-1");
    std::env::set_var("CO_PLANNER_TOLERANCE", "tight");

    let checker = ComplexityChecker::new().from_env();
    assert_eq!(checker.config(), &Config::default());

    for name in [
        "CO_SEED",
        "CO_MAX_SAMPLES",
        "CO_MAX_SIZE",
        "CO_TRIAL_TIME_LIMIT_SECS",
        "CO_PLANNER_TOLERANCE",
    ] {
        std::env::remove_var(name);
    }
}
