//! Measurement infrastructure.
//!
//! This module provides:
//! - Input providers bound to one planned size
//! - Wall-clock timing of repeated invocations
//! - Trial collection with adaptive batching

mod collector;
mod input;
mod timer;

pub use collector::{iterations_for, Collector};
pub use input::{InputProvider, InputRng};
pub use timer::{black_box, Timer};
