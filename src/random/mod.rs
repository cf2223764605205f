//! Random input generation.
//!
//! Two separate capabilities are exposed:
//! - [`Randomizable`]: produce one random value of a type.
//! - [`RandomCollection`]: produce a collection of exactly `len` random items.
//!
//! The algorithm under test picks the one it needs explicitly through
//! [`InputProvider::input`](crate::InputProvider::input) or
//! [`InputProvider::collection`](crate::InputProvider::collection).
//!
//! Built-in numeric impls draw from a small bounded range (see
//! [`RANDOM_BOUND`](crate::constants::RANDOM_BOUND)) so that reductions over
//! millions of elements stay far from overflow.
//!
//! ```ignore
//! use complexity_oracle::random::{Randomizable, RandomCollection};
//!
//! #[derive(Debug)]
//! struct Point { x: i32, y: i32 }
//!
//! impl Randomizable for Point {
//!     fn random<R: rand::Rng + ?Sized>(rng: &mut R) -> Self {
//!         Point { x: i32::random(rng), y: i32::random(rng) }
//!     }
//! }
//!
//! let points: Vec<Point> = Vec::random_collection(128, &mut rand::rng());
//! ```

mod collection;
mod scalar;

use rand::seq::SliceRandom;
use rand::Rng;

/// A type that can produce a uniformly random value of itself.
pub trait Randomizable: Sized {
    /// Draw one random value.
    fn random<R: Rng + ?Sized>(rng: &mut R) -> Self;
}

/// A collection type that can be filled with random items.
pub trait RandomCollection: Sized {
    /// Element type.
    type Item: Randomizable;

    /// Build a collection holding exactly `len` independently drawn items.
    fn random_collection<R: Rng + ?Sized>(len: usize, rng: &mut R) -> Self;
}

/// Generate `len` random values and shuffle them.
///
/// The shuffle keeps generation order from leaking into the input, so no
/// accidental monotonic pattern reaches the algorithm under test.
pub fn random_sequence<T: Randomizable, R: Rng + ?Sized>(len: usize, rng: &mut R) -> Vec<T> {
    let mut items: Vec<T> = (0..len).map(|_| T::random(rng)).collect();
    items.shuffle(rng);
    items
}
