//! Random input for one trial.

use rand_xoshiro::Xoshiro256PlusPlus;

use crate::adaptive::SizeState;
use crate::random::{RandomCollection, Randomizable};

/// RNG driving input generation for a run.
pub type InputRng = Xoshiro256PlusPlus;

/// Source of random input bound to one target size.
///
/// The algorithm under test chooses what it needs: a single value through
/// [`input`](Self::input) or a collection of [`size`](Self::size) elements
/// through [`collection`](Self::collection).
#[derive(Debug)]
pub struct InputProvider<'a> {
    size: usize,
    rng: &'a mut InputRng,
}

impl<'a> InputProvider<'a> {
    /// Ask the planner for the next size and bind a provider to it.
    ///
    /// Returns `None` once the planner is exhausted; this is the normal end of
    /// the sampling loop.
    pub fn new(state: &mut SizeState, rng: &'a mut InputRng) -> Option<Self> {
        let size = state.next_size()?;
        Some(Self { size, rng })
    }

    /// Bind a provider to a fixed size, bypassing the planner.
    ///
    /// # Panics
    ///
    /// Panics if `size` is 0.
    pub fn with_size(size: usize, rng: &'a mut InputRng) -> Self {
        assert!(size > 0, "size must be > 0");
        Self { size, rng }
    }

    /// Target input size of this trial.
    pub fn size(&self) -> usize {
        self.size
    }

    /// One random value.
    pub fn input<T: Randomizable>(&mut self) -> T {
        T::random(&mut *self.rng)
    }

    /// A random collection of exactly [`size`](Self::size) elements.
    pub fn collection<C: RandomCollection>(&mut self) -> C {
        C::random_collection(self.size, &mut *self.rng)
    }

    /// A random `Vec` of exactly [`size`](Self::size) elements.
    pub fn sequence<T: Randomizable>(&mut self) -> Vec<T> {
        self.collection()
    }
}
