//! `RandomCollection` impls for the standard sequence types.

use std::collections::{LinkedList, VecDeque};

use rand::Rng;

use super::{random_sequence, RandomCollection, Randomizable};

impl<T: Randomizable> RandomCollection for Vec<T> {
    type Item = T;

    fn random_collection<R: Rng + ?Sized>(len: usize, rng: &mut R) -> Self {
        random_sequence(len, rng)
    }
}

impl<T: Randomizable> RandomCollection for VecDeque<T> {
    type Item = T;

    fn random_collection<R: Rng + ?Sized>(len: usize, rng: &mut R) -> Self {
        VecDeque::from(random_sequence(len, rng))
    }
}

impl<T: Randomizable> RandomCollection for LinkedList<T> {
    type Item = T;

    fn random_collection<R: Rng + ?Sized>(len: usize, rng: &mut R) -> Self {
        random_sequence(len, rng).into_iter().collect()
    }
}

impl<T: Randomizable> RandomCollection for Box<[T]> {
    type Item = T;

    fn random_collection<R: Rng + ?Sized>(len: usize, rng: &mut R) -> Self {
        random_sequence(len, rng).into_boxed_slice()
    }
}

impl RandomCollection for String {
    type Item = char;

    fn random_collection<R: Rng + ?Sized>(len: usize, rng: &mut R) -> Self {
        random_sequence::<char, R>(len, rng).into_iter().collect()
    }
}
