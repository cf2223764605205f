//! `Randomizable` impls for primitives, tuples and arrays.

use rand::distr::Alphanumeric;
use rand::Rng;

use super::Randomizable;
use crate::constants::{RANDOM_BOUND, RANDOM_BOUND_8BIT};

macro_rules! impl_signed {
    ($bound:expr => $($t:ty),*) => {
        $(
            impl Randomizable for $t {
                fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
                    let bound = $bound as $t;
                    rng.random_range(-bound..bound)
                }
            }
        )*
    };
}

macro_rules! impl_unsigned {
    ($bound:expr => $($t:ty),*) => {
        $(
            impl Randomizable for $t {
                fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
                    rng.random_range(0..$bound as $t)
                }
            }
        )*
    };
}

impl_signed!(RANDOM_BOUND_8BIT => i8);
impl_signed!(RANDOM_BOUND => i16, i32, i64, i128);
impl_unsigned!(RANDOM_BOUND_8BIT => u8);
impl_unsigned!(RANDOM_BOUND => u16, u32, u64, u128);

// rand has no uniform sampler for the pointer-sized integers; draw through
// the 64-bit type, whose bounded range always fits.
impl Randomizable for isize {
    fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        i64::random(rng) as isize
    }
}

impl Randomizable for usize {
    fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        u64::random(rng) as usize
    }
}

impl Randomizable for f32 {
    fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let bound = RANDOM_BOUND as f32;
        rng.random_range(-bound..bound)
    }
}

impl Randomizable for f64 {
    fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let bound = RANDOM_BOUND as f64;
        rng.random_range(-bound..bound)
    }
}

impl Randomizable for bool {
    fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        rng.random()
    }
}

impl Randomizable for char {
    fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        char::from(rng.sample(Alphanumeric))
    }
}

impl<T: Randomizable, const N: usize> Randomizable for [T; N] {
    fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        std::array::from_fn(|_| T::random(rng))
    }
}

macro_rules! impl_tuple {
    ($($name:ident),+) => {
        impl<$($name: Randomizable),+> Randomizable for ($($name,)+) {
            fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
                ($($name::random(rng),)+)
            }
        }
    };
}

impl_tuple!(A);
impl_tuple!(A, B);
impl_tuple!(A, B, C);
impl_tuple!(A, B, C, D);

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rand::SeedableRng;
    use rand_xoshiro::Xoshiro256PlusPlus;

    proptest! {
        #[test]
        fn signed_values_stay_in_bounds(seed in any::<u64>()) {
            let mut rng = Xoshiro256PlusPlus::seed_from_u64(seed);
            for _ in 0..64 {
                let v = i64::random(&mut rng);
                prop_assert!((-1000..1000).contains(&v));
                let v = i32::random(&mut rng);
                prop_assert!((-1000..1000).contains(&v));
                let v = i8::random(&mut rng);
                prop_assert!((-100..100).contains(&v));
                let v = isize::random(&mut rng);
                prop_assert!((-1000..1000).contains(&v));
            }
        }

        #[test]
        fn unsigned_values_stay_in_bounds(seed in any::<u64>()) {
            let mut rng = Xoshiro256PlusPlus::seed_from_u64(seed);
            for _ in 0..64 {
                prop_assert!(u64::random(&mut rng) < 1000);
                prop_assert!(usize::random(&mut rng) < 1000);
                prop_assert!(u8::random(&mut rng) < 100);
            }
        }

        #[test]
        fn float_values_stay_in_bounds(seed in any::<u64>()) {
            let mut rng = Xoshiro256PlusPlus::seed_from_u64(seed);
            for _ in 0..64 {
                let v = f64::random(&mut rng);
                prop_assert!((-1000.0..1000.0).contains(&v));
            }
        }
    }

    #[test]
    fn test_char_is_alphanumeric() {
        let mut rng = Xoshiro256PlusPlus::seed_from_u64(3);
        for _ in 0..256 {
            assert!(char::random(&mut rng).is_ascii_alphanumeric());
        }
    }

    #[test]
    fn test_composite_values() {
        let mut rng = Xoshiro256PlusPlus::seed_from_u64(11);
        let (key, value): (u32, bool) = Randomizable::random(&mut rng);
        assert!(key < 1000);
        let _ = value;

        let block: [i16; 8] = Randomizable::random(&mut rng);
        assert!(block.iter().all(|v| (-1000..1000).contains(v)));
    }
}
