// src/random.rs
//! Uniform random values from a per-thread engine.
//!
//! Each thread owns its own [`StdRng`], seeded from the operating system the
//! first time the thread asks for a value. Engines are never shared between
//! threads.

use std::cell::RefCell;
use std::fmt::Display;

use rand::distributions::uniform::SampleUniform;
use rand::rngs::{OsRng, StdRng};
use rand::{Rng, RngCore, SeedableRng};

use crate::error::{Error, Result};

thread_local! {
    static ENGINE: RefCell<StdRng> = RefCell::new(StdRng::from_entropy());
}

mod sealed {
    pub trait Sealed {}
}

/// Scalar types that can be drawn uniformly.
pub trait RandomScalar: sealed::Sealed + SampleUniform + PartialOrd + Display + Copy {
    /// Whether `[low, high]` can be sampled.
    fn valid_range(low: Self, high: Self) -> bool;

    /// Draw from the default interval: `[0, MAX]` for integers, `[0, 1)` for floats.
    fn sample_default<R: Rng + ?Sized>(rng: &mut R) -> Self;
}

macro_rules! impl_random_int {
    ($($t:ty)*) => {
        $(
            impl sealed::Sealed for $t {}

            impl RandomScalar for $t {
                #[inline]
                fn valid_range(low: Self, high: Self) -> bool {
                    low <= high
                }

                #[inline]
                fn sample_default<R: Rng + ?Sized>(rng: &mut R) -> Self {
                    rng.gen_range(0..=<$t>::MAX)
                }
            }
        )*
    };
}

macro_rules! impl_random_float {
    ($($t:ty)*) => {
        $(
            impl sealed::Sealed for $t {}

            impl RandomScalar for $t {
                #[inline]
                fn valid_range(low: Self, high: Self) -> bool {
                    // Also rejects NaN and spans the sampler cannot scale.
                    low <= high
                        && low.is_finite()
                        && high.is_finite()
                        && (high - low) < <$t>::MAX / 2.0
                }

                #[inline]
                fn sample_default<R: Rng + ?Sized>(rng: &mut R) -> Self {
                    rng.gen()
                }
            }
        )*
    };
}

impl_random_int! { u8 u16 u32 u64 u128 usize i8 i16 i32 i64 i128 isize }
impl_random_float! { f32 f64 }

/// A value drawn uniformly from `[low, high]`.
///
/// ```
/// use endian_rs::random::uniform_random_value;
///
/// let roll = uniform_random_value(1u8, 6).unwrap();
/// assert!((1..=6).contains(&roll));
/// assert!(uniform_random_value(6u8, 1).is_err());
/// ```
pub fn uniform_random_value<T: RandomScalar>(low: T, high: T) -> Result<T> {
    if !T::valid_range(low, high) {
        return Err(Error::InvalidRange {
            low: low.to_string(),
            high: high.to_string(),
        });
    }
    Ok(ENGINE.with(|engine| engine.borrow_mut().gen_range(low..=high)))
}

/// A value from the type's default interval (see [`RandomScalar::sample_default`]).
pub fn random_value<T: RandomScalar>() -> T {
    ENGINE.with(|engine| T::sample_default(&mut *engine.borrow_mut()))
}

/// A fair coin flip.
pub fn random_bool() -> bool {
    ENGINE.with(|engine| engine.borrow_mut().gen_bool(0.5))
}

/// Reseed this thread's engine from the operating system and return the seed.
pub fn reseed() -> u64 {
    let seed = OsRng.next_u64();
    reseed_with(seed);
    seed
}

/// Reseed this thread's engine with a known seed.
pub fn reseed_with(seed: u64) {
    log::trace!("reseeding thread random engine with {:#018x}", seed);
    ENGINE.with(|engine| *engine.borrow_mut() = StdRng::seed_from_u64(seed));
}
