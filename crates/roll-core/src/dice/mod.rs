//! Dice sources, pools, and rolling.
//!
//! All randomness flows through [`DieSource`]. A process creates one
//! [`RandomSource`] at startup and lends it to every evaluation; it is never
//! reseeded afterwards.

pub mod pool;
pub mod roll;

pub use pool::{DicePool, MAX_DICE};
pub use roll::RollResult;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Something that can roll a single die.
pub trait DieSource {
    /// Roll one die with `sides` faces, returning a value in `1..=sides`.
    ///
    /// Callers guarantee `sides >= 1`.
    fn roll_die(&mut self, sides: u64) -> u64;
}

impl<S: DieSource + ?Sized> DieSource for &mut S {
    fn roll_die(&mut self, sides: u64) -> u64 {
        (**self).roll_die(sides)
    }
}

/// The pseudo-random die source shared by a whole session.
#[derive(Debug, Clone)]
pub struct RandomSource {
    rng: StdRng,
}

impl RandomSource {
    /// Seed a new source from operating system entropy.
    pub fn from_entropy() -> Self {
        Self {
            rng: StdRng::from_os_rng(),
        }
    }

    /// Seed a new source deterministically, for reproducible sessions.
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl DieSource for RandomSource {
    fn roll_die(&mut self, sides: u64) -> u64 {
        self.rng.random_range(1..=sides)
    }
}

/// Deterministic sources for tests.
#[cfg(test)]
pub(crate) mod testing {
    use super::DieSource;

    /// Always rolls the same face, capped at the die size.
    #[derive(Debug, Clone, Copy)]
    pub(crate) struct Fixed(pub u64);

    impl DieSource for Fixed {
        fn roll_die(&mut self, sides: u64) -> u64 {
            self.0.min(sides)
        }
    }

    /// Counts up from 1, wrapping at the die size.
    #[derive(Debug, Clone, Copy, Default)]
    pub(crate) struct Counting(pub u64);

    impl DieSource for Counting {
        fn roll_die(&mut self, sides: u64) -> u64 {
            self.0 += 1;
            (self.0 - 1) % sides + 1
        }
    }
}
