//! Dice pool construction and rolling.

use super::DieSource;
use super::roll::RollResult;

/// Largest pool whose values can be held in memory at all.
pub const MAX_DICE: u64 = isize::MAX as u64 / size_of::<u64>() as u64;

/// Values reserved up front; larger pools grow as they are drawn.
const PREALLOCATE: u64 = 4096;

/// A number of identical dice rolled together.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DicePool {
    count: u64,
    sides: u64,
}

impl DicePool {
    /// Create a pool of `count` dice with `sides` faces each.
    ///
    /// Returns `None` for an empty pool, a pool larger than [`MAX_DICE`], or
    /// a die with fewer than two faces.
    pub fn new(count: u64, sides: u64) -> Option<Self> {
        ((1..=MAX_DICE).contains(&count) && sides > 1).then_some(Self { count, sides })
    }

    /// Returns how many dice are in the pool.
    pub fn count(&self) -> u64 {
        self.count
    }

    /// Returns the number of faces on each die.
    pub fn sides(&self) -> u64 {
        self.sides
    }

    /// Roll every die in the pool once and add `bonus` to the result.
    pub fn roll(&self, bonus: i64, source: &mut impl DieSource) -> RollResult {
        let mut dice = Vec::with_capacity(self.count.min(PREALLOCATE) as usize);
        for _ in 0..self.count {
            dice.push(source.roll_die(self.sides));
        }
        let result = RollResult { dice, bonus };
        tracing::trace!(sides = self.sides, %result, "rolled pool");
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dice::RandomSource;
    use crate::dice::testing::{Counting, Fixed};

    #[test]
    fn rejects_empty_pool_and_tiny_dice() {
        assert_eq!(DicePool::new(0, 6), None);
        assert_eq!(DicePool::new(1, 1), None);
        assert_eq!(DicePool::new(1, 0), None);
        assert!(DicePool::new(1, 2).is_some());
    }

    #[test]
    fn rejects_pools_that_cannot_fit_in_memory() {
        assert_eq!(DicePool::new(u64::MAX, 6), None);
        assert_eq!(DicePool::new(MAX_DICE + 1, 6), None);
        assert_eq!(DicePool::new(MAX_DICE, 6).map(|p| p.count()), Some(MAX_DICE));
    }

    #[test]
    fn large_pool_grows_past_preallocation() {
        let pool = DicePool::new(PREALLOCATE + 10, 6).unwrap();
        let result = pool.roll(0, &mut Fixed(6));
        assert_eq!(result.count() as u64, PREALLOCATE + 10);
        assert!(result.dice.iter().all(|&v| v == 6));
    }

    #[test]
    fn roll_produces_valid_values() {
        let mut source = RandomSource::seeded(42);
        let pool = DicePool::new(10, 6).unwrap();
        let result = pool.roll(0, &mut source);
        assert_eq!(result.count(), 10);
        for value in &result.dice {
            assert!((1..=6).contains(value));
        }
    }

    #[test]
    fn roll_keeps_draw_order() {
        let pool = DicePool::new(3, 6).unwrap();
        let result = pool.roll(0, &mut Counting::default());
        assert_eq!(result.dice, vec![1, 2, 3]);
    }

    #[test]
    fn roll_applies_bonus() {
        let pool = DicePool::new(2, 6).unwrap();
        let result = pool.roll(3, &mut Fixed(4));
        assert_eq!(result.total(), 11);
        assert_eq!(result.bonus, 3);
    }

    #[test]
    fn roll_deterministic_with_seed() {
        let pool = DicePool::new(3, 20).unwrap();
        let r1 = pool.roll(0, &mut RandomSource::seeded(99));
        let r2 = pool.roll(0, &mut RandomSource::seeded(99));
        assert_eq!(r1, r2);
    }
}
