//! Roll results and their display form.

use std::fmt;

/// The outcome of one repetition of a roll statement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RollResult {
    /// Individual die values, in the order they were drawn.
    pub dice: Vec<u64>,
    /// The bonus added to the sum of the dice.
    pub bonus: i64,
}

impl RollResult {
    /// Sum of all die values, without the bonus.
    pub fn dice_total(&self) -> i128 {
        self.dice.iter().map(|&v| i128::from(v)).sum()
    }

    /// Sum of all die values plus the bonus.
    pub fn total(&self) -> i128 {
        self.dice_total() + i128::from(self.bonus)
    }

    /// Number of dice in the result.
    pub fn count(&self) -> usize {
        self.dice.len()
    }
}

impl fmt::Display for RollResult {
    /// Renders `[3, 5] + 2 = 10`, or `[3, 5] - 2 = 6` for a negative bonus.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.bonus < 0 { '-' } else { '+' };
        write!(
            f,
            "{:?} {sign} {} = {}",
            self.dice,
            self.bonus.unsigned_abs(),
            self.total()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_result(dice: &[u64], bonus: i64) -> RollResult {
        RollResult {
            dice: dice.to_vec(),
            bonus,
        }
    }

    #[test]
    fn total() {
        let r = make_result(&[15, 8], 0);
        assert_eq!(r.dice_total(), 23);
        assert_eq!(r.total(), 23);
        assert_eq!(r.count(), 2);
    }

    #[test]
    fn total_with_bonus() {
        assert_eq!(make_result(&[4, 4], 3).total(), 11);
        assert_eq!(make_result(&[1], -5).total(), -4);
    }

    #[test]
    fn display_positive_bonus() {
        assert_eq!(make_result(&[3, 5, 1], 2).to_string(), "[3, 5, 1] + 2 = 11");
    }

    #[test]
    fn display_zero_bonus() {
        assert_eq!(make_result(&[4], 0).to_string(), "[4] + 0 = 4");
    }

    #[test]
    fn display_negative_bonus() {
        assert_eq!(make_result(&[4], -1).to_string(), "[4] - 1 = 3");
    }

    #[test]
    fn display_extreme_bonus() {
        let r = make_result(&[1], i64::MIN);
        assert_eq!(
            r.to_string(),
            format!("[1] - 9223372036854775808 = {}", i128::from(i64::MIN) + 1)
        );
    }

    #[test]
    fn total_does_not_overflow() {
        let r = make_result(&[u64::MAX, u64::MAX], i64::MAX);
        assert_eq!(
            r.total(),
            2 * i128::from(u64::MAX) + i128::from(i64::MAX)
        );
    }
}
