//! Parsing of single roll statements such as `2*3d6+1`.
//!
//! A statement is, with all whitespace removed:
//!
//! ```text
//! [repeat "*"] [dice] "d" size [("+" | "-") bonus]
//! ```
//!
//! Bare leading digits are always the dice count; the repeat count needs the
//! trailing `*`. Numbers may use the decimal digits of any script, mixed
//! freely, and may carry leading zeros.

use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

use regex::Regex;

use crate::dice::DicePool;
use crate::error::{ParseResult, RollError};

static STATEMENT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(\d+\*)?(\d+)?d(\d+)([+-]\d+)?$").expect("statement pattern compiles")
});

static DECIMAL_DIGIT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d$").expect("digit pattern compiles"));

/// A validated roll statement.
///
/// Only obtainable through [`parse`], so the repeat count and dice count are
/// always positive and the die has at least two faces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RollSpec {
    repeat_count: u64,
    pool: DicePool,
    bonus: i64,
}

impl RollSpec {
    /// How many independent rolls to perform.
    pub fn repeat_count(&self) -> u64 {
        self.repeat_count
    }

    /// How many dice make up each roll.
    pub fn dice_count(&self) -> u64 {
        self.pool.count()
    }

    /// Number of faces on each die.
    pub fn die_size(&self) -> u64 {
        self.pool.sides()
    }

    /// Bonus added to every roll, possibly negative.
    pub fn bonus(&self) -> i64 {
        self.bonus
    }

    /// The dice rolled on each repetition.
    pub fn pool(&self) -> DicePool {
        self.pool
    }
}

impl FromStr for RollSpec {
    type Err = RollError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse(s)
    }
}

impl fmt::Display for RollSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.repeat_count != 1 {
            write!(f, "{}*", self.repeat_count)?;
        }
        write!(f, "{}d{}", self.pool.count(), self.pool.sides())?;
        if self.bonus != 0 {
            write!(f, "{:+}", self.bonus)?;
        }
        Ok(())
    }
}

/// Parse one whitespace-free roll statement.
///
/// # Errors
///
/// [`RollError::Malformed`] if the statement does not have the shape of a
/// roll, [`RollError::Invalid`] if a count is zero, the die has fewer than two
/// faces, a number does not fit the supported width, or the dice of one roll
/// could not be held in memory (more than [`MAX_DICE`](crate::dice::MAX_DICE)).
pub fn parse(statement: &str) -> ParseResult<RollSpec> {
    let caps = STATEMENT
        .captures(statement)
        .ok_or(RollError::Malformed)?;

    let repeat_count = match caps.get(1) {
        Some(m) => number(m.as_str().trim_end_matches('*'))?,
        None => 1,
    };
    let dice_count = match caps.get(2) {
        Some(m) => number(m.as_str())?,
        None => 1,
    };
    let die_size: u64 = number(&caps[3])?;

    if repeat_count == 0 {
        return Err(RollError::Invalid);
    }
    let pool = DicePool::new(dice_count, die_size).ok_or(RollError::Invalid)?;

    let bonus = match caps.get(4) {
        Some(m) => number(m.as_str())?,
        None => 0,
    };

    Ok(RollSpec {
        repeat_count,
        pool,
        bonus,
    })
}

/// Digits already matched the pattern, so the only possible failure is
/// overflow.
fn number<T: FromStr>(digits: &str) -> ParseResult<T> {
    let ascii: String = digits.chars().map(ascii_digit).collect();
    ascii.parse().map_err(|_| RollError::Invalid)
}

/// Map a decimal digit of any script to its ASCII form. Other characters are
/// returned unchanged.
///
/// Every script's digits are encoded as one contiguous run from zero to
/// nine, and runs that touch each other are complete, so the distance to the
/// start of the surrounding run of digits gives the value.
fn ascii_digit(c: char) -> char {
    if c.is_ascii() {
        return c;
    }

    let mut zero = c;
    let mut value = 0u8;
    while let Some(prev) = char::from_u32(u32::from(zero) - 1).filter(|&p| is_decimal_digit(p)) {
        zero = prev;
        value = (value + 1) % 10;
    }
    char::from(b'0' + value)
}

fn is_decimal_digit(c: char) -> bool {
    DECIMAL_DIGIT.is_match(c.encode_utf8(&mut [0; 4]))
}
