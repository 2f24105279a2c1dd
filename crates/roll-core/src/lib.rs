//! Dice notation engine for the `roll` tool.
//!
//! Parses roll statements like `2*3d6+1`, rolls them against a shared
//! random source, and renders one result line per roll. Commands may hold
//! several statements separated by `;`.
//!
//! ```
//! use roll_core::{RandomSource, execute};
//!
//! let mut source = RandomSource::seeded(7);
//! for output in execute("2d6+1; d20", &mut source) {
//!     println!("{output}");
//! }
//! ```

pub mod dice;
pub mod error;
pub mod eval;
pub mod statement;

pub use dice::{DicePool, DieSource, RandomSource, RollResult};
pub use error::{ParseResult, RollError};
pub use eval::{Execution, Output, execute};
pub use statement::{RollSpec, parse};
