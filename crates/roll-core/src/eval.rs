//! Evaluation of whole commands.
//!
//! A command is one input line holding any number of `;`-separated
//! statements. [`execute`] turns it into a lazy sequence of [`Output`]s:
//! dice for a repetition are only drawn when that output is pulled, so a
//! caller can stop early without rolling the rest.
//!
//! An `exit` or `quit` statement yields [`Output::Exit`] and ends the
//! sequence. The evaluator itself never terminates the process; whoever owns
//! the process must do so when it sees `Exit`, without printing anything
//! further.

use std::fmt;
use std::iter::FusedIterator;
use std::str::Split;

use crate::dice::{DicePool, DieSource, RollResult};
use crate::error::RollError;
use crate::statement::parse;

/// Statement separator inside a command.
pub const SEPARATOR: char = ';';

/// One item produced while executing a command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Output<'a> {
    /// One repetition of a successfully parsed statement.
    Roll(RollResult),
    /// A statement that failed to parse.
    Error {
        /// Why the statement was rejected.
        error: RollError,
        /// The statement as written, whitespace intact.
        statement: &'a str,
    },
    /// The command asked to end the session.
    Exit,
}

impl Output<'_> {
    /// Returns true for [`Output::Exit`].
    pub fn is_exit(&self) -> bool {
        matches!(self, Self::Exit)
    }
}

impl fmt::Display for Output<'_> {
    /// Renders the output line. [`Output::Exit`] renders as nothing.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Roll(result) => write!(f, "{result}"),
            Self::Error { error, statement } => write!(f, "{error}: {statement}"),
            Self::Exit => Ok(()),
        }
    }
}

/// Execute a command, drawing dice from `source`.
///
/// Pass `&mut source` to keep using the same source across commands.
pub fn execute<S: DieSource>(command: &str, source: S) -> Execution<'_, S> {
    Execution {
        statements: command.split(SEPARATOR),
        pending: None,
        source,
        finished: false,
    }
}

/// Lazy iterator over the outputs of one command. See [`execute`].
#[derive(Debug)]
pub struct Execution<'a, S> {
    statements: Split<'a, char>,
    pending: Option<Pending>,
    source: S,
    finished: bool,
}

/// Repetitions still owed by the statement being evaluated.
#[derive(Debug)]
struct Pending {
    pool: DicePool,
    bonus: i64,
    remaining: u64,
}

impl<'a, S: DieSource> Iterator for Execution<'a, S> {
    type Item = Output<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }

        loop {
            if let Some(pending) = &mut self.pending {
                if pending.remaining > 0 {
                    pending.remaining -= 1;
                    let result = pending.pool.roll(pending.bonus, &mut self.source);
                    return Some(Output::Roll(result));
                }
                self.pending = None;
            }

            let Some(part) = self.statements.next() else {
                self.finished = true;
                return None;
            };
            let statement: String = part.chars().filter(|c| !c.is_whitespace()).collect();

            match statement.as_str() {
                "" => continue,
                "exit" | "quit" => {
                    tracing::debug!(%statement, "termination requested");
                    self.finished = true;
                    return Some(Output::Exit);
                }
                _ => {}
            }

            match parse(&statement) {
                Ok(spec) => {
                    tracing::debug!(%statement, %spec, "parsed statement");
                    self.pending = Some(Pending {
                        pool: spec.pool(),
                        bonus: spec.bonus(),
                        remaining: spec.repeat_count(),
                    });
                }
                Err(error) => {
                    tracing::debug!(statement = part, %error, "rejected statement");
                    return Some(Output::Error {
                        error,
                        statement: part,
                    });
                }
            }
        }
    }
}

impl<S: DieSource> FusedIterator for Execution<'_, S> {}
