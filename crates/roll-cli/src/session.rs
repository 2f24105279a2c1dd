//! The read/evaluate/print loop.

use std::io::{BufRead, Write};

use colored::Colorize;

use roll_core::{DieSource, Output, RandomSource, execute};

use crate::error::CliError;

/// Prompt shown before each line on an interactive terminal.
pub const PROMPT: &str = "roll> ";

/// Configuration for a roll session.
#[derive(Debug, Clone, Default)]
pub struct SessionConfig {
    /// RNG seed for a reproducible session; `None` seeds from the OS.
    pub seed: Option<u64>,
    /// Whether to show [`PROMPT`] before reading each line.
    pub prompt: bool,
}

impl SessionConfig {
    /// Set the RNG seed.
    pub fn with_seed(mut self, seed: Option<u64>) -> Self {
        self.seed = seed;
        self
    }

    /// Enable or disable the prompt.
    pub fn with_prompt(mut self, prompt: bool) -> Self {
        self.prompt = prompt;
        self
    }

    /// Create the die source for this session. Called once per process.
    pub fn source(&self) -> RandomSource {
        match self.seed {
            Some(seed) => RandomSource::seeded(seed),
            None => RandomSource::from_entropy(),
        }
    }
}

/// Why a session ended without error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Ending {
    /// The input ran out.
    EndOfInput,
    /// A statement asked to exit or quit.
    ExitRequested,
    /// The user pressed Ctrl-C.
    Interrupted,
}

/// Evaluate one command and print its lines.
///
/// Stops at the first [`Output::Exit`] and reports it; nothing after it is
/// evaluated or printed.
pub fn run_command<S, W>(
    command: &str,
    source: &mut S,
    out: &mut W,
) -> Result<Option<Ending>, CliError>
where
    S: DieSource,
    W: Write,
{
    for output in execute(command, &mut *source) {
        match output {
            Output::Exit => return Ok(Some(Ending::ExitRequested)),
            Output::Roll(result) => writeln!(out, "{result}")?,
            error @ Output::Error { .. } => writeln!(out, "{}", error.to_string().yellow())?,
        }
        out.flush()?;
    }
    Ok(None)
}

/// Read commands line by line until the input ends or a statement exits.
pub fn run<S, R, W>(
    config: &SessionConfig,
    source: &mut S,
    mut input: R,
    mut out: W,
) -> Result<Ending, CliError>
where
    S: DieSource,
    R: BufRead,
    W: Write,
{
    let mut line = String::new();

    loop {
        if config.prompt {
            write!(out, "{}", PROMPT.bold())?;
            out.flush()?;
        }

        line.clear();
        if input.read_line(&mut line)? == 0 {
            if config.prompt {
                writeln!(out)?;
            }
            return Ok(Ending::EndOfInput);
        }
        let command = strip_newline(&line);
        tracing::trace!(command, "read command");

        if let Some(ending) = run_command(command, source, &mut out)? {
            return Ok(ending);
        }
    }
}

fn strip_newline(line: &str) -> &str {
    let line = line.strip_suffix('\n').unwrap_or(line);
    line.strip_suffix('\r').unwrap_or(line)
}
