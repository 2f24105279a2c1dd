//! Error types for the command line frontend.

use std::io;

use thiserror::Error;

/// Errors that end a session abnormally.
#[derive(Debug, Error)]
pub enum CliError {
    /// Reading input or writing results failed.
    #[error("i/o error: {0}")]
    Io(#[from] io::Error),

    /// The async runtime for signal handling could not be started.
    #[error("could not start runtime: {0}")]
    Runtime(io::Error),

    /// The session thread stopped without reporting a result.
    #[error("session aborted: {0}")]
    Aborted(String),
}

impl CliError {
    /// True when stdout was closed by the reader, e.g. `roll | head -1`.
    pub fn is_broken_pipe(&self) -> bool {
        matches!(self, Self::Io(e) if e.kind() == io::ErrorKind::BrokenPipe)
    }
}
