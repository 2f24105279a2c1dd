//! `roll`: simulates rolling dice like those used in pen and paper games.
//!
//! Reads roll statements such as `2*3d6+1` from stdin (or from the command
//! line) and prints one result line per roll. Behaves as a plain filter when
//! fed from a regular file or a pipe, and shows a prompt otherwise.

mod error;
mod session;

use std::io::{self, IsTerminal, Write};
use std::process;

use clap::Parser;
use tokio::runtime;
use tracing_subscriber::filter::EnvFilter;

use error::CliError;
use session::{Ending, SessionConfig};

#[derive(Parser)]
#[command(
    name = "roll",
    about = "A command line tool which simulates rolling dice",
    version,
    after_help = "Statements look like [N*][COUNT]dSIZE[+BONUS|-BONUS], e.g. 2*3d6+1.\n\
                  Separate several statements with ';'. Type 'exit' or 'quit' to leave."
)]
struct Cli {
    /// Roll these statements once and exit instead of reading stdin
    statements: Vec<String>,

    /// RNG seed for a reproducible session
    #[arg(short, long)]
    seed: Option<u64>,

    /// Never show the prompt, even on a terminal
    #[arg(long)]
    no_prompt: bool,
}

fn main() {
    let cli = Cli::parse();
    init_logging();

    let interactive = !stdin_is_file_or_pipe();
    colored::control::set_override(io::stdout().is_terminal());

    let config = SessionConfig::default()
        .with_seed(cli.seed)
        .with_prompt(interactive && !cli.no_prompt);

    match run(cli.statements, config) {
        Ok(ending) => {
            tracing::info!(?ending, "session ended");
            if ending == Ending::Interrupted && interactive {
                println!();
            }
            process::exit(0);
        }
        Err(e) if e.is_broken_pipe() => process::exit(0),
        Err(e) => {
            eprintln!("error: {e}");
            process::exit(1);
        }
    }
}

/// Regular files and pipes are read without a prompt; terminals and other
/// devices such as `/dev/null` get one.
#[cfg(unix)]
fn stdin_is_file_or_pipe() -> bool {
    use std::fs::File;
    use std::os::fd::AsFd;
    use std::os::unix::fs::FileTypeExt;

    io::stdin()
        .as_fd()
        .try_clone_to_owned()
        .map(File::from)
        .and_then(|stdin| stdin.metadata())
        .map(|meta| meta.file_type().is_file() || meta.file_type().is_fifo())
        .unwrap_or(false)
}

#[cfg(not(unix))]
fn stdin_is_file_or_pipe() -> bool {
    !io::stdin().is_terminal()
}

/// Log to stderr; `RUST_LOG` overrides the default of warnings only.
fn init_logging() {
    let filter = if std::env::var("RUST_LOG").is_ok() {
        EnvFilter::from_default_env()
    } else {
        EnvFilter::new("warn")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

/// Run the session on a blocking thread while watching for Ctrl-C.
///
/// The caller must exit the process afterwards: an interrupted session
/// leaves its thread blocked on stdin.
fn run(statements: Vec<String>, config: SessionConfig) -> Result<Ending, CliError> {
    let runtime = runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .map_err(CliError::Runtime)?;

    let ending = runtime.block_on(async move {
        let task = tokio::task::spawn_blocking(move || -> Result<Ending, CliError> {
            let mut source = config.source();
            tracing::info!(
                seeded = config.seed.is_some(),
                prompt = config.prompt,
                one_shot = !statements.is_empty(),
                "session started"
            );

            // Unlocked: the main thread may still print after an interrupt.
            let mut out = io::stdout();
            if statements.is_empty() {
                session::run(&config, &mut source, io::stdin().lock(), out)
            } else {
                let command = statements.join(" ");
                let ending = session::run_command(&command, &mut source, &mut out)?;
                out.flush()?;
                Ok(ending.unwrap_or(Ending::EndOfInput))
            }
        });

        tokio::select! {
            joined = task => joined.unwrap_or_else(|e| Err(CliError::Aborted(e.to_string()))),
            Ok(()) = tokio::signal::ctrl_c() => Ok(Ending::Interrupted),
        }
    });

    runtime.shutdown_background();
    ending
}
