//! cli
//!
//! Command-line interface layer for evensum.
//!
//! # Responsibilities
//!
//! - Parse command-line arguments and global flags
//! - Resolve configuration
//! - Delegate to command handlers
//!
//! # Architecture
//!
//! The CLI layer is thin. It parses arguments via clap, builds a
//! [`Context`], and dispatches to [`commands`]. Pipeline logic lives in
//! [`crate::core`].

pub mod args;
pub mod commands;

pub use args::{Cli, Command, Shell};

use std::path::PathBuf;

use anyhow::{anyhow, Result};
use clap::error::ErrorKind;

use crate::ui::output::Verbosity;

/// Execution context shared by all command handlers.
#[derive(Debug, Clone)]
pub struct Context {
    /// Config file named on the command line
    pub config: Option<PathBuf>,
    /// Output verbosity
    pub verbosity: Verbosity,
}

impl Context {
    /// Create context from parsed CLI flags.
    pub fn from_cli(cli: &Cli) -> Self {
        Self {
            config: cli.config.clone(),
            verbosity: Verbosity::from_flags(cli.quiet, cli.debug),
        }
    }
}

/// Run the CLI application.
///
/// This is the main entry point called from `main.rs`. Usage errors are
/// returned like any other error so they exit with status 1.
pub fn run() -> Result<()> {
    let cli = Cli::try_parse_args().or_else(usage_error)?;
    let ctx = Context::from_cli(&cli);

    // No subcommand means run
    commands::dispatch(cli.command.unwrap_or(Command::Run), &ctx)
}

/// Handle a clap parse failure.
///
/// `--help` and `--version` print and exit 0 through clap. Anything else
/// becomes an error whose message drops clap's own `error: ` prefix.
fn usage_error(err: clap::Error) -> Result<Cli> {
    match err.kind() {
        ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => err.exit(),
        _ => Err(anyhow!(usage_message(&err.to_string()))),
    }
}

fn usage_message(rendered: &str) -> String {
    rendered
        .trim_start_matches("error: ")
        .trim_end()
        .to_string()
}
