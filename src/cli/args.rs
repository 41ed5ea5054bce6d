//! cli::args
//!
//! Command-line argument definitions using clap derive.
//!
//! # Global Flags
//!
//! These flags are available on all commands:
//! - `--help` / `-h`: Show help
//! - `--version`: Show version
//! - `--config <path>`: Read settings from a TOML file
//! - `--debug`: Trace each pipeline stage to stderr
//! - `--quiet` / `-q`: Suppress report output

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// evensum - Keep the even numbers, square them, and sum the squares
#[derive(Parser, Debug)]
#[command(name = "evensum")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Read settings from this TOML file (overrides $EVENSUM_CONFIG)
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Trace each pipeline stage to stderr
    #[arg(long, global = true)]
    pub debug: bool,

    /// Suppress report output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Option<Command>,
}

impl Cli {
    /// Parse command-line arguments.
    ///
    /// Help and version requests are returned as errors too; the caller
    /// decides how to exit.
    pub fn try_parse_args() -> Result<Self, clap::Error> {
        Parser::try_parse()
    }
}

/// Available commands.
#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Command {
    /// Run the pipeline and print every stage (default)
    #[command(
        name = "run",
        long_about = "Run the pipeline and print every stage.\n\n\
            Keeps the even numbers of the input, squares them, and sums the squares. \
            The input, the even numbers, the squares, and the sum are printed one per line. \
            This is what runs when no command is given.",
        after_help = "\
EXAMPLES:
    # Built-in input
    evensum

    # Input and labels from a file
    evensum --config evensum.toml run"
    )]
    Run,

    /// Generate shell completion scripts
    #[command(
        name = "completion",
        after_help = "\
EXAMPLES:
    # Bash
    evensum completion bash > ~/.local/share/bash-completion/completions/evensum

    # Zsh
    evensum completion zsh > ~/.zfunc/_evensum"
    )]
    Completion {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// Supported shells for completion generation.
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    #[value(name = "powershell")]
    PowerShell,
}
