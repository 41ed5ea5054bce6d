//! cli::commands
//!
//! Command dispatch and handlers.
//!
//! Each handler receives the shared [`Context`], does its work through
//! [`crate::core`], and formats output through [`crate::ui::output`].

mod completion;
mod run;

// Re-export command functions for testing and direct invocation
pub use completion::{completion, completion_to};
pub use run::{render, run};

use crate::cli::args::Command;
use crate::cli::Context;
use crate::ui::output;
use anyhow::Result;

/// Dispatch a command to its handler.
pub fn dispatch(command: Command, ctx: &Context) -> Result<()> {
    output::debug(format!("dispatch: {:?}", command), ctx.verbosity);
    match command {
        Command::Run => run::run(ctx),
        Command::Completion { shell } => completion::completion(shell),
    }
}
