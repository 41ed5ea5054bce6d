//! completion command - Generate shell completion scripts

use crate::cli::args::{Cli, Shell};
use anyhow::Result;
use clap::CommandFactory;
use clap_complete::{generate, shells};

/// Generate shell completion scripts.
pub fn completion(shell: Shell) -> Result<()> {
    completion_to(shell, &mut std::io::stdout())
}

/// Generate shell completion scripts into `out`.
pub fn completion_to(shell: Shell, out: &mut dyn std::io::Write) -> Result<()> {
    let mut cmd = Cli::command();
    let name = cmd.get_name().to_string();

    match shell {
        Shell::Bash => generate(shells::Bash, &mut cmd, &name, out),
        Shell::Zsh => generate(shells::Zsh, &mut cmd, &name, out),
        Shell::Fish => generate(shells::Fish, &mut cmd, &name, out),
        Shell::PowerShell => generate(shells::PowerShell, &mut cmd, &name, out),
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bash_completion_names_binary() {
        let mut buf = Vec::new();
        completion_to(Shell::Bash, &mut buf).unwrap();
        let script = String::from_utf8(buf).unwrap();
        assert!(script.contains("evensum"));
    }

    #[test]
    fn every_shell_generates_output() {
        for shell in [Shell::Bash, Shell::Zsh, Shell::Fish, Shell::PowerShell] {
            let mut buf = Vec::new();
            completion_to(shell, &mut buf).unwrap();
            assert!(!buf.is_empty(), "no completions for {:?}", shell);
        }
    }
}
