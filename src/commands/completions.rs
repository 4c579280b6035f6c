//! # Completions Command Implementation
//!
//! This module implements the `completions` subcommand, which generates shell
//! completion scripts using `clap_complete`. It needs no vault.
//!
//! ## Example
//!
//! ```bash
//! devault completions bash > ~/.local/share/bash-completion/completions/devault
//! devault completions zsh > ~/.zfunc/_devault
//! ```

use anyhow::Result;
use clap::{Args, CommandFactory, ValueEnum};
use clap_complete::{generate, Shell};
use std::io;

use crate::cli::Cli;

/// Shell types for completion generation
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum CompletionShell {
    /// Bash; source from `.bashrc` or drop into bash-completion's directory
    Bash,
    /// Zsh; save as `_devault` somewhere on `fpath`
    Zsh,
    /// Fish; save to `~/.config/fish/completions/devault.fish`
    Fish,
    /// PowerShell; dot-source from the profile
    #[value(name = "powershell")]
    PowerShell,
    /// Elvish; load from `rc.elv`
    Elvish,
}

impl From<CompletionShell> for Shell {
    fn from(shell: CompletionShell) -> Self {
        match shell {
            CompletionShell::Bash => Shell::Bash,
            CompletionShell::Zsh => Shell::Zsh,
            CompletionShell::Fish => Shell::Fish,
            CompletionShell::PowerShell => Shell::PowerShell,
            CompletionShell::Elvish => Shell::Elvish,
        }
    }
}

/// Generate shell completion scripts
#[derive(Args, Debug)]
pub struct CompletionsArgs {
    /// The shell to generate completions for
    #[arg(value_enum)]
    pub shell: CompletionShell,
}

/// Write the completion script for `args.shell` to stdout.
pub fn execute(args: CompletionsArgs) -> Result<()> {
    let mut cmd = Cli::command();
    generate(Shell::from(args.shell), &mut cmd, "devault", &mut io::stdout());
    Ok(())
}
