//! # CLI Command Implementations
//!
//! This module contains the implementation for each subcommand of the `devault`
//! command-line tool. Each subcommand is defined in its own file to keep the
//! logic separated and maintainable.
//!
//! ## Structure
//!
//! Each command module typically contains:
//! - An `Args` struct that defines the command-specific arguments and options,
//!   derived using `clap`.
//! - An `execute` function that takes the parsed `Args` and the open
//!   [`Session`] and performs the command's logic.
//!
//! Commands over several paths keep going after a failed item, log it, and
//! return an error at the end so the process exits non-zero.

pub mod clone;
pub mod completions;
pub mod find;
pub mod group;
pub mod init;
pub mod ls;
pub mod new;
pub mod rm;
pub mod update;

use anyhow::Result;
use dialoguer::{theme::ColorfulTheme, Confirm};

use devault::error::Error;
use devault::output::OutputConfig;
use devault::repository::RepositoryManager;
use devault::suggestions;
use devault::vault::Vault;

/// Everything a command needs once the vault is known to exist.
pub struct Session {
    pub manager: RepositoryManager,
    pub output: OutputConfig,
}

impl Session {
    /// Open an existing vault. Fails before any side effect if it is missing.
    pub fn open(vault: Vault, output: OutputConfig) -> Result<Self> {
        vault
            .require_initialized()
            .map_err(|_| suggestions::vault_not_found(vault.root()))?;
        Ok(Self {
            manager: RepositoryManager::new(vault),
            output,
        })
    }
}

/// Ask a yes/no question on the terminal.
pub fn confirm(prompt: &str, default: bool) -> Result<bool> {
    let answer = Confirm::with_theme(&ColorfulTheme::default())
        .with_prompt(prompt)
        .default(default)
        .interact()?;
    Ok(answer)
}

/// Log a failed batch item.
pub fn report_failure(error: &Error) {
    log::error!("{}", error);
}

/// Turn a batch tally into the command result.
pub fn finish(failed: usize, total: usize, what: &str) -> Result<()> {
    if failed == 0 {
        Ok(())
    } else {
        Err(suggestions::batch_failed(failed, total, what))
    }
}
