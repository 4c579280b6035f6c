//! # Init Command Implementation
//!
//! This module implements the `init` subcommand, which creates the vault root
//! directory. Running it against an existing vault is harmless.

use anyhow::Result;

use devault::output::OutputConfig;
use devault::vault::Vault;

/// Execute the `init` command.
pub fn execute(vault: &Vault, output: &OutputConfig) -> Result<()> {
    vault.init()?;
    log::debug!("Created {}", vault.root().display());
    println!("{} {} has been initialized.", output.ok(), vault.root().display());
    Ok(())
}
