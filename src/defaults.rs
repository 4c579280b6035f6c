//! Default values for devault configuration.
//!
//! This module provides centralized default values used across commands,
//! ensuring consistency and avoiding duplication.

use std::path::PathBuf;

/// Environment variable that selects the vault root.
pub const VAULT_ENV_VAR: &str = "DEVAULT_DIR";

/// Name of the vault directory inside the home directory.
pub const DEFAULT_VAULT_DIRNAME: &str = "Dev";

/// Starter created by `devault new` when none is given.
pub const DEFAULT_STARTER: &str = "README.md";

/// Returns the default vault root directory.
///
/// This is `~/Dev`, falling back to `Dev` in the current directory if the
/// home directory cannot be determined.
///
/// This can be overridden by the `--vault` CLI flag or the `DEVAULT_DIR`
/// environment variable.
pub fn default_vault_root() -> PathBuf {
    dirs::home_dir()
        .map(|home| home.join(DEFAULT_VAULT_DIRNAME))
        .unwrap_or_else(|| PathBuf::from(DEFAULT_VAULT_DIRNAME))
}
