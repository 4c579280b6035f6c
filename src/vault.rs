//! The vault root.
//!
//! A [`Vault`] is built once at startup from the CLI flag, the `DEVAULT_DIR`
//! environment variable, or the default, and then handed to everything that
//! needs the root. Nothing below the CLI reads the environment itself.

use std::path::{Path, PathBuf};

use crate::error::{Error, Result};
use crate::layout;
use crate::sandbox;

/// The directory under which all managed repositories and collections live.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Vault {
    root: PathBuf,
}

impl Vault {
    /// Create a vault handle for `root`.
    ///
    /// A relative root is made absolute against the current directory. The
    /// directory itself is not created or checked.
    pub fn new(root: impl Into<PathBuf>) -> Result<Self> {
        let root = root.into();
        let root = std::path::absolute(&root).map_err(|e| Error::from_io(e, &root))?;
        Ok(Self { root })
    }

    /// Create a vault handle from an optional override, falling back to the default.
    pub fn from_override(root: Option<PathBuf>) -> Result<Self> {
        Self::new(root.unwrap_or_else(crate::defaults::default_vault_root))
    }

    /// The absolute root path.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Returns true if the root directory exists.
    pub fn is_initialized(&self) -> bool {
        self.root.is_dir()
    }

    /// Fail with [`Error::NotFound`] unless the root directory exists.
    pub fn require_initialized(&self) -> Result<()> {
        if self.is_initialized() {
            Ok(())
        } else {
            Err(Error::NotFound {
                path: self.root.clone(),
            })
        }
    }

    /// Create the root directory. Succeeds if it already exists.
    pub fn init(&self) -> Result<()> {
        layout::ensure_directory(&self.root)
    }

    /// Resolve a vault-relative path, rejecting anything outside the root.
    pub fn resolve(&self, relative: impl AsRef<Path>) -> Result<PathBuf> {
        sandbox::resolve(&self.root, relative)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_relative_root_is_made_absolute() {
        let vault = Vault::new("some/relative/Dev").unwrap();
        assert!(vault.root().is_absolute());
        assert!(vault.root().ends_with("some/relative/Dev"));
    }

    #[test]
    fn test_override_wins_over_default() {
        let temp = TempDir::new().unwrap();
        let vault = Vault::from_override(Some(temp.path().to_path_buf())).unwrap();
        assert_eq!(vault.root(), temp.path());
    }

    #[test]
    fn test_init_and_require() {
        let temp = TempDir::new().unwrap();
        let vault = Vault::new(temp.path().join("Dev")).unwrap();

        assert!(matches!(
            vault.require_initialized(),
            Err(Error::NotFound { .. })
        ));

        vault.init().unwrap();
        vault.init().unwrap();
        vault.require_initialized().unwrap();
    }

    #[test]
    fn test_resolve_is_sandboxed() {
        let temp = TempDir::new().unwrap();
        let vault = Vault::new(temp.path().join("Dev")).unwrap();
        vault.init().unwrap();

        assert!(vault.resolve("hosts").is_ok());
        assert!(matches!(
            vault.resolve("../.."),
            Err(Error::Escape { .. })
        ));
    }
}
