//! Shared test utilities for E2E tests.
//!
//! ## Usage
//!
//! ```rust,ignore
//! mod common;
//! use common::prelude::*;
//!
//! #[test]
//! fn test_example() {
//!     let fixture = TestFixture::new().with_vault();
//!     fixture.command().arg("ls").assert().success();
//! }
//! ```

use assert_fs::prelude::*;
use std::path::{Path, PathBuf};
use std::process::Command as StdCommand;

/// Re-export commonly used test dependencies for convenience.
pub mod prelude {
    pub use assert_cmd::cargo::cargo_bin_cmd;
    pub use assert_fs::prelude::*;
    pub use predicates::prelude::*;

    #[allow(unused_imports)]
    pub use super::git_available;
    pub use super::TestFixture;
}

/// Whether a usable `git` binary is on `PATH`.
///
/// Tests that need git return early when it is missing.
#[allow(dead_code)]
pub fn git_available() -> bool {
    StdCommand::new("git")
        .arg("--version")
        .output()
        .map(|o| o.status.success())
        .unwrap_or(false)
}

/// A temporary directory holding a vault at `<temp>/Dev`.
///
/// The vault itself is only created by [`TestFixture::with_vault`], so the
/// "vault missing" paths can be tested too.
pub struct TestFixture {
    temp_dir: assert_fs::TempDir,
}

impl TestFixture {
    pub fn new() -> Self {
        Self {
            temp_dir: assert_fs::TempDir::new().expect("Failed to create temp directory"),
        }
    }

    /// Create the vault root.
    pub fn with_vault(self) -> Self {
        self.temp_dir
            .child("Dev")
            .create_dir_all()
            .expect("Failed to create vault");
        self
    }

    /// Add a directory that looks like a repository (it has a `.git` directory).
    #[allow(dead_code)]
    pub fn with_repository(self, relative: &str) -> Self {
        self.vault_child(&format!("{}/.git", relative))
            .create_dir_all()
            .expect("Failed to create repository");
        self
    }

    /// Add a file inside the vault.
    #[allow(dead_code)]
    pub fn with_file(self, relative: &str, content: &str) -> Self {
        self.vault_child(relative)
            .write_str(content)
            .expect("Failed to write file");
        self
    }

    /// The temporary directory containing the vault.
    pub fn path(&self) -> &Path {
        self.temp_dir.path()
    }

    /// The vault root, `<temp>/Dev`.
    pub fn vault(&self) -> PathBuf {
        self.temp_dir.path().join("Dev")
    }

    /// A path inside the vault.
    pub fn vault_child(&self, relative: &str) -> assert_fs::fixture::ChildPath {
        self.temp_dir.child("Dev").child(relative)
    }

    /// The canonical form of a vault path, as the binary prints it.
    #[allow(dead_code)]
    pub fn canonical(&self, relative: &str) -> PathBuf {
        let root = std::fs::canonicalize(self.vault()).expect("vault must exist");
        if relative.is_empty() {
            root
        } else {
            root.join(relative)
        }
    }

    /// Create a command pointed at this fixture's vault with plain output.
    ///
    /// Git is kept from searching above the temporary directory.
    pub fn command(&self) -> assert_cmd::Command {
        let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("devault");
        cmd.current_dir(self.path())
            .env("DEVAULT_DIR", self.vault())
            .env("GIT_CEILING_DIRECTORIES", self.path())
            .env_remove("NO_COLOR")
            .arg("--color")
            .arg("never");
        cmd
    }
}

impl Default for TestFixture {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixture_vault_is_optional() {
        let fixture = TestFixture::new();
        assert!(!fixture.vault().exists());
        let fixture = fixture.with_vault();
        assert!(fixture.vault().is_dir());
    }

    #[test]
    fn test_fixture_with_repository() {
        let fixture = TestFixture::new().with_vault().with_repository("hosts/x/y");
        assert!(fixture.vault().join("hosts/x/y/.git").is_dir());
    }
}
