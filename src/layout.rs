//! # Vault Layout
//!
//! Where things live inside the vault:
//!
//! ```text
//! <root>/
//!   hosts/
//!     <provider>/<directory>/<repository>   cloned repositories
//!     local/<name>                          repositories created with `new`
//!   <collection>/
//!     <repository> -> <root>/hosts/...      symbolic links
//! ```
//!
//! A remote always maps to the same clone target, so a repository is stored
//! once no matter how many collections refer to it. Collections hold links,
//! never copies.
//!
//! Directory creation is idempotent. Link creation is not: an existing entry
//! of the same name is reported as [`Error::AlreadyExists`] and left untouched.

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};
use crate::url::UrlComponents;

/// Directory under the root holding every stored repository.
pub const HOSTS_DIR: &str = "hosts";

/// Provider segment used for repositories created locally.
pub const LOCAL_PROVIDER: &str = "local";

/// The storage path for a cloned repository.
///
/// Builds `root/hosts/provider/directory/repository`, omitting the directory
/// segment when it is empty.
pub fn clone_target(root: &Path, components: &UrlComponents) -> PathBuf {
    let mut target = root.join(HOSTS_DIR).join(&components.provider);
    if !components.directory.is_empty() {
        target.push(&components.directory);
    }
    target.join(&components.repository)
}

/// The storage path for a repository created with `new`.
pub fn local_repository_path(root: &Path, name: &str) -> PathBuf {
    root.join(HOSTS_DIR).join(LOCAL_PROVIDER).join(name)
}

/// Create `path` and any missing parents. Existing directories are left as is.
pub fn ensure_directory(path: &Path) -> Result<()> {
    fs::create_dir_all(path).map_err(|e| Error::from_io(e, path))
}

/// Link `repository` into `collection` under `link_name`.
///
/// The collection directory is created if needed. Returns the path of the new
/// link.
///
/// # Errors
///
/// [`Error::AlreadyExists`] if anything, including a dangling link, already
/// has that name in the collection.
pub fn link_into_collection(collection: &Path, repository: &Path, link_name: &str) -> Result<PathBuf> {
    ensure_directory(collection)?;

    let link = collection.join(link_name);
    if fs::symlink_metadata(&link).is_ok() {
        return Err(Error::AlreadyExists { path: link });
    }

    symlink_dir(repository, &link).map_err(|e| Error::from_io(e, &link))?;
    log::debug!("Linked {} -> {}", link.display(), repository.display());
    Ok(link)
}

#[cfg(unix)]
fn symlink_dir(target: &Path, link: &Path) -> std::io::Result<()> {
    std::os::unix::fs::symlink(target, link)
}

#[cfg(windows)]
fn symlink_dir(target: &Path, link: &Path) -> std::io::Result<()> {
    std::os::windows::fs::symlink_dir(target, link)
}
