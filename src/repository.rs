//! # High-Level Repository Management
//!
//! This module provides the `RepositoryManager`, the library half of every
//! devault command. It ties the vault root to the parsing, sandboxing,
//! discovery, and layout modules and delegates the actual `git` work to a
//! [`GitOperations`] implementation.
//!
//! ## Design
//!
//! - **`GitOperations`**: Defines the interface for the external VCS process:
//!   clone, init, and pull. Any failure is a single opaque
//!   [`Error::GitCommand`].
//!
//! - **`DefaultGitOperations`**: Wraps the system `git` binary through
//!   [`crate::git`].
//!
//! In tests the git side is replaced with a recording mock, so clone, update,
//! and new-repository flows can be exercised without a network or a `git`
//! installation.
//!
//! Commands that take several paths return one [`Outcome`] per item. A failed
//! item never stops the rest of the batch; the caller decides how to report
//! failures and what exit status to use.

use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

use regex::Regex;

use crate::error::{Error, Result};
use crate::layout;
use crate::locator::RepositoryLocator;
use crate::name;
use crate::url::{self, UrlComponents};
use crate::vault::Vault;

/// Trait for git operations - allows mocking in tests
pub trait GitOperations: Send + Sync {
    /// Clones `url` into `target_dir`.
    fn clone_into(&self, url: &str, target_dir: &Path) -> Result<()>;

    /// Initializes an empty repository in `dir`.
    fn init(&self, dir: &Path) -> Result<()>;

    /// Pulls upstream changes into the repository at `repo_dir`.
    fn pull(&self, repo_dir: &Path) -> Result<()>;
}

/// The default implementation of `GitOperations`, which uses the system's
/// `git` command to perform real Git operations.
pub struct DefaultGitOperations;

impl GitOperations for DefaultGitOperations {
    fn clone_into(&self, url: &str, target_dir: &Path) -> Result<()> {
        crate::git::clone(url, target_dir)
    }

    fn init(&self, dir: &Path) -> Result<()> {
        crate::git::init(dir)
    }

    fn pull(&self, repo_dir: &Path) -> Result<()> {
        crate::git::pull(repo_dir)
    }
}

/// The result for one item of a multi-item command.
#[derive(Debug)]
pub struct Outcome<T> {
    /// The argument or path the result belongs to.
    pub item: String,
    pub result: Result<T>,
}

impl<T> Outcome<T> {
    fn new(item: impl Into<String>, result: Result<T>) -> Self {
        Self {
            item: item.into(),
            result,
        }
    }

    pub fn is_ok(&self) -> bool {
        self.result.is_ok()
    }
}

/// Count the failed items in a batch.
pub fn failures<T>(outcomes: &[Outcome<T>]) -> usize {
    outcomes.iter().filter(|o| !o.is_ok()).count()
}

/// A repository freshly cloned into the vault.
#[derive(Debug, Clone)]
pub struct ClonedRepository {
    pub components: UrlComponents,
    pub path: PathBuf,
}

/// What a vault path points at.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Listing {
    /// Sorted entry names of a directory.
    Directory(Vec<String>),
    /// The name of a single file.
    File(String),
}

/// The main entry point for managing repositories inside a vault.
pub struct RepositoryManager {
    vault: Vault,
    git_ops: Box<dyn GitOperations>,
}

impl RepositoryManager {
    /// Creates a new `RepositoryManager` for `vault` backed by the system `git`.
    pub fn new(vault: Vault) -> Self {
        Self {
            vault,
            git_ops: Box::new(DefaultGitOperations),
        }
    }

    /// Creates a `RepositoryManager` with a custom `GitOperations`
    /// implementation.
    pub fn with_operations(vault: Vault, git_ops: Box<dyn GitOperations>) -> Self {
        Self { vault, git_ops }
    }

    /// List what a vault-relative path contains.
    pub fn list(&self, relative: &str) -> Result<Listing> {
        let path = self.vault.resolve(relative)?;
        let metadata = fs::metadata(&path).map_err(|e| Error::from_io(e, &path))?;

        if !metadata.is_dir() {
            let name = path
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_default();
            return Ok(Listing::File(name));
        }

        let mut names = Vec::new();
        for entry in fs::read_dir(&path).map_err(|e| Error::from_io(e, &path))? {
            let entry = entry.map_err(|e| Error::from_io(e, &path))?;
            names.push(entry.file_name().to_string_lossy().into_owned());
        }
        names.sort();
        Ok(Listing::Directory(names))
    }

    /// Work out what removing `relative` would delete.
    ///
    /// A path whose final component is a symbolic link (a collection entry)
    /// names the link itself, never the repository behind it. Anything else is
    /// resolved and sandbox-checked as usual.
    pub fn removal_target(&self, relative: &str) -> Result<PathBuf> {
        let joined = self.vault.root().join(relative);
        if let (Some(parent), Some(file_name)) = (joined.parent(), joined.file_name()) {
            if let Ok(parent) = self.vault.resolve(parent) {
                let entry = parent.join(file_name);
                if entry.is_symlink() {
                    return Ok(entry);
                }
            }
        }

        let path = self.vault.resolve(relative)?;
        if fs::symlink_metadata(&path).is_err() {
            return Err(Error::NotFound { path });
        }
        Ok(path)
    }

    /// Remove the file, directory tree, or link at `target`.
    ///
    /// `target` should come from [`Self::removal_target`].
    pub fn remove(&self, target: &Path) -> Result<()> {
        let metadata = fs::symlink_metadata(target).map_err(|e| Error::from_io(e, target))?;
        let result = if metadata.is_dir() {
            fs::remove_dir_all(target)
        } else {
            fs::remove_file(target)
        };
        result.map_err(|e| Error::from_io(e, target))?;
        log::debug!("Removed {}", target.display());
        Ok(())
    }

    /// Find repositories whose vault-relative path matches any of `patterns`.
    ///
    /// Links are not followed, so each stored repository is reported once.
    pub fn search(&self, patterns: &[String]) -> Result<Vec<PathBuf>> {
        let regex = Regex::new(&patterns.join("|"))?;
        let root = self.vault.resolve("")?;

        let mut matches: Vec<PathBuf> = RepositoryLocator::new(&root)
            .iter()
            .filter(|repo| {
                let relative = repo.strip_prefix(&root).unwrap_or(repo);
                regex.is_match(&relative.to_string_lossy())
            })
            .collect();
        matches.sort();
        Ok(matches)
    }

    /// Clone `url` into its canonical place under `hosts/`.
    ///
    /// # Errors
    ///
    /// - [`Error::UrlParse`] for an unsupported URL.
    /// - [`Error::Escape`] if the URL's components climb out of the vault.
    /// - [`Error::AlreadyExists`] if the target is already present.
    /// - [`Error::GitCommand`] if the clone itself fails.
    pub fn clone_repository(&self, url: &str) -> Result<ClonedRepository> {
        let components = url::parse(url)?;
        let target = layout::clone_target(self.vault.root(), &components);
        let path = self.vault.resolve(&target)?;

        if fs::symlink_metadata(&path).is_ok() {
            return Err(Error::AlreadyExists { path });
        }
        if let Some(parent) = path.parent() {
            layout::ensure_directory(parent)?;
        }

        log::info!("Cloning {} into {}", url, path.display());
        self.git_ops.clone_into(url, &path)?;
        Ok(ClonedRepository { components, path })
    }

    /// Link an existing vault repository into a collection as `link_name`.
    ///
    /// Both the collection and the repository must resolve inside the vault.
    pub fn link(&self, repository: &Path, collection: &str, link_name: &str) -> Result<PathBuf> {
        let collection_dir = self.vault.resolve(collection)?;
        let repository = self.existing_directory(repository)?;
        layout::link_into_collection(&collection_dir, &repository, link_name)
    }

    /// Link each of `repositories` into `collection`.
    ///
    /// Each link is named after the repository directory. The outer error is
    /// fatal (the collection itself is unusable); inner errors belong to a
    /// single repository.
    pub fn group(&self, repositories: &[String], collection: &str) -> Result<Vec<Outcome<PathBuf>>> {
        let collection_dir = self.vault.resolve(collection)?;

        Ok(repositories
            .iter()
            .map(|repository| {
                let result = self.existing_directory(Path::new(repository)).and_then(|repo| {
                    let link_name = repo
                        .file_name()
                        .map(|n| n.to_string_lossy().into_owned())
                        .ok_or_else(|| Error::InvalidName {
                            name: repository.clone(),
                        })?;
                    layout::link_into_collection(&collection_dir, &repo, &link_name)
                });
                Outcome::new(repository.as_str(), result)
            })
            .collect())
    }

    /// Where a locally created repository called `name` lives.
    pub fn local_repository_path(&self, name: &str) -> Result<PathBuf> {
        let name = name::validate(name)?;
        let path = layout::local_repository_path(self.vault.root(), name);
        self.vault.resolve(&path)
    }

    /// Create `hosts/local/<name>` and initialize a repository in it.
    ///
    /// Reuses the directory if it already exists.
    pub fn create_local(&self, name: &str) -> Result<PathBuf> {
        let path = self.local_repository_path(name)?;
        layout::ensure_directory(&path)?;
        self.git_ops.init(&path)?;
        Ok(path)
    }

    /// Create starter content inside a repository.
    ///
    /// An item ending in `/` becomes a directory; anything else becomes an
    /// empty file (existing files are kept). Items that would land outside the
    /// repository are rejected with [`Error::Escape`].
    pub fn add_starters(&self, repository: &Path, starters: &[String]) -> Vec<Outcome<PathBuf>> {
        starters
            .iter()
            .map(|item| Outcome::new(item.as_str(), create_starter(repository, item)))
            .collect()
    }

    /// Discover the repositories below a vault-relative path.
    ///
    /// Links are followed so a collection yields its members; each repository
    /// appears once, identified by its canonical path.
    pub fn repositories_under(&self, relative: &str) -> Result<Vec<PathBuf>> {
        let start = self.vault.resolve(relative)?;
        if !start.is_dir() {
            return Err(Error::NotFound { path: start });
        }

        let mut seen = HashSet::new();
        let repositories = RepositoryLocator::new(&start)
            .follow_links(true)
            .iter()
            .filter_map(|repo| {
                let canonical = fs::canonicalize(&repo).unwrap_or(repo);
                seen.insert(canonical.clone()).then_some(canonical)
            })
            .collect();
        Ok(repositories)
    }

    /// Pull every repository below each of `relatives`.
    ///
    /// One outcome is produced per path that could not be searched and per
    /// repository pulled. A repository reachable from several paths is pulled
    /// once.
    pub fn update(&self, relatives: &[String]) -> Vec<Outcome<()>> {
        let mut pulled = HashSet::new();
        let mut outcomes = Vec::new();

        for relative in relatives {
            let repositories = match self.repositories_under(relative) {
                Ok(repositories) => repositories,
                Err(err) => {
                    outcomes.push(Outcome::new(relative.as_str(), Err(err)));
                    continue;
                }
            };

            if repositories.is_empty() {
                log::warn!("No repositories found under '{}'", relative);
            }

            for repository in repositories {
                if !pulled.insert(repository.clone()) {
                    continue;
                }
                log::info!("Updating {}", repository.display());
                let result = self.git_ops.pull(&repository);
                outcomes.push(Outcome::new(repository.display().to_string(), result));
            }
        }

        outcomes
    }

    /// Resolve `path` against the vault and require an existing directory.
    fn existing_directory(&self, path: &Path) -> Result<PathBuf> {
        let resolved = self.vault.resolve(path)?;
        if resolved.is_dir() {
            Ok(resolved)
        } else {
            Err(Error::NotFound { path: resolved })
        }
    }
}

fn create_starter(repository: &Path, item: &str) -> Result<PathBuf> {
    let path = crate::sandbox::resolve(repository, item)?;
    if path == repository {
        return Err(Error::InvalidName {
            name: item.to_string(),
        });
    }

    if item.ends_with('/') {
        layout::ensure_directory(&path)?;
    } else {
        if let Some(parent) = path.parent() {
            layout::ensure_directory(parent)?;
        }
        fs::OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(false)
            .open(&path)
            .map_err(|e| Error::from_io(e, &path))?;
    }
    Ok(path)
}
