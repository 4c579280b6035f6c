//! Repository discovery.
//!
//! A repository root is any directory with a `.git` subdirectory. Discovery
//! walks downward from a start directory, reports each repository root it
//! meets, and never looks inside a repository's working tree: nested
//! repositories (submodules, vendored checkouts) are not reported.
//!
//! The walk is lazy and bounded. A [`RepositoryLocator`] describes a search
//! and can be iterated any number of times; every call to
//! [`RepositoryLocator::iter`] starts a fresh walk.

use std::path::{Path, PathBuf};

use walkdir::{DirEntry, FilterEntry, WalkDir};

/// Directory names that are never descended into.
pub const EXCLUDED_DIRS: &[&str] = &[".git", "node_modules"];

/// Default depth budget for discovery.
pub const DEFAULT_MAX_DEPTH: usize = 5;

/// A bounded search for repository roots below a start directory.
#[derive(Debug, Clone)]
pub struct RepositoryLocator {
    start: PathBuf,
    max_depth: usize,
    follow_links: bool,
}

impl RepositoryLocator {
    /// Search below `start` with the default depth budget, not following links.
    pub fn new(start: impl Into<PathBuf>) -> Self {
        Self {
            start: start.into(),
            max_depth: DEFAULT_MAX_DEPTH,
            follow_links: false,
        }
    }

    /// Set the depth budget.
    ///
    /// The start directory consumes one unit, each level below it another, so
    /// a budget of 1 inspects only `start` and a budget of 0 finds nothing.
    pub fn max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    /// Descend through symbolic links to directories, such as collection entries.
    pub fn follow_links(mut self, follow_links: bool) -> Self {
        self.follow_links = follow_links;
        self
    }

    /// Start a new walk.
    pub fn iter(&self) -> Repositories {
        if self.max_depth == 0 {
            return Repositories { walk: None };
        }

        let walk = WalkDir::new(&self.start)
            .max_depth(self.max_depth - 1)
            .follow_links(self.follow_links)
            .sort_by_file_name()
            .into_iter()
            .filter_entry(is_searchable as fn(&DirEntry) -> bool);

        Repositories { walk: Some(walk) }
    }
}

impl<'a> IntoIterator for &'a RepositoryLocator {
    type Item = PathBuf;
    type IntoIter = Repositories;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Find repository roots below `start` within `max_depth` levels.
pub fn find_repositories(start: &Path, max_depth: usize) -> Repositories {
    RepositoryLocator::new(start).max_depth(max_depth).iter()
}

/// Returns true if `path` is a repository root.
pub fn is_repository(path: &Path) -> bool {
    path.join(".git").is_dir()
}

fn is_searchable(entry: &DirEntry) -> bool {
    if !entry.file_type().is_dir() {
        return false;
    }
    if entry.depth() == 0 {
        return true;
    }
    let name = entry.file_name().to_str().unwrap_or("");
    !EXCLUDED_DIRS.contains(&name)
}

/// Lazy sequence of repository roots produced by a [`RepositoryLocator`].
pub struct Repositories {
    walk: Option<FilterEntry<walkdir::IntoIter, fn(&DirEntry) -> bool>>,
}

impl Iterator for Repositories {
    type Item = PathBuf;

    fn next(&mut self) -> Option<PathBuf> {
        let walk = self.walk.as_mut()?;

        loop {
            let entry = match walk.next()? {
                Ok(entry) => entry,
                Err(err) => {
                    // Unreadable or vanished directories contribute nothing.
                    log::debug!("Skipping during repository discovery: {}", err);
                    continue;
                }
            };

            if is_repository(entry.path()) {
                walk.skip_current_dir();
                return Some(entry.into_path());
            }
        }
    }
}
