//! # Error Handling
//!
//! This module defines the centralized error type for the `devault` library.
//! It uses the `thiserror` library to create an `Error` enum whose variants
//! line up with the failure modes a vault operation can report:
//!
//! - Malformed remote URLs.
//! - Paths that escape the vault root.
//! - Name collisions in collections or clone targets.
//! - Missing paths and permission failures.
//! - Invalid repository names.
//! - Failed `git` invocations.
//!
//! Every variant names the offending path, URL, or argument so the CLI can
//! surface a single readable line without any further context.
//!
//! The `Result` type alias is used to return `Result<T, Error>` from library
//! functions.

use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

/// Main error type for devault operations
#[derive(Error, Debug)]
pub enum Error {
    /// A remote URL matched neither the HTTPS nor the SSH shape.
    #[error("Invalid URL '{url}' could not be parsed")]
    UrlParse { url: String },

    /// A path resolved to a location outside the vault root.
    #[error("The path '{}' is outside the vault '{}'", path.display(), root.display())]
    Escape { path: PathBuf, root: PathBuf },

    /// A link, file, or directory already occupies the requested path.
    #[error("'{}' already exists", path.display())]
    AlreadyExists { path: PathBuf },

    /// The path does not exist.
    #[error("'{}' was not found", path.display())]
    NotFound { path: PathBuf },

    /// A repository name contains characters outside `[A-Za-z0-9_-]`.
    #[error("'{name}' is an invalid repository name")]
    InvalidName { name: String },

    /// A `git` invocation could not be spawned or exited non-zero.
    #[error("git {command} failed for '{}': {message}", path.display())]
    GitCommand {
        command: String,
        path: PathBuf,
        message: String,
    },

    /// The operating system refused access to the path.
    #[error("Permission denied for '{}'", path.display())]
    PermissionDenied { path: PathBuf },

    /// Any other I/O error, with the path it happened on.
    #[error("I/O error on '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// A regular expression error, wrapped from `regex::Error`.
    #[error("Regex error: {0}")]
    Regex(#[from] regex::Error),
}

impl Error {
    /// Classify an I/O error raised while operating on `path`.
    pub fn from_io(err: io::Error, path: &Path) -> Self {
        let path = path.to_path_buf();
        match err.kind() {
            io::ErrorKind::NotFound => Error::NotFound { path },
            io::ErrorKind::PermissionDenied => Error::PermissionDenied { path },
            io::ErrorKind::AlreadyExists => Error::AlreadyExists { path },
            _ => Error::Io { path, source: err },
        }
    }
}

/// A convenient type alias for `Result<T, Error>`.
pub type Result<T> = std::result::Result<T, Error>;
