//! # Devault Library
//!
//! This library organizes local clones of remote repositories under a single
//! root directory, the vault. It is designed to be used by the `devault`
//! command-line tool, which is a thin layer over the functions here.
//!
//! ## Quick Example
//!
//! ```
//! use std::path::Path;
//! use devault::{layout, name, url};
//!
//! let components = url::parse("https://github.com/0x15BA88FF/devault.git").unwrap();
//! assert_eq!(components.provider, "github.com");
//! assert_eq!(components.directory, "0x15ba88ff");
//!
//! let target = layout::clone_target(Path::new("/vault"), &components);
//! assert_eq!(target, Path::new("/vault/hosts/github.com/0x15ba88ff/devault"));
//!
//! assert!(name::is_valid("my-repo_1"));
//! assert!(!name::is_valid("../etc"));
//! ```
//!
//! ## Core Concepts
//!
//! - **Vault (`vault`, `defaults`)**: The root directory, chosen once at
//!   startup and passed explicitly to everything else.
//! - **URL parsing (`url`)**: Splits a remote URL into provider, directory,
//!   and repository.
//! - **Sandboxing (`sandbox`)**: Resolves user paths against the vault and
//!   refuses anything that ends up outside it.
//! - **Layout (`layout`)**: Where clones, local repositories, and collection
//!   links live, and the rules for creating them.
//! - **Discovery (`locator`)**: Lazily finds repository roots below a
//!   directory.
//! - **Names (`name`)**: Validates names for locally created repositories.
//! - **Repository management (`repository`, `git`)**: Runs the commands,
//!   delegating clone, init, and pull to the system `git`.
//!
//! ## Layout on Disk
//!
//! ```text
//! ~/Dev/
//!   hosts/github.com/org/repo     clone of https://github.com/org/repo.git
//!   hosts/local/scratch           created with `devault new`
//!   work/repo -> ~/Dev/hosts/...  collection entry (symbolic link)
//! ```

pub mod defaults;
pub mod error;
pub mod git;
pub mod layout;
pub mod locator;
pub mod name;
pub mod output;
pub mod repository;
pub mod sandbox;
pub mod suggestions;
pub mod url;
pub mod vault;

#[cfg(test)]
mod sandbox_proptest;
#[cfg(test)]
mod url_proptest;
