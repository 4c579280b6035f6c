//! Vault path sandboxing.
//!
//! Every user-supplied path is interpreted relative to the vault root and must
//! stay inside it after `.`/`..` and symbolic links are resolved. This keeps a
//! destructive command such as `rm ../../etc` from ever touching anything
//! outside the vault.

use std::ffi::OsString;
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};

/// Resolve `relative` against `root` and check the result stays inside it.
///
/// The joined path is canonicalized (see [`realpath`]) and compared with the
/// canonical root by whole path components, so a root of `/Dev` never
/// matches `/Development`. An empty `relative` resolves to the root itself.
/// An absolute `relative` replaces the root during the join and is accepted
/// only if it already points inside the vault.
///
/// # Errors
///
/// - [`Error::NotFound`] if the root does not exist.
/// - [`Error::Escape`] if the resolved path lies outside the root.
pub fn resolve(root: &Path, relative: impl AsRef<Path>) -> Result<PathBuf> {
    let canonical_root = fs::canonicalize(root).map_err(|e| Error::from_io(e, root))?;
    let resolved = realpath(&root.join(relative.as_ref()));

    if resolved.starts_with(&canonical_root) {
        Ok(resolved)
    } else {
        Err(Error::Escape {
            path: resolved,
            root: canonical_root,
        })
    }
}

/// Returns true if `path` resolves to a location inside `root`.
pub fn contains(root: &Path, path: &Path) -> bool {
    resolve(root, path).is_ok()
}

/// Dangling links expanded by hand before giving up, like the kernel's ELOOP limit.
const MAX_LINK_HOPS: usize = 40;

/// Canonicalize a path that may not exist yet.
///
/// The path is walked one component at a time. Each prefix that exists is
/// canonicalized, which resolves symbolic links; a `..` then pops from the
/// resolved prefix, matching how the kernel would walk the same path.
///
/// A dangling link cannot be canonicalized, so its target is read and
/// spliced into the remaining components. Writing through the link would
/// land at that target, and containment must be judged there. Missing
/// components are kept as written.
pub fn realpath(path: &Path) -> PathBuf {
    let mut pending: Vec<OsString> = components_reversed(path);
    let mut resolved = PathBuf::new();
    let mut hops = 0;

    while let Some(part) = pending.pop() {
        if part == "." {
            continue;
        }
        if part == ".." {
            resolved.pop();
            continue;
        }

        resolved.push(&part);
        if let Ok(canonical) = fs::canonicalize(&resolved) {
            resolved = canonical;
            continue;
        }

        let is_link = fs::symlink_metadata(&resolved).is_ok_and(|m| m.file_type().is_symlink());
        if !is_link || hops >= MAX_LINK_HOPS {
            continue;
        }
        if let Ok(target) = fs::read_link(&resolved) {
            hops += 1;
            // Relative targets are relative to the link's directory; an
            // absolute one replaces everything when its root is pushed.
            resolved.pop();
            pending.extend(components_reversed(&target));
        }
    }

    resolved
}

fn components_reversed(path: &Path) -> Vec<OsString> {
    path.components()
        .rev()
        .map(|c| c.as_os_str().to_os_string())
        .collect()
}
