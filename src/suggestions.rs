//! # Error Suggestions
//!
//! This module provides helper functions for generating helpful error
//! messages with hints and suggestions. Following CLI recommendations,
//! errors should tell users what went wrong AND how to fix it.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use devault::suggestions;
//!
//! // Instead of:
//! anyhow::bail!("Vault not found: {}", root.display());
//!
//! // Use:
//! return Err(suggestions::vault_not_found(root));
//! ```

use std::path::Path;

/// Generate an error for when the vault root does not exist.
pub fn vault_not_found(root: &Path) -> anyhow::Error {
    anyhow::anyhow!(
        "Vault not found: {root}\n\n\
         hint: Run 'devault init' to create it\n\
         hint: Use --vault or set DEVAULT_DIR to use a different directory",
        root = root.display()
    )
}

/// Generate an error for a URL that is neither HTTPS nor SSH.
pub fn invalid_url(url: &str) -> anyhow::Error {
    anyhow::anyhow!(
        "Invalid URL '{url}' could not be parsed\n\n\
         hint: Use https://host/owner/repo.git or git@host:owner/repo.git\n\
         hint: The URL must end in .git"
    )
}

/// Generate an error for an invalid search pattern.
///
/// Includes hints about common regex mistakes.
pub fn invalid_regex(pattern: &str, error: &regex::Error) -> anyhow::Error {
    let hint = match error {
        regex::Error::Syntax(msg) if msg.contains("unclosed") => {
            "hint: Check for unclosed brackets, parentheses, or braces"
        }
        regex::Error::Syntax(msg) if msg.contains("repetition") => {
            "hint: Repetition operators (+, *, ?) must follow a pattern"
        }
        _ => "hint: Escape special characters such as . or ( with a backslash",
    };

    anyhow::anyhow!(
        "Invalid search expression: {pattern}\n\
         error: {error}\n\n\
         {hint}"
    )
}

/// Generate an error for a `group` call with too few arguments.
pub fn group_needs_collection() -> anyhow::Error {
    anyhow::anyhow!(
        "At least two arguments are required\n\n\
         hint: Usage: devault group <REPOSITORY>... <COLLECTION>"
    )
}

/// Generate an error for an invalid repository name.
pub fn invalid_repository_name(name: &str) -> anyhow::Error {
    anyhow::anyhow!(
        "'{name}' is an invalid repository name\n\n\
         hint: Use only letters, digits, '-' and '_'"
    )
}

/// Generate an error summarising a batch with failed items.
pub fn batch_failed(failed: usize, total: usize, what: &str) -> anyhow::Error {
    anyhow::anyhow!("{failed} of {total} {what} failed")
}
