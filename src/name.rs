//! Repository name validation.

use crate::error::{Error, Result};

/// Returns true if `name`, once trimmed, is non-empty and made only of ASCII
/// letters, digits, `_` and `-`.
pub fn is_valid(name: &str) -> bool {
    let name = name.trim();
    !name.is_empty()
        && name
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-')
}

/// Validate `name` and return it trimmed.
pub fn validate(name: &str) -> Result<&str> {
    if is_valid(name) {
        Ok(name.trim())
    } else {
        Err(Error::InvalidName {
            name: name.to_string(),
        })
    }
}
