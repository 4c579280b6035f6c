//! Remote URL parsing.
//!
//! A remote URL is split into the `(provider, directory, repository)` triple
//! that determines where a clone lives inside the vault. Two shapes are
//! recognised, tried in this order:
//!
//! - `http(s)://provider[/directory]/repository.git`
//! - `git@[ssh.]provider[:directory]/repository.git`
//!
//! The first pattern that matches wins. Every component is lowercased so
//! storage paths are case-insensitive with respect to the URL.

use std::sync::LazyLock;

use regex::Regex;

use crate::error::{Error, Result};

static HTTPS_URL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^https?://(?P<provider>[^/]+)(?:/(?P<directory>.*?))?/(?P<repository>[^/]+)\.git$",
    )
    .expect("HTTPS URL pattern is valid")
});

static SSH_URL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^git@(?:ssh\.)?(?P<provider>[^:]+)(?::(?P<directory>.*?))?/(?P<repository>[^/]+)\.git$",
    )
    .expect("SSH URL pattern is valid")
});

/// The parts of a remote URL that make up its storage path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UrlComponents {
    /// Host name, e.g. `github.com`.
    pub provider: String,
    /// Owner or group path between host and repository; empty when absent.
    pub directory: String,
    /// Repository name without the `.git` suffix.
    pub repository: String,
}

/// Parse a remote URL into its lowercased components.
///
/// Returns [`Error::UrlParse`] when the URL matches neither shape, including
/// any URL that lacks the trailing `.git`.
pub fn parse(url: &str) -> Result<UrlComponents> {
    for pattern in [&*HTTPS_URL, &*SSH_URL] {
        if let Some(captures) = pattern.captures(url) {
            let component = |name: &str| {
                captures
                    .name(name)
                    .map(|m| m.as_str().to_lowercase())
                    .unwrap_or_default()
            };

            let components = UrlComponents {
                provider: component("provider"),
                directory: component("directory"),
                repository: component("repository"),
            };
            log::debug!(
                "Parsed '{}' as provider={} directory={} repository={}",
                url,
                components.provider,
                components.directory,
                components.repository
            );
            return Ok(components);
        }
    }

    Err(Error::UrlParse {
        url: url.to_string(),
    })
}
