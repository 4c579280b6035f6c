//! # Clone Command Implementation
//!
//! This module implements the `clone` subcommand, which clones a remote
//! repository into its canonical place in the vault and optionally links it
//! into one or more collections.
//!
//! ## Functionality
//!
//! - **Canonical target**: `hosts/<provider>/<directory>/<repository>`, derived
//!   from the URL, so a remote is only ever stored once
//! - **Duplicate detection**: An existing target is refused before `git` runs
//! - **Collections**: Each named collection gets a link named after the
//!   repository; a failed link does not undo the clone

use anyhow::Result;
use clap::Args;

use devault::error::Error;
use devault::suggestions;

use super::{finish, report_failure, Session};

/// Clone a repository to a vault
#[derive(Args, Debug)]
pub struct CloneArgs {
    /// Repository URL to clone (https://host/owner/repo.git or git@host:owner/repo.git)
    #[arg(value_name = "URL")]
    pub url: String,

    /// Collections to add the repository to
    #[arg(value_name = "COLLECTION")]
    pub collections: Vec<String>,
}

/// Execute the `clone` command.
pub fn execute(args: CloneArgs, session: &Session) -> Result<()> {
    let cloned = match session.manager.clone_repository(&args.url) {
        Ok(cloned) => cloned,
        Err(Error::UrlParse { url }) => return Err(suggestions::invalid_url(&url)),
        Err(err) => return Err(err.into()),
    };
    println!(
        "{} Cloned {} into {}",
        session.output.ok(),
        args.url,
        cloned.path.display()
    );

    let mut failed = 0;
    for collection in &args.collections {
        match session
            .manager
            .link(&cloned.path, collection, &cloned.components.repository)
        {
            Ok(link) => println!("{} {}", session.output.link(), link.display()),
            Err(err) => {
                report_failure(&err);
                failed += 1;
            }
        }
    }

    finish(failed, args.collections.len(), "collection links")
}
