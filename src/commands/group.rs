//! # Group Command Implementation
//!
//! This module implements the `group` subcommand, which links repositories
//! into a collection: a plain directory of symbolic links under the vault.
//!
//! The last argument names the collection; every argument before it is a
//! vault-relative repository path. Existing entries are never replaced.

use anyhow::Result;
use clap::Args;

use devault::repository::failures;
use devault::suggestions;

use super::{finish, report_failure, Session};

/// Group repositories into a collection
#[derive(Args, Debug)]
pub struct GroupArgs {
    /// Repository paths followed by the collection name
    #[arg(value_name = "ITEM")]
    pub items: Vec<String>,
}

/// Execute the `group` command.
pub fn execute(args: GroupArgs, session: &Session) -> Result<()> {
    let (collection, repositories) = match args.items.split_last() {
        Some((collection, repositories)) if !repositories.is_empty() => {
            (collection, repositories)
        }
        _ => return Err(suggestions::group_needs_collection()),
    };

    let outcomes = session.manager.group(repositories, collection)?;
    for outcome in &outcomes {
        match &outcome.result {
            Ok(link) => println!("{} {}", session.output.link(), link.display()),
            Err(err) => report_failure(err),
        }
    }

    finish(failures(&outcomes), outcomes.len(), "links")
}
