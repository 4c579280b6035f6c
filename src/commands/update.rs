//! # Update Command Implementation
//!
//! This module implements the `update` subcommand, which runs `git pull` in
//! every repository found below the given vault-relative paths.
//!
//! ## Functionality
//!
//! - **Whole vault**: No arguments, or a literal `*`, updates everything
//! - **Collections**: Links are followed, so `devault update work` pulls the
//!   members of the `work` collection
//! - **Once per repository**: A repository reachable through several paths is
//!   pulled a single time
//! - **Keeps going**: A failed pull is reported and the rest still run

use anyhow::Result;
use clap::Args;

use devault::repository::failures;

use super::{finish, report_failure, Session};

/// Pull the latest changes from upstream
#[derive(Args, Debug)]
pub struct UpdateArgs {
    /// Vault-relative paths to update ('*' or nothing for the whole vault)
    #[arg(value_name = "PATH")]
    pub paths: Vec<String>,
}

/// Execute the `update` command.
pub fn execute(args: UpdateArgs, session: &Session) -> Result<()> {
    let paths = if args.paths.is_empty() || args.paths.iter().any(|p| p == "*") {
        vec![String::new()]
    } else {
        args.paths
    };

    let outcomes = session.manager.update(&paths);
    for outcome in &outcomes {
        match &outcome.result {
            Ok(()) => println!("{} Updated {}", session.output.ok(), outcome.item),
            Err(err) => report_failure(err),
        }
    }

    finish(failures(&outcomes), outcomes.len(), "updates")
}
