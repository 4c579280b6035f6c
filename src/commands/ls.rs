//! # Ls Command Implementation
//!
//! This module implements the `ls` subcommand, which lists the entries of
//! vault-relative paths. With no arguments it lists the vault root.
//!
//! This command is a safe, read-only operation that does not modify any files.

use anyhow::Result;
use clap::Args;

use devault::repository::Listing;

use super::{finish, report_failure, Session};

/// List entities in a vault
#[derive(Args, Debug)]
pub struct LsArgs {
    /// Vault-relative paths to list (defaults to the vault root)
    #[arg(value_name = "PATH")]
    pub paths: Vec<String>,
}

/// Execute the `ls` command.
///
/// Paths that escape the vault or do not exist are reported and skipped.
pub fn execute(args: LsArgs, session: &Session) -> Result<()> {
    let paths = if args.paths.is_empty() {
        vec![String::new()]
    } else {
        args.paths
    };
    let with_headers = paths.len() > 1;
    let mut failed = 0;
    let mut printed = 0;

    for path in &paths {
        let listing = match session.manager.list(path) {
            Ok(listing) => listing,
            Err(err) => {
                report_failure(&err);
                failed += 1;
                continue;
            }
        };

        if with_headers {
            if printed > 0 {
                println!();
            }
            println!("{}:", path);
        }
        printed += 1;

        match listing {
            Listing::Directory(names) => {
                for name in names {
                    println!("{}", name);
                }
            }
            Listing::File(name) => println!("{}", name),
        }
    }

    finish(failed, paths.len(), "paths")
}
