//! # Rm Command Implementation
//!
//! This module implements the `rm` subcommand, which deletes vault-relative
//! paths after asking for confirmation.
//!
//! ## Functionality
//!
//! - **Per-target confirmation**: Declining skips that target; it is not an error
//! - **Collection entries**: Removing a link removes only the link
//! - **Sandboxing**: Paths that resolve outside the vault are refused
//! - **Non-interactive Mode**: Skip prompts with --yes for automation

use anyhow::Result;
use clap::Args;

use super::{confirm, finish, report_failure, Session};

/// Remove entity(ies) from a vault
#[derive(Args, Debug)]
pub struct RmArgs {
    /// Vault-relative paths to remove
    #[arg(required = true, value_name = "PATH")]
    pub paths: Vec<String>,

    /// Skip confirmation prompts and remove immediately
    #[arg(short, long)]
    pub yes: bool,
}

/// Execute the `rm` command.
pub fn execute(args: RmArgs, session: &Session) -> Result<()> {
    let mut failed = 0;

    for path in &args.paths {
        let target = match session.manager.removal_target(path) {
            Ok(target) => target,
            Err(err) => {
                report_failure(&err);
                failed += 1;
                continue;
            }
        };

        if !args.yes {
            let prompt = format!("Are you sure you want to remove '{}'?", target.display());
            if !confirm(&prompt, false)? {
                println!("{} Kept {}", session.output.warn(), target.display());
                continue;
            }
        }

        match session.manager.remove(&target) {
            Ok(()) => println!("{} Removed {}", session.output.ok(), target.display()),
            Err(err) => {
                report_failure(&err);
                failed += 1;
            }
        }
    }

    finish(failed, args.paths.len(), "removals")
}
