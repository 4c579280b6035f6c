//! # Find Command Implementation
//!
//! This module implements the `find` subcommand, which searches the vault for
//! repositories whose path matches any of the given regular expressions.
//!
//! Patterns are matched against the path relative to the vault root, e.g.
//! `hosts/github.com/org/repo`, and matches are printed as absolute paths.

use std::path::PathBuf;

use anyhow::Result;
use clap::Args;
use serde::Serialize;

use devault::error::Error;
use devault::suggestions;

use super::Session;

/// Find a repository (supports regex)
#[derive(Args, Debug)]
pub struct FindArgs {
    /// Regular expressions to search for; a repository matching any of them is shown
    #[arg(required = true, value_name = "PATTERN")]
    pub patterns: Vec<String>,

    /// Output in JSON format
    #[arg(long)]
    pub json: bool,
}

/// One search result in `--json` output.
#[derive(Debug, Serialize)]
struct Match {
    name: String,
    path: PathBuf,
}

/// Execute the `find` command.
pub fn execute(args: FindArgs, session: &Session) -> Result<()> {
    let found = match session.manager.search(&args.patterns) {
        Ok(found) => found,
        Err(Error::Regex(err)) => {
            return Err(suggestions::invalid_regex(&args.patterns.join("|"), &err));
        }
        Err(err) => return Err(err.into()),
    };

    if args.json {
        let matches: Vec<Match> = found
            .into_iter()
            .map(|path| Match {
                name: path
                    .file_name()
                    .map(|n| n.to_string_lossy().into_owned())
                    .unwrap_or_default(),
                path,
            })
            .collect();
        println!("{}", serde_json::to_string_pretty(&matches)?);
        return Ok(());
    }

    if found.is_empty() {
        log::info!("No repositories match '{}'", args.patterns.join("|"));
    }
    for path in found {
        println!("{}", path.display());
    }
    Ok(())
}
