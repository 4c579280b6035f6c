//! # New Command Implementation
//!
//! This module implements the `new` subcommand, which creates a local
//! repository under `hosts/local/<name>`, runs `git init` in it, seeds it with
//! starter files, and optionally links it into collections.
//!
//! ## Modes
//!
//! - **Direct**: `devault new scratch -s src/ -s Cargo.toml -c work`
//! - **Interactive**: `devault new` prompts for the name, starters, and
//!   collections
//!
//! Starters ending in `/` become directories, anything else an empty file.
//! Without any starter a `README.md` is created. Starters that would land
//! outside the repository are skipped with a warning.

use anyhow::Result;
use clap::Args;
use dialoguer::{theme::ColorfulTheme, Input};

use devault::defaults::DEFAULT_STARTER;
use devault::error::Error;
use devault::name;
use devault::suggestions;

use super::{confirm, finish, report_failure, Session};

/// Create and initialize a local git repository
#[derive(Args, Debug)]
pub struct NewArgs {
    /// Name of the repository (prompted for when omitted)
    #[arg(value_name = "NAME")]
    pub name: Option<String>,

    /// Starter file or directory (trailing '/') to create; repeatable
    #[arg(short, long = "starter", value_name = "PATH")]
    pub starters: Vec<String>,

    /// Collection to add the repository to; repeatable
    #[arg(short, long = "collection", value_name = "COLLECTION")]
    pub collections: Vec<String>,

    /// Reuse an existing repository directory without asking
    #[arg(short, long)]
    pub yes: bool,
}

/// Execute the `new` command.
pub fn execute(args: NewArgs, session: &Session) -> Result<()> {
    let (name, mut starters, mut collections) = match args.name {
        Some(name) => (name, args.starters, args.collections),
        None => prompt_details(args.starters, args.collections)?,
    };

    let name = name.trim().to_string();
    if !name::is_valid(&name) {
        return Err(suggestions::invalid_repository_name(&name));
    }

    let path = session.manager.local_repository_path(&name)?;
    if path.exists() && !args.yes {
        let prompt = format!("{} already exists. Reuse it?", path.display());
        if !confirm(&prompt, false)? {
            anyhow::bail!("Aborted: {} was left untouched", path.display());
        }
    }

    let path = session.manager.create_local(&name)?;
    println!("{} Initialized {}", session.output.ok(), path.display());

    starters.retain(|s| !s.trim().is_empty());
    if starters.is_empty() {
        starters.push(DEFAULT_STARTER.to_string());
    }
    collections.retain(|c| !c.trim().is_empty());

    let mut failed = 0;
    for outcome in session.manager.add_starters(&path, &starters) {
        match outcome.result {
            Ok(created) => log::debug!("Created {}", created.display()),
            Err(err @ Error::Escape { .. }) => log::warn!("Skipped starter: {}", err),
            Err(err) => {
                report_failure(&err);
                failed += 1;
            }
        }
    }

    for collection in &collections {
        match session.manager.link(&path, collection, &name) {
            Ok(link) => println!("{} {}", session.output.link(), link.display()),
            Err(err) => {
                report_failure(&err);
                failed += 1;
            }
        }
    }

    finish(failed, starters.len() + collections.len(), "starters and links")
}

/// Ask for everything not given on the command line.
///
/// Starters and collections are entered comma separated.
fn prompt_details(
    starters: Vec<String>,
    collections: Vec<String>,
) -> Result<(String, Vec<String>, Vec<String>)> {
    let theme = ColorfulTheme::default();

    let name: String = Input::with_theme(&theme)
        .with_prompt("Repository name")
        .validate_with(|input: &String| -> std::result::Result<(), &str> {
            if name::is_valid(input) {
                Ok(())
            } else {
                Err("use only letters, digits, '-' and '_'")
            }
        })
        .interact_text()?;

    let starters = if starters.is_empty() {
        let answer: String = Input::with_theme(&theme)
            .with_prompt("Starter files (comma separated)")
            .default(DEFAULT_STARTER.to_string())
            .interact_text()?;
        split_list(&answer)
    } else {
        starters
    };

    let collections = if collections.is_empty() {
        let answer: String = Input::with_theme(&theme)
            .with_prompt("Collections (comma separated)")
            .allow_empty(true)
            .interact_text()?;
        split_list(&answer)
    } else {
        collections
    };

    Ok((name, starters, collections))
}

fn split_list(answer: &str) -> Vec<String> {
    answer
        .split(',')
        .map(str::trim)
        .filter(|item| !item.is_empty())
        .map(String::from)
        .collect()
}
