//! CLI argument parsing and command dispatch

use std::io::Write;
use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

use devault::defaults::VAULT_ENV_VAR;
use devault::output::{ColorChoice, OutputConfig};
use devault::vault::Vault;

use crate::commands::{self, Session};

/// Devault - A minimal tool to manage your repositories
#[derive(Parser, Debug)]
#[command(name = "devault")]
#[command(version, about, long_about = None)]
#[command(after_help = "Run 'devault <command> --help' for more information about a command.")]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    command: Commands,

    /// Vault root directory (defaults to ~/Dev)
    #[arg(long, global = true, value_name = "DIR", env = VAULT_ENV_VAR)]
    vault: Option<PathBuf>,

    /// Colorize output (always, never, auto)
    #[arg(long, global = true, value_name = "WHEN", value_enum, default_value = "auto")]
    color: ColorChoice,

    /// Set log level (error, warn, info, debug, trace)
    #[arg(long, global = true, value_name = "LEVEL", default_value = "info")]
    log_level: String,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Initialize a dev vault
    Init,

    /// List entities in a vault
    Ls(commands::ls::LsArgs),

    /// Remove entity(ies) from a vault
    Rm(commands::rm::RmArgs),

    /// Find a repository (supports regex)
    Find(commands::find::FindArgs),

    /// Clone a repository to a vault
    Clone(commands::clone::CloneArgs),

    /// Pull the latest changes from upstream
    Update(commands::update::UpdateArgs),

    /// Group repositories into a collection
    Group(commands::group::GroupArgs),

    /// Create and initialize a local git repository
    New(commands::new::NewArgs),

    /// Generate shell completion scripts
    Completions(commands::completions::CompletionsArgs),
}

impl Cli {
    /// Execute the CLI command
    pub fn execute(self) -> Result<()> {
        init_logging(&self.log_level);
        let output = OutputConfig::new(self.color);

        if let Commands::Completions(args) = self.command {
            return commands::completions::execute(args);
        }

        let vault = Vault::from_override(self.vault)?;
        log::debug!("Using vault {}", vault.root().display());

        if let Commands::Init = self.command {
            return commands::init::execute(&vault, &output);
        }

        let session = Session::open(vault, output)?;
        match self.command {
            Commands::Ls(args) => commands::ls::execute(args, &session),
            Commands::Rm(args) => commands::rm::execute(args, &session),
            Commands::Find(args) => commands::find::execute(args, &session),
            Commands::Clone(args) => commands::clone::execute(args, &session),
            Commands::Update(args) => commands::update::execute(args, &session),
            Commands::Group(args) => commands::group::execute(args, &session),
            Commands::New(args) => commands::new::execute(args, &session),
            Commands::Init | Commands::Completions(_) => Ok(()),
        }
    }
}

/// Route `log` records to stderr as `[LEVEL]: message`.
fn init_logging(level: &str) {
    let _ = env_logger::Builder::new()
        .parse_filters(level)
        .format(|buf, record| writeln!(buf, "[{}]: {}", record.level(), record.args()))
        .try_init();
}
