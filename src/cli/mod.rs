//! CLI command implementations

use anyhow::Result;
use clap::{ArgMatches, Command};

pub mod commands;

/// Main CLI application
pub struct CliApp;

impl CliApp {
    /// Create the CLI application
    pub fn app() -> Command {
        Command::new("rollout-schema")
            .version(env!("CARGO_PKG_VERSION"))
            .about("Generate a Kubernetes schema-definitions document from the Argo Rollouts CRD")
            .subcommand(commands::generate::command())
            .subcommand(commands::info::command())
    }

    /// Run the CLI application
    pub async fn run(matches: &ArgMatches) -> Result<()> {
        match matches.subcommand() {
            Some(("generate", sub_matches)) => commands::generate::run(sub_matches).await,
            Some(("info", sub_matches)) => commands::info::run(sub_matches).await,
            // No subcommand: generate with the built-in defaults
            _ => commands::generate::execute(commands::generate::GenerateOptions::default()).await,
        }
    }
}

/// Common CLI utilities
pub mod utils {
    use anyhow::Result;
    use std::path::PathBuf;

    /// Load configuration from `--config` if given, otherwise use the defaults
    pub fn load_config(config_path: Option<&PathBuf>) -> Result<crate::Config> {
        match config_path {
            Some(path) => crate::Config::from_file(path),
            None => Ok(crate::Config::default()),
        }
    }
}
