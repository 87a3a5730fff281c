//! Info command implementation

use crate::Config;
use anyhow::Result;
use clap::{ArgMatches, Command};

pub fn command() -> Command {
    Command::new("info").about("Show tool information").arg(
        clap::Arg::new("detailed")
            .short('d')
            .long("detailed")
            .help("Show the built-in defaults")
            .action(clap::ArgAction::SetTrue),
    )
}

pub async fn run(matches: &ArgMatches) -> Result<()> {
    let detailed = matches.get_flag("detailed");

    println!("rollout-schema - Argo Rollouts CRD to schema-definitions converter");
    println!("Version: {}", env!("CARGO_PKG_VERSION"));

    if detailed {
        let config = Config::default();
        println!("\nDefaults:");
        println!("  Source URL: {}", config.source.url);
        println!("  Timeout: {}s", config.source.timeout_secs);
        println!("  Output: {}", config.output.path.display());
        println!(
            "  Definition: {} ({}/{}, kind {})",
            config.definition.definition_key(),
            config.definition.group,
            config.definition.version,
            config.definition.kind
        );
    }

    Ok(())
}
