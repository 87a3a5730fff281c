//! Generate command implementation

use crate::cli::utils;
use crate::config::config::expand_path;
use crate::fetch::{DocumentSource, FileSource};
use crate::utils::format_bytes;
use crate::{GenerationResult, RolloutSchema};
use anyhow::{anyhow, Result};
use clap::{ArgMatches, Command};
use std::path::PathBuf;
use tracing::info;

pub fn command() -> Command {
    Command::new("generate")
        .about("Download the CRD and write the schema document (default)")
        .arg(
            clap::Arg::new("config")
                .short('c')
                .long("config")
                .help("Configuration file path")
                .value_name("FILE"),
        )
        .arg(
            clap::Arg::new("url")
                .long("url")
                .help("CRD manifest URL")
                .value_name("URL")
                .conflicts_with("input"),
        )
        .arg(
            clap::Arg::new("input")
                .short('i')
                .long("input")
                .help("Read the CRD manifest from a local file instead of downloading it")
                .value_name("FILE"),
        )
        .arg(
            clap::Arg::new("output")
                .short('o')
                .long("output")
                .help("Output file")
                .value_name("FILE"),
        )
        .arg(
            clap::Arg::new("timeout")
                .long("timeout")
                .help("HTTP request timeout in seconds")
                .value_name("SECS")
                .value_parser(clap::value_parser!(u64)),
        )
        .arg(
            clap::Arg::new("dry-run")
                .long("dry-run")
                .help("Print the schema document to stdout instead of writing it")
                .action(clap::ArgAction::SetTrue),
        )
}

/// Options collected from the command line
#[derive(Debug, Clone, Default)]
pub struct GenerateOptions {
    pub config: Option<PathBuf>,
    pub url: Option<String>,
    pub input: Option<PathBuf>,
    pub output: Option<PathBuf>,
    pub timeout_secs: Option<u64>,
    pub dry_run: bool,
}

impl GenerateOptions {
    pub fn from_matches(matches: &ArgMatches) -> Self {
        Self {
            config: matches.get_one::<String>("config").map(PathBuf::from),
            url: matches.get_one::<String>("url").cloned(),
            input: matches.get_one::<String>("input").map(PathBuf::from),
            output: matches.get_one::<String>("output").map(PathBuf::from),
            timeout_secs: matches.get_one::<u64>("timeout").copied(),
            dry_run: matches.get_flag("dry-run"),
        }
    }

    /// Load the configuration and apply command line overrides
    pub fn resolve_config(&self) -> Result<crate::Config> {
        let mut config = utils::load_config(self.config.as_ref())?;

        if let Some(url) = &self.url {
            config.source.url = url.clone();
        }

        if let Some(output) = &self.output {
            config.output.path = expand_path(output)?;
        }

        if let Some(timeout_secs) = self.timeout_secs {
            config.source.timeout_secs = timeout_secs;
        }

        config.validate()?;
        Ok(config)
    }
}

pub async fn run(matches: &ArgMatches) -> Result<()> {
    execute(GenerateOptions::from_matches(matches)).await
}

pub async fn execute(options: GenerateOptions) -> Result<()> {
    let config = options.resolve_config()?;
    let app = RolloutSchema::new(config)?;

    let source: Box<dyn DocumentSource> = match &options.input {
        Some(path) => Box::new(FileSource::new(path)),
        None => Box::new(app.http_source()?),
    };

    if options.dry_run {
        info!("Dry run mode - no files will be written");
        let result = app.dry_run(source.as_ref()).await?;
        print!("{}", result.content);
        return Ok(());
    }

    let result = app.generate(source.as_ref()).await?;
    println!("{}", summary(&result)?);

    Ok(())
}

/// Human readable report of a finished generation
pub fn summary(result: &GenerationResult) -> Result<String> {
    let output_path = result
        .output_path
        .as_ref()
        .ok_or_else(|| anyhow!("Generation finished without an output file"))?;

    Ok([
        "Generation completed successfully!".to_string(),
        format!("Definition: {}", result.definition_key),
        format!(
            "Output: {} ({})",
            output_path.display(),
            format_bytes(result.bytes_written() as u64)
        ),
        format!("SHA256: {}", result.content_hash),
        format!(
            "Generated at: {}",
            result.generated_at.format("%Y-%m-%d %H:%M:%S UTC")
        ),
        format!("Processing time: {}ms", result.processing_time_ms),
    ]
    .join("\n"))
}
