//! Rollout Schema Library
//!
//! Downloads the Argo Rollouts CustomResourceDefinition, pulls out its
//! OpenAPI v3 validation schema and re-emits it as a Kubernetes
//! schema-definitions document (`{"definitions": {"v1alpha1.Rollout": ...}}`).
//!
//! The pipeline runs four stages in order and stops at the first failure:
//! fetch, parse, conversion, write.

pub mod cli;
pub mod config;
pub mod fetch;
pub mod utils;

pub use config::{Config, SourceConfig};
pub use fetch::{DocumentSource, FetchError, FileSource, HttpSource};
pub use rollout_crd::{CrdParser, ExtractError, OpenApiV3Schema};
pub use schema_generator::{
    ConvertError, Definition, GenerationResult, GroupVersionKind, OutputConfig, SchemaConverter,
    SchemaDocument, SchemaWriter, WriteError,
};

use chrono::Utc;
use std::path::PathBuf;
use std::time::Instant;
use tracing::{debug, info};

/// Main application context that coordinates the pipeline stages
pub struct RolloutSchema {
    config: Config,
    crd_parser: CrdParser,
    converter: SchemaConverter,
    writer: SchemaWriter,
}

impl RolloutSchema {
    /// Create a new instance with the given configuration
    pub fn new(config: Config) -> RolloutSchemaResult<Self> {
        config
            .validate()
            .map_err(|e| RolloutSchemaError::Config(e.to_string()))?;

        let converter = SchemaConverter::new(config.definition.clone());
        let writer = SchemaWriter::new(config.output.clone());

        Ok(Self {
            config,
            crd_parser: CrdParser::new(),
            converter,
            writer,
        })
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Build the HTTP source described by the configuration
    pub fn http_source(&self) -> RolloutSchemaResult<HttpSource> {
        Ok(HttpSource::new(
            self.config.source.url.clone(),
            self.config.source.timeout(),
        )?)
    }

    /// Fetch, extract and convert, without touching the output file
    pub async fn build_document(
        &self,
        source: &dyn DocumentSource,
    ) -> RolloutSchemaResult<SchemaDocument> {
        let raw = source.fetch().await?;
        debug!("Fetched {} bytes from {}", raw.len(), source.location());

        let subtree = self.crd_parser.extract_schema(&raw)?;
        let document = self.converter.convert(subtree)?;
        Ok(document)
    }

    /// Run the whole pipeline and write the output file
    pub async fn generate(
        &self,
        source: &dyn DocumentSource,
    ) -> RolloutSchemaResult<GenerationResult> {
        info!("Generating schema from {}", source.location());
        let start_time = Instant::now();

        let document = self.build_document(source).await?;
        let content = self.writer.write(&document).await?;

        let output_path = self.writer.output_path().to_path_buf();
        Ok(self.finish(content, Some(output_path), start_time))
    }

    /// Run the pipeline but only render the output
    pub async fn dry_run(
        &self,
        source: &dyn DocumentSource,
    ) -> RolloutSchemaResult<GenerationResult> {
        info!("Dry run: rendering schema from {}", source.location());
        let start_time = Instant::now();

        let document = self.build_document(source).await?;
        let content = self.writer.render(&document)?;

        Ok(self.finish(content, None, start_time))
    }

    fn finish(
        &self,
        content: String,
        output_path: Option<PathBuf>,
        start_time: Instant,
    ) -> GenerationResult {
        let content_hash = utils::calculate_string_hash(&content);
        let processing_time_ms = start_time.elapsed().as_millis() as u64;
        info!(
            "Schema {} ready (sha256 {}, {}ms)",
            self.config.definition.definition_key(),
            content_hash,
            processing_time_ms
        );

        GenerationResult {
            definition_key: self.config.definition.definition_key(),
            output_path,
            content,
            content_hash,
            generated_at: Utc::now(),
            processing_time_ms,
        }
    }
}

/// Application error types, one per pipeline stage
#[derive(thiserror::Error, Debug)]
pub enum RolloutSchemaError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("fetch failed: {0}")]
    Fetch(#[from] FetchError),

    #[error("parse failed: {0}")]
    Parse(#[from] ExtractError),

    #[error("conversion failed: {0}")]
    Conversion(#[from] ConvertError),

    #[error("write failed: {0}")]
    Write(#[from] WriteError),
}

impl RolloutSchemaError {
    /// Name of the stage that failed
    pub fn stage(&self) -> &'static str {
        match self {
            RolloutSchemaError::Config(_) => "config",
            RolloutSchemaError::Fetch(_) => "fetch",
            RolloutSchemaError::Parse(_) => "parse",
            RolloutSchemaError::Conversion(_) => "conversion",
            RolloutSchemaError::Write(_) => "write",
        }
    }
}

/// Result type for the main application
pub type RolloutSchemaResult<T> = Result<T, RolloutSchemaError>;
