//! Rendering and writing of the schema document

use crate::config::OutputConfig;
use crate::envelope::SchemaDocument;
use crate::error::WriteError;
use std::path::Path;
use tracing::{debug, info};

pub struct SchemaWriter {
    output_config: OutputConfig,
}

impl SchemaWriter {
    pub fn new(output_config: OutputConfig) -> Self {
        Self { output_config }
    }

    pub fn output_path(&self) -> &Path {
        &self.output_config.path
    }

    /// Render the document as two-space indented JSON with a trailing newline.
    ///
    /// Map keys come out sorted, so equal documents render to equal bytes.
    pub fn render(&self, doc: &SchemaDocument) -> Result<String, WriteError> {
        let mut content = serde_json::to_string_pretty(doc)?;
        content.push('\n');
        Ok(content)
    }

    /// Render the document and write it to the configured path, creating or
    /// truncating the file. Returns the rendered content.
    pub async fn write(&self, doc: &SchemaDocument) -> Result<String, WriteError> {
        let content = self.render(doc)?;
        let path = self.output_path();

        debug!("Writing {} bytes to {:?}", content.len(), path);
        tokio::fs::write(path, content.as_bytes())
            .await
            .map_err(|source| WriteError::Io {
                path: path.to_path_buf(),
                source,
            })?;

        info!("Wrote schema document to {:?}", path);
        Ok(content)
    }
}
