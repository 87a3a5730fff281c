//! CRD parser implementation

use crate::error::ExtractError;
use crate::types::CrdDocument;
use tracing::{debug, info};

pub struct CrdParser;

impl Default for CrdParser {
    fn default() -> Self {
        Self::new()
    }
}

impl CrdParser {
    pub fn new() -> Self {
        Self
    }

    /// Parse raw manifest bytes into the CRD shape
    pub fn parse_document(&self, content: &[u8]) -> Result<CrdDocument, ExtractError> {
        if content.iter().all(u8::is_ascii_whitespace) {
            return Err(ExtractError::EmptyDocument);
        }

        let doc: CrdDocument = serde_yaml::from_slice(content)?;
        debug!("Parsed CRD document ({} bytes)", content.len());
        Ok(doc)
    }

    /// Extract `spec.validation.openAPIV3Schema` from a manifest, discarding
    /// the rest of the document
    pub fn extract_schema(&self, content: &[u8]) -> Result<serde_yaml::Value, ExtractError> {
        let doc = self.parse_document(content)?;
        let schema = Self::take_schema(doc)?;

        info!("Extracted {}", CrdDocument::SCHEMA_PATH);
        Ok(schema)
    }

    /// Move the schema out of the document, naming the first missing segment
    fn take_schema(doc: CrdDocument) -> Result<serde_yaml::Value, ExtractError> {
        let spec = doc.spec.ok_or(ExtractError::MissingField("spec"))?;
        let validation = spec
            .validation
            .ok_or(ExtractError::MissingField("spec.validation"))?;

        match validation.open_api_v3_schema {
            Some(serde_yaml::Value::Null) | None => Err(ExtractError::MissingField(
                CrdDocument::SCHEMA_PATH,
            )),
            Some(schema) => Ok(schema),
        }
    }
}
