//! Conversion of an extracted validation schema into the output envelope

use crate::envelope::{GroupVersionKind, SchemaDocument};
use crate::error::ConvertError;
use rollout_crd::OpenApiV3Schema;
use tracing::{info, warn};

pub struct SchemaConverter {
    gvk: GroupVersionKind,
}

impl Default for SchemaConverter {
    fn default() -> Self {
        Self::new(GroupVersionKind::rollout())
    }
}

impl SchemaConverter {
    pub fn new(gvk: GroupVersionKind) -> Self {
        Self { gvk }
    }

    /// Decode the schema subtree and wrap it under the configured key
    pub fn convert(&self, subtree: serde_yaml::Value) -> Result<SchemaDocument, ConvertError> {
        let schema = OpenApiV3Schema::from_yaml(subtree)?;

        if !schema.is_object() {
            warn!(
                "Schema type is {:?}, expected \"object\"; copying it unchanged",
                schema.schema_type
            );
        }

        info!(
            "Converted schema for {} ({} required fields)",
            self.gvk.definition_key(),
            schema.required.len()
        );

        Ok(SchemaDocument::single(schema, self.gvk.clone()))
    }
}
