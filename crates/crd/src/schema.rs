//! Typed view of an OpenAPI v3 validation schema

use serde::{Deserialize, Serialize};

/// The three top-level fields of `openAPIV3Schema` carried into the output
///
/// `properties` is never interpreted; it is held as an opaque JSON tree and
/// copied as-is. Absent fields decode to their empty values.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct OpenApiV3Schema {
    #[serde(default)]
    pub properties: serde_json::Value,

    #[serde(default)]
    pub required: Vec<String>,

    #[serde(rename = "type", default)]
    pub schema_type: String,
}

impl OpenApiV3Schema {
    /// Decode an extracted schema subtree
    pub fn from_yaml(value: serde_yaml::Value) -> Result<Self, serde_yaml::Error> {
        serde_yaml::from_value(value)
    }

    /// Check if the schema is an object type
    pub fn is_object(&self) -> bool {
        self.schema_type == "object"
    }
}
