//! CRD types and data structures
//!
//! Only the path leading to the validation schema is modelled. Everything
//! else in the manifest (`apiVersion`, `metadata`, `spec.names`, ...) is
//! skipped during deserialization.

use serde::{Deserialize, Serialize};

/// The subset of a CustomResourceDefinition manifest this tool reads
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CrdDocument {
    /// `spec` of the CRD
    #[serde(default)]
    pub spec: Option<CrdSpec>,
}

/// `spec` of a CRD
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CrdSpec {
    /// `spec.validation`, the single-version validation block
    #[serde(default)]
    pub validation: Option<CrdValidation>,
}

/// `spec.validation` of a CRD
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CrdValidation {
    /// Raw OpenAPI v3 schema, kept as an untyped tree
    #[serde(rename = "openAPIV3Schema", default)]
    pub open_api_v3_schema: Option<serde_yaml::Value>,
}

impl CrdDocument {
    /// Path segments walked to reach the validation schema
    pub const SCHEMA_PATH: &'static str = "spec.validation.openAPIV3Schema";
}
