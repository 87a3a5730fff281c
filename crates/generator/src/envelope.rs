//! Schema-definitions envelope

use rollout_crd::OpenApiV3Schema;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Group, kind and version identifying a Kubernetes resource type
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroupVersionKind {
    pub group: String,
    pub kind: String,
    pub version: String,
}

impl GroupVersionKind {
    pub const ROLLOUT_GROUP: &'static str = "argoproj.io";
    pub const ROLLOUT_KIND: &'static str = "Rollout";
    pub const ROLLOUT_VERSION: &'static str = "v1alpha1";

    pub fn new(
        group: impl Into<String>,
        kind: impl Into<String>,
        version: impl Into<String>,
    ) -> Self {
        Self {
            group: group.into(),
            kind: kind.into(),
            version: version.into(),
        }
    }

    /// The Argo Rollouts `Rollout` resource
    pub fn rollout() -> Self {
        Self::new(
            Self::ROLLOUT_GROUP,
            Self::ROLLOUT_KIND,
            Self::ROLLOUT_VERSION,
        )
    }

    /// Key under `definitions`, e.g. `v1alpha1.Rollout`
    pub fn definition_key(&self) -> String {
        format!("{}.{}", self.version, self.kind)
    }
}

impl Default for GroupVersionKind {
    fn default() -> Self {
        Self::rollout()
    }
}

/// One entry of `definitions`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Definition {
    pub properties: serde_json::Value,

    pub required: Vec<String>,

    #[serde(rename = "type")]
    pub schema_type: String,

    #[serde(rename = "x-kubernetes-group-version-kind")]
    pub group_version_kind: Vec<GroupVersionKind>,
}

impl Definition {
    pub fn new(schema: OpenApiV3Schema, gvk: GroupVersionKind) -> Self {
        Self {
            properties: schema.properties,
            required: schema.required,
            schema_type: schema.schema_type,
            group_version_kind: vec![gvk],
        }
    }
}

/// Top-level output document: `{"definitions": {...}}`
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct SchemaDocument {
    pub definitions: BTreeMap<String, Definition>,
}

impl SchemaDocument {
    /// Wrap a single schema under its group/version/kind key
    pub fn single(schema: OpenApiV3Schema, gvk: GroupVersionKind) -> Self {
        let mut definitions = BTreeMap::new();
        definitions.insert(gvk.definition_key(), Definition::new(schema, gvk));
        Self { definitions }
    }

    pub fn get(&self, key: &str) -> Option<&Definition> {
        self.definitions.get(key)
    }
}
