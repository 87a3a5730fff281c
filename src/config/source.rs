//! Source configuration definitions

use anyhow::{anyhow, Result};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Where the CRD manifest is downloaded from
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SourceConfig {
    /// Manifest URL, pinned to a release tag
    pub url: String,

    /// Request timeout in seconds
    #[serde(default = "SourceConfig::default_timeout_secs")]
    pub timeout_secs: u64,
}

impl SourceConfig {
    pub const ROLLOUT_CRD_URL: &'static str =
        "https://raw.githubusercontent.com/argoproj/argo-rollouts/v0.10.2/manifests/crds/rollout-crd.yaml";

    fn default_timeout_secs() -> u64 {
        30
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    pub fn validate(&self) -> Result<()> {
        if self.url.is_empty() {
            return Err(anyhow!("Source URL cannot be empty"));
        }

        if !self.url.starts_with("https://") && !self.url.starts_with("http://") {
            return Err(anyhow!("Source URL must use http or https: {}", self.url));
        }

        if self.timeout_secs == 0 {
            return Err(anyhow!("Source timeout must be greater than zero"));
        }

        Ok(())
    }
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            url: Self::ROLLOUT_CRD_URL.to_string(),
            timeout_secs: Self::default_timeout_secs(),
        }
    }
}
