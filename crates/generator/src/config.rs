//! Configuration types for the generator

use anyhow::{anyhow, Result};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Output configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    /// File the schema document is written to
    pub path: PathBuf,
}

impl OutputConfig {
    pub const DEFAULT_PATH: &'static str = "schema.json";

    pub fn validate(&self) -> Result<()> {
        if self.path.to_string_lossy().is_empty() {
            return Err(anyhow!("Output path cannot be empty"));
        }
        Ok(())
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from(Self::DEFAULT_PATH),
        }
    }
}
