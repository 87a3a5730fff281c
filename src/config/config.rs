//! Main configuration structure and implementation

use anyhow::{anyhow, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use super::{GroupVersionKind, OutputConfig, SourceConfig};

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Configuration version
    pub version: String,

    /// Manifest source
    #[serde(default)]
    pub source: SourceConfig,

    /// Output configuration
    #[serde(default)]
    pub output: OutputConfig,

    /// Identifiers attached to the generated definition
    #[serde(default)]
    pub definition: GroupVersionKind,
}

impl Config {
    /// Load configuration from a YAML file
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let mut config: Config = serde_yaml::from_str(&content)?;
        config.output.path = expand_path(&config.output.path)?;
        config.validate()?;
        Ok(config)
    }

    /// Save configuration to a YAML file
    pub fn save_to_file(&self, path: &Path) -> Result<()> {
        let content = serde_yaml::to_string(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        if self.version != "1.0" {
            return Err(anyhow!(
                "Unsupported configuration version: {}",
                self.version
            ));
        }

        self.source.validate()?;
        self.output.validate()?;

        let gvk = &self.definition;
        if gvk.group.is_empty() || gvk.kind.is_empty() || gvk.version.is_empty() {
            return Err(anyhow!(
                "Definition group, kind and version must all be set"
            ));
        }

        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            version: "1.0".to_string(),
            source: SourceConfig::default(),
            output: OutputConfig::default(),
            definition: GroupVersionKind::rollout(),
        }
    }
}

/// Expand `~` and environment variables like `$HOME` in a path
pub fn expand_path(path: &Path) -> Result<PathBuf> {
    let path_str = path.to_string_lossy();
    let expanded = shellexpand::full(&path_str)
        .map_err(|e| anyhow!("Failed to expand {:?}: {}", path, e))?;
    Ok(PathBuf::from(expanded.as_ref()))
}
