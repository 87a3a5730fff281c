//! Result types for generation operations

use chrono::{DateTime, Utc};
use std::path::PathBuf;

/// Outcome of a single generation run
#[derive(Debug, Clone)]
pub struct GenerationResult {
    /// Key the schema was stored under, e.g. `v1alpha1.Rollout`
    pub definition_key: String,

    /// File written, `None` for a dry run
    pub output_path: Option<PathBuf>,

    /// Rendered JSON document
    pub content: String,

    /// SHA256 of `content`, hex encoded
    pub content_hash: String,

    pub generated_at: DateTime<Utc>,

    pub processing_time_ms: u64,
}

impl GenerationResult {
    pub fn bytes_written(&self) -> usize {
        if self.output_path.is_some() {
            self.content.len()
        } else {
            0
        }
    }

    pub fn is_dry_run(&self) -> bool {
        self.output_path.is_none()
    }
}
