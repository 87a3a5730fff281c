//! Configuration management for rollout-schema

pub mod config;
pub mod source;


// Re-export main types for convenience
pub use config::Config;
pub use schema_generator::{GroupVersionKind, OutputConfig};
pub use source::SourceConfig;
