//! Kubernetes schema-definitions generation from CRD validation schemas

pub mod config;
pub mod converter;
pub mod envelope;
pub mod error;
pub mod result;
pub mod writer;

pub use config::OutputConfig;
pub use converter::SchemaConverter;
pub use envelope::{Definition, GroupVersionKind, SchemaDocument};
pub use error::{ConvertError, WriteError};
pub use result::GenerationResult;
pub use writer::SchemaWriter;
