//! CRD (CustomResourceDefinition) parsing and schema extraction

pub mod error;
pub mod parser;
pub mod schema;
pub mod types;

pub use error::ExtractError;
pub use parser::CrdParser;
pub use schema::OpenApiV3Schema;
pub use types::{CrdDocument, CrdSpec, CrdValidation};
