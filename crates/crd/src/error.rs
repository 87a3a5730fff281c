//! Extraction errors

/// Errors raised while pulling the validation schema out of a CRD manifest
#[derive(thiserror::Error, Debug)]
pub enum ExtractError {
    #[error("document is empty")]
    EmptyDocument,

    #[error("malformed CRD document: {0}")]
    Malformed(#[from] serde_yaml::Error),

    #[error("CRD document has no `{0}`")]
    MissingField(&'static str),
}
