//! Conversion and output errors

use std::path::PathBuf;

#[derive(thiserror::Error, Debug)]
pub enum ConvertError {
    #[error("schema cannot be decoded: {0}")]
    Decode(#[from] serde_yaml::Error),
}

#[derive(thiserror::Error, Debug)]
pub enum WriteError {
    #[error("failed to serialize schema document: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("failed to write {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
