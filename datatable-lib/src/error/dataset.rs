//! Dataset loading errors

use std::path::PathBuf;

/// Error raised while loading the static row source.
#[derive(Debug, thiserror::Error)]
pub enum DatasetError {
    /// The file could not be read.
    #[error("failed to read dataset {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The content is not a JSON array of records.
    #[error("invalid dataset: {0}")]
    Parse(#[from] serde_json::Error),

    /// Two records share the same row identity.
    #[error("duplicate row id {key}")]
    DuplicateKey { key: String },
}
