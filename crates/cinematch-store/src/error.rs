use std::path::PathBuf;

use cinematch_core::CinematchError;
use thiserror::Error;

/// Errors that can occur while loading precomputed data.
#[derive(Debug, Error)]
pub enum StoreError {
    /// A data file could not be opened or read.
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A data file is not valid JSON of the expected shape.
    #[error("failed to parse {path}: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// The loaded catalog and matrix do not form a valid context.
    #[error(transparent)]
    Context(#[from] CinematchError),
}

/// Result type alias for store operations.
pub type Result<T> = std::result::Result<T, StoreError>;
