use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ProduceError {
    //-------------------------------------------------------------------------
    // Manifest
    //-------------------------------------------------------------------------
    #[error("manifest '{path}' does not exist")]
    ManifestNotFound { path: PathBuf },

    #[error("failed to read manifest {path}: {source}")]
    ReadManifest {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid manifest {path}: {source}")]
    ParseManifest {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    //-------------------------------------------------------------------------
    // Per-file
    //-------------------------------------------------------------------------
    #[error("cannot infer a content-coding from target '{path}' (expected .br or .gz)")]
    UnknownTarget { path: PathBuf },

    #[error("'{path}' is {size} bytes, above the {max} byte limit")]
    TooLarge { path: PathBuf, size: u64, max: u64 },

    #[error("I/O error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("compression task for '{path}' did not complete: {reason}")]
    Task { path: PathBuf, reason: String },
}

impl ProduceError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
