use crate::producer::ProduceError;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// List of files to pre-compress, as emitted by the build.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct Manifest {
    #[serde(default)]
    pub files_to_compress: Vec<CompressedFile>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct CompressedFile {
    /// File whose bytes are compressed.
    pub source: PathBuf,

    /// File whose presence and modification time decide whether the target
    /// needs rebuilding.
    pub input_source: PathBuf,

    /// Output path. Its extension selects the coding.
    pub target: PathBuf,
}

impl Manifest {
    pub async fn load(path: &Path) -> Result<Self, ProduceError> {
        let contents = tokio::fs::read(path).await.map_err(|e| match e.kind() {
            std::io::ErrorKind::NotFound => ProduceError::ManifestNotFound {
                path: path.to_path_buf(),
            },
            _ => ProduceError::ReadManifest {
                path: path.to_path_buf(),
                source: e,
            },
        })?;

        Self::from_slice(path, &contents)
    }

    pub fn from_slice(path: &Path, contents: &[u8]) -> Result<Self, ProduceError> {
        serde_json::from_slice(contents).map_err(|e| ProduceError::ParseManifest {
            path: path.to_path_buf(),
            source: e,
        })
    }

    pub fn len(&self) -> usize {
        self.files_to_compress.len()
    }

    pub fn is_empty(&self) -> bool {
        self.files_to_compress.is_empty()
    }
}
