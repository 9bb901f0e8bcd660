use crate::assets::AssetOracle;
use std::io;
use std::path::{Component, Path, PathBuf};

/// Asset oracle answering from a web root on the local filesystem.
///
/// Request paths are percent-decoded once and resolved below the root.
/// Anything that would escape it (`..`, absolute components, symlinks
/// pointing outside) is reported as missing.
#[derive(Debug, Clone)]
pub struct FsAssetOracle {
    root: PathBuf,
}

impl FsAssetOracle {
    pub fn new(root: impl AsRef<Path>) -> io::Result<Self> {
        let root = root.as_ref().canonicalize()?;
        if !root.is_dir() {
            return Err(io::Error::new(
                io::ErrorKind::NotADirectory,
                format!("asset root is not a directory: {}", root.display()),
            ));
        }

        Ok(Self { root })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Map a request path onto a file below the root, if it stays inside it.
    pub fn resolve(&self, request_path: &str) -> Option<PathBuf> {
        if !request_path.starts_with('/') {
            return None;
        }

        // Percent-decode ONCE
        let decoded = percent_encoding::percent_decode_str(request_path)
            .decode_utf8()
            .ok()?;

        let relative = Path::new(decoded.trim_start_matches('/'));
        if relative.as_os_str().is_empty() {
            return None;
        }

        // ParentDir, RootDir, Prefix (Windows) are all forbidden
        let contained = relative
            .components()
            .all(|c| matches!(c, Component::Normal(_) | Component::CurDir));
        if !contained {
            return None;
        }

        Some(self.root.join(relative))
    }
}

impl AssetOracle for FsAssetOracle {
    fn exists(&self, path: &str) -> bool {
        let Some(full_path) = self.resolve(path) else {
            return false;
        };

        let target = match full_path.canonicalize() {
            Ok(p) => p,
            Err(err) => {
                if err.kind() != io::ErrorKind::NotFound {
                    tracing::debug!(path, error = %err, "asset lookup failed");
                }
                return false;
            }
        };

        // Enforce containment after symlinks are resolved.
        target.starts_with(&self.root) && target.is_file()
    }
}
