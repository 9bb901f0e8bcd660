use precomp_core::assets::FsAssetOracle;
use precomp_core::negotiation::ContentCoding;
use precomp_core::producer::{CompressedFile, Manifest};
use std::fs;
use std::io::Read;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// A throwaway web root plus the build manifest describing its variants.
pub struct TestSite {
    dir: TempDir,
    root: PathBuf,
}

impl Default for TestSite {
    fn default() -> Self {
        Self::new()
    }
}

impl TestSite {
    pub fn new() -> Self {
        let dir = tempfile::tempdir().expect("failed to create temp dir");
        let root = dir.path().join("wwwroot");
        fs::create_dir_all(&root).expect("failed to create web root");

        Self { dir, root }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Write an original asset addressed by its request path.
    pub fn write(&self, request_path: &str, contents: &[u8]) -> PathBuf {
        let path = self.file_path(request_path);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(&path, contents).unwrap();
        path
    }

    pub fn file_path(&self, request_path: &str) -> PathBuf {
        self.root.join(request_path.trim_start_matches('/'))
    }

    /// Manifest compressing each asset into the listed codings, in place.
    pub fn manifest(&self, assets: &[(&str, &[ContentCoding])]) -> Manifest {
        let files_to_compress = assets
            .iter()
            .flat_map(|(request_path, codings)| {
                codings.iter().map(move |coding| {
                    let source = self.file_path(request_path);
                    CompressedFile {
                        target: self.file_path(&coding.variant_path(request_path)),
                        input_source: source.clone(),
                        source,
                    }
                })
            })
            .collect();

        Manifest { files_to_compress }
    }

    /// Serialize `manifest` next to the web root, as the build would.
    pub fn write_manifest(&self, manifest: &Manifest) -> PathBuf {
        let path = self.dir.path().join("compression-manifest.json");
        fs::write(&path, serde_json::to_vec_pretty(manifest).unwrap()).unwrap();
        path
    }

    pub fn oracle(&self) -> FsAssetOracle {
        FsAssetOracle::new(&self.root).expect("web root must exist")
    }

    /// Read whatever a static file handler would serve for `request_path`.
    pub fn read(&self, request_path: &str) -> Vec<u8> {
        fs::read(self.file_path(request_path)).unwrap()
    }
}

/// Undo a content-coding, as a client would.
pub fn decode(coding: Option<ContentCoding>, bytes: &[u8]) -> Vec<u8> {
    let mut out = Vec::new();
    match coding {
        None => out.extend_from_slice(bytes),
        Some(ContentCoding::Brotli) => {
            brotli::Decompressor::new(bytes, 4096)
                .read_to_end(&mut out)
                .unwrap();
        }
        Some(ContentCoding::Gzip) => {
            flate2::read::GzDecoder::new(bytes)
                .read_to_end(&mut out)
                .unwrap();
        }
    }
    out
}
