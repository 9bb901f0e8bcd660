use crate::producer::{CompressedFile, Manifest, ProduceError};
use pretty_assertions::assert_eq;
use std::path::{Path, PathBuf};
use tempfile::tempdir;

#[test]
fn parses_build_manifest() {
    // Arrange
    let json = br#"{
        "FilesToCompress": [
            {
                "Source": "wwwroot/app.js",
                "InputSource": "obj/app.js",
                "Target": "wwwroot/app.js.br"
            }
        ]
    }"#;

    // Act
    let manifest = Manifest::from_slice(Path::new("manifest.json"), json).unwrap();

    // Assert
    assert_eq!(
        manifest.files_to_compress,
        vec![CompressedFile {
            source: PathBuf::from("wwwroot/app.js"),
            input_source: PathBuf::from("obj/app.js"),
            target: PathBuf::from("wwwroot/app.js.br"),
        }]
    );
}

#[test]
fn missing_file_list_is_empty() {
    let manifest = Manifest::from_slice(Path::new("manifest.json"), b"{}").unwrap();

    assert!(manifest.is_empty());
}

#[test]
fn malformed_manifest_is_a_parse_error() {
    let err = Manifest::from_slice(Path::new("manifest.json"), b"{\"FilesToCompress\": 3}")
        .unwrap_err();

    assert!(matches!(err, ProduceError::ParseManifest { .. }), "got {err:?}");
}

#[tokio::test]
async fn loading_a_missing_manifest_reports_not_found() {
    let dir = tempdir().unwrap();

    let err = Manifest::load(&dir.path().join("missing.json"))
        .await
        .unwrap_err();

    assert!(matches!(err, ProduceError::ManifestNotFound { .. }), "got {err:?}");
}
