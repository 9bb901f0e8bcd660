use crate::conf::ProducerConfig;
use crate::negotiation::ContentCoding;
use crate::producer::{CompressedFile, CompressionSettings, Manifest, ProduceError, compress_stream};
use std::fs;
use std::io::{self, BufReader};
use std::path::Path;
use std::time::SystemTime;
use tempfile::NamedTempFile;
use tokio::task::JoinSet;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    /// The input source does not exist.
    MissingInput,
    /// The target is at least as new as the input source.
    UpToDate,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Compressed {
        coding: ContentCoding,
        bytes_in: u64,
        bytes_out: u64,
    },
    Skipped(SkipReason),
}

#[derive(Debug)]
pub struct FileReport {
    pub file: CompressedFile,
    pub result: Result<Outcome, ProduceError>,
}

/// Per-file results of one producer run, in manifest order.
#[derive(Debug, Default)]
pub struct ProduceReport {
    pub files: Vec<FileReport>,
}

impl ProduceReport {
    pub fn compressed(&self) -> usize {
        self.count(|r| matches!(r, Ok(Outcome::Compressed { .. })))
    }

    pub fn skipped(&self) -> usize {
        self.count(|r| matches!(r, Ok(Outcome::Skipped(_))))
    }

    pub fn failed(&self) -> usize {
        self.count(Result::is_err)
    }

    pub fn is_success(&self) -> bool {
        self.failed() == 0
    }

    fn count(&self, pred: impl Fn(&Result<Outcome, ProduceError>) -> bool) -> usize {
        self.files.iter().filter(|f| pred(&f.result)).count()
    }
}

/// Writes `.br` / `.gz` variants next to the assets listed in a manifest.
#[derive(Debug, Clone)]
pub struct Producer {
    settings: CompressionSettings,
    max_file_size: u64,
}

impl Default for Producer {
    fn default() -> Self {
        Self::new(&ProducerConfig::default())
    }
}

impl Producer {
    pub fn new(cfg: &ProducerConfig) -> Self {
        Self {
            settings: CompressionSettings::from(cfg),
            max_file_size: cfg.max_file_size,
        }
    }

    /// Process every manifest entry in parallel on the blocking pool.
    ///
    /// Every entry is attempted; a failure never stops the others.
    pub async fn run(&self, manifest: Manifest) -> ProduceReport {
        let files = manifest.files_to_compress;
        let mut slots: Vec<Option<FileReport>> = Vec::with_capacity(files.len());
        slots.resize_with(files.len(), || None);

        let mut tasks = JoinSet::new();
        for (index, file) in files.iter().cloned().enumerate() {
            let producer = self.clone();
            tasks.spawn_blocking(move || {
                let result = producer.produce_file(&file);
                (index, FileReport { file, result })
            });
        }

        while let Some(joined) = tasks.join_next().await {
            match joined {
                Ok((index, report)) => slots[index] = Some(report),
                Err(err) => tracing::error!(error = %err, "compression task failed"),
            }
        }

        let files = files
            .into_iter()
            .zip(slots)
            .map(|(file, slot)| {
                slot.unwrap_or_else(|| FileReport {
                    result: Err(ProduceError::Task {
                        path: file.source.clone(),
                        reason: "task panicked or was cancelled".to_string(),
                    }),
                    file,
                })
            })
            .collect();

        ProduceReport { files }
    }

    /// Produce a single variant, honouring incrementalism.
    pub fn produce_file(&self, file: &CompressedFile) -> Result<Outcome, ProduceError> {
        let result = self.produce_file_inner(file);

        match &result {
            Ok(Outcome::Compressed {
                coding,
                bytes_in,
                bytes_out,
            }) => tracing::info!(
                source = %file.source.display(),
                target = %file.target.display(),
                encoding = %coding,
                bytes_in,
                bytes_out,
                "compressed"
            ),
            Ok(Outcome::Skipped(SkipReason::MissingInput)) => tracing::info!(
                source = %file.source.display(),
                input_source = %file.input_source.display(),
                "skipping, input source does not exist"
            ),
            Ok(Outcome::Skipped(SkipReason::UpToDate)) => tracing::info!(
                source = %file.source.display(),
                target = %file.target.display(),
                "skipping, target is up to date"
            ),
            Err(err) => tracing::error!(
                source = %file.source.display(),
                error = %err,
                "compression failed"
            ),
        }

        result
    }

    fn produce_file_inner(&self, file: &CompressedFile) -> Result<Outcome, ProduceError> {
        let coding = target_coding(&file.target)?;

        let input_modified = match fs::metadata(&file.input_source) {
            Ok(meta) => meta.modified().ok(),
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                return Ok(Outcome::Skipped(SkipReason::MissingInput));
            }
            Err(e) => return Err(ProduceError::io(&file.input_source, e)),
        };

        if is_up_to_date(&file.target, input_modified) {
            return Ok(Outcome::Skipped(SkipReason::UpToDate));
        }

        let source_meta =
            fs::metadata(&file.source).map_err(|e| ProduceError::io(&file.source, e))?;
        let bytes_in = source_meta.len();

        // Guard against memory and disk exhaustion.
        if bytes_in > self.max_file_size {
            return Err(ProduceError::TooLarge {
                path: file.source.clone(),
                size: bytes_in,
                max: self.max_file_size,
            });
        }

        let dir = match file.target.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };
        fs::create_dir_all(dir).map_err(|e| ProduceError::io(dir, e))?;

        let source = fs::File::open(&file.source).map_err(|e| ProduceError::io(&file.source, e))?;

        // Write to a sibling temp file so readers never observe a partial variant.
        let mut staged = NamedTempFile::new_in(dir).map_err(|e| ProduceError::io(dir, e))?;
        compress_stream(
            coding,
            &mut BufReader::new(source),
            staged.as_file_mut(),
            &self.settings,
        )
        .map_err(|e| ProduceError::io(&file.source, e))?;

        let bytes_out = staged
            .as_file()
            .metadata()
            .map_err(|e| ProduceError::io(staged.path(), e))?
            .len();

        // Temp files are created owner-only; match the original asset instead.
        fs::set_permissions(staged.path(), source_meta.permissions())
            .map_err(|e| ProduceError::io(staged.path(), e))?;

        staged
            .persist(&file.target)
            .map_err(|e| ProduceError::io(&file.target, e.error))?;

        Ok(Outcome::Compressed {
            coding,
            bytes_in,
            bytes_out,
        })
    }
}

fn target_coding(target: &Path) -> Result<ContentCoding, ProduceError> {
    target
        .extension()
        .and_then(|ext| ext.to_str())
        .and_then(ContentCoding::from_extension)
        .ok_or_else(|| ProduceError::UnknownTarget {
            path: target.to_path_buf(),
        })
}

/// A target is fresh when it exists and was written no earlier than the input.
fn is_up_to_date(target: &Path, input_modified: Option<SystemTime>) -> bool {
    let Some(input_modified) = input_modified else {
        return false;
    };

    fs::metadata(target)
        .and_then(|meta| meta.modified())
        .map(|target_modified| target_modified >= input_modified)
        .unwrap_or(false)
}
