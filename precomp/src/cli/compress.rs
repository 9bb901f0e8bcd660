use precomp_core::conf::load_config_or_default;
use precomp_core::producer::{Manifest, Producer};
use std::path::Path;
use std::process::ExitCode;

pub fn run(config: Option<&Path>, manifest_path: &Path) -> anyhow::Result<ExitCode> {
    let cfg = load_config_or_default(config)?;
    let producer = Producer::new(&cfg.producer);

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()?;

    let report = runtime.block_on(async {
        let manifest = Manifest::load(manifest_path).await?;
        tracing::info!(
            manifest = %manifest_path.display(),
            files = manifest.len(),
            "compressing manifest"
        );
        anyhow::Ok(producer.run(manifest).await)
    })?;

    println!(
        "✔ {} compressed, {} skipped, {} failed",
        report.compressed(),
        report.skipped(),
        report.failed()
    );

    for file in &report.files {
        if let Err(err) = &file.result {
            eprintln!("✘ {}: {}", file.file.source.display(), err);
        }
    }

    if report.is_success() {
        Ok(ExitCode::SUCCESS)
    } else {
        Ok(ExitCode::FAILURE)
    }
}
