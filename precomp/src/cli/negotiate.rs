use anyhow::Context;
use precomp_core::assets::FsAssetOracle;
use precomp_core::conf::load_config_or_default;
use std::path::Path;
use std::process::ExitCode;

pub fn run(
    config: Option<&Path>,
    root: &Path,
    accept_encoding: Option<&str>,
    path: &str,
) -> anyhow::Result<ExitCode> {
    let cfg = load_config_or_default(config)?;
    let negotiator = cfg.negotiator()?;

    let oracle = FsAssetOracle::new(root)
        .with_context(|| format!("invalid asset root {}", root.display()))?;

    let decision = negotiator.negotiate(path, accept_encoding, &oracle);

    println!("{}", serde_json::to_string_pretty(&decision)?);

    Ok(ExitCode::SUCCESS)
}
