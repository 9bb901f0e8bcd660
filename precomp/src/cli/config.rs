use anyhow::Result;
use clap::Subcommand;
use precomp_core::conf::{ConfigError, load_config_or_default};
use std::path::Path;
use std::process::ExitCode;

#[derive(Subcommand, Debug)]
pub enum ConfigCmd {
    /// Validate configuration and exit
    Check,

    /// Print resolved configuration as JSON
    Dump,
}

pub fn run(config: Option<&Path>, cmd: ConfigCmd) -> Result<ExitCode> {
    match cmd {
        ConfigCmd::Check => check(config),
        ConfigCmd::Dump => dump(config),
    }
}

fn check(config: Option<&Path>) -> Result<ExitCode> {
    match load_config_or_default(config) {
        Ok(cfg) => {
            let preference = cfg
                .negotiation
                .preference
                .iter()
                .map(|c| c.as_str())
                .collect::<Vec<_>>()
                .join(", ");

            println!("✔ Config loaded successfully");
            println!("✔ preference order: {}", preference);
            println!(
                "✔ brotli quality {}, window {}; gzip level {}",
                cfg.producer.brotli_quality, cfg.producer.brotli_window, cfg.producer.gzip_level
            );
            Ok(ExitCode::SUCCESS)
        }
        Err(err) => {
            print_config_error(&err);
            Ok(ExitCode::FAILURE)
        }
    }
}

fn dump(config: Option<&Path>) -> Result<ExitCode> {
    let cfg = load_config_or_default(config)?;
    println!("{}", serde_json::to_string_pretty(&cfg)?);
    Ok(ExitCode::SUCCESS)
}

fn print_config_error(err: &ConfigError) {
    eprintln!("{}", err);
    if let Some(hint) = config_error_hint(err) {
        eprintln!();
        eprintln!("{}", hint);
    }
}

fn config_error_hint(err: &ConfigError) -> Option<&'static str> {
    match err {
        ConfigError::Validation { .. } => Some(
            "The preference order lists each supported coding at most once.\n\
             \n\
             Example:\n\
             \n\
             negotiation {\n\
             \x20 preference = [\"br\", \"gzip\"]\n\
             }",
        ),
        ConfigError::Parse { .. } => Some(
            "Config files use HCL syntax with `negotiation` and `producer` blocks.",
        ),
        ConfigError::ReadFile { .. } => None,
    }
}
