mod cli;

use clap::{Parser, Subcommand};
use precomp_core::logging::init_logging;
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser, Debug)]
#[command(
    name = "precomp",
    version,
    about = "precomp: pre-compressed static asset negotiation"
)]
struct Cli {
    /// Path to the config file (defaults to config/precomp.hcl when present)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Show which variant would be served for a request
    Negotiate {
        /// Directory the request path is resolved against
        #[arg(long, default_value = ".")]
        root: PathBuf,

        /// Raw Accept-Encoding header value
        #[arg(long)]
        accept_encoding: Option<String>,

        /// Request path, e.g. /_framework/app.wasm
        path: String,
    },

    /// Pre-compress the files listed in a manifest
    Compress {
        /// Path to the JSON manifest
        manifest: PathBuf,
    },

    /// Configuration tooling
    Config {
        #[command(subcommand)]
        cmd: cli::config::ConfigCmd,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    init_logging();

    let config = cli.config.as_deref();
    let result = match cli.command {
        Command::Negotiate {
            root,
            accept_encoding,
            path,
        } => cli::negotiate::run(config, &root, accept_encoding.as_deref(), &path),
        Command::Compress { manifest } => cli::compress::run(config, &manifest),
        Command::Config { cmd } => cli::config::run(config, cmd),
    };

    match result {
        Ok(code) => code,
        Err(err) => {
            eprintln!("error: {err:#}");
            ExitCode::FAILURE
        }
    }
}
