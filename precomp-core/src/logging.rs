use std::io::{self, IsTerminal};
use tracing_subscriber::{EnvFilter, fmt};

/// Initialize logging with environment-based filtering.
///
/// - `RUST_LOG` controls the filter (defaults to "info" if not set)
/// - JSON output with flattened event fields when stderr is not a terminal
/// - Compact human-readable output otherwise
///
/// Logs go to stderr so command output on stdout stays machine-readable.
pub fn init_logging() {
    init_logging_with_mode(default_log_mode());
}

pub fn init_logging_with_mode(mode: LogMode) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let builder = fmt().with_env_filter(filter).with_writer(io::stderr);

    // A subscriber may already be installed, e.g. by a test harness.
    let _ = match mode {
        LogMode::Raw => builder.json().flatten_event(true).try_init(),
        LogMode::Pretty => builder.compact().try_init(),
    };
}

pub fn default_log_mode() -> LogMode {
    if io::stderr().is_terminal() {
        LogMode::Pretty
    } else {
        LogMode::Raw
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogMode {
    Raw,
    Pretty,
}
