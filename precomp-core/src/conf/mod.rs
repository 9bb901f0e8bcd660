mod error;
mod loader;
pub mod types;
mod validation;

pub use error::ConfigError;
pub use loader::{DEFAULT_CONFIG_PATH, load_config, load_config_or_default, parse_config};
pub use types::{NegotiationConfig, PrecompConfig, ProducerConfig};
pub use validation::{ValidationError, validate_config};
