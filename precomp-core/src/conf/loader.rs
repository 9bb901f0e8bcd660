use crate::conf::{ConfigError, PrecompConfig, validate_config};
use crate::negotiation::{Negotiator, PreferenceOrder};
use std::fs;
use std::path::Path;

pub const DEFAULT_CONFIG_PATH: &str = "config/precomp.hcl";

/// Read, parse and validate the config file at `path`.
pub fn load_config(path: &Path) -> Result<PrecompConfig, ConfigError> {
    let contents = fs::read_to_string(path).map_err(|e| ConfigError::read_file(path, e))?;
    parse_config(path, &contents)
}

/// Load an explicitly given config file, or fall back to the default
/// location. A missing default file yields the built-in defaults.
pub fn load_config_or_default(path: Option<&Path>) -> Result<PrecompConfig, ConfigError> {
    if let Some(path) = path {
        return load_config(path);
    }

    let default_path = Path::new(DEFAULT_CONFIG_PATH);
    if default_path.is_file() {
        load_config(default_path)
    } else {
        tracing::debug!(path = DEFAULT_CONFIG_PATH, "no config file, using defaults");
        Ok(PrecompConfig::default())
    }
}

pub fn parse_config(path: &Path, contents: &str) -> Result<PrecompConfig, ConfigError> {
    let config: PrecompConfig =
        hcl::from_str(contents).map_err(|e| ConfigError::parse(path, e))?;

    validate_config(&config)?;

    Ok(config)
}

impl PrecompConfig {
    /// Build the negotiator described by this config.
    pub fn negotiator(&self) -> Result<Negotiator, ConfigError> {
        let preference = PreferenceOrder::new(self.negotiation.preference.clone()).map_err(|e| {
            ConfigError::Validation {
                validation_errors: vec![e.into()],
            }
        })?;

        Ok(Negotiator::new(preference))
    }
}
