use crate::conf::{ConfigError, PrecompConfig};
use crate::negotiation::{PreferenceError, PreferenceOrder};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("negotiation.preference: {0}")]
    Preference(#[from] PreferenceError),

    #[error("producer.{field} must be within {min}..={max}, got {value}")]
    OutOfRange {
        field: &'static str,
        value: u64,
        min: u64,
        max: u64,
    },

    #[error("producer.max_file_size must be greater than zero")]
    ZeroMaxFileSize,
}

/// Check every semantic constraint, collecting all violations.
pub fn validate_config(config: &PrecompConfig) -> Result<(), ConfigError> {
    let mut errors = Vec::new();

    if let Err(err) = PreferenceOrder::new(config.negotiation.preference.clone()) {
        errors.push(err.into());
    }

    let producer = &config.producer;
    check_range(&mut errors, "brotli_quality", producer.brotli_quality, 0, 11);
    check_range(&mut errors, "brotli_window", producer.brotli_window, 10, 24);
    check_range(&mut errors, "gzip_level", producer.gzip_level, 0, 9);

    if producer.max_file_size == 0 {
        errors.push(ValidationError::ZeroMaxFileSize);
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(ConfigError::Validation {
            validation_errors: errors,
        })
    }
}

fn check_range(
    errors: &mut Vec<ValidationError>,
    field: &'static str,
    value: u32,
    min: u32,
    max: u32,
) {
    if !(min..=max).contains(&value) {
        errors.push(ValidationError::OutOfRange {
            field,
            value: value.into(),
            min: min.into(),
            max: max.into(),
        });
    }
}
