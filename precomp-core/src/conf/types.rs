use crate::negotiation::{ContentCoding, PreferenceOrder};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct PrecompConfig {
    #[serde(default)]
    pub negotiation: NegotiationConfig,

    #[serde(default)]
    pub producer: ProducerConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct NegotiationConfig {
    /// Server ranking of codings, most preferred first.
    #[serde(default = "default_preference")]
    pub preference: Vec<ContentCoding>,
}

impl Default for NegotiationConfig {
    fn default() -> Self {
        Self {
            preference: default_preference(),
        }
    }
}

fn default_preference() -> Vec<ContentCoding> {
    PreferenceOrder::default().as_slice().to_vec()
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct ProducerConfig {
    /// Brotli quality, 0-11.
    pub brotli_quality: u32,
    /// Brotli window size (log2), 10-24.
    pub brotli_window: u32,
    /// Gzip level, 0-9.
    pub gzip_level: u32,
    /// Inputs larger than this are rejected.
    pub max_file_size: u64,
}

impl Default for ProducerConfig {
    fn default() -> Self {
        Self {
            brotli_quality: 11,
            brotli_window: 22,
            gzip_level: 9,
            max_file_size: 100 * 1024 * 1024, // 100 MiB
        }
    }
}
