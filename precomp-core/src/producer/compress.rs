use crate::conf::ProducerConfig;
use crate::negotiation::ContentCoding;
use flate2::Compression;
use flate2::write::GzEncoder;
use std::io::{self, Read, Write};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CompressionSettings {
    /// Brotli quality (0-11)
    pub brotli_quality: i32,
    /// Brotli lg_window_size (10-24)
    pub brotli_window: i32,
    /// Gzip level (0-9)
    pub gzip_level: u32,
}

impl Default for CompressionSettings {
    fn default() -> Self {
        Self::from(&ProducerConfig::default())
    }
}

impl From<&ProducerConfig> for CompressionSettings {
    fn from(cfg: &ProducerConfig) -> Self {
        Self {
            // Validated config keeps these within 0..=24.
            brotli_quality: cfg.brotli_quality.min(11) as i32,
            brotli_window: cfg.brotli_window.clamp(10, 24) as i32,
            gzip_level: cfg.gzip_level.min(9),
        }
    }
}

/// Compress everything `input` yields into `output`.
pub fn compress_stream<R, W>(
    coding: ContentCoding,
    input: &mut R,
    output: W,
    settings: &CompressionSettings,
) -> io::Result<()>
where
    R: Read,
    W: Write,
{
    match coding {
        ContentCoding::Brotli => brotli_compress(input, output, settings),
        ContentCoding::Gzip => gzip_compress(input, output, settings),
    }
}

fn gzip_compress<R: Read, W: Write>(
    input: &mut R,
    output: W,
    settings: &CompressionSettings,
) -> io::Result<()> {
    let mut encoder = GzEncoder::new(output, Compression::new(settings.gzip_level));
    io::copy(input, &mut encoder)?;
    encoder.finish()?.flush()
}

fn brotli_compress<R: Read, W: Write>(
    input: &mut R,
    mut output: W,
    settings: &CompressionSettings,
) -> io::Result<()> {
    let params = brotli::enc::BrotliEncoderParams {
        quality: settings.brotli_quality,
        lgwin: settings.brotli_window,
        ..Default::default()
    };
    brotli::enc::BrotliCompress(input, &mut output, &params)?;
    output.flush()
}
