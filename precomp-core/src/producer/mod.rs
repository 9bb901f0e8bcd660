//! Manifest-driven creation of the pre-compressed variants the negotiator
//! serves.

mod compress;
mod error;
mod manifest;
mod run;
#[cfg(test)]
mod tests;

pub use compress::{CompressionSettings, compress_stream};
pub use error::ProduceError;
pub use manifest::{CompressedFile, Manifest};
pub use run::{FileReport, Outcome, ProduceReport, Producer, SkipReason};
