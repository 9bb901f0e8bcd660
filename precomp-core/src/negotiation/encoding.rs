use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};
use std::str::FromStr;
use thiserror::Error;

/// A content-coding the server can serve from a pre-compressed variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
pub enum ContentCoding {
    #[serde(rename = "br")]
    Brotli,
    #[serde(rename = "gzip")]
    Gzip,
}

impl ContentCoding {
    pub const ALL: [ContentCoding; 2] = [ContentCoding::Brotli, ContentCoding::Gzip];

    /// The token used in `Accept-Encoding` and `Content-Encoding`.
    pub fn as_str(self) -> &'static str {
        match self {
            ContentCoding::Brotli => "br",
            ContentCoding::Gzip => "gzip",
        }
    }

    /// Suffix appended to an asset path to locate its variant.
    pub fn extension(self) -> &'static str {
        match self {
            ContentCoding::Brotli => ".br",
            ContentCoding::Gzip => ".gz",
        }
    }

    /// Case-insensitive lookup of a header token.
    pub fn from_token(token: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|coding| coding.as_str().eq_ignore_ascii_case(token))
    }

    /// Lookup by file extension, with or without the leading dot.
    pub fn from_extension(ext: &str) -> Option<Self> {
        let ext = ext.strip_prefix('.').unwrap_or(ext);
        Self::ALL
            .into_iter()
            .find(|coding| coding.extension()[1..].eq_ignore_ascii_case(ext))
    }

    /// Path of the variant of `asset_path` compressed with this coding.
    pub fn variant_path(self, asset_path: &str) -> String {
        format!("{}{}", asset_path, self.extension())
    }
}

impl Display for ContentCoding {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown content-coding '{0}'")]
pub struct UnknownCoding(pub String);

impl FromStr for ContentCoding {
    type Err = UnknownCoding;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_token(s).ok_or_else(|| UnknownCoding(s.to_string()))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PreferenceError {
    #[error("preference order must name at least one content-coding")]
    Empty,

    #[error("content-coding '{0}' appears more than once in the preference order")]
    Duplicate(ContentCoding),
}

/// Server-side ranking of codings, used to break quality ties and to
/// resolve the `*` wildcard. Never empty, never holds duplicates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreferenceOrder(Vec<ContentCoding>);

impl PreferenceOrder {
    pub fn new(order: Vec<ContentCoding>) -> Result<Self, PreferenceError> {
        if order.is_empty() {
            return Err(PreferenceError::Empty);
        }

        for (i, coding) in order.iter().enumerate() {
            if order[..i].contains(coding) {
                return Err(PreferenceError::Duplicate(*coding));
            }
        }

        Ok(Self(order))
    }

    pub fn iter(&self) -> impl Iterator<Item = ContentCoding> + '_ {
        self.0.iter().copied()
    }

    pub fn contains(&self, coding: ContentCoding) -> bool {
        self.0.contains(&coding)
    }

    pub fn as_slice(&self) -> &[ContentCoding] {
        &self.0
    }
}

impl Default for PreferenceOrder {
    fn default() -> Self {
        Self(vec![ContentCoding::Brotli, ContentCoding::Gzip])
    }
}
