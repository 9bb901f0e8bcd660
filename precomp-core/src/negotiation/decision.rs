use crate::negotiation::ContentCoding;
use http::header::{CONTENT_ENCODING, VARY};
use http::{HeaderMap, HeaderValue};
use serde::Serialize;

/// Outcome of negotiating a single request.
///
/// The negotiator never mutates anything itself; callers turn a `Rewrite`
/// into a new request path and the two response header changes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "decision", rename_all = "snake_case")]
pub enum Decision {
    /// Serve the original asset, unmodified.
    NoChange,

    /// Serve the pre-compressed variant at `path`.
    Rewrite {
        encoding: ContentCoding,
        path: String,
    },
}

impl Decision {
    pub fn rewrite(encoding: ContentCoding, request_path: &str) -> Self {
        Decision::Rewrite {
            encoding,
            path: encoding.variant_path(request_path),
        }
    }

    pub fn encoding(&self) -> Option<ContentCoding> {
        match self {
            Decision::NoChange => None,
            Decision::Rewrite { encoding, .. } => Some(*encoding),
        }
    }

    pub fn path(&self) -> Option<&str> {
        match self {
            Decision::NoChange => None,
            Decision::Rewrite { path, .. } => Some(path),
        }
    }

    pub fn is_rewrite(&self) -> bool {
        matches!(self, Decision::Rewrite { .. })
    }

    /// Set `Content-Encoding` and add `Accept-Encoding` to `Vary`.
    ///
    /// Existing `Vary` field lines are kept; nothing is appended when they
    /// already cover `Accept-Encoding`.
    pub fn apply_response_headers(&self, headers: &mut HeaderMap) {
        let Decision::Rewrite { encoding, .. } = self else {
            return;
        };

        headers.insert(
            CONTENT_ENCODING,
            HeaderValue::from_static(encoding.as_str()),
        );

        if !varies_by_accept_encoding(headers) {
            headers.append(VARY, HeaderValue::from_static("Accept-Encoding"));
        }
    }
}

fn varies_by_accept_encoding(headers: &HeaderMap) -> bool {
    headers
        .get_all(VARY)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .flat_map(|value| value.split(','))
        .map(str::trim)
        .any(|field| field == "*" || field.eq_ignore_ascii_case("accept-encoding"))
}
