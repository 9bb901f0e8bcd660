use http::header::ACCEPT_ENCODING;
use http::uri::PathAndQuery;
use http::{HeaderMap, Uri};

/// Fold every `Accept-Encoding` field line into a single list value.
///
/// Returns `None` when the header is absent or any line is not visible ASCII;
/// both cases leave the request unnegotiated.
pub fn accept_encoding_value(headers: &HeaderMap) -> Option<String> {
    let mut folded: Option<String> = None;

    for value in headers.get_all(ACCEPT_ENCODING) {
        let value = value.to_str().ok()?;
        match folded.as_mut() {
            Some(existing) => {
                existing.push_str(", ");
                existing.push_str(value);
            }
            None => folded = Some(value.to_string()),
        }
    }

    folded
}

/// Replace the path of `uri`, keeping scheme, authority and query.
pub fn rewrite_uri_path(uri: &Uri, path: &str) -> Result<Uri, http::Error> {
    let path_and_query = match uri.query() {
        Some(query) => format!("{}?{}", path, query),
        None => path.to_string(),
    };

    let mut parts = uri.clone().into_parts();
    parts.path_and_query = Some(PathAndQuery::try_from(path_and_query)?);

    Ok(Uri::from_parts(parts)?)
}
