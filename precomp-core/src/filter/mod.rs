mod content_encoding;
mod headers;

pub use content_encoding::ContentEncodingFilter;
pub use headers::{accept_encoding_value, rewrite_uri_path};
