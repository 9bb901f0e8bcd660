use crate::assets::AssetOracle;
use crate::filter::{accept_encoding_value, rewrite_uri_path};
use crate::negotiation::{Decision, Negotiator};
use http::HeaderMap;
use http::request::Parts;

/// Request filter serving pre-compressed variants in place of the originals.
///
/// Runs once per request, before the static file handler resolves the path.
#[derive(Debug, Clone)]
pub struct ContentEncodingFilter<O> {
    negotiator: Negotiator,
    oracle: O,
}

impl<O: AssetOracle> ContentEncodingFilter<O> {
    pub fn new(negotiator: Negotiator, oracle: O) -> Self {
        Self { negotiator, oracle }
    }

    pub fn negotiator(&self) -> &Negotiator {
        &self.negotiator
    }

    pub fn oracle(&self) -> &O {
        &self.oracle
    }

    /// Negotiate without touching the request.
    pub fn decide(&self, request: &Parts) -> Decision {
        let accept = accept_encoding_value(&request.headers);
        self.negotiator
            .negotiate(request.uri.path(), accept.as_deref(), &self.oracle)
    }

    /// Negotiate, then point the request at the chosen variant and set the
    /// matching response headers.
    ///
    /// Returns the decision that was actually applied. If the rewritten URI
    /// cannot be built, nothing is modified and `Decision::NoChange` is
    /// returned.
    pub fn apply(&self, request: &mut Parts, response_headers: &mut HeaderMap) -> Decision {
        let decision = self.decide(request);

        let Some(path) = decision.path() else {
            return decision;
        };

        match rewrite_uri_path(&request.uri, path) {
            Ok(uri) => {
                request.uri = uri;
                decision.apply_response_headers(response_headers);
                decision
            }
            Err(err) => {
                tracing::warn!(path, error = %err, "failed to rewrite request to compressed variant");
                Decision::NoChange
            }
        }
    }
}
