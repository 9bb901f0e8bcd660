use crate::assets::AssetOracle;
use crate::negotiation::{
    AcceptToken, ContentCoding, Decision, PreferenceOrder, Quality, parse_accept_encoding,
};

/// Picks which pre-compressed variant of an asset to serve.
///
/// Holds only the preference order, so one instance can be shared by every
/// request handler.
#[derive(Debug, Clone, Default)]
pub struct Negotiator {
    preference: PreferenceOrder,
}

impl Negotiator {
    pub fn new(preference: PreferenceOrder) -> Self {
        Self { preference }
    }

    pub fn preference(&self) -> &PreferenceOrder {
        &self.preference
    }

    /// Negotiate the encoding for `request_path`.
    ///
    /// Entries are scanned left to right, keeping the best coding seen so far
    /// and its quality. A later entry replaces the selection only when its
    /// quality is strictly higher, or on an exact tie when the server prefers
    /// it. A coding is only ever selected once `oracle` confirms its variant
    /// exists. Missing or malformed headers yield `Decision::NoChange`.
    pub fn negotiate<O>(
        &self,
        request_path: &str,
        accept_encoding: Option<&str>,
        oracle: &O,
    ) -> Decision
    where
        O: AssetOracle + ?Sized,
    {
        let Some(header) = accept_encoding.filter(|value| !value.is_empty()) else {
            return Decision::NoChange;
        };

        let Some(entries) = parse_accept_encoding(header) else {
            tracing::debug!(path = request_path, header, "unparsable Accept-Encoding");
            return Decision::NoChange;
        };

        let variant_exists =
            |coding: ContentCoding| oracle.exists(&coding.variant_path(request_path));

        // `None` means identity: serve the original bytes.
        let mut selected: Option<ContentCoding> = None;
        let mut selected_quality = Quality::ZERO;

        for entry in &entries {
            let quality = entry.quality;

            if quality.is_veto() || quality < selected_quality {
                continue;
            }

            if quality == selected_quality {
                if let Some(upgrade) = self.break_tie(selected, &entry.token, &variant_exists) {
                    selected = Some(upgrade);
                }
                continue;
            }

            match &entry.token {
                AcceptToken::Coding(coding) => {
                    if self.preference.contains(*coding) && variant_exists(*coding) {
                        selected = Some(*coding);
                        selected_quality = quality;
                    }
                }
                AcceptToken::Any => {
                    selected = self.preference.iter().find(|c| variant_exists(*c));
                    selected_quality = quality;
                }
                AcceptToken::Identity => {
                    selected = None;
                    selected_quality = quality;
                }
                AcceptToken::Other => {}
            }
        }

        match selected {
            Some(coding) => {
                tracing::debug!(path = request_path, encoding = %coding, "serving pre-compressed variant");
                Decision::rewrite(coding, request_path)
            }
            None => Decision::NoChange,
        }
    }

    /// Resolve a quality tie between the current selection and `token`.
    ///
    /// Walks the preference order from the top and stops at the current
    /// selection: only a coding ranked above it can take over.
    fn break_tie<F>(
        &self,
        selected: Option<ContentCoding>,
        token: &AcceptToken,
        variant_exists: &F,
    ) -> Option<ContentCoding>
    where
        F: Fn(ContentCoding) -> bool,
    {
        let AcceptToken::Coding(contender) = token else {
            return None;
        };

        for candidate in self.preference.iter() {
            if Some(candidate) == selected {
                break;
            }

            if candidate == *contender && variant_exists(candidate) {
                return Some(candidate);
            }
        }

        None
    }
}
