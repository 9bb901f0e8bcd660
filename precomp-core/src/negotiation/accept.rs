use crate::negotiation::ContentCoding;
use smallvec::SmallVec;

/// Parsed `Accept-Encoding` elements, in header order.
pub type AcceptEntries = SmallVec<[AcceptEntry; 4]>;

/// A quality value in thousandths (`q=0.5` is `Quality(500)`).
///
/// The qvalue grammar allows at most three decimals, so storing the value as
/// an integer keeps tie detection exact.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Quality(u16);

impl Quality {
    pub const ZERO: Quality = Quality(0);
    pub const MAX: Quality = Quality(1000);

    pub fn from_millis(millis: u16) -> Option<Self> {
        (millis <= 1000).then_some(Quality(millis))
    }

    pub fn millis(self) -> u16 {
        self.0
    }

    pub fn as_f32(self) -> f32 {
        f32::from(self.0) / 1000.0
    }

    /// `q=0` marks a coding as not acceptable.
    pub fn is_veto(self) -> bool {
        self.0 == 0
    }

    /// Parse a qvalue: `0[.ddd]` or `1[.000]`.
    pub fn parse(s: &str) -> Option<Self> {
        let (int, frac) = s.split_once('.').unwrap_or((s, ""));

        if frac.len() > 3 || !frac.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }

        let millis = frac
            .bytes()
            .zip([100u16, 10, 1])
            .map(|(b, scale)| u16::from(b - b'0') * scale)
            .sum::<u16>();

        match int {
            "0" => Some(Quality(millis)),
            "1" if millis == 0 => Some(Quality::MAX),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AcceptToken {
    Coding(ContentCoding),
    Identity,
    /// The `*` wildcard.
    Any,
    /// A syntactically valid coding this server has no variants for.
    Other,
}

impl AcceptToken {
    fn classify(token: &str) -> Self {
        if token == "*" {
            return AcceptToken::Any;
        }

        if token.eq_ignore_ascii_case("identity") {
            return AcceptToken::Identity;
        }

        match ContentCoding::from_token(token) {
            Some(coding) => AcceptToken::Coding(coding),
            None => AcceptToken::Other,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AcceptEntry {
    pub token: AcceptToken,
    pub quality: Quality,
}

/// Parse an `Accept-Encoding` field value.
///
/// Malformed elements are dropped and the rest kept in order. Returns `None`
/// when no valid element remains. Empty list elements are skipped.
pub fn parse_accept_encoding(value: &str) -> Option<AcceptEntries> {
    let mut entries = AcceptEntries::new();

    for element in value.split(',') {
        let element = element.trim_matches(is_ows);
        if element.is_empty() {
            continue;
        }

        match parse_element(element) {
            Some(entry) => entries.push(entry),
            None => tracing::trace!(element, "dropping malformed accept-encoding element"),
        }
    }

    if entries.is_empty() {
        None
    } else {
        Some(entries)
    }
}

fn parse_element(element: &str) -> Option<AcceptEntry> {
    let mut parts = element.split(';');

    let token = parts.next()?.trim_matches(is_ows);
    if !is_token(token) {
        return None;
    }

    let mut quality = Quality::MAX;

    for param in parts {
        let (name, value) = param.split_once('=')?;
        let name = name.trim_matches(is_ows);
        let value = value.trim_matches(is_ows);

        if !is_token(name) || value.is_empty() {
            return None;
        }

        // Extension parameters are tolerated but carry no meaning here.
        if name.eq_ignore_ascii_case("q") {
            quality = Quality::parse(value)?;
        }
    }

    Some(AcceptEntry {
        token: AcceptToken::classify(token),
        quality,
    })
}

fn is_ows(c: char) -> bool {
    c == ' ' || c == '\t'
}

fn is_token(s: &str) -> bool {
    !s.is_empty() && s.bytes().all(is_tchar)
}

fn is_tchar(b: u8) -> bool {
    b.is_ascii_alphanumeric()
        || matches!(
            b,
            b'!' | b'#'
                | b'$'
                | b'%'
                | b'&'
                | b'\''
                | b'*'
                | b'+'
                | b'-'
                | b'.'
                | b'^'
                | b'_'
                | b'`'
                | b'|'
                | b'~'
        )
}
