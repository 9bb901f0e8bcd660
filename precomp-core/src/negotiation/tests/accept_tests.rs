use crate::negotiation::{
    AcceptEntry, AcceptToken, ContentCoding, Quality, parse_accept_encoding,
};
use pretty_assertions::assert_eq;

fn entry(token: AcceptToken, millis: u16) -> AcceptEntry {
    AcceptEntry {
        token,
        quality: Quality::from_millis(millis).unwrap(),
    }
}

fn assert_rejected(header: &str) {
    assert!(
        parse_accept_encoding(header).is_none(),
        "expected '{header}' to be rejected"
    );
}

fn single_quality(header: &str) -> u16 {
    let entries = parse_accept_encoding(header).unwrap();
    assert_eq!(entries.len(), 1);
    entries[0].quality.millis()
}

//-----------------------------------------------------------------------------
// Tokens
//-----------------------------------------------------------------------------
#[test]
fn parses_plain_list_in_header_order() {
    // Act
    let entries = parse_accept_encoding("gzip, br").unwrap();

    // Assert
    assert_eq!(
        entries.to_vec(),
        vec![
            entry(AcceptToken::Coding(ContentCoding::Gzip), 1000),
            entry(AcceptToken::Coding(ContentCoding::Brotli), 1000),
        ]
    );
}

#[test]
fn classifies_wildcard_identity_and_unknown_codings() {
    // Act
    let entries = parse_accept_encoding("*, Identity, Deflate, BR").unwrap();

    // Assert
    assert_eq!(
        entries.iter().map(|e| e.token.clone()).collect::<Vec<_>>(),
        vec![
            AcceptToken::Any,
            AcceptToken::Identity,
            AcceptToken::Other,
            AcceptToken::Coding(ContentCoding::Brotli),
        ]
    );
}

#[test]
fn tolerates_optional_whitespace_around_elements_and_parameters() {
    // Act
    let entries = parse_accept_encoding(" gzip ; q=0.5 ,\tbr").unwrap();

    // Assert
    assert_eq!(
        entries.to_vec(),
        vec![
            entry(AcceptToken::Coding(ContentCoding::Gzip), 500),
            entry(AcceptToken::Coding(ContentCoding::Brotli), 1000),
        ]
    );
}

#[test]
fn skips_empty_list_elements() {
    let entries = parse_accept_encoding("gzip,,br,").unwrap();

    assert_eq!(entries.len(), 2);
}

//-----------------------------------------------------------------------------
// Quality values
//-----------------------------------------------------------------------------
#[test]
fn missing_q_defaults_to_one() {
    assert_eq!(single_quality("gzip"), 1000);
}

#[test]
fn parses_valid_qvalues() {
    assert_eq!(single_quality("br;q=0"), 0);
    assert_eq!(single_quality("br;q=0.8"), 800);
    assert_eq!(single_quality("br;q=0.123"), 123);
    assert_eq!(single_quality("br;q=0.05"), 50);
    assert_eq!(single_quality("br;q=1.000"), 1000);
    assert_eq!(single_quality("br;q=1."), 1000);
}

#[test]
fn q_parameter_name_is_case_insensitive() {
    assert_eq!(single_quality("gzip;Q=0.3"), 300);
}

#[test]
fn extension_parameters_are_ignored() {
    assert_eq!(single_quality("gzip;level=1;q=0.3"), 300);
}

#[test]
fn quality_parse_matches_qvalue_grammar() {
    assert_eq!(Quality::parse("0.5"), Quality::from_millis(500));
    assert_eq!(Quality::parse("1"), Some(Quality::MAX));
    assert_eq!(Quality::parse("1.001"), None);
    assert_eq!(Quality::parse("01"), None);
    assert_eq!(Quality::parse(""), None);
}

//-----------------------------------------------------------------------------
// Malformed headers
//-----------------------------------------------------------------------------
#[test]
fn rejects_out_of_range_or_malformed_qvalues() {
    assert_rejected("br;q=1.5");
    assert_rejected("br;q=2");
    assert_rejected("br;q=-1");
    assert_rejected("br;q=.5");
    assert_rejected("br;q=0.1234");
    assert_rejected("br;q=abc");
    assert_rejected("br;q=");
}

#[test]
fn rejects_malformed_elements() {
    assert_rejected("gzip br");
    assert_rejected("gzip;q");
    assert_rejected("gzip;=0.5");
    assert_rejected(";q=0.5");
    assert_rejected("gz\"ip");
}

#[test]
fn malformed_elements_are_dropped_and_the_rest_kept() {
    // Act
    let entries = parse_accept_encoding("br, gzip;q=high, gz ip, identity;q=0.2").unwrap();

    // Assert
    assert_eq!(
        entries.to_vec(),
        vec![
            entry(AcceptToken::Coding(ContentCoding::Brotli), 1000),
            entry(AcceptToken::Identity, 200),
        ]
    );
}

#[test]
fn rejects_header_when_every_element_is_malformed() {
    assert_rejected("br;q=2, gzip;q=abc");
    assert_rejected("gzip;q, ;q=0.5");
}

#[test]
fn rejects_values_without_any_element() {
    assert_rejected("");
    assert_rejected(" ");
    assert_rejected(", ,");
}
