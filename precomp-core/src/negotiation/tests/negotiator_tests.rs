use crate::assets::MemoryAssetOracle;
use crate::negotiation::{ContentCoding, Decision, Negotiator, PreferenceOrder};
use pretty_assertions::assert_eq;
use std::cell::RefCell;

const ASSET: &str = "/_framework/app.wasm";

fn variants(codings: &[ContentCoding]) -> MemoryAssetOracle {
    codings.iter().map(|c| c.variant_path(ASSET)).collect()
}

fn negotiate(header: &str, available: &[ContentCoding]) -> Decision {
    Negotiator::default().negotiate(ASSET, Some(header), &variants(available))
}

fn assert_selects(header: &str, available: &[ContentCoding], expected: ContentCoding) {
    // Act
    let decision = negotiate(header, available);

    // Assert
    assert_eq!(
        decision,
        Decision::Rewrite {
            encoding: expected,
            path: expected.variant_path(ASSET),
        },
        "header: {header}"
    );
}

fn assert_no_change(header: &str, available: &[ContentCoding]) {
    assert_eq!(
        negotiate(header, available),
        Decision::NoChange,
        "header: {header}"
    );
}

const BOTH: &[ContentCoding] = &[ContentCoding::Brotli, ContentCoding::Gzip];
const BR_ONLY: &[ContentCoding] = &[ContentCoding::Brotli];
const GZ_ONLY: &[ContentCoding] = &[ContentCoding::Gzip];
const NONE: &[ContentCoding] = &[];

//-----------------------------------------------------------------------------
// Absent or malformed input
//-----------------------------------------------------------------------------
#[test]
fn missing_header_is_no_change() {
    let decision = Negotiator::default().negotiate(ASSET, None, &variants(BOTH));

    assert_eq!(decision, Decision::NoChange);
}

#[test]
fn empty_header_is_no_change() {
    assert_no_change("", BOTH);
}

#[test]
fn unparsable_header_is_no_change() {
    assert_no_change("gzip;q=2", BOTH);
    assert_no_change("br;q=abc", BOTH);
    assert_no_change("gzip br", BOTH);
    assert_no_change(",,,", BOTH);
}

#[test]
fn malformed_element_does_not_discard_valid_ones() {
    assert_selects("br, gzip;q=abc", BOTH, ContentCoding::Brotli);
    assert_selects("gzip;q=2, gzip;q=0.4", GZ_ONLY, ContentCoding::Gzip);
}

//-----------------------------------------------------------------------------
// Quality ordering
//-----------------------------------------------------------------------------
#[test]
fn single_coding_is_selected_when_variant_exists() {
    assert_selects("gzip", BOTH, ContentCoding::Gzip);
    assert_selects("br", BOTH, ContentCoding::Brotli);
}

#[test]
fn strictly_higher_quality_beats_server_preference() {
    assert_selects("gzip;q=0.9, br;q=0.8", BOTH, ContentCoding::Gzip);
}

#[test]
fn later_higher_quality_entry_replaces_selection() {
    assert_selects("gzip;q=0.5, br;q=0.9", BOTH, ContentCoding::Brotli);
}

#[test]
fn missing_variant_is_never_selected() {
    assert_no_change("br;q=1", GZ_ONLY);
    assert_no_change("br", NONE);
}

#[test]
fn missing_variant_falls_through_to_lower_quality() {
    assert_selects("br;q=1, gzip;q=0.2", GZ_ONLY, ContentCoding::Gzip);
}

#[test]
fn unknown_codings_are_ignored() {
    assert_no_change("deflate, compress", BOTH);
    assert_selects("deflate, gzip;q=0.5", BOTH, ContentCoding::Gzip);
}

#[test]
fn duplicate_tokens_are_scanned_in_order() {
    assert_selects("gzip;q=0.5, gzip;q=0.9", GZ_ONLY, ContentCoding::Gzip);
}

//-----------------------------------------------------------------------------
// Vetoes
//-----------------------------------------------------------------------------
#[test]
fn q_zero_vetoes_even_without_alternative() {
    assert_no_change("br;q=0", BR_ONLY);
}

#[test]
fn q_zero_vetoes_only_the_named_coding() {
    assert_selects("br;q=0, gzip", BOTH, ContentCoding::Gzip);
}

#[test]
fn vetoed_wildcard_selects_nothing() {
    assert_no_change("*;q=0", BOTH);
}

#[test]
fn later_veto_does_not_revoke_an_earlier_selection() {
    assert_selects("br;q=0.9, br;q=0", BOTH, ContentCoding::Brotli);
}

//-----------------------------------------------------------------------------
// Tie-breaking
//-----------------------------------------------------------------------------
#[test]
fn tie_keeps_preferred_selection() {
    assert_selects("br;q=0.8, gzip;q=0.8", BOTH, ContentCoding::Brotli);
    assert_selects("br, gzip", BOTH, ContentCoding::Brotli);
}

#[test]
fn tie_upgrades_to_preferred_coding() {
    assert_selects("gzip;q=0.8, br;q=0.8", BOTH, ContentCoding::Brotli);
    assert_selects("gzip, br", BOTH, ContentCoding::Brotli);
}

#[test]
fn tie_upgrade_requires_the_variant() {
    assert_selects("gzip;q=0.8, br;q=0.8", GZ_ONLY, ContentCoding::Gzip);
}

#[test]
fn tie_with_identity_selection_upgrades_to_coding() {
    assert_selects("identity;q=0.5, gzip;q=0.5", BOTH, ContentCoding::Gzip);
}

#[test]
fn tie_follows_configured_preference() {
    // Arrange
    let preference =
        PreferenceOrder::new(vec![ContentCoding::Gzip, ContentCoding::Brotli]).unwrap();
    let negotiator = Negotiator::new(preference);

    // Act
    let decision = negotiator.negotiate(ASSET, Some("br, gzip"), &variants(BOTH));

    // Assert
    assert_eq!(decision.encoding(), Some(ContentCoding::Gzip));
}

//-----------------------------------------------------------------------------
// Wildcard
//-----------------------------------------------------------------------------
#[test]
fn wildcard_picks_first_available_preferred_coding() {
    assert_selects("*;q=1", GZ_ONLY, ContentCoding::Gzip);
    assert_selects("*", BOTH, ContentCoding::Brotli);
}

#[test]
fn wildcard_without_variants_is_no_change() {
    assert_no_change("*", NONE);
}

#[test]
fn wildcard_with_higher_quality_overrides_explicit_coding() {
    assert_selects("gzip;q=0.5, *", BOTH, ContentCoding::Brotli);
}

//-----------------------------------------------------------------------------
// Identity
//-----------------------------------------------------------------------------
#[test]
fn higher_quality_identity_wins() {
    assert_no_change("identity;q=1, br;q=0.5", BR_ONLY);
}

#[test]
fn later_higher_quality_identity_downgrades_selection() {
    assert_no_change("br;q=0.5, identity", BOTH);
}

#[test]
fn equal_quality_identity_does_not_downgrade() {
    assert_selects("br;q=0.5, identity;q=0.5", BOTH, ContentCoding::Brotli);
}

#[test]
fn lower_quality_identity_is_ignored() {
    assert_selects("br, identity;q=0.5", BOTH, ContentCoding::Brotli);
}

#[test]
fn tokens_are_case_insensitive() {
    assert_selects("GZIP", BOTH, ContentCoding::Gzip);
    assert_no_change("IDENTITY;Q=1, br;q=0.5", BOTH);
}

//-----------------------------------------------------------------------------
// Preference membership
//-----------------------------------------------------------------------------
#[test]
fn codings_outside_the_preference_order_are_not_served() {
    // Arrange
    let preference = PreferenceOrder::new(vec![ContentCoding::Gzip]).unwrap();
    let negotiator = Negotiator::new(preference);

    // Act
    let explicit = negotiator.negotiate(ASSET, Some("br"), &variants(BOTH));
    let wildcard = negotiator.negotiate(ASSET, Some("*"), &variants(BOTH));

    // Assert
    assert_eq!(explicit, Decision::NoChange);
    assert_eq!(wildcard.encoding(), Some(ContentCoding::Gzip));
}

//-----------------------------------------------------------------------------
// Oracle interaction
//-----------------------------------------------------------------------------
#[test]
fn oracle_is_probed_with_exact_variant_paths() {
    // Arrange
    let probes = RefCell::new(Vec::new());
    let oracle = |path: &str| {
        probes.borrow_mut().push(path.to_string());
        false
    };

    // Act
    let decision = Negotiator::default().negotiate("/index.html", Some("gzip, *"), &oracle);

    // Assert
    assert_eq!(decision, Decision::NoChange);
    assert_eq!(
        probes.into_inner(),
        vec![
            "/index.html.gz".to_string(),
            "/index.html.br".to_string(),
            "/index.html.gz".to_string(),
        ]
    );
}

#[test]
fn vetoed_and_lower_entries_are_never_probed() {
    // Arrange
    let probes = RefCell::new(Vec::new());
    let oracle = |path: &str| {
        probes.borrow_mut().push(path.to_string());
        true
    };

    // Act
    let decision =
        Negotiator::default().negotiate("/app.js", Some("gzip;q=0, br, gzip;q=0.5"), &oracle);

    // Assert
    assert_eq!(decision.encoding(), Some(ContentCoding::Brotli));
    assert_eq!(probes.into_inner(), vec!["/app.js.br".to_string()]);
}

#[test]
fn negotiation_is_idempotent() {
    // Arrange
    let negotiator = Negotiator::default();
    let oracle = variants(BOTH);
    let header = Some("gzip;q=0.8, br;q=0.8, identity;q=0.1");

    // Act
    let first = negotiator.negotiate(ASSET, header, &oracle);
    let second = negotiator.negotiate(ASSET, header, &oracle);

    // Assert
    assert_eq!(first, second);
}

#[test]
fn never_selects_a_coding_without_extension_mapping() {
    for header in ["deflate", "compress;q=1, zstd;q=0.9", "x-gzip, exi"] {
        assert_no_change(header, BOTH);
    }
}
