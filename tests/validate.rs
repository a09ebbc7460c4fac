//! Validators and validity predicates.

mod utils;

use uri_reference::grammar::Rule;
use uri_reference::spec::{IriSpec, UriSpec};
use uri_reference::types::{IriReference, UriReference};
use uri_reference::validate;

#[test]
fn hosts() {
    for host in utils::VALID_HOSTS {
        assert!(validate::host::<UriSpec>(host).is_ok(), "{host:?}");
        assert!(validate::host::<IriSpec>(host).is_ok(), "{host:?}");
    }
    for host in utils::INVALID_HOSTS {
        let err = validate::authority::<UriSpec>(host).expect_err("invalid authority");
        assert_eq!(err.rule(), Rule::Subauthority, "{host:?}");
    }
    assert!(validate::host::<IriSpec>("\u{2603}").is_ok());
}

#[test]
fn schemes() {
    for scheme in utils::EQUIVALENT_SCHEMES {
        assert!(validate::scheme::<UriSpec>(scheme).is_ok(), "{scheme:?}");
    }
    for scheme in ["svn+ssh", "a", "x-1.2"] {
        assert!(validate::scheme::<UriSpec>(scheme).is_ok(), "{scheme:?}");
    }
    for scheme in ["", "1http", "+a", "ht tp", "h\u{E9}"] {
        assert!(validate::scheme::<UriSpec>(scheme).is_err(), "{scheme:?}");
        assert!(validate::scheme::<IriSpec>(scheme).is_err(), "{scheme:?}");
    }
}

#[test]
fn absent_components_are_valid() {
    let uri = UriReference::from_components(None, None, None, None, None);
    assert!(uri.scheme_is_valid());
    assert!(uri.authority_is_valid());
    assert!(uri.path_is_valid());
    assert!(uri.query_is_valid());
    assert!(uri.fragment_is_valid());
    assert!(uri.is_valid());
}

#[test]
fn one_invalid_component_invalidates_all() {
    let valid = ["http", "example.com", "/a", "b=c", "d"];
    for invalid_at in 0..valid.len() {
        let mut components = valid.map(Some);
        components[invalid_at] = Some("<>");
        let [scheme, authority, path, query, fragment] = components;
        let uri = UriReference::from_components(scheme, authority, path, query, fragment);
        assert!(!uri.is_valid(), "{uri}");
    }
    let [scheme, authority, path, query, fragment] = valid.map(Some);
    assert!(UriReference::from_components(scheme, authority, path, query, fragment).is_valid());
}

#[test]
fn path_rules() {
    let cases: &[(&str, bool, bool)] = &[
        // (reference, is_valid, is_valid_with_path_rules)
        ("http://example.com/a", true, true),
        ("http://example.com", true, true),
        ("mailto:user@example.com", true, true),
        ("a:b", true, true),
        ("./a:b", true, true),
        ("/a:b", true, true),
    ];
    for &(s, valid, valid_with_rules) in cases {
        let uri = UriReference::from_string(s).expect("parsable");
        assert_eq!(uri.is_valid(), valid, "{s:?}");
        assert_eq!(uri.is_valid_with_path_rules(), valid_with_rules, "{s:?}");
    }

    // Paths which cannot be written in a reference string.
    let rootless_with_authority =
        UriReference::from_components(Some("http"), Some("example.com"), Some("a"), None, None);
    assert!(rootless_with_authority.is_valid());
    assert!(!rootless_with_authority.is_valid_with_path_rules());

    let double_slash_without_authority =
        UriReference::from_components(Some("foo"), None, Some("//bar"), None, None);
    assert!(double_slash_without_authority.is_valid());
    assert!(!double_slash_without_authority.is_valid_with_path_rules());

    let colon_in_first_segment =
        UriReference::from_components(None, None, Some("a:b/c"), None, None);
    assert!(colon_in_first_segment.is_valid());
    assert!(!colon_in_first_segment.is_valid_with_path_rules());
}

#[test]
fn absolute() {
    for s in ["http://example.com", "urn:isbn:0451450523", "foo:?q"] {
        let uri = UriReference::from_string(s).expect("parsable");
        assert!(uri.is_absolute(), "{s:?}");
    }
    for s in ["//example.com", "/a", "http://example.com/#f", "http://[::1:]/"] {
        let uri = UriReference::from_string(s).expect("parsable");
        assert!(!uri.is_absolute(), "{s:?}");
    }
    // Empty fragment is present in IRIs.
    let iri = IriReference::from_string("http://example.com/#").expect("parsable");
    assert!(!iri.is_absolute());
}

#[test]
fn iri_private_use_only_in_query() {
    let in_query = IriReference::from_components(
        Some("http"),
        Some("example.com"),
        Some("/"),
        Some("\u{E000}"),
        None,
    );
    assert!(in_query.is_valid());
    let in_path =
        IriReference::from_components(Some("http"), Some("example.com"), Some("/\u{E000}"), None, None);
    assert!(!in_path.is_valid());

    // Parsing percent-encodes the path, so the parsed reference is valid.
    let parsed = IriReference::from_string("http://example.com/\u{E000}").expect("parsable");
    assert_eq!(parsed.path(), Some("/%EE%80%80"));
    assert!(parsed.is_valid());
}
