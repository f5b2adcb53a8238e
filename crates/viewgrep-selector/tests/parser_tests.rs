//! Tests for selector-grammar parsing.

use viewgrep_selector::{SimpleSelector, parse};

/// Shorthand for building the expected selector in assertions.
fn selector(
    base_class: Option<&str>,
    class_names: &[&str],
    identifier: Option<&str>,
) -> SimpleSelector {
    SimpleSelector {
        base_class: base_class.map(str::to_string),
        class_names: class_names.iter().map(|s| (*s).to_string()).collect(),
        identifier: identifier.map(str::to_string),
    }
}

// ========== single attributes ==========

#[test]
fn test_parse_empty_input_is_one_wildcard() {
    let sequence = parse("");
    assert_eq!(sequence.selectors.len(), 1);
    assert_eq!(sequence.selectors[0], selector(None, &[], None));
    assert!(sequence.selectors[0].is_wildcard());
}

#[test]
fn test_parse_whitespace_only_is_one_wildcard() {
    let sequence = parse("   \t ");
    assert_eq!(sequence.selectors.len(), 1);
    assert!(sequence.selectors[0].is_wildcard());
}

#[test]
fn test_parse_type_token() {
    let sequence = parse("Foo");
    assert_eq!(sequence.selectors, vec![selector(Some("Foo"), &[], None)]);
}

#[test]
fn test_parse_class_token() {
    let sequence = parse(".fancy");
    assert_eq!(sequence.selectors, vec![selector(None, &["fancy"], None)]);
}

#[test]
fn test_parse_identifier_token() {
    let sequence = parse("#x");
    assert_eq!(sequence.selectors, vec![selector(None, &[], Some("x"))]);
}

// ========== compound flattening ==========

#[test]
fn test_parse_consecutive_classes() {
    let sequence = parse(".a.b");
    assert_eq!(sequence.selectors, vec![selector(None, &["a", "b"], None)]);
}

#[test]
fn test_parse_full_compound_flattens_to_one_selector() {
    // No whitespace, so all three attributes merge into a single selector.
    let sequence = parse("Foo.a#x");
    assert_eq!(
        sequence.selectors,
        vec![selector(Some("Foo"), &["a"], Some("x"))]
    );
}

#[test]
fn test_parse_identifier_before_class() {
    let sequence = parse("#id.cls");
    assert_eq!(
        sequence.selectors,
        vec![selector(None, &["cls"], Some("id"))]
    );
}

#[test]
fn test_parse_attribute_order_within_token_is_free() {
    let sequence = parse("Foo#x.a");
    assert_eq!(
        sequence.selectors,
        vec![selector(Some("Foo"), &["a"], Some("x"))]
    );
}

#[test]
fn test_parse_deduplicates_classes_within_token() {
    let sequence = parse(".a.b.a");
    assert_eq!(sequence.selectors, vec![selector(None, &["a", "b"], None)]);
}

#[test]
fn test_parse_later_identifier_wins() {
    let sequence = parse("#a#b");
    assert_eq!(sequence.selectors, vec![selector(None, &[], Some("b"))]);
}

#[test]
fn test_parse_empty_delimiter_runs_are_skipped() {
    // `..b` must not register an empty-string class name.
    let sequence = parse(".a..b");
    assert_eq!(sequence.selectors, vec![selector(None, &["a", "b"], None)]);
}

// ========== descendant chains ==========

#[test]
fn test_parse_whitespace_makes_a_chain() {
    let sequence = parse("Foo .a");
    assert_eq!(
        sequence.selectors,
        vec![selector(Some("Foo"), &[], None), selector(None, &["a"], None)]
    );
}

#[test]
fn test_parse_three_element_chain() {
    let sequence = parse("Panel .fancy #ok");
    assert_eq!(sequence.selectors.len(), 3);
    assert_eq!(sequence.selectors[0], selector(Some("Panel"), &[], None));
    assert_eq!(sequence.selectors[1], selector(None, &["fancy"], None));
    assert_eq!(sequence.selectors[2], selector(None, &[], Some("ok")));
}

#[test]
fn test_parse_shared_class_across_tokens_is_kept_per_element() {
    // Dedup applies within one token only; the two chain elements each
    // carry their own copy of the class name.
    let sequence = parse(".a .a");
    assert_eq!(
        sequence.selectors,
        vec![selector(None, &["a"], None), selector(None, &["a"], None)]
    );
}

// ========== malformed input ==========

#[test]
fn test_parse_lowercase_bare_token_contributes_nothing() {
    let sequence = parse("foo");
    assert_eq!(sequence.selectors.len(), 1);
    assert!(sequence.selectors[0].is_wildcard());
}

#[test]
fn test_parse_keeps_attributes_after_unrecognized_run() {
    // The lowercase head is skipped; whatever follows the delimiter stands.
    let sequence = parse("foo.bar");
    assert_eq!(sequence.selectors, vec![selector(None, &["bar"], None)]);
}

#[test]
fn test_parse_trailing_delimiter_is_harmless() {
    assert_eq!(
        parse("Foo.").selectors,
        vec![selector(Some("Foo"), &[], None)]
    );
    assert_eq!(parse("#").selectors, vec![selector(None, &[], None)]);
}

// ========== determinism ==========

#[test]
fn test_parse_is_idempotent() {
    for input in ["", "Foo", ".a.b", "#x", "Foo.a#x", "Panel .fancy #ok"] {
        assert_eq!(parse(input), parse(input), "input: {input:?}");
    }
}
