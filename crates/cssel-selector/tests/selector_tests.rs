//! Integration tests for compound selector building and validation.

use cssel_selector::{
    FragmentKind, Selector, SelectorError, Stringify, attribute, class, element, from_kind, id,
    pseudo_class, pseudo_element,
};
use quickcheck::TestResult;
use quickcheck_macros::quickcheck;

const KINDS: [FragmentKind; 6] = [
    FragmentKind::Element,
    FragmentKind::Id,
    FragmentKind::Class,
    FragmentKind::Attribute,
    FragmentKind::PseudoClass,
    FragmentKind::PseudoElement,
];

/// Turn arbitrary bytes into a sequence of kinds that is valid by construction:
/// sorted by rank, with element/id/pseudo-element kept at most once.
fn valid_kinds(seed: &[u8]) -> Vec<FragmentKind> {
    let mut kinds: Vec<FragmentKind> = seed
        .iter()
        .map(|b| KINDS[usize::from(*b) % KINDS.len()])
        .collect();
    kinds.sort();
    kinds.dedup_by(|a, b| a == b && a.is_unique());
    kinds
}

fn build(kinds: &[FragmentKind]) -> Option<Selector> {
    let (first, rest) = kinds.split_first()?;
    let mut selector = from_kind(*first, "f0");
    for (i, kind) in rest.iter().enumerate() {
        let _ = selector.append(*kind, format!("f{}", i + 1)).ok()?;
    }
    Some(selector)
}

// ========== facade ==========

#[test]
fn test_facade_seeds_one_fragment() {
    assert_eq!(element("div").stringify(), "div");
    assert_eq!(id("main").stringify(), "#main");
    assert_eq!(class("btn").stringify(), ".btn");
    assert_eq!(attribute("href").stringify(), "[href]");
    assert_eq!(pseudo_class("hover").stringify(), ":hover");
    assert_eq!(pseudo_element("before").stringify(), "::before");
    assert_eq!(id("main").len(), 1);
}

#[test]
fn test_stringify_is_repeatable() {
    let selector = element("p").class("lead").unwrap();
    assert_eq!(selector.stringify(), selector.stringify());
    assert_eq!(selector.to_string(), selector.stringify());
}

// ========== scenarios ==========

#[test]
fn test_id_with_two_classes() {
    let selector = id("main")
        .class("container")
        .unwrap()
        .class("editable")
        .unwrap();
    assert_eq!(selector.stringify(), "#main.container.editable");
}

#[test]
fn test_element_attribute_pseudo_class() {
    let selector = element("a")
        .attribute(r#"href$=".png""#)
        .unwrap()
        .pseudo_class("focus")
        .unwrap();
    assert_eq!(selector.stringify(), r#"a[href$=".png"]:focus"#);
}

#[test]
fn test_full_compound_in_rank_order() {
    let selector = element("div")
        .id("main")
        .and_then(|s| s.class("a"))
        .and_then(|s| s.class("b"))
        .and_then(|s| s.attribute("data-x"))
        .and_then(|s| s.pseudo_class("hover"))
        .and_then(|s| s.pseudo_element("after"))
        .unwrap();
    assert_eq!(selector.stringify(), "div#main.a.b[data-x]:hover::after");
    assert_eq!(selector.last_kind(), Some(FragmentKind::PseudoElement));
}

#[test]
fn test_text_is_not_escaped() {
    let selector = class("a b").attribute("x=\"]\"").unwrap();
    assert_eq!(selector.stringify(), ".a b[x=\"]\"]");
}

// ========== order ==========

#[test]
fn test_class_after_pseudo_class_is_order_error() {
    let err = pseudo_class("hover").class("x").unwrap_err();
    assert_eq!(
        err,
        SelectorError::Order {
            kind: FragmentKind::Class,
            after: FragmentKind::PseudoClass,
        }
    );
}

#[test]
fn test_element_after_class_is_order_error() {
    assert!(matches!(
        class("x").element("div"),
        Err(SelectorError::Order { .. })
    ));
}

#[test]
fn test_pseudo_class_after_pseudo_element_is_order_error() {
    assert!(matches!(
        pseudo_element("before").pseudo_class("hover"),
        Err(SelectorError::Order {
            kind: FragmentKind::PseudoClass,
            after: FragmentKind::PseudoElement,
        })
    ));
}

#[test]
fn test_equal_rank_is_allowed() {
    assert!(class("a").class("b").is_ok());
    assert!(attribute("x").attribute("y").is_ok());
    assert!(pseudo_class("hover").pseudo_class("focus").is_ok());
}

#[test]
fn test_order_only_compares_last_fragment() {
    // Skipping ranks is fine; only going backwards is not.
    let selector = element("a").pseudo_class("visited").unwrap();
    assert_eq!(selector.stringify(), "a:visited");
}

// ========== uniqueness ==========

#[test]
fn test_second_id_is_duplicate_error() {
    let err = id("a").id("b").unwrap_err();
    assert_eq!(
        err,
        SelectorError::DuplicatePart {
            kind: FragmentKind::Id
        }
    );
}

#[test]
fn test_second_element_is_duplicate_error() {
    assert_eq!(
        element("a").element("b").unwrap_err(),
        SelectorError::DuplicatePart {
            kind: FragmentKind::Element
        }
    );
}

#[test]
fn test_second_pseudo_element_is_duplicate_error() {
    assert_eq!(
        pseudo_element("before").pseudo_element("after").unwrap_err(),
        SelectorError::DuplicatePart {
            kind: FragmentKind::PseudoElement
        }
    );
}

#[test]
fn test_duplicate_detected_across_intervening_fragments() {
    // The id is no longer last, but it is still a duplicate rather than an
    // ordering problem.
    let selector = element("a").id("x").unwrap().class("c").unwrap();
    assert_eq!(
        selector.id("y").unwrap_err(),
        SelectorError::DuplicatePart {
            kind: FragmentKind::Id
        }
    );
}

#[test]
fn test_append_in_place_keeps_selector_on_error() {
    let mut selector = id("a");
    assert!(selector.append(FragmentKind::Id, "b").is_err());
    assert!(selector.append(FragmentKind::Element, "div").is_err());
    assert_eq!(selector.stringify(), "#a");

    let _ = selector
        .append(FragmentKind::Class, "c")
        .unwrap()
        .append(FragmentKind::Class, "d")
        .unwrap();
    assert_eq!(selector.stringify(), "#a.c.d");
}

#[test]
fn test_error_messages_name_kinds() {
    assert_eq!(
        pseudo_class("hover").class("x").unwrap_err().to_string(),
        "a class fragment cannot follow a pseudo-class fragment"
    );
    assert_eq!(
        id("a").id("b").unwrap_err().to_string(),
        "selector may contain at most one id fragment"
    );
}

// ========== properties ==========

#[quickcheck]
fn prop_valid_sequence_renders_in_call_order(seed: Vec<u8>) -> TestResult {
    let kinds = valid_kinds(&seed);
    let Some(selector) = build(&kinds) else {
        return TestResult::discard();
    };

    let mut expected = String::new();
    for (i, kind) in kinds.iter().enumerate() {
        expected.push_str(kind.prefix());
        expected.push_str(&format!("f{i}"));
        expected.push_str(kind.suffix());
    }
    TestResult::from_bool(selector.stringify() == expected && selector.len() == kinds.len())
}

#[quickcheck]
fn prop_lower_rank_always_rejected(seed: Vec<u8>, pick: u8) -> TestResult {
    let kinds = valid_kinds(&seed);
    let Some(mut selector) = build(&kinds) else {
        return TestResult::discard();
    };
    let kind = KINDS[usize::from(pick) % 6];
    let last = selector.last_kind().unwrap_or(FragmentKind::Element);
    let before = selector.clone();

    let result = selector.append(kind, "new").map(|_| ());
    let duplicate = kind.is_unique() && kinds.contains(&kind);

    let ok = match result {
        Err(SelectorError::DuplicatePart { kind: k }) => duplicate && k == kind,
        Err(SelectorError::Order { kind: k, after }) => {
            !duplicate && k == kind && after == last && kind < last
        }
        Err(SelectorError::InvalidCombinator { .. }) => false,
        Ok(()) => !duplicate && kind >= last,
    };
    let unchanged = result.is_ok() || selector == before;
    TestResult::from_bool(ok && unchanged)
}
