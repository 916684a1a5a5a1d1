//! Property tests for matching and composition
//!
//! Patterns are generated from a small segment alphabet so that literal
//! collisions, parameters and wildcards all show up often.

use ctx_router::*;
use proptest::prelude::*;

fn literal() -> impl Strategy<Value = String> {
    prop_oneof![Just("a"), Just("b"), Just("users"), Just("x1")].prop_map(String::from)
}

fn literal_path() -> impl Strategy<Value = String> {
    prop::collection::vec(literal(), 0..6).prop_map(|segs| format!("/{}", segs.join("/")))
}

fn pattern_segment() -> impl Strategy<Value = String> {
    prop_oneof![
        3 => literal(),
        1 => Just(":p".to_string()),
        1 => Just("*".to_string()),
    ]
}

fn pattern() -> impl Strategy<Value = String> {
    prop::collection::vec(pattern_segment(), 0..5).prop_map(|segs| format!("/{}", segs.join("/")))
}

proptest! {
    #[test]
    fn prop_literal_pattern_matches_itself(p in literal_path()) {
        prop_assert!(matches(&p, &p));
        let longer = format!("{}/extra", p);
        prop_assert!(!matches(&longer, &p));
    }

    #[test]
    fn prop_catch_all_matches_everything(path in literal_path()) {
        prop_assert!(matches(&path, "*"));
    }

    #[test]
    fn prop_compose_without_ancestors_normalizes(p in pattern()) {
        let expected = collapse_separators(&format!("/{}", strip_trailing_wildcard(&p))).into_owned();
        prop_assert_eq!(compose::<&str>(&[], &p), expected);
    }

    #[test]
    fn prop_compose_literal_chain_concatenates(
        a in prop::collection::vec(literal(), 1..4),
        b in prop::collection::vec(literal(), 1..4),
        c in prop::collection::vec(literal(), 1..4),
    ) {
        let expected = format!("/{}", [a.clone(), b.clone(), c.clone()].concat().join("/"));
        let (a, b, c) = (a.join("/"), b.join("/"), c.join("/"));

        prop_assert_eq!(compose(&[a.as_str(), b.as_str()], &c), expected.as_str());

        let slashed = compose(&[format!("/{}/", a), format!("//{}", b)], &format!("/{}", c));
        prop_assert_eq!(slashed, expected.as_str());
    }

    #[test]
    fn prop_compose_ignores_trailing_wildcards(
        a in prop::collection::vec(literal(), 1..4),
        b in prop::collection::vec(literal(), 1..4),
    ) {
        let expected = format!("/{}", [a.clone(), b.clone()].concat().join("/"));
        let (a, b) = (a.join("/"), b.join("/"));

        prop_assert_eq!(compose(&[format!("/{}/*", a)], &format!("/{}/*", b)), expected.as_str());
        prop_assert_eq!(compose(&["*".to_string(), format!("{}/*", a)], &b), expected.as_str());
    }

    #[test]
    fn prop_chain_agrees_with_compose(a in pattern(), b in pattern(), c in pattern()) {
        let chain = PatternChain::root().descend(&a).descend(&b).descend(&c);
        prop_assert_eq!(compose(&[a.as_str(), b.as_str()], &c), chain.full_pattern());
    }

    #[test]
    fn prop_param_captures_aligned_segment(
        prefix in prop::collection::vec(literal(), 0..4),
        value in literal(),
        suffix in prop::collection::vec(literal(), 0..4),
    ) {
        let mut pattern_segs = prefix.clone();
        pattern_segs.push(":x".to_string());
        pattern_segs.extend(suffix.iter().cloned());

        let mut path_segs = prefix.clone();
        path_segs.push(value.clone());
        path_segs.extend(suffix.iter().cloned());

        let pattern = format!("/{}", pattern_segs.join("/"));
        let path = format!("/{}", path_segs.join("/"));

        prop_assert!(matches(&path, &pattern));
        let params = extract_params(&path, &pattern);
        prop_assert_eq!(params.get("x"), Some(segments(&path)[prefix.len()]));
    }

    #[test]
    fn prop_validator_rejects_wildcard_then_param(
        prefix in prop::collection::vec(literal(), 0..3),
        suffix in prop::collection::vec(literal(), 0..3),
    ) {
        let mut segs = prefix;
        segs.push("*".to_string());
        segs.push(":id".to_string());
        segs.extend(suffix);
        let pattern = format!("/{}", segs.join("/"));

        prop_assert!(validate_pattern(&pattern).is_err());
        prop_assert!(!matches("/a/b/c", &pattern));
    }

    #[test]
    fn prop_extraction_agrees_with_matching(path in literal_path(), p in pattern()) {
        let checked = check_match(&path, &p);
        let params = check_params(&path, &p).value;
        if !checked.value {
            prop_assert!(params.is_empty());
        } else if Pattern::parse(&p).param_names().next().is_some() {
            prop_assert!(!params.is_empty());
        }
    }

    #[test]
    fn prop_selection_is_first_match(path in literal_path(), siblings in prop::collection::vec(pattern(), 0..5)) {
        let expected = siblings.iter().position(|p| matches(&path, p));
        prop_assert_eq!(select(&path, siblings.as_slice()).value, expected);
    }
}
