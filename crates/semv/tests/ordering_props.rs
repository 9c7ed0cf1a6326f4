//! Property-based tests for version ordering and ranges

use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

use proptest::prelude::*;
use semv::{parse_compound_range, parse_strict, Range, Version};

fn identifier() -> impl Strategy<Value = String> {
    prop_oneof!["0|[1-9][0-9]{0,2}", "[a-z][a-z0-9-]{0,4}"]
}

prop_compose! {
    fn canonical()(
        major in 0u64..50,
        minor in 0u64..50,
        patch in 0u64..50,
        pre in prop::collection::vec(identifier(), 0..3),
        meta in prop::collection::vec("[a-zA-Z0-9]{1,4}", 0..2),
    ) -> String {
        let mut text = format!("{}.{}.{}", major, minor, patch);
        if !pre.is_empty() {
            text.push('-');
            text.push_str(&pre.join("."));
        }
        if !meta.is_empty() {
            text.push('+');
            text.push_str(&meta.join("."));
        }
        text
    }
}

fn version() -> impl Strategy<Value = Version> {
    canonical().prop_map(|s| Version::parse(&s).unwrap())
}

fn hash_of(version: &Version) -> u64 {
    let mut hasher = DefaultHasher::new();
    version.hash(&mut hasher);
    hasher.finish()
}

proptest! {
    #[test]
    fn test_canonical_strings_round_trip(text in canonical()) {
        let parsed = Version::parse(&text).unwrap();
        prop_assert_eq!(parsed.to_string(), text.clone());
        prop_assert_eq!(parse_strict(&text).unwrap().to_string(), text);
    }

    #[test]
    fn test_ordering_is_antisymmetric(a in version(), b in version()) {
        prop_assert_eq!(a.cmp(&b), b.cmp(&a).reverse());
        prop_assert_eq!(a == b, a.cmp(&b).is_eq());
    }

    #[test]
    fn test_ordering_is_transitive(a in version(), b in version(), c in version()) {
        if a <= b && b <= c {
            prop_assert!(a <= c);
        }
        if a < b && b < c {
            prop_assert!(a < c);
        }
    }

    #[test]
    fn test_equal_versions_hash_equally(a in version(), b in version()) {
        if a == b {
            prop_assert_eq!(hash_of(&a), hash_of(&b));
        }
        let stripped = a.clone().with_metadata("").unwrap();
        prop_assert_eq!(hash_of(&a), hash_of(&stripped));
    }

    #[test]
    fn test_range_agrees_with_bounds(lo in version(), hi in version(), v in version()) {
        let range = Range::at_least_below(lo.clone(), hi.clone());
        prop_assert_eq!(range.satisfied_by(&v), lo <= v && v < hi);

        let parsed = parse_compound_range(&format!(">={} <{}", lo, hi)).unwrap();
        prop_assert_eq!(parsed.satisfied_by(&v), range.satisfied_by(&v));
    }

    #[test]
    fn test_caret_and_tilde_contain_their_base(v in version()) {
        prop_assert!(Range::caret(v.clone()).satisfied_by(&v));
        prop_assert!(Range::tilde(v.clone()).satisfied_by(&v));
        prop_assert!(!Range::caret(v.clone()).satisfied_by(&v.increment_major()));
        prop_assert!(!Range::tilde(v.clone()).satisfied_by(&v.increment_minor()));
    }
}
