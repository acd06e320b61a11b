//! Exhaustive property-based tests for path arithmetic.
//!
//! The resolver and relationship modules carry lighter always-on property
//! tests; this module runs many more cases over a wider alphabet, including
//! segments that differ only by case or share string prefixes.

use super::relationship::PathRelationship;
use super::resolver::{absolute_path, relative_path};
use super::segments::{SegmentPath, PARENT_SEGMENT};
use proptest::prelude::*;

// Short segments from a small alphabet so that shared prefixes are common
fn segment_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        "[a-bA-B]{1,3}",
        "[a-z0-9_-]{1,12}",
        Just("dir.with.dots".to_string()),
        Just("...".to_string()),
    ]
}

fn absolute_path_strategy() -> impl Strategy<Value = SegmentPath> {
    prop::collection::vec(segment_strategy(), 0..8).prop_map(|parts| {
        parts
            .iter()
            .fold(SegmentPath::root(), |path, part| path.append(part))
    })
}

// Absolute strings with ".", ".." and doubled separators, fed through the parser
#[cfg(unix)]
fn parsed_path_strategy() -> impl Strategy<Value = SegmentPath> {
    let part = prop_oneof![
        4 => segment_strategy(),
        2 => Just(PARENT_SEGMENT.to_string()),
        1 => Just(".".to_string()),
        1 => Just(String::new()),
    ];
    prop::collection::vec(part, 0..10).prop_map(|parts| {
        SegmentPath::parse_absolute(&format!("/{}", parts.join("/"))).unwrap()
    })
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 10000,
        max_shrink_iters: 10000,
        .. ProptestConfig::default()
    })]

    // relative_path(p, p) == "."
    #[test]
    fn identity(path in absolute_path_strategy()) {
        prop_assert_eq!(relative_path(&path, &path).unwrap(), ".");
    }

    // absolute_path(base, relative_path(base, target)) == target
    #[test]
    fn round_trip(base in absolute_path_strategy(), target in absolute_path_strategy()) {
        let relative = relative_path(&base, &target).unwrap();
        prop_assert_eq!(absolute_path(&base, &relative).unwrap(), target);
    }

    // The relative path is no longer than climbing to the root and back down
    #[test]
    fn relative_path_is_shortest(base in absolute_path_strategy(), target in absolute_path_strategy()) {
        let relative = relative_path(&base, &target).unwrap();
        let components = SegmentPath::parse_relative(&relative).segment_count();
        let shared = base.matching_first_segments(&target);
        prop_assert_eq!(
            components,
            base.segment_count() + target.segment_count() - 2 * shared
        );
        prop_assert!(components <= base.segment_count() + target.segment_count());
    }

    // All ".." components precede all descent components
    #[test]
    fn climbs_precede_descents(base in absolute_path_strategy(), target in absolute_path_strategy()) {
        let relative = relative_path(&base, &target).unwrap();
        let parsed = SegmentPath::parse_relative(&relative);
        let climbs = parsed.segments().take_while(|s| *s == PARENT_SEGMENT).count();
        prop_assert!(parsed.segments().skip(climbs).all(|s| s != PARENT_SEGMENT));
        prop_assert_eq!(climbs, base.segment_count() - base.matching_first_segments(&target));
    }

    // More ".." than base segments always fails
    #[test]
    fn no_escape(base in absolute_path_strategy(), extra in 1..5usize, tail in segment_strategy()) {
        let mut parts = vec![PARENT_SEGMENT.to_string(); base.segment_count() + extra];
        parts.push(tail);
        let result = absolute_path(&base, &parts.join("/"));
        prop_assert!(result.unwrap_err().is_invalid_argument());
    }

    // Resolution never mutates the base and is deterministic
    #[test]
    fn resolution_is_pure(base in absolute_path_strategy(), target in absolute_path_strategy()) {
        let before = base.clone();
        let relative = relative_path(&base, &target).unwrap();
        let first = absolute_path(&base, &relative).unwrap();
        let second = absolute_path(&base, &relative).unwrap();
        prop_assert_eq!(&base, &before);
        prop_assert_eq!(first, second);
    }

    // Same paths, and only same paths, produce the identity
    #[test]
    fn identity_iff_same(p1 in absolute_path_strategy(), p2 in absolute_path_strategy()) {
        let same = PathRelationship::between(&p1, &p2) == PathRelationship::Same;
        prop_assert_eq!(relative_path(&p1, &p2).unwrap() == ".", same);
    }

    // Parsed paths never keep a ".." and still round trip
    #[test]
    #[cfg(unix)]
    fn round_trip_parsed(base in parsed_path_strategy(), target in parsed_path_strategy()) {
        prop_assert!(base.segments().all(|s| s != PARENT_SEGMENT));
        let relative = relative_path(&base, &target).unwrap();
        prop_assert_eq!(absolute_path(&base, &relative).unwrap(), target);
    }

    // A parsed base cannot be climbed above
    #[test]
    #[cfg(unix)]
    fn no_escape_parsed(base in parsed_path_strategy(), extra in 1..4usize) {
        let climbs = vec![PARENT_SEGMENT; base.segment_count() + extra].join("/");
        prop_assert!(absolute_path(&base, &climbs).unwrap_err().is_invalid_argument());
    }
}
