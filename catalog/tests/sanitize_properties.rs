//! Property tests for identifier sanitization.

use catalog_ontology::sanitize::{is_sanitized, sanitize, FORBIDDEN};
use proptest::prelude::*;

proptest! {
    #[test]
    fn sanitizing_twice_changes_nothing(label in ".*") {
        let once = sanitize(&label);
        prop_assert_eq!(sanitize(&once), once);
    }

    #[test]
    fn output_never_holds_forbidden_characters(label in ".*") {
        prop_assert!(is_sanitized(&sanitize(&label)));
    }

    #[test]
    fn length_in_characters_is_preserved(label in ".*") {
        prop_assert_eq!(sanitize(&label).chars().count(), label.chars().count());
    }

    #[test]
    fn only_forbidden_characters_change(label in "[a-zA-Z0-9 ,.%&()'-]{0,40}") {
        for (before, after) in label.chars().zip(sanitize(&label).chars()) {
            if FORBIDDEN.contains(&before) {
                prop_assert_eq!(after, '_');
            } else {
                prop_assert_eq!(after, before);
            }
        }
    }

    #[test]
    fn deterministic(label in ".*") {
        prop_assert_eq!(sanitize(&label), sanitize(&label));
    }
}
