//! Property-based tests for vault path sandboxing and name validation.

#[cfg(test)]
mod proptest_tests {
    use crate::name::is_valid;
    use crate::sandbox::resolve;
    use proptest::prelude::*;
    use std::fs;
    use tempfile::TempDir;

    const SEGMENT: &str = "[a-z0-9_-]{1,8}";

    proptest! {
        /// Property: paths built from plain segments never escape
        #[test]
        fn plain_segments_stay_inside(segments in prop::collection::vec(SEGMENT, 0..5)) {
            let temp = TempDir::new().unwrap();
            let root = temp.path().join("Dev");
            fs::create_dir_all(&root).unwrap();

            let relative = segments.join("/");
            let resolved = resolve(&root, &relative).unwrap();
            prop_assert!(resolved.starts_with(fs::canonicalize(&root).unwrap()));
        }

        /// Property: climbing above the root always fails
        #[test]
        fn climbing_out_is_rejected(
            depth in 0usize..4,
            tail in prop::collection::vec(SEGMENT, 0..3),
        ) {
            let temp = TempDir::new().unwrap();
            let root = temp.path().join("Dev");
            fs::create_dir_all(&root).unwrap();

            // `depth` levels down, then one more `..` than that
            let down: Vec<String> = (0..depth).map(|i| format!("d{}", i)).collect();
            let up = vec!["..".to_string(); depth + 1];
            let relative = [down, up, vec!["outside".to_string()], tail].concat().join("/");

            prop_assert!(resolve(&root, &relative).is_err(), "accepted {}", relative);
        }

        /// Property: names made of the allowed alphabet are valid
        #[test]
        fn allowed_alphabet_is_valid(name in "[a-zA-Z0-9_-]{1,32}") {
            prop_assert!(is_valid(&name));
        }

        /// Property: any disallowed character invalidates a name
        #[test]
        fn disallowed_character_is_invalid(
            prefix in "[a-z]{1,4}",
            bad in "[ ./\\\\:*?]",
            suffix in "[a-z]{1,4}",
        ) {
            let name = format!("{}{}{}", prefix, bad, suffix);
            prop_assert!(!is_valid(&name));
        }
    }
}
