//! Property-based tests for remote URL parsing.
//!
//! These tests use proptest to generate URLs and verify that the parser's
//! invariants hold for all of them.

#[cfg(test)]
mod proptest_tests {
    use crate::url::parse;
    use proptest::prelude::*;

    // Host names, owner segments, and repository names without separators.
    const HOST: &str = "h[a-zA-Z0-9-]{0,11}(\\.[a-zA-Z]{2,6}){1,2}";
    const SEGMENT: &str = "[a-zA-Z0-9_-]{1,12}";

    proptest! {
        /// Property: https://P/D/R.git parses to the lowercased triple
        #[test]
        fn https_with_directory(host in HOST, dir in SEGMENT, repo in SEGMENT) {
            let url = format!("https://{}/{}/{}.git", host, dir, repo);
            let c = parse(&url).unwrap();
            prop_assert_eq!(c.provider, host.to_lowercase());
            prop_assert_eq!(c.directory, dir.to_lowercase());
            prop_assert_eq!(c.repository, repo.to_lowercase());
        }

        /// Property: https://P/R.git has an empty directory
        #[test]
        fn https_without_directory(host in HOST, repo in SEGMENT) {
            let url = format!("https://{}/{}.git", host, repo);
            let c = parse(&url).unwrap();
            prop_assert_eq!(c.provider, host.to_lowercase());
            prop_assert_eq!(c.directory, "");
            prop_assert_eq!(c.repository, repo.to_lowercase());
        }

        /// Property: git@P:D/R.git and git@ssh.P:D/R.git agree
        #[test]
        fn ssh_with_and_without_prefix(host in HOST, dir in SEGMENT, repo in SEGMENT) {
            let plain = parse(&format!("git@{}:{}/{}.git", host, dir, repo)).unwrap();
            let prefixed = parse(&format!("git@ssh.{}:{}/{}.git", host, dir, repo)).unwrap();
            prop_assert_eq!(&plain, &prefixed);
            prop_assert_eq!(plain.provider, host.to_lowercase());
            prop_assert_eq!(plain.directory, dir.to_lowercase());
            prop_assert_eq!(plain.repository, repo.to_lowercase());
        }

        /// Property: HTTPS and SSH forms of the same remote agree
        #[test]
        fn https_and_ssh_agree(host in HOST, dir in SEGMENT, repo in SEGMENT) {
            let https = parse(&format!("https://{}/{}/{}.git", host, dir, repo)).unwrap();
            let ssh = parse(&format!("git@{}:{}/{}.git", host, dir, repo)).unwrap();
            prop_assert_eq!(https, ssh);
        }

        /// Property: without the .git suffix nothing parses
        #[test]
        fn missing_suffix_is_rejected(host in HOST, dir in SEGMENT, repo in SEGMENT) {
            let https = format!("https://{}/{}/{}", host, dir, repo);
            let ssh = format!("git@{}:{}/{}", host, dir, repo);
            prop_assert!(parse(&https).is_err());
            prop_assert!(parse(&ssh).is_err());
        }

        /// Property: successful parses always carry a provider and repository
        #[test]
        fn parsed_components_are_non_empty_and_lowercase(input in ".*") {
            if let Ok(c) = parse(&input) {
                prop_assert!(!c.provider.is_empty());
                prop_assert!(!c.repository.is_empty());
                prop_assert_eq!(&c.provider, &c.provider.to_lowercase());
                prop_assert_eq!(&c.directory, &c.directory.to_lowercase());
                prop_assert_eq!(&c.repository, &c.repository.to_lowercase());
            }
        }
    }
}
