//! Differential testing: compare the prefix index against a brute-force scan.
//!
//! `LinearScan` filters the whole vocabulary on every query and sorts the
//! survivors, which is too slow to ship but too simple to get wrong. If the
//! two disagree, the scan is right.

use super::{unicode_vocab_strategy, vocab_strategy};
use proptest::prelude::*;
use prefixrank::{Autocomplete, LinearScan, PrefixIndex, MAX_PREFIX};

/// Prefixes up to a few characters past `MAX_PREFIX`, over the vocab alphabet.
fn query_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("[abc]{0,13}").unwrap()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(500))]

    /// Within the indexed length, the index is exactly the scan.
    #[test]
    fn diff_top_matches_short_prefix(
        (terms, weights) in vocab_strategy(),
        prefix in query_strategy(),
        k in 0usize..60,
    ) {
        prop_assume!(prefix.chars().count() <= MAX_PREFIX);

        let index = PrefixIndex::build(&terms, &weights).unwrap();
        let scan = LinearScan::build(&terms, &weights).unwrap();

        let expected = scan.top_matches(&prefix, k);
        prop_assert_eq!(
            index.top_matches(&prefix, k),
            expected.as_slice(),
            "index differs from scan for prefix {:?}, k={}",
            prefix,
            k
        );
    }

    /// At any length, the exact lookup is the scan.
    #[test]
    fn diff_top_matches_exact(
        (terms, weights) in vocab_strategy(),
        prefix in query_strategy(),
        k in 0usize..60,
    ) {
        let index = PrefixIndex::build(&terms, &weights).unwrap();
        let scan = LinearScan::build(&terms, &weights).unwrap();

        let exact: Vec<_> = index.top_matches_exact(&prefix, k).into_iter().cloned().collect();
        prop_assert_eq!(exact, scan.top_matches(&prefix, k));
    }

    /// Past the indexed length, the loose lookup is the scan on the truncated prefix.
    #[test]
    fn diff_long_prefix_truncation(
        (terms, weights) in vocab_strategy(),
        prefix in query_strategy(),
        k in 1usize..60,
    ) {
        let index = PrefixIndex::build(&terms, &weights).unwrap();
        let scan = LinearScan::build(&terms, &weights).unwrap();
        let key: String = prefix.chars().take(MAX_PREFIX).collect();

        let expected = scan.top_matches(&key, k);
        prop_assert_eq!(
            index.top_matches(&prefix, k),
            expected.as_slice()
        );
    }

    /// Multi-byte vocabularies agree too, queried by their own prefixes.
    #[test]
    fn diff_unicode_prefixes((terms, weights) in unicode_vocab_strategy(), k in 1usize..40) {
        let index = PrefixIndex::build(&terms, &weights).unwrap();
        let scan = LinearScan::build(&terms, &weights).unwrap();

        for term in &terms {
            for len in 0..=term.chars().count().min(MAX_PREFIX) {
                let prefix: String = term.chars().take(len).collect();
                let expected = scan.top_matches(&prefix, k);
                prop_assert_eq!(
                    index.top_matches(&prefix, k),
                    expected.as_slice()
                );
            }
        }
    }
}
