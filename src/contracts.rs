//! Runtime contracts for the prefix index.
//!
//! Debug-mode assertions that the bucket structure is what `index.rs`
//! promises. They panic on violation in debug builds and are not compiled
//! into release builds at all (the call site is `#[cfg(debug_assertions)]`).
//!
//! # INVARIANTS (DO NOT REMOVE THESE CHECKS)
//!
//! | Contract Function              | Property                                 |
//! |--------------------------------|------------------------------------------|
//! | `check_key_bounded`            | key has at most `max_prefix` characters  |
//! | `check_bucket_prefix`          | every term starts with its bucket key    |
//! | `check_bucket_ranked`          | weights never increase along a bucket    |
//! | `check_index_well_formed`      | all of the above, for every bucket       |

use crate::index::PrefixIndex;
use crate::types::Term;
use crate::utils::char_len;

/// Check that a bucket key fits within the indexed prefix length.
#[inline]
pub fn check_key_bounded(key: &str, max_prefix: usize) {
    debug_assert!(
        char_len(key) <= max_prefix,
        "Contract violation: key {:?} has {} chars, max_prefix is {}",
        key,
        char_len(key),
        max_prefix
    );
}

/// Check that every term in a bucket starts with the bucket's key.
#[inline]
pub fn check_bucket_prefix(key: &str, bucket: &[Term]) {
    for (i, term) in bucket.iter().enumerate() {
        debug_assert!(
            term.text.starts_with(key),
            "Contract violation: bucket {:?}[{}] holds {:?}",
            key,
            i,
            term.text
        );
    }
}

/// Check that a bucket is sorted by weight, highest first.
#[inline]
pub fn check_bucket_ranked(key: &str, bucket: &[Term]) {
    for (i, pair) in bucket.windows(2).enumerate() {
        debug_assert!(
            pair[0].weight.total_cmp(&pair[1].weight).is_ge(),
            "Contract violation: bucket {:?} not ranked at {}: {} < {}",
            key,
            i,
            pair[0].weight,
            pair[1].weight
        );
    }
}

/// Check every bucket of a built index.
pub fn check_index_well_formed(index: &PrefixIndex) {
    for (key, bucket) in index.buckets() {
        check_key_bounded(key, index.max_prefix());
        check_bucket_prefix(key, bucket);
        check_bucket_ranked(key, bucket);
    }
}
