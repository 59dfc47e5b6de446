//! Shared test utilities and fixtures.

#![allow(dead_code)]

use prefixrank::{PrefixIndex, Term};

// Re-export canonical test utilities from prefixrank::testing
pub use prefixrank::testing::{make_index, make_oracle, texts};

// ============================================================================
// FIXTURES
// ============================================================================

/// Small city vocabulary with repeated prefixes and tied weights.
pub const CITIES: &[(&str, f64)] = &[
    ("new york", 8_336_817.0),
    ("newark", 311_549.0),
    ("new orleans", 383_997.0),
    ("newport news", 186_247.0),
    ("new haven", 134_023.0),
    ("boston", 675_647.0),
    ("boise", 235_684.0),
    ("boulder", 108_250.0),
    ("bozeman", 53_293.0),
    ("newton", 88_923.0),
    ("newburgh", 28_856.0),
    ("newcastle", 88_923.0),
];

pub fn city_index() -> PrefixIndex {
    make_index(CITIES)
}

// ============================================================================
// ASSERTIONS
// ============================================================================

/// Assert that every bucket satisfies the prefix, ranking and length invariants.
pub fn assert_index_well_formed(index: &PrefixIndex) {
    for (key, bucket) in index.buckets() {
        assert!(
            key.chars().count() <= index.max_prefix(),
            "INVARIANT VIOLATED: key {:?} longer than max_prefix",
            key
        );
        for term in bucket {
            assert!(
                term.text.starts_with(key),
                "INVARIANT VIOLATED: {:?} in bucket {:?}",
                term.text,
                key
            );
        }
        assert_ranked(bucket);
    }
}

/// Assert weights never increase along `terms`.
pub fn assert_ranked(terms: &[Term]) {
    for pair in terms.windows(2) {
        assert!(
            pair[0].weight >= pair[1].weight,
            "INVARIANT VIOLATED: {} ranked above {}",
            pair[0].weight,
            pair[1].weight
        );
    }
}
