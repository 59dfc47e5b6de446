// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for building and querying the prefix index.
//!
//! Arbitrary vocabularies, arbitrary prefixes (emoji, combining marks, NUL),
//! arbitrary `k`. Nothing may panic, and every answer must respect the
//! bucket invariants and agree with a brute-force scan.

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use prefixrank::{Autocomplete, LinearScan, PrefixIndex};

#[derive(Arbitrary, Debug)]
struct Input {
    entries: Vec<(String, i32)>,
    prefix: String,
    k: u8,
    max_prefix: u8,
}

fuzz_target!(|input: Input| {
    let entries = &input.entries[..input.entries.len().min(256)];
    let terms: Vec<&str> = entries.iter().map(|(t, _)| t.as_str()).collect();
    let weights: Vec<f64> = entries.iter().map(|&(_, w)| f64::from(w)).collect();
    let k = usize::from(input.k);
    let max_prefix = usize::from(input.max_prefix % 16);

    let mut index = PrefixIndex::with_max_prefix(max_prefix);
    index.rebuild(&terms, &weights).expect("columns have equal length");
    let scan = LinearScan::build(&terms, &weights).expect("columns have equal length");

    // INVARIANT 1: Results bounded by k
    let loose = index.top_matches(&input.prefix, k);
    assert!(loose.len() <= k);

    // INVARIANT 2: Results start with the truncated prefix, ranked
    let key: String = input.prefix.chars().take(max_prefix).collect();
    for term in loose {
        assert!(term.text.starts_with(&key));
    }
    for pair in loose.windows(2) {
        assert!(pair[0].weight >= pair[1].weight);
    }

    // INVARIANT 3: Exact lookup agrees with the scan
    let exact: Vec<_> = index
        .top_matches_exact(&input.prefix, k)
        .into_iter()
        .cloned()
        .collect();
    assert_eq!(exact, scan.top_matches(&input.prefix, k));

    // INVARIANT 4: Size estimate is stable
    assert_eq!(index.size_in_bytes(), index.size_in_bytes());
});
