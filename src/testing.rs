//! Test utilities shared across unit and integration tests.
//!
//! This module is always compiled but hidden from documentation.

#![doc(hidden)]

use crate::complete::LinearScan;
use crate::index::PrefixIndex;
use crate::types::Term;

/// Build an index from `(text, weight)` pairs.
pub fn make_index(entries: &[(&str, f64)]) -> PrefixIndex {
    let (terms, weights) = split(entries);
    PrefixIndex::build(&terms, &weights).expect("columns have equal length")
}

/// Build the brute-force reference over the same pairs.
pub fn make_oracle(entries: &[(&str, f64)]) -> LinearScan {
    let (terms, weights) = split(entries);
    LinearScan::build(&terms, &weights).expect("columns have equal length")
}

/// Texts of a result list, for compact assertions.
pub fn texts(terms: &[Term]) -> Vec<&str> {
    terms.iter().map(Term::text).collect()
}

fn split<'a>(entries: &[(&'a str, f64)]) -> (Vec<&'a str>, Vec<f64>) {
    entries.iter().copied().unzip()
}
