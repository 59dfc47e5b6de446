//! Interchangeable completion strategies.
//!
//! [`PrefixIndex`] trades memory for constant-time lookups. [`LinearScan`]
//! keeps a single copy of each term and filters on every query: slow, but
//! simple enough to be obviously correct, which makes it the reference the
//! index is checked against.

use crate::error::IndexError;
use crate::index::PrefixIndex;
use crate::types::Term;

/// Anything that can answer "top `k` terms starting with `prefix`".
pub trait Autocomplete {
    /// Up to `k` matching terms, highest weight first, ties in input order.
    fn top_matches(&self, prefix: &str, k: usize) -> Vec<Term>;

    /// Estimated storage in bytes.
    fn size_in_bytes(&self) -> usize;
}

impl Autocomplete for PrefixIndex {
    fn top_matches(&self, prefix: &str, k: usize) -> Vec<Term> {
        PrefixIndex::top_matches(self, prefix, k).to_vec()
    }

    fn size_in_bytes(&self) -> usize {
        PrefixIndex::size_in_bytes(self)
    }
}

/// Brute-force completion over the raw term list.
///
/// O(n log n) per query. Unlike [`PrefixIndex`], prefixes of any length are
/// matched exactly.
#[derive(Debug, Clone, Default)]
pub struct LinearScan {
    terms: Vec<Term>,
}

impl LinearScan {
    pub fn build<S: AsRef<str>>(terms: &[S], weights: &[f64]) -> Result<Self, IndexError> {
        if terms.len() != weights.len() {
            return Err(IndexError::LengthMismatch {
                terms: terms.len(),
                weights: weights.len(),
            });
        }

        let terms = terms
            .iter()
            .zip(weights)
            .map(|(text, &weight)| Term::new(text.as_ref(), weight))
            .collect();
        Ok(Self { terms })
    }

    pub fn len(&self) -> usize {
        self.terms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }
}

impl Autocomplete for LinearScan {
    fn top_matches(&self, prefix: &str, k: usize) -> Vec<Term> {
        if k == 0 {
            return Vec::new();
        }

        let mut matches: Vec<Term> = self
            .terms
            .iter()
            .filter(|term| term.text.starts_with(prefix))
            .cloned()
            .collect();
        matches.sort_by(|a, b| b.weight.total_cmp(&a.weight));
        matches.truncate(k);
        matches
    }

    fn size_in_bytes(&self) -> usize {
        self.terms.iter().map(Term::cost_in_bytes).sum()
    }
}
