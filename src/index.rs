//! Prefix index construction and lookup.
//!
//! Every term is copied into one bucket per prefix of itself, up to
//! `max_prefix` characters, and each bucket is ranked once at build time.
//! A query is then one hash lookup plus a slice, independent of how large
//! the vocabulary is.
//!
//! ```text
//!  terms: dog(1) do(5) dot(3)
//!
//!  ""    → do(5) dot(3) dog(1)
//!  "d"   → do(5) dot(3) dog(1)
//!  "do"  → do(5) dot(3) dog(1)
//!  "dog" → dog(1)
//!  "dot" → dot(3)
//! ```
//!
//! # INVARIANTS (DO NOT VIOLATE)
//!
//! 1. **BUCKET_PREFIX**: every term in the bucket for `key` starts with `key`
//! 2. **BUCKET_RANKED**: every bucket is weight-descending
//! 3. **BUCKET_STABLE**: equal weights keep input order
//! 4. **KEY_BOUNDED**: no key is longer than `max_prefix` characters
//!
//! `contracts::check_index_well_formed` asserts all four in debug builds.

use std::collections::HashMap;
use std::sync::OnceLock;

#[cfg(feature = "parallel")]
use rayon::prelude::*;
use tracing::{debug, trace};

use crate::error::IndexError;
use crate::types::{Term, BYTES_PER_CHAR, MAX_PREFIX};
use crate::utils::{char_len, prefix_key, prefixes};

/// Weighted prefix-completion index.
///
/// Built once from `(terms, weights)`, then read-only. Queries take `&self`,
/// so a built index can be shared across threads as-is. To replace the
/// contents while readers are active, build a new index and swap it in
/// (see [`crate::SharedIndex`]).
#[derive(Debug, Clone)]
pub struct PrefixIndex {
    max_prefix: usize,
    buckets: HashMap<String, Vec<Term>>,
    term_count: usize,
    built: bool,
    /// Filled on first `size_in_bytes()` call, cleared by `rebuild`.
    size: OnceLock<usize>,
}

impl Default for PrefixIndex {
    fn default() -> Self {
        Self::new()
    }
}

impl PrefixIndex {
    /// An unbuilt index using the default [`MAX_PREFIX`].
    pub fn new() -> Self {
        Self::with_max_prefix(MAX_PREFIX)
    }

    /// An unbuilt index that buckets prefixes up to `max_prefix` characters.
    pub fn with_max_prefix(max_prefix: usize) -> Self {
        Self {
            max_prefix,
            buckets: HashMap::new(),
            term_count: 0,
            built: false,
            size: OnceLock::new(),
        }
    }

    /// Build an index from parallel term and weight columns.
    pub fn build<S: AsRef<str>>(terms: &[S], weights: &[f64]) -> Result<Self, IndexError> {
        let mut index = Self::new();
        index.rebuild(terms, weights)?;
        Ok(index)
    }

    /// Build from columns that may be absent.
    ///
    /// Fails with [`IndexError::MissingInput`] before doing any work if
    /// either column is `None`.
    pub fn from_parts<S: AsRef<str>>(
        terms: Option<&[S]>,
        weights: Option<&[f64]>,
    ) -> Result<Self, IndexError> {
        let terms = terms.ok_or(IndexError::MissingInput { which: "terms" })?;
        let weights = weights.ok_or(IndexError::MissingInput { which: "weights" })?;
        Self::build(terms, weights)
    }

    /// Discard the current contents and index `terms` instead.
    ///
    /// On error the index is left exactly as it was.
    pub fn rebuild<S: AsRef<str>>(
        &mut self,
        terms: &[S],
        weights: &[f64],
    ) -> Result<(), IndexError> {
        if terms.len() != weights.len() {
            return Err(IndexError::LengthMismatch {
                terms: terms.len(),
                weights: weights.len(),
            });
        }

        let mut buckets = bucket_terms(terms, weights, self.max_prefix);
        rank_buckets(&mut buckets);

        self.buckets = buckets;
        self.term_count = terms.len();
        self.built = true;
        self.size = OnceLock::new();

        #[cfg(debug_assertions)]
        crate::contracts::check_index_well_formed(self);

        debug!(
            terms = self.term_count,
            buckets = self.buckets.len(),
            max_prefix = self.max_prefix,
            "built prefix index"
        );
        Ok(())
    }

    /// Up to `k` terms starting with `prefix`, highest weight first.
    ///
    /// The returned slice borrows the index's own ranking, so it can't be
    /// used to reorder or edit it.
    ///
    /// Prefixes longer than `max_prefix` characters are looked up by their
    /// first `max_prefix` characters only. Results can then include terms
    /// that share just that leading part; use [`Self::top_matches_exact`]
    /// when that matters.
    pub fn top_matches(&self, prefix: &str, k: usize) -> &[Term] {
        if k == 0 {
            return &[];
        }

        let key = prefix_key(prefix, self.max_prefix);
        let matches: &[Term] = match self.buckets.get(key) {
            Some(ranked) => &ranked[..k.min(ranked.len())],
            None => &[],
        };
        trace!(prefix, key, k, found = matches.len(), "prefix query");
        matches
    }

    /// Like [`Self::top_matches`], but every result literally starts with
    /// the full `prefix`, however long it is.
    ///
    /// Long prefixes cost a scan of their truncated bucket.
    pub fn top_matches_exact(&self, prefix: &str, k: usize) -> Vec<&Term> {
        if k == 0 {
            return Vec::new();
        }

        let key = prefix_key(prefix, self.max_prefix);
        let Some(ranked) = self.buckets.get(key) else {
            return Vec::new();
        };

        if key.len() == prefix.len() {
            return ranked.iter().take(k).collect();
        }
        ranked
            .iter()
            .filter(|term| term.text.starts_with(prefix))
            .take(k)
            .collect()
    }

    /// Estimated storage of the bucket structure, in bytes.
    ///
    /// Every stored term copy is charged one weight plus its characters, and
    /// every key is charged its characters. Text repeated across buckets is
    /// counted once per bucket. Computed on first call and cached until the
    /// next rebuild.
    pub fn size_in_bytes(&self) -> usize {
        *self.size.get_or_init(|| {
            self.buckets
                .iter()
                .map(|(key, ranked)| {
                    BYTES_PER_CHAR * char_len(key)
                        + ranked.iter().map(Term::cost_in_bytes).sum::<usize>()
                })
                .sum()
        })
    }

    /// Longest prefix (in characters) that has its own bucket.
    pub fn max_prefix(&self) -> usize {
        self.max_prefix
    }

    /// Whether `build`/`rebuild` has succeeded at least once.
    pub fn is_built(&self) -> bool {
        self.built
    }

    /// Number of terms in the last build.
    pub fn term_count(&self) -> usize {
        self.term_count
    }

    pub fn bucket_count(&self) -> usize {
        self.buckets.len()
    }

    /// Every `(key, ranked terms)` bucket, in no particular order.
    pub fn buckets(&self) -> impl Iterator<Item = (&str, &[Term])> {
        self.buckets
            .iter()
            .map(|(key, ranked)| (key.as_str(), ranked.as_slice()))
    }
}

/// Append each term to the bucket of every prefix it has, in input order.
fn bucket_terms<S: AsRef<str>>(
    terms: &[S],
    weights: &[f64],
    max_prefix: usize,
) -> HashMap<String, Vec<Term>> {
    let mut buckets: HashMap<String, Vec<Term>> = HashMap::new();

    for (text, &weight) in terms.iter().zip(weights) {
        let text = text.as_ref();
        for key in prefixes(text, max_prefix) {
            let term = Term::new(text, weight);
            match buckets.get_mut(key) {
                Some(bucket) => bucket.push(term),
                None => {
                    buckets.insert(key.to_owned(), vec![term]);
                }
            }
        }
    }

    buckets
}

/// Sort every bucket by weight, highest first.
///
/// `sort_by` is stable, which is what keeps equal weights in input order.
fn rank_buckets(buckets: &mut HashMap<String, Vec<Term>>) {
    #[cfg(feature = "parallel")]
    {
        buckets
            .par_iter_mut()
            .for_each(|(_, bucket)| rank_bucket(bucket));
    }
    #[cfg(not(feature = "parallel"))]
    {
        for bucket in buckets.values_mut() {
            rank_bucket(bucket);
        }
    }
}

#[inline]
fn rank_bucket(bucket: &mut [Term]) {
    bucket.sort_by(|a, b| b.weight.total_cmp(&a.weight));
}
