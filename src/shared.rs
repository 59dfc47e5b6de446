//! Build-then-swap handle for serving queries while the vocabulary changes.
//!
//! A [`PrefixIndex`] is never mutated while shared. Instead a fresh index is
//! built off to the side and swapped in under a write lock that is held only
//! for the pointer swap. Readers grab an `Arc` snapshot and query it without
//! holding any lock, so a reader that started before a swap finishes against
//! the old data, and nobody ever sees a half-built index.
//!
//! ```ignore
//! let shared = SharedIndex::new(PrefixIndex::build(&terms, &weights)?);
//!
//! // reader threads
//! let index = shared.snapshot();
//! let hits = index.top_matches("do", 5);
//!
//! // writer
//! shared.rebuild(&new_terms, &new_weights)?;
//! ```

use std::sync::Arc;

use parking_lot::RwLock;
use tracing::debug;

use crate::error::IndexError;
use crate::index::PrefixIndex;

#[derive(Debug, Default)]
pub struct SharedIndex {
    current: RwLock<Arc<PrefixIndex>>,
}

impl SharedIndex {
    pub fn new(index: PrefixIndex) -> Self {
        Self {
            current: RwLock::new(Arc::new(index)),
        }
    }

    /// The index as of now. Later swaps don't affect the returned snapshot.
    pub fn snapshot(&self) -> Arc<PrefixIndex> {
        Arc::clone(&*self.current.read())
    }

    /// Install `index`, returning the one it replaced.
    pub fn replace(&self, index: PrefixIndex) -> Arc<PrefixIndex> {
        let fresh = Arc::new(index);
        std::mem::replace(&mut *self.current.write(), fresh)
    }

    /// Build a new index with the current `max_prefix` and swap it in.
    ///
    /// The build runs without holding the lock. On error nothing is swapped.
    pub fn rebuild<S: AsRef<str>>(
        &self,
        terms: &[S],
        weights: &[f64],
    ) -> Result<Arc<PrefixIndex>, IndexError> {
        let max_prefix = self.current.read().max_prefix();
        let mut fresh = PrefixIndex::with_max_prefix(max_prefix);
        fresh.rebuild(terms, weights)?;

        let previous = self.replace(fresh);
        debug!(
            previous_terms = previous.term_count(),
            terms = terms.len(),
            "swapped prefix index"
        );
        Ok(previous)
    }
}
