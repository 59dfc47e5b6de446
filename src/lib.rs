//! Weighted prefix completion with precomputed per-prefix rankings.
//!
//! Given a vocabulary of `(term, weight)` pairs, answer "the `k` heaviest
//! terms starting with this prefix" in time that doesn't grow with the
//! vocabulary. The index pays for this up front: each term is stored once
//! per prefix of itself (up to [`MAX_PREFIX`] characters) and every prefix
//! bucket is ranked at build time.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐     ┌──────────────┐     ┌──────────────┐
//! │  vocab.rs   │────▶│  index.rs    │────▶│  shared.rs   │
//! │ (load, TSV, │     │ (PrefixIndex:│     │ (SharedIndex:│
//! │   JSON)     │     │ build, query)│     │ build + swap)│
//! └─────────────┘     └──────────────┘     └──────────────┘
//!                            │
//!                            ▼
//!        ┌───────────────────────────────────────┐
//!        │ contracts.rs (debug invariant checks) │
//!        │ complete.rs  (Autocomplete, oracle)   │
//!        └───────────────────────────────────────┘
//! ```
//!
//! # Usage
//!
//! ```
//! use prefixrank::PrefixIndex;
//!
//! let index = PrefixIndex::build(&["dog", "do", "dot"], &[1.0, 5.0, 3.0]).unwrap();
//! let top: Vec<&str> = index.top_matches("d", 2).iter().map(|t| t.text()).collect();
//! assert_eq!(top, ["do", "dot"]);
//! ```

pub mod complete;
pub mod contracts;
mod error;
mod index;
mod shared;
pub mod testing;
mod types;
mod utils;
pub mod vocab;

pub use complete::{Autocomplete, LinearScan};
pub use error::{IndexError, VocabError};
pub use index::PrefixIndex;
pub use shared::SharedIndex;
pub use types::{Term, BYTES_PER_CHAR, BYTES_PER_WEIGHT, MAX_PREFIX};
pub use utils::{char_len, prefix_key};
pub use vocab::Vocabulary;
