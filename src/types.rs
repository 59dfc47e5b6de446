// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Vocabulary entries and the constants the index is sized by.
//!
//! # Invariants
//!
//! - **Term**: immutable once built. Duplicate texts are legal; each copy is
//!   ranked on its own.
//! - **Prefix key**: at most `MAX_PREFIX` characters, counted as `char`s.
//!   A key is never split inside a multi-byte character.

use serde::{Deserialize, Serialize};

/// Maximum prefix length (in characters) that gets its own bucket.
///
/// Queries longer than this are answered from the `MAX_PREFIX`-character
/// bucket, see [`crate::PrefixIndex::top_matches`].
pub const MAX_PREFIX: usize = 10;

/// Size charged for one stored weight (an `f64`).
pub const BYTES_PER_WEIGHT: usize = 8;

/// Size charged for one stored character (one Unicode scalar value).
pub const BYTES_PER_CHAR: usize = 2;

/// A vocabulary entry: the completion text and its ranking weight.
///
/// Higher weights rank first. Weights are compared with [`f64::total_cmp`],
/// so every value has a defined position, NaN included.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Term {
    pub text: String,
    pub weight: f64,
}

impl Term {
    pub fn new(text: impl Into<String>, weight: f64) -> Self {
        Self {
            text: text.into(),
            weight,
        }
    }

    #[inline]
    pub fn text(&self) -> &str {
        &self.text
    }

    #[inline]
    pub fn weight(&self) -> f64 {
        self.weight
    }

    /// Estimated storage for this term: one weight plus its characters.
    #[inline]
    pub fn cost_in_bytes(&self) -> usize {
        BYTES_PER_WEIGHT + BYTES_PER_CHAR * self.text.chars().count()
    }
}

impl From<(&str, f64)> for Term {
    fn from((text, weight): (&str, f64)) -> Self {
        Term::new(text, weight)
    }
}
