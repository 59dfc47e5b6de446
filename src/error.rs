//! Error types.
//!
//! Only index construction can fail. Queries never error: an unknown prefix
//! or an oversized `k` just yields fewer results.

use std::path::PathBuf;

use thiserror::Error;

/// Rejected index construction input.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum IndexError {
    /// One of the two input columns was absent.
    #[error("invalid argument: {which} is missing")]
    MissingInput { which: &'static str },

    /// Terms and weights don't line up one-to-one.
    #[error("invalid argument: {terms} terms but {weights} weights")]
    LengthMismatch { terms: usize, weights: usize },
}

/// Failure to turn a vocabulary file into `(terms, weights)`.
#[derive(Debug, Error)]
pub enum VocabError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("line {line}: expected `weight<TAB>term`, got {content:?}")]
    MalformedLine { line: usize, content: String },

    #[error("line {line}: weight {value:?} is not a finite number")]
    InvalidWeight { line: usize, value: String },

    #[error("header declares {declared} terms but {found} were read")]
    CountMismatch { declared: usize, found: usize },

    #[error("invalid JSON vocabulary: {0}")]
    Json(#[from] serde_json::Error),
}
