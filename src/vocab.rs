//! Vocabulary loading.
//!
//! Turns a file into the `(terms, weights)` columns the index is built from.
//! Two formats are accepted, picked by extension:
//!
//! **Tab-separated** (anything but `.json`): an optional first line holding
//! just the number of entries, then one `weight<TAB>term` per line. Leading
//! whitespace before the weight is ignored; the term is everything after
//! the first tab, spaces included.
//!
//! ```text
//! 3
//!     5.0	do
//!     3.0	dot
//!     1.0	dog
//! ```
//!
//! **JSON** (`.json`): an array of `{"text": ..., "weight": ...}` objects.

use std::fs;
use std::path::Path;

use tracing::debug;

use crate::error::{IndexError, VocabError};
use crate::index::PrefixIndex;
use crate::types::Term;

/// Parallel term and weight columns, in file order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Vocabulary {
    pub terms: Vec<String>,
    pub weights: Vec<f64>,
}

impl Vocabulary {
    pub fn len(&self) -> usize {
        self.terms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    pub fn push(&mut self, text: impl Into<String>, weight: f64) {
        self.terms.push(text.into());
        self.weights.push(weight);
    }

    /// Index this vocabulary with the default prefix length.
    pub fn to_index(&self) -> Result<PrefixIndex, IndexError> {
        PrefixIndex::build(&self.terms, &self.weights)
    }
}

impl FromIterator<Term> for Vocabulary {
    fn from_iter<I: IntoIterator<Item = Term>>(iter: I) -> Self {
        let mut vocab = Vocabulary::default();
        for term in iter {
            vocab.push(term.text, term.weight);
        }
        vocab
    }
}

/// Read and parse a vocabulary file.
pub fn load(path: &Path) -> Result<Vocabulary, VocabError> {
    let raw = fs::read_to_string(path).map_err(|source| VocabError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let is_json = path
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));
    let vocab = if is_json {
        parse_json(&raw)?
    } else {
        parse_tsv(&raw)?
    };

    debug!(path = %path.display(), terms = vocab.len(), json = is_json, "loaded vocabulary");
    Ok(vocab)
}

/// Parse the tab-separated format.
pub fn parse_tsv(input: &str) -> Result<Vocabulary, VocabError> {
    let mut vocab = Vocabulary::default();
    let mut declared: Option<usize> = None;
    let mut seen_content = false;

    for (i, raw_line) in input.lines().enumerate() {
        let line_no = i + 1;
        let line = raw_line.trim_end_matches('\r');
        if line.trim().is_empty() {
            continue;
        }

        // A bare count is only a header if it comes first
        if !seen_content && !line.contains('\t') {
            if let Ok(count) = line.trim().parse::<usize>() {
                declared = Some(count);
                seen_content = true;
                continue;
            }
        }
        seen_content = true;

        let (weight, text) =
            line.trim_start()
                .split_once('\t')
                .ok_or_else(|| VocabError::MalformedLine {
                    line: line_no,
                    content: line.to_string(),
                })?;

        let weight = parse_weight(weight.trim(), line_no)?;
        vocab.push(text, weight);
    }

    if let Some(declared) = declared {
        if declared != vocab.len() {
            return Err(VocabError::CountMismatch {
                declared,
                found: vocab.len(),
            });
        }
    }

    Ok(vocab)
}

/// Parse the JSON format.
pub fn parse_json(input: &str) -> Result<Vocabulary, VocabError> {
    let terms: Vec<Term> = serde_json::from_str(input)?;
    Ok(terms.into_iter().collect())
}

fn parse_weight(value: &str, line: usize) -> Result<f64, VocabError> {
    match value.parse::<f64>() {
        Ok(weight) if weight.is_finite() => Ok(weight),
        _ => Err(VocabError::InvalidWeight {
            line,
            value: value.to_string(),
        }),
    }
}
