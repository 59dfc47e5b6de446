//! Rebuilding and the size estimate.

use crate::common::{city_index, make_index, texts, CITIES};
use prefixrank::{PrefixIndex, SharedIndex};

#[test]
fn test_rebuild_forgets_previous_terms() {
    let mut index = city_index();
    index.rebuild(&["bread", "butter"], &[2.0, 1.0]).unwrap();

    assert!(index.top_matches("new", 10).is_empty());
    assert_eq!(texts(index.top_matches("b", 10)), vec!["bread", "butter"]);
    assert_eq!(index.term_count(), 2);
}

#[test]
fn test_size_grows_with_more_terms() {
    let mut index = PrefixIndex::build(&["cat"], &[1.0]).unwrap();
    let one = index.size_in_bytes();

    index.rebuild(&["cat", "dog"], &[1.0, 2.0]).unwrap();
    let two = index.size_in_bytes();

    assert!(two >= one, "{} < {}", two, one);
}

#[test]
fn test_size_is_deterministic() {
    let a = city_index();
    let b = city_index();
    assert_eq!(a.size_in_bytes(), b.size_in_bytes());
    assert_eq!(a.size_in_bytes(), a.size_in_bytes());
}

#[test]
fn test_size_counts_redundant_copies() {
    // "ab": 3 buckets x (8 + 2*2) + keys "", "a", "ab" (3 chars x 2)
    assert_eq!(make_index(&[("ab", 1.0)]).size_in_bytes(), 42);
    // "abcd": 5 buckets x (8 + 4*2) + 10 key chars x 2
    assert_eq!(make_index(&[("abcd", 1.0)]).size_in_bytes(), 100);
}

#[test]
fn test_shared_index_swap() {
    let shared = SharedIndex::new(city_index());
    let old = shared.snapshot();

    let (terms, weights): (Vec<&str>, Vec<f64>) =
        CITIES.iter().filter(|(t, _)| t.starts_with('b')).copied().unzip();
    let replaced = shared.rebuild(&terms, &weights).unwrap();

    assert_eq!(replaced.term_count(), CITIES.len());
    assert_eq!(old.top_matches("new", 1).len(), 1);
    assert!(shared.snapshot().top_matches("new", 1).is_empty());
    assert_eq!(shared.snapshot().top_matches("bo", 10).len(), 4);
}
