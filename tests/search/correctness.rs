//! Ranking and prefix correctness on fixed vocabularies.

use crate::common::{assert_index_well_formed, assert_ranked, city_index, make_index, texts};
use prefixrank::Term;

#[test]
fn test_dog_example() {
    let index = make_index(&[("dog", 1.0), ("do", 5.0), ("dot", 3.0)]);

    assert_eq!(
        index.top_matches("d", 3),
        &[
            Term::new("do", 5.0),
            Term::new("dot", 3.0),
            Term::new("dog", 1.0),
        ]
    );
    assert_eq!(
        index.top_matches("do", 2),
        &[Term::new("do", 5.0), Term::new("dot", 3.0)]
    );
    assert!(index.top_matches("x", 1).is_empty());
}

#[test]
fn test_city_prefix_ranking() {
    let index = city_index();

    assert_eq!(
        texts(index.top_matches("new", 4)),
        vec!["new york", "new orleans", "newark", "newport news"]
    );
    assert_eq!(
        texts(index.top_matches("bo", 10)),
        vec!["boston", "boise", "boulder", "bozeman"]
    );
}

#[test]
fn test_prefix_with_space() {
    let index = city_index();
    assert_eq!(
        texts(index.top_matches("new ", 10)),
        vec!["new york", "new orleans", "new haven"]
    );
}

#[test]
fn test_equal_weights_keep_input_order() {
    let index = city_index();
    // newton and newcastle share a weight; newton comes first in the input
    let top = texts(index.top_matches("new", 10));
    let newton = top.iter().position(|t| *t == "newton").unwrap();
    let newcastle = top.iter().position(|t| *t == "newcastle").unwrap();
    assert_eq!(newcastle, newton + 1);
}

#[test]
fn test_every_result_starts_with_prefix() {
    let index = city_index();
    for prefix in ["", "n", "ne", "new", "new y", "b", "bo", "bou", "z"] {
        let matches = index.top_matches(prefix, 100);
        assert_ranked(matches);
        for term in matches {
            assert!(
                term.text.starts_with(prefix),
                "{:?} returned for prefix {:?}",
                term.text,
                prefix
            );
        }
    }
}

#[test]
fn test_full_term_is_its_own_prefix() {
    let index = city_index();
    assert_eq!(texts(index.top_matches("boise", 5)), vec!["boise"]);
}

#[test]
fn test_index_well_formed() {
    assert_index_well_formed(&city_index());
}
