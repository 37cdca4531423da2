//! End-to-end retrieval over extracted features.

// Integration tests live outside cfg(test) by design
#![allow(clippy::tests_outside_test_module)]

use std::collections::HashMap;

use reel_features::{FeatureExtractor, SetOfWords};
use reel_retrieval::{BooleanRetriever, Operator};

/// A handful of catalog entries keyed by IMDb id.
const MOVIES: &[(&str, &str)] = &[
    (
        "tt0076759",
        "Star Wars. Princess Leia is captured and held hostage by the evil Imperial forces.",
    ),
    (
        "tt0080684",
        "The Empire Strikes Back. The epic saga continues as Luke Skywalker trains with Yoda.",
    ),
    (
        "tt0092007",
        "Star Trek IV: The Voyage Home. The crew travels back in time to save the whales.",
    ),
    (
        "tt0120915",
        "Star Wars: Episode I - The Phantom Menace. Two Jedi escape a hostile blockade.",
    ),
];

/// Extracts sets of words for every movie.
fn features(extractor: &FeatureExtractor) -> HashMap<String, SetOfWords> {
    MOVIES
        .iter()
        .map(|(id, text)| ((*id).to_string(), extractor.set_of_words(text)))
        .collect()
}

#[test]
fn star_wars_and_query() {
    let extractor = FeatureExtractor::default();
    let retriever = BooleanRetriever::new(features(&extractor)).unwrap();

    let query = extractor.set_of_words("star wars");
    assert_eq!(retriever.query_and(&query), vec!["tt0076759", "tt0120915"]);
    assert_eq!(retriever.doc_count(), 4);
}

#[test]
fn stemming_matches_inflected_forms() {
    let extractor = FeatureExtractor::default();
    let retriever = BooleanRetriever::new(features(&extractor)).unwrap();

    // "travel" and "travels" share a stem.
    let query = extractor.set_of_words("travel");
    assert_eq!(retriever.query_and(&query), vec!["tt0092007"]);
}

#[test]
fn or_query_over_features() {
    let extractor = FeatureExtractor::default();
    let retriever = BooleanRetriever::new(features(&extractor)).unwrap();

    let query = extractor.set_of_words("yoda whales");
    assert_eq!(
        retriever.query(Operator::Or, &query),
        vec!["tt0080684", "tt0092007"]
    );
}

#[test]
fn stopword_only_query_is_empty() {
    let extractor = FeatureExtractor::from_language_name("english", true, true).unwrap();
    let retriever = BooleanRetriever::new(features(&extractor)).unwrap();

    let query = extractor.set_of_words("the and of");
    assert!(query.is_empty());
    assert!(retriever.query_and(&query).is_empty());
    assert!(retriever.query_or(&query).is_empty());
}
