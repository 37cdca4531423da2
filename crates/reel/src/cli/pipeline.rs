//! Corpus-wide feature extraction shared by the corpus commands.

use std::cmp::Ordering;

use indicatif::{ProgressBar, ProgressStyle};
use reel_corpus::{MovieCollection, TextField};
use reel_features::{
    BagOfWords, FeatureExtractor, IdfFormula, SetOfWords, TfIdfVector, Vocabulary,
};
use reel_retrieval::{BooleanRetriever, RetrievalError};
use tracing::debug;

/// Progress bar template for feature extraction.
const PROGRESS_TEMPLATE: &str =
    "{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} movies ({percent}%)";

/// Bag-of-words and set-of-words features for every movie, in load order.
pub struct CorpusFeatures {
    /// Term counts per movie id.
    bags: Vec<(String, BagOfWords)>,
    /// Distinct terms per movie id.
    sets: Vec<(String, SetOfWords)>,
}

impl CorpusFeatures {
    /// Extracts features from the selected fields of every movie.
    ///
    /// The progress bar advances once per movie and is cleared when done.
    pub fn extract(
        collection: &MovieCollection,
        extractor: &FeatureExtractor,
        fields: &[TextField],
        progress: &ProgressBar,
    ) -> Self {
        let bags: Vec<(String, BagOfWords)> = collection
            .movies()
            .iter()
            .map(|movie| {
                let bag = extractor.bag_of_words(&movie.text(fields));
                progress.inc(1);
                (movie.imdb_id.clone(), bag)
            })
            .collect();
        progress.finish_and_clear();

        // A set of words is the key set of the matching bag.
        let sets = bags
            .iter()
            .map(|(id, bag)| (id.clone(), bag.keys().cloned().collect()))
            .collect();

        debug!(movies = bags.len(), "extracted corpus features");
        Self { bags, sets }
    }

    /// Term counts per movie.
    pub fn bags(&self) -> &[(String, BagOfWords)] {
        &self.bags
    }

    /// Distinct terms per movie.
    pub fn sets(&self) -> &[(String, SetOfWords)] {
        &self.sets
    }

    /// Term counts of one movie.
    pub fn bag(&self, id: &str) -> Option<&BagOfWords> {
        self.bags.iter().find(|(i, _)| i == id).map(|(_, bag)| bag)
    }

    /// DF and IDF for the whole corpus.
    pub fn vocabulary(&self, formula: IdfFormula) -> Vocabulary {
        Vocabulary::build(self.sets.iter().map(|(_, set)| set), formula)
    }

    /// Builds the boolean retriever over every movie's set of words.
    pub fn retriever(&self) -> Result<BooleanRetriever, RetrievalError> {
        BooleanRetriever::new(self.sets.iter().map(|(id, set)| (id.as_str(), set)))
    }
}

/// A progress bar over `len` movies, or a hidden one when `visible` is false.
pub fn progress_bar(len: usize, visible: bool) -> ProgressBar {
    if !visible {
        return ProgressBar::hidden();
    }
    let bar = ProgressBar::new(len as u64);
    let style = ProgressStyle::with_template(PROGRESS_TEMPLATE)
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("#>-");
    bar.set_style(style);
    bar
}

/// The `n` heaviest terms of a TF-IDF vector, weight descending then term ascending.
pub fn ranked_terms(vector: &TfIdfVector, n: usize) -> Vec<(&str, f64)> {
    let mut terms: Vec<(&str, f64)> = vector.iter().map(|(t, &w)| (t.as_str(), w)).collect();
    terms.sort_by(|a, b| match b.1.total_cmp(&a.1) {
        Ordering::Equal => a.0.cmp(b.0),
        other => other,
    });
    terms.truncate(n);
    terms
}

#[cfg(test)]
mod test {
    use reel_corpus::Movie;

    use super::*;

    /// A movie with the given id and title only.
    fn movie(id: &str, title: &str) -> Movie {
        Movie {
            imdb_id: id.into(),
            title: title.into(),
            ..Movie::default()
        }
    }

    /// Three short titles.
    fn collection() -> MovieCollection {
        MovieCollection::new([
            movie("tt0076759", "Star Wars"),
            movie("tt0079945", "Star Trek"),
            movie("tt0081505", "The Shining"),
        ])
    }

    /// Features over the title field with default extraction.
    fn features() -> CorpusFeatures {
        CorpusFeatures::extract(
            &collection(),
            &FeatureExtractor::default(),
            &[TextField::Title],
            &ProgressBar::hidden(),
        )
    }

    #[test]
    fn sets_follow_bags() {
        let features = features();
        assert_eq!(features.bags().len(), 3);
        for ((bag_id, bag), (set_id, set)) in features.bags().iter().zip(features.sets()) {
            assert_eq!(bag_id, set_id);
            assert_eq!(bag.len(), set.len());
            assert!(bag.keys().all(|term| set.contains(term)));
        }
    }

    #[test]
    fn vocabulary_and_retriever() {
        let features = features();
        let vocabulary = features.vocabulary(IdfFormula::Standard);
        assert_eq!(vocabulary.documents(), 3);
        assert_eq!(vocabulary.get("star").unwrap().df, 2);

        let retriever = features.retriever().unwrap();
        assert_eq!(retriever.doc_count(), 3);
        assert_eq!(retriever.query_and(["star"]), vec!["tt0076759", "tt0079945"]);
    }

    #[test]
    fn bag_lookup() {
        let features = features();
        assert_eq!(features.bag("tt0081505").unwrap().get("shine"), Some(&1));
        assert!(features.bag("tt0000000").is_none());
    }

    #[test]
    fn ranking_breaks_ties_by_term() {
        let vector: TfIdfVector = [("wars", 1.0), ("star", 0.5), ("alpha", 1.0), ("zulu", 0.0)]
            .into_iter()
            .map(|(t, w)| (t.to_string(), w))
            .collect();
        assert_eq!(
            ranked_terms(&vector, 3),
            vec![("alpha", 1.0), ("wars", 1.0), ("star", 0.5)]
        );
        assert!(ranked_terms(&vector, 0).is_empty());
    }
}
