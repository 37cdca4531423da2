//! Feature extraction for reel.
//!
//! Turns free text into normalized terms and derives the classic bag-of-words
//! statistics used by the retrieval experiments:
//!
//! - **Bag of words**: term occurrence counts per document
//! - **Set of words**: the distinct vocabulary of a document
//! - **DF / IDF**: corpus document frequency and inverse document frequency
//! - **TF-IDF**: per-document term weights
//!
//! # Example
//!
//! ```
//! use reel_features::{FeatureExtractor, SetOfWords};
//!
//! let extractor = FeatureExtractor::default();
//! let docs = ["Star Wars", "Star Trek", "War and Peace"];
//! let sets: Vec<SetOfWords> = docs.iter().map(|d| extractor.set_of_words(d)).collect();
//!
//! let idf = extractor.inverse_document_frequency(&sets);
//! let weights = extractor.tfidf(&extractor.bag_of_words(docs[0]), &idf);
//! assert_eq!(weights["star"], (3.0_f64 / 2.0).ln());
//! ```

#![warn(missing_docs)]

mod analyzer;
mod error;
mod extract;
mod stats;
mod stopwords;
mod vocabulary;

pub use analyzer::{build_analyzer, parse_language};
pub use error::FeatureError;
pub use extract::{FeatureConfig, FeatureExtractor};
pub use stats::{
    BagOfWords, DocumentFrequency, IdfFormula, InverseDocumentFrequency, SetOfWords, TfIdfVector,
    document_frequency, idf_weight, inverse_document_frequency, tfidf,
};
pub use stopwords::Stopwords;
pub use tantivy::tokenizer::Language;
pub use vocabulary::{Vocabulary, VocabularyEntry};
