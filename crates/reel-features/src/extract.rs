//! The feature extractor: text in, terms and term statistics out.

use std::fmt;

use tantivy::tokenizer::{Language, TextAnalyzer, TokenStream};

use crate::{
    FeatureError, Stopwords,
    analyzer::{build_analyzer, parse_language},
    stats::{
        self, BagOfWords, DocumentFrequency, IdfFormula, InverseDocumentFrequency, SetOfWords,
        TfIdfVector,
    },
};

/// Pipeline options, fixed when the extractor is built.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FeatureConfig {
    /// Apply the Snowball stemmer for `language` to every token.
    pub stemming: bool,
    /// Drop tokens found in the stopword list for `language`.
    pub stopwords: bool,
    /// Language for stemming and stopwords.
    pub language: Language,
    /// IDF formula used by [`FeatureExtractor::inverse_document_frequency`].
    pub idf: IdfFormula,
}

impl Default for FeatureConfig {
    fn default() -> Self {
        Self {
            stemming: true,
            stopwords: false,
            language: Language::English,
            idf: IdfFormula::Standard,
        }
    }
}

/// Tokenizes text into normalized terms and computes term statistics.
///
/// The extractor keeps no state derived from the texts it processes, so one
/// instance can serve any number of corpora.
#[derive(Clone)]
pub struct FeatureExtractor {
    /// Options the pipeline was built from.
    config: FeatureConfig,
    /// Prepared token pipeline, cloned for each call.
    analyzer: TextAnalyzer,
}

impl fmt::Debug for FeatureExtractor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FeatureExtractor")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

impl Default for FeatureExtractor {
    fn default() -> Self {
        Self::new(FeatureConfig::default())
    }
}

impl FeatureExtractor {
    /// Builds an extractor for the given options.
    pub fn new(config: FeatureConfig) -> Self {
        let stemmer = config.stemming.then_some(config.language);
        let stopwords = config
            .stopwords
            .then(|| Stopwords::for_language(config.language));
        let analyzer = build_analyzer(stemmer, stopwords.as_ref());
        Self { config, analyzer }
    }

    /// Builds an extractor from a language name, using the standard IDF formula.
    pub fn from_language_name(
        language: &str,
        stemming: bool,
        stopwords: bool,
    ) -> Result<Self, FeatureError> {
        let language = parse_language(language)?;
        Ok(Self::new(FeatureConfig {
            stemming,
            stopwords,
            language,
            idf: IdfFormula::Standard,
        }))
    }

    /// Returns the options this extractor was built with.
    pub fn config(&self) -> &FeatureConfig {
        &self.config
    }

    /// Splits text into normalized terms, in order of appearance.
    ///
    /// Empty or punctuation-only input produces no terms.
    pub fn tokenize(&self, text: &str) -> Vec<String> {
        let mut analyzer = self.analyzer.clone();
        let mut stream = analyzer.token_stream(text);
        let mut terms = Vec::new();
        while let Some(token) = stream.next() {
            terms.push(token.text.clone());
        }
        terms
    }

    /// Counts term occurrences in `text`.
    pub fn bag_of_words(&self, text: &str) -> BagOfWords {
        let mut bag = BagOfWords::new();
        for term in self.tokenize(text) {
            *bag.entry(term).or_insert(0) += 1;
        }
        bag
    }

    /// Collects the distinct terms of `text`.
    pub fn set_of_words(&self, text: &str) -> SetOfWords {
        self.tokenize(text).into_iter().collect()
    }

    /// See [`stats::document_frequency`].
    pub fn document_frequency<'a, I>(&self, sets: I) -> DocumentFrequency
    where
        I: IntoIterator<Item = &'a SetOfWords>,
    {
        stats::document_frequency(sets)
    }

    /// IDF table for `sets` using the configured formula.
    pub fn inverse_document_frequency<'a, I>(&self, sets: I) -> InverseDocumentFrequency
    where
        I: IntoIterator<Item = &'a SetOfWords>,
    {
        stats::inverse_document_frequency(sets, self.config.idf)
    }

    /// See [`stats::tfidf`].
    pub fn tfidf(&self, bag: &BagOfWords, idf: &InverseDocumentFrequency) -> TfIdfVector {
        stats::tfidf(bag, idf)
    }
}
