//! Stopword lists for term filtering.
//!
//! Stopwords come from the Stopwords ISO collection shipped with the `stop-words` crate.
//! Only languages that also have a Snowball stemmer are mapped, so a single language
//! setting drives both stages of the pipeline.

use std::collections::HashSet;

use stop_words::LANGUAGE;
use tantivy::tokenizer::Language;
use tracing::warn;

/// A stopword filter for a single language.
///
/// Uses a `HashSet` for O(1) lookup performance. All words are stored in
/// lowercase for case-insensitive matching.
#[derive(Debug, Clone)]
pub struct Stopwords {
    /// Lowercased stopwords.
    words: HashSet<String>,
}

impl Default for Stopwords {
    fn default() -> Self {
        Self::new()
    }
}

impl Stopwords {
    /// Creates a stopword filter with the English list.
    pub fn new() -> Self {
        Self::from_words(stop_words::get(LANGUAGE::English).iter().copied())
    }

    /// Creates a stopword filter matching the stemmer language.
    ///
    /// Languages without a bundled list produce an empty filter.
    pub fn for_language(language: Language) -> Self {
        let Some(list) = stop_words_language(language) else {
            warn!(?language, "no stopword list for language, stopword removal disabled");
            return Self {
                words: HashSet::new(),
            };
        };
        Self::from_words(stop_words::get(list).iter().copied())
    }

    /// Creates a stopword filter from an explicit word list.
    pub fn from_words<'a, I>(words: I) -> Self
    where
        I: IntoIterator<Item = &'a str>,
    {
        Self {
            words: words.into_iter().map(str::to_lowercase).collect(),
        }
    }

    /// Checks if a term is a stopword.
    ///
    /// The check is case-insensitive.
    pub fn contains(&self, term: &str) -> bool {
        self.words.contains(&term.to_lowercase())
    }

    /// Iterates over the stored (lowercase) words in arbitrary order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.words.iter().map(String::as_str)
    }

    /// Returns the total number of stopwords.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Returns true if no stopwords are configured.
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

/// Maps a stemmer language onto the matching Stopwords ISO list.
fn stop_words_language(language: Language) -> Option<LANGUAGE> {
    match language {
        Language::English => Some(LANGUAGE::English),
        Language::French => Some(LANGUAGE::French),
        Language::German => Some(LANGUAGE::German),
        Language::Spanish => Some(LANGUAGE::Spanish),
        Language::Italian => Some(LANGUAGE::Italian),
        Language::Portuguese => Some(LANGUAGE::Portuguese),
        Language::Dutch => Some(LANGUAGE::Dutch),
        Language::Russian => Some(LANGUAGE::Russian),
        Language::Swedish => Some(LANGUAGE::Swedish),
        _ => None,
    }
}
