//! Text analysis pipeline for feature extraction.
//!
//! Tokens pass through up to five stages:
//! 1. `SimpleTokenizer` - splits on whitespace and punctuation
//! 2. `LowerCaser` - converts tokens to lowercase
//! 3. `RemoveLongFilter` - removes tokens longer than 40 bytes
//! 4. `StopWordFilter` - drops stopwords (optional)
//! 5. `Stemmer` - applies language-specific stemming (optional)
//!
//! Stopwords are matched before stemming, against the lowercased surface form.

use tantivy::tokenizer::{
    Language, LowerCaser, RemoveLongFilter, SimpleTokenizer, Stemmer, StopWordFilter,
    TextAnalyzer,
};

use crate::{FeatureError, Stopwords};

/// Maximum token length in bytes before filtering.
const MAX_TOKEN_LENGTH: usize = 40;

/// Parses a stemmer language string into a Tantivy `Language`.
///
/// Supports lowercase language names matching Tantivy's `Language` enum.
/// Returns an error if the language is not recognized.
pub fn parse_language(name: &str) -> Result<Language, FeatureError> {
    match name.to_lowercase().as_str() {
        "arabic" => Ok(Language::Arabic),
        "danish" => Ok(Language::Danish),
        "dutch" => Ok(Language::Dutch),
        "english" => Ok(Language::English),
        "finnish" => Ok(Language::Finnish),
        "french" => Ok(Language::French),
        "german" => Ok(Language::German),
        "greek" => Ok(Language::Greek),
        "hungarian" => Ok(Language::Hungarian),
        "italian" => Ok(Language::Italian),
        "norwegian" => Ok(Language::Norwegian),
        "portuguese" => Ok(Language::Portuguese),
        "romanian" => Ok(Language::Romanian),
        "russian" => Ok(Language::Russian),
        "spanish" => Ok(Language::Spanish),
        "swedish" => Ok(Language::Swedish),
        "tamil" => Ok(Language::Tamil),
        "turkish" => Ok(Language::Turkish),
        other => Err(FeatureError::InvalidLanguage(other.to_string())),
    }
}

/// Builds the analyzer for the given optional stages.
///
/// `stemmer` enables stage 5 for that language; `stopwords` enables stage 4.
pub fn build_analyzer(stemmer: Option<Language>, stopwords: Option<&Stopwords>) -> TextAnalyzer {
    let base = TextAnalyzer::builder(SimpleTokenizer::default())
        .filter(LowerCaser)
        .filter(RemoveLongFilter::limit(MAX_TOKEN_LENGTH));

    match (stemmer, stopwords) {
        (Some(language), Some(words)) => base
            .filter(stop_word_filter(words))
            .filter(Stemmer::new(language))
            .build(),
        (Some(language), None) => base.filter(Stemmer::new(language)).build(),
        (None, Some(words)) => base.filter(stop_word_filter(words)).build(),
        (None, None) => base.build(),
    }
}

/// Converts a stopword list into Tantivy's filter.
fn stop_word_filter(words: &Stopwords) -> StopWordFilter {
    StopWordFilter::remove(words.iter().map(str::to_owned))
}

#[cfg(test)]
mod test {
    use std::iter;

    use tantivy::tokenizer::TokenStream;

    use super::*;

    /// Runs the analyzer and collects token texts.
    fn tokens(analyzer: &mut TextAnalyzer, text: &str) -> Vec<String> {
        let mut stream = analyzer.token_stream(text);
        iter::from_fn(|| stream.next().map(|t| t.text.clone())).collect()
    }

    #[test]
    fn parse_case_insensitive() {
        assert_eq!(parse_language("English").unwrap(), Language::English);
        assert_eq!(parse_language("FRENCH").unwrap(), Language::French);
        assert_eq!(parse_language("GeRmAn").unwrap(), Language::German);
    }

    #[test]
    fn parse_invalid_language() {
        let err = parse_language("klingon").unwrap_err();
        assert!(err.to_string().contains("klingon"));
    }

    #[test]
    fn plain_pipeline_lowercases_and_splits() {
        let mut analyzer = build_analyzer(None, None);
        assert_eq!(
            tokens(&mut analyzer, "Star Wars: Episode IV, A New-Hope!"),
            vec!["star", "wars", "episode", "iv", "a", "new", "hope"]
        );
    }

    #[test]
    fn stems_english() {
        let mut analyzer = build_analyzer(Some(Language::English), None);
        assert_eq!(
            tokens(&mut analyzer, "handling running wars"),
            vec!["handl", "run", "war"]
        );
    }

    #[test]
    fn removes_stopwords_before_stemming() {
        let words = Stopwords::from_words(["the", "of"]);
        let mut analyzer = build_analyzer(Some(Language::English), Some(&words));
        assert_eq!(
            tokens(&mut analyzer, "The Return of the Jedi"),
            vec!["return", "jedi"]
        );
    }

    #[test]
    fn stopwords_without_stemming() {
        let words = Stopwords::from_words(["the"]);
        let mut analyzer = build_analyzer(None, Some(&words));
        assert_eq!(tokens(&mut analyzer, "The Matrix"), vec!["matrix"]);
    }

    #[test]
    fn removes_long_tokens() {
        let mut analyzer = build_analyzer(None, None);
        let long_token = "a".repeat(50);
        let text = format!("short {long_token} word");
        assert_eq!(tokens(&mut analyzer, &text), vec!["short", "word"]);
    }

    #[test]
    fn empty_and_punctuation_only_input() {
        let mut analyzer = build_analyzer(Some(Language::English), None);
        assert!(tokens(&mut analyzer, "").is_empty());
        assert!(tokens(&mut analyzer, " ... !!! --- ").is_empty());
    }
}
