//! Error types for the reel-features crate.

use thiserror::Error;

/// Errors that can occur when configuring feature extraction.
///
/// Text processing itself never fails; these errors only arise while turning
/// user-supplied names into a pipeline configuration.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum FeatureError {
    /// Invalid stemmer language.
    #[error("unsupported stemmer language: {0}")]
    InvalidLanguage(String),

    /// Invalid IDF formula name.
    #[error("unsupported idf formula: {0} (expected \"standard\" or \"smooth\")")]
    InvalidIdfFormula(String),
}
