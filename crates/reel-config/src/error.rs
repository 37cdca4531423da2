//! Error types for reel configuration.

use std::{io, path::PathBuf};

use thiserror::Error;
use toml::{de, ser};

/// Errors that can occur when loading or processing configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to read a configuration file.
    #[error("failed to read config file {path}: {source}")]
    ReadFile {
        /// Path to the file that could not be read.
        path: PathBuf,
        /// Underlying I/O error.
        source: io::Error,
    },

    /// Failed to parse TOML configuration.
    #[error("failed to parse config file {path}: {source}")]
    ParseToml {
        /// Path to the file that could not be parsed.
        path: PathBuf,
        /// Underlying TOML parse error.
        source: de::Error,
    },

    /// A stemmer language name is not recognized.
    #[error("{path}: unsupported stemmer language '{language}'")]
    InvalidLanguage {
        /// Config file that named the language.
        path: PathBuf,
        /// The unrecognized name.
        language: String,
    },

    /// An IDF formula name is not recognized.
    #[error("{path}: unsupported idf formula '{formula}' (expected \"standard\" or \"smooth\")")]
    InvalidIdfFormula {
        /// Config file that named the formula.
        path: PathBuf,
        /// The unrecognized name.
        formula: String,
    },

    /// Failed to determine home directory.
    #[error("could not determine home directory")]
    NoHomeDirectory,

    /// Failed to render settings as TOML.
    #[error("failed to serialize settings: {0}")]
    Serialize(#[from] ser::Error),
}
