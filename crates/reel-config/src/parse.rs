//! Configuration file parsing.
//!
//! Parses individual `.reel.toml` files into intermediate `RawConfig` structures
//! that keep every field optional until merging.

use std::{fs, path::Path};

use serde::Deserialize;
use serde_with::{OneOrMany, serde_as};

use crate::ConfigError;

/// Raw configuration as parsed directly from a TOML file.
///
/// Mirrors the TOML schema exactly; absent sections and keys stay `None`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RawConfig {
    /// When true, stop discovery here and ignore parent and global configs.
    pub root: Option<bool>,
    /// `[corpus]` section.
    pub corpus: Option<RawCorpusSettings>,
    /// `[features]` section.
    pub features: Option<RawFeatureSettings>,
    /// `[report]` section.
    pub report: Option<RawReportSettings>,
}

/// Raw corpus settings.
#[serde_as]
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RawCorpusSettings {
    /// Path to the JSONL catalog, relative to the config file.
    pub path: Option<String>,
    /// Maximum records to load (0 = all).
    pub limit: Option<usize>,
    /// Movie fields forming each document. Accepts a single string or a list.
    #[serde_as(as = "Option<OneOrMany<_>>")]
    pub fields: Option<Vec<String>>,
}

/// Raw feature extraction settings.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RawFeatureSettings {
    /// Apply the stemmer.
    pub stemming: Option<bool>,
    /// Remove stopwords.
    pub stopwords: Option<bool>,
    /// Snowball language name.
    pub language: Option<String>,
    /// IDF formula name.
    pub idf: Option<String>,
}

/// Raw report settings.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RawReportSettings {
    /// Number of vocabulary entries to sample.
    pub vocabulary_samples: Option<usize>,
    /// Query to run.
    pub query: Option<String>,
}

/// Parses a configuration file from disk.
pub fn parse_config_file(path: &Path) -> Result<RawConfig, ConfigError> {
    let contents = fs::read_to_string(path).map_err(|source| ConfigError::ReadFile {
        path: path.to_path_buf(),
        source,
    })?;

    parse_config_str(&contents, path)
}

/// Parses configuration from a TOML string.
///
/// The `path` parameter is used for error reporting.
pub fn parse_config_str(contents: &str, path: &Path) -> Result<RawConfig, ConfigError> {
    toml::from_str(contents).map_err(|source| ConfigError::ParseToml {
        path: path.to_path_buf(),
        source,
    })
}

/// Checks if a config file has `root = true` set.
///
/// Returns false if the file cannot be read or parsed.
pub fn is_root_config(path: &Path) -> bool {
    let Ok(contents) = fs::read_to_string(path) else {
        return false;
    };
    let Ok(config) = toml::from_str::<RawConfig>(&contents) else {
        return false;
    };
    config.root == Some(true)
}
