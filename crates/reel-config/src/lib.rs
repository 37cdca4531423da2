//! Configuration system for reel.
//!
//! reel uses TOML configuration files named `.reel.toml`. Configuration is resolved by walking
//! up the directory tree from the current working directory, collecting any `.reel.toml` files
//! found, then loading `~/.reel.toml` as the global config with lowest precedence.

#![warn(missing_docs)]

mod discovery;
mod error;
mod merge;
mod parse;
mod resolve;
mod templates;
#[cfg(test)]
mod test_support;
mod validate;

use std::path::{Path, PathBuf};

pub use discovery::{CONFIG_FILENAME, discover_config_files, global_config_path, is_global_config};
pub use error::ConfigError;
pub use merge::{ParsedConfig, merge_configs};
pub use parse::{
    RawConfig, RawCorpusSettings, RawFeatureSettings, RawReportSettings, parse_config_file,
    parse_config_str,
};
use reel_corpus::TextField;
use reel_features::{FeatureConfig, FeatureError, IdfFormula, parse_language};
pub use resolve::resolve_corpus_path;
use serde::{Deserialize, Serialize};
pub use templates::{comment_template, global_template, local_template};
pub use validate::ConfigWarning;
use validate::validate_config;

/// Top-level merged configuration for reel.
///
/// The fully resolved result of merging every discovered `.reel.toml`.
#[derive(Debug, Clone, Default)]
pub struct Config {
    /// Where the movie catalog lives and which fields form a document.
    pub corpus: CorpusSettings,
    /// Tokenizer pipeline and IDF settings.
    pub features: FeatureSettings,
    /// Defaults for the `vocab` and `report` commands.
    pub report: ReportSettings,
    /// Directory containing the most specific config file.
    pub config_root: Option<PathBuf>,
}

impl Config {
    /// Loads configuration by discovering and merging all relevant `.reel.toml` files.
    ///
    /// Returns `Ok(Config::default())` if no configuration files are found.
    pub fn load(cwd: &Path) -> Result<Self, ConfigError> {
        let config_files = discover_config_files(cwd);
        Self::load_from_files(&config_files)
    }

    /// Loads configuration from a specific list of config file paths.
    ///
    /// Files should be provided in precedence order: highest precedence first.
    pub fn load_from_files(files: &[PathBuf]) -> Result<Self, ConfigError> {
        if files.is_empty() {
            return Ok(Self::default());
        }

        let parsed = files
            .iter()
            .map(|path| {
                Ok(ParsedConfig {
                    path: path.clone(),
                    config: parse_config_file(path)?,
                })
            })
            .collect::<Result<Vec<_>, ConfigError>>()?;

        merge_configs(&parsed)
    }

    /// Validates the configuration and returns any warnings.
    pub fn validate(&self) -> Vec<ConfigWarning> {
        validate_config(self)
    }

    /// Serializes the effective settings in `.reel.toml` format.
    pub fn settings_to_toml(&self) -> Result<String, ConfigError> {
        let serializable = SerializableSettings {
            corpus: &self.corpus,
            features: &self.features,
            report: &self.report,
        };
        Ok(toml::to_string_pretty(&serializable)?)
    }
}

/// Corpus location and document layout.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct CorpusSettings {
    /// Resolved path to the JSONL catalog.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<PathBuf>,
    /// Maximum records to load; 0 loads everything.
    pub limit: usize,
    /// Lowercase names of the movie fields that form each document.
    pub fields: Vec<String>,
}

impl Default for CorpusSettings {
    fn default() -> Self {
        Self {
            path: None,
            limit: 0,
            fields: TextField::ALL.iter().map(|f| f.as_str().to_string()).collect(),
        }
    }
}

impl CorpusSettings {
    /// The record limit as an option, with 0 meaning no limit.
    pub fn record_limit(&self) -> Option<usize> {
        (self.limit > 0).then_some(self.limit)
    }

    /// Recognized document fields, in configured order. Unknown names are skipped.
    pub fn text_fields(&self) -> Vec<TextField> {
        self.fields.iter().filter_map(|f| f.parse().ok()).collect()
    }
}

/// Feature extraction settings.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct FeatureSettings {
    /// Reduce terms to their stems.
    pub stemming: bool,
    /// Drop stopwords.
    pub stopwords: bool,
    /// Snowball language name, lowercase.
    pub language: String,
    /// IDF weighting.
    pub idf: IdfFormula,
}

impl Default for FeatureSettings {
    fn default() -> Self {
        Self {
            stemming: true,
            stopwords: false,
            language: String::from("english"),
            idf: IdfFormula::Standard,
        }
    }
}

impl FeatureSettings {
    /// Builds the extractor options these settings describe.
    pub fn feature_config(&self) -> Result<FeatureConfig, FeatureError> {
        Ok(FeatureConfig {
            stemming: self.stemming,
            stopwords: self.stopwords,
            language: parse_language(&self.language)?,
            idf: self.idf,
        })
    }
}

/// Report and vocabulary defaults.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ReportSettings {
    /// Vocabulary entries to sample for display.
    pub vocabulary_samples: usize,
    /// Query run by `reel report`.
    pub query: String,
}

impl Default for ReportSettings {
    fn default() -> Self {
        Self {
            vocabulary_samples: 20,
            query: String::from("star wars"),
        }
    }
}

/// Borrowed view of the settings sections for TOML output.
#[derive(Serialize)]
struct SerializableSettings<'a> {
    /// `[corpus]`.
    corpus: &'a CorpusSettings,
    /// `[features]`.
    features: &'a FeatureSettings,
    /// `[report]`.
    report: &'a ReportSettings,
}
