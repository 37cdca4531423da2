//! Configuration validation.
//!
//! Checks a loaded configuration and reports warnings for likely mistakes.

use std::fmt;

use reel_corpus::TextField;

use crate::Config;

/// A non-fatal warning about the configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigWarning {
    /// No corpus path is configured anywhere.
    NoCorpusConfigured,
    /// The corpus path does not exist.
    CorpusMissing {
        /// Configured path.
        path: String,
    },
    /// The corpus path exists but is not a file.
    CorpusNotFile {
        /// Configured path.
        path: String,
    },
    /// A field name in `corpus.fields` is not a movie text field.
    UnknownField {
        /// The unrecognized name.
        field: String,
    },
}

impl fmt::Display for ConfigWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoCorpusConfigured => write!(f, "no corpus path is configured"),
            Self::CorpusMissing { path } => write!(f, "corpus file does not exist: {path}"),
            Self::CorpusNotFile { path } => write!(f, "corpus path is not a file: {path}"),
            Self::UnknownField { field } => {
                write!(f, "unknown corpus field '{field}' will be ignored")
            }
        }
    }
}

/// Validates the configuration and returns any warnings.
pub fn validate_config(config: &Config) -> Vec<ConfigWarning> {
    let mut warnings = Vec::new();

    match config.corpus.path {
        None => warnings.push(ConfigWarning::NoCorpusConfigured),
        Some(ref path) if !path.exists() => warnings.push(ConfigWarning::CorpusMissing {
            path: path.display().to_string(),
        }),
        Some(ref path) if !path.is_file() => warnings.push(ConfigWarning::CorpusNotFile {
            path: path.display().to_string(),
        }),
        Some(_) => {}
    }

    for field in &config.corpus.fields {
        if field.parse::<TextField>().is_err() {
            warnings.push(ConfigWarning::UnknownField {
                field: field.clone(),
            });
        }
    }

    warnings
}

#[cfg(test)]
mod test {
    use std::path::PathBuf;

    use super::*;
    use crate::{CorpusSettings, test_support::TestDir};

    /// A config pointing at `path` with default fields.
    fn with_corpus(path: PathBuf) -> Config {
        Config {
            corpus: CorpusSettings {
                path: Some(path),
                ..CorpusSettings::default()
            },
            ..Config::default()
        }
    }

    #[test]
    fn default_config_has_no_corpus() {
        assert_eq!(
            Config::default().validate(),
            vec![ConfigWarning::NoCorpusConfigured]
        );
    }

    #[test]
    fn existing_corpus_is_clean() {
        let dir = TestDir::new();
        let file = dir.create_file("movies.jsonl", "");
        assert!(with_corpus(file).validate().is_empty());
    }

    #[test]
    fn missing_corpus() {
        let dir = TestDir::new();
        let warnings = with_corpus(dir.path().join("absent.jsonl")).validate();
        assert!(matches!(warnings[..], [ConfigWarning::CorpusMissing { .. }]));
    }

    #[test]
    fn directory_corpus() {
        let dir = TestDir::new();
        let warnings = with_corpus(dir.create_dir("movies")).validate();
        assert!(matches!(warnings[..], [ConfigWarning::CorpusNotFile { .. }]));
    }

    #[test]
    fn unknown_fields() {
        let dir = TestDir::new();
        let mut config = with_corpus(dir.create_file("movies.jsonl", ""));
        config.corpus.fields = vec!["title".into(), "budget".into()];
        assert_eq!(
            config.validate(),
            vec![ConfigWarning::UnknownField {
                field: "budget".into()
            }]
        );
    }

    #[test]
    fn display() {
        assert_eq!(
            ConfigWarning::CorpusMissing {
                path: "/data/movies.jsonl".into()
            }
            .to_string(),
            "corpus file does not exist: /data/movies.jsonl"
        );
        assert_eq!(
            ConfigWarning::NoCorpusConfigured.to_string(),
            "no corpus path is configured"
        );
    }
}
