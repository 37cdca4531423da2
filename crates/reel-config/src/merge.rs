//! Configuration merging.
//!
//! Merges multiple `RawConfig` files into a single resolved `Config`,
//! applying precedence rules and resolving paths.

use std::path::{Path, PathBuf};

use reel_features::{IdfFormula, parse_language};

use crate::{
    Config, ConfigError, CorpusSettings, FeatureSettings, ReportSettings,
    parse::{RawConfig, RawCorpusSettings, RawFeatureSettings, RawReportSettings},
    resolve::resolve_corpus_path,
};

/// A parsed config file with its source path.
pub struct ParsedConfig {
    /// Path to the config file.
    pub path: PathBuf,
    /// Parsed raw configuration.
    pub config: RawConfig,
}

impl ParsedConfig {
    /// Directory holding the config file, against which relative paths resolve.
    fn dir(&self) -> &Path {
        self.path.parent().unwrap_or_else(|| Path::new("."))
    }
}

/// Merges multiple configuration files into a single resolved `Config`.
///
/// Configs should be provided in precedence order: highest precedence first (closest to CWD),
/// lowest precedence last (global config). Every key takes the value from the highest
/// precedence file that sets it.
///
/// Language and IDF names are checked here, so a resolved `Config` always describes a
/// buildable feature pipeline.
pub fn merge_configs(configs: &[ParsedConfig]) -> Result<Config, ConfigError> {
    if configs.is_empty() {
        return Ok(Config::default());
    }

    let mut corpus = CorpusSettings::default();
    let mut features = FeatureSettings::default();
    let mut report = ReportSettings::default();

    // Lowest precedence first so closer files overwrite.
    for parsed in configs.iter().rev() {
        if let Some(ref raw) = parsed.config.corpus {
            apply_raw_corpus(&mut corpus, raw, parsed.dir())?;
        }
        if let Some(ref raw) = parsed.config.features {
            apply_raw_features(&mut features, raw, &parsed.path)?;
        }
        if let Some(ref raw) = parsed.config.report {
            apply_raw_report(&mut report, raw);
        }
    }

    let config_root = configs.first().map(|c| c.dir().to_path_buf());

    Ok(Config {
        corpus,
        features,
        report,
        config_root,
    })
}

/// Applies raw corpus settings, resolving the path against the file's directory.
fn apply_raw_corpus(
    result: &mut CorpusSettings,
    raw: &RawCorpusSettings,
    config_dir: &Path,
) -> Result<(), ConfigError> {
    if let Some(ref path) = raw.path {
        result.path = Some(resolve_corpus_path(path, config_dir)?);
    }
    if let Some(v) = raw.limit {
        result.limit = v;
    }
    if let Some(ref fields) = raw.fields {
        result.fields = fields.iter().map(|f| f.trim().to_lowercase()).collect();
    }
    Ok(())
}

/// Applies raw feature settings, rejecting unknown language and formula names.
fn apply_raw_features(
    result: &mut FeatureSettings,
    raw: &RawFeatureSettings,
    path: &Path,
) -> Result<(), ConfigError> {
    if let Some(v) = raw.stemming {
        result.stemming = v;
    }
    if let Some(v) = raw.stopwords {
        result.stopwords = v;
    }
    if let Some(ref language) = raw.language {
        parse_language(language).map_err(|_| ConfigError::InvalidLanguage {
            path: path.to_path_buf(),
            language: language.clone(),
        })?;
        result.language = language.to_lowercase();
    }
    if let Some(ref formula) = raw.idf {
        result.idf = formula
            .parse::<IdfFormula>()
            .map_err(|_| ConfigError::InvalidIdfFormula {
                path: path.to_path_buf(),
                formula: formula.clone(),
            })?;
    }
    Ok(())
}

/// Applies raw report settings.
fn apply_raw_report(result: &mut ReportSettings, raw: &RawReportSettings) {
    if let Some(v) = raw.vocabulary_samples {
        result.vocabulary_samples = v;
    }
    if let Some(ref v) = raw.query {
        result.query = v.clone();
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::parse::parse_config_str;

    /// A parsed config located at `dir/.reel.toml`.
    fn parsed(dir: &str, toml: &str) -> ParsedConfig {
        ParsedConfig {
            path: Path::new(dir).join(".reel.toml"),
            config: parse_config_str(toml, Path::new("test")).unwrap(),
        }
    }

    #[test]
    fn empty_list_is_default() {
        let config = merge_configs(&[]).unwrap();
        assert!(config.corpus.path.is_none());
        assert!(config.config_root.is_none());
        assert_eq!(config.report.vocabulary_samples, 20);
    }

    #[test]
    fn single_config() {
        let config = merge_configs(&[parsed(
            "/srv/reel",
            r#"
[corpus]
path = "movies.jsonl"
limit = 100

[features]
stopwords = true
"#,
        )])
        .unwrap();

        assert_eq!(
            config.corpus.path,
            Some(PathBuf::from("/srv/reel/movies.jsonl"))
        );
        assert_eq!(config.corpus.limit, 100);
        assert!(config.features.stopwords);
        assert!(config.features.stemming);
        assert_eq!(config.config_root, Some(PathBuf::from("/srv/reel")));
    }

    #[test]
    fn closest_file_wins_per_key() {
        let near = parsed(
            "/srv/reel/project",
            "[features]\nstemming = false\n\n[report]\nquery = \"alien\"\n",
        );
        let far = parsed(
            "/srv/reel",
            "[features]\nstemming = true\nstopwords = true\n\n[report]\nquery = \"star wars\"\nvocabulary_samples = 7\n",
        );

        let config = merge_configs(&[near, far]).unwrap();
        assert!(!config.features.stemming);
        assert!(config.features.stopwords);
        assert_eq!(config.report.query, "alien");
        assert_eq!(config.report.vocabulary_samples, 7);
        assert_eq!(config.config_root, Some(PathBuf::from("/srv/reel/project")));
    }

    #[test]
    fn corpus_path_resolves_against_defining_file() {
        let near = parsed("/srv/reel/project", "[corpus]\nlimit = 5\n");
        let far = parsed("/srv/reel", "[corpus]\npath = \"data/movies.jsonl\"\n");

        let config = merge_configs(&[near, far]).unwrap();
        assert_eq!(
            config.corpus.path,
            Some(PathBuf::from("/srv/reel/data/movies.jsonl"))
        );
        assert_eq!(config.corpus.limit, 5);
    }

    #[test]
    fn fields_are_normalized() {
        let config =
            merge_configs(&[parsed("/srv", "[corpus]\nfields = [\" Title\", \"OVERVIEW\"]\n")])
                .unwrap();
        assert_eq!(config.corpus.fields, vec!["title", "overview"]);
    }

    #[test]
    fn language_and_formula_are_checked() {
        let err = merge_configs(&[parsed("/srv", "[features]\nlanguage = \"klingon\"\n")])
            .unwrap_err();
        assert!(
            matches!(err, ConfigError::InvalidLanguage { ref language, .. } if language == "klingon")
        );

        let err =
            merge_configs(&[parsed("/srv", "[features]\nidf = \"bm25\"\n")]).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidIdfFormula { ref formula, .. } if formula == "bm25"));
    }

    #[test]
    fn language_and_formula_accept_any_case() {
        let config = merge_configs(&[parsed(
            "/srv",
            "[features]\nlanguage = \"German\"\nidf = \"Smooth\"\n",
        )])
        .unwrap();
        assert_eq!(config.features.language, "german");
        assert_eq!(config.features.idf, IdfFormula::Smooth);
    }
}
