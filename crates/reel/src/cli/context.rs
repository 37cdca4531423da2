//! Shared context for running CLI commands.

use std::{
    env,
    path::{Path, PathBuf},
    process::ExitCode,
};

use reel_config::Config;
use reel_corpus::MovieCollection;
use reel_features::FeatureExtractor;

use crate::cli::args::GlobalArgs;

/// Command execution context built once per CLI invocation.
pub struct CommandContext {
    /// Current working directory.
    pub cwd: PathBuf,
    /// Loaded configuration with command-line overrides applied.
    pub config: Config,
}

impl CommandContext {
    /// Loads the current directory and configuration, then applies global flag overrides.
    pub fn load(global: &GlobalArgs) -> Result<Self, ExitCode> {
        let cwd = current_dir_or_failure()?;
        let mut config = load_config_or_failure(&cwd)?;
        apply_overrides(&mut config, global, &cwd);
        Ok(Self { cwd, config })
    }

    /// Loads only the current directory, skipping configuration parsing.
    ///
    /// Used by `init`, which must work even when an existing config file is invalid.
    pub fn load_cwd_only() -> Result<Self, ExitCode> {
        let cwd = current_dir_or_failure()?;
        Ok(Self {
            cwd,
            config: Config::default(),
        })
    }

    /// Builds the feature extractor described by the configuration.
    pub fn extractor(&self) -> Result<FeatureExtractor, ExitCode> {
        self.config
            .features
            .feature_config()
            .map(FeatureExtractor::new)
            .map_err(|e| {
                eprintln!("error: {e}");
                ExitCode::FAILURE
            })
    }

    /// Loads the configured movie catalog.
    pub fn collection(&self) -> Result<MovieCollection, ExitCode> {
        let Some(path) = self.config.corpus.path.as_deref() else {
            eprintln!("error: no corpus configured");
            eprintln!(
                "Run 'reel init' and set [corpus] path, or pass --corpus <PATH>."
            );
            return Err(ExitCode::FAILURE);
        };

        MovieCollection::load(path, self.config.corpus.record_limit()).map_err(|e| {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        })
    }
}

/// Applies `--corpus` and `--limit` on top of the file configuration.
///
/// A relative `--corpus` path is taken relative to the working directory.
fn apply_overrides(config: &mut Config, global: &GlobalArgs, cwd: &Path) {
    if let Some(ref path) = global.corpus {
        config.corpus.path = Some(cwd.join(path));
    }
    if let Some(limit) = global.limit {
        config.corpus.limit = limit;
    }
}

/// Returns the current working directory or exits with a consistent error.
fn current_dir_or_failure() -> Result<PathBuf, ExitCode> {
    env::current_dir().map_err(|e| {
        eprintln!("error: could not determine current directory: {e}");
        ExitCode::FAILURE
    })
}

/// Loads configuration from the provided directory or exits with an error.
fn load_config_or_failure(cwd: &Path) -> Result<Config, ExitCode> {
    Config::load(cwd).map_err(|e| {
        eprintln!("error: failed to load configuration: {e}");
        ExitCode::FAILURE
    })
}
