//! Path resolution for the corpus location.
//!
//! Resolves relative and tilde-prefixed paths to absolute paths.

use std::path::{Path, PathBuf};

use directories::BaseDirs;

use crate::ConfigError;

/// Resolves a corpus path against the directory of the config file that named it.
///
/// - `~` and `~/...` expand to the home directory
/// - relative paths join onto `config_dir`
/// - absolute paths pass through
///
/// The path is not required to exist; [`crate::Config::validate`] reports missing files.
pub fn resolve_corpus_path(path: &str, config_dir: &Path) -> Result<PathBuf, ConfigError> {
    let expanded = expand_tilde(path)?;
    if expanded.is_absolute() {
        Ok(expanded)
    } else {
        Ok(config_dir.join(expanded))
    }
}

/// Expands a leading tilde to the home directory.
fn expand_tilde(path: &str) -> Result<PathBuf, ConfigError> {
    if path == "~" {
        return home_dir();
    }

    if let Some(rest) = path.strip_prefix("~/") {
        return Ok(home_dir()?.join(rest));
    }

    Ok(PathBuf::from(path))
}

/// Returns the home directory.
fn home_dir() -> Result<PathBuf, ConfigError> {
    BaseDirs::new()
        .map(|dirs| dirs.home_dir().to_path_buf())
        .ok_or(ConfigError::NoHomeDirectory)
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn relative_joins_config_dir() {
        let resolved = resolve_corpus_path("data/movies.jsonl", Path::new("/srv/reel")).unwrap();
        assert_eq!(resolved, PathBuf::from("/srv/reel/data/movies.jsonl"));
    }

    #[test]
    fn dot_relative() {
        let resolved = resolve_corpus_path("./movies.jsonl", Path::new("/srv/reel")).unwrap();
        assert_eq!(resolved, Path::new("/srv/reel").join("./movies.jsonl"));
    }

    #[test]
    fn absolute_passes_through() {
        let resolved = resolve_corpus_path("/data/movies.jsonl", Path::new("/srv/reel")).unwrap();
        assert_eq!(resolved, PathBuf::from("/data/movies.jsonl"));
    }

    #[test]
    fn tilde_expands_to_home() {
        let home = home_dir().unwrap();
        let resolved = resolve_corpus_path("~/movies.jsonl", Path::new("/srv/reel")).unwrap();
        assert_eq!(resolved, home.join("movies.jsonl"));
        assert_eq!(resolve_corpus_path("~", Path::new("/srv")).unwrap(), home);
    }

    #[test]
    fn tilde_inside_name_is_literal() {
        let resolved = resolve_corpus_path("~movies.jsonl", Path::new("/srv/reel")).unwrap();
        assert_eq!(resolved, PathBuf::from("/srv/reel/~movies.jsonl"));
    }
}
