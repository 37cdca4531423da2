//! JSONL catalog reading.
//!
//! One JSON object per line. Loading is forgiving: blank lines are ignored and
//! malformed or incomplete records are skipped with a warning, so one bad line
//! does not lose the rest of the catalog.

use std::{
    fs::File,
    io::{BufRead, BufReader},
    path::Path,
};

use tracing::{debug, warn};

use crate::{CorpusError, Movie};

/// Reads movies from a JSONL file.
///
/// Stops after `limit` accepted records when a limit is given.
pub fn read_jsonl(path: &Path, limit: Option<usize>) -> Result<Vec<Movie>, CorpusError> {
    let file = File::open(path).map_err(|source| CorpusError::ReadFile {
        path: path.to_path_buf(),
        source,
    })?;
    let movies = parse_jsonl(BufReader::new(file), limit)?;
    debug!(path = %path.display(), count = movies.len(), "loaded corpus");
    Ok(movies)
}

/// Parses movies from any buffered JSONL source.
///
/// Records without an `imdb_id` or `title` are skipped.
pub fn parse_jsonl<R: BufRead>(reader: R, limit: Option<usize>) -> Result<Vec<Movie>, CorpusError> {
    let mut movies = Vec::new();
    if limit == Some(0) {
        return Ok(movies);
    }

    for (number, line) in reader.lines().enumerate() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }

        let movie: Movie = match serde_json::from_str(&line) {
            Ok(movie) => movie,
            Err(e) => {
                warn!(line = number + 1, error = %e, "skipping malformed record");
                continue;
            }
        };

        if movie.imdb_id.is_empty() || movie.title.is_empty() {
            warn!(line = number + 1, "skipping record without imdb_id or title");
            continue;
        }

        movies.push(movie);
        if limit.is_some_and(|limit| movies.len() >= limit) {
            break;
        }
    }

    Ok(movies)
}

#[cfg(test)]
mod test {
    use std::{fs, io::Cursor};

    use super::*;

    /// Three valid records around a blank, a malformed and an incomplete line.
    const CATALOG: &str = r#"{"imdb_id": "tt0076759", "title": "Star Wars", "year": 1977}

{"imdb_id": "tt0080684", "title": "The Empire Strikes Back"
{"imdb_id": "", "title": "Nameless"}
{"title": "No Id"}
{"imdb_id": "tt0086190", "title": "Return of the Jedi", "year": 1983}
{"imdb_id": "tt0120915", "title": "The Phantom Menace", "year": 1999}
"#;

    /// Ids of the parsed movies.
    fn ids(movies: &[Movie]) -> Vec<&str> {
        movies.iter().map(|m| m.imdb_id.as_str()).collect()
    }

    #[test]
    fn skips_blank_malformed_and_incomplete_lines() {
        let movies = parse_jsonl(Cursor::new(CATALOG), None).unwrap();
        assert_eq!(ids(&movies), vec!["tt0076759", "tt0086190", "tt0120915"]);
    }

    #[test]
    fn limit_counts_accepted_records() {
        let movies = parse_jsonl(Cursor::new(CATALOG), Some(2)).unwrap();
        assert_eq!(ids(&movies), vec!["tt0076759", "tt0086190"]);
    }

    #[test]
    fn zero_limit_reads_nothing() {
        let movies = parse_jsonl(Cursor::new(CATALOG), Some(0)).unwrap();
        assert!(movies.is_empty());
    }

    #[test]
    fn empty_input() {
        let movies = parse_jsonl(Cursor::new(""), None).unwrap();
        assert!(movies.is_empty());
    }

    #[test]
    fn reads_from_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("movies.jsonl");
        fs::write(&path, CATALOG).unwrap();

        let movies = read_jsonl(&path, None).unwrap();
        assert_eq!(movies.len(), 3);
        assert_eq!(movies[2].year, 1999);
    }

    #[test]
    fn missing_file_reports_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent.jsonl");
        let err = read_jsonl(&path, None).unwrap_err();
        assert!(matches!(err, CorpusError::ReadFile { .. }));
        assert!(err.to_string().contains("absent.jsonl"));
    }
}
