//! The in-memory movie collection.

use std::{collections::HashMap, path::Path};

use tracing::warn;

use crate::{CorpusError, Movie, load::read_jsonl};

/// Movies in load order, addressable by IMDb id.
#[derive(Debug, Clone, Default)]
pub struct MovieCollection {
    /// Movies in the order they were loaded.
    movies: Vec<Movie>,
    /// IMDb id to position in `movies`.
    positions: HashMap<String, usize>,
}

impl MovieCollection {
    /// Builds a collection, keeping the first record for each id.
    pub fn new(movies: impl IntoIterator<Item = Movie>) -> Self {
        let mut collection = Self::default();
        for movie in movies {
            if collection.positions.contains_key(&movie.imdb_id) {
                warn!(id = %movie.imdb_id, "dropping duplicate movie record");
                continue;
            }
            collection
                .positions
                .insert(movie.imdb_id.clone(), collection.movies.len());
            collection.movies.push(movie);
        }
        collection
    }

    /// Loads a collection from a JSONL file.
    pub fn load(path: &Path, limit: Option<usize>) -> Result<Self, CorpusError> {
        read_jsonl(path, limit).map(Self::new)
    }

    /// All movies in load order.
    pub fn movies(&self) -> &[Movie] {
        &self.movies
    }

    /// Number of movies.
    pub fn len(&self) -> usize {
        self.movies.len()
    }

    /// True when the collection holds no movies.
    pub fn is_empty(&self) -> bool {
        self.movies.is_empty()
    }

    /// Looks up a movie by IMDb id.
    pub fn get(&self, id: &str) -> Option<&Movie> {
        self.positions.get(id).map(|&i| &self.movies[i])
    }

    /// Looks up a movie, failing with [`CorpusError::MissingDocument`].
    pub fn require(&self, id: &str) -> Result<&Movie, CorpusError> {
        self.get(id).ok_or_else(|| CorpusError::MissingDocument { id: id.to_string() })
    }

    /// Ids in load order.
    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.movies.iter().map(|m| m.imdb_id.as_str())
    }

    /// Prompt context for the given movies: one block per id, separated by blank lines.
    ///
    /// Fails on the first unknown id.
    pub fn prompt_context<I>(&self, ids: I) -> Result<String, CorpusError>
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        let blocks = ids
            .into_iter()
            .map(|id| self.require(id.as_ref()).map(Movie::prompt_block))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(blocks.join("\n"))
    }
}
