//! Error types for the reel-corpus crate.

use std::{io, path::PathBuf};

use thiserror::Error;

/// Errors that can occur when loading or reading the movie catalog.
#[derive(Debug, Error)]
pub enum CorpusError {
    /// Failed to open the catalog file.
    #[error("failed to read corpus file {path}: {source}")]
    ReadFile {
        /// Path to the file that could not be read.
        path: PathBuf,
        /// Underlying I/O error.
        source: io::Error,
    },

    /// I/O error while streaming records.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// A requested movie id is not in the collection.
    #[error("movie not found: {id}")]
    MissingDocument {
        /// The unknown id.
        id: String,
    },
}
