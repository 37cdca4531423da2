//! Error types for the reel-retrieval crate.

use thiserror::Error;

/// Errors raised while building an index.
///
/// Queries never fail: a term missing from the index simply has an empty posting set.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RetrievalError {
    /// The same document id was supplied more than once.
    #[error("invalid input: duplicate document id {id}")]
    DuplicateDocument {
        /// The repeated id.
        id: String,
    },
}
