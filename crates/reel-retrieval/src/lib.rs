//! Boolean retrieval for reel.
//!
//! Builds an inverted index from each document's set of words and answers
//! conjunctive (`AND`) and disjunctive (`OR`) queries by intersecting or uniting
//! posting sets. There is no scoring: a query partitions the corpus into matching
//! and non-matching documents.
//!
//! # Example
//!
//! ```
//! use reel_retrieval::BooleanRetriever;
//!
//! let retriever = BooleanRetriever::new([
//!     ("d1", vec!["star", "wars", "space"]),
//!     ("d2", vec!["star", "trek", "space"]),
//!     ("d3", vec!["wars", "history"]),
//! ])
//! .unwrap();
//!
//! assert_eq!(retriever.query_and(["star", "wars"]), vec!["d1"]);
//! assert_eq!(retriever.query_or(["star", "wars"]), vec!["d1", "d2", "d3"]);
//! ```

#![warn(missing_docs)]

mod error;
mod index;
mod retriever;

pub use error::RetrievalError;
pub use index::InvertedIndex;
pub use retriever::{BooleanRetriever, Operator};
