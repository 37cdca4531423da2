//! reel: a retrieval workbench for a movie catalog.
//!
//! reel loads a JSONL movie dataset, turns every movie into normalized terms, and exposes
//! the classic bag-of-words machinery from the command line: vocabulary statistics with
//! document frequency and IDF, per-movie TF-IDF vectors, and boolean AND / OR retrieval
//! over an inverted index. The `report` command replays the whole pipeline and ends with a
//! relevance-classification prompt for the retrieved movies.

#![warn(missing_docs)]

pub mod cli;
