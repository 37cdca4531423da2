//! Movie catalog for reel.
//!
//! Loads the JSONL movie dataset into a [`MovieCollection`] and assembles the
//! text bodies that feature extraction works on.

#![warn(missing_docs)]

mod collection;
mod error;
mod load;
mod movie;

pub use collection::MovieCollection;
pub use error::CorpusError;
pub use load::{parse_jsonl, read_jsonl};
pub use movie::{Movie, TextField};
