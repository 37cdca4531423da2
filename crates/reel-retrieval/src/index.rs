//! Inverted index from terms to the documents containing them.

use std::collections::{BTreeSet, HashMap};

use tracing::debug;

use crate::RetrievalError;

/// Term to posting set mapping, built once and read-only afterwards.
///
/// Posting sets are ordered by document id, which makes every query result
/// deterministic without an extra sort.
#[derive(Debug, Clone, Default)]
pub struct InvertedIndex {
    /// Posting set for each term.
    postings: HashMap<String, BTreeSet<String>>,
    /// Every indexed document id, including documents without terms.
    documents: BTreeSet<String>,
}

impl InvertedIndex {
    /// Builds the index from `(document id, terms)` pairs.
    ///
    /// Each document's id is added to the posting set of every one of its terms.
    /// An empty corpus is valid. A document id that appears twice is rejected with
    /// [`RetrievalError::DuplicateDocument`].
    pub fn build<I, K, S>(documents: I) -> Result<Self, RetrievalError>
    where
        I: IntoIterator<Item = (K, S)>,
        K: Into<String>,
        S: IntoIterator,
        S::Item: AsRef<str>,
    {
        let mut index = Self::default();
        let mut pairs = 0usize;

        for (id, terms) in documents {
            let id = id.into();
            if index.documents.contains(&id) {
                return Err(RetrievalError::DuplicateDocument { id });
            }
            for term in terms {
                let term = term.as_ref();
                match index.postings.get_mut(term) {
                    Some(posting) => {
                        posting.insert(id.clone());
                    }
                    None => {
                        index
                            .postings
                            .insert(term.to_owned(), BTreeSet::from([id.clone()]));
                    }
                }
                pairs += 1;
            }
            index.documents.insert(id);
        }

        debug!(
            documents = index.documents.len(),
            terms = index.postings.len(),
            pairs,
            "built inverted index"
        );
        Ok(index)
    }

    /// Posting set of one term.
    pub fn postings(&self, term: &str) -> Option<&BTreeSet<String>> {
        self.postings.get(term)
    }

    /// Number of indexed documents.
    pub fn doc_count(&self) -> usize {
        self.documents.len()
    }

    /// Number of distinct terms.
    pub fn term_count(&self) -> usize {
        self.postings.len()
    }

    /// True if `id` was indexed.
    pub fn contains_document(&self, id: &str) -> bool {
        self.documents.contains(id)
    }

    /// All indexed document ids in ascending order.
    pub fn documents(&self) -> impl Iterator<Item = &str> {
        self.documents.iter().map(String::as_str)
    }
}
