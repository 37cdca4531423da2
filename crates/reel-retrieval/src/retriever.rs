//! Boolean AND / OR evaluation over an inverted index.

use std::{collections::BTreeSet, fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::{InvertedIndex, RetrievalError};

/// Boolean operator joining the terms of a query.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Operator {
    /// Every term must be present.
    #[default]
    And,
    /// At least one term must be present.
    Or,
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::And => write!(f, "AND"),
            Self::Or => write!(f, "OR"),
        }
    }
}

impl FromStr for Operator {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "and" => Ok(Self::And),
            "or" => Ok(Self::Or),
            other => Err(format!("unknown operator '{other}' (expected 'and' or 'or')")),
        }
    }
}

/// Answers boolean queries against a corpus of sets of words.
///
/// The index is built once at construction and never modified, so a retriever can
/// be shared by reference between threads and queried concurrently.
///
/// Results are unranked: a document either matches or it doesn't. Matching ids are
/// returned in ascending order.
#[derive(Debug, Clone)]
pub struct BooleanRetriever {
    /// The index queries run against.
    index: InvertedIndex,
}

impl BooleanRetriever {
    /// Builds the index for `documents` and wraps it.
    ///
    /// See [`InvertedIndex::build`] for the accepted input and failure modes.
    pub fn new<I, K, S>(documents: I) -> Result<Self, RetrievalError>
    where
        I: IntoIterator<Item = (K, S)>,
        K: Into<String>,
        S: IntoIterator,
        S::Item: AsRef<str>,
    {
        InvertedIndex::build(documents).map(Self::from_index)
    }

    /// Wraps a prebuilt index.
    pub fn from_index(index: InvertedIndex) -> Self {
        Self { index }
    }

    /// The underlying index.
    pub fn index(&self) -> &InvertedIndex {
        &self.index
    }

    /// Number of documents indexed at construction.
    pub fn doc_count(&self) -> usize {
        self.index.doc_count()
    }

    /// Number of distinct terms in the index.
    pub fn vocabulary_size(&self) -> usize {
        self.index.term_count()
    }

    /// Posting set of one term.
    pub fn postings(&self, term: &str) -> Option<&BTreeSet<String>> {
        self.index.postings(term)
    }

    /// True if `id` was indexed.
    pub fn contains_document(&self, id: &str) -> bool {
        self.index.contains_document(id)
    }

    /// Runs a query with the given operator.
    pub fn query<I>(&self, operator: Operator, terms: I) -> Vec<String>
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        match operator {
            Operator::And => self.query_and(terms),
            Operator::Or => self.query_or(terms),
        }
    }

    /// Documents containing every query term.
    ///
    /// An empty query matches nothing. A term missing from the index has an empty
    /// posting set, which empties the whole intersection.
    pub fn query_and<I>(&self, terms: I) -> Vec<String>
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        let mut postings = Vec::new();
        for term in terms {
            match self.index.postings(term.as_ref()) {
                Some(posting) => postings.push(posting),
                None => return Vec::new(),
            }
        }

        // Intersect starting from the rarest term.
        postings.sort_by_key(|posting| posting.len());
        let Some((smallest, rest)) = postings.split_first() else {
            return Vec::new();
        };

        smallest
            .iter()
            .filter(|id| rest.iter().all(|posting| posting.contains(*id)))
            .cloned()
            .collect()
    }

    /// Documents containing at least one query term.
    ///
    /// An empty query matches nothing; terms missing from the index contribute nothing.
    pub fn query_or<I>(&self, terms: I) -> Vec<String>
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        let mut matched: BTreeSet<&String> = BTreeSet::new();
        for term in terms {
            if let Some(posting) = self.index.postings(term.as_ref()) {
                matched.extend(posting);
            }
        }
        matched.into_iter().cloned().collect()
    }
}
