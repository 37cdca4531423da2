//! Corpus vocabulary: DF and IDF side by side, ordered for reporting.

use std::{cmp::Reverse, collections::HashMap};

use serde::Serialize;
use tracing::debug;

use crate::stats::{
    DocumentFrequency, IdfFormula, InverseDocumentFrequency, SetOfWords, count_documents,
    idf_weight,
};

/// Statistics for one vocabulary term.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VocabularyEntry {
    /// The normalized term.
    pub term: String,
    /// Number of documents containing the term.
    pub df: usize,
    /// IDF weight of the term.
    pub idf: f64,
}

/// Every term observed in a corpus with its DF and IDF.
///
/// Entries are kept sorted by document frequency (descending), then by term.
#[derive(Debug, Clone, Default)]
pub struct Vocabulary {
    /// Sorted entries.
    entries: Vec<VocabularyEntry>,
    /// Term to position in `entries`.
    positions: HashMap<String, usize>,
    /// Number of documents the statistics were computed over.
    documents: usize,
}

impl Vocabulary {
    /// Computes the vocabulary of a collection of sets of words.
    pub fn build<'a, I>(sets: I, formula: IdfFormula) -> Self
    where
        I: IntoIterator<Item = &'a SetOfWords>,
    {
        let (df, documents) = count_documents(sets);
        Self::from_document_frequency(df, documents, formula)
    }

    /// Builds the vocabulary from precomputed document frequencies.
    pub fn from_document_frequency(
        df: DocumentFrequency,
        documents: usize,
        formula: IdfFormula,
    ) -> Self {
        let mut entries: Vec<VocabularyEntry> = df
            .into_iter()
            .map(|(term, df)| VocabularyEntry {
                idf: idf_weight(documents, df, formula),
                term,
                df,
            })
            .collect();
        entries.sort_by(|a, b| {
            Reverse(a.df)
                .cmp(&Reverse(b.df))
                .then_with(|| a.term.cmp(&b.term))
        });

        let positions = entries
            .iter()
            .enumerate()
            .map(|(i, entry)| (entry.term.clone(), i))
            .collect();

        debug!(terms = entries.len(), documents, %formula, "built vocabulary");

        Self {
            entries,
            positions,
            documents,
        }
    }

    /// Number of distinct terms.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True when no term was observed.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of documents the statistics cover.
    pub fn documents(&self) -> usize {
        self.documents
    }

    /// Looks up one term.
    pub fn get(&self, term: &str) -> Option<&VocabularyEntry> {
        self.positions.get(term).map(|&i| &self.entries[i])
    }

    /// All entries, most frequent first.
    pub fn entries_by_df(&self) -> &[VocabularyEntry] {
        &self.entries
    }

    /// The IDF table, for TF-IDF weighting.
    pub fn idf_table(&self) -> InverseDocumentFrequency {
        self.entries
            .iter()
            .map(|entry| (entry.term.clone(), entry.idf))
            .collect()
    }

    /// The DF table.
    pub fn df_table(&self) -> DocumentFrequency {
        self.entries
            .iter()
            .map(|entry| (entry.term.clone(), entry.df))
            .collect()
    }

    /// Evenly spaced entries across the frequency range.
    ///
    /// Takes every `len / n`-th entry starting with the most frequent one, so a
    /// request for 20 samples from 45 terms yields 23 entries. Returns every entry
    /// when there are fewer than `n`, and nothing when `n` is zero.
    pub fn sample(&self, n: usize) -> Vec<&VocabularyEntry> {
        if n == 0 {
            return Vec::new();
        }
        let step = (self.entries.len() / n).max(1);
        self.entries.iter().step_by(step).collect()
    }
}
