//! Corpus statistics: document frequency, inverse document frequency and TF-IDF.
//!
//! All functions take the per-document set-of-words representation, so a document
//! contributes at most once to the frequency of any term.

use std::{
    collections::{HashMap, HashSet},
    fmt,
    str::FromStr,
};

use serde::{Deserialize, Serialize};

use crate::FeatureError;

/// Term occurrence counts for one document.
pub type BagOfWords = HashMap<String, u32>;

/// Distinct terms of one document.
pub type SetOfWords = HashSet<String>;

/// Number of documents containing each term.
pub type DocumentFrequency = HashMap<String, usize>;

/// IDF weight for each term.
pub type InverseDocumentFrequency = HashMap<String, f64>;

/// TF-IDF weight for each term of one document.
pub type TfIdfVector = HashMap<String, f64>;

/// Formula used to turn a document frequency into an IDF weight.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IdfFormula {
    /// `ln(N / df)`. Terms present in every document weigh zero.
    #[default]
    Standard,
    /// `ln(1 + N / df)`. Always strictly positive.
    Smooth,
}

impl IdfFormula {
    /// Returns the lowercase name used in configuration files.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Standard => "standard",
            Self::Smooth => "smooth",
        }
    }
}

impl fmt::Display for IdfFormula {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for IdfFormula {
    type Err = FeatureError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "standard" => Ok(Self::Standard),
            "smooth" => Ok(Self::Smooth),
            other => Err(FeatureError::InvalidIdfFormula(other.to_string())),
        }
    }
}

/// Computes the IDF weight of a term seen in `df` of `n` documents.
///
/// Callers only pass observed terms, so `df >= 1`.
pub fn idf_weight(n: usize, df: usize, formula: IdfFormula) -> f64 {
    debug_assert!(df > 0, "idf of an unobserved term");
    let ratio = n as f64 / df as f64;
    match formula {
        IdfFormula::Standard => ratio.ln(),
        IdfFormula::Smooth => ratio.ln_1p(),
    }
}

/// Counts, for each term, the number of sets that contain it.
///
/// Terms that occur in no set are absent from the result.
pub fn document_frequency<'a, I>(sets: I) -> DocumentFrequency
where
    I: IntoIterator<Item = &'a SetOfWords>,
{
    count_documents(sets).0
}

/// Computes IDF weights for every term observed in `sets`.
///
/// `N` is the number of sets. An empty collection yields an empty table.
pub fn inverse_document_frequency<'a, I>(sets: I, formula: IdfFormula) -> InverseDocumentFrequency
where
    I: IntoIterator<Item = &'a SetOfWords>,
{
    let (df, n) = count_documents(sets);
    df.into_iter()
        .map(|(term, count)| {
            let weight = idf_weight(n, count, formula);
            (term, weight)
        })
        .collect()
}

/// Weights a bag of words by IDF.
///
/// Terms missing from `idf` are omitted from the vector.
pub fn tfidf(bag: &BagOfWords, idf: &InverseDocumentFrequency) -> TfIdfVector {
    bag.iter()
        .filter_map(|(term, &count)| {
            let weight = idf.get(term)?;
            Some((term.clone(), f64::from(count) * weight))
        })
        .collect()
}

/// Single pass over the sets returning document frequencies and the set count.
pub(crate) fn count_documents<'a, I>(sets: I) -> (DocumentFrequency, usize)
where
    I: IntoIterator<Item = &'a SetOfWords>,
{
    let mut df = DocumentFrequency::new();
    let mut n = 0;
    for set in sets {
        n += 1;
        for term in set {
            *df.entry(term.clone()).or_insert(0) += 1;
        }
    }
    (df, n)
}

#[cfg(test)]
mod test {
    use super::*;

    /// Builds a set of words from string literals.
    fn set(words: &[&str]) -> SetOfWords {
        words.iter().map(|w| (*w).to_string()).collect()
    }

    /// The three-document catalog used across the retrieval tests.
    fn corpus() -> Vec<SetOfWords> {
        vec![
            set(&["star", "wars", "space"]),
            set(&["star", "trek", "space"]),
            set(&["wars", "history"]),
        ]
    }

    #[test]
    fn document_frequency_counts_sets() {
        let df = document_frequency(&corpus());
        assert_eq!(df["star"], 2);
        assert_eq!(df["wars"], 2);
        assert_eq!(df["space"], 2);
        assert_eq!(df["trek"], 1);
        assert_eq!(df["history"], 1);
        assert_eq!(df.len(), 5);
        assert!(!df.contains_key("nonexistent"));
    }

    #[test]
    fn document_frequency_bounds() {
        let docs = corpus();
        let df = document_frequency(&docs);
        for (term, &count) in &df {
            let expected = docs.iter().filter(|d| d.contains(term)).count();
            assert_eq!(count, expected, "df mismatch for {term}");
            assert!((1..=docs.len()).contains(&count));
        }
    }

    #[test]
    fn empty_corpus_yields_empty_tables() {
        let docs: Vec<SetOfWords> = Vec::new();
        assert!(document_frequency(&docs).is_empty());
        assert!(inverse_document_frequency(&docs, IdfFormula::Standard).is_empty());
    }

    #[test]
    fn standard_idf_matches_formula() {
        let idf = inverse_document_frequency(&corpus(), IdfFormula::Standard);
        assert_eq!(idf["star"], (3.0_f64 / 2.0).ln());
        assert_eq!(idf["trek"], 3.0_f64.ln());
    }

    #[test]
    fn smooth_idf_matches_formula() {
        let idf = inverse_document_frequency(&corpus(), IdfFormula::Smooth);
        assert_eq!(idf["star"], (1.5_f64).ln_1p());
        assert!(idf.values().all(|w| *w > 0.0));
    }

    #[test]
    fn term_in_every_document_weighs_zero_with_standard() {
        let docs = vec![set(&["film"]), set(&["film", "noir"])];
        let idf = inverse_document_frequency(&docs, IdfFormula::Standard);
        assert_eq!(idf["film"], 0.0);
        assert!(idf["noir"] > 0.0);
    }

    #[test]
    fn idf_non_increasing_in_df() {
        for formula in [IdfFormula::Standard, IdfFormula::Smooth] {
            let n = 10;
            let weights: Vec<f64> = (1..=n).map(|df| idf_weight(n, df, formula)).collect();
            assert!(weights.windows(2).all(|w| w[0] >= w[1]), "{formula}");
        }
    }

    #[test]
    fn tfidf_multiplies_count_by_idf() {
        let idf = inverse_document_frequency(&corpus(), IdfFormula::Standard);
        let bag: BagOfWords = [("star".to_string(), 1), ("trek".to_string(), 3)]
            .into_iter()
            .collect();
        let vector = tfidf(&bag, &idf);
        assert_eq!(vector["star"], 1.0 * (3.0_f64 / 2.0).ln());
        assert_eq!(vector["trek"], 3.0 * 3.0_f64.ln());
    }

    #[test]
    fn tfidf_omits_out_of_vocabulary_terms() {
        let idf = inverse_document_frequency(&corpus(), IdfFormula::Standard);
        let bag: BagOfWords = [("star".to_string(), 2), ("alien".to_string(), 4)]
            .into_iter()
            .collect();
        let vector = tfidf(&bag, &idf);
        assert_eq!(vector.len(), 1);
        assert!(!vector.contains_key("alien"));
    }

    #[test]
    fn formula_parses_and_displays() {
        assert_eq!("standard".parse::<IdfFormula>().unwrap(), IdfFormula::Standard);
        assert_eq!("Smooth".parse::<IdfFormula>().unwrap(), IdfFormula::Smooth);
        assert_eq!(IdfFormula::Smooth.to_string(), "smooth");
        let err = "bm25".parse::<IdfFormula>().unwrap_err();
        assert_eq!(err, FeatureError::InvalidIdfFormula("bm25".into()));
    }
}
