//! Rendering and JSON serialization for CLI output.

use std::process::ExitCode;

use comfy_table::{Cell, CellAlignment, Table, presets::UTF8_FULL_CONDENSED};
use reel_corpus::MovieCollection;
use reel_features::{BagOfWords, VocabularyEntry};
use serde::Serialize;

/// Pretty-prints a value as JSON on stdout.
pub fn print_json<T: Serialize>(value: &T) -> ExitCode {
    match serde_json::to_string_pretty(value) {
        Ok(json) => {
            println!("{json}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("error: failed to serialize JSON: {e}");
            ExitCode::FAILURE
        }
    }
}

/// A `token | df | idf` table of vocabulary entries.
pub fn vocabulary_table(entries: &[&VocabularyEntry]) -> Table {
    let mut table = Table::new();
    table.load_preset(UTF8_FULL_CONDENSED);
    table.set_header(vec!["token", "df", "idf"]);
    for entry in entries {
        table.add_row(vec![
            Cell::new(&entry.term),
            Cell::new(entry.df).set_alignment(CellAlignment::Right),
            Cell::new(format!("{:.4}", entry.idf)).set_alignment(CellAlignment::Right),
        ]);
    }
    table
}

/// Vocabulary entries as tab-separated `token df idf` lines under a header.
pub fn vocabulary_tsv(entries: &[&VocabularyEntry]) -> String {
    let mut out = String::from("token\tdf\tidf\n");
    for entry in entries {
        out.push_str(&format!("{}\t{}\t{}\n", entry.term, entry.df, entry.idf));
    }
    out
}

/// A `term | tf | weight` table for the top TF-IDF terms of one movie.
pub fn tfidf_table(terms: &[(&str, f64)], bag: &BagOfWords) -> Table {
    let mut table = Table::new();
    table.load_preset(UTF8_FULL_CONDENSED);
    table.set_header(vec!["term", "tf", "weight"]);
    for &(term, weight) in terms {
        let tf = bag.get(term).copied().unwrap_or_default();
        table.add_row(vec![
            Cell::new(term),
            Cell::new(tf).set_alignment(CellAlignment::Right),
            Cell::new(format!("{weight:.4}")).set_alignment(CellAlignment::Right),
        ]);
    }
    table
}

/// A markdown results table with one row per matched movie.
///
/// Ids missing from the collection are skipped.
pub fn results_markdown(collection: &MovieCollection, ids: &[String]) -> String {
    let mut out = String::from("|id|title|overview|cast\n|-|-|-|-|\n");
    for id in ids {
        let Some(movie) = collection.get(id) else {
            continue;
        };
        out.push_str(&format!(
            "|{id}|**{}** ({})|{}|{}\n",
            movie.title,
            movie.year,
            movie.summary_markdown(),
            movie.cast
        ));
    }
    out
}

/// The relevance classification prompt for a query and its retrieved movies.
pub fn relevance_prompt(query: &str, context: &str) -> String {
    format!(
        "You are a movie relevance classifier. Rate each movie's relevance to the query.

Query: \"{query}\"

Movies:
{context}

Rate each movie (0-2):
- 2 = Highly relevant (directly matches query intent)
- 1 = Partially relevant (somewhat related)
- 0 = Not relevant (no meaningful match)

RESPOND ONLY WITH:
MovieID:Score

Example:
tt0076759:2
tt0113107:0

Your ratings:
"
    )
}
