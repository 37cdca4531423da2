//! Implementation of `reel query`.

use std::process::ExitCode;

use reel_retrieval::Operator;
use serde::Serialize;
use tracing::info;

use crate::cli::{
    args::QueryCommand,
    context::CommandContext,
    output::{print_json, results_markdown},
    pipeline::{CorpusFeatures, progress_bar},
};

/// One matched movie in JSON output.
#[derive(Serialize)]
struct JsonMatch<'a> {
    /// IMDb id.
    id: &'a str,
    /// Release title.
    title: &'a str,
    /// Release year, 0 when unknown.
    year: u32,
}

/// JSON output for `reel query`.
#[derive(Serialize)]
struct QueryOutput<'a> {
    /// The query text.
    query: &'a str,
    /// Operator joining the terms.
    operator: Operator,
    /// Distinct query terms, sorted.
    terms: Vec<&'a str>,
    /// Matches in id order.
    results: Vec<JsonMatch<'a>>,
}

/// Runs a boolean query over the corpus and prints the matches.
pub fn run(ctx: &CommandContext, cmd: &QueryCommand) -> ExitCode {
    let (extractor, collection) = match (ctx.extractor(), ctx.collection()) {
        (Ok(extractor), Ok(collection)) => (extractor, collection),
        (Err(code), _) | (_, Err(code)) => return code,
    };

    let fields = ctx.config.corpus.text_fields();
    let features = CorpusFeatures::extract(
        &collection,
        &extractor,
        &fields,
        &progress_bar(collection.len(), false),
    );
    let retriever = match features.retriever() {
        Ok(retriever) => retriever,
        Err(e) => {
            eprintln!("error: {e}");
            return ExitCode::FAILURE;
        }
    };

    let text = cmd.text.join(" ");
    let operator = cmd.operator();
    let query = extractor.set_of_words(&text);
    let ids = retriever.query(operator, &query);
    info!(%operator, terms = query.len(), matches = ids.len(), "ran query");

    if cmd.output.json {
        let mut terms: Vec<&str> = query.iter().map(String::as_str).collect();
        terms.sort_unstable();
        let results = ids
            .iter()
            .filter_map(|id| collection.get(id))
            .map(|movie| JsonMatch {
                id: &movie.imdb_id,
                title: &movie.title,
                year: movie.year,
            })
            .collect();
        return print_json(&QueryOutput {
            query: &text,
            operator,
            terms,
            results,
        });
    }

    if ids.is_empty() {
        eprintln!("No movies match.");
    }
    print!("{}", results_markdown(&collection, &ids));
    ExitCode::SUCCESS
}
