//! Implementation of `reel tfidf`.

use std::process::ExitCode;

use serde::Serialize;

use crate::cli::{
    args::TfidfCommand,
    context::CommandContext,
    output::{print_json, tfidf_table},
    pipeline::{CorpusFeatures, progress_bar, ranked_terms},
};

/// One weighted term in JSON output.
#[derive(Serialize)]
struct JsonTerm<'a> {
    /// The normalized term.
    term: &'a str,
    /// Occurrences in the movie.
    tf: u32,
    /// TF-IDF weight.
    weight: f64,
}

/// JSON output for `reel tfidf`.
#[derive(Serialize)]
struct TfidfOutput<'a> {
    /// IMDb id.
    id: &'a str,
    /// Release title.
    title: &'a str,
    /// Heaviest terms first.
    terms: Vec<JsonTerm<'a>>,
}

/// Prints the highest weighted TF-IDF terms of one movie.
pub fn run(ctx: &CommandContext, cmd: &TfidfCommand) -> ExitCode {
    let (extractor, collection) = match (ctx.extractor(), ctx.collection()) {
        (Ok(extractor), Ok(collection)) => (extractor, collection),
        (Err(code), _) | (_, Err(code)) => return code,
    };

    let movie = match collection.require(&cmd.id) {
        Ok(movie) => movie,
        Err(e) => {
            eprintln!("error: {e}");
            return ExitCode::FAILURE;
        }
    };

    let fields = ctx.config.corpus.text_fields();
    let features = CorpusFeatures::extract(
        &collection,
        &extractor,
        &fields,
        &progress_bar(collection.len(), false),
    );
    let Some(bag) = features.bag(&cmd.id) else {
        eprintln!("error: movie not found: {}", cmd.id);
        return ExitCode::FAILURE;
    };
    let idf = features.vocabulary(ctx.config.features.idf).idf_table();
    let vector = extractor.tfidf(bag, &idf);
    let top = ranked_terms(&vector, cmd.top);

    if cmd.output.json {
        let terms = top
            .iter()
            .map(|&(term, weight)| JsonTerm {
                term,
                tf: bag.get(term).copied().unwrap_or_default(),
                weight,
            })
            .collect();
        return print_json(&TfidfOutput {
            id: &movie.imdb_id,
            title: &movie.title,
            terms,
        });
    }

    println!("{} [{}]", movie.display_title(), movie.imdb_id);
    println!("{}", tfidf_table(&top, bag));
    ExitCode::SUCCESS
}
