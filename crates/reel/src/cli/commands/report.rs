//! Implementation of `reel report`.
//!
//! Replays the whole pipeline in order and prints a markdown report: feature
//! extraction, the vocabulary sample, the index size, the results of one AND
//! query, and a relevance classification prompt for those results.

use std::{
    io::{self, IsTerminal},
    process::ExitCode,
};

use tracing::debug;

use crate::cli::{
    args::ReportCommand,
    context::CommandContext,
    output::{relevance_prompt, results_markdown, vocabulary_tsv},
    pipeline::{CorpusFeatures, progress_bar},
};

/// Runs the full pipeline and prints the report.
pub fn run(ctx: &CommandContext, cmd: &ReportCommand) -> ExitCode {
    let (extractor, collection) = match (ctx.extractor(), ctx.collection()) {
        (Ok(extractor), Ok(collection)) => (extractor, collection),
        (Err(code), _) | (_, Err(code)) => return code,
    };
    let settings = &ctx.config;

    println!("---\n");
    println!("# Prepare Collection\n");
    println!("### Creating Movies Collection");

    println!("- extracting 'bag of words' features");
    let progress = progress_bar(collection.len(), io::stderr().is_terminal());
    let features = CorpusFeatures::extract(
        &collection,
        &extractor,
        &settings.corpus.text_fields(),
        &progress,
    );

    println!("- extracting 'set of words' features");
    println!("- building the vocabulary");
    let vocabulary = features.vocabulary(settings.features.idf);
    let idf = vocabulary.idf_table();

    println!("- extracting 'tfidf' features");
    let weighted = features
        .bags()
        .iter()
        .map(|(_, bag)| extractor.tfidf(bag, &idf))
        .filter(|vector| !vector.is_empty())
        .count();
    debug!(weighted, "computed tfidf vectors");

    print!(
        "{}",
        vocabulary_tsv(&vocabulary.sample(settings.report.vocabulary_samples))
    );

    println!("\n---\n");
    println!("# Building the index\n");
    let retriever = match features.retriever() {
        Ok(retriever) => retriever,
        Err(e) => {
            eprintln!("error: {e}");
            return ExitCode::FAILURE;
        }
    };
    println!("{}", retriever.doc_count());

    println!("\n**Test Query**\n");
    let query = cmd.query.as_deref().unwrap_or(&settings.report.query);
    let result = retriever.query_and(&extractor.set_of_words(query));
    print!("{}", results_markdown(&collection, &result));

    let context = match collection.prompt_context(&result) {
        Ok(context) => context,
        Err(e) => {
            eprintln!("error: {e}");
            return ExitCode::FAILURE;
        }
    };
    println!("\n");
    print!("{}", relevance_prompt(query, &context));

    ExitCode::SUCCESS
}
