//! Implementation of `reel vocab`.

use std::process::ExitCode;

use reel_features::VocabularyEntry;
use serde::Serialize;

use crate::cli::{
    args::VocabCommand,
    context::CommandContext,
    output::{print_json, vocabulary_table},
    pipeline::{CorpusFeatures, progress_bar},
};

/// JSON output for `reel vocab`.
#[derive(Serialize)]
struct VocabOutput<'a> {
    /// Movies the statistics cover.
    documents: usize,
    /// Distinct terms in the corpus.
    terms: usize,
    /// Sampled entries, most frequent first.
    samples: Vec<&'a VocabularyEntry>,
}

/// Builds the corpus vocabulary and prints an evenly spaced sample of it.
pub fn run(ctx: &CommandContext, cmd: &VocabCommand) -> ExitCode {
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
    let vocabulary = features.vocabulary(ctx.config.features.idf);

    let n = cmd
        .samples
        .unwrap_or(ctx.config.report.vocabulary_samples);
    let samples = vocabulary.sample(n);

    if cmd.output.json {
        return print_json(&VocabOutput {
            documents: vocabulary.documents(),
            terms: vocabulary.len(),
            samples,
        });
    }

    println!(
        "{} terms over {} movies",
        vocabulary.len(),
        vocabulary.documents()
    );
    println!("{}", vocabulary_table(&samples));
    ExitCode::SUCCESS
}
