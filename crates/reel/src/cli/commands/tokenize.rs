//! Implementation of `reel tokenize`.

use std::{collections::BTreeMap, process::ExitCode};

use serde::Serialize;

use crate::cli::{args::TokenizeCommand, context::CommandContext, output::print_json};

/// JSON output for `reel tokenize`.
#[derive(Serialize)]
struct TokenizeOutput<'a> {
    /// The input text.
    text: &'a str,
    /// Terms in order of appearance.
    terms: Vec<String>,
    /// Term counts, sorted by term.
    bag_of_words: BTreeMap<String, u32>,
}

/// Prints the terms produced by the configured pipeline.
pub fn run(ctx: &CommandContext, cmd: &TokenizeCommand) -> ExitCode {
    let extractor = match ctx.extractor() {
        Ok(extractor) => extractor,
        Err(code) => return code,
    };

    let text = cmd.text.join(" ");
    let terms = extractor.tokenize(&text);

    if cmd.output.json {
        let bag_of_words = extractor.bag_of_words(&text).into_iter().collect();
        return print_json(&TokenizeOutput {
            text: &text,
            terms,
            bag_of_words,
        });
    }

    println!("{}", terms.join(" "));
    ExitCode::SUCCESS
}
