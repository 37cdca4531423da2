//! Implementation of `reel context`.

use std::process::ExitCode;

use crate::cli::{args::ContextCommand, context::CommandContext};

/// Prints the relevance prompt context block of each requested movie.
pub fn run(ctx: &CommandContext, cmd: &ContextCommand) -> ExitCode {
    let collection = match ctx.collection() {
        Ok(collection) => collection,
        Err(code) => return code,
    };

    match collection.prompt_context(&cmd.ids) {
        Ok(context) => {
            print!("{context}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}
