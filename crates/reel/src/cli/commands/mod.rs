//! Command implementations and dispatch.

pub mod config;
pub mod context;
pub mod init;
pub mod query;
pub mod report;
pub mod tfidf;
pub mod tokenize;
pub mod vocab;

use std::process::ExitCode;

use super::{args::Commands, context::CommandContext};

/// Dispatches to the selected subcommand.
pub fn run(command: &Commands, ctx: &CommandContext) -> ExitCode {
    match command {
        Commands::Init(cmd) => init::run(ctx, cmd),
        Commands::Config => config::run(ctx),
        Commands::Tokenize(cmd) => tokenize::run(ctx, cmd),
        Commands::Vocab(cmd) => vocab::run(ctx, cmd),
        Commands::Query(cmd) => query::run(ctx, cmd),
        Commands::Tfidf(cmd) => tfidf::run(ctx, cmd),
        Commands::Context(cmd) => context::run(ctx, cmd),
        Commands::Report(cmd) => report::run(ctx, cmd),
    }
}
