//! Clap argument definitions for the `reel` CLI.

use std::path::PathBuf;

use clap::{ArgAction, Args, Parser, Subcommand};
use reel_retrieval::Operator;

/// Top-level CLI options.
#[derive(Parser, Debug)]
#[command(name = "reel")]
#[command(about = "Boolean retrieval and TF-IDF features over a movie catalog")]
pub struct Cli {
    #[command(flatten)]
    /// Flags accepted by every subcommand.
    pub global: GlobalArgs,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,
}

/// Flags shared by all subcommands.
#[derive(Args, Debug, Clone, Default)]
pub struct GlobalArgs {
    /// Log verbosity (-v for info, -vv for debug). REEL_LOG overrides.
    #[arg(short = 'v', long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// JSONL movie catalog, overriding the configured corpus path
    #[arg(long, global = true, value_name = "PATH")]
    pub corpus: Option<PathBuf>,

    /// Load only the first N movies (0 loads all), overriding the configured limit
    #[arg(long, global = true, value_name = "N")]
    pub limit: Option<usize>,
}

/// Output format flag shared by most commands.
#[derive(Args, Debug, Clone, Default)]
pub struct JsonArgs {
    /// Output in JSON format
    #[arg(long)]
    pub json: bool,
}

/// Arguments for `reel init`.
#[derive(Args, Debug, Clone)]
pub struct InitCommand {
    /// Create global ~/.reel.toml instead
    #[arg(long)]
    pub global: bool,

    /// Overwrite existing configuration file
    #[arg(long)]
    pub force: bool,
}

/// Arguments for `reel tokenize`.
#[derive(Args, Debug, Clone)]
pub struct TokenizeCommand {
    /// Text to tokenize (multiple arguments are joined with spaces)
    #[arg(required = true)]
    pub text: Vec<String>,

    #[command(flatten)]
    /// Output format.
    pub output: JsonArgs,
}

/// Arguments for `reel vocab`.
#[derive(Args, Debug, Clone)]
pub struct VocabCommand {
    /// Number of evenly spaced entries to show [default: from config]
    #[arg(short = 'n', long)]
    pub samples: Option<usize>,

    #[command(flatten)]
    /// Output format.
    pub output: JsonArgs,
}

/// Arguments for `reel query`.
#[derive(Args, Debug, Clone)]
pub struct QueryCommand {
    /// Query text (multiple arguments are joined with spaces)
    #[arg(required = true)]
    pub text: Vec<String>,

    /// Match any query term instead of all of them
    #[arg(long)]
    pub or: bool,

    #[command(flatten)]
    /// Output format.
    pub output: JsonArgs,
}

impl QueryCommand {
    /// The boolean operator selected by the flags.
    pub fn operator(&self) -> Operator {
        if self.or { Operator::Or } else { Operator::And }
    }
}

/// Arguments for `reel tfidf`.
#[derive(Args, Debug, Clone)]
pub struct TfidfCommand {
    /// IMDb id of the movie
    pub id: String,

    /// Number of terms to show
    #[arg(short = 'n', long, default_value = "10")]
    pub top: usize,

    #[command(flatten)]
    /// Output format.
    pub output: JsonArgs,
}

/// Arguments for `reel context`.
#[derive(Args, Debug, Clone)]
pub struct ContextCommand {
    /// IMDb ids of the movies to describe
    #[arg(required = true)]
    pub ids: Vec<String>,
}

/// Arguments for `reel report`.
#[derive(Args, Debug, Clone)]
pub struct ReportCommand {
    /// Query to run [default: from config]
    #[arg(short = 'q', long)]
    pub query: Option<String>,
}

/// Supported `reel` subcommands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Initialize reel configuration in the current directory
    Init(InitCommand),

    /// Show the effective configuration and any warnings
    Config,

    /// Show the terms the configured pipeline produces for some text
    Tokenize(TokenizeCommand),

    /// Show a sample of the corpus vocabulary with DF and IDF
    Vocab(VocabCommand),

    /// Run a boolean query against the corpus
    Query(QueryCommand),

    /// Show the highest weighted TF-IDF terms of one movie
    Tfidf(TfidfCommand),

    /// Print the relevance prompt context for movies
    Context(ContextCommand),

    /// Run the full pipeline and print a markdown report
    Report(ReportCommand),
}
