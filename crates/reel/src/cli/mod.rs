//! CLI support for the `reel` binary.

pub mod args;
pub mod commands;
pub mod context;
pub mod output;
pub mod pipeline;

pub use context::CommandContext;
