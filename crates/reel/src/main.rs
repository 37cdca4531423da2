//! Command-line interface for the `reel` retrieval workbench.

use std::{io, process::ExitCode};

use clap::Parser;
use reel::cli::{
    CommandContext,
    args::{Cli, Commands},
    commands,
};
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Environment variable holding a tracing filter directive.
const LOG_ENV: &str = "REEL_LOG";

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.global.verbose);

    let ctx = if matches!(cli.command, Commands::Init(_)) {
        CommandContext::load_cwd_only()
    } else {
        CommandContext::load(&cli.global)
    };

    match ctx {
        Ok(ctx) => commands::run(&cli.command, &ctx),
        Err(code) => code,
    }
}

/// Installs a stderr log subscriber.
///
/// `REEL_LOG` takes precedence; otherwise `-v` selects info and `-vv` debug, with
/// warnings shown by default.
fn init_logging(verbose: u8) {
    let default = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(io::stderr).with_target(false))
        .init();
}
