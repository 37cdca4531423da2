//! Implementation of `reel config`.

use std::process::ExitCode;

use reel_config::discover_config_files;

use crate::cli::context::CommandContext;

/// Shows the config files in effect, the merged settings, and validation warnings.
pub fn run(ctx: &CommandContext) -> ExitCode {
    let config = &ctx.config;

    let files = discover_config_files(&ctx.cwd);
    if files.is_empty() {
        println!("# no configuration files found, showing defaults");
    } else {
        println!("# config files (highest precedence first):");
        for path in &files {
            println!("#   {}", path.display());
        }
    }
    println!();

    match config.settings_to_toml() {
        Ok(toml) => print!("{toml}"),
        Err(e) => {
            eprintln!("error: {e}");
            return ExitCode::FAILURE;
        }
    }

    for warning in config.validate() {
        eprintln!("warning: {warning}");
    }

    ExitCode::SUCCESS
}
