//! recipebook CLI
//!
//! Usage: recipebook [--config <PATH>] [--threshold <CALORIES>] [--on-invalid <POLICY>] [-v...]
//!
//! Runs the interactive session on stdin/stdout.

use std::io;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;

use recipebook::config;
use recipebook::presentation::output::{describe_config_warning, format_error};
use recipebook::presentation::Cli;
use recipebook::{CalorieThreshold, Console, InvalidInputPolicy, SessionOptions, SessionUseCase};

fn main() -> ExitCode {
    let cli = Cli::parse();
    recipebook::logging::init(cli.verbose);

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprint!("{}", format_error(&err));
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    let loaded = config::resolve(cli.config.as_deref()).context("failed to load configuration")?;
    match &loaded.source {
        Some(path) => tracing::info!(file = %path.display(), "loaded config"),
        None => tracing::info!("using default config"),
    }
    for warning in &loaded.warnings {
        tracing::warn!("{}", describe_config_warning(warning));
    }

    let mut options = SessionOptions::from_config(&loaded.config);
    if let Some(limit) = cli.threshold {
        options = options.with_threshold(CalorieThreshold::new(limit));
    }
    let policy = cli
        .on_invalid
        .map(InvalidInputPolicy::from)
        .unwrap_or(loaded.config.input.on_invalid);

    tracing::debug!(threshold = %options.threshold, ?policy, "starting session");

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut console = Console::new(stdin.lock(), stdout.lock(), policy);

    SessionUseCase::new(options)
        .run(&mut console)
        .context("recipe session failed")?;
    Ok(())
}
