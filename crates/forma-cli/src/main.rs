//! Binary entry point for `forma`.
//!
//! `main` only wires the delivery surface together: parse arguments,
//! install logging, load the app config, build the output manager, run
//! one command handler, and turn any failure into a message plus an
//! exit code. Everything with domain meaning lives in `forma-core` and
//! `forma-adapters`.
//!
//! Exit codes: 0 success, 1 internal error, 2 invalid input, 3 plugin
//! not found, 4 configuration error. Clap itself exits with 2 on usage
//! errors, which matches the invalid-input row.

use std::io::IsTerminal as _;
use std::process::ExitCode;

use clap::Parser;
use tracing::debug;

use crate::{
    cli::{Cli, Commands},
    config::AppConfig,
    error::{CliError, CliResult},
    logging::init_logging,
    output::OutputManager,
};

mod cli;
mod commands;
mod config;
mod error;
mod logging;
mod output;

fn main() -> ExitCode {
    // .env first so RUST_LOG and NO_COLOR from it are seen below.
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();

    if let Err(e) = init_logging(&cli.global) {
        eprintln!("failed to initialise logging: {e}");
        return ExitCode::from(1);
    }

    let app_config = match AppConfig::load(cli.global.config.as_ref()) {
        Ok(loaded) => loaded,
        Err(e) => {
            tracing::error!("failed to load configuration: {e:#}");
            eprintln!("configuration error: {e:#}");
            return ExitCode::from(4);
        }
    };

    let output = OutputManager::new(&cli.global, &app_config);
    debug!(verbose = cli.global.verbose, quiet = cli.global.quiet, "starting");

    match dispatch(cli, app_config, output) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => report_failure(e),
    }
}

fn dispatch(cli: Cli, app_config: AppConfig, output: OutputManager) -> CliResult<()> {
    match cli.command {
        Commands::Generate(cmd) => commands::generate::execute(cmd, app_config, output),
        Commands::Plugins(cmd) => commands::plugins::execute(cmd, output),
        Commands::Policy(cmd) => commands::policy::execute(cmd, output),
        Commands::Completions(cmd) => commands::completions::execute(cmd),
    }
}

/// The single point where a structured error becomes stderr text and an
/// OS exit code.
fn report_failure(err: CliError) -> ExitCode {
    err.log();
    eprint!("{}", err.render(std::io::stderr().is_terminal()));
    ExitCode::from(err.exit_code())
}

// ── tests ─────────────────────────────────────────────────────────────────────
