//! broker-webhook: broker event webhook execution
//!
//! Entry point for the broker-webhook application.

use broker_webhook::config::{Cli, Command, ValidatedConfig, write_default_config};
use std::process::ExitCode;

mod app;
mod run;

use app::{exit_code, print_config_hint, setup_tracing};

/// Main entry point.
///
/// Excluded from coverage as it's the thin wrapper around testable components.
#[cfg(not(tarpaulin_include))]
fn main() -> ExitCode {
    let cli = Cli::parse_args();

    // Handle init subcommand
    if let Some(Command::Init { output }) = &cli.command {
        return handle_init(output);
    }

    // Load and validate configuration
    let config = match ValidatedConfig::load(&cli) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Configuration error: {e}");
            print_config_hint(&e);
            return exit_code::CONFIG_ERROR;
        }
    };

    // Setup logging and run
    setup_tracing(config.verbose);
    tracing::debug!("{config}");

    run_application(&config)
}

/// Handles the `init` subcommand.
fn handle_init(output: &std::path::Path) -> ExitCode {
    match write_default_config(output) {
        Ok(()) => {
            println!("Configuration template written to: {}", output.display());
            exit_code::SUCCESS
        }
        Err(e) => {
            eprintln!("Error: {e}");
            exit_code::CONFIG_ERROR
        }
    }
}

/// Runs the webhook once and prints the report.
///
/// Excluded from coverage - requires async runtime.
#[cfg(not(tarpaulin_include))]
fn run_application(config: &ValidatedConfig) -> ExitCode {
    let runtime = match tokio::runtime::Runtime::new() {
        Ok(runtime) => runtime,
        Err(e) => {
            tracing::error!("Failed to create Tokio runtime: {e}");
            return exit_code::delivery_failed();
        }
    };

    let result = match runtime.block_on(run::execute(config)) {
        Ok(result) => result,
        Err(run::RunError::Configuration(e)) => {
            eprintln!("Configuration error: {e}");
            return exit_code::CONFIG_ERROR;
        }
        Err(e) => {
            tracing::error!("Application error: {e}");
            return exit_code::delivery_failed();
        }
    };

    match run::render_report(&result, config.json) {
        Ok(report) => println!("{report}"),
        Err(e) => {
            tracing::error!("Application error: {e}");
            return exit_code::delivery_failed();
        }
    }

    if result.is_success() {
        exit_code::SUCCESS
    } else {
        exit_code::delivery_failed()
    }
}
