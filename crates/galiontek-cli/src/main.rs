//! galiontek CLI entry point.

use std::process::ExitCode;

use clap::Parser;

use galiontek_cli::cli::{Cli, Command};
use galiontek_cli::commands;
use galiontek_cli::config::AppConfig;
use galiontek_cli::error::{CliError, CliResult};
use galiontek_cli::store::Store;
use galiontek_core::tracing::{TracingConfig, init_tracing};

fn main() -> ExitCode {
    let cli = Cli::parse();

    let tracing_config = if cli.debug {
        TracingConfig::debug()
    } else {
        TracingConfig::default()
    };
    if let Err(e) = init_tracing(tracing_config) {
        eprintln!("error: {}", e);
        return ExitCode::FAILURE;
    }

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> CliResult<()> {
    // Load configuration; flags override the file.
    let config = if let Some(ref path) = cli.config {
        AppConfig::load_from(path).map_err(CliError::Config)?
    } else {
        AppConfig::load().unwrap_or_default()
    };

    let data_path = cli.data.clone().unwrap_or_else(|| config.data_file_path());
    let mut store = Store::open(data_path)?;

    match cli.command {
        Command::Order {
            id,
            title,
            client,
            hours,
        } => commands::order::run(&mut store, &id, title, client, hours),
        Command::Import { file, order } => commands::import::run(&mut store, &order, &file),
        Command::Summary {
            order,
            teaching_units,
        } => commands::summary::run(&store, &order, config.unit_mode(teaching_units)),
        Command::Export {
            order,
            format,
            teaching_units,
            out,
            open,
        } => commands::export::run(
            &store,
            &order,
            format,
            config.unit_mode(teaching_units),
            out.as_deref(),
            open,
        ),
    }
}
