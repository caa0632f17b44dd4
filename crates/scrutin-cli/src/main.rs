//! `scrutin`: ask questions about the Ivorian legislative results.

mod args;
mod commands;
mod error;

use std::process::ExitCode;

use clap::Parser;
use scrutin_core::config::ScrutinConfig;
use scrutin_core::errors::ScrutinError;
use scrutin_observability::init_tracing;

use crate::args::{Cli, Command};
use crate::error::CliError;

fn run(cli: Cli) -> Result<(), CliError> {
    let config = ScrutinConfig::load(&cli.config_root).map_err(ScrutinError::from)?;
    init_tracing(&config.observability);
    tracing::debug!(root = %cli.config_root.display(), "configuration loaded");

    match &cli.command {
        Command::Ask { words } => commands::ask(&config, &Command::question(words)),
        Command::Load { records } => commands::load(&config, records),
        Command::Batch { questions } => commands::batch(&config, questions),
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}
