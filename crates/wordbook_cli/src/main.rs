//! `wordbook` command-line entry point.
//!
//! # Responsibility
//! - Parse flags, start file logging when a log directory is configured.
//! - Print command results as pretty JSON on stdout and errors on stderr.
//!
//! # Invariants
//! - Exit code is 0 on success, 2 for client errors, 3 for missing records
//!   and 1 for everything else.

mod args;
mod commands;
mod error;

use args::Cli;
use clap::Parser;
use error::CliError;
use log::error;
use std::path::Path;
use std::process::ExitCode;
use wordbook_core::{default_log_level, init_logging};

fn main() -> ExitCode {
    let cli = Cli::parse();
    match run(cli) {
        Ok(output) => {
            println!("{output}");
            ExitCode::SUCCESS
        }
        Err(err) => {
            error!("event=cli_command module=cli status=error error={err}");
            eprintln!("error: {err}");
            ExitCode::from(err.exit_code())
        }
    }
}

fn run(cli: Cli) -> Result<String, CliError> {
    if let Some(log_dir) = cli.log_dir.as_deref() {
        let level = cli.log_level.as_deref().unwrap_or(default_log_level());
        start_logging(level, log_dir)?;
    }

    let value = commands::execute(&cli.db, cli.command)?;
    Ok(serde_json::to_string_pretty(&value)?)
}

fn start_logging(level: &str, log_dir: &Path) -> Result<(), CliError> {
    // The logging backend only accepts absolute directories.
    let absolute = if log_dir.is_absolute() {
        log_dir.to_path_buf()
    } else {
        std::env::current_dir()
            .map_err(CliError::LogDir)?
            .join(log_dir)
    };
    init_logging(level, &absolute.to_string_lossy())?;
    Ok(())
}
