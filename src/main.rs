//! Nodebug: a git pre-commit guard against committed debug statements.
//!
//! This is the main entry point for the `nodebug` CLI. It parses arguments,
//! sets up logging, dispatches to the appropriate command handler, and maps
//! errors to exit codes. Git aborts the commit on any non-zero exit.

mod cli;
mod commands;
mod config;
mod diff;
mod error;
mod exit_codes;
mod git;
mod hook;
mod report;
mod rules;
mod scan;

#[cfg(test)]
mod test_support;

use cli::Cli;
use std::process::ExitCode;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

fn main() -> ExitCode {
    let cli = Cli::parse_args();
    init_logging(cli.verbose);

    match commands::dispatch(cli.command) {
        Ok(()) => ExitCode::from(exit_codes::SUCCESS as u8),
        Err(err) => {
            // Print user-actionable error message to stderr
            eprintln!("Error: {}", err);

            ExitCode::from(err.exit_code() as u8)
        }
    }
}

/// Diagnostics go to stderr; `RUST_LOG` overrides the `-v` count.
fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("nodebug={}", level)));

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr).with_target(false))
        .with(filter)
        .init();
}
