//! config-builder: render per-device network configs from templates.
//!
//! This is the main entry point for the `config-builder` CLI. It parses
//! arguments, sets up logging, runs the generation, and maps errors to exit
//! codes.

mod cli;
mod commands;
pub mod config;
pub mod context;
pub mod error;
pub mod exit_codes;
pub mod fs;
pub mod logging;
pub mod output;
pub mod render;
pub mod report;
pub mod select;
pub mod status;

#[cfg(test)]
mod test_support;

use cli::Cli;
use status::{Status, StatusPrinter};
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = Cli::parse_args();
    logging::init(cli.verbose, cli.quiet);
    let printer = StatusPrinter::new(cli.no_color);

    match commands::dispatch(&cli, &printer) {
        Ok(()) => ExitCode::from(exit_codes::SUCCESS as u8),
        Err(err) => {
            // Print user-actionable error message to stderr
            printer.eprint(Status::Error, &format!("[FAIL] - {}", err));

            ExitCode::from(err.exit_code() as u8)
        }
    }
}
