//! Command implementations for config-builder.
//!
//! This module provides the dispatcher that routes the parsed command line to
//! its implementation.

mod generate;

use crate::cli::Cli;
use crate::error::Result;
use crate::status::StatusPrinter;

pub use generate::{GenerateOptions, cmd_generate};

/// Dispatch the parsed command line to its implementation.
pub fn dispatch(cli: &Cli, printer: &StatusPrinter) -> Result<()> {
    cmd_generate(&GenerateOptions::from_cli(cli), printer)
}
