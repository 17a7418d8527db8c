//! CLI argument parsing for config-builder.
//!
//! Uses clap derive macros for declarative argument definitions. The actual
//! run lives in the `commands` module.

use crate::exit_codes;
use crate::select::Request;
use clap::{ArgAction, Parser};
use std::path::PathBuf;

/// Render per-device network configs from templates.
///
/// Templates live in ./targetspec/, one file per device, named after the
/// device. Each selected template is rendered with HOSTNAME set to the device
/// name and written to ./out/<device>.
#[derive(Parser, Debug)]
#[command(name = "config-builder")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Comma-separated device names (template file names).
    #[arg(short, long, value_name = "LIST")]
    pub devices: Option<String>,

    /// Regex selecting devices by template file name (must match the whole name).
    #[arg(short, long, value_name = "REGEX")]
    pub pattern: Option<String>,

    /// Continue with the remaining devices when one fails.
    #[arg(short, long)]
    pub keep_going: bool,

    /// Write a JSON report of the run to this path.
    #[arg(long, value_name = "PATH")]
    pub report: Option<PathBuf>,

    /// Config file to use instead of ./config-builder.yaml.
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Disable colored status output.
    #[arg(long)]
    pub no_color: bool,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,

    /// Only log errors.
    #[arg(short, long)]
    pub quiet: bool,
}

impl Cli {
    /// Parse command line arguments.
    ///
    /// Argument errors exit with the usage error code; `--help` and
    /// `--version` exit successfully.
    pub fn parse_args() -> Self {
        match Cli::try_parse() {
            Ok(cli) => cli,
            Err(err) => {
                let code = if err.use_stderr() {
                    exit_codes::USER_ERROR
                } else {
                    exit_codes::SUCCESS
                };
                let _ = err.print();
                std::process::exit(code);
            }
        }
    }

    /// The device sources given on the command line.
    pub fn request(&self) -> Request {
        Request {
            devices: self.devices.clone(),
            pattern: self.pattern.clone(),
        }
    }
}
