//! Diagnostic logging setup.
//!
//! Logs go to stderr through `tracing-subscriber`. The level comes from the
//! command line only: warnings by default, `-v` per step up, `-q` for errors
//! only.

use tracing::level_filters::LevelFilter;

/// Map `-v` / `-q` flags to a log level.
pub fn level_for(verbose: u8, quiet: bool) -> LevelFilter {
    if quiet {
        return LevelFilter::ERROR;
    }
    match verbose {
        0 => LevelFilter::WARN,
        1 => LevelFilter::INFO,
        2 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    }
}

/// Install the global subscriber. Safe to call more than once; later calls
/// are no-ops.
pub fn init(verbose: u8, quiet: bool) {
    let _ = tracing_subscriber::fmt()
        .with_max_level(level_for(verbose, quiet))
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}
