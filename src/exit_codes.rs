//! Exit code constants for the config-builder CLI.
//!
//! - 0: Success
//! - 1: User error (bad args, invalid config)
//! - 2: Template failure (missing or invalid template)
//! - 3: Filesystem failure (listing, directory creation, writes)

/// Successful execution.
pub const SUCCESS: i32 = 0;

/// User error: no device source, malformed pattern, bad identifier, bad config.
pub const USER_ERROR: i32 = 1;

/// Template failure: template file missing or failing to parse/render.
pub const TEMPLATE_FAILURE: i32 = 2;

/// Filesystem failure: template directory listing, output directory or file writes.
pub const FILESYSTEM_FAILURE: i32 = 3;
