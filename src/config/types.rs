//! Configuration types and defaults for config-builder.
//!
//! This module defines enums and default value functions used by the Config
//! struct.

use serde::{Deserialize, Serialize};

/// How the renderer treats variables a template references but nobody set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum UndefinedMode {
    /// Undefined values render as empty strings (Jinja default).
    #[default]
    Lenient,
    /// Any use of an undefined value is a render error.
    Strict,
    /// Like lenient, but attribute access on undefined values also succeeds.
    Chainable,
}

pub(super) fn default_template_dir() -> String {
    "targetspec".to_string()
}

pub(super) fn default_output_dir() -> String {
    "out".to_string()
}

pub(super) fn default_variable_name() -> String {
    "HOSTNAME".to_string()
}
