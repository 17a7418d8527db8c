//! Config struct definition and default implementation.

use super::types::*;
use serde::{Deserialize, Serialize};

/// Configuration for a config-builder run.
///
/// This struct represents the contents of `config-builder.yaml`.
/// Unknown fields in the YAML are ignored for forward compatibility.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    // =========================================================================
    // Layout
    // =========================================================================
    /// Directory holding one template per device (default: "targetspec").
    /// Relative paths resolve against the working directory.
    #[serde(default = "default_template_dir")]
    pub template_dir: String,

    /// Directory receiving one rendered file per device (default: "out").
    #[serde(default = "default_output_dir")]
    pub output_dir: String,

    // =========================================================================
    // Rendering
    // =========================================================================
    /// Name under which the device identifier is exposed to templates.
    #[serde(default = "default_variable_name")]
    pub variable_name: String,

    /// Treatment of undefined template variables.
    #[serde(default)]
    pub undefined: UndefinedMode,

    /// Keep the final newline of a template instead of stripping it.
    #[serde(default)]
    pub keep_trailing_newline: bool,

    // =========================================================================
    // Run behavior
    // =========================================================================
    /// Continue with the next device when one fails.
    #[serde(default)]
    pub keep_going: bool,

    /// Glob patterns for template files that pattern selection never picks.
    #[serde(default)]
    pub ignore: Vec<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            template_dir: default_template_dir(),
            output_dir: default_output_dir(),
            variable_name: default_variable_name(),
            undefined: UndefinedMode::default(),
            keep_trailing_newline: false,
            keep_going: false,
            ignore: Vec::new(),
        }
    }
}
