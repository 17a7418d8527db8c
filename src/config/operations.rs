//! Config loading, validation, and utility operations.

use super::model::Config;
use crate::error::{ConfigBuilderError, Result};
use globset::{Glob, GlobSet, GlobSetBuilder};
use std::path::Path;
use tracing::debug;

/// Config file picked up from the working directory when `--config` is absent.
pub const DEFAULT_CONFIG_FILE: &str = "config-builder.yaml";

impl Config {
    /// Resolve the config for a run.
    ///
    /// An explicit path must exist. Without one, `config-builder.yaml` in
    /// `cwd` is used if present, and defaults otherwise.
    pub fn resolve(explicit: Option<&Path>, cwd: &Path) -> Result<Self> {
        if let Some(path) = explicit {
            let path = if path.is_absolute() {
                path.to_path_buf()
            } else {
                cwd.join(path)
            };
            return Self::load(path);
        }

        let default_path = cwd.join(DEFAULT_CONFIG_FILE);
        if default_path.is_file() {
            return Self::load(default_path);
        }

        debug!("no {} found, using default config", DEFAULT_CONFIG_FILE);
        Ok(Self::default())
    }

    /// Load config from a YAML file.
    ///
    /// Unknown fields in the YAML are silently ignored for forward compatibility.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();

        let content = std::fs::read_to_string(path).map_err(|e| {
            ConfigBuilderError::Config(format!(
                "failed to read config file '{}': {}",
                path.display(),
                e
            ))
        })?;

        debug!(path = %path.display(), "loaded config file");
        Self::from_yaml(&content)
    }

    /// Parse config from a YAML string.
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        // serde_yaml rejects an empty document, which should mean "all defaults".
        if yaml.trim().is_empty() {
            return Ok(Self::default());
        }

        let config: Config = serde_yaml::from_str(yaml)
            .map_err(|e| ConfigBuilderError::Config(format!("failed to parse YAML: {}", e)))?;

        config.validate()?;
        Ok(config)
    }

    /// Validate config values and return error on invalid values.
    ///
    /// Validation rules:
    /// - `template_dir` and `output_dir` must be non-empty and distinct
    /// - `variable_name` must be a plain identifier
    /// - every `ignore` entry must be a valid glob
    pub fn validate(&self) -> Result<()> {
        if self.template_dir.trim().is_empty() {
            return Err(ConfigBuilderError::Config(
                "template_dir must not be empty".to_string(),
            ));
        }
        if self.output_dir.trim().is_empty() {
            return Err(ConfigBuilderError::Config(
                "output_dir must not be empty".to_string(),
            ));
        }
        if Path::new(&self.template_dir) == Path::new(&self.output_dir) {
            return Err(ConfigBuilderError::Config(format!(
                "template_dir and output_dir must differ (both are '{}')",
                self.template_dir
            )));
        }

        if !is_identifier(&self.variable_name) {
            return Err(ConfigBuilderError::Config(format!(
                "variable_name '{}' is not a valid identifier",
                self.variable_name
            )));
        }

        self.ignore_set()?;
        Ok(())
    }

    /// Compile the `ignore` globs into a single matcher.
    pub fn ignore_set(&self) -> Result<GlobSet> {
        let mut builder = GlobSetBuilder::new();
        for pattern in &self.ignore {
            let glob = Glob::new(pattern).map_err(|e| {
                ConfigBuilderError::Config(format!("invalid ignore glob '{}': {}", pattern, e))
            })?;
            builder.add(glob);
        }
        builder
            .build()
            .map_err(|e| ConfigBuilderError::Config(format!("failed to build ignore set: {}", e)))
    }
}

fn is_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}
