//! Device selection.
//!
//! A run targets either an explicit, comma-separated list of device names or
//! every template file whose name fully matches a regex. [`Request`] is the
//! raw form taken from the command line; [`Request::validate`] turns it into a
//! [`Selection`] before any file I/O happens, and [`DeviceSelector`] resolves
//! the selection against the template directory.

use crate::error::{ConfigBuilderError, Result};
use globset::GlobSet;
use regex::Regex;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};


/// Device sources as given on the command line.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Request {
    /// Comma-separated device identifiers.
    pub devices: Option<String>,
    /// Regex selecting template files by name.
    pub pattern: Option<String>,
}

/// A validated device source.
#[derive(Debug, Clone)]
pub enum Selection {
    /// Explicit identifiers, in the order given.
    Devices(Vec<String>),
    /// Template files whose names fully match this (already anchored) regex.
    Pattern(Regex),
}

impl Selection {
    /// Short name of the source kind, used in reports.
    pub fn kind(&self) -> &'static str {
        match self {
            Selection::Devices(_) => "devices",
            Selection::Pattern(_) => "pattern",
        }
    }
}

impl Request {
    /// Check the request and compile it into a [`Selection`].
    ///
    /// Empty flag values count as absent. When both sources are given, the
    /// explicit list wins.
    ///
    /// # Errors
    ///
    /// * `ConfigBuilderError::Usage` - no source given, the pattern does not
    ///   compile, or a listed identifier is not a plain file name
    pub fn validate(&self) -> Result<Selection> {
        let devices = self.devices.as_deref().filter(|s| !s.is_empty());
        let pattern = self.pattern.as_deref().filter(|s| !s.is_empty());

        match (devices, pattern) {
            (Some(list), pattern) => {
                if let Some(pattern) = pattern {
                    warn!(%pattern, "both --devices and --pattern given; ignoring the pattern");
                }
                let devices = split_devices(list);
                for device in &devices {
                    check_identifier(device)?;
                }
                Ok(Selection::Devices(devices))
            }
            (None, Some(pattern)) => Ok(Selection::Pattern(anchored_pattern(pattern)?)),
            (None, None) => Err(ConfigBuilderError::Usage(
                "No device specified with -d or regex pattern specified with -p".to_string(),
            )),
        }
    }
}

/// Split a comma-separated device list, keeping order and duplicates.
pub fn split_devices(list: &str) -> Vec<String> {
    list.split(',').map(str::to_string).collect()
}

/// Compile `pattern` so that it must match a whole file name.
///
/// The pattern is wrapped in a non-capturing group so that alternations stay
/// anchored on both sides: `a|b` becomes `^(?:a|b)$`.
pub fn anchored_pattern(pattern: &str) -> Result<Regex> {
    Regex::new(&format!("^(?:{})$", pattern)).map_err(|e| {
        ConfigBuilderError::Usage(format!("invalid regex pattern '{}': {}", pattern, e))
    })
}

/// Whether `name` can name a single template file on every platform.
///
/// Backslash is refused even where it is not a separator, since the template
/// loader refuses it too.
fn is_plain_name(name: &str) -> bool {
    !name.is_empty()
        && name != "."
        && name != ".."
        && !name.contains('\\')
        && !name.chars().any(std::path::is_separator)
}

/// Reject identifiers that cannot name a single file in a directory.
fn check_identifier(device: &str) -> Result<()> {
    let plain = is_plain_name(device);

    if plain {
        Ok(())
    } else {
        Err(ConfigBuilderError::Usage(format!(
            "invalid device identifier '{}': must be a plain file name",
            device
        )))
    }
}

/// Resolves a [`Selection`] against a template directory.
#[derive(Debug)]
pub struct DeviceSelector {
    template_dir: PathBuf,
    ignore: GlobSet,
}

impl DeviceSelector {
    pub fn new(template_dir: impl Into<PathBuf>, ignore: GlobSet) -> Self {
        Self {
            template_dir: template_dir.into(),
            ignore,
        }
    }

    /// The device identifiers to render, in order.
    ///
    /// Explicit lists are returned verbatim without checking that templates
    /// exist. Pattern selection lists the template directory (not
    /// recursively) and keeps files whose names match, in listing order.
    /// Zero matches is an empty result, not an error.
    pub fn select(&self, selection: &Selection) -> Result<Vec<String>> {
        match selection {
            Selection::Devices(devices) => Ok(devices.clone()),
            Selection::Pattern(regex) => {
                let devices: Vec<String> = self
                    .template_files()?
                    .into_iter()
                    .filter(|name| regex.is_match(name))
                    .collect();
                debug!(
                    pattern = regex.as_str(),
                    matched = devices.len(),
                    "pattern selection complete"
                );
                Ok(devices)
            }
        }
    }

    /// Names of the regular files directly inside the template directory,
    /// minus ignored ones.
    fn template_files(&self) -> Result<Vec<String>> {
        let entries = fs::read_dir(&self.template_dir).map_err(|e| {
            ConfigBuilderError::Filesystem(format!(
                "failed to list template directory '{}': {}",
                self.template_dir.display(),
                e
            ))
        })?;

        let mut names = Vec::new();
        for entry in entries {
            let entry = entry.map_err(|e| {
                ConfigBuilderError::Filesystem(format!(
                    "failed to read entry in '{}': {}",
                    self.template_dir.display(),
                    e
                ))
            })?;

            if !is_file(&entry.path()) {
                continue;
            }

            let Some(name) = entry.file_name().to_str().map(str::to_string) else {
                warn!(
                    name = %entry.file_name().to_string_lossy(),
                    "skipping template with a non-UTF-8 file name"
                );
                continue;
            };

            if !is_plain_name(&name) {
                warn!(%name, "skipping template whose name cannot be a device identifier");
                continue;
            }

            if self.ignore.is_match(&name) {
                debug!(%name, "template ignored by config");
                continue;
            }

            names.push(name);
        }

        Ok(names)
    }
}

/// Regular file, or a symlink resolving to one.
fn is_file(path: &Path) -> bool {
    fs::metadata(path).map(|m| m.is_file()).unwrap_or(false)
}
