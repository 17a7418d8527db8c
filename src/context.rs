//! Working-directory layout resolution for config-builder.
//!
//! Every run reads templates from one directory and writes rendered configs
//! into another, both relative to the working directory unless the config
//! gives absolute paths. This module turns the config into absolute paths
//! once, so the rest of the program never consults the process cwd.

use crate::config::Config;
use crate::error::{ConfigBuilderError, Result};
use std::env;
use std::path::{Component, Path, PathBuf};

/// Resolved directories for a run. All paths are absolute.
#[derive(Debug, Clone)]
pub struct Layout {
    /// Directory the run was started from.
    pub work_dir: PathBuf,

    /// Directory holding one template per device (default: `{work_dir}/targetspec/`).
    pub template_dir: PathBuf,

    /// Directory receiving rendered configs (default: `{work_dir}/out/`).
    pub output_dir: PathBuf,
}

impl Layout {
    /// Resolve the layout against a specific directory.
    ///
    /// This is useful for testing or when the working directory is known.
    pub fn resolve_from<P: AsRef<Path>>(work_dir: P, config: &Config) -> Self {
        let work_dir = work_dir.as_ref().to_path_buf();
        let template_dir = work_dir.join(&config.template_dir);
        let output_dir = work_dir.join(&config.output_dir);

        Self {
            work_dir,
            template_dir,
            output_dir,
        }
    }

    /// Fail when the template and output directories are the same place.
    ///
    /// Paths are compared after lexical normalization, and again after
    /// canonicalization when both directories exist, so `out` and `./out`
    /// (or a symlinked alias) are caught. Writing into the template
    /// directory would replace templates with their own rendered output.
    pub fn check_distinct(&self) -> Result<()> {
        let same_lexically = normalize(&self.template_dir) == normalize(&self.output_dir);
        let same_on_disk = match (
            self.template_dir.canonicalize(),
            self.output_dir.canonicalize(),
        ) {
            (Ok(template_dir), Ok(output_dir)) => template_dir == output_dir,
            _ => false,
        };

        if same_lexically || same_on_disk {
            return Err(ConfigBuilderError::Config(format!(
                "template_dir and output_dir resolve to the same directory '{}'",
                self.display_path(&self.template_dir)
            )));
        }
        Ok(())
    }

    /// Render a path relative to the working directory when possible.
    ///
    /// Used for status lines and reports so they read `out/edge-a` rather
    /// than a long absolute path.
    pub fn display_path(&self, path: &Path) -> String {
        path.strip_prefix(&self.work_dir)
            .unwrap_or(path)
            .display()
            .to_string()
    }
}

/// Drop `.` components and fold `..` into its parent, without touching disk.
fn normalize(path: &Path) -> PathBuf {
    let mut normalized = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                if !normalized.pop() {
                    normalized.push(component);
                }
            }
            other => normalized.push(other),
        }
    }
    normalized
}

/// The process working directory, as a config-builder error on failure.
pub fn current_dir() -> Result<PathBuf> {
    env::current_dir().map_err(|e| {
        ConfigBuilderError::Filesystem(format!("failed to get current working directory: {}", e))
    })
}
