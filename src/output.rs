//! Writing rendered configs.

use crate::error::Result;
use crate::fs::{ensure_dir, replace_file};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Writes one rendered config per device into the output directory.
#[derive(Debug, Clone)]
pub struct OutputWriter {
    output_dir: PathBuf,
}

impl OutputWriter {
    pub fn new(output_dir: impl Into<PathBuf>) -> Self {
        Self {
            output_dir: output_dir.into(),
        }
    }

    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    /// Create the output directory if it is missing. Existing contents are
    /// left alone.
    pub fn ensure_dir(&self) -> Result<()> {
        ensure_dir(&self.output_dir)
    }

    /// Write `config` to `<output_dir>/<device>`, replacing any previous file,
    /// and return the path written.
    pub fn write(&self, device: &str, config: &str) -> Result<PathBuf> {
        self.ensure_dir()?;

        let path = self.output_dir.join(device);
        replace_file(&path, config.as_bytes())?;

        debug!(device, path = %path.display(), bytes = config.len(), "wrote config");
        Ok(path)
    }
}
