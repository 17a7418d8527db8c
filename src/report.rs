//! Run reports.
//!
//! `--report <PATH>` records what a run did as a single pretty-printed JSON
//! document: when and where it ran, which directories it used, and the
//! outcome for every device it attempted.
//!
//! ```json
//! {
//!   "generated_at": "2024-05-01T12:00:00Z",
//!   "generated_on": "netops-01",
//!   "template_dir": "/work/targetspec",
//!   "output_dir": "/work/out",
//!   "selection": "pattern",
//!   "devices": [
//!     { "device": "edge-a", "status": "written", "output": "out/edge-a", "bytes": 24 },
//!     { "device": "edge-b", "status": "failed", "error": "..." }
//!   ]
//! }
//! ```

use crate::error::{ConfigBuilderError, Result};
use crate::fs::{ensure_dir, replace_file};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Outcome for one device.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum DeviceOutcome {
    /// The config was rendered and written.
    Written { output: String, bytes: usize },
    /// Rendering or writing failed.
    Failed { error: String },
}

/// One device entry in the report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeviceRecord {
    pub device: String,
    #[serde(flatten)]
    pub outcome: DeviceOutcome,
}

/// The report for one run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunReport {
    /// RFC3339 timestamp of when the run started.
    pub generated_at: DateTime<Utc>,

    /// Host the run executed on.
    pub generated_on: String,

    pub template_dir: String,
    pub output_dir: String,

    /// How devices were chosen: `devices` or `pattern`.
    pub selection: String,

    pub devices: Vec<DeviceRecord>,
}

impl RunReport {
    /// Start a report for a run using the given directories.
    pub fn new(template_dir: &Path, output_dir: &Path, selection: &str) -> Self {
        Self {
            generated_at: Utc::now(),
            generated_on: local_hostname(),
            template_dir: template_dir.display().to_string(),
            output_dir: output_dir.display().to_string(),
            selection: selection.to_string(),
            devices: Vec::new(),
        }
    }

    pub fn record_written(&mut self, device: &str, output: String, bytes: usize) {
        self.devices.push(DeviceRecord {
            device: device.to_string(),
            outcome: DeviceOutcome::Written { output, bytes },
        });
    }

    pub fn record_failed(&mut self, device: &str, error: &ConfigBuilderError) {
        self.devices.push(DeviceRecord {
            device: device.to_string(),
            outcome: DeviceOutcome::Failed {
                error: error.to_string(),
            },
        });
    }

    /// Number of devices that failed.
    pub fn failed_count(&self) -> usize {
        self.devices
            .iter()
            .filter(|r| matches!(r.outcome, DeviceOutcome::Failed { .. }))
            .count()
    }

    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self).map_err(|e| {
            ConfigBuilderError::Filesystem(format!("failed to serialize run report: {}", e))
        })
    }

    /// Write the report to `path`, creating its parent directory if needed.
    pub fn write(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            ensure_dir(parent)?;
        }

        let mut json = self.to_json()?;
        json.push('\n');
        replace_file(path, json.as_bytes())
    }
}

fn local_hostname() -> String {
    hostname::get()
        .map(|h| h.to_string_lossy().to_string())
        .unwrap_or_else(|_| "unknown".to_string())
}
