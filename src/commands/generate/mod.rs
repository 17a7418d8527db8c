//! Implementation of the config generation run.
//!
//! A run validates the device request, resolves config and layout, selects
//! devices, then renders and writes each device's config in order. The first
//! failure ends the run unless keep-going is enabled, in which case failures
//! are reported per device and summarized at the end. Configs written before
//! a failure stay on disk.

use crate::cli::Cli;
use crate::config::Config;
use crate::context::{Layout, current_dir};
use crate::error::{ConfigBuilderError, Result};
use crate::output::OutputWriter;
use crate::render::TemplateRenderer;
use crate::report::RunReport;
use crate::select::{DeviceSelector, Request, Selection};
use crate::status::{Status, StatusPrinter};
use std::collections::HashSet;
use std::path::{Path, PathBuf};
use tracing::{error, info, warn};


/// Options for a generation run.
#[derive(Debug, Clone, Default)]
pub struct GenerateOptions {
    /// Device sources from the command line.
    pub request: Request,
    /// Continue past failing devices (also enabled by `keep_going` in config).
    pub keep_going: bool,
    /// Where to write the JSON run report, if anywhere.
    pub report: Option<PathBuf>,
    /// Explicit config file.
    pub config: Option<PathBuf>,
}

impl GenerateOptions {
    pub fn from_cli(cli: &Cli) -> Self {
        Self {
            request: cli.request(),
            keep_going: cli.keep_going,
            report: cli.report.clone(),
            config: cli.config.clone(),
        }
    }
}

/// Run config generation from the current working directory.
///
/// The request is validated before anything touches the filesystem.
pub fn cmd_generate(options: &GenerateOptions, printer: &StatusPrinter) -> Result<()> {
    let selection = options.request.validate()?;
    let work_dir = current_dir()?;

    generate_in(&work_dir, &selection, options, printer).map(|_| ())
}

/// Run config generation against `work_dir` and return the run report.
pub fn generate_in(
    work_dir: &Path,
    selection: &Selection,
    options: &GenerateOptions,
    printer: &StatusPrinter,
) -> Result<RunReport> {
    let config = Config::resolve(options.config.as_deref(), work_dir)?;
    let layout = Layout::resolve_from(work_dir, &config);
    layout.check_distinct()?;
    let keep_going = options.keep_going || config.keep_going;

    let selector = DeviceSelector::new(&layout.template_dir, config.ignore_set()?);
    let devices = dedupe(selector.select(selection)?);
    info!(
        selection = selection.kind(),
        devices = devices.len(),
        keep_going,
        "starting generation run"
    );

    let mut report = RunReport::new(&layout.template_dir, &layout.output_dir, selection.kind());

    let outcome = if devices.is_empty() {
        printer.print(Status::Warning, "No devices selected, nothing to generate");
        Ok(())
    } else {
        let renderer = TemplateRenderer::new(&layout.template_dir, &config);
        let writer = OutputWriter::new(&layout.output_dir);
        printer.print(
            Status::Header,
            &format!(
                "Generating {} device config(s) into {}",
                devices.len(),
                layout.display_path(writer.output_dir())
            ),
        );
        process_devices(
            &devices, &renderer, &writer, &layout, keep_going, &mut report, printer,
        )
    };

    if let Some(report_path) = &options.report {
        let report_path = work_dir.join(report_path);
        match report.write(&report_path) {
            Ok(()) => printer.print(
                Status::Link,
                &format!("Report written to {}", layout.display_path(&report_path)),
            ),
            // The run's own failure is the more useful one to surface.
            Err(err) if outcome.is_err() => error!("{}", err),
            Err(err) => return Err(err),
        }
    }

    outcome.map(|()| report)
}

/// Render and write each device in order.
fn process_devices(
    devices: &[String],
    renderer: &TemplateRenderer,
    writer: &OutputWriter,
    layout: &Layout,
    keep_going: bool,
    report: &mut RunReport,
    printer: &StatusPrinter,
) -> Result<()> {
    let mut first_failure_code = None;

    for device in devices {
        match generate_device(device, renderer, writer) {
            Ok((path, bytes)) => {
                let shown = layout.display_path(&path);
                printer.print(Status::OkGreen, &format!("[ OK ] {} -> {}", device, shown));
                report.record_written(device, shown, bytes);
            }
            Err(err) => {
                report.record_failed(device, &err);
                if !keep_going {
                    return Err(err);
                }
                warn!(device = %device, "device failed, continuing: {}", err);
                printer.eprint(Status::Failed, &format!("[FAIL] - {}", err));
                first_failure_code.get_or_insert(err.exit_code());
            }
        }
    }

    let failed = report.failed_count();
    printer.print(
        Status::OkBlue,
        &format!(
            "Generated {} of {} device config(s)",
            devices.len() - failed,
            devices.len()
        ),
    );

    match first_failure_code {
        Some(code) => Err(ConfigBuilderError::PartialFailure {
            failed,
            total: devices.len(),
            code,
        }),
        None => Ok(()),
    }
}

/// Render one device and write its config, returning the path and size.
fn generate_device(
    device: &str,
    renderer: &TemplateRenderer,
    writer: &OutputWriter,
) -> Result<(PathBuf, usize)> {
    let config = renderer.render(device)?;
    let path = writer.write(device, &config)?;
    Ok((path, config.len()))
}

/// Drop repeated identifiers, keeping the first occurrence.
fn dedupe(devices: Vec<String>) -> Vec<String> {
    let mut seen = HashSet::new();
    devices
        .into_iter()
        .filter(|device| {
            let first = seen.insert(device.clone());
            if !first {
                warn!(device = %device, "duplicate device identifier, rendering it once");
            }
            first
        })
        .collect()
}
