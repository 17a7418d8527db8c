//! Template rendering.
//!
//! Each device has one template file in the template directory, named after
//! the device. Templates use Jinja syntax via `minijinja`; the only value the
//! program supplies is the device identifier, exposed under the configured
//! variable name (`HOSTNAME` by default):
//!
//! ```text
//! hostname {{ HOSTNAME }}
//! {% if HOSTNAME is startingwith("edge-") %}
//! role edge
//! {% endif %}
//! ```
//!
//! `{% include %}` and `{% extends %}` resolve against the same directory.

use crate::config::{Config, UndefinedMode};
use crate::error::{ConfigBuilderError, Result};
use minijinja::{AutoEscape, Environment, ErrorKind, UndefinedBehavior};
use std::collections::BTreeMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Renders device templates from one directory.
pub struct TemplateRenderer {
    env: Environment<'static>,
    template_dir: PathBuf,
    variable_name: String,
}

impl std::fmt::Debug for TemplateRenderer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TemplateRenderer")
            .field("template_dir", &self.template_dir)
            .field("variable_name", &self.variable_name)
            .finish()
    }
}

impl TemplateRenderer {
    /// Create a renderer for templates in `template_dir`, with undefined
    /// handling, newline handling and variable name taken from `config`.
    pub fn new(template_dir: impl Into<PathBuf>, config: &Config) -> Self {
        let template_dir = template_dir.into();

        let mut env = Environment::new();
        env.set_undefined_behavior(match config.undefined {
            UndefinedMode::Lenient => UndefinedBehavior::Lenient,
            UndefinedMode::Strict => UndefinedBehavior::Strict,
            UndefinedMode::Chainable => UndefinedBehavior::Chainable,
        });
        env.set_keep_trailing_newline(config.keep_trailing_newline);
        // Device configs are plain text whatever the file extension.
        env.set_auto_escape_callback(|_| AutoEscape::None);

        let loader_dir = template_dir.clone();
        env.set_loader(move |name| load_template(&loader_dir, name));

        Self {
            env,
            template_dir,
            variable_name: config.variable_name.clone(),
        }
    }

    /// Render the template for `device`.
    ///
    /// # Errors
    ///
    /// * `ConfigBuilderError::TemplateNotFound` - no template file for the device
    /// * `ConfigBuilderError::InvalidTemplate` - the template (or something it
    ///   includes) fails to load, parse or render
    pub fn render(&self, device: &str) -> Result<String> {
        let template = self.env.get_template(device).map_err(|e| {
            if e.kind() == ErrorKind::TemplateNotFound {
                ConfigBuilderError::TemplateNotFound {
                    device: device.to_string(),
                    path: self.template_dir.join(device),
                }
            } else {
                invalid_template(device, &e)
            }
        })?;

        let mut context = BTreeMap::new();
        context.insert(self.variable_name.as_str(), device);

        let rendered = template
            .render(&context)
            .map_err(|e| invalid_template(device, &e))?;

        debug!(device, bytes = rendered.len(), "rendered template");
        Ok(rendered)
    }
}

fn invalid_template(device: &str, err: &minijinja::Error) -> ConfigBuilderError {
    ConfigBuilderError::InvalidTemplate {
        device: device.to_string(),
        message: describe(err),
    }
}

/// The error message followed by its source chain.
fn describe(err: &minijinja::Error) -> String {
    let mut message = err.to_string();
    let mut source = std::error::Error::source(err);
    while let Some(cause) = source {
        message.push_str(": ");
        message.push_str(&cause.to_string());
        source = std::error::Error::source(cause);
    }
    message
}

/// Loader for templates under `dir`.
///
/// Names are `/`-separated paths relative to `dir`. Empty and `.` segments
/// are dropped. Names with a `..` segment or a backslash are treated as
/// missing.
fn load_template(
    dir: &Path,
    name: &str,
) -> std::result::Result<Option<String>, minijinja::Error> {
    if name.contains('\\') {
        return Ok(None);
    }

    let mut path = dir.to_path_buf();
    let mut segments = 0;
    for segment in name.split('/') {
        match segment {
            "" | "." => continue,
            ".." => return Ok(None),
            _ => {
                path.push(segment);
                segments += 1;
            }
        }
    }
    if segments == 0 {
        return Ok(None);
    }

    match fs::read_to_string(&path) {
        Ok(source) => Ok(Some(source)),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
        Err(e) => Err(minijinja::Error::new(
            ErrorKind::InvalidOperation,
            format!("could not read template '{}'", name),
        )
        .with_source(e)),
    }
}
