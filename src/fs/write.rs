//! Directory creation and file replacement.
//!
//! `replace_file` follows the usual temp-then-rename pattern:
//! 1. Write content to `.{filename}.tmp` next to the target
//! 2. Sync the file to disk
//! 3. Rename it over the target
//!
//! A rename within one directory replaces the target in a single step, so a
//! reader sees either the old config or the new one. On crash, the temporary
//! file may remain.

use crate::error::{ConfigBuilderError, Result};
use std::fs::{self, File};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

/// Create a directory and its parents if they do not exist yet.
///
/// An existing directory, including one created concurrently by another
/// process, is success.
pub fn ensure_dir<P: AsRef<Path>>(path: P) -> Result<()> {
    let path = path.as_ref();

    match fs::create_dir_all(path) {
        Ok(()) => Ok(()),
        Err(e) if e.kind() == io::ErrorKind::AlreadyExists && path.is_dir() => Ok(()),
        Err(e) => Err(ConfigBuilderError::Filesystem(format!(
            "failed to create directory '{}': {}",
            path.display(),
            e
        ))),
    }
}

/// Replace the contents of `path` with `content`.
///
/// The parent directory must already exist.
pub fn replace_file<P: AsRef<Path>>(path: P, content: &[u8]) -> Result<()> {
    let path = path.as_ref();
    let temp_path = temp_path_for(path)?;

    write_and_sync(&temp_path, content)?;

    fs::rename(&temp_path, path).map_err(|e| {
        let _ = fs::remove_file(&temp_path);
        ConfigBuilderError::Filesystem(format!("failed to replace '{}': {}", path.display(), e))
    })
}

fn temp_path_for(target: &Path) -> Result<PathBuf> {
    let parent = target.parent().unwrap_or(Path::new("."));
    let filename = target.file_name().ok_or_else(|| {
        ConfigBuilderError::Filesystem(format!("invalid output path '{}'", target.display()))
    })?;

    let mut temp_name = std::ffi::OsString::from(".");
    temp_name.push(filename);
    temp_name.push(".tmp");
    Ok(parent.join(temp_name))
}

fn write_and_sync(path: &Path, content: &[u8]) -> Result<()> {
    let mut file = File::create(path).map_err(|e| {
        ConfigBuilderError::Filesystem(format!(
            "failed to create temporary file '{}': {}",
            path.display(),
            e
        ))
    })?;

    file.write_all(content)
        .and_then(|()| file.sync_all())
        .map_err(|e| {
            let _ = fs::remove_file(path);
            ConfigBuilderError::Filesystem(format!(
                "failed to write temporary file '{}': {}",
                path.display(),
                e
            ))
        })
}
