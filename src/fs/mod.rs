//! Filesystem utilities for config-builder.
//!
//! This module provides the two write primitives the output writer needs:
//! idempotent directory creation and whole-file replacement.

pub mod write;

pub use write::ensure_dir;
pub use write::replace_file;
