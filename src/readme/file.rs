//! README file access
//!
//! Whole-file reads, and writes that replace the file atomically through a
//! temporary sibling so an interrupted run never leaves a truncated README.

use crate::error::FileError;
use std::fs;
use std::io::{self, Write};
use std::path::Path;
use tempfile::NamedTempFile;

/// Read the whole README into memory
pub fn read_readme(path: &Path) -> Result<String, FileError> {
    fs::read_to_string(path).map_err(|e| match e.kind() {
        io::ErrorKind::NotFound => FileError::NotFound(path.to_path_buf()),
        _ => FileError::Read {
            path: path.to_path_buf(),
            error: e.to_string(),
        },
    })
}

/// Replace the README with `contents`
///
/// The new contents land in a temporary file in the same directory, which is
/// then renamed over the original. Existing permissions are carried over.
pub fn write_readme(path: &Path, contents: &str) -> Result<(), FileError> {
    let write_err = |e: io::Error| FileError::Write {
        path: path.to_path_buf(),
        error: e.to_string(),
    };

    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let mut tmp = NamedTempFile::new_in(dir).map_err(write_err)?;
    tmp.write_all(contents.as_bytes()).map_err(write_err)?;
    tmp.as_file().sync_all().map_err(write_err)?;

    if let Ok(metadata) = fs::metadata(path) {
        fs::set_permissions(tmp.path(), metadata.permissions()).map_err(write_err)?;
    }

    tmp.persist(path).map_err(|e| write_err(e.error))?;
    Ok(())
}
