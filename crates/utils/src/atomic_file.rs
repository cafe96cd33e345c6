//! Atomic file writes so a failed run never leaves a half-written env file

use ssmenv_core::{Error, Result};
use std::io::Write;
use std::path::Path;
use tempfile::NamedTempFile;
use tracing::debug;

/// Write `content` to `path` by writing a temporary file in the same
/// directory and renaming it over the destination.
pub fn write_atomic(path: &Path, content: &[u8]) -> Result<()> {
    // `Path::parent` is `Some("")` for bare file names
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    if !dir.exists() {
        return Err(Error::file_system(
            dir,
            "locate output directory",
            std::io::Error::new(std::io::ErrorKind::NotFound, "directory does not exist"),
        ));
    }

    let mut temp = NamedTempFile::new_in(dir)
        .map_err(|e| Error::file_system(dir, "create temporary file", e))?;

    temp.write_all(content)
        .map_err(|e| Error::file_system(temp.path(), "write to temporary file", e))?;

    temp.as_file()
        .sync_all()
        .map_err(|e| Error::file_system(temp.path(), "sync temporary file", e))?;

    // The temporary file is removed on drop if persisting fails
    temp.persist(path)
        .map_err(|e| Error::file_system(path, "atomic rename", e.error))?;

    debug!("Wrote {} bytes to {}", content.len(), path.display());
    Ok(())
}

/// Write string content to a file atomically
pub fn write_atomic_string(path: &Path, content: &str) -> Result<()> {
    write_atomic(path, content.as_bytes())
}
