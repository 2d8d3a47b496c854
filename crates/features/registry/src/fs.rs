use crate::error::{RegistryError, RegistryErrorExt};
use std::fs;
use std::path::Path;
use tracing::debug;

/// Creates `dir` and any missing parents. Succeeds if it already exists.
pub(crate) fn ensure_dir(dir: &Path) -> Result<(), RegistryError> {
    fs::create_dir_all(dir).context(format!("Failed to create directory {}", dir.display()))
}

/// Reads a source file as text. Invalid UTF-8 sequences become U+FFFD.
pub(crate) fn read_source(path: &Path) -> Result<String, RegistryError> {
    let bytes = fs::read(path).context(format!("Failed to read {}", path.display()))?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

/// Overwrites `path` with `contents`, creating the parent directory first.
pub(crate) fn write_artifact(path: &Path, contents: &str) -> Result<(), RegistryError> {
    if let Some(parent) = path.parent() {
        ensure_dir(parent)?;
    }
    fs::write(path, contents).context(format!("Failed to write {}", path.display()))?;
    debug!(bytes = contents.len(), "Wrote {}", path.display());
    Ok(())
}
