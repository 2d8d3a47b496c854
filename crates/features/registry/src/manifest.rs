//! Manifest of UI items: metadata only, file paths left unexpanded.

use crate::error::RegistryError;
use crate::fs::write_artifact;
use std::path::PathBuf;
use tracing::info;
use uireg_domain::{BuildConfig, RegistryItem};

/// Renders the pretty-printed manifest array of items tagged `ui_type`, in registry order.
///
/// # Errors
/// Returns [`RegistryError::Json`] if serialization fails.
pub fn render_manifest(items: &[RegistryItem], ui_type: &str) -> Result<String, RegistryError> {
    let selected: Vec<&RegistryItem> = items.iter().filter(|item| item.is_kind(ui_type)).collect();
    Ok(serde_json::to_string_pretty(&selected)?)
}

/// Writes the manifest to [`BuildConfig::manifest_path`], replacing any previous content.
///
/// # Errors
/// Returns an error if the manifest cannot be rendered or written.
pub fn emit_manifest(
    config: &BuildConfig,
    items: &[RegistryItem],
) -> Result<PathBuf, RegistryError> {
    let path = config.manifest_path();
    write_artifact(&path, &render_manifest(items, &config.ui_type)?)?;
    info!("Generated manifest {}", path.display());
    Ok(path)
}
