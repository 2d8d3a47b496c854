//! Per-component asset bundles: item metadata plus the text of every declared file.

use crate::error::RegistryError;
use crate::fs::{ensure_dir, read_source, write_artifact};
use std::borrow::Cow;
use std::path::PathBuf;
use tracing::info;
use uireg_domain::{BuildConfig, FileAsset, RegistryItem};

/// Replaces every CRLF pair with LF. Lone carriage returns are kept.
#[must_use]
pub fn normalize_line_endings(text: &str) -> Cow<'_, str> {
    if text.contains("\r\n") { Cow::Owned(text.replace("\r\n", "\n")) } else { Cow::Borrowed(text) }
}

/// Reads the item's files, in declaration order, from the source directory.
///
/// # Errors
/// Returns [`RegistryError::Io`] naming the first file that is missing or unreadable.
pub fn load_assets(
    config: &BuildConfig,
    item: &RegistryItem,
) -> Result<Vec<FileAsset>, RegistryError> {
    item.files
        .iter()
        .map(|file| {
            let raw = read_source(&config.source_path(file))?;
            Ok(FileAsset::new(file, normalize_line_endings(&raw)))
        })
        .collect()
}

/// Renders the pretty-printed JSON bundle of a single item.
///
/// # Errors
/// Returns an error if a source file cannot be read.
pub fn render_bundle(config: &BuildConfig, item: &RegistryItem) -> Result<String, RegistryError> {
    let assets = load_assets(config, item)?;
    Ok(serde_json::to_string_pretty(&item.bundle(assets))?)
}

/// Writes `{asset_dir}/{name}.json` for every item of the configured UI type.
///
/// The asset directory is created up front, even when no item qualifies.
/// Bundles are written one by one; a failure leaves earlier bundles on disk.
///
/// # Errors
/// Returns an error if the directory cannot be created, a source file cannot be read,
/// or a bundle cannot be written.
pub fn emit_assets(
    config: &BuildConfig,
    items: &[RegistryItem],
) -> Result<Vec<PathBuf>, RegistryError> {
    ensure_dir(&config.asset_dir())?;

    let mut written = Vec::new();
    for item in items.iter().filter(|item| item.is_kind(&config.ui_type)) {
        let path = config.asset_path(&item.name);
        write_artifact(&path, &render_bundle(config, item)?)?;
        written.push(path);
    }

    info!(bundles = written.len(), "Generated asset bundles in {}", config.asset_dir().display());
    Ok(written)
}
