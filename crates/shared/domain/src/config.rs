use crate::constants::{INDEX_FILE, MANIFEST_FILE, PUBLIC_DIR, REGISTRY_FILE, SOURCE_DIR, UI_TYPE};
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Build layout of a registry run.
///
/// Every path except `root` is relative to `root`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct BuildConfig {
    /// Project directory all other paths are resolved against.
    pub root: PathBuf,
    /// JSON array of raw registry items.
    pub registry_file: PathBuf,
    /// Directory holding the files listed by registry items.
    pub source_dir: PathBuf,
    /// Generated index module.
    pub index_file: PathBuf,
    /// Output directory for the asset bundles and the manifest.
    pub public_dir: PathBuf,
    /// Type tag selecting items for asset bundles and the manifest.
    pub ui_type: String,
}

impl Default for BuildConfig {
    fn default() -> Self {
        Self {
            root: PathBuf::from("."),
            registry_file: PathBuf::from(REGISTRY_FILE),
            source_dir: PathBuf::from(SOURCE_DIR),
            index_file: PathBuf::from(INDEX_FILE),
            public_dir: PathBuf::from(PUBLIC_DIR),
            ui_type: UI_TYPE.to_owned(),
        }
    }
}

impl BuildConfig {
    /// Returns a default layout rooted at `root`.
    #[must_use]
    pub fn with_root(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into(), ..Self::default() }
    }

    #[must_use]
    pub fn registry_path(&self) -> PathBuf {
        self.root.join(&self.registry_file)
    }

    /// Location of a registry file entry on disk.
    #[must_use]
    pub fn source_path(&self, file: impl AsRef<Path>) -> PathBuf {
        self.root.join(&self.source_dir).join(file)
    }

    #[must_use]
    pub fn index_path(&self) -> PathBuf {
        self.root.join(&self.index_file)
    }

    /// Directory receiving one `{name}.json` bundle per UI item.
    #[must_use]
    pub fn asset_dir(&self) -> PathBuf {
        self.root.join(&self.public_dir).join(&self.ui_type)
    }

    #[must_use]
    pub fn asset_path(&self, name: &str) -> PathBuf {
        self.asset_dir().join(format!("{name}.json"))
    }

    #[must_use]
    pub fn manifest_path(&self) -> PathBuf {
        self.root.join(&self.public_dir).join(MANIFEST_FILE)
    }
}
