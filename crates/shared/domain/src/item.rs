use crate::constants::COMPONENT_ROOT;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// A single validated registry entry.
///
/// Field order is significant: it is the key order of every JSON artifact built from the item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegistryItem {
    /// Unique, slug-like identifier.
    pub name: String,
    /// Category tag, e.g. `"ui"`.
    #[serde(rename = "type")]
    pub kind: String,
    /// Names of other items this one depends on, in declaration order.
    pub registry_dependencies: Vec<String>,
    /// Paths relative to the source directory.
    pub files: Vec<String>,
}

impl RegistryItem {
    /// Returns `true` when the item carries the given type tag.
    #[must_use]
    pub fn is_kind(&self, kind: &str) -> bool {
        self.kind == kind
    }

    /// Lazy reference to the item's implementation module.
    #[must_use]
    pub fn component(&self) -> ComponentRef {
        ComponentRef::new(&self.kind, &self.name)
    }

    /// Builds the asset bundle payload: this item's metadata with `files` replaced by `assets`.
    #[must_use]
    pub fn bundle(&self, assets: Vec<FileAsset>) -> AssetBundle<'_> {
        AssetBundle {
            name: &self.name,
            kind: &self.kind,
            registry_dependencies: &self.registry_dependencies,
            files: assets,
        }
    }
}

/// A registry source file inlined into an asset bundle.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileAsset {
    /// Final path segment of the registry file.
    pub name: String,
    /// File text with LF line endings.
    pub content: String,
}

impl FileAsset {
    /// Creates an asset for `path`, naming it after the path's final segment.
    #[must_use]
    pub fn new(path: &str, content: impl Into<String>) -> Self {
        let name = Path::new(path)
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or(path)
            .to_owned();
        Self { name, content: content.into() }
    }
}

/// Per-component JSON payload: item metadata plus inlined file contents.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AssetBundle<'a> {
    pub name: &'a str,
    #[serde(rename = "type")]
    pub kind: &'a str,
    pub registry_dependencies: &'a [String],
    pub files: Vec<FileAsset>,
}

/// Deferred reference to a component implementation module.
///
/// Holds only the module specifier; resolving it is left to whoever renders the component.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ComponentRef {
    module: String,
}

impl ComponentRef {
    #[must_use]
    pub fn new(kind: &str, name: &str) -> Self {
        Self { module: format!("{COMPONENT_ROOT}/{kind}/{name}") }
    }

    /// Module specifier, e.g. `~/registry/ui/button`.
    #[must_use]
    pub fn module(&self) -> &str {
        &self.module
    }
}
