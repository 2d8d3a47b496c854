//! Fixed names and relative paths of the registry layout.

/// Type tag of items that get asset bundles and manifest entries.
pub const UI_TYPE: &str = "ui";

/// Registry description, relative to the root.
pub const REGISTRY_FILE: &str = "src/registry/registry.json";
/// Directory that `files` entries are resolved against, relative to the root.
pub const SOURCE_DIR: &str = "src/registry";
/// Generated index module, relative to the root.
pub const INDEX_FILE: &str = "src/__registry__/index.tsx";
/// Output directory for JSON artifacts, relative to the root.
pub const PUBLIC_DIR: &str = "public/registry";
/// Manifest file name inside [`PUBLIC_DIR`].
pub const MANIFEST_FILE: &str = "index.json";

/// Module specifier root used by lazy component imports.
pub const COMPONENT_ROOT: &str = "~/registry";
/// Prefix prepended to every file path listed in the index module.
pub const INDEX_FILE_PREFIX: &str = "registry/";
