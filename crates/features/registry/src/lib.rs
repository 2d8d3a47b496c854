//! # Registry
//!
//! Build-time generator for the UI component registry consumed by the documentation site.
//!
//! A run is a straight pipeline over the registry description:
//!
//! 1. [`schema`]: validate the raw items; on failure nothing is written.
//! 2. [`index`]: emit `src/__registry__/index.tsx`, a map from component name to a descriptor
//!    whose `component` is a lazy import of `~/registry/{type}/{name}`.
//! 3. [`assets`]: for every `ui` item, inline its source files (CRLF normalized to LF) into
//!    `public/registry/ui/{name}.json`.
//! 4. [`manifest`]: list the metadata of every `ui` item in `public/registry/index.json`.
//!
//! Output depends only on the registry and the source files, so re-running over unchanged
//! inputs rewrites byte-identical artifacts.
//!
//! ## Example
//!
//! ```rust,no_run
//! use uireg_domain::BuildConfig;
//! use uireg_registry::Pipeline;
//!
//! let report = Pipeline::new(BuildConfig::with_root("apps/docs"))?.run()?;
//! println!("{} items, manifest at {}", report.items, report.manifest.display());
//! # Ok::<(), uireg_registry::RegistryError>(())
//! ```

pub mod assets;
mod error;
mod fs;
pub mod index;
pub mod manifest;
mod pipeline;
pub mod schema;

pub use crate::error::{RegistryError, RegistryErrorExt};
pub use crate::pipeline::{BuildReport, Pipeline};
pub use crate::schema::{Issue, Issues, RegistrySchema, Schema, ValidationResult};
