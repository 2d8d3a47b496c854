use crate::assets::emit_assets;
use crate::error::{RegistryError, RegistryErrorExt};
use crate::fs::read_source;
use crate::index::emit_index;
use crate::manifest::emit_manifest;
use crate::schema::{Issue, Issues, RegistrySchema, Schema};
use serde_json::Value;
use std::path::PathBuf;
use tracing::{info, warn};
use uireg_domain::{BuildConfig, RegistryItem};

/// Files produced by a successful build.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildReport {
    /// Number of validated registry items.
    pub items: usize,
    pub index: PathBuf,
    pub assets: Vec<PathBuf>,
    pub manifest: PathBuf,
}

/// Validate → index → asset bundles → manifest, strictly in that order.
///
/// Validation happens before any write, so a malformed registry leaves the output
/// directories untouched.
#[derive(Debug)]
pub struct Pipeline<S = RegistrySchema> {
    config: BuildConfig,
    schema: S,
}

impl Pipeline<RegistrySchema> {
    /// Creates a pipeline using the embedded registry schema.
    ///
    /// # Errors
    /// Returns [`RegistryError::Schema`] if the embedded schema fails to compile.
    pub fn new(config: BuildConfig) -> Result<Self, RegistryError> {
        Ok(Self::with_schema(config, RegistrySchema::new()?))
    }
}

impl<S: Schema> Pipeline<S> {
    pub const fn with_schema(config: BuildConfig, schema: S) -> Self {
        Self { config, schema }
    }

    #[must_use]
    pub const fn config(&self) -> &BuildConfig {
        &self.config
    }

    /// Reads the raw registry from [`BuildConfig::registry_path`].
    ///
    /// # Errors
    /// Returns [`RegistryError::Io`] if the file is unreadable, [`RegistryError::Json`] if it is
    /// not JSON, and [`RegistryError::Validation`] if the document is not an array.
    pub fn load_registry(&self) -> Result<Vec<Value>, RegistryError> {
        let path = self.config.registry_path();
        let text = read_source(&path)?;
        let document: Value = serde_json::from_str(&text)
            .context(format!("Failed to parse registry {}", path.display()))?;

        match document {
            Value::Array(items) => Ok(items),
            other => Err(RegistryError::Validation {
                issues: Issues::from(vec![Issue::new(
                    "",
                    format!("expected an array of registry items, found {}", json_kind(&other)),
                )]),
                context: Some(path.display().to_string().into()),
            }),
        }
    }

    /// Validates the raw registry into typed items.
    ///
    /// # Errors
    /// Returns [`RegistryError::Validation`] with every issue found.
    pub fn validate(&self, raw: &[Value]) -> Result<Vec<RegistryItem>, RegistryError> {
        let result = self.schema.validate(raw).into_result();
        match &result {
            Ok(items) => info!(items = items.len(), "Registry validated"),
            Err(RegistryError::Validation { issues, .. }) => {
                warn!(issues = issues.len(), "Registry validation failed");
            },
            Err(_) => {},
        }
        result
    }

    /// Validates `raw` and writes every artifact.
    ///
    /// # Errors
    /// Returns the validation error before anything is written, or the first I/O error.
    /// Artifacts written before an I/O error are left in place.
    pub fn build(&self, raw: &[Value]) -> Result<BuildReport, RegistryError> {
        let items = self.validate(raw)?;

        let index = emit_index(&self.config, &items)?;
        let assets = emit_assets(&self.config, &items)?;
        let manifest = emit_manifest(&self.config, &items)?;

        Ok(BuildReport { items: items.len(), index, assets, manifest })
    }

    /// Loads the registry file, then [`Pipeline::build`]s it.
    ///
    /// # Errors
    /// See [`Pipeline::load_registry`] and [`Pipeline::build`].
    pub fn run(&self) -> Result<BuildReport, RegistryError> {
        let raw = self.load_registry()?;
        self.build(&raw)
    }
}

const fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
