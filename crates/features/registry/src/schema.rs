//! # Registry Schema
//!
//! Validation of the raw registry before anything is generated.
//!
//! The structural pass runs the embedded JSON Schema (draft 2020-12) against every raw item.
//! Items that pass are deserialized into [`RegistryItem`]; unknown keys are dropped on the way.
//! A semantic pass then checks what a per-item schema cannot express: names must be unique
//! across the registry, and `files` entries must stay inside the source directory.
//!
//! Every issue is collected; validation never stops at the first failure.

use crate::error::RegistryError;
use fxhash::FxHashMap;
use jsonschema::Validator;
use serde::Deserialize;
use serde_json::Value;
use std::fmt;
use std::path::{Component, Path};
use uireg_domain::RegistryItem;

const ITEM_SCHEMA: &str = include_str!("../schema/registry-item.schema.json");

/// A single validation issue.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Issue {
    /// JSON Pointer into the raw registry, e.g. `/3/files/0`.
    pub path: String,
    pub message: String,
}

impl Issue {
    pub fn new(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self { path: path.into(), message: message.into() }
    }
}

impl fmt::Display for Issue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.path.is_empty() {
            write!(f, "  (root): {}", self.message)
        } else {
            write!(f, "  {}: {}", self.path, self.message)
        }
    }
}

/// Ordered collection of validation issues.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Issues(Vec<Issue>);

impl Issues {
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn push(&mut self, issue: Issue) {
        self.0.push(issue);
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Issue> {
        self.0.iter()
    }

    #[must_use]
    pub fn into_inner(self) -> Vec<Issue> {
        self.0
    }
}

impl From<Vec<Issue>> for Issues {
    fn from(issues: Vec<Issue>) -> Self {
        Self(issues)
    }
}

impl<'a> IntoIterator for &'a Issues {
    type Item = &'a Issue;
    type IntoIter = std::slice::Iter<'a, Issue>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl fmt::Display for Issues {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, issue) in self.0.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{issue}")?;
        }
        Ok(())
    }
}

/// Outcome of validating a raw registry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationResult {
    Success { output: Vec<RegistryItem> },
    Failure { issues: Issues },
}

impl ValidationResult {
    #[must_use]
    pub const fn is_success(&self) -> bool {
        matches!(self, Self::Success { .. })
    }

    /// Converts the outcome into the typed list or a [`RegistryError::Validation`].
    ///
    /// # Errors
    /// Returns [`RegistryError::Validation`] carrying every issue on failure.
    pub fn into_result(self) -> Result<Vec<RegistryItem>, RegistryError> {
        match self {
            Self::Success { output } => Ok(output),
            Self::Failure { issues } => Err(RegistryError::Validation { issues, context: None }),
        }
    }
}

/// Validates raw registry descriptors into typed items.
pub trait Schema {
    fn validate(&self, raw: &[Value]) -> ValidationResult;
}

/// Default registry schema, backed by the embedded JSON Schema.
pub struct RegistrySchema {
    item: Validator,
}

impl fmt::Debug for RegistrySchema {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RegistrySchema").finish_non_exhaustive()
    }
}

impl RegistrySchema {
    /// Compiles the embedded item schema.
    ///
    /// # Errors
    /// Returns [`RegistryError::Schema`] if the embedded schema is not a valid JSON Schema.
    pub fn new() -> Result<Self, RegistryError> {
        let schema: Value = serde_json::from_str(ITEM_SCHEMA)?;
        let item = jsonschema::validator_for(&schema).map_err(|e| RegistryError::Schema {
            message: e.to_string().into(),
            context: Some("Compiling registry item schema".into()),
        })?;
        Ok(Self { item })
    }

    fn check_structure(
        &self,
        index: usize,
        raw: &Value,
        issues: &mut Issues,
    ) -> Option<RegistryItem> {
        let before = issues.len();
        for err in self.item.iter_errors(raw) {
            issues.push(Issue::new(format!("/{index}{}", err.instance_path), err.to_string()));
        }
        if issues.len() > before {
            return None;
        }

        match RegistryItem::deserialize(raw) {
            Ok(item) => Some(item),
            Err(e) => {
                issues.push(Issue::new(format!("/{index}"), e.to_string()));
                None
            },
        }
    }
}

impl Schema for RegistrySchema {
    fn validate(&self, raw: &[Value]) -> ValidationResult {
        let mut issues = Issues::default();
        let mut typed = Vec::with_capacity(raw.len());

        for (index, value) in raw.iter().enumerate() {
            if let Some(item) = self.check_structure(index, value, &mut issues) {
                typed.push((index, item));
            }
        }

        check_unique_names(&typed, &mut issues);
        check_file_paths(&typed, &mut issues);

        if issues.is_empty() {
            ValidationResult::Success { output: typed.into_iter().map(|(_, item)| item).collect() }
        } else {
            ValidationResult::Failure { issues }
        }
    }
}

fn check_unique_names(items: &[(usize, RegistryItem)], issues: &mut Issues) {
    let mut seen: FxHashMap<&str, usize> = FxHashMap::default();
    for (index, item) in items {
        if let Some(first) = seen.get(item.name.as_str()) {
            issues.push(Issue::new(
                format!("/{index}/name"),
                format!("duplicate name \"{}\" (first declared at /{first})", item.name),
            ));
        } else {
            seen.insert(&item.name, *index);
        }
    }
}

fn check_file_paths(items: &[(usize, RegistryItem)], issues: &mut Issues) {
    for (index, item) in items {
        for (j, file) in item.files.iter().enumerate() {
            if !is_contained(file) {
                issues.push(Issue::new(
                    format!("/{index}/files/{j}"),
                    format!("\"{file}\" must be a relative path inside the source directory"),
                ));
            }
        }
    }
}

/// `true` for relative paths without `..` or root segments.
fn is_contained(file: &str) -> bool {
    !file.starts_with('/')
        && !file.starts_with('\\')
        && Path::new(file).components().all(|c| matches!(c, Component::Normal(_) | Component::CurDir))
}
