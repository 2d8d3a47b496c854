//! Generated index module: one lazily-loaded descriptor per registry item.

use crate::error::{RegistryError, RegistryErrorExt};
use crate::fs::write_artifact;
use std::fmt::Write as FmtWrite;
use std::path::PathBuf;
use tracing::info;
use uireg_domain::constants::INDEX_FILE_PREFIX;
use uireg_domain::{BuildConfig, ComponentRef, RegistryItem};

const HEADER: &str = r#"
// @ts-nocheck
// This file is autogenerated by build-registry.
// Do not edit this file directly.
import { lazy } from "solid-js"

export const Index: Record<string, any> = {
"#;

const FOOTER: &str = "\n}\n";

/// Renders the index module for `items`, keyed by name in registry order.
///
/// # Errors
/// Returns an error if a string fails to serialize as a literal.
pub fn render_index(items: &[RegistryItem]) -> Result<String, RegistryError> {
    let mut w = String::from(HEADER);
    for item in items {
        render_entry(&mut w, item).context(format!("Rendering index entry \"{}\"", item.name))?;
    }
    w.push_str(FOOTER);
    Ok(w)
}

/// Writes the index module to [`BuildConfig::index_path`], replacing any previous content.
///
/// # Errors
/// Returns an error if rendering fails or the file cannot be written.
pub fn emit_index(
    config: &BuildConfig,
    items: &[RegistryItem],
) -> Result<PathBuf, RegistryError> {
    let path = config.index_path();
    write_artifact(&path, &render_index(items)?)?;
    info!(entries = items.len(), "Generated index module {}", path.display());
    Ok(path)
}

fn render_entry(w: &mut String, item: &RegistryItem) -> Result<(), RegistryError> {
    let name = literal(&item.name)?;
    let files = item
        .files
        .iter()
        .map(|file| literal(&format!("{INDEX_FILE_PREFIX}{file}")))
        .collect::<Result<Vec<_>, _>>()?;

    let deps = serde_json::to_string(&item.registry_dependencies)?;

    writeln!(w)?;
    writeln!(w, "  {name}: {{")?;
    writeln!(w, "    name: {name},")?;
    writeln!(w, "    type: {},", literal(&item.kind)?)?;
    writeln!(w, "    registryDependencies: {deps},")?;
    writeln!(w, "    component: {},", lazy_import(&item.component())?)?;
    writeln!(w, "    files: [{}],", files.join(","))?;
    write!(w, "  }},")?;
    Ok(())
}

/// Zero-argument loader thunk; nothing is imported until the component renders.
fn lazy_import(component: &ComponentRef) -> Result<String, RegistryError> {
    Ok(format!("lazy(() => import({}))", literal(component.module())?))
}

/// JSON string literals are valid JavaScript string literals.
fn literal(value: &str) -> Result<String, RegistryError> {
    Ok(serde_json::to_string(value)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn item(name: &str, kind: &str, deps: &[&str], files: &[&str]) -> RegistryItem {
        RegistryItem {
            name: name.to_owned(),
            kind: kind.to_owned(),
            registry_dependencies: deps.iter().map(|s| (*s).to_owned()).collect(),
            files: files.iter().map(|s| (*s).to_owned()).collect(),
        }
    }

    #[test]
    fn renders_single_entry_exactly() {
        let out = render_index(&[item("button", "ui", &[], &["ui/button.tsx"])]).unwrap();

        let expected = r#"
// @ts-nocheck
// This file is autogenerated by build-registry.
// Do not edit this file directly.
import { lazy } from "solid-js"

export const Index: Record<string, any> = {

  "button": {
    name: "button",
    type: "ui",
    registryDependencies: [],
    component: lazy(() => import("~/registry/ui/button")),
    files: ["registry/ui/button.tsx"],
  },
}
"#;
        assert_eq!(out, expected);
    }

    #[test]
    fn empty_registry_renders_empty_map() {
        let out = render_index(&[]).unwrap();
        assert!(out.ends_with("export const Index: Record<string, any> = {\n\n}\n"));
    }

    #[test]
    fn files_are_prefixed_and_joined_without_spaces() {
        let dialog = item("dialog", "ui", &["button"], &["ui/dialog.tsx", "ui/dialog.css"]);
        let out = render_index(&[dialog]).unwrap();
        assert!(out.contains(r#"files: ["registry/ui/dialog.tsx","registry/ui/dialog.css"],"#));
        assert!(out.contains(r#"registryDependencies: ["button"],"#));
    }

    #[test]
    fn component_path_uses_type_and_name() {
        let out = render_index(&[item("use-toast", "hook", &[], &[])]).unwrap();
        assert!(out.contains(r#"component: lazy(() => import("~/registry/hook/use-toast")),"#));
    }

    #[test]
    fn entries_follow_registry_order() {
        let out = render_index(&[
            item("zeta", "ui", &[], &[]),
            item("alpha", "ui", &[], &[]),
        ])
        .unwrap();
        let zeta = out.find(r#""zeta": {"#).unwrap();
        let alpha = out.find(r#""alpha": {"#).unwrap();
        assert!(zeta < alpha);
    }

    proptest! {
        #[test]
        fn one_entry_per_item_and_stable(
            names in prop::collection::btree_set("[a-z]{1,8}(-[a-z0-9]{1,4})?", 0..8),
        ) {
            let items: Vec<RegistryItem> = names
                .iter()
                .map(|name| item(name, "ui", &[], &["ui/x.tsx"]))
                .collect();

            let first = render_index(&items).unwrap();
            prop_assert_eq!(&first, &render_index(&items).unwrap());
            prop_assert_eq!(first.matches("component: lazy(").count(), items.len());
            for name in &names {
                let key = format!("  \"{name}\": {{");
                prop_assert!(first.contains(&key));
            }
        }
    }
}
