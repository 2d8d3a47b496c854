use serde_json::json;
use std::path::PathBuf;
use uireg_domain::{BuildConfig, RegistryItem};

#[test]
fn config_defaults_match_layout() {
    let cfg = BuildConfig::with_root("/site");

    assert_eq!(cfg.registry_path(), PathBuf::from("/site/src/registry/registry.json"));
    assert_eq!(cfg.source_path("ui/button.tsx"), PathBuf::from("/site/src/registry/ui/button.tsx"));
    assert_eq!(cfg.index_path(), PathBuf::from("/site/src/__registry__/index.tsx"));
    assert_eq!(cfg.asset_dir(), PathBuf::from("/site/public/registry/ui"));
    assert_eq!(cfg.asset_path("button"), PathBuf::from("/site/public/registry/ui/button.json"));
    assert_eq!(cfg.manifest_path(), PathBuf::from("/site/public/registry/index.json"));
    assert_eq!(cfg.ui_type, "ui");
}

#[test]
fn config_deserializes_partial_overrides() {
    let raw = json!({ "root": "/tmp/docs", "public_dir": "static/r" });

    let cfg: BuildConfig = serde_json::from_value(raw).expect("config deserialize");
    assert_eq!(cfg.root, PathBuf::from("/tmp/docs"));
    assert_eq!(cfg.manifest_path(), PathBuf::from("/tmp/docs/static/r/index.json"));
    assert_eq!(cfg.index_file, PathBuf::from("src/__registry__/index.tsx"));
}

#[test]
fn item_serializes_in_registry_key_order() {
    let item: RegistryItem = serde_json::from_value(json!({
        "files": ["ui/button.tsx"],
        "name": "button",
        "registryDependencies": ["icon"],
        "type": "ui",
        "description": "dropped",
    }))
    .expect("item deserialize");

    let text = serde_json::to_string(&item).expect("item serialize");
    assert_eq!(
        text,
        r#"{"name":"button","type":"ui","registryDependencies":["icon"],"files":["ui/button.tsx"]}"#
    );
}

#[test]
fn bundle_replaces_files_with_assets() {
    let item = RegistryItem {
        name: "button".to_owned(),
        kind: "ui".to_owned(),
        registry_dependencies: vec![],
        files: vec!["ui/button.tsx".to_owned()],
    };

    let bundle = item.bundle(vec![uireg_domain::FileAsset::new("ui/button.tsx", "x")]);
    let value = serde_json::to_value(&bundle).expect("bundle serialize");

    assert_eq!(
        value,
        json!({
            "name": "button",
            "type": "ui",
            "registryDependencies": [],
            "files": [{ "name": "button.tsx", "content": "x" }],
        })
    );
}
