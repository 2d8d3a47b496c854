use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

const REGISTRY: &str = r#"[
  { "name": "button", "type": "ui", "registryDependencies": [], "files": ["ui/button.tsx"] },
  { "name": "use-toast", "type": "hook", "registryDependencies": [], "files": ["hook/use-toast.ts"] }
]"#;

fn write(root: &Path, relative: &str, contents: &str) {
    let path = root.join(relative);
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, contents).unwrap();
}

fn project(registry: &str) -> TempDir {
    let dir = tempfile::tempdir().unwrap();
    write(dir.path(), "src/registry/registry.json", registry);
    write(dir.path(), "src/registry/ui/button.tsx", "export const Button = 1;\r\n");
    dir
}

fn cli() -> Command {
    Command::cargo_bin("build-registry").unwrap()
}

#[test]
fn builds_all_artifacts_by_default() {
    let dir = project(REGISTRY);

    cli()
        .arg("--root")
        .arg(dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Built registry: 2 items, 1 asset bundles"));

    let index = fs::read_to_string(dir.path().join("src/__registry__/index.tsx")).unwrap();
    assert!(index.contains(r#""use-toast": {"#));

    let bundle = fs::read_to_string(dir.path().join("public/registry/ui/button.json")).unwrap();
    let bundle: serde_json::Value = serde_json::from_str(&bundle).unwrap();
    assert_eq!(bundle["files"][0]["content"], "export const Button = 1;\n");

    let manifest = fs::read_to_string(dir.path().join("public/registry/index.json")).unwrap();
    let manifest: serde_json::Value = serde_json::from_str(&manifest).unwrap();
    assert_eq!(manifest.as_array().unwrap().len(), 1);
}

#[test]
fn resolves_paths_from_working_directory() {
    let dir = project(REGISTRY);

    cli().current_dir(dir.path()).arg("build").assert().success();
    assert!(dir.path().join("public/registry/ui/button.json").is_file());
}

#[test]
fn invalid_registry_fails_without_output() {
    let dir = project(r#"[{ "name": "Button", "type": "ui", "registryDependencies": [], "files": [] }]"#);

    cli()
        .arg("--root")
        .arg(dir.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("Registry validation failed"))
        .stderr(predicate::str::contains("/0/name"));

    assert!(!dir.path().join("public").exists());
    assert!(!dir.path().join("src/__registry__").exists());
}

#[test]
fn validation_issues_are_printed_once() {
    let dir = project(
        r#"[
          { "name": "Button", "type": "ui", "registryDependencies": [], "files": [] },
          { "name": "card", "type": "", "registryDependencies": [], "files": [] }
        ]"#,
    );

    let output = cli().arg("--root").arg(dir.path()).assert().failure().get_output().clone();
    let stderr = String::from_utf8_lossy(&output.stderr);

    assert_eq!(stderr.matches("/0/name").count(), 1);
    assert_eq!(stderr.matches("/1/type").count(), 1);
}

#[test]
fn validate_writes_nothing() {
    let dir = project(REGISTRY);

    cli()
        .args(["validate", "--root"])
        .arg(dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Registry is valid: 2 items"));

    assert!(!dir.path().join("public").exists());
}

#[test]
fn missing_source_file_fails() {
    let dir = project(
        r#"[{ "name": "card", "type": "ui", "registryDependencies": [], "files": ["ui/card.tsx"] }]"#,
    );

    cli()
        .arg("--root")
        .arg(dir.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("card.tsx"));
}

#[test]
fn config_file_relocates_outputs() {
    let dir = project(REGISTRY);
    write(dir.path(), "registry.toml", "public_dir = \"dist/registry\"\n");

    cli().arg("--root").arg(dir.path()).arg("-q").assert().success();

    assert!(dir.path().join("dist/registry/ui/button.json").is_file());
    assert!(dir.path().join("dist/registry/index.json").is_file());
}

#[test]
fn json_logs_go_to_stderr() {
    let dir = project(REGISTRY);

    cli()
        .arg("--root")
        .arg(dir.path())
        .arg("--log-json")
        .assert()
        .success()
        .stderr(predicate::str::contains(r#""level":"INFO""#))
        .stdout(predicate::str::contains("\"level\"").not());
}
