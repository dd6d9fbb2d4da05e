//! Integration tests for fob-plugin-alias
//!
//! These tests walk the imports of a small on-disk project through the
//! plugin, the way Rolldown calls `resolve_id` for every import edge.

#![allow(clippy::disallowed_methods)]

use fob_alias::AliasOptions;
use fob_plugin_alias::FobAliasPlugin;
use rolldown_plugin::Plugin;
use serde_json::json;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

/// Helper to create a file (and its parent directories) in the project
fn create_file(dir: &TempDir, name: &str, content: &str) -> String {
    let file_path = dir.path().join(name);
    if let Some(parent) = file_path.parent() {
        fs::create_dir_all(parent).expect("Failed to create directories");
    }
    fs::write(&file_path, content).expect("Failed to write test file");
    file_path.to_str().unwrap().to_string()
}

fn plugin_for(dir: &TempDir, value: serde_json::Value) -> FobAliasPlugin {
    let options = AliasOptions::from_value(value)
        .expect("valid options")
        .with_cwd(dir.path());
    FobAliasPlugin::new(options)
}

#[test]
fn test_aliased_index_import() {
    let dir = TempDir::new().unwrap();
    let importer = create_file(&dir, "files/aliasIndex.js", "import test from 'aliasIndex';");
    let index = create_file(&dir, "files/folder/index.js", "export default 1;");

    let plugin = plugin_for(&dir, json!({ "aliasIndex": "./folder" }));
    let output = plugin.resolve_output("aliasIndex", Some(&importer)).unwrap();

    assert_eq!(output.id.to_string(), index);
}

#[test]
fn test_fixture_project_edges() {
    let dir = TempDir::new().unwrap();
    let entry = create_file(&dir, "files/index.js", "export default 0;");
    let alias_me = create_file(&dir, "files/aliasMe.js", "export default 42;");
    let local_alias_me = create_file(&dir, "files/localAliasMe.js", "export default 42;");
    let another_number = create_file(&dir, "files/folder/anotherNumber.js", "export default 33;");
    create_file(&dir, "files/nonAliased.js", "export default 4;");

    let plugin = plugin_for(
        &dir,
        json!({
            "fancyNumber": "./aliasMe",
            "./anotherFancyNumber": "./localAliasMe",
            "numberFolder": "./folder",
            "./numberFolder": "./folder",
        }),
    );

    let resolve = |specifier: &str| {
        plugin
            .resolve_output(specifier, Some(&entry))
            .map(|output| output.id.to_string())
    };

    assert_eq!(resolve("./nonAliased"), None);
    assert_eq!(resolve("fancyNumber"), Some(alias_me));
    assert_eq!(resolve("./anotherFancyNumber"), Some(local_alias_me));
    assert_eq!(resolve("./numberFolder/anotherNumber"), Some(another_number.clone()));
    assert_eq!(resolve("numberFolder/anotherNumber"), Some(another_number));
}

#[test]
fn test_jsx_extension_preference() {
    let dir = TempDir::new().unwrap();
    let entry = create_file(&dir, "files/index.js", "import ember from 'ember';");
    let hipster = create_file(&dir, "files/folder/hipster.jsx", "export default 'hipster';");

    let plugin = plugin_for(
        &dir,
        json!({
            "ember": "./folder/hipster",
            "resolve": [".js", ".jsx"],
        }),
    );

    let output = plugin.resolve_output("ember", Some(&entry)).unwrap();
    assert_eq!(output.id.to_string(), hipster);
    assert!(Path::new(&hipster).is_file());
}

#[test]
fn test_plugin_identity() {
    let dir = TempDir::new().unwrap();
    let plugin = plugin_for(&dir, json!({}));
    assert_eq!(plugin.name(), "fob-alias");
    assert!(plugin.resolve_output("anything", None).is_none());
}
