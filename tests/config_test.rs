//! Layered loading of `TreeConfig`: defaults, then TOML file, then env vars.
//!
//! Every test uses its own env prefix so parallel tests cannot see each other's vars.

use std::fs;

use serde_json::json;
use tempfile::TempDir;

use tree_utils::{TreeConfig, TreeError, TreeUtils};

#[test]
fn given_no_sources_when_load_then_defaults() {
    let cfg = TreeConfig::load_with_prefix(None, "TREE_UTILS_TEST_NONE").expect("load config");
    assert_eq!(cfg, TreeConfig::default());
}

#[test]
fn given_toml_file_when_load_then_file_values_override_defaults() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("tree.toml");
    fs::write(&path, "id_field = \"key\"\nchildren_field = \"items\"\n").unwrap();

    let cfg = TreeConfig::load_with_prefix(Some(path.as_path()), "TREE_UTILS_TEST_FILE").expect("load config");

    assert_eq!(cfg.id_field, "key");
    assert_eq!(cfg.parent_id_field, "parentId");
    assert_eq!(cfg.children_field, "items");
}

#[test]
fn given_env_var_when_load_then_env_overrides_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("tree.toml");
    fs::write(&path, "parent_id_field = \"fromFile\"\n").unwrap();
    std::env::set_var("TREE_UTILS_TEST_ENV_PARENT_ID_FIELD", "fromEnv");

    let cfg = TreeConfig::load_with_prefix(Some(path.as_path()), "TREE_UTILS_TEST_ENV").expect("load config");
    std::env::remove_var("TREE_UTILS_TEST_ENV_PARENT_ID_FIELD");

    assert_eq!(cfg.parent_id_field, "fromEnv");
    assert_eq!(cfg.id_field, "id");
}

#[test]
fn given_missing_file_when_load_then_config_error() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("absent.toml");

    let result = TreeConfig::load_with_prefix(Some(path.as_path()), "TREE_UTILS_TEST_MISSING");

    assert!(matches!(result, Err(TreeError::Config { .. })), "{:?}", result);
}

#[test]
fn given_loaded_config_when_converting_then_fields_are_used() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("tree.toml");
    fs::write(
        &path,
        "id_field = \"key\"\nparent_id_field = \"up\"\nchildren_field = \"items\"\n",
    )
    .unwrap();
    let cfg = TreeConfig::load_with_prefix(Some(path.as_path()), "TREE_UTILS_TEST_USE").expect("load config");
    let utils = TreeUtils::new(cfg);

    let tree = utils.list_to_tree(&[json!({"key": "a", "up": null}), json!({"key": "b", "up": "a"})]);

    assert_eq!(
        tree,
        vec![json!({"key": "a", "up": null, "items": [{"key": "b", "up": "a", "items": []}]})]
    );
}
