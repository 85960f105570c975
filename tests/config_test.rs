//! Tests for layered settings

use std::fs;

use tempfile::TempDir;

use deptree::application::DuplicatePolicy;
use deptree::config::{local_config_path, Settings};

fn env(pairs: &[(&str, &str)]) -> config::Map<String, String> {
    pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

#[test]
fn given_global_and_local_config_when_load_then_local_wins() {
    // Arrange
    let temp = TempDir::new().unwrap();
    let global = temp.path().join("deptree.toml");
    fs::write(&global, "on_duplicate = \"warn\"\nstrict_fields = false\n").unwrap();
    fs::write(local_config_path(temp.path()), "on_duplicate = \"error\"\n").unwrap();

    // Act
    let settings = Settings::load_from(Some(global.as_path()), Some(temp.path()), Some(env(&[]))).unwrap();

    // Assert
    assert_eq!(settings.on_duplicate, DuplicatePolicy::Error);
    assert!(!settings.strict_fields, "unset local key inherits global");
}

#[test]
fn given_env_override_when_load_then_env_wins() {
    let temp = TempDir::new().unwrap();
    fs::write(local_config_path(temp.path()), "on_duplicate = \"error\"\n").unwrap();

    let settings = Settings::load_from(
        None,
        Some(temp.path()),
        Some(env(&[
            ("DEPTREE_ON_DUPLICATE", "warn"),
            ("DEPTREE_STRICT_FIELDS", "false"),
        ])),
    )
    .unwrap();

    assert_eq!(settings.on_duplicate, DuplicatePolicy::Warn);
    assert!(!settings.strict_fields);
}

#[test]
fn given_missing_files_when_load_then_defaults() {
    let temp = TempDir::new().unwrap();
    let settings = Settings::load_from(
        Some(temp.path().join("nope.toml").as_path()),
        Some(temp.path()),
        Some(env(&[])),
    )
    .unwrap();
    assert_eq!(settings, Settings::default());
}

#[test]
fn given_unknown_policy_when_load_then_errors() {
    let temp = TempDir::new().unwrap();
    fs::write(local_config_path(temp.path()), "on_duplicate = \"loud\"\n").unwrap();
    assert!(Settings::load_from(None, Some(temp.path()), Some(env(&[]))).is_err());

    let env_err = Settings::load_from(None, None, Some(env(&[("DEPTREE_ON_DUPLICATE", "loud")])));
    assert!(env_err.is_err());
}

#[test]
fn given_env_without_policy_when_load_then_keeps_file_policy() {
    let temp = TempDir::new().unwrap();
    fs::write(local_config_path(temp.path()), "on_duplicate = \"warn\"\n").unwrap();
    let settings = Settings::load_from(
        None,
        Some(temp.path()),
        Some(env(&[("DEPTREE_STRICT_FIELDS", "false")])),
    )
    .unwrap();
    assert_eq!(settings.on_duplicate, DuplicatePolicy::Warn);
    assert!(!settings.strict_fields);
}

#[test]
fn given_unknown_key_when_load_then_errors() {
    let temp = TempDir::new().unwrap();
    fs::write(local_config_path(temp.path()), "colour = true\n").unwrap();
    assert!(Settings::load_from(None, Some(temp.path()), Some(env(&[]))).is_err());
}
