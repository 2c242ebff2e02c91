//! Integration-level unit tests for the SettingsEngine public API.
//!
//! These tests exercise the SettingsEngine through its public trait interface,
//! validating default loading, value persistence, and reset behavior.

use std::path::PathBuf;

use bark::services::settings_engine::{SettingsEngine, SettingsEngineTrait};
use bark::types::errors::SettingsError;
use bark::types::settings::BarkSettings;
use serde_json::json;
use tempfile::TempDir;

/// Helper: a SettingsEngine backed by a file inside `dir`.
fn engine_in_temp(dir: &TempDir) -> SettingsEngine {
    SettingsEngine::new(Some(dir.path().join("settings.json")))
}

#[test]
fn test_load_defaults_when_no_config_file_exists() {
    let dir = TempDir::new().unwrap();
    let mut engine = engine_in_temp(&dir);

    let settings = engine.load().unwrap();

    assert_eq!(settings, BarkSettings::default());
    assert!(!dir.path().join("settings.json").exists(), "load must not write");
}

/// A change made through `set_value` is visible to a fresh engine.
#[test]
fn test_set_value_persists_changes() {
    let dir = TempDir::new().unwrap();

    {
        let mut engine = engine_in_temp(&dir);
        engine.load().unwrap();
        engine.set_value("fetch.timeout_secs", json!(30)).unwrap();
    }

    let mut engine = engine_in_temp(&dir);
    let settings = engine.load().unwrap();
    assert_eq!(settings.fetch.timeout_secs, 30);
}

#[test]
fn test_set_data_dir_changes_database_path() {
    let dir = TempDir::new().unwrap();
    let mut engine = engine_in_temp(&dir);
    engine.load().unwrap();

    engine
        .set_value("storage.data_dir", json!("/srv/bark"))
        .unwrap();

    assert_eq!(
        engine.get_settings().database_path().unwrap(),
        PathBuf::from("/srv/bark/database")
    );
}

#[test]
fn test_set_value_unknown_key_is_rejected() {
    let dir = TempDir::new().unwrap();
    let mut engine = engine_in_temp(&dir);

    let result = engine.set_value("fetch.retries", json!(3));

    assert!(matches!(result, Err(SettingsError::InvalidKey(_))));
    assert!(!dir.path().join("settings.json").exists());
}

#[test]
fn test_set_value_empty_key_is_rejected() {
    let dir = TempDir::new().unwrap();
    let mut engine = engine_in_temp(&dir);

    assert!(matches!(
        engine.set_value("", json!(1)),
        Err(SettingsError::InvalidKey(_))
    ));
}

#[test]
fn test_set_value_wrong_type_is_rejected() {
    let dir = TempDir::new().unwrap();
    let mut engine = engine_in_temp(&dir);

    let result = engine.set_value("fetch.timeout_secs", json!("soon"));

    assert!(matches!(result, Err(SettingsError::InvalidValue(_))));
    assert_eq!(engine.get_settings(), &BarkSettings::default());
}

#[test]
fn test_reset_restores_defaults() {
    let dir = TempDir::new().unwrap();
    let mut engine = engine_in_temp(&dir);
    engine.set_value("fetch.user_agent", json!("custom/1.0")).unwrap();

    engine.reset().unwrap();

    let mut reloaded = engine_in_temp(&dir);
    assert_eq!(reloaded.load().unwrap(), BarkSettings::default());
}

#[test]
fn test_malformed_file_is_serialization_error() {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join("settings.json"), "{ not json").unwrap();
    let mut engine = engine_in_temp(&dir);

    assert!(matches!(
        engine.load(),
        Err(SettingsError::Serialization(_))
    ));
}

/// Valid JSON that is not an object must not load as defaults.
#[test]
fn test_non_object_file_is_serialization_error() {
    for body in ["[]", "42", "\"settings\"", "null"] {
        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join("settings.json"), body).unwrap();
        let mut engine = engine_in_temp(&dir);

        assert!(
            matches!(engine.load(), Err(SettingsError::Serialization(_))),
            "settings file {:?} should be rejected",
            body
        );
    }
}

#[test]
fn test_save_creates_parent_directories() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("a").join("b").join("settings.json");
    let engine = SettingsEngine::new(Some(path.clone()));

    engine.save().unwrap();

    assert!(path.is_file());
    assert_eq!(engine.get_config_path(), path.as_path());
}
