//! Integration-level unit tests for the SettingsEngine public API.

use linx::services::settings_engine::{SettingsEngine, SettingsEngineTrait};
use linx::types::settings::LinxSettings;
use serde_json::json;
use tempfile::TempDir;

fn engine_in_temp(dir: &TempDir) -> SettingsEngine {
    let path = dir
        .path()
        .join("settings.json")
        .to_string_lossy()
        .to_string();
    SettingsEngine::new(Some(path))
}

#[test]
fn test_load_defaults_when_no_config_file_exists() {
    let dir = TempDir::new().unwrap();
    let mut engine = engine_in_temp(&dir);
    assert_eq!(engine.load().unwrap(), LinxSettings::default());
}

#[test]
fn test_set_value_persists_changes() {
    let dir = TempDir::new().unwrap();
    {
        let mut engine = engine_in_temp(&dir);
        engine.load().unwrap();
        engine
            .set_value("storage.categories_key", json!("bookmarks"))
            .unwrap();
    }

    let mut engine = engine_in_temp(&dir);
    let settings = engine.load().unwrap();
    assert_eq!(settings.storage.categories_key, "bookmarks");
}

#[test]
fn test_set_value_rejects_unknown_key() {
    let dir = TempDir::new().unwrap();
    let mut engine = engine_in_temp(&dir);
    engine.load().unwrap();
    assert!(engine.set_value("storage.nope", json!(1)).is_err());
    assert!(engine.set_value("nope.level", json!(1)).is_err());
    assert!(engine.set_value("", json!(1)).is_err());
}

#[test]
fn test_set_value_rejects_wrong_type() {
    let dir = TempDir::new().unwrap();
    let mut engine = engine_in_temp(&dir);
    engine.load().unwrap();
    assert!(engine.set_value("logging.json", json!("yes")).is_err());
    assert!(!engine.get_settings().logging.json);
}

#[test]
fn test_load_malformed_json_is_an_error() {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join("settings.json"), "{ invalid json }").unwrap();
    let mut engine = engine_in_temp(&dir);
    assert!(engine.load().is_err());
}

#[test]
fn test_reset_restores_defaults() {
    let dir = TempDir::new().unwrap();
    let mut engine = engine_in_temp(&dir);
    engine.load().unwrap();
    engine.set_value("logging.level", json!("debug")).unwrap();
    assert_eq!(engine.get_settings().logging.level, "debug");

    engine.reset().unwrap();
    assert_eq!(*engine.get_settings(), LinxSettings::default());
}
