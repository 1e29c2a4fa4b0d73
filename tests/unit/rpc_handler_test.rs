//! Unit tests for the JSON-RPC methods dispatched by `handle_method`.
//!
//! These exercise the same code path as the `linx-rpc` binary, using a
//! temporary on-disk SQLite database.

use std::sync::Mutex;

use linx::app::App;
use linx::rpc_handler::handle_method;
use linx::services::settings_engine::SettingsEngine;
use serde_json::{json, Value};
use tempfile::TempDir;

fn setup() -> (Mutex<App>, TempDir) {
    let tmp = TempDir::new().expect("Failed to create temp dir");
    let db_path = tmp.path().join("linx.db");
    let settings = SettingsEngine::new(Some(
        tmp.path().join("settings.json").to_string_lossy().to_string(),
    ));
    let app = App::new(&db_path, settings).expect("Failed to init App");
    (Mutex::new(app), tmp)
}

fn call(app: &Mutex<App>, method: &str, params: Value) -> Value {
    handle_method(app, method, &params).unwrap_or_else(|e| panic!("{} failed: {:?}", method, e))
}

fn add(app: &Mutex<App>, node_type: &str, folder: Option<&str>, name: &str, url: Option<&str>) -> String {
    call(app, "add.choose_type", json!({"type": node_type}));
    call(app, "add.select_folder", json!({"id": folder}));
    let mut params = json!({"name": name});
    if let Some(url) = url {
        params["url"] = json!(url);
    }
    let res = call(app, "add.submit", params);
    res["id"].as_str().unwrap().to_string()
}

#[test]
fn test_ping() {
    let app = Mutex::new(App::open_in_memory().expect("Failed to init App"));
    assert_eq!(call(&app, "ping", json!({})), json!({"pong": true}));
}

#[test]
fn test_unknown_method_returns_error() {
    let (app, _tmp) = setup();
    let err = handle_method(&app, "nonexistent.method", &json!({})).unwrap_err();
    assert_eq!(err.kind, "unknown_method");
    assert!(err.message.contains("unknown method"));
}

#[test]
fn test_tree_load_on_empty_store() {
    let (app, _tmp) = setup();
    let res = call(&app, "tree.load", json!({}));
    assert_eq!(res["tree"], json!([]));
    assert_eq!(res["reloaded"], json!(true));
}

#[test]
fn test_add_folder_then_link() {
    let (app, _tmp) = setup();
    let folder = add(&app, "folder", None, "Work", None);
    let link = add(&app, "link", Some(folder.as_str()), "Repo", Some("https://example.com"));

    let tree = call(&app, "tree.get", json!({}))["tree"].clone();
    assert_eq!(
        tree,
        json!([{
            "id": folder, "name": "Work", "position": 0,
            "items": [{"id": link, "name": "Repo", "url": "https://example.com", "position": 0}]
        }])
    );
}

#[test]
fn test_submit_uses_form_state_when_params_absent() {
    let (app, _tmp) = setup();
    call(&app, "add.choose_type", json!({"type": "link"}));
    call(&app, "add.set_name", json!({"name": "Docs"}));
    call(&app, "add.set_url", json!({"url": "https://docs.rs"}));
    let res = call(&app, "add.submit", json!({}));
    assert_eq!(res["message"], "Link added!");
    assert_eq!(res["tree"][0]["url"], "https://docs.rs");
}

#[test]
fn test_add_validation_error_kind() {
    let (app, _tmp) = setup();
    call(&app, "add.choose_type", json!({"type": "link"}));
    let err = handle_method(&app, "add.submit", &json!({"name": "No url"})).unwrap_err();
    assert_eq!(err.kind, "validation");
}

#[test]
fn test_choose_type_rejects_unknown_type() {
    let (app, _tmp) = setup();
    let err = handle_method(&app, "add.choose_type", &json!({"type": "tag"})).unwrap_err();
    assert_eq!(err.kind, "invalid_params");
}

#[test]
fn test_add_into_missing_folder() {
    let (app, _tmp) = setup();
    call(&app, "add.choose_type", json!({"type": "folder"}));
    call(&app, "add.select_folder", json!({"id": "nope"}));
    let err = handle_method(&app, "add.submit", &json!({"name": "X"})).unwrap_err();
    assert_eq!(err.kind, "target_not_found_or_invalid");
    assert_eq!(call(&app, "add.state", json!({}))["selected_folder_id"], "nope");
}

#[test]
fn test_folder_picker_expands_on_toggle() {
    let (app, _tmp) = setup();
    let outer = add(&app, "folder", None, "Outer", None);
    let inner = add(&app, "folder", Some(outer.as_str()), "Inner", None);

    let rows = call(&app, "add.folder_picker", json!({}));
    assert_eq!(rows.as_array().unwrap().len(), 1);

    let rows = call(&app, "add.toggle_expand", json!({"id": outer}));
    let rows = rows.as_array().unwrap();
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[1]["id"], json!(inner));
    assert_eq!(rows[1]["depth"], 1);
}

#[test]
fn test_edit_cancel_rolls_back() {
    let (app, _tmp) = setup();
    let folder = add(&app, "folder", None, "Work", None);

    call(&app, "edit.enter", json!({}));
    let res = call(&app, "edit.remove", json!({"id": folder}));
    assert_eq!(res["tree"], json!([]));

    let res = call(&app, "edit.cancel", json!({}));
    assert_eq!(res["mode"], "viewing");
    assert_eq!(res["tree"][0]["id"], json!(folder));
}

#[test]
fn test_edit_confirm_commits() {
    let (app, _tmp) = setup();
    let folder = add(&app, "folder", None, "Work", None);

    call(&app, "edit.enter", json!({}));
    call(&app, "edit.remove", json!({"id": folder}));
    call(&app, "edit.confirm", json!({}));

    let res = call(&app, "tree.load", json!({}));
    assert_eq!(res["tree"], json!([]));
    let err = handle_method(&app, "edit.cancel", &json!({})).unwrap_err();
    assert_eq!(err.kind, "not_editing");
}

#[test]
fn test_edit_remove_outside_session_is_rejected() {
    let (app, _tmp) = setup();
    let err = handle_method(&app, "edit.remove", &json!({"id": "1"})).unwrap_err();
    assert_eq!(err.kind, "not_editing");
    let err = handle_method(&app, "edit.remove", &json!({})).unwrap_err();
    assert_eq!(err.kind, "invalid_params");
}

#[test]
fn test_link_open_and_sections() {
    let (app, _tmp) = setup();
    let folder = add(&app, "folder", None, "Work", None);
    let link = add(&app, "link", Some(folder.as_str()), "Repo", Some("https://example.com"));

    let res = call(&app, "view.toggle_section", json!({"id": folder}));
    assert_eq!(res["expanded"], json!([folder]));

    let res = call(&app, "link.open", json!({"id": link}));
    assert_eq!(res["url"], "https://example.com");

    call(&app, "edit.enter", json!({}));
    let err = handle_method(&app, "link.open", &json!({"id": link})).unwrap_err();
    assert_eq!(err.kind, "link_unavailable_while_editing");
}

#[test]
fn test_tree_survives_app_restart() {
    let tmp = TempDir::new().unwrap();
    let db_path = tmp.path().join("linx.db");
    let settings_path = tmp.path().join("settings.json").to_string_lossy().to_string();

    let folder = {
        let app = Mutex::new(App::new(&db_path, SettingsEngine::new(Some(settings_path.clone()))).unwrap());
        add(&app, "folder", None, "Work", None)
    };

    let app = Mutex::new(App::new(&db_path, SettingsEngine::new(Some(settings_path))).unwrap());
    let res = call(&app, "tree.get", json!({}));
    assert_eq!(res["tree"][0]["id"], json!(folder));
}

#[test]
fn test_settings_get_set_reset() {
    let (app, tmp) = setup();
    let res = call(&app, "settings.get", json!({}));
    assert_eq!(res["storage"]["categories_key"], "categories");

    let res = call(&app, "settings.set", json!({"key": "logging.level", "value": "debug"}));
    assert_eq!(res["logging"]["level"], "debug");
    let saved = std::fs::read_to_string(tmp.path().join("settings.json")).unwrap();
    assert!(saved.contains("debug"));

    let res = call(&app, "settings.reset", json!({}));
    assert_eq!(res["logging"]["level"], "info");
}

#[test]
fn test_settings_set_rejects_unknown_key_and_bad_value() {
    let (app, _tmp) = setup();
    let err = handle_method(&app, "settings.set", &json!({"key": "theme.dark", "value": true}))
        .unwrap_err();
    assert_eq!(err.kind, "settings_invalid_key");

    let err = handle_method(&app, "settings.set", &json!({"key": "logging.json", "value": "yes"}))
        .unwrap_err();
    assert_eq!(err.kind, "settings_invalid_value");

    let err = handle_method(&app, "settings.set", &json!({"key": "logging.level"})).unwrap_err();
    assert_eq!(err.kind, "invalid_params");
}
