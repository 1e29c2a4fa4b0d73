//! RPC method handler for the Linx JSON-RPC protocol.
//!
//! Extracted from `rpc_server.rs` so it can be unit-tested independently.
//! Each method maps one UI intent onto the edit session held by [`App`].

use std::sync::Mutex;

use serde::Serialize;
use serde_json::{json, Value};

use crate::app::App;
use crate::managers::edit_session::EditSessionTrait;
use crate::services::settings_engine::SettingsEngineTrait;
use crate::types::errors::{SessionError, SettingsError};
use crate::types::node::NodeType;

/// Error payload returned to the RPC client.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RpcError {
    pub kind: String,
    pub message: String,
}

impl RpcError {
    pub fn new(kind: &str, message: impl Into<String>) -> Self {
        Self {
            kind: kind.to_string(),
            message: message.into(),
        }
    }

    fn invalid_params(message: impl Into<String>) -> Self {
        Self::new("invalid_params", message)
    }
}

impl From<SessionError> for RpcError {
    fn from(err: SessionError) -> Self {
        Self::new(err.kind(), err.to_string())
    }
}

impl From<SettingsError> for RpcError {
    fn from(err: SettingsError) -> Self {
        Self::new(err.kind(), err.to_string())
    }
}

fn str_param<'a>(params: &'a Value, name: &str) -> Result<&'a str, RpcError> {
    params
        .get(name)
        .and_then(Value::as_str)
        .ok_or_else(|| RpcError::invalid_params(format!("missing {}", name)))
}

fn to_json<T: Serialize>(value: &T) -> Result<Value, RpcError> {
    serde_json::to_value(value).map_err(|e| RpcError::new("serialization", e.to_string()))
}

/// Dispatch a JSON-RPC method call to the edit session or the settings engine.
///
/// Returns `Ok(Value)` on success or an [`RpcError`] carrying the error kind.
pub fn handle_method(app: &Mutex<App>, method: &str, params: &Value) -> Result<Value, RpcError> {
    let mut a = app
        .lock()
        .map_err(|e| RpcError::new("internal", e.to_string()))?;
    let App {
        settings_engine,
        session,
    } = &mut *a;

    match method {
        "ping" => Ok(json!({"pong": true})),

        // ─── Tree ───
        "tree.load" => {
            let reloaded = session.reload();
            Ok(json!({"reloaded": reloaded, "tree": to_json(&session.tree())?}))
        }
        "tree.get" => Ok(json!({"tree": to_json(&session.tree())?})),

        // ─── Browse view ───
        "view.toggle_section" => {
            let id = str_param(params, "id")?;
            session.toggle_section(id);
            Ok(json!({"expanded": session.browse().expanded_ids()}))
        }
        "link.open" => {
            let id = str_param(params, "id")?;
            let url = session.open_link(id)?;
            Ok(json!({"url": url}))
        }

        // ─── Edit session ───
        "edit.state" => Ok(json!({"mode": session.mode(), "tree": to_json(&session.tree())?})),
        "edit.enter" => {
            session.enter_edit()?;
            Ok(json!({"mode": session.mode()}))
        }
        "edit.remove" => {
            let id = str_param(params, "id")?;
            session.remove_by_id(id)?;
            Ok(json!({"tree": to_json(&session.tree())?}))
        }
        "edit.confirm" => {
            session.confirm()?;
            Ok(json!({"mode": session.mode(), "tree": to_json(&session.tree())?}))
        }
        "edit.cancel" => {
            session.cancel()?;
            Ok(json!({"mode": session.mode(), "tree": to_json(&session.tree())?}))
        }

        // ─── Add-item flow ───
        "add.state" => to_json(&session.add_state()),
        "add.choose_type" => {
            let raw = params
                .get("type")
                .cloned()
                .ok_or_else(|| RpcError::invalid_params("missing type"))?;
            let node_type: NodeType = serde_json::from_value(raw)
                .map_err(|_| RpcError::invalid_params("type must be \"folder\" or \"link\""))?;
            session.choose_type(node_type);
            to_json(&session.add_state())
        }
        "add.set_name" => {
            session.set_name(str_param(params, "name")?);
            to_json(&session.add_state())
        }
        "add.set_url" => {
            session.set_url(str_param(params, "url")?);
            to_json(&session.add_state())
        }
        "add.folder_picker" => to_json(&session.folder_picker()),
        "add.toggle_expand" => {
            session.toggle_expand(str_param(params, "id")?);
            to_json(&session.folder_picker())
        }
        "add.select_folder" => {
            let id = params.get("id").and_then(Value::as_str);
            session.select_folder(id);
            to_json(&session.add_state())
        }
        "add.submit" => {
            let state = session.add_state();
            let name = params
                .get("name")
                .and_then(Value::as_str)
                .map(str::to_string)
                .unwrap_or(state.name);
            let url = params
                .get("url")
                .and_then(Value::as_str)
                .map(str::to_string)
                .unwrap_or(state.url);
            let outcome = session.submit(&name, Some(&url))?;
            Ok(json!({
                "id": outcome.node_id,
                "message": outcome.message,
                "tree": to_json(&outcome.tree)?,
            }))
        }
        "add.cancel" => {
            session.cancel_add();
            to_json(&session.add_state())
        }

        // ─── Settings ───
        // Storage settings take effect the next time the server starts.
        "settings.get" => to_json(settings_engine.get_settings()),
        "settings.set" => {
            let key = str_param(params, "key")?;
            let value = params
                .get("value")
                .cloned()
                .ok_or_else(|| RpcError::invalid_params("missing value"))?;
            settings_engine.set_value(key, value)?;
            to_json(settings_engine.get_settings())
        }
        "settings.reset" => {
            settings_engine.reset()?;
            to_json(settings_engine.get_settings())
        }

        _ => Err(RpcError::new("unknown_method", format!("unknown method: {}", method))),
    }
}
