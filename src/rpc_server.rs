//! Linx RPC server: JSON-RPC over stdin/stdout for the mobile UI shell.
//!
//! Protocol: one JSON object per line (newline-delimited JSON).
//! Request:  {"id":1, "method":"add.submit", "params":{"name":"...","url":"..."}}
//! Response: {"id":1, "result":{...}} or {"id":1, "error":{"kind":"...","message":"..."}}

use std::path::PathBuf;
use std::sync::Mutex;

use serde_json::{json, Value};
use tokio::io::{self, AsyncBufReadExt, AsyncWriteExt, BufReader};
use tracing::{error, info, warn};

use linx::app::App;
use linx::platform;
use linx::rpc_handler::handle_method;
use linx::services::logging;
use linx::services::settings_engine::{SettingsEngine, SettingsEngineTrait};

/// Prefer LINX_DATA_DIR, fall back to the platform data directory.
fn data_dir() -> PathBuf {
    match std::env::var("LINX_DATA_DIR") {
        Ok(dir) if !dir.is_empty() => PathBuf::from(dir),
        _ => platform::get_data_dir(),
    }
}

async fn write_line(stdout: &mut io::Stdout, value: &Value) -> io::Result<()> {
    stdout.write_all(value.to_string().as_bytes()).await?;
    stdout.write_all(b"\n").await?;
    stdout.flush().await
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let mut settings_engine = SettingsEngine::new(std::env::var("LINX_CONFIG").ok());
    let settings_error = settings_engine.load().err();
    logging::init(&settings_engine.get_settings().logging);
    if let Some(e) = settings_error {
        warn!(error = %e, path = settings_engine.get_config_path(), "using default settings");
    }

    let dir = data_dir();
    std::fs::create_dir_all(&dir)?;
    let db_path = dir.join(&settings_engine.get_settings().storage.database_file);
    let app = Mutex::new(App::new(&db_path, settings_engine)?);

    let mut stdout = io::stdout();
    write_line(&mut stdout, &json!({"event": "ready", "version": env!("CARGO_PKG_VERSION")})).await?;
    info!("rpc server ready");

    let mut lines = BufReader::new(io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        if line.trim().is_empty() {
            continue;
        }

        let req: Value = match serde_json::from_str(&line) {
            Ok(v) => v,
            Err(e) => {
                warn!(error = %e, "unparseable request");
                let err = json!({"id": null, "error": {"kind": "parse_error", "message": e.to_string()}});
                write_line(&mut stdout, &err).await?;
                continue;
            }
        };

        let id = req.get("id").cloned().unwrap_or(Value::Null);
        let method = req.get("method").and_then(Value::as_str).unwrap_or("");
        let params = req.get("params").cloned().unwrap_or(json!({}));

        let response = match handle_method(&app, method, &params) {
            Ok(val) => json!({"id": id, "result": val}),
            Err(err) => {
                if err.kind == "storage_write" {
                    error!(method, message = %err.message, "request failed");
                }
                json!({"id": id, "error": err})
            }
        };
        write_line(&mut stdout, &response).await?;
    }

    info!("stdin closed, shutting down");
    Ok(())
}
