use serde::{Deserialize, Serialize};

/// Top-level application settings container.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct LinxSettings {
    pub storage: StorageSettings,
    pub logging: LoggingSettings,
}

/// Where the category document lives.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct StorageSettings {
    /// SQLite file name, relative to the data directory.
    pub database_file: String,
    /// Key under which the category document is stored.
    pub categories_key: String,
}

impl Default for StorageSettings {
    fn default() -> Self {
        Self {
            database_file: "linx.db".to_string(),
            categories_key: "categories".to_string(),
        }
    }
}

/// Log output configuration for the RPC binary.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LoggingSettings {
    /// Default `tracing` filter directive, used when `RUST_LOG` is unset.
    pub level: String,
    /// Emit JSON log lines instead of human-readable ones.
    pub json: bool,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            json: false,
        }
    }
}
