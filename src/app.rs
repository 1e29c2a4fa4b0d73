//! App Core for Linx.
//!
//! Central struct holding the settings engine and the edit session for the
//! category tree, which owns the tree store and its database.

use std::path::Path;

use tracing::info;

use crate::database::Database;
use crate::managers::edit_session::EditSessionController;
use crate::managers::tree_store::TreeStore;
use crate::services::settings_engine::{SettingsEngine, SettingsEngineTrait};

pub type CategorySession = EditSessionController<TreeStore<Database>>;

/// Central application struct.
pub struct App {
    pub settings_engine: SettingsEngine,
    pub session: CategorySession,
}

impl App {
    /// Opens the database at `db_path` and loads the category tree under the
    /// key configured in `settings_engine`.
    pub fn new<P: AsRef<Path>>(
        db_path: P,
        settings_engine: SettingsEngine,
    ) -> Result<Self, Box<dyn std::error::Error>> {
        let db = Database::open(db_path.as_ref())?;
        info!(path = %db_path.as_ref().display(), "opened category database");
        Ok(Self::with_database(db, settings_engine))
    }

    /// Builds an app over an in-memory database with default settings.
    pub fn open_in_memory() -> Result<Self, Box<dyn std::error::Error>> {
        let db = Database::open_in_memory()?;
        Ok(Self::with_database(db, SettingsEngine::new(None)))
    }

    fn with_database(db: Database, settings_engine: SettingsEngine) -> Self {
        let key = settings_engine.get_settings().storage.categories_key.clone();
        let session = EditSessionController::new(TreeStore::with_key(db, key));
        Self {
            settings_engine,
            session,
        }
    }
}
