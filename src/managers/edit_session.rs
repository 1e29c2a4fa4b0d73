//! Edit Session Controller for Linx.
//!
//! Holds the in-memory category tree for one screen and mediates every
//! change to it:
//!
//! - **View/edit toggle.** `enter_edit` snapshots the tree, removals while
//!   editing mutate memory only, `confirm` persists once, `cancel` restores
//!   and persists the snapshot.
//! - **Add-item flow.** Type choice, folder picker and `submit`, where each
//!   successful add is persisted on its own.
//! - **Browse view.** Section expansion and link taps.

use tracing::{info, warn};

use crate::managers::add_flow::AddFlow;
use crate::managers::browse_view::BrowseView;
use crate::managers::tree_store::{insert_node, remove_by_id, TreeStoreTrait};
use crate::services::id_generator::IdGenerator;
use crate::types::errors::SessionError;
use crate::types::node::{Node, NodeType};
use crate::types::session::{AddFlowSnapshot, EditMode, FolderPickerRow, SubmitOutcome};

/// Trait defining the edit-session operations a UI drives.
pub trait EditSessionTrait {
    fn tree(&self) -> &[Node];
    fn mode(&self) -> EditMode;
    fn reload(&mut self) -> bool;
    fn enter_edit(&mut self) -> Result<(), SessionError>;
    fn remove_by_id(&mut self, id: &str) -> Result<(), SessionError>;
    fn confirm(&mut self) -> Result<(), SessionError>;
    fn cancel(&mut self) -> Result<(), SessionError>;
    fn choose_type(&mut self, node_type: NodeType);
    fn folder_picker(&self) -> Vec<FolderPickerRow>;
    fn toggle_expand(&mut self, folder_id: &str);
    fn select_folder(&mut self, folder_id: Option<&str>);
    fn submit(&mut self, name: &str, url: Option<&str>) -> Result<SubmitOutcome, SessionError>;
    fn cancel_add(&mut self);
}

/// Edit session controller over a tree store.
pub struct EditSessionController<T: TreeStoreTrait> {
    store: T,
    tree: Vec<Node>,
    mode: EditMode,
    backup: Option<Vec<Node>>,
    add_flow: AddFlow,
    browse: BrowseView,
    ids: IdGenerator,
}

impl<T: TreeStoreTrait> EditSessionController<T> {
    /// Creates a controller in view mode with the tree loaded from `store`.
    pub fn new(store: T) -> Self {
        let tree = store.load();
        Self {
            store,
            tree,
            mode: EditMode::Viewing,
            backup: None,
            add_flow: AddFlow::new(),
            browse: BrowseView::new(),
            ids: IdGenerator::new(),
        }
    }

    pub fn store(&self) -> &T {
        &self.store
    }

    pub fn is_editing(&self) -> bool {
        self.mode == EditMode::Editing
    }

    /// Snapshot taken at `enter_edit`, if a session is open.
    pub fn backup(&self) -> Option<&[Node]> {
        self.backup.as_deref()
    }

    pub fn add_state(&self) -> AddFlowSnapshot {
        self.add_flow.snapshot()
    }

    pub fn set_name(&mut self, name: &str) {
        self.add_flow.set_name(name);
    }

    pub fn set_url(&mut self, url: &str) {
        self.add_flow.set_url(url);
    }

    pub fn browse(&self) -> &BrowseView {
        &self.browse
    }

    pub fn toggle_section(&mut self, folder_id: &str) {
        self.browse.toggle_section(folder_id);
    }

    /// Resolves a tapped link to its URL.
    pub fn open_link(&self, id: &str) -> Result<String, SessionError> {
        self.browse.open_link(&self.tree, id, self.mode)
    }
}

impl<T: TreeStoreTrait> EditSessionTrait for EditSessionController<T> {
    fn tree(&self) -> &[Node] {
        &self.tree
    }

    fn mode(&self) -> EditMode {
        self.mode
    }

    /// Re-reads the stored document. Skipped while an edit session is open.
    fn reload(&mut self) -> bool {
        if self.is_editing() {
            return false;
        }
        self.tree = self.store.load();
        true
    }

    fn enter_edit(&mut self) -> Result<(), SessionError> {
        if self.is_editing() {
            return Err(SessionError::AlreadyEditing);
        }
        self.backup = Some(self.tree.clone());
        self.mode = EditMode::Editing;
        info!(roots = self.tree.len(), "entered edit mode");
        Ok(())
    }

    /// Removes a node and its subtree from memory. Nothing is persisted
    /// until `confirm`.
    fn remove_by_id(&mut self, id: &str) -> Result<(), SessionError> {
        if !self.is_editing() {
            return Err(SessionError::NotEditing);
        }
        self.tree = remove_by_id(&self.tree, id);
        Ok(())
    }

    /// Persists the edited tree and closes the session.
    ///
    /// On a write failure the session stays open with its snapshot.
    fn confirm(&mut self) -> Result<(), SessionError> {
        if !self.is_editing() {
            return Err(SessionError::NotEditing);
        }
        self.store.persist(&self.tree)?;
        self.backup = None;
        self.mode = EditMode::Viewing;
        info!(roots = self.tree.len(), "committed edit session");
        Ok(())
    }

    /// Restores the snapshot, persists it and closes the session.
    ///
    /// The restore and the transition to view mode happen even if the
    /// write fails; the error is still returned.
    fn cancel(&mut self) -> Result<(), SessionError> {
        if !self.is_editing() {
            return Err(SessionError::NotEditing);
        }
        if let Some(backup) = self.backup.take() {
            self.tree = backup;
        }
        self.mode = EditMode::Viewing;
        info!("rolled back edit session");
        if let Err(e) = self.store.persist(&self.tree) {
            warn!(error = %e, "rollback restored in memory but was not persisted");
            return Err(e.into());
        }
        Ok(())
    }

    fn choose_type(&mut self, node_type: NodeType) {
        self.add_flow.choose_type(node_type);
    }

    fn folder_picker(&self) -> Vec<FolderPickerRow> {
        self.add_flow.render_folder_picker(&self.tree)
    }

    fn toggle_expand(&mut self, folder_id: &str) {
        self.add_flow.toggle_expand(folder_id);
    }

    /// Selects the insertion target; `None` targets the root.
    fn select_folder(&mut self, folder_id: Option<&str>) {
        match folder_id {
            Some(id) => self.add_flow.select_folder(&self.tree, id),
            None => self.add_flow.clear_selection(),
        }
    }

    /// Validates `name` and `url`, inserts the new node and persists the tree.
    ///
    /// On any error the tree and the whole form are left as they were.
    fn submit(&mut self, name: &str, url: Option<&str>) -> Result<SubmitOutcome, SessionError> {
        if self.is_editing() {
            return Err(SessionError::AlreadyEditing);
        }
        let node = self
            .add_flow
            .build_node(name, url.unwrap_or_default(), &mut self.ids)?;
        let node_id = node.id().to_string();
        let node_type = node.node_type();
        let updated = insert_node(&self.tree, self.add_flow.selected_folder_id(), node)?;
        self.store.persist(&updated)?;

        let message = self.add_flow.success_message().to_string();
        info!(
            node_id = %node_id,
            node_type = ?node_type,
            folder = ?self.add_flow.selected_folder_id(),
            key = %self.store.storage_key(),
            "added item"
        );
        self.tree = updated;
        self.add_flow.reset();

        Ok(SubmitOutcome {
            tree: self.tree.clone(),
            node_id,
            message,
        })
    }

    fn cancel_add(&mut self) {
        self.add_flow.reset();
    }
}
