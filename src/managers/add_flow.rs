//! Add-item flow state for Linx.
//!
//! Tracks the transient form (node type, name, url), the folder picked as the
//! insertion target, and which picker rows are expanded. None of it is
//! persisted; the flow is reset when an item is added or the user cancels.

use std::collections::BTreeSet;

use crate::managers::tree_store::find_by_id;
use crate::services::id_generator::IdGenerator;
use crate::types::errors::SessionError;
use crate::types::node::{Node, NodeType};
use crate::types::session::{AddFlowSnapshot, FolderPickerRow};

/// Transient state of the add-item form and folder picker.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct AddFlow {
    node_type: Option<NodeType>,
    name: String,
    url: String,
    selected_folder_id: Option<String>,
    expanded_folder_ids: BTreeSet<String>,
}

impl AddFlow {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records the kind of node being created. Does not touch the tree.
    pub fn choose_type(&mut self, node_type: NodeType) {
        self.node_type = Some(node_type);
    }

    pub fn node_type(&self) -> Option<NodeType> {
        self.node_type
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    pub fn set_url(&mut self, url: impl Into<String>) {
        self.url = url.into();
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn selected_folder_id(&self) -> Option<&str> {
        self.selected_folder_id.as_deref()
    }

    pub fn is_expanded(&self, folder_id: &str) -> bool {
        self.expanded_folder_ids.contains(folder_id)
    }

    /// Flips a picker row between expanded and collapsed.
    pub fn toggle_expand(&mut self, folder_id: &str) {
        if !self.expanded_folder_ids.remove(folder_id) {
            self.expanded_folder_ids.insert(folder_id.to_string());
        }
    }

    /// Selects `folder_id` as the insertion target.
    ///
    /// If the folder has child folders its row expansion is toggled too.
    pub fn select_folder(&mut self, tree: &[Node], folder_id: &str) {
        self.selected_folder_id = Some(folder_id.to_string());
        if find_by_id(tree, folder_id).is_some_and(Node::has_subfolders) {
            self.toggle_expand(folder_id);
        }
    }

    /// Targets the root sequence again.
    pub fn clear_selection(&mut self) {
        self.selected_folder_id = None;
    }

    /// Builds the visible picker rows: folders only, depth-first, with the
    /// children of a row listed only while that row is expanded.
    pub fn render_folder_picker(&self, tree: &[Node]) -> Vec<FolderPickerRow> {
        let mut rows = Vec::new();
        self.push_rows(tree, 0, &mut rows);
        rows
    }

    fn push_rows(&self, items: &[Node], depth: usize, rows: &mut Vec<FolderPickerRow>) {
        for folder in items.iter().filter(|node| node.is_folder()) {
            let expanded = self.is_expanded(folder.id());
            rows.push(FolderPickerRow {
                id: folder.id().to_string(),
                name: folder.name().to_string(),
                depth,
                has_subfolders: folder.has_subfolders(),
                expanded,
                selected: self.selected_folder_id() == Some(folder.id()),
            });
            if expanded {
                if let Some(children) = folder.items() {
                    self.push_rows(children, depth + 1, rows);
                }
            }
        }
    }

    /// Validates `name` and `url` against the chosen type and builds the new
    /// node with a fresh ID. The form itself is left untouched.
    ///
    /// No ID is drawn when validation fails.
    pub fn build_node(&self, name: &str, url: &str, ids: &mut IdGenerator) -> Result<Node, SessionError> {
        let node_type = self.node_type.ok_or(SessionError::NoTypeChosen)?;
        let name = name.trim();
        if name.is_empty() {
            return Err(SessionError::Validation("name is required".to_string()));
        }
        match node_type {
            NodeType::Folder => Ok(Node::folder(ids.next_id(), name)),
            NodeType::Link => {
                let url = url.trim();
                if url.is_empty() {
                    return Err(SessionError::Validation("url is required for a link".to_string()));
                }
                Ok(Node::link(ids.next_id(), name, url))
            }
        }
    }

    /// Confirmation text for a successful add.
    pub fn success_message(&self) -> &'static str {
        match (self.node_type, self.selected_folder_id.is_some()) {
            (Some(NodeType::Link), true) => "Link added to folder!",
            (Some(NodeType::Link), false) => "Link added!",
            (_, true) => "Folder added inside another folder!",
            (_, false) => "Folder added!",
        }
    }

    /// Clears the form and the picker.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn snapshot(&self) -> AddFlowSnapshot {
        AddFlowSnapshot {
            node_type: self.node_type,
            name: self.name.clone(),
            url: self.url.clone(),
            selected_folder_id: self.selected_folder_id.clone(),
            expanded_folder_ids: self.expanded_folder_ids.iter().cloned().collect(),
        }
    }
}
