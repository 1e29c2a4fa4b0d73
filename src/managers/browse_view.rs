//! Expand/collapse state of the main tree view.

use std::collections::BTreeSet;

use crate::managers::tree_store::find_node_by_id;
use crate::types::errors::SessionError;
use crate::types::node::Node;
use crate::types::session::EditMode;

/// Which folder sections are open in the browse view.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct BrowseView {
    expanded: BTreeSet<String>,
}

impl BrowseView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn toggle_section(&mut self, folder_id: &str) {
        if !self.expanded.remove(folder_id) {
            self.expanded.insert(folder_id.to_string());
        }
    }

    pub fn is_expanded(&self, folder_id: &str) -> bool {
        self.expanded.contains(folder_id)
    }

    pub fn expanded_ids(&self) -> Vec<String> {
        self.expanded.iter().cloned().collect()
    }

    /// Resolves a tapped link to its URL. Taps do nothing while editing.
    pub fn open_link(&self, tree: &[Node], id: &str, mode: EditMode) -> Result<String, SessionError> {
        if mode == EditMode::Editing {
            return Err(SessionError::LinkUnavailableWhileEditing);
        }
        find_node_by_id(tree, id)
            .and_then(Node::url)
            .map(str::to_string)
            .ok_or_else(|| SessionError::LinkNotFound(id.to_string()))
    }
}
