use serde::{Deserialize, Serialize};

use super::node::{Node, NodeType};

/// Whether the tree view is browsing or batching deletions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EditMode {
    Viewing,
    Editing,
}

/// One visible row of the folder picker.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FolderPickerRow {
    pub id: String,
    pub name: String,
    pub depth: usize,
    pub has_subfolders: bool,
    pub expanded: bool,
    pub selected: bool,
}

/// Transient add-item state as exposed to the UI.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AddFlowSnapshot {
    pub node_type: Option<NodeType>,
    pub name: String,
    pub url: String,
    pub selected_folder_id: Option<String>,
    pub expanded_folder_ids: Vec<String>,
}

/// Result of a successful add-item submit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmitOutcome {
    pub tree: Vec<Node>,
    pub node_id: String,
    pub message: String,
}
