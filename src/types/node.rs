use serde::{Deserialize, Serialize};

/// Deepest level a node may sit at, counting root nodes as level 1.
///
/// Each folder level costs two levels of JSON nesting, so this keeps the
/// stored document well inside `serde_json`'s recursion limit of 128.
pub const MAX_DEPTH: usize = 32;

/// A node in the category tree.
///
/// The wire form is untagged: an object carrying an `items` array is a
/// folder, anything else carrying a `url` is a link. Variant order matters
/// for deserialization, `Folder` is tried first.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Node {
    Folder {
        id: String,
        name: String,
        items: Vec<Node>,
        #[serde(default)]
        position: i64,
    },
    Link {
        id: String,
        name: String,
        url: String,
        #[serde(default)]
        position: i64,
    },
}

/// The kind of node being created in the add-item flow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NodeType {
    Folder,
    Link,
}

impl Node {
    /// Creates an empty folder. `position` is assigned on insertion.
    pub fn folder(id: impl Into<String>, name: impl Into<String>) -> Self {
        Node::Folder {
            id: id.into(),
            name: name.into(),
            items: Vec::new(),
            position: 0,
        }
    }

    /// Creates a link. `position` is assigned on insertion.
    pub fn link(id: impl Into<String>, name: impl Into<String>, url: impl Into<String>) -> Self {
        Node::Link {
            id: id.into(),
            name: name.into(),
            url: url.into(),
            position: 0,
        }
    }

    pub fn id(&self) -> &str {
        match self {
            Node::Folder { id, .. } | Node::Link { id, .. } => id,
        }
    }

    pub fn name(&self) -> &str {
        match self {
            Node::Folder { name, .. } | Node::Link { name, .. } => name,
        }
    }

    pub fn position(&self) -> i64 {
        match self {
            Node::Folder { position, .. } | Node::Link { position, .. } => *position,
        }
    }

    pub fn set_position(&mut self, value: i64) {
        match self {
            Node::Folder { position, .. } | Node::Link { position, .. } => *position = value,
        }
    }

    pub fn node_type(&self) -> NodeType {
        match self {
            Node::Folder { .. } => NodeType::Folder,
            Node::Link { .. } => NodeType::Link,
        }
    }

    /// Number of levels this node spans: 1 for a link or an empty folder.
    pub fn height(&self) -> usize {
        1 + self
            .items()
            .and_then(|items| items.iter().map(Node::height).max())
            .unwrap_or(0)
    }

    pub fn is_folder(&self) -> bool {
        matches!(self, Node::Folder { .. })
    }

    /// Children of a folder; `None` for a link.
    pub fn items(&self) -> Option<&[Node]> {
        match self {
            Node::Folder { items, .. } => Some(items),
            Node::Link { .. } => None,
        }
    }

    pub fn items_mut(&mut self) -> Option<&mut Vec<Node>> {
        match self {
            Node::Folder { items, .. } => Some(items),
            Node::Link { .. } => None,
        }
    }

    pub fn url(&self) -> Option<&str> {
        match self {
            Node::Link { url, .. } => Some(url),
            Node::Folder { .. } => None,
        }
    }

    /// True if this is a folder with at least one folder among its direct children.
    pub fn has_subfolders(&self) -> bool {
        self.items()
            .map(|items| items.iter().any(Node::is_folder))
            .unwrap_or(false)
    }
}
