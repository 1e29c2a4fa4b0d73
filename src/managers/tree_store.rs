//! Tree Store for Linx.
//!
//! Owns the persisted category document: a JSON array of [`Node`] stored
//! under a single key. The structural operations (`find_by_id`,
//! `insert_node`, `remove_by_id`) are pure functions over a borrowed tree;
//! [`TreeStore`] adds loading and whole-document persistence on top of a
//! [`KeyValueStorage`] backend.

use tracing::{debug, error, warn};

use crate::database::KeyValueStorage;
use crate::types::errors::TreeError;
use crate::types::node::{Node, MAX_DEPTH};

/// Default key the category document is stored under.
pub const CATEGORIES_KEY: &str = "categories";

/// Trait defining category document persistence.
pub trait TreeStoreTrait {
    fn load(&self) -> Vec<Node>;
    fn persist(&self, tree: &[Node]) -> Result<(), TreeError>;
    fn storage_key(&self) -> &str;
}

/// Tree store backed by a key-value storage.
pub struct TreeStore<S: KeyValueStorage> {
    storage: S,
    key: String,
}

impl<S: KeyValueStorage> TreeStore<S> {
    /// Creates a store reading and writing the default `categories` key.
    pub fn new(storage: S) -> Self {
        Self::with_key(storage, CATEGORIES_KEY)
    }

    pub fn with_key(storage: S, key: impl Into<String>) -> Self {
        Self {
            storage,
            key: key.into(),
        }
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }
}

impl<S: KeyValueStorage> TreeStoreTrait for TreeStore<S> {
    /// Reads the category document.
    ///
    /// An absent document is an empty tree. Read failures and malformed
    /// documents are logged and also yield an empty tree.
    fn load(&self) -> Vec<Node> {
        let raw = match self.storage.get_item(&self.key) {
            Ok(Some(raw)) => raw,
            Ok(None) => return Vec::new(),
            Err(e) => {
                warn!(key = %self.key, error = %e, "failed to read categories, starting empty");
                return Vec::new();
            }
        };

        match serde_json::from_str::<Vec<Node>>(&raw) {
            Ok(tree) => {
                debug!(key = %self.key, roots = tree.len(), "loaded categories");
                tree
            }
            Err(e) => {
                warn!(key = %self.key, error = %e, "malformed category document, starting empty");
                Vec::new()
            }
        }
    }

    /// Serializes the full tree and overwrites the stored document.
    fn persist(&self, tree: &[Node]) -> Result<(), TreeError> {
        let json = serde_json::to_string(tree).map_err(|e| {
            error!(key = %self.key, error = %e, "failed to serialize categories");
            TreeError::Serialization(e.to_string())
        })?;

        self.storage.set_item(&self.key, &json).map_err(|e| {
            error!(key = %self.key, error = %e, "failed to persist categories");
            TreeError::StorageWrite(e.to_string())
        })?;

        debug!(key = %self.key, bytes = json.len(), "persisted categories");
        Ok(())
    }

    fn storage_key(&self) -> &str {
        &self.key
    }
}

/// Depth-first, pre-order search for a node of either kind.
pub fn find_node_by_id<'a>(tree: &'a [Node], id: &str) -> Option<&'a Node> {
    for node in tree {
        if node.id() == id {
            return Some(node);
        }
        if let Some(found) = node.items().and_then(|items| find_node_by_id(items, id)) {
            return Some(found);
        }
    }
    None
}

/// Finds the folder with the given ID.
///
/// Returns `None` when the ID is absent or when it names a link.
pub fn find_by_id<'a>(tree: &'a [Node], id: &str) -> Option<&'a Node> {
    find_node_by_id(tree, id).filter(|node| node.is_folder())
}

/// Finds the children of folder `id` along with the level that folder sits
/// at. `level` is the level of the nodes in `tree`.
fn find_folder_items_mut<'a>(
    tree: &'a mut [Node],
    id: &str,
    level: usize,
) -> Option<(usize, &'a mut Vec<Node>)> {
    for node in tree.iter_mut() {
        if node.id() == id {
            return node.items_mut().map(|items| (level, items));
        }
        if let Some(found) = node
            .items_mut()
            .and_then(|items| find_folder_items_mut(items, id, level + 1))
        {
            return Some(found);
        }
    }
    None
}

/// Appends `node` to the root (`target` is `None`) or to the target folder.
///
/// The node's `position` is set to its index in the destination sequence.
/// The caller supplies a fresh ID. The input tree is never modified.
///
/// # Errors
/// - `TreeError::TargetNotFoundOrInvalid` if `target` is absent or names a link.
/// - `TreeError::DepthExceeded` if the node would reach below `MAX_DEPTH`.
pub fn insert_node(tree: &[Node], target: Option<&str>, mut node: Node) -> Result<Vec<Node>, TreeError> {
    let mut updated = tree.to_vec();
    let (parent_level, destination) = match target {
        None => (0, &mut updated),
        Some(id) => find_folder_items_mut(&mut updated, id, 1)
            .ok_or_else(|| TreeError::TargetNotFoundOrInvalid(id.to_string()))?,
    };
    if parent_level + node.height() > MAX_DEPTH {
        let id = target.unwrap_or(node.id()).to_string();
        warn!(folder = %id, limit = MAX_DEPTH, "rejected insert past nesting limit");
        return Err(TreeError::DepthExceeded(id));
    }
    node.set_position(destination.len() as i64);
    destination.push(node);
    Ok(updated)
}

/// Removes the node with `id` at every depth, discarding its subtree.
pub fn remove_by_id(tree: &[Node], id: &str) -> Vec<Node> {
    tree.iter()
        .filter(|node| node.id() != id)
        .map(|node| match node {
            Node::Folder {
                id: folder_id,
                name,
                items,
                position,
            } => Node::Folder {
                id: folder_id.clone(),
                name: name.clone(),
                items: remove_by_id(items, id),
                position: *position,
            },
            link => link.clone(),
        })
        .collect()
}
