use std::fmt;

use crate::types::node::MAX_DEPTH;

// === StorageError ===

/// Errors raised by a key-value storage backend.
#[derive(Debug)]
pub enum StorageError {
    /// The stored value could not be read.
    Read(String),
    /// The value could not be written.
    Write(String),
}

impl StorageError {
    pub fn kind(&self) -> &'static str {
        match self {
            StorageError::Read(_) => "storage_read",
            StorageError::Write(_) => "storage_write",
        }
    }
}

impl fmt::Display for StorageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StorageError::Read(msg) => write!(f, "Storage read failed: {}", msg),
            StorageError::Write(msg) => write!(f, "Storage write failed: {}", msg),
        }
    }
}

impl std::error::Error for StorageError {}

// === TreeError ===

/// Errors related to category tree operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TreeError {
    /// The insertion target does not exist or is a link.
    TargetNotFoundOrInvalid(String),
    /// The insert would nest nodes deeper than `MAX_DEPTH`.
    DepthExceeded(String),
    /// Persisting the category document failed.
    StorageWrite(String),
    /// The tree could not be serialized.
    Serialization(String),
}

impl TreeError {
    pub fn kind(&self) -> &'static str {
        match self {
            TreeError::TargetNotFoundOrInvalid(_) => "target_not_found_or_invalid",
            TreeError::DepthExceeded(_) => "depth_exceeded",
            TreeError::StorageWrite(_) => "storage_write",
            TreeError::Serialization(_) => "serialization",
        }
    }
}

impl fmt::Display for TreeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TreeError::TargetNotFoundOrInvalid(id) => {
                write!(f, "Folder not found or doesn't support items: {}", id)
            }
            TreeError::DepthExceeded(id) => write!(
                f,
                "Folders can be nested at most {} levels deep: {}",
                MAX_DEPTH, id
            ),
            TreeError::StorageWrite(msg) => write!(f, "Failed to save categories: {}", msg),
            TreeError::Serialization(msg) => {
                write!(f, "Failed to serialize categories: {}", msg)
            }
        }
    }
}

impl std::error::Error for TreeError {}

// === SessionError ===

/// Errors surfaced by the edit session and add-item flow.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionError {
    /// User input was rejected before touching the tree.
    Validation(String),
    /// No node type was chosen before submitting.
    NoTypeChosen,
    /// The selected folder does not exist or is a link.
    TargetNotFoundOrInvalid(String),
    /// The selected folder is already at the nesting limit.
    DepthExceeded(String),
    /// Persisting the category document failed.
    StorageWrite(String),
    /// The operation requires an open edit session.
    NotEditing,
    /// An edit session is already open.
    AlreadyEditing,
    /// No link with the given ID exists.
    LinkNotFound(String),
    /// Links cannot be opened while editing.
    LinkUnavailableWhileEditing,
}

impl SessionError {
    pub fn kind(&self) -> &'static str {
        match self {
            SessionError::Validation(_) | SessionError::NoTypeChosen => "validation",
            SessionError::TargetNotFoundOrInvalid(_) => "target_not_found_or_invalid",
            SessionError::DepthExceeded(_) => "depth_exceeded",
            SessionError::StorageWrite(_) => "storage_write",
            SessionError::NotEditing => "not_editing",
            SessionError::AlreadyEditing => "already_editing",
            SessionError::LinkNotFound(_) => "link_not_found",
            SessionError::LinkUnavailableWhileEditing => "link_unavailable_while_editing",
        }
    }
}

impl fmt::Display for SessionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SessionError::Validation(msg) => write!(f, "Invalid input: {}", msg),
            SessionError::NoTypeChosen => write!(f, "Choose a folder or a link first"),
            SessionError::TargetNotFoundOrInvalid(id) => {
                write!(f, "Folder not found or doesn't support items: {}", id)
            }
            SessionError::DepthExceeded(id) => write!(
                f,
                "Folders can be nested at most {} levels deep: {}",
                MAX_DEPTH, id
            ),
            SessionError::StorageWrite(msg) => write!(f, "Failed to save categories: {}", msg),
            SessionError::NotEditing => write!(f, "Not in edit mode"),
            SessionError::AlreadyEditing => write!(f, "Already in edit mode"),
            SessionError::LinkNotFound(id) => write!(f, "Link not found: {}", id),
            SessionError::LinkUnavailableWhileEditing => {
                write!(f, "Links cannot be opened in edit mode")
            }
        }
    }
}

impl std::error::Error for SessionError {}

impl From<TreeError> for SessionError {
    fn from(err: TreeError) -> Self {
        match err {
            TreeError::TargetNotFoundOrInvalid(id) => SessionError::TargetNotFoundOrInvalid(id),
            TreeError::DepthExceeded(id) => SessionError::DepthExceeded(id),
            TreeError::StorageWrite(msg) | TreeError::Serialization(msg) => {
                SessionError::StorageWrite(msg)
            }
        }
    }
}

// === SettingsError ===

/// Errors related to settings management.
#[derive(Debug)]
pub enum SettingsError {
    /// An I/O error occurred while reading or writing settings.
    IoError(String),
    /// Failed to serialize or deserialize settings.
    SerializationError(String),
    /// The provided settings key is invalid.
    InvalidKey(String),
    /// The provided settings value is invalid.
    InvalidValue(String),
}

impl SettingsError {
    pub fn kind(&self) -> &'static str {
        match self {
            SettingsError::IoError(_) => "settings_io",
            SettingsError::SerializationError(_) => "settings_serialization",
            SettingsError::InvalidKey(_) => "settings_invalid_key",
            SettingsError::InvalidValue(_) => "settings_invalid_value",
        }
    }
}

impl fmt::Display for SettingsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SettingsError::IoError(msg) => write!(f, "Settings I/O error: {}", msg),
            SettingsError::SerializationError(msg) => {
                write!(f, "Settings serialization error: {}", msg)
            }
            SettingsError::InvalidKey(key) => write!(f, "Invalid settings key: {}", key),
            SettingsError::InvalidValue(msg) => {
                write!(f, "Invalid settings value: {}", msg)
            }
        }
    }
}

impl std::error::Error for SettingsError {}
