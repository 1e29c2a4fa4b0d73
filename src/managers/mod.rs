// Linx state managers
// Managers handle stateful operations: the persisted tree, the edit session, the add-item flow, the browse view.

pub mod add_flow;
pub mod browse_view;
pub mod edit_session;
pub mod tree_store;
