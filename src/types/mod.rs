// Linx shared type definitions
// Each submodule defines types used across the application.

pub mod errors;
pub mod node;
pub mod session;
pub mod settings;
