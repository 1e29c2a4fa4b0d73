// Linx services
// Stateless or configuration-level helpers: settings, ID generation, logging setup.

pub mod id_generator;
pub mod logging;
pub mod settings_engine;
