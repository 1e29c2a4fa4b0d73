//! Linx: a personal bookmark organizer.
//!
//! Keeps a nested tree of folders and links as one JSON document in local
//! storage. The binary and integration tests use the modules exposed here.

pub mod app;
pub mod database;
pub mod managers;
pub mod platform;
pub mod rpc_handler;
pub mod services;
pub mod types;
