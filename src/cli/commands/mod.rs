//! Command implementations

pub mod completions;
pub mod config;
pub mod import;
pub mod template;
pub mod verify;
