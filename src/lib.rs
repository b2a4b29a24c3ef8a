//! clickup-importer: create ClickUp tasks from CSV rows
//!
//! Each row is normalized into a task payload, submitted on its own and
//! reported individually; one bad row never stops the rest of the file.

pub mod cli;
pub mod core;
pub mod entities;
pub mod import;
