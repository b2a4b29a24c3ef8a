//! Core module - configuration, errors, logging and the API client

pub mod client;
pub mod config;
pub mod error;
pub mod logging;

pub use client::{ClickUpClient, CreatedTask};
pub use config::{ApiSettings, Config, ImportOptions, SubtaskMode};
pub use error::{
    AccessError, ConfigError, ImportError, InputError, OutputError, RowError, SubmissionError,
};
