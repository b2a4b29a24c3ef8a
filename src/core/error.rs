//! Error taxonomy for the importer
//!
//! Fatal errors (`InputError`, `ConfigError`, `AccessError`) stop a run before any
//! row is submitted and carry miette diagnostics for the CLI. Row-level errors
//! (`RowError`, `SubmissionError`) are captured into a row outcome and never
//! propagate past the orchestrator.

use miette::Diagnostic;
use std::path::PathBuf;
use thiserror::Error;

/// Problems with the input file itself
#[derive(Debug, Error, Diagnostic)]
pub enum InputError {
    #[error("CSV file not found: {}", .0.display())]
    #[diagnostic(code(clickup_importer::input::not_found))]
    NotFound(PathBuf),

    #[error("Failed to read {}: {message}", path.display())]
    #[diagnostic(code(clickup_importer::input::io))]
    Io { path: PathBuf, message: String },

    #[error("Invalid CSV: {0}")]
    #[diagnostic(code(clickup_importer::input::csv))]
    Csv(String),

    #[error("CSV must contain a 'name' column for task names")]
    #[diagnostic(
        code(clickup_importer::input::missing_name_column),
        help("found columns: {headers}. Run `clickup-importer template` for an example file")
    )]
    MissingNameColumn { headers: String },
}

/// Problems resolving the run configuration
#[derive(Debug, Error, Diagnostic)]
pub enum ConfigError {
    #[error("API token is required")]
    #[diagnostic(
        code(clickup_importer::config::missing_token),
        help("pass --api-token or set the CLICKUP_API_TOKEN environment variable")
    )]
    MissingToken,

    #[error("List ID is required")]
    #[diagnostic(
        code(clickup_importer::config::missing_list_id),
        help("pass --list-id or set the CLICKUP_LIST_ID environment variable")
    )]
    MissingListId,

    #[error("Invalid API base URL: {0}")]
    #[diagnostic(code(clickup_importer::config::base_url))]
    InvalidBaseUrl(String),

    #[error("Failed to build HTTP client: {0}")]
    #[diagnostic(code(clickup_importer::config::client))]
    ClientBuild(String),
}

/// Pre-flight access check failures (live mode only)
#[derive(Debug, Error, Diagnostic)]
pub enum AccessError {
    #[error("Invalid API token")]
    #[diagnostic(
        code(clickup_importer::access::authentication),
        help("check your API token and try again")
    )]
    Authentication,

    #[error("List ID {0} not found")]
    #[diagnostic(
        code(clickup_importer::access::list_not_found),
        help("check your list ID and try again")
    )]
    ListNotFound(String),

    #[error("API returned HTTP {status}: {body}")]
    #[diagnostic(code(clickup_importer::access::api))]
    Api { status: u16, body: String },

    #[error("Error connecting to ClickUp API: {0}")]
    #[diagnostic(code(clickup_importer::access::unreachable))]
    Unreachable(String),
}

/// Whole-run failures returned by the orchestrator
#[derive(Debug, Error, Diagnostic)]
pub enum ImportError {
    #[error(transparent)]
    #[diagnostic(transparent)]
    Input(#[from] InputError),

    #[error(transparent)]
    #[diagnostic(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    #[diagnostic(transparent)]
    Access(#[from] AccessError),
}

/// Reasons a single row is rejected before any network call
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RowError {
    #[error("MissingRequiredField: '{0}' is blank")]
    MissingRequiredField(String),

    #[error("Unparseable due date '{0}' (expected YYYY-MM-DD, DD/MM/YYYY, MM/DD/YYYY or YYYY/MM/DD)")]
    InvalidDate(String),

    #[error("Unrecognized priority '{0}' (expected urgent, high, normal or low)")]
    InvalidPriority(String),

    #[error("Malformed CSV row: {0}")]
    Malformed(String),
}

/// Failure of one submission against the remote API
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SubmissionError {
    #[error("HTTP {status}: {body}")]
    Status { status: u16, body: String },

    #[error("transport error: {0}")]
    Transport(String),

    #[error("parent task {parent_id} created but subtask '{subtask}' failed: {source}")]
    Subtask {
        parent_id: String,
        subtask: String,
        #[source]
        source: Box<SubmissionError>,
    },
}

impl SubmissionError {
    /// Task id that exists remotely despite the failure, if any
    pub fn created_parent(&self) -> Option<&str> {
        match self {
            SubmissionError::Subtask { parent_id, .. } => Some(parent_id),
            _ => None,
        }
    }
}

/// Failure writing the results file
#[derive(Debug, Error, Diagnostic)]
#[error("Failed to write results to {}: {message}", path.display())]
#[diagnostic(code(clickup_importer::output::write))]
pub struct OutputError {
    pub path: PathBuf,
    pub message: String,
}
