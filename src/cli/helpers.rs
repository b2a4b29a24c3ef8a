//! Shared helper functions for CLI commands
//!
//! Flag values are layered over the loaded [`Config`] here, so command modules
//! only ever see fully resolved settings.

use std::path::PathBuf;
use std::time::Duration;

use crate::cli::ApiArgs;
use crate::core::config::{ApiSettings, Config, ImportOptions, SubtaskMode};
use crate::core::error::ConfigError;

fn non_blank(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}

/// Flag first, then config (which already includes the environment)
pub fn resolve_list_id(api: &ApiArgs, config: &Config) -> Result<String, ConfigError> {
    non_blank(api.list_id.as_deref())
        .or_else(|| non_blank(config.list_id.as_deref()))
        .ok_or(ConfigError::MissingListId)
}

pub fn resolve_token(api: &ApiArgs, config: &Config) -> Option<String> {
    non_blank(api.api_token.as_deref()).or_else(|| non_blank(config.api_token.as_deref()))
}

pub fn resolve_base_url(api: &ApiArgs, config: &Config) -> String {
    non_blank(api.base_url.as_deref()).unwrap_or_else(|| config.base_url().to_string())
}

pub fn resolve_timeout(api: &ApiArgs, config: &Config) -> Duration {
    api.timeout
        .map(Duration::from_secs)
        .unwrap_or_else(|| config.timeout())
}

/// Settings for commands that always talk to the API
pub fn api_settings(api: &ApiArgs, config: &Config) -> Result<ApiSettings, ConfigError> {
    let list_id = resolve_list_id(api, config)?;
    let api_token = resolve_token(api, config).ok_or(ConfigError::MissingToken)?;
    Ok(ApiSettings {
        base_url: resolve_base_url(api, config),
        api_token,
        list_id,
        timeout: resolve_timeout(api, config),
    })
}

/// Everything an import run needs; the token stays optional until a live
/// client is built
#[allow(clippy::too_many_arguments)]
pub fn import_options(
    csv_file: PathBuf,
    api: &ApiArgs,
    config: &Config,
    dry_run: bool,
    verbose: bool,
    output: Option<PathBuf>,
    subtask_mode: Option<SubtaskMode>,
) -> Result<ImportOptions, ConfigError> {
    Ok(ImportOptions {
        csv_file,
        list_id: resolve_list_id(api, config)?,
        api_token: resolve_token(api, config),
        dry_run,
        verbose,
        output,
        base_url: resolve_base_url(api, config),
        timeout: resolve_timeout(api, config),
        subtask_mode: subtask_mode.unwrap_or_else(|| config.subtask_mode()),
    })
}
