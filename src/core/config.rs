//! Configuration management with layered hierarchy

use clap::ValueEnum;
use serde::Deserialize;
use std::fmt;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::core::error::ConfigError;

/// Default ClickUp REST endpoint
pub const DEFAULT_BASE_URL: &str = "https://api.clickup.com/api/v2";

/// Transport timeout when none is configured
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Name of the per-directory config file
pub const LOCAL_CONFIG_FILE: &str = ".clickup-importer.yaml";

pub const ENV_API_TOKEN: &str = "CLICKUP_API_TOKEN";
pub const ENV_LIST_ID: &str = "CLICKUP_LIST_ID";
pub const ENV_BASE_URL: &str = "CLICKUP_BASE_URL";

/// How subtasks reach the API
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum SubtaskMode {
    /// Carried inside the parent payload (one call per row)
    #[default]
    Nested,
    /// Parent first, then one call per subtask with `parent` set
    Separate,
}

impl fmt::Display for SubtaskMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SubtaskMode::Nested => write!(f, "nested"),
            SubtaskMode::Separate => write!(f, "separate"),
        }
    }
}

/// Importer configuration merged from files and environment
#[derive(Debug, Default, Clone, Deserialize)]
#[serde(default)]
pub struct Config {
    /// ClickUp personal API token
    pub api_token: Option<String>,

    /// Default destination list
    pub list_id: Option<String>,

    /// API base URL (mainly for testing against a mock server)
    pub base_url: Option<String>,

    /// Transport timeout in seconds
    pub timeout_secs: Option<u64>,

    /// Subtask creation strategy
    pub subtask_mode: Option<SubtaskMode>,
}

impl Config {
    /// Load configuration from all sources, merging in priority order
    pub fn load() -> Self {
        let local = std::env::current_dir()
            .ok()
            .map(|dir| dir.join(LOCAL_CONFIG_FILE));
        let mut config = Self::load_from(Self::global_config_path().as_deref(), local.as_deref());
        config.apply_env(|key| std::env::var(key).ok());
        config
    }

    /// Load and merge the global then local config files; missing or
    /// unparseable files are skipped
    pub fn load_from(global: Option<&Path>, local: Option<&Path>) -> Self {
        let mut config = Config::default();

        for path in [global, local].into_iter().flatten() {
            if let Some(file_config) = Self::read_file(path) {
                config.merge(file_config);
            }
        }

        config
    }

    fn read_file(path: &Path) -> Option<Config> {
        if !path.exists() {
            return None;
        }
        let contents = std::fs::read_to_string(path).ok()?;
        match serde_yml::from_str::<Config>(&contents) {
            Ok(config) => Some(config),
            Err(e) => {
                tracing::warn!("Ignoring invalid config file {}: {}", path.display(), e);
                None
            }
        }
    }

    /// Overlay environment variables (looked up through `lookup`)
    pub fn apply_env<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_empty = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        if let Some(token) = non_empty(ENV_API_TOKEN) {
            self.api_token = Some(token);
        }
        if let Some(list_id) = non_empty(ENV_LIST_ID) {
            self.list_id = Some(list_id);
        }
        if let Some(base_url) = non_empty(ENV_BASE_URL) {
            self.base_url = Some(base_url);
        }
    }

    /// Get the path to the global config file
    pub fn global_config_path() -> Option<PathBuf> {
        directories::ProjectDirs::from("", "", "clickup-importer")
            .map(|dirs| dirs.config_dir().join("config.yaml"))
    }

    /// Merge another config into this one (other takes precedence)
    fn merge(&mut self, other: Config) {
        if other.api_token.is_some() {
            self.api_token = other.api_token;
        }
        if other.list_id.is_some() {
            self.list_id = other.list_id;
        }
        if other.base_url.is_some() {
            self.base_url = other.base_url;
        }
        if other.timeout_secs.is_some() {
            self.timeout_secs = other.timeout_secs;
        }
        if other.subtask_mode.is_some() {
            self.subtask_mode = other.subtask_mode;
        }
    }

    pub fn base_url(&self) -> &str {
        self.base_url.as_deref().unwrap_or(DEFAULT_BASE_URL)
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs.unwrap_or(DEFAULT_TIMEOUT_SECS))
    }

    pub fn subtask_mode(&self) -> SubtaskMode {
        self.subtask_mode.unwrap_or_default()
    }

    /// Token with all but the last four characters hidden
    pub fn masked_token(&self) -> Option<String> {
        self.api_token.as_deref().map(mask_secret)
    }
}

/// Hide a secret for display
pub fn mask_secret(secret: &str) -> String {
    let chars: Vec<char> = secret.chars().collect();
    if chars.len() <= 4 {
        return "*".repeat(chars.len());
    }
    let visible: String = chars[chars.len() - 4..].iter().collect();
    format!("{}{}", "*".repeat(chars.len() - 4), visible)
}

/// Connection settings for the ClickUp API
#[derive(Debug, Clone)]
pub struct ApiSettings {
    pub base_url: String,
    pub api_token: String,
    pub list_id: String,
    pub timeout: Duration,
}

/// Fully resolved settings for one import run
#[derive(Debug, Clone)]
pub struct ImportOptions {
    pub csv_file: PathBuf,
    pub list_id: String,
    /// Absent only in dry-run
    pub api_token: Option<String>,
    pub dry_run: bool,
    pub verbose: bool,
    pub output: Option<PathBuf>,
    pub base_url: String,
    pub timeout: Duration,
    pub subtask_mode: SubtaskMode,
}

impl ImportOptions {
    /// Settings for a live client; the token is mandatory here
    pub fn api_settings(&self) -> Result<ApiSettings, ConfigError> {
        let api_token = self
            .api_token
            .clone()
            .filter(|t| !t.trim().is_empty())
            .ok_or(ConfigError::MissingToken)?;
        if self.list_id.trim().is_empty() {
            return Err(ConfigError::MissingListId);
        }
        Ok(ApiSettings {
            base_url: self.base_url.clone(),
            api_token,
            list_id: self.list_id.clone(),
            timeout: self.timeout,
        })
    }
}
