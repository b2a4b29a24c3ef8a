//! ClickUp REST API client
//!
//! Thin blocking wrapper over the three endpoints the importer needs:
//! `GET /user`, `GET /list/{id}` and `POST /list/{id}/task`.

use reqwest::blocking::{Client, Response};
use reqwest::header::AUTHORIZATION;
use reqwest::StatusCode;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::config::ApiSettings;
use crate::core::error::{AccessError, ConfigError, SubmissionError};

/// Identifier recorded when a success response carries no `id`
pub const UNKNOWN_TASK_ID: &str = "unknown";

/// A task the API reports as created
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreatedTask {
    pub id: String,
    pub url: Option<String>,
}

#[derive(Debug, Deserialize)]
struct TaskResponse {
    id: Option<String>,
    url: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ListResponse {
    name: Option<String>,
}

/// Client bound to one credential and one destination list
pub struct ClickUpClient {
    client: Client,
    settings: ApiSettings,
}

impl ClickUpClient {
    pub fn new(settings: ApiSettings) -> Result<Self, ConfigError> {
        reqwest::Url::parse(&settings.base_url)
            .map_err(|_| ConfigError::InvalidBaseUrl(settings.base_url.clone()))?;

        let client = Client::builder()
            .timeout(settings.timeout)
            .user_agent(concat!("clickup-importer/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| ConfigError::ClientBuild(e.to_string()))?;

        Ok(Self { client, settings })
    }

    pub fn list_id(&self) -> &str {
        &self.settings.list_id
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.settings.base_url.trim_end_matches('/'), path)
    }

    /// Check the token and list before importing; returns the list name
    pub fn verify_access(&self) -> Result<String, AccessError> {
        let user = self.get(&self.url("/user"))?;
        check_access_status(user, &self.settings.list_id)?;

        let list = self.get(&self.url(&format!("/list/{}", self.settings.list_id)))?;
        let list = check_access_status(list, &self.settings.list_id)?;

        let name = list
            .json::<ListResponse>()
            .ok()
            .and_then(|l| l.name)
            .unwrap_or_else(|| "Unknown".to_string());
        debug!("Verified access to list {} ({})", self.settings.list_id, name);
        Ok(name)
    }

    fn get(&self, url: &str) -> Result<Response, AccessError> {
        debug!("GET {}", url);
        self.client
            .get(url)
            .header(AUTHORIZATION, &self.settings.api_token)
            .send()
            .map_err(|e| AccessError::Unreachable(e.to_string()))
    }

    /// Create one task in the configured list
    pub fn create_task<T: Serialize>(&self, body: &T) -> Result<CreatedTask, SubmissionError> {
        let url = self.url(&format!("/list/{}/task", self.settings.list_id));
        if let Ok(json) = serde_json::to_string(body) {
            debug!("POST {} {}", url, json);
        }

        let response = self
            .client
            .post(&url)
            .header(AUTHORIZATION, &self.settings.api_token)
            .json(body)
            .send()
            .map_err(|e| SubmissionError::Transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .unwrap_or_else(|e| format!("<unreadable body: {}>", e));
            return Err(SubmissionError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let parsed = response.json::<TaskResponse>().ok();
        let (id, url) = match parsed {
            Some(TaskResponse { id, url }) => (id, url),
            None => (None, None),
        };
        Ok(CreatedTask {
            id: id.unwrap_or_else(|| UNKNOWN_TASK_ID.to_string()),
            url: url.filter(|u| !u.is_empty()),
        })
    }
}

fn check_access_status(response: Response, list_id: &str) -> Result<Response, AccessError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    match status {
        StatusCode::UNAUTHORIZED => Err(AccessError::Authentication),
        StatusCode::NOT_FOUND => Err(AccessError::ListNotFound(list_id.to_string())),
        _ => Err(AccessError::Api {
            status: status.as_u16(),
            body: response.text().unwrap_or_default(),
        }),
    }
}
