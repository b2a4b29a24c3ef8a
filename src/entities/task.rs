//! Task creation payloads sent to ClickUp

use serde::Serialize;
use std::fmt;
use std::str::FromStr;

/// ClickUp priority codes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(into = "u8")]
pub enum Priority {
    Urgent,
    High,
    Normal,
    Low,
}

impl Priority {
    /// Numeric code understood by the API (1 = urgent .. 4 = low)
    pub fn code(&self) -> u8 {
        match self {
            Priority::Urgent => 1,
            Priority::High => 2,
            Priority::Normal => 3,
            Priority::Low => 4,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Priority::Urgent => "urgent",
            Priority::High => "high",
            Priority::Normal => "normal",
            Priority::Low => "low",
        }
    }

    pub fn all() -> &'static [Priority] {
        &[
            Priority::Urgent,
            Priority::High,
            Priority::Normal,
            Priority::Low,
        ]
    }
}

impl From<Priority> for u8 {
    fn from(p: Priority) -> u8 {
        p.code()
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Priority {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.trim().to_lowercase();
        Priority::all()
            .iter()
            .find(|p| p.as_str() == lower)
            .copied()
            .ok_or_else(|| s.to_string())
    }
}

/// A subtask carried inside its parent's payload
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SubtaskRequest {
    pub name: String,
}

/// Value for a caller-defined field, keyed by the ClickUp field id
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CustomFieldEntry {
    pub id: String,
    pub value: String,
}

/// Normalized task ready for submission
///
/// Serializes to the JSON body of `POST /list/{list_id}/task`. Optional values
/// and empty lists are left out of the payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TaskRequest {
    pub name: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Epoch milliseconds
    #[serde(rename = "due_date", skip_serializing_if = "Option::is_none")]
    pub due: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub priority: Option<Priority>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,

    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,

    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub assignees: Vec<String>,

    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub subtasks: Vec<SubtaskRequest>,

    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub custom_fields: Vec<CustomFieldEntry>,
}

impl TaskRequest {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: None,
            due: None,
            priority: None,
            status: None,
            tags: Vec::new(),
            assignees: Vec::new(),
            subtasks: Vec::new(),
            custom_fields: Vec::new(),
        }
    }

    /// Same task without nested subtasks, for APIs that need one call per subtask
    pub fn without_subtasks(&self) -> Self {
        Self {
            subtasks: Vec::new(),
            ..self.clone()
        }
    }
}

/// Payload for a subtask created in its own call
#[derive(Debug, Clone, Serialize)]
pub struct ChildTaskRequest<'a> {
    pub name: &'a str,
    pub parent: &'a str,
}
