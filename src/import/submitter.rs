//! Task submission: live against ClickUp, or simulated for dry runs

use tracing::{debug, info};

use crate::core::client::{ClickUpClient, CreatedTask};
use crate::core::config::SubtaskMode;
use crate::core::error::SubmissionError;
use crate::entities::{ChildTaskRequest, TaskRequest};

/// Identifier returned for every task in a dry run
pub const DRY_RUN_TASK_ID: &str = "dry-run-task-id";

/// URL reported for every task in a dry run
pub const DRY_RUN_TASK_URL: &str = "https://app.clickup.com/dry-run-url";

/// Sends one mapped task and reports what happened
pub trait TaskSubmitter {
    fn submit(&self, request: &TaskRequest) -> Result<CreatedTask, SubmissionError>;

    /// True when no network I/O is performed
    fn is_dry_run(&self) -> bool {
        false
    }
}

/// Simulates success without touching the network
#[derive(Debug, Default, Clone, Copy)]
pub struct DryRunSubmitter;

impl TaskSubmitter for DryRunSubmitter {
    fn submit(&self, request: &TaskRequest) -> Result<CreatedTask, SubmissionError> {
        info!("[DRY RUN] Would create task: {}", request.name);
        if let Ok(json) = serde_json::to_string(request) {
            debug!("[DRY RUN] payload: {}", json);
        }
        Ok(CreatedTask {
            id: DRY_RUN_TASK_ID.to_string(),
            url: Some(DRY_RUN_TASK_URL.to_string()),
        })
    }

    fn is_dry_run(&self) -> bool {
        true
    }
}

/// Submits to the ClickUp API; never retries
pub struct LiveSubmitter {
    client: ClickUpClient,
    subtask_mode: SubtaskMode,
}

impl LiveSubmitter {
    pub fn new(client: ClickUpClient, subtask_mode: SubtaskMode) -> Self {
        Self {
            client,
            subtask_mode,
        }
    }
}

impl TaskSubmitter for LiveSubmitter {
    fn submit(&self, request: &TaskRequest) -> Result<CreatedTask, SubmissionError> {
        match self.subtask_mode {
            SubtaskMode::Nested => self.client.create_task(request),
            SubtaskMode::Separate => {
                let parent = self.client.create_task(&request.without_subtasks())?;
                for subtask in &request.subtasks {
                    let child = ChildTaskRequest {
                        name: &subtask.name,
                        parent: &parent.id,
                    };
                    self.client
                        .create_task(&child)
                        .map_err(|e| SubmissionError::Subtask {
                            parent_id: parent.id.clone(),
                            subtask: subtask.name.clone(),
                            source: Box::new(e),
                        })?;
                }
                Ok(parent)
            }
        }
    }
}
