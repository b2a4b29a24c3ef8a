//! Per-row outcomes and the aggregated result of an import run

use crate::core::error::{RowError, SubmissionError};
use crate::entities::task::TaskRequest;

/// Terminal state of one input row
#[derive(Debug, Clone, PartialEq)]
pub enum RowOutcome {
    /// Task accepted by the API (or simulated in dry-run)
    Created {
        task_id: String,
        task_url: Option<String>,
        request: TaskRequest,
    },
    /// Row failed normalization; nothing was sent
    Rejected(RowError),
    /// Submission failed; `task_id` is set when a parent task exists remotely anyway
    Failed {
        detail: String,
        task_id: Option<String>,
    },
    Skipped { reason: String },
}

impl RowOutcome {
    pub fn from_submission_error(err: &SubmissionError) -> Self {
        RowOutcome::Failed {
            detail: err.to_string(),
            task_id: err.created_parent().map(str::to_string),
        }
    }

    /// Value written to the `status` column
    pub fn status_label(&self) -> &'static str {
        match self {
            RowOutcome::Created { .. } => "CREATED",
            RowOutcome::Rejected(_) => "REJECTED",
            RowOutcome::Failed { .. } => "FAILED",
            RowOutcome::Skipped { .. } => "SKIPPED",
        }
    }

    pub fn error_detail(&self) -> Option<String> {
        match self {
            RowOutcome::Created { .. } => None,
            RowOutcome::Rejected(err) => Some(err.to_string()),
            RowOutcome::Failed { detail, .. } => Some(detail.clone()),
            RowOutcome::Skipped { reason } => Some(reason.clone()),
        }
    }

    pub fn task_id(&self) -> Option<&str> {
        match self {
            RowOutcome::Created { task_id, .. } => Some(task_id),
            RowOutcome::Failed { task_id, .. } => task_id.as_deref(),
            _ => None,
        }
    }

    pub fn task_url(&self) -> Option<&str> {
        match self {
            RowOutcome::Created { task_url, .. } => task_url.as_deref(),
            _ => None,
        }
    }

    pub fn is_created(&self) -> bool {
        matches!(self, RowOutcome::Created { .. })
    }

    pub fn is_rejected(&self) -> bool {
        matches!(self, RowOutcome::Rejected(_))
    }
}

/// One processed row: its position, original cells and outcome
#[derive(Debug, Clone, PartialEq)]
pub struct RowReport {
    /// 1-based data row number (header excluded)
    pub row_number: usize,
    /// Cell values in header order
    pub cells: Vec<String>,
    /// Task name as read, for display
    pub name: String,
    pub outcome: RowOutcome,
}

/// Outcome counts
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ImportSummary {
    pub rows_processed: usize,
    pub created: usize,
    /// Rejected + failed submissions
    pub failed: usize,
    /// Subset of `failed` rejected before submission
    pub rejected: usize,
    pub skipped: usize,
}

/// Ordered outcomes of a run, one per input row
#[derive(Debug, Clone, PartialEq)]
pub struct ImportResult {
    headers: Vec<String>,
    rows: Vec<RowReport>,
    dry_run: bool,
}

impl ImportResult {
    pub fn new(headers: Vec<String>, dry_run: bool) -> Self {
        Self {
            headers,
            rows: Vec::new(),
            dry_run,
        }
    }

    pub(crate) fn push(&mut self, report: RowReport) {
        self.rows.push(report);
    }

    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    pub fn rows(&self) -> &[RowReport] {
        &self.rows
    }

    pub fn is_dry_run(&self) -> bool {
        self.dry_run
    }

    pub fn summary(&self) -> ImportSummary {
        let mut summary = ImportSummary {
            rows_processed: self.rows.len(),
            ..ImportSummary::default()
        };
        for row in &self.rows {
            match row.outcome {
                RowOutcome::Created { .. } => summary.created += 1,
                RowOutcome::Rejected(_) => {
                    summary.failed += 1;
                    summary.rejected += 1;
                }
                RowOutcome::Failed { .. } => summary.failed += 1,
                RowOutcome::Skipped { .. } => summary.skipped += 1,
            }
        }
        summary
    }
}
