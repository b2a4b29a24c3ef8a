//! Row-to-task mapping

use crate::core::error::RowError;
use crate::entities::{SubtaskRequest, TaskRequest};
use crate::import::normalize::{normalize, NormalizedFields};
use crate::import::row::{columns, RawRow};

/// Assemble a task payload from a row and its normalized fields
///
/// Fails with `MissingRequiredField` when `name` is blank after trimming.
pub fn build_task(row: &RawRow, fields: NormalizedFields) -> Result<TaskRequest, RowError> {
    let name = row
        .field(columns::NAME)
        .ok_or_else(|| RowError::MissingRequiredField(columns::NAME.to_string()))?;

    Ok(TaskRequest {
        name,
        description: row.field(columns::DESCRIPTION),
        due: fields.due,
        priority: fields.priority,
        status: row.field(columns::STATUS),
        tags: fields.tags,
        assignees: fields.assignees,
        subtasks: fields
            .subtasks
            .into_iter()
            .map(|name| SubtaskRequest { name })
            .collect(),
        custom_fields: fields.custom_fields,
    })
}

/// Normalize and map a row in one step
///
/// The name check runs first so a nameless row is reported as such even when
/// other cells are malformed too.
pub fn map_row(row: &RawRow) -> Result<TaskRequest, RowError> {
    if row.field(columns::NAME).is_none() {
        return Err(RowError::MissingRequiredField(columns::NAME.to_string()));
    }
    let fields = normalize(row)?;
    build_task(row, fields)
}
