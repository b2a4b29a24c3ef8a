//! Data model: task payloads and import outcomes

pub mod outcome;
pub mod task;

pub use outcome::{ImportResult, ImportSummary, RowOutcome, RowReport};
pub use task::{ChildTaskRequest, CustomFieldEntry, Priority, SubtaskRequest, TaskRequest};
