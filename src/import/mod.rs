//! CSV import pipeline
//!
//! `row` reads raw cells, `normalize` turns them into typed values, `mapper`
//! assembles a task payload, `submitter` sends it, `orchestrator` drives the
//! rows in file order and `report` renders what happened.

pub mod mapper;
pub mod normalize;
pub mod orchestrator;
pub mod report;
pub mod row;
pub mod submitter;
pub mod template;

pub use mapper::map_row;
pub use orchestrator::{build_submitter, run_import, CsvInput, Importer};
pub use report::{
    print_row_progress, render_details, render_summary, write_results_csv, ResultsWriter,
};
pub use submitter::{
    DryRunSubmitter, LiveSubmitter, TaskSubmitter, DRY_RUN_TASK_ID, DRY_RUN_TASK_URL,
};
