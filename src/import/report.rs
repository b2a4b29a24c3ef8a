//! Result reporting: progress lines, summary, detail table and results CSV

use console::style;
use csv::WriterBuilder;
use std::fs::File;
use std::path::{Path, PathBuf};
use tabled::{builder::Builder, settings::Style};

use crate::core::error::OutputError;
use crate::entities::{ImportResult, RowOutcome, RowReport};

/// Columns appended to the original ones in the results file
pub const RESULT_COLUMNS: &[&str] = &["status", "error_detail", "task_id", "task_url"];

/// Truncate to `max_len` characters, adding "..." when shortened
pub fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else {
        let kept: String = s.chars().take(max_len.saturating_sub(3)).collect();
        format!("{}...", kept)
    }
}

/// One-line description of a finished row
pub fn row_progress_line(report: &RowReport, dry_run: bool) -> String {
    let name = truncate(&report.name, 40);
    match &report.outcome {
        RowOutcome::Created { .. } if dry_run => format!(
            "{} Row {}: Would create {}",
            style("○").dim(),
            report.row_number,
            name
        ),
        RowOutcome::Created { task_id, .. } => format!(
            "{} Row {}: Created {} - {}",
            style("✓").green(),
            report.row_number,
            style(task_id).cyan(),
            name
        ),
        RowOutcome::Rejected(err) => format!(
            "{} Row {}: {}",
            style("✗").red(),
            report.row_number,
            err
        ),
        RowOutcome::Failed { detail, .. } => format!(
            "{} Row {}: Failed to create {} - {}",
            style("✗").red(),
            report.row_number,
            name,
            truncate(detail, 120)
        ),
        RowOutcome::Skipped { reason } => format!(
            "{} Row {}: Skipped ({})",
            style("-").dim(),
            report.row_number,
            reason
        ),
    }
}

pub fn print_row_progress(report: &RowReport, dry_run: bool) {
    println!("{}", row_progress_line(report, dry_run));
}

/// Summary block, always shown after a run
pub fn render_summary(result: &ImportResult) -> String {
    let summary = result.summary();
    let mut out = String::new();

    out.push_str(&format!("{}\n", style("─".repeat(50)).dim()));
    out.push_str(&format!("{}\n", style("Import Summary").bold()));
    out.push_str(&format!("{}\n", style("─".repeat(50)).dim()));
    out.push_str(&format!(
        "  Rows processed:   {}\n",
        style(summary.rows_processed).cyan()
    ));
    let created_label = if result.is_dry_run() {
        "Would create:    "
    } else {
        "Tasks created:   "
    };
    out.push_str(&format!(
        "  {} {}\n",
        created_label,
        style(summary.created).green()
    ));
    out.push_str(&format!("  Failed:           {}", style(summary.failed).red()));
    if summary.rejected > 0 {
        out.push_str(&format!(
            " {}",
            style(format!("({} rejected before submission)", summary.rejected)).dim()
        ));
    }
    out.push('\n');
    out.push_str(&format!(
        "  Skipped:          {}\n",
        style(summary.skipped).dim()
    ));

    if result.is_dry_run() {
        out.push('\n');
        out.push_str(&format!(
            "{}\n",
            style("Dry run complete. No tasks were created.").yellow()
        ));
    }

    out
}

/// Per-row table for verbose mode; created rows are listed too
pub fn render_details(result: &ImportResult) -> String {
    let mut builder = Builder::default();
    builder.push_record(["Row", "Name", "Status", "Task ID", "Detail"]);

    for row in result.rows() {
        builder.push_record([
            row.row_number.to_string(),
            truncate(&row.name, 40),
            row.outcome.status_label().to_string(),
            row.outcome.task_id().unwrap_or_default().to_string(),
            row.outcome.error_detail().unwrap_or_default(),
        ]);
    }

    builder.build().with(Style::rounded()).to_string()
}

/// Results file opened before the run, written once the run is over
pub struct ResultsWriter {
    path: PathBuf,
    wtr: csv::Writer<File>,
}

impl ResultsWriter {
    /// Create (or truncate) the output file; fails on an unwritable path
    pub fn create(path: &Path) -> Result<Self, OutputError> {
        let wtr = WriterBuilder::new()
            .from_path(path)
            .map_err(|e| OutputError {
                path: path.to_path_buf(),
                message: e.to_string(),
            })?;
        Ok(Self {
            path: path.to_path_buf(),
            wtr,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// One line per input row: original columns plus the result columns
    pub fn write(mut self, result: &ImportResult) -> Result<(), OutputError> {
        let path = self.path.clone();
        let to_error = |e: csv::Error| OutputError {
            path: path.clone(),
            message: e.to_string(),
        };

        let width = result.headers().len();
        let header: Vec<&str> = result
            .headers()
            .iter()
            .map(String::as_str)
            .chain(RESULT_COLUMNS.iter().copied())
            .collect();
        self.wtr.write_record(&header).map_err(to_error)?;

        for row in result.rows() {
            let mut record: Vec<String> = row.cells.iter().take(width).cloned().collect();
            record.resize(width, String::new());
            record.push(row.outcome.status_label().to_string());
            record.push(row.outcome.error_detail().unwrap_or_default());
            record.push(row.outcome.task_id().unwrap_or_default().to_string());
            record.push(row.outcome.task_url().unwrap_or_default().to_string());
            self.wtr.write_record(&record).map_err(to_error)?;
        }

        self.wtr
            .flush()
            .map_err(|e| to_error(csv::Error::from(e)))?;
        Ok(())
    }
}

/// Create `path` and write the results in one step
pub fn write_results_csv(result: &ImportResult, path: &Path) -> Result<(), OutputError> {
    ResultsWriter::create(path)?.write(result)
}
