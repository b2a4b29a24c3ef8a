//! Import orchestration: read the CSV, map and submit each row in file order
//!
//! Per row: `Pending -> Normalized -> Submitted -> Created | Failed`, or
//! `Pending -> Rejected` when mapping fails. A row's failure is recorded in its
//! outcome and never stops the run; only input, config and access problems are
//! fatal, and those surface before the first row is submitted.

use csv::{ReaderBuilder, StringRecord};
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;
use tracing::{debug, info, warn};

use crate::core::client::ClickUpClient;
use crate::core::config::ImportOptions;
use crate::core::error::{ImportError, InputError, RowError};
use crate::entities::{ImportResult, RowOutcome, RowReport};
use crate::import::mapper::map_row;
use crate::import::row::{build_header_map, columns, RawRow};
use crate::import::submitter::{DryRunSubmitter, LiveSubmitter, TaskSubmitter};

/// A parsed input file: header plus every data record
#[derive(Debug)]
pub struct CsvInput {
    headers: StringRecord,
    records: Vec<Result<StringRecord, String>>,
}

impl CsvInput {
    /// Open and parse a CSV file; fails if it is missing, unreadable or has no
    /// `name` column
    pub fn open(path: &Path) -> Result<Self, InputError> {
        if !path.exists() {
            return Err(InputError::NotFound(path.to_path_buf()));
        }
        let file = File::open(path).map_err(|e| InputError::Io {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        Self::from_reader(BufReader::new(file))
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Self, InputError> {
        let mut rdr = ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .trim(csv::Trim::Headers)
            .from_reader(reader);

        let headers = rdr
            .headers()
            .map_err(|e| InputError::Csv(e.to_string()))?
            .clone();

        let header_map = build_header_map(&headers);
        if !header_map.contains_key(columns::NAME) {
            let found: Vec<&str> = headers.iter().filter(|h| !h.is_empty()).collect();
            return Err(InputError::MissingNameColumn {
                headers: if found.is_empty() {
                    "(none)".to_string()
                } else {
                    found.join(", ")
                },
            });
        }

        let records = rdr
            .records()
            .map(|r| r.map_err(|e| e.to_string()))
            .collect();

        Ok(Self { headers, records })
    }

    pub fn headers(&self) -> Vec<String> {
        self.headers.iter().map(str::to_string).collect()
    }

    /// Number of data rows (header excluded)
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

/// Drives rows through mapping and submission
pub struct Importer<'a> {
    submitter: &'a dyn TaskSubmitter,
}

impl<'a> Importer<'a> {
    pub fn new(submitter: &'a dyn TaskSubmitter) -> Self {
        Self { submitter }
    }

    /// Process every row in file order, calling `on_row` as each one finishes
    pub fn process<F>(&self, input: &CsvInput, mut on_row: F) -> ImportResult
    where
        F: FnMut(&RowReport),
    {
        let mut result = ImportResult::new(input.headers(), self.submitter.is_dry_run());
        info!("Found {} tasks in CSV file", input.len());

        for (idx, record) in input.records.iter().enumerate() {
            let row_number = idx + 1;
            let report = match record {
                Ok(record) => {
                    let row = RawRow::from_record(row_number, &input.headers, record);
                    self.process_row(&row)
                }
                Err(e) => {
                    warn!("Row {}: CSV parse error: {}", row_number, e);
                    RowReport {
                        row_number,
                        cells: Vec::new(),
                        name: String::new(),
                        outcome: RowOutcome::Rejected(RowError::Malformed(e.clone())),
                    }
                }
            };
            on_row(&report);
            result.push(report);
        }

        result
    }

    /// Map and submit a single row; every failure becomes part of the outcome
    pub fn process_row(&self, row: &RawRow) -> RowReport {
        let name = row.field(columns::NAME).unwrap_or_default();
        let row_number = row.row_number();

        let outcome = if row.is_blank() {
            debug!("Row {}: empty, skipping", row_number);
            RowOutcome::Skipped {
                reason: "empty row".to_string(),
            }
        } else {
            match map_row(row) {
                Err(e) => {
                    warn!("Row {}: rejected: {}", row_number, e);
                    RowOutcome::Rejected(e)
                }
                Ok(request) => {
                    debug!("Row {}: creating task '{}'", row_number, request.name);
                    match self.submitter.submit(&request) {
                        Ok(created) => {
                            info!(
                                "Successfully created task: {} with ID {}",
                                request.name, created.id
                            );
                            RowOutcome::Created {
                                task_id: created.id,
                                task_url: created.url,
                                request,
                            }
                        }
                        Err(e) => {
                            warn!("Failed to create task {}: {}", request.name, e);
                            RowOutcome::from_submission_error(&e)
                        }
                    }
                }
            }
        };

        RowReport {
            row_number,
            cells: row.cells(),
            name,
            outcome,
        }
    }
}

/// Build the submitter for a run, verifying access first in live mode
pub fn build_submitter(options: &ImportOptions) -> Result<Box<dyn TaskSubmitter>, ImportError> {
    if options.dry_run {
        return Ok(Box::new(DryRunSubmitter));
    }

    let client = ClickUpClient::new(options.api_settings()?)?;
    let list_name = client.verify_access()?;
    info!(
        "API token and list ID verified successfully. List name: {}",
        list_name
    );
    Ok(Box::new(LiveSubmitter::new(client, options.subtask_mode)))
}

/// Run a whole import: parse input, set up submission, process every row
pub fn run_import<F>(options: &ImportOptions, on_row: F) -> Result<ImportResult, ImportError>
where
    F: FnMut(&RowReport),
{
    let input = CsvInput::open(&options.csv_file)?;
    let submitter = build_submitter(options)?;

    if submitter.is_dry_run() {
        info!(
            "Starting DRY RUN import from {} to list {}",
            options.csv_file.display(),
            options.list_id
        );
    } else {
        info!(
            "Starting import from {} to list {}",
            options.csv_file.display(),
            options.list_id
        );
    }

    Ok(Importer::new(submitter.as_ref()).process(&input, on_row))
}
