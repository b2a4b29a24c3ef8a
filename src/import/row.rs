//! Raw CSV rows and column lookup

use csv::StringRecord;
use std::collections::HashMap;

/// Recognized column names
pub mod columns {
    pub const NAME: &str = "name";
    pub const DESCRIPTION: &str = "description";
    pub const DUE_DATE: &str = "due_date";
    pub const PRIORITY: &str = "priority";
    pub const STATUS: &str = "status";
    pub const TAGS: &str = "tags";
    pub const ASSIGNEES: &str = "assignees";
    pub const SUBTASKS: &str = "subtasks";

    /// Prefix of caller-defined field columns (`custom_<field id>`)
    pub const CUSTOM_PREFIX: &str = "custom_";

    pub const RECOGNIZED: &[&str] = &[
        NAME,
        DESCRIPTION,
        DUE_DATE,
        PRIORITY,
        STATUS,
        TAGS,
        ASSIGNEES,
        SUBTASKS,
    ];
}

/// Canonical form used to match header names
pub fn normalize_header(header: &str) -> String {
    header.trim().to_lowercase()
}

/// Build a map from normalized header name to column index (first occurrence wins)
pub fn build_header_map(headers: &StringRecord) -> HashMap<String, usize> {
    let mut map = HashMap::new();
    for (i, h) in headers.iter().enumerate() {
        map.entry(normalize_header(h)).or_insert(i);
    }
    map
}

/// One data line of the input file, keyed by column name
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawRow {
    row_number: usize,
    columns: Vec<(String, String)>,
}

impl RawRow {
    pub fn new(row_number: usize, columns: Vec<(String, String)>) -> Self {
        Self {
            row_number,
            columns,
        }
    }

    /// Pair a record with the header row; short records are padded with blanks
    pub fn from_record(row_number: usize, headers: &StringRecord, record: &StringRecord) -> Self {
        let columns = headers
            .iter()
            .enumerate()
            .map(|(i, h)| (h.to_string(), record.get(i).unwrap_or_default().to_string()))
            .collect();
        Self::new(row_number, columns)
    }

    /// 1-based data row number (header excluded)
    pub fn row_number(&self) -> usize {
        self.row_number
    }

    /// Raw cell value for a column, matched case-insensitively
    pub fn get(&self, column: &str) -> Option<&str> {
        let wanted = normalize_header(column);
        self.columns
            .iter()
            .find(|(h, _)| normalize_header(h) == wanted)
            .map(|(_, v)| v.as_str())
    }

    /// Trimmed cell value, `None` when missing or blank
    pub fn field(&self, column: &str) -> Option<String> {
        self.get(column)
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
    }

    pub fn columns(&self) -> impl Iterator<Item = (&str, &str)> {
        self.columns.iter().map(|(h, v)| (h.as_str(), v.as_str()))
    }

    /// Cell values in header order
    pub fn cells(&self) -> Vec<String> {
        self.columns.iter().map(|(_, v)| v.clone()).collect()
    }

    /// True when every cell is empty or whitespace
    pub fn is_blank(&self) -> bool {
        self.columns.iter().all(|(_, v)| v.trim().is_empty())
    }
}
