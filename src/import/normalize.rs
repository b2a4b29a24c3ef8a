//! Field normalization: raw cell strings to typed task values
//!
//! Every function here is pure. Blank input means "not set" and is never an
//! error; malformed non-blank input is a [`RowError`].

use chrono::NaiveDate;

use crate::core::error::RowError;
use crate::entities::{CustomFieldEntry, Priority};
use crate::import::row::{columns, RawRow};

/// Accepted due-date notations, tried in this order; the first full match wins.
///
/// Strings valid under several formats (e.g. `01/05/2025`) resolve to the
/// earliest one, so day-first beats month-first.
pub const DATE_FORMATS: &[&str] = &["%Y-%m-%d", "%d/%m/%Y", "%m/%d/%Y", "%Y/%m/%d"];

/// Parse a due date into epoch milliseconds at midnight UTC
pub fn parse_due_date(raw: &str) -> Result<Option<i64>, RowError> {
    let value = raw.trim();
    if value.is_empty() {
        return Ok(None);
    }

    DATE_FORMATS
        .iter()
        .filter(|fmt| has_four_digit_year(value, fmt))
        .find_map(|fmt| NaiveDate::parse_from_str(value, fmt).ok())
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|dt| Some(dt.and_utc().timestamp_millis()))
        .ok_or_else(|| RowError::InvalidDate(value.to_string()))
}

/// `%Y` alone takes any number of digits; the year token must be exactly four
fn has_four_digit_year(value: &str, fmt: &str) -> bool {
    let is_sep = |c: char| c == '-' || c == '/';
    fmt.split(is_sep)
        .position(|field| field == "%Y")
        .and_then(|i| value.split(is_sep).nth(i))
        .is_some_and(|year| year.len() == 4 && year.bytes().all(|b| b.is_ascii_digit()))
}

/// Map a priority label (urgent/high/normal/low, any case) to its code
pub fn parse_priority(raw: &str) -> Result<Option<Priority>, RowError> {
    let value = raw.trim();
    if value.is_empty() {
        return Ok(None);
    }
    value
        .parse::<Priority>()
        .map(Some)
        .map_err(RowError::InvalidPriority)
}

/// Split on `separator`, trim each segment and drop empty ones
pub fn split_list(raw: &str, separator: char) -> Vec<String> {
    raw.split(separator)
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

/// Comma-separated list with duplicates removed, first occurrence kept
pub fn split_set(raw: &str) -> Vec<String> {
    let mut out: Vec<String> = Vec::new();
    for item in split_list(raw, ',') {
        if !out.contains(&item) {
            out.push(item);
        }
    }
    out
}

pub fn parse_tags(raw: &str) -> Vec<String> {
    split_set(raw)
}

pub fn parse_assignees(raw: &str) -> Vec<String> {
    split_set(raw)
}

/// Subtask names are separated by semicolons and keep their order
pub fn parse_subtasks(raw: &str) -> Vec<String> {
    split_list(raw, ';')
}

/// Field id of a `custom_<id>` column, if the header is one
pub fn custom_field_id(header: &str) -> Option<&str> {
    let trimmed = header.trim();
    let prefix_len = columns::CUSTOM_PREFIX.len();
    if trimmed.len() <= prefix_len || !trimmed.is_char_boundary(prefix_len) {
        return None;
    }
    let (prefix, id) = trimmed.split_at(prefix_len);
    if prefix.eq_ignore_ascii_case(columns::CUSTOM_PREFIX) {
        Some(id)
    } else {
        None
    }
}

/// One entry per non-blank `custom_<id>` cell, in column order
pub fn parse_custom_fields(row: &RawRow) -> Vec<CustomFieldEntry> {
    row.columns()
        .filter(|(_, value)| !value.trim().is_empty())
        .filter_map(|(header, value)| {
            custom_field_id(header).map(|id| CustomFieldEntry {
                id: id.to_string(),
                value: value.to_string(),
            })
        })
        .collect()
}

/// All typed values extracted from one row
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizedFields {
    pub due: Option<i64>,
    pub priority: Option<Priority>,
    pub tags: Vec<String>,
    pub assignees: Vec<String>,
    pub subtasks: Vec<String>,
    pub custom_fields: Vec<CustomFieldEntry>,
}

/// Normalize every typed field of a row
pub fn normalize(row: &RawRow) -> Result<NormalizedFields, RowError> {
    let cell = |column: &str| row.get(column).unwrap_or_default();

    Ok(NormalizedFields {
        due: parse_due_date(cell(columns::DUE_DATE))?,
        priority: parse_priority(cell(columns::PRIORITY))?,
        tags: parse_tags(cell(columns::TAGS)),
        assignees: parse_assignees(cell(columns::ASSIGNEES)),
        subtasks: parse_subtasks(cell(columns::SUBTASKS)),
        custom_fields: parse_custom_fields(row),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn millis(y: i32, m: u32, d: u32) -> i64 {
        Utc.with_ymd_and_hms(y, m, d, 0, 0, 0)
            .unwrap()
            .timestamp_millis()
    }

    #[test]
    fn test_parse_iso_date() {
        assert_eq!(
            parse_due_date("2024-03-01").unwrap(),
            Some(millis(2024, 3, 1))
        );
    }

    #[test]
    fn test_all_formats_agree_when_unambiguous() {
        let expected = Some(millis(2025, 5, 15));
        for input in ["2025-05-15", "15/05/2025", "05/15/2025", "2025/05/15"] {
            assert_eq!(parse_due_date(input).unwrap(), expected, "input {}", input);
        }
    }

    #[test]
    fn test_ambiguous_date_prefers_day_first() {
        // 01/05/2025 is 1 May under DD/MM/YYYY, which is tried before MM/DD/YYYY
        assert_eq!(
            parse_due_date("01/05/2025").unwrap(),
            Some(millis(2025, 5, 1))
        );
    }

    #[test]
    fn test_empty_date_is_not_an_error() {
        assert_eq!(parse_due_date("").unwrap(), None);
        assert_eq!(parse_due_date("   ").unwrap(), None);
    }

    #[test]
    fn test_bad_date_is_an_error() {
        assert_eq!(
            parse_due_date("invalid date"),
            Err(RowError::InvalidDate("invalid date".to_string()))
        );
        assert!(parse_due_date("2024-13-01").is_err());
        assert!(parse_due_date("2024-03-01T10:00").is_err());
    }

    #[test]
    fn test_short_year_is_an_error() {
        assert_eq!(
            parse_due_date("01/05/25"),
            Err(RowError::InvalidDate("01/05/25".to_string()))
        );
        assert_eq!(
            parse_due_date("24-03-01"),
            Err(RowError::InvalidDate("24-03-01".to_string()))
        );
        assert!(parse_due_date("02025-05-01").is_err());
        assert!(parse_due_date("1/5/02025").is_err());
        // Unpadded day and month are still fine
        assert_eq!(parse_due_date("1/5/2025").unwrap(), Some(millis(2025, 5, 1)));
    }

    #[test]
    fn test_priority_table() {
        assert_eq!(parse_priority("urgent").unwrap(), Some(Priority::Urgent));
        assert_eq!(parse_priority("HIGH").unwrap(), Some(Priority::High));
        assert_eq!(parse_priority("Normal").unwrap(), Some(Priority::Normal));
        assert_eq!(parse_priority("low").unwrap(), Some(Priority::Low));
        assert_eq!(parse_priority("").unwrap(), None);
        assert_eq!(
            parse_priority("asap"),
            Err(RowError::InvalidPriority("asap".to_string()))
        );
    }

    #[test]
    fn test_list_splitting() {
        assert_eq!(parse_tags("a, b"), vec!["a", "b"]);
        assert_eq!(parse_tags(" a ,, b ,"), vec!["a", "b"]);
        assert_eq!(parse_tags("a,b,a"), vec!["a", "b"]);
        assert!(parse_tags("").is_empty());
        assert_eq!(parse_assignees("12345, 67890"), vec!["12345", "67890"]);
        assert_eq!(parse_subtasks("Sub1; Sub2 ;;"), vec!["Sub1", "Sub2"]);
        // Commas are not subtask separators
        assert_eq!(parse_subtasks("a,b;c"), vec!["a,b", "c"]);
    }

    #[test]
    fn test_custom_field_id() {
        assert_eq!(custom_field_id("custom_abc-123"), Some("abc-123"));
        assert_eq!(custom_field_id("Custom_Budget"), Some("Budget"));
        assert_eq!(custom_field_id("custom_"), None);
        assert_eq!(custom_field_id("customer"), None);
        assert_eq!(custom_field_id("name"), None);
    }

    #[test]
    fn test_custom_fields_skip_blank_values() {
        let row = RawRow::new(
            1,
            vec![
                ("name".to_string(), "Task".to_string()),
                ("custom_f1".to_string(), "42".to_string()),
                ("custom_f2".to_string(), "  ".to_string()),
                ("custom_f3".to_string(), "yes".to_string()),
            ],
        );
        let fields = parse_custom_fields(&row);
        assert_eq!(fields.len(), 2);
        assert_eq!(fields[0].id, "f1");
        assert_eq!(fields[0].value, "42");
        assert_eq!(fields[1].id, "f3");
    }

    #[test]
    fn test_normalize_is_repeatable() {
        let row = RawRow::new(
            1,
            vec![
                ("name".to_string(), "Task".to_string()),
                ("due_date".to_string(), "15/05/2025".to_string()),
                ("tags".to_string(), "x, y".to_string()),
            ],
        );
        assert_eq!(normalize(&row).unwrap(), normalize(&row).unwrap());
    }
}
