//! Starter CSV template

use crate::import::row::columns;

/// Placeholder custom field column shown in the template
pub const EXAMPLE_CUSTOM_COLUMN: &str = "custom_0a52c486-5f05-403b-b4fd-c512ff05131c";

/// Template headers, in the order users are expected to fill them
pub fn template_headers() -> Vec<&'static str> {
    vec![
        columns::NAME,
        columns::DESCRIPTION,
        columns::DUE_DATE,
        columns::PRIORITY,
        columns::STATUS,
        columns::TAGS,
        columns::ASSIGNEES,
        columns::SUBTASKS,
        EXAMPLE_CUSTOM_COLUMN,
    ]
}

/// One filled-in row that imports cleanly
pub fn template_example() -> Vec<&'static str> {
    vec![
        "Write release notes",
        "Summarize changes for the 2.0 release",
        "2025-03-31",
        "high",
        "to do",
        "docs, release",
        "183, 204",
        "Collect merged PRs; Draft notes; Review",
        "42",
    ]
}

/// Render the template as CSV text (header plus example row)
pub fn render_template() -> csv::Result<String> {
    let mut wtr = csv::WriterBuilder::new().from_writer(Vec::new());
    wtr.write_record(template_headers())?;
    wtr.write_record(template_example())?;
    let bytes = wtr
        .into_inner()
        .map_err(|e| csv::Error::from(e.into_error()))?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}
