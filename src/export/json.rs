use crate::core::report::ReportRow;
use crate::errors::{AppError, AppResult};
use crate::utils::time::format_hms;
use serde::Serialize;
use std::path::Path;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct JsonRow<'a> {
    name: &'a str,
    total_ms: i64,
    total: String,
    status: &'a str,
}

/// Write the report rows as pretty-printed JSON.
pub(crate) fn write_json(path: &Path, rows: &[ReportRow]) -> AppResult<()> {
    let out: Vec<JsonRow<'_>> = rows
        .iter()
        .map(|row| JsonRow {
            name: &row.name,
            total_ms: row.total_ms,
            total: format_hms(row.total_ms),
            status: row.status.as_str(),
        })
        .collect();

    let json = serde_json::to_string_pretty(&out).map_err(|e| AppError::Export(e.to_string()))?;
    std::fs::write(path, json)?;
    Ok(())
}
