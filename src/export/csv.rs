use crate::core::report::ReportRow;
use crate::errors::{AppError, AppResult};
use crate::utils::time::format_hms;
use csv::Writer;
use std::path::Path;

/// Write the report rows as CSV.
pub(crate) fn write_csv(path: &Path, rows: &[ReportRow]) -> AppResult<()> {
    let mut wtr = Writer::from_path(path).map_err(|e| AppError::Export(e.to_string()))?;

    wtr.write_record(["name", "total", "status"])
        .map_err(|e| AppError::Export(e.to_string()))?;

    for row in rows {
        wtr.write_record([
            row.name.as_str(),
            &format_hms(row.total_ms),
            row.status.as_str(),
        ])
        .map_err(|e| AppError::Export(e.to_string()))?;
    }

    wtr.flush()?;
    Ok(())
}
