// src/export/mod.rs

mod csv;
mod fs_utils;
mod json;

use crate::core::report::ReportRow;
use crate::errors::AppResult;
use crate::ui::messages::success;
use clap::ValueEnum;
use std::path::Path;

/// Shared completion message for export writers.
pub(crate) fn notify_export_success(label: &str, path: &Path) {
    success(format!("{label} export completed: {}", path.display()));
}

#[derive(Clone, Debug, ValueEnum)]
pub enum ExportFormat {
    Csv,
    Json,
}

impl ExportFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            ExportFormat::Csv => "csv",
            ExportFormat::Json => "json",
        }
    }
}

/// Write the admin report rows to `file` in the requested format.
pub fn write_report(
    format: &ExportFormat,
    file: &str,
    rows: &[ReportRow],
    force: bool,
) -> AppResult<()> {
    let path = Path::new(file);
    fs_utils::ensure_writable(path, force)?;

    match format {
        ExportFormat::Csv => csv::write_csv(path, rows)?,
        ExportFormat::Json => json::write_json(path, rows)?,
    }

    notify_export_success(format.as_str(), path);
    Ok(())
}
