//! Report export.
//!
//! Classified domains are rendered into [`ReportRow`]s and serialized as CSV,
//! a JSON array, an Excel workbook, a PDF report, or a plain-text report.
//! Every format carries the same eight columns; only the encoding differs.

mod csv;
mod excel;
mod json;
mod pdf;
mod row;
mod text;
mod writer;

use std::path::Path;

use log::info;

use crate::config::ExportFormat;
use crate::error_handling::ExportError;

pub use csv::export_csv;
pub use excel::{export_excel, WORKSHEET_NAME};
pub use json::export_json;
pub use pdf::export_pdf;
pub use row::{ReportRow, REPORT_HEADERS};
pub use text::{export_text, REPORT_TITLE};

/// Writes `rows` in `format` to `output`, or to stdout when `None`.
///
/// Returns the number of rows written.
///
/// # Errors
///
/// Returns an `ExportError` if the output cannot be created or serialization
/// fails. Rows are never silently dropped.
pub fn export_rows(
    format: ExportFormat,
    rows: &[ReportRow],
    output: Option<&Path>,
) -> Result<usize, ExportError> {
    let writer = writer::open_output(output)?;
    match format {
        ExportFormat::Csv => export_csv(rows, writer)?,
        ExportFormat::Json => export_json(rows, writer)?,
        ExportFormat::Excel => export_excel(rows, writer)?,
        ExportFormat::Pdf => export_pdf(rows, writer)?,
        ExportFormat::Text => export_text(rows, writer)?,
    }
    if let Some(path) = output {
        info!("Wrote {} rows to {}", rows.len(), path.display());
    }
    Ok(rows.len())
}
