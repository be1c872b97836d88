//! Plain-text report: a timestamped header and one block per domain.

use std::io::Write;

use chrono::Local;

use super::row::{ReportRow, REPORT_HEADERS};
use crate::error_handling::ExportError;

/// Title line of the text report.
pub const REPORT_TITLE: &str = "Email Provider Report";

/// Writes `rows` as a line-itemized report to `writer`.
///
/// # Errors
///
/// Returns `ExportError::Io` if writing fails.
pub fn export_text<W: Write>(rows: &[ReportRow], mut writer: W) -> Result<(), ExportError> {
    writeln!(writer, "{REPORT_TITLE}")?;
    writeln!(
        writer,
        "Generated: {}",
        Local::now().format("%Y-%m-%d %H:%M:%S")
    )?;

    let width = REPORT_HEADERS.iter().map(|h| h.len()).max().unwrap_or(0);
    for (index, row) in rows.iter().enumerate() {
        writeln!(writer)?;
        writeln!(writer, "#{}", index + 1)?;
        for (header, value) in REPORT_HEADERS.iter().zip(row.fields()) {
            writeln!(writer, "  {header:<width$}  {value}")?;
        }
    }
    writer.flush()?;
    Ok(())
}
