//! Excel (OOXML) workbook export.

use std::io::Write;

use rust_xlsxwriter::{Format, Workbook};

use super::row::{ReportRow, REPORT_HEADERS};
use crate::error_handling::ExportError;

/// Name of the single worksheet holding the report.
pub const WORKSHEET_NAME: &str = "Report";

/// Writes `rows` as an `.xlsx` workbook to `writer`.
///
/// One worksheet: a bold header row followed by one row per domain, in
/// [`REPORT_HEADERS`] order. The workbook is assembled in memory, so nothing
/// is written when serialization fails.
///
/// # Errors
///
/// Returns `ExportError::Excel` if the workbook cannot be built and
/// `ExportError::Io` if writing fails.
pub fn export_excel<W: Write>(rows: &[ReportRow], mut writer: W) -> Result<(), ExportError> {
    let mut workbook = Workbook::new();
    let header = Format::new().set_bold();

    let worksheet = workbook.add_worksheet();
    worksheet.set_name(WORKSHEET_NAME)?;
    for (col, title) in (0u16..).zip(REPORT_HEADERS) {
        worksheet.write_string_with_format(0, col, title, &header)?;
    }
    for (row_index, row) in (1u32..).zip(rows) {
        for (col, value) in (0u16..).zip(row.fields()) {
            // Empty fields stay blank cells
            if !value.is_empty() {
                worksheet.write_string(row_index, col, value)?;
            }
        }
    }
    worksheet.autofit();

    let buffer = workbook.save_to_buffer()?;
    writer.write_all(&buffer)?;
    writer.flush()?;
    Ok(())
}
