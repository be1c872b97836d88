//! JSON export: a single array of records keyed by the report headers.

use std::io::Write;

use super::row::ReportRow;
use crate::error_handling::ExportError;

/// Writes `rows` as a pretty-printed JSON array to `writer`.
///
/// Non-ASCII text is written as UTF-8, not escaped.
///
/// # Errors
///
/// Returns `ExportError::Json` if serialization or the underlying write fails.
pub fn export_json<W: Write>(rows: &[ReportRow], mut writer: W) -> Result<(), ExportError> {
    serde_json::to_writer_pretty(&mut writer, rows)?;
    writeln!(writer)?;
    writer.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_export_json_empty_array() {
        let mut out = Vec::new();
        export_json(&[], &mut out).expect("export succeeds");
        assert_eq!(String::from_utf8(out).expect("utf8").trim(), "[]");
    }

    #[test]
    fn test_export_json_keeps_utf8() {
        let row = ReportRow {
            institution: "Città di Forlì".into(),
            domain: "comune.forli.fc.it".into(),
            entity: "Comune".into(),
            mx_records: "Error: timed out".into(),
            spf_records: String::new(),
            dmarc_records: String::new(),
            detected_provider: "Undeterminable".into(),
            disposable: false,
        };
        let mut out = Vec::new();
        export_json(std::slice::from_ref(&row), &mut out).expect("export succeeds");
        let text = String::from_utf8(out).expect("utf8");
        assert!(text.contains("Città di Forlì"));
        assert!(text.contains("\"Disposable\": \"No\""));

        let parsed: Vec<ReportRow> = serde_json::from_str(&text).expect("reparses");
        assert_eq!(parsed, vec![row]);
    }
}
