//! CSV export.
//!
//! One header row followed by one row per classified domain. The header is
//! always written, so an empty batch still yields a well-formed file.

use std::io::Write;

use csv::WriterBuilder;

use super::row::{ReportRow, REPORT_HEADERS};
use crate::error_handling::ExportError;

/// Writes `rows` as CSV to `writer`.
///
/// # Errors
///
/// Returns `ExportError::Csv` if serialization or the underlying write fails.
pub fn export_csv<W: Write>(rows: &[ReportRow], writer: W) -> Result<(), ExportError> {
    let mut writer = WriterBuilder::new().has_headers(false).from_writer(writer);
    writer.write_record(REPORT_HEADERS)?;
    for row in rows {
        writer.serialize(row)?;
    }
    writer.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(domain: &str) -> ReportRow {
        ReportRow {
            institution: "Università, Sede Centrale".into(),
            domain: domain.into(),
            entity: "Università".into(),
            mx_records: "Microsoft 365, Microsoft Exchange Online Protection".into(),
            spf_records: "Microsoft 365".into(),
            dmarc_records: String::new(),
            detected_provider: "Microsoft 365 | Microsoft Exchange Online Protection".into(),
            disposable: false,
        }
    }

    #[test]
    fn test_export_csv_header_only_when_empty() {
        let mut out = Vec::new();
        export_csv(&[], &mut out).expect("export succeeds");
        let text = String::from_utf8(out).expect("utf8");
        assert_eq!(
            text.trim_end(),
            "Institution,Domain,Entity,MX Records,SPF Records,DMARC Records,Detected Provider,Disposable"
        );
    }

    #[test]
    fn test_export_csv_quotes_separators() {
        let mut out = Vec::new();
        export_csv(&[row("uni.it")], &mut out).expect("export succeeds");
        let text = String::from_utf8(out).expect("utf8");
        let mut lines = text.lines();
        lines.next();
        let line = lines.next().expect("one data row");
        assert!(line.starts_with("\"Università, Sede Centrale\",uni.it,Università,"));
        assert!(line.ends_with(",No"));
    }

    #[test]
    fn test_export_csv_reparses() {
        let rows = vec![row("a.it"), row("b.it")];
        let mut out = Vec::new();
        export_csv(&rows, &mut out).expect("export succeeds");

        let mut reader = csv::Reader::from_reader(out.as_slice());
        let parsed: Vec<ReportRow> = reader
            .deserialize()
            .collect::<Result<_, _>>()
            .expect("reparses");
        assert_eq!(parsed, rows);
    }
}
