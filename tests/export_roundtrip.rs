//! Exported reports re-parse to the same field values.

mod helpers;

use helpers::{classifier, FakeResolver};
use std::io::Cursor;

use calamine::{open_workbook_from_rs, Reader, Xlsx};
use mail_provider::export::{
    export_csv, export_excel, export_json, export_pdf, export_rows, REPORT_HEADERS, WORKSHEET_NAME,
};
use mail_provider::{classify_batch, BatchOptions, BatchRow, ExportFormat, ReportRow};
use tokio_util::sync::CancellationToken;

async fn classified_rows() -> Vec<ReportRow> {
    let resolver = FakeResolver::new()
        .google("alfa.it")
        .microsoft("università.it")
        .txt("gamma.it", &["v=spf1 include:zoho.com ~all"]);
    let rows = vec![
        BatchRow::new("Comune di Alfa", "alfa.it", "Comune"),
        BatchRow::new("Università, \"Sede\"", "università.it", "Università"),
        BatchRow::new("Gamma", "gamma.it", "Comune"),
        BatchRow::new("Temp", "yopmail.com", "Altro"),
    ];
    classify_batch(
        &classifier(resolver),
        rows,
        BatchOptions::default(),
        &CancellationToken::new(),
    )
    .await
    .rows
}

#[tokio::test]
async fn test_csv_roundtrip() {
    let rows = classified_rows().await;
    let mut out = Vec::new();
    export_csv(&rows, &mut out).expect("export succeeds");

    let mut reader = csv::Reader::from_reader(out.as_slice());
    let headers: Vec<String> = reader
        .headers()
        .expect("header row")
        .iter()
        .map(String::from)
        .collect();
    assert_eq!(headers, REPORT_HEADERS);

    let parsed: Vec<ReportRow> = reader
        .deserialize()
        .collect::<Result<_, _>>()
        .expect("rows reparse");
    assert_eq!(parsed, rows);
}

#[tokio::test]
async fn test_csv_disposable_column_is_yes_no() {
    let rows = classified_rows().await;
    let mut out = Vec::new();
    export_csv(&rows, &mut out).expect("export succeeds");

    let mut reader = csv::Reader::from_reader(out.as_slice());
    let flags: Vec<String> = reader
        .records()
        .map(|r| r.expect("record")[7].to_string())
        .collect();
    assert_eq!(flags, vec!["No", "No", "No", "Yes"]);
}

#[tokio::test]
async fn test_json_roundtrip() {
    let rows = classified_rows().await;
    let mut out = Vec::new();
    export_json(&rows, &mut out).expect("export succeeds");

    let value: serde_json::Value = serde_json::from_slice(&out).expect("valid json");
    let array = value.as_array().expect("top-level array");
    assert_eq!(array.len(), rows.len());
    for record in array {
        let object = record.as_object().expect("record object");
        assert_eq!(object.len(), REPORT_HEADERS.len());
        for header in REPORT_HEADERS {
            assert!(object.contains_key(header), "missing {header}");
        }
    }

    let parsed: Vec<ReportRow> = serde_json::from_slice(&out).expect("rows reparse");
    assert_eq!(parsed, rows);
}

#[tokio::test]
async fn test_export_rows_writes_file() {
    let rows = classified_rows().await;
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("report.json");

    let written = export_rows(ExportFormat::Json, &rows, Some(&path)).expect("export succeeds");
    assert_eq!(written, rows.len());

    let content = std::fs::read_to_string(&path).expect("reads");
    let parsed: Vec<ReportRow> = serde_json::from_str(&content).expect("rows reparse");
    assert_eq!(parsed, rows);
}

#[tokio::test]
async fn test_excel_roundtrip() {
    let rows = classified_rows().await;
    let mut out = Vec::new();
    export_excel(&rows, &mut out).expect("export succeeds");

    let mut workbook: Xlsx<_> = open_workbook_from_rs(Cursor::new(out)).expect("valid xlsx");
    let range = workbook
        .worksheet_range(WORKSHEET_NAME)
        .expect("report worksheet");
    let cells: Vec<Vec<String>> = range
        .rows()
        .map(|row| row.iter().map(|cell| cell.to_string()).collect())
        .collect();

    assert_eq!(cells.len(), rows.len() + 1);
    assert_eq!(cells[0], REPORT_HEADERS);
    for (sheet_row, row) in cells[1..].iter().zip(&rows) {
        assert_eq!(sheet_row, &row.fields());
    }
    assert_eq!(cells[4][7], "Yes");
}

#[tokio::test]
async fn test_pdf_header_and_pages() {
    let rows = classified_rows().await;
    let mut out = Vec::new();
    export_pdf(&rows, &mut out).expect("export succeeds");
    assert!(out.starts_with(b"%PDF"));
    let doc = lopdf::Document::load_mem(&out).expect("valid pdf");
    assert_eq!(doc.get_pages().len(), 2);

    // Three blocks fit on a page; an empty report is just the title page
    let mut out = Vec::new();
    export_pdf(&rows[..3], &mut out).expect("export succeeds");
    let doc = lopdf::Document::load_mem(&out).expect("valid pdf");
    assert_eq!(doc.get_pages().len(), 1);

    let mut out = Vec::new();
    export_pdf(&[], &mut out).expect("export succeeds");
    let doc = lopdf::Document::load_mem(&out).expect("valid pdf");
    assert_eq!(doc.get_pages().len(), 1);

    let many: Vec<_> = rows.iter().cycle().take(7).cloned().collect();
    let mut out = Vec::new();
    export_pdf(&many, &mut out).expect("export succeeds");
    let doc = lopdf::Document::load_mem(&out).expect("valid pdf");
    assert_eq!(doc.get_pages().len(), 3);
}
