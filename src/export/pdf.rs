//! PDF report: a timestamped title and one block per domain.
//!
//! Blocks are laid out top to bottom on US Letter pages; a new page starts
//! when the cursor falls below the bottom margin.

use std::io::Write;

use chrono::Local;
use printpdf::{BuiltinFont, IndirectFontRef, Mm, PdfDocument, PdfLayerReference, Pt};

use super::row::{yes_no, ReportRow};
use super::text::REPORT_TITLE;
use crate::error_handling::ExportError;

const PAGE_WIDTH: f32 = 612.0;
const PAGE_HEIGHT: f32 = 792.0;
const FONT_SIZE: f32 = 12.0;
const LEFT: f32 = 40.0;
const INDENT: f32 = 60.0;
const LINE: f32 = 20.0;
const LABEL_GAP: f32 = 15.0;
const BLOCK_GAP: f32 = 40.0;
const BOTTOM_MARGIN: f32 = 100.0;
const LAYER: &str = "Layer 1";

fn pt(value: f32) -> Mm {
    Mm::from(Pt(value))
}

fn pdf_error(error: impl std::fmt::Display) -> ExportError {
    ExportError::Pdf(error.to_string())
}

/// Writes one line at a time, moving down and breaking pages as needed.
struct PageCursor<'a> {
    doc: &'a printpdf::PdfDocumentReference,
    font: IndirectFontRef,
    layer: PdfLayerReference,
    y: f32,
}

impl PageCursor<'_> {
    fn text(&mut self, x: f32, value: &str, advance: f32) {
        self.layer
            .use_text(value, FONT_SIZE, pt(x), pt(self.y), &self.font);
        self.y -= advance;
    }

    fn ensure_room(&mut self) {
        if self.y < BOTTOM_MARGIN {
            let (page, layer) = self.doc.add_page(pt(PAGE_WIDTH), pt(PAGE_HEIGHT), LAYER);
            self.layer = self.doc.get_page(page).get_layer(layer);
            self.y = PAGE_HEIGHT - 50.0;
        }
    }

    fn block(&mut self, row: &ReportRow) {
        self.ensure_room();
        self.text(LEFT, &format!("Institution: {}", row.institution), LINE);
        self.text(LEFT, &format!("Entity: {}", row.entity), LINE);
        self.text(LEFT, &format!("Domain: {}", row.domain), LINE);
        self.text(LEFT, &format!("Detected Provider: {}", row.detected_provider), LINE);
        self.text(LEFT, &format!("Disposable: {}", yes_no::label(row.disposable)), LINE);
        for (label, value) in [
            ("MX Records:", &row.mx_records),
            ("SPF Records:", &row.spf_records),
            ("DMARC Records:", &row.dmarc_records),
        ] {
            self.text(LEFT, label, LABEL_GAP);
            self.text(INDENT, value, LINE);
        }
        self.y -= BLOCK_GAP - LINE;
    }
}

/// Writes `rows` as a PDF report to `writer`.
///
/// # Errors
///
/// Returns `ExportError::Pdf` if the document cannot be built and
/// `ExportError::Io` if writing fails.
pub fn export_pdf<W: Write>(rows: &[ReportRow], mut writer: W) -> Result<(), ExportError> {
    let (doc, page, layer) =
        PdfDocument::new(REPORT_TITLE, pt(PAGE_WIDTH), pt(PAGE_HEIGHT), LAYER);
    let font = doc
        .add_builtin_font(BuiltinFont::Helvetica)
        .map_err(pdf_error)?;

    {
        let mut cursor = PageCursor {
            doc: &doc,
            font,
            layer: doc.get_page(page).get_layer(layer),
            y: PAGE_HEIGHT - 50.0,
        };
        let title = format!(
            "{REPORT_TITLE} - {}",
            Local::now().format("%Y-%m-%d %H:%M:%S")
        );
        cursor.text(LEFT, &title, 50.0);
        for row in rows {
            cursor.block(row);
        }
    }

    let bytes = doc.save_to_bytes().map_err(pdf_error)?;
    writer.write_all(&bytes)?;
    writer.flush()?;
    Ok(())
}
