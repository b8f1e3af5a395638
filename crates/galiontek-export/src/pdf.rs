//! PDF renderer.
//!
//! Produces a landscape A4, right-to-left document: title block, summary
//! band, and an auto-paginating six-column meeting table. Rows keep the
//! order of the input list; the renderer never re-sorts. The result is a
//! byte buffer plus the download filename — writing the file is left to the
//! caller.
//!
//! Hebrew text requires an embedded Unicode font; the builtin PDF fonts are
//! WinAnsi-only and cannot encode it. The bundled DejaVu Sans faces (see
//! `fonts/LICENSE`) cover the Hebrew block. PDF content streams carry no
//! bidi algorithm either, so every string is reordered into visual order
//! before it is written.

use std::io::Cursor;

use chrono::NaiveDate;
use galiontek_core::hebrew;
use galiontek_core::meeting::Meeting;
use galiontek_core::order::OrderRef;
use galiontek_core::units::UnitMode;
use printpdf::{IndirectFontRef, Mm, PdfDocument, PdfLayerReference};
use tracing::debug;
use unicode_bidi::{BidiInfo, Level};

use crate::error::ExportError;
use crate::table::{self, TableRow};

static FONT_REGULAR: &[u8] = include_bytes!("../fonts/DejaVuSans.ttf");
static FONT_BOLD: &[u8] = include_bytes!("../fonts/DejaVuSans-Bold.ttf");

const PAGE_WIDTH_MM: f64 = 297.0;
const PAGE_HEIGHT_MM: f64 = 210.0;
const MARGIN_MM: f64 = 15.0;
const ROW_HEIGHT_MM: f64 = 8.0;
const TITLE_SIZE: f64 = 16.0;
const BODY_SIZE: f64 = 11.0;

/// X positions of the six columns. The table reads right-to-left, so the
/// date column sits nearest the right page edge and the topic column gets
/// the wide leftover on the left.
const COLUMN_X_MM: [f64; 6] = [252.0, 222.0, 184.0, 150.0, 120.0, 20.0];

fn mm(value: f64) -> Mm {
    Mm(value as _)
}

/// Reorders a logical-order line into visual order for drawing.
///
/// The paragraph level is forced to RTL so pure-number lines still sit in
/// the right-to-left flow of the document.
fn visual_order(text: &str) -> String {
    let bidi = BidiInfo::new(text, Some(Level::rtl()));
    match bidi.paragraphs.first() {
        Some(para) => bidi.reorder_line(para, para.range.clone()).into_owned(),
        None => text.to_string(),
    }
}

/// A rendered PDF artifact: the bytes and the download filename.
#[derive(Debug, Clone)]
pub struct PdfExport {
    /// `meetings-{orderId}-{YYYYMMDD}.pdf`.
    pub filename: String,
    /// The complete document.
    pub bytes: Vec<u8>,
}

/// The download filename for an order exported on a given date.
pub fn filename(order_id: &str, export_date: NaiveDate) -> String {
    format!("meetings-{}-{}.pdf", order_id, export_date.format("%Y%m%d"))
}

/// Renders the meeting table document.
///
/// # Errors
///
/// Returns [`ExportError::NoMeetings`] for an empty meeting list, or a
/// wrapped printpdf error if font embedding or byte assembly fails.
pub fn render(
    order: &OrderRef,
    meetings: &[Meeting],
    mode: UnitMode,
    export_date: NaiveDate,
) -> Result<PdfExport, ExportError> {
    if meetings.is_empty() {
        return Err(ExportError::NoMeetings);
    }

    let (_, summary_lines) = table::summarize_for_export(order, meetings, mode);
    let rows = table::rows(meetings, mode);
    let title = table::export_title(order);

    let (doc, first_page, first_layer) = PdfDocument::new(
        title.as_str(),
        mm(PAGE_WIDTH_MM),
        mm(PAGE_HEIGHT_MM),
        "meetings",
    );
    let regular = doc
        .add_external_font(Cursor::new(FONT_REGULAR))
        .map_err(|e| ExportError::Pdf(e.to_string()))?;
    let bold = doc
        .add_external_font(Cursor::new(FONT_BOLD))
        .map_err(|e| ExportError::Pdf(e.to_string()))?;

    let mut layer = doc.get_page(first_page).get_layer(first_layer);
    let mut y = PAGE_HEIGHT_MM - MARGIN_MM;

    // Title block: order title, client name, export date.
    layer.use_text(
        visual_order(&title),
        TITLE_SIZE as _,
        mm(MARGIN_MM),
        mm(y),
        &bold,
    );
    y -= ROW_HEIGHT_MM * 1.5;
    if let Some(ref client) = order.client_name {
        layer.use_text(
            visual_order(&format!("לקוח: {client}")),
            BODY_SIZE as _,
            mm(MARGIN_MM),
            mm(y),
            &regular,
        );
        y -= ROW_HEIGHT_MM;
    }
    layer.use_text(
        visual_order(&format!("תאריך ייצוא: {}", hebrew::format_date(export_date))),
        BODY_SIZE as _,
        mm(MARGIN_MM),
        mm(y),
        &regular,
    );
    y -= ROW_HEIGHT_MM * 1.5;

    // Summary band.
    for line in &summary_lines {
        layer.use_text(visual_order(line), BODY_SIZE as _, mm(MARGIN_MM), mm(y), &regular);
        y -= ROW_HEIGHT_MM;
    }
    y -= ROW_HEIGHT_MM / 2.0;

    // Table, paginating when the current page runs out.
    let mut pages = 1usize;
    draw_header(&layer, &bold, y);
    y -= ROW_HEIGHT_MM;

    for row in &rows {
        if y < MARGIN_MM + ROW_HEIGHT_MM {
            let (page, page_layer) = doc.add_page(mm(PAGE_WIDTH_MM), mm(PAGE_HEIGHT_MM), "meetings");
            layer = doc.get_page(page).get_layer(page_layer);
            y = PAGE_HEIGHT_MM - MARGIN_MM;
            draw_header(&layer, &bold, y);
            y -= ROW_HEIGHT_MM;
            pages += 1;
        }
        draw_row(&layer, &regular, row, y);
        y -= ROW_HEIGHT_MM;
    }

    debug!(rows = rows.len(), pages, order = %order.id, "rendered meeting table");

    let bytes = doc
        .save_to_bytes()
        .map_err(|e| ExportError::Pdf(e.to_string()))?;
    Ok(PdfExport {
        filename: filename(&order.id, export_date),
        bytes,
    })
}

fn draw_header(layer: &PdfLayerReference, font: &IndirectFontRef, y: f64) {
    for (title, x) in table::COLUMN_TITLES.iter().zip(COLUMN_X_MM) {
        layer.use_text(visual_order(title), BODY_SIZE as _, mm(x), mm(y), font);
    }
}

fn draw_row(layer: &PdfLayerReference, font: &IndirectFontRef, row: &TableRow, y: f64) {
    let cells = [
        row.date.as_str(),
        row.weekday.as_str(),
        row.time_range.as_str(),
        row.hours.as_str(),
        row.units.as_str(),
        row.topic.as_str(),
    ];
    for (cell, x) in cells.iter().zip(COLUMN_X_MM) {
        layer.use_text(visual_order(cell), BODY_SIZE as _, mm(x), mm(y), font);
    }
}
