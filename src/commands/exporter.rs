// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::commands::reports::{sum_by_category, HEADERS, REPORT_TITLE};
use crate::error::{GastosError, GastosResult};
use crate::models::CategoryTotal;
use crate::utils::fmt_total;
use printpdf::{
    BuiltinFont, IndirectFontRef, Line, Mm, PdfDocument, PdfDocumentReference, PdfLayerReference,
    Point,
};
use rusqlite::Connection;
use serde::Serialize;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;
use tracing::info;

pub const CSV_FILE: &str = "relatorio_gastos.csv";
pub const PDF_FILE: &str = "relatorio_gastos.pdf";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    Csv,
    Pdf,
}

/// Aggregates once and renders the result to `out`, replacing any previous file.
/// Returns the number of category rows written.
pub fn export_report(conn: &Connection, format: ExportFormat, out: &Path) -> GastosResult<usize> {
    let totals = sum_by_category(conn)?;
    match format {
        ExportFormat::Csv => export_csv(&totals, out)?,
        ExportFormat::Pdf => export_pdf(&totals, out)?,
    }
    info!(?format, path = %out.display(), rows = totals.len(), "exported report");
    Ok(totals.len())
}

#[derive(Serialize)]
struct ReportRow<'a> {
    category: &'a str,
    total: String,
}

pub fn write_csv<W: Write>(totals: &[CategoryTotal], writer: W) -> Result<(), csv::Error> {
    // Header is written by hand so an empty report still carries it.
    let mut wtr = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(writer);
    wtr.write_record(HEADERS)?;
    for t in totals {
        wtr.serialize(ReportRow {
            category: &t.category,
            total: fmt_total(t.total),
        })?;
    }
    wtr.flush()?;
    Ok(())
}

pub fn export_csv(totals: &[CategoryTotal], out: &Path) -> GastosResult<()> {
    let file = File::create(out).map_err(|e| GastosError::export(out, e))?;
    write_csv(totals, file).map_err(|e| GastosError::export(out, e))
}

pub const PAGE_W: f32 = 210.0;
pub const PAGE_H: f32 = 297.0;
const MARGIN: f32 = 20.0;
pub const ROW_H: f32 = 10.0;
pub const COL_W: [f32; 2] = [110.0, 60.0];
const PAD: f32 = 3.0;
const TITLE_SIZE: f32 = 16.0;
const TEXT_SIZE: f32 = 11.0;
const LAYER: &str = "Relatorio";

/// A line of text placed on a page, coordinates in millimetres from the
/// bottom-left corner.
#[derive(Debug, Clone, PartialEq)]
pub struct TextItem {
    pub text: String,
    pub x: f32,
    pub y: f32,
    pub size: f32,
    pub bold: bool,
}

/// A bordered table cell; `top` is its upper edge.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CellBox {
    pub x: f32,
    pub top: f32,
    pub width: f32,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct PageLayout {
    pub texts: Vec<TextItem>,
    pub cells: Vec<CellBox>,
}

// Helvetica averages roughly half an em per glyph; good enough to centre a line.
pub fn text_width_mm(text: &str, size: f32) -> f32 {
    text.chars().count() as f32 * size * 0.5 * 0.3528
}

impl PageLayout {
    fn row(&mut self, top: f32, category: &str, total: &str, bold: bool) {
        let left = (PAGE_W - COL_W[0] - COL_W[1]) / 2.0;
        let baseline = top - ROW_H + PAD;
        self.cells.push(CellBox { x: left, top, width: COL_W[0] });
        self.cells.push(CellBox { x: left + COL_W[0], top, width: COL_W[1] });
        self.texts.push(TextItem {
            text: category.to_string(),
            x: left + PAD,
            y: baseline,
            size: TEXT_SIZE,
            bold,
        });
        let right = left + COL_W[0] + COL_W[1] - PAD;
        self.texts.push(TextItem {
            text: total.to_string(),
            x: right - text_width_mm(total, TEXT_SIZE),
            y: baseline,
            size: TEXT_SIZE,
            bold,
        });
    }
}

/// Lays out the report: centred title, then a bordered two-column table.
/// Rows that do not fit continue on a new page under a repeated header.
pub fn layout_report(totals: &[CategoryTotal]) -> Vec<PageLayout> {
    let mut pages = Vec::new();
    let mut page = PageLayout::default();

    let title_top = PAGE_H - MARGIN;
    page.texts.push(TextItem {
        text: REPORT_TITLE.to_string(),
        x: (PAGE_W - text_width_mm(REPORT_TITLE, TITLE_SIZE)) / 2.0,
        y: title_top - 5.0,
        size: TITLE_SIZE,
        bold: true,
    });

    let mut top = title_top - 15.0;
    page.row(top, HEADERS[0], HEADERS[1], true);
    top -= ROW_H;

    for t in totals {
        if top - ROW_H < MARGIN {
            pages.push(std::mem::take(&mut page));
            top = PAGE_H - MARGIN;
            page.row(top, HEADERS[0], HEADERS[1], true);
            top -= ROW_H;
        }
        page.row(top, &t.category, &fmt_total(t.total), false);
        top -= ROW_H;
    }
    pages.push(page);
    pages
}

fn draw_page(
    layer: &PdfLayerReference,
    page: &PageLayout,
    regular: &IndirectFontRef,
    bold: &IndirectFontRef,
) {
    layer.set_outline_thickness(0.5);
    for c in &page.cells {
        let points = vec![
            (Point::new(Mm(c.x), Mm(c.top)), false),
            (Point::new(Mm(c.x + c.width), Mm(c.top)), false),
            (Point::new(Mm(c.x + c.width), Mm(c.top - ROW_H)), false),
            (Point::new(Mm(c.x), Mm(c.top - ROW_H)), false),
        ];
        layer.add_line(Line {
            points,
            is_closed: true,
        });
    }
    for t in &page.texts {
        let font = if t.bold { bold } else { regular };
        layer.use_text(t.text.as_str(), t.size, Mm(t.x), Mm(t.y), font);
    }
}

pub fn render_pdf(totals: &[CategoryTotal]) -> Result<PdfDocumentReference, printpdf::Error> {
    let pages = layout_report(totals);
    let (doc, page, layer) = PdfDocument::new(REPORT_TITLE, Mm(PAGE_W), Mm(PAGE_H), LAYER);
    let regular = doc.add_builtin_font(BuiltinFont::Helvetica)?;
    let bold = doc.add_builtin_font(BuiltinFont::HelveticaBold)?;

    let mut layer = doc.get_page(page).get_layer(layer);
    for (i, p) in pages.iter().enumerate() {
        if i > 0 {
            let (page, l) = doc.add_page(Mm(PAGE_W), Mm(PAGE_H), LAYER);
            layer = doc.get_page(page).get_layer(l);
        }
        draw_page(&layer, p, &regular, &bold);
    }
    Ok(doc)
}

pub fn export_pdf(totals: &[CategoryTotal], out: &Path) -> GastosResult<()> {
    let doc = render_pdf(totals).map_err(|e| GastosError::export(out, e))?;
    let file = File::create(out).map_err(|e| GastosError::export(out, e))?;
    doc.save(&mut BufWriter::new(file))
        .map_err(|e| GastosError::export(out, e))
}
