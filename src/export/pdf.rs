//! PDF rendering of the attendance table.
//!
//! Renders an [`ExportDocument`] with `printpdf`: a title on the first page,
//! a bold header row repeated on every page, and one line per row with the
//! status cell drawn in its accent color. Pages break automatically once the
//! bottom margin is reached.

use std::ops::Range;

use printpdf::{
    BuiltinFont, Color, IndirectFontRef, Mm, PdfDocument, PdfDocumentReference,
    PdfLayerReference, Rgb,
};
use tracing::debug;

use crate::config::{AccentColors, ConfigLoader, ReportConfig, RgbColor};
use crate::error::{EngineError, EngineResult};

use super::document::{DocumentRenderer, ExportDocument};

/// Millimetres per typographic point.
const MM_PER_PT: f32 = 0.352_778;

/// Average glyph width of Helvetica as a fraction of the font size.
const AVERAGE_GLYPH_WIDTH_EM: f32 = 0.5;

/// Horizontal space left between a cell's text and the next column.
const CELL_PADDING_MM: f32 = 1.5;

/// Gap between the title and the table header.
const TITLE_GAP_MM: f32 = 4.0;

const ELLIPSIS: &str = "...";

const LAYER_NAME: &str = "Table";

/// Renders export documents as paginated PDF tables.
#[derive(Debug, Clone)]
pub struct PdfRenderer {
    report: ReportConfig,
    colors: AccentColors,
}

impl PdfRenderer {
    /// Creates a renderer from report layout and accent colors.
    pub fn new(report: ReportConfig, colors: AccentColors) -> Self {
        Self { report, colors }
    }

    /// Creates a renderer from loaded configuration.
    pub fn from_config(config: &ConfigLoader) -> Self {
        Self::new(config.report().clone(), config.display().colors.clone())
    }

    /// Splits `row_count` rows into per-page ranges.
    ///
    /// The first page loses the space taken by the title. An empty table
    /// still produces one page so the title and header are printed.
    pub fn paginate(&self, row_count: usize) -> Vec<Range<usize>> {
        let first_capacity = self.rows_per_page(true);
        let next_capacity = self.rows_per_page(false);

        let mut pages = Vec::new();
        let mut start = 0;
        let mut capacity = first_capacity;
        loop {
            let end = (start + capacity).min(row_count);
            pages.push(start..end);
            if end >= row_count {
                break;
            }
            start = end;
            capacity = next_capacity;
        }
        pages
    }

    fn title_block_mm(&self) -> f32 {
        self.report.title_font_size * MM_PER_PT + TITLE_GAP_MM
    }

    fn rows_per_page(&self, first_page: bool) -> usize {
        let page = &self.report.page;
        let mut available = page.height_mm - page.margin_mm * 2.0 - self.report.row_height_mm;
        if first_page {
            available -= self.title_block_mm();
        }
        ((available / self.report.row_height_mm).floor() as usize).max(1)
    }

    fn draw_row(
        &self,
        layer: &PdfLayerReference,
        cells: &[&str],
        y: f32,
        font: &IndirectFontRef,
        status_color: Option<RgbColor>,
    ) {
        let last = cells.len().saturating_sub(1);
        let mut x = self.report.page.margin_mm;
        for (index, (cell, width)) in cells.iter().zip(&self.report.column_widths_mm).enumerate() {
            let color = match status_color {
                Some(color) if index == last => color,
                _ => RgbColor { r: 0, g: 0, b: 0 },
            };
            layer.set_fill_color(fill(color));
            layer.use_text(
                fit_text(cell, *width, self.report.font_size),
                self.report.font_size,
                Mm(x),
                Mm(y),
                font,
            );
            x += width;
        }
    }
}

impl DocumentRenderer for PdfRenderer {
    fn content_type(&self) -> &'static str {
        "application/pdf"
    }

    fn render(&self, document: &ExportDocument) -> EngineResult<Vec<u8>> {
        let page = &self.report.page;
        let (doc, first_page, first_layer) = PdfDocument::new(
            document.title.as_str(),
            Mm(page.width_mm),
            Mm(page.height_mm),
            LAYER_NAME,
        );
        let regular = add_font(&doc, BuiltinFont::Helvetica)?;
        let bold = add_font(&doc, BuiltinFont::HelveticaBold)?;

        let header: Vec<&str> = document.header.iter().map(String::as_str).collect();
        let pages = self.paginate(document.lines.len());
        let top = page.height_mm - page.margin_mm;

        for (page_number, range) in pages.iter().enumerate() {
            let layer = if page_number == 0 {
                doc.get_page(first_page).get_layer(first_layer)
            } else {
                let (next_page, next_layer) =
                    doc.add_page(Mm(page.width_mm), Mm(page.height_mm), LAYER_NAME);
                doc.get_page(next_page).get_layer(next_layer)
            };

            let mut y = top;
            if page_number == 0 {
                y -= self.report.title_font_size * MM_PER_PT;
                layer.set_fill_color(fill(RgbColor { r: 0, g: 0, b: 0 }));
                layer.use_text(
                    document.title.as_str(),
                    self.report.title_font_size,
                    Mm(page.margin_mm),
                    Mm(y),
                    &bold,
                );
                y -= TITLE_GAP_MM;
            }

            y -= self.report.row_height_mm;
            self.draw_row(&layer, &header, y, &bold, None);

            for line in &document.lines[range.clone()] {
                y -= self.report.row_height_mm;
                let color = self.colors.for_accent(line.accent);
                self.draw_row(&layer, &line.row.cells(), y, &regular, Some(color));
            }
        }

        debug!(
            rows = document.lines.len(),
            pages = pages.len(),
            file_name = %document.file_name,
            "Rendered attendance PDF"
        );

        doc.save_to_bytes().map_err(|e| EngineError::RenderError {
            message: format!("failed to serialize document: {:?}", e),
        })
    }
}

fn add_font(doc: &PdfDocumentReference, font: BuiltinFont) -> EngineResult<IndirectFontRef> {
    doc.add_builtin_font(font)
        .map_err(|e| EngineError::RenderError {
            message: format!("failed to add font: {:?}", e),
        })
}

fn fill(color: RgbColor) -> Color {
    let (r, g, b) = color.to_unit();
    Color::Rgb(Rgb::new(r, g, b, None))
}

/// Shortens `text` with a trailing ellipsis so it fits `width_mm`.
fn fit_text(text: &str, width_mm: f32, font_size: f32) -> String {
    let glyph_mm = font_size * AVERAGE_GLYPH_WIDTH_EM * MM_PER_PT;
    let max_chars = ((width_mm - CELL_PADDING_MM) / glyph_mm).floor().max(0.0) as usize;

    if text.chars().count() <= max_chars {
        return text.to_string();
    }
    if max_chars <= ELLIPSIS.len() {
        return text.chars().take(max_chars).collect();
    }

    let mut fitted: String = text.chars().take(max_chars - ELLIPSIS.len()).collect();
    fitted.push_str(ELLIPSIS);
    fitted
}
