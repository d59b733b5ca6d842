//! # PDF Backend
//!
//! [`DocumentBackend`] on top of `pdf-writer`.
//!
//! Pages keep their content streams open until [`PdfBackend::finish`], so the
//! layout can go back to any page (page stamps do). Text uses the standard
//! Helvetica faces with WinAnsi encoding; no font files are embedded.
//!
//! ## Object layout
//! ```text
//! 1  Catalog ──► 2 Pages ──► Page, Page, ...
//! 3  Helvetica          (F1)
//! 4  Helvetica-Bold     (F2)
//! 5  Helvetica-Oblique  (F3)
//! 6+ one Page and one content stream per page
//! ```

mod canvas;
mod table;
mod winansi;

use std::path::Path;

use pdf_writer::{Name, Pdf, Rect, Ref};
use tracing::{debug, warn};

use crate::backend::{DocumentBackend, FontStyle, PageSize, Rgb, Table, TextAlign};
use crate::error::DocumentResult;
use crate::metrics::{self, PT_PER_MM};

use canvas::{base_font, font_resource, PageCanvas};
use table::{MeasuredRow, CELL_PADDING};

/// Fill of every other body row.
const STRIPE_FILL: Rgb = Rgb::gray(245);
/// Body cell text.
const BODY_TEXT: Rgb = Rgb::gray(20);
/// Baseline offset of a cell's first line below the top padding, as a
/// multiple of the font size.
const ASCENT_FACTOR: f32 = 0.85;

/// An in-memory PDF document.
pub struct PdfBackend {
    page_size: PageSize,
    pages: Vec<PageCanvas>,
    current: usize,
    font: (FontStyle, f32),
    color: Rgb,
}

impl Default for PdfBackend {
    fn default() -> Self {
        PdfBackend::new()
    }
}

impl PdfBackend {
    /// An A4 document with one blank page.
    pub fn new() -> Self {
        PdfBackend::with_page_size(PageSize::A4)
    }

    pub fn with_page_size(page_size: PageSize) -> Self {
        PdfBackend {
            page_size,
            pages: vec![PageCanvas::new(page_size)],
            current: 0,
            font: (FontStyle::Normal, 12.0),
            color: Rgb::BLACK,
        }
    }

    /// Serializes every page into a PDF file.
    pub fn finish(self) -> Vec<u8> {
        let mut pdf = Pdf::new();
        let catalog_id = Ref::new(1);
        let tree_id = Ref::new(2);
        let font_ids: Vec<(FontStyle, Ref)> = FontStyle::ALL
            .iter()
            .zip(3..)
            .map(|(style, id)| (*style, Ref::new(id)))
            .collect();

        let first_page_id = 3 + font_ids.len() as i32;
        let page_ids: Vec<(Ref, Ref)> = (0..self.pages.len() as i32)
            .map(|i| {
                (
                    Ref::new(first_page_id + 2 * i),
                    Ref::new(first_page_id + 2 * i + 1),
                )
            })
            .collect();

        pdf.catalog(catalog_id).pages(tree_id);
        pdf.pages(tree_id)
            .kids(page_ids.iter().map(|(page_id, _)| *page_id))
            .count(page_ids.len() as i32);

        for (style, id) in &font_ids {
            pdf.type1_font(*id)
                .base_font(base_font(*style))
                .encoding_predefined(Name(b"WinAnsiEncoding"));
        }

        let media_box = Rect::new(
            0.0,
            0.0,
            self.page_size.width * PT_PER_MM,
            self.page_size.height * PT_PER_MM,
        );

        let page_count = self.pages.len();
        for (canvas, (page_id, content_id)) in self.pages.into_iter().zip(page_ids) {
            {
                let mut page = pdf.page(page_id);
                page.media_box(media_box).parent(tree_id).contents(content_id);
                let mut resources = page.resources();
                let mut fonts = resources.fonts();
                for (style, id) in &font_ids {
                    fonts.pair(font_resource(*style), *id);
                }
            }
            pdf.stream(content_id, &canvas.finish());
        }

        let bytes = pdf.finish();
        debug!(pages = page_count, bytes = bytes.len(), "PDF serialized");
        bytes
    }

    /// Writes the finished document to `path`.
    pub fn save(self, path: &Path) -> DocumentResult<()> {
        let bytes = self.finish();
        std::fs::write(path, bytes)?;
        debug!(path = %path.display(), "PDF written");
        Ok(())
    }

    fn page(&mut self) -> &mut PageCanvas {
        &mut self.pages[self.current]
    }

    /// Moves to the page after the current one, creating it when needed.
    fn next_page(&mut self) {
        if self.current + 1 < self.pages.len() {
            self.current += 1;
        } else {
            self.add_page();
        }
    }

    fn draw_row(
        &mut self,
        row: &MeasuredRow,
        widths: &[f32],
        aligns: &[TextAlign],
        y: f32,
        style: RowStyle,
        table: &Table,
    ) -> f32 {
        let x0 = table.margin_x;
        let total_width: f32 = widths.iter().sum();
        if let Some(fill) = style.fill {
            self.page().fill_rect(x0, y, total_width, row.height, fill);
        }

        let size = table.font_size;
        let line_height = table::line_height(size);
        let first_baseline = y + CELL_PADDING + size / PT_PER_MM * ASCENT_FACTOR;

        let mut x = x0;
        for ((lines, width), align) in row.cells.iter().zip(widths).zip(aligns) {
            let anchor = match align {
                TextAlign::Left => x + CELL_PADDING,
                TextAlign::Center => x + width / 2.0,
                TextAlign::Right => x + width - CELL_PADDING,
            };
            for (i, line) in lines.iter().enumerate() {
                let baseline = first_baseline + i as f32 * line_height;
                self.pages[self.current].text(
                    line,
                    anchor,
                    baseline,
                    *align,
                    (style.font, size),
                    style.text,
                );
            }
            x += width;
        }

        y + row.height
    }
}

#[derive(Debug, Clone, Copy)]
struct RowStyle {
    fill: Option<Rgb>,
    text: Rgb,
    font: FontStyle,
}

impl DocumentBackend for PdfBackend {
    fn page_size(&self) -> PageSize {
        self.page_size
    }

    fn set_font(&mut self, style: FontStyle, size: f32) {
        self.font = (style, size);
    }

    fn set_text_color(&mut self, color: Rgb) {
        self.color = color;
    }

    fn text(&mut self, text: &str, x: f32, y: f32, align: TextAlign) {
        let (font, color) = (self.font, self.color);
        self.page().text(text, x, y, align, font, color);
    }

    fn split_text_to_size(&self, text: &str, max_width: f32) -> Vec<String> {
        metrics::split_text_to_size(text, self.font.0, self.font.1, max_width)
    }

    fn draw_table(&mut self, table: &Table, start_y: f32) -> f32 {
        let measured = table::measure(table, self.page_size.width);
        let bottom = self.page_size.height - table.margin_bottom;
        let head_style = RowStyle {
            fill: Some(table.head_style.fill),
            text: table.head_style.text,
            font: table.head_style.font,
        };

        // The header never sits alone at the bottom of a page.
        let mut y = start_y;
        let first_row = measured.body.first().map_or(0.0, |row| row.height);
        if y + measured.head.height + first_row > bottom {
            self.next_page();
            y = table.margin_top;
        }
        y = self.draw_row(&measured.head, &measured.widths, &measured.aligns, y, head_style, table);

        for (index, row) in measured.body.iter().enumerate() {
            if y + row.height > bottom {
                self.next_page();
                y = table.margin_top;
                y = self.draw_row(&measured.head, &measured.widths, &measured.aligns, y, head_style, table);
            }
            let fill = (table.striped && index % 2 == 1).then_some(STRIPE_FILL);
            let body_style = RowStyle {
                fill,
                text: BODY_TEXT,
                font: FontStyle::Normal,
            };
            y = self.draw_row(row, &measured.widths, &measured.aligns, y, body_style, table);
        }

        debug!(
            rows = measured.body.len(),
            end_page = self.current + 1,
            end_y = y,
            "Table drawn"
        );
        y
    }

    fn add_page(&mut self) {
        self.pages.push(PageCanvas::new(self.page_size));
        self.current = self.pages.len() - 1;
    }

    fn page_count(&self) -> usize {
        self.pages.len()
    }

    fn set_page(&mut self, page: usize) {
        if (1..=self.pages.len()).contains(&page) {
            self.current = page - 1;
        } else {
            warn!(page, pages = self.pages.len(), "Ignoring switch to missing page");
        }
    }

    fn current_page(&self) -> usize {
        self.current + 1
    }
}
