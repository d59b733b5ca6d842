//! One page's content stream, addressed in millimetres from the top-left.

use pdf_writer::{Content, Name, Str};

use super::winansi;
use crate::backend::{FontStyle, PageSize, Rgb, TextAlign};
use crate::metrics::{self, PT_PER_MM};

/// Resource name of each face in the page's font dictionary.
pub(crate) fn font_resource(style: FontStyle) -> Name<'static> {
    match style {
        FontStyle::Normal => Name(b"F1"),
        FontStyle::Bold => Name(b"F2"),
        FontStyle::Italic => Name(b"F3"),
    }
}

/// PostScript name of the standard face behind each style.
pub(crate) fn base_font(style: FontStyle) -> Name<'static> {
    match style {
        FontStyle::Normal => Name(b"Helvetica"),
        FontStyle::Bold => Name(b"Helvetica-Bold"),
        FontStyle::Italic => Name(b"Helvetica-Oblique"),
    }
}

/// A page being drawn. The stream stays open until [`PageCanvas::finish`].
pub(crate) struct PageCanvas {
    content: Content,
    page: PageSize,
}

impl PageCanvas {
    pub(crate) fn new(page: PageSize) -> Self {
        PageCanvas {
            content: Content::new(),
            page,
        }
    }

    fn x_pt(&self, x_mm: f32) -> f32 {
        x_mm * PT_PER_MM
    }

    fn y_pt(&self, y_mm: f32) -> f32 {
        (self.page.height - y_mm) * PT_PER_MM
    }

    /// Draws one line of text with its baseline at `y_mm`.
    pub(crate) fn text(
        &mut self,
        text: &str,
        x_mm: f32,
        y_mm: f32,
        align: TextAlign,
        font: (FontStyle, f32),
        color: Rgb,
    ) {
        if text.is_empty() {
            return;
        }

        let (style, size) = font;
        let width = metrics::text_width(text, style, size);
        let left = match align {
            TextAlign::Left => x_mm,
            TextAlign::Center => x_mm - width / 2.0,
            TextAlign::Right => x_mm - width,
        };

        let (r, g, b) = color.unit();
        let encoded = winansi::encode(text);
        let (x, y) = (self.x_pt(left), self.y_pt(y_mm));

        self.content.set_fill_rgb(r, g, b);
        self.content.begin_text();
        self.content.set_font(font_resource(style), size);
        self.content.next_line(x, y);
        self.content.show(Str(&encoded));
        self.content.end_text();
    }

    /// Fills a rectangle whose top-left corner is at (`x_mm`, `y_mm`).
    pub(crate) fn fill_rect(&mut self, x_mm: f32, y_mm: f32, width_mm: f32, height_mm: f32, color: Rgb) {
        let (r, g, b) = color.unit();
        self.content.set_fill_rgb(r, g, b);
        self.content.rect(
            self.x_pt(x_mm),
            self.y_pt(y_mm + height_mm),
            width_mm * PT_PER_MM,
            height_mm * PT_PER_MM,
        );
        self.content.fill_nonzero();
    }

    pub(crate) fn finish(self) -> Vec<u8> {
        self.content.finish()
    }
}
