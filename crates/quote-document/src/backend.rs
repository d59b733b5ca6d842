//! The seam between the layout engine and whatever produces the document.
//!
//! All coordinates are millimetres from the top-left corner of the page, and
//! `y` for text is the baseline. Font sizes are points.

/// Page dimensions in millimetres.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PageSize {
    pub width: f32,
    pub height: f32,
}

impl PageSize {
    pub const A4: PageSize = PageSize {
        width: 210.0,
        height: 297.0,
    };
}

/// The three faces a quote uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FontStyle {
    Normal,
    Bold,
    Italic,
}

impl FontStyle {
    pub const ALL: [FontStyle; 3] = [FontStyle::Normal, FontStyle::Bold, FontStyle::Italic];
}

/// 8-bit RGB colour.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    pub const BLACK: Rgb = Rgb(0, 0, 0);
    pub const WHITE: Rgb = Rgb(255, 255, 255);

    pub const fn gray(level: u8) -> Rgb {
        Rgb(level, level, level)
    }

    /// Components scaled to `0.0..=1.0`.
    pub fn unit(&self) -> (f32, f32, f32) {
        (
            f32::from(self.0) / 255.0,
            f32::from(self.1) / 255.0,
            f32::from(self.2) / 255.0,
        )
    }
}

/// Horizontal anchoring of a text run relative to its `x`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextAlign {
    Left,
    Center,
    Right,
}

// =============================================================================
// Tables
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ColumnWidth {
    Fixed(f32),
    /// Shares whatever the fixed columns leave.
    Auto,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Column {
    pub width: ColumnWidth,
    pub align: TextAlign,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HeadStyle {
    pub fill: Rgb,
    pub text: Rgb,
    pub font: FontStyle,
}

/// A table the backend lays out and paginates on its own.
#[derive(Debug, Clone, PartialEq)]
pub struct Table {
    pub head: Vec<String>,
    pub body: Vec<Vec<String>>,
    pub columns: Vec<Column>,
    pub head_style: HeadStyle,
    /// Alternate body rows get a light fill.
    pub striped: bool,
    /// Left and right margin, in millimetres.
    pub margin_x: f32,
    /// Where the table restarts on a continuation page, in millimetres.
    pub margin_top: f32,
    /// Rows never extend below `page height - margin_bottom`.
    pub margin_bottom: f32,
    /// Body and head font size, in points.
    pub font_size: f32,
}

// =============================================================================
// Backend
// =============================================================================

/// A paginated document the layout engine draws into.
///
/// Mirrors the small surface of a classic immediate-mode PDF library: a
/// current page, a current font and text colour, text runs, measured line
/// splitting and a self-paginating table. Pages are numbered from 1.
pub trait DocumentBackend {
    fn page_size(&self) -> PageSize;

    fn set_font(&mut self, style: FontStyle, size: f32);

    fn set_text_color(&mut self, color: Rgb);

    /// Draws `text` on the current page with the current font and colour.
    fn text(&mut self, text: &str, x: f32, y: f32, align: TextAlign);

    /// Wraps `text` into lines no wider than `max_width` in the current font.
    fn split_text_to_size(&self, text: &str, max_width: f32) -> Vec<String>;

    /// Draws `table` starting at `start_y`, adding pages as needed, and
    /// returns the Y just below the last row. The current page afterwards is
    /// the one the table ended on.
    fn draw_table(&mut self, table: &Table, start_y: f32) -> f32;

    /// Appends a blank page and makes it current.
    fn add_page(&mut self);

    fn page_count(&self) -> usize;

    /// Makes page `page` (1-based) current.
    fn set_page(&mut self, page: usize);

    /// The current page (1-based).
    fn current_page(&self) -> usize;
}
