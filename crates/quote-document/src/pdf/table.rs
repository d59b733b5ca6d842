//! Table geometry: column widths, wrapped cells and row heights.
//!
//! Drawing and pagination live in the backend; this module only measures.

use crate::backend::{Column, ColumnWidth, FontStyle, Table, TextAlign};
use crate::metrics::{self, PT_PER_MM};

/// Inner padding on every side of a cell, in millimetres (5pt).
pub(crate) const CELL_PADDING: f32 = 5.0 / PT_PER_MM;

/// Line height as a multiple of the font size.
pub(crate) const LINE_HEIGHT_FACTOR: f32 = 1.15;

/// Auto columns never shrink below this.
const MIN_AUTO_WIDTH: f32 = 10.0;

const DEFAULT_COLUMN: Column = Column {
    width: ColumnWidth::Auto,
    align: TextAlign::Left,
};

/// A row with its cells already wrapped to their column.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct MeasuredRow {
    pub cells: Vec<Vec<String>>,
    pub height: f32,
}

#[derive(Debug, Clone, PartialEq)]
pub(crate) struct MeasuredTable {
    pub widths: Vec<f32>,
    pub aligns: Vec<TextAlign>,
    pub head: MeasuredRow,
    pub body: Vec<MeasuredRow>,
}

pub(crate) fn line_height(font_size: f32) -> f32 {
    font_size / PT_PER_MM * LINE_HEIGHT_FACTOR
}

/// Measures `table` for a page `page_width` millimetres wide.
pub(crate) fn measure(table: &Table, page_width: f32) -> MeasuredTable {
    let column_count = table
        .body
        .iter()
        .map(Vec::len)
        .chain(std::iter::once(table.head.len()))
        .max()
        .unwrap_or(0);
    let columns: Vec<Column> = (0..column_count)
        .map(|i| table.columns.get(i).copied().unwrap_or(DEFAULT_COLUMN))
        .collect();

    let available = page_width - 2.0 * table.margin_x;
    let widths = column_widths(&columns, available);
    let line_height = line_height(table.font_size);

    let measure_row = |cells: &[String], style: FontStyle| {
        let wrapped: Vec<Vec<String>> = widths
            .iter()
            .enumerate()
            .map(|(i, width)| {
                let text = cells.get(i).map(String::as_str).unwrap_or("");
                let inner = (width - 2.0 * CELL_PADDING).max(1.0);
                metrics::split_text_to_size(text, style, table.font_size, inner)
            })
            .collect();
        let lines = wrapped.iter().map(Vec::len).max().unwrap_or(1).max(1);
        MeasuredRow {
            cells: wrapped,
            height: lines as f32 * line_height + 2.0 * CELL_PADDING,
        }
    };

    MeasuredTable {
        head: measure_row(&table.head, table.head_style.font),
        body: table
            .body
            .iter()
            .map(|row| measure_row(row, FontStyle::Normal))
            .collect(),
        aligns: columns.iter().map(|c| c.align).collect(),
        widths,
    }
}

/// Fixed columns keep their width; auto columns split the rest evenly.
fn column_widths(columns: &[Column], available: f32) -> Vec<f32> {
    let fixed: f32 = columns
        .iter()
        .filter_map(|c| match c.width {
            ColumnWidth::Fixed(w) => Some(w),
            ColumnWidth::Auto => None,
        })
        .sum();
    let auto_count = columns
        .iter()
        .filter(|c| c.width == ColumnWidth::Auto)
        .count();
    let auto_width = if auto_count == 0 {
        0.0
    } else {
        ((available - fixed) / auto_count as f32).max(MIN_AUTO_WIDTH)
    };

    columns
        .iter()
        .map(|c| match c.width {
            ColumnWidth::Fixed(w) => w,
            ColumnWidth::Auto => auto_width,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::{HeadStyle, Rgb};

    fn table(body: Vec<Vec<&str>>) -> Table {
        Table {
            head: vec!["#".into(), "Activity".into(), "Hours".into(), "Cost".into()],
            body: body
                .into_iter()
                .map(|row| row.into_iter().map(String::from).collect())
                .collect(),
            columns: vec![
                Column {
                    width: ColumnWidth::Fixed(15.0),
                    align: TextAlign::Center,
                },
                Column {
                    width: ColumnWidth::Auto,
                    align: TextAlign::Left,
                },
                Column {
                    width: ColumnWidth::Fixed(25.0),
                    align: TextAlign::Right,
                },
                Column {
                    width: ColumnWidth::Fixed(30.0),
                    align: TextAlign::Right,
                },
            ],
            head_style: HeadStyle {
                fill: Rgb(30, 136, 229),
                text: Rgb::WHITE,
                font: FontStyle::Bold,
            },
            striped: true,
            margin_x: 15.0,
            margin_top: 20.0,
            margin_bottom: 20.0,
            font_size: 10.0,
        }
    }

    #[test]
    fn test_auto_column_takes_the_rest() {
        let measured = measure(&table(vec![vec!["1", "Design", "2.0h", "70,00 €"]]), 210.0);
        assert_eq!(measured.widths, vec![15.0, 110.0, 25.0, 30.0]);
        assert_eq!(
            measured.aligns,
            vec![TextAlign::Center, TextAlign::Left, TextAlign::Right, TextAlign::Right]
        );
    }

    #[test]
    fn test_single_line_row_height() {
        let measured = measure(&table(vec![vec!["1", "Design", "2.0h", "70,00 €"]]), 210.0);
        let expected = line_height(10.0) + 2.0 * CELL_PADDING;
        assert!((measured.body[0].height - expected).abs() < 1e-4);
        assert!((measured.head.height - expected).abs() < 1e-4);
    }

    #[test]
    fn test_long_description_wraps_and_grows_the_row() {
        let long = "Implementation of the product catalogue with filters and search ".repeat(4);
        let measured = measure(&table(vec![vec!["1", &long, "12.0h", "420,00 €"]]), 210.0);

        let lines = measured.body[0].cells[1].len();
        assert!(lines > 1);
        let expected = lines as f32 * line_height(10.0) + 2.0 * CELL_PADDING;
        assert!((measured.body[0].height - expected).abs() < 1e-4);
    }

    #[test]
    fn test_missing_cells_are_blank() {
        let measured = measure(&table(vec![vec!["1"]]), 210.0);
        assert_eq!(measured.body[0].cells.len(), 4);
        assert_eq!(measured.body[0].cells[3], vec![String::new()]);
    }

    #[test]
    fn test_auto_width_has_a_floor() {
        let widths = column_widths(
            &[
                Column {
                    width: ColumnWidth::Fixed(200.0),
                    align: TextAlign::Left,
                },
                DEFAULT_COLUMN,
            ],
            180.0,
        );
        assert_eq!(widths, vec![200.0, MIN_AUTO_WIDTH]);
    }
}
