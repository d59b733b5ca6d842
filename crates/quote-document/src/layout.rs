//! # Quote Layout
//!
//! Projects a quote onto a [`DocumentBackend`] top to bottom with a running
//! Y cursor.
//!
//! ## Page structure
//! ```text
//! ┌───────────────────────────────────────┐
//! │                QUOTE                  │  y = 20
//! │ Date / Client / ... / Project         │  y = 35, +7 per line
//! │ Project description:                  │
//! │   wrapped description                 │
//! │ ACTIVITY BREAKDOWN                    │
//! │ Hourly rate: 35,00 € /hour            │
//! │ ┌──┬───────────────────┬─────┬──────┐ │
//! │ │# │ Activity          │Hours│ Cost │ │  drawn and paginated by
//! │ ├──┼───────────────────┼─────┼──────┤ │  the backend
//! │ └──┴───────────────────┴─────┴──────┘ │
//! │ Totals                                │
//! │ Footer notice                         │
//! │                         Page 1 of 1   │  stamped after layout
//! └───────────────────────────────────────┘
//! ```
//!
//! Every fixed-height line checks the bottom margin first and moves to a new
//! page when it would cross it, so the cursor only ever grows within a page.

use chrono::NaiveDate;
use quote_core::{AmountFormatter, Pricing, Quote, QuoteTotals};
use tracing::debug;

use crate::backend::{
    Column, ColumnWidth, DocumentBackend, FontStyle, HeadStyle, Rgb, Table, TextAlign,
};
use crate::error::{DocumentError, DocumentResult};

const TITLE: &str = "QUOTE";
const NOT_SPECIFIED: &str = "Not specified";
const DESCRIPTION_HEADING: &str = "Project description:";
const NO_DESCRIPTION: &str = "No description provided.";
const BREAKDOWN_HEADING: &str = "ACTIVITY BREAKDOWN";
const TABLE_HEAD: [&str; 4] = ["#", "Activity description", "Estimated hours", "Cost"];
const TOTAL_WITH_VAT: &str = "TOTAL (VAT incl.):";
const TOTAL_WITHOUT_VAT: &str = "TOTAL (excl. VAT):";
const FOOTER: [&str; 3] = [
    "This quote is valid for 30 days from the date of issue.",
    "To accept, please sign and return a copy.",
    "Payment terms: 50% at the start of work, 50% on final delivery of the project.",
];

const HEADER_FILL: Rgb = Rgb(30, 136, 229);
const STAMP_GRAY: Rgb = Rgb::gray(150);

/// Geometry of the layout, in millimetres.
#[derive(Debug, Clone, Copy, PartialEq)]
struct LayoutOptions {
    /// Left edge of every text line. Also the table's side margin.
    margin_x: f32,
    /// Where the cursor restarts on a continuation page.
    margin_top: f32,
    /// Lines never start below `page height - margin_bottom`.
    margin_bottom: f32,
    line_spacing: f32,
    title_y: f32,
    info_start_y: f32,
}

impl Default for LayoutOptions {
    fn default() -> Self {
        LayoutOptions {
            margin_x: 15.0,
            margin_top: 20.0,
            margin_bottom: 20.0,
            line_spacing: 7.0,
            title_y: 20.0,
            info_start_y: 35.0,
        }
    }
}

/// What a finished render produced.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LayoutSummary {
    pub page_count: usize,
    /// Cursor position after the footer, on the last page.
    pub final_y: f32,
}

/// Lays out one quote.
///
/// Totals are computed on construction so the document always agrees with
/// the quote it was built from.
pub struct QuoteLayout<'a, F: AmountFormatter + ?Sized> {
    quote: &'a Quote,
    pricing: &'a Pricing,
    totals: QuoteTotals,
    formatter: &'a F,
    issue_date: NaiveDate,
    options: LayoutOptions,
}

impl<'a, F: AmountFormatter + ?Sized> QuoteLayout<'a, F> {
    pub fn new(quote: &'a Quote, pricing: &'a Pricing, formatter: &'a F, issue_date: NaiveDate) -> Self {
        QuoteLayout {
            quote,
            pricing,
            totals: QuoteTotals::compute(quote, pricing),
            formatter,
            issue_date,
            options: LayoutOptions::default(),
        }
    }

    /// Draws the whole quote, then stamps page numbers on every page.
    ///
    /// Fails with [`DocumentError::EmptyQuote`] before touching the backend
    /// when there are no line items.
    pub fn render<B: DocumentBackend + ?Sized>(&self, backend: &mut B) -> DocumentResult<LayoutSummary> {
        if self.quote.is_empty() {
            return Err(DocumentError::EmptyQuote);
        }

        backend.set_text_color(Rgb::BLACK);
        self.title(backend);

        let mut pen = Pen::new(backend, &self.options);
        self.info_block(&mut pen);
        self.description(&mut pen);
        self.breakdown(&mut pen);
        self.totals_block(&mut pen);
        self.footer(&mut pen);
        let final_y = pen.y;

        let page_count = backend.page_count();
        self.stamp_pages(backend, page_count);

        debug!(
            items = self.quote.items.len(),
            pages = page_count,
            final_y,
            "Quote layout complete"
        );

        Ok(LayoutSummary {
            page_count,
            final_y,
        })
    }

    fn title<B: DocumentBackend + ?Sized>(&self, backend: &mut B) {
        let width = backend.page_size().width;
        backend.set_font(FontStyle::Bold, 20.0);
        backend.text(TITLE, width / 2.0, self.options.title_y, TextAlign::Center);
    }

    fn info_block<B: DocumentBackend + ?Sized>(&self, pen: &mut Pen<'_, B>) {
        let client = &self.quote.client;
        let project = &self.quote.project;

        pen.font(FontStyle::Normal, 12.0);
        pen.line(&format!("Date: {}", self.formatter.long_date(self.issue_date)));
        pen.line(&format!("Client: {}", or_not_specified(&client.name)));

        let optional = [
            ("Tax ID", &client.tax_id),
            ("Address", &client.address),
            ("Phone", &client.phone),
            ("Email", &client.email),
            ("PEC", &client.certified_email),
        ];
        for (label, value) in optional {
            if !value.is_empty() {
                pen.line(&format!("{label}: {value}"));
            }
        }

        pen.line(&format!("Project: {}", or_not_specified(&project.name)));
        if let Some(category) = project.category {
            pen.line(&format!("Project type: {}", category.label()));
        }
        pen.skip(0.5);
    }

    fn description<B: DocumentBackend + ?Sized>(&self, pen: &mut Pen<'_, B>) {
        pen.font(FontStyle::Bold, 12.0);
        pen.line(DESCRIPTION_HEADING);

        pen.font(FontStyle::Normal, 12.0);
        let text = if self.quote.project.description.trim().is_empty() {
            NO_DESCRIPTION
        } else {
            self.quote.project.description.as_str()
        };
        let max_width = pen.backend.page_size().width - 2.0 * self.options.margin_x;
        for line in pen.backend.split_text_to_size(text, max_width) {
            pen.line(&line);
        }
        pen.skip(1.0);
    }

    fn breakdown<B: DocumentBackend + ?Sized>(&self, pen: &mut Pen<'_, B>) {
        pen.font(FontStyle::Bold, 14.0);
        pen.line(BREAKDOWN_HEADING);

        pen.font(FontStyle::Normal, 10.0);
        pen.line(&format!(
            "Hourly rate: {} /hour",
            self.formatter.currency(self.pricing.hourly_rate())
        ));
        pen.skip(0.5);

        let table = self.items_table();
        let end_y = pen.backend.draw_table(&table, pen.y);
        // Table text colours must not leak into the totals.
        pen.backend.set_text_color(Rgb::BLACK);
        pen.y = end_y;
        pen.skip(1.5);
    }

    fn items_table(&self) -> Table {
        let rate = self.pricing.hourly_rate();
        let body = self
            .quote
            .items
            .iter()
            .enumerate()
            .map(|(index, item)| {
                vec![
                    (index + 1).to_string(),
                    item.description.clone(),
                    self.formatter.hours(item.hours),
                    self.formatter.currency(rate.for_hours(item.hours)),
                ]
            })
            .collect();

        Table {
            head: TABLE_HEAD.iter().map(|s| s.to_string()).collect(),
            body,
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
                fill: HEADER_FILL,
                text: Rgb::WHITE,
                font: FontStyle::Bold,
            },
            striped: true,
            margin_x: self.options.margin_x,
            margin_top: self.options.margin_top,
            margin_bottom: self.options.margin_bottom,
            font_size: 10.0,
        }
    }

    fn totals_block<B: DocumentBackend + ?Sized>(&self, pen: &mut Pen<'_, B>) {
        let totals = &self.totals;
        let f = self.formatter;

        pen.font(FontStyle::Normal, 12.0);
        pen.line(&format!("Total estimated hours: {}", f.hours(totals.total_hours)));
        pen.line(&format!("Taxable subtotal: {}", f.currency(totals.subtotal)));
        if self.quote.vat_applied {
            pen.line(&format!(
                "VAT ({}): {}",
                f.percent(self.pricing.vat_rate()),
                f.currency(totals.vat)
            ));
        }

        pen.font(FontStyle::Bold, 14.0);
        let label = if self.quote.vat_applied {
            TOTAL_WITH_VAT
        } else {
            TOTAL_WITHOUT_VAT
        };
        pen.line(&format!("{label} {}", f.currency(totals.grand_total)));
        pen.skip(1.0);
    }

    fn footer<B: DocumentBackend + ?Sized>(&self, pen: &mut Pen<'_, B>) {
        pen.font(FontStyle::Italic, 9.0);
        for notice in FOOTER {
            pen.line_with_spacing(notice, 0.8);
        }
    }

    fn stamp_pages<B: DocumentBackend + ?Sized>(&self, backend: &mut B, page_count: usize) {
        let size = backend.page_size();
        for page in 1..=page_count {
            backend.set_page(page);
            backend.set_font(FontStyle::Normal, 8.0);
            backend.set_text_color(STAMP_GRAY);
            backend.text(
                &format!("Page {page} of {page_count}"),
                size.width - 25.0,
                size.height - 10.0,
                TextAlign::Left,
            );
        }
    }
}

fn or_not_specified(value: &str) -> &str {
    if value.is_empty() {
        NOT_SPECIFIED
    } else {
        value
    }
}

// =============================================================================
// Cursor
// =============================================================================

/// The running Y cursor bound to a backend.
struct Pen<'b, B: DocumentBackend + ?Sized> {
    backend: &'b mut B,
    y: f32,
    x: f32,
    spacing: f32,
    top: f32,
    bottom: f32,
}

impl<'b, B: DocumentBackend + ?Sized> Pen<'b, B> {
    fn new(backend: &'b mut B, options: &LayoutOptions) -> Self {
        let height = backend.page_size().height;
        Pen {
            backend,
            y: options.info_start_y,
            x: options.margin_x,
            spacing: options.line_spacing,
            top: options.margin_top,
            bottom: height - options.margin_bottom,
        }
    }

    fn font(&mut self, style: FontStyle, size: f32) {
        self.backend.set_font(style, size);
    }

    fn line(&mut self, text: &str) {
        self.line_with_spacing(text, 1.0);
    }

    /// Draws at the cursor, then advances by `factor` line spacings.
    fn line_with_spacing(&mut self, text: &str, factor: f32) {
        if self.y > self.bottom {
            self.backend.add_page();
            self.y = self.top;
        }
        self.backend.text(text, self.x, self.y, TextAlign::Left);
        self.y += self.spacing * factor;
    }

    /// Advances by `factor` line spacings without drawing.
    fn skip(&mut self, factor: f32) {
        self.y += self.spacing * factor;
    }
}
