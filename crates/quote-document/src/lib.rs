//! # quote-document: Document Layout Engine
//!
//! Turns a finished [`quote_core::Quote`] into a paginated document.
//!
//! ## Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                                                                         │
//! │  Quote + Pricing + Totals                                               │
//! │        │                                                                │
//! │        ▼                                                                │
//! │  QuoteLayout::render()  ── title, info lines, description, table,       │
//! │        │                   totals, footer notice, page stamps           │
//! │        │ layout instructions                                            │
//! │        ▼                                                                │
//! │  dyn DocumentBackend    ── measures text, draws the table, owns pages   │
//! │        │                                                                │
//! │        ▼                                                                │
//! │  PdfBackend::finish()   ── PDF bytes, written as Quote_<name>.pdf       │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`backend`] - The `DocumentBackend` trait and drawing types
//! - [`layout`] - The layout engine (Y cursor, pagination, stamps)
//! - [`metrics`] - Helvetica widths and line wrapping
//! - [`pdf`] - `pdf-writer` implementation of the backend
//! - [`filename`] - Output file naming

pub mod backend;
pub mod error;
pub mod filename;
pub mod layout;
pub mod metrics;
pub mod pdf;

pub use backend::{
    Column, ColumnWidth, DocumentBackend, FontStyle, HeadStyle, PageSize, Rgb, Table, TextAlign,
};
pub use error::{DocumentError, DocumentResult};
pub use filename::{quote_file_name, sanitize_project_name};
pub use layout::{LayoutSummary, QuoteLayout};
pub use pdf::PdfBackend;
