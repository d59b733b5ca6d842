//! # quote-core: Pure Business Logic for the Quote Generator
//!
//! This crate is the **heart** of the quote generator. It owns the quote
//! state, the pricing math and input validation, as pure functions with zero
//! I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                     Quote Generator Architecture                        │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                  Session host (apps/cli)                        │   │
//! │  │    client/project fields ──► add/edit/remove items ──► export   │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ quote-core (THIS CRATE) ★                       │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │   types   │  │   money   │  │   quote   │  │ validation│  │   │
//! │  │   │ LineItem  │  │   Money   │  │QuoteState │  │   rules   │  │   │
//! │  │   │ Category  │  │  Pricing  │  │  Totals   │  │  parsing  │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO FILES • NO NETWORK • PURE FUNCTIONS              │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               quote-document (Layout Engine)                    │   │
//! │  │          paginated layout, table, totals, PDF backend           │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (LineItem, ClientInfo, ProjectCategory, etc.)
//! - [`money`] - Money type with integer arithmetic
//! - [`quote`] - The quote state manager and derived totals
//! - [`format`] - Locale formatting service (currency, hours, dates)
//! - [`ids`] - Line item id generation
//! - [`error`] - Domain error types
//! - [`validation`] - Input validation and parsing
//!
//! ## Example Usage
//!
//! ```rust
//! use quote_core::{Pricing, QuoteState};
//!
//! let mut quote = QuoteState::new(Pricing::default());
//! quote.add_item("Homepage", 2.0).unwrap();
//! quote.add_item("Checkout flow", 3.5).unwrap();
//!
//! let totals = quote.totals();
//! assert_eq!(totals.total_hours, 5.5);
//! assert_eq!(totals.grand_total, totals.subtotal + totals.vat);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod format;
pub mod ids;
pub mod money;
pub mod quote;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use error::{CoreError, CoreResult, ValidationError};
pub use format::{AmountFormatter, LocaleFormat};
pub use ids::{IdGenerator, SequentialIds, UuidGenerator};
pub use money::{Money, Pricing};
pub use quote::{Quote, QuoteState, QuoteTotals};
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Default hourly rate: €35.00.
pub const DEFAULT_HOURLY_RATE: Money = Money::from_cents(3500);

/// Default VAT rate: 22% (Italian standard rate).
pub const DEFAULT_VAT_RATE: VatRate = VatRate::from_bps(2200);
