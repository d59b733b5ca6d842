//! # Quote State
//!
//! The single, session-long quote being edited, and the totals derived from it.
//!
//! ## Quote Operations Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Quote State Operations                               │
//! │                                                                         │
//! │  User Action              Operation                State Change         │
//! │  ───────────              ─────────                ────────────         │
//! │                                                                         │
//! │  Click "Add" ────────────► add_item() ───────────► items.push(item)    │
//! │                            (validated)                                  │
//! │                                                                         │
//! │  Edit row ───────────────► update_item() ────────► items[id] = patch   │
//! │                                                                         │
//! │  Click delete ───────────► remove_item() ────────► items.retain(≠ id)  │
//! │                                                                         │
//! │  Type in a field ────────► set_client_field() ───► client.<field> = v  │
//! │                            set_project_field()                          │
//! │                            set_vat_applied()                            │
//! │                                                                         │
//! │  Summary / export ───────► totals() ─────────────► (read only)         │
//! │                                                                         │
//! │  NOTE: Only add_item can fail. Unknown ids are silently ignored.       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::ValidationError;
use crate::ids::{IdGenerator, UuidGenerator};
use crate::money::{Money, Pricing};
use crate::types::{
    ClientField, ClientInfo, LineItem, LineItemPatch, ProjectCategory, ProjectField, ProjectInfo,
};
use crate::validation::{sanitize_edited_hours, validate_description, validate_hours};

// =============================================================================
// Quote (data)
// =============================================================================

/// Everything the user has entered. This is what gets rendered.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct Quote {
    pub client: ClientInfo,
    pub project: ProjectInfo,
    /// Whether VAT is added on top of the subtotal. On by default.
    pub vat_applied: bool,
    /// Line items in insertion order.
    pub items: Vec<LineItem>,
}

impl Default for Quote {
    fn default() -> Self {
        Quote {
            client: ClientInfo::default(),
            project: ProjectInfo::default(),
            vat_applied: true,
            items: Vec::new(),
        }
    }
}

impl Quote {
    /// Looks up an item by id.
    pub fn item(&self, id: &str) -> Option<&LineItem> {
        self.items.iter().find(|item| item.id == id)
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

// =============================================================================
// Totals
// =============================================================================

/// Totals derived from the items and pricing. Never stored, always recomputed.
///
/// ## Invariants
/// - `total_hours` is the sum of item hours
/// - `subtotal` is `total_hours × hourly rate`
/// - `vat` is zero when VAT is not applied
/// - `grand_total == subtotal + vat`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct QuoteTotals {
    pub total_hours: f64,
    pub subtotal: Money,
    pub vat: Money,
    pub grand_total: Money,
}

impl QuoteTotals {
    /// Computes the totals of `quote` under `pricing`.
    pub fn compute(quote: &Quote, pricing: &Pricing) -> Self {
        let total_hours: f64 = quote.items.iter().map(|item| item.hours).sum();
        let subtotal = pricing.hourly_rate().for_hours(total_hours);
        let vat = if quote.vat_applied {
            subtotal.calculate_vat(pricing.vat_rate())
        } else {
            Money::zero()
        };

        QuoteTotals {
            total_hours,
            subtotal,
            vat,
            grand_total: subtotal + vat,
        }
    }
}

// =============================================================================
// Quote State Manager
// =============================================================================

/// Owns the quote for the lifetime of a session.
///
/// `G` supplies line item ids; UUID v4 unless told otherwise.
#[derive(Debug, Clone)]
pub struct QuoteState<G: IdGenerator = UuidGenerator> {
    quote: Quote,
    pricing: Pricing,
    ids: G,
}

impl QuoteState {
    /// Creates an empty quote with UUID item ids.
    pub fn new(pricing: Pricing) -> Self {
        QuoteState::with_ids(pricing, UuidGenerator)
    }
}

impl<G: IdGenerator> QuoteState<G> {
    /// Creates an empty quote drawing item ids from `ids`.
    pub fn with_ids(pricing: Pricing, ids: G) -> Self {
        QuoteState {
            quote: Quote::default(),
            pricing,
            ids,
        }
    }

    /// Read-only view of the quote data.
    pub fn quote(&self) -> &Quote {
        &self.quote
    }

    pub fn pricing(&self) -> &Pricing {
        &self.pricing
    }

    pub fn items(&self) -> &[LineItem] {
        &self.quote.items
    }

    /// Recomputes the totals from the current items.
    pub fn totals(&self) -> QuoteTotals {
        QuoteTotals::compute(&self.quote, &self.pricing)
    }

    /// Cost of a single item at the hourly rate.
    pub fn line_cost(&self, item: &LineItem) -> Money {
        self.pricing.hourly_rate().for_hours(item.hours)
    }

    // -------------------------------------------------------------------------
    // Line items
    // -------------------------------------------------------------------------

    /// Appends a new line item.
    ///
    /// ## Behavior
    /// - Description is trimmed before it is stored
    /// - Blank description, or hours that are not a positive number, are
    ///   rejected and the collection is left untouched
    /// - A fresh id is assigned on success
    pub fn add_item(&mut self, description: &str, hours: f64) -> Result<&LineItem, ValidationError> {
        let description = validate_description(description)?;
        validate_hours(hours)?;

        let id = self.ids.next_id();
        self.quote.items.push(LineItem {
            id,
            description,
            hours,
        });

        let last = self.quote.items.len() - 1;
        Ok(&self.quote.items[last])
    }

    /// Applies `patch` to the item with `id`.
    ///
    /// ## Behavior
    /// - Unknown id: no-op, returns `false`
    /// - Description is stored as given
    /// - Hours that are negative or not a number become 0
    pub fn update_item(&mut self, id: &str, patch: LineItemPatch) -> bool {
        let Some(item) = self.quote.items.iter_mut().find(|item| item.id == id) else {
            return false;
        };

        if let Some(description) = patch.description {
            item.description = description;
        }
        if let Some(hours) = patch.hours {
            item.hours = sanitize_edited_hours(hours);
        }
        true
    }

    /// Removes the item with `id`. Unknown id: no-op, returns `false`.
    pub fn remove_item(&mut self, id: &str) -> bool {
        let initial_len = self.quote.items.len();
        self.quote.items.retain(|item| item.id != id);
        self.quote.items.len() != initial_len
    }

    // -------------------------------------------------------------------------
    // Client / project / VAT
    // -------------------------------------------------------------------------

    pub fn set_client_field(&mut self, field: ClientField, value: impl Into<String>) {
        *self.quote.client.field_mut(field) = value.into();
    }

    pub fn set_project_field(&mut self, field: ProjectField, value: impl Into<String>) {
        let value = value.into();
        match field {
            ProjectField::Name => self.quote.project.name = value,
            ProjectField::Description => self.quote.project.description = value,
        }
    }

    pub fn set_project_category(&mut self, category: Option<ProjectCategory>) {
        self.quote.project.category = category;
    }

    pub fn set_vat_applied(&mut self, applied: bool) {
        self.quote.vat_applied = applied;
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
