//! # Quote Drafts
//!
//! A JSON description of a whole quote, for batch exports.
//!
//! ```json
//! {
//!   "client": { "name": "Rossi S.r.l.", "taxId": "IT01234567890" },
//!   "project": { "name": "Sito Web", "category": "ecommerce" },
//!   "vatApplied": true,
//!   "items": [
//!     { "description": "Analisi", "hours": 2 },
//!     { "description": "Sviluppo", "hours": 3.5 }
//!   ]
//! }
//! ```
//!
//! A draft is replayed through the same [`QuoteState`] operations the
//! interactive commands use, so an item the form would reject is rejected
//! here too.

use std::path::{Path, PathBuf};

use quote_core::{
    ClientField, ClientInfo, IdGenerator, ProjectField, ProjectInfo, QuoteState, ValidationError,
};
use serde::Deserialize;
use thiserror::Error;
use tracing::debug;

#[derive(Debug, Error)]
pub enum DraftError {
    #[error("Could not read draft {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid draft JSON: {0}")]
    Parse(#[from] serde_json::Error),

    /// `row` is 1-based.
    #[error("Item {row}: {source}")]
    Item {
        row: usize,
        #[source]
        source: ValidationError,
    },
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuoteDraft {
    #[serde(default)]
    pub client: ClientInfo,
    #[serde(default)]
    pub project: ProjectInfo,
    #[serde(default = "vat_applied_default")]
    pub vat_applied: bool,
    #[serde(default)]
    pub items: Vec<DraftItem>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DraftItem {
    pub description: String,
    pub hours: f64,
}

fn vat_applied_default() -> bool {
    true
}

impl QuoteDraft {
    pub fn from_json(json: &str) -> Result<Self, DraftError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn load(path: &Path) -> Result<Self, DraftError> {
        let json = std::fs::read_to_string(path).map_err(|source| DraftError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&json)
    }

    /// Replays the draft onto `state`.
    ///
    /// Stops at the first item that fails validation; items before it stay
    /// added.
    pub fn apply<G: IdGenerator>(self, state: &mut QuoteState<G>) -> Result<(), DraftError> {
        let QuoteDraft {
            client,
            project,
            vat_applied,
            items,
        } = self;

        let client_values = [
            (ClientField::Name, client.name),
            (ClientField::TaxId, client.tax_id),
            (ClientField::Address, client.address),
            (ClientField::Phone, client.phone),
            (ClientField::Email, client.email),
            (ClientField::CertifiedEmail, client.certified_email),
        ];
        for (field, value) in client_values {
            state.set_client_field(field, value);
        }

        state.set_project_field(ProjectField::Name, project.name);
        state.set_project_field(ProjectField::Description, project.description);
        state.set_project_category(project.category);
        state.set_vat_applied(vat_applied);

        for (index, item) in items.iter().enumerate() {
            state
                .add_item(&item.description, item.hours)
                .map_err(|source| DraftError::Item {
                    row: index + 1,
                    source,
                })?;
        }

        debug!(items = items.len(), "Draft applied");
        Ok(())
    }
}
