//! # Domain Types
//!
//! Core domain types used throughout the quote generator.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │   ClientInfo    │   │   ProjectInfo   │   │    LineItem     │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  name           │   │  name           │   │  id (stable)    │       │
//! │  │  tax_id         │   │  category       │   │  description    │       │
//! │  │  address, phone │   │  description    │   │  hours (f64)    │       │
//! │  │  email, pec     │   └─────────────────┘   └─────────────────┘       │
//! │  └─────────────────┘                                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌──────────────────────────────────────┐        │
//! │  │    VatRate      │   │   ProjectCategory (fixed, 11 kinds)  │        │
//! │  │  bps (u32)      │   │   WordPress … SEO & Marketing, Other │        │
//! │  │  2200 = 22%     │   └──────────────────────────────────────┘        │
//! │  └─────────────────┘                                                    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use ts_rs::TS;

use crate::error::ValidationError;

// =============================================================================
// VAT Rate
// =============================================================================

/// VAT rate represented in basis points (bps).
///
/// ## Why Basis Points?
/// 1 basis point = 0.01% = 1/10000
/// 2200 bps = 22% (Italian standard VAT)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct VatRate(u32);

impl VatRate {
    /// Creates a VAT rate from basis points.
    #[inline]
    pub const fn from_bps(bps: u32) -> Self {
        VatRate(bps)
    }

    /// Returns the rate in basis points.
    #[inline]
    pub const fn bps(&self) -> u32 {
        self.0
    }

    /// Returns the rate as a percentage (for display only).
    #[inline]
    pub fn percentage(&self) -> f64 {
        self.0 as f64 / 100.0
    }
}

// =============================================================================
// Project Category
// =============================================================================

/// The kind of work a quote is for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum ProjectCategory {
    WordpressPageBuilder,
    WordpressCustom,
    FrontendDev,
    BackendDev,
    FullstackDev,
    Ecommerce,
    MobileApp,
    Consulting,
    DesignUiUx,
    SeoMarketing,
    Other,
}

impl ProjectCategory {
    /// Every category, in the order the form lists them.
    pub const ALL: [ProjectCategory; 11] = [
        ProjectCategory::WordpressPageBuilder,
        ProjectCategory::WordpressCustom,
        ProjectCategory::FrontendDev,
        ProjectCategory::BackendDev,
        ProjectCategory::FullstackDev,
        ProjectCategory::Ecommerce,
        ProjectCategory::MobileApp,
        ProjectCategory::Consulting,
        ProjectCategory::DesignUiUx,
        ProjectCategory::SeoMarketing,
        ProjectCategory::Other,
    ];

    /// Stable machine key (matches the serde representation).
    pub const fn key(&self) -> &'static str {
        match self {
            ProjectCategory::WordpressPageBuilder => "wordpress_page_builder",
            ProjectCategory::WordpressCustom => "wordpress_custom",
            ProjectCategory::FrontendDev => "frontend_dev",
            ProjectCategory::BackendDev => "backend_dev",
            ProjectCategory::FullstackDev => "fullstack_dev",
            ProjectCategory::Ecommerce => "ecommerce",
            ProjectCategory::MobileApp => "mobile_app",
            ProjectCategory::Consulting => "consulting",
            ProjectCategory::DesignUiUx => "design_ui_ux",
            ProjectCategory::SeoMarketing => "seo_marketing",
            ProjectCategory::Other => "other",
        }
    }

    /// Human-readable label printed on the quote.
    pub const fn label(&self) -> &'static str {
        match self {
            ProjectCategory::WordpressPageBuilder => "WordPress (Page Builder)",
            ProjectCategory::WordpressCustom => "WordPress (Custom Development)",
            ProjectCategory::FrontendDev => "Frontend Development",
            ProjectCategory::BackendDev => "Backend Development",
            ProjectCategory::FullstackDev => "Full-stack Development",
            ProjectCategory::Ecommerce => "E-commerce",
            ProjectCategory::MobileApp => "Mobile App",
            ProjectCategory::Consulting => "IT/Strategy Consulting",
            ProjectCategory::DesignUiUx => "UI/UX Design",
            ProjectCategory::SeoMarketing => "SEO & Digital Marketing",
            ProjectCategory::Other => "Other (Specify)",
        }
    }
}

impl fmt::Display for ProjectCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Parses a category key; `-` is accepted in place of `_`.
impl FromStr for ProjectCategory {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim().to_ascii_lowercase().replace('-', "_");
        ProjectCategory::ALL
            .into_iter()
            .find(|c| c.key() == key)
            .ok_or_else(|| ValidationError::NotAllowed {
                field: "category".to_string(),
                allowed: ProjectCategory::ALL
                    .iter()
                    .map(|c| c.key().to_string())
                    .collect(),
            })
    }
}

// =============================================================================
// Client & Project
// =============================================================================

/// Who the quote is addressed to. Every field may be empty.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase", default)]
#[ts(export)]
pub struct ClientInfo {
    pub name: String,
    /// VAT number or fiscal code.
    pub tax_id: String,
    pub address: String,
    pub phone: String,
    pub email: String,
    /// Certified (PEC) email, the secondary address.
    pub certified_email: String,
}

/// Selects one [`ClientInfo`] field for `QuoteState::set_client_field`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClientField {
    Name,
    TaxId,
    Address,
    Phone,
    Email,
    CertifiedEmail,
}

impl ClientField {
    pub const ALL: [ClientField; 6] = [
        ClientField::Name,
        ClientField::TaxId,
        ClientField::Address,
        ClientField::Phone,
        ClientField::Email,
        ClientField::CertifiedEmail,
    ];

    pub const fn key(&self) -> &'static str {
        match self {
            ClientField::Name => "name",
            ClientField::TaxId => "tax-id",
            ClientField::Address => "address",
            ClientField::Phone => "phone",
            ClientField::Email => "email",
            ClientField::CertifiedEmail => "pec",
        }
    }
}

impl FromStr for ClientField {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim().to_ascii_lowercase().replace('_', "-");
        ClientField::ALL
            .into_iter()
            .find(|f| f.key() == key)
            .ok_or_else(|| ValidationError::NotAllowed {
                field: "client field".to_string(),
                allowed: ClientField::ALL.iter().map(|f| f.key().to_string()).collect(),
            })
    }
}

impl ClientInfo {
    /// Mutable access to the field a [`ClientField`] names.
    pub fn field_mut(&mut self, field: ClientField) -> &mut String {
        match field {
            ClientField::Name => &mut self.name,
            ClientField::TaxId => &mut self.tax_id,
            ClientField::Address => &mut self.address,
            ClientField::Phone => &mut self.phone,
            ClientField::Email => &mut self.email,
            ClientField::CertifiedEmail => &mut self.certified_email,
        }
    }
}

/// What the quote is for.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase", default)]
#[ts(export)]
pub struct ProjectInfo {
    pub name: String,
    /// `None` until the user picks one.
    pub category: Option<ProjectCategory>,
    pub description: String,
}

/// Selects a free-text [`ProjectInfo`] field.
///
/// The category is not free text; it is set through
/// `QuoteState::set_project_category`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProjectField {
    Name,
    Description,
}

impl FromStr for ProjectField {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "name" => Ok(ProjectField::Name),
            "description" | "desc" => Ok(ProjectField::Description),
            _ => Err(ValidationError::NotAllowed {
                field: "project field".to_string(),
                allowed: vec!["name".to_string(), "description".to_string()],
            }),
        }
    }
}

// =============================================================================
// Line Item
// =============================================================================

/// A single billable task with its estimated hours.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct LineItem {
    /// Unique, stable identifier assigned on add.
    pub id: String,
    pub description: String,
    /// Estimated hours, never negative.
    pub hours: f64,
}

/// A partial edit of a [`LineItem`]; `None` fields are left untouched.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase", default)]
#[ts(export)]
pub struct LineItemPatch {
    pub description: Option<String>,
    pub hours: Option<f64>,
}

impl LineItemPatch {
    pub fn description(description: impl Into<String>) -> Self {
        LineItemPatch {
            description: Some(description.into()),
            hours: None,
        }
    }

    pub fn hours(hours: f64) -> Self {
        LineItemPatch {
            description: None,
            hours: Some(hours),
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
