//! # Session State
//!
//! Everything one run of the program works on: the quote being edited, the
//! configuration and the formatter used for display and export.

use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use quote_core::{IdGenerator, LocaleFormat, QuoteState, UuidGenerator};
use quote_document::{quote_file_name, PdfBackend, QuoteLayout};
use tracing::info;

use super::AppConfig;
use crate::error::{AppError, AppResult};

/// The quote and its surroundings for the lifetime of the process.
pub struct Session<G: IdGenerator = UuidGenerator> {
    state: QuoteState<G>,
    config: AppConfig,
    format: LocaleFormat,
}

impl Session {
    /// A fresh session with random item ids.
    pub fn new(config: AppConfig) -> AppResult<Self> {
        Session::with_ids(config, UuidGenerator)
    }
}

impl<G: IdGenerator> Session<G> {
    pub fn with_ids(config: AppConfig, ids: G) -> AppResult<Self> {
        let pricing = config.pricing()?;
        Ok(Session {
            state: QuoteState::with_ids(pricing, ids),
            config,
            format: LocaleFormat::italian_euro(),
        })
    }

    pub fn state(&self) -> &QuoteState<G> {
        &self.state
    }

    pub fn state_mut(&mut self) -> &mut QuoteState<G> {
        &mut self.state
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    pub fn format(&self) -> &LocaleFormat {
        &self.format
    }

    /// Resolves a row reference to an item id.
    ///
    /// Accepts a 1-based row number as shown by `show`, or an item id.
    pub fn resolve_row(&self, reference: &str) -> AppResult<String> {
        let reference = reference.trim();
        let items = self.state.items();

        if let Ok(row) = reference.parse::<usize>() {
            if let Some(item) = row.checked_sub(1).and_then(|index| items.get(index)) {
                return Ok(item.id.clone());
            }
        }

        match self.state.quote().item(reference) {
            Some(item) => Ok(item.id.clone()),
            None => Err(AppError::not_found("Row", reference)),
        }
    }

    /// Renders the quote and writes it as `Quote_<project>.pdf`.
    ///
    /// Writes into `dir` when given, else the configured output folder,
    /// creating it if missing. Returns the path written.
    pub fn export(&self, dir: Option<&Path>, issue_date: NaiveDate) -> AppResult<PathBuf> {
        let quote = self.state.quote();
        let mut backend = PdfBackend::new();
        let summary = QuoteLayout::new(quote, self.state.pricing(), &self.format, issue_date)
            .render(&mut backend)?;

        let dir = dir.unwrap_or(self.config.output_dir.as_path());
        std::fs::create_dir_all(dir)?;
        let path = dir.join(quote_file_name(&quote.project.name));
        backend.save(&path)?;

        info!(
            path = %path.display(),
            pages = summary.page_count,
            items = quote.items.len(),
            "Quote exported"
        );
        Ok(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorCode;
    use quote_core::{Money, ProjectField, SequentialIds, VatRate};

    fn session() -> Session<SequentialIds> {
        let config = AppConfig {
            hourly_rate: Money::from_cents(3500),
            vat_rate: VatRate::from_bps(2200),
            output_dir: std::env::temp_dir(),
        };
        Session::with_ids(config, SequentialIds::new()).unwrap()
    }

    fn issue_date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 10, 17).unwrap()
    }

    #[test]
    fn test_invalid_config_is_rejected() {
        let config = AppConfig {
            hourly_rate: Money::zero(),
            ..AppConfig::default()
        };
        let err = Session::with_ids(config, SequentialIds::new()).err().unwrap();
        assert_eq!(err.code, ErrorCode::ConfigError);
    }

    #[test]
    fn test_resolve_row_by_number_and_id() {
        let mut session = session();
        session.state_mut().add_item("Analisi", 2.0).unwrap();
        session.state_mut().add_item("Sviluppo", 3.0).unwrap();

        assert_eq!(session.resolve_row("2").unwrap(), "item-2");
        assert_eq!(session.resolve_row(" 1 ").unwrap(), "item-1");
        assert_eq!(session.resolve_row("item-2").unwrap(), "item-2");
    }

    #[test]
    fn test_resolve_row_out_of_range() {
        let mut session = session();
        session.state_mut().add_item("Analisi", 2.0).unwrap();

        for reference in ["0", "2", "item-9", ""] {
            let err = session.resolve_row(reference).unwrap_err();
            assert_eq!(err.code, ErrorCode::NotFound, "{reference:?}");
        }
    }

    #[test]
    fn test_export_empty_quote_fails_without_writing() {
        let session = session();
        let dir = std::env::temp_dir().join(format!("quote-cli-empty-{}", std::process::id()));

        let err = session.export(Some(dir.as_path()), issue_date()).unwrap_err();

        assert_eq!(err.code, ErrorCode::DocumentError);
        assert!(!dir.exists());
    }

    #[test]
    fn test_export_writes_named_pdf() {
        let mut session = session();
        session
            .state_mut()
            .set_project_field(ProjectField::Name, "Sito Web E-commerce");
        session.state_mut().add_item("Analisi", 2.0).unwrap();
        let dir = std::env::temp_dir().join(format!("quote-cli-export-{}", std::process::id()));

        let path = session.export(Some(dir.as_path()), issue_date()).unwrap();

        assert_eq!(path, dir.join("Quote_Sito_Web_Ecommerce.pdf"));
        let bytes = std::fs::read(&path).unwrap();
        assert!(bytes.starts_with(b"%PDF-"));
        std::fs::remove_dir_all(&dir).unwrap();
    }
}
