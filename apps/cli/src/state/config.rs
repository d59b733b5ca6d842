//! # Configuration
//!
//! Settings loaded once at startup.
//!
//! ## Configuration Sources (Priority Order)
//! 1. Command-line flags (`--output-dir`)
//! 2. Environment variables (`QUOTE_*`)
//! 3. Defaults (this file)

use std::path::PathBuf;

use directories::UserDirs;
use quote_core::validation::{parse_money, validate_vat_rate_bps};
use quote_core::{Money, Pricing, VatRate, DEFAULT_HOURLY_RATE, DEFAULT_VAT_RATE};
use serde::Serialize;

use crate::error::{AppError, AppResult};

/// Host configuration.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AppConfig {
    /// Rate billed per hour of work
    pub hourly_rate: Money,

    /// VAT rate used when VAT is applied
    pub vat_rate: VatRate,

    /// Folder PDFs are written to
    pub output_dir: PathBuf,
}

impl Default for AppConfig {
    /// €35.00/hour, 22% VAT, the user's download folder.
    fn default() -> Self {
        AppConfig {
            hourly_rate: DEFAULT_HOURLY_RATE,
            vat_rate: DEFAULT_VAT_RATE,
            output_dir: default_output_dir(),
        }
    }
}

impl AppConfig {
    /// Creates the configuration from environment variables and defaults.
    ///
    /// ## Environment Variables
    /// - `QUOTE_HOURLY_RATE`: hourly rate, e.g. "35.00" or "35,00"
    /// - `QUOTE_VAT_RATE`: VAT percentage, e.g. "22"
    /// - `QUOTE_OUTPUT_DIR`: folder PDFs are written to
    pub fn from_env() -> AppResult<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`AppConfig::from_env`] with an injectable variable source.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> AppResult<Self> {
        let mut config = AppConfig::default();

        if let Some(rate) = lookup("QUOTE_HOURLY_RATE") {
            config.hourly_rate = parse_money(&rate)
                .map_err(|e| AppError::config(format!("QUOTE_HOURLY_RATE: {e}")))?;
        }

        if let Some(vat) = lookup("QUOTE_VAT_RATE") {
            config.vat_rate = parse_vat_percentage(&vat)
                .map_err(|e| AppError::config(format!("QUOTE_VAT_RATE: {}", e.message)))?;
        }

        if let Some(dir) = lookup("QUOTE_OUTPUT_DIR") {
            if !dir.trim().is_empty() {
                config.output_dir = PathBuf::from(dir);
            }
        }

        Ok(config)
    }

    /// The validated pricing for a new quote.
    pub fn pricing(&self) -> AppResult<Pricing> {
        Ok(Pricing::new(self.hourly_rate, self.vat_rate)?)
    }
}

/// Parses a percentage such as `22` or `4,5` into a [`VatRate`].
fn parse_vat_percentage(input: &str) -> AppResult<VatRate> {
    // Two-decimal percentages are exactly basis points.
    let bps = parse_money(input)?.cents();
    let bps = u32::try_from(bps)
        .map_err(|_| AppError::validation(format!("'{}' is not a valid percentage", input.trim())))?;
    validate_vat_rate_bps(bps)?;
    Ok(VatRate::from_bps(bps))
}

/// The user's download folder, or the working directory when there is none.
fn default_output_dir() -> PathBuf {
    UserDirs::new()
        .and_then(|dirs| dirs.download_dir().map(|dir| dir.to_path_buf()))
        .unwrap_or_else(|| PathBuf::from("."))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorCode;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = AppConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config.hourly_rate, Money::from_cents(3500));
        assert_eq!(config.vat_rate, VatRate::from_bps(2200));
    }

    #[test]
    fn test_env_overrides() {
        let config = AppConfig::from_lookup(lookup(&[
            ("QUOTE_HOURLY_RATE", "40,50"),
            ("QUOTE_VAT_RATE", "10"),
            ("QUOTE_OUTPUT_DIR", "/tmp/quotes"),
        ]))
        .unwrap();

        assert_eq!(config.hourly_rate, Money::from_cents(4050));
        assert_eq!(config.vat_rate, VatRate::from_bps(1000));
        assert_eq!(config.output_dir, PathBuf::from("/tmp/quotes"));
    }

    #[test]
    fn test_fractional_vat() {
        let config = AppConfig::from_lookup(lookup(&[("QUOTE_VAT_RATE", "4.5")])).unwrap();
        assert_eq!(config.vat_rate.bps(), 450);
    }

    #[test]
    fn test_bad_values_are_config_errors() {
        for vars in [
            [("QUOTE_HOURLY_RATE", "lots")],
            [("QUOTE_VAT_RATE", "150")],
            [("QUOTE_VAT_RATE", "-5")],
        ] {
            let err = AppConfig::from_lookup(lookup(&vars)).unwrap_err();
            assert_eq!(err.code, ErrorCode::ConfigError, "{vars:?}");
        }
    }

    #[test]
    fn test_zero_rate_fails_pricing() {
        let config = AppConfig::from_lookup(lookup(&[("QUOTE_HOURLY_RATE", "0")])).unwrap();
        let err = config.pricing().unwrap_err();
        assert_eq!(err.code, ErrorCode::ConfigError);
    }

    #[test]
    fn test_blank_output_dir_keeps_default() {
        let config = AppConfig::from_lookup(lookup(&[("QUOTE_OUTPUT_DIR", "  ")])).unwrap();
        assert_eq!(config.output_dir, default_output_dir());
    }
}
