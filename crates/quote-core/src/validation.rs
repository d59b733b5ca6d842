//! # Validation Module
//!
//! Input validation and parsing for the quote generator.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: Host input (apps/cli)                                        │
//! │  ├── Raw text from the hours field                                     │
//! │  └── parse_hours() turns text into a number or a notice                │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: QuoteState::add_item                                         │
//! │  ├── validate_description() - blank descriptions rejected              │
//! │  └── validate_hours()       - hours must be a positive number          │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 3: Totals                                                       │
//! │  └── Integer cents, so subtotal + vat == grand total                   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use quote_core::validation::{parse_hours, validate_description};
//!
//! assert_eq!(validate_description("  Homepage ").unwrap(), "Homepage");
//! assert_eq!(parse_hours("2,5").unwrap(), 2.5);
//! assert!(parse_hours("0").is_err());
//! ```

use crate::error::ValidationError;
use crate::money::Money;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Largest accepted VAT rate: 100%.
pub const MAX_VAT_RATE_BPS: u32 = 10_000;

/// Largest number of hours a single row may carry.
pub const MAX_ITEM_HOURS: f64 = 10_000.0;

// =============================================================================
// Line Item Validators
// =============================================================================

/// Validates a new line item's description.
///
/// ## Rules
/// - Must not be blank once trimmed
///
/// ## Returns
/// The trimmed description, ready to store.
pub fn validate_description(description: &str) -> ValidationResult<String> {
    let description = description.trim();

    if description.is_empty() {
        return Err(ValidationError::Required {
            field: "description".to_string(),
        });
    }

    Ok(description.to_string())
}

/// Validates a new line item's hours.
///
/// ## Rules
/// - Must be a finite number
/// - Must be strictly positive (> 0)
/// - At most [`MAX_ITEM_HOURS`]
pub fn validate_hours(hours: f64) -> ValidationResult<()> {
    if !hours.is_finite() {
        return Err(ValidationError::InvalidFormat {
            field: "hours".to_string(),
            reason: "must be a number".to_string(),
        });
    }

    if hours <= 0.0 {
        return Err(ValidationError::MustBePositive {
            field: "hours".to_string(),
        });
    }

    if hours > MAX_ITEM_HOURS {
        return Err(ValidationError::OutOfRange {
            field: "hours".to_string(),
            min: 0,
            max: MAX_ITEM_HOURS as i64,
        });
    }

    Ok(())
}

/// Parses the raw text of the hours input and applies [`validate_hours`].
///
/// Accepts `.` or `,` as the decimal separator.
pub fn parse_hours(input: &str) -> ValidationResult<f64> {
    let input = input.trim();

    if input.is_empty() {
        return Err(ValidationError::Required {
            field: "hours".to_string(),
        });
    }

    let hours: f64 = input
        .replace(',', ".")
        .parse()
        .map_err(|_| ValidationError::InvalidFormat {
            field: "hours".to_string(),
            reason: format!("'{input}' is not a number"),
        })?;

    validate_hours(hours)?;
    Ok(hours)
}

/// Normalizes hours typed into an existing row.
///
/// Edits never reject: anything negative or not a number becomes 0, and
/// anything above [`MAX_ITEM_HOURS`] (infinity included) is capped.
pub fn sanitize_edited_hours(hours: f64) -> f64 {
    if hours.is_nan() || hours < 0.0 {
        0.0
    } else {
        hours.min(MAX_ITEM_HOURS)
    }
}

// =============================================================================
// Pricing Validators
// =============================================================================

/// Validates the hourly rate.
///
/// ## Rules
/// - Must be positive (> 0)
pub fn validate_hourly_rate(rate: Money) -> ValidationResult<()> {
    if !rate.is_positive() {
        return Err(ValidationError::MustBePositive {
            field: "hourly rate".to_string(),
        });
    }

    Ok(())
}

/// Validates a VAT rate in basis points.
///
/// ## Rules
/// - Must be between 0 and 10000 (0% to 100%)
pub fn validate_vat_rate_bps(bps: u32) -> ValidationResult<()> {
    if bps > MAX_VAT_RATE_BPS {
        return Err(ValidationError::OutOfRange {
            field: "vat_rate".to_string(),
            min: 0,
            max: MAX_VAT_RATE_BPS as i64,
        });
    }

    Ok(())
}

/// Parses a decimal amount such as `35`, `35.5` or `35,50` into [`Money`].
///
/// Never goes through floating point; more than two decimals is an error.
///
/// ## Example
/// ```rust
/// use quote_core::validation::parse_money;
///
/// assert_eq!(parse_money("35,5").unwrap().cents(), 3550);
/// assert!(parse_money("35.505").is_err());
/// ```
pub fn parse_money(input: &str) -> ValidationResult<Money> {
    let input = input.trim();
    let invalid = |reason: &str| ValidationError::InvalidFormat {
        field: "amount".to_string(),
        reason: reason.to_string(),
    };

    if input.is_empty() {
        return Err(ValidationError::Required {
            field: "amount".to_string(),
        });
    }

    let (negative, unsigned) = match input.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, input),
    };

    let (major_str, minor_str) = match unsigned.split_once(['.', ',']) {
        Some((major, minor)) => (major, minor),
        None => (unsigned, ""),
    };

    if major_str.is_empty() || !major_str.chars().all(|c| c.is_ascii_digit()) {
        return Err(invalid("expected digits before the decimal separator"));
    }
    if minor_str.len() > 2 || !minor_str.chars().all(|c| c.is_ascii_digit()) {
        return Err(invalid("at most two decimal digits are allowed"));
    }

    let major: i64 = major_str.parse().map_err(|_| invalid("amount is too large"))?;
    let minor: i64 = match minor_str.len() {
        0 => 0,
        1 => minor_str.parse::<i64>().map_err(|_| invalid("bad decimals"))? * 10,
        _ => minor_str.parse().map_err(|_| invalid("bad decimals"))?,
    };

    let cents = major
        .checked_mul(100)
        .and_then(|c| c.checked_add(minor))
        .ok_or_else(|| invalid("amount is too large"))?;

    Ok(Money::from_cents(if negative { -cents } else { cents }))
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_description() {
        assert_eq!(validate_description("Homepage").unwrap(), "Homepage");
        assert_eq!(validate_description("  SEO audit \n").unwrap(), "SEO audit");

        assert!(validate_description("").is_err());
        assert!(validate_description("   ").is_err());
        assert!(validate_description("\t\n").is_err());
    }

    #[test]
    fn test_validate_hours() {
        assert!(validate_hours(0.5).is_ok());
        assert!(validate_hours(120.0).is_ok());

        assert_eq!(
            validate_hours(0.0),
            Err(ValidationError::MustBePositive {
                field: "hours".to_string()
            })
        );
        assert!(validate_hours(-1.0).is_err());
        assert!(validate_hours(f64::NAN).is_err());
        assert!(validate_hours(f64::INFINITY).is_err());

        assert!(validate_hours(MAX_ITEM_HOURS).is_ok());
        assert_eq!(
            validate_hours(1e16),
            Err(ValidationError::OutOfRange {
                field: "hours".to_string(),
                min: 0,
                max: 10_000
            })
        );
    }

    #[test]
    fn test_parse_hours() {
        assert_eq!(parse_hours("10").unwrap(), 10.0);
        assert_eq!(parse_hours(" 2.5 ").unwrap(), 2.5);
        assert_eq!(parse_hours("2,5").unwrap(), 2.5);

        assert!(matches!(parse_hours(""), Err(ValidationError::Required { .. })));
        assert!(matches!(
            parse_hours("ten"),
            Err(ValidationError::InvalidFormat { .. })
        ));
        assert!(matches!(
            parse_hours("-3"),
            Err(ValidationError::MustBePositive { .. })
        ));
    }

    #[test]
    fn test_sanitize_edited_hours() {
        assert_eq!(sanitize_edited_hours(4.0), 4.0);
        assert_eq!(sanitize_edited_hours(0.0), 0.0);
        assert_eq!(sanitize_edited_hours(-2.0), 0.0);
        assert_eq!(sanitize_edited_hours(f64::NAN), 0.0);
        assert_eq!(sanitize_edited_hours(f64::INFINITY), MAX_ITEM_HOURS);
        assert_eq!(sanitize_edited_hours(1e16), MAX_ITEM_HOURS);
    }

    #[test]
    fn test_validate_hourly_rate() {
        assert!(validate_hourly_rate(Money::from_cents(3500)).is_ok());
        assert!(validate_hourly_rate(Money::zero()).is_err());
        assert!(validate_hourly_rate(Money::from_cents(-1)).is_err());
    }

    #[test]
    fn test_validate_vat_rate_bps() {
        assert!(validate_vat_rate_bps(0).is_ok());
        assert!(validate_vat_rate_bps(2200).is_ok());
        assert!(validate_vat_rate_bps(10000).is_ok());
        assert!(validate_vat_rate_bps(10001).is_err());
    }

    #[test]
    fn test_parse_money() {
        assert_eq!(parse_money("35").unwrap().cents(), 3500);
        assert_eq!(parse_money("35.5").unwrap().cents(), 3550);
        assert_eq!(parse_money("35,05").unwrap().cents(), 3505);
        assert_eq!(parse_money("-1.25").unwrap().cents(), -125);

        assert!(parse_money("").is_err());
        assert!(parse_money(".50").is_err());
        assert!(parse_money("1.234").is_err());
        assert!(parse_money("12a").is_err());
    }
}
