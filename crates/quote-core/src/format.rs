//! # Formatting Service
//!
//! Turns amounts, hours and dates into the strings printed on a quote.
//!
//! The layout engine only sees the [`AmountFormatter`] trait, so the locale
//! is a deployment decision. One locale ships: Italian formatting of euro
//! amounts (`1.234,56 €`), which is the single locale the tool supports.

use chrono::{Datelike, NaiveDate};

use crate::money::Money;
use crate::types::VatRate;

/// Locale-aware rendering of quote values.
pub trait AmountFormatter {
    /// Currency amount, e.g. `1.234,56 €`.
    fn currency(&self, amount: Money) -> String;

    /// Long date, e.g. `17 ottobre 2026`.
    fn long_date(&self, date: NaiveDate) -> String;

    /// Hours with one decimal and an `h` suffix, e.g. `5.5h`.
    ///
    /// Exact ties round away from zero (`0.25` → `0.3h`).
    fn hours(&self, hours: f64) -> String {
        format!("{:.1}h", round_ties_away(hours))
    }

    /// VAT percentage without decimals, e.g. `22%`.
    fn percent(&self, rate: VatRate) -> String {
        format!("{:.0}%", rate.percentage())
    }
}

/// `{:.1}` rounds exact ties to even. Only quarters (`x.25`, `x.75`) are
/// exact ties at one decimal, and for those `hours * 10.0` is exact.
fn round_ties_away(hours: f64) -> f64 {
    let tenths = hours * 10.0;
    if tenths.fract().abs() == 0.5 && (hours * 4.0).fract() == 0.0 {
        tenths.round() / 10.0
    } else {
        hours
    }
}

const ITALIAN_MONTHS: [&str; 12] = [
    "gennaio",
    "febbraio",
    "marzo",
    "aprile",
    "maggio",
    "giugno",
    "luglio",
    "agosto",
    "settembre",
    "ottobre",
    "novembre",
    "dicembre",
];

/// Number and currency conventions for one locale.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocaleFormat {
    pub currency_symbol: String,
    pub currency_decimals: u8,
    pub decimal_separator: char,
    pub group_separator: char,
    /// `true` renders `12,00 €`, `false` renders `€12,00`.
    pub symbol_after: bool,
    month_names: [&'static str; 12],
}

impl LocaleFormat {
    /// it-IT conventions with euro amounts.
    pub fn italian_euro() -> Self {
        LocaleFormat {
            currency_symbol: "€".to_string(),
            currency_decimals: 2,
            decimal_separator: ',',
            group_separator: '.',
            symbol_after: true,
            month_names: ITALIAN_MONTHS,
        }
    }

    fn group_digits(&self, digits: &str) -> String {
        let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
        for (i, ch) in digits.chars().enumerate() {
            if i > 0 && (digits.len() - i) % 3 == 0 {
                grouped.push(self.group_separator);
            }
            grouped.push(ch);
        }
        grouped
    }
}

impl Default for LocaleFormat {
    fn default() -> Self {
        LocaleFormat::italian_euro()
    }
}

impl AmountFormatter for LocaleFormat {
    fn currency(&self, amount: Money) -> String {
        let cents = amount.cents();
        let divisor = 10_i64.pow(self.currency_decimals as u32);
        let whole = self.group_digits(&(cents / divisor).abs().to_string());
        let sign = if cents < 0 { "-" } else { "" };

        let number = if self.currency_decimals > 0 {
            format!(
                "{}{}{:0width$}",
                whole,
                self.decimal_separator,
                (cents % divisor).abs(),
                width = self.currency_decimals as usize
            )
        } else {
            whole
        };

        if self.symbol_after {
            format!("{sign}{number} {}", self.currency_symbol)
        } else {
            format!("{sign}{}{number}", self.currency_symbol)
        }
    }

    fn long_date(&self, date: NaiveDate) -> String {
        format!(
            "{} {} {}",
            date.day(),
            self.month_names[date.month0() as usize],
            date.year()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_currency_positive() {
        let format = LocaleFormat::italian_euro();
        assert_eq!(format.currency(Money::from_cents(1234)), "12,34 €");
        assert_eq!(format.currency(Money::from_cents(100)), "1,00 €");
        assert_eq!(format.currency(Money::from_cents(1)), "0,01 €");
        assert_eq!(format.currency(Money::zero()), "0,00 €");
    }

    #[test]
    fn test_format_currency_groups_thousands() {
        let format = LocaleFormat::italian_euro();
        assert_eq!(format.currency(Money::from_cents(123456)), "1.234,56 €");
        assert_eq!(format.currency(Money::from_cents(123456789)), "1.234.567,89 €");
        assert_eq!(format.currency(Money::from_cents(-123456)), "-1.234,56 €");
    }

    #[test]
    fn test_format_currency_symbol_before() {
        let format = LocaleFormat {
            symbol_after: false,
            ..LocaleFormat::italian_euro()
        };
        assert_eq!(format.currency(Money::from_cents(3500)), "€35,00");
    }

    #[test]
    fn test_hours_and_percent() {
        let format = LocaleFormat::default();
        assert_eq!(format.hours(5.5), "5.5h");
        assert_eq!(format.hours(2.0), "2.0h");
        assert_eq!(format.percent(VatRate::from_bps(2200)), "22%");
    }

    #[test]
    fn test_hours_ties_round_up() {
        let format = LocaleFormat::default();
        assert_eq!(format.hours(0.25), "0.3h");
        assert_eq!(format.hours(2.25), "2.3h");
        assert_eq!(format.hours(0.75), "0.8h");
        // Below the tie once stored as binary.
        assert_eq!(format.hours(1.45), "1.4h");
        assert_eq!(format.hours(3.0), "3.0h");
    }

    #[test]
    fn test_long_date() {
        let format = LocaleFormat::default();
        let date = NaiveDate::from_ymd_opt(2026, 10, 17).unwrap();
        assert_eq!(format.long_date(date), "17 ottobre 2026");
    }
}
