//! # Money Module
//!
//! Provides the `Money` type for monetary values and the `Pricing` constants
//! every quote total is derived from.
//!
//! ## Why Integer Money?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  THE FLOATING POINT PROBLEM                                             │
//! │                                                                         │
//! │  With floating point:                                                   │
//! │    0.1 + 0.2 = 0.30000000000000004  ❌ WRONG!                           │
//! │                                                                         │
//! │  A quote that shows subtotal + VAT ≠ total loses the client's trust.   │
//! │                                                                         │
//! │  OUR SOLUTION: Integer Cents                                            │
//! │    subtotal (cents) + vat (cents) == grand total (cents), always        │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Hours are the one real-valued input. They are converted to money exactly
//! once, in [`Money::for_hours`], by rounding `hours × rate_cents` to the
//! nearest cent.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;
use std::ops::Add;
use ts_rs::TS;

use crate::error::{CoreError, CoreResult};
use crate::types::VatRate;
use crate::validation::{validate_hourly_rate, validate_vat_rate_bps};
use crate::{DEFAULT_HOURLY_RATE, DEFAULT_VAT_RATE};

// =============================================================================
// Money Type
// =============================================================================

/// A monetary value in the smallest currency unit (euro cents).
///
/// ## Where Money is Used
/// ```text
/// Pricing.hourly_rate ──┬──► line cost (hours × rate) ──► table "Cost" column
///                       │
///                       └──► subtotal (total hours × rate)
///                                 │
///                                 ├──► vat (subtotal × VAT rate)
///                                 │
///                                 └──► grand total (subtotal + vat)
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Money(i64);

impl Money {
    /// Creates a Money value from cents (the smallest currency unit).
    ///
    /// ## Example
    /// ```rust
    /// use quote_core::money::Money;
    ///
    /// let rate = Money::from_cents(3500); // €35.00
    /// assert_eq!(rate.cents(), 3500);
    /// ```
    #[inline]
    pub const fn from_cents(cents: i64) -> Self {
        Money(cents)
    }

    /// Returns the value in cents (smallest currency unit).
    #[inline]
    pub const fn cents(&self) -> i64 {
        self.0
    }

    /// Returns the major unit (euros) portion.
    #[inline]
    pub const fn major(&self) -> i64 {
        self.0 / 100
    }

    /// Returns the minor unit (cents) portion (always 0-99).
    #[inline]
    pub const fn cents_part(&self) -> i64 {
        (self.0 % 100).abs()
    }

    /// Returns zero money value.
    #[inline]
    pub const fn zero() -> Self {
        Money(0)
    }

    /// Checks if the value is zero.
    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Checks if the value is positive (greater than zero).
    #[inline]
    pub const fn is_positive(&self) -> bool {
        self.0 > 0
    }

    /// Cost of `hours` billed at this hourly rate, rounded to the nearest cent.
    ///
    /// Saturates at the `i64` bounds instead of wrapping.
    ///
    /// ## Example
    /// ```rust
    /// use quote_core::money::Money;
    ///
    /// let rate = Money::from_cents(3500);        // €35.00 / hour
    /// assert_eq!(rate.for_hours(5.5).cents(), 19250); // €192.50
    /// assert_eq!(rate.for_hours(0.0).cents(), 0);
    /// ```
    pub fn for_hours(&self, hours: f64) -> Money {
        if !hours.is_finite() {
            return Money::zero();
        }
        // `as` saturates on overflow.
        Money::from_cents((self.0 as f64 * hours).round() as i64)
    }

    /// Calculates VAT on this amount with half-up rounding.
    ///
    /// ## Implementation
    /// Integer math: `(amount * bps + 5000) / 10000` in i128, clamped back
    /// into the `i64` range.
    ///
    /// ## Example
    /// ```rust
    /// use quote_core::money::Money;
    /// use quote_core::types::VatRate;
    ///
    /// let subtotal = Money::from_cents(19250);  // €192.50
    /// let vat = subtotal.calculate_vat(VatRate::from_bps(2200));
    /// assert_eq!(vat.cents(), 4235);            // €42.35
    /// ```
    pub fn calculate_vat(&self, rate: VatRate) -> Money {
        let vat_cents = (self.0 as i128 * rate.bps() as i128 + 5000) / 10000;
        let vat_cents = vat_cents.clamp(i64::MIN as i128, i64::MAX as i128);
        Money::from_cents(vat_cents as i64)
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Plain `12.34 EUR` rendering for logs. User-facing text goes through
/// [`crate::format::AmountFormatter`].
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        write!(
            f,
            "{}{}.{:02} EUR",
            sign,
            self.major().abs(),
            self.cents_part()
        )
    }
}

impl Default for Money {
    fn default() -> Self {
        Money::zero()
    }
}

/// Saturating, so totals never wrap to a negative amount.
impl Add for Money {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        Money(self.0.saturating_add(other.0))
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Self {
        iter.fold(Money::zero(), Add::add)
    }
}

// =============================================================================
// Pricing
// =============================================================================

/// The fixed constants a quote is priced with.
///
/// ## Invariants
/// - `hourly_rate` is strictly positive
/// - `vat_rate` is at most 100% (10000 bps)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct Pricing {
    hourly_rate: Money,
    vat_rate: VatRate,
}

impl Pricing {
    /// Creates validated pricing constants.
    pub fn new(hourly_rate: Money, vat_rate: VatRate) -> CoreResult<Self> {
        validate_hourly_rate(hourly_rate).map_err(|e| CoreError::InvalidPricing {
            reason: e.to_string(),
        })?;
        validate_vat_rate_bps(vat_rate.bps()).map_err(|e| CoreError::InvalidPricing {
            reason: e.to_string(),
        })?;

        Ok(Pricing {
            hourly_rate,
            vat_rate,
        })
    }

    #[inline]
    pub const fn hourly_rate(&self) -> Money {
        self.hourly_rate
    }

    #[inline]
    pub const fn vat_rate(&self) -> VatRate {
        self.vat_rate
    }
}

impl Default for Pricing {
    /// €35.00 per hour, 22% VAT.
    fn default() -> Self {
        Pricing {
            hourly_rate: DEFAULT_HOURLY_RATE,
            vat_rate: DEFAULT_VAT_RATE,
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
