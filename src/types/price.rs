//! Fixed-point currency amounts.
//!
//! ## Overview
//!
//! Menu prices are stored as whole cents in a `u64`, scaled by 10^2. Parsing
//! and formatting go through `rust_decimal` so that no floating-point value
//! ever touches a price.
//!
//! ## Rounding
//!
//! Input with more than two decimal places is rounded to the nearest cent,
//! with midpoints rounded away from zero ("1.005" becomes 1.01).
//!
//! ## Examples
//!
//! ```
//! use foodie_express::types::Price;
//!
//! let price = Price::parse("5.50").unwrap();
//! assert_eq!(price.cents(), 550);
//! assert_eq!(price.to_string(), "5.50");
//!
//! assert!(Price::parse("-1").is_err());
//! assert!(Price::parse("cheap").is_err());
//! ```

use std::fmt;
use std::str::FromStr;

use rust_decimal::prelude::*;
use rust_decimal::{Decimal, RoundingStrategy};

use crate::error::{DeliveryError, Result};

/// Scaling factor for fixed-point prices: 10^2
pub const SCALE: u64 = 100;

/// Number of decimal places kept for a price
pub const DECIMALS: u32 = 2;

/// A non-negative price in cents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Price(u64);

impl Price {
    /// Zero price
    pub const ZERO: Price = Price(0);

    /// Build a price from a raw cent count
    #[inline]
    pub const fn from_cents(cents: u64) -> Self {
        Price(cents)
    }

    /// Raw cent count
    #[inline]
    pub const fn cents(self) -> u64 {
        self.0
    }

    /// Parse a decimal string into a price
    ///
    /// Surrounding whitespace is ignored. Only an optional sign, digits and a
/// single decimal point are accepted.
    ///
    /// # Errors
    ///
    /// [`DeliveryError::InvalidInput`] if the text is not a number, is
    /// negative, or does not fit in the cent range.
    pub fn parse(s: &str) -> Result<Self> {
        let trimmed = s.trim();
        let not_a_number = || DeliveryError::invalid(format!("price `{trimmed}` is not a number"));

        // Decimal::from_str also takes `_` separators and exponents
        let digits = trimmed.strip_prefix(|c: char| c == '+' || c == '-').unwrap_or(trimmed);
        let plain = digits.bytes().any(|b| b.is_ascii_digit())
            && digits.bytes().all(|b| b.is_ascii_digit() || b == b'.')
            && digits.bytes().filter(|&b| b == b'.').count() <= 1;
        if !plain {
            return Err(not_a_number());
        }

        let decimal = Decimal::from_str(trimmed).map_err(|_| not_a_number())?;
        Self::from_decimal(decimal)
    }

    /// Convert a `Decimal` into a price, rounding to whole cents
    pub fn from_decimal(d: Decimal) -> Result<Self> {
        if d < Decimal::ZERO {
            return Err(DeliveryError::invalid(format!("price {d} is negative")));
        }

        d.checked_mul(Decimal::from(SCALE))
            .map(|scaled| scaled.round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero))
            .and_then(|rounded| rounded.to_u64())
            .map(Price)
            .ok_or_else(|| DeliveryError::invalid(format!("price {d} is out of range")))
    }

    /// Price as a `Decimal` with two decimal places
    pub fn to_decimal(self) -> Decimal {
        Decimal::from_i128_with_scale(i128::from(self.0), DECIMALS)
    }
}

impl FromStr for Price {
    type Err = DeliveryError;

    fn from_str(s: &str) -> Result<Self> {
        Price::parse(s)
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2}", self.to_decimal())
    }
}

// ============================================================================
// Unit Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_basic() {
        assert_eq!(Price::parse("5.50").unwrap().cents(), 550);
        assert_eq!(Price::parse("2").unwrap().cents(), 200);
        assert_eq!(Price::parse("0.05").unwrap().cents(), 5);
        assert_eq!(Price::parse("  3.25 ").unwrap().cents(), 325);
    }

    #[test]
    fn test_parse_zero() {
        assert_eq!(Price::parse("0").unwrap(), Price::ZERO);
        assert_eq!(Price::parse("0.00").unwrap(), Price::ZERO);
    }

    #[test]
    fn test_parse_rejects_negative() {
        let err = Price::parse("-1.50").unwrap_err();
        assert!(matches!(err, DeliveryError::InvalidInput(_)));
    }

    #[test]
    fn test_parse_rejects_non_numeric() {
        for bad in ["abc", "", "   ", "RM5", "five", "5_50", "1_000", "1e3", "1.2.3", ".", "-"] {
            let err = Price::parse(bad).unwrap_err();
            assert!(matches!(err, DeliveryError::InvalidInput(_)), "accepted {bad:?}");
        }
    }

    #[test]
    fn test_parse_rejects_out_of_range() {
        let err = Price::parse("100000000000000000000").unwrap_err();
        assert!(matches!(err, DeliveryError::InvalidInput(_)));
    }

    #[test]
    fn test_parse_rounds_to_cents() {
        assert_eq!(Price::parse("1.005").unwrap().cents(), 101);
        assert_eq!(Price::parse("1.004").unwrap().cents(), 100);
        assert_eq!(Price::parse("2.999").unwrap().cents(), 300);
    }

    #[test]
    fn test_display() {
        assert_eq!(Price::from_cents(550).to_string(), "5.50");
        assert_eq!(Price::from_cents(0).to_string(), "0.00");
        assert_eq!(Price::from_cents(5).to_string(), "0.05");
        assert_eq!(Price::from_cents(123_456).to_string(), "1234.56");
    }

    #[test]
    fn test_ordering() {
        assert!(Price::from_cents(150) < Price::from_cents(200));
        assert_eq!("1.50".parse::<Price>().unwrap(), Price::from_cents(150));
    }
}
