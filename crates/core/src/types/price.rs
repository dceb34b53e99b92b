//! Type-safe price representation using decimal arithmetic.
//!
//! Melon prices and cart totals never go through floating point: every
//! amount is a `rust_decimal::Decimal` in the currency's standard unit.

use core::fmt;
use core::str::FromStr;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Errors that can occur when parsing a [`Price`].
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum PriceError {
    /// The input is not a decimal number.
    #[error("invalid price {0:?}")]
    Invalid(String),
    /// The input is a negative amount.
    #[error("price cannot be negative: {0}")]
    Negative(Decimal),
}

/// A price with currency information.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Price {
    /// Amount in the currency's standard unit (e.g., dollars, not cents).
    pub amount: Decimal,
    /// ISO 4217 currency code.
    pub currency_code: CurrencyCode,
}

impl Price {
    /// Create a new price.
    #[must_use]
    pub const fn new(amount: Decimal, currency_code: CurrencyCode) -> Self {
        Self {
            amount,
            currency_code,
        }
    }

    /// Create a USD price from a whole number of cents.
    ///
    /// ```
    /// # use ubermelon_core::Price;
    /// assert_eq!(Price::from_cents(295).to_string(), "$2.95");
    /// ```
    #[must_use]
    pub fn from_cents(cents: i64) -> Self {
        Self::new(Decimal::new(cents, 2), CurrencyCode::USD)
    }

    /// A zero USD amount.
    #[must_use]
    pub const fn zero() -> Self {
        Self::new(Decimal::ZERO, CurrencyCode::USD)
    }

    /// Parse a USD price written as a plain decimal number (`"2.95"`).
    ///
    /// # Errors
    ///
    /// Returns `PriceError::Invalid` if the input is not a decimal number and
    /// `PriceError::Negative` if it is below zero.
    pub fn parse(s: &str) -> Result<Self, PriceError> {
        let amount =
            Decimal::from_str(s.trim()).map_err(|_| PriceError::Invalid(s.to_owned()))?;
        if amount.is_sign_negative() && !amount.is_zero() {
            return Err(PriceError::Negative(amount));
        }
        Ok(Self::new(amount, CurrencyCode::USD))
    }

    /// The price of `quantity` units at this unit price, or `None` if the
    /// amount does not fit in a `Decimal`.
    #[must_use]
    pub fn checked_times(self, quantity: u32) -> Option<Self> {
        self.amount
            .checked_mul(Decimal::from(quantity))
            .map(|amount| Self::new(amount, self.currency_code))
    }

    /// Sum of two prices, or `None` on overflow.
    #[must_use]
    pub fn checked_add(self, rhs: Self) -> Option<Self> {
        self.amount
            .checked_add(rhs.amount)
            .map(|amount| Self::new(amount, self.currency_code))
    }

    /// Whether the amount is exactly zero.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.amount.is_zero()
    }
}

impl Default for Price {
    fn default() -> Self {
        Self::zero()
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{:.2}", self.currency_code.symbol(), self.amount)
    }
}

impl FromStr for Price {
    type Err = PriceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

/// ISO 4217 currency codes. The shop only sells in dollars.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum CurrencyCode {
    #[default]
    USD,
}

impl CurrencyCode {
    /// Display symbol for the currency.
    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::USD => "$",
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_and_display() {
        let price = Price::parse("2.95").unwrap();
        assert_eq!(price.to_string(), "$2.95");

        let whole = Price::parse("3").unwrap();
        assert_eq!(whole.to_string(), "$3.00");
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!(matches!(Price::parse("cheap"), Err(PriceError::Invalid(_))));
        assert!(matches!(Price::parse(""), Err(PriceError::Invalid(_))));
        assert!(matches!(Price::parse("-1.00"), Err(PriceError::Negative(_))));
    }

    #[test]
    fn test_checked_times() {
        let unit = Price::from_cents(300);
        assert_eq!(unit.checked_times(2), Some(Price::from_cents(600)));
        assert_eq!(unit.checked_times(0), Some(Price::zero()));
    }

    #[test]
    fn test_checked_add() {
        let total = Price::from_cents(600).checked_add(Price::from_cents(500));
        assert_eq!(total.unwrap().to_string(), "$11.00");
    }

    #[test]
    fn test_overflow_is_none() {
        let huge = Price::parse("79228162514264337593543950335").unwrap();
        assert_eq!(huge.checked_times(2), None);
        assert_eq!(huge.checked_add(Price::from_cents(100)), None);
        assert_eq!(huge.checked_times(1), Some(huge));
    }
}
