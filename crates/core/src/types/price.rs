//! Type-safe price representation using decimal arithmetic.
//!
//! Product cards carry prices as display text (`"$49.99"`). That text is
//! parsed once, at the point product data enters the store, into a
//! [`Price`] backed by [`Decimal`] so totals never go through floating point.

use core::fmt;
use std::str::FromStr;

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

/// Errors that can occur when parsing a [`Price`] from display text.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum PriceError {
    /// The input string is empty (after trimming).
    #[error("price cannot be empty")]
    Empty,
    /// The numeric part could not be parsed.
    #[error("invalid price amount: {0}")]
    InvalidAmount(String),
    /// The amount is below zero.
    #[error("price cannot be negative")]
    Negative,
    /// The amount exceeds [`Price::MAX_AMOUNT`].
    #[error("price cannot exceed {max}")]
    TooLarge { max: Decimal },
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
    /// Number of decimal places used when displaying an amount.
    pub const DISPLAY_SCALE: u32 = 2;

    /// Largest amount [`Price::parse`] accepts.
    pub const MAX_AMOUNT: Decimal = Decimal::from_parts(1_000_000_000, 0, 0, false, 0);

    /// Create a new price.
    #[must_use]
    pub const fn new(amount: Decimal, currency_code: CurrencyCode) -> Self {
        Self {
            amount,
            currency_code,
        }
    }

    /// Create a USD price from a whole number of cents.
    #[must_use]
    pub fn from_cents(cents: i64) -> Self {
        Self::new(Decimal::new(cents, 2), CurrencyCode::USD)
    }

    /// Parse a price from its display form.
    ///
    /// A single leading currency symbol selects the currency (`$` is read as
    /// USD); without a symbol the price is USD. Thousands separators are
    /// ignored.
    ///
    /// # Errors
    ///
    /// Returns an error if the input is blank, the amount is not a decimal
    /// number, or the amount is negative or above [`Price::MAX_AMOUNT`].
    ///
    /// # Examples
    ///
    /// ```
    /// use gaming_odyssey_core::{CurrencyCode, Price};
    ///
    /// let price = Price::parse("$1,299.50").unwrap();
    /// assert_eq!(price.currency_code, CurrencyCode::USD);
    /// assert_eq!(price.to_string(), "$1299.50");
    ///
    /// assert!(Price::parse("").is_err());
    /// assert!(Price::parse("$abc").is_err());
    /// ```
    pub fn parse(s: &str) -> Result<Self, PriceError> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(PriceError::Empty);
        }

        let mut chars = trimmed.chars();
        let (currency_code, rest) = match chars.next().and_then(CurrencyCode::from_symbol) {
            Some(code) => (code, chars.as_str().trim_start()),
            None => (CurrencyCode::USD, trimmed),
        };

        if rest.is_empty() {
            return Err(PriceError::Empty);
        }

        let digits: String = rest.chars().filter(|c| *c != ',').collect();
        let amount = Decimal::from_str(&digits)
            .map_err(|_| PriceError::InvalidAmount(rest.to_owned()))?;

        if amount.is_sign_negative() && !amount.is_zero() {
            return Err(PriceError::Negative);
        }

        if amount > Self::MAX_AMOUNT {
            return Err(PriceError::TooLarge {
                max: Self::MAX_AMOUNT,
            });
        }

        Ok(Self::new(amount, currency_code))
    }

    /// The amount multiplied by a quantity, unrounded. Saturates at
    /// [`Decimal::MAX`].
    #[must_use]
    pub fn line_amount(&self, quantity: u32) -> Decimal {
        self.amount.saturating_mul(Decimal::from(quantity))
    }

    /// Format for display (e.g., "$19.99").
    #[must_use]
    pub fn display(&self) -> String {
        format!(
            "{}{}",
            self.currency_code.symbol(),
            format_amount(self.amount)
        )
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.display())
    }
}

impl FromStr for Price {
    type Err = PriceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

/// Round an amount to two places and render it with exactly two decimals.
#[must_use]
pub fn format_amount(amount: Decimal) -> String {
    let rounded =
        amount.round_dp_with_strategy(Price::DISPLAY_SCALE, RoundingStrategy::MidpointAwayFromZero);
    format!("{rounded:.2}")
}

/// ISO 4217 currency codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum CurrencyCode {
    #[default]
    USD,
    EUR,
    GBP,
    CAD,
    AUD,
}

impl CurrencyCode {
    /// Display symbol for the currency.
    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::USD | Self::CAD | Self::AUD => "$",
            Self::EUR => "€",
            Self::GBP => "£",
        }
    }

    /// Map a leading currency symbol to a code.
    #[must_use]
    pub const fn from_symbol(c: char) -> Option<Self> {
        match c {
            '$' => Some(Self::USD),
            '€' => Some(Self::EUR),
            '£' => Some(Self::GBP),
            _ => None,
        }
    }
}

/// Serde adapter storing a [`Price`] as its display text.
///
/// Use with `#[serde(with = "gaming_odyssey_core::price::as_display")]` where
/// the persisted shape must stay `"$20.00"` rather than a structured object.
pub mod as_display {
    use serde::{Deserialize, Deserializer, Serializer};

    use super::Price;

    /// Serialize a price as `"$20.00"`.
    ///
    /// # Errors
    ///
    /// Propagates serializer errors.
    pub fn serialize<S>(price: &Price, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&price.display())
    }

    /// Deserialize a price from display text.
    ///
    /// # Errors
    ///
    /// Returns a custom error if the text is not a valid price.
    pub fn deserialize<'de, D>(deserializer: D) -> Result<Price, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Price::parse(&s).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_with_symbol() {
        let price = Price::parse("$20.00").unwrap();
        assert_eq!(price.amount, Decimal::new(2000, 2));
        assert_eq!(price.currency_code, CurrencyCode::USD);
    }

    #[test]
    fn test_parse_other_currencies() {
        assert_eq!(
            Price::parse("€5").unwrap().currency_code,
            CurrencyCode::EUR
        );
        assert_eq!(
            Price::parse("£ 12.5").unwrap().currency_code,
            CurrencyCode::GBP
        );
    }

    #[test]
    fn test_parse_without_symbol_defaults_to_usd() {
        let price = Price::parse(" 59.99 ").unwrap();
        assert_eq!(price.currency_code, CurrencyCode::USD);
        assert_eq!(price.amount, Decimal::new(5999, 2));
    }

    #[test]
    fn test_parse_thousands_separator() {
        let price = Price::parse("$1,299.99").unwrap();
        assert_eq!(price.amount, Decimal::new(129_999, 2));
    }

    #[test]
    fn test_parse_empty() {
        assert_eq!(Price::parse(""), Err(PriceError::Empty));
        assert_eq!(Price::parse("   "), Err(PriceError::Empty));
        assert_eq!(Price::parse("$"), Err(PriceError::Empty));
    }

    #[test]
    fn test_parse_invalid() {
        assert!(matches!(
            Price::parse("$twenty"),
            Err(PriceError::InvalidAmount(_))
        ));
    }

    #[test]
    fn test_parse_negative() {
        assert_eq!(Price::parse("-$5"), Err(PriceError::InvalidAmount("-$5".into())));
        assert_eq!(Price::parse("$-5.00"), Err(PriceError::Negative));
    }

    #[test]
    fn test_parse_upper_bound() {
        assert_eq!(
            Price::parse("$1,000,000,000").unwrap().amount,
            Price::MAX_AMOUNT
        );
        assert_eq!(
            Price::parse("$1000000000.01"),
            Err(PriceError::TooLarge {
                max: Price::MAX_AMOUNT
            })
        );
        assert!(matches!(
            Price::parse("$79228162514264337593543950335"),
            Err(PriceError::TooLarge { .. })
        ));
    }

    #[test]
    fn test_line_amount_saturates() {
        let price = Price::new(Decimal::MAX, CurrencyCode::USD);
        assert_eq!(price.line_amount(2), Decimal::MAX);
    }

    #[test]
    fn test_display_pads_to_two_places() {
        assert_eq!(Price::parse("$20").unwrap().display(), "$20.00");
        assert_eq!(Price::parse("€7.5").unwrap().display(), "€7.50");
    }

    #[test]
    fn test_format_amount_rounds_half_away_from_zero() {
        assert_eq!(format_amount(Decimal::new(1_005, 3)), "1.01");
        assert_eq!(format_amount(Decimal::new(1_004, 3)), "1.00");
        assert_eq!(format_amount(Decimal::ZERO), "0.00");
    }

    #[test]
    fn test_line_amount() {
        let price = Price::from_cents(3000);
        assert_eq!(price.line_amount(2), Decimal::new(6000, 2));
    }

    #[test]
    fn test_as_display_serde() {
        #[derive(Serialize, Deserialize)]
        struct Wrapper {
            #[serde(with = "as_display")]
            price: Price,
        }

        let json = serde_json::to_string(&Wrapper {
            price: Price::from_cents(1999),
        })
        .unwrap();
        assert_eq!(json, r#"{"price":"$19.99"}"#);

        let parsed: Wrapper = serde_json::from_str(r#"{"price":"$5"}"#).unwrap();
        assert_eq!(parsed.price, Price::from_cents(500));

        assert!(serde_json::from_str::<Wrapper>(r#"{"price":"free"}"#).is_err());
        assert!(
            serde_json::from_str::<Wrapper>(r#"{"price":"$79228162514264337593543950335"}"#)
                .is_err()
        );
    }
}
