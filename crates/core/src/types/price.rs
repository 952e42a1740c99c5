//! Type-safe price representation using decimal arithmetic.
//!
//! A wishlist entry's price is captured from the storefront theme at the
//! moment the shopper saves the product. Themes disagree about what they put
//! in the product-price attribute: some emit an already formatted money string,
//! some the amount in dollars, some the amount in cents. [`Price`] keeps that
//! unit explicit instead of guessing at render time.
//!
//! Entries written by the legacy storefront script carry an untagged string
//! or number. Those go through [`Price::from_legacy`] exactly once, on load,
//! and are written back tagged on the next save.

use core::fmt;
use core::str::FromStr;

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Deserializer, Serialize, de::Error as _};
use serde_json::Value;

/// Amounts whose magnitude exceeds this are assumed to be minor units when
/// decoding legacy, untagged prices.
const LEGACY_MINOR_UNIT_THRESHOLD: Decimal = Decimal::ONE_HUNDRED;

/// Errors that can occur when building a [`Price`].
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum PriceError {
    /// The amount could not be parsed as a decimal number.
    #[error("invalid price amount: {0}")]
    InvalidAmount(String),
    /// The stored value has a JSON shape that cannot hold a price.
    #[error("unsupported price value: {0}")]
    Unsupported(String),
}

/// A display price with an explicit unit.
///
/// Serialized externally tagged:
///
/// ```
/// use rust_decimal::Decimal;
/// use wishlist_core::Price;
///
/// let json = serde_json::to_string(&Price::Minor(150)).unwrap();
/// assert_eq!(json, r#"{"minor":150}"#);
///
/// let json = serde_json::to_string(&Price::Major(Decimal::new(1999, 2))).unwrap();
/// assert_eq!(json, r#"{"major":"19.99"}"#);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Price {
    /// Already formatted by the theme (e.g. `"$19.99"`); rendered verbatim.
    Formatted(String),
    /// Amount in the currency's standard unit (dollars).
    Major(Decimal),
    /// Amount in the currency's smallest unit (cents).
    Minor(i64),
}

impl Price {
    /// Parse a major-unit amount such as `"19.99"`.
    ///
    /// # Errors
    ///
    /// Returns [`PriceError::InvalidAmount`] if the input is not a decimal number.
    pub fn major(amount: &str) -> Result<Self, PriceError> {
        parse_decimal(amount.trim())
            .map(Self::Major)
            .ok_or_else(|| PriceError::InvalidAmount(amount.to_string()))
    }

    /// Decode a price written by the legacy storefront script.
    ///
    /// The legacy script stored whatever the theme put in the product-price
    /// attribute. The decoding rules are:
    ///
    /// - `null` or an empty string means "no price"
    /// - a string containing `$` is already formatted and passes through
    /// - a number (or numeric string) with magnitude above 100 is taken as
    ///   cents and divided by 100; anything else is taken as dollars
    /// - any other string passes through as formatted text
    ///
    /// # Errors
    ///
    /// Returns [`PriceError::Unsupported`] for booleans, arrays and objects.
    pub fn from_legacy(value: &Value) -> Result<Option<Self>, PriceError> {
        match value {
            Value::Null => Ok(None),
            Value::String(s) if s.is_empty() => Ok(None),
            Value::String(s) if s.contains('$') => Ok(Some(Self::Formatted(s.clone()))),
            Value::String(s) => Ok(Some(
                parse_decimal(s.trim()).map_or_else(|| Self::Formatted(s.clone()), scale_legacy),
            )),
            Value::Number(n) => parse_decimal(&n.to_string())
                .map(|amount| Some(scale_legacy(amount)))
                .ok_or_else(|| PriceError::InvalidAmount(n.to_string())),
            other => Err(PriceError::Unsupported(other.to_string())),
        }
    }

    /// Amount in major units, if the price is numeric.
    #[must_use]
    pub fn amount(&self) -> Option<Decimal> {
        match self {
            Self::Formatted(_) => None,
            Self::Major(amount) => Some(*amount),
            Self::Minor(cents) => Some(Decimal::new(*cents, 2)),
        }
    }

    /// Format for display in the storefront locale (en-US, USD).
    #[must_use]
    pub fn display(&self) -> String {
        self.display_in(CurrencyCode::default())
    }

    /// Format for display using the given currency's symbol.
    #[must_use]
    pub fn display_in(&self, currency: CurrencyCode) -> String {
        match self {
            Self::Formatted(text) => text.clone(),
            Self::Major(_) | Self::Minor(_) => self
                .amount()
                .map(|amount| format_money(amount, currency))
                .unwrap_or_default(),
        }
    }

    /// Deserialize an optional price, accepting both the tagged form and the
    /// legacy untagged string/number form.
    ///
    /// Use with `#[serde(default, deserialize_with = "Price::deserialize_lenient")]`.
    ///
    /// # Errors
    ///
    /// Fails if the value is neither a tagged price nor a legacy scalar.
    pub fn deserialize_lenient<'de, D>(deserializer: D) -> Result<Option<Self>, D::Error>
    where
        D: Deserializer<'de>,
    {
        match Option::<Value>::deserialize(deserializer)? {
            None | Some(Value::Null) => Ok(None),
            Some(tagged @ Value::Object(_)) => serde_json::from_value(tagged)
                .map(Some)
                .map_err(D::Error::custom),
            Some(legacy) => Self::from_legacy(&legacy).map_err(D::Error::custom),
        }
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.display())
    }
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
    /// Symbol placed in front of the amount.
    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::USD | Self::CAD | Self::AUD => "$",
            Self::EUR => "€",
            Self::GBP => "£",
        }
    }
}

fn parse_decimal(raw: &str) -> Option<Decimal> {
    Decimal::from_str(raw)
        .or_else(|_| Decimal::from_scientific(raw))
        .ok()
}

fn scale_legacy(amount: Decimal) -> Price {
    if amount.abs() > LEGACY_MINOR_UNIT_THRESHOLD {
        Price::Major(amount / Decimal::ONE_HUNDRED)
    } else {
        Price::Major(amount)
    }
}

/// Currency formatting equivalent to `en-US` with two fraction digits:
/// grouping commas, midpoint rounding away from zero, leading minus.
fn format_money(amount: Decimal, currency: CurrencyCode) -> String {
    let rounded = amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    let sign = if rounded.is_sign_negative() && !rounded.is_zero() {
        "-"
    } else {
        ""
    };
    let digits = format!("{:.2}", rounded.abs());
    let (whole, fraction) = digits.split_once('.').unwrap_or((digits.as_str(), "00"));

    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (i, ch) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    format!("{sign}{}{grouped}.{fraction}", currency.symbol())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use serde_json::json;

    use super::*;

    fn legacy(value: Value) -> String {
        Price::from_legacy(&value)
            .unwrap()
            .map(|p| p.display())
            .unwrap_or_default()
    }

    #[test]
    fn test_legacy_numeric_string_above_threshold_is_cents() {
        assert_eq!(legacy(json!("150")), "$1.50");
    }

    #[test]
    fn test_legacy_number_at_or_below_threshold_is_dollars() {
        assert_eq!(legacy(json!(50)), "$50.00");
        assert_eq!(legacy(json!(100)), "$100.00");
    }

    #[test]
    fn test_legacy_formatted_string_passes_through() {
        assert_eq!(legacy(json!("$19.99")), "$19.99");
    }

    #[test]
    fn test_legacy_empty_and_null_mean_no_price() {
        assert_eq!(Price::from_legacy(&json!("")).unwrap(), None);
        assert_eq!(Price::from_legacy(&Value::Null).unwrap(), None);
    }

    #[test]
    fn test_legacy_unparseable_text_passes_through() {
        assert_eq!(legacy(json!("Sold out")), "Sold out");
    }

    #[test]
    fn test_legacy_rejects_structured_values() {
        assert!(matches!(
            Price::from_legacy(&json!([1, 2])),
            Err(PriceError::Unsupported(_))
        ));
        assert!(Price::from_legacy(&json!(true)).is_err());
    }

    #[test]
    fn test_display_groups_thousands() {
        assert_eq!(Price::Minor(123_456_789).display(), "$1,234,567.89");
        assert_eq!(Price::major("1000").unwrap().display(), "$1,000.00");
    }

    #[test]
    fn test_display_rounds_half_away_from_zero() {
        assert_eq!(Price::major("2.005").unwrap().display(), "$2.01");
        assert_eq!(Price::major("-2.005").unwrap().display(), "-$2.01");
    }

    #[test]
    fn test_display_in_other_currency() {
        assert_eq!(Price::Minor(999).display_in(CurrencyCode::GBP), "£9.99");
    }

    #[test]
    fn test_major_rejects_garbage() {
        assert!(matches!(
            Price::major("abc"),
            Err(PriceError::InvalidAmount(_))
        ));
    }

    #[test]
    fn test_tagged_round_trip() {
        let price = Price::Formatted("$5.00".to_string());
        let json = serde_json::to_value(&price).unwrap();
        assert_eq!(json, json!({"formatted": "$5.00"}));
        let back: Price = serde_json::from_value(json).unwrap();
        assert_eq!(back, price);
    }
}
