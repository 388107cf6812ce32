//! Money value object backed by an exact decimal.
//!
//! Prices and totals are summed as decimals so a cart total is always
//! exactly Σ price × quantity. On the wire a `Money` is a plain JSON
//! number (`199.99`), rounded to cents when read back.

use rust_decimal::prelude::{FromPrimitive, ToPrimitive};
use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::iter::Sum;
use std::ops::Add;
use std::str::FromStr;

use super::ValidationError;

/// Number of fractional digits kept for currency amounts.
pub const CURRENCY_SCALE: u32 = 2;

/// An amount of money in the store currency.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Money(Decimal);

impl Money {
    pub const ZERO: Money = Money(Decimal::ZERO);

    /// Wraps a decimal amount as-is.
    pub fn new(amount: Decimal) -> Self {
        Self(amount)
    }

    /// Creates an amount from a whole number of cents.
    pub fn from_cents(cents: i64) -> Self {
        Self(Decimal::new(cents, CURRENCY_SCALE))
    }

    /// Converts a float amount, rounding to cents.
    ///
    /// Returns `None` for NaN and infinities.
    pub fn from_f64(value: f64) -> Option<Self> {
        if !value.is_finite() {
            return None;
        }
        Decimal::from_f64(value).map(|d| Self(d.round_dp(CURRENCY_SCALE)))
    }

    /// Parses a user-supplied amount such as `"49.5"`.
    pub fn parse(value: &str) -> Result<Self, ValidationError> {
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::empty_field("amount"));
        }
        Decimal::from_str(trimmed)
            .map(|d| Self(d.round_dp(CURRENCY_SCALE)))
            .map_err(|e| ValidationError::invalid_format("amount", e.to_string()))
    }

    /// Returns the underlying decimal.
    pub fn amount(&self) -> Decimal {
        self.0
    }

    /// Multiplies a unit price by a quantity.
    pub fn times(&self, quantity: u32) -> Money {
        Self(self.0 * Decimal::from(quantity))
    }

    pub fn is_negative(&self) -> bool {
        self.0.is_sign_negative() && !self.0.is_zero()
    }

    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    /// True when the amount has no digits below a cent, so it survives the
    /// persisted JSON number unchanged.
    pub fn is_whole_cents(&self) -> bool {
        self.0.normalize().scale() <= CURRENCY_SCALE
    }

    /// Rounds half away from zero to the nearest cent.
    pub fn round_to_cents(&self) -> Money {
        Self(
            self.0
                .round_dp_with_strategy(CURRENCY_SCALE, RoundingStrategy::MidpointAwayFromZero),
        )
    }

    /// Lossy float view, used for the persisted JSON number.
    pub fn to_f64(&self) -> f64 {
        self.0.to_f64().unwrap_or_default()
    }

    /// Formats the amount with a currency symbol and thousands separators,
    /// e.g. `$1,234.56`. Unknown currency codes are used as a prefix.
    pub fn format(&self, currency: &str) -> String {
        let rounded = self
            .0
            .round_dp_with_strategy(CURRENCY_SCALE, RoundingStrategy::MidpointAwayFromZero);
        let sign = if rounded.is_sign_negative() && !rounded.is_zero() {
            "-"
        } else {
            ""
        };
        let digits = rounded.abs().to_string();
        let (whole, fraction) = match digits.split_once('.') {
            Some((whole, fraction)) => (whole.to_string(), fraction.to_string()),
            None => (digits, String::new()),
        };
        let fraction = format!("{:0<width$}", fraction, width = CURRENCY_SCALE as usize);

        let symbol = match currency.to_ascii_uppercase().as_str() {
            "USD" => "$".to_string(),
            "EUR" => "€".to_string(),
            "GBP" => "£".to_string(),
            other => format!("{} ", other),
        };
        format!("{}{}{}.{}", sign, symbol, group_thousands(&whole), fraction)
    }
}

fn group_thousands(whole: &str) -> String {
    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (i, ch) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}

impl Add for Money {
    type Output = Money;

    fn add(self, rhs: Money) -> Money {
        Money(self.0 + rhs.0)
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Money {
        iter.fold(Money::ZERO, Add::add)
    }
}

impl From<Decimal> for Money {
    fn from(amount: Decimal) -> Self {
        Self(amount)
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.format("USD"))
    }
}

impl Serialize for Money {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_f64(self.to_f64())
    }
}

impl<'de> Deserialize<'de> for Money {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = f64::deserialize(deserializer)?;
        Money::from_f64(value)
            .ok_or_else(|| serde::de::Error::custom(format!("invalid amount: {}", value)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn from_cents_keeps_two_decimals() {
        assert_eq!(Money::from_cents(19999).amount(), dec!(199.99));
    }

    #[test]
    fn times_multiplies_exactly() {
        let price = Money::new(dec!(0.10));
        assert_eq!(price.times(3).amount(), dec!(0.30));
    }

    #[test]
    fn sum_has_no_float_drift() {
        let total: Money = std::iter::repeat(Money::new(dec!(0.1))).take(10).sum();
        assert_eq!(total, Money::new(dec!(1.0)));
    }

    #[test]
    fn whole_cents_ignores_trailing_zeros() {
        assert!(Money::new(dec!(0.10)).is_whole_cents());
        assert!(Money::new(dec!(12.500)).is_whole_cents());
        assert!(Money::new(dec!(7)).is_whole_cents());
        assert!(!Money::new(dec!(0.125)).is_whole_cents());
    }

    #[test]
    fn round_to_cents_rounds_half_away_from_zero() {
        assert_eq!(Money::new(dec!(0.125)).round_to_cents(), Money::new(dec!(0.13)));
        assert_eq!(Money::new(dec!(19.994)).round_to_cents(), Money::new(dec!(19.99)));
    }

    #[test]
    fn whole_cent_amounts_survive_json() {
        for amount in [dec!(0.10), dec!(12.5), dec!(449.99), dec!(1234567.89)] {
            let json = serde_json::to_string(&Money::new(amount)).unwrap();
            let back: Money = serde_json::from_str(&json).unwrap();
            assert_eq!(back, Money::new(amount), "amount {}", amount);
        }
    }

    #[test]
    fn parse_accepts_plain_numbers() {
        assert_eq!(Money::parse(" 49.5 ").unwrap(), Money::new(dec!(49.50)));
        assert!(Money::parse("").is_err());
        assert!(Money::parse("lots").is_err());
    }

    #[test]
    fn format_usd_groups_thousands() {
        assert_eq!(Money::new(dec!(1234.5)).format("USD"), "$1,234.50");
        assert_eq!(Money::new(dec!(1000000)).format("usd"), "$1,000,000.00");
        assert_eq!(Money::new(dec!(29.99)).format("USD"), "$29.99");
        assert_eq!(Money::ZERO.format("USD"), "$0.00");
    }

    #[test]
    fn format_handles_negative_and_unknown_currency() {
        assert_eq!(Money::new(dec!(-5)).format("USD"), "-$5.00");
        assert_eq!(Money::new(dec!(12)).format("CAD"), "CAD 12.00");
    }

    #[test]
    fn serializes_as_json_number() {
        let json = serde_json::to_string(&Money::new(dec!(199.99))).unwrap();
        assert_eq!(json, "199.99");
    }

    #[test]
    fn deserializes_json_number_to_cents() {
        let money: Money = serde_json::from_str("449.99").unwrap();
        assert_eq!(money, Money::new(dec!(449.99)));

        let whole: Money = serde_json::from_str("20").unwrap();
        assert_eq!(whole, Money::new(dec!(20)));
    }

    #[test]
    fn rejects_non_numeric_json() {
        assert!(serde_json::from_str::<Money>("\"20\"").is_err());
        assert!(serde_json::from_str::<Money>("null").is_err());
    }
}
