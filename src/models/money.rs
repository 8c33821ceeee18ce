//! Money type for ledger amounts
//!
//! Ledger facts (income entries, targets, deposits) are stored as integer
//! cents so that sums over a month stay exact. Derived figures produced by
//! the projection engine are plain decimal currency units.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;
use std::ops::Add;
use thiserror::Error;

/// A monetary amount stored as cents (hundredths of the currency unit)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Money(i64);

/// Why an amount string was rejected
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MoneyParseError {
    #[error("'{0}' is not an amount")]
    InvalidFormat(String),

    #[error("'{0}' has more than two decimals")]
    TooPrecise(String),

    #[error("'{0}' is out of range")]
    Overflow(String),
}

impl Money {
    /// Create a Money amount from cents
    ///
    /// # Examples
    /// ```
    /// use budget_pacer::models::Money;
    /// let amount = Money::from_cents(1050); // 10.50
    /// assert_eq!(amount.cents(), 1050);
    /// ```
    pub const fn from_cents(cents: i64) -> Self {
        Self(cents)
    }

    /// Create a Money amount from whole currency units
    ///
    /// # Examples
    /// ```
    /// use budget_pacer::models::Money;
    /// assert_eq!(Money::from_units(1500).cents(), 150_000);
    /// ```
    pub const fn from_units(units: i64) -> Self {
        Self(units * 100)
    }

    pub const fn zero() -> Self {
        Self(0)
    }

    pub const fn cents(&self) -> i64 {
        self.0
    }

    /// The amount as decimal currency units, for projection arithmetic
    pub fn as_units(&self) -> f64 {
        self.0 as f64 / 100.0
    }

    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    pub const fn is_positive(&self) -> bool {
        self.0 > 0
    }

    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// Parse user input such as `1500`, `1500.5`, `$1,500,000` or `-20.75`.
    ///
    /// Thousands separators must group digits in threes; at most two
    /// decimals are accepted.
    pub fn parse(input: &str) -> Result<Self, MoneyParseError> {
        let invalid = || MoneyParseError::InvalidFormat(input.trim().to_string());

        let text = input.trim();
        let (negative, text) = match text.strip_prefix('-') {
            Some(rest) => (true, rest.trim_start()),
            None => (false, text),
        };
        let text = text.strip_prefix('$').unwrap_or(text).trim_start();

        let (whole, fraction) = match text.split_once('.') {
            Some((whole, fraction)) => (whole, fraction),
            None => (text, ""),
        };
        if whole.is_empty() && fraction.is_empty() {
            return Err(invalid());
        }

        let whole = ungroup(whole).ok_or_else(invalid)?;
        if !fraction.chars().all(|c| c.is_ascii_digit()) {
            return Err(invalid());
        }
        if fraction.len() > 2 {
            return Err(MoneyParseError::TooPrecise(input.trim().to_string()));
        }

        let units: i64 = if whole.is_empty() {
            0
        } else {
            whole
                .parse()
                .map_err(|_| MoneyParseError::Overflow(input.trim().to_string()))?
        };
        let cents: i64 = format!("{:0<2}", fraction).parse().map_err(|_| invalid())?;

        let total = units
            .checked_mul(100)
            .and_then(|c| c.checked_add(cents))
            .ok_or_else(|| MoneyParseError::Overflow(input.trim().to_string()))?;

        Ok(Self(if negative { -total } else { total }))
    }

    /// Full precision with a currency symbol, e.g. `$1500.50`
    pub fn format_with_symbol(&self, symbol: &str) -> String {
        let sign = if self.is_negative() { "-" } else { "" };
        let abs = self.0.unsigned_abs();
        format!("{}{}{}.{:02}", sign, symbol, abs / 100, abs % 100)
    }
}

/// Digits of the integer part with any `,` grouping removed, or `None`
/// if the grouping is irregular or a non-digit appears
fn ungroup(whole: &str) -> Option<String> {
    let groups: Vec<&str> = whole.split(',').collect();
    let digits_only = |g: &str| g.chars().all(|c| c.is_ascii_digit());

    if groups.len() > 1 {
        let first_ok = (1..=3).contains(&groups[0].len());
        let rest_ok = groups[1..].iter().all(|g| g.len() == 3);
        if !first_ok || !rest_ok {
            return None;
        }
    }

    groups
        .iter()
        .all(|g| digits_only(g))
        .then(|| groups.concat())
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.format_with_symbol("$"))
    }
}

/// Saturates at the `i64` bounds, so totals over stored amounts never
/// overflow however large the individual entries are
impl Add for Money {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self(self.0.saturating_add(other.0))
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Money::zero(), Add::add)
    }
}

impl<'a> Sum<&'a Money> for Money {
    fn sum<I: Iterator<Item = &'a Money>>(iter: I) -> Self {
        iter.copied().sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_units_and_cents() {
        assert_eq!(Money::from_units(1500), Money::from_cents(150_000));
        assert_eq!(Money::from_cents(150_050).as_units(), 1500.5);
        assert_eq!(Money::zero().as_units(), 0.0);
        assert_eq!(Money::default(), Money::zero());
    }

    #[test]
    fn test_display() {
        assert_eq!(Money::from_cents(1050).to_string(), "$10.50");
        assert_eq!(Money::from_cents(-1050).to_string(), "-$10.50");
        assert_eq!(Money::from_cents(5).to_string(), "$0.05");
        assert_eq!(Money::from_units(72_727).format_with_symbol("€"), "€72727.00");
    }

    #[test]
    fn test_parse_accepted_forms() {
        let cases = [
            ("1500", 150_000),
            ("1500.5", 150_050),
            ("1500.50", 150_050),
            ("$1500", 150_000),
            ("$ 1500", 150_000),
            ("1,500,000", 150_000_000),
            ("$1,500.25", 150_025),
            (".75", 75),
            ("-20.75", -2075),
            ("  42  ", 4200),
        ];
        for (input, cents) in cases {
            assert_eq!(Money::parse(input).unwrap().cents(), cents, "{}", input);
        }
    }

    #[test]
    fn test_parse_rejections() {
        for input in ["", "$", ".", "abc", "1.2.3", "10.x5", "1,50", "15,00,000", "1 500"] {
            assert!(
                matches!(Money::parse(input), Err(MoneyParseError::InvalidFormat(_))),
                "{}",
                input
            );
        }
        assert!(matches!(
            Money::parse("10.505"),
            Err(MoneyParseError::TooPrecise(_))
        ));
        assert!(matches!(
            Money::parse("99999999999999999999"),
            Err(MoneyParseError::Overflow(_))
        ));
    }

    #[test]
    fn test_sum() {
        let amounts = [Money::from_units(1), Money::from_units(2), Money::from_cents(50)];
        let by_ref: Money = amounts.iter().sum();
        let by_value: Money = amounts.into_iter().sum();
        assert_eq!(by_ref, Money::from_cents(350));
        assert_eq!(by_ref, by_value);
    }

    #[test]
    fn test_totals_saturate_instead_of_overflowing() {
        let huge = Money::parse("92,233,720,368,547,758").unwrap();
        assert_eq!(huge + huge, Money::from_cents(i64::MAX));

        let total: Money = [huge, huge, Money::from_units(1)].iter().sum();
        assert_eq!(total, Money::from_cents(i64::MAX));
        assert!(total.as_units().is_finite());

        let low = Money::from_cents(i64::MIN + 1);
        assert_eq!(low + Money::from_cents(-5), Money::from_cents(i64::MIN));
    }

    #[test]
    fn test_serialized_as_cents() {
        assert_eq!(serde_json::to_string(&Money::from_cents(1050)).unwrap(), "1050");
        let back: Money = serde_json::from_str("1050").unwrap();
        assert_eq!(back, Money::from_cents(1050));
    }
}
