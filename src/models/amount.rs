//! Amount type for representing spending in whole currency units
//!
//! Amounts are stored as `i64` in the smallest unit the tracker displays, so
//! sums are exact and only derived averages ever need rounding. A single
//! record is capped at `Amount::MAX`, which leaves millions of records of
//! headroom before any total could leave the `i64` range.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign};

use crate::error::{SpendexError, SpendexResult};

/// A monetary amount in whole currency units
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Amount(i64);

impl Amount {
    /// Largest amount a single record may carry
    pub const MAX: Amount = Amount(1_000_000_000_000);

    /// Create an amount from a raw unit count
    pub const fn new(units: i64) -> Self {
        Self(units)
    }

    /// Create a zero amount
    pub const fn zero() -> Self {
        Self(0)
    }

    /// Get the raw unit count
    pub const fn units(&self) -> i64 {
        self.0
    }

    /// Check if the amount is strictly positive
    pub const fn is_positive(&self) -> bool {
        self.0 > 0
    }

    /// Parse a user-supplied amount
    ///
    /// Accepts an optional currency symbol prefix and `,` thousands
    /// separators ("1,250", "₹300"). Letters, fractions and anything else
    /// are rejected.
    pub fn parse(s: &str) -> SpendexResult<Self> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(SpendexError::InvalidAmount("amount is required".into()));
        }

        let not_a_number = || SpendexError::InvalidAmount(format!("'{}' is not a whole number", trimmed));

        // Only a leading currency sign may precede the number
        let unsigned = trimmed.trim_start_matches(is_currency_sign).trim_start();
        let (negative, body) = match unsigned.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, unsigned.strip_prefix('+').unwrap_or(unsigned)),
        };

        let digits = body.replace(',', "");
        if digits.is_empty() || !digits.chars().all(|c| c.is_ascii_digit()) || body.starts_with(',') {
            return Err(not_a_number());
        }

        let magnitude: i64 = digits.parse().map_err(|_| not_a_number())?;
        Ok(Self(if negative { -magnitude } else { magnitude }))
    }

    /// Parse and require a strictly positive amount
    pub fn parse_positive(s: &str) -> SpendexResult<Self> {
        let amount = Self::parse(s)?;
        amount.ensure_positive()?;
        Ok(amount)
    }

    /// Fail with `InvalidAmount` unless `0 < amount <= Amount::MAX`
    pub fn ensure_positive(&self) -> SpendexResult<()> {
        if !self.is_positive() {
            return Err(SpendexError::InvalidAmount(format!(
                "amount must be greater than zero, got {}",
                self.0
            )));
        }
        if *self > Self::MAX {
            return Err(SpendexError::InvalidAmount(format!(
                "amount {} exceeds the maximum of {}",
                self.0,
                Self::MAX.0
            )));
        }
        Ok(())
    }

    /// Format with `,` thousands separators ("1,234,567")
    pub fn format_grouped(&self) -> String {
        let digits = self.0.unsigned_abs().to_string();
        let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
        for (i, ch) in digits.chars().enumerate() {
            if i > 0 && (digits.len() - i) % 3 == 0 {
                grouped.push(',');
            }
            grouped.push(ch);
        }
        if self.0 < 0 {
            format!("-{}", grouped)
        } else {
            grouped
        }
    }

    /// Format with a currency symbol, optionally grouping thousands
    pub fn format_with_symbol(&self, symbol: &str, grouped: bool) -> String {
        if grouped {
            format!("{}{}", symbol, self.format_grouped())
        } else {
            format!("{}{}", symbol, self.0)
        }
    }
}

fn is_currency_sign(c: char) -> bool {
    matches!(c, '$' | '€' | '£' | '¥' | '₹' | '₩' | '₽' | '₺' | '₱' | '฿' | '₫' | '₪' | '₦')
}

impl Default for Amount {
    fn default() -> Self {
        Self::zero()
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl Add for Amount {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self(self.0.saturating_add(other.0))
    }
}

impl AddAssign for Amount {
    fn add_assign(&mut self, other: Self) {
        self.0 = self.0.saturating_add(other.0);
    }
}

impl Sum for Amount {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Amount::zero(), |acc, a| acc + a)
    }
}

impl<'a> Sum<&'a Amount> for Amount {
    fn sum<I: Iterator<Item = &'a Amount>>(iter: I) -> Self {
        iter.copied().sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_plain_and_decorated() {
        assert_eq!(Amount::parse("250").unwrap(), Amount::new(250));
        assert_eq!(Amount::parse("  42 ").unwrap(), Amount::new(42));
        assert_eq!(Amount::parse("1,250").unwrap(), Amount::new(1250));
        assert_eq!(Amount::parse("₹300").unwrap(), Amount::new(300));
        assert_eq!(Amount::parse("-5").unwrap(), Amount::new(-5));
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!(Amount::parse("").unwrap_err().is_invalid_amount());
        assert!(Amount::parse("abc").unwrap_err().is_invalid_amount());
        assert!(Amount::parse("12.50").unwrap_err().is_invalid_amount());
        assert!(Amount::parse("abc12").unwrap_err().is_invalid_amount());
        assert!(Amount::parse("x5").unwrap_err().is_invalid_amount());
        assert!(Amount::parse("12abc").unwrap_err().is_invalid_amount());
        assert!(Amount::parse("₹").unwrap_err().is_invalid_amount());
        assert!(Amount::parse("--5").unwrap_err().is_invalid_amount());
        assert!(Amount::parse(",5").unwrap_err().is_invalid_amount());
    }

    #[test]
    fn test_parse_currency_prefixes() {
        assert_eq!(Amount::parse("$ 40").unwrap(), Amount::new(40));
        assert_eq!(Amount::parse("€1,000").unwrap(), Amount::new(1000));
        assert_eq!(Amount::parse("+7").unwrap(), Amount::new(7));
    }

    #[test]
    fn test_parse_positive() {
        assert!(Amount::parse_positive("1").is_ok());
        assert!(Amount::parse_positive("0").unwrap_err().is_invalid_amount());
        assert!(Amount::parse_positive("-10").unwrap_err().is_invalid_amount());
    }

    #[test]
    fn test_parse_positive_enforces_maximum() {
        assert_eq!(Amount::parse_positive("1000000000000").unwrap(), Amount::MAX);
        assert!(Amount::parse_positive("1000000000001").unwrap_err().is_invalid_amount());
        assert!(Amount::parse_positive("9223372036854775807").unwrap_err().is_invalid_amount());
        assert!(Amount::parse("99999999999999999999").unwrap_err().is_invalid_amount());
    }

    #[test]
    fn test_sum_saturates_instead_of_wrapping() {
        let total: Amount = [Amount::new(i64::MAX), Amount::new(1)].iter().sum();
        assert_eq!(total, Amount::new(i64::MAX));
    }

    #[test]
    fn test_format_grouped() {
        assert_eq!(Amount::new(0).format_grouped(), "0");
        assert_eq!(Amount::new(999).format_grouped(), "999");
        assert_eq!(Amount::new(1000).format_grouped(), "1,000");
        assert_eq!(Amount::new(1234567).format_grouped(), "1,234,567");
        assert_eq!(Amount::new(-45000).format_grouped(), "-45,000");
    }

    #[test]
    fn test_format_with_symbol() {
        assert_eq!(Amount::new(12500).format_with_symbol("₹", true), "₹12,500");
        assert_eq!(Amount::new(12500).format_with_symbol("₹", false), "₹12500");
    }

    #[test]
    fn test_sum() {
        let amounts = [Amount::new(100), Amount::new(50), Amount::new(200)];
        let total: Amount = amounts.iter().sum();
        assert_eq!(total, Amount::new(350));
    }
}
