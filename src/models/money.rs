//! Money type for representing currency amounts
//!
//! Internally stores amounts in cents (i64) to avoid floating-point precision
//! issues. Provides safe arithmetic operations and formatting.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, AddAssign, Neg, Sub, SubAssign};

/// Represents a monetary amount stored as cents (hundredths of the currency unit)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Money(i64);

impl Money {
    /// Largest amount a single transaction or period figure may hold
    /// (one trillion units). Sums of such amounts stay far from `i64::MAX`.
    pub const MAX_AMOUNT: Money = Money(100_000_000_000_000);

    /// Create a Money amount from cents
    ///
    /// # Examples
    /// ```
    /// use cycle_budget::models::Money;
    /// let amount = Money::from_cents(1050); // 10.50
    /// assert_eq!(amount.units(), 10);
    /// ```
    pub const fn from_cents(cents: i64) -> Self {
        Self(cents)
    }

    /// Create a Money amount from whole currency units
    ///
    /// # Examples
    /// ```
    /// use cycle_budget::models::Money;
    /// assert_eq!(Money::from_units(45000).cents(), 4_500_000);
    /// ```
    pub const fn from_units(units: i64) -> Self {
        Self(units * 100)
    }

    pub const fn zero() -> Self {
        Self(0)
    }

    /// Get the amount in cents
    pub const fn cents(&self) -> i64 {
        self.0
    }

    /// Get the whole units portion (truncated toward zero)
    pub const fn units(&self) -> i64 {
        self.0 / 100
    }

    /// Get the cents portion (0-99)
    pub const fn cents_part(&self) -> i64 {
        (self.0 % 100).abs()
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

    pub const fn abs(&self) -> Self {
        Self(self.0.abs())
    }

    /// Divide by a positive count, rounding half away from zero to the
    /// nearest cent. A divisor below 1 is treated as 1.
    ///
    /// # Examples
    /// ```
    /// use cycle_budget::models::Money;
    /// assert_eq!(Money::from_cents(1000).div_rounded(3).cents(), 333);
    /// assert_eq!(Money::from_cents(-1000).div_rounded(3).cents(), -333);
    /// assert_eq!(Money::from_cents(500).div_rounded(0).cents(), 500);
    /// ```
    pub fn div_rounded(&self, divisor: i64) -> Self {
        let divisor = divisor.max(1);
        let quotient = self.0 / divisor;
        let remainder = self.0 % divisor;
        if remainder.abs() * 2 >= divisor {
            Self(quotient + self.0.signum())
        } else {
            Self(quotient)
        }
    }

    /// This amount as a percentage of `whole`; 0.0 when `whole` is not positive
    pub fn percent_of(&self, whole: Money) -> f64 {
        if whole.0 <= 0 {
            0.0
        } else {
            self.0 as f64 / whole.0 as f64 * 100.0
        }
    }

    /// Parse a money amount from a string
    ///
    /// Accepts formats: "10.50", "-10.50", "$10.50", "10", "1_250", "1,250.50"
    pub fn parse(s: &str) -> Result<Self, MoneyParseError> {
        let input = s.trim();
        let cleaned: String = input
            .chars()
            .filter(|c| *c != '_' && *c != ',')
            .collect();

        let (negative, s) = match cleaned.strip_prefix('-') {
            Some(stripped) => (true, stripped),
            None => (false, cleaned.as_str()),
        };

        // Remove a leading currency symbol if present
        let s = s.trim_start_matches(|c: char| !c.is_ascii_digit() && c != '.');

        let invalid = || MoneyParseError::InvalidFormat(input.to_string());

        let (units_str, cents_str) = match s.split_once('.') {
            Some((units, cents)) => (units, Some(cents)),
            None => (s, None),
        };

        if units_str.is_empty() && cents_str.map_or(true, str::is_empty) {
            return Err(invalid());
        }

        let units = parse_digits(units_str).ok_or_else(invalid)?;

        // Pad or truncate cents to 2 digits
        let cents = match cents_str {
            None => 0,
            Some(fraction) => {
                if !fraction.chars().all(|c| c.is_ascii_digit()) {
                    return Err(invalid());
                }
                let mut digits = fraction.chars().take(2);
                let tens = digits.next().and_then(|c| c.to_digit(10)).unwrap_or(0);
                let ones = digits.next().and_then(|c| c.to_digit(10)).unwrap_or(0);
                i64::from(tens * 10 + ones)
            }
        };

        let cents = units
            .checked_mul(100)
            .and_then(|c| c.checked_add(cents))
            .ok_or_else(invalid)?;

        Ok(Self(if negative { -cents } else { cents }))
    }

    /// Format with a currency symbol and thousands separators
    pub fn format_with_symbol(&self, symbol: &str) -> String {
        let sign = if self.is_negative() { "-" } else { "" };
        format!(
            "{}{}{}.{:02}",
            sign,
            symbol,
            group_thousands(self.units().unsigned_abs()),
            self.cents_part()
        )
    }
}

/// Parse a run of ASCII digits; an empty run is 0
fn parse_digits(digits: &str) -> Option<i64> {
    if digits.is_empty() {
        return Some(0);
    }
    if !digits.chars().all(|c| c.is_ascii_digit()) {
        return None;
    }
    digits.parse().ok()
}

fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

impl Default for Money {
    fn default() -> Self {
        Self::zero()
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_negative() {
            write!(f, "-{}.{:02}", self.units().abs(), self.cents_part())
        } else {
            write!(f, "{}.{:02}", self.units(), self.cents_part())
        }
    }
}

impl Add for Money {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self(self.0 + other.0)
    }
}

impl AddAssign for Money {
    fn add_assign(&mut self, other: Self) {
        self.0 += other.0;
    }
}

impl Sub for Money {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        Self(self.0 - other.0)
    }
}

impl SubAssign for Money {
    fn sub_assign(&mut self, other: Self) {
        self.0 -= other.0;
    }
}

impl Neg for Money {
    type Output = Self;

    fn neg(self) -> Self {
        Self(-self.0)
    }
}

impl std::iter::Sum for Money {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Money::zero(), |acc, m| acc + m)
    }
}

impl<'a> std::iter::Sum<&'a Money> for Money {
    fn sum<I: Iterator<Item = &'a Money>>(iter: I) -> Self {
        iter.fold(Money::zero(), |acc, m| acc + *m)
    }
}

/// Error type for money parsing
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MoneyParseError {
    #[error("Invalid money format: {0}")]
    InvalidFormat(String),
}
