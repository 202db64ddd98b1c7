//! Budget period representation
//!
//! A period is a user-defined, inclusive date range carrying a fixed income
//! and a fixed expense baseline. Discretionary transactions dated inside the
//! range are tracked against it.

use chrono::{DateTime, Datelike, Duration, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::PeriodId;
use super::money::Money;

/// A budget period (cycle)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BudgetPeriod {
    pub id: PeriodId,

    pub name: String,

    /// First day of the period (inclusive)
    pub start_date: NaiveDate,

    /// Last day of the period (inclusive)
    pub end_date: NaiveDate,

    /// Fixed recurring income for the period
    pub monthly_income: Money,

    /// Fixed, pre-committed costs for the period (rent, bills, loans)
    pub fixed_expenses: Money,

    pub created_at: DateTime<Utc>,

    pub updated_at: DateTime<Utc>,
}

impl BudgetPeriod {
    /// Create a new period
    pub fn new(
        name: impl Into<String>,
        start_date: NaiveDate,
        end_date: NaiveDate,
        monthly_income: Money,
        fixed_expenses: Money,
    ) -> Self {
        let now = Utc::now();
        Self {
            id: PeriodId::new(),
            name: name.into(),
            start_date,
            end_date,
            monthly_income,
            fixed_expenses,
            created_at: now,
            updated_at: now,
        }
    }

    /// Create a period covering one calendar month
    pub fn for_month(
        name: impl Into<String>,
        year: i32,
        month: u32,
        monthly_income: Money,
        fixed_expenses: Money,
    ) -> Option<Self> {
        let (start, end) = month_bounds(year, month)?;
        Some(Self::new(name, start, end, monthly_income, fixed_expenses))
    }

    /// Check if a calendar day falls within this period (both ends inclusive)
    pub fn contains(&self, date: NaiveDate) -> bool {
        date >= self.start_date && date <= self.end_date
    }

    /// Number of days in the period, counting both ends
    pub fn length_days(&self) -> i64 {
        ((self.end_date - self.start_date).num_days() + 1).max(0)
    }

    /// Income left once fixed costs are taken out
    pub fn net_budget(&self) -> Money {
        self.monthly_income - self.fixed_expenses
    }

    /// Check whether two periods share at least one day
    pub fn overlaps(&self, other: &BudgetPeriod) -> bool {
        self.start_date <= other.end_date && other.start_date <= self.end_date
    }

    /// Mark the period as modified
    pub fn touch(&mut self) {
        self.updated_at = Utc::now();
    }

    /// Validate the period
    pub fn validate(&self) -> Result<(), PeriodValidationError> {
        if self.name.trim().is_empty() {
            return Err(PeriodValidationError::EmptyName);
        }

        if self.name.len() > 100 {
            return Err(PeriodValidationError::NameTooLong(self.name.len()));
        }

        if self.end_date < self.start_date {
            return Err(PeriodValidationError::InvertedRange {
                start: self.start_date,
                end: self.end_date,
            });
        }

        if self.monthly_income.is_negative() {
            return Err(PeriodValidationError::NegativeAmount("income"));
        }

        if self.fixed_expenses.is_negative() {
            return Err(PeriodValidationError::NegativeAmount("fixed expenses"));
        }

        if self.monthly_income > Money::MAX_AMOUNT {
            return Err(PeriodValidationError::AmountTooLarge("income"));
        }

        if self.fixed_expenses > Money::MAX_AMOUNT {
            return Err(PeriodValidationError::AmountTooLarge("fixed expenses"));
        }

        Ok(())
    }
}

impl fmt::Display for BudgetPeriod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({}..{})", self.name, self.start_date, self.end_date)
    }
}

/// First and last day of a calendar month
pub fn month_bounds(year: i32, month: u32) -> Option<(NaiveDate, NaiveDate)> {
    let start = NaiveDate::from_ymd_opt(year, month, 1)?;
    let next_month = if month == 12 {
        NaiveDate::from_ymd_opt(year + 1, 1, 1)?
    } else {
        NaiveDate::from_ymd_opt(year, month + 1, 1)?
    };
    Some((start, next_month - Duration::days(1)))
}

/// Last day of the month containing `date`
pub fn end_of_month(date: NaiveDate) -> NaiveDate {
    month_bounds(date.year(), date.month())
        .map(|(_, end)| end)
        .unwrap_or(date)
}

/// Parse a `YYYY-MM-DD..YYYY-MM-DD` range
pub fn parse_date_range(s: &str) -> Result<(NaiveDate, NaiveDate), PeriodValidationError> {
    let invalid = || PeriodValidationError::InvalidRangeFormat(s.to_string());
    let (start, end) = s.trim().split_once("..").ok_or_else(invalid)?;
    let start = NaiveDate::parse_from_str(start.trim(), "%Y-%m-%d").map_err(|_| invalid())?;
    let end = NaiveDate::parse_from_str(end.trim(), "%Y-%m-%d").map_err(|_| invalid())?;
    Ok((start, end))
}

/// Parse a `YYYY-MM` month reference
pub fn parse_month(s: &str) -> Option<(i32, u32)> {
    let (year, month) = s.trim().split_once('-')?;
    let year: i32 = year.parse().ok()?;
    let month: u32 = month.parse().ok()?;
    (1..=12).contains(&month).then_some((year, month))
}

/// Validation errors for budget periods
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PeriodValidationError {
    #[error("Period name cannot be empty")]
    EmptyName,

    #[error("Period name too long ({0} chars, max 100)")]
    NameTooLong(usize),

    #[error("Period end date {end} is before its start date {start}")]
    InvertedRange { start: NaiveDate, end: NaiveDate },

    #[error("Period {0} cannot be negative")]
    NegativeAmount(&'static str),

    #[error("Period {0} exceeds the maximum of {max}", max = Money::MAX_AMOUNT)]
    AmountTooLarge(&'static str),

    #[error("Invalid date range '{0}'. Use YYYY-MM-DD..YYYY-MM-DD")]
    InvalidRangeFormat(String),
}
