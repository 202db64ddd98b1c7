//! Derived values produced by the cycle calculator
//!
//! None of these are stored; they are recomputed from a period and the
//! transaction list whenever they are needed.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::models::{Money, PeriodId};

/// Dashboard statistics for a period as of one calendar day
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CycleStats {
    /// Fixed income plus in-cycle income transactions
    pub total_income: Money,
    /// Fixed expenses plus in-cycle expense transactions
    pub total_expense: Money,
    /// `total_income - total_expense`
    pub balance: Money,
    /// Income left after fixed costs; the pool the daily limit draws from
    pub disposable_income: Money,
    /// In-cycle expenses dated strictly before `as_of`
    pub spent_before: Money,
    /// `disposable_income - spent_before`
    pub budget_at_start_of_day: Money,
    /// What may be spent per remaining day, rounded to the cent
    pub daily_limit: Money,
    /// Days left including `as_of`; the full length before the period starts
    pub days_remaining: i64,
    pub as_of: NaiveDate,
    pub cycle_start_date: NaiveDate,
    pub cycle_end_date: NaiveDate,
}

/// Classification of a single calendar day
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DayStatus {
    /// Spending stayed within the limit
    Success,
    /// Spending exceeded the limit by at most 20%
    Warning,
    /// Spending exceeded the limit by more than 20%, or the cycle is overspent
    Danger,
    /// Outside the period, or not yet happened
    Neutral,
}

impl DayStatus {
    /// Whether this status carries a judgement about the day's spending
    pub fn is_judged(&self) -> bool {
        !matches!(self, Self::Neutral)
    }
}

impl fmt::Display for DayStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Success => write!(f, "success"),
            Self::Warning => write!(f, "warning"),
            Self::Danger => write!(f, "danger"),
            Self::Neutral => write!(f, "neutral"),
        }
    }
}

/// Spending status for one calendar day
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailyStatus {
    pub date: NaiveDate,
    /// The allowance for the day; `None` outside the period
    pub limit: Option<Money>,
    /// Expenses dated exactly on this day
    pub spent: Money,
    pub status: DayStatus,
    /// Budget left in the cycle after this day's spending; `None` outside the period
    pub remaining_in_cycle: Option<Money>,
}

/// Totals of one period, as shown in the history view
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CycleSummary {
    pub period_id: PeriodId,
    pub name: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub total_income: Money,
    pub total_expense: Money,
    pub balance: Money,
    /// `balance / total_income * 100`; 0 when there is no income
    pub savings_rate: f64,
}
