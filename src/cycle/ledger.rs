//! Precomputed view of one period's transactions
//!
//! A `CycleLedger` scans the transaction list once and indexes expenses by
//! day, so a calendar can ask for the status of every day in a month without
//! rescanning the list per cell.

use std::collections::BTreeMap;
use std::ops::Bound;

use chrono::NaiveDate;

use super::types::{CycleStats, CycleSummary, DailyStatus, DayStatus};
use crate::error::{CycleError, CycleResult};
use crate::models::{BudgetPeriod, Money, Transaction};

/// Danger threshold as a ratio: spending above limit * 6/5 is danger
const DANGER_NUMERATOR: i128 = 6;
const DANGER_DENOMINATOR: i128 = 5;

/// A period together with the sums derived from its transactions
#[derive(Debug, Clone)]
pub struct CycleLedger<'a> {
    period: &'a BudgetPeriod,
    cycle_income: Money,
    /// Expenses of every transaction, keyed by calendar day
    daily_expenses: BTreeMap<NaiveDate, Money>,
}

impl<'a> CycleLedger<'a> {
    /// Build a ledger for `period` from an unordered transaction list
    ///
    /// # Errors
    ///
    /// Returns a validation error if the period ends before it starts.
    pub fn new<'t, I>(period: &'a BudgetPeriod, transactions: I) -> CycleResult<Self>
    where
        I: IntoIterator<Item = &'t Transaction>,
    {
        if period.end_date < period.start_date {
            return Err(CycleError::Validation(format!(
                "Period '{}' ends ({}) before it starts ({})",
                period.name, period.end_date, period.start_date
            )));
        }

        let mut cycle_income = Money::zero();
        let mut daily_expenses: BTreeMap<NaiveDate, Money> = BTreeMap::new();

        for txn in transactions {
            if txn.is_expense() {
                *daily_expenses.entry(txn.date).or_default() += txn.amount;
            } else if period.contains(txn.date) {
                cycle_income += txn.amount;
            }
        }

        Ok(Self {
            period,
            cycle_income,
            daily_expenses,
        })
    }

    pub fn period(&self) -> &BudgetPeriod {
        self.period
    }

    /// Income transactions inside the period
    pub fn cycle_income(&self) -> Money {
        self.cycle_income
    }

    /// Expense transactions inside the period
    pub fn cycle_expense(&self) -> Money {
        self.daily_expenses
            .range(self.period.start_date..=self.period.end_date)
            .map(|(_, amount)| *amount)
            .sum()
    }

    pub fn total_income(&self) -> Money {
        self.cycle_income + self.period.monthly_income
    }

    pub fn total_expense(&self) -> Money {
        self.cycle_expense() + self.period.fixed_expenses
    }

    pub fn balance(&self) -> Money {
        self.total_income() - self.total_expense()
    }

    /// Total income minus fixed costs
    pub fn disposable_income(&self) -> Money {
        self.total_income() - self.period.fixed_expenses
    }

    /// Expenses dated exactly on `day`, whether or not it is inside the period
    pub fn spent_on(&self, day: NaiveDate) -> Money {
        self.daily_expenses.get(&day).copied().unwrap_or_default()
    }

    /// In-cycle expenses dated strictly before `as_of`
    pub fn spent_before(&self, as_of: NaiveDate) -> Money {
        if as_of <= self.period.start_date {
            return Money::zero();
        }
        let upper = if as_of > self.period.end_date {
            Bound::Included(self.period.end_date)
        } else {
            Bound::Excluded(as_of)
        };
        self.daily_expenses
            .range((Bound::Included(self.period.start_date), upper))
            .map(|(_, amount)| *amount)
            .sum()
    }

    /// Days left in the period counting `as_of` itself
    ///
    /// Before the period starts this is the full period length; after it ends
    /// it is 0.
    pub fn days_remaining(&self, as_of: NaiveDate) -> i64 {
        if as_of < self.period.start_date {
            return self.period.length_days();
        }
        ((self.period.end_date - as_of).num_days() + 1).max(0)
    }

    /// Budget left to spend at the start of `as_of`
    pub fn budget_at_start_of(&self, as_of: NaiveDate) -> Money {
        self.disposable_income() - self.spent_before(as_of)
    }

    /// Allowance for `as_of`; the divisor is never below 1
    pub fn daily_limit(&self, as_of: NaiveDate) -> Money {
        self.budget_at_start_of(as_of)
            .div_rounded(self.days_remaining(as_of).max(1))
    }

    /// Dashboard statistics as of a calendar day
    pub fn stats_as_of(&self, as_of: NaiveDate) -> CycleStats {
        let total_income = self.total_income();
        let total_expense = self.total_expense();
        let disposable_income = total_income - self.period.fixed_expenses;
        let spent_before = self.spent_before(as_of);
        let budget_at_start_of_day = disposable_income - spent_before;
        let days_remaining = self.days_remaining(as_of);

        CycleStats {
            total_income,
            total_expense,
            balance: total_income - total_expense,
            disposable_income,
            spent_before,
            budget_at_start_of_day,
            daily_limit: budget_at_start_of_day.div_rounded(days_remaining.max(1)),
            days_remaining,
            as_of,
            cycle_start_date: self.period.start_date,
            cycle_end_date: self.period.end_date,
        }
    }

    /// Status of one calendar day, judged against its own daily limit
    ///
    /// Days after `today` are neutral because nothing has been spent yet.
    pub fn status_for(&self, day: NaiveDate, today: NaiveDate) -> DailyStatus {
        let spent = self.spent_on(day);

        if !self.period.contains(day) {
            return DailyStatus {
                date: day,
                limit: None,
                spent,
                status: DayStatus::Neutral,
                remaining_in_cycle: None,
            };
        }

        let budget = self.budget_at_start_of(day);
        let limit = budget.div_rounded(self.days_remaining(day).max(1));

        DailyStatus {
            date: day,
            limit: Some(limit),
            spent,
            status: classify(day, today, spent, limit),
            remaining_in_cycle: Some(budget - spent),
        }
    }

    /// Totals for the history view
    pub fn summary(&self) -> CycleSummary {
        let total_income = self.total_income();
        let balance = self.balance();

        CycleSummary {
            period_id: self.period.id,
            name: self.period.name.clone(),
            start_date: self.period.start_date,
            end_date: self.period.end_date,
            total_income,
            total_expense: self.total_expense(),
            balance,
            savings_rate: balance.percent_of(total_income),
        }
    }
}

fn classify(day: NaiveDate, today: NaiveDate, spent: Money, limit: Money) -> DayStatus {
    if day > today {
        return DayStatus::Neutral;
    }

    let spent_scaled = spent.cents() as i128 * DANGER_DENOMINATOR;
    let danger_line = limit.cents() as i128 * DANGER_NUMERATOR;

    if spent_scaled > danger_line || limit.is_negative() {
        DayStatus::Danger
    } else if spent > limit {
        DayStatus::Warning
    } else {
        DayStatus::Success
    }
}
