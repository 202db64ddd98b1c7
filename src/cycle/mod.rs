//! Budget cycle calculator
//!
//! Derives the dashboard statistics, per-day spending status and history
//! summaries from budget periods and the raw transaction list. Every view in
//! the application goes through these functions, so all of them agree on
//! rounding and edge cases:
//!
//! - dates compare as calendar days and both period ends are inclusive
//! - `days_remaining` counts the as-of day itself
//! - the daily limit divides by at least 1, even after the period ended
//! - a period without income has a savings rate of 0
//!
//! The functions here are pure. Callers pass "today" explicitly.

mod ledger;
mod types;

pub use ledger::CycleLedger;
pub use types::{CycleStats, CycleSummary, DailyStatus, DayStatus};

use chrono::NaiveDate;

use crate::error::CycleResult;
use crate::models::{BudgetPeriod, Transaction};

/// Statistics for `period` as of the calendar day `as_of`
///
/// # Errors
///
/// Fails only if the period ends before it starts.
pub fn compute_cycle_stats(
    period: &BudgetPeriod,
    transactions: &[Transaction],
    as_of: NaiveDate,
) -> CycleResult<CycleStats> {
    Ok(CycleLedger::new(period, transactions)?.stats_as_of(as_of))
}

/// Spending status of a single day, as shown in the calendar
///
/// # Errors
///
/// Fails only if the period ends before it starts.
pub fn compute_daily_status(
    day: NaiveDate,
    period: &BudgetPeriod,
    transactions: &[Transaction],
    today: NaiveDate,
) -> CycleResult<DailyStatus> {
    Ok(CycleLedger::new(period, transactions)?.status_for(day, today))
}

/// Totals for every period, newest start date first
///
/// # Errors
///
/// Fails if any period ends before it starts.
pub fn compute_history_summaries(
    periods: &[BudgetPeriod],
    transactions: &[Transaction],
) -> CycleResult<Vec<CycleSummary>> {
    let mut sorted: Vec<&BudgetPeriod> = periods.iter().collect();
    sorted.sort_by(|a, b| b.start_date.cmp(&a.start_date));

    sorted
        .into_iter()
        .map(|period| Ok(CycleLedger::new(period, transactions)?.summary()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Money;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn january() -> BudgetPeriod {
        BudgetPeriod::new(
            "January",
            date(2025, 1, 1),
            date(2025, 1, 31),
            Money::from_units(45000),
            Money::from_units(12850),
        )
    }

    fn groceries() -> Vec<Transaction> {
        vec![Transaction::expense(Money::from_units(1250), date(2025, 1, 10))
            .with_category("Groceries")]
    }

    #[test]
    fn test_mid_cycle_daily_limit() {
        let stats = compute_cycle_stats(&january(), &groceries(), date(2025, 1, 15)).unwrap();

        assert_eq!(stats.disposable_income, Money::from_units(32150));
        assert_eq!(stats.spent_before, Money::from_units(1250));
        assert_eq!(stats.budget_at_start_of_day, Money::from_units(30900));
        assert_eq!(stats.days_remaining, 17);
        // 30900 / 17 = 1817.647...
        assert_eq!(stats.daily_limit, Money::from_cents(181765));
        assert_eq!(stats.total_income, Money::from_units(45000));
        assert_eq!(stats.total_expense, Money::from_units(14100));
        assert_eq!(stats.balance, Money::from_units(30900));
    }

    #[test]
    fn test_transaction_on_end_date_is_included() {
        let mut txns = groceries();
        txns.push(Transaction::expense(Money::from_units(500), date(2025, 1, 31)));
        txns.push(Transaction::income(Money::from_units(700), date(2025, 1, 31)));
        txns.push(Transaction::income(Money::from_units(900), date(2025, 2, 1)));

        let stats = compute_cycle_stats(&january(), &txns, date(2025, 1, 15)).unwrap();
        assert_eq!(stats.total_expense, Money::from_units(12850 + 1250 + 500));
        assert_eq!(stats.total_income, Money::from_units(45000 + 700));
    }

    #[test]
    fn test_before_start_uses_full_length() {
        let stats = compute_cycle_stats(&january(), &groceries(), date(2024, 12, 20)).unwrap();

        assert_eq!(stats.days_remaining, 31);
        assert_eq!(stats.spent_before, Money::zero());
        // 32150 / 31 = 1037.096...
        assert_eq!(stats.daily_limit, Money::from_cents(103710));
    }

    #[test]
    fn test_after_end_clamps_days_and_divisor() {
        let stats = compute_cycle_stats(&january(), &groceries(), date(2025, 2, 10)).unwrap();

        assert_eq!(stats.days_remaining, 0);
        assert_eq!(stats.spent_before, Money::from_units(1250));
        assert_eq!(stats.daily_limit, Money::from_units(30900));
    }

    #[test]
    fn test_last_day_has_one_day_remaining() {
        let stats = compute_cycle_stats(&january(), &groceries(), date(2025, 1, 31)).unwrap();
        assert_eq!(stats.days_remaining, 1);
        assert_eq!(stats.daily_limit, Money::from_units(30900));
    }

    #[test]
    fn test_balance_identity_holds() {
        let mut txns = groceries();
        txns.push(Transaction::income(Money::from_cents(333), date(2025, 1, 3)));
        txns.push(Transaction::expense(Money::from_cents(777), date(2025, 1, 4)));

        for day in 1..=31 {
            let stats = compute_cycle_stats(&january(), &txns, date(2025, 1, day)).unwrap();
            assert_eq!(stats.total_income - stats.total_expense, stats.balance);
            assert!(stats.days_remaining >= 0);
        }
    }

    #[test]
    fn test_empty_transactions() {
        let stats = compute_cycle_stats(&january(), &[], date(2025, 1, 1)).unwrap();
        assert_eq!(stats.total_expense, Money::from_units(12850));
        assert_eq!(stats.days_remaining, 31);
    }

    #[test]
    fn test_overspent_period_is_danger() {
        let period = BudgetPeriod::new(
            "Tight",
            date(2025, 1, 1),
            date(2025, 1, 31),
            Money::from_units(1000),
            Money::from_units(800),
        );
        let txns = vec![
            Transaction::expense(Money::from_units(500), date(2025, 1, 5)),
            Transaction::expense(Money::from_units(10), date(2025, 1, 10)),
        ];

        let stats = compute_cycle_stats(&period, &txns, date(2025, 1, 10)).unwrap();
        assert!(stats.balance.is_negative());
        assert!(stats.daily_limit.is_negative());

        let status = compute_daily_status(date(2025, 1, 10), &period, &txns, date(2025, 1, 20))
            .unwrap();
        assert_eq!(status.status, DayStatus::Danger);
        assert_eq!(status.spent, Money::from_units(10));
    }

    #[test]
    fn test_days_outside_period_are_never_judged() {
        let period = january();
        let txns = vec![
            Transaction::expense(Money::from_units(99999), date(2024, 12, 31)),
            Transaction::expense(Money::from_units(99999), date(2025, 2, 1)),
        ];

        for day in [date(2024, 12, 31), date(2025, 2, 1), date(2023, 6, 1)] {
            let status = compute_daily_status(day, &period, &txns, date(2026, 1, 1)).unwrap();
            assert!(!status.status.is_judged());
            assert_eq!(status.limit, None);
        }
    }

    #[test]
    fn test_future_day_is_neutral_but_has_limit() {
        let status = compute_daily_status(
            date(2025, 1, 20),
            &january(),
            &groceries(),
            date(2025, 1, 15),
        )
        .unwrap();

        assert_eq!(status.status, DayStatus::Neutral);
        assert!(status.limit.is_some());
    }

    #[test]
    fn test_history_sorted_newest_first() {
        let jan = january();
        let feb = BudgetPeriod::for_month(
            "February",
            2025,
            2,
            Money::from_units(1000),
            Money::from_units(250),
        )
        .unwrap();
        let txns = vec![
            Transaction::expense(Money::from_units(250), date(2025, 2, 14)),
            Transaction::income(Money::from_units(500), date(2025, 2, 20)),
        ];

        let history = compute_history_summaries(&[jan, feb], &txns).unwrap();
        assert_eq!(history.len(), 2);
        assert_eq!(history[0].name, "February");
        assert_eq!(history[1].name, "January");

        let feb_summary = &history[0];
        assert_eq!(feb_summary.total_income, Money::from_units(1500));
        assert_eq!(feb_summary.total_expense, Money::from_units(500));
        assert_eq!(feb_summary.balance, Money::from_units(1000));
        assert!((feb_summary.savings_rate - 66.666).abs() < 0.01);
    }

    #[test]
    fn test_zero_income_savings_rate_is_zero() {
        let period = BudgetPeriod::new(
            "No income",
            date(2025, 3, 1),
            date(2025, 3, 31),
            Money::zero(),
            Money::from_units(100),
        );

        let history = compute_history_summaries(&[period], &[]).unwrap();
        assert_eq!(history[0].savings_rate, 0.0);
        assert_eq!(history[0].balance, Money::from_units(-100));
    }
}
