//! Cycle service
//!
//! Loads periods and transactions from storage and runs them through the
//! cycle calculator.

use chrono::NaiveDate;

use crate::cycle::{
    compute_cycle_stats, compute_daily_status, compute_history_summaries, CycleStats,
    CycleSummary, DailyStatus,
};
use crate::error::CycleResult;
use crate::models::BudgetPeriod;
use crate::storage::Storage;

/// Service exposing the calculator over stored data
pub struct CycleService<'a> {
    storage: &'a Storage,
}

impl<'a> CycleService<'a> {
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    /// Dashboard statistics for `period` as of `as_of`
    pub fn stats(&self, period: &BudgetPeriod, as_of: NaiveDate) -> CycleResult<CycleStats> {
        let transactions = self.storage.transactions.get_all()?;
        let stats = compute_cycle_stats(period, &transactions, as_of)?;

        tracing::debug!(
            period = %period.name,
            %as_of,
            days_remaining = stats.days_remaining,
            daily_limit = %stats.daily_limit,
            "computed cycle stats"
        );
        Ok(stats)
    }

    /// Status of one day in `period`, judged relative to `today`
    pub fn daily_status(
        &self,
        period: &BudgetPeriod,
        day: NaiveDate,
        today: NaiveDate,
    ) -> CycleResult<DailyStatus> {
        let transactions = self.storage.transactions.get_all()?;
        compute_daily_status(day, period, &transactions, today)
    }

    /// Summaries of every stored period, newest start date first
    pub fn history(&self) -> CycleResult<Vec<CycleSummary>> {
        let periods = self.storage.periods.get_all()?;
        let transactions = self.storage.transactions.get_all()?;
        compute_history_summaries(&periods, &transactions)
    }
}
