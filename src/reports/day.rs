//! Day detail: the status of one calendar day and the transactions on it.

use chrono::NaiveDate;

use crate::cycle::DailyStatus;
use crate::error::CycleResult;
use crate::models::{BudgetPeriod, Transaction};
use crate::services::{CycleService, TransactionService};
use crate::storage::Storage;

#[derive(Debug, Clone)]
pub struct DayReport {
    pub period_name: String,
    pub status: DailyStatus,
    pub transactions: Vec<Transaction>,
}

impl DayReport {
    pub fn generate(
        storage: &Storage,
        period: &BudgetPeriod,
        day: NaiveDate,
        today: NaiveDate,
    ) -> CycleResult<Self> {
        let status = CycleService::new(storage).daily_status(period, day, today)?;
        let transactions = TransactionService::new(storage).list_for_day(day)?;

        Ok(Self {
            period_name: period.name.clone(),
            status,
            transactions,
        })
    }
}
