//! History Report
//!
//! One row per budget period with its totals and savings rate.

use serde::Serialize;

use crate::cycle::CycleSummary;
use crate::error::CycleResult;
use crate::models::Money;
use crate::services::CycleService;
use crate::storage::Storage;

#[derive(Debug, Clone, Serialize)]
pub struct HistoryReport {
    /// Newest start date first
    pub cycles: Vec<CycleSummary>,
    pub total_income: Money,
    pub total_expense: Money,
    pub total_balance: Money,
}

impl HistoryReport {
    pub fn generate(storage: &Storage) -> CycleResult<Self> {
        let cycles = CycleService::new(storage).history()?;
        Ok(Self::from_summaries(cycles))
    }

    pub fn from_summaries(cycles: Vec<CycleSummary>) -> Self {
        let total_income = cycles.iter().map(|c| c.total_income).sum();
        let total_expense = cycles.iter().map(|c| c.total_expense).sum();
        let total_balance = cycles.iter().map(|c| c.balance).sum();

        Self {
            cycles,
            total_income,
            total_expense,
            total_balance,
        }
    }

    /// Savings rate over all cycles together; 0 without income
    pub fn overall_savings_rate(&self) -> f64 {
        self.total_balance.percent_of(self.total_income)
    }

    /// The cycle with the highest savings rate
    pub fn best_cycle(&self) -> Option<&CycleSummary> {
        self.cycles
            .iter()
            .max_by(|a, b| a.savings_rate.total_cmp(&b.savings_rate))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::PeriodId;
    use chrono::NaiveDate;

    fn summary(name: &str, income: i64, expense: i64) -> CycleSummary {
        let income = Money::from_units(income);
        let expense = Money::from_units(expense);
        let balance = income - expense;
        let date = NaiveDate::from_ymd_opt(2025, 1, 1).unwrap();
        CycleSummary {
            period_id: PeriodId::new(),
            name: name.to_string(),
            start_date: date,
            end_date: date,
            total_income: income,
            total_expense: expense,
            balance,
            savings_rate: balance.percent_of(income),
        }
    }

    #[test]
    fn test_totals_and_best_cycle() {
        let report = HistoryReport::from_summaries(vec![
            summary("Lean", 1000, 900),
            summary("Good", 1000, 500),
        ]);

        assert_eq!(report.total_income, Money::from_units(2000));
        assert_eq!(report.total_balance, Money::from_units(600));
        assert!((report.overall_savings_rate() - 30.0).abs() < 1e-9);
        assert_eq!(report.best_cycle().unwrap().name, "Good");
    }

    #[test]
    fn test_empty_history() {
        let report = HistoryReport::from_summaries(Vec::new());
        assert_eq!(report.overall_savings_rate(), 0.0);
        assert!(report.best_cycle().is_none());
    }
}
