//! Demo data seeding
//!
//! Fills an empty data directory with a cycle that started 15 days ago, one
//! salary and a spread of everyday expenses, so every view has something to
//! show.

use chrono::{Duration, NaiveDate};

use crate::config::settings::Settings;
use crate::error::{CycleError, CycleResult};
use crate::models::period::end_of_month;
use crate::models::{Money, TransactionType};
use crate::services::{
    CreatePeriodInput, CreateTransactionInput, PeriodService, TransactionFilter,
    TransactionService,
};
use crate::storage::Storage;

const DEMO_PERIOD_NAME: &str = "Demo Cycle";
const DEMO_INCOME: i64 = 45_000;
const DEMO_FIXED: i64 = 12_850;

/// (days ago, amount, category, description)
const DEMO_EXPENSES: &[(i64, i64, &str, &str)] = &[
    (14, 12_000, "Housing & Rent", "Rent"),
    (12, 850, "Bills", "Electricity"),
    (10, 1_250, "Groceries", "Weekly shopping"),
    (8, 350, "Transportation", "Fuel"),
    (5, 1_400, "Entertainment", "Cinema and dinner"),
    (2, 450, "Clothing", "T-shirt"),
    (1, 220, "Groceries", "Top-up shopping"),
];

/// What was written by [`seed_demo_data`]
#[derive(Debug, Clone)]
pub struct DemoSummary {
    pub period_name: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub transactions_created: usize,
    pub removed_periods: usize,
    pub removed_transactions: usize,
}

/// Seed demo data relative to `today`.
///
/// Refuses when periods or transactions already exist, unless `force` is
/// set, in which case existing data is removed first.
pub fn seed_demo_data(
    storage: &Storage,
    settings: &mut Settings,
    today: NaiveDate,
    force: bool,
) -> CycleResult<DemoSummary> {
    let existing_periods = storage.periods.count()?;
    let existing_transactions = storage.transactions.count()?;

    if existing_periods + existing_transactions > 0 {
        if !force {
            return Err(CycleError::Validation(format!(
                "Data already exists ({} periods, {} transactions). Use --force to replace it",
                existing_periods, existing_transactions
            )));
        }
        clear_all(storage, settings)?;
        tracing::warn!(
            periods = existing_periods,
            transactions = existing_transactions,
            "removed existing data before seeding demo"
        );
    }

    let start_date = today - Duration::days(15);
    let end_date = end_of_month(today);

    let period = PeriodService::new(storage).create(
        CreatePeriodInput {
            name: DEMO_PERIOD_NAME.to_string(),
            start_date,
            end_date,
            monthly_income: Money::from_units(DEMO_INCOME),
            fixed_expenses: Money::from_units(DEMO_FIXED),
            activate: true,
        },
        settings,
    )?;

    let transactions = TransactionService::new(storage);
    transactions.create(CreateTransactionInput {
        kind: TransactionType::Income,
        amount: Money::from_units(DEMO_INCOME),
        category: Some("Salary".into()),
        date: today - Duration::days(14),
        description: Some("Monthly salary".into()),
    })?;

    for (days_ago, units, category, description) in DEMO_EXPENSES {
        transactions.create(CreateTransactionInput {
            kind: TransactionType::Expense,
            amount: Money::from_units(*units),
            category: Some((*category).to_string()),
            date: today - Duration::days(*days_ago),
            description: Some((*description).to_string()),
        })?;
    }

    if !settings.setup_completed {
        settings.setup_completed = true;
        settings.save(storage.paths())?;
    }

    tracing::info!(period = %period.name, "demo data seeded");

    Ok(DemoSummary {
        period_name: period.name,
        start_date,
        end_date,
        transactions_created: DEMO_EXPENSES.len() + 1,
        removed_periods: if force { existing_periods } else { 0 },
        removed_transactions: if force { existing_transactions } else { 0 },
    })
}

fn clear_all(storage: &Storage, settings: &mut Settings) -> CycleResult<()> {
    let periods = PeriodService::new(storage);
    for period in periods.list()? {
        periods.delete(period.id, settings)?;
    }

    let transactions = TransactionService::new(storage);
    for txn in transactions.list(TransactionFilter::new())? {
        transactions.delete(txn.id)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::paths::CyclePaths;
    use crate::cycle::compute_cycle_stats;
    use tempfile::TempDir;

    fn create_test_storage() -> (TempDir, Storage) {
        let temp_dir = TempDir::new().unwrap();
        let paths = CyclePaths::with_base_dir(temp_dir.path().to_path_buf());
        let mut storage = Storage::new(paths).unwrap();
        storage.load_all().unwrap();
        (temp_dir, storage)
    }

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 1, 20).unwrap()
    }

    #[test]
    fn test_seed_creates_active_period_and_transactions() {
        let (_temp, storage) = create_test_storage();
        let mut settings = Settings::default();

        let summary = seed_demo_data(&storage, &mut settings, today(), false).unwrap();

        assert_eq!(summary.start_date, NaiveDate::from_ymd_opt(2025, 1, 5).unwrap());
        assert_eq!(summary.end_date, NaiveDate::from_ymd_opt(2025, 1, 31).unwrap());
        assert_eq!(summary.transactions_created, 8);
        assert_eq!(storage.transactions.count().unwrap(), 8);
        assert!(settings.active_period_id.is_some());
        assert!(settings.setup_completed);
    }

    #[test]
    fn test_seeded_stats() {
        let (_temp, storage) = create_test_storage();
        let mut settings = Settings::default();
        seed_demo_data(&storage, &mut settings, today(), false).unwrap();

        let period = storage
            .periods
            .get(settings.active_period_id.unwrap())
            .unwrap()
            .unwrap();
        let txns = storage.transactions.get_all().unwrap();
        let stats = compute_cycle_stats(&period, &txns, today()).unwrap();

        // 45000 fixed + 45000 salary, 12850 fixed + 16520 spent
        assert_eq!(stats.total_income, Money::from_units(90_000));
        assert_eq!(stats.total_expense, Money::from_units(29_370));
        assert_eq!(stats.days_remaining, 12);
    }

    #[test]
    fn test_refuses_existing_data_without_force() {
        let (_temp, storage) = create_test_storage();
        let mut settings = Settings::default();
        seed_demo_data(&storage, &mut settings, today(), false).unwrap();

        let err = seed_demo_data(&storage, &mut settings, today(), false).unwrap_err();
        assert!(err.is_validation());

        let summary = seed_demo_data(&storage, &mut settings, today(), true).unwrap();
        assert_eq!(summary.removed_periods, 1);
        assert_eq!(summary.removed_transactions, 8);
        assert_eq!(storage.periods.count().unwrap(), 1);
        assert_eq!(storage.transactions.count().unwrap(), 8);
    }
}
