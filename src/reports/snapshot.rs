//! Financial Snapshot
//!
//! A compact summary of all recorded money movement: totals, the categories
//! taking most of the spending, the latest transactions, and where the
//! active cycle stands today.

use std::collections::HashMap;

use chrono::NaiveDate;
use serde::Serialize;

use crate::cycle::{compute_cycle_stats, CycleStats};
use crate::display::DisplayFormat;
use crate::error::CycleResult;
use crate::models::{BudgetPeriod, Money, Transaction};
use crate::storage::Storage;

/// Number of expense categories listed
pub const TOP_CATEGORY_COUNT: usize = 5;
/// Number of recent transactions listed
pub const RECENT_TRANSACTION_COUNT: usize = 10;

/// Spending in one category across all transactions
#[derive(Debug, Clone, Serialize)]
pub struct CategoryTotal {
    pub category: String,
    pub amount: Money,
    pub transaction_count: usize,
    /// Share of all expense transactions
    pub percentage: f64,
}

/// The active cycle as of the snapshot date
#[derive(Debug, Clone, Serialize)]
pub struct ActiveCycle {
    pub period_name: String,
    pub stats: CycleStats,
}

#[derive(Debug, Clone, Serialize)]
pub struct FinancialSnapshot {
    pub as_of: NaiveDate,
    pub total_income: Money,
    pub total_expense: Money,
    pub net: Money,
    pub transaction_count: usize,
    pub top_categories: Vec<CategoryTotal>,
    pub recent: Vec<Transaction>,
    pub active_cycle: Option<ActiveCycle>,
}

impl FinancialSnapshot {
    pub fn generate(
        storage: &Storage,
        active: Option<&BudgetPeriod>,
        as_of: NaiveDate,
    ) -> CycleResult<Self> {
        let transactions = storage.transactions.get_all()?;

        let mut total_income = Money::zero();
        let mut total_expense = Money::zero();
        let mut by_category: HashMap<&str, (Money, usize)> = HashMap::new();

        for txn in &transactions {
            if txn.is_income() {
                total_income += txn.amount;
            } else {
                total_expense += txn.amount;
                let entry = by_category
                    .entry(txn.category.as_str())
                    .or_insert((Money::zero(), 0));
                entry.0 += txn.amount;
                entry.1 += 1;
            }
        }

        let mut top_categories: Vec<CategoryTotal> = by_category
            .into_iter()
            .map(|(category, (amount, transaction_count))| CategoryTotal {
                category: category.to_string(),
                amount,
                transaction_count,
                percentage: amount.percent_of(total_expense),
            })
            .collect();
        top_categories.sort_by(|a, b| {
            b.amount
                .cmp(&a.amount)
                .then_with(|| a.category.cmp(&b.category))
        });
        top_categories.truncate(TOP_CATEGORY_COUNT);

        let active_cycle = match active {
            Some(period) => Some(ActiveCycle {
                period_name: period.name.clone(),
                stats: compute_cycle_stats(period, &transactions, as_of)?,
            }),
            None => None,
        };

        let transaction_count = transactions.len();
        let recent = transactions
            .into_iter()
            .take(RECENT_TRANSACTION_COUNT)
            .collect();

        Ok(Self {
            as_of,
            total_income,
            total_expense,
            net: total_income - total_expense,
            transaction_count,
            top_categories,
            recent,
            active_cycle,
        })
    }

    /// Format the report for terminal display
    pub fn format_terminal(&self, fmt: &DisplayFormat) -> String {
        let money = |m: Money| fmt.money(m);
        let mut output = String::new();

        output.push_str(&format!("Financial Snapshot ({})\n", fmt.date(self.as_of)));
        output.push_str(&"=".repeat(60));
        output.push('\n');

        if self.transaction_count == 0 {
            output.push_str("No transactions recorded yet.\n");
        } else {
            output.push_str(&format!("Total Income:  {:>16}\n", money(self.total_income)));
            output.push_str(&format!("Total Expense: {:>16}\n", money(self.total_expense)));
            output.push_str(&format!("Net:           {:>16}\n", money(self.net)));
            output.push_str(&format!("Transactions:  {:>16}\n", self.transaction_count));

            if !self.top_categories.is_empty() {
                output.push_str("\nTop spending categories\n");
                output.push_str(&"-".repeat(60));
                output.push('\n');
                for cat in &self.top_categories {
                    output.push_str(&format!(
                        "  {:<28} {:>16} {:>6.1}%\n",
                        cat.category,
                        money(cat.amount),
                        cat.percentage
                    ));
                }
            }

            output.push_str("\nRecent transactions\n");
            output.push_str(&"-".repeat(60));
            output.push('\n');
            for txn in &self.recent {
                let sign = if txn.is_income() { "+" } else { "-" };
                output.push_str(&format!(
                    "  {}  {:<20} {}{:>15}  {}\n",
                    fmt.date(txn.date),
                    txn.category,
                    sign,
                    money(txn.amount),
                    txn.description
                ));
            }
        }

        output.push('\n');
        match &self.active_cycle {
            Some(cycle) => {
                output.push_str(&format!("Active cycle: {}\n", cycle.period_name));
                output.push_str(&format!(
                    "  Daily limit {} with {} days left, balance {}\n",
                    money(cycle.stats.daily_limit),
                    cycle.stats.days_remaining,
                    money(cycle.stats.balance)
                ));
            }
            None => output.push_str("No active cycle.\n"),
        }

        output
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::paths::CyclePaths;
    use tempfile::TempDir;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn create_test_storage() -> (TempDir, Storage) {
        let temp_dir = TempDir::new().unwrap();
        let paths = CyclePaths::with_base_dir(temp_dir.path().to_path_buf());
        let mut storage = Storage::new(paths).unwrap();
        storage.load_all().unwrap();
        (temp_dir, storage)
    }

    fn add(storage: &Storage, txn: Transaction) {
        storage.transactions.upsert(txn).unwrap();
    }

    #[test]
    fn test_totals_and_top_categories() {
        let (_temp, storage) = create_test_storage();
        add(
            &storage,
            Transaction::income(Money::from_units(1000), date(2025, 1, 1)).with_category("Salary"),
        );
        let categories = [
            ("Rent", 400),
            ("Groceries", 100),
            ("Groceries", 50),
            ("Bills", 120),
            ("Fun", 30),
            ("Health", 20),
            ("Books", 10),
        ];
        for (i, (category, units)) in categories.iter().enumerate() {
            add(
                &storage,
                Transaction::expense(Money::from_units(*units), date(2025, 1, 2 + i as u32))
                    .with_category(*category),
            );
        }

        let snapshot = FinancialSnapshot::generate(&storage, None, date(2025, 1, 31)).unwrap();

        assert_eq!(snapshot.total_income, Money::from_units(1000));
        assert_eq!(snapshot.total_expense, Money::from_units(730));
        assert_eq!(snapshot.net, Money::from_units(270));
        assert_eq!(snapshot.top_categories.len(), TOP_CATEGORY_COUNT);
        assert_eq!(snapshot.top_categories[0].category, "Rent");
        assert_eq!(snapshot.top_categories[1].category, "Groceries");
        assert_eq!(snapshot.top_categories[1].transaction_count, 2);
        assert!(snapshot
            .top_categories
            .iter()
            .all(|c| c.category != "Books"));
        assert!(snapshot.active_cycle.is_none());
    }

    #[test]
    fn test_recent_is_capped_and_newest_first() {
        let (_temp, storage) = create_test_storage();
        for day in 1..=15 {
            add(
                &storage,
                Transaction::expense(Money::from_units(1), date(2025, 1, day)),
            );
        }

        let snapshot = FinancialSnapshot::generate(&storage, None, date(2025, 1, 31)).unwrap();
        assert_eq!(snapshot.recent.len(), RECENT_TRANSACTION_COUNT);
        assert_eq!(snapshot.recent[0].date, date(2025, 1, 15));
    }

    #[test]
    fn test_active_cycle_stats() {
        let (_temp, storage) = create_test_storage();
        let period = BudgetPeriod::for_month(
            "January",
            2025,
            1,
            Money::from_units(45000),
            Money::from_units(12850),
        )
        .unwrap();
        add(
            &storage,
            Transaction::expense(Money::from_units(1250), date(2025, 1, 10)),
        );

        let snapshot =
            FinancialSnapshot::generate(&storage, Some(&period), date(2025, 1, 15)).unwrap();
        let cycle = snapshot.active_cycle.unwrap();
        assert_eq!(cycle.period_name, "January");
        assert_eq!(cycle.stats.daily_limit, Money::from_cents(181765));
    }

    #[test]
    fn test_empty_snapshot_text() {
        let (_temp, storage) = create_test_storage();
        let snapshot = FinancialSnapshot::generate(&storage, None, date(2025, 1, 1)).unwrap();
        let text = snapshot.format_terminal(&DisplayFormat::default());
        assert!(text.contains("No transactions recorded yet."));
        assert!(text.contains("No active cycle."));
    }
}
