//! JSON Export functionality
//!
//! Exports every period, transaction and the settings to one JSON document
//! with schema versioning.

use std::collections::HashSet;
use std::io::Write;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::config::settings::Settings;
use crate::cycle::{compute_history_summaries, CycleSummary};
use crate::error::{CycleError, CycleResult};
use crate::models::{BudgetPeriod, Transaction};
use crate::storage::Storage;

/// Current export schema version
pub const EXPORT_SCHEMA_VERSION: &str = "1.0.0";

/// Full data export structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FullExport {
    pub schema_version: String,

    pub exported_at: DateTime<Utc>,

    /// Application version that created the export
    pub app_version: String,

    pub settings: Settings,

    pub periods: Vec<BudgetPeriod>,

    pub transactions: Vec<Transaction>,

    /// Derived per-period totals, newest first; informational only
    pub history: Vec<CycleSummary>,

    pub metadata: ExportMetadata,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExportMetadata {
    pub period_count: usize,
    pub transaction_count: usize,
    pub earliest_transaction: Option<String>,
    pub latest_transaction: Option<String>,
}

impl FullExport {
    /// Collect everything from storage
    pub fn from_storage(storage: &Storage, settings: &Settings) -> CycleResult<Self> {
        let periods = storage.periods.get_all()?;
        let transactions = storage.transactions.get_all()?;
        let history = compute_history_summaries(&periods, &transactions)?;

        let metadata = ExportMetadata {
            period_count: periods.len(),
            transaction_count: transactions.len(),
            earliest_transaction: transactions.iter().map(|t| t.date).min().map(|d| d.to_string()),
            latest_transaction: transactions.iter().map(|t| t.date).max().map(|d| d.to_string()),
        };

        Ok(Self {
            schema_version: EXPORT_SCHEMA_VERSION.to_string(),
            exported_at: Utc::now(),
            app_version: env!("CARGO_PKG_VERSION").to_string(),
            settings: settings.clone(),
            periods,
            transactions,
            history,
            metadata,
        })
    }

    /// Check the schema version and internal consistency of the document
    pub fn validate(&self) -> Result<(), String> {
        if self.schema_version != EXPORT_SCHEMA_VERSION {
            return Err(format!(
                "Schema version mismatch: expected {}, got {}",
                EXPORT_SCHEMA_VERSION, self.schema_version
            ));
        }

        let period_ids: HashSet<_> = self.periods.iter().map(|p| p.id).collect();
        if period_ids.len() != self.periods.len() {
            return Err("Duplicate period ids".to_string());
        }

        if let Some(active) = self.settings.active_period_id {
            if !period_ids.contains(&active) {
                return Err(format!("Active period {} is not in the export", active));
            }
        }

        for period in &self.periods {
            period
                .validate()
                .map_err(|e| format!("Period {}: {}", period.id, e))?;
        }

        for txn in &self.transactions {
            txn.validate()
                .map_err(|e| format!("Transaction {}: {}", txn.id, e))?;
        }

        Ok(())
    }
}

/// Export all data as JSON
pub fn export_full_json<W: Write>(
    storage: &Storage,
    settings: &Settings,
    writer: &mut W,
    pretty: bool,
) -> CycleResult<()> {
    let export = FullExport::from_storage(storage, settings)?;

    if pretty {
        serde_json::to_writer_pretty(writer, &export)
    } else {
        serde_json::to_writer(writer, &export)
    }
    .map_err(|e| CycleError::Export(e.to_string()))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::paths::CyclePaths;
    use crate::models::Money;
    use chrono::NaiveDate;
    use tempfile::TempDir;

    fn create_test_storage() -> (TempDir, Storage) {
        let temp_dir = TempDir::new().unwrap();
        let paths = CyclePaths::with_base_dir(temp_dir.path().to_path_buf());
        let mut storage = Storage::new(paths).unwrap();
        storage.load_all().unwrap();
        (temp_dir, storage)
    }

    fn seed(storage: &Storage) -> BudgetPeriod {
        let period = BudgetPeriod::for_month(
            "January",
            2025,
            1,
            Money::from_units(45000),
            Money::from_units(12850),
        )
        .unwrap();
        storage.periods.upsert(period.clone()).unwrap();
        storage
            .transactions
            .upsert(
                Transaction::expense(
                    Money::from_units(1250),
                    NaiveDate::from_ymd_opt(2025, 1, 10).unwrap(),
                )
                .with_category("Groceries"),
            )
            .unwrap();
        period
    }

    #[test]
    fn test_full_export() {
        let (_temp_dir, storage) = create_test_storage();
        let period = seed(&storage);
        let settings = Settings {
            active_period_id: Some(period.id),
            ..Settings::default()
        };

        let export = FullExport::from_storage(&storage, &settings).unwrap();

        assert_eq!(export.schema_version, EXPORT_SCHEMA_VERSION);
        assert_eq!(export.periods.len(), 1);
        assert_eq!(export.transactions.len(), 1);
        assert_eq!(export.history[0].balance, Money::from_units(30900));
        assert_eq!(export.metadata.earliest_transaction.as_deref(), Some("2025-01-10"));
        assert!(export.validate().is_ok());
    }

    #[test]
    fn test_validate_catches_dangling_active_period() {
        let (_temp_dir, storage) = create_test_storage();
        seed(&storage);
        let settings = Settings {
            active_period_id: Some(crate::models::PeriodId::new()),
            ..Settings::default()
        };

        let export = FullExport::from_storage(&storage, &settings).unwrap();
        assert!(export.validate().unwrap_err().contains("Active period"));
    }

    #[test]
    fn test_json_output_parses_back() {
        let (_temp_dir, storage) = create_test_storage();
        seed(&storage);

        let mut output = Vec::new();
        export_full_json(&storage, &Settings::default(), &mut output, true).unwrap();

        let parsed: FullExport = serde_json::from_slice(&output).unwrap();
        assert_eq!(parsed.metadata.transaction_count, 1);
        assert_eq!(parsed.transactions[0].category, "Groceries");
    }
}
