//! Storage layer
//!
//! JSON file storage with atomic writes. Every mutation made through the
//! services is also recorded in the audit log.

pub mod file_io;
pub mod periods;
pub mod transactions;

pub use file_io::{read_json, write_json_atomic};
pub use periods::PeriodRepository;
pub use transactions::TransactionRepository;

use serde::Serialize;

use crate::audit::{AuditEntry, AuditLogger, EntityType};
use crate::config::paths::CyclePaths;
use crate::error::CycleResult;

/// Main storage coordinator that provides access to all repositories
pub struct Storage {
    paths: CyclePaths,
    pub transactions: TransactionRepository,
    pub periods: PeriodRepository,
    audit: AuditLogger,
}

impl Storage {
    /// Create a storage handle, creating the data directories if needed
    pub fn new(paths: CyclePaths) -> CycleResult<Self> {
        paths.ensure_directories()?;

        Ok(Self {
            transactions: TransactionRepository::new(paths.transactions_file()),
            periods: PeriodRepository::new(paths.periods_file()),
            audit: AuditLogger::new(paths.audit_log()),
            paths,
        })
    }

    pub fn paths(&self) -> &CyclePaths {
        &self.paths
    }

    pub fn audit(&self) -> &AuditLogger {
        &self.audit
    }

    pub fn load_all(&mut self) -> CycleResult<()> {
        self.transactions.load()?;
        self.periods.load()?;
        Ok(())
    }

    pub fn save_all(&self) -> CycleResult<()> {
        self.transactions.save()?;
        self.periods.save()?;
        Ok(())
    }

    /// Whether `cycle init` has been run in this data directory
    pub fn is_initialized(&self) -> bool {
        self.paths.is_initialized()
    }

    pub fn log_create<T: Serialize>(
        &self,
        entity_type: EntityType,
        entity_id: impl Into<String>,
        entity_name: Option<String>,
        entity: &T,
    ) -> CycleResult<()> {
        self.audit.log(&AuditEntry::create(
            entity_type,
            entity_id,
            entity_name,
            entity,
        ))
    }

    pub fn log_update<T: Serialize>(
        &self,
        entity_type: EntityType,
        entity_id: impl Into<String>,
        entity_name: Option<String>,
        before: &T,
        after: &T,
    ) -> CycleResult<()> {
        self.audit.log(&AuditEntry::update(
            entity_type,
            entity_id,
            entity_name,
            before,
            after,
        ))
    }

    pub fn log_delete<T: Serialize>(
        &self,
        entity_type: EntityType,
        entity_id: impl Into<String>,
        entity_name: Option<String>,
        entity: &T,
    ) -> CycleResult<()> {
        self.audit.log(&AuditEntry::delete(
            entity_type,
            entity_id,
            entity_name,
            entity,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Money, Transaction};
    use chrono::NaiveDate;
    use tempfile::TempDir;

    #[test]
    fn test_storage_creation() {
        let temp_dir = TempDir::new().unwrap();
        let paths = CyclePaths::with_base_dir(temp_dir.path().to_path_buf());
        let storage = Storage::new(paths).unwrap();

        assert!(temp_dir.path().join("data").exists());
        assert!(!storage.is_initialized());
    }

    #[test]
    fn test_audit_helpers_append_entries() {
        let temp_dir = TempDir::new().unwrap();
        let paths = CyclePaths::with_base_dir(temp_dir.path().to_path_buf());
        let storage = Storage::new(paths).unwrap();

        let txn = Transaction::expense(
            Money::from_units(10),
            NaiveDate::from_ymd_opt(2025, 1, 1).unwrap(),
        );
        storage
            .log_create(EntityType::Transaction, txn.id.to_string(), None, &txn)
            .unwrap();
        storage
            .log_delete(EntityType::Transaction, txn.id.to_string(), None, &txn)
            .unwrap();

        assert_eq!(storage.audit().read_all().unwrap().len(), 2);
    }
}
