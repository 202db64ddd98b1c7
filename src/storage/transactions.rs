//! Transaction repository for JSON storage
//!
//! Manages loading and saving transactions to transactions.json

use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::RwLock;

use chrono::NaiveDate;

use crate::error::{CycleError, CycleResult};
use crate::models::{Transaction, TransactionId};

use super::file_io::{read_json, write_json_atomic};

#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
struct TransactionData {
    transactions: Vec<Transaction>,
}

/// Repository for transaction persistence
pub struct TransactionRepository {
    path: PathBuf,
    data: RwLock<HashMap<TransactionId, Transaction>>,
}

fn lock_error(e: impl std::fmt::Display) -> CycleError {
    CycleError::Storage(format!("Failed to acquire transaction lock: {}", e))
}

/// Newest date first, then most recently created first
fn newest_first(transactions: &mut [Transaction]) {
    transactions.sort_by(|a, b| b.date.cmp(&a.date).then(b.created_at.cmp(&a.created_at)));
}

impl TransactionRepository {
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            data: RwLock::new(HashMap::new()),
        }
    }

    /// Load transactions from disk, replacing anything held in memory
    pub fn load(&self) -> CycleResult<()> {
        let file_data: TransactionData = read_json(&self.path)?;
        let mut data = self.data.write().map_err(lock_error)?;

        data.clear();
        for txn in file_data.transactions {
            data.insert(txn.id, txn);
        }

        tracing::debug!(count = data.len(), "loaded transactions");
        Ok(())
    }

    pub fn save(&self) -> CycleResult<()> {
        let transactions = self.get_all()?;
        write_json_atomic(&self.path, &TransactionData { transactions })
    }

    pub fn get(&self, id: TransactionId) -> CycleResult<Option<Transaction>> {
        let data = self.data.read().map_err(lock_error)?;
        Ok(data.get(&id).cloned())
    }

    /// All transactions, newest first
    pub fn get_all(&self) -> CycleResult<Vec<Transaction>> {
        let data = self.data.read().map_err(lock_error)?;
        let mut transactions: Vec<_> = data.values().cloned().collect();
        newest_first(&mut transactions);
        Ok(transactions)
    }

    /// Transactions dated within `start..=end`, newest first
    pub fn get_by_date_range(
        &self,
        start: NaiveDate,
        end: NaiveDate,
    ) -> CycleResult<Vec<Transaction>> {
        let data = self.data.read().map_err(lock_error)?;
        let mut transactions: Vec<_> = data
            .values()
            .filter(|t| t.date >= start && t.date <= end)
            .cloned()
            .collect();
        newest_first(&mut transactions);
        Ok(transactions)
    }

    pub fn upsert(&self, txn: Transaction) -> CycleResult<()> {
        let mut data = self.data.write().map_err(lock_error)?;
        data.insert(txn.id, txn);
        Ok(())
    }

    /// Insert or replace a transaction and write the file. If the write fails the
    /// in-memory map is restored, so it never disagrees with the file.
    pub fn upsert_and_save(&self, txn: Transaction) -> CycleResult<()> {
        let id = txn.id;
        let previous = self.data.write().map_err(lock_error)?.insert(id, txn);
        self.save().or_else(|e| {
            self.restore(id, previous)?;
            Err(e)
        })
    }

    /// Remove a transaction and write the file, restoring it if the write fails.
    /// Returns the removed transaction.
    pub fn delete_and_save(&self, id: TransactionId) -> CycleResult<Option<Transaction>> {
        let removed = self.data.write().map_err(lock_error)?.remove(&id);
        if removed.is_none() {
            return Ok(None);
        }
        match self.save() {
            Ok(()) => Ok(removed),
            Err(e) => {
                self.restore(id, removed)?;
                Err(e)
            }
        }
    }

    fn restore(&self, id: TransactionId, previous: Option<Transaction>) -> CycleResult<()> {
        let mut data = self.data.write().map_err(lock_error)?;
        match previous {
            Some(entry) => data.insert(id, entry),
            None => data.remove(&id),
        };
        Ok(())
    }

    pub fn count(&self) -> CycleResult<usize> {
        let data = self.data.read().map_err(lock_error)?;
        Ok(data.len())
    }
}
