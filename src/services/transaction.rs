//! Transaction service
//!
//! Provides business logic for transaction management: validated creation,
//! filtered listing, lookup by short id, and deletion. Transactions are never
//! edited in place.

use chrono::NaiveDate;

use crate::audit::EntityType;
use crate::error::{CycleError, CycleResult};
use crate::models::{normalize_category, Money, Transaction, TransactionId, TransactionType};
use crate::storage::Storage;

/// Service for transaction management
pub struct TransactionService<'a> {
    storage: &'a Storage,
}

/// Options for filtering transactions
#[derive(Debug, Clone, Default)]
pub struct TransactionFilter {
    pub kind: Option<TransactionType>,
    /// Category label, matched case-insensitively
    pub category: Option<String>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    /// Maximum number of transactions to return
    pub limit: Option<usize>,
}

impl TransactionFilter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn kind(mut self, kind: TransactionType) -> Self {
        self.kind = Some(kind);
        self
    }

    pub fn category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    pub fn date_range(mut self, start: NaiveDate, end: NaiveDate) -> Self {
        self.start_date = Some(start);
        self.end_date = Some(end);
        self
    }

    pub fn limit(mut self, limit: usize) -> Self {
        self.limit = Some(limit);
        self
    }

    fn matches(&self, txn: &Transaction) -> bool {
        if self.kind.is_some_and(|k| k != txn.kind) {
            return false;
        }
        if let Some(category) = &self.category {
            if !txn.category.eq_ignore_ascii_case(category.trim()) {
                return false;
            }
        }
        if self.start_date.is_some_and(|start| txn.date < start) {
            return false;
        }
        if self.end_date.is_some_and(|end| txn.date > end) {
            return false;
        }
        true
    }
}

/// Input for creating a new transaction
#[derive(Debug, Clone)]
pub struct CreateTransactionInput {
    pub kind: TransactionType,
    pub amount: Money,
    pub category: Option<String>,
    pub date: NaiveDate,
    pub description: Option<String>,
}

impl<'a> TransactionService<'a> {
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    /// Create and persist a new transaction
    pub fn create(&self, input: CreateTransactionInput) -> CycleResult<Transaction> {
        let category = normalize_category(input.kind, input.category.as_deref().unwrap_or(""));

        let mut txn = Transaction::new(input.kind, input.amount, input.date).with_category(category);
        if let Some(description) = input.description {
            txn.description = description.trim().to_string();
        }

        txn.validate()
            .map_err(|e| CycleError::Validation(e.to_string()))?;

        self.storage.transactions.upsert_and_save(txn.clone())?;

        self.storage.log_create(
            EntityType::Transaction,
            txn.id.to_string(),
            Some(format!("{} {}", txn.date, txn.category)),
            &txn,
        )?;

        tracing::info!(id = %txn.id, kind = %txn.kind, amount = %txn.amount, date = %txn.date, "transaction created");
        Ok(txn)
    }

    pub fn get(&self, id: TransactionId) -> CycleResult<Option<Transaction>> {
        self.storage.transactions.get(id)
    }

    /// Find a transaction by full id or by a unique prefix of it
    pub fn find(&self, identifier: &str) -> CycleResult<Option<Transaction>> {
        if let Ok(id) = identifier.parse::<TransactionId>() {
            return self.storage.transactions.get(id);
        }

        let mut matches = self
            .storage
            .transactions
            .get_all()?
            .into_iter()
            .filter(|t| t.id.matches_short(identifier));

        let first = matches.next();
        if first.is_some() && matches.next().is_some() {
            return Err(CycleError::Validation(format!(
                "Transaction id '{}' is ambiguous; use more characters",
                identifier
            )));
        }
        Ok(first)
    }

    /// Like [`find`](Self::find), but a missing transaction is an error
    pub fn find_required(&self, identifier: &str) -> CycleResult<Transaction> {
        self.find(identifier)?
            .ok_or_else(|| CycleError::transaction_not_found(identifier))
    }

    /// List transactions, newest first
    pub fn list(&self, filter: TransactionFilter) -> CycleResult<Vec<Transaction>> {
        let transactions = match (filter.start_date, filter.end_date) {
            (Some(start), Some(end)) => self.storage.transactions.get_by_date_range(start, end)?,
            _ => self.storage.transactions.get_all()?,
        };

        let mut transactions: Vec<_> = transactions
            .into_iter()
            .filter(|t| filter.matches(t))
            .collect();

        if let Some(limit) = filter.limit {
            transactions.truncate(limit);
        }

        Ok(transactions)
    }

    /// Transactions dated exactly on `day`
    pub fn list_for_day(&self, day: NaiveDate) -> CycleResult<Vec<Transaction>> {
        self.storage.transactions.get_by_date_range(day, day)
    }

    pub fn delete(&self, id: TransactionId) -> CycleResult<Transaction> {
        let txn = self
            .storage
            .transactions
            .delete_and_save(id)?
            .ok_or_else(|| CycleError::transaction_not_found(id.to_string()))?;

        self.storage.log_delete(
            EntityType::Transaction,
            txn.id.to_string(),
            Some(format!("{} {}", txn.date, txn.category)),
            &txn,
        )?;

        tracing::info!(id = %txn.id, "transaction deleted");
        Ok(txn)
    }

    pub fn count(&self) -> CycleResult<usize> {
        self.storage.transactions.count()
    }
}
