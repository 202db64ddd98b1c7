//! CSV Export functionality
//!
//! Spreadsheet-friendly exports of transactions and cycle history, written
//! with the `csv` crate. Amounts are plain decimals without a currency
//! symbol.

use std::io::Write;

use serde::Serialize;

use crate::cycle::compute_history_summaries;
use crate::error::{CycleError, CycleResult};
use crate::storage::Storage;

#[derive(Serialize)]
struct TransactionRecord<'a> {
    id: String,
    date: String,
    #[serde(rename = "type")]
    kind: String,
    category: &'a str,
    amount: String,
    description: &'a str,
}

#[derive(Serialize)]
struct HistoryRecord<'a> {
    period: &'a str,
    start_date: String,
    end_date: String,
    total_income: String,
    total_expense: String,
    balance: String,
    savings_rate: String,
}

/// Export all transactions, newest first. Returns the row count.
pub fn export_transactions_csv<W: Write>(storage: &Storage, writer: W) -> CycleResult<usize> {
    let transactions = storage.transactions.get_all()?;
    let mut csv_writer = csv::Writer::from_writer(writer);

    for txn in &transactions {
        csv_writer.serialize(TransactionRecord {
            id: txn.id.as_uuid().to_string(),
            date: txn.date.to_string(),
            kind: txn.kind.to_string().to_lowercase(),
            category: &txn.category,
            amount: txn.amount.to_string(),
            description: &txn.description,
        })?;
    }

    csv_writer
        .flush()
        .map_err(|e| CycleError::Export(e.to_string()))?;
    Ok(transactions.len())
}

/// Export one row per budget period, newest first. Returns the row count.
pub fn export_history_csv<W: Write>(storage: &Storage, writer: W) -> CycleResult<usize> {
    let periods = storage.periods.get_all()?;
    let transactions = storage.transactions.get_all()?;
    let history = compute_history_summaries(&periods, &transactions)?;

    let mut csv_writer = csv::Writer::from_writer(writer);
    for summary in &history {
        csv_writer.serialize(HistoryRecord {
            period: &summary.name,
            start_date: summary.start_date.to_string(),
            end_date: summary.end_date.to_string(),
            total_income: summary.total_income.to_string(),
            total_expense: summary.total_expense.to_string(),
            balance: summary.balance.to_string(),
            savings_rate: format!("{:.2}", summary.savings_rate),
        })?;
    }

    csv_writer
        .flush()
        .map_err(|e| CycleError::Export(e.to_string()))?;
    Ok(history.len())
}
