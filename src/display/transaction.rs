//! Transaction display formatting
//!
//! Renders transaction lists as tables and single transactions as detail
//! views.

use tabled::settings::object::Columns;
use tabled::settings::{Alignment, Style};
use tabled::{Table, Tabled};

use super::DisplayFormat;
use crate::models::{Money, Transaction, TransactionType};

#[derive(Tabled)]
struct TransactionRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Date")]
    date: String,
    #[tabled(rename = "Type")]
    kind: String,
    #[tabled(rename = "Category")]
    category: String,
    #[tabled(rename = "Amount")]
    amount: String,
    #[tabled(rename = "Description")]
    description: String,
}

/// Format a list of transactions as a table, newest first as given
pub fn format_transaction_list(transactions: &[Transaction], fmt: &DisplayFormat) -> String {
    if transactions.is_empty() {
        return "No transactions found.".to_string();
    }

    let rows = transactions.iter().map(|txn| TransactionRow {
        id: txn.id.to_string(),
        date: fmt.date(txn.date),
        kind: txn.kind.to_string(),
        category: txn.category.clone(),
        amount: fmt.money(txn.signed_amount()),
        description: truncate(&txn.description, 32),
    });

    let mut table = Table::new(rows);
    table
        .with(Style::rounded())
        .modify(Columns::single(4), Alignment::right());

    let income: Money = transactions
        .iter()
        .filter(|t| t.kind == TransactionType::Income)
        .map(|t| t.amount)
        .sum();
    let expense: Money = transactions
        .iter()
        .filter(|t| t.kind == TransactionType::Expense)
        .map(|t| t.amount)
        .sum();

    format!(
        "{}\n{} transactions, income {}, expense {}",
        table,
        transactions.len(),
        fmt.money(income),
        fmt.money(expense)
    )
}

/// Format transaction details for display
pub fn format_transaction_details(txn: &Transaction, fmt: &DisplayFormat) -> String {
    let mut output = String::new();

    output.push_str(&format!("Transaction: {}\n", txn.id));
    output.push_str(&format!("Full ID:     {}\n", txn.id.as_uuid()));
    output.push_str(&format!("Type:        {}\n", txn.kind));
    output.push_str(&format!("Date:        {}\n", fmt.date(txn.date)));
    output.push_str(&format!("Amount:      {}\n", fmt.money(txn.amount)));
    output.push_str(&format!("Category:    {}\n", txn.category));

    if !txn.description.is_empty() {
        output.push_str(&format!("Description: {}\n", txn.description));
    }

    output.push_str(&format!(
        "Recorded:    {}\n",
        txn.created_at.format("%Y-%m-%d %H:%M UTC")
    ));

    output
}

/// Truncate a string to a maximum number of characters
pub(crate) fn truncate(s: &str, max_chars: usize) -> String {
    if s.chars().count() <= max_chars {
        s.to_string()
    } else {
        let kept: String = s.chars().take(max_chars.saturating_sub(1)).collect();
        format!("{}…", kept)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn sample() -> Transaction {
        Transaction::expense(
            Money::from_cents(125050),
            NaiveDate::from_ymd_opt(2025, 1, 10).unwrap(),
        )
        .with_category("Groceries")
        .with_description("Weekly shop")
    }

    #[test]
    fn test_empty_list() {
        assert_eq!(format_transaction_list(&[], &DisplayFormat::default()), "No transactions found.");
    }

    #[test]
    fn test_list_shows_signed_amount_and_totals() {
        let text = format_transaction_list(&[sample()], &DisplayFormat::new("$", "%d/%m/%Y"));
        assert!(text.contains("Groceries"));
        assert!(text.contains("10/01/2025"));
        assert!(text.contains("-$1,250.50"));
        assert!(text.contains("1 transactions"));
    }

    #[test]
    fn test_details() {
        let text = format_transaction_details(&sample(), &DisplayFormat::new("€", "%Y-%m-%d"));
        assert!(text.contains("Type:        Expense"));
        assert!(text.contains("Amount:      €1,250.50"));
        assert!(text.contains("Description: Weekly shop"));
    }

    #[test]
    fn test_truncate_counts_chars() {
        assert_eq!(truncate("short", 10), "short");
        assert_eq!(truncate("çok uzun açıklama", 5), "çok …");
    }
}
