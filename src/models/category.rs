//! Default category labels
//!
//! Categories on transactions are free text; these are the suggested labels
//! offered for each transaction type.

use super::transaction::TransactionType;

/// Suggested labels for income transactions
pub const INCOME_CATEGORIES: &[&str] = &[
    "Salary",
    "Freelance",
    "Investment",
    "Side Income",
    "Other Income",
];

/// Suggested labels for expense transactions
pub const EXPENSE_CATEGORIES: &[&str] = &[
    "Groceries",
    "Transportation",
    "Housing & Rent",
    "Bills",
    "Entertainment",
    "Health",
    "Education",
    "Clothing",
    "Technology",
    "Credit Card Debt",
    "Other Expense",
];

/// Label used when a transaction is saved without one
pub fn fallback_category(kind: TransactionType) -> &'static str {
    match kind {
        TransactionType::Income => "Other Income",
        TransactionType::Expense => "Other Expense",
    }
}

/// Default labels for a transaction type
pub fn default_categories(kind: TransactionType) -> &'static [&'static str] {
    match kind {
        TransactionType::Income => INCOME_CATEGORIES,
        TransactionType::Expense => EXPENSE_CATEGORIES,
    }
}

/// Resolve user input to a default label, matching case-insensitively.
/// Unknown labels are kept as typed.
pub fn normalize_category(kind: TransactionType, input: &str) -> String {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return fallback_category(kind).to_string();
    }
    default_categories(kind)
        .iter()
        .find(|c| c.eq_ignore_ascii_case(trimmed))
        .map(|c| c.to_string())
        .unwrap_or_else(|| trimmed.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_known_label() {
        assert_eq!(
            normalize_category(TransactionType::Expense, "groceries"),
            "Groceries"
        );
        assert_eq!(
            normalize_category(TransactionType::Income, " SALARY "),
            "Salary"
        );
    }

    #[test]
    fn test_normalize_custom_and_empty() {
        assert_eq!(
            normalize_category(TransactionType::Expense, "Pet food"),
            "Pet food"
        );
        assert_eq!(
            normalize_category(TransactionType::Expense, ""),
            "Other Expense"
        );
        assert_eq!(normalize_category(TransactionType::Income, ""), "Other Income");
    }
}
