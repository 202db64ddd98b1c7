//! Transaction model
//!
//! Represents a single income or expense entry. Transactions are created and
//! deleted by the user but never edited in place.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::ids::TransactionId;
use super::money::Money;

/// Direction of a transaction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionType {
    Income,
    Expense,
}

impl fmt::Display for TransactionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Income => write!(f, "Income"),
            Self::Expense => write!(f, "Expense"),
        }
    }
}

impl FromStr for TransactionType {
    type Err = TransactionValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "income" | "in" => Ok(Self::Income),
            "expense" | "out" => Ok(Self::Expense),
            other => Err(TransactionValidationError::UnknownType(other.to_string())),
        }
    }
}

/// A financial transaction
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    pub id: TransactionId,

    #[serde(rename = "type")]
    pub kind: TransactionType,

    /// Always non-negative; the direction is carried by `kind`
    pub amount: Money,

    /// Free-text category label
    #[serde(default)]
    pub category: String,

    pub date: NaiveDate,

    #[serde(default)]
    pub description: String,

    pub created_at: DateTime<Utc>,
}

impl Transaction {
    /// Create a new transaction
    pub fn new(kind: TransactionType, amount: Money, date: NaiveDate) -> Self {
        Self {
            id: TransactionId::new(),
            kind,
            amount,
            category: String::new(),
            date,
            description: String::new(),
            created_at: Utc::now(),
        }
    }

    /// Create an income transaction
    pub fn income(amount: Money, date: NaiveDate) -> Self {
        Self::new(TransactionType::Income, amount, date)
    }

    /// Create an expense transaction
    pub fn expense(amount: Money, date: NaiveDate) -> Self {
        Self::new(TransactionType::Expense, amount, date)
    }

    /// Set the category label
    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = category.into();
        self
    }

    /// Set the description
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn is_income(&self) -> bool {
        self.kind == TransactionType::Income
    }

    pub fn is_expense(&self) -> bool {
        self.kind == TransactionType::Expense
    }

    /// The amount with its direction applied (negative for expenses)
    pub fn signed_amount(&self) -> Money {
        match self.kind {
            TransactionType::Income => self.amount,
            TransactionType::Expense => -self.amount,
        }
    }

    /// Validate the transaction
    pub fn validate(&self) -> Result<(), TransactionValidationError> {
        if self.amount.is_negative() {
            return Err(TransactionValidationError::NegativeAmount(self.amount));
        }
        if self.amount.is_zero() {
            return Err(TransactionValidationError::ZeroAmount);
        }
        if self.amount > Money::MAX_AMOUNT {
            return Err(TransactionValidationError::AmountTooLarge(self.amount));
        }
        if self.description.len() > 500 {
            return Err(TransactionValidationError::DescriptionTooLong(
                self.description.len(),
            ));
        }
        Ok(())
    }
}

impl fmt::Display for Transaction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = if self.description.is_empty() {
            &self.category
        } else {
            &self.description
        };
        write!(f, "{} {} {}", self.date, label, self.signed_amount())
    }
}

/// Validation errors for transactions
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TransactionValidationError {
    #[error("Transaction amount cannot be negative ({0}); use the transaction type instead")]
    NegativeAmount(Money),

    #[error("Transaction amount must be greater than zero")]
    ZeroAmount,

    #[error("Transaction amount {0} exceeds the maximum of {max}", max = Money::MAX_AMOUNT)]
    AmountTooLarge(Money),

    #[error("Description too long ({0} chars, max 500)")]
    DescriptionTooLong(usize),

    #[error("Unknown transaction type '{0}'. Use income or expense")]
    UnknownType(String),
}
