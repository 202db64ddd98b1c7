//! Core data models
//!
//! This module contains the data structures of the budgeting domain: budget
//! periods, transactions, money and identifiers.

pub mod category;
pub mod ids;
pub mod money;
pub mod period;
pub mod transaction;

pub use category::{default_categories, normalize_category, EXPENSE_CATEGORIES, INCOME_CATEGORIES};
pub use ids::{PeriodId, TransactionId};
pub use money::{Money, MoneyParseError};
pub use period::{BudgetPeriod, PeriodValidationError};
pub use transaction::{Transaction, TransactionType, TransactionValidationError};
