//! Service layer
//!
//! The service layer provides business logic on top of the storage layer,
//! handling validation, the active period reference, user preferences and
//! audit logging.

pub mod cycle;
pub mod period;
pub mod settings;
pub mod transaction;

pub use cycle::CycleService;
pub use period::{CreatePeriodInput, PeriodChanges, PeriodService};
pub use settings::SettingsService;
pub use transaction::{CreateTransactionInput, TransactionFilter, TransactionService};
