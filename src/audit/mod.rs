//! Audit trail of data changes
//!
//! Every create, update and delete of a transaction or budget period, and
//! every change of the active period, is appended to `audit.log` as one JSON
//! line. Updates carry before/after snapshots and a one-line field diff.
//!
//! # Example
//!
//! ```rust,ignore
//! use cycle_budget::audit::{AuditEntry, AuditLogger, EntityType};
//!
//! let logger = AuditLogger::new(paths.audit_log());
//! logger.log(&AuditEntry::create(
//!     EntityType::BudgetPeriod,
//!     period.id.to_string(),
//!     Some(period.name.clone()),
//!     &period,
//! ))?;
//! ```

mod diff;
mod entry;
mod logger;

pub use diff::generate_diff;
pub use entry::{AuditEntry, EntityType, Operation};
pub use logger::AuditLogger;
