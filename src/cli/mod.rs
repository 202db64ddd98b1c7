//! CLI command handlers
//!
//! This module contains the implementation of CLI commands,
//! bridging the clap argument parsing with the service layer.

pub mod export;
pub mod period;
pub mod report;
pub mod setup;
pub mod transaction;

pub use export::{handle_export_command, ExportCommands};
pub use period::{handle_period_command, PeriodCommands};
pub use report::{
    handle_calendar_command, handle_categories_command, handle_day_command,
    handle_history_command, handle_snapshot_command, handle_stats_command,
};
pub use setup::{
    handle_audit_command, handle_config_command, handle_demo_command, handle_init_command,
    ConfigCommands,
};
pub use transaction::{handle_transaction_command, TransactionCommands};

use chrono::NaiveDate;

use crate::error::{CycleError, CycleResult};
use crate::models::Money;

/// The current local calendar day
pub fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

/// Parse a `YYYY-MM-DD` argument
pub(crate) fn parse_date(input: &str) -> CycleResult<NaiveDate> {
    NaiveDate::parse_from_str(input.trim(), "%Y-%m-%d").map_err(|_| {
        CycleError::Validation(format!("Invalid date format: '{}'. Use YYYY-MM-DD", input))
    })
}

pub(crate) fn parse_optional_date(input: Option<&str>) -> CycleResult<Option<NaiveDate>> {
    input.map(parse_date).transpose()
}

/// Parse an amount argument such as `1250`, `1250.50` or `$1,250.50`
pub(crate) fn parse_amount(input: &str) -> CycleResult<Money> {
    Money::parse(input).map_err(|e| {
        CycleError::Validation(format!(
            "Invalid amount: '{}'. Use a format like '1250' or '1250.50' ({})",
            input, e
        ))
    })
}
