//! Display formatting for terminal output
//!
//! Tables for lists, aligned text for single records and dashboard views.
//! Amounts and dates are printed the way the user's settings ask for, through
//! a [`DisplayFormat`].

pub mod period;
pub mod report;
pub mod transaction;

pub use period::{format_period_details, format_period_list};
pub use report::{format_audit_log, format_day, format_history, format_percentage, format_stats};
pub use transaction::{format_transaction_details, format_transaction_list};

use chrono::NaiveDate;

use crate::config::settings::{format_date, Settings};
use crate::models::Money;

const ISO_DATE: &str = "%Y-%m-%d";

/// Currency symbol and date format used when rendering
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DisplayFormat<'a> {
    pub currency_symbol: &'a str,
    pub date_format: &'a str,
}

impl<'a> DisplayFormat<'a> {
    pub const fn new(currency_symbol: &'a str, date_format: &'a str) -> Self {
        Self {
            currency_symbol,
            date_format,
        }
    }

    pub fn from_settings(settings: &'a Settings) -> Self {
        Self::new(&settings.currency_symbol, &settings.date_format)
    }

    pub fn money(&self, amount: Money) -> String {
        amount.format_with_symbol(self.currency_symbol)
    }

    /// Format a date; a format that cannot render dates falls back to ISO
    pub fn date(&self, date: NaiveDate) -> String {
        format_date(date, self.date_format).unwrap_or_else(|| date.format(ISO_DATE).to_string())
    }
}

impl Default for DisplayFormat<'static> {
    fn default() -> Self {
        Self::new("$", ISO_DATE)
    }
}
