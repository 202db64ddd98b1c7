//! Reports module
//!
//! Month calendar, per-day detail, cycle history and the financial snapshot.

pub mod calendar;
pub mod day;
pub mod history;
pub mod snapshot;

pub use calendar::{status_glyph, CalendarReport};
pub use day::DayReport;
pub use history::HistoryReport;
pub use snapshot::{ActiveCycle, CategoryTotal, FinancialSnapshot};
