//! Dashboard and report commands: stats, calendar, day, history, snapshot

use chrono::Datelike;

use super::{parse_date, parse_optional_date, today};
use crate::config::settings::Settings;
use crate::display::{format_day, format_history, format_stats, DisplayFormat};
use crate::error::{CycleError, CycleResult};
use crate::models::period::parse_month;
use crate::models::{EXPENSE_CATEGORIES, INCOME_CATEGORIES};
use crate::reports::{CalendarReport, DayReport, FinancialSnapshot, HistoryReport};
use crate::services::{CycleService, PeriodService};
use crate::storage::Storage;

/// `cycle stats`: dashboard numbers for a period
pub fn handle_stats_command(
    storage: &Storage,
    settings: &Settings,
    period: Option<String>,
    as_of: Option<String>,
) -> CycleResult<()> {
    let period = PeriodService::new(storage).resolve(period.as_deref(), settings)?;
    let as_of = parse_optional_date(as_of.as_deref())?.unwrap_or_else(today);

    let stats = CycleService::new(storage).stats(&period, as_of)?;
    let fmt = DisplayFormat::from_settings(settings);
    print!("{}", format_stats(&period.name, &stats, &fmt));
    Ok(())
}

/// `cycle calendar`: month grid of daily statuses
pub fn handle_calendar_command(
    storage: &Storage,
    settings: &Settings,
    period: Option<String>,
    month: Option<String>,
) -> CycleResult<()> {
    let period = PeriodService::new(storage).resolve(period.as_deref(), settings)?;
    let now = today();

    let (year, month) = match month {
        Some(m) => parse_month(&m).ok_or_else(|| {
            CycleError::Validation(format!("Invalid month: '{}'. Use YYYY-MM", m))
        })?,
        None => (now.year(), now.month()),
    };

    let report =
        CalendarReport::generate(storage, &period, year, month, now, settings.week_start())?;
    let fmt = DisplayFormat::from_settings(settings);
    print!("{}", report.format_terminal(&fmt));
    Ok(())
}

/// `cycle day`: one day's status and transactions
pub fn handle_day_command(
    storage: &Storage,
    settings: &Settings,
    period: Option<String>,
    date: String,
) -> CycleResult<()> {
    let period = PeriodService::new(storage).resolve(period.as_deref(), settings)?;
    let day = parse_date(&date)?;

    let report = DayReport::generate(storage, &period, day, today())?;
    let fmt = DisplayFormat::from_settings(settings);
    print!("{}", format_day(&report, &fmt));
    Ok(())
}

/// `cycle history`: one summary per period, newest first
pub fn handle_history_command(storage: &Storage, settings: &Settings) -> CycleResult<()> {
    let report = HistoryReport::generate(storage)?;
    let fmt = DisplayFormat::from_settings(settings);
    println!("{}", format_history(&report, &fmt));
    Ok(())
}

/// `cycle snapshot`: totals, top categories, recent activity and the active cycle
pub fn handle_snapshot_command(
    storage: &Storage,
    settings: &Settings,
    json: bool,
) -> CycleResult<()> {
    let active = PeriodService::new(storage).active(settings)?;
    let snapshot = FinancialSnapshot::generate(storage, active.as_ref(), today())?;

    if json {
        println!("{}", serde_json::to_string_pretty(&snapshot)?);
    } else {
        let fmt = DisplayFormat::from_settings(settings);
        print!("{}", snapshot.format_terminal(&fmt));
    }
    Ok(())
}

/// `cycle categories`: the default labels for each transaction type
pub fn handle_categories_command() -> CycleResult<()> {
    println!("Income categories:");
    for category in INCOME_CATEGORIES {
        println!("  {}", category);
    }
    println!();
    println!("Expense categories:");
    for category in EXPENSE_CATEGORIES {
        println!("  {}", category);
    }
    println!();
    println!("Any other label is accepted as a custom category.");
    Ok(())
}
