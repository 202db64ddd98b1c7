//! Budget period CLI commands

use chrono::Datelike;
use clap::Subcommand;

use super::{parse_amount, parse_date, parse_optional_date, today};
use crate::config::settings::Settings;
use crate::display::{format_period_details, format_period_list, DisplayFormat};
use crate::error::{CycleError, CycleResult};
use crate::models::period::{month_bounds, parse_date_range, parse_month};
use crate::models::Money;
use crate::services::{CreatePeriodInput, PeriodChanges, PeriodService};
use crate::storage::Storage;

/// Period subcommands
#[derive(Subcommand)]
pub enum PeriodCommands {
    /// Create a budget period
    Create {
        /// Period name
        name: String,
        /// Fixed income for the period
        #[arg(short, long)]
        income: String,
        /// Fixed expenses for the period (rent, bills, loans)
        #[arg(short, long, default_value = "0")]
        fixed: String,
        /// Cover a calendar month (YYYY-MM); defaults to the current month
        #[arg(short, long, conflicts_with_all = ["start", "end", "range"])]
        month: Option<String>,
        /// Date range (YYYY-MM-DD..YYYY-MM-DD)
        #[arg(short, long, conflicts_with_all = ["start", "end"])]
        range: Option<String>,
        /// First day (YYYY-MM-DD)
        #[arg(long, requires = "end")]
        start: Option<String>,
        /// Last day (YYYY-MM-DD)
        #[arg(long, requires = "start")]
        end: Option<String>,
        /// Make this the active period
        #[arg(short, long)]
        activate: bool,
    },
    /// List periods, latest first
    List,
    /// Show period details (defaults to the active period)
    Show {
        /// Period name or ID
        period: Option<String>,
    },
    /// Change fields of a period
    Edit {
        /// Period name or ID
        period: String,
        #[arg(short, long)]
        name: Option<String>,
        #[arg(long)]
        start: Option<String>,
        #[arg(long)]
        end: Option<String>,
        #[arg(short, long)]
        income: Option<String>,
        #[arg(short, long)]
        fixed: Option<String>,
    },
    /// Delete a period (its transactions are kept)
    Delete {
        /// Period name or ID
        period: String,
        /// Skip confirmation
        #[arg(short, long)]
        force: bool,
    },
    /// Make a period the active one
    Activate {
        /// Period name or ID
        period: String,
    },
}

fn parse_optional_amount(input: Option<&str>) -> CycleResult<Option<Money>> {
    input.map(parse_amount).transpose()
}

fn resolve_dates(
    month: Option<String>,
    range: Option<String>,
    start: Option<String>,
    end: Option<String>,
) -> CycleResult<(chrono::NaiveDate, chrono::NaiveDate)> {
    if let Some(range) = range {
        return parse_date_range(&range).map_err(|e| CycleError::Validation(e.to_string()));
    }

    if let (Some(start), Some(end)) = (start, end) {
        return Ok((parse_date(&start)?, parse_date(&end)?));
    }

    let (year, month) = match month {
        Some(m) => parse_month(&m).ok_or_else(|| {
            CycleError::Validation(format!("Invalid month: '{}'. Use YYYY-MM", m))
        })?,
        None => {
            let now = today();
            (now.year(), now.month())
        }
    };

    month_bounds(year, month).ok_or_else(|| {
        CycleError::Validation(format!("Invalid month: {:04}-{:02}", year, month))
    })
}

/// Handle a period command
pub fn handle_period_command(
    storage: &Storage,
    settings: &mut Settings,
    cmd: PeriodCommands,
) -> CycleResult<()> {
    let service = PeriodService::new(storage);

    match cmd {
        PeriodCommands::Create {
            name,
            income,
            fixed,
            month,
            range,
            start,
            end,
            activate,
        } => {
            let (start_date, end_date) = resolve_dates(month, range, start, end)?;

            let period = service.create(
                CreatePeriodInput {
                    name,
                    start_date,
                    end_date,
                    monthly_income: parse_amount(&income)?,
                    fixed_expenses: parse_amount(&fixed)?,
                    activate,
                },
                settings,
            )?;

            let is_active = settings.active_period_id == Some(period.id);
            println!("Created budget period:");
            let fmt = DisplayFormat::from_settings(settings);
            print!("{}", format_period_details(&period, is_active, &fmt));
        }

        PeriodCommands::List => {
            let periods = service.list()?;
            let fmt = DisplayFormat::from_settings(settings);
            println!(
                "{}",
                format_period_list(&periods, settings.active_period_id, &fmt)
            );
        }

        PeriodCommands::Show { period } => {
            let period = service.resolve(period.as_deref(), settings)?;
            let is_active = settings.active_period_id == Some(period.id);
            let fmt = DisplayFormat::from_settings(settings);
            print!("{}", format_period_details(&period, is_active, &fmt));
        }

        PeriodCommands::Edit {
            period,
            name,
            start,
            end,
            income,
            fixed,
        } => {
            let existing = service.find_required(&period)?;
            let changes = PeriodChanges {
                name,
                start_date: parse_optional_date(start.as_deref())?,
                end_date: parse_optional_date(end.as_deref())?,
                monthly_income: parse_optional_amount(income.as_deref())?,
                fixed_expenses: parse_optional_amount(fixed.as_deref())?,
            };

            if changes.is_empty() {
                println!("Nothing to change.");
                return Ok(());
            }

            let updated = service.edit(existing.id, changes)?;
            let is_active = settings.active_period_id == Some(updated.id);
            println!("Updated budget period:");
            let fmt = DisplayFormat::from_settings(settings);
            print!("{}", format_period_details(&updated, is_active, &fmt));
        }

        PeriodCommands::Delete { period, force } => {
            let period = service.find_required(&period)?;

            if !force {
                println!("About to delete budget period: {}", period);
                println!("Transactions dated in it are kept.");
                println!();
                println!("Use --force to confirm deletion");
                return Ok(());
            }

            let deleted = service.delete(period.id, settings)?;
            println!("Deleted budget period: {}", deleted);
            if settings.active_period_id.is_none() {
                println!("No period is active now. Use 'cycle period activate' to pick one.");
            }
        }

        PeriodCommands::Activate { period } => {
            let period = service.find_required(&period)?;
            let activated = service.activate(period.id, settings)?;
            println!("Active period: {}", activated);
        }
    }

    Ok(())
}
