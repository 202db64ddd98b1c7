//! Setup commands: init, config, audit, demo

use clap::Subcommand;

use crate::config::paths::CyclePaths;
use crate::config::settings::{Settings, SETTING_KEYS};
use crate::display::format_audit_log;
use crate::error::CycleResult;
use crate::services::{PeriodService, SettingsService};
use crate::setup::{initialize, seed_demo_data};
use crate::storage::Storage;

use super::today;

/// `cycle init`
pub fn handle_init_command(paths: &CyclePaths) -> CycleResult<Settings> {
    println!("Initializing cycle budget at: {}", paths.base_dir().display());
    let settings = initialize(paths)?;
    println!("Initialization complete!");
    println!();
    println!("Next steps:");
    println!("  cycle period create \"January\" --month 2025-01 --income 45000 --fixed 12850");
    println!("  cycle transaction add expense 1250 --category Groceries");
    println!("  cycle stats");
    println!();
    println!("Or run 'cycle demo' to explore with sample data.");
    Ok(settings)
}

/// Config subcommands
#[derive(Subcommand)]
pub enum ConfigCommands {
    /// Show paths and settings (the default)
    Show,
    /// Change a setting: currency_symbol, date_format or first_day_of_week
    Set {
        /// Setting name
        key: String,
        /// New value
        value: String,
    },
}

/// `cycle config [show|set]`
pub fn handle_config_command(
    storage: &Storage,
    paths: &CyclePaths,
    settings: &mut Settings,
    cmd: Option<ConfigCommands>,
) -> CycleResult<()> {
    match cmd {
        Some(ConfigCommands::Set { key, value }) => {
            if SettingsService::new(storage).set(settings, &key, &value)? {
                println!("Updated {} to '{}'.", key, value);
            } else {
                println!("{} is already '{}'.", key, value);
            }
            Ok(())
        }
        Some(ConfigCommands::Show) | None => show_config(storage, paths, settings),
    }
}

fn show_config(storage: &Storage, paths: &CyclePaths, settings: &Settings) -> CycleResult<()> {
    println!("Cycle Budget Configuration");
    println!("==========================");
    println!("Base directory:   {}", paths.base_dir().display());
    println!("Data directory:   {}", paths.data_dir().display());
    println!("Settings file:    {}", paths.settings_file().display());
    println!("Audit log:        {}", paths.audit_log().display());
    println!("Initialized:      {}", paths.is_initialized());
    println!();
    println!("Settings:");
    println!("  Currency symbol:   {}", settings.currency_symbol);
    println!("  Date format:       {}", settings.date_format);
    println!("  First day of week: {}", settings.week_start());
    println!("  (change with 'cycle config set <{}> <value>')", SETTING_KEYS.join("|"));

    let active = PeriodService::new(storage).active(settings)?;
    match active {
        Some(period) => println!("  Active period:     {}", period),
        None => println!("  Active period:     (none)"),
    }

    println!();
    println!(
        "Data: {} periods, {} transactions, {} audit entries",
        storage.periods.count()?,
        storage.transactions.count()?,
        storage.audit().read_all()?.len()
    );
    Ok(())
}

/// `cycle audit`: the latest changes, oldest first
pub fn handle_audit_command(storage: &Storage, limit: usize) -> CycleResult<()> {
    let entries = SettingsService::new(storage).audit_trail(limit)?;
    println!("{}", format_audit_log(&entries));
    Ok(())
}

/// `cycle demo`
pub fn handle_demo_command(
    storage: &Storage,
    settings: &mut Settings,
    force: bool,
) -> CycleResult<()> {
    let summary = seed_demo_data(storage, settings, today(), force)?;

    if summary.removed_periods + summary.removed_transactions > 0 {
        println!(
            "Removed {} periods and {} transactions.",
            summary.removed_periods, summary.removed_transactions
        );
    }
    println!(
        "Seeded '{}' ({} to {}) with {} transactions.",
        summary.period_name, summary.start_date, summary.end_date, summary.transactions_created
    );
    println!("Try 'cycle stats' or 'cycle calendar'.");
    Ok(())
}
