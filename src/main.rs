use anyhow::Result;
use clap::{Parser, Subcommand};

use cycle_budget::cli::{
    handle_audit_command, handle_calendar_command, handle_categories_command,
    handle_config_command, handle_day_command, handle_demo_command, handle_export_command,
    handle_history_command, handle_init_command, handle_period_command, handle_snapshot_command,
    handle_stats_command, handle_transaction_command, ConfigCommands, ExportCommands,
    PeriodCommands, TransactionCommands,
};
use cycle_budget::config::logging::level_from_verbosity;
use cycle_budget::config::{init_logging, CyclePaths, Settings};
use cycle_budget::storage::Storage;

#[derive(Parser)]
#[command(
    name = "cycle",
    author = "Kaylee Beyene",
    version,
    about = "Terminal budget tracker with a rolling daily spending limit",
    long_about = "Cycle Budget tracks income and expenses against budget periods. \
                  Each period has a fixed income and fixed expenses; whatever is \
                  left is spread over the remaining days as a daily limit, and \
                  every day is judged against the limit it started with."
)]
struct Cli {
    /// Increase diagnostic output (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Create the data directory and default settings
    Init,

    /// Show or change settings
    Config {
        #[command(subcommand)]
        action: Option<ConfigCommands>,
    },

    /// Show the latest entries of the audit log
    Audit {
        /// Number of entries to show
        #[arg(short, long, default_value_t = 20)]
        limit: usize,
    },

    /// Transaction management commands
    #[command(subcommand, alias = "txn")]
    Transaction(TransactionCommands),

    /// Budget period management commands
    #[command(subcommand)]
    Period(PeriodCommands),

    /// Daily limit and totals for a period
    Stats {
        /// Day to compute for (YYYY-MM-DD), defaults to today
        #[arg(long)]
        as_of: Option<String>,
        /// Period name or ID, defaults to the active period
        #[arg(short, long)]
        period: Option<String>,
    },

    /// Month calendar of daily spending status
    Calendar {
        /// Month to show (YYYY-MM), defaults to the current month
        #[arg(short, long)]
        month: Option<String>,
        /// Period name or ID, defaults to the active period
        #[arg(short, long)]
        period: Option<String>,
    },

    /// Status and transactions of one day
    Day {
        /// The day (YYYY-MM-DD)
        date: String,
        /// Period name or ID, defaults to the active period
        #[arg(short, long)]
        period: Option<String>,
    },

    /// Totals and savings rate of every period, newest first
    History,

    /// Summary of all transactions and the active cycle
    Snapshot {
        /// Print as JSON
        #[arg(long)]
        json: bool,
    },

    /// List the default income and expense categories
    Categories,

    /// Data export commands
    #[command(subcommand)]
    Export(ExportCommands),

    /// Seed demo data
    Demo {
        /// Replace existing data
        #[arg(long)]
        force: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(level_from_verbosity(cli.verbose));

    let paths = CyclePaths::new()?;
    let mut settings = Settings::load_or_create(&paths)?;

    let mut storage = Storage::new(paths.clone())?;
    storage.load_all()?;

    tracing::debug!(base_dir = %paths.base_dir().display(), "storage loaded");

    match cli.command {
        Some(Commands::Init) => {
            handle_init_command(&paths)?;
        }
        Some(Commands::Config { action }) => {
            handle_config_command(&storage, &paths, &mut settings, action)?
        }
        Some(Commands::Audit { limit }) => handle_audit_command(&storage, limit)?,
        Some(Commands::Transaction(cmd)) => handle_transaction_command(&storage, &settings, cmd)?,
        Some(Commands::Period(cmd)) => handle_period_command(&storage, &mut settings, cmd)?,
        Some(Commands::Stats { as_of, period }) => {
            handle_stats_command(&storage, &settings, period, as_of)?
        }
        Some(Commands::Calendar { month, period }) => {
            handle_calendar_command(&storage, &settings, period, month)?
        }
        Some(Commands::Day { date, period }) => {
            handle_day_command(&storage, &settings, period, date)?
        }
        Some(Commands::History) => handle_history_command(&storage, &settings)?,
        Some(Commands::Snapshot { json }) => handle_snapshot_command(&storage, &settings, json)?,
        Some(Commands::Categories) => handle_categories_command()?,
        Some(Commands::Export(cmd)) => handle_export_command(&storage, &settings, cmd)?,
        Some(Commands::Demo { force }) => handle_demo_command(&storage, &mut settings, force)?,
        None => {
            println!("Cycle Budget - rolling daily limits for your budget periods");
            println!();
            println!("Run 'cycle --help' for usage information.");
            println!("Run 'cycle demo' to try it with sample data.");
        }
    }

    Ok(())
}
