//! Transaction CLI commands

use clap::Subcommand;

use super::{parse_amount, parse_date, parse_optional_date, today};
use crate::config::settings::Settings;
use crate::display::{format_transaction_details, format_transaction_list, DisplayFormat};
use crate::error::{CycleError, CycleResult};
use crate::models::TransactionType;
use crate::services::{CreateTransactionInput, TransactionFilter, TransactionService};
use crate::storage::Storage;

/// Transaction subcommands
#[derive(Subcommand)]
pub enum TransactionCommands {
    /// Record income or an expense
    Add {
        /// Transaction type: income or expense
        kind: String,
        /// Amount, strictly positive (e.g. "1250" or "1250.50")
        #[arg(allow_hyphen_values = true)]
        amount: String,
        /// Category label; see `cycle categories` for the defaults
        #[arg(short, long)]
        category: Option<String>,
        /// Transaction date (YYYY-MM-DD), defaults to today
        #[arg(short, long)]
        date: Option<String>,
        /// Free-text description
        #[arg(short = 'm', long)]
        description: Option<String>,
    },
    /// List transactions, newest first
    List {
        /// Only income or only expense
        #[arg(short = 't', long = "type")]
        kind: Option<String>,
        /// Filter by category label
        #[arg(short, long)]
        category: Option<String>,
        /// Start date (YYYY-MM-DD)
        #[arg(long)]
        from: Option<String>,
        /// End date (YYYY-MM-DD)
        #[arg(long)]
        to: Option<String>,
        /// Number of transactions to show
        #[arg(short, long, default_value = "20")]
        limit: usize,
    },
    /// Show transaction details
    Show {
        /// Transaction ID (short form accepted)
        id: String,
    },
    /// Delete a transaction
    Delete {
        /// Transaction ID (short form accepted)
        id: String,
        /// Skip confirmation
        #[arg(short, long)]
        force: bool,
    },
}

fn parse_kind(input: &str) -> CycleResult<TransactionType> {
    input
        .parse::<TransactionType>()
        .map_err(|e| CycleError::Validation(e.to_string()))
}

/// Handle a transaction command
pub fn handle_transaction_command(
    storage: &Storage,
    settings: &Settings,
    cmd: TransactionCommands,
) -> CycleResult<()> {
    let service = TransactionService::new(storage);
    let fmt = DisplayFormat::from_settings(settings);

    match cmd {
        TransactionCommands::Add {
            kind,
            amount,
            category,
            date,
            description,
        } => {
            let input = CreateTransactionInput {
                kind: parse_kind(&kind)?,
                amount: parse_amount(&amount)?,
                category,
                date: match date {
                    Some(d) => parse_date(&d)?,
                    None => today(),
                },
                description,
            };

            let txn = service.create(input)?;

            println!("Created transaction:");
            println!("  ID:       {}", txn.id);
            println!("  Type:     {}", txn.kind);
            println!("  Date:     {}", fmt.date(txn.date));
            println!("  Amount:   {}", fmt.money(txn.amount));
            println!("  Category: {}", txn.category);
            if !txn.description.is_empty() {
                println!("  Note:     {}", txn.description);
            }
        }

        TransactionCommands::List {
            kind,
            category,
            from,
            to,
            limit,
        } => {
            let mut filter = TransactionFilter::new().limit(limit);
            if let Some(kind) = kind {
                filter = filter.kind(parse_kind(&kind)?);
            }
            if let Some(category) = category {
                filter = filter.category(category);
            }
            filter.start_date = parse_optional_date(from.as_deref())?;
            filter.end_date = parse_optional_date(to.as_deref())?;

            let transactions = service.list(filter)?;
            println!("{}", format_transaction_list(&transactions, &fmt));
        }

        TransactionCommands::Show { id } => {
            let txn = service.find_required(&id)?;
            print!("{}", format_transaction_details(&txn, &fmt));
        }

        TransactionCommands::Delete { id, force } => {
            let txn = service.find_required(&id)?;

            if !force {
                println!("About to delete transaction:");
                println!("  Date:     {}", fmt.date(txn.date));
                println!("  Amount:   {}", fmt.money(txn.signed_amount()));
                println!("  Category: {}", txn.category);
                println!();
                println!("Use --force to confirm deletion");
                return Ok(());
            }

            let deleted = service.delete(txn.id)?;
            println!(
                "Deleted transaction: {} ({} {})",
                deleted.id,
                fmt.date(deleted.date),
                deleted.category
            );
        }
    }

    Ok(())
}
