//! CLI commands for data export

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

use clap::{Subcommand, ValueEnum};

use crate::config::settings::Settings;
use crate::error::{CycleError, CycleResult};
use crate::export::{csv, json, yaml};
use crate::storage::Storage;

/// Format of the full export
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum ExportFormat {
    /// Machine-readable
    Json,
    /// Human-readable
    Yaml,
}

/// Export subcommands
#[derive(Subcommand, Debug)]
pub enum ExportCommands {
    /// Export all data (settings, periods, transactions, history)
    All {
        /// Output file path; prints to stdout when omitted
        #[arg(short, long)]
        output: Option<PathBuf>,

        #[arg(short, long, value_enum, default_value = "json")]
        format: ExportFormat,

        /// Pretty-print JSON output
        #[arg(long)]
        pretty: bool,
    },

    /// Export transactions to CSV
    Transactions {
        /// Output file path; prints to stdout when omitted
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Export cycle history to CSV
    History {
        /// Output file path; prints to stdout when omitted
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

fn open_output(output: Option<&PathBuf>) -> CycleResult<Box<dyn Write>> {
    match output {
        Some(path) => {
            let file = File::create(path).map_err(|e| {
                CycleError::Export(format!("Failed to create file {}: {}", path.display(), e))
            })?;
            Ok(Box::new(BufWriter::new(file)))
        }
        None => Ok(Box::new(io::stdout().lock())),
    }
}

fn report_written(output: Option<&PathBuf>, what: &str) {
    // stdout carries the data itself when no file is given
    if let Some(path) = output {
        println!("{} exported to: {}", what, path.display());
    }
}

/// Handle export commands
pub fn handle_export_command(
    storage: &Storage,
    settings: &Settings,
    cmd: ExportCommands,
) -> CycleResult<()> {
    match cmd {
        ExportCommands::All {
            output,
            format,
            pretty,
        } => {
            let mut writer = open_output(output.as_ref())?;
            match format {
                ExportFormat::Json => {
                    json::export_full_json(storage, settings, &mut writer, pretty)?;
                    writeln!(writer)?;
                }
                ExportFormat::Yaml => yaml::export_full_yaml(storage, settings, &mut writer)?,
            }
            writer.flush()?;
            report_written(output.as_ref(), "All data");
        }

        ExportCommands::Transactions { output } => {
            let mut writer = open_output(output.as_ref())?;
            let count = csv::export_transactions_csv(storage, &mut writer)?;
            writer.flush()?;
            report_written(output.as_ref(), &format!("{} transactions", count));
        }

        ExportCommands::History { output } => {
            let mut writer = open_output(output.as_ref())?;
            let count = csv::export_history_csv(storage, &mut writer)?;
            writer.flush()?;
            report_written(output.as_ref(), &format!("{} cycles", count));
        }
    }

    tracing::info!("export finished");
    Ok(())
}
