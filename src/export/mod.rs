//! Export module
//!
//! - CSV: transactions and cycle history (spreadsheet-compatible)
//! - JSON: machine-readable full export
//! - YAML: human-readable full export

pub mod csv;
pub mod json;
pub mod yaml;

pub use self::csv::{export_history_csv, export_transactions_csv};
pub use json::{export_full_json, FullExport, EXPORT_SCHEMA_VERSION};
pub use yaml::export_full_yaml;
