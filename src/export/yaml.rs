//! YAML Export functionality
//!
//! Same document as the JSON export, in a format that is easier to read.

use std::io::Write;

use crate::config::settings::Settings;
use crate::error::{CycleError, CycleResult};
use crate::export::json::FullExport;
use crate::storage::Storage;

fn export_error(e: impl std::fmt::Display) -> CycleError {
    CycleError::Export(e.to_string())
}

/// Export all data as YAML
pub fn export_full_yaml<W: Write>(
    storage: &Storage,
    settings: &Settings,
    writer: &mut W,
) -> CycleResult<()> {
    let export = FullExport::from_storage(storage, settings)?;

    writeln!(writer, "# Cycle Budget export").map_err(export_error)?;
    writeln!(writer, "# Generated: {}", export.exported_at).map_err(export_error)?;
    writeln!(writer, "# App Version: {}", export.app_version).map_err(export_error)?;
    writeln!(writer).map_err(export_error)?;

    serde_yaml::to_writer(writer, &export).map_err(export_error)?;

    Ok(())
}
