//! First-run setup and demo data

pub mod demo;

pub use demo::{seed_demo_data, DemoSummary};

use crate::config::paths::CyclePaths;
use crate::config::settings::Settings;
use crate::error::CycleResult;

/// Create the data directories and mark setup as completed.
///
/// Existing settings are kept; running this twice is harmless.
pub fn initialize(paths: &CyclePaths) -> CycleResult<Settings> {
    paths.ensure_directories()?;

    let mut settings = Settings::load_or_create(paths)?;
    if !settings.setup_completed {
        settings.setup_completed = true;
        settings.save(paths)?;
        tracing::info!(path = %paths.base_dir().display(), "initialized data directory");
    }

    Ok(settings)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_initialize_is_idempotent() {
        let temp_dir = TempDir::new().unwrap();
        let paths = CyclePaths::with_base_dir(temp_dir.path().to_path_buf());

        let first = initialize(&paths).unwrap();
        assert!(first.setup_completed);
        assert!(paths.is_initialized());

        let mut changed = first.clone();
        changed.currency_symbol = "₺".into();
        changed.save(&paths).unwrap();

        let second = initialize(&paths).unwrap();
        assert_eq!(second.currency_symbol, "₺");
    }
}
