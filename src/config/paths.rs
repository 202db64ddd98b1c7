//! Path management for the cycle budget tracker
//!
//! ## Path Resolution Order
//!
//! 1. `CYCLE_BUDGET_DATA_DIR` environment variable (if set)
//! 2. The platform config directory (`~/.config` on Linux,
//!    `~/Library/Application Support` on macOS, `%APPDATA%` on Windows)
//!    joined with `cycle-budget`

use std::path::PathBuf;

use directories::BaseDirs;

use crate::error::CycleError;

/// Environment variable overriding the base directory
pub const DATA_DIR_ENV: &str = "CYCLE_BUDGET_DATA_DIR";

const APP_DIR_NAME: &str = "cycle-budget";

/// Manages all paths used by the tracker
#[derive(Debug, Clone)]
pub struct CyclePaths {
    /// Base directory for all data
    base_dir: PathBuf,
}

impl CyclePaths {
    /// Resolve the base directory from the environment
    ///
    /// # Errors
    ///
    /// Returns an error if no home directory can be determined and no
    /// override is set.
    pub fn new() -> Result<Self, CycleError> {
        let base_dir = match std::env::var(DATA_DIR_ENV) {
            Ok(custom) if !custom.trim().is_empty() => PathBuf::from(custom),
            _ => resolve_default_path()?,
        };

        Ok(Self { base_dir })
    }

    /// Create paths rooted at a custom base directory (useful for testing)
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    pub fn base_dir(&self) -> &PathBuf {
        &self.base_dir
    }

    /// Get the data directory (`<base>/data/`)
    pub fn data_dir(&self) -> PathBuf {
        self.base_dir.join("data")
    }

    /// Get the default directory for exports (`<base>/exports/`)
    pub fn exports_dir(&self) -> PathBuf {
        self.base_dir.join("exports")
    }

    /// Get the path to the settings file
    pub fn settings_file(&self) -> PathBuf {
        self.base_dir.join("config.json")
    }

    /// Get the path to the audit log
    pub fn audit_log(&self) -> PathBuf {
        self.base_dir.join("audit.log")
    }

    pub fn transactions_file(&self) -> PathBuf {
        self.data_dir().join("transactions.json")
    }

    pub fn periods_file(&self) -> PathBuf {
        self.data_dir().join("periods.json")
    }

    /// Ensure the base and data directories exist
    pub fn ensure_directories(&self) -> Result<(), CycleError> {
        std::fs::create_dir_all(&self.base_dir)
            .map_err(|e| CycleError::Io(format!("Failed to create base directory: {}", e)))?;

        std::fs::create_dir_all(self.data_dir())
            .map_err(|e| CycleError::Io(format!("Failed to create data directory: {}", e)))?;

        Ok(())
    }

    /// Check if the tracker has been initialized (config file exists)
    pub fn is_initialized(&self) -> bool {
        self.settings_file().exists()
    }
}

fn resolve_default_path() -> Result<PathBuf, CycleError> {
    let dirs = BaseDirs::new()
        .ok_or_else(|| CycleError::Config("Could not determine home directory".into()))?;
    Ok(dirs.config_dir().join(APP_DIR_NAME))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_custom_base_dir() {
        let temp_dir = TempDir::new().unwrap();
        let paths = CyclePaths::with_base_dir(temp_dir.path().to_path_buf());

        assert_eq!(paths.base_dir(), temp_dir.path());
        assert_eq!(paths.data_dir(), temp_dir.path().join("data"));
        assert_eq!(paths.exports_dir(), temp_dir.path().join("exports"));
    }

    #[test]
    fn test_ensure_directories() {
        let temp_dir = TempDir::new().unwrap();
        let paths = CyclePaths::with_base_dir(temp_dir.path().join("nested"));

        paths.ensure_directories().unwrap();

        assert!(paths.data_dir().exists());
        assert!(!paths.is_initialized());
    }

    #[test]
    fn test_file_paths() {
        let temp_dir = TempDir::new().unwrap();
        let paths = CyclePaths::with_base_dir(temp_dir.path().to_path_buf());

        assert_eq!(paths.settings_file(), temp_dir.path().join("config.json"));
        assert_eq!(paths.audit_log(), temp_dir.path().join("audit.log"));
        assert_eq!(
            paths.periods_file(),
            temp_dir.path().join("data").join("periods.json")
        );
        assert_eq!(
            paths.transactions_file(),
            temp_dir.path().join("data").join("transactions.json")
        );
    }
}
