//! Settings service
//!
//! Changes user preferences and records each change in the audit log.

use crate::audit::{AuditEntry, EntityType};
use crate::config::settings::Settings;
use crate::error::CycleResult;
use crate::storage::Storage;

pub struct SettingsService<'a> {
    storage: &'a Storage,
}

impl<'a> SettingsService<'a> {
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    /// Set one preference and persist it.
    ///
    /// Returns `false` when the value was already set, in which case nothing
    /// is written.
    pub fn set(&self, settings: &mut Settings, key: &str, value: &str) -> CycleResult<bool> {
        let before = settings.clone();
        settings.set(key, value)?;

        if *settings == before {
            return Ok(false);
        }

        settings.save(self.storage.paths())?;
        self.storage.log_update(
            EntityType::Settings,
            "settings",
            None,
            &before,
            &*settings,
        )?;

        tracing::info!(key, value, "setting changed");
        Ok(true)
    }

    /// The latest `limit` audit entries, oldest first
    pub fn audit_trail(&self, limit: usize) -> CycleResult<Vec<AuditEntry>> {
        self.storage.audit().read_recent(limit)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::audit::Operation;
    use crate::config::paths::CyclePaths;
    use tempfile::TempDir;

    fn create_test_storage() -> (TempDir, Storage) {
        let temp_dir = TempDir::new().unwrap();
        let paths = CyclePaths::with_base_dir(temp_dir.path().to_path_buf());
        let mut storage = Storage::new(paths).unwrap();
        storage.load_all().unwrap();
        (temp_dir, storage)
    }

    #[test]
    fn test_set_persists_and_audits() {
        let (_temp, storage) = create_test_storage();
        let service = SettingsService::new(&storage);
        let mut settings = Settings::default();

        assert!(service.set(&mut settings, "currency_symbol", "€").unwrap());

        let loaded = Settings::load_or_create(storage.paths()).unwrap();
        assert_eq!(loaded.currency_symbol, "€");

        let trail = service.audit_trail(10).unwrap();
        assert_eq!(trail.len(), 1);
        assert_eq!(trail[0].operation, Operation::Update);
        assert_eq!(trail[0].entity_type, EntityType::Settings);
        assert!(trail[0]
            .diff_summary
            .as_deref()
            .unwrap_or_default()
            .contains("currency_symbol"));
    }

    #[test]
    fn test_unchanged_value_writes_nothing() {
        let (_temp, storage) = create_test_storage();
        let service = SettingsService::new(&storage);
        let mut settings = Settings::default();

        assert!(!service.set(&mut settings, "week_start", "monday").unwrap());
        assert!(service.audit_trail(10).unwrap().is_empty());
        assert!(!storage.paths().settings_file().exists());
    }

    #[test]
    fn test_invalid_value_leaves_settings_alone() {
        let (_temp, storage) = create_test_storage();
        let service = SettingsService::new(&storage);
        let mut settings = Settings::default();

        let err = service.set(&mut settings, "date_format", "%H").unwrap_err();
        assert!(err.is_validation());
        assert_eq!(settings, Settings::default());
        assert!(service.audit_trail(10).unwrap().is_empty());
    }

    #[test]
    fn test_audit_trail_keeps_latest() {
        let (_temp, storage) = create_test_storage();
        let service = SettingsService::new(&storage);
        let mut settings = Settings::default();

        service.set(&mut settings, "currency", "€").unwrap();
        service.set(&mut settings, "currency", "£").unwrap();
        service.set(&mut settings, "currency", "₺").unwrap();

        let trail = service.audit_trail(2).unwrap();
        assert_eq!(trail.len(), 2);
        assert!(trail[1].diff_summary.as_deref().unwrap_or_default().contains("₺"));
    }
}
