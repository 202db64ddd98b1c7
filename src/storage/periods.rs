//! Budget period repository for JSON storage
//!
//! Manages loading and saving periods to periods.json

use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::RwLock;

use chrono::NaiveDate;

use crate::error::{CycleError, CycleResult};
use crate::models::{BudgetPeriod, PeriodId};

use super::file_io::{read_json, write_json_atomic};

#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
struct PeriodData {
    periods: Vec<BudgetPeriod>,
}

/// Repository for budget period persistence
pub struct PeriodRepository {
    path: PathBuf,
    data: RwLock<HashMap<PeriodId, BudgetPeriod>>,
}

fn lock_error(e: impl std::fmt::Display) -> CycleError {
    CycleError::Storage(format!("Failed to acquire period lock: {}", e))
}

impl PeriodRepository {
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            data: RwLock::new(HashMap::new()),
        }
    }

    pub fn load(&self) -> CycleResult<()> {
        let file_data: PeriodData = read_json(&self.path)?;
        let mut data = self.data.write().map_err(lock_error)?;

        data.clear();
        for period in file_data.periods {
            data.insert(period.id, period);
        }

        tracing::debug!(count = data.len(), "loaded budget periods");
        Ok(())
    }

    pub fn save(&self) -> CycleResult<()> {
        let periods = self.get_all()?;
        write_json_atomic(&self.path, &PeriodData { periods })
    }

    pub fn get(&self, id: PeriodId) -> CycleResult<Option<BudgetPeriod>> {
        let data = self.data.read().map_err(lock_error)?;
        Ok(data.get(&id).cloned())
    }

    /// All periods, latest start date first
    pub fn get_all(&self) -> CycleResult<Vec<BudgetPeriod>> {
        let data = self.data.read().map_err(lock_error)?;
        let mut periods: Vec<_> = data.values().cloned().collect();
        periods.sort_by(|a, b| {
            b.start_date
                .cmp(&a.start_date)
                .then(b.created_at.cmp(&a.created_at))
        });
        Ok(periods)
    }

    /// Find a period by exact name (case-insensitive)
    pub fn get_by_name(&self, name: &str) -> CycleResult<Option<BudgetPeriod>> {
        let data = self.data.read().map_err(lock_error)?;
        Ok(data
            .values()
            .find(|p| p.name.eq_ignore_ascii_case(name.trim()))
            .cloned())
    }

    /// Periods whose range includes `date`
    pub fn get_containing(&self, date: NaiveDate) -> CycleResult<Vec<BudgetPeriod>> {
        Ok(self
            .get_all()?
            .into_iter()
            .filter(|p| p.contains(date))
            .collect())
    }

    pub fn upsert(&self, period: BudgetPeriod) -> CycleResult<()> {
        let mut data = self.data.write().map_err(lock_error)?;
        data.insert(period.id, period);
        Ok(())
    }

    /// Insert or replace a period and write the file. If the write fails the
    /// in-memory map is restored, so it never disagrees with the file.
    pub fn upsert_and_save(&self, period: BudgetPeriod) -> CycleResult<()> {
        let id = period.id;
        let previous = self.data.write().map_err(lock_error)?.insert(id, period);
        self.save().or_else(|e| {
            self.restore(id, previous)?;
            Err(e)
        })
    }

    /// Remove a period and write the file, restoring it if the write fails.
    /// Returns the removed period.
    pub fn delete_and_save(&self, id: PeriodId) -> CycleResult<Option<BudgetPeriod>> {
        let removed = self.data.write().map_err(lock_error)?.remove(&id);
        if removed.is_none() {
            return Ok(None);
        }
        match self.save() {
            Ok(()) => Ok(removed),
            Err(e) => {
                self.restore(id, removed)?;
                Err(e)
            }
        }
    }

    fn restore(&self, id: PeriodId, previous: Option<BudgetPeriod>) -> CycleResult<()> {
        let mut data = self.data.write().map_err(lock_error)?;
        match previous {
            Some(entry) => data.insert(id, entry),
            None => data.remove(&id),
        };
        Ok(())
    }

    pub fn count(&self) -> CycleResult<usize> {
        let data = self.data.read().map_err(lock_error)?;
        Ok(data.len())
    }
}
