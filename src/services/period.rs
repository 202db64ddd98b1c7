//! Budget period service
//!
//! Creates, edits and deletes periods, and tracks which one is active. The
//! active period is a reference stored in [`Settings`], so operations that
//! may change it take the settings mutably and persist them.

use chrono::NaiveDate;

use crate::audit::EntityType;
use crate::config::settings::Settings;
use crate::error::{CycleError, CycleResult};
use crate::models::{BudgetPeriod, Money, PeriodId};
use crate::storage::Storage;

/// Service for budget period management
pub struct PeriodService<'a> {
    storage: &'a Storage,
}

/// Input for creating a new period
#[derive(Debug, Clone)]
pub struct CreatePeriodInput {
    pub name: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub monthly_income: Money,
    pub fixed_expenses: Money,
    /// Make this the active period even if another one is active
    pub activate: bool,
}

/// Field changes for an existing period; `None` leaves a field untouched
#[derive(Debug, Clone, Default)]
pub struct PeriodChanges {
    pub name: Option<String>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub monthly_income: Option<Money>,
    pub fixed_expenses: Option<Money>,
}

impl PeriodChanges {
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.start_date.is_none()
            && self.end_date.is_none()
            && self.monthly_income.is_none()
            && self.fixed_expenses.is_none()
    }
}

impl<'a> PeriodService<'a> {
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    /// Create a period. It becomes active when requested or when no period
    /// is active yet.
    pub fn create(
        &self,
        input: CreatePeriodInput,
        settings: &mut Settings,
    ) -> CycleResult<BudgetPeriod> {
        let name = input.name.trim().to_string();
        let period = BudgetPeriod::new(
            name,
            input.start_date,
            input.end_date,
            input.monthly_income,
            input.fixed_expenses,
        );

        period
            .validate()
            .map_err(|e| CycleError::Validation(e.to_string()))?;

        if self.storage.periods.get_by_name(&period.name)?.is_some() {
            return Err(CycleError::Duplicate {
                entity_type: "Budget period",
                identifier: period.name.clone(),
            });
        }

        self.warn_on_overlap(&period)?;

        self.storage.periods.upsert_and_save(period.clone())?;

        self.storage.log_create(
            EntityType::BudgetPeriod,
            period.id.to_string(),
            Some(period.name.clone()),
            &period,
        )?;

        tracing::info!(id = %period.id, name = %period.name, "budget period created");

        if input.activate || self.active(settings)?.is_none() {
            self.set_active(Some(period.id), settings)?;
        }

        Ok(period)
    }

    pub fn get(&self, id: PeriodId) -> CycleResult<Option<BudgetPeriod>> {
        self.storage.periods.get(id)
    }

    /// Find a period by full id, unique id prefix, or name
    pub fn find(&self, identifier: &str) -> CycleResult<Option<BudgetPeriod>> {
        if let Ok(id) = identifier.parse::<PeriodId>() {
            return self.storage.periods.get(id);
        }

        if let Some(period) = self.storage.periods.get_by_name(identifier)? {
            return Ok(Some(period));
        }

        let mut matches = self
            .storage
            .periods
            .get_all()?
            .into_iter()
            .filter(|p| p.id.matches_short(identifier));

        let first = matches.next();
        if first.is_some() && matches.next().is_some() {
            return Err(CycleError::Validation(format!(
                "Period id '{}' is ambiguous; use more characters",
                identifier
            )));
        }
        Ok(first)
    }

    pub fn find_required(&self, identifier: &str) -> CycleResult<BudgetPeriod> {
        self.find(identifier)?
            .ok_or_else(|| CycleError::period_not_found(identifier))
    }

    /// All periods, latest start date first
    pub fn list(&self) -> CycleResult<Vec<BudgetPeriod>> {
        self.storage.periods.get_all()
    }

    /// The active period, if one is set and still exists
    pub fn active(&self, settings: &Settings) -> CycleResult<Option<BudgetPeriod>> {
        match settings.active_period_id {
            Some(id) => self.storage.periods.get(id),
            None => Ok(None),
        }
    }

    /// The period named by `identifier`, or the active one when absent
    pub fn resolve(
        &self,
        identifier: Option<&str>,
        settings: &Settings,
    ) -> CycleResult<BudgetPeriod> {
        match identifier {
            Some(identifier) => self.find_required(identifier),
            None => self.active(settings)?.ok_or(CycleError::NoActivePeriod),
        }
    }

    /// Apply field changes and re-validate
    pub fn edit(&self, id: PeriodId, changes: PeriodChanges) -> CycleResult<BudgetPeriod> {
        let mut period = self
            .storage
            .periods
            .get(id)?
            .ok_or_else(|| CycleError::period_not_found(id.to_string()))?;

        if changes.is_empty() {
            return Ok(period);
        }

        let before = period.clone();

        if let Some(name) = changes.name {
            let name = name.trim().to_string();
            if let Some(other) = self.storage.periods.get_by_name(&name)? {
                if other.id != id {
                    return Err(CycleError::Duplicate {
                        entity_type: "Budget period",
                        identifier: name,
                    });
                }
            }
            period.name = name;
        }
        if let Some(start) = changes.start_date {
            period.start_date = start;
        }
        if let Some(end) = changes.end_date {
            period.end_date = end;
        }
        if let Some(income) = changes.monthly_income {
            period.monthly_income = income;
        }
        if let Some(fixed) = changes.fixed_expenses {
            period.fixed_expenses = fixed;
        }

        period
            .validate()
            .map_err(|e| CycleError::Validation(e.to_string()))?;
        period.touch();

        if before.start_date != period.start_date || before.end_date != period.end_date {
            self.warn_on_overlap(&period)?;
        }

        self.storage.periods.upsert_and_save(period.clone())?;

        self.storage.log_update(
            EntityType::BudgetPeriod,
            period.id.to_string(),
            Some(period.name.clone()),
            &before,
            &period,
        )?;

        tracing::info!(id = %period.id, "budget period updated");
        Ok(period)
    }

    /// Delete a period. Its transactions are kept.
    pub fn delete(&self, id: PeriodId, settings: &mut Settings) -> CycleResult<BudgetPeriod> {
        let period = self
            .storage
            .periods
            .delete_and_save(id)?
            .ok_or_else(|| CycleError::period_not_found(id.to_string()))?;

        self.storage.log_delete(
            EntityType::BudgetPeriod,
            period.id.to_string(),
            Some(period.name.clone()),
            &period,
        )?;

        if settings.active_period_id == Some(id) {
            self.set_active(None, settings)?;
        }

        tracing::info!(id = %period.id, name = %period.name, "budget period deleted");
        Ok(period)
    }

    /// Make a period the active one
    pub fn activate(&self, id: PeriodId, settings: &mut Settings) -> CycleResult<BudgetPeriod> {
        let period = self
            .storage
            .periods
            .get(id)?
            .ok_or_else(|| CycleError::period_not_found(id.to_string()))?;

        self.set_active(Some(id), settings)?;
        Ok(period)
    }

    fn set_active(&self, id: Option<PeriodId>, settings: &mut Settings) -> CycleResult<()> {
        if settings.active_period_id == id {
            return Ok(());
        }

        let before = settings.clone();
        settings.active_period_id = id;
        settings.save(self.storage.paths())?;

        self.storage.log_update(
            EntityType::Settings,
            "settings",
            None,
            &before,
            &*settings,
        )?;

        match id {
            Some(id) => tracing::info!(id = %id, "active period changed"),
            None => tracing::info!("active period cleared"),
        }
        Ok(())
    }

    fn warn_on_overlap(&self, period: &BudgetPeriod) -> CycleResult<()> {
        for other in self.storage.periods.get_all()? {
            if other.id != period.id && other.overlaps(period) {
                tracing::warn!(
                    period = %period.name,
                    other = %other.name,
                    "budget periods overlap; transactions in the shared days count toward both"
                );
            }
        }
        Ok(())
    }
}
