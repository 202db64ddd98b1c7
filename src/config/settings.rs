//! User settings
//!
//! Holds the reference to the active budget period and display preferences.

use std::fmt::Write;

use chrono::{NaiveDate, Weekday};
use serde::{Deserialize, Serialize};

use super::paths::CyclePaths;
use crate::error::CycleError;
use crate::models::PeriodId;

/// User settings persisted to `config.json`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// The budget period the dashboard, calendar and snapshot report against
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub active_period_id: Option<PeriodId>,

    /// Currency symbol used when printing amounts
    #[serde(default = "default_currency")]
    pub currency_symbol: String,

    /// Date format preference (strftime format)
    #[serde(default = "default_date_format")]
    pub date_format: String,

    /// First day of week for the calendar (0 = Sunday, 1 = Monday)
    #[serde(default = "default_first_day_of_week")]
    pub first_day_of_week: u8,

    /// Whether `init` or `demo` has been run
    #[serde(default)]
    pub setup_completed: bool,
}

/// Keys accepted by [`Settings::set`]
pub const SETTING_KEYS: &[&str] = &["currency_symbol", "date_format", "first_day_of_week"];

/// Render `date` with a strftime `format`, or `None` if the format cannot
/// render a plain date (unknown specifiers, time fields).
pub fn format_date(date: NaiveDate, format: &str) -> Option<String> {
    let mut out = String::new();
    write!(out, "{}", date.format(format)).ok()?;
    Some(out)
}

fn default_schema_version() -> u32 {
    1
}

fn default_currency() -> String {
    "$".to_string()
}

fn default_date_format() -> String {
    "%Y-%m-%d".to_string()
}

fn default_first_day_of_week() -> u8 {
    1 // Monday
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            active_period_id: None,
            currency_symbol: default_currency(),
            date_format: default_date_format(),
            first_day_of_week: default_first_day_of_week(),
            setup_completed: false,
        }
    }
}

impl Settings {
    /// The configured first day of week as a chrono weekday
    pub fn week_start(&self) -> Weekday {
        if self.first_day_of_week == 0 {
            Weekday::Sun
        } else {
            Weekday::Mon
        }
    }

    /// Change one user-editable setting by key
    ///
    /// # Errors
    ///
    /// Returns a validation error for an unknown key or a value the key does
    /// not accept.
    pub fn set(&mut self, key: &str, value: &str) -> Result<(), CycleError> {
        let value = value.trim();
        match key.trim().to_lowercase().replace('-', "_").as_str() {
            "currency_symbol" | "currency" => {
                if value.is_empty() || value.chars().count() > 5 {
                    return Err(CycleError::Validation(format!(
                        "Invalid currency symbol '{}': use 1 to 5 characters",
                        value
                    )));
                }
                self.currency_symbol = value.to_string();
            }
            "date_format" => {
                if value.is_empty() || format_date(NaiveDate::default(), value).is_none() {
                    return Err(CycleError::Validation(format!(
                        "Invalid date format '{}': use strftime date fields such as %d.%m.%Y",
                        value
                    )));
                }
                self.date_format = value.to_string();
            }
            "first_day_of_week" | "week_start" => {
                self.first_day_of_week = match value.to_lowercase().as_str() {
                    "0" | "sun" | "sunday" => 0,
                    "1" | "mon" | "monday" => 1,
                    _ => {
                        return Err(CycleError::Validation(format!(
                            "Invalid first day of week '{}': use monday or sunday",
                            value
                        )))
                    }
                };
            }
            _ => {
                return Err(CycleError::Validation(format!(
                    "Unknown setting '{}'. Known settings: {}",
                    key,
                    SETTING_KEYS.join(", ")
                )))
            }
        }
        Ok(())
    }

    /// Load settings from disk, or return defaults if the file doesn't exist
    pub fn load_or_create(paths: &CyclePaths) -> Result<Self, CycleError> {
        let settings_path = paths.settings_file();

        if settings_path.exists() {
            let contents = std::fs::read_to_string(&settings_path)
                .map_err(|e| CycleError::Io(format!("Failed to read settings file: {}", e)))?;

            let settings: Settings = serde_json::from_str(&contents).map_err(|e| {
                CycleError::Config(format!("Failed to parse settings file: {}", e))
            })?;

            Ok(settings)
        } else {
            // Don't save yet - let caller decide when to persist
            Ok(Settings::default())
        }
    }

    /// Save settings to disk
    pub fn save(&self, paths: &CyclePaths) -> Result<(), CycleError> {
        paths.ensure_directories()?;

        let contents = serde_json::to_string_pretty(self)
            .map_err(|e| CycleError::Config(format!("Failed to serialize settings: {}", e)))?;

        std::fs::write(paths.settings_file(), contents)
            .map_err(|e| CycleError::Io(format!("Failed to write settings file: {}", e)))?;

        tracing::debug!(path = %paths.settings_file().display(), "settings saved");
        Ok(())
    }
}
