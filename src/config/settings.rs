//! User settings for budget-pacer
//!
//! Where the monthly income goal comes from, the status thresholds, and the
//! working-day rules the month pacing uses.

use chrono::{NaiveDate, Weekday};
use serde::{Deserialize, Serialize};

use super::paths::PacerPaths;
use crate::calendar::WorkCalendar;
use crate::error::{PacerError, PacerResult};
use crate::models::Money;
use crate::projection::{PacingThresholds, ProjectionEngine};

/// Source of the monthly income goal
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(tag = "source", rename_all = "snake_case")]
pub enum IncomeGoalSource {
    /// Sum of all category monthly targets
    #[default]
    CategoryTargets,
    /// A fixed amount, independent of categories
    Fixed { amount: Money },
}

impl IncomeGoalSource {
    /// Resolve the goal given the current category targets
    pub fn resolve<'a>(&self, category_targets: impl IntoIterator<Item = &'a Money>) -> Money {
        match self {
            Self::CategoryTargets => category_targets.into_iter().sum(),
            Self::Fixed { amount } => *amount,
        }
    }
}

/// User settings for budget-pacer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Currency symbol for display
    #[serde(default = "default_currency")]
    pub currency_symbol: String,

    #[serde(default)]
    pub income_goal: IncomeGoalSource,

    /// Margins for the four status tiers
    #[serde(default)]
    pub thresholds: PacingThresholds,

    /// Weekdays that count as working days
    #[serde(default = "default_work_week")]
    pub work_week: Vec<Weekday>,

    /// Dates excluded from working-day counts
    #[serde(default)]
    pub holidays: Vec<NaiveDate>,

    /// Attach the daily quote to the dashboard
    #[serde(default = "default_show_quote")]
    pub show_quote: bool,
}

fn default_schema_version() -> u32 {
    1
}

fn default_currency() -> String {
    "$".to_string()
}

fn default_work_week() -> Vec<Weekday> {
    vec![
        Weekday::Mon,
        Weekday::Tue,
        Weekday::Wed,
        Weekday::Thu,
        Weekday::Fri,
    ]
}

fn default_show_quote() -> bool {
    true
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            currency_symbol: default_currency(),
            income_goal: IncomeGoalSource::default(),
            thresholds: PacingThresholds::default(),
            work_week: default_work_week(),
            holidays: Vec::new(),
            show_quote: default_show_quote(),
        }
    }
}

impl Settings {
    /// Load settings from disk, or return defaults if the file doesn't exist
    pub fn load_or_create(paths: &PacerPaths) -> PacerResult<Self> {
        let settings_path = paths.settings_file();

        if !settings_path.exists() {
            // Not persisted until the caller saves
            return Ok(Settings::default());
        }

        let contents = std::fs::read_to_string(&settings_path)
            .map_err(|e| PacerError::Io(format!("Failed to read settings file: {}", e)))?;

        let settings: Settings = serde_json::from_str(&contents)
            .map_err(|e| PacerError::Config(format!("Failed to parse settings file: {}", e)))?;

        settings.validate()?;
        Ok(settings)
    }

    /// Save settings to disk
    pub fn save(&self, paths: &PacerPaths) -> PacerResult<()> {
        self.validate()?;
        paths.ensure_directories()?;

        let contents = serde_json::to_string_pretty(self)
            .map_err(|e| PacerError::Config(format!("Failed to serialize settings: {}", e)))?;

        std::fs::write(paths.settings_file(), contents)
            .map_err(|e| PacerError::Io(format!("Failed to write settings file: {}", e)))?;

        Ok(())
    }

    pub fn validate(&self) -> PacerResult<()> {
        self.thresholds.validate()?;

        if self.work_week.is_empty() {
            return Err(PacerError::Config(
                "work_week must contain at least one weekday".into(),
            ));
        }

        if let IncomeGoalSource::Fixed { amount } = self.income_goal {
            if amount.is_negative() {
                return Err(PacerError::validation(
                    "income_goal",
                    "fixed amount cannot be negative",
                ));
            }
        }

        Ok(())
    }

    /// Working-day rules from `work_week` and `holidays`
    pub fn work_calendar(&self) -> WorkCalendar {
        WorkCalendar::new(&self.work_week, self.holidays.iter().copied())
    }

    /// Engine configured with these settings
    pub fn projection_engine(&self) -> ProjectionEngine {
        ProjectionEngine::new(self.work_calendar(), self.thresholds)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_settings() {
        let settings = Settings::default();
        assert_eq!(settings.currency_symbol, "$");
        assert_eq!(settings.income_goal, IncomeGoalSource::CategoryTargets);
        assert_eq!(settings.work_week.len(), 5);
        assert!(settings.holidays.is_empty());
        assert!(settings.show_quote);
        assert_eq!(settings.work_calendar(), WorkCalendar::default());
    }

    #[test]
    fn test_save_and_load() {
        let temp_dir = TempDir::new().unwrap();
        let paths = PacerPaths::with_base_dir(temp_dir.path().to_path_buf());

        let mut settings = Settings::default();
        settings.income_goal = IncomeGoalSource::Fixed {
            amount: Money::from_units(3_000_000),
        };
        settings.work_week.push(Weekday::Sat);
        settings.holidays.push(NaiveDate::from_ymd_opt(2025, 1, 6).unwrap());
        settings.save(&paths).unwrap();

        let loaded = Settings::load_or_create(&paths).unwrap();
        assert_eq!(loaded, settings);
    }

    #[test]
    fn test_missing_file_gives_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let paths = PacerPaths::with_base_dir(temp_dir.path().to_path_buf());
        assert_eq!(Settings::load_or_create(&paths).unwrap(), Settings::default());
        assert!(!paths.settings_file().exists());
    }

    #[test]
    fn test_old_file_loads_with_defaults() {
        let settings: Settings =
            serde_json::from_str(r#"{"schema_version": 1, "currency_symbol": "€"}"#).unwrap();
        assert_eq!(settings.currency_symbol, "€");
        assert_eq!(settings.thresholds, PacingThresholds::default());
        assert_eq!(settings.work_week.len(), 5);
    }

    #[test]
    fn test_income_goal_format() {
        let fixed: IncomeGoalSource =
            serde_json::from_str(r#"{"source": "fixed", "amount": 250000000}"#).unwrap();
        assert_eq!(
            fixed,
            IncomeGoalSource::Fixed {
                amount: Money::from_units(2_500_000)
            }
        );

        let targets = [Money::from_units(100), Money::from_units(250)];
        assert_eq!(
            IncomeGoalSource::CategoryTargets.resolve(&targets),
            Money::from_units(350)
        );
        assert_eq!(fixed.resolve(&targets), Money::from_units(2_500_000));
    }

    #[test]
    fn test_empty_work_week_rejected() {
        let temp_dir = TempDir::new().unwrap();
        let paths = PacerPaths::with_base_dir(temp_dir.path().to_path_buf());
        let settings = Settings {
            work_week: Vec::new(),
            ..Settings::default()
        };
        assert!(settings.save(&paths).is_err());
    }
}
