//! Projection engine
//!
//! Pure computations over a snapshot of ledger facts. Nothing here reads
//! storage or the clock: callers pass the snapshot and `today`, and the same
//! inputs always produce the same report.

pub mod category;
pub mod month;
pub mod saving;
pub mod thresholds;

pub use category::CategoryStatus;
pub use month::MonthSummary;
pub use saving::{SavingGoalStatus, SavingPace};
pub use thresholds::{PacingThresholds, StatusTier};

use chrono::NaiveDate;
use serde::Serialize;

use crate::calendar::{MonthRef, WorkCalendar};
use crate::error::PacerResult;
use crate::models::{Category, IncomeEntry, Money, SavingGoal};

/// A category with the amount attributed to it this month
#[derive(Debug, Clone)]
pub struct CategoryActual {
    pub category: Category,
    pub real_amount: f64,
}

/// A saving goal with the sum of its deposits
#[derive(Debug, Clone)]
pub struct GoalProgress {
    pub goal: SavingGoal,
    pub accumulated: Money,
}

/// Ledger facts needed to project one month
#[derive(Debug, Clone)]
pub struct LedgerSnapshot {
    pub month: MonthRef,
    pub monthly_income_goal: Money,
    pub incomes: Vec<IncomeEntry>,
    pub categories: Vec<CategoryActual>,
    pub goals: Vec<GoalProgress>,
}

/// Everything the engine derives from a snapshot
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProjectionReport {
    pub summary: MonthSummary,
    pub categories: Vec<CategoryStatus>,
    pub saving: Vec<SavingGoalStatus>,
}

/// Computes month, category and saving-goal status
#[derive(Debug, Clone, Default)]
pub struct ProjectionEngine {
    calendar: WorkCalendar,
    thresholds: PacingThresholds,
}

impl ProjectionEngine {
    pub fn new(calendar: WorkCalendar, thresholds: PacingThresholds) -> Self {
        Self {
            calendar,
            thresholds,
        }
    }

    pub fn calendar(&self) -> &WorkCalendar {
        &self.calendar
    }

    pub fn thresholds(&self) -> &PacingThresholds {
        &self.thresholds
    }

    /// Project a whole snapshot. Category and goal order is preserved.
    pub fn project(
        &self,
        snapshot: &LedgerSnapshot,
        today: NaiveDate,
    ) -> PacerResult<ProjectionReport> {
        let summary = self.month_summary(
            snapshot.month,
            snapshot.monthly_income_goal,
            &snapshot.incomes,
            today,
        )?;

        let day = month::progress_day(snapshot.month, today);
        let days = snapshot.month.days();
        let categories = snapshot
            .categories
            .iter()
            .map(|c| self.category_status(&c.category, c.real_amount, day, days))
            .collect();

        let saving = snapshot
            .goals
            .iter()
            .map(|g| self.saving_goal_status(&g.goal, g.accumulated, today))
            .collect();

        Ok(ProjectionReport {
            summary,
            categories,
            saving,
        })
    }

    /// Month income pacing. Fails for a malformed month or one with no
    /// working days.
    pub fn month_summary(
        &self,
        month: MonthRef,
        month_target: Money,
        incomes: &[IncomeEntry],
        today: NaiveDate,
    ) -> PacerResult<MonthSummary> {
        month::summarize(
            &self.calendar,
            &self.thresholds,
            month,
            month_target,
            incomes,
            today,
        )
    }

    pub fn category_status(
        &self,
        category: &Category,
        real_amount: f64,
        day_of_month: u32,
        days_in_month: u32,
    ) -> CategoryStatus {
        category::evaluate(
            &self.thresholds,
            category,
            real_amount,
            day_of_month,
            days_in_month,
        )
    }

    pub fn saving_goal_status(
        &self,
        goal: &SavingGoal,
        accumulated: Money,
        today: NaiveDate,
    ) -> SavingGoalStatus {
        saving::evaluate(&self.thresholds, goal, accumulated, today)
    }
}

/// `part / whole * 100`, or 0 when `whole` is not positive
pub(crate) fn percent_of(part: f64, whole: f64) -> f64 {
    if whole > 0.0 {
        part / whole * 100.0
    } else {
        0.0
    }
}

/// Whole currency units with thousands separators, e.g. `$72,727`
pub(crate) fn format_amount(value: f64) -> String {
    format_amount_with(value, "$")
}

/// [`format_amount`] with a custom currency symbol
pub fn format_amount_with(value: f64, symbol: &str) -> String {
    let rounded = value.round() as i64;
    let digits = rounded.unsigned_abs().to_string();

    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    if rounded < 0 {
        format!("-{}{}", symbol, grouped)
    } else {
        format!("{}{}", symbol, grouped)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn snapshot() -> LedgerSnapshot {
        let rent = Category::new("Arriendo", Money::from_units(1_000_000));
        let food = Category::new("Comida", Money::from_units(600_000));
        let trip = SavingGoal::new(
            "Viaje",
            Money::from_units(1_000_000),
            Some(date(2025, 7, 1)),
            date(2025, 5, 1),
        );

        LedgerSnapshot {
            month: MonthRef::new(2025, 6).unwrap(),
            monthly_income_goal: Money::from_units(1_600_000),
            incomes: vec![
                IncomeEntry::new(date(2025, 6, 2), Money::from_units(300_000)),
                IncomeEntry::new(date(2025, 6, 9), Money::from_units(200_000)),
            ],
            categories: vec![
                CategoryActual {
                    category: rent,
                    real_amount: 312_500.0,
                },
                CategoryActual {
                    category: food,
                    real_amount: 187_500.0,
                },
            ],
            goals: vec![GoalProgress {
                goal: trip,
                accumulated: Money::from_units(250_000),
            }],
        }
    }

    #[test]
    fn test_project_keeps_input_order() {
        let engine = ProjectionEngine::default();
        let report = engine.project(&snapshot(), date(2025, 6, 10)).unwrap();

        let names: Vec<_> = report.categories.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, ["Arriendo", "Comida"]);
        assert_eq!(report.saving.len(), 1);
        assert_eq!(report.summary.working_days, 21);
        assert_eq!(report.summary.elapsed_working_days, 7);
        assert_eq!(report.summary.day_of_month, 10);
        assert!((report.categories[0].expected_percent - 100.0 / 3.0).abs() < 1e-9);
    }

    #[test]
    fn test_project_is_repeatable() {
        let engine = ProjectionEngine::default();
        let snap = snapshot();
        let first = engine.project(&snap, date(2025, 6, 10)).unwrap();
        let second = engine.project(&snap, date(2025, 6, 10)).unwrap();

        assert_eq!(first, second);
        assert_eq!(
            serde_json::to_string(&first).unwrap(),
            serde_json::to_string(&second).unwrap()
        );
    }

    #[test]
    fn test_more_income_never_lowers_projection() {
        let engine = ProjectionEngine::default();
        let mut snap = snapshot();
        let before = engine.project(&snap, date(2025, 6, 10)).unwrap();

        snap.incomes
            .push(IncomeEntry::new(date(2025, 6, 10), Money::from_units(50_000)));
        let after = engine.project(&snap, date(2025, 6, 10)).unwrap();

        assert!(after.summary.projected_month_income >= before.summary.projected_month_income);
        assert!(after.summary.required_daily_income <= before.summary.required_daily_income);
    }

    #[test]
    fn test_degenerate_month_fails_the_whole_report() {
        let engine = ProjectionEngine::new(WorkCalendar::new(&[], []), PacingThresholds::default());
        assert!(engine.project(&snapshot(), date(2025, 6, 10)).is_err());
    }

    #[test]
    fn test_percent_of() {
        assert_eq!(percent_of(0.0, 0.0), 0.0);
        assert_eq!(percent_of(50.0, 0.0), 0.0);
        assert_eq!(percent_of(0.0, 10.0), 0.0);
        assert!((percent_of(25.0, 200.0) - 12.5).abs() < 1e-12);
    }

    #[test]
    fn test_format_amount() {
        assert_eq!(format_amount(0.0), "$0");
        assert_eq!(format_amount(999.4), "$999");
        assert_eq!(format_amount(1_000.0), "$1,000");
        assert_eq!(format_amount(72_727.27), "$72,727");
        assert_eq!(format_amount(27_600_000.0), "$27,600,000");
        assert_eq!(format_amount(-1_500.0), "-$1,500");
        assert_eq!(format_amount_with(1_234_567.0, "€"), "€1,234,567");
    }
}
