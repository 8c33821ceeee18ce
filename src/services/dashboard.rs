//! Dashboard state assembly
//!
//! Gathers the ledger for one month, resolves the income goal from settings,
//! runs the projection engine for an explicit `today` and packages the
//! result with the daily quote.

use chrono::NaiveDate;
use serde::{Serialize, Serializer};
use tracing::{debug, warn};

use super::attribution::{ProportionalIncomeAttribution, RealAmountAttribution};
use super::quote::{daily_quote, Quote};
use super::saving::SavingService;
use crate::calendar::MonthRef;
use crate::config::Settings;
use crate::error::PacerResult;
use crate::models::Money;
use crate::projection::{
    CategoryStatus, LedgerSnapshot, MonthSummary, ProjectionEngine, SavingGoalStatus,
};
use crate::storage::Storage;

/// Everything the dashboard shows for one month
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DashboardState {
    #[serde(serialize_with = "as_display")]
    pub month: MonthRef,
    pub today: NaiveDate,
    pub quote: Option<Quote>,
    pub summary: MonthSummary,
    pub categories: Vec<CategoryStatus>,
    pub saving: Vec<SavingGoalStatus>,
}

fn as_display<S: Serializer>(month: &MonthRef, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.collect_str(month)
}

pub struct DashboardService<'a> {
    storage: &'a Storage,
    settings: &'a Settings,
    engine: ProjectionEngine,
    attribution: Box<dyn RealAmountAttribution + 'a>,
}

impl<'a> DashboardService<'a> {
    pub fn new(storage: &'a Storage, settings: &'a Settings) -> Self {
        Self {
            storage,
            settings,
            engine: settings.projection_engine(),
            attribution: Box::new(ProportionalIncomeAttribution),
        }
    }

    /// Use a different rule for crediting income to categories
    pub fn with_attribution(mut self, attribution: impl RealAmountAttribution + 'a) -> Self {
        self.attribution = Box::new(attribution);
        self
    }

    pub fn engine(&self) -> &ProjectionEngine {
        &self.engine
    }

    /// Read the ledger facts for `month`
    pub fn snapshot(&self, month: MonthRef) -> PacerResult<LedgerSnapshot> {
        let categories = self.storage.categories.get_all()?;
        let incomes = self.storage.income.get_for_month(month)?;
        let goals = SavingService::new(self.storage).list_with_totals()?;

        let month_income: Money = incomes.iter().map(|e| e.amount).sum();
        let monthly_income_goal = self
            .settings
            .income_goal
            .resolve(categories.iter().map(|c| &c.monthly_target));

        if monthly_income_goal.is_zero() {
            warn!(%month, "monthly income goal is zero; pacing figures will be empty");
        }

        Ok(LedgerSnapshot {
            month,
            monthly_income_goal,
            categories: self.attribution.attribute(&categories, month_income),
            incomes,
            goals,
        })
    }

    /// Build the dashboard for `month` as seen on `today`
    pub fn build(&self, month: MonthRef, today: NaiveDate) -> PacerResult<DashboardState> {
        let snapshot = self.snapshot(month)?;
        debug!(
            %month,
            %today,
            goal = %snapshot.monthly_income_goal,
            incomes = snapshot.incomes.len(),
            categories = snapshot.categories.len(),
            goals = snapshot.goals.len(),
            "projecting month"
        );

        let report = self.engine.project(&snapshot, today)?;
        debug!(
            real = report.summary.month_income_real,
            projected = report.summary.projected_month_income,
            pace = ?report.summary.pace,
            "projection done"
        );

        Ok(DashboardState {
            month,
            today,
            quote: self.settings.show_quote.then(|| daily_quote(today)),
            summary: report.summary,
            categories: report.categories,
            saving: report.saving,
        })
    }
}
