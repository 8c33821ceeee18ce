//! CLI command handlers
//!
//! Bridges clap argument parsing with the service layer. Handlers print to
//! stdout and return errors for `main` to report.

pub mod category;
pub mod dashboard;
pub mod export;
pub mod income;
pub mod saving;

pub use category::{handle_category_command, CategoryCommands};
pub use dashboard::{handle_dashboard_command, DashboardArgs, OutputFormat};
pub use export::{handle_export_command, ExportArgs, ExportFormat};
pub use income::{handle_income_command, IncomeCommands};
pub use saving::{handle_saving_command, SavingCommands};

use chrono::NaiveDate;

use crate::calendar::{parse_date, MonthRef};
use crate::error::{PacerError, PacerResult};
use crate::models::Money;

/// Parse a non-negative amount such as "1500", "1500.50" or "$1500"
pub fn parse_amount(input: &str) -> PacerResult<Money> {
    let amount = Money::parse(input)?;
    if amount.is_negative() {
        return Err(PacerError::InvalidAmount(format!(
            "{} is negative",
            input.trim()
        )));
    }
    Ok(amount)
}

/// The local calendar date, or `--today` when given
pub fn resolve_today(input: Option<&str>) -> PacerResult<NaiveDate> {
    match input {
        Some(s) => parse_date(s),
        None => Ok(chrono::Local::now().date_naive()),
    }
}

/// `YYYY-MM-DD`, defaulting to `fallback`
pub fn parse_date_or(input: Option<&str>, fallback: NaiveDate) -> PacerResult<NaiveDate> {
    input.map_or(Ok(fallback), parse_date)
}

/// `YYYY-MM`, defaulting to the month containing `today`
pub fn parse_month_or(input: Option<&str>, today: NaiveDate) -> PacerResult<MonthRef> {
    input.map_or(Ok(MonthRef::of(today)), MonthRef::parse)
}
