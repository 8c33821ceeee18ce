//! Dashboard rendering: month summary, category table, saving goals

use tabled::Tabled;

use super::{percent, table};
use crate::projection::{format_amount_with, SavingGoalStatus};
use crate::services::DashboardState;

#[derive(Tabled)]
struct CategoryStatusRow {
    #[tabled(rename = "Category")]
    name: String,
    #[tabled(rename = "Target")]
    target: String,
    #[tabled(rename = "Estimated")]
    real: String,
    #[tabled(rename = "%")]
    percent: String,
    #[tabled(rename = "Expected")]
    expected: String,
    #[tabled(rename = "Status")]
    status: String,
    #[tabled(rename = "Per day")]
    daily: String,
}

#[derive(Tabled)]
struct GoalStatusRow {
    #[tabled(rename = "Goal")]
    name: String,
    #[tabled(rename = "Target")]
    target: String,
    #[tabled(rename = "Saved")]
    saved: String,
    #[tabled(rename = "%")]
    percent: String,
    #[tabled(rename = "Days left")]
    days: String,
    #[tabled(rename = "Per day")]
    daily: String,
    #[tabled(rename = "Pace")]
    pace: String,
}

pub fn format_dashboard(state: &DashboardState, symbol: &str) -> String {
    let s = &state.summary;
    let money = |v: f64| format_amount_with(v, symbol);
    let mut out = String::new();

    out.push_str(&format!("Budget pacing for {} (as of {})\n", state.month, state.today));
    if let Some(quote) = &state.quote {
        out.push_str(&format!("\n  \"{}\" ({})\n", quote.text, quote.reference));
    }

    out.push('\n');
    out.push_str(&format!(
        "  Working days: {} of {} elapsed (day {} of the month)\n",
        s.elapsed_working_days, s.working_days, s.day_of_month
    ));
    out.push_str(&format!(
        "  Month target: {:>14}   Daily target: {}\n",
        money(s.month_target),
        money(s.daily_target)
    ));
    out.push_str(&format!(
        "  Income so far: {:>13}   Daily average: {}\n",
        money(s.month_income_real),
        money(s.avg_daily_real)
    ));
    out.push_str(&format!(
        "  Projected month: {:>11}   Projected year: {}\n",
        money(s.projected_month_income),
        money(s.projected_year_income)
    ));
    if let (Some(pace), Some(p)) = (s.pace, s.pace_percent) {
        out.push_str(&format!("  Pace: {} ({})\n", pace, percent(p)));
    }
    out.push_str(&format!("\n  {}\n  {}\n", s.month_message, s.day_message));

    out.push_str("\nCategories\n");
    if state.categories.is_empty() {
        out.push_str("  No categories yet.\n");
    } else {
        out.push_str(&table(state.categories.iter().map(|c| CategoryStatusRow {
            name: c.name.clone(),
            target: money(c.monthly_target),
            real: money(c.real_amount),
            percent: percent(c.percent),
            expected: percent(c.expected_percent),
            status: c.status.to_string(),
            daily: money(c.suggested_daily),
        })));
        out.push('\n');
    }

    out.push_str("\nSaving goals\n");
    if state.saving.is_empty() {
        out.push_str("  No saving goals yet.\n");
    } else {
        out.push_str(&table(state.saving.iter().map(|g| goal_row(g, symbol))));
        out.push('\n');
        for g in &state.saving {
            out.push_str(&format!("  {}: {}\n", g.name, g.message));
        }
    }

    out
}

fn goal_row(g: &SavingGoalStatus, symbol: &str) -> GoalStatusRow {
    GoalStatusRow {
        name: g.name.clone(),
        target: format_amount_with(g.target, symbol),
        saved: format_amount_with(g.accumulated, symbol),
        percent: percent(g.percent),
        days: g
            .days_remaining
            .map(|d| d.to_string())
            .unwrap_or_else(|| "-".to_string()),
        daily: format_amount_with(g.suggested_daily, symbol),
        pace: g.pace.to_string(),
    }
}

/// Status of one goal, shown after a deposit
pub fn format_goal_status(status: &SavingGoalStatus, symbol: &str) -> String {
    format!(
        "{}\n{}",
        table(std::iter::once(goal_row(status, symbol))),
        status.message
    )
}
