//! Lists of ledger facts: categories, income entries, goals, audit history

use tabled::Tabled;

use super::table;
use crate::audit::AuditEntry;
use crate::models::{Category, IncomeEntry, Money};
use crate::projection::GoalProgress;

#[derive(Tabled)]
struct CategoryRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Category")]
    name: String,
    #[tabled(rename = "Monthly target")]
    target: String,
}

pub fn format_category_list(categories: &[Category], symbol: &str) -> String {
    if categories.is_empty() {
        return "No categories yet.\n\nAdd one with 'pacer category add <name> <target>'."
            .to_string();
    }

    let total: Money = categories.iter().map(|c| c.monthly_target).sum();
    let rows = categories.iter().map(|c| CategoryRow {
        id: c.id.to_string(),
        name: c.name.clone(),
        target: c.monthly_target.format_with_symbol(symbol),
    });

    format!(
        "{}\nTotal monthly target: {}",
        table(rows),
        total.format_with_symbol(symbol)
    )
}

#[derive(Tabled)]
struct IncomeRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Date")]
    date: String,
    #[tabled(rename = "Amount")]
    amount: String,
    #[tabled(rename = "Notes")]
    notes: String,
}

pub fn format_income_list(entries: &[IncomeEntry], symbol: &str) -> String {
    if entries.is_empty() {
        return "No income recorded for this month.".to_string();
    }

    let total: Money = entries.iter().map(|e| e.amount).sum();
    let rows = entries.iter().map(|e| IncomeRow {
        id: e.id.to_string(),
        date: e.date.to_string(),
        amount: e.amount.format_with_symbol(symbol),
        notes: e.notes.clone(),
    });

    format!(
        "{}\n{} entries, total {}",
        table(rows),
        entries.len(),
        total.format_with_symbol(symbol)
    )
}

#[derive(Tabled)]
struct GoalRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Goal")]
    name: String,
    #[tabled(rename = "Target")]
    target: String,
    #[tabled(rename = "Saved")]
    saved: String,
    #[tabled(rename = "Deadline")]
    deadline: String,
}

pub fn format_goal_list(goals: &[GoalProgress], symbol: &str) -> String {
    if goals.is_empty() {
        return "No saving goals yet.\n\nAdd one with 'pacer saving add-goal <name> <target>'."
            .to_string();
    }

    table(goals.iter().map(|g| GoalRow {
        id: g.goal.id.to_string(),
        name: g.goal.name.clone(),
        target: g.goal.target_amount.format_with_symbol(symbol),
        saved: g.accumulated.format_with_symbol(symbol),
        deadline: g
            .goal
            .deadline
            .map(|d| d.to_string())
            .unwrap_or_else(|| "-".to_string()),
    }))
}

pub fn format_history(entries: &[AuditEntry]) -> String {
    if entries.is_empty() {
        return "No changes recorded yet.".to_string();
    }

    entries
        .iter()
        .map(AuditEntry::format_human_readable)
        .collect::<Vec<_>>()
        .join("\n")
}
