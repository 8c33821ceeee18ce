//! Saving goal status: progress, days left and the daily amount still needed
//!
//! The pace compares what the goal has been receiving per day since it was
//! opened with what it needs per day from now to the deadline.

use chrono::NaiveDate;
use serde::Serialize;

use super::thresholds::{PacingThresholds, StatusTier};
use super::{format_amount, percent_of};
use crate::models::{Money, SavingGoal, SavingGoalId};

/// How a goal is tracking toward its deadline
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SavingPace {
    /// Accumulated amount covers the target
    Reached,
    Ahead,
    OnPace,
    Behind,
    /// Deadline is today or past and the target is not covered
    Overdue,
    /// No deadline, so no daily amount can be computed
    NoDeadline,
}

impl SavingPace {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Reached => "meta alcanzada",
            Self::Ahead => "adelantado",
            Self::OnPace => "al día",
            Self::Behind => "atrasado",
            Self::Overdue => "plazo vencido",
            Self::NoDeadline => "sin fecha límite",
        }
    }
}

impl std::fmt::Display for SavingPace {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Status of one saving goal as of a given day
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SavingGoalStatus {
    pub id: SavingGoalId,
    pub name: String,

    #[serde(rename = "meta")]
    pub target: f64,

    #[serde(rename = "acumulado")]
    pub accumulated: f64,

    #[serde(rename = "porcentaje")]
    pub percent: f64,

    pub deadline: Option<NaiveDate>,

    /// Whole days from today to the deadline, never negative
    #[serde(rename = "dias_restantes")]
    pub days_remaining: Option<i64>,

    #[serde(rename = "diario_sugerido")]
    pub suggested_daily: f64,

    #[serde(rename = "ritmo")]
    pub pace: SavingPace,

    #[serde(rename = "mensaje")]
    pub message: String,
}

pub(crate) fn evaluate(
    thresholds: &PacingThresholds,
    goal: &SavingGoal,
    accumulated: Money,
    today: NaiveDate,
) -> SavingGoalStatus {
    let target = goal.target_amount.as_units();
    let accumulated = accumulated.as_units();
    let percent = percent_of(accumulated, target);
    let gap = (target - accumulated).max(0.0);

    let days_remaining = goal
        .deadline
        .map(|deadline| (deadline - today).num_days().max(0));

    let suggested_daily = match days_remaining {
        Some(days) if days > 0 => gap / days as f64,
        _ => 0.0,
    };

    let pace = if accumulated >= target {
        SavingPace::Reached
    } else {
        match days_remaining {
            None => SavingPace::NoDeadline,
            Some(0) => SavingPace::Overdue,
            Some(_) => {
                let days_open = ((today - goal.start_date).num_days() + 1).max(1);
                let historical = accumulated / days_open as f64;
                match thresholds.classify(percent_of(historical, suggested_daily), 100.0) {
                    StatusTier::FarBelow | StatusTier::Below => SavingPace::Behind,
                    StatusTier::OnTrack => SavingPace::OnPace,
                    StatusTier::Above => SavingPace::Ahead,
                }
            }
        }
    };

    let message = match pace {
        SavingPace::Reached => format!(
            "¡Meta alcanzada! Llevas {} de {}.",
            format_amount(accumulated),
            format_amount(target)
        ),
        SavingPace::NoDeadline => format!(
            "Sin fecha límite no se puede calcular un ritmo diario. Llevas {:.1}% de la meta.",
            percent
        ),
        SavingPace::Overdue => format!(
            "El plazo venció: faltan {} para completar la meta.",
            format_amount(gap)
        ),
        SavingPace::Ahead => format!(
            "Vas adelantado: necesitas {} diarios durante {} días y vienes ahorrando más que eso.",
            format_amount(suggested_daily),
            days_remaining.unwrap_or(0)
        ),
        SavingPace::OnPace => format!(
            "Vas al día: ahorra {} diarios durante {} días para llegar a la meta.",
            format_amount(suggested_daily),
            days_remaining.unwrap_or(0)
        ),
        SavingPace::Behind => format!(
            "Vas atrasado: necesitas {} diarios durante {} días para llegar a la meta.",
            format_amount(suggested_daily),
            days_remaining.unwrap_or(0)
        ),
    };

    SavingGoalStatus {
        id: goal.id,
        name: goal.name.clone(),
        target,
        accumulated,
        percent,
        deadline: goal.deadline,
        days_remaining,
        suggested_daily,
        pace,
        message,
    }
}
