//! Month summary: income goal against income recorded so far
//!
//! Daily target is the month goal spread over working days. Projections
//! assume the average earned per elapsed working day holds for the rest of
//! the month (and for twelve identical months).

use chrono::NaiveDate;
use serde::Serialize;

use super::thresholds::{PacingThresholds, StatusTier};
use super::{format_amount, percent_of};
use crate::calendar::{MonthRef, WorkCalendar};
use crate::error::{PacerError, PacerResult};
use crate::models::{IncomeEntry, Money};

/// Income pacing for one month as of a given day
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MonthSummary {
    pub year: i32,
    pub month: u32,
    pub working_days: u32,
    pub elapsed_working_days: u32,
    pub day_of_month: u32,

    pub month_target: f64,
    pub month_income_real: f64,
    pub daily_target: f64,
    pub avg_daily_real: f64,
    pub projected_month_income: f64,
    pub projected_year_income: f64,

    /// Income so far against the income the daily target would have
    /// produced by now. `None` until a working day has elapsed.
    pub pace_percent: Option<f64>,
    pub pace: Option<StatusTier>,

    /// Income needed per remaining working day (today included) to close the gap
    pub required_daily_income: f64,

    pub month_message: String,
    pub day_message: String,
}

/// Day of `month` reached by `today`: 0 before the month, its last day after it
pub(crate) fn progress_day(month: MonthRef, today: NaiveDate) -> u32 {
    if today < month.first_day() {
        0
    } else if today > month.last_day() {
        month.days()
    } else {
        crate::calendar::day_of_month(today)
    }
}

pub(crate) fn summarize(
    calendar: &WorkCalendar,
    thresholds: &PacingThresholds,
    month: MonthRef,
    month_target: Money,
    incomes: &[IncomeEntry],
    today: NaiveDate,
) -> PacerResult<MonthSummary> {
    let (year, m) = (month.year(), month.month());

    let working_days = calendar.working_days_in_month(year, m)?;
    if working_days == 0 {
        return Err(PacerError::DegenerateMonth { year, month: m });
    }

    let elapsed = calendar.elapsed_working_days(year, m, today)?;
    let remaining = calendar.remaining_working_days(year, m, today)?;

    let target = month_target.as_units();
    let real: f64 = incomes
        .iter()
        .filter(|entry| month.contains(entry.date))
        .map(|entry| entry.amount.as_units())
        .sum();

    let daily_target = target / working_days as f64;
    let avg_daily_real = if elapsed == 0 {
        0.0
    } else {
        real / elapsed as f64
    };
    let projected_month_income = avg_daily_real * working_days as f64;
    let projected_year_income = projected_month_income * 12.0;

    let expected_so_far = daily_target * elapsed as f64;
    let pace_percent = if expected_so_far > 0.0 {
        Some(percent_of(real, expected_so_far))
    } else {
        None
    };
    let pace = pace_percent.map(|p| thresholds.classify(p, 100.0));

    let gap = (target - real).max(0.0);
    let required_daily_income = gap / remaining.max(1) as f64;

    let mut summary = MonthSummary {
        year,
        month: m,
        working_days,
        elapsed_working_days: elapsed,
        day_of_month: progress_day(month, today),
        month_target: target,
        month_income_real: real,
        daily_target,
        avg_daily_real,
        projected_month_income,
        projected_year_income,
        pace_percent,
        pace,
        required_daily_income,
        month_message: String::new(),
        day_message: String::new(),
    };
    summary.month_message = month_message(&summary);
    summary.day_message = day_message(&summary, month, today, remaining);
    Ok(summary)
}

fn month_message(s: &MonthSummary) -> String {
    if s.month_target <= 0.0 {
        return "Aún no hay meta mensual: asigna metas a tus categorías para empezar a medir tu ritmo."
            .to_string();
    }

    let (Some(pace), Some(percent)) = (s.pace, s.pace_percent) else {
        return format!(
            "El mes aún no arranca. Tu meta es {} ({} por día hábil).",
            format_amount(s.month_target),
            format_amount(s.daily_target)
        );
    };

    let projection = format!(
        "Proyección: {} de {}.",
        format_amount(s.projected_month_income),
        format_amount(s.month_target)
    );
    match pace {
        StatusTier::FarBelow => format!(
            "Vas muy por debajo de la meta: llevas {:.0}% de lo esperado a la fecha. {}",
            percent, projection
        ),
        StatusTier::Below => format!(
            "Vas un poco por debajo del ritmo esperado ({:.0}%). {}",
            percent, projection
        ),
        StatusTier::OnTrack => format!(
            "Vas en línea con tu meta mensual ({:.0}%). {}",
            percent, projection
        ),
        StatusTier::Above => format!(
            "¡Vas por encima de tu meta mensual ({:.0}%)! {}",
            percent, projection
        ),
    }
}

fn day_message(s: &MonthSummary, month: MonthRef, today: NaiveDate, remaining: u32) -> String {
    if today > month.last_day() {
        return format!(
            "El mes terminó: cerraste con {} de {}.",
            format_amount(s.month_income_real),
            format_amount(s.month_target)
        );
    }

    if s.month_target > 0.0 && s.month_income_real >= s.month_target {
        return "Meta del mes cumplida. Todo lo que entre desde hoy es ganancia extra.".to_string();
    }

    if remaining == 0 {
        return format!(
            "No quedan días hábiles este mes. Faltan {} para la meta.",
            format_amount(s.month_target - s.month_income_real)
        );
    }

    let days = if remaining == 1 {
        "1 día hábil restante".to_string()
    } else {
        format!("{} días hábiles restantes", remaining)
    };
    format!(
        "Para cumplir la meta necesitas {} por día ({}).",
        format_amount(s.required_daily_income),
        days
    )
}
