//! Per-category progress against the share of the month already elapsed

use serde::Serialize;

use super::percent_of;
use super::thresholds::{PacingThresholds, StatusTier};
use crate::models::{Category, CategoryId};

/// Progress of one category for the month
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryStatus {
    pub id: CategoryId,
    pub name: String,

    #[serde(rename = "meta_mes")]
    pub monthly_target: f64,

    /// Amount attributed to the category so far this month
    #[serde(rename = "real_mes_estimado")]
    pub real_amount: f64,

    #[serde(rename = "porcentaje")]
    pub percent: f64,

    /// Share of the month elapsed, as a percentage (calendar days)
    #[serde(rename = "esperado")]
    pub expected_percent: f64,

    #[serde(rename = "estado")]
    pub status: StatusTier,

    /// Amount per remaining calendar day (today included) to reach the target
    #[serde(rename = "diario_sugerido")]
    pub suggested_daily: f64,
}

pub(crate) fn evaluate(
    thresholds: &PacingThresholds,
    category: &Category,
    real_amount: f64,
    day_of_month: u32,
    days_in_month: u32,
) -> CategoryStatus {
    let target = category.monthly_target.as_units();

    let percent = percent_of(real_amount, target);
    let expected_percent = percent_of(day_of_month as f64, days_in_month as f64);
    let status = thresholds.classify(percent, expected_percent);

    let remaining_days = days_in_month.saturating_sub(day_of_month.max(1)) + 1;
    let suggested_daily = (target - real_amount).max(0.0) / remaining_days as f64;

    CategoryStatus {
        id: category.id,
        name: category.name.clone(),
        monthly_target: target,
        real_amount,
        percent,
        expected_percent,
        status,
        suggested_daily,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Money;

    fn category(target: i64) -> Category {
        Category::new("Arriendo", Money::from_units(target))
    }

    #[test]
    fn test_twenty_percent_on_day_twenty_is_far_below() {
        let c = category(1_000_000);
        let s = evaluate(&PacingThresholds::default(), &c, 200_000.0, 20, 30);

        assert!((s.percent - 20.0).abs() < 1e-9);
        assert!((s.expected_percent - 66.666_666).abs() < 1e-3);
        assert_eq!(s.status, StatusTier::FarBelow);
        // 800,000 left over days 20..=30
        assert!((s.suggested_daily - 72_727.272_727).abs() < 1e-3);
        assert_eq!(s.name, "Arriendo");
        assert_eq!(s.id, c.id);
    }

    #[test]
    fn test_on_track_midmonth() {
        let s = evaluate(&PacingThresholds::default(), &category(300_000), 150_000.0, 15, 30);
        assert_eq!(s.status, StatusTier::OnTrack);
        assert!((s.suggested_daily - 150_000.0 / 16.0).abs() < 1e-6);
    }

    #[test]
    fn test_target_met_needs_nothing_more() {
        let s = evaluate(&PacingThresholds::default(), &category(100_000), 120_000.0, 10, 31);
        assert_eq!(s.suggested_daily, 0.0);
        assert_eq!(s.status, StatusTier::Above);
        assert!((s.percent - 120.0).abs() < 1e-9);
    }

    #[test]
    fn test_zero_target_reports_zero_percent() {
        let mut c = category(1);
        c.monthly_target = Money::zero();
        let s = evaluate(&PacingThresholds::default(), &c, 5_000.0, 10, 30);
        assert_eq!(s.percent, 0.0);
        assert_eq!(s.suggested_daily, 0.0);
    }

    #[test]
    fn test_last_day_puts_whole_gap_on_today() {
        let s = evaluate(&PacingThresholds::default(), &category(310_000), 300_000.0, 31, 31);
        assert!((s.expected_percent - 100.0).abs() < 1e-9);
        assert!((s.suggested_daily - 10_000.0).abs() < 1e-9);
    }

    #[test]
    fn test_month_not_started() {
        let s = evaluate(&PacingThresholds::default(), &category(300_000), 0.0, 0, 30);
        assert_eq!(s.expected_percent, 0.0);
        assert_eq!(s.status, StatusTier::OnTrack);
        assert!((s.suggested_daily - 10_000.0).abs() < 1e-9);
    }

    #[test]
    fn test_contract_field_names() {
        let s = evaluate(&PacingThresholds::default(), &category(1_000_000), 200_000.0, 20, 30);
        let json = serde_json::to_value(&s).unwrap();
        for key in [
            "meta_mes",
            "real_mes_estimado",
            "porcentaje",
            "esperado",
            "estado",
            "diario_sugerido",
        ] {
            assert!(json.get(key).is_some(), "missing {}", key);
        }
        assert_eq!(json["estado"], "muy por debajo");
    }
}
