//! How much of the month's real money each category is credited with
//!
//! The ledger records income as a whole, not per category, so the amount a
//! category has "received" is an estimate produced by an attribution rule.

use crate::models::{Category, Money};
use crate::projection::CategoryActual;

/// Splits the month's real income across categories
pub trait RealAmountAttribution {
    /// One entry per category, in the order given
    fn attribute(&self, categories: &[Category], month_income: Money) -> Vec<CategoryActual>;
}

/// Each category gets the month's income weighted by its share of the
/// total monthly target
#[derive(Debug, Clone, Copy, Default)]
pub struct ProportionalIncomeAttribution;

impl RealAmountAttribution for ProportionalIncomeAttribution {
    fn attribute(&self, categories: &[Category], month_income: Money) -> Vec<CategoryActual> {
        let total_target: Money = categories.iter().map(|c| c.monthly_target).sum();
        let income = month_income.as_units();

        categories
            .iter()
            .map(|category| {
                let real_amount = if total_target.is_positive() {
                    income * category.monthly_target.cents() as f64 / total_target.cents() as f64
                } else {
                    0.0
                };
                CategoryActual {
                    category: category.clone(),
                    real_amount,
                }
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_follows_target_share() {
        let categories = vec![
            Category::new("Arriendo", Money::from_units(1_000_000)),
            Category::new("Comida", Money::from_units(600_000)),
            Category::new("Ocio", Money::from_units(400_000)),
        ];

        let actuals = ProportionalIncomeAttribution.attribute(&categories, Money::from_units(500_000));

        let amounts: Vec<_> = actuals.iter().map(|a| a.real_amount).collect();
        assert!((amounts[0] - 250_000.0).abs() < 1e-6);
        assert!((amounts[1] - 150_000.0).abs() < 1e-6);
        assert!((amounts[2] - 100_000.0).abs() < 1e-6);
        assert!((amounts.iter().sum::<f64>() - 500_000.0).abs() < 1e-6);
        assert_eq!(actuals[2].category.name, "Ocio");
    }

    #[test]
    fn test_every_category_shows_the_same_percentage() {
        let categories = vec![
            Category::new("A", Money::from_units(300)),
            Category::new("B", Money::from_units(700)),
        ];
        let actuals = ProportionalIncomeAttribution.attribute(&categories, Money::from_units(250));

        let pct: Vec<_> = actuals
            .iter()
            .map(|a| a.real_amount / a.category.monthly_target.as_units())
            .collect();
        assert!((pct[0] - pct[1]).abs() < 1e-12);
    }

    #[test]
    fn test_no_targets_no_attribution() {
        let mut c = Category::new("A", Money::from_units(1));
        c.monthly_target = Money::zero();
        let actuals = ProportionalIncomeAttribution.attribute(&[c], Money::from_units(100));
        assert_eq!(actuals[0].real_amount, 0.0);

        assert!(ProportionalIncomeAttribution
            .attribute(&[], Money::from_units(100))
            .is_empty());
    }
}
