//! Income entry model
//!
//! One entry per recorded income event. Entries are immutable once
//! recorded and belong to the month of their date.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use super::ids::IncomeId;
use super::money::Money;

/// Validation errors for income entries
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IncomeValidationError {
    NonPositiveAmount,
}

impl std::fmt::Display for IncomeValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NonPositiveAmount => write!(f, "Income amount must be greater than zero"),
        }
    }
}

impl std::error::Error for IncomeValidationError {}

/// A single recorded income
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IncomeEntry {
    pub id: IncomeId,
    pub date: NaiveDate,
    pub amount: Money,
    #[serde(default)]
    pub notes: String,
    pub created_at: DateTime<Utc>,
}

impl IncomeEntry {
    /// Create a new income entry
    pub fn new(date: NaiveDate, amount: Money) -> Self {
        Self {
            id: IncomeId::new(),
            date,
            amount,
            notes: String::new(),
            created_at: Utc::now(),
        }
    }

    /// Builder-style notes
    pub fn with_notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = notes.into();
        self
    }

    /// Validate the entry
    pub fn validate(&self) -> Result<(), IncomeValidationError> {
        if !self.amount.is_positive() {
            return Err(IncomeValidationError::NonPositiveAmount);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_new_income_entry() {
        let entry = IncomeEntry::new(date(2025, 1, 15), Money::from_units(120_000))
            .with_notes("Turno de la mañana");
        assert_eq!(entry.amount.cents(), 12_000_000);
        assert_eq!(entry.notes, "Turno de la mañana");
        assert!(entry.validate().is_ok());
    }

    #[test]
    fn test_validation_rejects_zero_and_negative() {
        let zero = IncomeEntry::new(date(2025, 1, 15), Money::zero());
        assert_eq!(
            zero.validate(),
            Err(IncomeValidationError::NonPositiveAmount)
        );

        let negative = IncomeEntry::new(date(2025, 1, 15), Money::from_cents(-100));
        assert!(negative.validate().is_err());
    }

    #[test]
    fn test_serialization() {
        let entry = IncomeEntry::new(date(2025, 2, 3), Money::from_units(50_000));
        let json = serde_json::to_string(&entry).unwrap();
        assert!(json.contains("\"2025-02-03\""));
        let back: IncomeEntry = serde_json::from_str(&json).unwrap();
        assert_eq!(entry, back);
    }
}
