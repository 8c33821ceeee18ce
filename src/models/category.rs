//! Spending category model
//!
//! A category carries a monthly target. How much of the month's real money
//! is attributed to it is decided outside the model (see
//! `services::attribution`).

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::CategoryId;
use super::money::Money;

/// Maximum length of a category or goal name
pub const MAX_NAME_LEN: usize = 80;

/// A budget category with a monthly target
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Category {
    /// Unique identifier
    pub id: CategoryId,

    /// Category name
    pub name: String,

    /// Target amount for a full month
    pub monthly_target: Money,

    /// Display position, assigned at creation
    pub sort_order: i32,

    /// When the category was created
    pub created_at: DateTime<Utc>,

    /// When the category was last modified
    pub updated_at: DateTime<Utc>,
}

impl Category {
    /// Create a new category
    pub fn new(name: impl Into<String>, monthly_target: Money) -> Self {
        let now = Utc::now();
        Self {
            id: CategoryId::new(),
            name: name.into(),
            monthly_target,
            sort_order: 0,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
        self.updated_at = Utc::now();
    }

    pub fn set_monthly_target(&mut self, target: Money) {
        self.monthly_target = target;
        self.updated_at = Utc::now();
    }

    /// Validate the category
    pub fn validate(&self) -> Result<(), CategoryValidationError> {
        if self.name.trim().is_empty() {
            return Err(CategoryValidationError::EmptyName);
        }

        if self.name.chars().count() > MAX_NAME_LEN {
            return Err(CategoryValidationError::NameTooLong(self.name.chars().count()));
        }

        if !self.monthly_target.is_positive() {
            return Err(CategoryValidationError::NonPositiveTarget);
        }

        Ok(())
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

/// Validation errors for categories
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CategoryValidationError {
    EmptyName,
    NameTooLong(usize),
    NonPositiveTarget,
}

impl CategoryValidationError {
    /// The field the rejection refers to
    pub fn field(&self) -> &'static str {
        match self {
            Self::EmptyName | Self::NameTooLong(_) => "name",
            Self::NonPositiveTarget => "monthly_target",
        }
    }
}

impl fmt::Display for CategoryValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyName => write!(f, "Category name cannot be empty"),
            Self::NameTooLong(len) => write!(
                f,
                "Category name too long ({} characters, max {})",
                len, MAX_NAME_LEN
            ),
            Self::NonPositiveTarget => write!(f, "Monthly target must be greater than zero"),
        }
    }
}

impl std::error::Error for CategoryValidationError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_category() {
        let category = Category::new("Mercado", Money::from_units(800_000));
        assert_eq!(category.name, "Mercado");
        assert_eq!(category.monthly_target, Money::from_units(800_000));
        assert!(category.validate().is_ok());
    }

    #[test]
    fn test_validation() {
        let mut category = Category::new("   ", Money::from_units(10));
        assert_eq!(category.validate(), Err(CategoryValidationError::EmptyName));

        category.name = "x".repeat(MAX_NAME_LEN + 1);
        assert!(matches!(
            category.validate(),
            Err(CategoryValidationError::NameTooLong(_))
        ));

        category.name = "Arriendo".into();
        category.monthly_target = Money::zero();
        let err = category.validate().unwrap_err();
        assert_eq!(err, CategoryValidationError::NonPositiveTarget);
        assert_eq!(err.field(), "monthly_target");
    }

    #[test]
    fn test_setters_touch_updated_at() {
        let mut category = Category::new("Transporte", Money::from_units(200_000));
        let created = category.updated_at;
        category.set_monthly_target(Money::from_units(250_000));
        category.set_name("Transporte público");
        assert!(category.updated_at >= created);
        assert_eq!(category.name, "Transporte público");
    }

    #[test]
    fn test_serialization() {
        let category = Category::new("Salud", Money::from_units(120_000));
        let json = serde_json::to_string(&category).unwrap();
        let back: Category = serde_json::from_str(&json).unwrap();
        assert_eq!(category, back);
    }
}
