//! Saving goals and the deposits made toward them
//!
//! A goal's accumulated amount is always the sum of its deposits; it is never
//! stored on the goal itself.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::category::MAX_NAME_LEN;
use super::ids::{DepositId, SavingGoalId};
use super::money::Money;

/// A savings target with an optional deadline
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SavingGoal {
    pub id: SavingGoalId,
    pub name: String,
    pub target_amount: Money,

    /// Date by which the target should be reached
    #[serde(default)]
    pub deadline: Option<NaiveDate>,

    /// Day the goal was opened; anchors the historical saving pace
    pub start_date: NaiveDate,

    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl SavingGoal {
    /// Create a goal opened on `start_date`
    pub fn new(
        name: impl Into<String>,
        target_amount: Money,
        deadline: Option<NaiveDate>,
        start_date: NaiveDate,
    ) -> Self {
        let now = Utc::now();
        Self {
            id: SavingGoalId::new(),
            name: name.into(),
            target_amount,
            deadline,
            start_date,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
        self.updated_at = Utc::now();
    }

    pub fn set_target_amount(&mut self, target: Money) {
        self.target_amount = target;
        self.updated_at = Utc::now();
    }

    pub fn set_deadline(&mut self, deadline: Option<NaiveDate>) {
        self.deadline = deadline;
        self.updated_at = Utc::now();
    }

    /// Validate the goal
    pub fn validate(&self) -> Result<(), SavingValidationError> {
        if self.name.trim().is_empty() {
            return Err(SavingValidationError::EmptyName);
        }

        if self.name.chars().count() > MAX_NAME_LEN {
            return Err(SavingValidationError::NameTooLong(self.name.chars().count()));
        }

        if !self.target_amount.is_positive() {
            return Err(SavingValidationError::NonPositiveTarget);
        }

        if let Some(deadline) = self.deadline {
            if deadline < self.start_date {
                return Err(SavingValidationError::DeadlineBeforeStart {
                    deadline,
                    start: self.start_date,
                });
            }
        }

        Ok(())
    }
}

impl fmt::Display for SavingGoal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

/// A deposit toward a saving goal. Deposits are append-only.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SavingDeposit {
    pub id: DepositId,
    pub goal_id: SavingGoalId,
    pub date: NaiveDate,
    pub amount: Money,
    pub created_at: DateTime<Utc>,
}

impl SavingDeposit {
    pub fn new(goal_id: SavingGoalId, date: NaiveDate, amount: Money) -> Self {
        Self {
            id: DepositId::new(),
            goal_id,
            date,
            amount,
            created_at: Utc::now(),
        }
    }

    pub fn validate(&self) -> Result<(), SavingValidationError> {
        if !self.amount.is_positive() {
            return Err(SavingValidationError::NonPositiveDeposit);
        }
        Ok(())
    }
}

/// Validation errors for goals and deposits
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SavingValidationError {
    EmptyName,
    NameTooLong(usize),
    NonPositiveTarget,
    DeadlineBeforeStart {
        deadline: NaiveDate,
        start: NaiveDate,
    },
    NonPositiveDeposit,
}

impl SavingValidationError {
    /// The field the rejection refers to
    pub fn field(&self) -> &'static str {
        match self {
            Self::EmptyName | Self::NameTooLong(_) => "name",
            Self::NonPositiveTarget => "target_amount",
            Self::DeadlineBeforeStart { .. } => "deadline",
            Self::NonPositiveDeposit => "amount",
        }
    }
}

impl fmt::Display for SavingValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyName => write!(f, "Goal name cannot be empty"),
            Self::NameTooLong(len) => write!(
                f,
                "Goal name too long ({} characters, max {})",
                len, MAX_NAME_LEN
            ),
            Self::NonPositiveTarget => write!(f, "Target amount must be greater than zero"),
            Self::DeadlineBeforeStart { deadline, start } => write!(
                f,
                "Deadline {} is before the goal start date {}",
                deadline, start
            ),
            Self::NonPositiveDeposit => write!(f, "Deposit amount must be greater than zero"),
        }
    }
}

impl std::error::Error for SavingValidationError {}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_new_goal() {
        let goal = SavingGoal::new(
            "Vacaciones",
            Money::from_units(2_000_000),
            Some(date(2025, 12, 1)),
            date(2025, 3, 1),
        );
        assert!(goal.validate().is_ok());
        assert_eq!(goal.to_string(), "Vacaciones");
    }

    #[test]
    fn test_deadline_before_start_rejected() {
        let goal = SavingGoal::new(
            "Moto",
            Money::from_units(5_000_000),
            Some(date(2025, 1, 1)),
            date(2025, 3, 1),
        );
        let err = goal.validate().unwrap_err();
        assert_eq!(err.field(), "deadline");
    }

    #[test]
    fn test_deadline_on_start_date_is_valid() {
        let goal = SavingGoal::new(
            "Regalo",
            Money::from_units(100_000),
            Some(date(2025, 3, 1)),
            date(2025, 3, 1),
        );
        assert!(goal.validate().is_ok());
    }

    #[test]
    fn test_goal_without_deadline() {
        let goal = SavingGoal::new("Fondo", Money::from_units(1), None, date(2025, 3, 1));
        assert!(goal.validate().is_ok());
    }

    #[test]
    fn test_deposit_validation() {
        let goal_id = SavingGoalId::new();
        assert!(SavingDeposit::new(goal_id, date(2025, 3, 2), Money::from_units(10))
            .validate()
            .is_ok());
        let err = SavingDeposit::new(goal_id, date(2025, 3, 2), Money::zero())
            .validate()
            .unwrap_err();
        assert_eq!(err, SavingValidationError::NonPositiveDeposit);
        assert_eq!(err.field(), "amount");
    }
}
