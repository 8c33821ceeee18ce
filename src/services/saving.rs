//! Saving goal service
//!
//! Goals are opened on a given day and receive deposits. After each deposit
//! the goal's status is recomputed so the caller can show the new pace.

use chrono::NaiveDate;
use tracing::info;

use crate::audit::EntityType;
use crate::error::{PacerError, PacerResult};
use crate::models::{Money, SavingDeposit, SavingGoal, SavingGoalId};
use crate::projection::{GoalProgress, ProjectionEngine, SavingGoalStatus};
use crate::storage::Storage;

/// Changes to apply to a goal; `None` leaves a field as is
#[derive(Debug, Clone, Default)]
pub struct GoalUpdate<'s> {
    pub name: Option<&'s str>,
    pub target_amount: Option<Money>,
    /// `Some(None)` clears the deadline
    pub deadline: Option<Option<NaiveDate>>,
}

pub struct SavingService<'a> {
    storage: &'a Storage,
}

impl<'a> SavingService<'a> {
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    /// Open a goal on `start_date`
    pub fn create_goal(
        &self,
        name: &str,
        target_amount: Money,
        deadline: Option<NaiveDate>,
        start_date: NaiveDate,
    ) -> PacerResult<SavingGoal> {
        let name = name.trim();
        self.ensure_name_free(name, None)?;

        let goal = SavingGoal::new(name, target_amount, deadline, start_date);
        goal.validate()
            .map_err(|e| PacerError::validation(e.field(), e.to_string()))?;

        self.storage.savings.upsert_goal(goal.clone())?;
        self.storage.savings.save()?;

        self.storage.log_create(
            EntityType::SavingGoal,
            goal.id.to_string(),
            Some(goal.name.clone()),
            &goal,
        )?;

        info!(goal = %goal.name, target = %goal.target_amount, "saving goal created");
        Ok(goal)
    }

    pub fn update_goal(&self, id: SavingGoalId, update: GoalUpdate<'_>) -> PacerResult<SavingGoal> {
        let mut goal = self
            .storage
            .savings
            .get_goal(id)?
            .ok_or_else(|| PacerError::goal_not_found(id.to_string()))?;
        let before = goal.clone();

        if let Some(name) = update.name {
            let name = name.trim();
            self.ensure_name_free(name, Some(id))?;
            goal.set_name(name);
        }
        if let Some(target) = update.target_amount {
            goal.set_target_amount(target);
        }
        if let Some(deadline) = update.deadline {
            goal.set_deadline(deadline);
        }

        goal.validate()
            .map_err(|e| PacerError::validation(e.field(), e.to_string()))?;

        let unchanged = goal.name == before.name
            && goal.target_amount == before.target_amount
            && goal.deadline == before.deadline;
        if unchanged {
            return Ok(before);
        }

        self.storage.savings.upsert_goal(goal.clone())?;
        self.storage.savings.save()?;

        self.storage.log_update(
            EntityType::SavingGoal,
            goal.id.to_string(),
            Some(goal.name.clone()),
            &before,
            &goal,
        )?;

        info!(goal = %goal.name, "saving goal updated");
        Ok(goal)
    }

    /// Delete a goal together with its deposits
    pub fn delete_goal(&self, id: SavingGoalId) -> PacerResult<(SavingGoal, usize)> {
        let (goal, deposits) = self
            .storage
            .savings
            .delete_goal(id)?
            .ok_or_else(|| PacerError::goal_not_found(id.to_string()))?;
        self.storage.savings.save()?;

        self.storage.log_delete(
            EntityType::SavingGoal,
            goal.id.to_string(),
            Some(goal.name.clone()),
            &goal,
        )?;

        info!(goal = %goal.name, deposits, "saving goal deleted");
        Ok((goal, deposits))
    }

    /// Record a deposit and return the goal's status as of `today`
    pub fn add_deposit(
        &self,
        goal_id: SavingGoalId,
        amount: Money,
        date: NaiveDate,
        engine: &ProjectionEngine,
        today: NaiveDate,
    ) -> PacerResult<(SavingDeposit, SavingGoalStatus)> {
        let goal = self
            .storage
            .savings
            .get_goal(goal_id)?
            .ok_or_else(|| PacerError::goal_not_found(goal_id.to_string()))?;

        let deposit = SavingDeposit::new(goal.id, date, amount);
        deposit
            .validate()
            .map_err(|e| PacerError::validation(e.field(), e.to_string()))?;

        self.storage.savings.insert_deposit(deposit.clone())?;
        self.storage.savings.save()?;

        self.storage.log_create(
            EntityType::SavingDeposit,
            deposit.id.to_string(),
            Some(format!("{} to {}", deposit.amount, goal.name)),
            &deposit,
        )?;

        let accumulated = self.storage.savings.total_for_goal(goal.id)?;
        let status = engine.saving_goal_status(&goal, accumulated, today);

        info!(goal = %goal.name, amount = %deposit.amount, accumulated = %accumulated, "deposit recorded");
        Ok((deposit, status))
    }

    /// Find by name, full id, or short id (`goal-1a2b3c4d`)
    pub fn find_goal(&self, identifier: &str) -> PacerResult<Option<SavingGoal>> {
        if let Some(goal) = self.storage.savings.get_goal_by_name(identifier)? {
            return Ok(Some(goal));
        }

        if let Ok(id) = identifier.parse::<SavingGoalId>() {
            return self.storage.savings.get_goal(id);
        }

        Ok(self
            .storage
            .savings
            .get_all_goals()?
            .into_iter()
            .find(|g| g.id.matches_short(identifier)))
    }

    pub fn resolve_goal(&self, identifier: &str) -> PacerResult<SavingGoal> {
        self.find_goal(identifier)?
            .ok_or_else(|| PacerError::goal_not_found(identifier))
    }

    pub fn deposits(&self, goal_id: SavingGoalId) -> PacerResult<Vec<SavingDeposit>> {
        self.storage.savings.deposits_for_goal(goal_id)
    }

    /// Every goal with its accumulated amount, oldest goal first
    pub fn list_with_totals(&self) -> PacerResult<Vec<GoalProgress>> {
        self.storage
            .savings
            .get_all_goals()?
            .into_iter()
            .map(|goal| {
                let accumulated = self.storage.savings.total_for_goal(goal.id)?;
                Ok(GoalProgress { goal, accumulated })
            })
            .collect()
    }

    fn ensure_name_free(&self, name: &str, owner: Option<SavingGoalId>) -> PacerResult<()> {
        match self.storage.savings.get_goal_by_name(name)? {
            Some(existing) if Some(existing.id) != owner => Err(PacerError::Duplicate {
                entity_type: "Saving goal",
                identifier: name.to_string(),
            }),
            _ => Ok(()),
        }
    }
}
