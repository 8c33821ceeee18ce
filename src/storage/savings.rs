//! Saving goal and deposit repository
//!
//! Goals and their deposits share `savings.json`. Deleting a goal removes
//! its deposits in the same write.

use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::RwLock;

use serde::{Deserialize, Serialize};

use crate::error::PacerResult;
use crate::models::{DepositId, Money, SavingDeposit, SavingGoal, SavingGoalId};

use super::file_io::{read_json, write_json_atomic};
use super::{read_guard, write_guard};

#[derive(Debug, Default, Serialize, Deserialize)]
struct SavingsData {
    #[serde(default)]
    goals: Vec<SavingGoal>,
    #[serde(default)]
    deposits: Vec<SavingDeposit>,
}

#[derive(Default)]
struct SavingsState {
    goals: HashMap<SavingGoalId, SavingGoal>,
    deposits: HashMap<DepositId, SavingDeposit>,
}

/// Saving goals and deposits, persisted to `savings.json`
pub struct SavingRepository {
    path: PathBuf,
    state: RwLock<SavingsState>,
}

impl SavingRepository {
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            state: RwLock::new(SavingsState::default()),
        }
    }

    pub fn load(&self) -> PacerResult<()> {
        let data: SavingsData = read_json(&self.path)?;

        let mut state = write_guard(&self.state)?;
        state.goals = data.goals.into_iter().map(|g| (g.id, g)).collect();
        state.deposits = data.deposits.into_iter().map(|d| (d.id, d)).collect();
        Ok(())
    }

    pub fn save(&self) -> PacerResult<()> {
        let data = {
            let state = read_guard(&self.state)?;
            let mut deposits: Vec<_> = state.deposits.values().cloned().collect();
            deposits.sort_by(|a, b| a.date.cmp(&b.date).then(a.created_at.cmp(&b.created_at)));
            SavingsData {
                goals: sorted_goals(state.goals.values().cloned().collect()),
                deposits,
            }
        };
        write_json_atomic(&self.path, &data)
    }

    pub fn get_goal(&self, id: SavingGoalId) -> PacerResult<Option<SavingGoal>> {
        Ok(read_guard(&self.state)?.goals.get(&id).cloned())
    }

    /// Case-insensitive lookup on the trimmed name
    pub fn get_goal_by_name(&self, name: &str) -> PacerResult<Option<SavingGoal>> {
        let wanted = name.trim().to_lowercase();
        Ok(read_guard(&self.state)?
            .goals
            .values()
            .find(|g| g.name.to_lowercase() == wanted)
            .cloned())
    }

    /// All goals, oldest first
    pub fn get_all_goals(&self) -> PacerResult<Vec<SavingGoal>> {
        let goals = read_guard(&self.state)?.goals.values().cloned().collect();
        Ok(sorted_goals(goals))
    }

    pub fn upsert_goal(&self, goal: SavingGoal) -> PacerResult<()> {
        write_guard(&self.state)?.goals.insert(goal.id, goal);
        Ok(())
    }

    /// Remove a goal and every deposit made toward it
    ///
    /// Returns the removed goal and how many deposits went with it.
    pub fn delete_goal(&self, id: SavingGoalId) -> PacerResult<Option<(SavingGoal, usize)>> {
        let mut state = write_guard(&self.state)?;
        let Some(goal) = state.goals.remove(&id) else {
            return Ok(None);
        };

        let before = state.deposits.len();
        state.deposits.retain(|_, d| d.goal_id != id);
        let removed = before - state.deposits.len();

        Ok(Some((goal, removed)))
    }

    pub fn insert_deposit(&self, deposit: SavingDeposit) -> PacerResult<()> {
        write_guard(&self.state)?.deposits.insert(deposit.id, deposit);
        Ok(())
    }

    /// Deposits toward one goal, oldest first
    pub fn deposits_for_goal(&self, goal_id: SavingGoalId) -> PacerResult<Vec<SavingDeposit>> {
        let mut list: Vec<_> = read_guard(&self.state)?
            .deposits
            .values()
            .filter(|d| d.goal_id == goal_id)
            .cloned()
            .collect();
        list.sort_by(|a, b| a.date.cmp(&b.date).then(a.created_at.cmp(&b.created_at)));
        Ok(list)
    }

    /// Accumulated amount of a goal: the sum of its deposits
    pub fn total_for_goal(&self, goal_id: SavingGoalId) -> PacerResult<Money> {
        Ok(read_guard(&self.state)?
            .deposits
            .values()
            .filter(|d| d.goal_id == goal_id)
            .map(|d| d.amount)
            .sum())
    }
}

fn sorted_goals(mut goals: Vec<SavingGoal>) -> Vec<SavingGoal> {
    goals.sort_by(|a, b| a.created_at.cmp(&b.created_at).then(a.id.cmp(&b.id)));
    goals
}
