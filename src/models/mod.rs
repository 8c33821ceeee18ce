//! Core data models for budget-pacer
//!
//! Ledger facts recorded by the user: categories with monthly targets,
//! income entries, saving goals and their deposits.

pub mod category;
pub mod ids;
pub mod income;
pub mod money;
pub mod saving;

pub use category::{Category, CategoryValidationError};
pub use ids::{CategoryId, DepositId, IncomeId, SavingGoalId};
pub use income::{IncomeEntry, IncomeValidationError};
pub use money::{Money, MoneyParseError};
pub use saving::{SavingDeposit, SavingGoal, SavingValidationError};
