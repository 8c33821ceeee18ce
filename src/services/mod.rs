//! Service layer for budget-pacer
//!
//! Write-path validation and audit on top of the storage layer, plus the
//! dashboard assembly that feeds the projection engine.

pub mod attribution;
pub mod category;
pub mod dashboard;
pub mod income;
pub mod quote;
pub mod saving;

pub use attribution::{ProportionalIncomeAttribution, RealAmountAttribution};
pub use category::CategoryService;
pub use dashboard::{DashboardService, DashboardState};
pub use income::IncomeService;
pub use quote::{daily_quote, Quote};
pub use saving::{GoalUpdate, SavingService};
