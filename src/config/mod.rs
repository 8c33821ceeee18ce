//! Configuration module for budget-pacer
//!
//! This module provides configuration management including:
//! - XDG-compliant path resolution
//! - User settings persistence (income goal source, pacing thresholds,
//!   work week and holidays)

pub mod paths;
pub mod settings;

pub use paths::PacerPaths;
pub use settings::{IncomeGoalSource, Settings};
