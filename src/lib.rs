//! budget-pacer - Budget projection and pacing engine
//!
//! Tracks monthly income against a goal, estimates how each spending
//! category is doing for the share of the month already gone, and tells
//! saving goals how much they still need per day.
//!
//! # Architecture
//!
//! - `calendar`: month and working-day arithmetic
//! - `projection`: the pure projection engine (month summary, category
//!   status, saving goal status)
//! - `models`: ledger facts (categories, income entries, goals, deposits)
//! - `storage`: JSON file repositories
//! - `services`: write-path validation and dashboard state assembly
//! - `audit`: append-only change log
//! - `config`: paths and settings
//! - `export` / `display`: state output for clients and the terminal
//! - `cli`: command handlers for the `pacer` binary
//!
//! # Example
//!
//! ```rust
//! use budget_pacer::calendar::MonthRef;
//! use budget_pacer::models::{IncomeEntry, Money};
//! use budget_pacer::projection::ProjectionEngine;
//! use chrono::NaiveDate;
//!
//! let engine = ProjectionEngine::default();
//! let month = MonthRef::new(2025, 1).unwrap();
//! let today = NaiveDate::from_ymd_opt(2025, 1, 15).unwrap();
//! let incomes = [IncomeEntry::new(today, Money::from_units(500_000))];
//!
//! let summary = engine
//!     .month_summary(month, Money::from_units(2_300_000), &incomes, today)
//!     .unwrap();
//! assert_eq!(summary.working_days, 23);
//! ```

pub mod audit;
pub mod calendar;
pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod export;
pub mod logging;
pub mod models;
pub mod projection;
pub mod services;
pub mod storage;

pub use error::{PacerError, PacerResult};
