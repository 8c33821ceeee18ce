//! Terminal output formatting
//!
//! Every function returns a `String`; the CLI decides where it goes.

pub mod dashboard;
pub mod ledger;

pub use dashboard::{format_dashboard, format_goal_status};
pub use ledger::{format_category_list, format_goal_list, format_history, format_income_list};

use tabled::settings::Style;
use tabled::{Table, Tabled};

/// Render rows with the shared table style
fn table<T: Tabled>(rows: impl IntoIterator<Item = T>) -> String {
    Table::new(rows).with(Style::rounded()).to_string()
}

fn percent(value: f64) -> String {
    format!("{:.1}%", value)
}
