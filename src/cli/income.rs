//! Income CLI commands
//!
//! Income is recorded as dated entries. The month summary sums the entries
//! that fall in the month being projected.

use clap::Subcommand;

use super::{parse_amount, parse_date_or, parse_month_or, resolve_today};
use crate::config::Settings;
use crate::display::format_income_list;
use crate::error::{PacerError, PacerResult};
use crate::services::IncomeService;
use crate::storage::Storage;

/// Income subcommands
#[derive(Subcommand)]
pub enum IncomeCommands {
    /// Record income received
    Add {
        /// Amount received (e.g., "250000" or "250000.50")
        amount: String,

        /// Date received, YYYY-MM-DD (defaults to today)
        #[arg(short, long)]
        date: Option<String>,

        /// Notes about this entry
        #[arg(short, long)]
        notes: Option<String>,
    },

    /// List income for a month
    List {
        /// Month, YYYY-MM (defaults to the current month)
        #[arg(short, long)]
        month: Option<String>,
    },

    /// Delete an income entry
    Delete {
        /// Entry ID (full or short form)
        id: String,
    },
}

/// Handle an income command
pub fn handle_income_command(
    storage: &Storage,
    settings: &Settings,
    cmd: IncomeCommands,
) -> PacerResult<()> {
    let service = IncomeService::new(storage);
    let symbol = settings.currency_symbol.as_str();

    match cmd {
        IncomeCommands::Add {
            amount,
            date,
            notes,
        } => {
            let amount = parse_amount(&amount)?;
            let date = parse_date_or(date.as_deref(), resolve_today(None)?)?;

            let entry = service.record(date, amount, notes)?;
            println!(
                "Recorded {} on {}",
                entry.amount.format_with_symbol(symbol),
                entry.date
            );
            println!("  ID: {}", entry.id);
        }

        IncomeCommands::List { month } => {
            let month = parse_month_or(month.as_deref(), resolve_today(None)?)?;
            let entries = service.list_for_month(month)?;

            println!("Income for {}", month);
            println!("{}", format_income_list(&entries, symbol));
        }

        IncomeCommands::Delete { id } => {
            let entry = service
                .find(&id)?
                .ok_or_else(|| PacerError::income_not_found(&id))?;
            let removed = service.delete(entry.id)?;
            println!(
                "Deleted income of {} on {}",
                removed.amount.format_with_symbol(symbol),
                removed.date
            );
        }
    }

    Ok(())
}
