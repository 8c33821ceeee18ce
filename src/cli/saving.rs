//! Saving goal CLI commands

use clap::Subcommand;

use super::{parse_amount, parse_date_or, resolve_today};
use crate::calendar::parse_date;
use crate::config::Settings;
use crate::display::{format_goal_list, format_goal_status};
use crate::error::PacerResult;
use crate::services::{GoalUpdate, SavingService};
use crate::storage::Storage;

/// Saving subcommands
#[derive(Subcommand)]
pub enum SavingCommands {
    /// List saving goals with the amount saved so far
    List,

    /// Open a saving goal today
    AddGoal {
        /// Goal name
        name: String,

        /// Amount to save
        target: String,

        /// Deadline, YYYY-MM-DD
        #[arg(short, long)]
        deadline: Option<String>,
    },

    /// Change a goal's name, target or deadline
    EditGoal {
        /// Goal name or ID
        goal: String,

        /// New name
        #[arg(short, long)]
        name: Option<String>,

        /// New target amount
        #[arg(short, long)]
        target: Option<String>,

        /// New deadline, YYYY-MM-DD
        #[arg(short, long, conflicts_with = "clear_deadline")]
        deadline: Option<String>,

        /// Remove the deadline
        #[arg(long)]
        clear_deadline: bool,
    },

    /// Delete a goal and its deposits
    DeleteGoal {
        /// Goal name or ID
        goal: String,
    },

    /// Deposit into a goal and show its updated pace
    Deposit {
        /// Goal name or ID
        goal: String,

        /// Amount deposited
        amount: String,

        /// Deposit date, YYYY-MM-DD (defaults to today)
        #[arg(long)]
        date: Option<String>,

        /// Evaluate the goal as of this date instead of the real today
        #[arg(long)]
        today: Option<String>,
    },
}

/// Handle a saving command
pub fn handle_saving_command(
    storage: &Storage,
    settings: &Settings,
    cmd: SavingCommands,
) -> PacerResult<()> {
    let service = SavingService::new(storage);
    let symbol = settings.currency_symbol.as_str();

    match cmd {
        SavingCommands::List => {
            let goals = service.list_with_totals()?;
            println!("{}", format_goal_list(&goals, symbol));
        }

        SavingCommands::AddGoal {
            name,
            target,
            deadline,
        } => {
            let target = parse_amount(&target)?;
            let deadline = deadline.as_deref().map(parse_date).transpose()?;
            let goal = service.create_goal(&name, target, deadline, resolve_today(None)?)?;

            println!(
                "Created saving goal '{}' for {}",
                goal.name,
                goal.target_amount.format_with_symbol(symbol)
            );
            if let Some(deadline) = goal.deadline {
                println!("  Deadline: {}", deadline);
            }
            println!("  ID: {}", goal.id);
        }

        SavingCommands::EditGoal {
            goal,
            name,
            target,
            deadline,
            clear_deadline,
        } => {
            let existing = service.resolve_goal(&goal)?;

            let deadline = if clear_deadline {
                Some(None)
            } else {
                deadline.as_deref().map(parse_date).transpose()?.map(Some)
            };
            let update = GoalUpdate {
                name: name.as_deref(),
                target_amount: target.as_deref().map(parse_amount).transpose()?,
                deadline,
            };

            if update.name.is_none() && update.target_amount.is_none() && update.deadline.is_none()
            {
                println!("Nothing to change. Use --name, --target, --deadline or --clear-deadline.");
                return Ok(());
            }

            let updated = service.update_goal(existing.id, update)?;
            println!("Updated saving goal '{}'", updated.name);
        }

        SavingCommands::DeleteGoal { goal } => {
            let existing = service.resolve_goal(&goal)?;
            let (removed, deposits) = service.delete_goal(existing.id)?;
            println!(
                "Deleted saving goal '{}' and {} deposit(s)",
                removed.name, deposits
            );
        }

        SavingCommands::Deposit {
            goal,
            amount,
            date,
            today,
        } => {
            let goal = service.resolve_goal(&goal)?;
            let amount = parse_amount(&amount)?;
            let today = resolve_today(today.as_deref())?;
            let date = parse_date_or(date.as_deref(), today)?;

            let engine = settings.projection_engine();
            let (deposit, status) = service.add_deposit(goal.id, amount, date, &engine, today)?;

            println!(
                "Deposited {} into '{}' on {}",
                deposit.amount.format_with_symbol(symbol),
                goal.name,
                deposit.date
            );
            println!("{}", format_goal_status(&status, symbol));
        }
    }

    Ok(())
}
