//! Category CLI commands

use clap::Subcommand;

use super::parse_amount;
use crate::config::Settings;
use crate::display::format_category_list;
use crate::error::PacerResult;
use crate::services::CategoryService;
use crate::storage::Storage;

/// Category subcommands
#[derive(Subcommand)]
pub enum CategoryCommands {
    /// List categories with their monthly targets
    List,

    /// Create a category
    Add {
        /// Category name
        name: String,

        /// Monthly target (e.g., "1000000" or "1500.50")
        target: String,
    },

    /// Rename a category or change its monthly target
    Edit {
        /// Category name or ID
        category: String,

        /// New name
        #[arg(short, long)]
        name: Option<String>,

        /// New monthly target
        #[arg(short, long)]
        target: Option<String>,
    },

    /// Delete a category
    Delete {
        /// Category name or ID
        category: String,
    },
}

/// Handle a category command
pub fn handle_category_command(
    storage: &Storage,
    settings: &Settings,
    cmd: CategoryCommands,
) -> PacerResult<()> {
    let service = CategoryService::new(storage);
    let symbol = settings.currency_symbol.as_str();

    match cmd {
        CategoryCommands::List => {
            let categories = service.list()?;
            println!("{}", format_category_list(&categories, symbol));
        }

        CategoryCommands::Add { name, target } => {
            let target = parse_amount(&target)?;
            let category = service.create(&name, target)?;
            println!(
                "Created category '{}' with monthly target {}",
                category.name,
                category.monthly_target.format_with_symbol(symbol)
            );
            println!("  ID: {}", category.id);
        }

        CategoryCommands::Edit {
            category,
            name,
            target,
        } => {
            let existing = service.resolve(&category)?;
            if name.is_none() && target.is_none() {
                println!("Nothing to change. Use --name or --target.");
                return Ok(());
            }

            let target = target.as_deref().map(parse_amount).transpose()?;
            let updated = service.update(existing.id, name.as_deref(), target)?;
            println!(
                "Updated category '{}' (monthly target {})",
                updated.name,
                updated.monthly_target.format_with_symbol(symbol)
            );
        }

        CategoryCommands::Delete { category } => {
            let existing = service.resolve(&category)?;
            let removed = service.delete(existing.id)?;
            println!("Deleted category '{}'", removed.name);
        }
    }

    Ok(())
}
