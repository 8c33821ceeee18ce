use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing::debug;

use budget_pacer::cli::{
    handle_category_command, handle_dashboard_command, handle_export_command,
    handle_income_command, handle_saving_command, CategoryCommands, DashboardArgs, ExportArgs,
    IncomeCommands, SavingCommands,
};
use budget_pacer::config::{PacerPaths, Settings};
use budget_pacer::display::format_history;
use budget_pacer::logging::init_tracing;
use budget_pacer::storage::Storage;

#[derive(Parser)]
#[command(
    name = "pacer",
    version,
    about = "Budget projection and pacing from the terminal",
    long_about = "pacer tracks the month's income against a goal, shows whether each \
                  spending category is keeping pace with the calendar, and tells each \
                  saving goal how much it still needs per day."
)]
struct Cli {
    /// Print debug diagnostics to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Write the default configuration and empty ledger files
    Init,

    /// Show current configuration and paths
    Config,

    /// Show recent changes from the audit log
    History {
        /// Number of entries to show
        #[arg(short, long, default_value = "20")]
        limit: usize,
    },

    /// Category management commands
    #[command(subcommand)]
    Category(CategoryCommands),

    /// Income commands
    #[command(subcommand)]
    Income(IncomeCommands),

    /// Saving goal commands
    #[command(subcommand)]
    Saving(SavingCommands),

    /// Month pacing, category status and saving goals
    #[command(alias = "dash")]
    Dashboard(DashboardArgs),

    /// Export the dashboard state
    Export(ExportArgs),
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let paths = PacerPaths::new()?;
    let settings = Settings::load_or_create(&paths)?;
    debug!(base_dir = %paths.base_dir().display(), "paths resolved");

    let storage = Storage::new(paths.clone())?;
    storage.load_all()?;

    match cli.command {
        Some(Commands::Init) => {
            println!("Initializing budget-pacer at: {}", paths.base_dir().display());
            settings.save(&paths)?;
            storage.save_all()?;
            println!("Initialization complete!");
            println!();
            println!("Next steps:");
            println!("  pacer category add <name> <monthly target>");
            println!("  pacer income add <amount>");
            println!("  pacer dashboard");
        }
        Some(Commands::Config) => {
            println!("budget-pacer Configuration");
            println!("==========================");
            println!("Base directory: {}", paths.base_dir().display());
            println!("Data directory: {}", paths.data_dir().display());
            println!("Settings file:  {}", paths.settings_file().display());
            println!("Audit log:      {}", paths.audit_log().display());
            if !paths.is_initialized() {
                println!("(not initialized; showing defaults, run 'pacer init' to save them)");
            }
            println!();
            println!("Settings:");
            println!("{}", serde_json::to_string_pretty(&settings)?);
        }
        Some(Commands::History { limit }) => {
            let entries = storage.audit().read_recent(limit)?;
            println!("{}", format_history(&entries));
        }
        Some(Commands::Category(cmd)) => handle_category_command(&storage, &settings, cmd)?,
        Some(Commands::Income(cmd)) => handle_income_command(&storage, &settings, cmd)?,
        Some(Commands::Saving(cmd)) => handle_saving_command(&storage, &settings, cmd)?,
        Some(Commands::Dashboard(args)) => handle_dashboard_command(&storage, &settings, args)?,
        Some(Commands::Export(args)) => handle_export_command(&storage, &settings, args)?,
        None => {
            println!("pacer - budget projection and pacing");
            println!();
            println!("Run 'pacer --help' for usage information.");
            println!("Run 'pacer dashboard' to see how the month is going.");
        }
    }

    Ok(())
}
