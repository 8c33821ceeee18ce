//! Dashboard command: the month summary, category status and saving goals

use clap::{Args, ValueEnum};
use std::io::Write;
use tracing::debug;

use super::{parse_month_or, resolve_today};
use crate::config::Settings;
use crate::display::format_dashboard;
use crate::error::PacerResult;
use crate::export::{export_state_json, export_state_yaml};
use crate::services::DashboardService;
use crate::storage::Storage;

/// How to print the dashboard
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
pub enum OutputFormat {
    /// Tables for the terminal
    #[default]
    Text,
    /// The state document as JSON
    Json,
    /// The state document as YAML
    Yaml,
}

#[derive(Debug, Args)]
pub struct DashboardArgs {
    /// Month to project, YYYY-MM (defaults to the month of --today)
    #[arg(short, long)]
    pub month: Option<String>,

    /// Evaluate as of this date, YYYY-MM-DD (defaults to the local date)
    #[arg(long)]
    pub today: Option<String>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "text")]
    pub format: OutputFormat,
}

/// Handle the dashboard command
pub fn handle_dashboard_command(
    storage: &Storage,
    settings: &Settings,
    args: DashboardArgs,
) -> PacerResult<()> {
    let today = resolve_today(args.today.as_deref())?;
    let month = parse_month_or(args.month.as_deref(), today)?;
    debug!(%month, %today, format = ?args.format, "building dashboard");

    let state = DashboardService::new(storage, settings).build(month, today)?;

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    match args.format {
        OutputFormat::Text => {
            writeln!(out, "{}", format_dashboard(&state, &settings.currency_symbol))?;
        }
        OutputFormat::Json => export_state_json(&state, &mut out)?,
        OutputFormat::Yaml => export_state_yaml(&state, &mut out)?,
    }

    Ok(())
}
