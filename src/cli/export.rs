//! Export command: write the dashboard state to a file or stdout

use clap::{Args, ValueEnum};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use super::{parse_month_or, resolve_today};
use crate::config::Settings;
use crate::error::{PacerError, PacerResult};
use crate::export::{export_state_csv, export_state_json, export_state_yaml};
use crate::services::{DashboardService, DashboardState};
use crate::storage::Storage;

/// Export format options
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum ExportFormat {
    /// The state document the client consumes
    Json,
    /// The same document, human-readable
    Yaml,
    /// One row per category and saving goal
    Csv,
}

#[derive(Debug, Args)]
pub struct ExportArgs {
    /// Export format
    #[arg(value_enum)]
    pub format: ExportFormat,

    /// Output file path (defaults to stdout)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Month to project, YYYY-MM
    #[arg(short, long)]
    pub month: Option<String>,

    /// Evaluate as of this date, YYYY-MM-DD
    #[arg(long)]
    pub today: Option<String>,
}

/// Handle the export command
pub fn handle_export_command(
    storage: &Storage,
    settings: &Settings,
    args: ExportArgs,
) -> PacerResult<()> {
    let today = resolve_today(args.today.as_deref())?;
    let month = parse_month_or(args.month.as_deref(), today)?;
    let state = DashboardService::new(storage, settings).build(month, today)?;

    match &args.output {
        Some(path) => {
            let file = File::create(path).map_err(|e| {
                PacerError::Export(format!("Failed to create file {}: {}", path.display(), e))
            })?;
            let mut writer = BufWriter::new(file);
            write_state(&state, args.format, &mut writer)?;
            writer
                .flush()
                .map_err(|e| PacerError::Export(format!("{}: {}", path.display(), e)))?;
            report_written(&state, args.format, path);
        }
        None => {
            let stdout = std::io::stdout();
            write_state(&state, args.format, &mut stdout.lock())?;
        }
    }

    Ok(())
}

fn write_state<W: Write>(
    state: &DashboardState,
    format: ExportFormat,
    writer: &mut W,
) -> PacerResult<()> {
    match format {
        ExportFormat::Json => export_state_json(state, writer),
        ExportFormat::Yaml => export_state_yaml(state, writer),
        ExportFormat::Csv => export_state_csv(state, writer),
    }
}

fn report_written(state: &DashboardState, format: ExportFormat, path: &Path) {
    match format {
        ExportFormat::Csv => println!(
            "Exported {} categories and {} saving goals to: {}",
            state.categories.len(),
            state.saving.len(),
            path.display()
        ),
        _ => println!("Dashboard for {} exported to: {}", state.month, path.display()),
    }
}
