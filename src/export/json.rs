//! JSON export of the dashboard state

use serde::Serialize;
use std::io::Write;

use crate::error::{PacerError, PacerResult};
use crate::services::DashboardState;

/// The dashboard state as the client expects it: `ok` plus the state fields
#[derive(Debug, Serialize)]
pub struct StateEnvelope<'a> {
    pub ok: bool,
    #[serde(flatten)]
    pub state: &'a DashboardState,
}

impl<'a> StateEnvelope<'a> {
    pub fn new(state: &'a DashboardState) -> Self {
        Self { ok: true, state }
    }
}

/// Write the state as pretty JSON followed by a newline
pub fn export_state_json<W: Write>(state: &DashboardState, writer: &mut W) -> PacerResult<()> {
    serde_json::to_writer_pretty(&mut *writer, &StateEnvelope::new(state))
        .map_err(|e| PacerError::Export(e.to_string()))?;
    writeln!(writer).map_err(|e| PacerError::Export(e.to_string()))?;
    Ok(())
}
