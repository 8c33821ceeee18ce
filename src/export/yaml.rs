//! YAML export of the dashboard state

use std::io::Write;

use super::json::StateEnvelope;
use crate::error::{PacerError, PacerResult};
use crate::services::DashboardState;

pub fn export_state_yaml<W: Write>(state: &DashboardState, writer: &mut W) -> PacerResult<()> {
    writeln!(writer, "# budget-pacer dashboard for {} as of {}", state.month, state.today)
        .map_err(|e| PacerError::Export(e.to_string()))?;

    serde_yaml::to_writer(writer, &StateEnvelope::new(state))
        .map_err(|e| PacerError::Export(e.to_string()))
}
