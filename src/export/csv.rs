//! CSV export: categories and saving goals as rows

use serde::Serialize;
use std::io::Write;

use crate::error::{PacerError, PacerResult};
use crate::services::DashboardState;

#[derive(Debug, Serialize)]
struct StatusRow<'a> {
    kind: &'static str,
    name: &'a str,
    target: String,
    actual: String,
    percent: String,
    expected_percent: String,
    status: &'a str,
    suggested_daily: String,
    days_remaining: Option<i64>,
}

fn amount(value: f64) -> String {
    format!("{:.2}", value)
}

fn percent(value: f64) -> String {
    format!("{:.1}", value)
}

/// One `category` row per category, then one `saving_goal` row per goal
pub fn export_state_csv<W: Write>(state: &DashboardState, writer: W) -> PacerResult<()> {
    let mut csv = csv::Writer::from_writer(writer);

    for c in &state.categories {
        csv.serialize(StatusRow {
            kind: "category",
            name: &c.name,
            target: amount(c.monthly_target),
            actual: amount(c.real_amount),
            percent: percent(c.percent),
            expected_percent: percent(c.expected_percent),
            status: c.status.label(),
            suggested_daily: amount(c.suggested_daily),
            days_remaining: None,
        })
        .map_err(|e| PacerError::Export(e.to_string()))?;
    }

    for g in &state.saving {
        csv.serialize(StatusRow {
            kind: "saving_goal",
            name: &g.name,
            target: amount(g.target),
            actual: amount(g.accumulated),
            percent: percent(g.percent),
            expected_percent: String::new(),
            status: g.pace.label(),
            suggested_daily: amount(g.suggested_daily),
            days_remaining: g.days_remaining,
        })
        .map_err(|e| PacerError::Export(e.to_string()))?;
    }

    csv.flush().map_err(|e| PacerError::Export(e.to_string()))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::export::tests::sample_state;

    #[test]
    fn test_rows() {
        let state = sample_state();
        let mut out = Vec::new();
        export_state_csv(&state, &mut out).unwrap();

        let mut reader = csv::Reader::from_reader(out.as_slice());
        let headers = reader.headers().unwrap().clone();
        assert_eq!(&headers[0], "kind");
        assert_eq!(&headers[8], "days_remaining");

        let rows: Vec<csv::StringRecord> = reader.records().map(|r| r.unwrap()).collect();
        assert_eq!(rows.len(), 2);

        assert_eq!(&rows[0][0], "category");
        assert_eq!(&rows[0][1], "Arriendo");
        assert_eq!(&rows[0][2], "1000000.00");
        assert_eq!(&rows[0][6], "muy por debajo");
        assert_eq!(&rows[0][8], "");

        assert_eq!(&rows[1][0], "saving_goal");
        assert_eq!(&rows[1][6], "atrasado");
        assert_eq!(&rows[1][8], "10");
    }

    #[test]
    fn test_names_with_commas_are_quoted() {
        let mut state = sample_state();
        state.categories[0].name = "Luz, agua".to_string();
        let mut out = Vec::new();
        export_state_csv(&state, &mut out).unwrap();

        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("\"Luz, agua\""));
    }
}
