//! Dashboard state export
//!
//! - JSON: the state object the client consumes, with `"ok": true`
//! - YAML: the same document, for reading
//! - CSV: one row per category and per saving goal (spreadsheet-friendly)

pub mod csv;
pub mod json;
pub mod yaml;

pub use self::csv::export_state_csv;
pub use json::{export_state_json, StateEnvelope};
pub use yaml::export_state_yaml;
