//! JSON file I/O with atomic writes
//!
//! A write either replaces the whole file or leaves the previous version in
//! place: data goes to a sibling temp file, is synced, then renamed over the
//! target.

use std::fs::{self, File};
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;

use serde::{de::DeserializeOwned, Serialize};

use crate::error::{PacerError, PacerResult};

/// Read JSON from `path`, or `T::default()` when the file doesn't exist yet
pub fn read_json<T, P>(path: P) -> PacerResult<T>
where
    T: DeserializeOwned + Default,
    P: AsRef<Path>,
{
    let path = path.as_ref();
    if !path.exists() {
        return Ok(T::default());
    }

    let file = File::open(path)
        .map_err(|e| PacerError::Storage(format!("Failed to open {}: {}", path.display(), e)))?;

    serde_json::from_reader(BufReader::new(file))
        .map_err(|e| PacerError::Storage(format!("Failed to parse {}: {}", path.display(), e)))
}

/// Write pretty JSON to `path` atomically, creating parent directories
pub fn write_json_atomic<T, P>(path: P, data: &T) -> PacerResult<()>
where
    T: Serialize,
    P: AsRef<Path>,
{
    let path = path.as_ref();

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|e| {
            PacerError::Storage(format!(
                "Failed to create directory {}: {}",
                parent.display(),
                e
            ))
        })?;
    }

    // Same directory as the target so the rename stays on one filesystem
    let temp_path = path.with_extension("json.tmp");

    let result = write_synced(&temp_path, data).and_then(|_| {
        fs::rename(&temp_path, path)
            .map_err(|e| PacerError::Storage(format!("Failed to replace {}: {}", path.display(), e)))
    });

    if result.is_err() {
        let _ = fs::remove_file(&temp_path);
    }
    result
}

fn write_synced<T: Serialize>(path: &Path, data: &T) -> PacerResult<()> {
    let file = File::create(path)
        .map_err(|e| PacerError::Storage(format!("Failed to create temp file: {}", e)))?;

    let mut writer = BufWriter::new(file);
    serde_json::to_writer_pretty(&mut writer, data)
        .map_err(|e| PacerError::Storage(format!("Failed to serialize data: {}", e)))?;
    writer
        .flush()
        .map_err(|e| PacerError::Storage(format!("Failed to flush data: {}", e)))?;
    writer
        .get_ref()
        .sync_all()
        .map_err(|e| PacerError::Storage(format!("Failed to sync data: {}", e)))
}
