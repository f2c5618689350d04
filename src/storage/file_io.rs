//! File I/O utilities with atomic writes
//!
//! JSON is written with 4-space indentation to a temp file and renamed into
//! place, so a crash mid-write leaves the previous file intact.

use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::Path;

use serde::{de::DeserializeOwned, Serialize};
use serde_json::ser::PrettyFormatter;

use crate::error::TrackerError;

/// What was found when reading a JSON file
#[derive(Debug)]
pub enum JsonFile<T> {
    /// The file does not exist
    Missing,
    /// The file parsed into the requested type
    Parsed(T),
    /// The file exists but is not valid JSON for the requested type
    Corrupt(String),
}

/// Read and parse a JSON file, classifying missing and corrupt files
///
/// Only I/O failures other than "not found" are errors.
pub fn read_json<T, P>(path: P) -> Result<JsonFile<T>, TrackerError>
where
    T: DeserializeOwned,
    P: AsRef<Path>,
{
    let path = path.as_ref();

    if !path.exists() {
        return Ok(JsonFile::Missing);
    }

    let bytes = fs::read(path)
        .map_err(|e| TrackerError::Storage(format!("Failed to read {}: {}", path.display(), e)))?;

    match serde_json::from_slice(&bytes) {
        Ok(value) => Ok(JsonFile::Parsed(value)),
        Err(e) => Ok(JsonFile::Corrupt(e.to_string())),
    }
}

/// Write JSON to a file atomically (write to temp, then rename)
pub fn write_json_atomic<T, P>(path: P, data: &T) -> Result<(), TrackerError>
where
    T: Serialize,
    P: AsRef<Path>,
{
    let path = path.as_ref();

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|e| {
            TrackerError::Storage(format!(
                "Failed to create directory {}: {}",
                parent.display(),
                e
            ))
        })?;
    }

    // Same directory as the target so the rename stays on one filesystem
    let temp_path = path.with_extension("json.tmp");

    let file = File::create(&temp_path)
        .map_err(|e| TrackerError::Storage(format!("Failed to create temp file: {}", e)))?;

    let mut writer = BufWriter::new(file);
    let mut serializer =
        serde_json::Serializer::with_formatter(&mut writer, PrettyFormatter::with_indent(b"    "));
    data.serialize(&mut serializer)
        .map_err(|e| TrackerError::Storage(format!("Failed to serialize data: {}", e)))?;

    writer
        .flush()
        .map_err(|e| TrackerError::Storage(format!("Failed to flush data: {}", e)))?;

    writer
        .get_ref()
        .sync_all()
        .map_err(|e| TrackerError::Storage(format!("Failed to sync data: {}", e)))?;

    fs::rename(&temp_path, path).map_err(|e| {
        let _ = fs::remove_file(&temp_path);
        TrackerError::Storage(format!("Failed to rename temp file: {}", e))
    })?;

    Ok(())
}
